// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::Film;

/// Films offered when no catalog is configured.
pub const DEFAULT_FILMS: [&str; 3] = ["Film 1", "Film 2", "Film 3"];

/// The fixed, ordered list of films a session may choose from.
///
/// Construction does not validate names; `BookingConfig` in the core crate
/// rejects empty or duplicate catalogs before a catalog is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilmCatalog {
    films: Vec<Film>,
}

impl FilmCatalog {
    /// Creates a catalog from display names, preserving order.
    #[must_use]
    pub fn new<S: AsRef<str>>(names: &[S]) -> Self {
        Self {
            films: names.iter().map(|n| Film::new(n.as_ref())).collect(),
        }
    }

    /// Returns the films in catalog order.
    #[must_use]
    pub fn films(&self) -> &[Film] {
        &self.films
    }

    /// Looks up a film by its exact display name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownFilm` if no film has that name.
    pub fn resolve(&self, name: &str) -> Result<Film, DomainError> {
        self.films
            .iter()
            .find(|f| f.name() == name)
            .cloned()
            .ok_or_else(|| DomainError::UnknownFilm(name.to_string()))
    }
}

impl Default for FilmCatalog {
    fn default() -> Self {
        Self::new(&DEFAULT_FILMS)
    }
}
