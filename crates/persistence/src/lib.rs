// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the cinema booking system.
//!
//! This crate stores confirmed reservations in an append-only `SQLite`
//! table. It is built on Diesel and implements the core crate's
//! `ReservationRepository` trait, so the booking flow never sees a
//! database type.
//!
//! ## Storage
//!
//! - One `reservations` table: `id`, `film`, `seats`, `customer_name`
//! - `seats` holds the flat comma-joined seat labels (`"1,1,3,4"`)
//! - Rows are only ever inserted; the flow never reads them back
//!
//! ## Testing Philosophy
//!
//! - Every test gets its own shared-cache in-memory database
//! - File-backed databases are exercised through temporary paths
//! - No external infrastructure is required

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use cinema_booking::ReservationRepository;
use cinema_booking_domain::{Reservation, ReservationDraft};
use diesel::SqliteConnection;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

pub mod backend;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Persistence adapter for reservation storage.
///
/// Holds a single `SQLite` connection for the lifetime of the process.
pub struct Persistence {
    conn: SqliteConnection,
}

impl std::fmt::Debug for Persistence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Persistence").finish_non_exhaustive()
    }
}

/// Builds the shared-cache URL for the in-memory database with this id.
pub(crate) fn in_memory_database_url(db_id: u64) -> String {
    format!("file:memdb_{db_id}?mode=memory&cache=shared")
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Every call gets its own database, so adapters never share rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url: String = in_memory_database_url(db_id);

        let conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;

        let mut persistence: Self = Self { conn };
        persistence.ensure_schema()?;
        Ok(persistence)
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// The file is created if it does not exist.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;
        backend::sqlite::enable_wal_mode(&mut conn)?;

        let mut persistence: Self = Self { conn };
        persistence.ensure_schema()?;
        Ok(persistence)
    }

    /// Creates the reservation table if it does not exist.
    ///
    /// Calling this again after the schema exists changes nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if migrations cannot be applied.
    pub fn ensure_schema(&mut self) -> Result<(), PersistenceError> {
        backend::sqlite::run_migrations(&mut self.conn).map(|_| ())
    }

    /// Appends a reservation and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails. Nothing is stored in that case.
    pub fn append_reservation(
        &mut self,
        draft: &ReservationDraft,
    ) -> Result<Reservation, PersistenceError> {
        mutations::append_reservation(&mut self.conn, draft)
    }

    /// Retrieves a stored reservation by id.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::ReservationNotFound` if no row has this id,
    /// or `PersistenceError::CorruptRecord` if the stored seats are malformed.
    pub fn get_reservation(
        &mut self,
        reservation_id: i64,
    ) -> Result<Reservation, PersistenceError> {
        queries::get_reservation(&mut self.conn, reservation_id)
    }

    /// Lists all stored reservations in id order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or any row is malformed.
    pub fn list_reservations(&mut self) -> Result<Vec<Reservation>, PersistenceError> {
        queries::list_reservations(&mut self.conn)
    }

    /// Counts stored reservations.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_reservations(&mut self) -> Result<i64, PersistenceError> {
        queries::count_reservations(&mut self.conn)
    }

    /// Gives tests direct access to the connection.
    #[cfg(test)]
    pub(crate) const fn connection(&mut self) -> &mut SqliteConnection {
        &mut self.conn
    }
}

impl ReservationRepository for Persistence {
    type Error = PersistenceError;

    fn ensure_schema(&mut self) -> Result<(), Self::Error> {
        Self::ensure_schema(self)
    }

    fn append(&mut self, draft: &ReservationDraft) -> Result<Reservation, Self::Error> {
        self.append_reservation(draft)
    }
}
