// Copyright (C) 2024-2025 Fred Clausen and the ratatui project contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # xtask - Project Automation
//!
//! Wraps the cargo invocations used locally and in CI, plus a schema check
//! for the reservation store.
//!
//! - `cargo xtask ci`: lint, unused-dependency check, build, test, schema check
//! - `cargo xtask verify-schema`: applies the embedded `SQLite` migrations to
//!   a scratch database twice and checks the resulting table layout
//!
//! Nothing here needs external infrastructure beyond the cargo tools it
//! shells out to.

#![deny(
    clippy::pedantic,
    //clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use std::{fmt::Debug, io, process::Output, vec};

use cargo_metadata::MetadataCommand;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{
    eyre::{bail, Context},
    Result,
};
use diesel::sql_types::{Integer, Text};
use diesel::{QueryableByName, SqliteConnection};
use duct::cmd;
use std::collections::BTreeMap;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .without_time()
        .init();

    match args.run() {
        Ok(()) => (),
        Err(err) => {
            tracing::error!("{err}");
            std::process::exit(1);
        }
    }
    Ok(())
}

#[derive(Debug, Parser)]
#[command(bin_name = "cargo xtask", styles = clap_cargo::style::CLAP_STYLING)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn run(self) -> Result<()> {
        self.command.run()
    }

    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Run CI checks (lint, build, test, schema)
    CI,

    /// Build the project
    #[command(visible_alias = "b")]
    Build,

    /// Run cargo check
    #[command(visible_alias = "c")]
    Check,

    // Check unused dependencies
    #[command(visible_alias = "m")]
    Machete,

    /// Lint formatting, clippy, and docs
    #[command(visible_alias = "l")]
    Lint,

    /// Run clippy on the project
    #[command(visible_alias = "cl")]
    LintClippy,

    /// Check documentation for errors and warnings
    #[command(visible_alias = "d")]
    LintDocs,

    /// Check for formatting issues in the project
    #[command(visible_alias = "lf")]
    LintFormatting,

    /// Fix formatting issues in the project
    #[command(visible_alias = "fmt")]
    FixFormatting,

    /// Run tests
    #[command(visible_alias = "t")]
    Test,

    /// Verify the reservation schema produced by the embedded migrations
    #[command(visible_alias = "vs")]
    VerifySchema,
}

impl Command {
    fn run(self) -> Result<()> {
        match self {
            Self::CI => ci(),
            Self::Build => build(),
            Self::Check => check(),
            Self::Machete => machete(),
            Self::Lint => lint(),
            Self::LintClippy => lint_clippy(),
            Self::LintDocs => lint_docs(),
            Self::LintFormatting => lint_format(),
            Self::FixFormatting => fix_format(),
            Self::Test => test(),
            Self::VerifySchema => verify_schema(),
        }
    }
}

/// Run CI checks (lint, build, test, schema)
fn ci() -> Result<()> {
    lint()?;
    machete()?;
    build()?;
    test()?;
    verify_schema()?;
    Ok(())
}

fn machete() -> Result<()> {
    cmd!("cargo-machete").run_with_trace()?;
    Ok(())
}

/// Build the project
fn build() -> Result<()> {
    run_cargo(vec!["build", "--all-targets", "--all-features"])
}

/// Run cargo check
fn check() -> Result<()> {
    run_cargo(vec!["check", "--all-targets", "--all-features"])
}

/// Lint formatting, clippy, and docs
fn lint() -> Result<()> {
    lint_clippy()?;
    lint_docs()?;
    lint_format()?;
    Ok(())
}

/// Run clippy on the project
fn lint_clippy() -> Result<()> {
    run_cargo(vec![
        "clippy",
        "--all-targets",
        "--all-features",
        "--",
        "-D",
        "warnings",
    ])
}

/// Check that docs build without errors using docs.rs-equivalent flags
fn lint_docs() -> Result<()> {
    let meta = MetadataCommand::new()
        .exec()
        .wrap_err("failed to get cargo metadata")?;

    for package in meta.workspace_default_packages() {
        cmd(
            "cargo",
            [
                "doc",
                "--no-deps",
                "--all-features",
                "--package",
                &package.name,
            ],
        )
        .env_remove("CARGO")
        .env("RUSTUP_TOOLCHAIN", "nightly")
        .env("RUSTDOCFLAGS", "--cfg docsrs -D warnings")
        .run_with_trace()?;
    }

    Ok(())
}

/// Lint formatting issues in the project
fn lint_format() -> Result<()> {
    run_cargo_nightly(vec!["fmt", "--all", "--check"])
}

/// Fix formatting issues in the project
fn fix_format() -> Result<()> {
    run_cargo_nightly(vec!["fmt", "--all"])
}

/// Run all tests, then doc tests
fn test() -> Result<()> {
    run_cargo(vec!["test", "--all-targets", "--all-features"])?;
    run_cargo(vec!["test", "--doc", "--all-features"])
}

/// Run a cargo subcommand with the default toolchain
fn run_cargo(args: Vec<&str>) -> Result<()> {
    cmd("cargo", args).run_with_trace()?;
    Ok(())
}

/// Run a cargo subcommand with the nightly toolchain
fn run_cargo_nightly(args: Vec<&str>) -> Result<()> {
    cmd("cargo", args)
        // CARGO env var is set because we're running in a cargo subcommand
        .env_remove("CARGO")
        .env("RUSTUP_TOOLCHAIN", "nightly")
        .run_with_trace()?;
    Ok(())
}

/// The columns the reservation store must have: name, type, not-null, primary key.
const EXPECTED_RESERVATION_COLUMNS: [(&str, &str, bool, bool); 4] = [
    ("id", "INTEGER", false, true),
    ("film", "TEXT", true, false),
    ("seats", "TEXT", true, false),
    ("customer_name", "TEXT", true, false),
];

/// Verify the reservation schema produced by the embedded migrations
///
/// ## What This Command Does
///
/// 1. Opens a scratch in-memory `SQLite` database
/// 2. Applies the persistence crate's migrations
/// 3. Applies them again and requires that nothing was pending
/// 4. Introspects the schema and requires exactly one `reservations` table
///    with `id`, `film`, `seats` and `customer_name`
///
/// ## Usage
///
/// ```bash
/// cargo xtask verify-schema
/// ```
fn verify_schema() -> Result<()> {
    use diesel::Connection;
    use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

    const MIGRATIONS: EmbeddedMigrations = embed_migrations!("../crates/persistence/migrations");

    tracing::info!("Starting reservation schema verification");

    let mut conn = SqliteConnection::establish(":memory:")
        .wrap_err("Failed to open scratch SQLite database")?;

    let first = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to apply migrations: {e}"))?;
    tracing::info!("Applied {} migration(s)", first.len());

    let second = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to re-apply migrations: {e}"))?;
    if !second.is_empty() {
        bail!(
            "Schema bootstrap is not idempotent: {} migration(s) applied twice",
            second.len()
        );
    }

    let schema = introspect_sqlite_schema(&mut conn)?;
    compare_schema(&schema)?;

    tracing::info!("✓ Reservation schema verified");
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Column {
    normalized_type: String,
    not_null: bool,
    primary_key: bool,
}

/// Table name to columns, keyed by column name.
type Schema = BTreeMap<String, BTreeMap<String, Column>>;

/// Introspect `SQLite` schema
fn introspect_sqlite_schema(conn: &mut SqliteConnection) -> Result<Schema> {
    use diesel::RunQueryDsl;

    #[derive(QueryableByName)]
    struct TableName {
        #[diesel(sql_type = Text)]
        name: String,
    }

    #[derive(QueryableByName)]
    struct ColumnInfo {
        #[diesel(sql_type = Text)]
        name: String,
        #[diesel(sql_type = Text)]
        r#type: String,
        #[diesel(sql_type = Integer)]
        notnull: i32,
        #[diesel(sql_type = Integer)]
        pk: i32,
    }

    let tables: Vec<TableName> = diesel::sql_query(
        "SELECT name FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%' AND name != '__diesel_schema_migrations' ORDER BY name"
    )
    .load(conn)
    .wrap_err("Failed to query SQLite tables")?;

    let mut schema = Schema::new();
    for table in tables {
        let columns: Vec<ColumnInfo> =
            diesel::sql_query(format!("PRAGMA table_info({})", table.name))
                .load(conn)
                .wrap_err(format!("Failed to get columns for table {}", table.name))?;

        let columns = columns
            .into_iter()
            .map(|col| {
                (
                    col.name,
                    Column {
                        normalized_type: col.r#type.to_uppercase(),
                        not_null: col.notnull != 0,
                        primary_key: col.pk > 0,
                    },
                )
            })
            .collect();

        schema.insert(table.name, columns);
    }

    Ok(schema)
}

/// Compare the introspected schema with the expected layout and fail on mismatch
fn compare_schema(schema: &Schema) -> Result<()> {
    let table_names: Vec<&str> = schema.keys().map(String::as_str).collect();
    if table_names != ["reservations"] {
        bail!("Expected exactly one table 'reservations', found {table_names:?}");
    }

    let Some(columns) = schema.get("reservations") else {
        bail!("Table 'reservations' is missing");
    };

    if columns.len() != EXPECTED_RESERVATION_COLUMNS.len() {
        bail!(
            "Table 'reservations' has {} columns, expected {}",
            columns.len(),
            EXPECTED_RESERVATION_COLUMNS.len()
        );
    }

    let mut errors: Vec<String> = Vec::new();
    for (name, column_type, not_null, primary_key) in EXPECTED_RESERVATION_COLUMNS {
        let expected = Column {
            normalized_type: column_type.to_string(),
            not_null,
            primary_key,
        };
        match columns.get(name) {
            Some(actual) if *actual == expected => {}
            Some(actual) => errors.push(format!(
                "Column '{name}' mismatch: expected {expected:?}, found {actual:?}"
            )),
            None => errors.push(format!("Column '{name}' is missing")),
        }
    }

    if !errors.is_empty() {
        for error in &errors {
            tracing::error!("{error}");
        }
        bail!("Reservation schema verification failed with {} error(s)", errors.len());
    }

    Ok(())
}

/// An extension trait for `duct::Expression` that logs the command being run
/// before running it.
trait ExpressionExt {
    /// Run the command and log the command being run
    fn run_with_trace(&self) -> io::Result<Output>;
}

impl ExpressionExt for duct::Expression {
    fn run_with_trace(&self) -> io::Result<Output> {
        tracing::info!("running command: {:?}", self);
        self.run().inspect_err(|_| {
            // The command that was run may have scrolled off the screen, so repeat it here
            tracing::error!("failed to run command: {:?}", self);
        })
    }
}
