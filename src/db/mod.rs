//! Database layer for the pomoplanner application.
//!
//! A thin persistence layer over a single-file SQLite database. Each store
//! struct wraps its own connection, opened for the duration of the calling
//! operation, and every statement binds its inputs as parameters. There are
//! no cross-call transactions: each operation is atomic and independent.

/// Connection bootstrap: data-dir resolution, pragmas, migrations.
pub mod db;

/// Versioned schema creation and the one-time settings seed.
pub mod migrations;

/// Profile rows and the single-selection invariant.
pub mod profiles;

/// Setting rows keyed by description, including the timer configuration.
pub mod settings;

/// Task rows with parameterized filtered listings.
pub mod tasks;
