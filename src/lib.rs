//! # PomoPlanner
//!
//! A command-line planner combining per-profile to-do lists scoped by date
//! with a configurable Pomodoro focus timer, all stored in a local SQLite
//! database.
//!
//! ## Features
//!
//! - **Profiles**: multiple named profiles, one selected at a time, with
//!   optional password protection
//! - **Tasks**: per-profile, per-date to-do items with priority, category,
//!   and completion tracking, plus filtered listings
//! - **Pomodoro Timer**: configurable work/short-break/long-break cycle
//!   driven by a one-second tick
//! - **Settings**: persisted timer durations and long-break interval with
//!   validated updates
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pomoplanner::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
