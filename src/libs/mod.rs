//! Core library modules for the pomoplanner application.
//!
//! Domain types, validation, the Pomodoro timer state machine, and shared
//! infrastructure (storage paths, messaging, table rendering).

pub mod data_storage;
pub mod hash;
pub mod messages;
pub mod profile;
pub mod task;
pub mod timer;
pub mod view;
