pub mod boundary;
pub mod cli;
pub mod config;
pub mod descriptor;
pub mod domain;
pub mod error;
pub mod ui;
pub mod updater;

pub use domain::SemVer;
pub use error::{Result, SemverError};
pub use updater::{compute, Strategy, UpdateOutcome, UpdateRequest};
