pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod store;
pub mod sync;
pub mod ui;
pub mod warning;

pub use error::{Result, SemverError};
