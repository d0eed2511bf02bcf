//! editguard library.
//!
//! Advisory edit hooks: sensitive-path warnings before an edit and
//! D-pad focus checks on Compose sources after one.

pub mod cli;
pub mod config;
pub mod error;
pub mod event;
pub mod guard;

pub use error::Error;
