//! Core shared library for the SeqN/FPrime adaptation.
//!
//! This crate exposes the ambient pieces every other crate relies on:
//! common errors, configuration loading, logging setup and the loaders that
//! read command dictionaries and parsed syntax trees from disk.

pub mod config;
pub mod errors;
pub mod loader;
pub mod logging;

pub use config::{load_config, AdaptationConfig};
pub use errors::{ConfigError, Result as CoreResult, SeqnError};
pub use loader::{load_dictionary, load_tree, LoadError};
