//! Storage abstraction and implementations for SprintCast.
//!
//! This crate provides a trait-based project store with a JSON-file
//! reference implementation.

#![warn(missing_docs)]

pub mod trait_;
pub mod json_storage;

pub use trait_::{ProjectStore, StorageError, Result};
pub use json_storage::JsonStorage;
