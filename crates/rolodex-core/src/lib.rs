//! Rolodex Core — user records, the JSON-backed record store, and fake
//! contact-data generation.
//!
//! This crate provides the domain types used across all Rolodex crates.
//! It has no internal Rolodex dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`model`]: User records and the pure id/lookup helpers
//! - [`store`]: Full-document JSON persistence
//! - [`fakes`]: Random contact-data generation

#![doc = include_str!("../README.md")]

pub mod error;
pub mod fakes;
pub mod model;
pub mod store;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use model::{NewUser, User, find_by_id, next_id};
pub use store::UserStore;
