//! # Plume Infrastructure
//!
//! Concrete implementations of the storage port defined in
//! `plume-core`: a durable JSON-file store and an in-memory fallback.

pub mod store;

pub use store::{InMemoryPostStore, JsonFileStore};
