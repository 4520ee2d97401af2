//! # Plume Core
//!
//! The domain layer of the Plume post scheduler.
//! This crate contains the post lifecycle model, form validation, the
//! state engine, and the storage port - pure business logic with zero
//! infrastructure dependencies.

pub mod command;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod ports;
pub mod validation;

pub use engine::PostEngine;
pub use error::{StoreError, ValidationError};
