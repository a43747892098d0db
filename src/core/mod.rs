//! Core library components.
//!
//! This module contains the secret synchronization model and the
//! collaborators it runs against: cipher, key storage, filesystem access,
//! path layout, and the project manifest.

pub mod cipher;
pub mod config;
pub mod constants;
pub mod domain;
pub mod files;
pub mod layout;
pub mod store;
pub mod types;
pub mod workspace;
