//! Patient and visit persistence
//!
//! The application layer owns storage through two injected repository
//! traits, [`PatientRepository`] and [`VisitRepository`]. Two
//! implementations ship here:
//! - [`MemoryStore`]: in-process maps, for tests and ephemeral runs
//! - [`JsonStore`]: one JSON file per collection under a data directory,
//!   loaded on open and rewritten whole on every mutation, matching the
//!   key→JSON-blob layout of the mobile app's local storage

pub mod error;
pub mod json;
pub mod memory;
pub mod repository;

pub use error::StoreError;
pub use json::JsonStore;
pub use memory::MemoryStore;
pub use repository::{PatientRepository, VisitRepository};
