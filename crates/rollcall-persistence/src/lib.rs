//! Persistence layer for Rollcall.
//!
//! Two concerns live here: loading the student roster from an Excel
//! workbook once at startup, and keeping the user registry on disk with
//! crash-safe atomic writes (write to a temp file, then rename).
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use rollcall_persistence::{load_roster, RegistryStore};
//!
//! let roster = load_roster(Path::new("roster.xlsx")).unwrap();
//!
//! let store = RegistryStore::new("users.json");
//! let users = store.load().unwrap(); // empty when the file is missing
//! store.save(&users).unwrap();
//! ```

pub mod atomic;
pub mod error;
pub mod registry_store;
pub mod roster;

pub use error::{PersistenceError, Result};
pub use registry_store::RegistryStore;
pub use roster::load_roster;
