//! File-backed, type-safe key-value store for OakDash.
//!
//! Plays the role browser local storage plays for the storefront: a handful
//! of named keys, each holding one JSON blob that is read once at startup
//! and rewritten wholesale after every state change. There is exactly one
//! writer, so no locking or versioning is needed.
//!
//! # Example
//!
//! ```rust,ignore
//! use oak_store::Store;
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Inventory {
//!     levels: std::collections::BTreeMap<String, i64>,
//! }
//!
//! let store = Store::open(".oakdash")?;
//!
//! // Store a value
//! store.set("oakdash.inventory.v1", &inventory)?;
//!
//! // Retrieve a value
//! let inventory: Option<Inventory> = store.get("oakdash.inventory.v1")?;
//!
//! // Delete a value
//! store.delete("oakdash.inventory.v1")?;
//! ```

mod error;
mod kv;

pub use error::StoreError;
pub use kv::Store;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Store, StoreError};
}
