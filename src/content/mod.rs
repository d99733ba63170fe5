//! Practical content: the catalog, the output table, and their resolvers.
//!
//! ## Submodules
//!
//! - [`catalog`]: The id → [`PracticalRecord`] table and paragraph splitting
//! - [`outputs`]: The independent, partial id → [`OutputBundle`] table
//! - [`resolver`]: Validates route parameters and looks up records
//!
//! ## Lookup Flow
//!
//! ```text
//! "3" (route parameter)
//!        │
//!        ▼
//! PracticalId::from_str ──▶ ResolveError::NotFound
//!        │
//!        ▼
//! resolve() ──▶ &PracticalRecord ──▶ theory paragraphs / code block
//!                                          │
//!                                   (run completes)
//!                                          ▼
//!                                resolve_outputs() ──▶ Ready | Empty
//! ```

pub mod catalog;
mod id;
pub mod outputs;
mod practicals;
pub mod resolver;

pub use catalog::{catalog, paragraphs, Catalog, PracticalRecord, CODE_LANGUAGE, CODE_TITLE};
pub use id::PracticalId;
pub use outputs::{resolve_outputs, OutputBundle, OutputEntry, OutputLookup, NO_OUTPUT_MESSAGE};
pub use resolver::{resolve, resolve_str, ResolveError};
