//! `remitcert-master` — Master data resolution and field reconciliation engine.
//!
//! Pure engine crate: receives pre-loaded reference data, resolves free-text
//! names against alias tables and an immutable index, and produces auditable
//! field suggestions. No CLI or template dependencies.

pub mod data;
pub mod error;
pub mod fields;
pub mod index;
pub mod model;
pub mod normalize;
pub mod resolve;
pub mod suggest;
pub mod validate;

pub use data::{AliasSet, MasterData};
pub use error::MasterError;
pub use index::MasterIndex;
pub use model::{FieldDict, LookupDomain, MatchType, ReconciliationEvent};
pub use normalize::normalize;
pub use resolve::Resolver;
pub use suggest::suggest_from_master;
