//! `stockroute-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod id;
pub mod ordered_map;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use id::{ItemId, WarehouseName};
pub use ordered_map::OrderedMap;
pub use value_object::ValueObject;

/// Unit count for demand, stock and shipments.
///
/// Signed because caller input is not validated: stock may legitimately arrive
/// as zero or negative and is clamped at the point of use.
pub type Quantity = i64;
