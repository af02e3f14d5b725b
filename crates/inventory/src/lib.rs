//! Inventory allocation across prioritized warehouses.
//!
//! This crate plans how an order is split across warehouses, implemented purely
//! as deterministic domain logic (no IO, no HTTP, no storage). Planning never
//! mutates the warehouses it reads; it is not a stock commit.

pub mod allocator;
pub mod config;
pub mod demand;
pub mod shipment;
pub mod warehouse;

pub use allocator::Allocator;
pub use config::{AllocatorConfig, FulfillmentPolicy, POLICY_ENV_VAR};
pub use demand::Demand;
pub use shipment::{CompletedOrder, ShipmentEntry};
pub use warehouse::{Inventory, StockLookup, Warehouse, validate_warehouses};

pub use stockroute_core::{DomainError, DomainResult, ItemId, Quantity, WarehouseName};
