//! Order allocation across prioritized warehouses.
//!
//! For each demanded item (in demand order), warehouses are tried in list
//! order and each contributes `min(max(0, stock), remaining)` until the item is
//! filled. Only positive contributions are recorded, so a warehouse appears in
//! the output only if it ships something.
//!
//! The result is built lazily on the first [`Allocator::get_order`] call and
//! cached; later calls return the same value without recomputing.

use std::cell::OnceCell;

use stockroute_core::{ItemId, OrderedMap, Quantity, WarehouseName};

use crate::config::{AllocatorConfig, FulfillmentPolicy};
use crate::demand::Demand;
use crate::shipment::{CompletedOrder, ShipmentEntry};
use crate::warehouse::{Inventory, Warehouse};

/// Splits a demand across an ordered warehouse list.
///
/// Not `Sync`: a shared instance must have its first `get_order` call
/// serialized by the caller.
#[derive(Debug, Clone)]
pub struct Allocator {
    demand: Demand,
    warehouses: Vec<Warehouse>,
    config: AllocatorConfig,
    order: OnceCell<CompletedOrder>,
}

impl Allocator {
    pub fn new(demand: Demand, warehouses: Vec<Warehouse>) -> Self {
        Self::with_config(demand, warehouses, AllocatorConfig::default())
    }

    pub fn with_config(demand: Demand, warehouses: Vec<Warehouse>, config: AllocatorConfig) -> Self {
        Self {
            demand,
            warehouses,
            config,
            order: OnceCell::new(),
        }
    }

    pub fn demand(&self) -> &Demand {
        &self.demand
    }

    pub fn warehouses(&self) -> &[Warehouse] {
        &self.warehouses
    }

    pub fn config(&self) -> AllocatorConfig {
        self.config
    }

    /// Whether the completed order has been computed yet.
    pub fn is_built(&self) -> bool {
        self.order.get().is_some()
    }

    /// The completed order, computed on first call.
    pub fn get_order(&self) -> &CompletedOrder {
        self.order.get_or_init(|| self.build())
    }

    fn build(&self) -> CompletedOrder {
        let span = tracing::debug_span!(
            "allocate",
            items = self.demand.len(),
            warehouses = self.warehouses.len(),
            policy = %self.config.policy,
        );
        let _guard = span.enter();

        let mut remaining = self.demand.remaining();
        let mut shipments: OrderedMap<WarehouseName, Inventory> = OrderedMap::new();

        for (item, left) in remaining.iter_mut() {
            if self.config.policy == FulfillmentPolicy::AllOrNothing && !self.can_fill(item, *left) {
                tracing::debug!(item = %item, requested = *left, "insufficient total stock, item skipped");
                continue;
            }

            for warehouse in &self.warehouses {
                let take = warehouse.lookup(item.as_str()).usable().min(*left);
                if take > 0 {
                    *left -= take;
                    // Repeated warehouse names merge into one entry.
                    *shipments
                        .get_or_insert_with(warehouse.name.clone(), Inventory::new)
                        .get_or_insert_with(item.clone(), || 0) += take;
                    tracing::debug!(
                        warehouse = %warehouse.name,
                        item = %item,
                        quantity = take,
                        "allocated stock"
                    );
                }
                if *left == 0 {
                    break;
                }
            }

            if *left > 0 {
                tracing::debug!(item = %item, unfilled = *left, "demand not fully covered");
            }
        }

        let order: CompletedOrder = shipments
            .into_iter()
            .map(|(warehouse, items)| ShipmentEntry { warehouse, items })
            .collect::<Vec<_>>()
            .into();

        tracing::info!(shipments = order.len(), "order allocated");
        order
    }

    /// Total usable stock across every warehouse covers `requested`.
    fn can_fill(&self, item: &ItemId, requested: Quantity) -> bool {
        let total = self
            .warehouses
            .iter()
            .map(|warehouse| warehouse.lookup(item.as_str()).usable())
            .fold(0, Quantity::saturating_add);
        total >= requested
    }
}
