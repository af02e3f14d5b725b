//! Warehouses and per-item stock lookup.

use serde::{Deserialize, Serialize};

use stockroute_core::{DomainError, DomainResult, ItemId, OrderedMap, Quantity, WarehouseName};

/// Item → count mapping, used for warehouse stock and shipped quantities.
pub type Inventory = OrderedMap<ItemId, Quantity>;

/// A named stock source. Position in the warehouse list is its priority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warehouse {
    pub name: WarehouseName,
    #[serde(default)]
    pub inventory: Inventory,
}

/// Result of looking an item up in one warehouse.
///
/// Keeps "not stocked here" apart from "stocked but nothing usable", although
/// allocation treats both as no contribution.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StockLookup {
    /// The warehouse has no entry for the item.
    Absent,
    /// The entry exists but is zero or negative.
    Depleted(Quantity),
    /// Positive stock.
    Available(Quantity),
}

impl StockLookup {
    /// Units this lookup can contribute, clamped at zero.
    pub fn usable(self) -> Quantity {
        match self {
            StockLookup::Available(qty) => qty,
            StockLookup::Absent | StockLookup::Depleted(_) => 0,
        }
    }
}

impl Warehouse {
    pub fn new(name: impl Into<WarehouseName>) -> Self {
        Self {
            name: name.into(),
            inventory: Inventory::new(),
        }
    }

    /// Builder-style stock setter.
    pub fn with_stock(mut self, item: impl Into<ItemId>, quantity: Quantity) -> Self {
        self.inventory.insert(item.into(), quantity);
        self
    }

    pub fn lookup(&self, item: &str) -> StockLookup {
        match self.inventory.get(item) {
            None => StockLookup::Absent,
            Some(&qty) if qty <= 0 => StockLookup::Depleted(qty),
            Some(&qty) => StockLookup::Available(qty),
        }
    }

    /// Reject negative stock counts.
    ///
    /// Allocation does not call this; negative stock is treated as empty there.
    pub fn validate(&self) -> DomainResult<()> {
        match self.inventory.iter().find(|(_, qty)| **qty < 0) {
            Some((item, qty)) => Err(DomainError::invariant(format!(
                "stock for {item} in warehouse {} is negative ({qty})",
                self.name
            ))),
            None => Ok(()),
        }
    }
}

/// Validate every warehouse and require unique names.
pub fn validate_warehouses(warehouses: &[Warehouse]) -> DomainResult<()> {
    let mut seen: Vec<&WarehouseName> = Vec::with_capacity(warehouses.len());
    for warehouse in warehouses {
        if seen.contains(&&warehouse.name) {
            return Err(DomainError::validation(format!(
                "duplicate warehouse name: {}",
                warehouse.name
            )));
        }
        seen.push(&warehouse.name);
        warehouse.validate()?;
    }
    Ok(())
}
