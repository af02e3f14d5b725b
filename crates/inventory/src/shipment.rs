//! Allocation output: per-warehouse shipment entries.

use core::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use stockroute_core::{Quantity, WarehouseName};

use crate::warehouse::Inventory;

/// Items shipped from one warehouse.
///
/// Serialized as a single-key object: `{"owd": {"apple": 1}}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipmentEntry {
    pub warehouse: WarehouseName,
    pub items: Inventory,
}

impl ShipmentEntry {
    pub fn new(warehouse: impl Into<WarehouseName>, items: Inventory) -> Self {
        Self {
            warehouse: warehouse.into(),
            items,
        }
    }
}

impl Serialize for ShipmentEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.warehouse, &self.items)?;
        map.end()
    }
}

struct ShipmentEntryVisitor;

impl<'de> Visitor<'de> for ShipmentEntryVisitor {
    type Value = ShipmentEntry;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a single-key map of warehouse name to shipped items")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let (warehouse, items): (WarehouseName, Inventory) = access
            .next_entry()?
            .ok_or_else(|| <A::Error as de::Error>::invalid_length(0, &self))?;
        if access.next_key::<de::IgnoredAny>()?.is_some() {
            return Err(de::Error::invalid_length(2, &self));
        }
        Ok(ShipmentEntry { warehouse, items })
    }
}

impl<'de> Deserialize<'de> for ShipmentEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ShipmentEntryVisitor)
    }
}

/// The full allocation result, in first-contribution order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletedOrder(Vec<ShipmentEntry>);

impl CompletedOrder {
    pub fn entries(&self) -> &[ShipmentEntry] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShipmentEntry> {
        self.0.iter()
    }

    /// Items shipped from `warehouse`, if it contributed anything.
    pub fn get(&self, warehouse: &str) -> Option<&Inventory> {
        self.0
            .iter()
            .find(|entry| entry.warehouse.as_str() == warehouse)
            .map(|entry| &entry.items)
    }

    /// Total units of `item` shipped across all warehouses.
    pub fn shipped(&self, item: &str) -> Quantity {
        self.0
            .iter()
            .filter_map(|entry| entry.items.get(item))
            .sum()
    }

    /// Warehouse names in output order.
    pub fn warehouses(&self) -> impl Iterator<Item = &WarehouseName> {
        self.0.iter().map(|entry| &entry.warehouse)
    }
}

impl From<Vec<ShipmentEntry>> for CompletedOrder {
    fn from(entries: Vec<ShipmentEntry>) -> Self {
        Self(entries)
    }
}

impl<'a> IntoIterator for &'a CompletedOrder {
    type Item = &'a ShipmentEntry;
    type IntoIter = core::slice::Iter<'a, ShipmentEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
