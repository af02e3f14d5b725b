//! Requested quantities per item.

use serde::{Deserialize, Serialize};

use stockroute_core::{DomainError, DomainResult, ItemId, OrderedMap, Quantity};

/// Demand: item → quantity requested, in the caller's item order.
///
/// Item order is the allocation order, so it shapes the order of shipment
/// entries in the completed order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Demand(OrderedMap<ItemId, Quantity>);

impl Demand {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the requested quantity for `item`, replacing any earlier request.
    pub fn insert(&mut self, item: impl Into<ItemId>, quantity: Quantity) -> Option<Quantity> {
        self.0.insert(item.into(), quantity)
    }

    pub fn get(&self, item: &str) -> Option<Quantity> {
        self.0.get(item).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ItemId, Quantity)> {
        self.0.iter().map(|(item, qty)| (item, *qty))
    }

    pub fn items(&self) -> impl Iterator<Item = &ItemId> {
        self.0.keys()
    }

    /// Reject negative requests.
    ///
    /// Allocation does not call this: a negative request simply ships nothing.
    pub fn validate(&self) -> DomainResult<()> {
        match self.iter().find(|(_, qty)| *qty < 0) {
            Some((item, qty)) => Err(DomainError::validation(format!(
                "demand for {item} is negative ({qty})"
            ))),
            None => Ok(()),
        }
    }

    /// Private working copy that allocation decrements.
    pub(crate) fn remaining(&self) -> OrderedMap<ItemId, Quantity> {
        self.0.clone()
    }
}

impl<I: Into<ItemId>> FromIterator<(I, Quantity)> for Demand {
    fn from_iter<T: IntoIterator<Item = (I, Quantity)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
