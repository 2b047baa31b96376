//! Order records produced at checkout and the shopper's order history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cart::{CartTotals, LineItem};
use crate::types::{OrderId, OrderStatus};

/// A placed order: the cart as it stood at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: OrderId,
    pub placed_at: DateTime<Utc>,
    pub items: Vec<LineItem>,
    /// Exact totals at checkout; round for display.
    pub totals: CartTotals,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promo_code: Option<String>,
    #[serde(default)]
    pub status: OrderStatus,
}

impl OrderRecord {
    /// Create a new order placed now.
    #[must_use]
    pub fn new(items: Vec<LineItem>, totals: CartTotals, promo_code: Option<String>) -> Self {
        Self {
            id: OrderId::generate(),
            placed_at: Utc::now(),
            items,
            totals,
            promo_code,
            status: OrderStatus::default(),
        }
    }

    /// Total number of units ordered.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|l| u64::from(l.quantity.get())).sum()
    }
}

/// Past orders, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderHistory(Vec<OrderRecord>);

impl OrderHistory {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Record a newly placed order at the front of the history.
    pub fn record(&mut self, order: OrderRecord) {
        self.0.insert(0, order);
    }

    #[must_use]
    pub fn orders(&self) -> &[OrderRecord] {
        &self.0
    }

    #[must_use]
    pub fn find(&self, id: OrderId) -> Option<&OrderRecord> {
        self.0.iter().find(|o| o.id == id)
    }

    /// Update an order's status. Returns `false` if the order is unknown.
    pub fn set_status(&mut self, id: OrderId, status: OrderStatus) -> bool {
        match self.0.iter_mut().find(|o| o.id == id) {
            Some(order) => {
                order.status = status;
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
