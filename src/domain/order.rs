use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::LineItem;

pub type OrderId = u64;

/// Lifecycle state of an order. Checkout is the only way an order comes to
/// exist, so every order is complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Completed,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Completed => write!(f, "Completed"),
        }
    }
}

/// Hands out order ids. Implementations never return the same id twice.
pub trait OrderIdSource {
    fn next_order_id(&mut self) -> OrderId;
}

/// Represents a checked-out cart. Fields are private so an order cannot be
/// changed after it is built.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    id: OrderId,
    placed_on: NaiveDate,
    lines: Vec<LineItem>,
    total: Decimal,
    status: OrderStatus,
}

impl Order {
    /// Builds a completed order. The total is derived from `lines`.
    pub fn completed(id: OrderId, placed_on: NaiveDate, lines: Vec<LineItem>) -> Self {
        let total = lines.iter().map(LineItem::line_total).sum();
        Self {
            id,
            placed_on,
            lines,
            total,
            status: OrderStatus::Completed,
        }
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn placed_on(&self) -> NaiveDate {
        self.placed_on
    }

    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    pub fn total(&self) -> Decimal {
        self.total
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }
}
