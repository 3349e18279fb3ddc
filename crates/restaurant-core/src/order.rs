//! # Orders
//!
//! An order collects dishes taken from a menu and knows its tab.
//!
//! ## Order Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Order Operations                                │
//! │                                                                         │
//! │  Menu::make_order(specs) ──► Order { dishes: [Arc<Dish>, ...] }        │
//! │                                    │                                    │
//! │        order.append(dish) ─────────┤  push one dish                     │
//! │        order.merge(&other) ────────┤  push all of other's dishes        │
//! │                                    │  (other is left unchanged)         │
//! │                                    ▼                                    │
//! │                              order.total()  ──► the tab                 │
//! │                                                                         │
//! │  Orders only ever grow. Dishes are shared with the menu via Arc.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::AddAssign;
use std::sync::Arc;
use ts_rs::TS;
use uuid::Uuid;

use crate::dish::{Dish, DishKind};
use crate::money::Money;

// =============================================================================
// Order
// =============================================================================

/// A customer order: an append-only list of dishes.
///
/// ## Design Notes
/// - Dishes are `Arc<Dish>` shared with the [`Menu`](crate::menu::Menu).
///   The `Arc` keeps each dish alive, so an order may outlive its menu.
/// - `id` and `created_at` identify the order; they never take part in
///   merging or totals.
#[derive(Debug, Clone)]
pub struct Order {
    id: String,
    dishes: Vec<Arc<Dish>>,
    created_at: DateTime<Utc>,
}

impl Order {
    /// Creates a new empty order.
    pub fn new() -> Self {
        Order {
            id: Uuid::new_v4().to_string(),
            dishes: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds one dish to the end of the order.
    pub fn append(&mut self, dish: Arc<Dish>) {
        self.dishes.push(dish);
    }

    /// Appends every dish of `other`, in `other`'s order.
    ///
    /// `other` is not drained.
    ///
    /// ## Example
    /// ```rust
    /// use std::sync::Arc;
    /// use restaurant_core::{Dish, Order};
    ///
    /// let mut first = Order::new();
    /// first.append(Arc::new(Dish::pizza("Margarita", 79)));
    ///
    /// let mut second = Order::new();
    /// second.append(Arc::new(Dish::ice_cream("Vanilla", 20)));
    ///
    /// first.merge(&second);
    /// assert_eq!(first.len(), 2);
    /// assert_eq!(second.len(), 1);
    /// assert_eq!(first.total().cents(), 99);
    /// ```
    pub fn merge(&mut self, other: &Order) {
        self.dishes.extend(other.dishes.iter().cloned());
    }

    /// Calculates the tab: the sum of all dish prices.
    ///
    /// An empty order totals zero. Uses wrapping `Money` addition.
    pub fn total(&self) -> Money {
        self.dishes.iter().map(|d| d.price()).sum()
    }

    /// Returns the number of dishes in the order.
    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }

    pub fn dishes(&self) -> &[Arc<Dish>] {
        &self.dishes
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Dish>> {
        self.dishes.iter()
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Default for Order {
    fn default() -> Self {
        Self::new()
    }
}

/// `order += dish`
impl AddAssign<Arc<Dish>> for Order {
    fn add_assign(&mut self, dish: Arc<Dish>) {
        self.append(dish);
    }
}

/// `order += &other`
impl AddAssign<&Order> for Order {
    fn add_assign(&mut self, other: &Order) {
        self.merge(other);
    }
}

/// `Order: Margarita $0.79, Cola 50ml $0.35`. Not a stable format.
impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Order: ")?;
        for (i, dish) in self.dishes.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", dish)?;
        }
        Ok(())
    }
}

// =============================================================================
// Order Summary
// =============================================================================

/// One line of an [`OrderSummary`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub kind: DishKind,
    pub name: String,
    /// Weight or volume, for sized dishes.
    pub size: Option<u32>,
    pub price_cents: u64,
}

impl From<&Dish> for OrderLine {
    fn from(dish: &Dish) -> Self {
        OrderLine {
            kind: dish.kind(),
            name: dish.name().to_string(),
            size: dish.size(),
            price_cents: dish.price().cents(),
        }
    }
}

/// Order snapshot for JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub id: String,
    pub items: Vec<OrderLine>,
    pub item_count: usize,
    pub total_cents: u64,
}

impl From<&Order> for OrderSummary {
    fn from(order: &Order) -> Self {
        OrderSummary {
            id: order.id.clone(),
            items: order.iter().map(|d| OrderLine::from(d.as_ref())).collect(),
            item_count: order.len(),
            total_cents: order.total().cents(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
