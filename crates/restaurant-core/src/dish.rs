//! # Dishes
//!
//! The four kinds of dish the restaurant serves.
//!
//! ## Dish Variants
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                            Dish (enum)                                  │
//! │                                                                         │
//! │  ┌───────────────┐  ┌───────────────┐  ┌───────────────┐  ┌──────────┐ │
//! │  │    Pizza      │  │    Burger     │  │   Softdrink   │  │ IceCream │ │
//! │  │  ───────────  │  │  ───────────  │  │  ───────────  │  │ ──────── │ │
//! │  │  name         │  │  name         │  │  name         │  │  name    │ │
//! │  │  price        │  │  weight (g)   │  │  volume (ml)  │  │  price   │ │
//! │  │               │  │  price        │  │  price        │  │          │ │
//! │  └───────────────┘  └───────────────┘  └───────────────┘  └──────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Catalog Entries vs. Specifications
//! The same `Dish` type serves two roles:
//! - **Catalog entry**: a real menu item with a real price.
//! - **Specification**: what the customer asked for. The price is ignored and
//!   a size of [`ANY_SIZE`] lets the menu pick the cheapest size.
//!
//! ```rust
//! use restaurant_core::dish::Dish;
//!
//! let on_menu = Dish::softdrink("Cola", 50, 35);
//! let asked_for = Dish::softdrink("Cola", 0, 0);
//!
//! assert!(on_menu.satisfies(&asked_for));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::CoreError;
use crate::money::Money;

/// Size value meaning "any size" in a specification.
pub const ANY_SIZE: u32 = 0;

// =============================================================================
// Dish Kind
// =============================================================================

/// Discriminant of [`Dish`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DishKind {
    Pizza,
    /// Sized by weight in grams.
    Burger,
    /// Sized by volume in millilitres.
    Softdrink,
    IceCream,
}

impl DishKind {
    /// Returns true for kinds that carry a size (weight or volume).
    pub fn is_sized(&self) -> bool {
        matches!(self, DishKind::Burger | DishKind::Softdrink)
    }
}

impl fmt::Display for DishKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DishKind::Pizza => write!(f, "pizza"),
            DishKind::Burger => write!(f, "burger"),
            DishKind::Softdrink => write!(f, "softdrink"),
            DishKind::IceCream => write!(f, "ice_cream"),
        }
    }
}

impl FromStr for DishKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pizza" => Ok(DishKind::Pizza),
            "burger" => Ok(DishKind::Burger),
            "softdrink" | "soft_drink" | "drink" => Ok(DishKind::Softdrink),
            "ice_cream" | "icecream" => Ok(DishKind::IceCream),
            other => Err(CoreError::UnknownDishKind(other.to_string())),
        }
    }
}

// =============================================================================
// Dish
// =============================================================================

/// A dish on the menu, or a customer's description of one.
///
/// Catalog dishes are shared as `Arc<Dish>` between the menu and any orders,
/// and are never mutated after construction.
///
/// ## Config Format
/// ```toml
/// [[menu.dishes]]
/// kind = "burger"
/// name = "Burger"
/// weight = 90
/// price = 67
/// ```
/// `weight`, `volume` and `price` default to 0 when omitted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Dish {
    Pizza {
        name: String,
        #[serde(default)]
        price: Money,
    },
    Burger {
        name: String,
        /// Grams.
        #[serde(default)]
        weight: u32,
        #[serde(default)]
        price: Money,
    },
    Softdrink {
        name: String,
        /// Millilitres.
        #[serde(default)]
        volume: u32,
        #[serde(default)]
        price: Money,
    },
    IceCream {
        name: String,
        #[serde(default)]
        price: Money,
    },
}

impl Dish {
    /// Creates a pizza.
    pub fn pizza(name: impl Into<String>, price: u64) -> Self {
        Dish::Pizza {
            name: name.into(),
            price: Money::from_cents(price),
        }
    }

    /// Creates a burger of `weight` grams.
    pub fn burger(name: impl Into<String>, weight: u32, price: u64) -> Self {
        Dish::Burger {
            name: name.into(),
            weight,
            price: Money::from_cents(price),
        }
    }

    /// Creates a soft drink of `volume` millilitres.
    pub fn softdrink(name: impl Into<String>, volume: u32, price: u64) -> Self {
        Dish::Softdrink {
            name: name.into(),
            volume,
            price: Money::from_cents(price),
        }
    }

    /// Creates an ice cream.
    pub fn ice_cream(name: impl Into<String>, price: u64) -> Self {
        Dish::IceCream {
            name: name.into(),
            price: Money::from_cents(price),
        }
    }

    /// Creates a price-less specification of the given kind.
    ///
    /// `size` is ignored for unsized kinds.
    ///
    /// ## Example
    /// ```rust
    /// use restaurant_core::dish::{Dish, DishKind, ANY_SIZE};
    ///
    /// let spec = Dish::spec(DishKind::Softdrink, "Cola", ANY_SIZE);
    /// assert_eq!(spec, Dish::softdrink("Cola", 0, 0));
    /// ```
    pub fn spec(kind: DishKind, name: impl Into<String>, size: u32) -> Self {
        match kind {
            DishKind::Pizza => Dish::pizza(name, 0),
            DishKind::Burger => Dish::burger(name, size, 0),
            DishKind::Softdrink => Dish::softdrink(name, size, 0),
            DishKind::IceCream => Dish::ice_cream(name, 0),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Dish::Pizza { name, .. }
            | Dish::Burger { name, .. }
            | Dish::Softdrink { name, .. }
            | Dish::IceCream { name, .. } => name,
        }
    }

    pub fn price(&self) -> Money {
        match self {
            Dish::Pizza { price, .. }
            | Dish::Burger { price, .. }
            | Dish::Softdrink { price, .. }
            | Dish::IceCream { price, .. } => *price,
        }
    }

    pub fn kind(&self) -> DishKind {
        match self {
            Dish::Pizza { .. } => DishKind::Pizza,
            Dish::Burger { .. } => DishKind::Burger,
            Dish::Softdrink { .. } => DishKind::Softdrink,
            Dish::IceCream { .. } => DishKind::IceCream,
        }
    }

    /// Weight for burgers, volume for soft drinks, `None` otherwise.
    pub fn size(&self) -> Option<u32> {
        match self {
            Dish::Burger { weight, .. } => Some(*weight),
            Dish::Softdrink { volume, .. } => Some(*volume),
            Dish::Pizza { .. } | Dish::IceCream { .. } => None,
        }
    }

    /// Burger weight in grams.
    pub fn weight(&self) -> Option<u32> {
        match self {
            Dish::Burger { weight, .. } => Some(*weight),
            _ => None,
        }
    }

    /// Soft drink volume in millilitres.
    pub fn volume(&self) -> Option<u32> {
        match self {
            Dish::Softdrink { volume, .. } => Some(*volume),
            _ => None,
        }
    }

    /// Checks whether this catalog dish fulfils `spec`.
    ///
    /// ## Rules
    /// - Kinds must be the same and names must be equal
    /// - Sized kinds: the spec size must be [`ANY_SIZE`] or equal ours
    /// - Price never takes part in matching
    pub fn satisfies(&self, spec: &Dish) -> bool {
        if self.kind() != spec.kind() || self.name() != spec.name() {
            return false;
        }

        match (spec.size(), self.size()) {
            (Some(ANY_SIZE), _) | (None, None) => true,
            (Some(wanted), Some(ours)) => wanted == ours,
            _ => false,
        }
    }
}

/// `Margarita $0.79`, `Burger 90g $0.67`, `Cola 33ml $0.25`.
///
/// A size of [`ANY_SIZE`] is left out.
impl fmt::Display for Dish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())?;
        match self {
            Dish::Burger { weight, .. } if *weight != ANY_SIZE => write!(f, " {}g", weight)?,
            Dish::Softdrink { volume, .. } if *volume != ANY_SIZE => write!(f, " {}ml", volume)?,
            _ => {}
        }
        write!(f, " {}", self.price())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
