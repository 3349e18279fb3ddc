//! # Menu
//!
//! The restaurant's catalog and the specification matching that turns a
//! customer's wishes into an [`Order`].
//!
//! ## How an Order is Resolved
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  make_order([Burger "Burger" 90g, Softdrink "Cola" any])                │
//! │                                                                         │
//! │  Spec 1: Burger "Burger" 90g                                            │
//! │    scan catalog ──► Burger 90g $0.67 ✓   Burger 150g $0.75 ✗           │
//! │    cheapest match ──► Burger 90g $0.67                                  │
//! │                                                                         │
//! │  Spec 2: Softdrink "Cola" (size 0 = any)                                │
//! │    scan catalog ──► 33ml $0.25 ✓  50ml $0.35 ✓  100ml $0.43 ✓           │
//! │    cheapest match ──► Cola 33ml $0.25                                   │
//! │                                                                         │
//! │  All resolved ──► Order [Burger 90g, Cola 33ml], tab $0.92             │
//! │  Any missing  ──► Err(DishNotFound), no order at all                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Selection Rules
//! | Kind      | Matches when                      | Among several matches  |
//! |-----------|-----------------------------------|------------------------|
//! | Pizza     | same name                         | first in catalog order |
//! | IceCream  | same name                         | first in catalog order |
//! | Burger    | same name, weight equal or any    | cheapest, then first   |
//! | Softdrink | same name, volume equal or any    | cheapest, then first   |

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::debug;
use ts_rs::TS;

use crate::dish::{Dish, DishKind};
use crate::error::{CoreError, CoreResult};
use crate::order::Order;

// =============================================================================
// Selection Policy
// =============================================================================

/// How a winner is picked when several catalog dishes satisfy a spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// The first match in catalog order.
    FirstListed,
    /// The lowest price; equal prices keep the earliest in catalog order.
    Cheapest,
}

impl Selection {
    /// Returns the selection policy for a dish kind.
    pub fn for_kind(kind: DishKind) -> Self {
        match kind {
            DishKind::Pizza | DishKind::IceCream => Selection::FirstListed,
            DishKind::Burger | DishKind::Softdrink => Selection::Cheapest,
        }
    }
}

// =============================================================================
// Menu
// =============================================================================

/// An ordered catalog of dishes.
///
/// ## Value Semantics
/// - `clone()` copies the list; both menus share the same `Arc<Dish>` values.
/// - [`Menu::take`] moves the catalog out and leaves the source empty.
///
/// ## Example
/// ```rust
/// use restaurant_core::{Dish, Menu};
///
/// let menu = Menu::new([
///     Dish::pizza("Margarita", 79),
///     Dish::softdrink("Cola", 33, 25),
///     Dish::softdrink("Cola", 50, 35),
/// ]);
///
/// let order = menu
///     .make_order(&[Dish::pizza("Margarita", 0), Dish::softdrink("Cola", 0, 0)])
///     .unwrap();
/// assert_eq!(order.total().cents(), 104);
///
/// assert!(menu.make_order(&[Dish::pizza("Calzone", 0)]).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Menu {
    dishes: Vec<Arc<Dish>>,
}

impl Menu {
    /// Creates a menu from dishes, keeping their order.
    pub fn new(dishes: impl IntoIterator<Item = Dish>) -> Self {
        Menu {
            dishes: dishes.into_iter().map(Arc::new).collect(),
        }
    }

    /// Creates a menu from dishes that are already shared.
    pub fn from_shared(dishes: Vec<Arc<Dish>>) -> Self {
        Menu { dishes }
    }

    /// Moves the catalog out, leaving this menu empty.
    ///
    /// ## Example
    /// ```rust
    /// use restaurant_core::{Dish, Menu};
    ///
    /// let mut source = Menu::new([Dish::pizza("Margarita", 79)]);
    /// let target = source.take();
    ///
    /// assert_eq!(source.size(), 0);
    /// assert_eq!(target.size(), 1);
    /// ```
    pub fn take(&mut self) -> Menu {
        std::mem::take(self)
    }

    /// Returns the number of catalog entries.
    pub fn size(&self) -> usize {
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

    /// Finds the catalog dish that fulfils `spec`.
    ///
    /// ## How It Works
    /// 1. Scans the whole catalog for dishes that [satisfy](Dish::satisfies)
    ///    the spec (same kind, same name, matching size)
    /// 2. Picks one according to [`Selection::for_kind`]
    ///
    /// The spec's price is never looked at.
    pub fn resolve(&self, spec: &Dish) -> Option<Arc<Dish>> {
        let mut candidates = self.dishes.iter().filter(|d| d.satisfies(spec));

        // min_by_key keeps the first of equal minima
        let found = match Selection::for_kind(spec.kind()) {
            Selection::FirstListed => candidates.next(),
            Selection::Cheapest => candidates.min_by_key(|d| d.price()),
        };

        match found {
            Some(dish) => {
                debug!(
                    kind = %spec.kind(),
                    name = %spec.name(),
                    resolved = %dish,
                    "Resolved dish spec"
                );
                Some(Arc::clone(dish))
            }
            None => {
                debug!(
                    kind = %spec.kind(),
                    name = %spec.name(),
                    size = ?spec.size(),
                    catalog_size = self.size(),
                    "No dish matches spec"
                );
                None
            }
        }
    }

    /// Builds an order from a list of specifications.
    ///
    /// ## All or Nothing
    /// Every spec is resolved in the given order. The first spec that matches
    /// nothing aborts the whole call with [`CoreError::DishNotFound`]; no
    /// partial order is ever returned. On success the order holds exactly one
    /// dish per spec, in spec order.
    ///
    /// ## Errors
    /// `DishNotFound` naming the first unresolved spec.
    pub fn make_order<'a, I>(&self, specs: I) -> CoreResult<Order>
    where
        I: IntoIterator<Item = &'a Dish>,
    {
        let mut order = Order::new();

        for spec in specs {
            let dish = self.resolve(spec).ok_or_else(|| CoreError::DishNotFound {
                kind: spec.kind(),
                name: spec.name().to_string(),
                size: spec.size(),
            })?;
            order.append(dish);
        }

        debug!(
            order_id = %order.id(),
            items = order.len(),
            total = %order.total(),
            "Order created"
        );

        Ok(order)
    }

    /// Returns a serializable snapshot of the catalog.
    pub fn listing(&self) -> MenuListing {
        MenuListing::from(self)
    }
}

impl FromIterator<Dish> for Menu {
    fn from_iter<T: IntoIterator<Item = Dish>>(iter: T) -> Self {
        Menu::new(iter)
    }
}

impl From<Vec<Dish>> for Menu {
    fn from(dishes: Vec<Dish>) -> Self {
        Menu::new(dishes)
    }
}

/// `Menu: Margarita $0.79, Burger 90g $0.67, ...`. Not a stable format.
impl fmt::Display for Menu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Menu: ")?;
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
// Menu Listing
// =============================================================================

/// Catalog snapshot for JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MenuListing {
    pub items: Vec<Dish>,
}

impl From<&Menu> for MenuListing {
    fn from(menu: &Menu) -> Self {
        MenuListing {
            items: menu.iter().map(|d| d.as_ref().clone()).collect(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dish::ANY_SIZE;
    use crate::money::Money;

    fn house_menu() -> Menu {
        Menu::new([
            Dish::pizza("Margarita", 79),
            Dish::burger("Burger", 90, 67),
            Dish::burger("Burger", 150, 75),
            Dish::softdrink("Cola", 33, 25),
            Dish::softdrink("Cola", 50, 35),
            Dish::softdrink("Cola", 100, 43),
            Dish::ice_cream("Strawberry", 20),
            Dish::ice_cream("Vanilla", 20),
        ])
    }

    #[test]
    fn test_copy_and_move() {
        let menu = house_menu();

        // Copy
        let mut menu2 = menu.clone();
        assert_eq!(menu.size(), 8);
        assert_eq!(menu2.size(), 8);

        // Move
        let menu3 = menu2.take();
        assert_eq!(menu2.size(), 0);
        assert_eq!(menu3.size(), 8);

        // Copy assignment
        let mut menu4 = Menu::default();
        menu4.clone_from(&menu3);
        assert_eq!(menu3.size(), 8);
        assert_eq!(menu4.size(), 8);

        // Move assignment
        let mut menu5 = Menu::default();
        assert_eq!(menu5.size(), 0);
        menu5 = menu4.take();
        assert_eq!(menu4.size(), 0);
        assert_eq!(menu5.size(), 8);

        assert_eq!(menu4.to_string(), "Menu: ");
        assert!(menu5.to_string().starts_with("Menu: Margarita $0.79, Burger 90g $0.67"));
    }

    #[test]
    fn test_copies_share_dishes_but_not_the_list() {
        let menu = house_menu();
        let mut copy = menu.clone();

        assert!(Arc::ptr_eq(&menu.dishes()[0], &copy.dishes()[0]));

        copy.take();
        assert_eq!(menu.size(), 8);
    }

    #[test]
    fn test_reference_scenario() {
        let menu = house_menu();

        let order1 = menu
            .make_order(&[Dish::pizza("Margarita", 0), Dish::softdrink("Cola", 50, 0)])
            .unwrap();
        assert_eq!(order1.total().cents(), 114);

        // let the restaurant pick the Cola size
        let mut order2 = menu
            .make_order(&[Dish::burger("Burger", 90, 0), Dish::softdrink("Cola", ANY_SIZE, 0)])
            .unwrap();
        assert_eq!(order2.total().cents(), 92);
        assert_eq!(order2.dishes()[1].volume(), Some(33));

        order2 += &order1;
        assert_eq!(order2.total().cents(), 206);
        assert_eq!(order2.len(), 4);
        assert_eq!(order1.len(), 2);

        let err = menu
            .make_order(&[Dish::pizza("Calzone", 0), Dish::softdrink("Cola", 33, 0)])
            .unwrap_err();
        assert_eq!(
            err,
            CoreError::DishNotFound {
                kind: DishKind::Pizza,
                name: "Calzone".to_string(),
                size: None,
            }
        );
    }

    #[test]
    fn test_failure_in_last_spec_still_aborts() {
        let menu = house_menu();
        let result = menu.make_order(&[
            Dish::pizza("Margarita", 0),
            Dish::ice_cream("Vanilla", 0),
            Dish::softdrink("Cola", 75, 0),
        ]);
        assert!(matches!(
            result,
            Err(CoreError::DishNotFound { size: Some(75), .. })
        ));
    }

    #[test]
    fn test_order_follows_spec_order() {
        let menu = house_menu();
        let order = menu
            .make_order(&[
                Dish::ice_cream("Vanilla", 0),
                Dish::pizza("Margarita", 0),
                Dish::ice_cream("Vanilla", 0),
            ])
            .unwrap();

        let names: Vec<&str> = order.iter().map(|d| d.name()).collect();
        assert_eq!(names, vec!["Vanilla", "Margarita", "Vanilla"]);
        assert_eq!(order.total().cents(), 119);
    }

    #[test]
    fn test_empty_spec_list_gives_empty_order() {
        let no_specs: [Dish; 0] = [];
        let order = house_menu().make_order(&no_specs).unwrap();
        assert!(order.is_empty());
        assert_eq!(order.total(), Money::zero());
    }

    #[test]
    fn test_wildcard_burger_picks_cheapest() {
        // cheaper variant listed second
        let menu = Menu::new([Dish::burger("Burger", 150, 75), Dish::burger("Burger", 90, 67)]);
        let dish = menu.resolve(&Dish::burger("Burger", ANY_SIZE, 0)).unwrap();
        assert_eq!(dish.weight(), Some(90));
    }

    #[test]
    fn test_exact_size_beats_cheaper_other_size() {
        let menu = house_menu();
        let dish = menu.resolve(&Dish::burger("Burger", 150, 0)).unwrap();
        assert_eq!(dish.price().cents(), 75);
    }

    #[test]
    fn test_cheapest_tie_keeps_catalog_order() {
        let menu = Menu::new([
            Dish::softdrink("Lemonade", 100, 30),
            Dish::softdrink("Lemonade", 200, 30),
            Dish::softdrink("Lemonade", 300, 40),
        ]);
        let dish = menu.resolve(&Dish::softdrink("Lemonade", ANY_SIZE, 0)).unwrap();
        assert_eq!(dish.volume(), Some(100));
    }

    #[test]
    fn test_unsized_kinds_take_first_listed_not_cheapest() {
        let menu = Menu::new([Dish::pizza("Margarita", 99), Dish::pizza("Margarita", 10)]);
        let dish = menu.resolve(&Dish::pizza("Margarita", 0)).unwrap();
        assert_eq!(dish.price().cents(), 99);
    }

    #[test]
    fn test_spec_price_is_ignored() {
        let menu = house_menu();
        let dish = menu.resolve(&Dish::ice_cream("Strawberry", 9999)).unwrap();
        assert_eq!(dish.price().cents(), 20);
    }

    #[test]
    fn test_resolve_returns_catalog_instance() {
        let menu = house_menu();
        let dish = menu.resolve(&Dish::pizza("Margarita", 0)).unwrap();
        assert!(Arc::ptr_eq(&dish, &menu.dishes()[0]));
    }

    #[test]
    fn test_empty_menu_resolves_nothing() {
        let menu = Menu::default();
        assert!(menu.is_empty());
        assert!(menu.resolve(&Dish::pizza("Margarita", 0)).is_none());
        assert!(menu.make_order(&[Dish::pizza("Margarita", 0)]).is_err());
    }

    #[test]
    fn test_order_outlives_menu() {
        let order = {
            let menu = house_menu();
            menu.make_order(&[Dish::pizza("Margarita", 0)]).unwrap()
        };
        assert_eq!(order.dishes()[0].name(), "Margarita");
    }

    #[test]
    fn test_selection_policy() {
        assert_eq!(Selection::for_kind(DishKind::Pizza), Selection::FirstListed);
        assert_eq!(Selection::for_kind(DishKind::IceCream), Selection::FirstListed);
        assert_eq!(Selection::for_kind(DishKind::Burger), Selection::Cheapest);
        assert_eq!(Selection::for_kind(DishKind::Softdrink), Selection::Cheapest);
    }

    #[test]
    fn test_listing() {
        let listing = Menu::new([Dish::pizza("Margarita", 79)]).listing();
        assert_eq!(listing.items, vec![Dish::pizza("Margarita", 79)]);
    }

    #[test]
    fn test_menu_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Menu>();
        assert_send_sync::<Order>();
    }
}
