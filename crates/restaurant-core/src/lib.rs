//! # restaurant-core: Pure Business Logic for the Restaurant
//!
//! A fixed menu of dishes, order assembly by matching loose specifications
//! against that menu, and the running tab. Zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Restaurant Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  restaurant-cli (apps/)                         │   │
//! │  │    config file ──► Menu      args ──► specs ──► print tab       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            ★ restaurant-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   dish    │  │   menu    │  │   order   │  │   money   │  │   │
//! │  │   │   Dish    │  │   Menu    │  │   Order   │  │   Money   │  │   │
//! │  │   │ DishKind  │  │  resolve  │  │   total   │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`dish`] - Dish variants and specification matching predicate
//! - [`menu`] - The catalog and order construction
//! - [`order`] - Orders and their tab
//! - [`money`] - Unsigned integer cents
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use restaurant_core::{Dish, Menu};
//!
//! let menu = Menu::new([
//!     Dish::pizza("Margarita", 79),
//!     Dish::burger("Burger", 90, 67),
//!     Dish::burger("Burger", 150, 75),
//!     Dish::softdrink("Cola", 33, 25),
//!     Dish::softdrink("Cola", 50, 35),
//! ]);
//!
//! let mut tab = menu
//!     .make_order(&[Dish::pizza("Margarita", 0), Dish::softdrink("Cola", 50, 0)])
//!     .unwrap();
//! let more = menu
//!     .make_order(&[Dish::burger("Burger", 90, 0), Dish::softdrink("Cola", 0, 0)])
//!     .unwrap();
//!
//! tab.merge(&more);
//! assert_eq!(tab.total().cents(), 206);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod dish;
pub mod error;
pub mod menu;
pub mod money;
pub mod order;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use dish::{Dish, DishKind, ANY_SIZE};
pub use error::{CoreError, CoreResult};
pub use menu::{Menu, MenuListing, Selection};
pub use money::Money;
pub use order::{Order, OrderLine, OrderSummary};
