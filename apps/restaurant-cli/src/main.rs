//! # Restaurant CLI
//!
//! Builds orders from the menu and prints the tab.
//!
//! ## Usage
//! ```bash
//! # Pizza with a 50ml Cola, plus a 90g burger with the cheapest Cola
//! restaurant pizza:Margarita softdrink:Cola:50 + burger:Burger:90 softdrink:Cola
//!
//! # Same, as JSON
//! restaurant --json pizza:Margarita softdrink:Cola:50
//!
//! # Use a custom menu, or write the house menu out as a starting point
//! restaurant --config ./menu.toml pizza:Calzone
//! restaurant --dump-config > menu.toml
//! ```
//!
//! ## Flow
//! ```text
//! args ──► specs per order ──► Menu::make_order (each) ──► merge ──► print
//!                                      │
//!                                      └── any spec unresolved ──► exit 1
//! ```

mod config;
mod error;
mod spec;

use serde::Serialize;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use restaurant_core::{Menu, MenuListing, Order, OrderSummary};

use crate::config::{OutputFormat, RestaurantConfig};
use crate::error::{CliError, CliResult};
use crate::spec::{parse_args, Args, USAGE};

/// Everything printed in JSON mode.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Receipt {
    menu: MenuListing,
    orders: Vec<OrderSummary>,
    tab: OrderSummary,
}

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(e) = run(&args) {
        error!(error = %e, "Order failed");
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(raw_args: &[String]) -> CliResult<()> {
    let args = parse_args(raw_args)?;
    if args.help {
        println!("{}", USAGE);
        return Ok(());
    }

    let mut config = RestaurantConfig::load(args.config.clone())?;
    if args.json {
        config.output.format = OutputFormat::Json;
    }

    if args.dump_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    let menu = config.menu.build();
    info!(dishes = menu.size(), format = %config.output.format, "Menu loaded");

    let orders = build_orders(&menu, &args)?;
    let tab = merge_into_tab(&orders);

    match config.output.format {
        OutputFormat::Text => {
            if config.output.show_menu || orders.is_empty() {
                println!("{}", menu);
            }
            for order in &orders {
                println!("{}", order);
            }
            if !orders.is_empty() {
                println!("Tab: {}", tab.total());
            }
        }
        OutputFormat::Json => {
            let receipt = Receipt {
                menu: menu.listing(),
                orders: orders.iter().map(OrderSummary::from).collect(),
                tab: OrderSummary::from(&tab),
            };
            println!("{}", serde_json::to_string_pretty(&receipt)?);
        }
    }

    Ok(())
}

/// Resolves every order group; the first unresolved spec fails the run.
fn build_orders(menu: &Menu, args: &Args) -> CliResult<Vec<Order>> {
    args.orders
        .iter()
        .map(|specs| menu.make_order(specs).map_err(CliError::from))
        .collect()
}

/// Merges all orders, in order, into one tab.
fn merge_into_tab(orders: &[Order]) -> Order {
    let mut tab = Order::new();
    for order in orders {
        tab.merge(order);
    }
    tab
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so JSON on stdout stays clean.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=restaurant_core=debug` - Show spec resolution
/// - Default: WARN, INFO for restaurant crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,restaurant=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
