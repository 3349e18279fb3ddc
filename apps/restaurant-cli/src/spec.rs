//! # Command-Line Parsing
//!
//! Turns `pizza:Margarita softdrink:Cola:50 + burger:Burger` into groups of
//! dish specifications, one group per order.
//!
//! ## Spec Syntax
//! ```text
//! kind:name[:size]
//!
//!   pizza:Margarita          any pizza called Margarita
//!   softdrink:Cola:50        a 50ml Cola
//!   softdrink:Cola           any Cola, cheapest size wins
//!   burger:Burger:0          same as omitting the size
//! ```

use std::path::PathBuf;

use restaurant_core::{Dish, DishKind, ANY_SIZE};

use crate::error::{CliError, CliResult};

pub const USAGE: &str = "\
Usage: restaurant [--config PATH] [--json] [--dump-config] SPEC... [+ SPEC...]...

  SPEC is kind:name[:size], e.g. pizza:Margarita or softdrink:Cola:50.
  A missing or zero size lets the menu choose the cheapest size.
  '+' starts a new order; all orders are merged into one tab.";

/// Parsed command line.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Args {
    pub config: Option<PathBuf>,
    pub json: bool,
    pub dump_config: bool,
    pub help: bool,
    /// One entry per order, in command-line order.
    pub orders: Vec<Vec<Dish>>,
}

/// Parses arguments (without the program name).
pub fn parse_args(args: &[String]) -> CliResult<Args> {
    let mut parsed = Args::default();
    let mut current: Vec<Dish> = Vec::new();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                let path = args
                    .get(i + 1)
                    .ok_or_else(|| CliError::Usage("--config needs a path".to_string()))?;
                parsed.config = Some(PathBuf::from(path));
                i += 1;
            }
            "--json" => parsed.json = true,
            "--dump-config" => parsed.dump_config = true,
            "--help" | "-h" => parsed.help = true,
            "+" => {
                if current.is_empty() {
                    return Err(CliError::Usage("'+' must separate non-empty orders".to_string()));
                }
                parsed.orders.push(std::mem::take(&mut current));
            }
            flag if flag.starts_with("--") => {
                return Err(CliError::Usage(format!("Unknown option: {}", flag)));
            }
            spec => current.push(parse_spec(spec)?),
        }
        i += 1;
    }

    if !current.is_empty() {
        parsed.orders.push(current);
    } else if !parsed.orders.is_empty() {
        return Err(CliError::Usage("Trailing '+' without an order".to_string()));
    }

    Ok(parsed)
}

/// Parses one `kind:name[:size]` spec.
pub fn parse_spec(spec: &str) -> CliResult<Dish> {
    let invalid = |reason: &str| CliError::InvalidSpec {
        spec: spec.to_string(),
        reason: reason.to_string(),
    };

    let mut parts = spec.splitn(3, ':');
    let kind: DishKind = parts
        .next()
        .unwrap_or_default()
        .parse()
        .map_err(|e: restaurant_core::CoreError| invalid(&e.to_string()))?;

    let name = parts.next().map(str::trim).unwrap_or_default();
    if name.is_empty() {
        return Err(invalid("missing dish name"));
    }

    let size = match parts.next() {
        None => ANY_SIZE,
        Some(_) if !kind.is_sized() => return Err(invalid("this kind of dish has no size")),
        Some(raw) => raw
            .trim()
            .parse::<u32>()
            .map_err(|_| invalid("size must be a whole number"))?,
    };

    Ok(Dish::spec(kind, name, size))
}
