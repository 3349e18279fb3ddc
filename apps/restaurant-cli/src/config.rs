//! # CLI Configuration
//!
//! Where the menu comes from and how results are printed.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     RESTAURANT_OUTPUT_FORMAT=json                                      │
//! │     RESTAURANT_SHOW_MENU=false                                         │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config PATH, else $RESTAURANT_CONFIG, else                       │
//! │     ~/.config/menu/menu.toml (Linux)                                   │
//! │     ~/Library/Application Support/com.restaurant.menu/menu.toml (macOS)│
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     The house menu, text output                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [output]
//! format = "text"   # text | json
//! show_menu = true
//!
//! [[menu.dishes]]
//! kind = "pizza"
//! name = "Margarita"
//! price = 79
//!
//! [[menu.dishes]]
//! kind = "softdrink"
//! name = "Cola"
//! volume = 33
//! price = 25
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use restaurant_core::{Dish, Menu};

use crate::error::{CliError, CliResult};

/// Env var naming the config file.
pub const CONFIG_PATH_ENV: &str = "RESTAURANT_CONFIG";

// =============================================================================
// Output Settings
// =============================================================================

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable `Display` output.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(CliError::InvalidConfig(format!(
                "Unknown output format: '{}'. Valid options: text, json",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default)]
    pub format: OutputFormat,

    /// Print the catalog before the orders (text output only).
    #[serde(default = "default_true")]
    pub show_menu: bool,
}

fn default_true() -> bool {
    true
}

impl Default for OutputSettings {
    fn default() -> Self {
        OutputSettings {
            format: OutputFormat::default(),
            show_menu: default_true(),
        }
    }
}

// =============================================================================
// Menu Configuration
// =============================================================================

/// The catalog, in menu order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuConfig {
    #[serde(default = "house_dishes")]
    pub dishes: Vec<Dish>,
}

/// The menu served when no config file provides one.
pub fn house_dishes() -> Vec<Dish> {
    vec![
        Dish::pizza("Margarita", 79),
        Dish::burger("Burger", 90, 67),
        Dish::burger("Burger", 150, 75),
        Dish::softdrink("Cola", 33, 25),
        Dish::softdrink("Cola", 50, 35),
        Dish::softdrink("Cola", 100, 43),
        Dish::ice_cream("Strawberry", 20),
        Dish::ice_cream("Vanilla", 20),
    ]
}

impl Default for MenuConfig {
    fn default() -> Self {
        MenuConfig {
            dishes: house_dishes(),
        }
    }
}

impl MenuConfig {
    /// Builds the catalog.
    pub fn build(&self) -> Menu {
        Menu::new(self.dishes.iter().cloned())
    }
}

// =============================================================================
// Restaurant Config
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RestaurantConfig {
    #[serde(default)]
    pub menu: MenuConfig,

    #[serde(default)]
    pub output: OutputSettings,
}

impl RestaurantConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file
    /// 3. Environment variables
    ///
    /// An explicitly named file (argument or `RESTAURANT_CONFIG`) must exist;
    /// the platform default location is only used if present.
    pub fn load(config_path: Option<PathBuf>) -> CliResult<Self> {
        let explicit = config_path.or_else(|| std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from));

        let mut config = match explicit {
            Some(path) => {
                info!(?path, "Loading menu config from file");
                Self::from_toml(&std::fs::read_to_string(&path)?)?
            }
            None => match Self::default_config_path() {
                Some(path) if path.exists() => {
                    info!(?path, "Loading menu config from default location");
                    Self::from_toml(&std::fs::read_to_string(&path)?)?
                }
                path => {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
            },
        };

        config.apply_env_overrides()?;

        Ok(config)
    }

    pub fn from_toml(contents: &str) -> CliResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Renders the config as TOML, e.g. to bootstrap a menu file.
    pub fn to_toml(&self) -> CliResult<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::InvalidConfig(e.to_string()))
    }

    fn apply_env_overrides(&mut self) -> CliResult<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from a key lookup (the environment in production).
    fn apply_overrides<F>(&mut self, lookup: F) -> CliResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(format) = lookup("RESTAURANT_OUTPUT_FORMAT") {
            debug!(format = %format, "Overriding output format from environment");
            self.output.format = format.parse()?;
        }

        if let Some(show) = lookup("RESTAURANT_SHOW_MENU") {
            match show.to_lowercase().as_str() {
                "1" | "true" | "yes" => self.output.show_menu = true,
                "0" | "false" | "no" => self.output.show_menu = false,
                _ => warn!(value = %show, "Unknown RESTAURANT_SHOW_MENU value, ignoring"),
            }
        }

        Ok(())
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "restaurant", "menu")
            .map(|dirs| dirs.config_dir().join("menu.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = RestaurantConfig::default();
        assert_eq!(config.menu.dishes.len(), 8);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.output.show_menu);
        assert_eq!(config.menu.build().size(), 8);
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("TEXT".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_file_menu_replaces_house_menu() {
        let config = RestaurantConfig::from_toml(
            r#"
            [[menu.dishes]]
            kind = "pizza"
            name = "Quattro Formaggi"
            price = 95
            "#,
        )
        .unwrap();

        assert_eq!(config.menu.dishes, vec![Dish::pizza("Quattro Formaggi", 95)]);
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let config = RestaurantConfig::from_toml("[output]\nformat = \"json\"\n").unwrap();
        assert_eq!(config.menu.dishes, house_dishes());
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.show_menu);
    }

    #[test]
    fn test_empty_menu_is_allowed() {
        let config = RestaurantConfig::from_toml("[menu]\ndishes = []\n").unwrap();
        assert!(config.menu.build().is_empty());
    }

    #[test]
    fn test_bad_toml_is_reported() {
        let err = RestaurantConfig::from_toml("[[menu.dishes]]\nkind = \"sushi\"\nname = \"X\"\n")
            .unwrap_err();
        assert!(matches!(err, CliError::ConfigParse(_)));
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("RESTAURANT_OUTPUT_FORMAT", "json"),
            ("RESTAURANT_SHOW_MENU", "no"),
        ]
        .into_iter()
        .collect();

        let mut config = RestaurantConfig::default();
        config
            .apply_overrides(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(!config.output.show_menu);
    }

    #[test]
    fn test_invalid_override_is_an_error() {
        let mut config = RestaurantConfig::default();
        let result = config.apply_overrides(|key| {
            (key == "RESTAURANT_OUTPUT_FORMAT").then(|| "xml".to_string())
        });
        assert!(matches!(result, Err(CliError::InvalidConfig(_))));
    }

    #[test]
    fn test_toml_round_trip_keeps_menu() {
        let config = RestaurantConfig::default();
        let toml_str = config.to_toml().unwrap();
        assert!(toml_str.contains("[[menu.dishes]]"));
        assert!(toml_str.contains("[output]"));

        let parsed = RestaurantConfig::from_toml(&toml_str).unwrap();
        assert_eq!(parsed.menu.dishes, config.menu.dishes);
    }
}
