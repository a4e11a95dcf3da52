use anyhow::Result;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::service::http::DEFAULT_BASE_URL;

pub const APP_NAME: &str = "cluegrid";

fn config_dir() -> PathBuf {
    // Use ~/.config on both Linux and macOS (not ~/Library/Application Support)
    #[cfg(unix)]
    {
        if let Ok(xdg_config_home) = std::env::var("XDG_CONFIG_HOME")
            && !xdg_config_home.is_empty()
        {
            return PathBuf::from(xdg_config_home).join(APP_NAME);
        }
        dirs::home_dir()
            .expect("Unable to find home directory")
            .join(".config")
            .join(APP_NAME)
    }
    #[cfg(windows)]
    {
        dirs::config_dir()
            .expect("Unable to find config directory")
            .join(APP_NAME)
    }
}

fn config_file() -> PathBuf {
    config_dir().join("config.toml")
}

pub const DEFAULT_CATEGORY_COUNT: usize = 6;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Trivia service endpoint configuration.
    #[serde(default)]
    pub service: ServiceConfig,

    /// Board dimensions.
    #[serde(default)]
    pub board: BoardConfig,

    /// Color theme configuration.
    #[serde(default)]
    pub theme: ThemeConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    /// Base URL of the jservice-style trivia API, for example:
    /// ```toml
    /// [service]
    /// base_url = "https://jservice.io/api"
    /// ```
    #[serde(default = "ServiceConfig::default_base_url")]
    pub base_url: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: Self::default_base_url(),
        }
    }
}

impl ServiceConfig {
    fn default_base_url() -> String {
        DEFAULT_BASE_URL.to_string()
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct BoardConfig {
    /// Number of category columns per game (default: 6). Row count is fixed
    /// at 5, matching the clue filter in acquisition.
    #[serde(default = "BoardConfig::default_categories")]
    pub categories: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            categories: Self::default_categories(),
        }
    }
}

impl BoardConfig {
    fn default_categories() -> usize {
        DEFAULT_CATEGORY_COUNT
    }

    /// Columns must be at least 1; there is no upper bound beyond what the
    /// category pool can satisfy.
    pub fn validate(&self) -> Result<()> {
        if self.categories == 0 {
            anyhow::bail!("board.categories must be at least 1");
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    /// Primary accent color, used for category headers (default: "yellow").
    #[serde(
        default = "ThemeConfig::default_accent",
        deserialize_with = "deserialize_color"
    )]
    pub accent: ThemeColor,
    /// Secondary accent color, used for the selected cell (default: "cyan").
    #[serde(
        default = "ThemeConfig::default_secondary",
        deserialize_with = "deserialize_color"
    )]
    pub secondary: ThemeColor,
    /// Error color (default: "red").
    #[serde(
        default = "ThemeConfig::default_error",
        deserialize_with = "deserialize_color"
    )]
    pub error: ThemeColor,
    /// Muted color for hidden cell markers (default: "gray").
    #[serde(
        default = "ThemeConfig::default_muted",
        deserialize_with = "deserialize_color"
    )]
    pub muted: ThemeColor,
    /// Cell border color (default: "gray").
    #[serde(
        default = "ThemeConfig::default_border",
        deserialize_with = "deserialize_color"
    )]
    pub border: ThemeColor,
    /// Hint/key binding color (default: "blue").
    #[serde(
        default = "ThemeConfig::default_hint",
        deserialize_with = "deserialize_color"
    )]
    pub hint: ThemeColor,
    /// Foreground color for the selected cell (default: "black").
    #[serde(
        default = "ThemeConfig::default_highlight_fg",
        deserialize_with = "deserialize_color"
    )]
    pub highlight_fg: ThemeColor,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent: Self::default_accent(),
            secondary: Self::default_secondary(),
            error: Self::default_error(),
            muted: Self::default_muted(),
            border: Self::default_border(),
            hint: Self::default_hint(),
            highlight_fg: Self::default_highlight_fg(),
        }
    }
}

impl ThemeConfig {
    fn default_accent() -> ThemeColor {
        ThemeColor::Named(NamedColor::Yellow)
    }
    fn default_secondary() -> ThemeColor {
        ThemeColor::Named(NamedColor::Cyan)
    }
    fn default_error() -> ThemeColor {
        ThemeColor::Named(NamedColor::Red)
    }
    fn default_muted() -> ThemeColor {
        ThemeColor::Named(NamedColor::Gray)
    }
    fn default_border() -> ThemeColor {
        ThemeColor::Named(NamedColor::Gray)
    }
    fn default_hint() -> ThemeColor {
        ThemeColor::Named(NamedColor::Blue)
    }
    fn default_highlight_fg() -> ThemeColor {
        ThemeColor::Named(NamedColor::Black)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeColor {
    Named(NamedColor),
    Rgb(u8, u8, u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Gray,
}

impl NamedColor {
    /// All named colours in alphabetical order, as accepted by the config parser.
    pub const fn all() -> &'static [(&'static str, NamedColor)] {
        &[
            ("black", NamedColor::Black),
            ("blue", NamedColor::Blue),
            ("cyan", NamedColor::Cyan),
            ("gray", NamedColor::Gray),
            ("green", NamedColor::Green),
            ("magenta", NamedColor::Magenta),
            ("red", NamedColor::Red),
            ("white", NamedColor::White),
            ("yellow", NamedColor::Yellow),
        ]
    }
}

impl ThemeColor {
    pub fn parse(s: &str) -> Option<Self> {
        if let Some(hex) = s.strip_prefix('#')
            && hex.len() == 6
        {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            return Some(Self::Rgb(r, g, b));
        }
        let lower = s.to_lowercase();
        // Handle aliases not in the canonical list
        let lookup = match lower.as_str() {
            "grey" => "gray",
            other => other,
        };
        NamedColor::all()
            .iter()
            .find(|(name, _)| *name == lookup)
            .map(|(_, color)| Self::Named(*color))
    }
}

fn deserialize_color<'de, D>(deserializer: D) -> Result<ThemeColor, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    ThemeColor::parse(&s).ok_or_else(|| {
        serde::de::Error::custom(format!(
            "invalid color '{s}': expected a named color (black, red, green, yellow, blue, magenta, cyan, white, gray/grey) or hex (#rrggbb)"
        ))
    })
}

pub fn load_config_from_str(s: &str) -> Result<Config> {
    let config: Config = toml::from_str(s)?;
    config.board.validate()?;
    Ok(config)
}

/// Load configuration, falling back to defaults when no config file exists.
/// An explicit `--config` path must exist.
pub fn load_config(config_override: Option<&Path>) -> Result<Config> {
    let config_file = match config_override {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found at {}", path.display());
            }
            path.to_path_buf()
        }
        None => {
            let path = config_file();
            if !path.exists() {
                return Ok(Config::default());
            }
            path
        }
    };
    let contents = fs::read_to_string(&config_file)?;
    load_config_from_str(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_gets_defaults() {
        let config = load_config_from_str("").unwrap();
        assert_eq!(config.service.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.board.categories, DEFAULT_CATEGORY_COUNT);
    }

    #[test]
    fn test_full_config() {
        let config = load_config_from_str(
            r#"
[service]
base_url = "http://localhost:8080/api"

[board]
categories = 4
"#,
        )
        .unwrap();
        assert_eq!(config.service.base_url, "http://localhost:8080/api");
        assert_eq!(config.board.categories, 4);
    }

    #[test]
    fn test_zero_categories_rejected() {
        let result = load_config_from_str(
            r#"
[board]
categories = 0
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = load_config_from_str("unknown_field = true");
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_default_config_file_is_fine() {
        let dir = tempfile::tempdir().unwrap();
        unsafe { std::env::set_var("XDG_CONFIG_HOME", dir.path()) };
        let result = load_config(None);
        unsafe { std::env::remove_var("XDG_CONFIG_HOME") };
        assert!(result.is_ok());
    }

    #[test]
    fn test_missing_override_config_fails() {
        let result = load_config(Some(Path::new("/nonexistent/cluegrid.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_theme_config_defaults() {
        let config = load_config_from_str("").unwrap();
        assert_eq!(config.theme.accent, ThemeColor::Named(NamedColor::Yellow));
        assert_eq!(config.theme.secondary, ThemeColor::Named(NamedColor::Cyan));
        assert_eq!(config.theme.error, ThemeColor::Named(NamedColor::Red));
        assert_eq!(config.theme.muted, ThemeColor::Named(NamedColor::Gray));
        assert_eq!(config.theme.border, ThemeColor::Named(NamedColor::Gray));
        assert_eq!(config.theme.hint, ThemeColor::Named(NamedColor::Blue));
        assert_eq!(
            config.theme.highlight_fg,
            ThemeColor::Named(NamedColor::Black)
        );
    }

    #[test]
    fn test_theme_config_custom() {
        let config = load_config_from_str(
            r##"
[theme]
accent = "blue"
secondary = "#ff00ff"
"##,
        )
        .unwrap();
        assert_eq!(config.theme.accent, ThemeColor::Named(NamedColor::Blue));
        assert_eq!(config.theme.secondary, ThemeColor::Rgb(255, 0, 255));
        assert_eq!(config.theme.error, ThemeColor::Named(NamedColor::Red));
    }

    #[test]
    fn test_theme_invalid_color_rejected() {
        let result = load_config_from_str(
            r#"
[theme]
accent = "notacolor"
"#,
        );
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("invalid color"), "Error was: {err}");
    }

    #[test]
    fn test_theme_color_parse() {
        assert_eq!(
            ThemeColor::parse("magenta"),
            Some(ThemeColor::Named(NamedColor::Magenta))
        );
        assert_eq!(
            ThemeColor::parse("RED"),
            Some(ThemeColor::Named(NamedColor::Red))
        );
        assert_eq!(
            ThemeColor::parse("#ff0000"),
            Some(ThemeColor::Rgb(255, 0, 0))
        );
        assert_eq!(
            ThemeColor::parse("grey"),
            Some(ThemeColor::Named(NamedColor::Gray))
        );
        assert_eq!(ThemeColor::parse("notacolor"), None);
        assert_eq!(ThemeColor::parse("#fff"), None);
        assert_eq!(ThemeColor::parse("#zzzzzz"), None);
    }
}
