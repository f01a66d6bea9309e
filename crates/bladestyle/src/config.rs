//! Configuration types for parsing and writing styles.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from a
//! TOML file. Every field has a default, so an empty file is valid.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining the sections below.
//! - [`ParseConfig`] - What is checked after a style is parsed.
//! - [`EmitConfig`] - How canonical text is written.
//!
//! # Example
//!
//! ```
//! # use bladestyle::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.parse().require_complete());
//! assert!(config.emit().literal_shorthand());
//! ```

use serde::Deserialize;

use bladestyle_parser::{BitsFormat, EmitOptions};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Parsing section.
    #[serde(default)]
    parse: ParseConfig,

    /// Output section.
    #[serde(default)]
    emit: EmitConfig,
}

impl AppConfig {
    pub fn new(parse: ParseConfig, emit: EmitConfig) -> Self {
        Self { parse, emit }
    }

    /// Returns the parsing configuration.
    pub fn parse(&self) -> &ParseConfig {
        &self.parse
    }

    /// Returns the output configuration.
    pub fn emit(&self) -> &EmitConfig {
        &self.emit
    }
}

/// Checks applied to freshly parsed styles.
#[derive(Debug, Clone, Deserialize)]
pub struct ParseConfig {
    /// Reject styles with unset parameters.
    #[serde(default = "default_true")]
    require_complete: bool,

    /// Restrict a layer base to the categories its owner's slot accepts.
    #[serde(default)]
    narrow_layer_bases: bool,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            require_complete: true,
            narrow_layer_bases: false,
        }
    }
}

impl ParseConfig {
    pub fn new(require_complete: bool, narrow_layer_bases: bool) -> Self {
        Self {
            require_complete,
            narrow_layer_bases,
        }
    }

    pub fn require_complete(&self) -> bool {
        self.require_complete
    }

    pub fn narrow_layer_bases(&self) -> bool {
        self.narrow_layer_bases
    }
}

/// Formatting of canonical style text.
#[derive(Debug, Clone, Deserialize)]
pub struct EmitConfig {
    /// Notation for bit field parameters, `"binary"` or `"hex"`.
    #[serde(default)]
    bits_format: BitsFormat,

    /// Write integers given for function slots back as bare numbers.
    #[serde(default = "default_true")]
    literal_shorthand: bool,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            bits_format: BitsFormat::default(),
            literal_shorthand: true,
        }
    }
}

impl EmitConfig {
    pub fn new(bits_format: BitsFormat, literal_shorthand: bool) -> Self {
        Self {
            bits_format,
            literal_shorthand,
        }
    }

    pub fn bits_format(&self) -> BitsFormat {
        self.bits_format
    }

    pub fn literal_shorthand(&self) -> bool {
        self.literal_shorthand
    }

    /// The emitter options this section describes.
    pub fn options(&self) -> EmitOptions {
        EmitOptions {
            bits_format: self.bits_format,
            literal_shorthand: self.literal_shorthand,
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("").expect("empty config is valid");
        assert!(config.parse().require_complete());
        assert!(!config.parse().narrow_layer_bases());
        assert_eq!(config.emit().bits_format(), BitsFormat::Binary);
        assert!(config.emit().literal_shorthand());
    }

    #[test]
    fn test_partial_sections() {
        let config: AppConfig = toml::from_str(
            r#"
            [emit]
            bits_format = "hex"
            "#,
        )
        .expect("valid config");
        assert_eq!(config.emit().bits_format(), BitsFormat::Hex);
        assert!(config.emit().literal_shorthand());
        assert!(config.parse().require_complete());
    }

    #[test]
    fn test_all_fields() {
        let config: AppConfig = toml::from_str(
            r#"
            [parse]
            require_complete = false
            narrow_layer_bases = true

            [emit]
            bits_format = "binary"
            literal_shorthand = false
            "#,
        )
        .expect("valid config");
        assert!(!config.parse().require_complete());
        assert!(config.parse().narrow_layer_bases());
        assert_eq!(
            config.emit().options(),
            EmitOptions {
                bits_format: BitsFormat::Binary,
                literal_shorthand: false,
            }
        );
    }

    #[test]
    fn test_unknown_bits_format_is_rejected() {
        let result: Result<AppConfig, _> = toml::from_str("[emit]\nbits_format = \"octal\"");
        assert!(result.is_err());
    }
}
