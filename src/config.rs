//! Configuration file parsing for `tinyload.toml`.
//!
//! ```toml
//! dump_program = true
//!
//! [image]
//! byte_order = "little"
//! ```
//!
//! `dump_program` has no default: a file without it is rejected.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::bytecode::{ByteOrder, ImageEncoder};
use crate::error::ConfigError;

/// Main configuration structure.
#[derive(Debug, Deserialize, Clone, Copy, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
  /// Print the loaded program before encoding it
  pub dump_program: bool,

  #[serde(default)]
  pub image: ImageConfig,
}

/// Memory image settings.
#[derive(Debug, Default, Deserialize, Clone, Copy, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ImageConfig {
  /// Operand byte order, the engine's unless given
  #[serde(default)]
  pub byte_order: ByteOrderSetting,
}

#[derive(Debug, Deserialize, Clone, Copy, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ByteOrderSetting {
  Little,
  Big
}

impl Default for ByteOrderSetting {
  fn default() -> Self {
    ByteOrder::default().into()
  }
}

impl From<ByteOrder> for ByteOrderSetting {
  fn from(order: ByteOrder) -> Self {
    match order {
      ByteOrder::Little => ByteOrderSetting::Little,
      ByteOrder::Big    => ByteOrderSetting::Big
    }
  }
}

impl From<ByteOrderSetting> for ByteOrder {
  fn from(setting: ByteOrderSetting) -> Self {
    match setting {
      ByteOrderSetting::Little => ByteOrder::Little,
      ByteOrderSetting::Big    => ByteOrder::Big
    }
  }
}

impl Config {
  /// Load configuration from a file. A missing file is an error.
  pub fn load<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
      path: path.to_path_buf(),
      source
    })?;

    let config = Config::from_toml_str(&content).map_err(|source| ConfigError::Malformed {
      path: path.to_path_buf(),
      source
    })?;
    debug!(path = %path.display(), ?config, "loaded configuration");
    Ok(config)
  }

  pub fn from_toml_str(content: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(content)
  }

  pub fn byte_order(&self) -> ByteOrder {
    self.image.byte_order.into()
  }

  /// The encoder for the configured byte order.
  pub fn encoder(&self) -> ImageEncoder {
    ImageEncoder::new(self.byte_order())
  }
}
