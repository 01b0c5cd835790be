//! Configuration for the strlit toolchain.
//!
//! The built-in defaults live in `defaults/strlit.default.toml` and are compiled into every
//! binary. A [`Loader`] starts from them, layers a user file and command-line overrides on
//! top, and deserializes the result into [`StrlitConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat};
use serde::Deserialize;
use std::path::Path;
use strlit::clipboard::{BinaryOperatorPosition, LiteralCopyPasteProcessor};

pub use config::ConfigError as LoadError;

const DEFAULT_TOML: &str = include_str!("../defaults/strlit.default.toml");

/// Top-level configuration consumed by strlit applications.
#[derive(Debug, Clone, Deserialize)]
pub struct StrlitConfig {
    pub code_style: CodeStyleConfig,
}

impl StrlitConfig {
    /// A literal copy/paste processor using the configured code style
    pub fn processor(&self) -> LiteralCopyPasteProcessor {
        LiteralCopyPasteProcessor::new(self.code_style.binary_operator_position)
    }
}

/// Code style knobs the paste engine consults.
#[derive(Debug, Clone, Deserialize)]
pub struct CodeStyleConfig {
    pub binary_operator_position: BinaryOperatorPosition,
}

/// Layers configuration sources, lowest priority first.
#[derive(Debug, Clone)]
pub struct Loader {
    layers: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// A loader holding only the embedded defaults.
    pub fn new() -> Self {
        Self {
            layers: Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml)),
        }
    }

    /// Layer a TOML file; building fails if it does not exist.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        let file = File::from(path.as_ref()).format(FileFormat::Toml);
        Self {
            layers: self.layers.add_source(file),
        }
    }

    /// Override one dotted key, e.g. `code_style.binary_operator_position`.
    pub fn set_override(self, key: &str, value: &str) -> Result<Self, LoadError> {
        Ok(Self {
            layers: self.layers.set_override(key, value)?,
        })
    }

    pub fn build(self) -> Result<StrlitConfig, LoadError> {
        self.layers.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
