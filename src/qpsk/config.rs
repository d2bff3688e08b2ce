use crate::error::{EncoderError, Result};
use crate::utils::consts::*;
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// On-disk layout of the configuration file. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub options: OptionsSection,
    pub debug: DebugSection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OptionsSection {
    /// Half the number of filter taps
    pub filter_width: usize,
    pub read_buffer_size: usize,
    /// Samples per symbol
    pub symbol_width: usize,
    pub beta: f64,
    pub csv_rounding: usize,
}

impl Default for OptionsSection {
    fn default() -> Self {
        Self {
            filter_width: DEFAULT_FILTER_HALF_WIDTH,
            read_buffer_size: DEFAULT_READ_BUFFER_SIZE,
            symbol_width: DEFAULT_SYMBOL_WIDTH,
            beta: DEFAULT_BETA,
            csv_rounding: DEFAULT_CSV_ROUNDING,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DebugSection {
    pub benchmark: bool,
}

/// Resolved encoder settings, built once and shared by reference.
#[derive(Debug, Clone, PartialEq)]
pub struct EncoderConfig {
    pub filter_width: usize,            // number of taps, 2 * configured half-width
    pub read_buffer_size: usize,        // samples buffered per filter pass
    pub samples_per_symbol: usize,
    pub beta: f64,                      // roll-off, clamped to [0, 1]
    pub csv_rounding: usize,            // decimal places
    pub benchmark: bool,
}

impl EncoderConfig {
    /// Load from `path`, falling back to defaults when the file is absent.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            info!(
                "Config file {} not found, using defaults",
                path.display()
            );
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let file: ConfigFile = serde_json::from_str(text)?;
        Self::try_from(file)
    }
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            filter_width: 2 * DEFAULT_FILTER_HALF_WIDTH,
            read_buffer_size: DEFAULT_READ_BUFFER_SIZE,
            samples_per_symbol: DEFAULT_SYMBOL_WIDTH,
            beta: DEFAULT_BETA,
            csv_rounding: DEFAULT_CSV_ROUNDING,
            benchmark: false,
        }
    }
}

impl TryFrom<ConfigFile> for EncoderConfig {
    type Error = EncoderError;

    fn try_from(file: ConfigFile) -> Result<Self> {
        let options = file.options;

        if options.filter_width == 0 {
            return Err(EncoderError::InvalidConfig(
                "filter_width must be positive".into(),
            ));
        }
        if options.read_buffer_size == 0 {
            return Err(EncoderError::InvalidConfig(
                "read_buffer_size must be positive".into(),
            ));
        }
        if options.symbol_width == 0 {
            return Err(EncoderError::InvalidConfig(
                "symbol_width must be positive".into(),
            ));
        }
        if options.beta.is_nan() {
            return Err(EncoderError::InvalidConfig("beta is NaN".into()));
        }
        let filter_width = options.filter_width.checked_mul(2).ok_or_else(|| {
            EncoderError::InvalidConfig(format!(
                "filter_width {} is too large",
                options.filter_width
            ))
        })?;

        Ok(Self {
            filter_width,
            read_buffer_size: options.read_buffer_size,
            samples_per_symbol: options.symbol_width,
            beta: options.beta.clamp(0.0, 1.0),
            csv_rounding: options.csv_rounding,
            benchmark: file.debug.benchmark,
        })
    }
}
