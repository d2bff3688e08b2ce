/// Log level (can be overridden by RUST_LOG)
pub const LOG_LEVEL: &str = "info";

/// Progress redraw interval (milliseconds)
pub const PROGRESS_UPDATE_INTERVAL_MS: u64 = 50;

/// Upper bound on samples reserved up front for the pending buffer
pub const MAX_PREALLOC_SAMPLES: usize = 4096;

/// Configuration file looked up in the working directory
pub const CONFIG_FILE: &str = "qpsk_encoder.json";

// ============================================================================
// Encoder defaults, used when the configuration file or a field is missing
// ============================================================================

/// Filter half-width; the filter has twice this many taps
pub const DEFAULT_FILTER_HALF_WIDTH: usize = 10;

/// Number of modulated samples buffered before a filter pass
pub const DEFAULT_READ_BUFFER_SIZE: usize = 1024;

/// Samples per symbol (oversampling factor)
pub const DEFAULT_SYMBOL_WIDTH: usize = 4;

/// RRC roll-off factor
pub const DEFAULT_BETA: f64 = 0.25;

/// Decimal places in CSV output
pub const DEFAULT_CSV_ROUNDING: usize = 3;

/// Bits produced by unpacking one byte
pub const BITS_PER_BYTE: usize = 8;

/// Bits carried by one QPSK symbol
pub const BITS_PER_SYMBOL: usize = 2;
