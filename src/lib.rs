pub mod error;
pub mod output;
pub mod qpsk;
pub mod ui;
pub mod utils;

pub use error::{EncoderError, Result};
