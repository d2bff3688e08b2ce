pub mod bits;
pub mod config;
pub mod constellation;
pub mod encoder;
pub mod fir;
pub mod modulator;
pub mod rrc;

pub use config::*;
pub use constellation::Constellation;
pub use encoder::*;
pub use fir::StreamingFir;
pub use modulator::Modulator;
pub use rrc::rrc_coefficients;
