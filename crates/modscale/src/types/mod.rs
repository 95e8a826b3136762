pub mod config;
pub mod ratio;
pub mod unit;

pub use config::ModularSystemConfig;
pub use ratio::ModularScale;
pub use unit::{Length, SizeUnit, Unit, format_number};
