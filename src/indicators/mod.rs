pub mod engine;
pub mod error;
pub mod parser;
pub mod registry;

pub mod momentum;
pub mod trend;
pub mod volatility;

pub use engine::IndicatorEngine;
pub use error::IndicatorError;
pub use parser::*;
pub use registry::*;
