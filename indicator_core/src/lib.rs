pub mod common;
pub mod config;
pub mod math;
pub mod series;
pub mod session;

pub use config::indicator_config::IndicatorConfig;
pub use series::candle::Candle;
pub use series::time_series::TimeSeries;
pub use session::session::Session;
