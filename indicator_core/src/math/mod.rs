pub mod boll;
pub mod rolling;
pub mod rsi;
pub mod volume;
