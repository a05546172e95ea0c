pub mod catalog;
pub mod metrics;
pub mod traffic;
pub mod uploads;

pub use metrics::*;
