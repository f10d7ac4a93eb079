mod exchange;
mod usage_report;

pub use exchange::*;
pub use usage_report::*;
