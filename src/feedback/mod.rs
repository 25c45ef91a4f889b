pub mod classifier;
pub mod trend;

pub use classifier::{classify, is_balanced, Advisory, Feedback};
pub use trend::{trends, BalanceStatus, ForceTrends, HorizontalTrend, VerticalTrend};
