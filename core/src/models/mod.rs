pub mod decision;
pub mod metrics;
pub mod record;
pub mod tick;

pub use decision::Decision;
pub use metrics::{MetricSample, MetricSeries};
pub use record::{Record, RecordBook};
pub use tick::{TickRow, TickSeries, TimeDeltaSeries};
