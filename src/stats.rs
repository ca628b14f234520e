pub mod aggregate;
pub mod buckets;
pub mod compare;
pub mod labels;
pub mod period;

pub use aggregate::{aggregate, percent_change};
pub use buckets::{bucketize, Bucket};
pub use compare::build_series;
pub use labels::Language;
pub use period::{resolve_period, Interval, ReportingPeriod};
