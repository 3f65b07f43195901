pub mod table;
pub mod time;
pub mod totals;

pub use table::{normalize, NormalizedTable, DEFAULT_MIN_COLUMNS};
pub use time::{parse_time, to_decimal_hours, TimeValue};
pub use totals::{filter_totals, TotalRow};
