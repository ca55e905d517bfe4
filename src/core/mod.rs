pub mod distribution;
pub mod forecast;
pub mod ohlc;
pub mod primitives;
pub mod records;
pub mod time_series;
pub mod types;

pub use distribution::{Categorical, Density};
pub use forecast::{Forecast, PredictionInterval};
pub use ohlc::{OhlcBar, OhlcSeries};
pub use primitives::{TimestampUnit, date_to_timestamp, datetime_to_timestamp, decimal_to_f64};
pub use records::{Table, table_to_records, zip_pairs};
pub use time_series::{Column, Frequency, IrregularTimeSeries, RegularTimeSeries};
pub use types::{PointRecord, PointTuple, Scalar};
