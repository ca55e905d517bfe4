mod adapter_config;
mod chart_config;
mod json_contract;
mod series_adapter;
mod series_data;
mod series_options;
mod series_removal;
mod validation;

pub use adapter_config::AdapterConfig;
pub use chart_config::{ChartConfig, SeriesEntry};
pub use series_adapter::SeriesAdapter;
pub use series_data::{FieldMapping, ForecastOptions, SeriesData, SeriesDataKind};
pub use series_options::{SeriesOptions, SeriesType};
