/// Data layer: core types, loading, filtering and aggregation.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader  │  parse file → Dataset (coerce Premiere / Watchtime)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset  │  Vec<TitleRecord>, distinct genres
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter  │  FilterSelection → matching indices → stable sort
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ metrics  │  count / mean watchtime / latest year
///   └──────────┘
/// ```
pub mod error;
pub mod filter;
pub mod loader;
pub mod metrics;
pub mod model;
