/// Data layer: series model, row policy, and CSV loading.
///
/// Architecture:
/// ```text
///  sensors_YYYY-MM-DD.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  header row → column names, records → rows
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  parse (label, value) per row, drop row-local failures
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Series   │  labels[i] ↔ values[i]
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
