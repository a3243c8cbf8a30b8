/// Data layer: core types, loading, and aggregation.
///
/// Architecture:
/// ```text
///  data/airline_data.csv  (ISO-8859-1)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → FlightDataset
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ FlightDataset  │  Vec<FlightRecord>, carrier/year index
///   └───────────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate  │  filter by year, mean per (month, carrier) → 5 tables
///   └───────────┘
/// ```

pub mod aggregate;
pub mod loader;
pub mod model;
