use std::path::PathBuf;

/// Fixed runtime settings. The dashboard takes no flags or environment
/// variables; everything it needs is here.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// On-time performance CSV, relative to the working directory.
    pub data_path: PathBuf,
    pub host: String,
    pub port: u16,
    /// Year shown in the input when the page first loads.
    pub default_year: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data/airline_data.csv"),
            host: "127.0.0.1".to_string(),
            port: 8050,
            default_year: "2011".to_string(),
        }
    }
}
