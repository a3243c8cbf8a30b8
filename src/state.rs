use std::sync::Arc;

use log::{debug, info, warn};

use crate::color::ColorMap;
use crate::config::DashboardConfig;
use crate::data::aggregate::compute_info;
use crate::data::loader::load_file;
use crate::data::model::FlightDataset;
use crate::error::DashboardError;
use crate::ui::chart::{DashboardCharts, build_charts};
use crate::ui::layout::render_page;

// ---------------------------------------------------------------------------
// Dashboard state
// ---------------------------------------------------------------------------

/// Everything the page needs, independent of the HTTP layer.
///
/// The dataset is loaded once and only ever read afterwards.
pub struct DashboardState {
    dataset: Arc<FlightDataset>,
    colors: ColorMap,
    default_year: String,
}

impl DashboardState {
    pub fn new(dataset: Arc<FlightDataset>, default_year: impl Into<String>) -> Self {
        let colors = ColorMap::new(&dataset.carriers);
        Self {
            dataset,
            colors,
            default_year: default_year.into(),
        }
    }

    /// Load the configured data file and build the state around it.
    pub fn load(config: &DashboardConfig) -> Result<Self, DashboardError> {
        let dataset = load_file(&config.data_path)?;
        if dataset.is_empty() {
            warn!("{} contains no flights", config.data_path.display());
        }
        info!(
            "loaded {} flights from {} (years {:?}, {} carriers)",
            dataset.len(),
            config.data_path.display(),
            dataset.years,
            dataset.carriers.len(),
        );
        Ok(Self::new(Arc::new(dataset), config.default_year.clone()))
    }

    pub fn dataset(&self) -> &FlightDataset {
        &self.dataset
    }

    /// The HTML page with the default year filled in.
    pub fn page(&self) -> String {
        render_page(&self.default_year)
    }

    /// Recompute all five charts for the year typed by the user.
    pub fn render(&self, year: &str) -> Result<DashboardCharts, DashboardError> {
        let averages = compute_info(&self.dataset, year).inspect_err(|err| warn!("{err}"))?;
        if averages.tables().iter().all(|t| t.is_empty()) {
            info!("no flights recorded for year {}", averages.year);
        }
        let charts = build_charts(&averages, &self.colors);
        debug!(
            "rendered year {}: {} points across {} charts",
            charts.year,
            charts.charts.iter().map(|c| c.point_count()).sum::<usize>(),
            charts.charts.len(),
        );
        Ok(charts)
    }
}
