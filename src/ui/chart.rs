use std::collections::BTreeMap;

use serde::Serialize;

use crate::color::ColorMap;
use crate::data::aggregate::{AggregateTable, DelayAverages};

/// Field plotted along the x axis of every chart.
pub const X_FIELD: &str = "Month";
/// Field that splits a chart into one line per value.
pub const SERIES_KEY: &str = "Reporting_Airline";

// ---------------------------------------------------------------------------
// Chart specifications
// ---------------------------------------------------------------------------

/// A single plotted point. `value` is `None` for a month whose delays were
/// all missing; the line shows a gap there.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Point {
    pub month: u8,
    pub value: Option<f64>,
}

/// One line on a chart: all points of a single carrier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub name: String,
    pub color: String,
    pub points: Vec<Point>,
}

/// Everything the page needs to draw one line chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    /// Id of the page element the chart is drawn into.
    pub id: &'static str,
    pub title: &'static str,
    pub x_field: &'static str,
    pub y_field: &'static str,
    pub series_key: &'static str,
    pub series: Vec<Series>,
}

impl ChartSpec {
    /// Total number of points across all series.
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }
}

/// The five charts of the page for one year, in page order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardCharts {
    pub year: i32,
    pub charts: [ChartSpec; 5],
}

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

/// Turn one aggregate table into a line chart: month on x, the metric on y,
/// one series per carrier.
pub fn build_chart(table: &AggregateTable, colors: &ColorMap) -> ChartSpec {
    let mut by_carrier: BTreeMap<&str, Vec<Point>> = BTreeMap::new();
    for row in &table.rows {
        by_carrier.entry(row.carrier.as_str()).or_default().push(Point {
            month: row.month,
            value: row.mean,
        });
    }

    let series = by_carrier
        .into_iter()
        .map(|(carrier, points)| Series {
            name: carrier.to_string(),
            color: colors.color_for(carrier).to_string(),
            points,
        })
        .collect();

    ChartSpec {
        id: table.metric.element_id(),
        title: table.metric.title(),
        x_field: X_FIELD,
        y_field: table.metric.column(),
        series_key: SERIES_KEY,
        series,
    }
}

/// Build all five charts for a year's averages.
pub fn build_charts(averages: &DelayAverages, colors: &ColorMap) -> DashboardCharts {
    DashboardCharts {
        year: averages.year,
        charts: averages.tables().map(|table| build_chart(table, colors)),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::data::aggregate::AggregateRow;
    use crate::data::model::DelayMetric;

    fn row(month: u8, carrier: &str, mean: Option<f64>) -> AggregateRow {
        AggregateRow {
            month,
            carrier: carrier.to_string(),
            mean,
        }
    }

    fn colors() -> ColorMap {
        let carriers: BTreeSet<String> = ["AA", "UA"].iter().map(|s| s.to_string()).collect();
        ColorMap::new(&carriers)
    }

    #[test]
    fn one_series_per_carrier() {
        let table = AggregateTable {
            metric: DelayMetric::Weather,
            rows: vec![
                row(1, "AA", Some(3.0)),
                row(1, "UA", Some(4.0)),
                row(2, "AA", None),
                row(3, "AA", Some(1.5)),
            ],
        };
        let colors = colors();
        let chart = build_chart(&table, &colors);

        assert_eq!(chart.id, "weather-delay");
        assert_eq!(chart.title, "Average weather delay time (minutes) by airline");
        assert_eq!(chart.x_field, "Month");
        assert_eq!(chart.y_field, "WeatherDelay");
        assert_eq!(chart.series_key, "Reporting_Airline");

        let names: Vec<_> = chart.series.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["AA", "UA"]);
        assert_eq!(chart.point_count(), table.rows.len());

        let aa = &chart.series[0];
        assert_eq!(aa.color, colors.color_for("AA"));
        assert_eq!(
            aa.points,
            vec![
                Point { month: 1, value: Some(3.0) },
                Point { month: 2, value: None },
                Point { month: 3, value: Some(1.5) },
            ]
        );
    }

    #[test]
    fn empty_table_gives_empty_chart() {
        let table = AggregateTable {
            metric: DelayMetric::Security,
            rows: Vec::new(),
        };
        let chart = build_chart(&table, &colors());
        assert!(chart.series.is_empty());
        assert_eq!(chart.title, "Average security delay time (minutes) by airline");
    }

    #[test]
    fn charts_follow_page_order() {
        let empty = |metric| AggregateTable {
            metric,
            rows: Vec::new(),
        };
        let averages = DelayAverages {
            year: 2011,
            carrier: empty(DelayMetric::Carrier),
            weather: empty(DelayMetric::Weather),
            nas: empty(DelayMetric::Nas),
            security: empty(DelayMetric::Security),
            late_aircraft: empty(DelayMetric::LateAircraft),
        };
        let charts = build_charts(&averages, &colors());
        let ids: Vec<_> = charts.charts.iter().map(|c| c.id).collect();
        assert_eq!(
            ids,
            vec![
                "carrier-delay",
                "weather-delay",
                "nas-delay",
                "security-delay",
                "late-aircraft-delay"
            ]
        );
        assert_eq!(charts.year, 2011);
    }

    #[test]
    fn serializes_missing_means_as_null() {
        let table = AggregateTable {
            metric: DelayMetric::Nas,
            rows: vec![row(5, "AA", None)],
        };
        let json = serde_json::to_value(build_chart(&table, &colors())).unwrap();
        assert_eq!(json["series"][0]["points"][0]["value"], serde_json::Value::Null);
        assert_eq!(json["y_field"], "NASDelay");
    }
}
