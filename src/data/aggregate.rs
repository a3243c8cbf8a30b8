use std::collections::BTreeMap;

use super::model::{DelayMetric, FlightDataset};
use crate::error::ParseError;

// ---------------------------------------------------------------------------
// Aggregate tables: per-(month, carrier) means for one metric
// ---------------------------------------------------------------------------

/// Mean of one delay metric for a `(month, carrier)` group.
/// `mean` is `None` when every value in the group was missing.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateRow {
    pub month: u8,
    pub carrier: String,
    pub mean: Option<f64>,
}

/// Grouped-and-averaged result for one delay metric, ordered by
/// `(month, carrier)`.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateTable {
    pub metric: DelayMetric,
    pub rows: Vec<AggregateRow>,
}

impl AggregateTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// The five tables produced for one year.
#[derive(Debug, Clone, PartialEq)]
pub struct DelayAverages {
    pub year: i32,
    pub carrier: AggregateTable,
    pub weather: AggregateTable,
    pub nas: AggregateTable,
    pub security: AggregateTable,
    pub late_aircraft: AggregateTable,
}

impl DelayAverages {
    /// Tables in page order.
    pub fn tables(&self) -> [&AggregateTable; 5] {
        [
            &self.carrier,
            &self.weather,
            &self.nas,
            &self.security,
            &self.late_aircraft,
        ]
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Accumulator {
    sum: f64,
    count: usize,
}

impl Accumulator {
    fn push(&mut self, value: Option<f64>) {
        if let Some(v) = value {
            self.sum += v;
            self.count += 1;
        }
    }

    fn mean(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }
}

/// Parse a year typed by the user.
pub fn parse_year(input: &str) -> Result<i32, ParseError> {
    input.trim().parse::<i32>().map_err(|_| ParseError {
        input: input.to_string(),
    })
}

/// Filter `dataset` to `year` and average each delay metric per
/// `(month, carrier)`, skipping missing values.
///
/// A year with no flights yields five empty tables.
pub fn compute_info(dataset: &FlightDataset, year: &str) -> Result<DelayAverages, ParseError> {
    let year = parse_year(year)?;

    let mut groups: BTreeMap<(u8, &str), [Accumulator; 5]> = BTreeMap::new();
    for record in dataset.records.iter().filter(|r| r.year == year) {
        let acc = groups
            .entry((record.month, record.reporting_airline.as_str()))
            .or_default();
        for (slot, metric) in acc.iter_mut().zip(DelayMetric::ALL) {
            slot.push(metric.value(record));
        }
    }

    let [carrier, weather, nas, security, late_aircraft] =
        DelayMetric::ALL.map(|metric| table_for(metric, &groups));

    Ok(DelayAverages {
        year,
        carrier,
        weather,
        nas,
        security,
        late_aircraft,
    })
}

fn table_for(
    metric: DelayMetric,
    groups: &BTreeMap<(u8, &str), [Accumulator; 5]>,
) -> AggregateTable {
    let slot = metric as usize;
    let rows = groups
        .iter()
        .map(|(&(month, carrier), acc)| AggregateRow {
            month,
            carrier: carrier.to_string(),
            mean: acc[slot].mean(),
        })
        .collect();
    AggregateTable { metric, rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::record;

    fn sample() -> FlightDataset {
        FlightDataset::from_records(vec![
            record(2011, 1, "AA", [Some(10.0), Some(0.0), None, Some(1.0), Some(4.0)]),
            record(2011, 1, "AA", [Some(20.0), None, None, Some(3.0), Some(8.0)]),
            record(2011, 1, "UA", [Some(5.0), Some(2.0), Some(7.0), None, None]),
            record(2011, 2, "AA", [Some(1.0), Some(1.0), Some(1.0), Some(1.0), Some(1.0)]),
            record(2010, 1, "AA", [Some(999.0), Some(999.0), Some(999.0), Some(999.0), Some(999.0)]),
            record(2010, 3, "DL", [Some(3.0), None, None, None, None]),
        ])
    }

    fn mean_of(table: &AggregateTable, month: u8, carrier: &str) -> Option<f64> {
        table
            .rows
            .iter()
            .find(|r| r.month == month && r.carrier == carrier)
            .and_then(|r| r.mean)
    }

    #[test]
    fn averages_per_month_and_carrier() {
        let avg = compute_info(&sample(), "2011").unwrap();
        assert_eq!(mean_of(&avg.carrier, 1, "AA"), Some(15.0));
        assert_eq!(mean_of(&avg.carrier, 1, "UA"), Some(5.0));
        assert_eq!(mean_of(&avg.carrier, 2, "AA"), Some(1.0));
        assert_eq!(mean_of(&avg.security, 1, "AA"), Some(2.0));
        assert_eq!(mean_of(&avg.late_aircraft, 1, "AA"), Some(6.0));
    }

    #[test]
    fn missing_values_are_skipped() {
        let avg = compute_info(&sample(), "2011").unwrap();
        // One present value (0.0) and one missing.
        assert_eq!(mean_of(&avg.weather, 1, "AA"), Some(0.0));
    }

    #[test]
    fn all_missing_group_keeps_row_without_mean() {
        let avg = compute_info(&sample(), "2011").unwrap();
        let row = avg
            .nas
            .rows
            .iter()
            .find(|r| r.month == 1 && r.carrier == "AA")
            .unwrap();
        assert_eq!(row.mean, None);
    }

    #[test]
    fn groups_are_ordered_and_limited_to_year() {
        let avg = compute_info(&sample(), "2011").unwrap();
        for table in avg.tables() {
            let keys: Vec<_> = table
                .rows
                .iter()
                .map(|r| (r.month, r.carrier.as_str()))
                .collect();
            assert_eq!(keys, vec![(1, "AA"), (1, "UA"), (2, "AA")]);
        }
        assert_eq!(avg.carrier.metric, DelayMetric::Carrier);
        assert_eq!(avg.late_aircraft.metric, DelayMetric::LateAircraft);
    }

    #[test]
    fn absent_year_gives_empty_tables() {
        let avg = compute_info(&sample(), "1987").unwrap();
        assert!(avg.tables().iter().all(|t| t.is_empty()));
    }

    #[test]
    fn year_text_is_trimmed() {
        let avg = compute_info(&sample(), " 2010 ").unwrap();
        assert_eq!(avg.year, 2010);
        assert_eq!(mean_of(&avg.carrier, 3, "DL"), Some(3.0));
    }

    #[test]
    fn non_numeric_year_is_a_parse_error() {
        let err = compute_info(&sample(), "twenty-eleven").unwrap_err();
        assert_eq!(err.input, "twenty-eleven");
        assert!(compute_info(&sample(), "").is_err());
        assert!(compute_info(&sample(), "2011.5").is_err());
    }

    #[test]
    fn repeated_runs_are_identical() {
        let ds = sample();
        assert_eq!(compute_info(&ds, "2011").unwrap(), compute_info(&ds, "2011").unwrap());
    }
}
