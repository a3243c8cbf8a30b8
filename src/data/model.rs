use std::collections::BTreeSet;
use std::fmt;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// DelayMetric – the five delay causes reported per flight
// ---------------------------------------------------------------------------

/// One of the five named causes of flight delay, measured in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DelayMetric {
    Carrier,
    Weather,
    Nas,
    Security,
    LateAircraft,
}

impl DelayMetric {
    /// All metrics in page order.
    pub const ALL: [DelayMetric; 5] = [
        DelayMetric::Carrier,
        DelayMetric::Weather,
        DelayMetric::Nas,
        DelayMetric::Security,
        DelayMetric::LateAircraft,
    ];

    /// Column name in the source CSV.
    pub fn column(self) -> &'static str {
        match self {
            DelayMetric::Carrier => "CarrierDelay",
            DelayMetric::Weather => "WeatherDelay",
            DelayMetric::Nas => "NASDelay",
            DelayMetric::Security => "SecurityDelay",
            DelayMetric::LateAircraft => "LateAircraftDelay",
        }
    }

    /// Fixed chart title.
    pub fn title(self) -> &'static str {
        match self {
            DelayMetric::Carrier => "Average carrier delay time (minutes) by airline",
            DelayMetric::Weather => "Average weather delay time (minutes) by airline",
            DelayMetric::Nas => "Average NAS delay time (minutes) by airline",
            DelayMetric::Security => "Average security delay time (minutes) by airline",
            DelayMetric::LateAircraft => {
                "Average late aircraft delay time (minutes) by airline"
            }
        }
    }

    /// Id of the page element the chart is drawn into.
    pub fn element_id(self) -> &'static str {
        match self {
            DelayMetric::Carrier => "carrier-delay",
            DelayMetric::Weather => "weather-delay",
            DelayMetric::Nas => "nas-delay",
            DelayMetric::Security => "security-delay",
            DelayMetric::LateAircraft => "late-aircraft-delay",
        }
    }

    /// Pull this metric's value out of a record.
    pub fn value(self, record: &FlightRecord) -> Option<f64> {
        match self {
            DelayMetric::Carrier => record.carrier_delay,
            DelayMetric::Weather => record.weather_delay,
            DelayMetric::Nas => record.nas_delay,
            DelayMetric::Security => record.security_delay,
            DelayMetric::LateAircraft => record.late_aircraft_delay,
        }
    }
}

impl fmt::Display for DelayMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

// ---------------------------------------------------------------------------
// FlightRecord – one row of the on-time performance CSV
// ---------------------------------------------------------------------------

/// A single flight. Columns not named here are ignored on load.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FlightRecord {
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Month")]
    pub month: u8,
    #[serde(rename = "Reporting_Airline")]
    pub reporting_airline: String,

    #[serde(rename = "CarrierDelay")]
    pub carrier_delay: Option<f64>,
    #[serde(rename = "WeatherDelay")]
    pub weather_delay: Option<f64>,
    #[serde(rename = "NASDelay")]
    pub nas_delay: Option<f64>,
    #[serde(rename = "SecurityDelay")]
    pub security_delay: Option<f64>,
    #[serde(rename = "LateAircraftDelay")]
    pub late_aircraft_delay: Option<f64>,

    // Diversion identifiers are kept as text even when they look numeric.
    #[serde(rename = "Div1Airport", default)]
    pub div1_airport: Option<String>,
    #[serde(rename = "Div1TailNum", default)]
    pub div1_tail_num: Option<String>,
    #[serde(rename = "Div2Airport", default)]
    pub div2_airport: Option<String>,
    #[serde(rename = "Div2TailNum", default)]
    pub div2_tail_num: Option<String>,
}

// ---------------------------------------------------------------------------
// FlightDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// All flights loaded at startup, with pre-computed indices.
#[derive(Debug, Clone, Default)]
pub struct FlightDataset {
    /// All flights (rows).
    pub records: Vec<FlightRecord>,
    /// Sorted set of carrier codes present in any year.
    pub carriers: BTreeSet<String>,
    /// Sorted set of years present.
    pub years: BTreeSet<i32>,
}

impl FlightDataset {
    /// Build indices from the loaded records.
    pub fn from_records(records: Vec<FlightRecord>) -> Self {
        let carriers = records
            .iter()
            .map(|r| r.reporting_airline.clone())
            .collect();
        let years = records.iter().map(|r| r.year).collect();
        FlightDataset {
            records,
            carriers,
            years,
        }
    }

    /// Number of flights.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
pub(crate) fn record(
    year: i32,
    month: u8,
    carrier: &str,
    delays: [Option<f64>; 5],
) -> FlightRecord {
    FlightRecord {
        year,
        month,
        reporting_airline: carrier.to_string(),
        carrier_delay: delays[0],
        weather_delay: delays[1],
        nas_delay: delays[2],
        security_delay: delays[3],
        late_aircraft_delay: delays[4],
        div1_airport: None,
        div1_tail_num: None,
        div2_airport: None,
        div2_tail_num: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_indexes_carriers_and_years() {
        let ds = FlightDataset::from_records(vec![
            record(2011, 1, "UA", [None; 5]),
            record(2010, 2, "AA", [None; 5]),
            record(2011, 3, "AA", [None; 5]),
        ]);
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.carriers.iter().collect::<Vec<_>>(), vec!["AA", "UA"]);
        assert_eq!(ds.years.iter().copied().collect::<Vec<_>>(), vec![2010, 2011]);
    }

    #[test]
    fn metric_reads_its_own_field() {
        let r = record(2011, 1, "AA", [Some(1.0), Some(2.0), None, Some(4.0), Some(5.0)]);
        let values: Vec<_> = DelayMetric::ALL.iter().map(|m| m.value(&r)).collect();
        assert_eq!(values, vec![Some(1.0), Some(2.0), None, Some(4.0), Some(5.0)]);
        assert_eq!(DelayMetric::Nas.to_string(), "NASDelay");
    }
}
