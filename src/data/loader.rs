use std::io;
use std::path::Path;

use csv::{ByteRecord, StringRecord};

use super::model::{DelayMetric, FlightDataset, FlightRecord};
use crate::error::LoadError;

/// Columns every input file must carry. The diversion identifier columns
/// are optional and always read as text when present.
const REQUIRED_COLUMNS: [&str; 3] = ["Year", "Month", "Reporting_Airline"];

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the on-time performance CSV at `path`.
///
/// The file is ISO-8859-1: every byte is decoded to the code point of the
/// same value, so decoding itself never fails.
pub fn load_file(path: &Path) -> Result<FlightDataset, LoadError> {
    let reader = csv::Reader::from_path(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_records(reader)
}

/// Same as [`load_file`] over any byte source.
pub fn load_reader<R: io::Read>(rdr: R) -> Result<FlightDataset, LoadError> {
    read_records(csv::Reader::from_reader(rdr))
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

fn read_records<R: io::Read>(mut reader: csv::Reader<R>) -> Result<FlightDataset, LoadError> {
    let mut headers = latin1_record(reader.byte_headers().map_err(LoadError::Headers)?);
    headers.trim();

    let metric_columns = DelayMetric::ALL.map(DelayMetric::column);
    for col in REQUIRED_COLUMNS.iter().chain(metric_columns.iter()) {
        if !headers.iter().any(|h| h == *col) {
            return Err(LoadError::MissingColumn(*col));
        }
    }

    let mut records = Vec::new();
    for (idx, result) in reader.byte_records().enumerate() {
        let row = idx + 1;
        let raw = result.map_err(|source| LoadError::Row { row, source })?;

        let mut fields = latin1_record(&raw);
        fields.trim();
        let record: FlightRecord = fields
            .deserialize(Some(&headers))
            .map_err(|source| LoadError::Row { row, source })?;
        records.push(record);
    }

    Ok(FlightDataset::from_records(records))
}

fn latin1_record(raw: &ByteRecord) -> StringRecord {
    raw.iter()
        .map(|field| field.iter().map(|&b| char::from(b)).collect::<String>())
        .collect()
}
