use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use log::info;

use megacna_core::models::{ObservedRecord, RecordSet};
use megacna_core::utils::get_dynamic_reader;

use crate::error::{ParseError, Result, invalid_record};

const MIN_CHR_LENGTH: usize = 4;

struct Columns {
    chr: usize,
    pos: usize,
    baf: usize,
    dr: usize,
}

impl TryFrom<&StringRecord> for Columns {
    type Error = ParseError;

    fn try_from(header: &StringRecord) -> Result<Self> {
        let find = |name: &str| {
            header
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
                .ok_or_else(|| ParseError::MissingColumn(name.to_string()))
        };

        Ok(Columns {
            chr: find("chr")?,
            pos: find("pos")?,
            baf: find("BAF")?,
            dr: find("DR")?,
        })
    }
}

// empty or non-numeric measurements mean "not measured"
fn parse_measurement(value: Option<&str>) -> f64 {
    value
        .and_then(|v| v.trim().parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

fn parse_row(row: usize, fields: &StringRecord, columns: &Columns) -> Result<ObservedRecord> {
    let chr = fields.get(columns.chr).unwrap_or("").trim();
    if chr.len() < MIN_CHR_LENGTH {
        return Err(invalid_record(row, format!("wrong chr record {:?}", chr)));
    }

    let pos_field = fields.get(columns.pos).unwrap_or("").trim();
    let pos: u64 = pos_field
        .parse()
        .map_err(|_| invalid_record(row, format!("invalid position {:?}", pos_field)))?;

    Ok(ObservedRecord {
        chr: chr.to_string(),
        pos,
        baf: parse_measurement(fields.get(columns.baf)),
        dr: parse_measurement(fields.get(columns.dr)),
    })
}

///
/// Read a BAF/DR table from CSV, optionally gzipped.
///
/// The header must name `chr`, `pos`, `BAF` and `DR` columns (case-insensitive,
/// any order). Rows with a chromosome shorter than four characters or a
/// non-integer position are rejected; empty or non-numeric BAF/DR values are
/// read as missing (`NaN`).
///
/// # Arguments
/// - path: path to the CSV file
///
pub fn read_observed_records(path: &Path) -> Result<RecordSet> {
    let reader = get_dynamic_reader(path)?;
    let mut csv_reader = ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let columns = Columns::try_from(csv_reader.headers()?)?;

    let mut records: Vec<ObservedRecord> = Vec::new();
    for (row, fields) in csv_reader.records().enumerate() {
        records.push(parse_row(row, &fields?, &columns)?);
    }

    info!("Loaded {} records from {}", records.len(), path.display());

    Ok(RecordSet {
        records,
        path: Some(path.to_path_buf()),
    })
}
