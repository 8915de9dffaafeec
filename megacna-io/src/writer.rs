use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use flate2::Compression;
use flate2::write::GzEncoder;

use megacna_core::models::MatchedRecord;

use crate::error::Result;

fn format_measurement(value: f64) -> String {
    if value.is_nan() {
        String::new()
    } else {
        value.to_string()
    }
}

fn format_optional<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

///
/// Write matched records as CSV to any writer.
///
/// Columns are `chr,pos,BAF,DR,total,minor`, plus `gene` when gene names are
/// given. Missing values are written as empty fields.
///
/// # Arguments
/// - writer: destination
/// - records: matched records
/// - genes: optional gene name per record, same length and order as `records`
///
pub fn write_matched_records_to<W: Write>(
    writer: W,
    records: &[MatchedRecord],
    genes: Option<&[Option<String>]>,
) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let mut header = vec!["chr", "pos", "BAF", "DR", "total", "minor"];
    if genes.is_some() {
        header.push("gene");
    }
    csv_writer.write_record(&header)?;

    for (i, record) in records.iter().enumerate() {
        let mut row = vec![
            record.chr.clone(),
            record.pos.to_string(),
            format_measurement(record.baf),
            format_measurement(record.dr),
            format_optional(record.total),
            format_optional(record.minor),
        ];
        if let Some(genes) = genes {
            row.push(genes.get(i).cloned().flatten().unwrap_or_default());
        }
        csv_writer.write_record(&row)?;
    }

    csv_writer.flush()?;
    Ok(())
}

///
/// Write matched records to disk as CSV, gzipped when the path ends in `.gz`.
///
/// # Arguments
/// - path: the path to the file to dump to
/// - records: matched records
/// - genes: optional gene name per record
///
pub fn write_matched_records<T: AsRef<Path>>(
    path: T,
    records: &[MatchedRecord],
    genes: Option<&[Option<String>]>,
) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = BufWriter::new(File::create(path)?);

    if path.extension().is_some_and(|ext| ext == "gz") {
        let mut encoder = GzEncoder::new(file, Compression::best());
        write_matched_records_to(&mut encoder, records, genes)?;
        encoder.finish()?;
    } else {
        write_matched_records_to(file, records, genes)?;
    }

    Ok(())
}
