use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::entities::query::FieldValue;
use crate::domain::entities::vendor::{VendorRecord, FIELDS};

pub fn read_vendors_from_path(csv_path: &Path) -> Result<Vec<VendorRecord>> {
    let reader = csv::Reader::from_path(csv_path)
        .with_context(|| format!("failed to open csv: {}", csv_path.display()))?;
    read_vendors(reader)
        .with_context(|| format!("failed to load vendors from csv: {}", csv_path.display()))
}

pub fn read_vendors_from_reader<R: Read>(input: R) -> Result<Vec<VendorRecord>> {
    read_vendors(csv::Reader::from_reader(input))
}

fn read_vendors<R: Read>(mut reader: csv::Reader<R>) -> Result<Vec<VendorRecord>> {
    let headers = reader
        .headers()
        .context("failed to read csv headers")?
        .clone();

    if headers.is_empty() {
        anyhow::bail!("csv header is required")
    }
    for required in FIELDS {
        if !headers.iter().any(|header| header == required) {
            anyhow::bail!("csv header is missing column: {required}")
        }
    }

    let mut vendors = Vec::new();
    for (row_idx, record) in reader.deserialize::<VendorRecord>().enumerate() {
        let vendor = record.with_context(|| format!("failed to parse csv record #{row_idx}"))?;
        if vendors.iter().any(|existing: &VendorRecord| existing.id == vendor.id) {
            anyhow::bail!("duplicate vendor id {} at csv record #{row_idx}", vendor.id)
        }
        vendors.push(vendor);
    }

    Ok(vendors)
}

/// Writes rendered rows with a header of column names.
pub fn write_rows<W: Write>(
    output: W,
    columns: &[String],
    rows: &[Vec<(String, Option<FieldValue>)>],
) -> Result<()> {
    let mut writer = csv::Writer::from_writer(output);
    writer
        .write_record(columns)
        .context("failed to write csv header")?;

    for row in rows {
        let cells = row
            .iter()
            .map(|(_, value)| value.as_ref().map(|value| value.to_string()).unwrap_or_default());
        writer
            .write_record(cells)
            .context("failed to write csv row")?;
    }

    writer.flush().context("failed to flush csv output")?;
    Ok(())
}
