use std::io;

use crate::store::{Result, StoreError};
use crate::table::RawTable;

fn map_csv_error(err: csv::Error) -> StoreError {
    if matches!(err.kind(), csv::ErrorKind::Io(_)) {
        StoreError::connection("CSV I/O", err)
    } else {
        StoreError::schema(format!("malformed CSV: {err}"))
    }
}

/// Parses CSV text whose first record is the header. Empty input gives `None`.
///
/// Every record must have as many fields as the header.
pub fn read_csv<R: io::Read>(reader: R) -> Result<Option<RawTable>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(reader);

    let mut records = reader.records();
    let header: Vec<String> = match records.next() {
        None => return Ok(None),
        Some(record) => record
            .map_err(map_csv_error)?
            .iter()
            .map(|h| h.trim().to_owned())
            .collect(),
    };

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in records {
        let record = record.map_err(map_csv_error)?;
        rows.push(record.iter().map(str::to_owned).collect());
    }

    Ok(Some(RawTable::new(header, rows)))
}

pub fn write_csv<W: io::Write>(table: &RawTable, writer: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(&table.header).map_err(map_csv_error)?;
    for row in table.rows.iter() {
        writer.write_record(row).map_err(map_csv_error)?;
    }
    writer
        .flush()
        .map_err(|err| StoreError::connection("Flushing CSV", err))
}

pub fn to_csv_bytes(table: &RawTable) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    write_csv(table, &mut buf)?;
    Ok(buf)
}
