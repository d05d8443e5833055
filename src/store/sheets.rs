use super::{Result, StoreError, TableBackend};
use crate::sheets::{self, ValueRange};
use crate::table::RawTable;

/// One worksheet of a Google spreadsheet. The first row is the header.
pub struct SheetsBackend {
    client: sheets::Client,
    spreadsheet_id: String,
    worksheet: String,
}

impl SheetsBackend {
    pub fn new(client: sheets::Client, spreadsheet_id: String, worksheet: String) -> SheetsBackend {
        SheetsBackend {
            client,
            spreadsheet_id,
            worksheet,
        }
    }

    fn connection_error(&self, err: sheets::Error) -> StoreError {
        StoreError::connection(
            format_args!("Worksheet {:?} of spreadsheet {}", self.worksheet, self.spreadsheet_id),
            err,
        )
    }
}

/// The ranges left over once `rows` rows of `width` columns are written from A1: everything
/// below them and everything to their right.
fn stale_ranges(sheet: &str, rows: usize, width: usize) -> Vec<String> {
    let sheet = sheets::quote_sheet_name(sheet);
    vec![
        format!("{sheet}!A{}:ZZZ", rows + 1),
        format!("{sheet}!{}1:ZZZ", sheets::column_letters(width + 1)),
    ]
}

/// Turns the API's ragged rows into a table, padding rows out to the header width.
fn table_from_values(values: Vec<Vec<String>>) -> Option<RawTable> {
    let mut rows = values.into_iter();
    let header: Vec<String> = rows.next()?.into_iter().map(|h| h.trim().to_owned()).collect();
    if header.is_empty() {
        return None;
    }

    let width = header.len();
    let rows = rows
        .map(|mut row| {
            if row.len() < width {
                row.resize(width, String::new());
            }
            row
        })
        .collect();
    Some(RawTable::new(header, rows))
}

impl TableBackend for SheetsBackend {
    fn describe(&self) -> String {
        format!(
            "worksheet {:?} of spreadsheet {}",
            self.worksheet, self.spreadsheet_id
        )
    }

    fn read_table(&mut self) -> Result<Option<RawTable>> {
        let range = self
            .client
            .get_values(&self.spreadsheet_id, &sheets::quote_sheet_name(&self.worksheet))
            .map_err(|err| self.connection_error(err))?;
        Ok(table_from_values(range.values))
    }

    /// Overwrites from A1, then clears whatever the previous table left outside the new
    /// one. A failed overwrite leaves the old rows in place.
    fn write_table(&mut self, table: &RawTable) -> Result<()> {
        let mut values = Vec::with_capacity(table.rows.len() + 1);
        values.push(table.header.clone());
        values.extend(table.rows.iter().cloned());
        let written_rows = values.len();

        self.client
            .update_values(
                &self.spreadsheet_id,
                &format!("{}!A1", sheets::quote_sheet_name(&self.worksheet)),
                &ValueRange::rows(values),
            )
            .map_err(|err| self.connection_error(err))?;

        self.client
            .batch_clear_values(
                &self.spreadsheet_id,
                stale_ranges(&self.worksheet, written_rows, table.header.len()),
            )
            .map_err(|err| self.connection_error(err))
    }
}
