use std::fs;
use std::io;
use std::path::PathBuf;

use super::{Result, StoreError, TableBackend};
use crate::codec;
use crate::table::RawTable;

/// A local CSV file with the columns `Company,Role,Status,Date,Notes`.
pub struct CsvFileBackend {
    path: PathBuf,
}

impl CsvFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> CsvFileBackend {
        CsvFileBackend { path: path.into() }
    }
}

impl TableBackend for CsvFileBackend {
    fn describe(&self) -> String {
        format!("CSV file {}", self.path.display())
    }

    fn read_table(&mut self) -> Result<Option<RawTable>> {
        match fs::File::open(&self.path) {
            Ok(file) => codec::read_csv(io::BufReader::new(file)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::info!(
                    "{} does not exist yet, starting with an empty table",
                    self.path.display()
                );
                Ok(None)
            }
            Err(err) => Err(StoreError::connection(
                format_args!("Opening {}", self.path.display()),
                err,
            )),
        }
    }

    fn write_table(&mut self, table: &RawTable) -> Result<()> {
        let file = fs::File::create(&self.path).map_err(|err| {
            StoreError::connection(format_args!("Creating {}", self.path.display()), err)
        })?;
        codec::write_csv(table, io::BufWriter::new(file))
    }
}
