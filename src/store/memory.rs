use super::{Result, StoreError, TableBackend};
use crate::table::RawTable;

/// Keeps the table in memory. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    table: Option<RawTable>,
    writes: usize,
    unreachable: bool,
}

impl MemoryBackend {
    pub fn new() -> MemoryBackend {
        MemoryBackend::default()
    }

    pub fn with_table(table: RawTable) -> MemoryBackend {
        MemoryBackend {
            table: Some(table),
            ..MemoryBackend::default()
        }
    }

    /// A backend that fails every call as if the store were offline.
    pub fn unreachable() -> MemoryBackend {
        MemoryBackend {
            unreachable: true,
            ..MemoryBackend::default()
        }
    }

    /// How many times the table was overwritten.
    pub fn writes(&self) -> usize {
        self.writes
    }

    fn check_reachable(&self) -> Result<()> {
        if self.unreachable {
            return Err(StoreError::Connection("memory store is offline".to_owned()));
        }
        Ok(())
    }
}

impl TableBackend for MemoryBackend {
    fn describe(&self) -> String {
        "memory".to_owned()
    }

    fn read_table(&mut self) -> Result<Option<RawTable>> {
        self.check_reachable()?;
        Ok(self.table.clone())
    }

    fn write_table(&mut self, table: &RawTable) -> Result<()> {
        self.check_reachable()?;
        self.table = Some(table.clone());
        self.writes += 1;
        Ok(())
    }
}
