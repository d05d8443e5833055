mod csv_file;
mod error;
mod memory;
mod sheets;
mod sqlite;

pub use csv_file::CsvFileBackend;
pub use error::{Result, StoreError};
pub use memory::MemoryBackend;
pub use sheets::SheetsBackend;
pub use sqlite::SqliteBackend;

use std::collections::HashSet;

use crate::application::{ApplicationId, NewApplication};
use crate::codec;
use crate::table::{ApplicationTable, RawTable};

/// Somewhere a whole table can be read from and overwritten.
pub trait TableBackend {
    /// Short human-readable name of where the data lives, for logs.
    fn describe(&self) -> String;

    /// The stored table, or `None` if nothing has been stored yet.
    fn read_table(&mut self) -> Result<Option<RawTable>>;

    /// Replaces everything stored with `table`.
    fn write_table(&mut self, table: &RawTable) -> Result<()>;
}

impl<T: TableBackend + ?Sized> TableBackend for Box<T> {
    fn describe(&self) -> String {
        (**self).describe()
    }

    fn read_table(&mut self) -> Result<Option<RawTable>> {
        (**self).read_table()
    }

    fn write_table(&mut self, table: &RawTable) -> Result<()> {
        (**self).write_table(table)
    }
}

/// The job application table on top of a backend.
///
/// Holds no rows itself: every operation loads the full table, changes it and writes all of
/// it back, so the last writer wins.
pub struct ApplicationStore<B> {
    backend: B,
}

impl<B: TableBackend> ApplicationStore<B> {
    pub fn new(backend: B) -> ApplicationStore<B> {
        ApplicationStore { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn load(&mut self) -> Result<ApplicationTable> {
        let raw = self.backend.read_table()?;
        let table = ApplicationTable::from_stored(raw)?;
        log::debug!(
            "Loaded {} applications from {}",
            table.len(),
            self.backend.describe()
        );
        Ok(table)
    }

    /// Appends a record dated today. Returns `false` without touching the store if the
    /// company is empty.
    pub fn append(&mut self, new_application: NewApplication) -> Result<bool> {
        self.append_dated(new_application, chrono::Local::now().date_naive())
    }

    pub fn append_dated(
        &mut self,
        new_application: NewApplication,
        date: chrono::NaiveDate,
    ) -> Result<bool> {
        if new_application.company.is_empty() {
            log::debug!("Ignoring application without a company");
            return Ok(false);
        }

        let mut table = self.load()?;
        let application = new_application.dated(date);
        log::info!("Saving {}", application.label());
        table.push(application);
        self.persist(&table)?;
        Ok(true)
    }

    /// Removes every record whose `"company - role"` label is in `labels`. When two records
    /// share a label both go. Returns how many were removed.
    pub fn delete(&mut self, labels: &HashSet<String>) -> Result<usize> {
        if labels.is_empty() {
            return Ok(0);
        }

        let mut table = self.load()?;
        let removed = table.remove_labels(labels);
        log::info!("Deleting {removed} applications matching {labels:?}");
        self.persist(&table)?;
        Ok(removed)
    }

    /// Removes the records at the given positions. Ids past the end are ignored.
    pub fn delete_ids(&mut self, ids: &HashSet<ApplicationId>) -> Result<usize> {
        if ids.is_empty() {
            return Ok(0);
        }

        let mut table = self.load()?;
        let removed = table.remove_ids(ids);
        log::info!("Deleting {removed} applications by id");
        self.persist(&table)?;
        Ok(removed)
    }

    /// Overwrites the store with `raw`, which must have exactly the canonical columns and
    /// decodable rows. On error nothing is written.
    pub fn replace(&mut self, raw: RawTable) -> Result<usize> {
        let table = ApplicationTable::from_import(&raw)?;
        log::info!(
            "Replacing {} with {} applications",
            self.backend.describe(),
            table.len()
        );
        self.persist(&table)?;
        Ok(table.len())
    }

    pub fn import_csv<R: std::io::Read>(&mut self, reader: R) -> Result<usize> {
        let raw = codec::read_csv(reader)?
            .ok_or_else(|| StoreError::schema("imported CSV is empty"))?;
        self.replace(raw)
    }

    /// The current table as CSV with the canonical header.
    pub fn export(&mut self) -> Result<Vec<u8>> {
        let table = self.load()?;
        codec::to_csv_bytes(&table.to_raw())
    }

    fn persist(&mut self, table: &ApplicationTable) -> Result<()> {
        self.backend.write_table(&table.to_raw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ApplicationStatus;

    fn store_with(rows: &[(&str, &str, &str)]) -> ApplicationStore<MemoryBackend> {
        let raw = RawTable::canonical(
            rows.iter()
                .map(|(c, r, s)| {
                    vec![
                        c.to_string(),
                        r.to_string(),
                        s.to_string(),
                        "2024-01-15".to_owned(),
                        String::new(),
                    ]
                })
                .collect(),
        );
        ApplicationStore::new(MemoryBackend::with_table(raw))
    }

    #[test]
    fn append_dates_record_today() {
        let mut store = ApplicationStore::new(MemoryBackend::new());
        let saved = store
            .append(NewApplication::new("Acme", "Eng").with_status(ApplicationStatus::Applied))
            .unwrap();
        assert!(saved);

        let table = store.load().unwrap();
        let last = table.last().unwrap();
        assert_eq!(last.company, "Acme");
        assert_eq!(last.role, "Eng");
        assert_eq!(last.status, ApplicationStatus::Applied);
        assert_eq!(last.date, chrono::Local::now().date_naive());
        assert_eq!(store.backend().writes(), 1);
    }

    #[test]
    fn append_keeps_insertion_order() {
        let mut store = store_with(&[("Globex", "PM", "Interview")]);
        store.append(NewApplication::new("Acme", "Eng")).unwrap();
        assert_eq!(store.load().unwrap().labels(), ["Globex - PM", "Acme - Eng"]);
    }

    #[test]
    fn append_without_company_is_a_no_op() {
        let mut store = store_with(&[("Globex", "PM", "Interview")]);
        let before = store.load().unwrap();

        let saved = store.append(NewApplication::new("", "Eng")).unwrap();
        assert!(!saved);
        assert_eq!(store.load().unwrap(), before);
        assert_eq!(store.backend().writes(), 0);
    }

    #[test]
    fn delete_label_removes_duplicates() {
        let mut store = store_with(&[
            ("Acme", "Eng", "Applied"),
            ("Globex", "PM", "Interview"),
            ("Acme", "Eng", "Rejected"),
        ]);
        let removed = store
            .delete(&HashSet::from(["Acme - Eng".to_owned()]))
            .unwrap();
        assert_eq!(removed, 2);
        assert_eq!(store.load().unwrap().labels(), ["Globex - PM"]);
    }

    #[test]
    fn delete_nothing_does_not_write() {
        let mut store = store_with(&[("Acme", "Eng", "Applied")]);
        assert_eq!(store.delete(&HashSet::new()).unwrap(), 0);
        assert_eq!(store.delete_ids(&HashSet::new()).unwrap(), 0);
        assert_eq!(store.backend().writes(), 0);
    }

    #[test]
    fn delete_id_disambiguates_duplicates() {
        let mut store = store_with(&[
            ("Acme", "Eng", "Applied"),
            ("Acme", "Eng", "Rejected"),
        ]);
        let removed = store.delete_ids(&HashSet::from([ApplicationId(2)])).unwrap();
        assert_eq!(removed, 1);

        let table = store.load().unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.last().unwrap().status, ApplicationStatus::Applied);
    }

    #[test]
    fn export_then_import_round_trips() {
        let mut store = store_with(&[
            ("Acme, Inc.", "Eng", "Applied"),
            ("Globex", "PM", "To Apply"),
        ]);
        let before = store.load().unwrap();
        let csv = store.export().unwrap();

        let mut other = ApplicationStore::new(MemoryBackend::new());
        assert_eq!(other.import_csv(csv.as_slice()).unwrap(), 2);
        assert_eq!(other.load().unwrap(), before);
    }

    #[test]
    fn import_missing_notes_leaves_store_unchanged() {
        let mut store = store_with(&[("Acme", "Eng", "Applied")]);
        let before = store.load().unwrap();

        let csv = "Company,Role,Status,Date\nGlobex,PM,Offer,2024-02-01\n";
        let err = store.import_csv(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, StoreError::SchemaMismatch(_)));
        assert_eq!(store.load().unwrap(), before);
        assert_eq!(store.backend().writes(), 0);
    }

    #[test]
    fn import_empty_file_is_rejected() {
        let mut store = ApplicationStore::new(MemoryBackend::new());
        assert!(matches!(
            store.import_csv("".as_bytes()),
            Err(StoreError::SchemaMismatch(_))
        ));
    }

    #[test]
    fn unreachable_backend_fails_every_operation() {
        let mut store = ApplicationStore::new(MemoryBackend::unreachable());
        assert!(matches!(store.load(), Err(StoreError::Connection(_))));
        assert!(matches!(
            store.append(NewApplication::new("Acme", "Eng")),
            Err(StoreError::Connection(_))
        ));
        assert!(matches!(store.export(), Err(StoreError::Connection(_))));
    }
}
