use std::path::Path;

use super::{Result, StoreError, TableBackend};
use crate::table::{RawTable, COLUMNS};

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS applications (
    company TEXT NOT NULL,
    role TEXT NOT NULL,
    status TEXT NOT NULL,
    date TEXT NOT NULL,
    notes TEXT NOT NULL
)";

/// The table kept in a local SQLite database, one row per application in rowid order.
pub struct SqliteBackend {
    conn: rusqlite::Connection,
    description: String,
}

fn sql_error(context: &str) -> impl FnOnce(rusqlite::Error) -> StoreError + '_ {
    move |err| StoreError::connection(context, err)
}

impl SqliteBackend {
    pub fn open(file_path: &Path) -> Result<Self> {
        let conn = rusqlite::Connection::open_with_flags(
            file_path,
            rusqlite::OpenFlags::SQLITE_OPEN_READ_WRITE | rusqlite::OpenFlags::SQLITE_OPEN_CREATE,
        )
        .map_err(|err| {
            StoreError::connection(
                format_args!("Failed to open SQLite DB {}", file_path.display()),
                err,
            )
        })?;
        Self::init(conn, format!("SQLite DB {}", file_path.display()))
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = rusqlite::Connection::open_in_memory()
            .map_err(sql_error("Opening in-memory SQLite DB"))?;
        Self::init(conn, "in-memory SQLite DB".to_owned())
    }

    fn init(conn: rusqlite::Connection, description: String) -> Result<Self> {
        conn.execute(CREATE_TABLE, ())
            .map_err(sql_error("Creating applications table"))?;
        Ok(Self { conn, description })
    }
}

impl TableBackend for SqliteBackend {
    fn describe(&self) -> String {
        self.description.clone()
    }

    fn read_table(&mut self) -> Result<Option<RawTable>> {
        let mut stmt = self
            .conn
            .prepare("SELECT company, role, status, date, notes FROM applications ORDER BY rowid")
            .map_err(sql_error("Querying all applications"))?;

        let rows = stmt
            .query_map((), |row| {
                (0..COLUMNS.len())
                    .map(|idx| row.get::<_, String>(idx))
                    .collect::<rusqlite::Result<Vec<_>>>()
            })
            .map_err(sql_error("Querying all applications"))?;

        let mut result = Vec::new();
        for (row_idx, row) in rows.into_iter().enumerate() {
            result.push(row.map_err(|err| {
                StoreError::connection(format_args!("Reading application row {row_idx}"), err)
            })?);
        }
        Ok(Some(RawTable::canonical(result)))
    }

    fn write_table(&mut self, table: &RawTable) -> Result<()> {
        if !table.has_canonical_header() {
            return Err(StoreError::schema(format!(
                "cannot store columns {} in SQLite",
                table.header.join(", ")
            )));
        }

        let tx = self
            .conn
            .transaction()
            .map_err(sql_error("Starting transaction"))?;
        tx.execute("DELETE FROM applications", ())
            .map_err(sql_error("Clearing applications"))?;
        {
            let mut insert = tx
                .prepare("INSERT INTO applications (company, role, status, date, notes) VALUES (:company, :role, :status, :date, :notes)")
                .map_err(sql_error("Preparing insert"))?;
            for row in table.rows.iter() {
                let cell = |idx: usize| row.get(idx).map(String::as_str).unwrap_or("");
                insert
                    .execute(rusqlite::named_params! {
                        ":company": cell(0),
                        ":role": cell(1),
                        ":status": cell(2),
                        ":date": cell(3),
                        ":notes": cell(4),
                    })
                    .map_err(sql_error("Inserting application"))?;
            }
        }
        tx.commit().map_err(sql_error("Committing applications"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn new_database_reads_empty() {
        let mut backend = SqliteBackend::open_in_memory().unwrap();
        assert_eq!(backend.read_table().unwrap(), Some(RawTable::canonical(vec![])));
    }

    #[test]
    fn overwrite_keeps_row_order() {
        let mut backend = SqliteBackend::open_in_memory().unwrap();
        backend
            .write_table(&RawTable::canonical(vec![
                row(&["Acme", "Eng", "Applied", "2024-03-01", ""]),
                row(&["Globex", "PM", "Offer", "2024-03-02", "yes"]),
            ]))
            .unwrap();

        let shrunk = RawTable::canonical(vec![row(&["Initech", "SRE", "To Apply", "2024-03-03", ""])]);
        backend.write_table(&shrunk).unwrap();
        assert_eq!(backend.read_table().unwrap(), Some(shrunk));
    }

    #[test]
    fn file_database_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jobs.sqlite");
        let table = RawTable::canonical(vec![row(&["Acme", "Eng", "Applied", "2024-03-01", ""])]);

        SqliteBackend::open(&path).unwrap().write_table(&table).unwrap();
        assert_eq!(
            SqliteBackend::open(&path).unwrap().read_table().unwrap(),
            Some(table)
        );
    }

    #[test]
    fn rejects_other_columns() {
        let mut backend = SqliteBackend::open_in_memory().unwrap();
        let raw = RawTable::new(row(&["Company", "Role"]), vec![]);
        assert!(matches!(
            backend.write_table(&raw),
            Err(StoreError::SchemaMismatch(_))
        ));
    }
}
