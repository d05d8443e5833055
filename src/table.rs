use std::collections::HashSet;

use crate::application::{ApplicationId, ApplicationStatus, JobApplication};
use crate::store::{Result, StoreError};

/// The canonical schema, in column order.
pub const COLUMNS: [&str; 5] = ["Company", "Role", "Status", "Date", "Notes"];

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A table as a backend sees it: a header row and string cells, nothing validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(header: Vec<String>, rows: Vec<Vec<String>>) -> RawTable {
        RawTable { header, rows }
    }

    /// A table with the canonical header.
    pub fn canonical(rows: Vec<Vec<String>>) -> RawTable {
        RawTable {
            header: COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows,
        }
    }

    pub fn has_canonical_header(&self) -> bool {
        self.header.iter().map(String::as_str).eq(COLUMNS)
    }

    /// Where each canonical column sits in this table, or `None` if any is missing.
    fn column_positions(&self) -> Option<[usize; 5]> {
        let mut positions = [0; 5];
        for (pos, column) in positions.iter_mut().zip(COLUMNS) {
            *pos = self.header.iter().position(|h| h == column)?;
        }
        Some(positions)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationTable {
    applications: Vec<JobApplication>,
}

impl ApplicationTable {
    pub fn new() -> ApplicationTable {
        ApplicationTable::default()
    }

    pub fn len(&self) -> usize {
        self.applications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.applications.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, JobApplication> {
        self.applications.iter()
    }

    pub fn iter_with_ids(&self) -> impl Iterator<Item = (ApplicationId, &JobApplication)> {
        self.applications
            .iter()
            .enumerate()
            .map(|(idx, app)| (ApplicationId::from_index(idx), app))
    }

    pub fn get(&self, id: ApplicationId) -> Option<&JobApplication> {
        id.index().and_then(|idx| self.applications.get(idx))
    }

    pub fn last(&self) -> Option<&JobApplication> {
        self.applications.last()
    }

    pub fn push(&mut self, application: JobApplication) {
        self.applications.push(application);
    }

    /// Rows whose status is one of `statuses`, in table order.
    pub fn filter_by_status(
        &self,
        statuses: &[ApplicationStatus],
    ) -> Vec<(ApplicationId, &JobApplication)> {
        self.iter_with_ids()
            .filter(|(_, app)| statuses.contains(&app.status))
            .collect()
    }

    /// Distinct statuses in order of first appearance.
    pub fn statuses(&self) -> Vec<ApplicationStatus> {
        let mut statuses = Vec::new();
        for app in self.applications.iter() {
            if !statuses.contains(&app.status) {
                statuses.push(app.status);
            }
        }
        statuses
    }

    pub fn labels(&self) -> Vec<String> {
        self.applications.iter().map(JobApplication::label).collect()
    }

    /// Removes every row whose label is in `labels`, duplicates included.
    pub fn remove_labels(&mut self, labels: &HashSet<String>) -> usize {
        let before = self.applications.len();
        self.applications.retain(|app| !labels.contains(&app.label()));
        before - self.applications.len()
    }

    pub fn remove_ids(&mut self, ids: &HashSet<ApplicationId>) -> usize {
        let before = self.applications.len();
        let mut idx = 0;
        self.applications.retain(|_| {
            idx += 1;
            !ids.contains(&ApplicationId(idx))
        });
        before - self.applications.len()
    }

    /// Reads what a backend returned. Missing data or a header without all of the expected
    /// columns gives an empty table; extra columns are ignored.
    pub fn from_stored(raw: Option<RawTable>) -> Result<ApplicationTable> {
        let Some(raw) = raw else {
            return Ok(ApplicationTable::new());
        };
        match raw.column_positions() {
            None => {
                log::warn!(
                    "Stored header {:?} lacks the expected columns, starting from an empty table",
                    raw.header
                );
                Ok(ApplicationTable::new())
            }
            Some(positions) => decode_rows(&raw.rows, positions).map_err(|err| match err {
                StoreError::SchemaMismatch(msg) => StoreError::SchemaMismatch(format!(
                    "stored {msg}; fix the cell where the table lives, or replace the whole \
                     table with `jobtrack import <file>`"
                )),
                other => other,
            }),
        }
    }

    /// Reads a table that is about to replace the store; the header must be exactly canonical.
    pub fn from_import(raw: &RawTable) -> Result<ApplicationTable> {
        if !raw.has_canonical_header() {
            return Err(StoreError::schema(format!(
                "expected columns {}, got {}",
                COLUMNS.join(", "),
                raw.header.join(", ")
            )));
        }
        decode_rows(&raw.rows, [0, 1, 2, 3, 4])
    }

    pub fn to_raw(&self) -> RawTable {
        RawTable::canonical(
            self.applications
                .iter()
                .map(|app| {
                    vec![
                        app.company.clone(),
                        app.role.clone(),
                        app.status.to_string(),
                        app.date.format(DATE_FORMAT).to_string(),
                        app.notes.clone(),
                    ]
                })
                .collect(),
        )
    }
}

impl FromIterator<JobApplication> for ApplicationTable {
    fn from_iter<I: IntoIterator<Item = JobApplication>>(iter: I) -> Self {
        ApplicationTable {
            applications: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ApplicationTable {
    type Item = &'a JobApplication;
    type IntoIter = std::slice::Iter<'a, JobApplication>;

    fn into_iter(self) -> Self::IntoIter {
        self.applications.iter()
    }
}

fn decode_rows(rows: &[Vec<String>], positions: [usize; 5]) -> Result<ApplicationTable> {
    let mut applications = Vec::with_capacity(rows.len());
    for (idx, row) in rows.iter().enumerate() {
        // blank rows show up in hand-edited sheets
        if row.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        // +2: one for the header, one because sheets count from 1
        applications.push(decode_row(row, positions, idx + 2)?);
    }
    Ok(ApplicationTable { applications })
}

fn decode_row(row: &[String], positions: [usize; 5], line: usize) -> Result<JobApplication> {
    let cell = move |column: usize| row.get(positions[column]).map(String::as_str).unwrap_or("");

    let company = cell(0);
    if company.is_empty() {
        return Err(StoreError::schema(format!("row {line}, column Company: empty")));
    }

    let status = cell(2).trim().parse::<ApplicationStatus>().map_err(|_| {
        StoreError::schema(format!("row {line}, column Status: unknown status {:?}", cell(2)))
    })?;

    let date = chrono::NaiveDate::parse_from_str(cell(3).trim(), DATE_FORMAT).map_err(|err| {
        StoreError::schema(format!("row {line}, column Date: bad date {:?}: {err}", cell(3)))
    })?;

    Ok(JobApplication {
        company: company.to_owned(),
        role: cell(1).to_owned(),
        status,
        date,
        notes: cell(4).to_owned(),
    })
}
