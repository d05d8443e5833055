use std::collections::HashSet;
use std::fs;

use jobtrack::store::{CsvFileBackend, SqliteBackend};
use jobtrack::{ApplicationStatus, ApplicationStore, NewApplication, StoreError, TableBackend};

fn seed<B: TableBackend>(store: &mut ApplicationStore<B>) {
    for (company, role, status) in [
        ("Acme", "Eng", ApplicationStatus::Applied),
        ("Globex", "PM", ApplicationStatus::Interview),
        ("Acme", "Eng", ApplicationStatus::Rejected),
        ("Initech", "SRE", ApplicationStatus::Applied),
    ] {
        assert!(store
            .append(NewApplication::new(company, role).with_status(status))
            .unwrap());
    }
}

#[test]
fn csv_file_lifecycle() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("applications.csv");
    let mut store = ApplicationStore::new(CsvFileBackend::new(&path));

    assert!(store.load().unwrap().is_empty());
    assert!(!path.exists());

    seed(&mut store);
    let today = chrono::Local::now().date_naive().format("%Y-%m-%d").to_string();
    let written = fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("Company,Role,Status,Date,Notes\n"));
    assert!(written.contains(&format!("Acme,Eng,Applied,{today},\n")));

    // a fresh store over the same file sees the same rows
    let mut reopened = ApplicationStore::new(CsvFileBackend::new(&path));
    let table = reopened.load().unwrap();
    let applied: Vec<_> = table
        .filter_by_status(&[ApplicationStatus::Applied])
        .into_iter()
        .map(|(id, app)| (id.0, app.company.as_str()))
        .collect();
    assert_eq!(applied, [(1, "Acme"), (4, "Initech")]);

    let removed = reopened
        .delete(&HashSet::from(["Acme - Eng".to_owned()]))
        .unwrap();
    assert_eq!(removed, 2);
    assert_eq!(store.load().unwrap().labels(), ["Globex - PM", "Initech - SRE"]);
}

#[test]
fn export_import_round_trip_between_backends() {
    let dir = tempfile::tempdir().unwrap();
    let mut csv_store = ApplicationStore::new(CsvFileBackend::new(dir.path().join("a.csv")));
    seed(&mut csv_store);
    csv_store
        .append(
            NewApplication::new("Umbrella", "Researcher")
                .with_status(ApplicationStatus::Offer)
                .with_notes("relocation, \"maybe\"\nask about visa"),
        )
        .unwrap();
    let exported = csv_store.export().unwrap();

    let mut sqlite_store =
        ApplicationStore::new(SqliteBackend::open(&dir.path().join("a.sqlite")).unwrap());
    assert_eq!(sqlite_store.import_csv(exported.as_slice()).unwrap(), 5);
    assert_eq!(sqlite_store.load().unwrap(), csv_store.load().unwrap());
    assert_eq!(sqlite_store.export().unwrap(), exported);
}

#[test]
fn rejected_import_keeps_file_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("applications.csv");
    let mut store = ApplicationStore::new(CsvFileBackend::new(&path));
    seed(&mut store);
    let before = fs::read(&path).unwrap();

    let missing_notes = "Company,Role,Status,Date\nHooli,Eng,Offer,2024-05-01\n";
    assert!(matches!(
        store.import_csv(missing_notes.as_bytes()),
        Err(StoreError::SchemaMismatch(_))
    ));

    let bad_status = "Company,Role,Status,Date,Notes\nHooli,Eng,Hired,2024-05-01,\n";
    assert!(matches!(
        store.import_csv(bad_status.as_bytes()),
        Err(StoreError::SchemaMismatch(_))
    ));

    assert_eq!(fs::read(&path).unwrap(), before);
}

#[test]
fn foreign_header_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("applications.csv");
    fs::write(&path, "Name,Email\nAda,ada@example.com\n").unwrap();

    let mut store = ApplicationStore::new(CsvFileBackend::new(&path));
    assert!(store.load().unwrap().is_empty());

    // the first write replaces it with the canonical schema
    store.append(NewApplication::new("Acme", "Eng")).unwrap();
    let written = fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("Company,Role,Status,Date,Notes\nAcme,Eng,To Apply,"));
    assert_eq!(written.lines().count(), 2);
}
