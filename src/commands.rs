use std::collections::HashSet;
use std::io::Write;
use std::path::Path;

use anyhow::Context;
use strum::IntoEnumIterator;

use crate::application::{ApplicationId, ApplicationStatus, NewApplication};
use crate::render;
use crate::store::{ApplicationStore, TableBackend};

pub fn add_application<B: TableBackend>(
    store: &mut ApplicationStore<B>,
    new_application: NewApplication,
    out: &mut impl Write,
) -> anyhow::Result<bool> {
    let company = new_application.company.clone();
    if !store.append(new_application)? {
        writeln!(out, "Nothing saved: company name is empty")?;
        return Ok(false);
    }
    writeln!(out, "Saved {company}!")?;
    Ok(true)
}

/// Prints applications whose status is in `statuses`, or every application if it is empty.
pub fn list_applications<B: TableBackend>(
    store: &mut ApplicationStore<B>,
    statuses: &[ApplicationStatus],
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let table = store.load()?;
    if table.is_empty() {
        writeln!(out, "No jobs added yet.")?;
        return Ok(());
    }

    let statuses = if statuses.is_empty() {
        table.statuses()
    } else {
        statuses.to_vec()
    };

    let rows = table.filter_by_status(&statuses);
    if rows.is_empty() {
        let names: Vec<_> = statuses.iter().map(|s| s.as_str()).collect();
        writeln!(out, "No applications with status {}.", names.join(", "))?;
        return Ok(());
    }
    render::write_table(out, rows)?;
    Ok(())
}

/// Deletes by id first, since ids are positions and label deletion would shift them.
pub fn delete_applications<B: TableBackend>(
    store: &mut ApplicationStore<B>,
    labels: &[String],
    ids: &[usize],
    out: &mut impl Write,
) -> anyhow::Result<usize> {
    if labels.is_empty() && ids.is_empty() {
        writeln!(out, "Nothing selected to delete.")?;
        return Ok(0);
    }

    let known_labels: HashSet<String> = store.load()?.labels().into_iter().collect();
    for label in labels.iter().filter(|l| !known_labels.contains(*l)) {
        log::warn!("No application matches {label:?}");
    }

    let ids: HashSet<ApplicationId> = ids.iter().copied().map(ApplicationId).collect();
    let labels: HashSet<String> = labels.iter().cloned().collect();
    let removed = store.delete_ids(&ids)? + store.delete(&labels)?;

    writeln!(out, "Deleted {removed} application(s).")?;
    Ok(removed)
}

pub fn import_applications<B: TableBackend>(
    store: &mut ApplicationStore<B>,
    file_path: &Path,
    out: &mut impl Write,
) -> anyhow::Result<usize> {
    let file = std::fs::File::open(file_path)
        .with_context(|| format!("Opening import file {file_path:?}"))?;
    let count = store
        .import_csv(std::io::BufReader::new(file))
        .with_context(|| format!("Importing {file_path:?}"))?;
    writeln!(out, "Imported {count} application(s) from {}.", file_path.display())?;
    Ok(count)
}

/// Writes the CSV snapshot to `output`, or to `out` if no file is given.
pub fn export_applications<B: TableBackend>(
    store: &mut ApplicationStore<B>,
    output: Option<&Path>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let csv = store.export()?;
    match output {
        Some(file_path) => {
            std::fs::write(file_path, &csv)
                .with_context(|| format!("Writing export file {file_path:?}"))?;
            log::info!("Exported {} bytes to {}", csv.len(), file_path.display());
        }
        None => out.write_all(&csv)?,
    }
    Ok(())
}

pub fn print_statuses(out: &mut impl Write) -> anyhow::Result<()> {
    for status in ApplicationStatus::iter() {
        writeln!(out, "{status}")?;
    }
    Ok(())
}
