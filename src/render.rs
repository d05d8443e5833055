use std::io::{self, Write};

use crate::application::{ApplicationId, JobApplication};
use crate::table::{COLUMNS, DATE_FORMAT};

fn one_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Writes rows as left-aligned columns under an `#` + canonical header.
pub fn write_table<'a, W, I>(out: &mut W, rows: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = (ApplicationId, &'a JobApplication)>,
{
    let mut lines: Vec<[String; 6]> = vec![[
        "#".to_owned(),
        COLUMNS[0].to_owned(),
        COLUMNS[1].to_owned(),
        COLUMNS[2].to_owned(),
        COLUMNS[3].to_owned(),
        COLUMNS[4].to_owned(),
    ]];
    for (id, app) in rows {
        lines.push([
            id.to_string(),
            one_line(&app.company),
            one_line(&app.role),
            app.status.to_string(),
            app.date.format(DATE_FORMAT).to_string(),
            one_line(&app.notes),
        ]);
    }

    let mut widths = [0; 6];
    for line in lines.iter() {
        for (width, cell) in widths.iter_mut().zip(line) {
            *width = (*width).max(cell.chars().count());
        }
    }

    for line in lines.iter() {
        let mut text = String::new();
        for (idx, cell) in line.iter().enumerate() {
            if idx > 0 {
                text.push_str("  ");
            }
            text.push_str(cell);
            if idx + 1 < line.len() {
                let padding = widths[idx] - cell.chars().count();
                text.extend(std::iter::repeat(' ').take(padding));
            }
        }
        writeln!(out, "{}", text.trim_end())?;
    }
    Ok(())
}
