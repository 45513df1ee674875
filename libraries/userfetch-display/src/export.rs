//! Saving records to disk as JSON or CSV.

use crate::error::{ExportError, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;
use userfetch_client::UserRecord;

/// The four display fields, placeholders applied.
#[derive(Debug, Serialize)]
pub(crate) struct SummaryRow<'a> {
    name: &'a str,
    username: &'a str,
    email: &'a str,
    city: &'a str,
}

impl<'a> From<&'a UserRecord> for SummaryRow<'a> {
    fn from(user: &'a UserRecord) -> Self {
        Self {
            name: user.name(),
            username: user.username(),
            email: user.email(),
            city: user.city(),
        }
    }
}

/// Every field we keep for a user, placeholders applied.
#[derive(Debug, Serialize)]
struct FullRow<'a> {
    name: &'a str,
    username: &'a str,
    email: &'a str,
    city: &'a str,
    phone: &'a str,
    company: &'a str,
}

impl<'a> From<&'a UserRecord> for FullRow<'a> {
    fn from(user: &'a UserRecord) -> Self {
        Self {
            name: user.name(),
            username: user.username(),
            email: user.email(),
            city: user.city(),
            phone: user.phone(),
            company: user.company(),
        }
    }
}

/// Quote a CSV field, doubling embedded quotes.
pub(crate) fn csv_quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Save records to `path`.
///
/// A `.json` extension writes a pretty-printed JSON array; anything else
/// writes CSV.
pub fn save_to_file(path: &Path, records: &[UserRecord]) -> Result<()> {
    if records.is_empty() {
        return Err(ExportError::NoData);
    }

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let mut out = BufWriter::new(File::create(path)?);
    if is_json {
        let rows: Vec<FullRow<'_>> = records.iter().map(FullRow::from).collect();
        serde_json::to_writer_pretty(&mut out, &rows)?;
        writeln!(out)?;
    } else {
        writeln!(out, "Name,Username,Email,City,Phone,Company")?;
        for user in records {
            writeln!(
                out,
                "{},{},{},{},{},{}",
                csv_quote(user.name()),
                csv_quote(user.username()),
                csv_quote(user.email()),
                csv_quote(user.city()),
                csv_quote(user.phone()),
                csv_quote(user.company())
            )?;
        }
    }
    out.flush()?;

    info!(path = %path.display(), count = records.len(), "Saved users");
    Ok(())
}
