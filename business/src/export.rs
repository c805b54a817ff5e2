//! CSV export of the current filtered/sorted view.

use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone, Utc};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use log::debug;

use crate::error::RosterError;
use crate::format::{format_join_date, yes_no};
use crate::record::UserRecord;

pub const EXPORTED_MESSAGE: &str = "CSV exported successfully!";

pub const CSV_HEADERS: [&str; 5] = ["Email", "Name", "Join Date", "Verified", "Profile Complete"];

/// A CSV payload ready to be saved under `filename`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub filename: String,
    pub contents: String,
    /// Data rows, header excluded.
    pub rows: usize,
}

impl CsvExport {
    /// Saves into `dir` under the generated filename.
    pub fn write_to_dir(&self, dir: &Path) -> Result<PathBuf, RosterError> {
        let path = dir.join(&self.filename);
        self.write_to_path(&path)?;
        Ok(path)
    }

    pub fn write_to_path(&self, path: &Path) -> Result<(), RosterError> {
        fs::write(path, &self.contents)
            .map_err(|e| RosterError::Export(format!("{}: {e}", path.display())))?;
        debug!("wrote {} CSV rows to {}", self.rows, path.display());
        Ok(())
    }
}

/// `user-emails-<YYYY-MM-DD>.csv`, dated in UTC.
pub fn export_filename(now: &DateTime<Utc>) -> String {
    format!("user-emails-{}.csv", now.format("%Y-%m-%d"))
}

/// Serializes `view` with a header row; every field is quoted.
pub fn to_csv<Tz>(view: &[&UserRecord], tz: &Tz) -> Result<String, RosterError>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    // Header row included.
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer
        .write_record(CSV_HEADERS)
        .map_err(|e| RosterError::Export(e.to_string()))?;

    for record in view {
        let joined = format_join_date(&record.created_at, tz);
        writer
            .write_record([
                record.email.as_str(),
                record.display_name.as_str(),
                joined.as_str(),
                yes_no(record.email_verified),
                yes_no(record.profile_complete),
            ])
            .map_err(|e| RosterError::Export(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| RosterError::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| RosterError::Export(e.to_string()))
}

/// Builds the export for `view`; an empty view is [`RosterError::EmptyExport`].
pub fn export_view<Tz>(view: &[&UserRecord], now: &DateTime<Tz>) -> Result<CsvExport, RosterError>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if view.is_empty() {
        return Err(RosterError::EmptyExport);
    }

    Ok(CsvExport {
        filename: export_filename(&now.with_timezone(&Utc)),
        contents: to_csv(view, &now.timezone())?,
        rows: view.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 7, 9, 8, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    #[test]
    fn test_filename_uses_iso_date() {
        assert_eq!(export_filename(&now()), "user-emails-2024-07-09.csv");
    }

    #[test]
    fn test_csv_quotes_every_field() {
        let record = UserRecord::new("u1", "ann@x.com", "Ann", now())
            .with_email_verified(true);
        let csv = to_csv(&[&record], &Utc).expect("csv");
        assert_eq!(
            csv,
            "\"Email\",\"Name\",\"Join Date\",\"Verified\",\"Profile Complete\"\n\
             \"ann@x.com\",\"Ann\",\"Jul 9, 2024\",\"Yes\",\"No\"\n"
        );
    }

    #[test]
    fn test_csv_escapes_embedded_quotes_and_commas() {
        let record = UserRecord::new("u1", "q@x.com", "Smith, \"Jo\"", now());
        let csv = to_csv(&[&record], &Utc).expect("csv");
        assert!(csv.contains("\"Smith, \"\"Jo\"\"\""));
    }

    #[test]
    fn test_empty_view_is_rejected() {
        assert_eq!(export_view(&[], &now()), Err(RosterError::EmptyExport));
    }

    #[test]
    fn test_export_counts_rows_and_writes_file() {
        let a = UserRecord::new("a", "a@x.com", "A", now());
        let b = UserRecord::new("b", "b@x.com", "B", now());
        let export = export_view(&[&a, &b], &now()).expect("export");
        assert_eq!(export.rows, 2);
        assert_eq!(export.contents.lines().count(), 3);

        let dir = tempfile::tempdir().expect("temp dir");
        let path = export.write_to_dir(dir.path()).expect("write");
        assert!(path.ends_with("user-emails-2024-07-09.csv"));
        assert_eq!(
            std::fs::read_to_string(path).expect("read back"),
            export.contents
        );
    }
}
