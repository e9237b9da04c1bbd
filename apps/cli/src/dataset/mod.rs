//! Dataset loading — reads the postings CSV into memory.
//!
//! The file is read once per run. Required columns are validated against the
//! header row before any record is deserialized, so a malformed export fails
//! with the column name instead of a per-row decode error.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::models::Posting;

/// Columns the analysis reads. Any other column in the file is ignored.
pub const REQUIRED_COLUMNS: [&str; 4] = ["state", "equivalent job title", "job_link", "edu_req"];

/// Loads every posting from the CSV file at `path`.
pub fn load_postings(path: &Path) -> Result<Vec<Posting>, AppError> {
    info!("Loading postings from {}", path.display());
    let file = File::open(path).map_err(|e| AppError::io(path, e))?;
    let postings = read_postings(file)?;

    if postings.is_empty() {
        warn!("Dataset {} contains no postings", path.display());
    } else {
        info!("Loaded {} postings", postings.len());
    }
    Ok(postings)
}

/// Reads postings from any CSV source with a header row.
pub fn read_postings<R: Read>(source: R) -> Result<Vec<Posting>, AppError> {
    let mut rdr = csv::Reader::from_reader(source);

    let headers = rdr.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(AppError::MissingColumn(column.to_string()));
        }
    }
    debug!("Dataset header has {} columns", headers.len());

    let mut postings = Vec::new();
    for record in rdr.deserialize() {
        let posting: Posting = record?;
        postings.push(posting);
    }
    Ok(postings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str = "job_link,state,equivalent job title,edu_req,company\n";

    #[test]
    fn test_reads_rows_and_ignores_extra_columns() {
        let csv = format!(
            "{HEADER}https://a/1,CA,Civil Engineers,bachelor_degree,Acme\n\
             https://a/2,NY,Infantry Officers,high_school,Army\n"
        );
        let postings = read_postings(csv.as_bytes()).unwrap();

        assert_eq!(postings.len(), 2);
        assert_eq!(postings[0].state(), Some("CA"));
        assert_eq!(postings[0].job_title(), Some("Civil Engineers"));
        assert_eq!(postings[1].edu_req(), Some("high_school"));
        assert!(postings[1].is_counted());
    }

    #[test]
    fn test_empty_cells_become_none() {
        let csv = format!("{HEADER},,Civil Engineers,,Acme\n");
        let postings = read_postings(csv.as_bytes()).unwrap();

        assert_eq!(postings.len(), 1);
        assert_eq!(postings[0].state(), None);
        assert_eq!(postings[0].edu_req(), None);
        assert!(!postings[0].is_counted());
    }

    #[test]
    fn test_missing_column_names_the_column() {
        let csv = "job_link,state,edu_req\nhttps://a/1,CA,high_school\n";
        let err = read_postings(csv.as_bytes()).unwrap_err();

        match err {
            AppError::MissingColumn(col) => assert_eq!(col, "equivalent job title"),
            other => panic!("Expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn test_quoted_titles_with_commas() {
        let csv = format!(
            "{HEADER}https://a/1,TX,\"Chemistry Teachers, Postsecondary\",master_degree,U\n"
        );
        let postings = read_postings(csv.as_bytes()).unwrap();
        assert_eq!(
            postings[0].job_title(),
            Some("Chemistry Teachers, Postsecondary")
        );
    }

    #[test]
    fn test_header_only_file_yields_no_postings() {
        let postings = read_postings(HEADER.as_bytes()).unwrap();
        assert!(postings.is_empty());
    }

    #[test]
    fn test_load_postings_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{HEADER}https://a/1,WA,Geodetic Surveyors,vocational,X").unwrap();

        let postings = load_postings(file.path()).unwrap();
        assert_eq!(postings.len(), 1);
        assert_eq!(postings[0].state(), Some("WA"));
    }

    #[test]
    fn test_load_postings_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_postings(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, AppError::Io { .. }));
    }
}
