//! CSV and JSON files for a fetched record set.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tweetpipe_core::CanonicalRecord;

#[derive(Debug, Error)]
pub(crate) enum ExportError {
    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ExportError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Paths of the files written by [`export_records`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ExportPaths {
    pub(crate) csv: PathBuf,
    pub(crate) json: PathBuf,
}

pub(crate) fn csv_file_name(search_term: &str) -> String {
    format!("{search_term}twitterDataCSV.csv")
}

pub(crate) fn json_file_name(search_term: &str) -> String {
    format!("{search_term}twitterDataJSON.json")
}

/// Writes both files for `search_term` into `output_dir`, creating it if needed.
pub(crate) fn export_records(
    records: &[CanonicalRecord],
    output_dir: &Path,
    search_term: &str,
) -> Result<ExportPaths, ExportError> {
    std::fs::create_dir_all(output_dir).map_err(|e| ExportError::io(output_dir, e))?;

    let paths = ExportPaths {
        csv: output_dir.join(csv_file_name(search_term)),
        json: output_dir.join(json_file_name(search_term)),
    };

    write_csv(records, &paths.csv)?;
    tracing::info!(path = %paths.csv.display(), rows = records.len(), "wrote CSV file");
    write_json(records, &paths.json)?;
    tracing::info!(path = %paths.json.display(), rows = records.len(), "wrote JSON file");

    Ok(paths)
}

/// One header row in field order, then one row per record. The header is
/// written even when `records` is empty.
pub(crate) fn write_csv(records: &[CanonicalRecord], path: &Path) -> Result<(), ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    writer.write_record(CanonicalRecord::FIELD_NAMES)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush().map_err(|e| ExportError::io(path, e))
}

/// A JSON array of field-keyed objects.
pub(crate) fn write_json(records: &[CanonicalRecord], path: &Path) -> Result<(), ExportError> {
    let file = File::create(path).map_err(|e| ExportError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.flush().map_err(|e| ExportError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(post_id: &str, text: &str) -> CanonicalRecord {
        CanonicalRecord {
            created_at: "2018-10-10 20:19:24+00:00".to_owned(),
            text: text.to_owned(),
            favorite_count: 4,
            retweet_count: 2,
            post_id: post_id.to_owned(),
            self_favorited: false,
            self_retweeted: true,
            lang: "en".to_owned(),
            place: "noPlaceData".to_owned(),
            coordinates: "[-86.4716, 40.0521]".to_owned(),
            in_reply_to_user_id: "noInReplyToUseridData".to_owned(),
            in_reply_to_status_id: "noInReplyToStatusidData".to_owned(),
        }
    }

    #[test]
    fn file_names_carry_the_search_term() {
        assert_eq!(csv_file_name("cats"), "catstwitterDataCSV.csv");
        assert_eq!(json_file_name("cats"), "catstwitterDataJSON.json");
    }

    #[test]
    fn csv_has_header_then_one_row_per_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_csv(&[record("1", "hello"), record("2", "world")], &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], CanonicalRecord::FIELD_NAMES.join(","));
        assert_eq!(
            lines[1],
            "2018-10-10 20:19:24+00:00,hello,4,2,1,false,true,en,noPlaceData,\"[-86.4716, 40.0521]\",noInReplyToUseridData,noInReplyToStatusidData"
        );
    }

    #[test]
    fn empty_csv_still_has_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        write_csv(&[], &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.trim_end(), CanonicalRecord::FIELD_NAMES.join(","));
    }

    #[test]
    fn json_is_an_array_of_keyed_objects() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        write_json(&[record("1", "hello")], &path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let items = value.as_array().expect("top-level array");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["post_id"], "1");
        assert_eq!(items[0]["favorite_count"], 4);
        assert_eq!(items[0]["self_retweeted"], true);
    }

    #[test]
    fn empty_json_is_an_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.json");
        write_json(&[], &path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value, serde_json::json!([]));
    }

    #[test]
    fn export_records_creates_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested").join("out");
        let paths = export_records(&[record("1", "hi")], &out, "cats").unwrap();

        assert_eq!(paths.csv, out.join("catstwitterDataCSV.csv"));
        assert_eq!(paths.json, out.join("catstwitterDataJSON.json"));
        assert!(paths.csv.exists());
        assert!(paths.json.exists());
    }
}
