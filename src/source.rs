//! Loads log records from a directory of Parquet files.
//!
//! Each file is one batch. A file that cannot be read is logged and skipped;
//! only a missing directory or a directory without Parquet files is fatal.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use parquet::file::reader::{FileReader, SerializedFileReader};
use parquet::record::{Field, Row};
use tracing::{debug, info, warn};

use crate::error::{LensError, Result};
use crate::model::Record;
use crate::LogLens;

const EVENT_ID: &str = "EventId";
const MESSAGE: &str = "Message";
const NANO_TIMESTAMP: &str = "NanoTimeStamp";

/// Outcome of a directory load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadReport {
    pub files_loaded: usize,
    pub files_skipped: usize,
    pub records: usize,
}

/// Regular files directly under `dir` ending in `.parquet` (any case), sorted.
pub fn find_parquet_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| LensError::path("read directory", dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| LensError::path("read directory", dir, e))?;
        let file_type = entry.file_type().map_err(|e| LensError::path("stat", entry.path(), e))?;
        if file_type.is_dir() {
            continue;
        }
        if entry.file_name().to_string_lossy().to_lowercase().ends_with(".parquet") {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}

/// Reads every row of a Parquet file into records.
pub fn read_parquet_file(path: &Path) -> Result<Vec<Record>> {
    let file = File::open(path).map_err(|e| LensError::path("open", path, e))?;
    let reader = SerializedFileReader::new(file).map_err(|e| LensError::parquet(path, e))?;

    let metadata = reader.metadata();
    for column in metadata.file_metadata().schema_descr().columns() {
        debug!("Schema field in {}: {} (Type: {})", path.display(), column.name(), column.physical_type());
    }

    let num_rows = usize::try_from(metadata.file_metadata().num_rows()).unwrap_or(0);
    let mut records = Vec::with_capacity(num_rows);

    let rows = reader.get_row_iter(None).map_err(|e| LensError::parquet(path, e))?;
    for row in rows {
        let row = row.map_err(|e| LensError::parquet(path, e))?;
        records.push(record_from_row(&row));
    }
    Ok(records)
}

/// Loads every Parquet file in `dir` into `lens`, in path order.
pub fn load_directory(lens: &mut LogLens, dir: &Path) -> Result<LoadReport> {
    let files = find_parquet_files(dir)?;
    if files.is_empty() {
        return Err(LensError::NoSources { dir: dir.to_path_buf() });
    }

    let mut report = LoadReport::default();
    for file in &files {
        info!("Loading file: {}", file.display());
        match read_parquet_file(file) {
            Ok(batch) => {
                let count = lens.ingest(batch);
                debug!("Indexed {} records from {}", count, file.display());
                report.records += count;
                report.files_loaded += 1;
            }
            Err(e) => {
                warn!("{}", e);
                report.files_skipped += 1;
            }
        }
    }
    Ok(report)
}

fn record_from_row(row: &Row) -> Record {
    let mut record = Record::default();
    for (name, field) in row.get_column_iter() {
        match name.as_str() {
            EVENT_ID => record.event_id = field_text(field),
            MESSAGE => record.message = field_text(field),
            NANO_TIMESTAMP => record.nano_timestamp = field_text(field),
            _ => {}
        }
    }
    record
}

fn field_text(field: &Field) -> String {
    match field {
        Field::Null => String::new(),
        Field::Str(s) => s.clone(),
        Field::Bytes(bytes) => String::from_utf8_lossy(bytes.data()).into_owned(),
        // Integer timestamps render as plain decimal
        other => other.to_string(),
    }
}
