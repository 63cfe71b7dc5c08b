use std::borrow::Cow;
use std::path::{Path, PathBuf};

use tokio::io::{AsyncWriteExt, BufWriter};

use crate::error::{AppError, AppResult, SinkError};
use crate::results::ResultRecord;

pub const CSV_HEADER: &str = "url,status,response_time,timestamp";
const RESULTS_SUFFIX: &str = "_results.csv";

/// Replaces every run of non-alphanumeric characters with one underscore.
#[must_use]
pub fn sanitize_url(url: &str) -> String {
    let mut sanitized = String::with_capacity(url.len());
    let mut in_run = false;
    for ch in url.chars() {
        if ch.is_ascii_alphanumeric() {
            sanitized.push(ch);
            in_run = false;
        } else if !in_run {
            sanitized.push('_');
            in_run = true;
        }
    }
    sanitized
}

#[must_use]
pub fn results_filename(url: &str) -> String {
    format!("{}{}", sanitize_url(url), RESULTS_SUFFIX)
}

/// Writes `records` to `<dir>/<sanitized url>_results.csv`.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub async fn write_results(dir: &Path, url: &str, records: &[ResultRecord]) -> AppResult<PathBuf> {
    let path = dir.join(results_filename(url));
    export_csv(&path, records).await?;
    Ok(path)
}

/// Writes the header row followed by one row per record.
///
/// # Errors
///
/// Returns an error if the file cannot be created, written or flushed.
pub async fn export_csv(path: &Path, records: &[ResultRecord]) -> AppResult<()> {
    let file = tokio::fs::File::create(path).await.map_err(|err| {
        AppError::sink(SinkError::CreateFile {
            path: path.to_path_buf(),
            source: err,
        })
    })?;
    let mut writer = BufWriter::new(file);

    let write_err = |err| {
        AppError::sink(SinkError::WriteRow {
            path: path.to_path_buf(),
            source: err,
        })
    };
    writer
        .write_all(format!("{}\n", CSV_HEADER).as_bytes())
        .await
        .map_err(write_err)?;
    for record in records {
        writer
            .write_all(format_row(record).as_bytes())
            .await
            .map_err(write_err)?;
    }

    writer.flush().await.map_err(|err| {
        AppError::sink(SinkError::Flush {
            path: path.to_path_buf(),
            source: err,
        })
    })
}

pub(crate) fn format_row(record: &ResultRecord) -> String {
    format!(
        "{},{},{:.6},{}\n",
        escape_field(&record.url),
        escape_field(&record.status.to_string()),
        record.response_time_secs(),
        escape_field(&record.timestamp)
    )
}

fn escape_field(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\r', '\n']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}
