//! Flat `username:value` record files shared by the credential and role stores

use crate::utils::error::{JustInvestError, Result};
use std::io::ErrorKind;
use std::path::Path;
use tokio::io::AsyncWriteExt;
use tracing::warn;

/// Read the whole record file; a missing file has no records.
pub(crate) async fn read_records(path: &Path) -> Result<String> {
    match tokio::fs::read_to_string(path).await {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(String::new()),
        Err(e) => Err(e.into()),
    }
}

/// Value of the first record whose username matches exactly.
///
/// Only the line ending is stripped; usernames are compared as written.
pub(crate) fn find_record<'a>(content: &'a str, username: &str) -> Option<&'a str> {
    content
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let line = line.trim_end();
            if line.trim_start().is_empty() {
                return None;
            }
            let record = line.split_once(':');
            if record.is_none() {
                warn!(line = index + 1, "Skipping malformed record");
            }
            record
        })
        .find(|(stored, _)| *stored == username)
        .map(|(_, value)| value)
}

/// Append one record, creating the file and its directory on first use.
pub(crate) async fn append_record(path: &Path, username: &str, value: &str) -> Result<()> {
    if username.contains(':') || username.contains('\n') || value.contains('\n') {
        return Err(JustInvestError::storage(format!(
            "Refusing to write a record that would corrupt {}",
            path.display()
        )));
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }

    let mut file = tokio::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await?;
    file.write_all(format!("{}:{}\n", username, value).as_bytes())
        .await?;
    file.flush().await?;

    Ok(())
}

/// Drop the last record written for `username`, keeping every other line.
/// Returns whether a record was removed.
pub(crate) async fn remove_last_record(path: &Path, username: &str) -> Result<bool> {
    let content = read_records(path).await?;
    let last = content
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            line.trim_end()
                .split_once(':')
                .is_some_and(|(stored, _)| stored == username)
        })
        .map(|(index, _)| index)
        .last();

    let Some(last) = last else {
        return Ok(false);
    };

    let kept: String = content
        .lines()
        .enumerate()
        .filter(|(index, _)| *index != last)
        .map(|(_, line)| format!("{}\n", line))
        .collect();
    tokio::fs::write(path, kept).await?;

    Ok(true)
}
