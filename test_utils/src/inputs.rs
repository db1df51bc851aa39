use std::fs;
use std::path::{Path, PathBuf};

use constants::{REPORT_FILE_EXTENSION, REPORT_FILE_PREFIX};
use serde_json::{json, Value};

pub fn get_test_file_path(file: &str) -> String {
    PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").unwrap())
        .join(file)
        .to_str()
        .unwrap()
        .to_string()
}

/// A report entry carrying the fields the converter reads.
pub fn report_entry<T: AsRef<str>>(test_case_id: T, state: T) -> Value {
    let test_case_id = test_case_id.as_ref();
    json!({
        "test_case_id": test_case_id,
        "state": state.as_ref(),
        "test_run_id": format!("run-{}", test_case_id),
        "title": format!("Title of {}", test_case_id),
        "created": "2024-05-01T08:00:00Z",
        "last_changed": "2024-05-01T08:30:00Z",
    })
}

pub fn with_collection_url<T: AsRef<str>>(mut entry: Value, collection_url: T) -> Value {
    entry["steps"] = json!({"collectionUrl": collection_url.as_ref()});
    entry
}

/// Renders entries as `{...},{...}` with no enclosing array, one per line.
///
/// Keys are written in sorted order, so entries with a `steps` object render
/// it before `test_case_id` and no longer split cleanly on `},`.
pub fn concatenated_entries(entries: &[Value]) -> String {
    entries
        .iter()
        .map(Value::to_string)
        .collect::<Vec<_>>()
        .join(",\n")
}

/// `reports-{name}.json`
pub fn report_file_name<T: AsRef<str>>(name: T) -> String {
    format!(
        "{}{}{}",
        REPORT_FILE_PREFIX,
        name.as_ref(),
        REPORT_FILE_EXTENSION
    )
}

pub fn write_file<T: AsRef<Path>, C: AsRef<[u8]>>(
    directory: T,
    file_name: &str,
    content: C,
) -> PathBuf {
    let path = directory.as_ref().join(file_name);
    fs::write(&path, content).unwrap();
    path
}

pub fn write_report_file<T: AsRef<Path>>(directory: T, name: &str, entries: &[Value]) -> PathBuf {
    write_file(
        directory,
        &report_file_name(name),
        Value::Array(entries.to_vec()).to_string(),
    )
}

pub fn read_json<T: AsRef<Path>>(path: T) -> anyhow::Result<Value> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concatenated_entries_are_not_json() {
        let content = concatenated_entries(&[report_entry("A", "Failed"), report_entry("B", "Failed")]);
        assert!(serde_json::from_str::<Value>(&content).is_err());
        assert_eq!(content.matches("},").count(), 1);
    }

    #[test]
    fn writes_report_files() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = write_report_file(&temp_dir, "unit", &[report_entry("A", "Successful")]);
        assert_eq!(path.file_name().unwrap(), "reports-unit.json");
        assert_eq!(read_json(&path).unwrap()[0]["state"], "Successful");
    }
}
