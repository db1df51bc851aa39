use chrono::NaiveDate;
use serde::Serialize;

use constants::REPORT_FILE_EXTENSION;

use crate::normalize::NormalizedResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestRun {
    pub name: String,
    pub date: NaiveDate,
    pub description: String,
}

impl TestRun {
    /// Names the run after the report file it was imported from.
    pub fn for_report_file<T: AsRef<str>>(file_name: T, date: NaiveDate) -> Self {
        let file_name = file_name.as_ref();
        let stem = file_name
            .strip_suffix(REPORT_FILE_EXTENSION)
            .unwrap_or(file_name);
        Self {
            name: format!("Converted HbbTV Run: {}", stem),
            date,
            description: format!("Imported from HbbTV test report: {}", file_name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionOutput {
    pub test_run: TestRun,
    pub test_case_results: Vec<NormalizedResult>,
}

impl ConversionOutput {
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
