use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::Value;
use thiserror::Error;

use crate::entry::RawReportEntry;

pub const UNKNOWN: &str = "Unknown";

const STATE_SUCCESSFUL: &str = "Successful";
const STATE_FAILED: &str = "Failed";

pub fn or_unknown(value: Option<String>) -> String {
    value.unwrap_or_else(|| String::from(UNKNOWN))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestResult {
    Pass,
    Fail,
    /// A state token with no mapping, carried through verbatim.
    Other(String),
}

impl From<&str> for TestResult {
    fn from(state: &str) -> Self {
        match state {
            STATE_SUCCESSFUL => Self::Pass,
            STATE_FAILED => Self::Fail,
            other => Self::Other(String::from(other)),
        }
    }
}

impl TestResult {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pass => "Pass",
            Self::Fail => "Fail",
            Self::Other(state) => state,
        }
    }
}

impl fmt::Display for TestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TestResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum SkipReason {
    #[error("entry has no test_case_id")]
    MissingTestCaseId,
    #[error("entry has no state")]
    MissingState,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedResult {
    /// Copied from the entry with its JSON type unchanged.
    pub test_case_id: Value,
    pub result: TestResult,
    pub comment: String,
    pub logs: String,
    pub artifacts: String,
}

impl TryFrom<&RawReportEntry> for NormalizedResult {
    type Error = SkipReason;

    fn try_from(entry: &RawReportEntry) -> Result<Self, Self::Error> {
        let test_case_id = entry
            .test_case_id()
            .cloned()
            .ok_or(SkipReason::MissingTestCaseId)?;
        let state = entry.state().ok_or(SkipReason::MissingState)?;

        Ok(Self {
            test_case_id,
            result: TestResult::from(state.as_str()),
            comment: format!(
                "Test run ID: {}, Title: {}",
                or_unknown(entry.test_run_id()),
                or_unknown(entry.title()),
            ),
            logs: format!(
                "Created: {}, Last changed: {}",
                or_unknown(entry.created()),
                or_unknown(entry.last_changed()),
            ),
            artifacts: entry.collection_url().unwrap_or_default(),
        })
    }
}
