use chrono::{NaiveDate, Utc};

use crate::{
    decoder::{DecodeIssue, DecoderChain, ParseError},
    normalize::NormalizedResult,
    output::{ConversionOutput, TestRun},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub output: ConversionOutput,
    /// Name of the decoder that produced the entries.
    pub strategy: &'static str,
    pub issues: Vec<DecodeIssue>,
    pub num_entries: usize,
    pub num_skipped: usize,
}

impl Conversion {
    pub fn num_converted(&self) -> usize {
        self.output.test_case_results.len()
    }
}

#[derive(Debug)]
pub struct ReportConverter {
    decoders: DecoderChain,
    date: NaiveDate,
}

impl Default for ReportConverter {
    fn default() -> Self {
        Self::new(Utc::now().date_naive())
    }
}

impl ReportConverter {
    pub fn new(date: NaiveDate) -> Self {
        Self::with_decoders(DecoderChain::default(), date)
    }

    pub fn with_decoders(decoders: DecoderChain, date: NaiveDate) -> Self {
        Self { decoders, date }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Converts the content of one report file. `file_name` is the base name
    /// of the source, used to name the test run.
    pub fn convert<T: AsRef<str>>(
        &self,
        content: &str,
        file_name: T,
    ) -> Result<Conversion, ParseError> {
        let (strategy, decoded) = self.decoders.decode(content)?;
        let num_entries = decoded.entries.len();

        let test_case_results: Vec<NormalizedResult> = decoded
            .entries
            .iter()
            .enumerate()
            .filter_map(|(i, entry)| match NormalizedResult::try_from(entry) {
                Ok(result) => Some(result),
                Err(reason) => {
                    tracing::debug!("  Skipping entry {}: {}", i + 1, reason);
                    None
                }
            })
            .collect();
        let num_skipped = num_entries - test_case_results.len();

        Ok(Conversion {
            output: ConversionOutput {
                test_run: TestRun::for_report_file(file_name, self.date),
                test_case_results,
            },
            strategy,
            issues: decoded.issues,
            num_entries,
            num_skipped,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::TestResult;

    #[test]
    fn counts_skipped_entries() {
        let converter = ReportConverter::new(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        let conversion = converter
            .convert(
                r#"[{"test_case_id":"TC1","state":"Successful"},{"title":"orphan"},{"test_case_id":"TC3","state":"Failed"}]"#,
                "reports-x.json",
            )
            .unwrap();

        assert_eq!(conversion.num_entries, 3);
        assert_eq!(conversion.num_skipped, 1);
        assert_eq!(conversion.num_converted(), 2);
        assert_eq!(
            conversion
                .output
                .test_case_results
                .iter()
                .map(|result| &result.result)
                .collect::<Vec<_>>(),
            vec![&TestResult::Pass, &TestResult::Fail]
        );
        assert_eq!(conversion.output.test_run.date, converter.date());
    }

    #[test]
    fn empty_array_converts_to_nothing() {
        let conversion = ReportConverter::default()
            .convert("[]", "reports-empty.json")
            .unwrap();
        assert_eq!(conversion.num_entries, 0);
        assert!(conversion.output.test_case_results.is_empty());
    }
}
