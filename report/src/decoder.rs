use std::fmt;

use serde_json::Value;
use thiserror::Error;

use crate::entry::RawReportEntry;

const FRAGMENT_SEPARATOR: &str = "},";
const FRAGMENT_TERMINATOR: char = '}';
const NEWLINE_ESCAPE: &str = "\\n";
const BYTE_ORDER_MARK: char = '\u{feff}';

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("none of the {0} fragments could be parsed")]
    NoFragments(usize),
}

/// A non-fatal finding of a decoder that still produced entries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeIssue {
    #[error("failed to parse fragment {fragment}: {message}")]
    FragmentUnparsable { fragment: usize, message: String },
}

#[derive(Debug, Clone, Default)]
pub struct DecodedReport {
    pub entries: Vec<RawReportEntry>,
    pub issues: Vec<DecodeIssue>,
}

pub trait ReportDecoder {
    fn name(&self) -> &'static str;
    fn decode(&self, content: &str) -> Result<DecodedReport, DecodeError>;
}

/// Whole-content JSON. An array yields its elements in order, any other value
/// is a single entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictJsonDecoder;

impl ReportDecoder for StrictJsonDecoder {
    fn name(&self) -> &'static str {
        "strict JSON"
    }

    fn decode(&self, content: &str) -> Result<DecodedReport, DecodeError> {
        let entries = match serde_json::from_str::<Value>(content)? {
            Value::Array(values) => values.into_iter().map(RawReportEntry::from).collect(),
            value => vec![RawReportEntry::from(value)],
        };
        Ok(DecodedReport {
            entries,
            issues: Vec::new(),
        })
    }
}

/// Recovers objects concatenated as `{...},{...}` without an enclosing array.
///
/// Literal `\n` escapes are removed and the text is split on `},`, restoring
/// the `}` on every fragment but the last. Surrounding whitespace and a
/// leading byte order mark are trimmed first. A `},` inside a string value, or
/// after a nested object that is not the last field, splits an object in the
/// wrong place; those fragments are dropped as unparsable.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackSplitDecoder;

impl FallbackSplitDecoder {
    pub fn fragments(content: &str) -> Vec<String> {
        let joined = content.replace(NEWLINE_ESCAPE, "");
        let pieces: Vec<&str> = joined
            .trim()
            .trim_start_matches(BYTE_ORDER_MARK)
            .trim()
            .split(FRAGMENT_SEPARATOR)
            .collect();
        let last = pieces.len().saturating_sub(1);
        pieces
            .into_iter()
            .enumerate()
            .map(|(i, piece)| {
                let mut fragment = String::from(piece);
                if i < last {
                    fragment.push(FRAGMENT_TERMINATOR);
                }
                fragment
            })
            .collect()
    }
}

impl ReportDecoder for FallbackSplitDecoder {
    fn name(&self) -> &'static str {
        "fragment split"
    }

    fn decode(&self, content: &str) -> Result<DecodedReport, DecodeError> {
        let fragments = Self::fragments(content);
        let num_fragments = fragments.len();
        let mut decoded = DecodedReport::default();
        for (i, fragment) in fragments.iter().enumerate() {
            match serde_json::from_str::<Value>(fragment) {
                Ok(value) => decoded.entries.push(RawReportEntry::from(value)),
                Err(e) => {
                    let issue = DecodeIssue::FragmentUnparsable {
                        fragment: i + 1,
                        message: e.to_string(),
                    };
                    tracing::warn!("  {}", issue);
                    decoded.issues.push(issue);
                }
            }
        }

        if decoded.entries.is_empty() {
            return Err(DecodeError::NoFragments(num_fragments));
        }
        Ok(decoded)
    }
}

/// Every decoder of the chain failed; holds each decoder's error in order.
#[derive(Error, Debug)]
#[error("failed to parse file in all formats{}", render_failures(.0))]
pub struct ParseError(pub Vec<(&'static str, DecodeError)>);

fn render_failures(failures: &[(&'static str, DecodeError)]) -> String {
    failures
        .iter()
        .map(|(name, e)| format!("; {}: {}", name, e))
        .collect()
}

/// Decoders tried in order; the first one that succeeds wins.
pub struct DecoderChain {
    decoders: Vec<Box<dyn ReportDecoder + Send + Sync>>,
}

impl Default for DecoderChain {
    fn default() -> Self {
        Self::new(vec![
            Box::new(StrictJsonDecoder),
            Box::new(FallbackSplitDecoder),
        ])
    }
}

impl fmt::Debug for DecoderChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.decoders.iter().map(|decoder| decoder.name()))
            .finish()
    }
}

impl DecoderChain {
    pub fn new(decoders: Vec<Box<dyn ReportDecoder + Send + Sync>>) -> Self {
        Self { decoders }
    }

    pub fn decode(&self, content: &str) -> Result<(&'static str, DecodedReport), ParseError> {
        let mut failures = Vec::new();
        for (i, decoder) in self.decoders.iter().enumerate() {
            match decoder.decode(content) {
                Ok(decoded) => return Ok((decoder.name(), decoded)),
                Err(e) => {
                    if let Some(next) = self.decoders.get(i + 1) {
                        tracing::info!(
                            "  Non-standard format ({} decoding failed: {}). Trying {} decoding...",
                            decoder.name(),
                            e,
                            next.name()
                        );
                    }
                    failures.push((decoder.name(), e));
                }
            }
        }
        Err(ParseError(failures))
    }
}
