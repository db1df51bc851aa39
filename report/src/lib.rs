pub mod converter;
pub mod decoder;
pub mod entry;
pub mod normalize;
pub mod output;

pub use converter::{Conversion, ReportConverter};
pub use decoder::{DecodeError, DecodeIssue, DecodedReport, DecoderChain, ParseError};
pub use entry::RawReportEntry;
pub use normalize::{NormalizedResult, SkipReason, TestResult};
pub use output::{ConversionOutput, TestRun};
