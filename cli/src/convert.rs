use std::{
    fs, io,
    path::{Path, PathBuf},
};

use constants::{CONVERTED_FILE_PREFIX, REPORT_FILE_EXTENSION, REPORT_FILE_PREFIX};
use report::{Conversion, ParseError, ReportConverter};
use thiserror::Error;

/// Failure to convert a single file. Never fatal to a batch.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("failed to read {file}: {source}")]
    Read { file: String, source: io::Error },
    #[error("failed to parse {file}: {source}")]
    Parse { file: String, source: ParseError },
    #[error("failed to write {file}: {source}")]
    Write { file: String, source: io::Error },
}

impl ConvertError {
    pub fn file(&self) -> &str {
        match self {
            ConvertError::Read { file, .. }
            | ConvertError::Parse { file, .. }
            | ConvertError::Write { file, .. } => file,
        }
    }
}

/// Failure that stops a batch before any file is converted.
#[derive(Error, Debug)]
pub enum BatchError {
    #[error("failed to list input directory {}: {source}", .path.display())]
    InputDir { path: PathBuf, source: io::Error },
    #[error("failed to create output directory {}: {source}", .path.display())]
    OutputDir { path: PathBuf, source: io::Error },
}

impl BatchError {
    pub fn exit_code(&self) -> i32 {
        match self {
            BatchError::InputDir { .. } => exitcode::NOINPUT,
            BatchError::OutputDir { .. } => exitcode::CANTCREAT,
        }
    }
}

#[derive(Debug)]
pub struct FileConversion {
    pub output_path: PathBuf,
    pub conversion: Conversion,
}

#[derive(Debug)]
pub struct FileOutcome {
    pub file_name: String,
    pub result: Result<FileConversion, ConvertError>,
}

#[derive(Debug, Default)]
pub struct ConversionSummary {
    pub files: Vec<FileOutcome>,
}

impl ConversionSummary {
    pub fn converted(&self) -> usize {
        self.files.iter().filter(|file| file.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.converted()
    }

    pub fn total(&self) -> usize {
        self.files.len()
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

pub fn is_report_file_name(file_name: &str) -> bool {
    file_name.starts_with(REPORT_FILE_PREFIX) && file_name.ends_with(REPORT_FILE_EXTENSION)
}

/// `reports-x.json` becomes `converted-x.json`.
pub fn converted_file_name(report_file_name: &str) -> String {
    report_file_name.replacen(REPORT_FILE_PREFIX, CONVERTED_FILE_PREFIX, 1)
}

/// Regular files in `input_dir` named `reports-*.json`, sorted by name.
pub fn find_report_files<T: AsRef<Path>>(input_dir: T) -> Result<Vec<PathBuf>, BatchError> {
    let input_dir = input_dir.as_ref();
    let to_batch_error = |source: io::Error| BatchError::InputDir {
        path: input_dir.to_path_buf(),
        source,
    };

    let mut report_files = Vec::new();
    for dir_entry in fs::read_dir(input_dir).map_err(to_batch_error)? {
        let path = dir_entry.map_err(to_batch_error)?.path();
        if path.is_file() && is_report_file_name(&file_name(&path)) {
            report_files.push(path);
        }
    }
    report_files.sort();
    Ok(report_files)
}

fn try_convert_file(
    converter: &ReportConverter,
    input_path: &Path,
    output_path: &Path,
) -> Result<FileConversion, ConvertError> {
    let input_file = file_name(input_path);
    let content = fs::read_to_string(input_path).map_err(|source| ConvertError::Read {
        file: input_file.clone(),
        source,
    })?;

    let conversion =
        converter
            .convert(&content, &input_file)
            .map_err(|source| ConvertError::Parse {
                file: input_file.clone(),
                source,
            })?;

    let to_write_error = |source: io::Error| ConvertError::Write {
        file: file_name(output_path),
        source,
    };
    let json = conversion
        .output
        .to_pretty_json()
        .map_err(|e| to_write_error(io::Error::from(e)))?;
    fs::write(output_path, json).map_err(to_write_error)?;

    Ok(FileConversion {
        output_path: output_path.to_path_buf(),
        conversion,
    })
}

/// Converts one report file and writes the result to `output_path`.
///
/// Nothing is written unless the input was read and parsed.
pub fn convert_file<T: AsRef<Path>, U: AsRef<Path>>(
    converter: &ReportConverter,
    input_path: T,
    output_path: U,
) -> Result<FileConversion, ConvertError> {
    let (input_path, output_path) = (input_path.as_ref(), output_path.as_ref());
    let result = try_convert_file(converter, input_path, output_path);
    match &result {
        Ok(file_conversion) => {
            tracing::info!(
                "✅ Successfully converted {} -> {}",
                file_name(input_path),
                file_name(output_path)
            );
            tracing::info!(
                "   Converted {} test results",
                file_conversion.conversion.num_converted()
            );
        }
        Err(e) => tracing::error!("❌ {}", e),
    }
    result
}

/// Converts every `reports-*.json` file of `input_dir` into `output_dir`.
///
/// Per-file failures are recorded in the summary and do not stop the batch.
pub fn convert_directory<T: AsRef<Path>, U: AsRef<Path>>(
    converter: &ReportConverter,
    input_dir: T,
    output_dir: U,
) -> Result<ConversionSummary, BatchError> {
    let (input_dir, output_dir) = (input_dir.as_ref(), output_dir.as_ref());

    let report_files = find_report_files(input_dir)?;
    tracing::info!("Found {} HbbTV report JSON files", report_files.len());

    fs::create_dir_all(output_dir).map_err(|source| BatchError::OutputDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let mut summary = ConversionSummary::default();
    for input_path in report_files {
        let input_file = file_name(&input_path);
        tracing::info!("Processing {}...", input_file);
        let output_path = output_dir.join(converted_file_name(&input_file));
        summary.files.push(FileOutcome {
            result: convert_file(converter, &input_path, &output_path),
            file_name: input_file,
        });
    }

    tracing::info!(
        "Conversion complete. Successfully converted {} out of {} files.",
        summary.converted(),
        summary.total()
    );
    Ok(summary)
}
