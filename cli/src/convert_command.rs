use std::path::PathBuf;

use clap::Args;
use constants::{DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_SUBDIR, EXIT_SUCCESS};
use report::ReportConverter;

use crate::{convert::convert_directory, print::print_summary};

#[derive(Args, Clone, Debug)]
pub struct ConvertArgs {
    #[arg(
        default_value = DEFAULT_INPUT_DIR,
        help = "Directory containing reports-*.json files."
    )]
    pub input_dir: PathBuf,
    #[arg(
        long,
        help = "Directory to write converted-*.json files to. Defaults to <INPUT_DIR>/converted."
    )]
    pub output_dir: Option<PathBuf>,
}

impl ConvertArgs {
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| self.input_dir.join(DEFAULT_OUTPUT_SUBDIR))
    }
}

/// Runs a batch conversion. Per-file failures still exit successfully.
pub fn run_convert(convert_args: ConvertArgs) -> anyhow::Result<i32> {
    let output_dir = convert_args.output_dir();
    let ConvertArgs { input_dir, .. } = convert_args;

    tracing::info!(
        "Converting reports in {} into {}",
        input_dir.display(),
        output_dir.display()
    );
    let converter = ReportConverter::default();
    match convert_directory(&converter, &input_dir, &output_dir) {
        Ok(summary) => {
            if summary.total() == 0 {
                tracing::warn!("No HbbTV report files found in {}", input_dir.display());
            }
            print_summary(&summary);
            Ok(EXIT_SUCCESS)
        }
        Err(e) => {
            tracing::error!("{}", e);
            Ok(e.exit_code())
        }
    }
}
