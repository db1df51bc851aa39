use std::io::Write;

use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use constants::HBBTV_CONVERTER_LOG_ENV;
use hbbtv_converter::convert_command::{run_convert, ConvertArgs};

#[derive(Debug, Parser)]
#[command(
    version = std::env!("CARGO_PKG_VERSION"),
    name = "hbbtv-converter",
    about = "Converts HbbTV test report JSON files into importable test run results"
)]
struct Cli {
    #[command(flatten)]
    convert_args: ConvertArgs,
    #[command(flatten)]
    verbose: Verbosity<InfoLevel>,
}

fn main() -> anyhow::Result<()> {
    let Cli {
        convert_args,
        verbose,
    } = Cli::parse();
    setup_logger(verbose.log_level_filter())?;
    tracing::info!(
        "Starting HbbTV format converter {}...",
        env!("CARGO_PKG_VERSION")
    );
    match run_convert(convert_args) {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            log::error!("Error: {:?}", e);
            std::process::exit(exitcode::SOFTWARE);
        }
    }
}

fn setup_logger(level: log::LevelFilter) -> anyhow::Result<()> {
    let mut builder = env_logger::Builder::new();
    builder
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] - {}",
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter(None, level);
    if let Ok(log) = std::env::var(HBBTV_CONVERTER_LOG_ENV) {
        builder.parse_filters(&log);
    }
    builder.try_init()?;
    Ok(())
}
