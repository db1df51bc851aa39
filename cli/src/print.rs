use colored::{ColoredString, Colorize};
use console::Emoji;
use pluralizer::pluralize;

use crate::convert::{ConversionSummary, FileOutcome};

pub fn print_summary(summary: &ConversionSummary) {
    for (i, file) in summary.files.iter().enumerate() {
        if i == 0 {
            println!();
        }
        print_file_outcome(file);
    }

    let converted = summary.converted();
    let converted_str = if converted == summary.total() {
        converted.to_string().green()
    } else {
        converted.to_string().yellow()
    };
    println!(
        "\nConversion complete. Successfully converted {} out of {}.{}",
        converted_str,
        pluralize("file", summary.total() as isize, true),
        if summary.failed() == 0 {
            Emoji(" ✅", "")
        } else {
            Emoji(" ❌", "")
        },
    );
}

fn print_file_outcome(file: &FileOutcome) {
    match &file.result {
        Ok(file_conversion) => {
            let conversion = &file_conversion.conversion;
            let skipped_str = if conversion.num_skipped > 0 {
                format!(
                    ", {} skipped",
                    conversion.num_skipped.to_string().yellow()
                )
            } else {
                String::new()
            };
            let dropped_str = if conversion.issues.is_empty() {
                String::new()
            } else {
                format!(
                    ", {} dropped",
                    pluralize("fragment", conversion.issues.len() as isize, true)
                        .as_str()
                        .yellow()
                )
            };
            println!(
                "{} - {} - {}{}{}",
                file.file_name,
                print_status(true),
                pluralize("test result", conversion.num_converted() as isize, true),
                skipped_str,
                dropped_str,
            );
        }
        Err(e) => {
            println!("{} - {} - {}", file.file_name, print_status(false), e);
        }
    }
}

fn print_status(success: bool) -> ColoredString {
    if success {
        "CONVERTED".green()
    } else {
        "FAILED".red()
    }
}
