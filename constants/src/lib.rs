pub const EXIT_SUCCESS: i32 = 0;

pub const HBBTV_CONVERTER_LOG_ENV: &str = "HBBTV_CONVERTER_LOG";

pub const DEFAULT_INPUT_DIR: &str = "mock_data";
pub const DEFAULT_OUTPUT_SUBDIR: &str = "converted";

pub const REPORT_FILE_PREFIX: &str = "reports-";
pub const CONVERTED_FILE_PREFIX: &str = "converted-";
pub const REPORT_FILE_EXTENSION: &str = ".json";
