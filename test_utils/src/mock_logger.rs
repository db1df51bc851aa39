use lazy_static::lazy_static;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Default)]
struct MockLogger {
    pub logs: Arc<Mutex<Vec<(log::Level, String)>>>,
}

impl log::Log for MockLogger {
    fn enabled(&self, _: &log::Metadata) -> bool {
        true
    }
    fn flush(&self) {}
    fn log(&self, record: &log::Record) {
        self.logs
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }
}

/// Installs the process-wide capturing logger and returns its (cleared) log.
///
/// Tests sharing it must not run concurrently, see `serial_test`.
pub fn mock_logger(max_level: Option<log::LevelFilter>) -> Arc<Mutex<Vec<(log::Level, String)>>> {
    lazy_static! {
        static ref MOCK_LOGGER: MockLogger = MockLogger::default();
    }

    // only the first call in a test binary installs the logger
    let _ = log::set_logger(&*MOCK_LOGGER as &'static MockLogger);
    log::set_max_level(max_level.unwrap_or(log::LevelFilter::Debug));

    MOCK_LOGGER.logs.lock().unwrap().clear();
    MOCK_LOGGER.logs.clone()
}
