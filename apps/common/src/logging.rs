use ansi_term::Color::{Blue, Cyan, Green, Red, Yellow};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// YYYY.MM.DD HH:MM:SS in local time
pub fn format_now() -> Option<String> {
    let now = time_format::now().ok()?;
    time_format::strftime_local("%Y.%m.%d %H:%M:%S", now).ok()
}

fn colored_level(level: Level) -> ansi_term::Colour {
    match level {
        Level::Error => Red,
        Level::Warn => Yellow,
        Level::Info => Green,
        Level::Debug => Blue,
        Level::Trace => Cyan,
    }
}

/// Console logger shared by the command line tools.
/// Records go to stderr so that stdout stays free for tool output.
pub struct CommonLogger;

impl Log for CommonLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let formatted_date = format_now().unwrap_or("unknown".to_string());
        eprintln!(
            "[{}][{:>6}][{:>5}]: {} [{}:{}]",
            Cyan.paint(formatted_date),
            Yellow
                .paint(std::thread::current().name().unwrap_or("main"))
                .to_string(),
            colored_level(record.level())
                .paint(record.level().to_string())
                .to_string(),
            record.args(),
            Green.paint(record.file().unwrap_or("unknown")),
            Green.paint(record.line().unwrap_or(0).to_string())
        );
    }

    fn flush(&self) {}
}

static LOGGER: CommonLogger = CommonLogger;

pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}
