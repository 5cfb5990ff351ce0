use log::{log, Level};
use web_time::Instant;

/// Logs the time spent inside a scope when dropped.
/// Usage:
/// ```
/// use texlink_util::profile::Measure;
/// {
///     let _measure = Measure::new("Scanned texture folder".to_string());
///     // Directory listing goes here
/// }
/// ```
/// The message is printed as `"<message> in <elapsed>"` at debug level
/// unless another level is requested with [`Measure::with_level`].
pub struct Measure {
    message: String,
    level: Level,
    start: Instant,
}

impl Measure {
    pub fn new(message: String) -> Self {
        Self::with_level(message, Level::Debug)
    }

    pub fn with_level(message: String, level: Level) -> Self {
        Measure {
            message,
            level,
            start: Instant::now(),
        }
    }
}

impl Drop for Measure {
    fn drop(&mut self) {
        log!(self.level, "{} in {:?}", self.message, self.start.elapsed());
    }
}
