use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Parses a level name, falling back to `Info` for anything unrecognised.
pub fn parse_level(level: &str) -> LevelFilter {
    level.trim().parse().unwrap_or(LevelFilter::Info)
}

/// Installs the process-wide logger. Calling it twice is harmless.
pub fn init(level: &str) {
    let level = parse_level(level);
    if SimpleLogger::new().with_level(level).init().is_err() {
        log::debug!("Logger already initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), LevelFilter::Debug);
        assert_eq!(parse_level(" WARN "), LevelFilter::Warn);
        assert_eq!(parse_level("off"), LevelFilter::Off);
    }

    #[test]
    fn test_parse_level_fallback() {
        assert_eq!(parse_level("loud"), LevelFilter::Info);
        assert_eq!(parse_level(""), LevelFilter::Info);
    }
}
