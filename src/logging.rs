//! Terminal logging for the native binary.

use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

/// Pick the level from the CLI flags. `silent` wins over `verbose`.
pub fn level(verbose: bool, silent: bool) -> LevelFilter {
    if silent {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

pub fn init(verbose: bool, silent: bool) -> Result<(), log::SetLoggerError> {
    let config = ConfigBuilder::new()
        .set_thread_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Error)
        .set_location_level(LevelFilter::Debug)
        .set_time_level(LevelFilter::Off)
        .add_filter_allow_str("converter")
        .build();

    TermLogger::init(
        level(verbose, silent),
        config,
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_selection() {
        assert_eq!(level(false, false), LevelFilter::Info);
        assert_eq!(level(true, false), LevelFilter::Debug);
        assert_eq!(level(false, true), LevelFilter::Warn);
        assert_eq!(level(true, true), LevelFilter::Warn);
    }
}
