use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Initialize logging; verbose runs log every step at debug level
pub fn init_logging(verbose: bool) -> LevelFilter {
    // The logger accepts debug records, the global max level decides what is emitted
    let _ = SimpleLogger::new()
        .with_level(LevelFilter::Debug)
        .init();

    let log_level = level_for(verbose);
    set_log_level(log_level);
    log_level
}

/// Change the log level after initialization
pub fn set_log_level(level: LevelFilter) {
    log::set_max_level(level);
}

fn level_for(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}
