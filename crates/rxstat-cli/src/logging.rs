use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Initialize logging on stderr with an optional level name.
/// Falls back to WARN if the level is missing or invalid.
pub fn init_logging(log_level: Option<&str>) {
    let level = log_level
        .and_then(|s| s.parse::<Level>().ok())
        .unwrap_or(Level::WARN);

    FmtSubscriber::builder()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}
