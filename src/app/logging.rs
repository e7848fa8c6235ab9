use tracing::Level;

/// Install the stderr diagnostic subscriber.
///
/// The level is fixed at WARN; stdout is reserved for the trace document.
pub fn init() {
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
