//! Log filtering for the simulator binary.

use tracing::Level;
use tracing_subscriber::filter::{LevelFilter, Targets};

use crate::config::Config;
pub use crate::core::units::cache::debug::TRACE_TARGET;

/// Builds the subscriber filter: `level` everywhere, raised to DEBUG for the
/// access trace target when the configuration enables access tracing.
pub fn log_filter(level: Level, config: &Config) -> Targets {
    let filter = Targets::new().with_default(LevelFilter::from_level(level));
    if config.traces_accesses() && level < Level::DEBUG {
        filter.with_target(TRACE_TARGET, Level::DEBUG)
    } else {
        filter
    }
}
