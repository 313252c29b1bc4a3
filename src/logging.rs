use std::io::{self, IsTerminal};

use tracing::Level;
use tracing_subscriber::fmt::time::ChronoLocal;

/// Lines below this level are discarded.
const MAX_LEVEL: Level = Level::WARN;

const TIME_FORMAT: &str = "%F %X%.6f";

/// Installs the process-wide subscriber.
///
/// Every line goes to stderr; stdout carries only the price table. Calling it
/// again is harmless, the first subscriber stays in place.
pub fn init() {
    // stdout 留給報價表格，log 一律走 stderr
    let _ = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(MAX_LEVEL)
        .with_timer(ChronoLocal::new(TIME_FORMAT.to_string()))
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice() {
        init();
        init();
        tracing::warn!("logging initialised twice");
    }
}
