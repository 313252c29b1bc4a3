use std::{
    io::{self, IsTerminal},
    sync::Mutex,
    time::Duration,
};

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Animation frames; the trailing blank is shown once the spinner is finished.
const TICK_CHARS: &str = "|/-\\ ";

/// A one-line animation ticked in the background while the caller awaits
/// something slow.
///
/// `stop` may be called any number of times; only the first call finishes the
/// bar, and the line is cleared exactly once.
pub struct Spinner {
    bar: Mutex<Option<ProgressBar>>,
}

impl Spinner {
    /// Starts drawing `message` on stderr.
    ///
    /// Nothing is drawn when stderr is not a terminal or `enabled` is false;
    /// the returned spinner is then idle and `stop` does nothing.
    pub fn start(message: &str, interval: Duration, enabled: bool) -> Self {
        if !enabled || !io::stderr().is_terminal() {
            return Spinner::idle();
        }

        Spinner::with_draw_target(message, interval, ProgressDrawTarget::stderr())
    }

    /// Starts drawing `message` on `target`, one frame every `interval`.
    pub fn with_draw_target(message: &str, interval: Duration, target: ProgressDrawTarget) -> Self {
        let bar = ProgressBar::with_draw_target(None, target);
        bar.set_style(
            ProgressStyle::with_template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_chars(TICK_CHARS),
        );
        bar.set_message(message.to_string());
        bar.enable_steady_tick(interval);

        Spinner {
            bar: Mutex::new(Some(bar)),
        }
    }

    fn idle() -> Self {
        Spinner {
            bar: Mutex::new(None),
        }
    }

    /// Stops the animation and clears its line. Later calls are no-ops.
    pub fn stop(&self) {
        let bar = match self.bar.lock() {
            Ok(mut guard) => guard.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };

        if let Some(bar) = bar {
            bar.finish_and_clear();
        }
    }

    #[cfg(test)]
    fn bar(&self) -> Option<ProgressBar> {
        self.bar.lock().ok().and_then(|guard| guard.clone())
    }
}
