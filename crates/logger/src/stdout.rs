//! Stdout sink

use crate::{Level, Record, Sink};
use std::io::Write;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU8, Ordering};

#[cfg(feature = "color")]
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Sink that writes to stdout.
///
/// One JSON object per line; with the `color` feature, human-readable colored
/// lines for development instead.
pub struct StdoutSink {
    min_level: AtomicU8,
    /// Lock for stdout (to prevent interleaving)
    #[cfg(not(feature = "color"))]
    stdout: Mutex<std::io::Stdout>,
    #[cfg(feature = "color")]
    stdout: Mutex<StandardStream>,
}

impl StdoutSink {
    /// Create a new stdout sink accepting everything
    pub fn new() -> Self {
        Self {
            min_level: AtomicU8::new(Level::Trace.to_u8()),
            #[cfg(not(feature = "color"))]
            stdout: Mutex::new(std::io::stdout()),
            #[cfg(feature = "color")]
            stdout: Mutex::new(StandardStream::stdout(ColorChoice::Auto)),
        }
    }

    /// Create with a specific minimum level
    pub fn with_level(self, level: Level) -> Self {
        self.set_level(level);
        self
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for StdoutSink {
    fn log(&self, record: Record<'_>) {
        if !self.is_enabled(record.level) {
            return;
        }

        if let Ok(mut stdout) = self.stdout.lock() {
            #[cfg(feature = "color")]
            {
                let level_color = match record.level {
                    Level::Error => Color::Red,
                    Level::Warn => Color::Yellow,
                    Level::Info => Color::Green,
                    Level::Debug => Color::Blue,
                    Level::Trace => Color::Magenta,
                };

                // Request id in cyan
                if let Some(request_id) = &record.envelope.context.request_id {
                    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)));
                    let _ = write!(stdout, "[{request_id}] ");
                }

                // Level with color
                let _ = stdout.set_color(ColorSpec::new().set_fg(Some(level_color)).set_bold(true));
                let _ = write!(stdout, "{}", record.level);
                let _ = stdout.reset();

                // Service in dimmed white
                if let Some(service) = &record.envelope.context.service {
                    let _ = stdout.set_color(ColorSpec::new().set_dimmed(true));
                    let _ = write!(stdout, " [{service}]");
                    let _ = stdout.reset();
                }

                // Message in normal color
                let _ = write!(stdout, " {}", record.entry.message);

                if let Some(details) = &record.entry.details {
                    let _ = stdout.set_color(ColorSpec::new().set_dimmed(true));
                    if let Ok(details) = serde_json::to_string(details) {
                        let _ = write!(stdout, " {details}");
                    }
                    let _ = stdout.reset();
                }

                let _ = writeln!(stdout);
            }

            #[cfg(not(feature = "color"))]
            {
                if let Ok(line) = serde_json::to_string(&record.to_value()) {
                    let _ = writeln!(stdout, "{line}");
                }
            }

            let _ = stdout.flush();
        }
    }

    fn flush(&self) {
        if let Ok(mut stdout) = self.stdout.lock() {
            let _ = stdout.flush();
        }
    }

    fn level(&self) -> Level {
        Level::from_u8(self.min_level.load(Ordering::Relaxed))
    }

    fn set_level(&self, level: Level) {
        self.min_level.store(level.to_u8(), Ordering::Relaxed);
    }
}
