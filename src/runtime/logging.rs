use std::fs::{self, File, OpenOptions};
use std::sync::Mutex;

use playdeck::config::{LoggingSettings, default_log_path};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Route `tracing` output to the log file.
///
/// The terminal belongs to the TUI, so without a writable file nothing is
/// installed and events are dropped.
pub fn init(settings: &LoggingSettings) {
    let Some(file) = open_log_file(settings) else {
        return;
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.filter))
        .unwrap_or_else(|_| EnvFilter::new("playdeck=info"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init();
}

fn open_log_file(settings: &LoggingSettings) -> Option<File> {
    let path = settings.file.clone().or_else(default_log_path)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}
