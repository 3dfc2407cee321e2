use std::{fs::File, path::Path, str::FromStr, sync::Arc};

use tracing::Level;
use tracing_subscriber::{filter::Targets, fmt, prelude::*};

#[allow(unused_imports)]
pub use tracing::{debug, error, info, trace, warn};

/// Compact logs on stdout, plus a JSON log file when `log_file` is given.
pub fn init(level: &str, log_file: Option<&Path>) -> anyhow::Result<()> {
    let level = Level::from_str(level)?;

    let stdout_log = fmt::layer().compact().with_filter(
        Targets::default()
            .with_target("glide", level)
            .with_target("glide_core", level)
            .with_default(Level::WARN),
    );

    let file_log = match log_file {
        Some(path) => {
            let file = File::create(path)?;
            Some(
                fmt::layer()
                    .with_writer(Arc::new(file))
                    .json()
                    .with_filter(
                        Targets::default()
                            .with_target("glide", Level::TRACE)
                            .with_target("glide_core", Level::TRACE),
                    ),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(stdout_log)
        .with(file_log)
        .try_init()?;

    Ok(())
}
