//! JSON trace output for segmentation spans, enabled by the `trace` feature.

use std::path::Path;

use crate::api::EngineError;

#[cfg(feature = "trace")]
const TRACE_FILE_PREFIX: &str = "ipa-trace";
#[cfg(feature = "trace")]
const TRACE_FILE_SUFFIX: &str = "jsonl";

/// Overrides the default filter when set, e.g. `IPA_TRACE=ipa_core=trace`.
#[cfg(feature = "trace")]
const FILTER_ENV: &str = "IPA_TRACE";
#[cfg(feature = "trace")]
const DEFAULT_FILTER: &str = "ipa_engine=debug,ipa_core=debug";

#[cfg(feature = "trace")]
static GUARD: std::sync::Mutex<Option<tracing_appender::non_blocking::WorkerGuard>> =
    std::sync::Mutex::new(None);

/// Send traces to `<log_dir>/ipa-trace.jsonl`. Later calls after a
/// successful one only check the directory.
#[cfg(feature = "trace")]
pub(crate) fn init_tracing(log_dir: &Path) -> Result<(), EngineError> {
    use tracing_appender::rolling::{RollingFileAppender, Rotation};
    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::EnvFilter;

    std::fs::create_dir_all(log_dir).map_err(|e| EngineError::Io {
        msg: format!("{}: {e}", log_dir.display()),
    })?;

    let mut guard = GUARD.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    if guard.is_some() {
        return Ok(());
    }

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(TRACE_FILE_PREFIX)
        .filename_suffix(TRACE_FILE_SUFFIX)
        .build(log_dir)
        .map_err(|e| EngineError::Io {
            msg: format!("{}: {e}", log_dir.display()),
        })?;
    let (writer, worker) = tracing_appender::non_blocking(appender);

    let filter =
        EnvFilter::try_from_env(FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .json()
        .with_writer(writer)
        .with_span_events(FmtSpan::CLOSE)
        .with_env_filter(filter)
        .try_init()
        .map_err(EngineError::invalid_data)?;

    *guard = Some(worker);
    tracing::debug!(dir = %log_dir.display(), "trace output started");
    Ok(())
}

#[cfg(not(feature = "trace"))]
pub(crate) fn init_tracing(_log_dir: &Path) -> Result<(), EngineError> {
    Ok(())
}
