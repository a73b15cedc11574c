//! Process-wide memoized engine cell.
//!
//! The capability is initialized at most once per process. Concurrent
//! first calls collapse into a single construction, and every caller —
//! now or later — observes the same outcome. Failure is memoized too:
//! once construction has failed, `init` and `engine` keep returning that
//! same error rather than silently retrying. A process restart is the
//! reset.

use std::sync::OnceLock;

use crate::engine::{AnalyticEphemeris, EphemConfig};
use crate::error::InitError;

static ENGINE: OnceLock<Result<AnalyticEphemeris, InitError>> = OnceLock::new();

/// Initialize the global engine with `config`, or observe the memoized
/// outcome of an earlier initialization. The config of the first caller
/// wins; later configs are ignored.
pub fn init(config: EphemConfig) -> Result<(), InitError> {
    match ENGINE.get_or_init(|| AnalyticEphemeris::new(config)) {
        Ok(_) => Ok(()),
        Err(e) => Err(e.clone()),
    }
}

/// The global engine, if initialization has run and succeeded.
pub fn engine() -> Result<&'static AnalyticEphemeris, InitError> {
    match ENGINE.get() {
        Some(Ok(engine)) => Ok(engine),
        Some(Err(e)) => Err(e.clone()),
        None => Err(InitError::NotInitialized),
    }
}

/// Whether the global engine is initialized and usable.
pub fn is_initialized() -> bool {
    matches!(ENGINE.get(), Some(Ok(_)))
}

#[cfg(test)]
mod tests {
    use super::*;

    // The cell is process-wide, so the happy and failing paths live in
    // separate integration-test binaries (tests/global_init.rs and
    // tests/global_failure.rs). Only the pre-init contract is checked here.
    #[test]
    fn error_text_mentions_initialization() {
        let e = InitError::NotInitialized;
        assert!(e.to_string().contains("not initialized"));
    }
}
