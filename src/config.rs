use std::time::Duration;

/// Interval between liveness sweeps while waiting for a signaled group to exit.
pub const REAP_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// How long the forceful signal is given to take effect before survivors are
/// reported as an anomaly.
pub const KILL_CONFIRM_TIMEOUT: Duration = Duration::from_secs(2);

/// Grace period for callers that have no deadline of their own.
pub const DEFAULT_REAP_TIMEOUT: Duration = Duration::from_secs(60);

/// Overrides [`REAP_POLL_INTERVAL`], in milliseconds.
pub const REAP_POLL_INTERVAL_ENV: &str = "FLOWUTIL_REAP_POLL_INTERVAL_MS";

/// The poll interval with the environment override applied.
///
/// Unset, unparsable, or zero values fall back to [`REAP_POLL_INTERVAL`].
pub fn reap_poll_interval() -> Duration {
    match std::env::var(REAP_POLL_INTERVAL_ENV) {
        Ok(raw) => match raw.trim().parse::<u64>() {
            Ok(millis) if millis > 0 => Duration::from_millis(millis),
            _ => REAP_POLL_INTERVAL,
        },
        Err(_) => REAP_POLL_INTERVAL,
    }
}
