//! Termination of whole process trees with graceful-to-forceful escalation.
//!
//! A supervisor that must abort a worker calls [`reap_process_group`] with
//! the worker's pid and a deadline. The worker and its descendants first get
//! a graceful termination signal; whatever outlives the deadline is killed
//! outright. The caller learns from the returned set which pids resisted
//! graceful termination.

use crate::config;
use crate::error::ReapError;
use crate::platform;
use std::collections::HashSet;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

/// Terminate `root_pid` and every descendant, escalating to a forceful kill
/// for processes that outlive `timeout`.
///
/// The group is enumerated once, up front; a child that re-parents away
/// after that snapshot escapes the sweep, as the group is never re-scanned
/// mid-kill. Polling runs at
/// [`config::reap_poll_interval`] on the calling thread, and survivors of the
/// forceful signal are given [`config::KILL_CONFIRM_TIMEOUT`] to disappear
/// before being logged as an anomaly.
///
/// Returns the pids that had to be force-killed, empty when every process
/// exited gracefully. A root that is already gone is an idempotent no-op. A
/// zero `timeout` still performs the graceful sweep before escalating.
///
/// # Examples
///
/// ```no_run
/// use flowutil::config::DEFAULT_REAP_TIMEOUT;
///
/// // Abort worker 4242 and everything it spawned.
/// let killed = flowutil::reap_process_group(4242, DEFAULT_REAP_TIMEOUT).unwrap();
/// if !killed.is_empty() {
///     eprintln!("needed a forceful signal: {killed:?}");
/// }
/// ```
///
/// # Errors
///
/// [`ReapError::SelfTermination`] when `root_pid` is the calling process or
/// pid 0 (the caller's own process group), [`ReapError::PermissionDenied`]
/// when a signal is refused, and (on unix) [`ReapError::Enumerate`] when the
/// process table cannot be read.
pub fn reap_process_group(root_pid: u32, timeout: Duration) -> Result<HashSet<u32>, ReapError> {
    // kill(0, sig) goes to the caller's own process group, so pid 0 can
    // never be a reapable root.
    if root_pid == 0 || root_pid == std::process::id() {
        return Err(ReapError::SelfTermination(root_pid));
    }

    if !platform::process_alive(root_pid) {
        info!("Process group root {} already gone, nothing to reap", root_pid);
        return Ok(HashSet::new());
    }

    let mut group = platform::enumerate_descendants(root_pid)?;
    group.insert(root_pid);

    let mut pids: Vec<u32> = group.iter().copied().collect();
    pids.sort_unstable();
    info!(
        "Sending graceful termination to process group rooted at {} (pids {:?}, timeout {:.1}s)",
        root_pid,
        pids,
        timeout.as_secs_f64()
    );

    for &pid in &group {
        // A pid that exited between enumeration and delivery reports false;
        // nothing to do for it.
        if platform::send_graceful(pid)? {
            debug!("Requested graceful termination of process {}", pid);
        }
    }

    let survivors = wait_for_exit(&group, timeout);
    if survivors.is_empty() {
        info!(
            "Process group rooted at {} exited gracefully ({} processes)",
            root_pid,
            group.len()
        );
        return Ok(HashSet::new());
    }

    for &pid in &survivors {
        warn!(
            "Process {} did not respond to graceful termination within {:.1}s, sending forceful signal",
            pid,
            timeout.as_secs_f64()
        );
        platform::send_forceful(pid)?;
    }

    let unkillable = wait_for_exit(&survivors, config::KILL_CONFIRM_TIMEOUT);
    for &pid in &unkillable {
        error!("Process {} survived forceful termination, giving up", pid);
    }
    if unkillable.is_empty() {
        info!(
            "Process group rooted at {} reaped ({} of {} needed forceful termination)",
            root_pid,
            survivors.len(),
            group.len()
        );
    }

    Ok(survivors)
}

/// Poll `group` until every member is gone or `timeout` elapses; returns the
/// members still alive.
///
/// Each sweep first collects exited direct children so they stop counting as
/// alive, then probes the rest.
fn wait_for_exit(group: &HashSet<u32>, timeout: Duration) -> HashSet<u32> {
    let start = Instant::now();
    let interval = config::reap_poll_interval();

    loop {
        for &pid in group {
            platform::reap_zombie(pid);
        }

        let alive: HashSet<u32> = group
            .iter()
            .copied()
            .filter(|&pid| platform::process_alive(pid))
            .collect();

        if alive.is_empty() || start.elapsed() >= timeout {
            return alive;
        }

        std::thread::sleep(interval);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refuses_to_reap_the_calling_process() {
        let own_pid = std::process::id();
        let err = reap_process_group(own_pid, Duration::from_secs(1)).unwrap_err();
        assert!(matches!(err, ReapError::SelfTermination(pid) if pid == own_pid));
    }

    /// Pid 0 resolves to the caller's own process group and must be refused
    /// before the liveness probe, which would report it alive.
    #[test]
    fn test_refuses_pid_zero_root() {
        let err = reap_process_group(0, Duration::from_secs(1)).unwrap_err();
        assert!(matches!(err, ReapError::SelfTermination(0)));
    }

    #[test]
    fn test_wait_for_exit_on_empty_group_returns_immediately() {
        let survivors = wait_for_exit(&HashSet::new(), Duration::from_secs(60));
        assert!(survivors.is_empty());
    }

    #[test]
    fn test_wait_for_exit_reports_survivors_on_zero_timeout() {
        // The test process itself is the one pid guaranteed to stay alive.
        let group: HashSet<u32> = [std::process::id()].into_iter().collect();
        let survivors = wait_for_exit(&group, Duration::ZERO);
        assert_eq!(survivors, group);
    }
}
