//! Unix implementation of the process-control primitives.

use crate::error::ReapError;
use nix::errno::Errno;
use nix::sys::signal::{kill, Signal};
use nix::sys::wait::{waitpid, WaitPidFlag};
use nix::unistd::Pid;
use std::collections::{HashMap, HashSet};

/// Walk the process table and collect every descendant of `root`.
///
/// The table is read once per call; children spawned or re-parented after
/// the snapshot are not picked up.
pub fn enumerate_descendants(root: u32) -> Result<HashSet<u32>, ReapError> {
    let snapshot =
        psutil::process::processes().map_err(|source| ReapError::Enumerate { root, source })?;

    let mut children_of: HashMap<u32, Vec<u32>> = HashMap::new();
    for process in snapshot.into_iter().flatten() {
        // Entries that exited mid-scan surface as errors and drop out above.
        let pid = process.pid();
        if let Ok(Some(ppid)) = process.ppid() {
            children_of.entry(ppid).or_default().push(pid);
        }
    }

    let mut descendants = HashSet::new();
    let mut stack = vec![root];
    while let Some(pid) = stack.pop() {
        if let Some(children) = children_of.get(&pid) {
            for &child in children {
                if descendants.insert(child) {
                    stack.push(child);
                }
            }
        }
    }
    Ok(descendants)
}

/// Liveness probe: signal 0 checks existence without delivering anything.
///
/// EPERM means the process exists but belongs to someone else, which still
/// counts as alive. A zombie also counts as alive until its parent collects
/// it; [`reap_zombie`] handles the ones that are ours.
pub fn process_alive(pid: u32) -> bool {
    match unsafe_send_signal(pid as libc::pid_t, 0) {
        Ok(()) => true,
        Err(errno) => errno == libc::EPERM,
    }
}

/// Ask `pid` to exit (SIGTERM). Returns whether the signal was delivered;
/// a target that is already gone yields `Ok(false)`.
pub fn send_graceful(pid: u32) -> Result<bool, ReapError> {
    send_signal(pid, Signal::SIGTERM)
}

/// End `pid` unconditionally (SIGKILL). Same delivery semantics as
/// [`send_graceful`].
pub fn send_forceful(pid: u32) -> Result<bool, ReapError> {
    send_signal(pid, Signal::SIGKILL)
}

fn send_signal(pid: u32, signal: Signal) -> Result<bool, ReapError> {
    match kill(Pid::from_raw(pid as libc::pid_t), signal) {
        Ok(()) => Ok(true),
        Err(Errno::ESRCH) => Ok(false),
        Err(Errno::EPERM) => Err(ReapError::PermissionDenied { pid }),
        Err(source) => Err(ReapError::Signal { pid, source }),
    }
}

/// Collect the exit status of `pid` if it is a child of this process.
///
/// Anything else makes waitpid fail (ECHILD), which is fine: non-children
/// are collected by their own parent, or by init after re-parenting.
pub fn reap_zombie(pid: u32) {
    let _ = waitpid(
        Pid::from_raw(pid as libc::pid_t),
        Some(WaitPidFlag::WNOHANG),
    );
}

/// Send a signal through libc and surface the raw errno on failure.
fn unsafe_send_signal(pid: libc::pid_t, signal: libc::c_int) -> Result<(), libc::c_int> {
    let result = unsafe { libc::kill(pid, signal) };
    if result == 0 {
        Ok(())
    } else {
        Err(get_last_errno())
    }
}

fn get_last_errno() -> libc::c_int {
    #[cfg(any(target_os = "linux", target_os = "android"))]
    {
        unsafe { *libc::__errno_location() }
    }

    #[cfg(any(target_os = "macos", target_os = "ios", target_os = "freebsd"))]
    {
        unsafe { *libc::__error() }
    }

    #[cfg(not(any(
        target_os = "linux",
        target_os = "android",
        target_os = "macos",
        target_os = "ios",
        target_os = "freebsd"
    )))]
    {
        // Fallback for other Unix systems
        0
    }
}
