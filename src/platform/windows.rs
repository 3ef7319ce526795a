//! Windows implementation of the process-control primitives.
//!
//! Windows has no maskable SIGTERM analogue that sysinfo can deliver, so the
//! graceful and forceful sweeps both terminate outright. The two-sweep
//! escalation structure is kept so callers see the same contract and the same
//! logs on every platform.

use crate::error::ReapError;
use std::collections::{HashMap, HashSet};
use sysinfo::{Pid, ProcessesToUpdate, System};

/// Snapshot the process table and collect every descendant of `root`.
///
/// One snapshot per call; children spawned or re-parented after the snapshot
/// are not picked up.
pub fn enumerate_descendants(root: u32) -> Result<HashSet<u32>, ReapError> {
    let mut system = System::new();
    system.refresh_processes(ProcessesToUpdate::All, true);

    let mut children_of: HashMap<u32, Vec<u32>> = HashMap::new();
    for (pid, process) in system.processes() {
        if let Some(parent) = process.parent() {
            children_of
                .entry(parent.as_u32())
                .or_default()
                .push(pid.as_u32());
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

/// Liveness probe backed by a refreshed single-pid snapshot.
pub fn process_alive(pid: u32) -> bool {
    let sys_pid = Pid::from_u32(pid);
    let mut system = System::new();
    system.refresh_processes(ProcessesToUpdate::Some(&[sys_pid]), true);
    system.process(sys_pid).is_some()
}

/// Graceful sweep entry point; on Windows this terminates outright.
pub fn send_graceful(pid: u32) -> Result<bool, ReapError> {
    terminate(pid)
}

/// Forceful sweep entry point.
pub fn send_forceful(pid: u32) -> Result<bool, ReapError> {
    terminate(pid)
}

fn terminate(pid: u32) -> Result<bool, ReapError> {
    let sys_pid = Pid::from_u32(pid);
    let mut system = System::new();
    system.refresh_processes(ProcessesToUpdate::Some(&[sys_pid]), true);

    match system.process(sys_pid) {
        Some(process) => {
            if process.kill() {
                Ok(true)
            } else if process_alive(pid) {
                // Still running but untouchable: the access-denied case.
                Err(ReapError::PermissionDenied { pid })
            } else {
                Ok(false)
            }
        }
        None => Ok(false),
    }
}

/// No defunct state on Windows; nothing to collect.
pub fn reap_zombie(_pid: u32) {}
