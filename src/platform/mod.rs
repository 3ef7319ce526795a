//! Platform-specific process inspection and signaling.
//!
//! The reaper is written against five primitives (descendant enumeration, a
//! liveness probe, graceful and forceful signal delivery, and zombie
//! collection) and never touches an OS API directly.
//!
//! Platform strategy:
//! - Linux/macOS: psutil for the process table, libc/nix for probing and
//!   signaling
//! - Windows: sysinfo snapshots for both inspection and termination

#[cfg(unix)]
mod unix;
#[cfg(windows)]
mod windows;

#[cfg(unix)]
pub use unix::{enumerate_descendants, process_alive, reap_zombie, send_forceful, send_graceful};
#[cfg(windows)]
pub use windows::{
    enumerate_descendants, process_alive, reap_zombie, send_forceful, send_graceful,
};
