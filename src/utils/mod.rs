//! Supporting utilities for embedding binaries.

pub mod logger;
