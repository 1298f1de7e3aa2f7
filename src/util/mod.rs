//! Filesystem helpers for the command layer.

pub mod atomic;
