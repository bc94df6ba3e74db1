//! File access

pub mod local;
