//! Test support for the demoscope workspace.
//!
//! Provides country record builders and on-disk dataset/geometry fixtures so
//! integration tests do not hand-roll JSON strings.

pub mod fixtures;
pub mod world;
