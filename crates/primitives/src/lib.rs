//! Branch-free comparison, equality and selection over fixed-width unsigned integers.
//!
//! [`ct`] holds the constant-time primitives on `u32`. [`branching`] mirrors them with ordinary
//! branches as a test oracle and benchmark baseline, and must never see secret data. [`traits`]
//! extends both sets to `u8`, `u16`, `u32` and `u64`.

pub mod ct;

pub mod branching;

pub mod traits;
