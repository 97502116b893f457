//! Integration test suite for the Hamburger accessors.
//!
//! Exercises the caller-facing lookups end to end: snapshot file to
//! in-memory state to facade, with pinned clocks.

pub mod helpers;
