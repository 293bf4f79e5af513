//! End-to-end integration tests for Roundhouse.
//!
//! This crate carries no runtime code; the scenarios live under
//! `tests/` and drive extraction → resolution → suggestion through the
//! real HTTP router with a mock dashboard provider.
