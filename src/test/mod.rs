//! Shared helpers for property tests.
