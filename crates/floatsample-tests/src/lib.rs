//! Floatsample Integration Test Infrastructure
//!
//! This crate holds cross-module tests for the sample codec:
//!
//! - **Round trips**: bytes -> samples -> bytes for every format code
//! - **Scenarios**: end-to-end buffer behavior on fixed byte patterns
//! - **Determinism**: seeded dithering produces byte-identical output
//! - **Properties**: clamping and decode range under random input
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p floatsample-tests
//! ```

pub mod determinism;
pub mod fixtures;

// Re-export commonly used items
pub use determinism::{compute_hash, verify_determinism, DeterminismResult, DiffInfo};
pub use fixtures::{all_formats, format_for, pattern_bytes};
