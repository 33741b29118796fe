//! # Cortex Zones Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/      # Catalog -> document -> screen flows
//! tests/benches/
//! └── render_benchmarks.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p cortex-tests
//!
//! # Benchmarks
//! cargo bench -p cortex-tests
//! ```

pub mod integration;
