//! Cross-module tests for the plotting core
//!
//! Tests are organized by topic:
//! - `scenarios` - Concrete distribution plots with known shapes and values
//! - `properties` - Determinism, density/cumulative invariants across families
//! - `binding` - Distribution visualizers driven by control events

mod scenarios;
