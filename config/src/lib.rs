//! # Config Crate
//!
//! Centralized configuration constants for the building mesh generator.
//! Every default, clamp bound and export setting is defined here so the
//! mesh library and the command-line adapter agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_SIDES, MAX_SIDES, MIN_SIDES};
//!
//! let requested = 48;
//! let sides = requested.clamp(MIN_SIDES, MAX_SIDES);
//! assert_eq!(sides, MAX_SIDES);
//! assert!(DEFAULT_SIDES >= MIN_SIDES);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Dependencies**: Plain values, usable from any crate
//! - **Deterministic Output**: Export settings never depend on locale or platform

pub mod constants;
