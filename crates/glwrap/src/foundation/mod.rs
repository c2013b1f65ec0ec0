//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the crate:
//! - Build-time platform detection
//! - Platform-aware paths and text file reading
//! - Math types for uniform values
//! - Logging utilities

pub mod fileio;
pub mod logging;
pub mod math;
pub mod platform;
