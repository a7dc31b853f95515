//! Utility modules for common functionality
//!
//! This module provides logging and output formatting used by the CLI.

pub mod logger;
pub mod format_utils;
