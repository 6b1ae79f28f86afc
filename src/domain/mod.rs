//! Core domain models for nun
//!
//! This module contains the fundamental types used throughout the application:
//! - Dependency declarations and their groups
//! - The parsed manifest
//! - Per-manifest check results

mod check_result;
mod dependency;
mod manifest;

pub use check_result::{CheckResult, OutdatedEntry};
pub use dependency::{Dependency, DependencyGroup, WILDCARD};
pub use manifest::Manifest;
