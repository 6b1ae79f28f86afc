//! nun - npm update notifier library
//!
//! This library provides the pieces of a periodic outdated-dependency check:
//! - Resolving and reading package.json manifests
//! - Looking up the latest published version on the npm registry
//! - Reporting outdated dependencies on the console or as desktop notifications
//! - Repeating the check on an interval

pub mod checker;
pub mod cli;
pub mod config;
pub mod cycle;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod notify;
pub mod progress;
pub mod registry;
pub mod scheduler;
