//! Native CLI support for the overcheck binary.
//!
//! The binary is a host for `overcheck-checker`: it loads declaration
//! manifests produced by a parser, answers the overload and signature
//! questions the checker asks, and reports the resulting diagnostics.

pub mod args;
pub mod config;
pub mod driver;
pub mod manifest;
pub mod oracle;
pub mod reporter;
pub mod signature;
pub mod tracing_config;

#[cfg(test)]
#[path = "../tests/args_tests.rs"]
mod args_tests;
#[cfg(test)]
#[path = "../tests/config_tests.rs"]
mod config_tests;
#[cfg(test)]
#[path = "../tests/driver_tests.rs"]
mod driver_tests;
#[cfg(test)]
#[path = "../tests/manifest_tests.rs"]
mod manifest_tests;
#[cfg(test)]
#[path = "../tests/reporter_tests.rs"]
mod reporter_tests;
#[cfg(test)]
#[path = "../tests/signature_tests.rs"]
mod signature_tests;
