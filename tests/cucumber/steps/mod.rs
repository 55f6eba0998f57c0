// Cucumber Step Definitions Module
//
// Step definitions grouped by directory service, plus the command line.

#[path = "../src/lib.rs"]
pub mod support;

pub mod chains;
pub mod cli;
pub mod common;
pub mod status;
pub mod validators;

pub use common::DirectoryWorld;
