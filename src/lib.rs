//! inboxer: keep an inbox and a timeline section in a markdown document.
//!
//! The engine (`heading`, `markup`, `position`) is a set of pure functions over a text
//! snapshot. `buffer`, `commands`, `edit_plan` and `config` adapt it to files on disk.
#![allow(clippy::multiple_crate_versions)]

pub mod buffer;
pub mod commands;
pub mod config;
pub mod edit_plan;
pub mod heading;
pub mod markup;
pub mod position;
