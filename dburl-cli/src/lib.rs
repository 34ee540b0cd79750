//! dburl CLI - Command-line interface for dburl.
//!
//! Parses, renders and validates database descriptors from arguments or
//! the environment.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
