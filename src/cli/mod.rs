//! CLI module for trove - command-line interface and subcommands.
//!
//! Provides the main entry point with subcommands for headless store
//! operations, session management, and TUI launch.

pub mod commands;

pub use commands::Cli;
