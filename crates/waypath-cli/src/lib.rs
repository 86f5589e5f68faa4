//! Waypath CLI library.
//!
//! This crate provides the command handlers, output rendering and terminal
//! styling used by the `waypath-cli` binary.

pub mod commands;
pub mod output;
pub mod terminal;
