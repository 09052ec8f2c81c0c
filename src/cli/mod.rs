//! Command-line front end for the `agraph` tool.

pub mod commands;
