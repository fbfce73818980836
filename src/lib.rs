//! Dotfiles bootstrap engine.
//!
//! Resolves the set of dotbot config files to install, from named profile
//! files and explicitly requested paths, validates them, optionally refreshes
//! the host package index, and drives `dotbot` once per config.
//!
//! The public API is organised into thin layers:
//!
//! - **[`config`]** — repository layout, profile reading, config resolution
//! - **[`pkg`]** — OS package manager facade (index refresh only)
//! - **[`installer`]** — the dotbot wrapper
//! - **[`commands`]** — top-level orchestration wired from [`cli`]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exec;
pub mod installer;
pub mod logging;
pub mod pkg;
pub mod platform;
