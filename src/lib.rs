//! # regtui - account sign-up TUI
//!
//! A terminal form for creating an account: four fields, a live password
//! checklist, and a single JSON POST to the account service. Built on the
//! component/action pattern: a terminal event source feeds an app loop that
//! fans actions out to components over a channel.
//!
//! ## Modules
//!
//! - [`domain`] - pure form state and password validation
//! - [`api`] - the account service client
//! - [`components`] - the sign-up form, the login view and the status bar
//! - [`app`] - the event loop
//! - [`tui`] - terminal lifecycle and the crossterm event stream
//! - [`config`] - endpoint configuration

pub mod action;
pub mod api;
pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod domain;
pub mod mode;
pub mod tui;
pub mod utils;

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
