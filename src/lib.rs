//! Simulated portfolio terminal.
//!
//! The [`core`] module holds the command registry and the session engine;
//! [`components`] renders a session with Leptos.

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;
