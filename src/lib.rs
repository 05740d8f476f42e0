//! Playtime - YouTube playlist running time at several playback speeds
//!
//! This library crate exposes the core functionality for integration testing.

pub mod calculator;
pub mod config;
pub mod server;
pub mod state;
pub mod youtube;
