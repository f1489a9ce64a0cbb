//! charforge - static asset writer and character generator.
//!
//! Core library shared by the `forge` binary and integration tests.

pub mod assets;
pub mod config;
pub mod forge;
pub mod models;
pub mod storage;
