// IconGen - lib.rs
//
// Library entry point, exposing every module for integration testing and
// for build scripts that want to generate the icon set programmatically.
//
// The CLI lives in `main.rs` and is not part of the library surface.

pub mod app;
pub mod core;
pub mod platform;
pub mod util;
