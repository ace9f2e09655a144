// IconGen - platform/mod.rs
//
// Platform abstraction layer: everything that touches the filesystem.
// Dependencies: standard library.
// Must NOT depend on: core, app.

pub mod fs;
