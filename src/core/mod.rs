// IconGen - core/mod.rs
//
// Core drawing logic.
// Dependencies: standard library and the `image` crate only.
// Must NOT depend on: platform, app, or any filesystem access.

pub mod canvas;
pub mod icon;
pub mod model;
