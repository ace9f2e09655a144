// IconGen - app/mod.rs
//
// Application layer: drives a generation run over the icon set.
// Dependencies: core, platform, util.

pub mod generate;
