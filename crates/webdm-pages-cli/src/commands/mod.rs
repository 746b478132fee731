//! CLI command implementations for webdm-pages.
//!
//! Each module corresponds to a subcommand (`webdm-pages <command>`).

pub mod check;
pub mod render;
pub mod sample;
