//! Pokédex TUI — terminal catalog browser.
//!
//! One entry at a time, fetched by numeric index from the remote catalog:
//! - Summary view with pager navigation (previous/next)
//! - Detail overlay with the full ability and stat lists
//! - Error history overlay and status bar

pub mod app;
pub mod input;
pub mod theme;
pub mod ui;
pub mod worker;
