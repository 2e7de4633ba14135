//! Terminal front end for the AERO weather dashboard
//!
//! Renders [`aero_core::DashboardState`] with ratatui and turns key presses
//! into [`aero_core::Action`]s through `tui-dispatch` components. The binary
//! in `main.rs` wires this to a real terminal.

pub mod components;
pub mod runtime;

pub use runtime::run;
pub use tui_dispatch::PollerConfig;
