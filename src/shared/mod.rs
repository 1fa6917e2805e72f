//! Shared UI components.
//!
//! This module contains shared UI components used across different features:
//! - Theme colors and styling
//! - Top title bar and bottom system bar widgets

mod system_bar;
mod theme;
mod top_bar;

pub use system_bar::draw_system_bar;
pub use theme::{Theme, ThemeColors};
pub use top_bar::draw_top_bar;
