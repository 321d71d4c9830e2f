// src/render/mod.rs

//! Turning a laid-out conference graph into an interactive HTML page.

pub mod html;
pub mod palette;

pub use html::{render_html, write_html, RenderOptions};
pub use palette::Palette;
