//! Render module - drawing the epicycle animation
//!
//! This module provides:
//! - World/screen coordinate mapping
//! - Tip-to-tail chaining of epicycles
//! - The fading trail buffer
//! - The canvas widget that draws a frame

mod canvas;
mod chain;
mod trail;
mod viewport;

pub use canvas::{CanvasFrame, CanvasSettings, EpicycleCanvas};
#[allow(unused_imports)]
pub use chain::{chain_epicycles, EpicycleLink};
pub use trail::Trail;
pub use viewport::Viewport;
