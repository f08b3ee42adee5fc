//! Input module - pointer capture for hand-drawn shapes

mod freehand;

pub use freehand::FreehandCapture;
