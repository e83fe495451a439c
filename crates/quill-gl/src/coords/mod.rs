//! Geometry types shared by draw data and the render loop.
//!
//! Display space:
//! - logical units as reported by the GUI toolkit
//! - origin top-left, +X right, +Y down
//!
//! Framebuffer space is display space multiplied by the framebuffer scale.
//! GL window coordinates have a bottom-left origin; the render loop flips Y
//! when it converts clip rects to scissor boxes.

mod clip_rect;
mod vec2;

pub use clip_rect::ClipRect;
pub use vec2::Vec2;
