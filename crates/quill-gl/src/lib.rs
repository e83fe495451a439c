//! Quill GL: OpenGL renderer backend for immediate-mode GUI draw data.
//!
//! This crate turns a toolkit's per-frame draw lists into scissored, blended
//! GL draw calls and owns the GPU objects that requires (shader program, font
//! texture, vertex/element buffers). Host GL state is captured before and
//! restored after every frame, so the GUI can be drawn on top of an existing
//! scene.
//!
//! GL is reached only through [`gl::GlApi`]; [`gl::GlowContext`] implements it
//! over `glow`.
//!
//! ```no_run
//! use std::rc::Rc;
//! use quill_gl::coords::Vec2;
//! use quill_gl::{DrawData, GlowContext, Renderer, RendererInit, RgbaAtlas};
//! # fn frame(ctx: Rc<glow::Context>) -> anyhow::Result<()> {
//! let gl = unsafe { GlowContext::new(ctx) };
//! let mut renderer = Renderer::new(gl, RendererInit::with_glsl_version("#version 330"));
//! let mut atlas = RgbaAtlas::filled(1, 1, [255; 4]);
//! renderer.create_device_objects(&mut atlas)?;
//!
//! let mut draw_data =
//!     DrawData::<u16>::new(Vec2::zero(), Vec2::new(1280.0, 720.0), Vec2::splat(1.0));
//! renderer.render(&mut draw_data);
//!
//! renderer.destroy_device_objects(&mut atlas);
//! # Ok(())
//! # }
//! ```

pub mod coords;
pub mod device;
pub mod draw;
pub mod gl;
pub mod logging;
pub mod render;

pub use device::{AtlasTexture, FontAtlas, GlslDialect, RendererInit, RgbaAtlas};
pub use draw::{CallbackId, DrawCmd, DrawData, DrawList, DrawVert, TextureId};
#[cfg(not(target_arch = "wasm32"))]
pub use gl::GlowContext;
pub use gl::GlApi;
pub use render::{CallbackContext, CallbackHandler, IgnoreCallbacks, Renderer};

pub use quill_glyphs::{build_glyph_ranges, GlyphRanges};
