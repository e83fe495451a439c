//! Per-frame draw data consumed by the renderer.
//!
//! These types mirror what an immediate-mode GUI toolkit emits at the end of
//! a frame. They are plain data: the toolkit (or an adapter over its native
//! structures) fills them, the renderer reads them, and nothing is retained
//! across frames.

mod cmd;
mod data;
mod list;
mod vert;

pub use cmd::{CallbackId, DrawCmd, TextureId};
pub use data::DrawData;
pub use list::{DrawList, InvalidDrawList};
pub use vert::{DrawIdx, DrawVert, VertexLayout};
