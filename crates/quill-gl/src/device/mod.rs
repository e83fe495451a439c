//! GPU-side resources owned by the renderer.
//!
//! - `init`: renderer configuration
//! - `shaders`: GLSL dialect selection, shader sources, compile/link checks
//! - `font`: font atlas trait and font texture upload
//! - `objects`: the device object set and its create/destroy lifecycle

mod font;
mod init;
mod objects;
mod shaders;

pub use font::{AtlasTexture, FontAtlas, RgbaAtlas};
pub use init::{RendererInit, DEFAULT_GLSL_VERSION};
pub use objects::{AttribLocations, DeviceObjects};
pub use shaders::{parse_glsl_version, GlslDialect};
