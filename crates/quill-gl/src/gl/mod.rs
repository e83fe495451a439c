//! Minimal OpenGL capability interface.
//!
//! The renderer only talks to GL through [`GlApi`]. The trait covers exactly
//! the entry points the backend issues, with glow-style signatures:
//! - enum arguments are raw GL values (use the `glow::*` constants)
//! - object handles are associated types, `None` meaning GL's zero name
//! - object creation reports failure as `Err(String)`
//!
//! [`GlowContext`] is the production implementation.

use std::fmt;

use crate::draw::TextureId;

#[cfg(not(target_arch = "wasm32"))]
mod glow_context;
#[cfg(test)]
pub(crate) mod recording;

#[cfg(not(target_arch = "wasm32"))]
pub use glow_context::GlowContext;

/// GL entry points used by the renderer.
///
/// Implementations assume a current context on the calling thread; the trait
/// methods themselves are safe and never check GL errors.
pub trait GlApi {
    type Shader: Copy + fmt::Debug;
    type Program: Copy + fmt::Debug + PartialEq;
    type Texture: Copy + fmt::Debug + PartialEq;
    type Buffer: Copy + fmt::Debug + PartialEq;
    type UniformLocation: Clone + fmt::Debug;

    // ── state queries ─────────────────────────────────────────────────────

    fn get_parameter_i32(&self, parameter: u32) -> i32;
    fn get_parameter_i32_4(&self, parameter: u32) -> [i32; 4];
    fn is_enabled(&self, capability: u32) -> bool;
    fn current_program(&self) -> Option<Self::Program>;
    /// Texture bound to `TEXTURE_2D` on the active unit.
    fn bound_texture_2d(&self) -> Option<Self::Texture>;
    fn bound_array_buffer(&self) -> Option<Self::Buffer>;

    // ── fixed-function state ──────────────────────────────────────────────

    fn enable(&mut self, capability: u32);
    fn disable(&mut self, capability: u32);
    fn active_texture(&mut self, unit: u32);
    fn blend_equation(&mut self, mode: u32);
    fn blend_equation_separate(&mut self, mode_rgb: u32, mode_alpha: u32);
    fn blend_func(&mut self, src: u32, dst: u32);
    fn blend_func_separate(&mut self, src_rgb: u32, dst_rgb: u32, src_alpha: u32, dst_alpha: u32);
    fn viewport(&mut self, x: i32, y: i32, width: i32, height: i32);
    fn scissor(&mut self, x: i32, y: i32, width: i32, height: i32);

    /// Enables or disables `capability` according to `enabled`.
    #[inline]
    fn set_enabled(&mut self, capability: u32, enabled: bool) {
        if enabled {
            self.enable(capability);
        } else {
            self.disable(capability);
        }
    }

    // ── shaders & programs ────────────────────────────────────────────────

    fn create_shader(&mut self, shader_type: u32) -> Result<Self::Shader, String>;
    fn shader_source(&mut self, shader: Self::Shader, source: &str);
    fn compile_shader(&mut self, shader: Self::Shader);
    fn shader_compile_status(&self, shader: Self::Shader) -> bool;
    fn shader_info_log(&self, shader: Self::Shader) -> String;
    fn delete_shader(&mut self, shader: Self::Shader);

    fn create_program(&mut self) -> Result<Self::Program, String>;
    fn attach_shader(&mut self, program: Self::Program, shader: Self::Shader);
    fn detach_shader(&mut self, program: Self::Program, shader: Self::Shader);
    fn link_program(&mut self, program: Self::Program);
    fn program_link_status(&self, program: Self::Program) -> bool;
    fn program_info_log(&self, program: Self::Program) -> String;
    fn delete_program(&mut self, program: Self::Program);
    fn use_program(&mut self, program: Option<Self::Program>);

    fn uniform_location(&self, program: Self::Program, name: &str) -> Option<Self::UniformLocation>;
    fn attrib_location(&self, program: Self::Program, name: &str) -> Option<u32>;
    fn uniform_1_i32(&mut self, location: Option<&Self::UniformLocation>, value: i32);
    /// Uploads a column-major 4×4 matrix.
    fn uniform_matrix_4_f32(&mut self, location: Option<&Self::UniformLocation>, value: &[f32; 16]);

    // ── buffers & vertex attributes ───────────────────────────────────────

    fn create_buffer(&mut self) -> Result<Self::Buffer, String>;
    fn delete_buffer(&mut self, buffer: Self::Buffer);
    fn bind_buffer(&mut self, target: u32, buffer: Option<Self::Buffer>);
    fn buffer_data(&mut self, target: u32, data: &[u8], usage: u32);

    fn enable_vertex_attrib_array(&mut self, index: u32);
    /// Points attribute `index` at the bound `ARRAY_BUFFER`, `offset` bytes in.
    fn vertex_attrib_pointer(
        &mut self,
        index: u32,
        size: i32,
        data_type: u32,
        normalized: bool,
        stride: i32,
        offset: i32,
    );

    // ── textures ──────────────────────────────────────────────────────────

    fn create_texture(&mut self) -> Result<Self::Texture, String>;
    fn delete_texture(&mut self, texture: Self::Texture);
    fn bind_texture(&mut self, target: u32, texture: Option<Self::Texture>);
    fn tex_parameter_i32(&mut self, target: u32, parameter: u32, value: i32);
    fn pixel_store_i32(&mut self, parameter: u32, value: i32);
    #[allow(clippy::too_many_arguments)]
    fn tex_image_2d(
        &mut self,
        target: u32,
        level: i32,
        internal_format: i32,
        width: i32,
        height: i32,
        format: u32,
        data_type: u32,
        pixels: &[u8],
    );

    /// Converts a texture handle into the opaque id stored in draw commands.
    fn texture_id(&self, texture: Self::Texture) -> TextureId;
    /// Inverse of [`texture_id`](Self::texture_id); `None` for `TextureId::NONE`.
    fn texture_from_id(&self, id: TextureId) -> Option<Self::Texture>;

    // ── drawing ───────────────────────────────────────────────────────────

    /// Draws from the bound `ELEMENT_ARRAY_BUFFER`, starting `offset` bytes in.
    fn draw_elements(&mut self, mode: u32, count: i32, element_type: u32, offset: i32);
}
