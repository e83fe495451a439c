use std::fmt;

use crate::gl::GlApi;

/// Host GL state touched by a frame, captured before and reapplied after.
///
/// Covers: active texture unit, program, 2D texture on unit 0, array buffer,
/// viewport, scissor box, separate blend equations and factors, and the
/// BLEND/CULL_FACE/DEPTH_TEST/SCISSOR_TEST flags. Element buffer and vertex
/// attribute array state are not part of it.
pub struct GlStateSnapshot<G: GlApi> {
    active_texture: u32,
    program: Option<G::Program>,
    texture: Option<G::Texture>,
    array_buffer: Option<G::Buffer>,
    viewport: [i32; 4],
    scissor_box: [i32; 4],
    blend_src_rgb: u32,
    blend_dst_rgb: u32,
    blend_src_alpha: u32,
    blend_dst_alpha: u32,
    blend_equation_rgb: u32,
    blend_equation_alpha: u32,
    blend: bool,
    cull_face: bool,
    depth_test: bool,
    scissor_test: bool,
}

impl<G: GlApi> GlStateSnapshot<G> {
    /// Reads the current state.
    ///
    /// Leaves `TEXTURE0` active: the texture binding is captured (and later
    /// restored) on unit 0, which is the unit the renderer draws with.
    pub fn capture(gl: &mut G) -> Self {
        let active_texture = gl.get_parameter_i32(glow::ACTIVE_TEXTURE) as u32;
        gl.active_texture(glow::TEXTURE0);

        Self {
            active_texture,
            program: gl.current_program(),
            texture: gl.bound_texture_2d(),
            array_buffer: gl.bound_array_buffer(),
            viewport: gl.get_parameter_i32_4(glow::VIEWPORT),
            scissor_box: gl.get_parameter_i32_4(glow::SCISSOR_BOX),
            blend_src_rgb: gl.get_parameter_i32(glow::BLEND_SRC_RGB) as u32,
            blend_dst_rgb: gl.get_parameter_i32(glow::BLEND_DST_RGB) as u32,
            blend_src_alpha: gl.get_parameter_i32(glow::BLEND_SRC_ALPHA) as u32,
            blend_dst_alpha: gl.get_parameter_i32(glow::BLEND_DST_ALPHA) as u32,
            blend_equation_rgb: gl.get_parameter_i32(glow::BLEND_EQUATION_RGB) as u32,
            blend_equation_alpha: gl.get_parameter_i32(glow::BLEND_EQUATION_ALPHA) as u32,
            blend: gl.is_enabled(glow::BLEND),
            cull_face: gl.is_enabled(glow::CULL_FACE),
            depth_test: gl.is_enabled(glow::DEPTH_TEST),
            scissor_test: gl.is_enabled(glow::SCISSOR_TEST),
        }
    }

    /// Restores the captured state, consuming the snapshot.
    ///
    /// The texture goes back onto unit 0, where it was captured, before the
    /// host's active unit is reselected.
    pub fn apply(self, gl: &mut G) {
        gl.use_program(self.program);
        gl.active_texture(glow::TEXTURE0);
        gl.bind_texture(glow::TEXTURE_2D, self.texture);
        gl.active_texture(self.active_texture);
        gl.bind_buffer(glow::ARRAY_BUFFER, self.array_buffer);
        gl.blend_equation_separate(self.blend_equation_rgb, self.blend_equation_alpha);
        gl.blend_func_separate(
            self.blend_src_rgb,
            self.blend_dst_rgb,
            self.blend_src_alpha,
            self.blend_dst_alpha,
        );
        gl.set_enabled(glow::BLEND, self.blend);
        gl.set_enabled(glow::CULL_FACE, self.cull_face);
        gl.set_enabled(glow::DEPTH_TEST, self.depth_test);
        gl.set_enabled(glow::SCISSOR_TEST, self.scissor_test);

        let [x, y, w, h] = self.viewport;
        gl.viewport(x, y, w, h);
        let [x, y, w, h] = self.scissor_box;
        gl.scissor(x, y, w, h);
    }
}

impl<G: GlApi> fmt::Debug for GlStateSnapshot<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GlStateSnapshot")
            .field("active_texture", &self.active_texture)
            .field("program", &self.program)
            .field("texture", &self.texture)
            .field("array_buffer", &self.array_buffer)
            .field("viewport", &self.viewport)
            .field("scissor_box", &self.scissor_box)
            .field("blend_equation", &(self.blend_equation_rgb, self.blend_equation_alpha))
            .field(
                "blend_func",
                &(
                    self.blend_src_rgb,
                    self.blend_dst_rgb,
                    self.blend_src_alpha,
                    self.blend_dst_alpha,
                ),
            )
            .field("blend", &self.blend)
            .field("cull_face", &self.cull_face)
            .field("depth_test", &self.depth_test)
            .field("scissor_test", &self.scissor_test)
            .finish()
    }
}
