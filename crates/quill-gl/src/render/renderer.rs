use anyhow::Result;

use super::binding::ListBinding;
use super::callback::{CallbackContext, CallbackHandler, IgnoreCallbacks};
use super::projection::ortho_projection;
use super::state::GlStateSnapshot;
use crate::device::{DeviceObjects, FontAtlas, GlslDialect, RendererInit};
use crate::draw::{DrawData, DrawIdx};
use crate::gl::GlApi;

/// OpenGL backend for immediate-mode GUI draw data.
///
/// Lifecycle:
/// 1. [`Renderer::new`] (no GL calls)
/// 2. [`create_device_objects`](Self::create_device_objects) once a context
///    is current
/// 3. [`render`](Self::render) every frame
/// 4. [`destroy_device_objects`](Self::destroy_device_objects) on shutdown or
///    context loss
///
/// Dropping the renderer does not release GL objects: destruction needs the
/// font atlas and a current context, neither of which `Drop` can guarantee.
pub struct Renderer<G: GlApi> {
    gl: G,
    glsl_version: String,
    dialect: GlslDialect,
    objects: DeviceObjects<G>,
}

impl<G: GlApi> Renderer<G> {
    pub fn new(gl: G, init: RendererInit) -> Self {
        let glsl_version = init.resolved_glsl_version().to_owned();
        let dialect = GlslDialect::from_directive(&glsl_version);

        Self {
            gl,
            glsl_version,
            dialect,
            objects: DeviceObjects::default(),
        }
    }

    /// Shorthand for `new` with only the version directive set.
    pub fn with_glsl_version(gl: G, glsl_version: &str) -> Self {
        Self::new(gl, RendererInit::with_glsl_version(glsl_version))
    }

    #[inline]
    pub fn gl(&self) -> &G {
        &self.gl
    }

    #[inline]
    pub fn gl_mut(&mut self) -> &mut G {
        &mut self.gl
    }

    #[inline]
    pub fn glsl_version(&self) -> &str {
        &self.glsl_version
    }

    #[inline]
    pub fn glsl_dialect(&self) -> GlslDialect {
        self.dialect
    }

    #[inline]
    pub fn device_objects(&self) -> &DeviceObjects<G> {
        &self.objects
    }

    #[inline]
    pub fn has_device_objects(&self) -> bool {
        !self.objects.is_empty()
    }

    /// Creates the shader program, buffers and font texture.
    ///
    /// Shader compile/link problems are logged and do not fail the call.
    /// Errors are returned only when GL cannot allocate an object; anything
    /// created before that point is released by
    /// [`destroy_device_objects`](Self::destroy_device_objects).
    ///
    /// Calling this while objects exist releases them first.
    pub fn create_device_objects(&mut self, atlas: &mut impl FontAtlas) -> Result<()> {
        if !self.objects.is_empty() {
            log::debug!("device objects already exist; recreating");
            self.objects.destroy(&mut self.gl, atlas);
        }
        self.objects.create(&mut self.gl, &self.glsl_version, atlas)
    }

    /// Releases every device object and clears the atlas texture id.
    ///
    /// Safe to call repeatedly.
    pub fn destroy_device_objects(&mut self, atlas: &mut impl FontAtlas) {
        let had_objects = !self.objects.is_empty();
        self.objects.destroy(&mut self.gl, atlas);
        if had_objects {
            log::debug!("device objects destroyed");
        }
    }

    /// Renders one frame, skipping callback commands.
    ///
    /// Clip rects of `draw_data` are scaled in place by its framebuffer scale.
    pub fn render<I: DrawIdx>(&mut self, draw_data: &mut DrawData<I>) {
        self.render_with_callbacks(draw_data, &mut IgnoreCallbacks);
    }

    /// Renders one frame, handing callback commands to `handler`.
    ///
    /// Host GL state is captured before and restored after the frame. A frame
    /// whose framebuffer has no area issues no GL calls at all.
    pub fn render_with_callbacks<I: DrawIdx, H: CallbackHandler<G>>(
        &mut self,
        draw_data: &mut DrawData<I>,
        handler: &mut H,
    ) {
        let (fb_width, fb_height) = draw_data.framebuffer_size();
        if fb_width <= 0 || fb_height <= 0 {
            return;
        }

        draw_data.scale_clip_rects(draw_data.framebuffer_scale);

        let snapshot = GlStateSnapshot::capture(&mut self.gl);
        self.setup_render_state(draw_data, fb_width, fb_height);

        let gl = &mut self.gl;
        let clip_offset = -draw_data.display_pos;
        let mut draws = 0usize;

        for list in &draw_data.draw_lists {
            debug_assert!(list.validate().is_ok(), "{:?}", list.validate());

            let binding = ListBinding::new(&self.objects, list);
            binding.bind(gl);

            let mut offset = 0usize;
            for cmd in &list.commands {
                if let Some(id) = cmd.callback {
                    let mut ctx = CallbackContext::new(gl, &binding, (fb_width, fb_height));
                    handler.on_callback(&mut ctx, id, list, cmd);
                } else if let Some([x, y, w, h]) = cmd
                    .clip_rect
                    .translated(clip_offset)
                    .to_scissor(fb_width, fb_height)
                {
                    gl.scissor(x, y, w, h);
                    let texture = gl.texture_from_id(cmd.texture_id);
                    gl.bind_texture(glow::TEXTURE_2D, texture);
                    gl.draw_elements(
                        glow::TRIANGLES,
                        cmd.elem_count as i32,
                        I::GL_TYPE,
                        offset as i32,
                    );
                    draws += 1;
                }
                offset += cmd.elem_count as usize * I::SIZE;
            }
        }

        snapshot.apply(&mut self.gl);

        log::trace!(
            "frame {fb_width}x{fb_height}: {} lists, {} vertices, {} indices, {draws} draws",
            draw_data.draw_lists.len(),
            draw_data.total_vtx_count(),
            draw_data.total_idx_count(),
        );
    }

    /// Blending, no culling or depth, scissor on; viewport, program,
    /// projection and vertex attribute arrays.
    fn setup_render_state<I: DrawIdx>(
        &mut self,
        draw_data: &DrawData<I>,
        fb_width: i32,
        fb_height: i32,
    ) {
        let gl = &mut self.gl;
        let locations = self.objects.locations();

        gl.active_texture(glow::TEXTURE0);
        gl.enable(glow::BLEND);
        gl.blend_equation(glow::FUNC_ADD);
        gl.blend_func(glow::SRC_ALPHA, glow::ONE_MINUS_SRC_ALPHA);
        gl.disable(glow::CULL_FACE);
        gl.disable(glow::DEPTH_TEST);
        gl.enable(glow::SCISSOR_TEST);

        gl.viewport(0, 0, fb_width, fb_height);
        let projection = ortho_projection(draw_data.display_pos, draw_data.display_size);
        gl.use_program(self.objects.program());
        gl.uniform_1_i32(locations.texture.as_ref(), 0);
        gl.uniform_matrix_4_f32(locations.proj_mtx.as_ref(), &projection);

        for index in locations.vertex_attribs() {
            gl.enable_vertex_attrib_array(index);
        }
    }
}
