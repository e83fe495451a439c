use std::fmt;

use anyhow::{Context, Result};

use super::font::{create_fonts_texture, destroy_fonts_texture, FontAtlas};
use super::shaders::{check_program, compile_stage, GlslDialect};
use crate::gl::GlApi;

/// Cached shader input locations.
pub struct AttribLocations<G: GlApi> {
    /// `Texture` sampler uniform.
    pub texture: Option<G::UniformLocation>,
    /// `ProjMtx` projection uniform.
    pub proj_mtx: Option<G::UniformLocation>,
    pub position: Option<u32>,
    pub uv: Option<u32>,
    pub color: Option<u32>,
}

impl<G: GlApi> Default for AttribLocations<G> {
    fn default() -> Self {
        Self {
            texture: None,
            proj_mtx: None,
            position: None,
            uv: None,
            color: None,
        }
    }
}

impl<G: GlApi> fmt::Debug for AttribLocations<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttribLocations")
            .field("texture", &self.texture)
            .field("proj_mtx", &self.proj_mtx)
            .field("position", &self.position)
            .field("uv", &self.uv)
            .field("color", &self.color)
            .finish()
    }
}

impl<G: GlApi> AttribLocations<G> {
    fn resolve(gl: &G, program: G::Program) -> Self {
        Self {
            texture: gl.uniform_location(program, "Texture"),
            proj_mtx: gl.uniform_location(program, "ProjMtx"),
            position: gl.attrib_location(program, "Position"),
            uv: gl.attrib_location(program, "UV"),
            color: gl.attrib_location(program, "Color"),
        }
    }

    /// Attribute locations that resolved, in position/uv/color order.
    pub fn vertex_attribs(&self) -> impl Iterator<Item = u32> {
        [self.position, self.uv, self.color].into_iter().flatten()
    }
}

/// GL objects owned by the renderer.
///
/// Every handle is `None` until created and after destruction.
pub struct DeviceObjects<G: GlApi> {
    pub(crate) vert_shader: Option<G::Shader>,
    pub(crate) frag_shader: Option<G::Shader>,
    pub(crate) program: Option<G::Program>,
    pub(crate) font_texture: Option<G::Texture>,
    pub(crate) element_buffer: Option<G::Buffer>,
    pub(crate) vertex_buffer: Option<G::Buffer>,
    pub(crate) locations: AttribLocations<G>,
}

impl<G: GlApi> Default for DeviceObjects<G> {
    fn default() -> Self {
        Self {
            vert_shader: None,
            frag_shader: None,
            program: None,
            font_texture: None,
            element_buffer: None,
            vertex_buffer: None,
            locations: AttribLocations::default(),
        }
    }
}

impl<G: GlApi> fmt::Debug for DeviceObjects<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceObjects")
            .field("vert_shader", &self.vert_shader)
            .field("frag_shader", &self.frag_shader)
            .field("program", &self.program)
            .field("font_texture", &self.font_texture)
            .field("element_buffer", &self.element_buffer)
            .field("vertex_buffer", &self.vertex_buffer)
            .field("locations", &self.locations)
            .finish()
    }
}

impl<G: GlApi> DeviceObjects<G> {
    pub fn vert_shader(&self) -> Option<G::Shader> {
        self.vert_shader
    }

    pub fn frag_shader(&self) -> Option<G::Shader> {
        self.frag_shader
    }

    pub fn program(&self) -> Option<G::Program> {
        self.program
    }

    pub fn font_texture(&self) -> Option<G::Texture> {
        self.font_texture
    }

    pub fn element_buffer(&self) -> Option<G::Buffer> {
        self.element_buffer
    }

    pub fn vertex_buffer(&self) -> Option<G::Buffer> {
        self.vertex_buffer
    }

    pub fn locations(&self) -> &AttribLocations<G> {
        &self.locations
    }

    /// True when no GL object is held.
    pub fn is_empty(&self) -> bool {
        self.vert_shader.is_none()
            && self.frag_shader.is_none()
            && self.program.is_none()
            && self.font_texture.is_none()
            && self.element_buffer.is_none()
            && self.vertex_buffer.is_none()
    }

    /// Creates shaders, program, buffers and the font texture.
    ///
    /// The 2D texture and array buffer bindings are restored on every path.
    /// Objects created before an allocation failure stay owned by `self`.
    pub(crate) fn create(
        &mut self,
        gl: &mut G,
        directive: &str,
        atlas: &mut impl FontAtlas,
    ) -> Result<()> {
        let last_texture = gl.bound_texture_2d();
        let last_array_buffer = gl.bound_array_buffer();

        let result = self.create_objects(gl, directive, atlas);

        gl.bind_texture(glow::TEXTURE_2D, last_texture);
        gl.bind_buffer(glow::ARRAY_BUFFER, last_array_buffer);

        result
    }

    fn create_objects(
        &mut self,
        gl: &mut G,
        directive: &str,
        atlas: &mut impl FontAtlas,
    ) -> Result<()> {
        let dialect = GlslDialect::from_directive(directive);
        log::debug!("creating device objects: {directive:?} -> {dialect:?}");

        let vert = compile_stage(
            gl,
            glow::VERTEX_SHADER,
            directive,
            dialect.vertex_source(),
            "vertex shader",
        )?;
        self.vert_shader = Some(vert);

        let frag = compile_stage(
            gl,
            glow::FRAGMENT_SHADER,
            directive,
            dialect.fragment_source(),
            "fragment shader",
        )?;
        self.frag_shader = Some(frag);

        let program = gl
            .create_program()
            .map_err(anyhow::Error::msg)
            .context("failed to create shader program")?;
        self.program = Some(program);

        gl.attach_shader(program, vert);
        gl.attach_shader(program, frag);
        gl.link_program(program);
        let linked = check_program(gl, program, "shader program");

        self.locations = AttribLocations::resolve(gl, program);

        self.element_buffer = Some(
            gl.create_buffer()
                .map_err(anyhow::Error::msg)
                .context("failed to create element buffer")?,
        );
        self.vertex_buffer = Some(
            gl.create_buffer()
                .map_err(anyhow::Error::msg)
                .context("failed to create vertex buffer")?,
        );

        self.font_texture = Some(create_fonts_texture(gl, atlas)?);

        log::debug!("device objects created (program linked: {linked})");
        Ok(())
    }

    /// Releases every held object. Safe to call repeatedly.
    pub(crate) fn destroy(&mut self, gl: &mut G, atlas: &mut impl FontAtlas) {
        if let Some(b) = self.element_buffer.take() {
            gl.delete_buffer(b);
        }
        if let Some(b) = self.vertex_buffer.take() {
            gl.delete_buffer(b);
        }

        if let Some(s) = self.vert_shader.take() {
            if let Some(p) = self.program {
                gl.detach_shader(p, s);
            }
            gl.delete_shader(s);
        }
        if let Some(s) = self.frag_shader.take() {
            if let Some(p) = self.program {
                gl.detach_shader(p, s);
            }
            gl.delete_shader(s);
        }

        if let Some(p) = self.program.take() {
            gl.delete_program(p);
        }
        self.locations = AttribLocations::default();

        destroy_fonts_texture(gl, &mut self.font_texture, atlas);
    }
}
