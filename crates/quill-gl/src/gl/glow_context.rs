use std::num::NonZeroU32;
use std::rc::Rc;

use glow::HasContext;

use super::GlApi;
use crate::draw::TextureId;

type Shader = <glow::Context as HasContext>::Shader;
type Program = <glow::Context as HasContext>::Program;
type Texture = <glow::Context as HasContext>::Texture;
type Buffer = <glow::Context as HasContext>::Buffer;
type UniformLocation = <glow::Context as HasContext>::UniformLocation;

/// [`GlApi`] over a `glow` context (desktop GL, GLES).
///
/// The context is shared through `Rc` so the host can keep issuing its own GL
/// calls, including from draw callbacks via [`GlowContext::context`].
pub struct GlowContext {
    gl: Rc<glow::Context>,
}

impl GlowContext {
    /// Wraps a glow context.
    ///
    /// # Safety
    /// The context must be current on the calling thread whenever a method of
    /// this adapter (or of a `Renderer` owning it) is invoked, and must stay
    /// alive for as long as the adapter is used.
    pub unsafe fn new(gl: Rc<glow::Context>) -> Self {
        Self { gl }
    }

    /// Returns the underlying glow context.
    pub fn context(&self) -> &Rc<glow::Context> {
        &self.gl
    }
}

// SAFETY (all blocks below): `GlowContext::new` requires a current context;
// arguments are plain values or handles produced by this same context.
impl GlApi for GlowContext {
    type Shader = Shader;
    type Program = Program;
    type Texture = Texture;
    type Buffer = Buffer;
    type UniformLocation = UniformLocation;

    fn get_parameter_i32(&self, parameter: u32) -> i32 {
        unsafe { self.gl.get_parameter_i32(parameter) }
    }

    fn get_parameter_i32_4(&self, parameter: u32) -> [i32; 4] {
        let mut out = [0; 4];
        unsafe { self.gl.get_parameter_i32_slice(parameter, &mut out) };
        out
    }

    fn is_enabled(&self, capability: u32) -> bool {
        unsafe { self.gl.is_enabled(capability) }
    }

    fn current_program(&self) -> Option<Program> {
        unsafe { self.gl.get_parameter_program(glow::CURRENT_PROGRAM) }
    }

    fn bound_texture_2d(&self) -> Option<Texture> {
        unsafe { self.gl.get_parameter_texture(glow::TEXTURE_BINDING_2D) }
    }

    fn bound_array_buffer(&self) -> Option<Buffer> {
        unsafe { self.gl.get_parameter_buffer(glow::ARRAY_BUFFER_BINDING) }
    }

    fn enable(&mut self, capability: u32) {
        unsafe { self.gl.enable(capability) }
    }

    fn disable(&mut self, capability: u32) {
        unsafe { self.gl.disable(capability) }
    }

    fn active_texture(&mut self, unit: u32) {
        unsafe { self.gl.active_texture(unit) }
    }

    fn blend_equation(&mut self, mode: u32) {
        unsafe { self.gl.blend_equation(mode) }
    }

    fn blend_equation_separate(&mut self, mode_rgb: u32, mode_alpha: u32) {
        unsafe { self.gl.blend_equation_separate(mode_rgb, mode_alpha) }
    }

    fn blend_func(&mut self, src: u32, dst: u32) {
        unsafe { self.gl.blend_func(src, dst) }
    }

    fn blend_func_separate(&mut self, src_rgb: u32, dst_rgb: u32, src_alpha: u32, dst_alpha: u32) {
        unsafe {
            self.gl
                .blend_func_separate(src_rgb, dst_rgb, src_alpha, dst_alpha)
        }
    }

    fn viewport(&mut self, x: i32, y: i32, width: i32, height: i32) {
        unsafe { self.gl.viewport(x, y, width, height) }
    }

    fn scissor(&mut self, x: i32, y: i32, width: i32, height: i32) {
        unsafe { self.gl.scissor(x, y, width, height) }
    }

    fn create_shader(&mut self, shader_type: u32) -> Result<Shader, String> {
        unsafe { self.gl.create_shader(shader_type) }
    }

    fn shader_source(&mut self, shader: Shader, source: &str) {
        unsafe { self.gl.shader_source(shader, source) }
    }

    fn compile_shader(&mut self, shader: Shader) {
        unsafe { self.gl.compile_shader(shader) }
    }

    fn shader_compile_status(&self, shader: Shader) -> bool {
        unsafe { self.gl.get_shader_compile_status(shader) }
    }

    fn shader_info_log(&self, shader: Shader) -> String {
        unsafe { self.gl.get_shader_info_log(shader) }
    }

    fn delete_shader(&mut self, shader: Shader) {
        unsafe { self.gl.delete_shader(shader) }
    }

    fn create_program(&mut self) -> Result<Program, String> {
        unsafe { self.gl.create_program() }
    }

    fn attach_shader(&mut self, program: Program, shader: Shader) {
        unsafe { self.gl.attach_shader(program, shader) }
    }

    fn detach_shader(&mut self, program: Program, shader: Shader) {
        unsafe { self.gl.detach_shader(program, shader) }
    }

    fn link_program(&mut self, program: Program) {
        unsafe { self.gl.link_program(program) }
    }

    fn program_link_status(&self, program: Program) -> bool {
        unsafe { self.gl.get_program_link_status(program) }
    }

    fn program_info_log(&self, program: Program) -> String {
        unsafe { self.gl.get_program_info_log(program) }
    }

    fn delete_program(&mut self, program: Program) {
        unsafe { self.gl.delete_program(program) }
    }

    fn use_program(&mut self, program: Option<Program>) {
        unsafe { self.gl.use_program(program) }
    }

    fn uniform_location(&self, program: Program, name: &str) -> Option<UniformLocation> {
        unsafe { self.gl.get_uniform_location(program, name) }
    }

    fn attrib_location(&self, program: Program, name: &str) -> Option<u32> {
        unsafe { self.gl.get_attrib_location(program, name) }
    }

    fn uniform_1_i32(&mut self, location: Option<&UniformLocation>, value: i32) {
        unsafe { self.gl.uniform_1_i32(location, value) }
    }

    fn uniform_matrix_4_f32(&mut self, location: Option<&UniformLocation>, value: &[f32; 16]) {
        unsafe { self.gl.uniform_matrix_4_f32_slice(location, false, value) }
    }

    fn create_buffer(&mut self) -> Result<Buffer, String> {
        unsafe { self.gl.create_buffer() }
    }

    fn delete_buffer(&mut self, buffer: Buffer) {
        unsafe { self.gl.delete_buffer(buffer) }
    }

    fn bind_buffer(&mut self, target: u32, buffer: Option<Buffer>) {
        unsafe { self.gl.bind_buffer(target, buffer) }
    }

    fn buffer_data(&mut self, target: u32, data: &[u8], usage: u32) {
        unsafe { self.gl.buffer_data_u8_slice(target, data, usage) }
    }

    fn enable_vertex_attrib_array(&mut self, index: u32) {
        unsafe { self.gl.enable_vertex_attrib_array(index) }
    }

    fn vertex_attrib_pointer(
        &mut self,
        index: u32,
        size: i32,
        data_type: u32,
        normalized: bool,
        stride: i32,
        offset: i32,
    ) {
        unsafe {
            self.gl
                .vertex_attrib_pointer_f32(index, size, data_type, normalized, stride, offset)
        }
    }

    fn create_texture(&mut self) -> Result<Texture, String> {
        unsafe { self.gl.create_texture() }
    }

    fn delete_texture(&mut self, texture: Texture) {
        unsafe { self.gl.delete_texture(texture) }
    }

    fn bind_texture(&mut self, target: u32, texture: Option<Texture>) {
        unsafe { self.gl.bind_texture(target, texture) }
    }

    fn tex_parameter_i32(&mut self, target: u32, parameter: u32, value: i32) {
        unsafe { self.gl.tex_parameter_i32(target, parameter, value) }
    }

    fn pixel_store_i32(&mut self, parameter: u32, value: i32) {
        unsafe { self.gl.pixel_store_i32(parameter, value) }
    }

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
    ) {
        unsafe {
            self.gl.tex_image_2d(
                target,
                level,
                internal_format,
                width,
                height,
                0,
                format,
                data_type,
                glow::PixelUnpackData::Slice(Some(pixels)),
            )
        }
    }

    fn texture_id(&self, texture: Texture) -> TextureId {
        TextureId(u64::from(texture.0.get()))
    }

    fn texture_from_id(&self, id: TextureId) -> Option<Texture> {
        u32::try_from(id.0)
            .ok()
            .and_then(NonZeroU32::new)
            .map(glow::NativeTexture)
    }

    fn draw_elements(&mut self, mode: u32, count: i32, element_type: u32, offset: i32) {
        unsafe { self.gl.draw_elements(mode, count, element_type, offset) }
    }
}
