//! Recording [`GlApi`] used by unit tests.
//!
//! Tracks the pipeline state the renderer touches, owns fake GL objects and
//! logs every call (queries included) so tests can assert on exact sequences.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

use super::GlApi;
use crate::draw::TextureId;

/// State the renderer must leave untouched across a frame.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TrackedState {
    pub active_texture: u32,
    pub program: Option<u32>,
    /// `TEXTURE_2D` binding per texture unit.
    pub textures_2d: BTreeMap<u32, u32>,
    pub array_buffer: Option<u32>,
    pub viewport: [i32; 4],
    pub scissor_box: [i32; 4],
    pub blend_equation: [u32; 2],
    /// src_rgb, dst_rgb, src_alpha, dst_alpha
    pub blend_func: [u32; 4],
    pub enabled: BTreeSet<u32>,
}

impl Default for TrackedState {
    fn default() -> Self {
        Self {
            active_texture: glow::TEXTURE0,
            program: None,
            textures_2d: BTreeMap::new(),
            array_buffer: None,
            viewport: [0, 0, 0, 0],
            scissor_box: [0, 0, 0, 0],
            blend_equation: [glow::FUNC_ADD, glow::FUNC_ADD],
            blend_func: [glow::ONE, glow::ZERO, glow::ONE, glow::ZERO],
            enabled: BTreeSet::new(),
        }
    }
}

impl TrackedState {
    /// A host state that differs from the overlay state in every category.
    pub fn unusual_host() -> Self {
        Self {
            active_texture: glow::TEXTURE0 + 3,
            program: Some(9001),
            textures_2d: BTreeMap::from([(glow::TEXTURE0, 9002), (glow::TEXTURE0 + 3, 9003)]),
            array_buffer: Some(9004),
            viewport: [5, 6, 640, 480],
            scissor_box: [1, 2, 3, 4],
            blend_equation: [glow::FUNC_SUBTRACT, glow::MAX],
            blend_func: [glow::ONE, glow::ONE, glow::ZERO, glow::DST_ALPHA],
            enabled: BTreeSet::from([glow::CULL_FACE, glow::DEPTH_TEST]),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    Query(u32),
    Enable(u32),
    Disable(u32),
    ActiveTexture(u32),
    BlendEquation(u32),
    BlendEquationSeparate(u32, u32),
    BlendFunc(u32, u32),
    BlendFuncSeparate(u32, u32, u32, u32),
    Viewport([i32; 4]),
    Scissor([i32; 4]),
    UseProgram(Option<u32>),
    Uniform1i(Option<u32>, i32),
    UniformMatrix4(Option<u32>, [f32; 16]),
    BindBuffer(u32, Option<u32>),
    BufferData { target: u32, len: usize, usage: u32 },
    EnableVertexAttribArray(u32),
    VertexAttribPointer {
        index: u32,
        size: i32,
        data_type: u32,
        normalized: bool,
        stride: i32,
        offset: i32,
    },
    BindTexture(u32, Option<u32>),
    DrawElements { mode: u32, count: i32, element_type: u32, offset: i32 },
    /// Object lifecycle (create/compile/link/delete/...).
    Object(&'static str),
}

/// A draw call together with the state it was issued under.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DrawRecord {
    pub count: i32,
    pub element_type: u32,
    pub offset: i32,
    /// Active texture unit and its `TEXTURE_2D` binding at draw time.
    pub unit: u32,
    pub texture: Option<u32>,
    pub scissor: [i32; 4],
    pub element_buffer: Option<u32>,
}

#[derive(Debug, Clone)]
pub(crate) struct MockShader {
    pub shader_type: u32,
    pub source: String,
    pub compiled: bool,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct MockProgram {
    pub attached: Vec<u32>,
    pub linked: bool,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct MockTexture {
    pub width: i32,
    pub height: i32,
    pub pixel_bytes: usize,
    pub params: BTreeMap<u32, i32>,
}

#[derive(Debug, Default)]
pub(crate) struct RecordingGl {
    pub state: TrackedState,
    pub element_buffer: Option<u32>,
    pub attrib_arrays: BTreeSet<u32>,
    pub unpack_alignment: i32,

    pub shaders: BTreeMap<u32, MockShader>,
    pub programs: BTreeMap<u32, MockProgram>,
    pub buffers: BTreeMap<u32, Vec<u8>>,
    pub textures: BTreeMap<u32, MockTexture>,

    /// Shader type whose compilation fails.
    pub fail_compile: Option<u32>,
    pub fail_link: bool,
    pub fail_create_buffer: bool,

    pub draws: Vec<DrawRecord>,
    calls: RefCell<Vec<Call>>,
    next_name: u32,
}

impl RecordingGl {
    pub fn new() -> Self {
        Self {
            unpack_alignment: 4,
            next_name: 1,
            ..Self::default()
        }
    }

    pub fn with_state(state: TrackedState) -> Self {
        Self {
            state,
            ..Self::new()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn clear_log(&mut self) {
        self.calls.borrow_mut().clear();
        self.draws.clear();
    }

    /// True when no fake GL object is alive.
    pub fn no_live_objects(&self) -> bool {
        self.shaders.is_empty()
            && self.programs.is_empty()
            && self.buffers.is_empty()
            && self.textures.is_empty()
    }

    fn log(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn gen_name(&mut self) -> u32 {
        let name = self.next_name;
        self.next_name += 1;
        name
    }

    fn bound_buffer(&self, target: u32) -> Option<u32> {
        match target {
            glow::ARRAY_BUFFER => self.state.array_buffer,
            glow::ELEMENT_ARRAY_BUFFER => self.element_buffer,
            _ => None,
        }
    }
}

impl GlApi for RecordingGl {
    type Shader = u32;
    type Program = u32;
    type Texture = u32;
    type Buffer = u32;
    type UniformLocation = u32;

    // ── state queries ─────────────────────────────────────────────────────

    fn get_parameter_i32(&self, parameter: u32) -> i32 {
        self.log(Call::Query(parameter));
        let s = &self.state;
        let v = match parameter {
            glow::ACTIVE_TEXTURE => s.active_texture,
            glow::BLEND_EQUATION_RGB => s.blend_equation[0],
            glow::BLEND_EQUATION_ALPHA => s.blend_equation[1],
            glow::BLEND_SRC_RGB => s.blend_func[0],
            glow::BLEND_DST_RGB => s.blend_func[1],
            glow::BLEND_SRC_ALPHA => s.blend_func[2],
            glow::BLEND_DST_ALPHA => s.blend_func[3],
            _ => 0,
        };
        v as i32
    }

    fn get_parameter_i32_4(&self, parameter: u32) -> [i32; 4] {
        self.log(Call::Query(parameter));
        match parameter {
            glow::VIEWPORT => self.state.viewport,
            glow::SCISSOR_BOX => self.state.scissor_box,
            _ => [0; 4],
        }
    }

    fn is_enabled(&self, capability: u32) -> bool {
        self.log(Call::Query(capability));
        self.state.enabled.contains(&capability)
    }

    fn current_program(&self) -> Option<u32> {
        self.log(Call::Query(glow::CURRENT_PROGRAM));
        self.state.program
    }

    fn bound_texture_2d(&self) -> Option<u32> {
        self.log(Call::Query(glow::TEXTURE_BINDING_2D));
        self.state.textures_2d.get(&self.state.active_texture).copied()
    }

    fn bound_array_buffer(&self) -> Option<u32> {
        self.log(Call::Query(glow::ARRAY_BUFFER_BINDING));
        self.state.array_buffer
    }

    // ── fixed-function state ──────────────────────────────────────────────

    fn enable(&mut self, capability: u32) {
        self.log(Call::Enable(capability));
        self.state.enabled.insert(capability);
    }

    fn disable(&mut self, capability: u32) {
        self.log(Call::Disable(capability));
        self.state.enabled.remove(&capability);
    }

    fn active_texture(&mut self, unit: u32) {
        self.log(Call::ActiveTexture(unit));
        self.state.active_texture = unit;
    }

    fn blend_equation(&mut self, mode: u32) {
        self.log(Call::BlendEquation(mode));
        self.state.blend_equation = [mode, mode];
    }

    fn blend_equation_separate(&mut self, mode_rgb: u32, mode_alpha: u32) {
        self.log(Call::BlendEquationSeparate(mode_rgb, mode_alpha));
        self.state.blend_equation = [mode_rgb, mode_alpha];
    }

    fn blend_func(&mut self, src: u32, dst: u32) {
        self.log(Call::BlendFunc(src, dst));
        self.state.blend_func = [src, dst, src, dst];
    }

    fn blend_func_separate(&mut self, src_rgb: u32, dst_rgb: u32, src_alpha: u32, dst_alpha: u32) {
        self.log(Call::BlendFuncSeparate(src_rgb, dst_rgb, src_alpha, dst_alpha));
        self.state.blend_func = [src_rgb, dst_rgb, src_alpha, dst_alpha];
    }

    fn viewport(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.log(Call::Viewport([x, y, width, height]));
        self.state.viewport = [x, y, width, height];
    }

    fn scissor(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.log(Call::Scissor([x, y, width, height]));
        self.state.scissor_box = [x, y, width, height];
    }

    // ── shaders & programs ────────────────────────────────────────────────

    fn create_shader(&mut self, shader_type: u32) -> Result<u32, String> {
        self.log(Call::Object("create_shader"));
        let name = self.gen_name();
        self.shaders.insert(
            name,
            MockShader {
                shader_type,
                source: String::new(),
                compiled: false,
            },
        );
        Ok(name)
    }

    fn shader_source(&mut self, shader: u32, source: &str) {
        self.log(Call::Object("shader_source"));
        if let Some(s) = self.shaders.get_mut(&shader) {
            s.source = source.to_owned();
        }
    }

    fn compile_shader(&mut self, shader: u32) {
        self.log(Call::Object("compile_shader"));
        let fail = self.fail_compile;
        if let Some(s) = self.shaders.get_mut(&shader) {
            s.compiled = fail != Some(s.shader_type) && s.source.starts_with("#version");
        }
    }

    fn shader_compile_status(&self, shader: u32) -> bool {
        self.log(Call::Object("shader_compile_status"));
        self.shaders.get(&shader).is_some_and(|s| s.compiled)
    }

    fn shader_info_log(&self, shader: u32) -> String {
        self.log(Call::Object("shader_info_log"));
        match self.shaders.get(&shader) {
            Some(s) if !s.compiled => "0:1(1): error: syntax error".to_owned(),
            _ => String::new(),
        }
    }

    fn delete_shader(&mut self, shader: u32) {
        self.log(Call::Object("delete_shader"));
        self.shaders.remove(&shader);
    }

    fn create_program(&mut self) -> Result<u32, String> {
        self.log(Call::Object("create_program"));
        let name = self.gen_name();
        self.programs.insert(name, MockProgram::default());
        Ok(name)
    }

    fn attach_shader(&mut self, program: u32, shader: u32) {
        self.log(Call::Object("attach_shader"));
        if let Some(p) = self.programs.get_mut(&program) {
            p.attached.push(shader);
        }
    }

    fn detach_shader(&mut self, program: u32, shader: u32) {
        self.log(Call::Object("detach_shader"));
        if let Some(p) = self.programs.get_mut(&program) {
            p.attached.retain(|&s| s != shader);
        }
    }

    fn link_program(&mut self, program: u32) {
        self.log(Call::Object("link_program"));
        let all_compiled = self
            .programs
            .get(&program)
            .map(|p| {
                p.attached.len() == 2
                    && p.attached
                        .iter()
                        .all(|s| self.shaders.get(s).is_some_and(|s| s.compiled))
            })
            .unwrap_or(false);
        let fail = self.fail_link;
        if let Some(p) = self.programs.get_mut(&program) {
            p.linked = all_compiled && !fail;
        }
    }

    fn program_link_status(&self, program: u32) -> bool {
        self.log(Call::Object("program_link_status"));
        self.programs.get(&program).is_some_and(|p| p.linked)
    }

    fn program_info_log(&self, program: u32) -> String {
        self.log(Call::Object("program_info_log"));
        match self.programs.get(&program) {
            Some(p) if !p.linked => "error: linking with uncompiled shader".to_owned(),
            _ => String::new(),
        }
    }

    fn delete_program(&mut self, program: u32) {
        self.log(Call::Object("delete_program"));
        self.programs.remove(&program);
    }

    fn use_program(&mut self, program: Option<u32>) {
        self.log(Call::UseProgram(program));
        self.state.program = program;
    }

    fn uniform_location(&self, program: u32, name: &str) -> Option<u32> {
        self.log(Call::Object("uniform_location"));
        if !self.programs.get(&program).is_some_and(|p| p.linked) {
            return None;
        }
        match name {
            "Texture" => Some(0),
            "ProjMtx" => Some(1),
            _ => None,
        }
    }

    fn attrib_location(&self, program: u32, name: &str) -> Option<u32> {
        self.log(Call::Object("attrib_location"));
        if !self.programs.get(&program).is_some_and(|p| p.linked) {
            return None;
        }
        match name {
            "Position" => Some(0),
            "UV" => Some(1),
            "Color" => Some(2),
            _ => None,
        }
    }

    fn uniform_1_i32(&mut self, location: Option<&u32>, value: i32) {
        self.log(Call::Uniform1i(location.copied(), value));
    }

    fn uniform_matrix_4_f32(&mut self, location: Option<&u32>, value: &[f32; 16]) {
        self.log(Call::UniformMatrix4(location.copied(), *value));
    }

    // ── buffers & vertex attributes ───────────────────────────────────────

    fn create_buffer(&mut self) -> Result<u32, String> {
        self.log(Call::Object("create_buffer"));
        if self.fail_create_buffer {
            return Err("out of memory".to_owned());
        }
        let name = self.gen_name();
        self.buffers.insert(name, Vec::new());
        Ok(name)
    }

    fn delete_buffer(&mut self, buffer: u32) {
        self.log(Call::Object("delete_buffer"));
        self.buffers.remove(&buffer);
        if self.state.array_buffer == Some(buffer) {
            self.state.array_buffer = None;
        }
        if self.element_buffer == Some(buffer) {
            self.element_buffer = None;
        }
    }

    fn bind_buffer(&mut self, target: u32, buffer: Option<u32>) {
        self.log(Call::BindBuffer(target, buffer));
        match target {
            glow::ARRAY_BUFFER => self.state.array_buffer = buffer,
            glow::ELEMENT_ARRAY_BUFFER => self.element_buffer = buffer,
            _ => {}
        }
    }

    fn buffer_data(&mut self, target: u32, data: &[u8], usage: u32) {
        self.log(Call::BufferData {
            target,
            len: data.len(),
            usage,
        });
        if let Some(buf) = self.bound_buffer(target).and_then(|b| self.buffers.get_mut(&b)) {
            *buf = data.to_vec();
        }
    }

    fn enable_vertex_attrib_array(&mut self, index: u32) {
        self.log(Call::EnableVertexAttribArray(index));
        self.attrib_arrays.insert(index);
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
        self.log(Call::VertexAttribPointer {
            index,
            size,
            data_type,
            normalized,
            stride,
            offset,
        });
    }

    // ── textures ──────────────────────────────────────────────────────────

    fn create_texture(&mut self) -> Result<u32, String> {
        self.log(Call::Object("create_texture"));
        let name = self.gen_name();
        self.textures.insert(name, MockTexture::default());
        Ok(name)
    }

    fn delete_texture(&mut self, texture: u32) {
        self.log(Call::Object("delete_texture"));
        self.textures.remove(&texture);
        self.state.textures_2d.retain(|_, &mut t| t != texture);
    }

    fn bind_texture(&mut self, target: u32, texture: Option<u32>) {
        self.log(Call::BindTexture(target, texture));
        if target != glow::TEXTURE_2D {
            return;
        }
        let unit = self.state.active_texture;
        match texture {
            Some(t) => {
                self.state.textures_2d.insert(unit, t);
            }
            None => {
                self.state.textures_2d.remove(&unit);
            }
        }
    }

    fn tex_parameter_i32(&mut self, target: u32, parameter: u32, value: i32) {
        self.log(Call::Object("tex_parameter_i32"));
        if target != glow::TEXTURE_2D {
            return;
        }
        let bound = self.state.textures_2d.get(&self.state.active_texture).copied();
        if let Some(t) = bound.and_then(|t| self.textures.get_mut(&t)) {
            t.params.insert(parameter, value);
        }
    }

    fn pixel_store_i32(&mut self, parameter: u32, value: i32) {
        self.log(Call::Object("pixel_store_i32"));
        if parameter == glow::UNPACK_ALIGNMENT {
            self.unpack_alignment = value;
        }
    }

    fn tex_image_2d(
        &mut self,
        target: u32,
        _level: i32,
        _internal_format: i32,
        width: i32,
        height: i32,
        _format: u32,
        _data_type: u32,
        pixels: &[u8],
    ) {
        self.log(Call::Object("tex_image_2d"));
        if target != glow::TEXTURE_2D {
            return;
        }
        let bound = self.state.textures_2d.get(&self.state.active_texture).copied();
        if let Some(t) = bound.and_then(|t| self.textures.get_mut(&t)) {
            t.width = width;
            t.height = height;
            t.pixel_bytes = pixels.len();
        }
    }

    fn texture_id(&self, texture: u32) -> TextureId {
        TextureId(u64::from(texture))
    }

    fn texture_from_id(&self, id: TextureId) -> Option<u32> {
        u32::try_from(id.0).ok().filter(|&n| n != 0)
    }

    // ── drawing ───────────────────────────────────────────────────────────

    fn draw_elements(&mut self, mode: u32, count: i32, element_type: u32, offset: i32) {
        self.log(Call::DrawElements {
            mode,
            count,
            element_type,
            offset,
        });
        self.draws.push(DrawRecord {
            count,
            element_type,
            offset,
            unit: self.state.active_texture,
            texture: self.state.textures_2d.get(&self.state.active_texture).copied(),
            scissor: self.state.scissor_box,
            element_buffer: self.element_buffer,
        });
    }
}
