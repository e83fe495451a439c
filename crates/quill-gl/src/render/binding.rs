use crate::device::DeviceObjects;
use crate::draw::{DrawIdx, DrawList, VertexLayout};
use crate::gl::GlApi;

/// Vertex/element buffer setup for one draw list.
///
/// Applied once when the list starts and again whenever a callback asks for
/// the render state to be reset.
pub(crate) struct ListBinding<'a, G: GlApi> {
    objects: &'a DeviceObjects<G>,
    layout: VertexLayout,
    vertices: &'a [u8],
    indices: &'a [u8],
}

impl<'a, G: GlApi> ListBinding<'a, G> {
    pub fn new<I: DrawIdx>(objects: &'a DeviceObjects<G>, list: &'a DrawList<I>) -> Self {
        Self {
            objects,
            layout: list.layout(),
            vertices: list.vtx_bytes(),
            indices: list.idx_bytes(),
        }
    }

    pub fn enable_attribs(&self, gl: &mut G) {
        for index in self.objects.locations().vertex_attribs() {
            gl.enable_vertex_attrib_array(index);
        }
    }

    /// Streams the list's vertices and indices and points the attributes at them.
    pub fn bind(&self, gl: &mut G) {
        let l = self.objects.locations();
        let layout = self.layout;

        gl.bind_buffer(glow::ARRAY_BUFFER, self.objects.vertex_buffer());
        gl.buffer_data(glow::ARRAY_BUFFER, self.vertices, glow::STREAM_DRAW);

        if let Some(index) = l.position {
            gl.vertex_attrib_pointer(
                index,
                2,
                glow::FLOAT,
                false,
                layout.stride,
                layout.pos_offset,
            );
        }
        if let Some(index) = l.uv {
            gl.vertex_attrib_pointer(
                index,
                2,
                glow::FLOAT,
                false,
                layout.stride,
                layout.uv_offset,
            );
        }
        if let Some(index) = l.color {
            gl.vertex_attrib_pointer(
                index,
                4,
                glow::UNSIGNED_BYTE,
                true,
                layout.stride,
                layout.col_offset,
            );
        }

        gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, self.objects.element_buffer());
        gl.buffer_data(glow::ELEMENT_ARRAY_BUFFER, self.indices, glow::STREAM_DRAW);
    }

    pub fn reset(&self, gl: &mut G) {
        gl.active_texture(glow::TEXTURE0);
        self.enable_attribs(gl);
        self.bind(gl);
    }
}
