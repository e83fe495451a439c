use bytemuck::{Pod, Zeroable};
use std::mem::{offset_of, size_of};

/// Interleaved GUI vertex: position, texture coordinate, packed color.
///
/// `col` holds four unsigned bytes in memory order R, G, B, A and is fed to
/// the shader normalized to `[0, 1]`.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct DrawVert {
    pub pos: [f32; 2],
    pub uv: [f32; 2],
    pub col: u32,
}

impl DrawVert {
    /// Byte layout used to point the vertex attributes at a vertex buffer.
    pub const LAYOUT: VertexLayout = VertexLayout {
        stride: size_of::<DrawVert>() as i32,
        pos_offset: offset_of!(DrawVert, pos) as i32,
        uv_offset: offset_of!(DrawVert, uv) as i32,
        col_offset: offset_of!(DrawVert, col) as i32,
    };

    #[inline]
    pub const fn new(pos: [f32; 2], uv: [f32; 2], col: u32) -> Self {
        Self { pos, uv, col }
    }

    /// Packs straight RGBA bytes into `col`.
    #[inline]
    pub const fn pack_color(r: u8, g: u8, b: u8, a: u8) -> u32 {
        u32::from_le_bytes([r, g, b, a])
    }
}

/// Per-vertex stride and field offsets, in bytes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct VertexLayout {
    pub stride: i32,
    pub pos_offset: i32,
    pub uv_offset: i32,
    pub col_offset: i32,
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
}

/// Index element type of a frame's index buffers.
///
/// Implemented for `u16` and `u32` only. The width is a type parameter of
/// [`DrawData`](super::DrawData), so every draw list of a frame shares it.
pub trait DrawIdx: Pod + Into<u32> + sealed::Sealed {
    /// Width of one index in bytes.
    const SIZE: usize;
    /// GL element type passed to `glDrawElements`.
    const GL_TYPE: u32;
}

impl DrawIdx for u16 {
    const SIZE: usize = 2;
    const GL_TYPE: u32 = glow::UNSIGNED_SHORT;
}

impl DrawIdx for u32 {
    const SIZE: usize = 4;
    const GL_TYPE: u32 = glow::UNSIGNED_INT;
}
