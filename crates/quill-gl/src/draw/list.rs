use std::fmt;

use super::{DrawCmd, DrawIdx, DrawVert, VertexLayout};

/// One GPU-uploadable batch: vertices, indices and the commands consuming them.
///
/// Invariants (checked by [`DrawList::validate`]):
/// - every index references a vertex of this list
/// - the commands' element counts sum to the index count, so walking the
///   commands in order partitions the index buffer exactly
#[derive(Debug, Clone, PartialEq)]
pub struct DrawList<I: DrawIdx = u16> {
    pub vtx_buffer: Vec<DrawVert>,
    pub idx_buffer: Vec<I>,
    pub commands: Vec<DrawCmd>,
}

impl<I: DrawIdx> Default for DrawList<I> {
    fn default() -> Self {
        Self {
            vtx_buffer: Vec::new(),
            idx_buffer: Vec::new(),
            commands: Vec::new(),
        }
    }
}

impl<I: DrawIdx> DrawList<I> {
    pub fn new(vtx_buffer: Vec<DrawVert>, idx_buffer: Vec<I>, commands: Vec<DrawCmd>) -> Self {
        Self {
            vtx_buffer,
            idx_buffer,
            commands,
        }
    }

    /// Byte layout of `vtx_buffer` entries.
    #[inline]
    pub fn layout(&self) -> VertexLayout {
        DrawVert::LAYOUT
    }

    /// Vertex buffer as raw bytes, ready for upload.
    #[inline]
    pub fn vtx_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vtx_buffer)
    }

    /// Index buffer as raw bytes, ready for upload.
    #[inline]
    pub fn idx_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.idx_buffer)
    }

    /// Total number of indices referenced by the commands.
    pub fn command_elem_total(&self) -> usize {
        self.commands.iter().map(|c| c.elem_count as usize).sum()
    }

    /// Checks the list invariants.
    pub fn validate(&self) -> Result<(), InvalidDrawList> {
        let consumed = self.command_elem_total();
        if consumed != self.idx_buffer.len() {
            return Err(InvalidDrawList::ElemCountMismatch {
                consumed,
                available: self.idx_buffer.len(),
            });
        }

        let vertices = self.vtx_buffer.len();
        if let Some((position, &idx)) = self
            .idx_buffer
            .iter()
            .enumerate()
            .find(|&(_, &idx)| Into::<u32>::into(idx) as usize >= vertices)
        {
            return Err(InvalidDrawList::IndexOutOfRange {
                position,
                index: Into::<u32>::into(idx),
                vertices,
            });
        }

        Ok(())
    }
}

/// Violated [`DrawList`] invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidDrawList {
    /// Commands consume a different number of indices than the buffer holds.
    ElemCountMismatch { consumed: usize, available: usize },
    /// An index points past the end of the vertex buffer.
    IndexOutOfRange { position: usize, index: u32, vertices: usize },
}

impl fmt::Display for InvalidDrawList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ElemCountMismatch { consumed, available } => write!(
                f,
                "draw commands consume {consumed} indices but the index buffer holds {available}"
            ),
            Self::IndexOutOfRange { position, index, vertices } => write!(
                f,
                "index {index} at position {position} exceeds vertex count {vertices}"
            ),
        }
    }
}

impl std::error::Error for InvalidDrawList {}
