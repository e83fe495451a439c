use crate::coords::Vec2;

use super::{DrawIdx, DrawList};

/// Everything needed to render one frame of GUI.
///
/// `display_pos`/`display_size` describe the visible display-space rectangle
/// (top-left and extent). `framebuffer_scale` maps display units to
/// framebuffer pixels (e.g. `2.0` on a HiDPI surface).
#[derive(Debug, Clone, PartialEq)]
pub struct DrawData<I: DrawIdx = u16> {
    pub display_pos: Vec2,
    pub display_size: Vec2,
    pub framebuffer_scale: Vec2,
    pub draw_lists: Vec<DrawList<I>>,
}

impl<I: DrawIdx> DrawData<I> {
    pub fn new(display_pos: Vec2, display_size: Vec2, framebuffer_scale: Vec2) -> Self {
        Self {
            display_pos,
            display_size,
            framebuffer_scale,
            draw_lists: Vec::new(),
        }
    }

    #[inline]
    pub fn push_list(&mut self, list: DrawList<I>) {
        self.draw_lists.push(list);
    }

    /// Framebuffer size in pixels (display size × scale, truncated).
    #[inline]
    pub fn framebuffer_size(&self) -> (i32, i32) {
        let size = self.display_size.scale(self.framebuffer_scale);
        (size.x as i32, size.y as i32)
    }

    /// Multiplies every command's clip rect by `scale`, in place.
    pub fn scale_clip_rects(&mut self, scale: Vec2) {
        for cmd in self.draw_lists.iter_mut().flat_map(|l| l.commands.iter_mut()) {
            cmd.clip_rect = cmd.clip_rect.scaled(scale);
        }
    }

    pub fn total_vtx_count(&self) -> usize {
        self.draw_lists.iter().map(|l| l.vtx_buffer.len()).sum()
    }

    pub fn total_idx_count(&self) -> usize {
        self.draw_lists.iter().map(|l| l.idx_buffer.len()).sum()
    }
}
