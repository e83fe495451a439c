use crate::coords::ClipRect;

/// Opaque texture handle carried by draw commands.
///
/// The renderer converts it back to a GL texture through
/// [`GlApi::texture_from_id`](crate::gl::GlApi::texture_from_id).
/// `TextureId::NONE` (zero) means "no texture".
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct TextureId(pub u64);

impl TextureId {
    pub const NONE: TextureId = TextureId(0);

    #[inline]
    pub fn is_none(self) -> bool {
        self.0 == 0
    }
}

/// Opaque token identifying a user callback.
///
/// The renderer never interprets it; it is handed to the host's
/// [`CallbackHandler`](crate::render::CallbackHandler).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct CallbackId(pub u64);

/// One drawable sub-range of a draw list's index buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCmd {
    /// Number of indices consumed by this command.
    pub elem_count: u32,
    /// Clip rectangle in display space.
    pub clip_rect: ClipRect,
    pub texture_id: TextureId,
    /// When set, the command is a user callback instead of a draw.
    pub callback: Option<CallbackId>,
}

impl DrawCmd {
    #[inline]
    pub fn new(elem_count: u32, clip_rect: ClipRect, texture_id: TextureId) -> Self {
        Self {
            elem_count,
            clip_rect,
            texture_id,
            callback: None,
        }
    }

    #[inline]
    pub fn callback(elem_count: u32, clip_rect: ClipRect, callback: CallbackId) -> Self {
        Self {
            elem_count,
            clip_rect,
            texture_id: TextureId::NONE,
            callback: Some(callback),
        }
    }
}
