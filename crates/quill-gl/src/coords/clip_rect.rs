use super::Vec2;

/// Clip rectangle stored as corners: `(left, top)` and `(right, bottom)`.
///
/// This matches how immediate-mode toolkits emit clip rects
/// (`x1, y1, x2, y2`) rather than origin + size.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ClipRect {
    pub min: Vec2,
    pub max: Vec2,
}

impl ClipRect {
    #[inline]
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            min: Vec2::new(left, top),
            max: Vec2::new(right, bottom),
        }
    }

    #[inline]
    pub fn left(self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn top(self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn right(self) -> f32 {
        self.max.x
    }

    #[inline]
    pub fn bottom(self) -> f32 {
        self.max.y
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.max.y - self.min.y
    }

    /// Multiplies both corners component-wise by `scale`.
    #[inline]
    pub fn scaled(self, scale: Vec2) -> Self {
        Self {
            min: self.min.scale(scale),
            max: self.max.scale(scale),
        }
    }

    /// Moves both corners by `offset`.
    #[inline]
    pub fn translated(self, offset: Vec2) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    /// Converts a framebuffer-space rect into GL scissor arguments
    /// `(x, y, width, height)`.
    ///
    /// Returns `None` when the rect lies entirely outside a framebuffer of
    /// `fb_width × fb_height`, i.e. unless `left < fb_width`,
    /// `top < fb_height`, `right >= 0` and `bottom >= 0`. Partially visible
    /// rects are passed through unclamped; GL clamps the scissor box itself.
    ///
    /// GL window coordinates start bottom-left, so `y = fb_height - bottom`.
    pub fn to_scissor(self, fb_width: i32, fb_height: i32) -> Option<[i32; 4]> {
        let visible = (self.left() as i32) < fb_width
            && (self.top() as i32) < fb_height
            && self.right() >= 0.0
            && self.bottom() >= 0.0;
        if !visible {
            return None;
        }

        Some([
            self.left() as i32,
            fb_height - self.bottom() as i32,
            self.width() as i32,
            self.height() as i32,
        ])
    }
}
