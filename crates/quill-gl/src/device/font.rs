use anyhow::{ensure, Context, Result};

use crate::draw::TextureId;
use crate::gl::GlApi;

/// RGBA32 pixels of a font atlas, row-major, tightly packed.
#[derive(Debug, Copy, Clone)]
pub struct AtlasTexture<'a> {
    pub pixels: &'a [u8],
    pub width: i32,
    pub height: i32,
}

/// The GUI toolkit's font atlas, as seen by the renderer.
///
/// The renderer reads the rasterized atlas once when creating device objects
/// and registers the resulting texture id back, so draw commands that sample
/// the font carry it.
pub trait FontAtlas {
    /// Rasterized atlas as RGBA32. May build the atlas lazily.
    fn tex_data_rgba32(&mut self) -> AtlasTexture<'_>;

    /// Stores the GL texture id; [`TextureId::NONE`] after destruction.
    fn set_tex_id(&mut self, id: TextureId);
}

/// Owned RGBA32 atlas for hosts that rasterize fonts elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaAtlas {
    pixels: Vec<u8>,
    width: i32,
    height: i32,
    tex_id: TextureId,
}

impl RgbaAtlas {
    /// Wraps `width × height` RGBA32 pixels.
    pub fn new(width: i32, height: i32, pixels: Vec<u8>) -> Result<Self> {
        ensure!(width >= 0 && height >= 0, "negative atlas size {width}x{height}");
        let expected = width as usize * height as usize * 4;
        ensure!(
            pixels.len() == expected,
            "atlas {width}x{height} needs {expected} bytes, got {}",
            pixels.len()
        );

        Ok(Self {
            pixels,
            width,
            height,
            tex_id: TextureId::NONE,
        })
    }

    /// An atlas filled with a single color.
    pub fn filled(width: u16, height: u16, rgba: [u8; 4]) -> Self {
        let count = usize::from(width) * usize::from(height);
        Self {
            pixels: rgba.repeat(count),
            width: i32::from(width),
            height: i32::from(height),
            tex_id: TextureId::NONE,
        }
    }

    /// Id registered by the renderer, `NONE` when no texture exists.
    #[inline]
    pub fn tex_id(&self) -> TextureId {
        self.tex_id
    }

    #[inline]
    pub fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }
}

impl FontAtlas for RgbaAtlas {
    fn tex_data_rgba32(&mut self) -> AtlasTexture<'_> {
        AtlasTexture {
            pixels: &self.pixels,
            width: self.width,
            height: self.height,
        }
    }

    fn set_tex_id(&mut self, id: TextureId) {
        self.tex_id = id;
    }
}

/// Uploads the atlas into a new 2D texture and registers its id.
///
/// The previously bound 2D texture is rebound afterwards.
pub(crate) fn create_fonts_texture<G: GlApi>(
    gl: &mut G,
    atlas: &mut impl FontAtlas,
) -> Result<G::Texture> {
    let last_texture = gl.bound_texture_2d();

    let texture = gl
        .create_texture()
        .map_err(anyhow::Error::msg)
        .context("failed to create font texture")?;

    let tex = atlas.tex_data_rgba32();
    let (width, height) = (tex.width, tex.height);

    gl.bind_texture(glow::TEXTURE_2D, Some(texture));
    gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MIN_FILTER, glow::LINEAR as i32);
    gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MAG_FILTER, glow::LINEAR as i32);
    gl.pixel_store_i32(glow::UNPACK_ALIGNMENT, 1);
    gl.tex_image_2d(
        glow::TEXTURE_2D,
        0,
        glow::RGBA as i32,
        width,
        height,
        glow::RGBA,
        glow::UNSIGNED_BYTE,
        tex.pixels,
    );

    atlas.set_tex_id(gl.texture_id(texture));
    gl.bind_texture(glow::TEXTURE_2D, last_texture);

    log::debug!("font texture uploaded ({width}x{height})");
    Ok(texture)
}

/// Deletes the font texture, if any, and clears the atlas id.
pub(crate) fn destroy_fonts_texture<G: GlApi>(
    gl: &mut G,
    texture: &mut Option<G::Texture>,
    atlas: &mut impl FontAtlas,
) {
    if let Some(t) = texture.take() {
        gl.delete_texture(t);
        atlas.set_tex_id(TextureId::NONE);
    }
}
