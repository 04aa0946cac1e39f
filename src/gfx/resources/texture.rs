use std::fmt;

/// Where a texture's pixels come from
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TextureSource {
    /// Image fetched by the engine, already joined onto the asset base URL
    Url(String),
    /// 1x1 RGB texture of a single color
    SolidRgb([u8; 3]),
}

impl TextureSource {
    pub fn white() -> Self {
        TextureSource::SolidRgb([255, 255, 255])
    }

}

/// The URL, or `rgb(r, g, b)` for solid colors
impl fmt::Display for TextureSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextureSource::Url(url) => write!(f, "{}", url),
            TextureSource::SolidRgb([r, g, b]) => write!(f, "rgb({}, {}, {})", r, g, b),
        }
    }
}

/// Engine texture returned by [`RenderContext::load_texture`](crate::gfx::context::RenderContext::load_texture)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u64);
