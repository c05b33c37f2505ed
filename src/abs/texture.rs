//! Structs and functions for handling textures.
//!
//! The module provides the [`Texture`] struct which is a CPU representation of a GPU texture,
//! and [`TextureOptions`] which carries the sampling parameters chosen per texture.

use std::{path::Path, sync::Arc};

use glow::HasContext;
use image::{DynamicImage, GenericImageView};

/// Wrap and filter parameters applied when a texture is created.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextureOptions {
    pub wrap: u32,
    pub min_filter: u32,
    pub mag_filter: u32,
    /// Flip rows on load so that texture coordinate (0, 0) is the bottom left of the image.
    pub flip_vertically: bool,
}

impl Default for TextureOptions {
    fn default() -> Self {
        Self {
            wrap: glow::REPEAT,
            min_filter: glow::LINEAR_MIPMAP_LINEAR,
            mag_filter: glow::LINEAR,
            flip_vertically: true,
        }
    }
}

impl TextureOptions {
    pub fn wrap(mut self, wrap: u32) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn filters(mut self, min_filter: u32, mag_filter: u32) -> Self {
        self.min_filter = min_filter;
        self.mag_filter = mag_filter;
        self
    }
}

/// Picks the GL pixel format matching the decoded image.
///
/// Images with an alpha channel are uploaded as RGBA, everything else as RGB.
pub fn pixel_format(image: &DynamicImage) -> u32 {
    if image.color().has_alpha() {
        glow::RGBA
    } else {
        glow::RGB
    }
}

/// Represents a texture stored on the GPU side.
pub struct Texture {
    gl: Arc<glow::Context>,
    id: glow::Texture,
    width: u32,
    height: u32,
}

impl Texture {
    /// Decodes the image at `path` and uploads it.
    pub fn load<P: AsRef<Path>>(
        gl: &Arc<glow::Context>,
        path: P,
        options: TextureOptions,
    ) -> Result<Self, String> {
        let path = path.as_ref();
        let image = image::open(path).map_err(|e| format!("{}: {}", path.display(), e))?;
        let texture = Self::new(gl, &image, options)?;
        log::debug!(
            "Loaded texture {} ({}x{})",
            path.display(),
            texture.width,
            texture.height
        );
        Ok(texture)
    }

    /// Creates a new texture from the given [`image::DynamicImage`].
    pub fn new(
        gl: &Arc<glow::Context>,
        image: &DynamicImage,
        options: TextureOptions,
    ) -> Result<Self, String> {
        let image = if options.flip_vertically {
            image.flipv()
        } else {
            image.clone()
        };
        let (width, height) = image.dimensions();
        let format = pixel_format(&image);
        let data = if format == glow::RGBA {
            image.to_rgba8().into_raw()
        } else {
            image.to_rgb8().into_raw()
        };

        unsafe {
            let texture = gl.create_texture()?;
            gl.bind_texture(glow::TEXTURE_2D, Some(texture));
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_S, options.wrap as i32);
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_T, options.wrap as i32);
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MIN_FILTER,
                options.min_filter as i32,
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MAG_FILTER,
                options.mag_filter as i32,
            );
            // RGB rows are not 4-byte aligned for odd widths.
            gl.pixel_store_i32(glow::UNPACK_ALIGNMENT, 1);
            gl.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                format as i32,
                width as i32,
                height as i32,
                0,
                format,
                glow::UNSIGNED_BYTE,
                glow::PixelUnpackData::Slice(Some(data.as_slice())),
            );
            gl.generate_mipmap(glow::TEXTURE_2D);
            gl.bind_texture(glow::TEXTURE_2D, None);

            Ok(Self {
                gl: Arc::clone(gl),
                id: texture,
                width,
                height,
            })
        }
    }

    /// Binds the texture to the specified texture unit.
    pub fn bind(&self, unit: u32) {
        unsafe {
            self.gl.active_texture(glow::TEXTURE0 + unit);
            self.gl.bind_texture(glow::TEXTURE_2D, Some(self.id));
        }
    }
}

impl Drop for Texture {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_texture(self.id);
        }
    }
}

/// Loads a texture, logging a failure instead of returning it.
///
/// The practice programs keep running without a texture that failed to load,
/// sampling from whatever is bound to that unit instead.
pub fn load_or_log<P: AsRef<Path>>(
    gl: &Arc<glow::Context>,
    path: P,
    options: TextureOptions,
    label: &str,
) -> Option<Texture> {
    match Texture::load(gl, path, options) {
        Ok(texture) => Some(texture),
        Err(e) => {
            log::error!("Failed to load {}: {}", label, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{RgbImage, RgbaImage};

    #[test]
    fn rgb_images_upload_as_rgb() {
        let image = DynamicImage::ImageRgb8(RgbImage::new(2, 2));
        assert_eq!(pixel_format(&image), glow::RGB);
    }

    #[test]
    fn alpha_images_upload_as_rgba() {
        let image = DynamicImage::ImageRgba8(RgbaImage::new(2, 2));
        assert_eq!(pixel_format(&image), glow::RGBA);
    }

    #[test]
    fn options_builder() {
        let options = TextureOptions::default()
            .wrap(glow::MIRRORED_REPEAT)
            .filters(glow::NEAREST, glow::LINEAR);
        assert_eq!(options.wrap, glow::MIRRORED_REPEAT);
        assert_eq!(options.min_filter, glow::NEAREST);
        assert_eq!(options.mag_filter, glow::LINEAR);
        assert!(options.flip_vertically);
    }
}
