//! 2D texture wrapper.
//!
//! Decodes an image file with the `image` crate (the demos ship PNGs),
//! uploads it as RGBA8 with a full mipmap chain, clamp-to-edge wrapping
//! and trilinear minification, matching the sampling the demos' shaders
//! assume.

use glow::HasContext;
use nova_render::{nova_error, Error, Result};
use std::path::Path;
use std::rc::Rc;

const SOURCE: &str = "nova::opengl::Texture";

/// An immutable GL 2D texture.
pub struct Texture {
    gl: Rc<glow::Context>,
    raw: glow::Texture,
    width: u32,
    height: u32,
}

impl Texture {
    /// Decode an image file and upload it.
    pub fn from_file(gl: Rc<glow::Context>, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let image = image::open(path).map_err(|err| {
            nova_error!(SOURCE, "cannot decode {}: {}", path.display(), err);
            Error::TextureDecode(err.to_string())
        })?;
        let image = image.to_rgba8();
        Self::from_pixels(gl, image.width(), image.height(), image.as_raw())
    }

    /// Upload raw RGBA8 pixels, row-major, top row first.
    pub fn from_pixels(
        gl: Rc<glow::Context>,
        width: u32,
        height: u32,
        pixels: &[u8],
    ) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(Error::InvalidResource(format!(
                "pixel buffer length mismatch: expected {} bytes for {}x{} RGBA, got {}",
                expected,
                width,
                height,
                pixels.len()
            )));
        }
        if width == 0 || height == 0 {
            return Err(Error::InvalidResource(
                "zero-sized texture".to_string(),
            ));
        }

        unsafe {
            let raw = gl.create_texture().map_err(Error::BackendError)?;
            gl.bind_texture(glow::TEXTURE_2D, Some(raw));
            gl.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                glow::RGBA8 as i32,
                width as i32,
                height as i32,
                0,
                glow::RGBA,
                glow::UNSIGNED_BYTE,
                glow::PixelUnpackData::Slice(Some(pixels)),
            );
            gl.generate_mipmap(glow::TEXTURE_2D);
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_WRAP_S,
                glow::CLAMP_TO_EDGE as i32,
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_WRAP_T,
                glow::CLAMP_TO_EDGE as i32,
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MIN_FILTER,
                glow::LINEAR_MIPMAP_LINEAR as i32,
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MAG_FILTER,
                glow::LINEAR as i32,
            );

            Ok(Self {
                gl,
                raw,
                width,
                height,
            })
        }
    }

    /// Bind to the given texture unit.
    pub fn bind(&self, unit: u32) {
        unsafe {
            self.gl.active_texture(glow::TEXTURE0 + unit);
            self.gl.bind_texture(glow::TEXTURE_2D, Some(self.raw));
        }
    }

    /// Texture width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Texture height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }
}

impl Drop for Texture {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_texture(self.raw);
        }
    }
}
