use std::io::Cursor;

use crate::content::{Drawable, GenerateResult};
use crate::error::{Error, GenerateError};
use crate::layout::{Block, DrawContext, DrawOp};

/// Pixels are interpreted at 96 dpi when deriving display points.
const PX_TO_PT: f32 = 72.0 / 96.0;

/// An image content item. Only the dimensions matter for pagination; the
/// encoded bytes themselves are a renderer concern.
pub struct Image {
    pixel_width: u32,
    pixel_height: u32,
    display_width: f32,
    display_height: f32,
}

impl Image {
    /// Decode the pixel dimensions of PNG or JPEG bytes. The display size
    /// defaults to the pixel size at 96 dpi.
    pub fn from_bytes(data: &[u8]) -> Result<Self, Error> {
        let reader = image::ImageReader::new(Cursor::new(data))
            .with_guessed_format()
            .map_err(|e| Error::Image(format!("cannot sniff image format: {e}")))?;
        let (pixel_width, pixel_height) = reader
            .into_dimensions()
            .map_err(|e| Error::Image(format!("cannot decode image dimensions: {e}")))?;

        Ok(Self {
            pixel_width,
            pixel_height,
            display_width: pixel_width as f32 * PX_TO_PT,
            display_height: pixel_height as f32 * PX_TO_PT,
        })
    }

    pub fn pixel_dimensions(&self) -> (u32, u32) {
        (self.pixel_width, self.pixel_height)
    }

    pub fn display_width(&self) -> f32 {
        self.display_width
    }

    pub fn display_height(&self) -> f32 {
        self.display_height
    }

    /// Rescale the display size to `width` points, preserving aspect ratio.
    pub fn scale_to_width(&mut self, width: f32) {
        let ratio = width / self.display_width;
        self.display_width = width;
        self.display_height *= ratio;
    }

    /// Rescale the display size to `height` points, preserving aspect ratio.
    pub fn scale_to_height(&mut self, height: f32) {
        let ratio = height / self.display_height;
        self.display_height = height;
        self.display_width *= ratio;
    }
}

impl Drawable for Image {
    fn height(&self) -> f32 {
        self.display_height
    }

    fn width(&self) -> f32 {
        self.display_width
    }

    fn generate_page_blocks(&self, ctx: DrawContext) -> GenerateResult {
        if self.display_height > ctx.page_height {
            return Err(GenerateError::new(
                Vec::new(),
                ctx,
                Error::Layout(format!(
                    "image height {:.1} exceeds page height {:.1}",
                    self.display_height, ctx.page_height
                )),
            ));
        }
        if self.display_width > ctx.width {
            log::debug!(
                "image width {:.1} exceeds context width {:.1}; drawing anyway",
                self.display_width,
                ctx.width
            );
        }

        let mut ctx = ctx;
        let mut blocks = Vec::new();
        if self.display_height > ctx.height {
            // Emit the partial current page and place the image on a fresh one.
            blocks.push(Block::page(&ctx));
            ctx.reset_to_new_page();
        }

        let mut page = Block::page(&ctx);
        page.push(DrawOp::Image {
            x: ctx.x,
            y: ctx.y,
            width: self.display_width,
            height: self.display_height,
        });
        blocks.push(page);

        ctx.y += self.display_height;
        ctx.height -= self.display_height;
        Ok((blocks, ctx))
    }
}
