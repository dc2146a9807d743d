pub mod chapter;
pub mod image;
pub mod paragraph;

use crate::error::GenerateError;
use crate::layout::{Block, DrawContext};
use crate::model::Sizing;

use self::chapter::{Chapter, Subchapter};
use self::image::Image;
use self::paragraph::Paragraph;

pub type GenerateResult = Result<(Vec<Block>, DrawContext), GenerateError>;

/// The content contract: anything that can report its extent and paginate
/// itself given a drawing context.
///
/// `generate_page_blocks` returns the ordered page blocks the item produced
/// together with the updated context. On failure the `GenerateError` still
/// carries whatever blocks were accumulated and the last good context.
pub trait Drawable {
    fn height(&self) -> f32;
    fn width(&self) -> f32;

    fn sizing(&self) -> Sizing {
        Sizing::SpecifiedSize
    }

    fn generate_page_blocks(&self, ctx: DrawContext) -> GenerateResult;
}

/// The closed set of content kinds a document can hold. Insertion-time
/// validation in `Chapter::add` and `Subchapter::add` works against this set.
pub enum Content {
    Paragraph(Paragraph),
    Image(Image),
    Block(Block),
    Subchapter(Subchapter),
    Chapter(Chapter),
}

impl Drawable for Content {
    fn height(&self) -> f32 {
        match self {
            Content::Paragraph(p) => p.height(),
            Content::Image(i) => i.height(),
            Content::Block(b) => b.height(),
            Content::Subchapter(s) => s.height(),
            Content::Chapter(c) => c.height(),
        }
    }

    fn width(&self) -> f32 {
        match self {
            Content::Paragraph(p) => p.width(),
            Content::Image(i) => i.width(),
            Content::Block(b) => b.width(),
            Content::Subchapter(s) => s.width(),
            Content::Chapter(c) => c.width(),
        }
    }

    fn sizing(&self) -> Sizing {
        match self {
            Content::Paragraph(p) => p.sizing(),
            Content::Image(i) => i.sizing(),
            Content::Block(b) => b.sizing(),
            Content::Subchapter(s) => s.sizing(),
            Content::Chapter(c) => c.sizing(),
        }
    }

    fn generate_page_blocks(&self, ctx: DrawContext) -> GenerateResult {
        match self {
            Content::Paragraph(p) => p.generate_page_blocks(ctx),
            Content::Image(i) => i.generate_page_blocks(ctx),
            Content::Block(b) => b.generate_page_blocks(ctx),
            Content::Subchapter(s) => s.generate_page_blocks(ctx),
            Content::Chapter(c) => c.generate_page_blocks(ctx),
        }
    }
}
