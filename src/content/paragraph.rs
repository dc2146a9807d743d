use crate::content::{Drawable, GenerateResult};
use crate::error::{Error, GenerateError};
use crate::layout::{Block, DrawContext, DrawOp};

/// Coarse glyph advance as a fraction of the font size. Real font metrics are
/// a renderer concern; pagination only needs a stable estimate.
const CHAR_WIDTH_RATIO: f32 = 0.5;

const DEFAULT_FONT_SIZE: f32 = 10.0;
const DEFAULT_LINE_HEIGHT: f32 = 1.15;

/// A wrapped text block.
pub struct Paragraph {
    text: String,
    font_size: f32,
    /// Line height as a multiple of the font size.
    line_height: f32,
    /// Width used for self-reported size. Generation always wraps at the
    /// context width; without this the paragraph reports itself as one line.
    wrap_width: Option<f32>,
}

impl Paragraph {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font_size: DEFAULT_FONT_SIZE,
            line_height: DEFAULT_LINE_HEIGHT,
            wrap_width: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn set_font_size(&mut self, size: f32) {
        self.font_size = size;
    }

    pub fn set_line_height(&mut self, multiplier: f32) {
        self.line_height = multiplier;
    }

    pub fn set_wrap_width(&mut self, width: f32) {
        self.wrap_width = Some(width);
    }

    fn char_width(&self) -> f32 {
        self.font_size * CHAR_WIDTH_RATIO
    }

    fn line_height_pt(&self) -> f32 {
        self.font_size * self.line_height
    }

    fn text_width(&self, s: &str) -> f32 {
        s.chars().count() as f32 * self.char_width()
    }

    /// Greedy word wrap at `max_width`. Words wider than a full line are
    /// force-split at character boundaries so layout always makes progress.
    fn wrap_lines(&self, max_width: f32) -> Vec<String> {
        let max_chars = ((max_width / self.char_width()).floor() as usize).max(1);
        let mut lines: Vec<String> = Vec::new();
        let mut current = String::new();

        for word in self.text.split_whitespace() {
            let word_len = word.chars().count();

            if word_len > max_chars {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                let chars: Vec<char> = word.chars().collect();
                for chunk in chars.chunks(max_chars) {
                    lines.push(chunk.iter().collect());
                }
                // The last forced chunk stays open for following words.
                current = lines.pop().unwrap_or_default();
                continue;
            }

            if current.is_empty() {
                current.push_str(word);
            } else if current.chars().count() + 1 + word_len <= max_chars {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
            }
        }

        if !current.is_empty() {
            lines.push(current);
        }
        lines
    }
}

impl Drawable for Paragraph {
    /// Height of the paragraph wrapped at its own `wrap_width` (one line when
    /// no wrap width is set).
    fn height(&self) -> f32 {
        let lines = match self.wrap_width {
            Some(w) => self.wrap_lines(w).len(),
            None => usize::from(!self.text.trim().is_empty()),
        };
        lines as f32 * self.line_height_pt()
    }

    fn width(&self) -> f32 {
        match self.wrap_width {
            Some(w) => self
                .wrap_lines(w)
                .iter()
                .map(|l| self.text_width(l))
                .fold(0.0, f32::max),
            None => {
                let normalized: Vec<&str> = self.text.split_whitespace().collect();
                self.text_width(&normalized.join(" "))
            }
        }
    }

    fn generate_page_blocks(&self, ctx: DrawContext) -> GenerateResult {
        if self.text.trim().is_empty() {
            return Ok((Vec::new(), ctx));
        }
        if ctx.width < self.char_width() {
            return Err(GenerateError::new(
                Vec::new(),
                ctx,
                Error::Layout(format!(
                    "context width {:.1} cannot fit a single character",
                    ctx.width
                )),
            ));
        }

        let line_h = self.line_height_pt();
        if line_h > ctx.page_height {
            return Err(GenerateError::new(
                Vec::new(),
                ctx,
                Error::Layout(format!(
                    "line height {line_h:.1} exceeds page height {:.1}",
                    ctx.page_height
                )),
            ));
        }

        let mut ctx = ctx;
        let mut blocks = Vec::new();
        let mut page = Block::page(&ctx);

        for line in self.wrap_lines(ctx.width) {
            if line_h > ctx.height {
                blocks.push(page);
                ctx.reset_to_new_page();
                page = Block::page(&ctx);
            }
            page.push(DrawOp::Text {
                x: ctx.x,
                y: ctx.y,
                text: line,
                font_size: self.font_size,
            });
            ctx.y += line_h;
            ctx.height -= line_h;
        }
        blocks.push(page);

        Ok((blocks, ctx))
    }
}
