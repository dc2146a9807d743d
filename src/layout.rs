use crate::content::{Drawable, GenerateResult};
use crate::error::{Error, GenerateError};

/// Cursor state threaded through every pagination call.
///
/// Passed in as a snapshot and returned out as a snapshot: content item `i+1`
/// observes exactly the context left by item `i`, never a shared mutable
/// cursor. `page_width`/`page_height` are the usable content-area extent (the
/// composer subtracts its page margins up front); `y` is measured from the
/// top of the content area and `height` is what remains below the cursor on
/// the current page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawContext {
    /// Current page index, zero-based. Only ever increases.
    pub page: usize,
    pub x: f32,
    pub y: f32,
    /// Horizontal space available to the current item.
    pub width: f32,
    /// Vertical space remaining on the current page.
    pub height: f32,
    pub page_width: f32,
    pub page_height: f32,
}

impl DrawContext {
    /// Fresh context at the top of page 0 of a content area.
    pub fn new(page_width: f32, page_height: f32) -> Self {
        Self {
            page: 0,
            x: 0.0,
            y: 0.0,
            width: page_width,
            height: page_height,
            page_width,
            page_height,
        }
    }

    /// Move the cursor to the top of a fresh page. Does not touch `page`;
    /// page accounting belongs to the enclosing section fold or composer.
    pub(crate) fn reset_to_new_page(&mut self) {
        self.y = 0.0;
        self.height = self.page_height;
    }
}

/// Abstract draw operation, positioned in content-area coordinates with `y`
/// measured downwards from the top. Actual rasterization is a consumer
/// concern.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Text {
        x: f32,
        y: f32,
        text: String,
        font_size: f32,
    },
    Image {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
}

impl DrawOp {
    fn bottom(&self) -> f32 {
        match self {
            DrawOp::Text { y, font_size, .. } => y + font_size,
            DrawOp::Image { y, height, .. } => y + height,
        }
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        match self {
            DrawOp::Text { x, y, .. } => {
                *x += dx;
                *y += dy;
            }
            DrawOp::Image { x, y, .. } => {
                *x += dx;
                *y += dy;
            }
        }
    }
}

/// A page-scoped render buffer.
///
/// Two uses share this type: the page blocks emitted by pagination, and
/// user-assembled pre-rendered blocks added to a section as content. In both
/// cases `height` is the declared capacity and `used` tracks the bottom of
/// the lowest operation drawn so far.
#[derive(Clone, Debug)]
pub struct Block {
    width: f32,
    height: f32,
    used: f32,
    ops: Vec<DrawOp>,
}

impl Block {
    /// A pre-rendered block with a declared extent. As a content item it
    /// occupies `height` vertical points regardless of what was drawn in it.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            used: height,
            ops: Vec::new(),
        }
    }

    /// Page block for the context's current page. The cursor starts at
    /// `ctx.y`: space above belongs to previously generated content.
    pub(crate) fn page(ctx: &DrawContext) -> Self {
        Self {
            width: ctx.page_width,
            height: ctx.page_height,
            used: ctx.y,
            ops: Vec::new(),
        }
    }

    pub fn push(&mut self, op: DrawOp) {
        self.used = self.used.max(op.bottom());
        self.ops.push(op);
    }

    /// Absorb a directly following block representing the same physical page.
    /// The follower was laid out with this block's cursor already accounted
    /// for, so its operations carry final coordinates.
    pub fn merge(&mut self, following: Block) {
        self.used = self.used.max(following.used);
        self.ops.extend(following.ops);
    }

    fn translated(&self, dx: f32, dy: f32) -> Vec<DrawOp> {
        let mut ops = self.ops.clone();
        for op in &mut ops {
            op.translate(dx, dy);
        }
        ops
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn used_height(&self) -> f32 {
        self.used
    }
}

impl Drawable for Block {
    fn height(&self) -> f32 {
        self.height
    }

    fn width(&self) -> f32 {
        self.width
    }

    fn generate_page_blocks(&self, ctx: DrawContext) -> GenerateResult {
        if self.height > ctx.page_height {
            return Err(GenerateError::new(
                Vec::new(),
                ctx,
                Error::Layout(format!(
                    "block height {:.1} exceeds page height {:.1}",
                    self.height, ctx.page_height
                )),
            ));
        }

        let mut ctx = ctx;
        let mut blocks = Vec::new();
        if self.height > ctx.height {
            // Does not fit below the cursor: emit the partial current page
            // and continue on a fresh one.
            blocks.push(Block::page(&ctx));
            ctx.reset_to_new_page();
        }

        let mut page = Block::page(&ctx);
        for op in self.translated(ctx.x, ctx.y) {
            page.push(op);
        }
        page.used = page.used.max(ctx.y + self.height);
        blocks.push(page);

        ctx.y += self.height;
        ctx.height -= self.height;
        Ok((blocks, ctx))
    }
}
