use std::cell::{Ref, RefCell};
use std::rc::Rc;
use std::time::Instant;

use crate::content::chapter::Chapter;
use crate::content::{Content, Drawable};
use crate::error::GenerateError;
use crate::layout::{Block, DrawContext};
use crate::model::{Margins, Positioning};
use crate::toc::{SharedToc, TableOfContents};

// US Letter, in points.
const DEFAULT_PAGE_WIDTH: f32 = 612.0;
const DEFAULT_PAGE_HEIGHT: f32 = 792.0;
const DEFAULT_PAGE_MARGIN: f32 = 72.0;

/// The owning document: page geometry, the running chapter counter, the
/// shared table-of-contents handle, and the top-level content sequence.
pub struct Composer {
    page_width: f32,
    page_height: f32,
    margins: Margins,

    chapters: u32,
    toc: SharedToc,
    contents: Vec<Content>,
}

impl Default for Composer {
    fn default() -> Self {
        Self::new()
    }
}

impl Composer {
    pub fn new() -> Self {
        Self {
            page_width: DEFAULT_PAGE_WIDTH,
            page_height: DEFAULT_PAGE_HEIGHT,
            margins: Margins::uniform(DEFAULT_PAGE_MARGIN),
            chapters: 0,
            toc: Rc::new(RefCell::new(TableOfContents::default())),
            contents: Vec::new(),
        }
    }

    pub fn with_page_size(page_width: f32, page_height: f32) -> Self {
        let mut composer = Self::new();
        composer.page_width = page_width;
        composer.page_height = page_height;
        composer
    }

    pub fn set_margins(&mut self, margins: Margins) {
        self.margins = margins;
    }

    pub fn margins(&self) -> Margins {
        self.margins
    }

    /// Usable content-area extent after page margins.
    pub fn content_area(&self) -> (f32, f32) {
        (
            self.page_width - self.margins.left - self.margins.right,
            self.page_height - self.margins.top - self.margins.bottom,
        )
    }

    /// Chapter factory: assigns the next number and hands the chapter the
    /// shared table-of-contents handle. Numbers are immutable and unique
    /// within this composer.
    pub fn new_chapter(&mut self, title: &str) -> Chapter {
        self.chapters += 1;
        Chapter::new(self.chapters, title, self.toc.clone())
    }

    /// Append a top-level content item. Every kind is acceptable here;
    /// nesting restrictions apply only inside sections.
    pub fn add(&mut self, content: Content) {
        self.contents.push(content);
    }

    pub fn content_count(&self) -> usize {
        self.contents.len()
    }

    pub fn toc(&self) -> Ref<'_, TableOfContents> {
        self.toc.borrow()
    }

    /// Flow all top-level content into page blocks.
    ///
    /// Same fold as the section algorithm, with two extra duties: granting
    /// each item its context (chapter margins, absolute positioning) and
    /// resynchronizing the page index to the emitted block count so that
    /// table-of-contents entries of later sections stay correct when leaf
    /// content overflows.
    pub fn generate(&self) -> Result<Vec<Block>, GenerateError> {
        let t0 = Instant::now();
        let (content_width, content_height) = self.content_area();
        let mut ctx = DrawContext::new(content_width, content_height);
        let mut blocks: Vec<Block> = Vec::new();

        for item in &self.contents {
            let granted = granted_context(item, ctx);
            match item.generate_page_blocks(granted) {
                Ok((new_blocks, returned)) => {
                    if new_blocks.is_empty() {
                        continue;
                    }

                    let mut rest = new_blocks.into_iter();
                    if let Some(first) = rest.next() {
                        match blocks.last_mut() {
                            Some(last) => last.merge(first),
                            None => blocks.push(first),
                        }
                    }
                    blocks.extend(rest);

                    ctx = restored_context(item, ctx, returned);
                    ctx.page = blocks.len().saturating_sub(1);
                }
                Err(err) => return Err(GenerateError::new(blocks, ctx, err.source)),
            }
        }

        log::info!(
            "Composed {} page(s), {} TOC entr(ies) in {:.1}ms",
            blocks.len(),
            self.toc.borrow().entries().len(),
            t0.elapsed().as_secs_f64() * 1000.0,
        );

        Ok(blocks)
    }
}

/// Context granted to one top-level item. Chapters may shrink it with their
/// own margins or redirect it entirely with absolute coordinates; everything
/// is granted the rest of the current page's vertical extent.
fn granted_context(item: &Content, ctx: DrawContext) -> DrawContext {
    let Content::Chapter(chapter) = item else {
        return ctx;
    };

    let mut granted = ctx;
    if chapter.positioning() == Positioning::Absolute {
        let (x, y) = chapter.pos();
        granted.x = x;
        granted.y = y;
        granted.width = ctx.page_width - x;
        granted.height = ctx.page_height - y;
        return granted;
    }

    let margins = chapter.margins();
    granted.x += margins.left;
    granted.width -= margins.left + margins.right;
    granted.y += margins.top;
    granted.height -= margins.top;
    granted
}

/// Flow context after one top-level item. Absolutely positioned chapters do
/// not disturb the flow cursor; relative chapters give back the horizontal
/// extent their margins took and leave their bottom margin behind.
fn restored_context(item: &Content, before: DrawContext, returned: DrawContext) -> DrawContext {
    let Content::Chapter(chapter) = item else {
        return returned;
    };

    if chapter.positioning() == Positioning::Absolute {
        return before;
    }

    let margins = chapter.margins();
    let mut ctx = returned;
    ctx.x = before.x;
    ctx.width = before.width;
    ctx.y += margins.bottom;
    ctx.height -= margins.bottom;
    ctx
}
