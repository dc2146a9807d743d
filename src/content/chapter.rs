use crate::content::{Content, Drawable, GenerateResult};
use crate::layout::DrawContext;
use crate::model::{Margins, Positioning, Sizing};
use crate::toc::SharedToc;

use super::paragraph::Paragraph;

const CHAPTER_HEADING_SIZE: f32 = 16.0;
const SUBCHAPTER_HEADING_SIZE: f32 = 14.0;

/// A numbered, titled section: one heading paragraph plus ordered nested
/// content. Chapters are created through `Composer::new_chapter`, which
/// assigns the number and hands over the table-of-contents handle.
pub struct Chapter {
    number: u32,
    title: String,
    heading: Paragraph,

    subchapters: u32,
    contents: Vec<Content>,

    show_numbering: bool,
    include_in_toc: bool,

    positioning: Positioning,
    x_pos: f32,
    y_pos: f32,

    margins: Margins,
    sizing: Sizing,

    toc: SharedToc,
}

impl Chapter {
    pub(crate) fn new(number: u32, title: &str, toc: SharedToc) -> Self {
        let mut heading = Paragraph::new(format!("{number}. {title}"));
        heading.set_font_size(CHAPTER_HEADING_SIZE);

        Self {
            number,
            title: title.to_string(),
            heading,
            subchapters: 0,
            contents: Vec::new(),
            show_numbering: true,
            include_in_toc: true,
            positioning: Positioning::Relative,
            x_pos: 0.0,
            y_pos: 0.0,
            margins: Margins::default(),
            sizing: Sizing::OccupyAvailableSpace,
            toc,
        }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn heading(&self) -> &Paragraph {
        &self.heading
    }

    /// Show or hide the number prefix in the heading. The heading text is
    /// regenerated from the stored number and title.
    pub fn set_show_numbering(&mut self, show: bool) {
        if show {
            self.heading.set_text(format!("{}. {}", self.number, self.title));
        } else {
            self.heading.set_text(self.title.clone());
        }
        self.show_numbering = show;
    }

    pub fn show_numbering(&self) -> bool {
        self.show_numbering
    }

    pub fn set_include_in_toc(&mut self, include: bool) {
        self.include_in_toc = include;
    }

    pub fn include_in_toc(&self) -> bool {
        self.include_in_toc
    }

    /// Switch to absolute positioning at the given coordinates.
    pub fn set_pos(&mut self, x: f32, y: f32) {
        self.positioning = Positioning::Absolute;
        self.x_pos = x;
        self.y_pos = y;
    }

    pub fn positioning(&self) -> Positioning {
        self.positioning
    }

    pub fn pos(&self) -> (f32, f32) {
        (self.x_pos, self.y_pos)
    }

    pub fn set_margins(&mut self, margins: Margins) {
        self.margins = margins;
    }

    pub fn margins(&self) -> Margins {
        self.margins
    }

    /// Number of accepted content items. `add` never signals rejection, so
    /// callers that need confirmation compare this before and after.
    pub fn content_count(&self) -> usize {
        self.contents.len()
    }

    /// Create the next subchapter of this chapter. The subchapter is a
    /// free-standing value until it is added back as content.
    pub fn new_subchapter(&mut self, title: &str) -> Subchapter {
        self.subchapters += 1;
        Subchapter::new(self.number, self.subchapters, title, self.toc.clone())
    }

    /// Append a content item. Chapters cannot be nested: a chapter argument
    /// is logged and dropped without modifying state.
    pub fn add(&mut self, content: Content) {
        match content {
            Content::Chapter(other) if other.number == self.number => {
                log::debug!("cannot add chapter {} to itself", self.number);
            }
            Content::Chapter(other) => {
                log::debug!(
                    "cannot add chapter {} to chapter {}: chapters do not nest",
                    other.number,
                    self.number
                );
            }
            other => self.contents.push(other),
        }
    }
}

impl Drawable for Chapter {
    /// Sum of the nested content heights. The heading is deliberately not
    /// part of the total.
    fn height(&self) -> f32 {
        self.contents.iter().map(|c| c.height()).sum()
    }

    /// Maximum nested content width, 0.0 when empty.
    fn width(&self) -> f32 {
        self.contents.iter().map(|c| c.width()).fold(0.0, f32::max)
    }

    fn sizing(&self) -> Sizing {
        self.sizing
    }

    fn generate_page_blocks(&self, ctx: DrawContext) -> GenerateResult {
        let entry = self
            .include_in_toc
            .then_some((self.title.as_str(), self.number, 0));
        generate_section_blocks(&self.heading, &self.contents, entry, &self.toc, ctx)
    }
}

/// A second-level section. Registered at indent level 1; holds leaf content
/// only (no chapters, no further subchapters).
pub struct Subchapter {
    chapter_number: u32,
    number: u32,
    title: String,
    heading: Paragraph,

    contents: Vec<Content>,

    show_numbering: bool,
    include_in_toc: bool,

    toc: SharedToc,
}

impl Subchapter {
    fn new(chapter_number: u32, number: u32, title: &str, toc: SharedToc) -> Self {
        let mut heading = Paragraph::new(format!("{chapter_number}.{number} {title}"));
        heading.set_font_size(SUBCHAPTER_HEADING_SIZE);

        Self {
            chapter_number,
            number,
            title: title.to_string(),
            heading,
            contents: Vec::new(),
            show_numbering: true,
            include_in_toc: true,
            toc,
        }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn heading(&self) -> &Paragraph {
        &self.heading
    }

    pub fn set_show_numbering(&mut self, show: bool) {
        if show {
            self.heading
                .set_text(format!("{}.{} {}", self.chapter_number, self.number, self.title));
        } else {
            self.heading.set_text(self.title.clone());
        }
        self.show_numbering = show;
    }

    pub fn show_numbering(&self) -> bool {
        self.show_numbering
    }

    pub fn set_include_in_toc(&mut self, include: bool) {
        self.include_in_toc = include;
    }

    pub fn include_in_toc(&self) -> bool {
        self.include_in_toc
    }

    pub fn content_count(&self) -> usize {
        self.contents.len()
    }

    /// Append a leaf content item. Section content is rejected the same way
    /// chapter nesting is: logged and dropped.
    pub fn add(&mut self, content: Content) {
        match content {
            Content::Chapter(other) => {
                log::debug!(
                    "cannot add chapter {} to subchapter {}.{}",
                    other.number,
                    self.chapter_number,
                    self.number
                );
            }
            Content::Subchapter(other) => {
                log::debug!(
                    "cannot add subchapter {}.{} to subchapter {}.{}: subchapters do not nest",
                    other.chapter_number,
                    other.number,
                    self.chapter_number,
                    self.number
                );
            }
            other => self.contents.push(other),
        }
    }
}

impl Drawable for Subchapter {
    fn height(&self) -> f32 {
        self.contents.iter().map(|c| c.height()).sum()
    }

    fn width(&self) -> f32 {
        self.contents.iter().map(|c| c.width()).fold(0.0, f32::max)
    }

    fn sizing(&self) -> Sizing {
        Sizing::OccupyAvailableSpace
    }

    fn generate_page_blocks(&self, ctx: DrawContext) -> GenerateResult {
        let entry = self
            .include_in_toc
            .then_some((self.title.as_str(), self.number, 1));
        generate_section_blocks(&self.heading, &self.contents, entry, &self.toc, ctx)
    }
}

/// The section fold shared by chapters and subchapters: a depth-first,
/// left-to-right fold over nested content.
///
/// The accumulated block sequence only grows and the context's page index
/// only increases across the call. Each item's first block is a same-page
/// continuation merged into the last accumulated block; its remaining blocks
/// are pages the item had to start itself.
fn generate_section_blocks(
    heading: &Paragraph,
    contents: &[Content],
    toc_entry: Option<(&str, u32, u32)>,
    toc: &SharedToc,
    ctx: DrawContext,
) -> GenerateResult {
    let (mut blocks, mut ctx) = heading.generate_page_blocks(ctx)?;
    if blocks.len() > 1 {
        // The heading did not fit and moved to a new page block.
        ctx.page += 1;
    }

    if let Some((title, number, level)) = toc_entry {
        // Recorded at the page where the heading actually starts.
        toc.borrow_mut().add(title, number, level, ctx.page);
    }

    for item in contents {
        match item.generate_page_blocks(ctx) {
            Ok((new_blocks, item_ctx)) => {
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

                ctx = item_ctx;
            }
            Err(err) => {
                // Fatal: no partial-item recovery, no skipping to siblings.
                return Err(crate::error::GenerateError::new(blocks, ctx, err.source));
            }
        }
    }

    Ok((blocks, ctx))
}
