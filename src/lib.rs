mod composer;
mod content;
mod error;
mod layout;
mod model;
mod toc;

pub use composer::Composer;
pub use content::chapter::{Chapter, Subchapter};
pub use content::image::Image;
pub use content::paragraph::Paragraph;
pub use content::{Content, Drawable, GenerateResult};
pub use error::{Error, GenerateError};
pub use layout::{Block, DrawContext, DrawOp};
pub use model::{Margins, Positioning, Sizing};
pub use toc::{TableOfContents, TocEntry};
