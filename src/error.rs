use std::fmt;

use crate::layout::{Block, DrawContext};

#[derive(Debug)]
pub enum Error {
    /// Content cannot be placed in the available layout area.
    Layout(String),
    /// Image bytes could not be decoded.
    Image(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Layout(msg) => write!(f, "layout error: {msg}"),
            Error::Image(msg) => write!(f, "image error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

/// A failed block-generation call.
///
/// Generation aborts on the first failing content item, but the caller still
/// receives everything produced up to that point: the accumulated page blocks
/// and the context as of the last successfully generated item.
#[derive(Debug)]
pub struct GenerateError {
    /// Blocks accumulated before the failure.
    pub blocks: Vec<Block>,
    /// Context left by the last item that generated successfully.
    pub ctx: DrawContext,
    pub source: Error,
}

impl GenerateError {
    pub(crate) fn new(blocks: Vec<Block>, ctx: DrawContext, source: Error) -> Self {
        Self { blocks, ctx, source }
    }
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "page block generation failed after {} block(s): {}",
            self.blocks.len(),
            self.source
        )
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}
