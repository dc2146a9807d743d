/// Offsets applied around an item when it is drawn, in points.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Margins {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Margins {
    pub fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    pub fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Positioning {
    /// Flows with the document cursor.
    #[default]
    Relative,
    /// Drawn at stored coordinates, outside the flow.
    Absolute,
}

/// How an item wants its box granted by the parent layout engine.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Sizing {
    /// The item occupies exactly its self-reported extent.
    #[default]
    SpecifiedSize,
    /// The item asks for the rest of the current page's vertical extent
    /// before it begins pagination.
    OccupyAvailableSpace,
}
