//! Tree Layout
//!
//! Proportional geometry of the tree icon for a given pixel size.
//! - Trunk: brown bar, horizontally centered, resting S/10 above the bottom edge
//! - Crown: circle of radius S/3, S/4 below the top edge
//! - Highlight: small circle inside the crown for a 3D look
//!
//! All divisions are integer divisions so every size maps to whole pixels.

/// Inclusive pixel bounding box; both corners are painted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Rect {
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Painted width in pixels
    pub fn width(&self) -> i32 {
        self.x1 - self.x0 + 1
    }

    /// Painted height in pixels
    pub fn height(&self) -> i32 {
        self.y1 - self.y0 + 1
    }

    /// Center of the continuous region `[x0, x1 + 1) x [y0, y1 + 1)`
    pub fn center(&self) -> (f32, f32) {
        (
            (self.x0 + self.x1 + 1) as f32 / 2.0,
            (self.y0 + self.y1 + 1) as f32 / 2.0,
        )
    }
}

/// Part of the tree a shape belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// Rectangular trunk
    Trunk,
    /// Circular crown
    Crown,
    /// Small circle drawn over the crown
    Highlight,
}

impl ShapeKind {
    /// Whether this part is filled as an ellipse (otherwise a rectangle)
    pub fn is_round(&self) -> bool {
        matches!(self, ShapeKind::Crown | ShapeKind::Highlight)
    }
}

/// Geometry of every tree part for one icon size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeLayout {
    pub size: u32,
    pub trunk: Rect,
    pub crown: Rect,
    pub highlight: Rect,
}

impl TreeLayout {
    pub fn for_size(size: u32) -> Self {
        let s = size as i32;

        let trunk_width = (s / 8).max(2);
        let trunk_height = s / 3;
        let tree_radius = s / 3;

        let trunk_x = s / 2 - trunk_width / 2;
        let trunk_y = s - trunk_height - s / 10;
        let trunk = Rect::new(
            trunk_x,
            trunk_y,
            trunk_x + trunk_width,
            trunk_y + trunk_height,
        );

        let crown_x = s / 2 - tree_radius;
        let crown_y = s / 4;
        let crown = Rect::new(
            crown_x,
            crown_y,
            crown_x + tree_radius * 2,
            crown_y + tree_radius * 2,
        );

        // The "radius" is really the diameter of the highlight circle
        let highlight_radius = tree_radius / 2;
        let highlight_x = s / 2 - highlight_radius / 2;
        let highlight_y = s / 3;
        let highlight = Rect::new(
            highlight_x,
            highlight_y,
            highlight_x + highlight_radius,
            highlight_y + highlight_radius,
        );

        Self {
            size,
            trunk,
            crown,
            highlight,
        }
    }

    /// Shapes in paint order; later shapes overwrite earlier ones
    pub fn shapes(&self) -> [(ShapeKind, Rect); 3] {
        [
            (ShapeKind::Trunk, self.trunk),
            (ShapeKind::Crown, self.crown),
            (ShapeKind::Highlight, self.highlight),
        ]
    }
}

#[cfg(test)]
impl Rect {
    fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x0 && x <= self.x1 && y >= self.y0 && y <= self.y1
    }

    /// Whether `other` lies entirely within this box
    fn encloses(&self, other: &Rect) -> bool {
        self.contains(other.x0, other.y0) && self.contains(other.x1, other.y1)
    }
}
