/// Screen edge a drawer slides in from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Top,
    #[default]
    Right,
    Bottom,
    Left,
}

/// Axis the panel travels along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Direction {
    pub const fn axis(self) -> Axis {
        match self {
            Direction::Top | Direction::Bottom => Axis::Vertical,
            Direction::Left | Direction::Right => Axis::Horizontal,
        }
    }

    /// Viewport extent along the slide axis.
    pub const fn main_extent(self, width: u16, height: u16) -> u16 {
        match self.axis() {
            Axis::Horizontal => width,
            Axis::Vertical => height,
        }
    }

    /// Viewport extent perpendicular to the slide axis. The panel always
    /// spans the full viewport on this axis.
    pub const fn cross_extent(self, width: u16, height: u16) -> u16 {
        match self.axis() {
            Axis::Horizontal => height,
            Axis::Vertical => width,
        }
    }

    /// Offset rest value at which a panel of the given extent sits fully
    /// off-screen. Zero is the fully revealed position; the sign points
    /// toward the panel's home edge.
    pub fn hidden_offset(self, extent: u16) -> f32 {
        match self {
            Direction::Top | Direction::Left => -(extent as f32),
            Direction::Bottom | Direction::Right => extent as f32,
        }
    }
}
