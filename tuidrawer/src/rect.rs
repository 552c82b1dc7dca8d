/// Screen-space rectangle. The origin is signed because a sliding panel
/// spends part of its life partially off-screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i16,
    pub y: i16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: i16, y: i16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub const fn right(&self) -> i32 {
        self.x as i32 + self.width as i32
    }

    pub const fn bottom(&self) -> i32 {
        self.y as i32 + self.height as i32
    }
}
