use palette::{IntoColor, Oklch, Srgb};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Darken by scaling OKLCH lightness toward zero.
    /// `amount` is clamped to 0.0..=1.0; 1.0 is fully black.
    pub fn dim(self, amount: f32) -> Self {
        let amount = amount.clamp(0.0, 1.0);
        let srgb = Srgb::new(
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        );
        let mut oklch: Oklch = srgb.into_color();
        oklch.l *= 1.0 - amount;
        let out: Srgb = oklch.into_color();
        Self {
            r: (out.red.clamp(0.0, 1.0) * 255.0).round() as u8,
            g: (out.green.clamp(0.0, 1.0) * 255.0).round() as u8,
            b: (out.blue.clamp(0.0, 1.0) * 255.0).round() as u8,
        }
    }
}

/// Effect applied to everything rendered below the panel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Backdrop {
    #[default]
    None,
    Dim(f32),
}

impl Backdrop {
    /// Apply the effect to one color.
    pub fn apply(self, color: Rgb) -> Rgb {
        match self {
            Backdrop::None => color,
            Backdrop::Dim(amount) => color.dim(amount),
        }
    }
}

/// Visual overrides for the panel's outer surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub background: Option<Rgb>,
    pub foreground: Option<Rgb>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, color: Rgb) -> Self {
        self.background = Some(color);
        self
    }

    pub fn foreground(mut self, color: Rgb) -> Self {
        self.foreground = Some(color);
        self
    }
}
