/// Animation performed by the overlay host itself, independent of any
/// animation the content drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayAnimation {
    #[default]
    None,
    Fade,
    Slide,
}

/// Options handed to the overlay host when content mounts.
///
/// The drawer passes caller-supplied options through but always forces
/// `animation` to [`OverlayAnimation::None`] (it drives its own motion) and
/// `transparent` to true (the dimmed backdrop must stay visible).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayOptions {
    pub animation: OverlayAnimation,
    pub transparent: bool,
    /// Route input to the overlay first while it is mounted.
    pub capture_input: bool,
    /// Dim everything below the overlay.
    pub dim_below: bool,
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self {
            animation: OverlayAnimation::None,
            transparent: true,
            capture_input: true,
            dim_below: true,
        }
    }
}

impl OverlayOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn animation(mut self, animation: OverlayAnimation) -> Self {
        self.animation = animation;
        self
    }

    pub fn transparent(mut self, transparent: bool) -> Self {
        self.transparent = transparent;
        self
    }

    pub fn capture_input(mut self, capture: bool) -> Self {
        self.capture_input = capture;
        self
    }

    pub fn dim_below(mut self, dim: bool) -> Self {
        self.dim_below = dim;
        self
    }
}

/// Boundary to whatever renders above the rest of the UI.
///
/// Implementations guarantee that presented content stacks above all other
/// elements and, when `capture_input` is set, receives input first. Beyond
/// that guarantee the host is opaque to the drawer.
pub trait OverlayHost {
    fn present(&mut self, options: &OverlayOptions);
    fn dismiss(&mut self);
}
