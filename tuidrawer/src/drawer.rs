use std::fmt;
use std::time::{Duration, Instant};

use crate::animate::{Animator, RunOutcome, RunTargets};
use crate::backdrop::{Backdrop, Style};
use crate::direction::{Axis, Direction};
use crate::host::{OverlayAnimation, OverlayOptions};
use crate::rect::Rect;
use crate::size::{resolve, ResolvedSize};
use crate::tween::Easing;

type LayoutCallback = Box<dyn FnMut(Rect)>;

/// Construction-time options for a [`Drawer`].
pub struct DrawerConfig {
    pub easing: Easing,
    pub duration: Duration,
    /// Backdrop opacity at full reveal.
    pub opacity: f32,
    pub direction: Direction,
    /// Always span the full viewport extent on the slide axis.
    pub full_size: bool,
    /// Explicit extent on the slide axis, overriding measurement.
    pub size: Option<u16>,
    /// Passthrough options for the overlay host.
    pub overlay: OverlayOptions,
    /// Overrides applied to the panel's outer surface.
    pub container: Style,
    on_layout: Option<LayoutCallback>,
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self {
            easing: Easing::default(),
            duration: Duration::from_millis(250),
            opacity: 0.5,
            direction: Direction::default(),
            full_size: false,
            size: None,
            overlay: OverlayOptions::default(),
            container: Style::default(),
            on_layout: None,
        }
    }
}

impl DrawerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn full_size(mut self, full_size: bool) -> Self {
        self.full_size = full_size;
        self
    }

    pub fn size(mut self, size: u16) -> Self {
        self.size = Some(size);
        self
    }

    pub fn overlay(mut self, overlay: OverlayOptions) -> Self {
        self.overlay = overlay;
        self
    }

    pub fn container(mut self, container: Style) -> Self {
        self.container = container;
        self
    }

    /// Layout handler invoked after the drawer's own measurement logic,
    /// with the unmodified layout rect.
    pub fn on_layout(mut self, callback: impl FnMut(Rect) + 'static) -> Self {
        self.on_layout = Some(Box::new(callback));
        self
    }
}

impl fmt::Debug for DrawerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DrawerConfig")
            .field("easing", &self.easing)
            .field("duration", &self.duration)
            .field("opacity", &self.opacity)
            .field("direction", &self.direction)
            .field("full_size", &self.full_size)
            .field("size", &self.size)
            .field("overlay", &self.overlay)
            .field("container", &self.container)
            .field("on_layout", &self.on_layout.is_some())
            .finish()
    }
}

/// Sliding edge panel above a dimmed backdrop.
///
/// `Drawer` is the imperative handle handed to the owner: request `open` and
/// `close`, feed it layout measurements and viewport resizes, drive it with
/// `tick`, and render whatever [`Drawer::frame`] returns. The visibility and
/// measurement state behind those calls is private.
///
/// The slide distance depends on the content's measured size, so opening is
/// two-phase: `open` mounts the panel, and the reveal run only starts once a
/// layout pass has reported a non-zero extent (unless an explicit size makes
/// measurement moot; the gate is kept uniform regardless).
pub struct Drawer {
    config: DrawerConfig,
    visible: bool,
    /// Measured content extent on the slide axis. Zero means unmeasured;
    /// never reset, so a reopened drawer can reveal immediately.
    content_size: u16,
    viewport: (u16, u16),
    /// Set on a closed->open transition; the first reveal after it seeds the
    /// channels to the off-screen rest position.
    needs_seed: bool,
    anim: Animator,
}

impl Drawer {
    /// The drawer starts closed with a zero viewport; wire
    /// [`Drawer::on_viewport_resize`] to a viewport source before opening.
    pub fn new(config: DrawerConfig) -> Self {
        Self {
            config,
            visible: false,
            content_size: 0,
            viewport: (0, 0),
            needs_seed: false,
            anim: Animator::new(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.visible
    }

    pub fn is_animating(&self) -> bool {
        self.anim.is_animating()
    }

    /// Current backdrop opacity.
    pub fn opacity(&self) -> f32 {
        self.anim.opacity()
    }

    /// Current panel offset in cells; zero is fully revealed.
    pub fn offset(&self) -> f32 {
        self.anim.offset()
    }

    /// Panel extent on the slide axis for the current viewport.
    pub fn resolved_size(&self) -> ResolvedSize {
        let (width, height) = self.viewport;
        resolve(
            self.config.direction.main_extent(width, height),
            self.content_size,
            self.config.size,
            self.config.full_size,
        )
    }

    /// Request the panel to become visible and slide in from its edge.
    /// Idempotent when already open, though it re-runs the reveal so the
    /// panel snaps back toward its revealed position.
    pub fn open(&mut self, now: Instant) {
        if !self.visible {
            self.visible = true;
            self.needs_seed = true;
            log::debug!("[drawer] open requested ({:?})", self.config.direction);
        }
        self.reveal_if_ready(now);
    }

    /// Request the panel to animate out and unmount on completion. Always
    /// preempts an in-flight run; safe when already closed.
    pub fn close(&mut self, now: Instant) {
        let hidden = self
            .config
            .direction
            .hidden_offset(self.resolved_extent());
        self.anim.stop_all(now);
        self.anim.configure(RunTargets {
            opacity: 0.0,
            offset: hidden,
            duration: self.config.duration,
            easing: self.config.easing,
        });
        self.anim.start_all(now, Some(RunOutcome::Hide));
        log::debug!("[drawer] hide run started (target offset {hidden})");
    }

    /// Layout-measurement reaction. Call with the panel's rendered rect
    /// after a layout pass of the mounted panel.
    ///
    /// An extent equal to the stored one re-affirms the revealed position,
    /// guarding against the panel settling somewhere stale after a resize.
    /// A changed extent is stored and, while visible, restarts the reveal.
    /// The caller-supplied layout handler runs afterwards either way.
    pub fn on_layout(&mut self, rect: Rect, now: Instant) {
        let measured = match self.config.direction.axis() {
            Axis::Horizontal => rect.width,
            Axis::Vertical => rect.height,
        };
        if measured != self.content_size {
            self.content_size = measured;
            log::debug!("[drawer] measured content extent {measured}");
        }
        self.reveal_if_ready(now);
        if let Some(callback) = self.config.on_layout.as_mut() {
            callback(rect);
        }
    }

    /// Record a viewport change. The resolved size is recomputed on the next
    /// frame; no animation restarts until a layout pass reports an extent.
    pub fn on_viewport_resize(&mut self, width: u16, height: u16) {
        self.viewport = (width, height);
    }

    /// Advance the animation; call once per frame. A finished hide run
    /// unmounts the panel. Returns true while a run is still in flight.
    pub fn tick(&mut self, now: Instant) -> bool {
        if let Some(RunOutcome::Hide) = self.anim.tick(now) {
            self.visible = false;
            log::debug!("[drawer] hidden, unmounting");
        }
        self.anim.is_animating()
    }

    /// Render snapshot for the current state, or None when fully closed.
    pub fn frame(&self) -> Option<DrawerFrame> {
        if !self.visible {
            return None;
        }
        let mut overlay = self.config.overlay;
        overlay.animation = OverlayAnimation::None;
        overlay.transparent = true;
        Some(DrawerFrame {
            direction: self.config.direction,
            size: self.resolved_size(),
            offset: self.anim.offset(),
            backdrop: Backdrop::Dim(self.anim.opacity()),
            overlay,
            container: self.config.container,
        })
    }

    /// Reveal run: only once the panel is visible and its size is known,
    /// because the travel distance depends on the measured extent.
    fn reveal_if_ready(&mut self, now: Instant) {
        if !self.visible || self.content_size == 0 {
            return;
        }
        let extent = self.resolved_extent();
        self.anim.stop_all(now);
        if self.needs_seed {
            self.anim
                .snap(0.0, self.config.direction.hidden_offset(extent));
            self.needs_seed = false;
        }
        self.anim.configure(RunTargets {
            opacity: self.config.opacity,
            offset: 0.0,
            duration: self.config.duration,
            easing: self.config.easing,
        });
        self.anim.start_all(now, None);
        log::debug!("[drawer] reveal run started (extent {extent})");
    }

    /// Travel distance on the slide axis. Before measurement this falls back
    /// to the raw content size (zero), which degrades to an instant run.
    fn resolved_extent(&self) -> u16 {
        match self.resolved_size() {
            ResolvedSize::Cells(extent) => extent,
            ResolvedSize::Intrinsic => self.content_size,
        }
    }
}

impl fmt::Debug for Drawer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Drawer")
            .field("visible", &self.visible)
            .field("content_size", &self.content_size)
            .field("viewport", &self.viewport)
            .field("animating", &self.anim.is_animating())
            .finish_non_exhaustive()
    }
}

/// Everything the embedding renderer and overlay host need for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawerFrame {
    pub direction: Direction,
    pub size: ResolvedSize,
    /// Signed displacement from the revealed position, in cells.
    pub offset: f32,
    pub backdrop: Backdrop,
    /// Effective host options (animation forced off, transparency forced on).
    pub overlay: OverlayOptions,
    pub container: Style,
}

impl DrawerFrame {
    /// Panel placement for the given viewport: flush against its home edge,
    /// spanning the viewport on the cross axis, displaced by the offset.
    /// None while the size is still intrinsic (the host sizes the panel
    /// naturally until measurement completes).
    pub fn panel_rect(&self, width: u16, height: u16) -> Option<Rect> {
        let extent = self.size.cells()?;
        let offset = self.offset.round() as i16;
        let rect = match self.direction {
            Direction::Top => Rect::new(0, offset, width, extent),
            Direction::Bottom => Rect::new(
                0,
                (height as i32 - extent as i32 + offset as i32) as i16,
                width,
                extent,
            ),
            Direction::Left => Rect::new(offset, 0, extent, height),
            Direction::Right => Rect::new(
                (width as i32 - extent as i32 + offset as i32) as i16,
                0,
                extent,
                height,
            ),
        };
        Some(rect)
    }
}
