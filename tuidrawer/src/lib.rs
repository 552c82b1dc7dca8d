pub mod animate;
pub mod backdrop;
pub mod direction;
pub mod drawer;
pub mod host;
pub mod rect;
pub mod size;
pub mod tween;
pub mod viewport;

pub use animate::{Animator, RunOutcome, RunTargets};
pub use backdrop::{Backdrop, Rgb, Style};
pub use direction::{Axis, Direction};
pub use drawer::{Drawer, DrawerConfig, DrawerFrame};
pub use host::{OverlayAnimation, OverlayHost, OverlayOptions};
pub use rect::Rect;
pub use size::{resolve, ResolvedSize};
pub use tween::{Easing, Tween};
pub use viewport::{SubscriptionId, ViewportTracker};
