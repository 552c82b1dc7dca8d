use std::fmt;
use std::io;

use crossterm::event::Event as CrosstermEvent;
use crossterm::terminal;

pub type SubscriptionId = u64;

type ResizeCallback = Box<dyn FnMut(u16, u16)>;

/// Process-wide observable viewport size.
///
/// Components subscribe on mount and unsubscribe on unmount instead of
/// querying a shared global ad hoc. Subscribers are only notified when the
/// size actually changes.
pub struct ViewportTracker {
    width: u16,
    height: u16,
    next_id: SubscriptionId,
    subscribers: Vec<(SubscriptionId, ResizeCallback)>,
}

impl ViewportTracker {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            next_id: 0,
            subscribers: Vec::new(),
        }
    }

    /// Create a tracker seeded from the current terminal size.
    pub fn detect() -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(Self::new(width, height))
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Record a new size, notifying subscribers if it changed.
    pub fn set_size(&mut self, width: u16, height: u16) {
        if width == self.width && height == self.height {
            return;
        }
        self.width = width;
        self.height = height;
        log::debug!("[viewport] resized to {width}x{height}");
        for (_, callback) in &mut self.subscribers {
            callback(width, height);
        }
    }

    /// Feed a terminal event through; only resize events are of interest.
    pub fn handle_event(&mut self, event: &CrosstermEvent) {
        if let CrosstermEvent::Resize(width, height) = event {
            self.set_size(*width, *height);
        }
    }

    pub fn subscribe(&mut self, callback: impl FnMut(u16, u16) + 'static) -> SubscriptionId {
        let id = self.next_id;
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a subscription. Returns false if the id was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }
}

impl fmt::Debug for ViewportTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewportTracker")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
