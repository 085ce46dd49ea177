use std::{collections::VecDeque, mem};
use tracing::{debug, info, trace, warn};

use crate::{
    config::RedrawPolicy,
    error::Result,
    event::{Dispatch, Event, Size},
    graphics::Framebuffer,
};

/// Somewhere a framebuffer can be blitted to: a window, or the device
/// context of an in-progress paint.
pub trait PresentTarget {
    fn client_size(&self) -> Size;

    /// Copies the whole framebuffer into `(0, 0, dest)`, stretching if the
    /// sizes differ. Callers never pass an empty buffer or destination.
    fn present(&mut self, framebuffer: &Framebuffer, dest: Size) -> Result<()>;
}

pub trait EventHandler {
    fn handle_event(&mut self, event: Event, target: &mut dyn PresentTarget) -> Dispatch;
}

pub trait EventSource {
    /// Delivers the events produced by at most one OS message to `handler`.
    /// With `block` set, waits for a message instead of returning when the
    /// queue is empty. Returns whether a message was processed.
    fn pump(&mut self, block: bool, handler: &mut dyn EventHandler) -> bool;
}

#[derive(Debug)]
pub struct RunState {
    running: bool,
}

impl RunState {
    pub fn new() -> Self {
        Self { running: true }
    }

    pub fn is_running(&self) -> bool { self.running }

    /// Returns true only for the call that actually stopped the loop.
    pub fn stop(&mut self) -> bool {
        let was_running = self.running;
        self.running = false;
        was_running
    }
}

impl Default for RunState {
    fn default() -> Self {
        Self::new()
    }
}

//NOTE: advanced every tick but only logged, the fill pattern ignores them
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct FrameOffsets {
    pub x: i32,
    pub y: i32,
}

impl FrameOffsets {
    fn advance(&mut self) {
        self.x = self.x.wrapping_add(1);
        self.y = self.y.wrapping_add(2);
    }
}

#[derive(Debug)]
pub struct App {
    run_state: RunState,
    framebuffer: Framebuffer,
    offsets: FrameOffsets,
    redraw: RedrawPolicy,
}

impl App {
    pub fn new(redraw: RedrawPolicy) -> Self {
        Self {
            run_state: RunState::new(),
            framebuffer: Framebuffer::new(),
            offsets: FrameOffsets::default(),
            redraw,
        }
    }

    pub fn is_running(&self) -> bool { self.run_state.is_running() }
    pub fn framebuffer(&self) -> &Framebuffer { &self.framebuffer }
    pub fn offsets(&self) -> FrameOffsets { self.offsets }
    pub fn redraw_policy(&self) -> RedrawPolicy { self.redraw }

    /// Blits the full framebuffer over the full client area of `target`.
    /// Returns whether anything was drawn.
    pub fn present(&self, target: &mut dyn PresentTarget) -> bool {
        let dest = target.client_size();
        if self.framebuffer.is_empty() || dest.is_empty() {
            trace!(?dest, "nothing to present");
            return false;
        }

        match target.present(&self.framebuffer, dest) {
            Ok(()) => true,
            Err(error) => {
                warn!(%error, "present failed, frame skipped");
                false
            }
        }
    }

    pub fn tick<H>(&mut self, host: &mut H)
    where
        H: EventSource + PresentTarget,
    {
        let block = self.redraw == RedrawPolicy::EventDriven;
        host.pump(block, self);

        if self.redraw == RedrawPolicy::Continuous && self.is_running() {
            self.present(host);
        }

        self.offsets.advance();
    }

    pub fn run<H>(&mut self, host: &mut H)
    where
        H: EventSource + PresentTarget,
    {
        while self.is_running() {
            self.tick(host);
        }
    }

    /// On failure the previous framebuffer stays and keeps being presented.
    pub fn resize(&mut self, size: Size) -> Result<()> {
        self.framebuffer.resize(size.width, size.height)?;
        Ok(())
    }
}

/// Events raised while no handler is installed, e.g. the first resize a
/// window gets while it is still being created. Replayed in order.
#[derive(Debug, Default)]
pub struct Deferred {
    events: VecDeque<Event>,
}

impl Deferred {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize { self.events.len() }
    pub fn is_empty(&self) -> bool { self.events.is_empty() }

    /// `Other` events are not kept; the platform default handler runs for them
    /// right away.
    pub fn defer(&mut self, event: Event) -> Dispatch {
        match event {
            Event::Other { .. } => Dispatch::Default,
            event => {
                self.events.push_back(event);
                Dispatch::Handled
            }
        }
    }

    /// Moves the queued events out, leaving this queue empty for anything
    /// raised during the replay.
    pub fn take(&mut self) -> Deferred {
        mem::take(self)
    }

    /// Returns whether there was anything to replay.
    pub fn replay(self, handler: &mut dyn EventHandler, target: &mut dyn PresentTarget) -> bool {
        let replayed = !self.events.is_empty();
        for event in self.events {
            handler.handle_event(event, target);
        }
        replayed
    }
}

impl EventHandler for App {
    fn handle_event(&mut self, event: Event, target: &mut dyn PresentTarget) -> Dispatch {
        match event {
            Event::Resize(size) => {
                debug!(?size, "resize");
                if let Err(error) = self.resize(size) {
                    warn!(%error, kept = ?self.framebuffer.size(), "framebuffer resize failed");
                }
            }
            Event::Close => {
                if self.run_state.stop() {
                    info!("close requested");
                }
            }
            Event::Activate { active } => debug!(active, "activate"),
            Event::Destroy => debug!("destroy"),
            Event::Paint { dirty } => {
                debug!(?dirty, "paint");
                self.present(target);
            }
            Event::Other { message } => {
                trace!(message, "default handling");
                return Dispatch::Default;
            }
        }
        Dispatch::Handled
    }
}
