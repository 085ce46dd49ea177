pub mod config;
pub mod error;
pub mod event;
pub mod graphics;
pub mod host;

#[cfg(windows)]
#[macro_use]
pub mod debug;
#[cfg(windows)]
pub mod time;

pub use config::{HostConfig, RedrawPolicy};
pub use error::{AllocationError, PlatformError};
pub use event::{Dispatch, Event, Rect, Size};
pub use graphics::{Framebuffer, Pixel, BYTES_PER_PIXEL, FILL_COLOR};
pub use host::{App, Deferred, EventHandler, EventSource, FrameOffsets, PresentTarget, RunState};
