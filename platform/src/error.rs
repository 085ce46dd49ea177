use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("{function} failed: {message} (error {code:#010x})")]
    Win32 {
        function: &'static str,
        code: u32,
        message: String,
    },

    #[error(transparent)]
    Allocation(#[from] AllocationError),

    #[error("no window system backend for {0}")]
    Unsupported(&'static str),
}

/// Framebuffer storage could not be obtained. The buffer it was meant to
/// replace stays in place.
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq)]
#[error("could not allocate a {width}x{height} framebuffer")]
pub struct AllocationError {
    pub width: u32,
    pub height: u32,
}

pub type Result<T> = std::result::Result<T, PlatformError>;
