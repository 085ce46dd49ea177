use crate::event::Size;

/// How the main loop waits for messages and when it presents.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RedrawPolicy {
    /// Never block on the message queue; present on every loop iteration.
    Continuous,
    /// Block until a message arrives; present only when the OS asks for paint.
    EventDriven,
}

impl Default for RedrawPolicy {
    fn default() -> Self {
        RedrawPolicy::Continuous
    }
}

#[derive(Debug, Clone)]
pub struct HostConfig {
    pub class_name: String,
    pub title: String,
    /// Initial client area; the outer window is grown to fit borders and caption.
    pub client_size: Size,
    pub redraw: RedrawPolicy,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            class_name: "BootstrapWindowClass".to_string(),
            title: "Bootstrap".to_string(),
            client_size: Size::new(1920 / 2, 1080 / 2),
            redraw: RedrawPolicy::default(),
        }
    }
}
