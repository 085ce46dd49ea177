use core::mem;
use winapi::um::profileapi::{QueryPerformanceCounter, QueryPerformanceFrequency};

lazy_static::lazy_static! {
    static ref TICKS_PER_SECOND: i64 = unsafe {
        let mut frequency = mem::zeroed();
        QueryPerformanceFrequency(&mut frequency);
        *frequency.QuadPart()
    };
}

fn now() -> i64 {
    unsafe {
        let mut ticks = mem::zeroed();
        QueryPerformanceCounter(&mut ticks);
        *ticks.QuadPart()
    }
}

/// Measures one main loop iteration.
pub struct FrameTimer {
    started_at: i64,
}

impl FrameTimer {
    pub fn start() -> Self {
        Self { started_at: now() }
    }

    pub fn elapsed_ms(&self) -> f64 {
        (now() - self.started_at) as f64 * 1000.0 / *TICKS_PER_SECOND as f64
    }
}
