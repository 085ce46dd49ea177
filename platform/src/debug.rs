use core::ptr;
use std::slice;
use winapi::{
    shared::minwindef::HLOCAL,
    um::{
        errhandlingapi::GetLastError,
        winbase::{
            FormatMessageW,
            LocalFree,
            FORMAT_MESSAGE_ALLOCATE_BUFFER,
            FORMAT_MESSAGE_FROM_SYSTEM,
            FORMAT_MESSAGE_IGNORE_INSERTS,
        },
    },
};

use crate::error::PlatformError;

/// Captures `GetLastError` for a call that just failed. Must run before any
/// other Win32 call on this thread.
pub fn last_error(function: &'static str) -> PlatformError {
    let code = unsafe { GetLastError() };
    PlatformError::Win32 {
        function,
        code,
        message: system_message(code),
    }
}

fn system_message(code: u32) -> String {
    let mut buffer: *mut u16 = ptr::null_mut();
    let len = unsafe {
        FormatMessageW(
            FORMAT_MESSAGE_ALLOCATE_BUFFER
                | FORMAT_MESSAGE_FROM_SYSTEM
                | FORMAT_MESSAGE_IGNORE_INSERTS,
            ptr::null(),
            code,
            0,
            // with ALLOCATE_BUFFER the system writes the buffer pointer here
            &mut buffer as *mut *mut u16 as *mut u16,
            0,
            ptr::null_mut(),
        )
    };
    if len == 0 || buffer.is_null() {
        return "unknown error".to_string();
    }

    let message = {
        let wide = unsafe { slice::from_raw_parts(buffer, len as usize) };
        String::from_utf16_lossy(wide).trim_end().to_string()
    };
    unsafe { LocalFree(buffer as HLOCAL) };

    message
}

/// Evaluates a Win32 call to `Ok(result)`, or to the last error if it
/// returned zero.
#[macro_export]
macro_rules! win_check_non_zero {
    (
        $fn_name:ident( $($arg:expr),* $(,)? ) $(;)?
    ) => {
        {
            let result = unsafe { $fn_name($($arg),*) };
            if result == 0 {
                Err($crate::debug::last_error(stringify!($fn_name)))
            } else {
                Ok(result)
            }
        }
    };
}

/// Evaluates a Win32 call to `Ok(handle)`, or to the last error if the
/// handle is null.
#[macro_export]
macro_rules! win_check_non_null {
    (
        $fn_name:ident( $($arg:expr),* $(,)? ) $(;)?
    ) => {
        {
            let result = unsafe { $fn_name($($arg),*) };
            if result.is_null() {
                Err($crate::debug::last_error(stringify!($fn_name)))
            } else {
                Ok(result)
            }
        }
    };
}
