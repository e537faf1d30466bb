use windows::Win32::Foundation::{GetLastError, WIN32_ERROR};

/// Thread-local last error as a comparable `WIN32_ERROR` value.
pub(crate) fn last_win32_error() -> WIN32_ERROR {
    match unsafe { GetLastError().ok() } {
        Ok(()) => WIN32_ERROR(0),
        Err(last_error) => WIN32_ERROR::from_error(&last_error).unwrap_or(WIN32_ERROR(0)),
    }
}
