/// Failures that abort the whole run before any per-device processing:
/// class-name resolution and device-info-set retrieval.
#[derive(Debug, Clone, thiserror::Error)]
pub enum MonitorEnumerateError {
    #[error("device class \"{0}\" does not resolve to any setup class")]
    ClassNotFound(/*class_name: */ String),
    #[error("could not decode a UTF-16 string returned by the setup API")]
    StringDecodingError,
    #[error("win32 error {0}")]
    Win32Error(/*win32_error: */ u32),
}

impl From<std::string::FromUtf16Error> for MonitorEnumerateError {
    fn from(_: std::string::FromUtf16Error) -> MonitorEnumerateError {
        MonitorEnumerateError::StringDecodingError
    }
}
