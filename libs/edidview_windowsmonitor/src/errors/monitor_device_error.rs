/// Failures scoped to a single enumerated device. These are recorded in the
/// device's report entry; the enumeration loop itself keeps going.
#[derive(Debug, Clone, thiserror::Error)]
pub enum MonitorDeviceError {
    #[error("device has no readable hardware registry key (win32 error {0})")]
    HardwareKeyUnavailable(/*win32_error: */ u32),
    #[error("key-name information query returned unexpected status {0:#010X}")]
    KeyPathUnexpectedStatus(/*ntstatus: */ i32),
    #[error("registry value \"EDID\" not found under the hardware key")]
    EdidValueNotFound,
    #[error("could not decode a UTF-16 string returned by the kernel")]
    StringDecodingError,
    #[error("win32 error {0}")]
    Win32Error(/*win32_error: */ u32),
}

impl From<std::string::FromUtf16Error> for MonitorDeviceError {
    fn from(_: std::string::FromUtf16Error) -> MonitorDeviceError {
        MonitorDeviceError::StringDecodingError
    }
}

#[cfg(test)]
mod tests {
    use super::MonitorDeviceError;

    #[test]
    fn unexpected_status_renders_as_the_familiar_ntstatus_hex() {
        let error = MonitorDeviceError::KeyPathUnexpectedStatus(0xC0000022_u32 as i32);
        assert_eq!(
            error.to_string(),
            "key-name information query returned unexpected status 0xC0000022"
        );
    }

    #[test]
    fn missing_value_and_io_failure_stay_distinguishable() {
        assert_ne!(
            MonitorDeviceError::EdidValueNotFound.to_string(),
            MonitorDeviceError::Win32Error(5).to_string()
        );
    }
}
