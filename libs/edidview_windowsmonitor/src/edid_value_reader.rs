use crate::win32_utils;
use crate::DeviceRegistryKey;
use crate::EdidBlob;
use crate::MonitorDeviceError;
use crate::EDID_VALUE_CAPACITY;
use windows::Win32::Foundation::{
    ERROR_FILE_NOT_FOUND, ERROR_INVALID_DATA, ERROR_SUCCESS, WIN32_ERROR,
};
use windows_sys::Win32::System::Registry::{RegQueryValueExW, REG_BINARY};

/// Name of the untyped-binary registry value holding the raw descriptor.
pub const EDID_VALUE_NAME: &str = "EDID";

/// Reads the `EDID` value from a device's hardware registry key.
///
/// A fixed 256-byte buffer covers every EDID revision in a single query
/// round-trip; the byte count the registry reports on the way out bounds the
/// meaningful prefix. An absent value is reported distinctly from an I/O
/// failure so the caller can tell "this monitor published no EDID" apart
/// from "the read broke".
/// see: https://learn.microsoft.com/en-us/windows/win32/api/winreg/nf-winreg-regqueryvalueexw
pub fn read_edid(device_registry_key: &DeviceRegistryKey) -> Result<EdidBlob, MonitorDeviceError> {
    let value_name_as_utf16_chars: Vec<u16> = EDID_VALUE_NAME
        .encode_utf16()
        .chain(std::iter::once(0))
        .collect();

    let mut value_buffer = [0u8; EDID_VALUE_CAPACITY];
    let mut value_length = EDID_VALUE_CAPACITY as u32;
    let mut value_type: u32 = 0;
    let query_result = unsafe {
        RegQueryValueExW(
            device_registry_key.handle(),
            value_name_as_utf16_chars.as_ptr(),
            std::ptr::null(),
            &mut value_type,
            value_buffer.as_mut_ptr(),
            &mut value_length,
        )
    };
    match WIN32_ERROR(query_result) {
        ERROR_SUCCESS => {}
        ERROR_FILE_NOT_FOUND => return Err(MonitorDeviceError::EdidValueNotFound),
        other => return Err(MonitorDeviceError::Win32Error(other.0)),
    }

    if value_type != REG_BINARY {
        // a mis-typed value still carries the bytes; flag it, don't fail the device
        tracing::warn!(
            value_type,
            "registry value \"EDID\" is not declared as untyped binary"
        );
    }
    if value_length as usize > EDID_VALUE_CAPACITY {
        debug_assert!(false, "registry reported more bytes than the supplied buffer holds");
        return Err(MonitorDeviceError::Win32Error(ERROR_INVALID_DATA.0));
    }

    match EdidBlob::from_bytes(&value_buffer[..value_length as usize]) {
        Some(edid) => Ok(edid),
        None => Err(MonitorDeviceError::Win32Error(ERROR_INVALID_DATA.0)),
    }
}
