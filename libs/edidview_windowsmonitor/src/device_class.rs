use crate::win32_utils;
use crate::MonitorEnumerateError;
use windows::Win32::Foundation::ERROR_INSUFFICIENT_BUFFER;
use windows_sys::core::GUID;
use windows_sys::Win32::Devices::DeviceAndDriverInstallation::SetupDiClassGuidsFromNameW;

/// Resolves a device setup class name (e.g. "Monitor") to its class GUIDs.
///
/// The probe call passes no buffer so the API fails with
/// ERROR_INSUFFICIENT_BUFFER while reporting the required element count; the
/// sized retry then fills the list. A name that matches no installed class
/// reports a required count of zero and yields an empty vector; whether an
/// empty result is acceptable is the caller's policy, not a failure here.
/// see: https://learn.microsoft.com/en-us/windows/win32/api/setupapi/nf-setupapi-setupdiclassguidsfromnamew
pub fn setup_class_guids_from_name(class_name: &str) -> Result<Vec<GUID>, MonitorEnumerateError> {
    let class_name_as_utf16_chars: Vec<u16> =
        class_name.encode_utf16().chain(std::iter::once(0)).collect();

    let mut required_guid_count: u32 = 0;
    let probe_result = unsafe {
        SetupDiClassGuidsFromNameW(
            class_name_as_utf16_chars.as_ptr(),
            std::ptr::null_mut(),
            0,
            &mut required_guid_count,
        )
    };
    if probe_result == 0 {
        let win32_error = win32_utils::last_win32_error();
        if win32_error != ERROR_INSUFFICIENT_BUFFER {
            // only the size-report failure continues the protocol
            return Err(MonitorEnumerateError::Win32Error(win32_error.0));
        }
    }
    if required_guid_count == 0 {
        return Ok(Vec::new());
    }

    let mut class_guids: Vec<GUID> = Vec::with_capacity(required_guid_count as usize);
    class_guids.resize(class_guids.capacity(), GUID::from_u128(0));
    let fill_result = unsafe {
        SetupDiClassGuidsFromNameW(
            class_name_as_utf16_chars.as_ptr(),
            class_guids.as_mut_ptr(),
            required_guid_count,
            &mut required_guid_count,
        )
    };
    if fill_result == 0 {
        return Err(MonitorEnumerateError::Win32Error(
            win32_utils::last_win32_error().0,
        ));
    }
    class_guids.truncate(required_guid_count as usize);

    Ok(class_guids)
}
