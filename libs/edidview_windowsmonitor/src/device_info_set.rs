use crate::win32_utils;
use crate::MonitorEnumerateError;
use windows::Win32::Foundation::{
    ERROR_INSUFFICIENT_BUFFER, ERROR_INVALID_DATA, ERROR_NO_MORE_ITEMS,
};
use windows_sys::core::GUID;
use windows_sys::Win32::Devices::DeviceAndDriverInstallation::{
    SetupDiDestroyDeviceInfoList, SetupDiEnumDeviceInfo, SetupDiGetClassDevsW,
    SetupDiGetDeviceInstanceIdW, DIGCF_PRESENT, HDEVINFO, SP_DEVINFO_DATA,
};
use windows_sys::Win32::Foundation::INVALID_HANDLE_VALUE;

/// Owned device information set for one setup class, restricted to devices
/// currently present on the system.
///
/// Descriptors handed out by [`DeviceInfoSet::device_at`] are only
/// meaningful while the set is alive; the underlying OS collection is
/// destroyed when the set drops.
pub struct DeviceInfoSet {
    handle: HDEVINFO,
}

impl DeviceInfoSet {
    /// see: https://learn.microsoft.com/en-us/windows/win32/api/setupapi/nf-setupapi-setupdigetclassdevsw
    pub fn open_present_devices(setup_class_guid: &GUID) -> Result<DeviceInfoSet, MonitorEnumerateError> {
        let handle = unsafe {
            SetupDiGetClassDevsW(
                setup_class_guid,
                std::ptr::null(),
                std::ptr::null_mut(),
                DIGCF_PRESENT,
            )
        };
        // failure is the all-bits-set sentinel, never null; zero is a
        // theoretically valid handle value
        if handle as isize == INVALID_HANDLE_VALUE as isize {
            return Err(MonitorEnumerateError::Win32Error(
                win32_utils::last_win32_error().0,
            ));
        }
        Ok(DeviceInfoSet { handle })
    }

    pub(crate) fn handle(&self) -> HDEVINFO {
        self.handle
    }

    /// Probes the `member_index`th device of the set. `Ok(None)` is the
    /// normal end of the sequence, not a failure.
    /// see: https://learn.microsoft.com/en-us/windows/win32/api/setupapi/nf-setupapi-setupdienumdeviceinfo
    pub fn device_at(&self, member_index: u32) -> Result<Option<SP_DEVINFO_DATA>, MonitorEnumerateError> {
        // the API refuses any descriptor whose declared size does not match
        let mut devinfo_data = SP_DEVINFO_DATA {
            cbSize: std::mem::size_of::<SP_DEVINFO_DATA>() as u32,
            ClassGuid: GUID::from_u128(0),
            DevInst: 0,
            Reserved: 0,
        };
        let enum_device_info_result =
            unsafe { SetupDiEnumDeviceInfo(self.handle, member_index, &mut devinfo_data) };
        if enum_device_info_result == 0 {
            let win32_error = win32_utils::last_win32_error();
            if win32_error == ERROR_NO_MORE_ITEMS {
                return Ok(None);
            }
            return Err(MonitorEnumerateError::Win32Error(win32_error.0));
        }
        Ok(Some(devinfo_data))
    }

    /// Device instance id (e.g. `DISPLAY\GSM5B09\5&2d4b7a0&0&UID4352`) of
    /// one descriptor, via the usual probe-then-fill size negotiation.
    /// see: https://learn.microsoft.com/en-us/windows/win32/api/setupapi/nf-setupapi-setupdigetdeviceinstanceidw
    pub fn device_instance_id(
        &self,
        devinfo_data: &SP_DEVINFO_DATA,
    ) -> Result<String, MonitorEnumerateError> {
        let mut required_size: u32 = 0;
        let probe_result = unsafe {
            SetupDiGetDeviceInstanceIdW(
                self.handle,
                devinfo_data,
                std::ptr::null_mut(),
                0,
                &mut required_size,
            )
        };
        if probe_result == 0 {
            let win32_error = win32_utils::last_win32_error();
            if win32_error != ERROR_INSUFFICIENT_BUFFER {
                return Err(MonitorEnumerateError::Win32Error(win32_error.0));
            }
        } else {
            // instance ids are null-terminated, so a zero-buffer call can
            // never legitimately succeed
            debug_assert!(false, "SetupDiGetDeviceInstanceIdW succeeded with no buffer");
            return Err(MonitorEnumerateError::Win32Error(ERROR_INVALID_DATA.0));
        }
        if required_size == 0 {
            return Err(MonitorEnumerateError::Win32Error(ERROR_INVALID_DATA.0));
        }

        let mut instance_id_as_utf16_chars: Vec<u16> = Vec::with_capacity(required_size as usize);
        instance_id_as_utf16_chars.resize(instance_id_as_utf16_chars.capacity(), 0);
        let fill_result = unsafe {
            SetupDiGetDeviceInstanceIdW(
                self.handle,
                devinfo_data,
                instance_id_as_utf16_chars.as_mut_ptr(),
                required_size,
                std::ptr::null_mut(),
            )
        };
        if fill_result == 0 {
            return Err(MonitorEnumerateError::Win32Error(
                win32_utils::last_win32_error().0,
            ));
        }

        // the reported size counts the trailing null terminator; drop it
        let instance_id =
            String::from_utf16(&instance_id_as_utf16_chars[0..(required_size as usize - 1)])?;
        Ok(instance_id)
    }
}

impl Drop for DeviceInfoSet {
    /// see: https://learn.microsoft.com/en-us/windows/win32/api/setupapi/nf-setupapi-setupdidestroydeviceinfolist
    fn drop(&mut self) {
        let destroy_result = unsafe { SetupDiDestroyDeviceInfoList(self.handle) };
        debug_assert!(
            destroy_result != 0,
            "could not destroy the device info set; win32 error: {}",
            win32_utils::last_win32_error().0
        );
    }
}
