use crate::key_name_information;
use crate::win32_utils;
use crate::DeviceInfoSet;
use crate::MonitorDeviceError;
use windows_sys::Win32::Devices::DeviceAndDriverInstallation::{
    SetupDiOpenDevRegKey, DICS_FLAG_GLOBAL, DIREG_DEV, SP_DEVINFO_DATA,
};
use windows_sys::Win32::Foundation::{HMODULE, INVALID_HANDLE_VALUE, NTSTATUS};
use windows_sys::Win32::System::LibraryLoader::{FreeLibrary, GetProcAddress, LoadLibraryW};
use windows_sys::Win32::System::Registry::{RegCloseKey, HKEY, KEY_READ};

/* The key-name query below is not part of the stable Win32 surface: the
   information class number and the status codes are kernel internals and
   version-sensitive. They live here as named constants, and nothing outside
   this module touches them. */

/// `KeyNameInformation` in the kernel's `KEY_INFORMATION_CLASS` enumeration.
const KEY_NAME_INFORMATION_CLASS: i32 = 3;
const STATUS_SUCCESS: NTSTATUS = 0x00000000;
const STATUS_BUFFER_TOO_SMALL: NTSTATUS = 0xC0000023_u32 as NTSTATUS;

type NtQueryKeyFn = unsafe extern "system" fn(
    key_handle: HKEY,
    key_information_class: i32,
    key_information: *mut core::ffi::c_void,
    length: u32,
    result_length: *mut u32,
) -> NTSTATUS;

/// Open registry key for one device's hardware (device-parameters) branch,
/// read-only. Closed when dropped.
pub struct DeviceRegistryKey {
    handle: HKEY,
}

impl DeviceRegistryKey {
    /// Opens the device's hardware registry branch, as opposed to its
    /// software/driver branch; the EDID value lives under hardware.
    /// see: https://learn.microsoft.com/en-us/windows/win32/api/setupapi/nf-setupapi-setupdiopendevregkey
    pub fn open_hardware_key(
        device_info_set: &DeviceInfoSet,
        devinfo_data: &SP_DEVINFO_DATA,
    ) -> Result<DeviceRegistryKey, MonitorDeviceError> {
        let handle = unsafe {
            SetupDiOpenDevRegKey(
                device_info_set.handle(),
                devinfo_data,
                DICS_FLAG_GLOBAL,
                0,
                DIREG_DEV,
                KEY_READ,
            )
        };
        if handle as isize == INVALID_HANDLE_VALUE as isize {
            return Err(MonitorDeviceError::HardwareKeyUnavailable(
                win32_utils::last_win32_error().0,
            ));
        }
        Ok(DeviceRegistryKey { handle })
    }

    pub(crate) fn handle(&self) -> HKEY {
        self.handle
    }

    /// Recovers the canonical path of this key (e.g.
    /// `\REGISTRY\MACHINE\SYSTEM\ControlSet001\Enum\DISPLAY\...\Device Parameters`).
    ///
    /// The OS hands out registry keys as opaque handles only; the path has
    /// to be queried back from the kernel's key-name information block, with
    /// the probe-then-fill size negotiation happening at the NTSTATUS level.
    /// The zero-length probe must fail with the buffer-too-small status while
    /// reporting the exact byte count; every other status, on either call,
    /// aborts path resolution for this device rather than guessing.
    pub fn path(&self) -> Result<String, MonitorDeviceError> {
        let ntdll = NtdllModule::load()?;
        let nt_query_key = ntdll.nt_query_key()?;

        let mut result_length: u32 = 0;
        let probe_status = unsafe {
            nt_query_key(
                self.handle,
                KEY_NAME_INFORMATION_CLASS,
                std::ptr::null_mut(),
                0,
                &mut result_length,
            )
        };
        if probe_status != STATUS_BUFFER_TOO_SMALL {
            return Err(MonitorDeviceError::KeyPathUnexpectedStatus(probe_status));
        }

        let mut name_information: Vec<u16> = Vec::with_capacity(result_length.div_ceil(2) as usize);
        name_information.resize(name_information.capacity(), 0);
        let fill_status = unsafe {
            nt_query_key(
                self.handle,
                KEY_NAME_INFORMATION_CLASS,
                name_information.as_mut_ptr() as *mut core::ffi::c_void,
                result_length,
                &mut result_length,
            )
        };
        if fill_status != STATUS_SUCCESS {
            return Err(MonitorDeviceError::KeyPathUnexpectedStatus(fill_status));
        }

        let key_path = key_name_information::key_path_from_name_information(
            &name_information,
            result_length as usize,
        )?;
        Ok(key_path)
    }
}

impl Drop for DeviceRegistryKey {
    fn drop(&mut self) {
        let close_result = unsafe { RegCloseKey(self.handle) };
        debug_assert!(
            close_result == 0,
            "could not close the device registry key; win32 error: {close_result}"
        );
    }
}

/* ntdll is mapped into every process, but loading it still takes a module
   reference that has to be given back; the guard ties FreeLibrary to scope
   exit on every path out of DeviceRegistryKey::path. */
struct NtdllModule {
    handle: HMODULE,
}

impl NtdllModule {
    fn load() -> Result<NtdllModule, MonitorDeviceError> {
        let module_name_as_utf16_chars: Vec<u16> =
            "ntdll.dll".encode_utf16().chain(std::iter::once(0)).collect();
        let handle = unsafe { LoadLibraryW(module_name_as_utf16_chars.as_ptr()) };
        if handle.is_null() {
            return Err(MonitorDeviceError::Win32Error(
                win32_utils::last_win32_error().0,
            ));
        }
        Ok(NtdllModule { handle })
    }

    /// `NtQueryKey` has no user-mode import library; it is resolved by name
    /// at runtime and cast to the documented-by-reverse-engineering shape.
    fn nt_query_key(&self) -> Result<NtQueryKeyFn, MonitorDeviceError> {
        match unsafe { GetProcAddress(self.handle, b"NtQueryKey\0".as_ptr()) } {
            Some(address) => Ok(unsafe {
                std::mem::transmute::<unsafe extern "system" fn() -> isize, NtQueryKeyFn>(address)
            }),
            None => Err(MonitorDeviceError::Win32Error(
                win32_utils::last_win32_error().0,
            )),
        }
    }
}

impl Drop for NtdllModule {
    fn drop(&mut self) {
        let free_result = unsafe { FreeLibrary(self.handle) };
        debug_assert!(free_result != 0, "could not release the ntdll module reference");
    }
}
