mod edid_blob;
pub use edid_blob::{EdidBlob, EDID_VALUE_CAPACITY};

mod errors;
pub use errors::*;

mod key_name_information;
pub use key_name_information::key_path_from_name_information;

mod monitor_edid_info;
pub use monitor_edid_info::MonitorEdidInfo;

#[cfg(target_os = "windows")]
mod win32_utils;

#[cfg(target_os = "windows")]
mod device_class;
#[cfg(target_os = "windows")]
pub use device_class::setup_class_guids_from_name;

#[cfg(target_os = "windows")]
mod device_info_set;
#[cfg(target_os = "windows")]
pub use device_info_set::DeviceInfoSet;

#[cfg(target_os = "windows")]
mod device_registry_key;
#[cfg(target_os = "windows")]
pub use device_registry_key::DeviceRegistryKey;

#[cfg(target_os = "windows")]
mod edid_value_reader;
#[cfg(target_os = "windows")]
pub use edid_value_reader::{read_edid, EDID_VALUE_NAME};

#[cfg(target_os = "windows")]
mod monitor_enumerator;
#[cfg(target_os = "windows")]
pub use monitor_enumerator::{MonitorEnumerator, MONITOR_CLASS_NAME};
