use crate::device_class;
use crate::edid_value_reader;
use crate::DeviceInfoSet;
use crate::DeviceRegistryKey;
use crate::MonitorEdidInfo;
use crate::MonitorEnumerateError;

/// Setup class name grouping every monitor device.
pub const MONITOR_CLASS_NAME: &str = "Monitor";

pub struct MonitorEnumerator {}
//
impl MonitorEnumerator {
    /// Collects the EDID report for every monitor currently present.
    pub fn enumerate_present_monitors() -> Result<Vec<MonitorEdidInfo>, MonitorEnumerateError> {
        MonitorEnumerator::enumerate_present_devices_by_class_name(MONITOR_CLASS_NAME)
    }

    /// Runs the full pipeline for one setup class name: class GUID
    /// resolution, device-set enumeration, then the per-device phase (open
    /// hardware key, recover its path, read the EDID value). Failures before
    /// the loop abort the run; failures inside the loop are recorded in that
    /// device's entry and enumeration moves to the next index.
    pub fn enumerate_present_devices_by_class_name(
        class_name: &str,
    ) -> Result<Vec<MonitorEdidInfo>, MonitorEnumerateError> {
        let class_guids = device_class::setup_class_guids_from_name(class_name)?;
        // NOTE: a class name can in principle map to several setup classes;
        // the head of the list drives the enumeration, which is exact for
        // "Monitor" (a single well-known GUID)
        let Some(setup_class_guid) = class_guids.first() else {
            return Err(MonitorEnumerateError::ClassNotFound(class_name.to_string()));
        };

        let device_info_set = DeviceInfoSet::open_present_devices(setup_class_guid)?;

        let mut result = Vec::<MonitorEdidInfo>::new();
        for device_index in 0..u32::MAX {
            let devinfo_data = match device_info_set.device_at(device_index)? {
                Some(data) => data,
                None => break,
            };

            let device_instance_id = match device_info_set.device_instance_id(&devinfo_data) {
                Ok(instance_id) => Some(instance_id),
                Err(error) => {
                    tracing::warn!(device_index, %error, "could not read the device instance id");
                    None
                }
            };

            let (registry_key_path, edid) =
                match DeviceRegistryKey::open_hardware_key(&device_info_set, &devinfo_data) {
                    Ok(device_registry_key) => (
                        device_registry_key.path(),
                        edid_value_reader::read_edid(&device_registry_key),
                    ),
                    Err(error) => (Err(error.clone()), Err(error)),
                };

            result.push(MonitorEdidInfo {
                device_instance_id,
                registry_key_path,
                edid,
            });
        }

        Ok(result)
    }
}
