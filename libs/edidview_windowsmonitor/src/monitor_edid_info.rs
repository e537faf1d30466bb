use crate::EdidBlob;
use crate::MonitorDeviceError;

/// Per-device outcome of one enumeration pass.
///
/// In-loop failures land in the `Result` fields instead of aborting the
/// run, so one bad device never hides the rest of the report.
#[derive(Debug, Clone)]
pub struct MonitorEdidInfo {
    /// Device instance id (e.g. `DISPLAY\GSM5B09\5&2d4b7a0&0&UID4352`),
    /// when it could be read.
    pub device_instance_id: Option<String>,
    /// Canonical path of the device's hardware registry key as recovered
    /// from the kernel. Diagnostic display only; nothing is re-opened
    /// through it.
    pub registry_key_path: Result<String, MonitorDeviceError>,
    /// The raw EDID value, trimmed to the byte count the registry reported.
    pub edid: Result<EdidBlob, MonitorDeviceError>,
}
