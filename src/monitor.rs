use edidview_windowsmonitor::{MonitorEdidInfo, MonitorEnumerateError};

#[cfg(target_os = "windows")]
pub fn collect_present_monitor_edids() -> Result<Vec<MonitorEdidInfo>, MonitorEnumerateError> {
    use edidview_windowsmonitor::MonitorEnumerator;

    let report = MonitorEnumerator::enumerate_present_monitors()?;
    tracing::info!(monitor_count = report.len(), "monitor enumeration finished");
    Ok(report)
}

#[cfg(not(target_os = "windows"))]
pub fn collect_present_monitor_edids() -> Result<Vec<MonitorEdidInfo>, MonitorEnumerateError> {
    tracing::warn!("EDID extraction reads the Windows device registry; nothing to enumerate on this platform");
    Ok(Vec::new())
}

/// Prints two lines per device (the hardware key path, then the hex dump)
/// with a blank line between devices. Per-device failures render as inline
/// markers so the rest of the report still prints.
pub fn print_report(report: &[MonitorEdidInfo]) {
    for (device_index, info) in report.iter().enumerate() {
        if device_index != 0 {
            println!();
        }
        if let Some(instance_id) = &info.device_instance_id {
            tracing::info!(device_index, instance_id = %instance_id, "monitor device");
        }
        let (key_path_line, edid_line) = report_lines(info);
        println!("{key_path_line}");
        println!("{edid_line}");
    }
}

fn report_lines(info: &MonitorEdidInfo) -> (String, String) {
    let key_path_line = match &info.registry_key_path {
        Ok(key_path) => format!("Registry Key: \"{key_path}\""),
        Err(error) => format!("!ERROR: {error}"),
    };
    let edid_line = match &info.edid {
        Ok(edid) => edid.to_hex_string(),
        Err(error) => format!("!ERROR: {error}"),
    };
    (key_path_line, edid_line)
}

#[cfg(test)]
mod tests {
    use super::report_lines;
    use edidview_windowsmonitor::{EdidBlob, MonitorDeviceError, MonitorEdidInfo};

    fn sample_edid_bytes() -> Vec<u8> {
        let mut bytes = vec![0x10u8; 128];
        bytes[..8].copy_from_slice(&[0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00]);
        bytes
    }

    fn info_with_edid() -> MonitorEdidInfo {
        MonitorEdidInfo {
            device_instance_id: Some("DISPLAY\\GSM5B09\\5&2d4b7a0&0&UID4352".to_string()),
            registry_key_path: Ok(
                "\\REGISTRY\\MACHINE\\SYSTEM\\ControlSet001\\Enum\\DISPLAY\\GSM5B09\\5&2d4b7a0&0&UID4352\\Device Parameters"
                    .to_string(),
            ),
            edid: Ok(EdidBlob::from_bytes(&sample_edid_bytes()).expect("fits the capacity")),
        }
    }

    #[test]
    fn healthy_device_renders_path_then_hex() {
        let (key_path_line, edid_line) = report_lines(&info_with_edid());
        assert!(key_path_line.starts_with("Registry Key: \"\\REGISTRY\\MACHINE\\"));
        assert!(key_path_line.ends_with("Device Parameters\""));
        assert!(edid_line.starts_with("00 FF FF FF FF FF FF 00"));
        assert_eq!(edid_line.split(' ').count(), 128);
    }

    #[test]
    fn missing_edid_value_renders_an_inline_marker() {
        let mut info = info_with_edid();
        info.edid = Err(MonitorDeviceError::EdidValueNotFound);
        let (key_path_line, edid_line) = report_lines(&info);
        // the path is still shown; only the value line degrades
        assert!(key_path_line.starts_with("Registry Key: "));
        assert!(edid_line.starts_with("!ERROR: "));
        assert!(edid_line.contains("not found"));
    }

    #[test]
    fn one_bad_device_does_not_taint_the_other() {
        let mut broken = info_with_edid();
        broken.edid = Err(MonitorDeviceError::EdidValueNotFound);
        let report = [broken, info_with_edid()];

        let lines: Vec<_> = report.iter().map(report_lines).collect();
        assert!(lines[0].1.starts_with("!ERROR: "));
        assert!(lines[1].1.starts_with("00 FF FF FF FF FF FF 00"));
    }

    #[test]
    fn failed_path_resolution_renders_an_inline_marker() {
        let mut info = info_with_edid();
        info.registry_key_path = Err(MonitorDeviceError::KeyPathUnexpectedStatus(
            0xC0000008_u32 as i32,
        ));
        let (key_path_line, _) = report_lines(&info);
        assert!(key_path_line.starts_with("!ERROR: "));
        assert!(key_path_line.contains("0xC0000008"));
    }
}
