mod monitor_device_error;
pub use monitor_device_error::MonitorDeviceError;

mod monitor_enumerate_error;
pub use monitor_enumerate_error::MonitorEnumerateError;
