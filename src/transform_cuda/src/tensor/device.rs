//! Execution device tags.

use std::fmt;
use std::str::FromStr;

use crate::error::TransformError;

/// Class of execution device a tensor is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceType {
    Cpu,
    Cuda,
    /// Recognized but not supported by any rotation kernel.
    Sycl,
}

impl DeviceType {
    fn name(&self) -> &'static str {
        match self {
            DeviceType::Cpu => "CPU",
            DeviceType::Cuda => "CUDA",
            DeviceType::Sycl => "SYCL",
        }
    }
}

/// Execution device: a device class plus an ordinal within that class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Device {
    device_type: DeviceType,
    id: usize,
}

impl Device {
    pub fn new(device_type: DeviceType, id: usize) -> Self {
        Self { device_type, id }
    }

    /// The host CPU.
    pub fn cpu() -> Self {
        Self::new(DeviceType::Cpu, 0)
    }

    /// CUDA device with the given ordinal.
    pub fn cuda(id: usize) -> Self {
        Self::new(DeviceType::Cuda, id)
    }

    /// SYCL device with the given ordinal.
    pub fn sycl(id: usize) -> Self {
        Self::new(DeviceType::Sycl, id)
    }

    pub fn device_type(&self) -> DeviceType {
        self.device_type
    }

    pub fn id(&self) -> usize {
        self.id
    }
}

impl Default for Device {
    fn default() -> Self {
        Self::cpu()
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.device_type.name(), self.id)
    }
}

/// Parses `"CPU:0"`, `"cuda:1"` or a bare `"CUDA"` (ordinal 0).
impl FromStr for Device {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TransformError::InvalidDevice(s.to_string());

        let (type_str, id_str) = match s.trim().split_once(':') {
            Some((t, i)) => (t, Some(i)),
            None => (s.trim(), None),
        };

        let device_type = match type_str.to_ascii_uppercase().as_str() {
            "CPU" => DeviceType::Cpu,
            "CUDA" => DeviceType::Cuda,
            "SYCL" => DeviceType::Sycl,
            _ => return Err(invalid()),
        };

        let id = match id_str {
            Some(i) => i.parse::<usize>().map_err(|_| invalid())?,
            None => 0,
        };

        Ok(Device::new(device_type, id))
    }
}
