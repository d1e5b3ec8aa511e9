use candle_core::Device;
use tracing::{info, warn};

/// Compute backend a [`Device`] was opened on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Cpu,
    Metal,
    Cuda,
}

impl Backend {
    /// Short label for logs and `/ready`.
    pub fn label(self) -> &'static str {
        match self {
            Backend::Cpu => "cpu",
            Backend::Metal => "metal",
            Backend::Cuda => "cuda",
        }
    }

    /// GPU backends compiled into this build, in preference order.
    pub fn compiled_gpus() -> Vec<Backend> {
        let mut gpus = Vec::new();
        if cfg!(feature = "metal") {
            gpus.push(Backend::Metal);
        }
        if cfg!(feature = "cuda") {
            gpus.push(Backend::Cuda);
        }
        gpus
    }

    fn open(self) -> candle_core::Result<Device> {
        match self {
            Backend::Cpu => Ok(Device::Cpu),
            Backend::Metal => Device::new_metal(0),
            Backend::Cuda => Device::new_cuda(0),
        }
    }
}

/// An opened device together with the backend it runs on.
#[derive(Debug, Clone)]
pub struct SelectedDevice {
    pub device: Device,
    pub backend: Backend,
}

/// Opens the first available compiled GPU backend, otherwise the CPU.
pub fn select_device() -> SelectedDevice {
    let mut failures = Vec::new();

    for backend in Backend::compiled_gpus() {
        match backend.open() {
            Ok(device) => {
                info!(backend = backend.label(), "Using GPU acceleration");
                return SelectedDevice { device, backend };
            }
            Err(e) => {
                warn!(backend = backend.label(), error = %e, "GPU device unavailable");
                failures.push(format!("{} failed: {e}", backend.label()));
            }
        }
    }

    let reason = if failures.is_empty() {
        "no GPU backend compiled".to_string()
    } else {
        failures.join("; ")
    };
    warn!(reason = %reason, "Falling back to CPU device");

    SelectedDevice {
        device: Device::Cpu,
        backend: Backend::Cpu,
    }
}
