//! Built-in Fargate compatibility checks.

pub mod computing;
pub mod cpu_windows;
pub mod ephemeral_storage;
pub mod gpu;
pub mod linux_parameters;
pub mod log_configuration;
pub mod network_mode;
pub mod requires_compatibilities;
pub mod stop_timeout;
pub mod ulimits;
pub mod unsupported_parameters;
pub mod volumes;

pub use computing::{sizing_tier, ComputingCheck, SizingTier, LINUX_SIZING, WINDOWS_SIZING};
pub use cpu_windows::WindowsCpuCheck;
pub use ephemeral_storage::EphemeralStorageCheck;
pub use gpu::GpuCheck;
pub use linux_parameters::{LinuxCapabilitiesCheck, LinuxParametersCheck};
pub use log_configuration::LogConfigurationCheck;
pub use network_mode::NetworkModeCheck;
pub use requires_compatibilities::RequiresCompatibilitiesCheck;
pub use stop_timeout::StopTimeoutCheck;
pub use ulimits::UlimitsCheck;
pub use unsupported_parameters::{
    UnsupportedContainerParametersCheck, UnsupportedRootParametersCheck,
    UNSUPPORTED_CONTAINER_PARAMETERS, UNSUPPORTED_ROOT_PARAMETERS,
};
pub use volumes::{DockerVolumeConfigurationCheck, VolumeTypesCheck};
