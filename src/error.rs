use thiserror::Error;

/// Failures while bringing up the window surface and GPU device.
#[derive(Debug, Error)]
pub enum GfxError {
    #[error("failed to create window surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("no GPU adapter can present to this window")]
    NoAdapter,

    #[error("failed to open GPU device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("surface reports no supported texture formats")]
    NoSurfaceFormat,
}
