use super::*;
use crate::*;
use tracing::{debug, warn};

/// A Direct3D9Ex device, wrapping `IDirect3DDevice9Ex`.
///
/// Dereferences to [`Device`] for the methods both interfaces share.
#[derive(Clone, Debug)]
pub struct DeviceEx<B: BackendEx> {
    device: Device<B>,
}

impl<B: BackendEx> DeviceEx<B> {
    #[inline]
    pub fn from_backend(backend: B) -> Self {
        Self {
            device: Device::from_backend(backend),
        }
    }

    #[inline]
    pub fn into_backend(self) -> B {
        self.device.into_backend()
    }

    /// Priority of the GPU thread, clamped by the runtime to `-7..=7`.
    #[inline]
    pub fn gpu_thread_priority(&self) -> Result<i32> {
        let mut priority = 0;
        self.backend().get_gpu_thread_priority(&mut priority).ok()?;
        Ok(priority)
    }

    #[inline]
    pub fn set_gpu_thread_priority(&self, priority: i32) -> Result<()> {
        self.backend().set_gpu_thread_priority(priority).ok()
    }

    #[inline]
    pub fn maximum_frame_latency(&self) -> Result<u32> {
        let mut latency = 0;
        self.backend().get_maximum_frame_latency(&mut latency).ok()?;
        Ok(latency)
    }

    /// `0` restores the default latency of three frames.
    #[inline]
    pub fn set_maximum_frame_latency(&self, latency: u32) -> Result<()> {
        self.backend().set_maximum_frame_latency(latency).ok()
    }

    /// Reports whether the device can present to `window`.
    ///
    /// A null window checks the device itself.
    pub fn check_device_state(&self, window: impl AsWindowHandle) -> Result<DeviceState> {
        let code = self.backend().check_device_state(window.window_handle());
        let state = DeviceState::try_from(code.0).map_err(|_| Error::Native(code))?;
        if matches!(
            state,
            DeviceState::DeviceLost | DeviceState::DeviceHung | DeviceState::DeviceRemoved
        ) {
            warn!("device state: {:?}", state);
        }
        Ok(state)
    }

    /// The least resident state among `resources`.
    pub fn check_resource_residency(&self, resources: &[B::Resource]) -> Result<ResourceResidency> {
        let code = self.backend().check_resource_residency(resources);
        ResourceResidency::try_from(code.0).map_err(|_| Error::Native(code))
    }

    pub fn display_mode_ex(&self, swap_chain: u32) -> Result<(DisplayModeEx, DisplayRotation)> {
        let mut mode = RawDisplayModeEx::sized();
        let mut rotation = 0;
        self.backend()
            .get_display_mode_ex(swap_chain, &mut mode, Some(&mut rotation))
            .ok()?;
        Ok((DisplayModeEx::try_from(&mode)?, rotation.try_into()?))
    }

    /// Presents through swap chain 0 with `flags`. Success codes are
    /// returned in `Ok`.
    #[inline]
    pub fn present_ex(&self, flags: Present) -> Result<ResultCode> {
        self.backend()
            .present_ex(None, None, Hwnd::NULL, flags.bits())
            .check()
    }

    #[inline]
    pub fn present_ex_to(&self, window: impl AsWindowHandle, flags: Present) -> Result<ResultCode> {
        self.backend()
            .present_ex(None, None, window.window_handle(), flags.bits())
            .check()
    }

    /// Resets the device. `fullscreen_mode` is required for fullscreen
    /// parameters and must be `None` when windowed.
    ///
    /// `params` and `fullscreen_mode` receive the native write-backs only
    /// when the reset succeeds and both convert. Otherwise neither changes.
    pub fn reset_ex(
        &self,
        params: &mut PresentParameters,
        fullscreen_mode: Option<&mut DisplayModeEx>,
    ) -> Result<()> {
        let mut raw = RawPresentParameters::from(&*params);
        let mut raw_mode = fullscreen_mode.as_deref().map(RawDisplayModeEx::from);
        let code = self.backend().reset_ex(&mut raw, raw_mode.as_mut());
        debug!("reset_ex: {}", code);
        code.ok()?;
        let new_params = PresentParameters::try_from(&raw)?;
        let new_mode = raw_mode.as_ref().map(DisplayModeEx::try_from).transpose()?;
        *params = new_params;
        if let (Some(mode), Some(new_mode)) = (fullscreen_mode, new_mode) {
            *mode = new_mode;
        }
        Ok(())
    }

    #[inline]
    pub fn wait_for_vblank(&self, swap_chain: u32) -> Result<()> {
        self.backend().wait_for_vblank(swap_chain).ok()
    }
}

impl<B: BackendEx> std::ops::Deref for DeviceEx<B> {
    type Target = Device<B>;

    #[inline]
    fn deref(&self) -> &Device<B> {
        &self.device
    }
}
