use super::*;
use crate::*;
use std::ffi::c_void;
use std::mem::size_of;
use std::ptr::{null, null_mut};
use tracing::debug;
use windows::core::{Interface, HRESULT};
use windows::Foundation::Numerics::Matrix4x4;
use windows::Win32::Foundation::{BOOL, HWND, RECT};
use windows::Win32::Graphics::Direct3D9::*;

const SDK_VERSION: u32 = 32;

const _: () = {
    assert!(size_of::<Capabilities>() == size_of::<D3DCAPS9>());
    assert!(size_of::<RawPresentParameters>() == size_of::<D3DPRESENT_PARAMETERS>());
    assert!(size_of::<RawDisplayMode>() == size_of::<D3DDISPLAYMODE>());
    assert!(size_of::<RawDisplayModeEx>() == size_of::<D3DDISPLAYMODEEX>());
    assert!(size_of::<Material>() == size_of::<D3DMATERIAL9>());
    assert!(size_of::<Viewport>() == size_of::<D3DVIEWPORT9>());
    assert!(size_of::<Matrix>() == size_of::<Matrix4x4>());
    assert!(size_of::<Rect>() == size_of::<RECT>());
    assert!(size_of::<Rect>() == size_of::<D3DRECT>());
};

#[inline]
fn code(result: windows::core::Result<()>) -> ResultCode {
    match result {
        Ok(()) => ResultCode::OK,
        Err(e) => ResultCode(e.code().0),
    }
}

#[inline]
fn hresult(hr: HRESULT) -> ResultCode {
    ResultCode(hr.0)
}

#[inline]
fn fetch<T>(result: windows::core::Result<T>, out: &mut Option<T>) -> ResultCode {
    match result {
        Ok(v) => {
            *out = Some(v);
            ResultCode::OK
        }
        Err(e) => ResultCode(e.code().0),
    }
}

#[inline]
fn rect_ptr(rect: Option<&Rect>) -> *const RECT {
    rect.map_or(null(), |r| r as *const Rect as *const RECT)
}

/// Implements [`Backend`] for a type exposing `fn device(&self) -> &IDirect3DDevice9`.
macro_rules! impl_backend {
    ($name:ty) => {
        impl Backend for $name {
            type Surface = IDirect3DSurface9;
            type BaseTexture = IDirect3DBaseTexture9;
            type VertexBuffer = IDirect3DVertexBuffer9;
            type IndexBuffer = IDirect3DIndexBuffer9;
            type VertexDeclaration = IDirect3DVertexDeclaration9;
            type PixelShader = IDirect3DPixelShader9;
            type VertexShader = IDirect3DVertexShader9;

            fn test_cooperative_level(&self) -> ResultCode {
                let device = self.device();
                unsafe {
                    hresult((Interface::vtable(device).TestCooperativeLevel)(
                        Interface::as_raw(device),
                    ))
                }
            }

            fn get_available_texture_mem(&self) -> u32 {
                unsafe { self.device().GetAvailableTextureMem() }
            }

            fn evict_managed_resources(&self) -> ResultCode {
                unsafe { code(self.device().EvictManagedResources()) }
            }

            fn get_device_caps(&self, caps: &mut Capabilities) -> ResultCode {
                unsafe {
                    code(
                        self.device()
                            .GetDeviceCaps(caps as *mut Capabilities as *mut D3DCAPS9),
                    )
                }
            }

            fn get_display_mode(&self, swap_chain: u32, mode: &mut RawDisplayMode) -> ResultCode {
                unsafe {
                    code(self.device().GetDisplayMode(
                        swap_chain,
                        mode as *mut RawDisplayMode as *mut D3DDISPLAYMODE,
                    ))
                }
            }

            fn show_cursor(&self, show: bool) -> bool {
                unsafe { self.device().ShowCursor(BOOL::from(show)).as_bool() }
            }

            fn reset(&self, params: &mut RawPresentParameters) -> ResultCode {
                unsafe {
                    code(self.device().Reset(
                        params as *mut RawPresentParameters as *mut D3DPRESENT_PARAMETERS,
                    ))
                }
            }

            fn present(
                &self,
                source: Option<&Rect>,
                dest: Option<&Rect>,
                window_override: Hwnd,
                flags: u32,
            ) -> ResultCode {
                let device = self.device();
                unsafe {
                    if flags == 0 {
                        return hresult((Interface::vtable(device).Present)(
                            Interface::as_raw(device),
                            rect_ptr(source),
                            rect_ptr(dest),
                            HWND::from(window_override),
                            null(),
                        ));
                    }
                    let swap_chain = match device.GetSwapChain(0) {
                        Ok(swap_chain) => swap_chain,
                        Err(e) => return ResultCode(e.code().0),
                    };
                    hresult((Interface::vtable(&swap_chain).Present)(
                        Interface::as_raw(&swap_chain),
                        rect_ptr(source),
                        rect_ptr(dest),
                        HWND::from(window_override),
                        null(),
                        flags,
                    ))
                }
            }

            fn get_back_buffer(
                &self,
                swap_chain: u32,
                back_buffer: u32,
                surface: &mut Option<IDirect3DSurface9>,
            ) -> ResultCode {
                unsafe {
                    fetch(
                        self.device()
                            .GetBackBuffer(swap_chain, back_buffer, D3DBACKBUFFER_TYPE_MONO),
                        surface,
                    )
                }
            }

            fn set_render_target(
                &self,
                index: u32,
                target: Option<&IDirect3DSurface9>,
            ) -> ResultCode {
                unsafe { code(self.device().SetRenderTarget(index, target)) }
            }

            fn get_depth_stencil_surface(
                &self,
                surface: &mut Option<IDirect3DSurface9>,
            ) -> ResultCode {
                unsafe { fetch(self.device().GetDepthStencilSurface(), surface) }
            }

            fn begin_scene(&self) -> ResultCode {
                unsafe { code(self.device().BeginScene()) }
            }

            fn end_scene(&self) -> ResultCode {
                unsafe { code(self.device().EndScene()) }
            }

            fn clear(
                &self,
                rects: &[Rect],
                flags: u32,
                color: u32,
                z: f32,
                stencil: u32,
            ) -> ResultCode {
                let ptr = if rects.is_empty() {
                    null()
                } else {
                    rects.as_ptr() as *const D3DRECT
                };
                unsafe {
                    code(self.device().Clear(
                        rects.len() as u32,
                        ptr,
                        flags,
                        color,
                        z,
                        stencil,
                    ))
                }
            }

            fn set_transform(&self, state: u32, matrix: &Matrix) -> ResultCode {
                unsafe {
                    code(self.device().SetTransform(
                        D3DTRANSFORMSTATETYPE(state as i32),
                        matrix as *const Matrix as *const Matrix4x4,
                    ))
                }
            }

            fn get_transform(&self, state: u32, matrix: &mut Matrix) -> ResultCode {
                unsafe {
                    code(self.device().GetTransform(
                        D3DTRANSFORMSTATETYPE(state as i32),
                        matrix as *mut Matrix as *mut Matrix4x4,
                    ))
                }
            }

            fn set_viewport(&self, viewport: &Viewport) -> ResultCode {
                unsafe {
                    code(
                        self.device()
                            .SetViewport(viewport as *const Viewport as *const D3DVIEWPORT9),
                    )
                }
            }

            fn get_viewport(&self, viewport: &mut Viewport) -> ResultCode {
                unsafe {
                    code(
                        self.device()
                            .GetViewport(viewport as *mut Viewport as *mut D3DVIEWPORT9),
                    )
                }
            }

            fn set_material(&self, material: &Material) -> ResultCode {
                unsafe {
                    code(
                        self.device()
                            .SetMaterial(material as *const Material as *const D3DMATERIAL9),
                    )
                }
            }

            fn get_material(&self, material: &mut Material) -> ResultCode {
                unsafe {
                    code(
                        self.device()
                            .GetMaterial(material as *mut Material as *mut D3DMATERIAL9),
                    )
                }
            }

            fn set_render_state(&self, state: u32, value: u32) -> ResultCode {
                unsafe {
                    code(
                        self.device()
                            .SetRenderState(D3DRENDERSTATETYPE(state as i32), value),
                    )
                }
            }

            fn get_render_state(&self, state: u32, value: &mut u32) -> ResultCode {
                unsafe {
                    code(
                        self.device()
                            .GetRenderState(D3DRENDERSTATETYPE(state as i32), value),
                    )
                }
            }

            fn set_texture(&self, stage: u32, texture: Option<&IDirect3DBaseTexture9>) -> ResultCode {
                unsafe { code(self.device().SetTexture(stage, texture)) }
            }

            fn set_texture_stage_state(&self, stage: u32, ty: u32, value: u32) -> ResultCode {
                unsafe {
                    code(self.device().SetTextureStageState(
                        stage,
                        D3DTEXTURESTAGESTATETYPE(ty as i32),
                        value,
                    ))
                }
            }

            fn get_texture_stage_state(&self, stage: u32, ty: u32, value: &mut u32) -> ResultCode {
                unsafe {
                    code(self.device().GetTextureStageState(
                        stage,
                        D3DTEXTURESTAGESTATETYPE(ty as i32),
                        value,
                    ))
                }
            }

            fn set_sampler_state(&self, sampler: u32, ty: u32, value: u32) -> ResultCode {
                unsafe {
                    code(self.device().SetSamplerState(
                        sampler,
                        D3DSAMPLERSTATETYPE(ty as i32),
                        value,
                    ))
                }
            }

            fn get_sampler_state(&self, sampler: u32, ty: u32, value: &mut u32) -> ResultCode {
                unsafe {
                    code(self.device().GetSamplerState(
                        sampler,
                        D3DSAMPLERSTATETYPE(ty as i32),
                        value,
                    ))
                }
            }

            fn validate_device(&self, passes: &mut u32) -> ResultCode {
                unsafe { code(self.device().ValidateDevice(passes)) }
            }

            fn set_scissor_rect(&self, rect: &Rect) -> ResultCode {
                unsafe {
                    code(
                        self.device()
                            .SetScissorRect(rect as *const Rect as *const RECT),
                    )
                }
            }

            fn get_scissor_rect(&self, rect: &mut Rect) -> ResultCode {
                unsafe { code(self.device().GetScissorRect(rect as *mut Rect as *mut RECT)) }
            }

            fn set_software_vertex_processing(&self, software: bool) -> ResultCode {
                unsafe {
                    code(
                        self.device()
                            .SetSoftwareVertexProcessing(BOOL::from(software)),
                    )
                }
            }

            fn get_software_vertex_processing(&self) -> bool {
                unsafe { self.device().GetSoftwareVertexProcessing().as_bool() }
            }

            fn draw_primitive(&self, ty: u32, start_vertex: u32, primitive_count: u32) -> ResultCode {
                unsafe {
                    code(self.device().DrawPrimitive(
                        D3DPRIMITIVETYPE(ty as i32),
                        start_vertex,
                        primitive_count,
                    ))
                }
            }

            fn draw_indexed_primitive(
                &self,
                ty: u32,
                base_vertex_index: i32,
                min_vertex_index: u32,
                vertex_count: u32,
                start_index: u32,
                primitive_count: u32,
            ) -> ResultCode {
                unsafe {
                    code(self.device().DrawIndexedPrimitive(
                        D3DPRIMITIVETYPE(ty as i32),
                        base_vertex_index,
                        min_vertex_index,
                        vertex_count,
                        start_index,
                        primitive_count,
                    ))
                }
            }

            fn draw_primitive_up(
                &self,
                ty: u32,
                primitive_count: u32,
                vertices: &[u8],
                stride: u32,
            ) -> ResultCode {
                unsafe {
                    code(self.device().DrawPrimitiveUP(
                        D3DPRIMITIVETYPE(ty as i32),
                        primitive_count,
                        vertices.as_ptr() as *const c_void,
                        stride,
                    ))
                }
            }

            fn set_vertex_declaration(
                &self,
                decl: Option<&IDirect3DVertexDeclaration9>,
            ) -> ResultCode {
                unsafe { code(self.device().SetVertexDeclaration(decl)) }
            }

            fn get_vertex_declaration(
                &self,
                decl: &mut Option<IDirect3DVertexDeclaration9>,
            ) -> ResultCode {
                let device = self.device();
                let mut raw = null_mut();
                unsafe {
                    let hr = (Interface::vtable(device).GetVertexDeclaration)(
                        Interface::as_raw(device),
                        &mut raw,
                    );
                    if !raw.is_null() {
                        *decl = Some(IDirect3DVertexDeclaration9::from_raw(raw));
                    }
                    hresult(hr)
                }
            }

            fn set_fvf(&self, fvf: u32) -> ResultCode {
                unsafe { code(self.device().SetFVF(fvf)) }
            }

            fn get_fvf(&self, fvf: &mut u32) -> ResultCode {
                unsafe { code(self.device().GetFVF(fvf)) }
            }

            fn set_vertex_shader(&self, shader: Option<&IDirect3DVertexShader9>) -> ResultCode {
                unsafe { code(self.device().SetVertexShader(shader)) }
            }

            fn set_pixel_shader(&self, shader: Option<&IDirect3DPixelShader9>) -> ResultCode {
                unsafe { code(self.device().SetPixelShader(shader)) }
            }

            fn set_stream_source(
                &self,
                stream: u32,
                data: Option<&IDirect3DVertexBuffer9>,
                offset_in_bytes: u32,
                stride: u32,
            ) -> ResultCode {
                unsafe {
                    code(
                        self.device()
                            .SetStreamSource(stream, data, offset_in_bytes, stride),
                    )
                }
            }

            fn set_stream_source_freq(&self, stream: u32, setting: u32) -> ResultCode {
                unsafe { code(self.device().SetStreamSourceFreq(stream, setting)) }
            }

            fn set_indices(&self, indices: Option<&IDirect3DIndexBuffer9>) -> ResultCode {
                unsafe { code(self.device().SetIndices(indices)) }
            }

            fn get_indices(&self, indices: &mut Option<IDirect3DIndexBuffer9>) -> ResultCode {
                let device = self.device();
                let mut raw = null_mut();
                unsafe {
                    let hr = (Interface::vtable(device).GetIndices)(
                        Interface::as_raw(device),
                        &mut raw,
                    );
                    if !raw.is_null() {
                        *indices = Some(IDirect3DIndexBuffer9::from_raw(raw));
                    }
                    hresult(hr)
                }
            }

            fn check_query(&self, ty: u32) -> ResultCode {
                let device = self.device();
                unsafe {
                    hresult((Interface::vtable(device).CreateQuery)(
                        Interface::as_raw(device),
                        D3DQUERYTYPE(ty as i32),
                        null_mut(),
                    ))
                }
            }
        }
    };
}

/// [`Backend`] over an `IDirect3DDevice9`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct NativeDevice(IDirect3DDevice9);

impl NativeDevice {
    /// Wraps a device created elsewhere.
    #[inline]
    pub fn from_raw(device: IDirect3DDevice9) -> Self {
        Self(device)
    }

    #[inline]
    pub fn handle(&self) -> &IDirect3DDevice9 {
        &self.0
    }

    #[inline]
    fn device(&self) -> &IDirect3DDevice9 {
        &self.0
    }
}

impl_backend!(NativeDevice);

/// [`BackendEx`] over an `IDirect3DDevice9Ex`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct NativeDeviceEx(IDirect3DDevice9Ex);

impl NativeDeviceEx {
    /// Wraps a device created elsewhere.
    #[inline]
    pub fn from_raw(device: IDirect3DDevice9Ex) -> Self {
        Self(device)
    }

    #[inline]
    pub fn handle(&self) -> &IDirect3DDevice9Ex {
        &self.0
    }

    #[inline]
    fn device(&self) -> &IDirect3DDevice9 {
        &self.0
    }
}

impl_backend!(NativeDeviceEx);

impl BackendEx for NativeDeviceEx {
    type Resource = IDirect3DResource9;

    fn set_gpu_thread_priority(&self, priority: i32) -> ResultCode {
        unsafe { code(self.0.SetGPUThreadPriority(priority)) }
    }

    fn get_gpu_thread_priority(&self, priority: &mut i32) -> ResultCode {
        unsafe { code(self.0.GetGPUThreadPriority(priority)) }
    }

    fn set_maximum_frame_latency(&self, latency: u32) -> ResultCode {
        unsafe { code(self.0.SetMaximumFrameLatency(latency)) }
    }

    fn get_maximum_frame_latency(&self, latency: &mut u32) -> ResultCode {
        unsafe { code(self.0.GetMaximumFrameLatency(latency)) }
    }

    fn wait_for_vblank(&self, swap_chain: u32) -> ResultCode {
        unsafe { code(self.0.WaitForVBlank(swap_chain)) }
    }

    fn check_resource_residency(&self, resources: &[IDirect3DResource9]) -> ResultCode {
        unsafe {
            hresult((Interface::vtable(&self.0).CheckResourceResidency)(
                Interface::as_raw(&self.0),
                resources.as_ptr() as *mut *mut c_void,
                resources.len() as u32,
            ))
        }
    }

    fn check_device_state(&self, window: Hwnd) -> ResultCode {
        unsafe {
            hresult((Interface::vtable(&self.0).CheckDeviceState)(
                Interface::as_raw(&self.0),
                HWND::from(window),
            ))
        }
    }

    fn present_ex(
        &self,
        source: Option<&Rect>,
        dest: Option<&Rect>,
        window_override: Hwnd,
        flags: u32,
    ) -> ResultCode {
        unsafe {
            hresult((Interface::vtable(&self.0).PresentEx)(
                Interface::as_raw(&self.0),
                rect_ptr(source),
                rect_ptr(dest),
                HWND::from(window_override),
                null(),
                flags,
            ))
        }
    }

    fn reset_ex(
        &self,
        params: &mut RawPresentParameters,
        fullscreen_mode: Option<&mut RawDisplayModeEx>,
    ) -> ResultCode {
        let mode = fullscreen_mode.map_or(null_mut(), |m| {
            m as *mut RawDisplayModeEx as *mut D3DDISPLAYMODEEX
        });
        unsafe {
            code(self.0.ResetEx(
                params as *mut RawPresentParameters as *mut D3DPRESENT_PARAMETERS,
                mode,
            ))
        }
    }

    fn get_display_mode_ex(
        &self,
        swap_chain: u32,
        mode: &mut RawDisplayModeEx,
        rotation: Option<&mut u32>,
    ) -> ResultCode {
        let rotation = rotation.map_or(null_mut(), |r| r as *mut u32 as *mut D3DDISPLAYROTATION);
        unsafe {
            code(self.0.GetDisplayModeEx(
                swap_chain,
                mode as *mut RawDisplayModeEx as *mut D3DDISPLAYMODEEX,
                rotation,
            ))
        }
    }
}

/// `IDirect3D9`, the entry point for creating devices.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Direct3D(IDirect3D9);

impl Direct3D {
    pub fn new() -> Result<Self> {
        let d3d = unsafe { Direct3DCreate9(SDK_VERSION) }.ok_or(ErrorKind::Fail)?;
        debug!("Direct3D::new");
        Ok(Self(d3d))
    }

    #[inline]
    pub fn handle(&self) -> &IDirect3D9 {
        &self.0
    }

    #[inline]
    pub fn adapter_count(&self) -> u32 {
        unsafe { self.0.GetAdapterCount() }
    }

    pub fn adapter_display_mode(&self, adapter: u32) -> Result<DisplayMode> {
        adapter_display_mode(&self.0, adapter)
    }

    /// Creates a device. Values the runtime fills in are written back to `params`.
    pub fn create_device(
        &self,
        adapter: u32,
        device_type: DeviceType,
        focus_window: impl AsWindowHandle,
        flags: CreateFlags,
        params: &mut PresentParameters,
    ) -> Result<Device<NativeDevice>> {
        let mut raw = RawPresentParameters::from(&*params);
        let mut device = None;
        unsafe {
            self.0.CreateDevice(
                adapter,
                D3DDEVTYPE(device_type.to_raw() as i32),
                HWND::from(focus_window.window_handle()),
                flags.bits(),
                &mut raw as *mut RawPresentParameters as *mut D3DPRESENT_PARAMETERS,
                &mut device,
            )?;
        }
        let device = device.ok_or(ErrorKind::Pointer)?;
        *params = PresentParameters::try_from(&raw)?;
        debug!(
            "Direct3D::create_device: adapter {}, {:?}, {}x{}",
            adapter, device_type, params.back_buffer_width, params.back_buffer_height
        );
        Ok(Device::from_backend(NativeDevice(device)))
    }
}

/// `IDirect3D9Ex`, the entry point for creating Direct3D9Ex devices.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Direct3DEx(IDirect3D9Ex);

impl Direct3DEx {
    pub fn new() -> Result<Self> {
        let d3d = unsafe { Direct3DCreate9Ex(SDK_VERSION)? };
        debug!("Direct3DEx::new");
        Ok(Self(d3d))
    }

    #[inline]
    pub fn handle(&self) -> &IDirect3D9Ex {
        &self.0
    }

    #[inline]
    pub fn adapter_count(&self) -> u32 {
        unsafe { self.0.GetAdapterCount() }
    }

    pub fn adapter_display_mode(&self, adapter: u32) -> Result<DisplayMode> {
        adapter_display_mode(&self.0, adapter)
    }

    pub fn adapter_display_mode_ex(
        &self,
        adapter: u32,
    ) -> Result<(DisplayModeEx, DisplayRotation)> {
        let mut mode = RawDisplayModeEx::sized();
        let mut rotation = D3DDISPLAYROTATION(0);
        unsafe {
            self.0.GetAdapterDisplayModeEx(
                adapter,
                &mut mode as *mut RawDisplayModeEx as *mut D3DDISPLAYMODEEX,
                &mut rotation,
            )?;
        }
        Ok((
            DisplayModeEx::try_from(&mode)?,
            (rotation.0 as u32).try_into()?,
        ))
    }

    /// Creates a device. `fullscreen_mode` must be given exactly when
    /// `params` is not windowed.
    pub fn create_device_ex(
        &self,
        adapter: u32,
        device_type: DeviceType,
        focus_window: impl AsWindowHandle,
        flags: CreateFlags,
        params: &mut PresentParameters,
        fullscreen_mode: Option<&mut DisplayModeEx>,
    ) -> Result<DeviceEx<NativeDeviceEx>> {
        let mut raw = RawPresentParameters::from(&*params);
        let mut raw_mode = fullscreen_mode.as_deref().map(RawDisplayModeEx::from);
        let mode_ptr = raw_mode.as_mut().map_or(null_mut(), |m| {
            m as *mut RawDisplayModeEx as *mut D3DDISPLAYMODEEX
        });
        let mut device = None;
        unsafe {
            self.0.CreateDeviceEx(
                adapter,
                D3DDEVTYPE(device_type.to_raw() as i32),
                HWND::from(focus_window.window_handle()),
                flags.bits(),
                &mut raw as *mut RawPresentParameters as *mut D3DPRESENT_PARAMETERS,
                mode_ptr,
                &mut device,
            )?;
        }
        let device = device.ok_or(ErrorKind::Pointer)?;
        *params = PresentParameters::try_from(&raw)?;
        if let (Some(mode), Some(raw_mode)) = (fullscreen_mode, raw_mode.as_ref()) {
            *mode = DisplayModeEx::try_from(raw_mode)?;
        }
        debug!(
            "Direct3DEx::create_device_ex: adapter {}, {:?}, {}x{}",
            adapter, device_type, params.back_buffer_width, params.back_buffer_height
        );
        Ok(DeviceEx::from_backend(NativeDeviceEx(device)))
    }
}

fn adapter_display_mode(d3d: &IDirect3D9, adapter: u32) -> Result<DisplayMode> {
    let mut mode = RawDisplayMode::default();
    unsafe {
        d3d.GetAdapterDisplayMode(
            adapter,
            &mut mode as *mut RawDisplayMode as *mut D3DDISPLAYMODE,
        )?;
    }
    DisplayMode::try_from(&mode)
}
