//! A recording backend used by the unit tests.

use super::backend::*;
use super::types::*;
use crate::*;
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

#[derive(Clone, PartialEq, Debug)]
pub(crate) enum Call {
    TestCooperativeLevel,
    EvictManagedResources,
    GetDeviceCaps,
    GetDisplayMode(u32),
    ShowCursor(bool),
    Reset(RawPresentParameters),
    Present {
        source: Option<Rect>,
        dest: Option<Rect>,
        window: Hwnd,
        flags: u32,
    },
    GetBackBuffer(u32, u32),
    SetRenderTarget(u32, Option<u32>),
    GetDepthStencilSurface,
    BeginScene,
    EndScene,
    Clear {
        rects: Vec<Rect>,
        flags: u32,
        color: u32,
        z: f32,
        stencil: u32,
    },
    SetTransform(u32, Matrix),
    GetTransform(u32),
    SetViewport(Viewport),
    GetViewport,
    SetMaterial(Material),
    GetMaterial,
    SetRenderState(u32, u32),
    GetRenderState(u32),
    SetTexture(u32, Option<u32>),
    SetTextureStageState(u32, u32, u32),
    GetTextureStageState(u32, u32),
    SetSamplerState(u32, u32, u32),
    GetSamplerState(u32, u32),
    ValidateDevice,
    SetScissorRect(Rect),
    GetScissorRect,
    SetSoftwareVertexProcessing(bool),
    GetSoftwareVertexProcessing,
    DrawPrimitive(u32, u32, u32),
    DrawIndexedPrimitive(u32, i32, u32, u32, u32, u32),
    DrawPrimitiveUp {
        ty: u32,
        primitive_count: u32,
        vertices: Vec<u8>,
        stride: u32,
    },
    SetVertexDeclaration(Option<u32>),
    GetVertexDeclaration,
    SetFvf(u32),
    GetFvf,
    SetVertexShader(Option<u32>),
    SetPixelShader(Option<u32>),
    SetStreamSource(u32, Option<u32>, u32, u32),
    SetStreamSourceFreq(u32, u32),
    SetIndices(Option<u32>),
    GetIndices,
    CheckQuery(u32),
    SetGpuThreadPriority(i32),
    GetGpuThreadPriority,
    SetMaximumFrameLatency(u32),
    GetMaximumFrameLatency,
    WaitForVBlank(u32),
    CheckResourceResidency(Vec<u32>),
    CheckDeviceState(Hwnd),
    PresentEx {
        source: Option<Rect>,
        dest: Option<Rect>,
        window: Hwnd,
        flags: u32,
    },
    ResetEx(RawPresentParameters, Option<RawDisplayModeEx>),
    GetDisplayModeEx(u32, bool),
}

/// Values the mock hands back through out-parameters.
#[derive(Default)]
pub(crate) struct MockState {
    pub render_states: HashMap<u32, u32>,
    pub texture_stage_states: HashMap<(u32, u32), u32>,
    pub sampler_states: HashMap<(u32, u32), u32>,
    pub transforms: HashMap<u32, Matrix>,
    pub viewport: Viewport,
    pub material: Material,
    pub scissor_rect: Rect,
    pub fvf: u32,
    pub indices: Option<u32>,
    pub vertex_declaration: Option<u32>,
    pub software_vertex_processing: bool,
    pub cursor_visible: bool,
    pub texture_mem: u32,
    pub caps: Capabilities,
    pub display_mode: RawDisplayMode,
    pub display_mode_ex: RawDisplayModeEx,
    pub rotation: u32,
    pub gpu_thread_priority: i32,
    pub frame_latency: u32,
    pub passes: u32,
    pub client_size: (u32, u32),
    pub surface_id: u32,
}

#[derive(Default)]
pub(crate) struct MockDevice {
    calls: RefCell<Vec<Call>>,
    codes: RefCell<VecDeque<ResultCode>>,
    pub(crate) state: RefCell<MockState>,
}

impl MockDevice {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Queues the code returned by the next status-returning call.
    pub(crate) fn push_code(&self, code: impl Into<ResultCode>) {
        self.codes.borrow_mut().push_back(code.into());
    }

    /// Drains the recorded calls.
    pub(crate) fn take_calls(&self) -> Vec<Call> {
        std::mem::take(&mut *self.calls.borrow_mut())
    }

    fn record(&self, call: Call) -> ResultCode {
        self.calls.borrow_mut().push(call);
        self.codes.borrow_mut().pop_front().unwrap_or(ResultCode::OK)
    }

    fn record_only(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    /// Windowed devices take their size from the client area and an unknown
    /// back buffer format from the display mode.
    fn fill_reset_params(&self, params: &mut RawPresentParameters) {
        let state = self.state.borrow();
        if params.windowed == 0 {
            return;
        }
        if params.back_buffer_width == 0 {
            (params.back_buffer_width, params.back_buffer_height) = state.client_size;
        }
        if params.back_buffer_format == 0 {
            params.back_buffer_format = state.display_mode.format;
        }
    }
}

impl Backend for MockDevice {
    type Surface = u32;
    type BaseTexture = u32;
    type VertexBuffer = u32;
    type IndexBuffer = u32;
    type VertexDeclaration = u32;
    type PixelShader = u32;
    type VertexShader = u32;

    fn test_cooperative_level(&self) -> ResultCode {
        self.record(Call::TestCooperativeLevel)
    }

    fn get_available_texture_mem(&self) -> u32 {
        self.state.borrow().texture_mem
    }

    fn evict_managed_resources(&self) -> ResultCode {
        self.record(Call::EvictManagedResources)
    }

    fn get_device_caps(&self, caps: &mut Capabilities) -> ResultCode {
        *caps = self.state.borrow().caps;
        self.record(Call::GetDeviceCaps)
    }

    fn get_display_mode(&self, swap_chain: u32, mode: &mut RawDisplayMode) -> ResultCode {
        *mode = self.state.borrow().display_mode;
        self.record(Call::GetDisplayMode(swap_chain))
    }

    fn show_cursor(&self, show: bool) -> bool {
        self.record_only(Call::ShowCursor(show));
        std::mem::replace(&mut self.state.borrow_mut().cursor_visible, show)
    }

    fn reset(&self, params: &mut RawPresentParameters) -> ResultCode {
        let code = self.record(Call::Reset(*params));
        if code.is_success() {
            self.fill_reset_params(params);
        }
        code
    }

    fn present(
        &self,
        source: Option<&Rect>,
        dest: Option<&Rect>,
        window_override: Hwnd,
        flags: u32,
    ) -> ResultCode {
        self.record(Call::Present {
            source: source.copied(),
            dest: dest.copied(),
            window: window_override,
            flags,
        })
    }

    fn get_back_buffer(
        &self,
        swap_chain: u32,
        back_buffer: u32,
        surface: &mut Option<u32>,
    ) -> ResultCode {
        let code = self.record(Call::GetBackBuffer(swap_chain, back_buffer));
        if code.is_success() {
            *surface = Some(self.state.borrow().surface_id);
        }
        code
    }

    fn set_render_target(&self, index: u32, target: Option<&u32>) -> ResultCode {
        self.record(Call::SetRenderTarget(index, target.copied()))
    }

    fn get_depth_stencil_surface(&self, surface: &mut Option<u32>) -> ResultCode {
        let code = self.record(Call::GetDepthStencilSurface);
        if code.is_success() {
            *surface = Some(self.state.borrow().surface_id);
        }
        code
    }

    fn begin_scene(&self) -> ResultCode {
        self.record(Call::BeginScene)
    }

    fn end_scene(&self) -> ResultCode {
        self.record(Call::EndScene)
    }

    fn clear(&self, rects: &[Rect], flags: u32, color: u32, z: f32, stencil: u32) -> ResultCode {
        self.record(Call::Clear {
            rects: rects.to_vec(),
            flags,
            color,
            z,
            stencil,
        })
    }

    fn set_transform(&self, state: u32, matrix: &Matrix) -> ResultCode {
        self.state.borrow_mut().transforms.insert(state, *matrix);
        self.record(Call::SetTransform(state, *matrix))
    }

    fn get_transform(&self, state: u32, matrix: &mut Matrix) -> ResultCode {
        *matrix = self
            .state
            .borrow()
            .transforms
            .get(&state)
            .copied()
            .unwrap_or(Matrix::IDENTITY);
        self.record(Call::GetTransform(state))
    }

    fn set_viewport(&self, viewport: &Viewport) -> ResultCode {
        self.state.borrow_mut().viewport = *viewport;
        self.record(Call::SetViewport(*viewport))
    }

    fn get_viewport(&self, viewport: &mut Viewport) -> ResultCode {
        *viewport = self.state.borrow().viewport;
        self.record(Call::GetViewport)
    }

    fn set_material(&self, material: &Material) -> ResultCode {
        self.state.borrow_mut().material = *material;
        self.record(Call::SetMaterial(*material))
    }

    fn get_material(&self, material: &mut Material) -> ResultCode {
        *material = self.state.borrow().material;
        self.record(Call::GetMaterial)
    }

    fn set_render_state(&self, state: u32, value: u32) -> ResultCode {
        self.state.borrow_mut().render_states.insert(state, value);
        self.record(Call::SetRenderState(state, value))
    }

    fn get_render_state(&self, state: u32, value: &mut u32) -> ResultCode {
        *value = self
            .state
            .borrow()
            .render_states
            .get(&state)
            .copied()
            .unwrap_or(0);
        self.record(Call::GetRenderState(state))
    }

    fn set_texture(&self, stage: u32, texture: Option<&u32>) -> ResultCode {
        self.record(Call::SetTexture(stage, texture.copied()))
    }

    fn set_texture_stage_state(&self, stage: u32, ty: u32, value: u32) -> ResultCode {
        self.state
            .borrow_mut()
            .texture_stage_states
            .insert((stage, ty), value);
        self.record(Call::SetTextureStageState(stage, ty, value))
    }

    fn get_texture_stage_state(&self, stage: u32, ty: u32, value: &mut u32) -> ResultCode {
        *value = self
            .state
            .borrow()
            .texture_stage_states
            .get(&(stage, ty))
            .copied()
            .unwrap_or(0);
        self.record(Call::GetTextureStageState(stage, ty))
    }

    fn set_sampler_state(&self, sampler: u32, ty: u32, value: u32) -> ResultCode {
        self.state
            .borrow_mut()
            .sampler_states
            .insert((sampler, ty), value);
        self.record(Call::SetSamplerState(sampler, ty, value))
    }

    fn get_sampler_state(&self, sampler: u32, ty: u32, value: &mut u32) -> ResultCode {
        *value = self
            .state
            .borrow()
            .sampler_states
            .get(&(sampler, ty))
            .copied()
            .unwrap_or(0);
        self.record(Call::GetSamplerState(sampler, ty))
    }

    fn validate_device(&self, passes: &mut u32) -> ResultCode {
        *passes = self.state.borrow().passes;
        self.record(Call::ValidateDevice)
    }

    fn set_scissor_rect(&self, rect: &Rect) -> ResultCode {
        self.state.borrow_mut().scissor_rect = *rect;
        self.record(Call::SetScissorRect(*rect))
    }

    fn get_scissor_rect(&self, rect: &mut Rect) -> ResultCode {
        *rect = self.state.borrow().scissor_rect;
        self.record(Call::GetScissorRect)
    }

    fn set_software_vertex_processing(&self, software: bool) -> ResultCode {
        self.state.borrow_mut().software_vertex_processing = software;
        self.record(Call::SetSoftwareVertexProcessing(software))
    }

    fn get_software_vertex_processing(&self) -> bool {
        self.record_only(Call::GetSoftwareVertexProcessing);
        self.state.borrow().software_vertex_processing
    }

    fn draw_primitive(&self, ty: u32, start_vertex: u32, primitive_count: u32) -> ResultCode {
        self.record(Call::DrawPrimitive(ty, start_vertex, primitive_count))
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
        self.record(Call::DrawIndexedPrimitive(
            ty,
            base_vertex_index,
            min_vertex_index,
            vertex_count,
            start_index,
            primitive_count,
        ))
    }

    fn draw_primitive_up(
        &self,
        ty: u32,
        primitive_count: u32,
        vertices: &[u8],
        stride: u32,
    ) -> ResultCode {
        self.record(Call::DrawPrimitiveUp {
            ty,
            primitive_count,
            vertices: vertices.to_vec(),
            stride,
        })
    }

    fn set_vertex_declaration(&self, decl: Option<&u32>) -> ResultCode {
        self.state.borrow_mut().vertex_declaration = decl.copied();
        self.record(Call::SetVertexDeclaration(decl.copied()))
    }

    fn get_vertex_declaration(&self, decl: &mut Option<u32>) -> ResultCode {
        *decl = self.state.borrow().vertex_declaration;
        self.record(Call::GetVertexDeclaration)
    }

    fn set_fvf(&self, fvf: u32) -> ResultCode {
        self.state.borrow_mut().fvf = fvf;
        self.record(Call::SetFvf(fvf))
    }

    fn get_fvf(&self, fvf: &mut u32) -> ResultCode {
        *fvf = self.state.borrow().fvf;
        self.record(Call::GetFvf)
    }

    fn set_vertex_shader(&self, shader: Option<&u32>) -> ResultCode {
        self.record(Call::SetVertexShader(shader.copied()))
    }

    fn set_pixel_shader(&self, shader: Option<&u32>) -> ResultCode {
        self.record(Call::SetPixelShader(shader.copied()))
    }

    fn set_stream_source(
        &self,
        stream: u32,
        data: Option<&u32>,
        offset_in_bytes: u32,
        stride: u32,
    ) -> ResultCode {
        self.record(Call::SetStreamSource(
            stream,
            data.copied(),
            offset_in_bytes,
            stride,
        ))
    }

    fn set_stream_source_freq(&self, stream: u32, setting: u32) -> ResultCode {
        self.record(Call::SetStreamSourceFreq(stream, setting))
    }

    fn set_indices(&self, indices: Option<&u32>) -> ResultCode {
        self.state.borrow_mut().indices = indices.copied();
        self.record(Call::SetIndices(indices.copied()))
    }

    fn get_indices(&self, indices: &mut Option<u32>) -> ResultCode {
        *indices = self.state.borrow().indices;
        self.record(Call::GetIndices)
    }

    fn check_query(&self, ty: u32) -> ResultCode {
        self.record(Call::CheckQuery(ty))
    }
}

impl BackendEx for MockDevice {
    type Resource = u32;

    fn set_gpu_thread_priority(&self, priority: i32) -> ResultCode {
        self.state.borrow_mut().gpu_thread_priority = priority;
        self.record(Call::SetGpuThreadPriority(priority))
    }

    fn get_gpu_thread_priority(&self, priority: &mut i32) -> ResultCode {
        *priority = self.state.borrow().gpu_thread_priority;
        self.record(Call::GetGpuThreadPriority)
    }

    fn set_maximum_frame_latency(&self, latency: u32) -> ResultCode {
        self.state.borrow_mut().frame_latency = latency;
        self.record(Call::SetMaximumFrameLatency(latency))
    }

    fn get_maximum_frame_latency(&self, latency: &mut u32) -> ResultCode {
        *latency = self.state.borrow().frame_latency;
        self.record(Call::GetMaximumFrameLatency)
    }

    fn wait_for_vblank(&self, swap_chain: u32) -> ResultCode {
        self.record(Call::WaitForVBlank(swap_chain))
    }

    fn check_resource_residency(&self, resources: &[u32]) -> ResultCode {
        self.record(Call::CheckResourceResidency(resources.to_vec()))
    }

    fn check_device_state(&self, window: Hwnd) -> ResultCode {
        self.record(Call::CheckDeviceState(window))
    }

    fn present_ex(
        &self,
        source: Option<&Rect>,
        dest: Option<&Rect>,
        window_override: Hwnd,
        flags: u32,
    ) -> ResultCode {
        self.record(Call::PresentEx {
            source: source.copied(),
            dest: dest.copied(),
            window: window_override,
            flags,
        })
    }

    fn reset_ex(
        &self,
        params: &mut RawPresentParameters,
        fullscreen_mode: Option<&mut RawDisplayModeEx>,
    ) -> ResultCode {
        let code = self.record(Call::ResetEx(*params, fullscreen_mode.as_deref().copied()));
        if code.is_success() {
            self.fill_reset_params(params);
            if let Some(mode) = fullscreen_mode {
                let state = self.state.borrow();
                if mode.refresh_rate == 0 {
                    mode.refresh_rate = state.display_mode_ex.refresh_rate;
                }
                if mode.scanline_ordering == 0 {
                    mode.scanline_ordering = state.display_mode_ex.scanline_ordering;
                }
            }
        }
        code
    }

    fn get_display_mode_ex(
        &self,
        swap_chain: u32,
        mode: &mut RawDisplayModeEx,
        rotation: Option<&mut u32>,
    ) -> ResultCode {
        let state = self.state.borrow();
        *mode = state.display_mode_ex;
        let wants_rotation = rotation.is_some();
        if let Some(rotation) = rotation {
            *rotation = state.rotation;
        }
        drop(state);
        self.record(Call::GetDisplayModeEx(swap_chain, wants_rotation))
    }
}
