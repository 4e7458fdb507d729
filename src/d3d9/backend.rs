use super::types::*;
use crate::*;

/// The `IDirect3DDevice9` entry points wrapped by [`Device`](super::Device).
///
/// Each method corresponds to one native method. Out-parameters are `&mut`
/// and the native `HRESULT` is returned untouched; translation into
/// `Result` happens in the wrapper.
pub trait Backend {
    type Surface: Clone;
    type BaseTexture: Clone;
    type VertexBuffer: Clone;
    type IndexBuffer: Clone;
    type VertexDeclaration: Clone;
    type PixelShader: Clone;
    type VertexShader: Clone;

    fn test_cooperative_level(&self) -> ResultCode;
    fn get_available_texture_mem(&self) -> u32;
    fn evict_managed_resources(&self) -> ResultCode;
    fn get_device_caps(&self, caps: &mut Capabilities) -> ResultCode;
    fn get_display_mode(&self, swap_chain: u32, mode: &mut RawDisplayMode) -> ResultCode;
    fn show_cursor(&self, show: bool) -> bool;
    fn reset(&self, params: &mut RawPresentParameters) -> ResultCode;

    /// `flags` other than zero are applied through the implicit swap chain.
    fn present(
        &self,
        source: Option<&Rect>,
        dest: Option<&Rect>,
        window_override: Hwnd,
        flags: u32,
    ) -> ResultCode;

    fn get_back_buffer(
        &self,
        swap_chain: u32,
        back_buffer: u32,
        surface: &mut Option<Self::Surface>,
    ) -> ResultCode;
    fn set_render_target(&self, index: u32, target: Option<&Self::Surface>) -> ResultCode;
    fn get_depth_stencil_surface(&self, surface: &mut Option<Self::Surface>) -> ResultCode;

    fn begin_scene(&self) -> ResultCode;
    fn end_scene(&self) -> ResultCode;
    fn clear(&self, rects: &[Rect], flags: u32, color: u32, z: f32, stencil: u32) -> ResultCode;

    fn set_transform(&self, state: u32, matrix: &Matrix) -> ResultCode;
    fn get_transform(&self, state: u32, matrix: &mut Matrix) -> ResultCode;
    fn set_viewport(&self, viewport: &Viewport) -> ResultCode;
    fn get_viewport(&self, viewport: &mut Viewport) -> ResultCode;
    fn set_material(&self, material: &Material) -> ResultCode;
    fn get_material(&self, material: &mut Material) -> ResultCode;

    fn set_render_state(&self, state: u32, value: u32) -> ResultCode;
    fn get_render_state(&self, state: u32, value: &mut u32) -> ResultCode;
    fn set_texture(&self, stage: u32, texture: Option<&Self::BaseTexture>) -> ResultCode;
    fn set_texture_stage_state(&self, stage: u32, ty: u32, value: u32) -> ResultCode;
    fn get_texture_stage_state(&self, stage: u32, ty: u32, value: &mut u32) -> ResultCode;
    fn set_sampler_state(&self, sampler: u32, ty: u32, value: u32) -> ResultCode;
    fn get_sampler_state(&self, sampler: u32, ty: u32, value: &mut u32) -> ResultCode;
    fn validate_device(&self, passes: &mut u32) -> ResultCode;
    fn set_scissor_rect(&self, rect: &Rect) -> ResultCode;
    fn get_scissor_rect(&self, rect: &mut Rect) -> ResultCode;
    fn set_software_vertex_processing(&self, software: bool) -> ResultCode;
    fn get_software_vertex_processing(&self) -> bool;

    fn draw_primitive(&self, ty: u32, start_vertex: u32, primitive_count: u32) -> ResultCode;
    fn draw_indexed_primitive(
        &self,
        ty: u32,
        base_vertex_index: i32,
        min_vertex_index: u32,
        vertex_count: u32,
        start_index: u32,
        primitive_count: u32,
    ) -> ResultCode;
    fn draw_primitive_up(
        &self,
        ty: u32,
        primitive_count: u32,
        vertices: &[u8],
        stride: u32,
    ) -> ResultCode;

    fn set_vertex_declaration(&self, decl: Option<&Self::VertexDeclaration>) -> ResultCode;
    fn get_vertex_declaration(&self, decl: &mut Option<Self::VertexDeclaration>) -> ResultCode;
    fn set_fvf(&self, fvf: u32) -> ResultCode;
    fn get_fvf(&self, fvf: &mut u32) -> ResultCode;
    fn set_vertex_shader(&self, shader: Option<&Self::VertexShader>) -> ResultCode;
    fn set_pixel_shader(&self, shader: Option<&Self::PixelShader>) -> ResultCode;
    fn set_stream_source(
        &self,
        stream: u32,
        data: Option<&Self::VertexBuffer>,
        offset_in_bytes: u32,
        stride: u32,
    ) -> ResultCode;
    fn set_stream_source_freq(&self, stream: u32, setting: u32) -> ResultCode;
    fn set_indices(&self, indices: Option<&Self::IndexBuffer>) -> ResultCode;
    fn get_indices(&self, indices: &mut Option<Self::IndexBuffer>) -> ResultCode;

    /// `CreateQuery` with a null out-pointer, which only reports support.
    fn check_query(&self, ty: u32) -> ResultCode;
}

/// The `IDirect3DDevice9Ex` additions wrapped by [`DeviceEx`](super::DeviceEx).
pub trait BackendEx: Backend {
    type Resource: Clone;

    fn set_gpu_thread_priority(&self, priority: i32) -> ResultCode;
    fn get_gpu_thread_priority(&self, priority: &mut i32) -> ResultCode;
    fn set_maximum_frame_latency(&self, latency: u32) -> ResultCode;
    fn get_maximum_frame_latency(&self, latency: &mut u32) -> ResultCode;
    fn wait_for_vblank(&self, swap_chain: u32) -> ResultCode;
    fn check_resource_residency(&self, resources: &[Self::Resource]) -> ResultCode;
    fn check_device_state(&self, window: Hwnd) -> ResultCode;
    fn present_ex(
        &self,
        source: Option<&Rect>,
        dest: Option<&Rect>,
        window_override: Hwnd,
        flags: u32,
    ) -> ResultCode;
    fn reset_ex(
        &self,
        params: &mut RawPresentParameters,
        fullscreen_mode: Option<&mut RawDisplayModeEx>,
    ) -> ResultCode;
    fn get_display_mode_ex(
        &self,
        swap_chain: u32,
        mode: &mut RawDisplayModeEx,
        rotation: Option<&mut u32>,
    ) -> ResultCode;
}
