use super::*;
use crate::*;
use bytemuck::Pod;
use tracing::{debug, warn};

/// A rendering device, wrapping `IDirect3DDevice9`.
///
/// Every method forwards to one native entry point of the backend. Failure
/// codes come back as [`Error::Native`] carrying the code unchanged.
#[derive(Clone, Debug)]
pub struct Device<B: Backend> {
    backend: B,
}

impl<B: Backend> Device<B> {
    #[inline]
    pub fn from_backend(backend: B) -> Self {
        Self { backend }
    }

    #[inline]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    #[inline]
    pub fn into_backend(self) -> B {
        self.backend
    }

    #[inline]
    pub fn indices(&self) -> Result<Option<B::IndexBuffer>> {
        let mut indices = None;
        self.backend.get_indices(&mut indices).ok()?;
        Ok(indices)
    }

    #[inline]
    pub fn set_indices(&self, indices: Option<&B::IndexBuffer>) -> Result<()> {
        self.backend.set_indices(indices).ok()
    }

    #[inline]
    pub fn vertex_format(&self) -> Result<VertexFormat> {
        let mut fvf = 0;
        self.backend.get_fvf(&mut fvf).ok()?;
        Ok(VertexFormat::from_bits_retain(fvf))
    }

    #[inline]
    pub fn set_vertex_format(&self, format: VertexFormat) -> Result<()> {
        self.backend.set_fvf(format.bits()).ok()
    }

    #[inline]
    pub fn vertex_declaration(&self) -> Result<Option<B::VertexDeclaration>> {
        let mut decl = None;
        self.backend.get_vertex_declaration(&mut decl).ok()?;
        Ok(decl)
    }

    #[inline]
    pub fn set_vertex_declaration(&self, decl: Option<&B::VertexDeclaration>) -> Result<()> {
        self.backend.set_vertex_declaration(decl).ok()
    }

    #[inline]
    pub fn software_vertex_processing(&self) -> bool {
        self.backend.get_software_vertex_processing()
    }

    #[inline]
    pub fn set_software_vertex_processing(&self, software: bool) -> Result<()> {
        self.backend.set_software_vertex_processing(software).ok()
    }

    #[inline]
    pub fn material(&self) -> Result<Material> {
        let mut material = Material::default();
        self.backend.get_material(&mut material).ok()?;
        Ok(material)
    }

    #[inline]
    pub fn set_material(&self, material: &Material) -> Result<()> {
        self.backend.set_material(material).ok()
    }

    #[inline]
    pub fn viewport(&self) -> Result<Viewport> {
        let mut viewport = Viewport::default();
        self.backend.get_viewport(&mut viewport).ok()?;
        Ok(viewport)
    }

    #[inline]
    pub fn set_viewport(&self, viewport: &Viewport) -> Result<()> {
        self.backend.set_viewport(viewport).ok()
    }

    #[inline]
    pub fn scissor_rect(&self) -> Result<Rect> {
        let mut rect = Rect::default();
        self.backend.get_scissor_rect(&mut rect).ok()?;
        Ok(rect)
    }

    #[inline]
    pub fn set_scissor_rect(&self, rect: impl Into<Rect>) -> Result<()> {
        self.backend.set_scissor_rect(&rect.into()).ok()
    }

    /// Estimated texture memory in bytes, rounded to the nearest megabyte.
    #[inline]
    pub fn available_texture_memory(&self) -> u32 {
        self.backend.get_available_texture_mem()
    }

    /// Returns the previous visibility of the cursor.
    #[inline]
    pub fn show_cursor(&self, show: bool) -> bool {
        self.backend.show_cursor(show)
    }

    /// Asks the device whether `ty` queries are supported without creating one.
    pub fn is_query_supported(&self, ty: QueryType) -> Result<bool> {
        let code = self.backend.check_query(ty.to_raw());
        if code == ErrorKind::NotAvailable {
            return Ok(false);
        }
        code.ok()?;
        Ok(true)
    }

    #[inline]
    pub fn device_caps(&self) -> Result<Capabilities> {
        let mut caps = Capabilities::default();
        self.backend.get_device_caps(&mut caps).ok()?;
        Ok(caps)
    }

    /// Returns the number of passes required to render with the current state.
    #[inline]
    pub fn validate_device(&self) -> Result<u32> {
        let mut passes = 0;
        self.backend.validate_device(&mut passes).ok()?;
        Ok(passes)
    }

    pub fn display_mode(&self, swap_chain: u32) -> Result<DisplayMode> {
        let mut mode = RawDisplayMode::default();
        self.backend.get_display_mode(swap_chain, &mut mode).ok()?;
        DisplayMode::try_from(&mode)
    }

    #[inline]
    pub fn evict_managed_resources(&self) -> Result<()> {
        self.backend.evict_managed_resources().ok()
    }

    #[inline]
    pub fn test_cooperative_level(&self) -> Result<()> {
        self.backend.test_cooperative_level().ok()
    }

    /// Like [`test_cooperative_level`](Self::test_cooperative_level), but
    /// reports lost-device states as values.
    pub fn check_cooperative_level(&self) -> Result<CooperativeLevel> {
        let code = self.backend.test_cooperative_level();
        let level = CooperativeLevel::try_from(code.0).map_err(|_| Error::Native(code))?;
        if level != CooperativeLevel::Ok {
            warn!("cooperative level: {:?}", level);
        }
        Ok(level)
    }

    /// Resets the device. Values the native side fills in (such as the
    /// back buffer size of a windowed device) are written back to `params`.
    ///
    /// A write-back holding a value this crate doesn't know fails with
    /// [`Error::UnknownValue`] and leaves `params` untouched, even though the
    /// device has already been reset.
    pub fn reset(&self, params: &mut PresentParameters) -> Result<()> {
        let mut raw = RawPresentParameters::from(&*params);
        let code = self.backend.reset(&mut raw);
        debug!("reset: {}", code);
        code.ok()?;
        *params = PresentParameters::try_from(&raw)?;
        Ok(())
    }

    #[inline]
    pub fn clear(
        &self,
        flags: ClearFlags,
        color: impl Into<Argb>,
        z: f32,
        stencil: u32,
    ) -> Result<()> {
        self.clear_rects(&[], flags, color, z, stencil)
    }

    #[inline]
    pub fn clear_rects(
        &self,
        rects: &[Rect],
        flags: ClearFlags,
        color: impl Into<Argb>,
        z: f32,
        stencil: u32,
    ) -> Result<()> {
        self.backend
            .clear(rects, flags.bits(), color.into().0, z, stencil)
            .ok()
    }

    #[inline]
    pub fn begin_scene(&self) -> Result<()> {
        self.backend.begin_scene().ok()
    }

    #[inline]
    pub fn end_scene(&self) -> Result<()> {
        self.backend.end_scene().ok()
    }

    /// Presents the whole back buffer to the device window.
    ///
    /// Success codes such as `PresentOccluded` are returned in `Ok`.
    #[inline]
    pub fn present(&self) -> Result<ResultCode> {
        self.present_with(Present::NONE)
    }

    /// Presents through swap chain 0 with `flags`.
    #[inline]
    pub fn present_with(&self, flags: Present) -> Result<ResultCode> {
        self.backend
            .present(None, None, Hwnd::NULL, flags.bits())
            .check()
    }

    /// Presents `source` of the back buffer into `dest` of `window`.
    /// `None` means the whole surface, a null window means the device window.
    #[inline]
    pub fn present_region(
        &self,
        source: Option<Rect>,
        dest: Option<Rect>,
        window: impl AsWindowHandle,
    ) -> Result<ResultCode> {
        self.backend
            .present(
                source.as_ref(),
                dest.as_ref(),
                window.window_handle(),
                0,
            )
            .check()
    }

    pub fn back_buffer(&self, swap_chain: u32, index: u32) -> Result<B::Surface> {
        let mut surface = None;
        self.backend
            .get_back_buffer(swap_chain, index, &mut surface)
            .ok()?;
        surface.ok_or_else(|| ErrorKind::Pointer.into())
    }

    pub fn depth_stencil_surface(&self) -> Result<B::Surface> {
        let mut surface = None;
        self.backend.get_depth_stencil_surface(&mut surface).ok()?;
        surface.ok_or_else(|| ErrorKind::NotFound.into())
    }

    #[inline]
    pub fn set_render_target(&self, index: u32, target: Option<&B::Surface>) -> Result<()> {
        self.backend.set_render_target(index, target).ok()
    }

    /// `value` may be anything the state slot holds: integers, `bool`,
    /// `f32`, [`Argb`] or one of the state value enums.
    #[inline]
    pub fn set_render_state(&self, state: RenderState, value: impl StateValue) -> Result<()> {
        self.backend
            .set_render_state(state.to_raw(), value.to_state())
            .ok()
    }

    pub fn render_state<T: StateValue>(&self, state: RenderState) -> Result<T> {
        let mut value = 0;
        self.backend
            .get_render_state(state.to_raw(), &mut value)
            .ok()?;
        T::from_state(value)
    }

    #[inline]
    pub fn set_transform(&self, state: TransformState, matrix: &Matrix) -> Result<()> {
        self.backend.set_transform(state.to_raw(), matrix).ok()
    }

    #[inline]
    pub fn transform(&self, state: TransformState) -> Result<Matrix> {
        let mut matrix = Matrix::default();
        self.backend
            .get_transform(state.to_raw(), &mut matrix)
            .ok()?;
        Ok(matrix)
    }

    #[inline]
    pub fn set_texture_stage_state(
        &self,
        stage: u32,
        ty: TextureStage,
        value: impl StateValue,
    ) -> Result<()> {
        self.backend
            .set_texture_stage_state(stage, ty.to_raw(), value.to_state())
            .ok()
    }

    pub fn texture_stage_state<T: StateValue>(&self, stage: u32, ty: TextureStage) -> Result<T> {
        let mut value = 0;
        self.backend
            .get_texture_stage_state(stage, ty.to_raw(), &mut value)
            .ok()?;
        T::from_state(value)
    }

    #[inline]
    pub fn set_sampler_state(
        &self,
        sampler: u32,
        ty: SamplerState,
        value: impl StateValue,
    ) -> Result<()> {
        self.backend
            .set_sampler_state(sampler, ty.to_raw(), value.to_state())
            .ok()
    }

    pub fn sampler_state<T: StateValue>(&self, sampler: u32, ty: SamplerState) -> Result<T> {
        let mut value = 0;
        self.backend
            .get_sampler_state(sampler, ty.to_raw(), &mut value)
            .ok()?;
        T::from_state(value)
    }

    #[inline]
    pub fn set_stream_source(
        &self,
        stream: u32,
        data: Option<&B::VertexBuffer>,
        offset_in_bytes: u32,
        stride: u32,
    ) -> Result<()> {
        self.backend
            .set_stream_source(stream, data, offset_in_bytes, stride)
            .ok()
    }

    /// `frequency` is the raw `D3DSTREAMSOURCE_*` setting, an instance
    /// count combined with the indexed or instance data bit.
    #[inline]
    pub fn set_stream_source_frequency(&self, stream: u32, frequency: u32) -> Result<()> {
        self.backend.set_stream_source_freq(stream, frequency).ok()
    }

    #[inline]
    pub fn set_texture(&self, stage: u32, texture: Option<&B::BaseTexture>) -> Result<()> {
        self.backend.set_texture(stage, texture).ok()
    }

    #[inline]
    pub fn set_pixel_shader(&self, shader: Option<&B::PixelShader>) -> Result<()> {
        self.backend.set_pixel_shader(shader).ok()
    }

    #[inline]
    pub fn set_vertex_shader(&self, shader: Option<&B::VertexShader>) -> Result<()> {
        self.backend.set_vertex_shader(shader).ok()
    }

    #[inline]
    pub fn draw_primitives(
        &self,
        ty: PrimitiveType,
        start_vertex: u32,
        primitive_count: u32,
    ) -> Result<()> {
        self.backend
            .draw_primitive(ty.to_raw(), start_vertex, primitive_count)
            .ok()
    }

    #[inline]
    pub fn draw_indexed_primitives(
        &self,
        ty: PrimitiveType,
        base_vertex_index: i32,
        min_vertex_index: u32,
        vertex_count: u32,
        start_index: u32,
        primitive_count: u32,
    ) -> Result<()> {
        self.backend
            .draw_indexed_primitive(
                ty.to_raw(),
                base_vertex_index,
                min_vertex_index,
                vertex_count,
                start_index,
                primitive_count,
            )
            .ok()
    }

    /// Draws `primitive_count` primitives from `data`, starting at element
    /// `start_index`. The stride is the size of `T`.
    ///
    /// Fails with `InvalidCall` when `data` holds fewer vertices than the
    /// primitives need.
    pub fn draw_user_primitives<T: Pod>(
        &self,
        ty: PrimitiveType,
        start_index: usize,
        primitive_count: u32,
        data: &[T],
    ) -> Result<()> {
        let vertices = data.get(start_index..).ok_or(ErrorKind::InvalidCall)?;
        if (vertices.len() as u64) < ty.vertex_count(primitive_count) {
            return Err(ErrorKind::InvalidCall.into());
        }
        self.backend
            .draw_primitive_up(
                ty.to_raw(),
                primitive_count,
                bytemuck::cast_slice(vertices),
                std::mem::size_of::<T>() as u32,
            )
            .ok()
    }
}
