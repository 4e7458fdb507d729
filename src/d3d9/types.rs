use super::enums::*;
use crate::*;
use bytemuck::{Pod, Zeroable};

/// `D3DCOLORVALUE`
#[derive(Clone, Copy, PartialEq, Default, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct ColorValue {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub alpha: f32,
}

impl ColorValue {
    /// Components in alpha, red, green, blue order; stored in native r, g, b, a order.
    #[inline]
    pub const fn new(alpha: f32, red: f32, green: f32, blue: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[inline]
    pub const fn rgb(red: f32, green: f32, blue: f32) -> Self {
        Self::new(1.0, red, green, blue)
    }

    pub fn from_argb(argb: u32) -> Self {
        let channel = |shift: u32| ((argb >> shift) & 0xff) as f32 / 255.0;
        Self::new(channel(24), channel(16), channel(8), channel(0))
    }

    pub fn to_argb(&self) -> u32 {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u32;
        channel(self.alpha) << 24
            | channel(self.red) << 16
            | channel(self.green) << 8
            | channel(self.blue)
    }
}

impl From<gecl::Rgba<f32>> for ColorValue {
    #[inline]
    fn from(src: gecl::Rgba<f32>) -> Self {
        Self::new(src.a, src.r, src.g, src.b)
    }
}

/// A packed `D3DCOLOR` in A8R8G8B8 order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug, Pod, Zeroable)]
#[repr(transparent)]
pub struct Argb(pub u32);

impl From<u32> for Argb {
    #[inline]
    fn from(src: u32) -> Self {
        Self(src)
    }
}

impl From<ColorValue> for Argb {
    #[inline]
    fn from(src: ColorValue) -> Self {
        Self(src.to_argb())
    }
}

impl From<gecl::Rgba<f32>> for Argb {
    #[inline]
    fn from(src: gecl::Rgba<f32>) -> Self {
        ColorValue::from(src).into()
    }
}

/// `D3DMATERIAL9`
#[derive(Clone, Copy, PartialEq, Default, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct Material {
    pub diffuse: ColorValue,
    pub ambient: ColorValue,
    pub specular: ColorValue,
    pub emissive: ColorValue,
    pub power: f32,
}

/// `D3DVIEWPORT9`
#[derive(Clone, Copy, PartialEq, Default, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct Viewport {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub min_z: f32,
    pub max_z: f32,
}

/// `RECT`, also layout-compatible with `D3DRECT`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    #[inline]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }
}

impl From<gecl::Rect<i32>> for Rect {
    #[inline]
    fn from(src: gecl::Rect<i32>) -> Self {
        Self {
            left: src.origin.x,
            top: src.origin.y,
            right: src.origin.x.saturating_add(src.size.width),
            bottom: src.origin.y.saturating_add(src.size.height),
        }
    }
}

/// `D3DMATRIX`, row-major.
#[derive(Clone, Copy, PartialEq, Default, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct Matrix {
    pub m11: f32,
    pub m12: f32,
    pub m13: f32,
    pub m14: f32,
    pub m21: f32,
    pub m22: f32,
    pub m23: f32,
    pub m24: f32,
    pub m31: f32,
    pub m32: f32,
    pub m33: f32,
    pub m34: f32,
    pub m41: f32,
    pub m42: f32,
    pub m43: f32,
    pub m44: f32,
}

impl Matrix {
    pub const IDENTITY: Self = Self::from_rows([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    #[inline]
    pub const fn from_rows(m: [[f32; 4]; 4]) -> Self {
        Self {
            m11: m[0][0],
            m12: m[0][1],
            m13: m[0][2],
            m14: m[0][3],
            m21: m[1][0],
            m22: m[1][1],
            m23: m[1][2],
            m24: m[1][3],
            m31: m[2][0],
            m32: m[2][1],
            m33: m[2][2],
            m34: m[2][3],
            m41: m[3][0],
            m42: m[3][1],
            m43: m[3][2],
            m44: m[3][3],
        }
    }

    #[inline]
    pub fn to_rows(&self) -> [[f32; 4]; 4] {
        bytemuck::cast(*self)
    }
}

/// `D3DPRESENT_PARAMETERS` with plain integer fields, as handed to native code.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[repr(C)]
pub struct RawPresentParameters {
    pub back_buffer_width: u32,
    pub back_buffer_height: u32,
    pub back_buffer_format: u32,
    pub back_buffer_count: u32,
    pub multisample_type: u32,
    pub multisample_quality: u32,
    pub swap_effect: u32,
    pub device_window: Hwnd,
    pub windowed: i32,
    pub enable_auto_depth_stencil: i32,
    pub auto_depth_stencil_format: u32,
    pub flags: u32,
    pub fullscreen_refresh_rate_hz: u32,
    pub presentation_interval: u32,
}

/// Describes the presentation parameters of a device.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PresentParameters {
    pub back_buffer_width: u32,
    pub back_buffer_height: u32,
    pub back_buffer_format: Format,
    pub back_buffer_count: u32,
    pub multisample: MultisampleType,
    pub multisample_quality: u32,
    pub swap_effect: SwapEffect,
    pub device_window: Hwnd,
    pub windowed: bool,
    pub enable_auto_depth_stencil: bool,
    pub auto_depth_stencil_format: Format,
    pub flags: PresentFlags,
    pub fullscreen_refresh_rate_hz: u32,
    pub presentation_interval: PresentInterval,
}

impl Default for PresentParameters {
    #[inline]
    fn default() -> Self {
        Self {
            back_buffer_width: 0,
            back_buffer_height: 0,
            back_buffer_format: Format::Unknown,
            back_buffer_count: 1,
            multisample: MultisampleType::None,
            multisample_quality: 0,
            swap_effect: SwapEffect::Discard,
            device_window: Hwnd::NULL,
            windowed: true,
            enable_auto_depth_stencil: false,
            auto_depth_stencil_format: Format::Unknown,
            flags: PresentFlags::empty(),
            fullscreen_refresh_rate_hz: 0,
            presentation_interval: PresentInterval::Default,
        }
    }
}

impl PresentParameters {
    #[inline]
    pub fn with_back_buffer(mut self, width: u32, height: u32, format: Format) -> Self {
        self.back_buffer_width = width;
        self.back_buffer_height = height;
        self.back_buffer_format = format;
        self
    }

    #[inline]
    pub fn with_device_window(mut self, window: impl AsWindowHandle) -> Self {
        self.device_window = window.window_handle();
        self
    }

    #[inline]
    pub fn with_depth_stencil(mut self, format: Format) -> Self {
        self.enable_auto_depth_stencil = true;
        self.auto_depth_stencil_format = format;
        self
    }

    #[inline]
    pub fn with_presentation_interval(mut self, interval: PresentInterval) -> Self {
        self.presentation_interval = interval;
        self
    }

    #[inline]
    pub fn fullscreen(mut self, refresh_rate_hz: u32) -> Self {
        self.windowed = false;
        self.fullscreen_refresh_rate_hz = refresh_rate_hz;
        self
    }
}

impl From<&PresentParameters> for RawPresentParameters {
    fn from(src: &PresentParameters) -> Self {
        Self {
            back_buffer_width: src.back_buffer_width,
            back_buffer_height: src.back_buffer_height,
            back_buffer_format: src.back_buffer_format.to_raw(),
            back_buffer_count: src.back_buffer_count,
            multisample_type: src.multisample.to_raw(),
            multisample_quality: src.multisample_quality,
            swap_effect: src.swap_effect.to_raw(),
            device_window: src.device_window,
            windowed: src.windowed as i32,
            enable_auto_depth_stencil: src.enable_auto_depth_stencil as i32,
            auto_depth_stencil_format: src.auto_depth_stencil_format.to_raw(),
            flags: src.flags.bits(),
            fullscreen_refresh_rate_hz: src.fullscreen_refresh_rate_hz,
            presentation_interval: src.presentation_interval.to_raw(),
        }
    }
}

impl TryFrom<&RawPresentParameters> for PresentParameters {
    type Error = Error;

    fn try_from(src: &RawPresentParameters) -> Result<Self> {
        Ok(Self {
            back_buffer_width: src.back_buffer_width,
            back_buffer_height: src.back_buffer_height,
            back_buffer_format: src.back_buffer_format.try_into()?,
            back_buffer_count: src.back_buffer_count,
            multisample: src.multisample_type.try_into()?,
            multisample_quality: src.multisample_quality,
            swap_effect: src.swap_effect.try_into()?,
            device_window: src.device_window,
            windowed: src.windowed != 0,
            enable_auto_depth_stencil: src.enable_auto_depth_stencil != 0,
            auto_depth_stencil_format: src.auto_depth_stencil_format.try_into()?,
            flags: PresentFlags::from_bits_retain(src.flags),
            fullscreen_refresh_rate_hz: src.fullscreen_refresh_rate_hz,
            presentation_interval: src.presentation_interval.try_into()?,
        })
    }
}

/// `D3DDISPLAYMODE`
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct RawDisplayMode {
    pub width: u32,
    pub height: u32,
    pub refresh_rate: u32,
    pub format: u32,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DisplayMode {
    pub width: u32,
    pub height: u32,
    pub refresh_rate: u32,
    pub format: Format,
}

impl TryFrom<&RawDisplayMode> for DisplayMode {
    type Error = Error;

    fn try_from(src: &RawDisplayMode) -> Result<Self> {
        Ok(Self {
            width: src.width,
            height: src.height,
            refresh_rate: src.refresh_rate,
            format: src.format.try_into()?,
        })
    }
}

/// `D3DDISPLAYMODEEX`
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct RawDisplayModeEx {
    pub size: u32,
    pub width: u32,
    pub height: u32,
    pub refresh_rate: u32,
    pub format: u32,
    pub scanline_ordering: u32,
}

impl RawDisplayModeEx {
    /// An empty structure with `size` filled in, as native code expects.
    #[inline]
    pub fn sized() -> Self {
        Self {
            size: std::mem::size_of::<Self>() as u32,
            ..Default::default()
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DisplayModeEx {
    pub width: u32,
    pub height: u32,
    pub refresh_rate: u32,
    pub format: Format,
    pub scanline_ordering: ScanlineOrdering,
}

impl From<&DisplayModeEx> for RawDisplayModeEx {
    #[inline]
    fn from(src: &DisplayModeEx) -> Self {
        Self {
            size: std::mem::size_of::<Self>() as u32,
            width: src.width,
            height: src.height,
            refresh_rate: src.refresh_rate,
            format: src.format.to_raw(),
            scanline_ordering: src.scanline_ordering.to_raw(),
        }
    }
}

impl TryFrom<&RawDisplayModeEx> for DisplayModeEx {
    type Error = Error;

    fn try_from(src: &RawDisplayModeEx) -> Result<Self> {
        Ok(Self {
            width: src.width,
            height: src.height,
            refresh_rate: src.refresh_rate,
            format: src.format.try_into()?,
            scanline_ordering: src.scanline_ordering.try_into()?,
        })
    }
}

/// `D3DVSHADERCAPS2_0`
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct VertexShader20Caps {
    pub caps: u32,
    pub dynamic_flow_control_depth: i32,
    pub temp_count: i32,
    pub static_flow_control_depth: i32,
}

/// `D3DPSHADERCAPS2_0`
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct PixelShader20Caps {
    pub caps: u32,
    pub dynamic_flow_control_depth: i32,
    pub temp_count: i32,
    pub static_flow_control_depth: i32,
    pub instruction_slot_count: i32,
}

/// `D3DCAPS9`
#[derive(Clone, Copy, PartialEq, Default, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct Capabilities {
    pub raw_device_type: u32,
    pub adapter_ordinal: u32,
    pub caps: u32,
    pub caps2: u32,
    pub caps3: u32,
    pub presentation_intervals: u32,
    pub cursor_caps: u32,
    pub device_caps: u32,
    pub primitive_misc_caps: u32,
    pub raster_caps: u32,
    pub depth_compare_caps: u32,
    pub source_blend_caps: u32,
    pub destination_blend_caps: u32,
    pub alpha_compare_caps: u32,
    pub shade_caps: u32,
    pub texture_caps: u32,
    pub texture_filter_caps: u32,
    pub cube_texture_filter_caps: u32,
    pub volume_texture_filter_caps: u32,
    pub texture_address_caps: u32,
    pub volume_texture_address_caps: u32,
    pub line_caps: u32,
    pub max_texture_width: u32,
    pub max_texture_height: u32,
    pub max_volume_extent: u32,
    pub max_texture_repeat: u32,
    pub max_texture_aspect_ratio: u32,
    pub max_anisotropy: u32,
    pub max_vertex_w: f32,
    pub guard_band_left: f32,
    pub guard_band_top: f32,
    pub guard_band_right: f32,
    pub guard_band_bottom: f32,
    pub extents_adjust: f32,
    pub stencil_caps: u32,
    pub fvf_caps: u32,
    pub texture_operation_caps: u32,
    pub max_texture_blend_stages: u32,
    pub max_simultaneous_textures: u32,
    pub vertex_processing_caps: u32,
    pub max_active_lights: u32,
    pub max_user_clip_planes: u32,
    pub max_vertex_blend_matrices: u32,
    pub max_vertex_blend_matrix_index: u32,
    pub max_point_size: f32,
    pub max_primitive_count: u32,
    pub max_vertex_index: u32,
    pub max_streams: u32,
    pub max_stream_stride: u32,
    pub vertex_shader_version: u32,
    pub max_vertex_shader_constants: u32,
    pub pixel_shader_version: u32,
    pub pixel_shader_1x_max_value: f32,
    pub device_caps2: u32,
    pub max_npatch_tessellation_level: f32,
    pub reserved5: u32,
    pub master_adapter_ordinal: u32,
    pub adapter_ordinal_in_group: u32,
    pub adapters_in_group: u32,
    pub declaration_types: u32,
    pub simultaneous_render_targets: u32,
    pub stretch_rect_filter_caps: u32,
    pub vs20_caps: VertexShader20Caps,
    pub ps20_caps: PixelShader20Caps,
    pub vertex_texture_filter_caps: u32,
    pub max_vertex_shader_instructions_executed: u32,
    pub max_pixel_shader_instructions_executed: u32,
    pub max_vertex_shader30_instruction_slots: u32,
    pub max_pixel_shader30_instruction_slots: u32,
}

impl Capabilities {
    #[inline]
    pub fn device_type(&self) -> Result<DeviceType> {
        self.raw_device_type.try_into()
    }

    /// Major and minor version of the supported vertex shader model.
    #[inline]
    pub fn vertex_shader_model(&self) -> (u32, u32) {
        shader_model(self.vertex_shader_version)
    }

    /// Major and minor version of the supported pixel shader model.
    #[inline]
    pub fn pixel_shader_model(&self) -> (u32, u32) {
        shader_model(self.pixel_shader_version)
    }
}

#[inline]
fn shader_model(version: u32) -> (u32, u32) {
    ((version >> 8) & 0xff, version & 0xff)
}
