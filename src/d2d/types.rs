use super::enums::*;
use crate::*;
use bytemuck::{Pod, Zeroable};

/// `D2D1_COLOR_F`
#[derive(Clone, Copy, PartialEq, Default, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct Color4 {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color4 {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

impl From<gecl::Rgba<f32>> for Color4 {
    #[inline]
    fn from(src: gecl::Rgba<f32>) -> Self {
        Self::new(src.r, src.g, src.b, src.a)
    }
}

impl From<crate::d3d9::ColorValue> for Color4 {
    #[inline]
    fn from(src: crate::d3d9::ColorValue) -> Self {
        Self::new(src.red, src.green, src.blue, src.alpha)
    }
}

impl From<[f32; 4]> for Color4 {
    #[inline]
    fn from(src: [f32; 4]) -> Self {
        Self::new(src[0], src[1], src[2], src[3])
    }
}

/// `D2D1_POINT_2F`
#[derive(Clone, Copy, PartialEq, Default, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct Point2F {
    pub x: f32,
    pub y: f32,
}

impl Point2F {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Point2F {
    #[inline]
    fn from(src: (f32, f32)) -> Self {
        Self::new(src.0, src.1)
    }
}

impl From<gecl::Point<f32>> for Point2F {
    #[inline]
    fn from(src: gecl::Point<f32>) -> Self {
        Self::new(src.x, src.y)
    }
}

impl From<gecl::Point<i32>> for Point2F {
    #[inline]
    fn from(src: gecl::Point<i32>) -> Self {
        Self::new(src.x as f32, src.y as f32)
    }
}

/// `D2D1_SIZE_F`
#[derive(Clone, Copy, PartialEq, Default, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct SizeF {
    pub width: f32,
    pub height: f32,
}

impl SizeF {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl From<gecl::Size<f32>> for SizeF {
    #[inline]
    fn from(src: gecl::Size<f32>) -> Self {
        Self::new(src.width, src.height)
    }
}

impl From<SizeF> for gecl::Size<f32> {
    #[inline]
    fn from(src: SizeF) -> Self {
        gecl::Size::new(src.width, src.height)
    }
}

/// `D2D1_SIZE_U`
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct SizeU {
    pub width: u32,
    pub height: u32,
}

impl SizeU {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl From<(u32, u32)> for SizeU {
    #[inline]
    fn from(src: (u32, u32)) -> Self {
        Self::new(src.0, src.1)
    }
}

impl From<gecl::Size<u32>> for SizeU {
    #[inline]
    fn from(src: gecl::Size<u32>) -> Self {
        Self::new(src.width, src.height)
    }
}

impl From<SizeU> for gecl::Size<u32> {
    #[inline]
    fn from(src: SizeU) -> Self {
        gecl::Size::new(src.width, src.height)
    }
}

/// `D2D1_RECT_F`, stored as left, top, right, bottom.
#[derive(Clone, Copy, PartialEq, Default, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    #[inline]
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    #[inline]
    pub fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

impl From<gecl::Rect<f32>> for RectF {
    #[inline]
    fn from(src: gecl::Rect<f32>) -> Self {
        let ep = src.endpoint();
        Self::new(src.origin.x, src.origin.y, ep.x, ep.y)
    }
}

impl From<gecl::Rect<i32>> for RectF {
    #[inline]
    fn from(src: gecl::Rect<i32>) -> Self {
        Self::from_xywh(
            src.origin.x as f32,
            src.origin.y as f32,
            src.size.width as f32,
            src.size.height as f32,
        )
    }
}

/// `D2D1_ELLIPSE`
#[derive(Clone, Copy, PartialEq, Default, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct Ellipse {
    pub point: Point2F,
    pub radius_x: f32,
    pub radius_y: f32,
}

impl Ellipse {
    #[inline]
    pub fn new(center: impl Into<Point2F>, radius_x: f32, radius_y: f32) -> Self {
        Self {
            point: center.into(),
            radius_x,
            radius_y,
        }
    }
}

impl From<gecl::Ellipse<f32>> for Ellipse {
    #[inline]
    fn from(src: gecl::Ellipse<f32>) -> Self {
        Self::new(src.center, src.radius.x, src.radius.y)
    }
}

impl From<gecl::Circle<f32>> for Ellipse {
    #[inline]
    fn from(src: gecl::Circle<f32>) -> Self {
        Self::new(src.center, src.radius, src.radius)
    }
}

/// `D2D1_ROUNDED_RECT`
#[derive(Clone, Copy, PartialEq, Default, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct RoundedRect {
    pub rect: RectF,
    pub radius_x: f32,
    pub radius_y: f32,
}

impl RoundedRect {
    #[inline]
    pub fn new(rect: impl Into<RectF>, radius_x: f32, radius_y: f32) -> Self {
        Self {
            rect: rect.into(),
            radius_x,
            radius_y,
        }
    }
}

/// `D2D1_MATRIX_3X2_F`
#[derive(Clone, Copy, PartialEq, Default, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct Matrix3x2 {
    pub m11: f32,
    pub m12: f32,
    pub m21: f32,
    pub m22: f32,
    pub m31: f32,
    pub m32: f32,
}

impl Matrix3x2 {
    pub const IDENTITY: Self = Self {
        m11: 1.0,
        m12: 0.0,
        m21: 0.0,
        m22: 1.0,
        m31: 0.0,
        m32: 0.0,
    };

    #[inline]
    pub const fn translation(x: f32, y: f32) -> Self {
        Self {
            m31: x,
            m32: y,
            ..Self::IDENTITY
        }
    }

    #[inline]
    pub const fn scale(x: f32, y: f32) -> Self {
        Self {
            m11: x,
            m22: y,
            ..Self::IDENTITY
        }
    }

    /// `self` followed by `rhs`.
    pub fn then(&self, rhs: &Self) -> Self {
        Self {
            m11: self.m11 * rhs.m11 + self.m12 * rhs.m21,
            m12: self.m11 * rhs.m12 + self.m12 * rhs.m22,
            m21: self.m21 * rhs.m11 + self.m22 * rhs.m21,
            m22: self.m21 * rhs.m12 + self.m22 * rhs.m22,
            m31: self.m31 * rhs.m11 + self.m32 * rhs.m21 + rhs.m31,
            m32: self.m31 * rhs.m12 + self.m32 * rhs.m22 + rhs.m32,
        }
    }

    #[inline]
    pub fn transform_point(&self, point: impl Into<Point2F>) -> Point2F {
        let p = point.into();
        Point2F::new(
            p.x * self.m11 + p.y * self.m21 + self.m31,
            p.x * self.m12 + p.y * self.m22 + self.m32,
        )
    }
}

/// `D2D1_PIXEL_FORMAT` with plain integer fields.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct RawPixelFormat {
    pub format: u32,
    pub alpha_mode: u32,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PixelFormat {
    pub format: DxgiFormat,
    pub alpha_mode: AlphaMode,
}

impl PixelFormat {
    #[inline]
    pub const fn new(format: DxgiFormat, alpha_mode: AlphaMode) -> Self {
        Self { format, alpha_mode }
    }
}

impl Default for PixelFormat {
    #[inline]
    fn default() -> Self {
        Self::new(DxgiFormat::Unknown, AlphaMode::Unknown)
    }
}

impl From<&PixelFormat> for RawPixelFormat {
    #[inline]
    fn from(src: &PixelFormat) -> Self {
        Self {
            format: src.format.to_raw(),
            alpha_mode: src.alpha_mode.to_raw(),
        }
    }
}

impl TryFrom<&RawPixelFormat> for PixelFormat {
    type Error = Error;

    #[inline]
    fn try_from(src: &RawPixelFormat) -> Result<Self> {
        Ok(Self::new(src.format.try_into()?, src.alpha_mode.try_into()?))
    }
}

/// A pair of `D2D1_TAG` values identifying drawing operations in error reports.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct Tags(pub u64, pub u64);

/// Properties of a render target as created by a factory.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct RenderTargetProperties {
    pub ty: RenderTargetType,
    pub pixel_format: PixelFormat,
    /// `0.0` selects the system DPI.
    pub dpi_x: f32,
    pub dpi_y: f32,
}

impl Default for RenderTargetProperties {
    #[inline]
    fn default() -> Self {
        Self {
            ty: RenderTargetType::Default,
            pixel_format: PixelFormat::default(),
            dpi_x: 0.0,
            dpi_y: 0.0,
        }
    }
}

/// Window-specific properties of an HWND render target.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct HwndRenderTargetProperties {
    pub window: Hwnd,
    pub pixel_size: SizeU,
    pub present_options: PresentOptions,
}

impl HwndRenderTargetProperties {
    #[inline]
    pub fn new(window: impl AsWindowHandle, pixel_size: impl Into<SizeU>) -> Self {
        Self {
            window: window.window_handle(),
            pixel_size: pixel_size.into(),
            present_options: PresentOptions::NONE,
        }
    }

    #[inline]
    pub fn with_present_options(mut self, options: PresentOptions) -> Self {
        self.present_options = options;
        self
    }
}

/// Creation options for a Direct2D factory.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FactoryOptions {
    pub ty: FactoryType,
    pub debug_level: DebugLevel,
}

impl Default for FactoryOptions {
    #[inline]
    fn default() -> Self {
        Self {
            ty: FactoryType::SingleThreaded,
            debug_level: DebugLevel::None,
        }
    }
}

impl FactoryOptions {
    #[inline]
    pub fn with_type(mut self, ty: FactoryType) -> Self {
        self.ty = ty;
        self
    }

    #[inline]
    pub fn with_debug_level(mut self, level: DebugLevel) -> Self {
        self.debug_level = level;
        self
    }
}
