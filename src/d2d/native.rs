use super::text::{to_utf16, to_wide};
use super::*;
use crate::*;
use std::mem::size_of;
use tracing::debug;
use windows::core::{w, Interface, PCWSTR};
use windows::Foundation::Numerics::{Matrix3x2 as NativeMatrix3x2, Vector2};
use windows::Win32::Foundation::HWND;
use windows::Win32::Graphics::Direct2D::Common::*;
use windows::Win32::Graphics::Direct2D::*;
use windows::Win32::Graphics::DirectWrite::*;
use windows::Win32::Graphics::Dxgi::Common::DXGI_FORMAT;

const _: () = {
    assert!(size_of::<Color4>() == size_of::<D2D1_COLOR_F>());
    assert!(size_of::<Point2F>() == size_of::<Vector2>());
    assert!(size_of::<RectF>() == size_of::<D2D_RECT_F>());
    assert!(size_of::<SizeF>() == size_of::<D2D_SIZE_F>());
    assert!(size_of::<SizeU>() == size_of::<D2D_SIZE_U>());
    assert!(size_of::<Ellipse>() == size_of::<D2D1_ELLIPSE>());
    assert!(size_of::<RoundedRect>() == size_of::<D2D1_ROUNDED_RECT>());
    assert!(size_of::<Matrix3x2>() == size_of::<NativeMatrix3x2>());
    assert!(size_of::<RawPixelFormat>() == size_of::<D2D1_PIXEL_FORMAT>());
    assert!(size_of::<RawStrokeStyleProperties>() == size_of::<D2D1_STROKE_STYLE_PROPERTIES>());
};

fn code(result: windows::core::Result<()>) -> ResultCode {
    match result {
        Ok(()) => ResultCode::OK,
        Err(e) => ResultCode(e.code().0),
    }
}

#[inline]
fn vector(p: Point2F) -> Vector2 {
    Vector2 { X: p.x, Y: p.y }
}

#[inline]
fn rect_f(rect: &RectF) -> *const D2D_RECT_F {
    rect as *const RectF as *const D2D_RECT_F
}

#[inline]
fn pixel_format(src: &PixelFormat) -> D2D1_PIXEL_FORMAT {
    D2D1_PIXEL_FORMAT {
        format: DXGI_FORMAT(src.format.to_raw() as _),
        alphaMode: D2D1_ALPHA_MODE(src.alpha_mode.to_raw() as _),
    }
}

/// [`Backend`] over an `ID2D1RenderTarget`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct NativeRenderTarget(ID2D1RenderTarget);

impl NativeRenderTarget {
    /// Wraps a render target created elsewhere.
    #[inline]
    pub fn from_raw(target: ID2D1RenderTarget) -> Self {
        Self(target)
    }

    #[inline]
    pub fn handle(&self) -> &ID2D1RenderTarget {
        &self.0
    }

    pub fn create_solid_color_brush(&self, color: impl Into<Color4>) -> Result<ID2D1Brush> {
        let color = color.into();
        let brush = unsafe {
            self.0
                .CreateSolidColorBrush(&color as *const Color4 as *const D2D1_COLOR_F, None)?
        };
        Ok(brush.cast()?)
    }

    /// Resizes the back buffer of an HWND render target.
    pub fn resize(&self, size: impl Into<SizeU>) -> Result<()> {
        let size = size.into();
        let target: ID2D1HwndRenderTarget = self.0.cast()?;
        unsafe {
            target.Resize(&size as *const SizeU as *const D2D_SIZE_U)?;
        }
        Ok(())
    }
}

impl Backend for NativeRenderTarget {
    type Brush = ID2D1Brush;
    type StrokeStyle = ID2D1StrokeStyle;
    type TextFormat = IDWriteTextFormat;
    type TextLayout = IDWriteTextLayout;
    type RenderingParams = IDWriteRenderingParams;

    fn begin_draw(&self) {
        unsafe { self.0.BeginDraw() }
    }

    fn end_draw(&self, tags: Option<&mut Tags>) -> ResultCode {
        unsafe {
            match tags {
                Some(tags) => code(self.0.EndDraw(
                    Some(&mut tags.0 as *mut u64),
                    Some(&mut tags.1 as *mut u64),
                )),
                None => code(self.0.EndDraw(None, None)),
            }
        }
    }

    fn flush(&self, tags: Option<&mut Tags>) -> ResultCode {
        unsafe {
            match tags {
                Some(tags) => code(self.0.Flush(
                    Some(&mut tags.0 as *mut u64),
                    Some(&mut tags.1 as *mut u64),
                )),
                None => code(self.0.Flush(None, None)),
            }
        }
    }

    fn set_tags(&self, tags: Tags) {
        unsafe { self.0.SetTags(tags.0, tags.1) }
    }

    fn get_tags(&self, tags: &mut Tags) {
        unsafe {
            self.0.GetTags(
                Some(&mut tags.0 as *mut u64),
                Some(&mut tags.1 as *mut u64),
            )
        }
    }

    fn clear(&self, color: Option<&Color4>) {
        unsafe {
            self.0
                .Clear(color.map(|c| c as *const Color4 as *const D2D1_COLOR_F))
        }
    }

    fn draw_line(
        &self,
        p0: Point2F,
        p1: Point2F,
        brush: &ID2D1Brush,
        width: f32,
        style: Option<&ID2D1StrokeStyle>,
    ) {
        unsafe {
            self.0
                .DrawLine(vector(p0), vector(p1), brush, width, style)
        }
    }

    fn draw_rectangle(
        &self,
        rect: &RectF,
        brush: &ID2D1Brush,
        width: f32,
        style: Option<&ID2D1StrokeStyle>,
    ) {
        unsafe { self.0.DrawRectangle(rect_f(rect), brush, width, style) }
    }

    fn fill_rectangle(&self, rect: &RectF, brush: &ID2D1Brush) {
        unsafe { self.0.FillRectangle(rect_f(rect), brush) }
    }

    fn draw_rounded_rectangle(
        &self,
        rect: &RoundedRect,
        brush: &ID2D1Brush,
        width: f32,
        style: Option<&ID2D1StrokeStyle>,
    ) {
        unsafe {
            self.0.DrawRoundedRectangle(
                rect as *const RoundedRect as *const D2D1_ROUNDED_RECT,
                brush,
                width,
                style,
            )
        }
    }

    fn fill_rounded_rectangle(&self, rect: &RoundedRect, brush: &ID2D1Brush) {
        unsafe {
            self.0
                .FillRoundedRectangle(rect as *const RoundedRect as *const D2D1_ROUNDED_RECT, brush)
        }
    }

    fn draw_ellipse(
        &self,
        ellipse: &Ellipse,
        brush: &ID2D1Brush,
        width: f32,
        style: Option<&ID2D1StrokeStyle>,
    ) {
        unsafe {
            self.0.DrawEllipse(
                ellipse as *const Ellipse as *const D2D1_ELLIPSE,
                brush,
                width,
                style,
            )
        }
    }

    fn fill_ellipse(&self, ellipse: &Ellipse, brush: &ID2D1Brush) {
        unsafe {
            self.0
                .FillEllipse(ellipse as *const Ellipse as *const D2D1_ELLIPSE, brush)
        }
    }

    fn draw_text(
        &self,
        text: &[u16],
        format: &IDWriteTextFormat,
        layout_rect: &RectF,
        brush: &ID2D1Brush,
        options: u32,
        measuring_mode: u32,
    ) {
        unsafe {
            self.0.DrawText(
                text,
                format,
                rect_f(layout_rect),
                brush,
                D2D1_DRAW_TEXT_OPTIONS(options as _),
                DWRITE_MEASURING_MODE(measuring_mode as _),
            )
        }
    }

    fn draw_text_layout(
        &self,
        origin: Point2F,
        layout: &IDWriteTextLayout,
        brush: &ID2D1Brush,
        options: u32,
    ) {
        unsafe {
            self.0.DrawTextLayout(
                vector(origin),
                layout,
                brush,
                D2D1_DRAW_TEXT_OPTIONS(options as _),
            )
        }
    }

    fn push_axis_aligned_clip(&self, rect: &RectF, antialias_mode: u32) {
        unsafe {
            self.0
                .PushAxisAlignedClip(rect_f(rect), D2D1_ANTIALIAS_MODE(antialias_mode as _))
        }
    }

    fn pop_axis_aligned_clip(&self) {
        unsafe { self.0.PopAxisAlignedClip() }
    }

    fn set_text_rendering_params(&self, params: Option<&IDWriteRenderingParams>) {
        unsafe { self.0.SetTextRenderingParams(params) }
    }

    fn get_text_rendering_params(&self, params: &mut Option<IDWriteRenderingParams>) {
        unsafe { self.0.GetTextRenderingParams(params) }
    }

    fn get_pixel_format(&self) -> RawPixelFormat {
        let format = unsafe { self.0.GetPixelFormat() };
        RawPixelFormat {
            format: format.format.0 as u32,
            alpha_mode: format.alphaMode.0 as u32,
        }
    }

    fn set_transform(&self, transform: &Matrix3x2) {
        unsafe {
            self.0
                .SetTransform(transform as *const Matrix3x2 as *const NativeMatrix3x2)
        }
    }

    fn get_transform(&self, transform: &mut Matrix3x2) {
        unsafe {
            self.0
                .GetTransform(transform as *mut Matrix3x2 as *mut NativeMatrix3x2)
        }
    }

    fn get_size(&self) -> SizeF {
        let size = unsafe { self.0.GetSize() };
        SizeF::new(size.width, size.height)
    }

    fn get_pixel_size(&self) -> SizeU {
        let size = unsafe { self.0.GetPixelSize() };
        SizeU::new(size.width, size.height)
    }

    fn set_dpi(&self, dpi_x: f32, dpi_y: f32) {
        unsafe { self.0.SetDpi(dpi_x, dpi_y) }
    }

    fn get_dpi(&self, dpi_x: &mut f32, dpi_y: &mut f32) {
        unsafe { self.0.GetDpi(dpi_x, dpi_y) }
    }

    fn set_antialias_mode(&self, mode: u32) {
        unsafe { self.0.SetAntialiasMode(D2D1_ANTIALIAS_MODE(mode as _)) }
    }

    fn get_antialias_mode(&self) -> u32 {
        unsafe { self.0.GetAntialiasMode().0 as u32 }
    }

    fn set_text_antialias_mode(&self, mode: u32) {
        unsafe {
            self.0
                .SetTextAntialiasMode(D2D1_TEXT_ANTIALIAS_MODE(mode as _))
        }
    }

    fn get_text_antialias_mode(&self) -> u32 {
        unsafe { self.0.GetTextAntialiasMode().0 as u32 }
    }
}

/// The Direct2D and DirectWrite factories.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Factory {
    d2d: ID2D1Factory,
    dwrite: IDWriteFactory,
}

impl Factory {
    pub fn new(options: FactoryOptions) -> Result<Self> {
        let d2d = unsafe {
            let opts = D2D1_FACTORY_OPTIONS {
                debugLevel: D2D1_DEBUG_LEVEL(options.debug_level.to_raw() as _),
            };
            D2D1CreateFactory::<ID2D1Factory>(
                D2D1_FACTORY_TYPE(options.ty.to_raw() as _),
                Some(&opts as *const D2D1_FACTORY_OPTIONS),
            )?
        };
        let dwrite = unsafe { DWriteCreateFactory::<IDWriteFactory>(DWRITE_FACTORY_TYPE_SHARED)? };
        debug!("Factory::new: {:?}", options);
        Ok(Self { d2d, dwrite })
    }

    #[inline]
    pub fn d2d1_factory(&self) -> &ID2D1Factory {
        &self.d2d
    }

    #[inline]
    pub fn dwrite_factory(&self) -> &IDWriteFactory {
        &self.dwrite
    }

    pub fn create_hwnd_render_target(
        &self,
        props: &RenderTargetProperties,
        hwnd_props: &HwndRenderTargetProperties,
    ) -> Result<RenderTarget<NativeRenderTarget>> {
        let props_raw = D2D1_RENDER_TARGET_PROPERTIES {
            r#type: D2D1_RENDER_TARGET_TYPE(props.ty.to_raw() as _),
            pixelFormat: pixel_format(&props.pixel_format),
            dpiX: props.dpi_x,
            dpiY: props.dpi_y,
            usage: D2D1_RENDER_TARGET_USAGE_NONE,
            minLevel: D2D1_FEATURE_LEVEL_DEFAULT,
        };
        let hwnd_raw = D2D1_HWND_RENDER_TARGET_PROPERTIES {
            hwnd: HWND::from(hwnd_props.window),
            pixelSize: D2D_SIZE_U {
                width: hwnd_props.pixel_size.width,
                height: hwnd_props.pixel_size.height,
            },
            presentOptions: D2D1_PRESENT_OPTIONS(hwnd_props.present_options.bits() as _),
        };
        let target = unsafe { self.d2d.CreateHwndRenderTarget(&props_raw, &hwnd_raw)? };
        debug!(
            "Factory::create_hwnd_render_target: {}x{}",
            hwnd_props.pixel_size.width, hwnd_props.pixel_size.height
        );
        Ok(RenderTarget::from_backend(NativeRenderTarget(target.cast()?)))
    }

    pub fn create_stroke_style(&self, props: &StrokeStyleProperties) -> Result<ID2D1StrokeStyle> {
        let (raw, dashes) = props.to_raw();
        let style = unsafe {
            self.d2d.CreateStrokeStyle(
                &raw as *const RawStrokeStyleProperties as *const D2D1_STROKE_STYLE_PROPERTIES,
                dashes,
            )?
        };
        Ok(style)
    }

    /// `size` is in DIPs; pass a [`FontPoint`] to size in points.
    pub fn create_text_format(
        &self,
        font_name: &str,
        size: impl Into<f32>,
        style: Option<&TextStyle>,
    ) -> Result<IDWriteTextFormat> {
        let name = to_wide(font_name);
        let style = style.copied().unwrap_or_default();
        let format = unsafe {
            self.dwrite.CreateTextFormat(
                PCWSTR(name.as_ptr()),
                None,
                DWRITE_FONT_WEIGHT(style.weight.to_raw()),
                DWRITE_FONT_STYLE(style.style.to_raw()),
                DWRITE_FONT_STRETCH(style.stretch.to_raw()),
                size.into(),
                w!(""),
            )?
        };
        Ok(format)
    }

    pub fn create_text_layout(
        &self,
        text: &str,
        format: &IDWriteTextFormat,
        max_size: impl Into<SizeF>,
    ) -> Result<IDWriteTextLayout> {
        let text = to_utf16(text);
        let max_size = max_size.into();
        let layout = unsafe {
            self.dwrite
                .CreateTextLayout(&text, format, max_size.width, max_size.height)?
        };
        Ok(layout)
    }

    pub fn create_rendering_params(&self) -> Result<IDWriteRenderingParams> {
        Ok(unsafe { self.dwrite.CreateRenderingParams()? })
    }
}

/// Sets the horizontal and vertical alignment of a text format or layout.
pub fn set_text_alignment(
    format: &IDWriteTextFormat,
    text: TextAlignment,
    paragraph: ParagraphAlignment,
) -> Result<()> {
    unsafe {
        format.SetTextAlignment(DWRITE_TEXT_ALIGNMENT(text.to_raw()))?;
        format.SetParagraphAlignment(DWRITE_PARAGRAPH_ALIGNMENT(paragraph.to_raw()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_objects() -> anyhow::Result<()> {
        let factory = Factory::new(FactoryOptions::default())?;
        let style = factory.create_stroke_style(&StrokeStyleProperties {
            dash: Some(Dash {
                style: DashStyle::Custom(&[2.0, 1.0]),
                ..Default::default()
            }),
            ..Default::default()
        })?;
        assert_eq!(unsafe { style.GetDashesCount() }, 2);
        let format = factory.create_text_format(
            "Segoe UI",
            font_point(12.0),
            Some(&TextStyle::default().weight(FontWeight::Bold)),
        )?;
        assert_eq!(unsafe { format.GetFontSize() }, 16.0);
        assert_eq!(unsafe { format.GetFontWeight() }.0, 700);
        let layout = factory.create_text_layout("abc", &format, SizeF::new(100.0, 20.0))?;
        set_text_alignment(&layout, TextAlignment::Center, ParagraphAlignment::Far)?;
        assert_eq!(unsafe { layout.GetTextAlignment() }.0, 2);
        assert_eq!(unsafe { layout.GetMaxWidth() }, 100.0);
        Ok(())
    }
}
