use super::types::*;
use crate::*;

/// The `ID2D1RenderTarget` entry points wrapped by
/// [`RenderTarget`](super::RenderTarget).
///
/// Drawing methods return nothing, as natively; failures surface from
/// `end_draw` and `flush` together with the tags that were current when
/// the failing operation was recorded. Enum-typed parameters are passed
/// as their native integers.
pub trait Backend {
    type Brush: Clone;
    type StrokeStyle: Clone;
    type TextFormat: Clone;
    type TextLayout: Clone;
    type RenderingParams: Clone;

    fn begin_draw(&self);
    fn end_draw(&self, tags: Option<&mut Tags>) -> ResultCode;
    fn flush(&self, tags: Option<&mut Tags>) -> ResultCode;
    fn set_tags(&self, tags: Tags);
    fn get_tags(&self, tags: &mut Tags);

    fn clear(&self, color: Option<&Color4>);
    fn draw_line(
        &self,
        p0: Point2F,
        p1: Point2F,
        brush: &Self::Brush,
        width: f32,
        style: Option<&Self::StrokeStyle>,
    );
    fn draw_rectangle(
        &self,
        rect: &RectF,
        brush: &Self::Brush,
        width: f32,
        style: Option<&Self::StrokeStyle>,
    );
    fn fill_rectangle(&self, rect: &RectF, brush: &Self::Brush);
    fn draw_rounded_rectangle(
        &self,
        rect: &RoundedRect,
        brush: &Self::Brush,
        width: f32,
        style: Option<&Self::StrokeStyle>,
    );
    fn fill_rounded_rectangle(&self, rect: &RoundedRect, brush: &Self::Brush);
    fn draw_ellipse(
        &self,
        ellipse: &Ellipse,
        brush: &Self::Brush,
        width: f32,
        style: Option<&Self::StrokeStyle>,
    );
    fn fill_ellipse(&self, ellipse: &Ellipse, brush: &Self::Brush);

    #[allow(clippy::too_many_arguments)]
    fn draw_text(
        &self,
        text: &[u16],
        format: &Self::TextFormat,
        layout_rect: &RectF,
        brush: &Self::Brush,
        options: u32,
        measuring_mode: u32,
    );
    fn draw_text_layout(
        &self,
        origin: Point2F,
        layout: &Self::TextLayout,
        brush: &Self::Brush,
        options: u32,
    );

    fn push_axis_aligned_clip(&self, rect: &RectF, antialias_mode: u32);
    fn pop_axis_aligned_clip(&self);

    fn set_text_rendering_params(&self, params: Option<&Self::RenderingParams>);
    fn get_text_rendering_params(&self, params: &mut Option<Self::RenderingParams>);
    fn get_pixel_format(&self) -> RawPixelFormat;
    fn set_transform(&self, transform: &Matrix3x2);
    fn get_transform(&self, transform: &mut Matrix3x2);
    fn get_size(&self) -> SizeF;
    fn get_pixel_size(&self) -> SizeU;
    fn set_dpi(&self, dpi_x: f32, dpi_y: f32);
    fn get_dpi(&self, dpi_x: &mut f32, dpi_y: &mut f32);
    fn set_antialias_mode(&self, mode: u32);
    fn get_antialias_mode(&self) -> u32;
    fn set_text_antialias_mode(&self, mode: u32);
    fn get_text_antialias_mode(&self) -> u32;
}
