use super::text::to_utf16;
use super::*;
use crate::*;

/// A Direct2D render target, wrapping `ID2D1RenderTarget`.
///
/// Drawing must happen between [`begin_draw`](Self::begin_draw) and
/// [`end_draw`](Self::end_draw). Errors of individual drawing operations
/// are reported by `end_draw` or `flush`.
#[derive(Clone, Debug)]
pub struct RenderTarget<B: Backend> {
    backend: B,
}

impl<B: Backend> RenderTarget<B> {
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
    pub fn begin_draw(&self) {
        self.backend.begin_draw();
    }

    /// `Err(RecreateTarget)` means the target must be recreated along with
    /// every resource created from it.
    #[inline]
    pub fn end_draw(&self) -> Result<()> {
        self.backend.end_draw(None).ok()
    }

    /// Like [`end_draw`](Self::end_draw), additionally returning the tags
    /// that were set when the first failing operation was recorded.
    pub fn end_draw_tagged(&self) -> core::result::Result<(), (Error, Tags)> {
        let mut tags = Tags::default();
        let code = self.backend.end_draw(Some(&mut tags));
        code.ok().map_err(|e| (e, tags))
    }

    #[inline]
    pub fn flush(&self) -> Result<()> {
        self.backend.flush(None).ok()
    }

    pub fn flush_tagged(&self) -> core::result::Result<(), (Error, Tags)> {
        let mut tags = Tags::default();
        let code = self.backend.flush(Some(&mut tags));
        code.ok().map_err(|e| (e, tags))
    }

    #[inline]
    pub fn set_tags(&self, tags: Tags) {
        self.backend.set_tags(tags);
    }

    #[inline]
    pub fn tags(&self) -> Tags {
        let mut tags = Tags::default();
        self.backend.get_tags(&mut tags);
        tags
    }

    /// `None` clears to transparent black.
    #[inline]
    pub fn clear(&self, color: Option<Color4>) {
        self.backend.clear(color.as_ref());
    }

    #[inline]
    pub fn draw_line(
        &self,
        brush: &B::Brush,
        p0: impl Into<Point2F>,
        p1: impl Into<Point2F>,
        width: f32,
        style: Option<&B::StrokeStyle>,
    ) {
        self.backend
            .draw_line(p0.into(), p1.into(), brush, width, style);
    }

    #[inline]
    pub fn draw_rectangle(
        &self,
        brush: &B::Brush,
        rect: impl Into<RectF>,
        width: f32,
        style: Option<&B::StrokeStyle>,
    ) {
        self.backend
            .draw_rectangle(&rect.into(), brush, width, style);
    }

    #[inline]
    pub fn fill_rectangle(&self, brush: &B::Brush, rect: impl Into<RectF>) {
        self.backend.fill_rectangle(&rect.into(), brush);
    }

    #[inline]
    pub fn draw_rounded_rectangle(
        &self,
        brush: &B::Brush,
        rect: &RoundedRect,
        width: f32,
        style: Option<&B::StrokeStyle>,
    ) {
        self.backend.draw_rounded_rectangle(rect, brush, width, style);
    }

    #[inline]
    pub fn fill_rounded_rectangle(&self, brush: &B::Brush, rect: &RoundedRect) {
        self.backend.fill_rounded_rectangle(rect, brush);
    }

    #[inline]
    pub fn draw_ellipse(
        &self,
        brush: &B::Brush,
        ellipse: impl Into<Ellipse>,
        width: f32,
        style: Option<&B::StrokeStyle>,
    ) {
        self.backend
            .draw_ellipse(&ellipse.into(), brush, width, style);
    }

    #[inline]
    pub fn fill_ellipse(&self, brush: &B::Brush, ellipse: impl Into<Ellipse>) {
        self.backend.fill_ellipse(&ellipse.into(), brush);
    }

    /// Lays out and draws `text` inside `layout_rect`.
    pub fn draw_text(
        &self,
        text: &str,
        format: &B::TextFormat,
        layout_rect: impl Into<RectF>,
        brush: &B::Brush,
        options: DrawTextOptions,
        measuring_mode: MeasuringMode,
    ) {
        let text = to_utf16(text);
        self.backend.draw_text(
            &text,
            format,
            &layout_rect.into(),
            brush,
            options.bits(),
            measuring_mode.to_raw(),
        );
    }

    #[inline]
    pub fn draw_text_layout(
        &self,
        origin: impl Into<Point2F>,
        layout: &B::TextLayout,
        brush: &B::Brush,
        options: DrawTextOptions,
    ) {
        self.backend
            .draw_text_layout(origin.into(), layout, brush, options.bits());
    }

    /// Every push must be matched by [`pop_axis_aligned_clip`](Self::pop_axis_aligned_clip)
    /// before `end_draw`.
    #[inline]
    pub fn push_axis_aligned_clip(&self, rect: impl Into<RectF>, mode: AntialiasMode) {
        self.backend
            .push_axis_aligned_clip(&rect.into(), mode.to_raw());
    }

    #[inline]
    pub fn pop_axis_aligned_clip(&self) {
        self.backend.pop_axis_aligned_clip();
    }

    /// Runs `f` with `rect` pushed as an axis-aligned clip.
    pub fn clip<R>(
        &self,
        rect: impl Into<RectF>,
        mode: AntialiasMode,
        f: impl FnOnce(&Self) -> R,
    ) -> R {
        self.push_axis_aligned_clip(rect, mode);
        let ret = f(self);
        self.pop_axis_aligned_clip();
        ret
    }

    #[inline]
    pub fn fill(&self, object: &impl Fill, brush: &B::Brush) {
        object.fill(self, brush);
    }

    #[inline]
    pub fn stroke(
        &self,
        object: &impl Stroke,
        brush: &B::Brush,
        width: f32,
        style: Option<&B::StrokeStyle>,
    ) {
        object.stroke(self, brush, width, style);
    }

    #[inline]
    pub fn text_rendering_params(&self) -> Option<B::RenderingParams> {
        let mut params = None;
        self.backend.get_text_rendering_params(&mut params);
        params
    }

    /// `None` restores the default rendering parameters.
    #[inline]
    pub fn set_text_rendering_params(&self, params: Option<&B::RenderingParams>) {
        self.backend.set_text_rendering_params(params);
    }

    #[inline]
    pub fn pixel_format(&self) -> Result<PixelFormat> {
        PixelFormat::try_from(&self.backend.get_pixel_format())
    }

    #[inline]
    pub fn transform(&self) -> Matrix3x2 {
        let mut m = Matrix3x2::IDENTITY;
        self.backend.get_transform(&mut m);
        m
    }

    #[inline]
    pub fn set_transform(&self, transform: &Matrix3x2) {
        self.backend.set_transform(transform);
    }

    /// Size in DIPs.
    #[inline]
    pub fn size(&self) -> SizeF {
        self.backend.get_size()
    }

    #[inline]
    pub fn pixel_size(&self) -> SizeU {
        self.backend.get_pixel_size()
    }

    #[inline]
    pub fn dpi(&self) -> (f32, f32) {
        let mut dpi = (0.0, 0.0);
        self.backend.get_dpi(&mut dpi.0, &mut dpi.1);
        dpi
    }

    /// `(0.0, 0.0)` selects the system DPI.
    #[inline]
    pub fn set_dpi(&self, dpi_x: f32, dpi_y: f32) {
        self.backend.set_dpi(dpi_x, dpi_y);
    }

    #[inline]
    pub fn antialias_mode(&self) -> Result<AntialiasMode> {
        self.backend.get_antialias_mode().try_into()
    }

    #[inline]
    pub fn set_antialias_mode(&self, mode: AntialiasMode) {
        self.backend.set_antialias_mode(mode.to_raw());
    }

    #[inline]
    pub fn text_antialias_mode(&self) -> Result<TextAntialiasMode> {
        self.backend.get_text_antialias_mode().try_into()
    }

    #[inline]
    pub fn set_text_antialias_mode(&self, mode: TextAntialiasMode) {
        self.backend.set_text_antialias_mode(mode.to_raw());
    }
}

/// Shapes that can be filled by [`RenderTarget::fill`].
pub trait Fill {
    fn fill<B: Backend>(&self, target: &RenderTarget<B>, brush: &B::Brush);
}

/// Shapes that can be outlined by [`RenderTarget::stroke`].
pub trait Stroke {
    fn stroke<B: Backend>(
        &self,
        target: &RenderTarget<B>,
        brush: &B::Brush,
        width: f32,
        style: Option<&B::StrokeStyle>,
    );
}

/// A line segment from `p0` to `p1`.
#[derive(Clone, Copy, PartialEq, Default, Debug)]
pub struct Line {
    pub p0: Point2F,
    pub p1: Point2F,
}

#[inline]
pub fn line(p0: impl Into<Point2F>, p1: impl Into<Point2F>) -> Line {
    Line {
        p0: p0.into(),
        p1: p1.into(),
    }
}

impl Stroke for Line {
    #[inline]
    fn stroke<B: Backend>(
        &self,
        target: &RenderTarget<B>,
        brush: &B::Brush,
        width: f32,
        style: Option<&B::StrokeStyle>,
    ) {
        target.draw_line(brush, self.p0, self.p1, width, style);
    }
}

impl Fill for RoundedRect {
    #[inline]
    fn fill<B: Backend>(&self, target: &RenderTarget<B>, brush: &B::Brush) {
        target.fill_rounded_rectangle(brush, self);
    }
}

impl Stroke for RoundedRect {
    #[inline]
    fn stroke<B: Backend>(
        &self,
        target: &RenderTarget<B>,
        brush: &B::Brush,
        width: f32,
        style: Option<&B::StrokeStyle>,
    ) {
        target.draw_rounded_rectangle(brush, self, width, style);
    }
}

macro_rules! impl_shape {
    ($($ty:ty => $fill:ident, $draw:ident;)*) => {
        $(
            impl Fill for $ty {
                #[inline]
                fn fill<B: Backend>(&self, target: &RenderTarget<B>, brush: &B::Brush) {
                    target.$fill(brush, *self);
                }
            }

            impl Stroke for $ty {
                #[inline]
                fn stroke<B: Backend>(
                    &self,
                    target: &RenderTarget<B>,
                    brush: &B::Brush,
                    width: f32,
                    style: Option<&B::StrokeStyle>,
                ) {
                    target.$draw(brush, *self, width, style);
                }
            }
        )*
    };
}

impl_shape! {
    RectF => fill_rectangle, draw_rectangle;
    gecl::Rect<f32> => fill_rectangle, draw_rectangle;
    gecl::Rect<i32> => fill_rectangle, draw_rectangle;
    Ellipse => fill_ellipse, draw_ellipse;
    gecl::Circle<f32> => fill_ellipse, draw_ellipse;
    gecl::Ellipse<f32> => fill_ellipse, draw_ellipse;
}
