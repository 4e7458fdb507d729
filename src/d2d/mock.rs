//! A recording render target used by the unit tests.

use super::backend::*;
use super::types::*;
use crate::*;
use std::cell::RefCell;
use std::collections::VecDeque;

#[derive(Clone, PartialEq, Debug)]
pub(crate) enum Call {
    BeginDraw,
    EndDraw { tagged: bool },
    Flush { tagged: bool },
    SetTags(Tags),
    Clear(Option<Color4>),
    DrawLine {
        p0: Point2F,
        p1: Point2F,
        brush: u32,
        width: f32,
        style: Option<u32>,
    },
    DrawRectangle {
        rect: RectF,
        brush: u32,
        width: f32,
        style: Option<u32>,
    },
    FillRectangle(RectF, u32),
    DrawRoundedRectangle {
        rect: RoundedRect,
        brush: u32,
        width: f32,
        style: Option<u32>,
    },
    FillRoundedRectangle(RoundedRect, u32),
    DrawEllipse {
        ellipse: Ellipse,
        brush: u32,
        width: f32,
        style: Option<u32>,
    },
    FillEllipse(Ellipse, u32),
    DrawText {
        text: Vec<u16>,
        format: u32,
        rect: RectF,
        brush: u32,
        options: u32,
        measuring_mode: u32,
    },
    DrawTextLayout {
        origin: Point2F,
        layout: u32,
        brush: u32,
        options: u32,
    },
    PushAxisAlignedClip(RectF, u32),
    PopAxisAlignedClip,
    SetTextRenderingParams(Option<u32>),
    SetTransform(Matrix3x2),
    SetDpi(f32, f32),
    SetAntialiasMode(u32),
    SetTextAntialiasMode(u32),
}

#[derive(Default, Debug)]
pub(crate) struct MockState {
    pub tags: Tags,
    pub transform: Matrix3x2,
    pub dpi: (f32, f32),
    pub antialias_mode: u32,
    pub text_antialias_mode: u32,
    pub rendering_params: Option<u32>,
    pub pixel_format: RawPixelFormat,
    pub size: SizeF,
    pub pixel_size: SizeU,
}

#[derive(Default)]
pub(crate) struct MockRenderTarget {
    calls: RefCell<Vec<Call>>,
    codes: RefCell<VecDeque<ResultCode>>,
    pub(crate) state: RefCell<MockState>,
}

impl MockRenderTarget {
    pub(crate) fn new() -> Self {
        let target = Self::default();
        {
            let mut state = target.state.borrow_mut();
            state.transform = Matrix3x2::IDENTITY;
            state.dpi = (96.0, 96.0);
        }
        target
    }

    /// Queues the code returned by the next `end_draw` or `flush`.
    pub(crate) fn push_code(&self, code: impl Into<ResultCode>) {
        self.codes.borrow_mut().push_back(code.into());
    }

    pub(crate) fn take_calls(&self) -> Vec<Call> {
        std::mem::take(&mut *self.calls.borrow_mut())
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    /// Records a status-returning call and writes the current tags out.
    fn finish(&self, call: Call, tags: Option<&mut Tags>) -> ResultCode {
        self.record(call);
        if let Some(tags) = tags {
            *tags = self.state.borrow().tags;
        }
        self.codes.borrow_mut().pop_front().unwrap_or(ResultCode::OK)
    }
}

impl Backend for MockRenderTarget {
    type Brush = u32;
    type StrokeStyle = u32;
    type TextFormat = u32;
    type TextLayout = u32;
    type RenderingParams = u32;

    fn begin_draw(&self) {
        self.record(Call::BeginDraw);
    }

    fn end_draw(&self, tags: Option<&mut Tags>) -> ResultCode {
        let tagged = tags.is_some();
        self.finish(Call::EndDraw { tagged }, tags)
    }

    fn flush(&self, tags: Option<&mut Tags>) -> ResultCode {
        let tagged = tags.is_some();
        self.finish(Call::Flush { tagged }, tags)
    }

    fn set_tags(&self, tags: Tags) {
        self.record(Call::SetTags(tags));
        self.state.borrow_mut().tags = tags;
    }

    fn get_tags(&self, tags: &mut Tags) {
        *tags = self.state.borrow().tags;
    }

    fn clear(&self, color: Option<&Color4>) {
        self.record(Call::Clear(color.copied()));
    }

    fn draw_line(&self, p0: Point2F, p1: Point2F, brush: &u32, width: f32, style: Option<&u32>) {
        self.record(Call::DrawLine {
            p0,
            p1,
            brush: *brush,
            width,
            style: style.copied(),
        });
    }

    fn draw_rectangle(&self, rect: &RectF, brush: &u32, width: f32, style: Option<&u32>) {
        self.record(Call::DrawRectangle {
            rect: *rect,
            brush: *brush,
            width,
            style: style.copied(),
        });
    }

    fn fill_rectangle(&self, rect: &RectF, brush: &u32) {
        self.record(Call::FillRectangle(*rect, *brush));
    }

    fn draw_rounded_rectangle(
        &self,
        rect: &RoundedRect,
        brush: &u32,
        width: f32,
        style: Option<&u32>,
    ) {
        self.record(Call::DrawRoundedRectangle {
            rect: *rect,
            brush: *brush,
            width,
            style: style.copied(),
        });
    }

    fn fill_rounded_rectangle(&self, rect: &RoundedRect, brush: &u32) {
        self.record(Call::FillRoundedRectangle(*rect, *brush));
    }

    fn draw_ellipse(&self, ellipse: &Ellipse, brush: &u32, width: f32, style: Option<&u32>) {
        self.record(Call::DrawEllipse {
            ellipse: *ellipse,
            brush: *brush,
            width,
            style: style.copied(),
        });
    }

    fn fill_ellipse(&self, ellipse: &Ellipse, brush: &u32) {
        self.record(Call::FillEllipse(*ellipse, *brush));
    }

    fn draw_text(
        &self,
        text: &[u16],
        format: &u32,
        layout_rect: &RectF,
        brush: &u32,
        options: u32,
        measuring_mode: u32,
    ) {
        self.record(Call::DrawText {
            text: text.to_vec(),
            format: *format,
            rect: *layout_rect,
            brush: *brush,
            options,
            measuring_mode,
        });
    }

    fn draw_text_layout(&self, origin: Point2F, layout: &u32, brush: &u32, options: u32) {
        self.record(Call::DrawTextLayout {
            origin,
            layout: *layout,
            brush: *brush,
            options,
        });
    }

    fn push_axis_aligned_clip(&self, rect: &RectF, antialias_mode: u32) {
        self.record(Call::PushAxisAlignedClip(*rect, antialias_mode));
    }

    fn pop_axis_aligned_clip(&self) {
        self.record(Call::PopAxisAlignedClip);
    }

    fn set_text_rendering_params(&self, params: Option<&u32>) {
        self.record(Call::SetTextRenderingParams(params.copied()));
        self.state.borrow_mut().rendering_params = params.copied();
    }

    fn get_text_rendering_params(&self, params: &mut Option<u32>) {
        *params = self.state.borrow().rendering_params;
    }

    fn get_pixel_format(&self) -> RawPixelFormat {
        self.state.borrow().pixel_format
    }

    fn set_transform(&self, transform: &Matrix3x2) {
        self.record(Call::SetTransform(*transform));
        self.state.borrow_mut().transform = *transform;
    }

    fn get_transform(&self, transform: &mut Matrix3x2) {
        *transform = self.state.borrow().transform;
    }

    fn get_size(&self) -> SizeF {
        self.state.borrow().size
    }

    fn get_pixel_size(&self) -> SizeU {
        self.state.borrow().pixel_size
    }

    fn set_dpi(&self, dpi_x: f32, dpi_y: f32) {
        self.record(Call::SetDpi(dpi_x, dpi_y));
        self.state.borrow_mut().dpi = (dpi_x, dpi_y);
    }

    fn get_dpi(&self, dpi_x: &mut f32, dpi_y: &mut f32) {
        (*dpi_x, *dpi_y) = self.state.borrow().dpi;
    }

    fn set_antialias_mode(&self, mode: u32) {
        self.record(Call::SetAntialiasMode(mode));
        self.state.borrow_mut().antialias_mode = mode;
    }

    fn get_antialias_mode(&self) -> u32 {
        self.state.borrow().antialias_mode
    }

    fn set_text_antialias_mode(&self, mode: u32) {
        self.record(Call::SetTextAntialiasMode(mode));
        self.state.borrow_mut().text_antialias_mode = mode;
    }

    fn get_text_antialias_mode(&self) -> u32 {
        self.state.borrow().text_antialias_mode
    }
}
