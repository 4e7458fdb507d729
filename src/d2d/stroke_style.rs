use bytemuck::{Pod, Zeroable};

native_enum! {
    /// `D2D1_CAP_STYLE`
    pub enum CapStyle: u32 {
        Flat = 0,
        Square = 1,
        Round = 2,
        Triangle = 3,
    }
}

/// `D2D1_LINE_JOIN`, carrying the miter limit where one applies.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum LineJoin {
    Miter,
    Bevel,
    Round,
    MiterOrBevel(f32),
}

impl LineJoin {
    /// Miter limit used by joins that don't carry one.
    pub const DEFAULT_MITER_LIMIT: f32 = 10.0;

    #[inline]
    fn to_raw(self) -> (u32, f32) {
        match self {
            Self::Miter => (0, Self::DEFAULT_MITER_LIMIT),
            Self::Bevel => (1, Self::DEFAULT_MITER_LIMIT),
            Self::Round => (2, Self::DEFAULT_MITER_LIMIT),
            Self::MiterOrBevel(limit) => (3, limit),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum DashStyle<'a> {
    Solid,
    Dash,
    Dot,
    DashDot,
    DashDotDot,
    /// Dash and gap lengths in multiples of the stroke width.
    Custom(&'a [f32]),
}

#[derive(Clone, PartialEq, Debug)]
pub struct Dash<'a> {
    pub cap: CapStyle,
    pub style: DashStyle<'a>,
    pub offset: f32,
}

impl<'a> Default for Dash<'a> {
    #[inline]
    fn default() -> Self {
        Self {
            cap: CapStyle::Flat,
            style: DashStyle::Solid,
            offset: 0.0,
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct StrokeStyleProperties<'a> {
    pub start_cap: CapStyle,
    pub end_cap: CapStyle,
    pub line_join: LineJoin,
    pub dash: Option<Dash<'a>>,
}

impl<'a> Default for StrokeStyleProperties<'a> {
    #[inline]
    fn default() -> Self {
        Self {
            start_cap: CapStyle::Flat,
            end_cap: CapStyle::Flat,
            line_join: LineJoin::Miter,
            dash: None,
        }
    }
}

/// `D2D1_STROKE_STYLE_PROPERTIES`
#[derive(Clone, Copy, PartialEq, Default, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct RawStrokeStyleProperties {
    pub start_cap: u32,
    pub end_cap: u32,
    pub dash_cap: u32,
    pub line_join: u32,
    pub miter_limit: f32,
    pub dash_style: u32,
    pub dash_offset: f32,
}

impl<'a> StrokeStyleProperties<'a> {
    /// The native properties plus the custom dash array, if any.
    pub fn to_raw(&self) -> (RawStrokeStyleProperties, Option<&'a [f32]>) {
        let (line_join, miter_limit) = self.line_join.to_raw();
        let (dash_cap, dash_style, dash_offset, dashes) = match self.dash.as_ref() {
            Some(dash) => {
                let (style, dashes) = match dash.style {
                    DashStyle::Solid => (0, None),
                    DashStyle::Dash => (1, None),
                    DashStyle::Dot => (2, None),
                    DashStyle::DashDot => (3, None),
                    DashStyle::DashDotDot => (4, None),
                    DashStyle::Custom(dashes) => (5, Some(dashes)),
                };
                (dash.cap.to_raw(), style, dash.offset, dashes)
            }
            None => (CapStyle::Flat.to_raw(), 0, 0.0, None),
        };
        let raw = RawStrokeStyleProperties {
            start_cap: self.start_cap.to_raw(),
            end_cap: self.end_cap.to_raw(),
            dash_cap,
            line_join,
            miter_limit,
            dash_style,
            dash_offset,
        };
        (raw, dashes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_solid_miter() {
        let (raw, dashes) = StrokeStyleProperties::default().to_raw();
        assert_eq!(raw.line_join, 0);
        assert_eq!(raw.miter_limit, 10.0);
        assert_eq!(raw.dash_style, 0);
        assert!(dashes.is_none());
        assert_eq!(std::mem::size_of::<RawStrokeStyleProperties>(), 28);
    }

    #[test]
    fn custom_dashes() {
        let pattern = [4.0f32, 2.0, 1.0, 2.0];
        let props = StrokeStyleProperties {
            start_cap: CapStyle::Round,
            end_cap: CapStyle::Triangle,
            line_join: LineJoin::MiterOrBevel(2.5),
            dash: Some(Dash {
                cap: CapStyle::Square,
                style: DashStyle::Custom(&pattern),
                offset: 1.5,
            }),
        };
        let (raw, dashes) = props.to_raw();
        assert_eq!(
            raw,
            RawStrokeStyleProperties {
                start_cap: 2,
                end_cap: 3,
                dash_cap: 1,
                line_join: 3,
                miter_limit: 2.5,
                dash_style: 5,
                dash_offset: 1.5,
            }
        );
        assert_eq!(dashes, Some(&pattern[..]));
    }

    #[cfg(windows)]
    #[test]
    fn matches_windows_constants() {
        use windows::Win32::Graphics::Direct2D::*;
        assert_eq!(CapStyle::Triangle.to_raw() as i64, D2D1_CAP_STYLE_TRIANGLE.0 as i64);
        let (raw, _) = StrokeStyleProperties {
            line_join: LineJoin::MiterOrBevel(1.0),
            dash: Some(Dash {
                style: DashStyle::DashDotDot,
                ..Default::default()
            }),
            ..Default::default()
        }
        .to_raw();
        assert_eq!(raw.line_join as i64, D2D1_LINE_JOIN_MITER_OR_BEVEL.0 as i64);
        assert_eq!(raw.dash_style as i64, D2D1_DASH_STYLE_DASH_DOT_DOT.0 as i64);
    }
}
