native_enum! {
    /// `DWRITE_FONT_WEIGHT`
    pub enum FontWeight: i32 {
        Thin = 100,
        ExtraLight = 200,
        Light = 300,
        SemiLight = 350,
        Regular = 400,
        Medium = 500,
        SemiBold = 600,
        Bold = 700,
        ExtraBold = 800,
        Heavy = 900,
        ExtraBlack = 950,
    }
}

native_enum! {
    /// `DWRITE_FONT_STYLE`
    pub enum FontStyle: i32 {
        Normal = 0,
        Oblique = 1,
        Italic = 2,
    }
}

native_enum! {
    /// `DWRITE_FONT_STRETCH`
    pub enum FontStretch: i32 {
        Undefined = 0,
        UltraCondensed = 1,
        ExtraCondensed = 2,
        Condensed = 3,
        SemiCondensed = 4,
        Normal = 5,
        SemiExpanded = 6,
        Expanded = 7,
        ExtraExpanded = 8,
        UltraExpanded = 9,
    }
}

native_enum! {
    /// `DWRITE_TEXT_ALIGNMENT`
    pub enum TextAlignment: i32 {
        Leading = 0,
        Trailing = 1,
        Center = 2,
        Justified = 3,
    }
}

native_enum! {
    /// `DWRITE_PARAGRAPH_ALIGNMENT`
    pub enum ParagraphAlignment: i32 {
        Near = 0,
        Far = 1,
        Center = 2,
    }
}

/// A font size in points, converted to DIPs (1/96 inch) on use.
#[derive(Clone, Copy, PartialEq, PartialOrd, Debug)]
pub struct FontPoint(pub f32);

impl FontPoint {
    #[inline]
    pub fn to_dips(self) -> f32 {
        self.0 * 96.0 / 72.0
    }
}

impl From<FontPoint> for f32 {
    #[inline]
    fn from(src: FontPoint) -> f32 {
        src.to_dips()
    }
}

#[inline]
pub fn font_point(value: f32) -> FontPoint {
    FontPoint(value)
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TextStyle {
    pub weight: FontWeight,
    pub style: FontStyle,
    pub stretch: FontStretch,
}

impl Default for TextStyle {
    #[inline]
    fn default() -> Self {
        Self {
            weight: FontWeight::Regular,
            style: FontStyle::Normal,
            stretch: FontStretch::Normal,
        }
    }
}

impl TextStyle {
    #[inline]
    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    #[inline]
    pub fn style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }

    #[inline]
    pub fn stretch(mut self, stretch: FontStretch) -> Self {
        self.stretch = stretch;
        self
    }
}

/// UTF-16 code units of `s` without a terminator.
#[inline]
pub(crate) fn to_utf16(s: &str) -> Vec<u16> {
    s.encode_utf16().collect()
}

/// UTF-16 code units of `s` followed by a null terminator.
#[cfg_attr(not(windows), allow(dead_code))]
#[inline]
pub(crate) fn to_wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(Some(0)).collect()
}
