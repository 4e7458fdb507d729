//! Direct2D render targets, with DirectWrite text.

mod backend;
mod enums;
#[cfg(test)]
pub(crate) mod mock;
#[cfg(windows)]
mod native;
mod render_target;
mod stroke_style;
mod text;
mod types;

pub use backend::*;
pub use enums::*;
#[cfg(windows)]
pub use native::*;
pub use render_target::*;
pub use stroke_style::*;
pub use text::{
    font_point, FontPoint, FontStretch, FontStyle, FontWeight, ParagraphAlignment, TextAlignment,
    TextStyle,
};
pub use types::*;
