//! Typed wrappers over Direct3D9, Direct3D9Ex and Direct2D.
//!
//! Every wrapper method forwards to exactly one native entry point. The
//! native side is reached through backend traits ([`d3d9::Backend`],
//! [`d3d9::BackendEx`], [`d2d::Backend`]); on Windows these are implemented
//! for the COM interfaces themselves.

#[macro_use]
mod utility;

pub mod d2d;
pub mod d3d9;
pub mod error;

pub use error::{Error, ErrorKind, ResultCode};
pub use gecl;
pub use utility::{AsWindowHandle, Hwnd};

pub type Result<T> = core::result::Result<T, Error>;
