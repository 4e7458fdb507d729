//! Direct3D9 and Direct3D9Ex devices.

mod backend;
mod device;
mod device_ex;
mod enums;
#[cfg(test)]
pub(crate) mod mock;
#[cfg(windows)]
mod native;
mod state;
mod types;

pub use backend::*;
pub use device::*;
pub use device_ex::*;
pub use enums::*;
#[cfg(windows)]
pub use native::*;
pub use state::*;
pub use types::*;
