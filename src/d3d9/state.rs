use super::enums::*;
use super::types::Argb;
use crate::*;

/// A value that can be stored in a render, sampler or texture stage state slot.
///
/// Native state slots are 32-bit words; every implementation encodes to
/// and decodes from that word.
pub trait StateValue: Sized {
    fn to_state(self) -> u32;
    fn from_state(raw: u32) -> Result<Self>;
}

impl StateValue for u32 {
    #[inline]
    fn to_state(self) -> u32 {
        self
    }

    #[inline]
    fn from_state(raw: u32) -> Result<Self> {
        Ok(raw)
    }
}

impl StateValue for i32 {
    #[inline]
    fn to_state(self) -> u32 {
        self as u32
    }

    #[inline]
    fn from_state(raw: u32) -> Result<Self> {
        Ok(raw as i32)
    }
}

impl StateValue for bool {
    #[inline]
    fn to_state(self) -> u32 {
        self as u32
    }

    #[inline]
    fn from_state(raw: u32) -> Result<Self> {
        Ok(raw != 0)
    }
}

/// Float states (fog density, point size, depth bias...) carry the IEEE bit pattern.
impl StateValue for f32 {
    #[inline]
    fn to_state(self) -> u32 {
        self.to_bits()
    }

    #[inline]
    fn from_state(raw: u32) -> Result<Self> {
        Ok(f32::from_bits(raw))
    }
}

impl StateValue for Argb {
    #[inline]
    fn to_state(self) -> u32 {
        self.0
    }

    #[inline]
    fn from_state(raw: u32) -> Result<Self> {
        Ok(Argb(raw))
    }
}

macro_rules! enum_state_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl StateValue for $ty {
                #[inline]
                fn to_state(self) -> u32 {
                    self.to_raw()
                }

                #[inline]
                fn from_state(raw: u32) -> Result<Self> {
                    raw.try_into()
                }
            }
        )*
    };
}

enum_state_value!(
    Cull,
    FillMode,
    ShadeMode,
    ZBufferType,
    Blend,
    BlendOperation,
    Compare,
    StencilOperation,
    FogMode,
    TextureFilter,
    TextureAddress,
    TextureOperation,
);

impl StateValue for VertexFormat {
    #[inline]
    fn to_state(self) -> u32 {
        self.bits()
    }

    #[inline]
    fn from_state(raw: u32) -> Result<Self> {
        Ok(Self::from_bits_retain(raw))
    }
}
