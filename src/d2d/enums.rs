use bitflags::bitflags;
use bytemuck::{Pod, Zeroable};

native_enum! {
    /// `D2D1_ANTIALIAS_MODE`
    pub enum AntialiasMode: u32 {
        PerPrimitive = 0,
        Aliased = 1,
    }
}

native_enum! {
    /// `D2D1_TEXT_ANTIALIAS_MODE`
    pub enum TextAntialiasMode: u32 {
        Default = 0,
        ClearType = 1,
        Grayscale = 2,
        Aliased = 3,
    }
}

native_enum! {
    /// `D2D1_ALPHA_MODE`
    pub enum AlphaMode: u32 {
        Unknown = 0,
        Premultiplied = 1,
        Straight = 2,
        Ignore = 3,
    }
}

native_enum! {
    /// `DXGI_FORMAT`
    pub enum DxgiFormat: u32 {
        Unknown = 0,
        R32G32B32A32Typeless = 1,
        R32G32B32A32Float = 2,
        R32G32B32A32Uint = 3,
        R32G32B32A32Sint = 4,
        R32G32B32Typeless = 5,
        R32G32B32Float = 6,
        R32G32B32Uint = 7,
        R32G32B32Sint = 8,
        R16G16B16A16Typeless = 9,
        R16G16B16A16Float = 10,
        R16G16B16A16Unorm = 11,
        R16G16B16A16Uint = 12,
        R16G16B16A16Snorm = 13,
        R16G16B16A16Sint = 14,
        R32G32Typeless = 15,
        R32G32Float = 16,
        R32G32Uint = 17,
        R32G32Sint = 18,
        R32G8X24Typeless = 19,
        D32FloatS8X24Uint = 20,
        R32FloatX8X24Typeless = 21,
        X32TypelessG8X24Uint = 22,
        R10G10B10A2Typeless = 23,
        R10G10B10A2Unorm = 24,
        R10G10B10A2Uint = 25,
        R11G11B10Float = 26,
        R8G8B8A8Typeless = 27,
        R8G8B8A8Unorm = 28,
        R8G8B8A8UnormSrgb = 29,
        R8G8B8A8Uint = 30,
        R8G8B8A8Snorm = 31,
        R8G8B8A8Sint = 32,
        R16G16Typeless = 33,
        R16G16Float = 34,
        R16G16Unorm = 35,
        R16G16Uint = 36,
        R16G16Snorm = 37,
        R16G16Sint = 38,
        R32Typeless = 39,
        D32Float = 40,
        R32Float = 41,
        R32Uint = 42,
        R32Sint = 43,
        R24G8Typeless = 44,
        D24UnormS8Uint = 45,
        R24UnormX8Typeless = 46,
        X24TypelessG8Uint = 47,
        R8G8Typeless = 48,
        R8G8Unorm = 49,
        R8G8Uint = 50,
        R8G8Snorm = 51,
        R8G8Sint = 52,
        R16Typeless = 53,
        R16Float = 54,
        D16Unorm = 55,
        R16Unorm = 56,
        R16Uint = 57,
        R16Snorm = 58,
        R16Sint = 59,
        R8Typeless = 60,
        R8Unorm = 61,
        R8Uint = 62,
        R8Snorm = 63,
        R8Sint = 64,
        A8Unorm = 65,
        R1Unorm = 66,
        R9G9B9E5SharedExp = 67,
        R8G8B8G8Unorm = 68,
        G8R8G8B8Unorm = 69,
        Bc1Typeless = 70,
        Bc1Unorm = 71,
        Bc1UnormSrgb = 72,
        Bc2Typeless = 73,
        Bc2Unorm = 74,
        Bc2UnormSrgb = 75,
        Bc3Typeless = 76,
        Bc3Unorm = 77,
        Bc3UnormSrgb = 78,
        Bc4Typeless = 79,
        Bc4Unorm = 80,
        Bc4Snorm = 81,
        Bc5Typeless = 82,
        Bc5Unorm = 83,
        Bc5Snorm = 84,
        B5G6R5Unorm = 85,
        B5G5R5A1Unorm = 86,
        B8G8R8A8Unorm = 87,
        B8G8R8X8Unorm = 88,
        R10G10B10XrBiasA2Unorm = 89,
        B8G8R8A8Typeless = 90,
        B8G8R8A8UnormSrgb = 91,
        B8G8R8X8Typeless = 92,
        B8G8R8X8UnormSrgb = 93,
        Bc6hTypeless = 94,
        Bc6hUf16 = 95,
        Bc6hSf16 = 96,
        Bc7Typeless = 97,
        Bc7Unorm = 98,
        Bc7UnormSrgb = 99,
        Ayuv = 100,
        Y410 = 101,
        Y416 = 102,
        Nv12 = 103,
        P010 = 104,
        P016 = 105,
        Opaque420 = 106,
        Yuy2 = 107,
        Y210 = 108,
        Y216 = 109,
        Nv11 = 110,
        Ai44 = 111,
        Ia44 = 112,
        P8 = 113,
        A8P8 = 114,
        B4G4R4A4Unorm = 115,
    }
}

native_enum! {
    /// `DWRITE_MEASURING_MODE`
    pub enum MeasuringMode: u32 {
        Natural = 0,
        GdiClassic = 1,
        GdiNatural = 2,
    }
}

native_enum! {
    /// `D2D1_FACTORY_TYPE`
    pub enum FactoryType: u32 {
        SingleThreaded = 0,
        MultiThreaded = 1,
    }
}

native_enum! {
    /// `D2D1_DEBUG_LEVEL`
    pub enum DebugLevel: u32 {
        None = 0,
        Error = 1,
        Warning = 2,
        Information = 3,
    }
}

native_enum! {
    /// `D2D1_RENDER_TARGET_TYPE`
    pub enum RenderTargetType: u32 {
        Default = 0,
        Software = 1,
        Hardware = 2,
    }
}

bitflags! {
    /// `D2D1_DRAW_TEXT_OPTIONS`
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Pod, Zeroable)]
    #[repr(transparent)]
    pub struct DrawTextOptions: u32 {
        const NONE = 0x0;
        const NO_SNAP = 0x1;
        const CLIP = 0x2;
        const ENABLE_COLOR_FONT = 0x4;
    }
}

bitflags! {
    /// `D2D1_PRESENT_OPTIONS`
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Pod, Zeroable)]
    #[repr(transparent)]
    pub struct PresentOptions: u32 {
        const NONE = 0x0;
        const RETAIN_CONTENTS = 0x1;
        const IMMEDIATELY = 0x2;
    }
}
