use bitflags::bitflags;
use bytemuck::{Pod, Zeroable};

use crate::utility::fourcc;

native_enum! {
    /// `D3DFORMAT`
    pub enum Format: u32 {
        Unknown = 0,
        R8G8B8 = 20,
        A8R8G8B8 = 21,
        X8R8G8B8 = 22,
        R5G6B5 = 23,
        X1R5G5B5 = 24,
        A1R5G5B5 = 25,
        A4R4G4B4 = 26,
        R3G3B2 = 27,
        A8 = 28,
        A8R3G3B2 = 29,
        X4R4G4B4 = 30,
        A2B10G10R10 = 31,
        A8B8G8R8 = 32,
        X8B8G8R8 = 33,
        G16R16 = 34,
        A2R10G10B10 = 35,
        A16B16G16R16 = 36,
        A8P8 = 40,
        P8 = 41,
        L8 = 50,
        A8L8 = 51,
        A4L4 = 52,
        V8U8 = 60,
        L6V5U5 = 61,
        X8L8V8U8 = 62,
        Q8W8V8U8 = 63,
        V16U16 = 64,
        A2W10V10U10 = 67,
        Uyvy = fourcc(*b"UYVY"),
        R8G8B8G8 = fourcc(*b"RGBG"),
        Yuy2 = fourcc(*b"YUY2"),
        G8R8G8B8 = fourcc(*b"GRGB"),
        Dxt1 = fourcc(*b"DXT1"),
        Dxt2 = fourcc(*b"DXT2"),
        Dxt3 = fourcc(*b"DXT3"),
        Dxt4 = fourcc(*b"DXT4"),
        Dxt5 = fourcc(*b"DXT5"),
        D16Lockable = 70,
        D32 = 71,
        D15S1 = 73,
        D24S8 = 75,
        D24X8 = 77,
        D24X4S4 = 79,
        D16 = 80,
        D32FLockable = 82,
        D24FS8 = 83,
        D32Lockable = 84,
        S8Lockable = 85,
        L16 = 81,
        VertexData = 100,
        Index16 = 101,
        Index32 = 102,
        Q16W16V16U16 = 110,
        Multi2Argb8 = fourcc(*b"MET1"),
        R16F = 111,
        G16R16F = 112,
        A16B16G16R16F = 113,
        R32F = 114,
        G32R32F = 115,
        A32B32G32R32F = 116,
        CxV8U8 = 117,
        A1 = 118,
        A2B10G10R10XrBias = 119,
        BinaryBuffer = 199,
    }
}

native_enum! {
    /// `D3DMULTISAMPLE_TYPE`
    pub enum MultisampleType: u32 {
        None = 0,
        NonMaskable = 1,
        TwoSamples = 2,
        ThreeSamples = 3,
        FourSamples = 4,
        FiveSamples = 5,
        SixSamples = 6,
        SevenSamples = 7,
        EightSamples = 8,
        NineSamples = 9,
        TenSamples = 10,
        ElevenSamples = 11,
        TwelveSamples = 12,
        ThirteenSamples = 13,
        FourteenSamples = 14,
        FifteenSamples = 15,
        SixteenSamples = 16,
    }
}

native_enum! {
    /// `D3DSWAPEFFECT`
    pub enum SwapEffect: u32 {
        Discard = 1,
        Flip = 2,
        Copy = 3,
        Overlay = 4,
        FlipEx = 5,
    }
}

native_enum! {
    /// `D3DPRESENT_INTERVAL_*`
    pub enum PresentInterval: u32 {
        Default = 0,
        One = 1,
        Two = 2,
        Three = 4,
        Four = 8,
        Immediate = 0x8000_0000,
    }
}

native_enum! {
    /// `D3DDEVTYPE`
    pub enum DeviceType: u32 {
        Hardware = 1,
        Reference = 2,
        Software = 3,
        NullReference = 4,
    }
}

native_enum! {
    /// `D3DPRIMITIVETYPE`
    pub enum PrimitiveType: u32 {
        PointList = 1,
        LineList = 2,
        LineStrip = 3,
        TriangleList = 4,
        TriangleStrip = 5,
        TriangleFan = 6,
    }
}

impl PrimitiveType {
    /// Number of vertices a draw of `primitive_count` primitives reads.
    pub fn vertex_count(self, primitive_count: u32) -> u64 {
        let n = primitive_count as u64;
        if n == 0 {
            return 0;
        }
        match self {
            Self::PointList => n,
            Self::LineList => n * 2,
            Self::LineStrip => n + 1,
            Self::TriangleList => n * 3,
            Self::TriangleStrip | Self::TriangleFan => n + 2,
        }
    }
}

native_enum! {
    /// `D3DQUERYTYPE`
    pub enum QueryType: u32 {
        VCache = 4,
        ResourceManager = 5,
        VertexStats = 6,
        Event = 8,
        Occlusion = 9,
        Timestamp = 10,
        TimestampDisjoint = 11,
        TimestampFrequency = 12,
        PipelineTimings = 13,
        InterfaceTimings = 14,
        VertexTimings = 15,
        PixelTimings = 16,
        BandwidthTimings = 17,
        CacheUtilization = 18,
        MemoryPressure = 19,
    }
}

native_enum! {
    /// `D3DDISPLAYROTATION`
    pub enum DisplayRotation: u32 {
        Identity = 1,
        Rotate90 = 2,
        Rotate180 = 3,
        Rotate270 = 4,
    }
}

native_enum! {
    /// `D3DSCANLINEORDERING`
    pub enum ScanlineOrdering: u32 {
        Unknown = 0,
        Progressive = 1,
        Interlaced = 2,
    }
}

native_enum! {
    /// `D3DTRANSFORMSTATETYPE`
    pub enum TransformState: u32 {
        View = 2,
        Projection = 3,
        Texture0 = 16,
        Texture1 = 17,
        Texture2 = 18,
        Texture3 = 19,
        Texture4 = 20,
        Texture5 = 21,
        Texture6 = 22,
        Texture7 = 23,
        World = 256,
        World1 = 257,
        World2 = 258,
        World3 = 259,
    }
}

native_enum! {
    /// `D3DTEXTURESTAGESTATETYPE`
    pub enum TextureStage: u32 {
        ColorOperation = 1,
        ColorArg1 = 2,
        ColorArg2 = 3,
        AlphaOperation = 4,
        AlphaArg1 = 5,
        AlphaArg2 = 6,
        BumpEnvironmentMat00 = 7,
        BumpEnvironmentMat01 = 8,
        BumpEnvironmentMat10 = 9,
        BumpEnvironmentMat11 = 10,
        TexCoordIndex = 11,
        BumpEnvironmentLScale = 22,
        BumpEnvironmentLOffset = 23,
        TextureTransformFlags = 24,
        ColorArg0 = 26,
        AlphaArg0 = 27,
        ResultArg = 28,
        Constant = 32,
    }
}

native_enum! {
    /// `D3DSAMPLERSTATETYPE`
    pub enum SamplerState: u32 {
        AddressU = 1,
        AddressV = 2,
        AddressW = 3,
        BorderColor = 4,
        MagFilter = 5,
        MinFilter = 6,
        MipFilter = 7,
        MipMapLodBias = 8,
        MaxMipLevel = 9,
        MaxAnisotropy = 10,
        SrgbTexture = 11,
        ElementIndex = 12,
        DisplacementMapOffset = 13,
    }
}

native_enum! {
    /// `D3DRENDERSTATETYPE`
    pub enum RenderState: u32 {
        ZEnable = 7,
        FillMode = 8,
        ShadeMode = 9,
        ZWriteEnable = 14,
        AlphaTestEnable = 15,
        LastPixel = 16,
        SourceBlend = 19,
        DestinationBlend = 20,
        CullMode = 22,
        ZFunc = 23,
        AlphaRef = 24,
        AlphaFunc = 25,
        DitherEnable = 26,
        AlphaBlendEnable = 27,
        FogEnable = 28,
        SpecularEnable = 29,
        FogColor = 34,
        FogTableMode = 35,
        FogStart = 36,
        FogEnd = 37,
        FogDensity = 38,
        RangeFogEnable = 48,
        StencilEnable = 52,
        StencilFail = 53,
        StencilZFail = 54,
        StencilPass = 55,
        StencilFunc = 56,
        StencilRef = 57,
        StencilMask = 58,
        StencilWriteMask = 59,
        TextureFactor = 60,
        Wrap0 = 128,
        Wrap1 = 129,
        Wrap2 = 130,
        Wrap3 = 131,
        Wrap4 = 132,
        Wrap5 = 133,
        Wrap6 = 134,
        Wrap7 = 135,
        Clipping = 136,
        Lighting = 137,
        Ambient = 139,
        FogVertexMode = 140,
        ColorVertex = 141,
        LocalViewer = 142,
        NormalizeNormals = 143,
        DiffuseMaterialSource = 145,
        SpecularMaterialSource = 146,
        AmbientMaterialSource = 147,
        EmissiveMaterialSource = 148,
        VertexBlend = 151,
        ClipPlaneEnable = 152,
        PointSize = 154,
        PointSizeMin = 155,
        PointSpriteEnable = 156,
        PointScaleEnable = 157,
        PointScaleA = 158,
        PointScaleB = 159,
        PointScaleC = 160,
        MultisampleAntialias = 161,
        MultisampleMask = 162,
        PatchEdgeStyle = 163,
        DebugMonitorToken = 165,
        PointSizeMax = 166,
        IndexedVertexBlendEnable = 167,
        ColorWriteEnable = 168,
        TweenFactor = 170,
        BlendOperation = 171,
        PositionDegree = 172,
        NormalDegree = 173,
        ScissorTestEnable = 174,
        SlopeScaleDepthBias = 175,
        AntialiasedLineEnable = 176,
        MinTessellationLevel = 178,
        MaxTessellationLevel = 179,
        AdaptiveTessX = 180,
        AdaptiveTessY = 181,
        AdaptiveTessZ = 182,
        AdaptiveTessW = 183,
        EnableAdaptiveTessellation = 184,
        TwoSidedStencilMode = 185,
        CcwStencilFail = 186,
        CcwStencilZFail = 187,
        CcwStencilPass = 188,
        CcwStencilFunc = 189,
        ColorWriteEnable1 = 190,
        ColorWriteEnable2 = 191,
        ColorWriteEnable3 = 192,
        BlendFactor = 193,
        SrgbWriteEnable = 194,
        DepthBias = 195,
        Wrap8 = 198,
        Wrap9 = 199,
        Wrap10 = 200,
        Wrap11 = 201,
        Wrap12 = 202,
        Wrap13 = 203,
        Wrap14 = 204,
        Wrap15 = 205,
        SeparateAlphaBlendEnable = 206,
        SourceBlendAlpha = 207,
        DestinationBlendAlpha = 208,
        BlendOperationAlpha = 209,
    }
}

native_enum! {
    /// `D3DCULL`
    pub enum Cull: u32 {
        None = 1,
        Clockwise = 2,
        Counterclockwise = 3,
    }
}

native_enum! {
    /// `D3DFILLMODE`
    pub enum FillMode: u32 {
        Point = 1,
        Wireframe = 2,
        Solid = 3,
    }
}

native_enum! {
    /// `D3DSHADEMODE`
    pub enum ShadeMode: u32 {
        Flat = 1,
        Gouraud = 2,
        Phong = 3,
    }
}

native_enum! {
    /// `D3DZBUFFERTYPE`
    pub enum ZBufferType: u32 {
        DontUseZBuffer = 0,
        UseZBuffer = 1,
        UseWBuffer = 2,
    }
}

native_enum! {
    /// `D3DBLEND`
    pub enum Blend: u32 {
        Zero = 1,
        One = 2,
        SourceColor = 3,
        InverseSourceColor = 4,
        SourceAlpha = 5,
        InverseSourceAlpha = 6,
        DestinationAlpha = 7,
        InverseDestinationAlpha = 8,
        DestinationColor = 9,
        InverseDestinationColor = 10,
        SourceAlphaSaturated = 11,
        BothSourceAlpha = 12,
        BothInverseSourceAlpha = 13,
        BlendFactor = 14,
        InverseBlendFactor = 15,
    }
}

native_enum! {
    /// `D3DBLENDOP`
    pub enum BlendOperation: u32 {
        Add = 1,
        Subtract = 2,
        ReverseSubtract = 3,
        Minimum = 4,
        Maximum = 5,
    }
}

native_enum! {
    /// `D3DCMPFUNC`
    pub enum Compare: u32 {
        Never = 1,
        Less = 2,
        Equal = 3,
        LessEqual = 4,
        Greater = 5,
        NotEqual = 6,
        GreaterEqual = 7,
        Always = 8,
    }
}

native_enum! {
    /// `D3DSTENCILOP`
    pub enum StencilOperation: u32 {
        Keep = 1,
        Zero = 2,
        Replace = 3,
        IncrementSaturate = 4,
        DecrementSaturate = 5,
        Invert = 6,
        Increment = 7,
        Decrement = 8,
    }
}

native_enum! {
    /// `D3DFOGMODE`
    pub enum FogMode: u32 {
        None = 0,
        Exponential = 1,
        ExponentialSquared = 2,
        Linear = 3,
    }
}

native_enum! {
    /// `D3DTEXTUREFILTERTYPE`
    pub enum TextureFilter: u32 {
        None = 0,
        Point = 1,
        Linear = 2,
        Anisotropic = 3,
        PyramidalQuad = 6,
        GaussianQuad = 7,
        ConvolutionMono = 8,
    }
}

native_enum! {
    /// `D3DTEXTUREADDRESS`
    pub enum TextureAddress: u32 {
        Wrap = 1,
        Mirror = 2,
        Clamp = 3,
        Border = 4,
        MirrorOnce = 5,
    }
}

native_enum! {
    /// `D3DTEXTUREOP`
    pub enum TextureOperation: u32 {
        Disable = 1,
        SelectArg1 = 2,
        SelectArg2 = 3,
        Modulate = 4,
        Modulate2X = 5,
        Modulate4X = 6,
        Add = 7,
        AddSigned = 8,
        AddSigned2X = 9,
        Subtract = 10,
        AddSmooth = 11,
        BlendDiffuseAlpha = 12,
        BlendTextureAlpha = 13,
        BlendFactorAlpha = 14,
        BlendTextureAlphaPM = 15,
        BlendCurrentAlpha = 16,
        Premodulate = 17,
        ModulateAlphaAddColor = 18,
        ModulateColorAddAlpha = 19,
        ModulateInvAlphaAddColor = 20,
        ModulateInvColorAddAlpha = 21,
        BumpEnvironmentMap = 22,
        BumpEnvironmentMapLuminance = 23,
        DotProduct3 = 24,
        MultiplyAdd = 25,
        Lerp = 26,
    }
}

native_enum! {
    /// Status reported by `TestCooperativeLevel`.
    pub enum CooperativeLevel: i32 {
        Ok = 0,
        DeviceLost = crate::ErrorKind::DeviceLost as i32,
        DeviceNotReset = crate::ErrorKind::DeviceNotReset as i32,
        DriverInternalError = crate::ErrorKind::DriverInternalError as i32,
    }
}

native_enum! {
    /// Status reported by `IDirect3DDevice9Ex::CheckDeviceState`.
    pub enum DeviceState: i32 {
        Ok = 0,
        DeviceLost = crate::ErrorKind::DeviceLost as i32,
        DeviceHung = crate::ErrorKind::DeviceHung as i32,
        DeviceRemoved = crate::ErrorKind::DeviceRemoved as i32,
        OutOfVideoMemory = crate::ErrorKind::OutOfVideoMemory as i32,
        PresentModeChanged = crate::ErrorKind::PresentModeChanged as i32,
        PresentOccluded = crate::ErrorKind::PresentOccluded as i32,
    }
}

native_enum! {
    /// Status reported by `IDirect3DDevice9Ex::CheckResourceResidency`.
    pub enum ResourceResidency: i32 {
        Resident = 0,
        ResidentInSharedMemory = crate::ErrorKind::ResidentInSharedMemory as i32,
        NotResident = crate::ErrorKind::NotResident as i32,
    }
}

bitflags! {
    /// `D3DCREATE_*`
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Pod, Zeroable)]
    #[repr(transparent)]
    pub struct CreateFlags: u32 {
        const FPU_PRESERVE = 0x2;
        const MULTITHREADED = 0x4;
        const PURE_DEVICE = 0x10;
        const SOFTWARE_VERTEX_PROCESSING = 0x20;
        const HARDWARE_VERTEX_PROCESSING = 0x40;
        const MIXED_VERTEX_PROCESSING = 0x80;
        const DISABLE_DRIVER_MANAGEMENT = 0x100;
        const ADAPTER_GROUP_DEVICE = 0x200;
        const DISABLE_DRIVER_MANAGEMENT_EX = 0x400;
        const NO_WINDOW_CHANGES = 0x800;
        const DISABLE_PSGP_THREADING = 0x2000;
        const ENABLE_PRESENT_STATS = 0x4000;
        const DISABLE_PRINT_SCREEN = 0x8000;
        const SCREEN_SAVER = 0x1000_0000;
    }
}

bitflags! {
    /// `D3DCLEAR_*`
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Pod, Zeroable)]
    #[repr(transparent)]
    pub struct ClearFlags: u32 {
        const TARGET = 0x1;
        const ZBUFFER = 0x2;
        const STENCIL = 0x4;
    }
}

bitflags! {
    /// `D3DPRESENTFLAG_*`
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Pod, Zeroable)]
    #[repr(transparent)]
    pub struct PresentFlags: u32 {
        const LOCKABLE_BACK_BUFFER = 0x1;
        const DISCARD_DEPTH_STENCIL = 0x2;
        const DEVICE_CLIP = 0x4;
        const VIDEO = 0x10;
        const NO_AUTO_ROTATE = 0x20;
        const UNPRUNED_MODE = 0x40;
        const OVERLAY_LIMITED_RGB = 0x80;
        const OVERLAY_YCBCR_BT709 = 0x100;
        const OVERLAY_YCBCR_XVYCC = 0x200;
        const RESTRICTED_CONTENT = 0x400;
        const RESTRICT_SHARED_RESOURCE_DRIVER = 0x800;
    }
}

bitflags! {
    /// `D3DPRESENT_*` flags accepted by `Present` on a swap chain and `PresentEx`.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Pod, Zeroable)]
    #[repr(transparent)]
    pub struct Present: u32 {
        const NONE = 0x0;
        const DO_NOT_WAIT = 0x1;
        const LINEAR_CONTENT = 0x2;
        const DO_NOT_FLIP = 0x4;
        const FLIP_RESTART = 0x8;
        const VIDEO_RESTRICT_TO_MONITOR = 0x10;
        const UPDATE_OVERLAY_ONLY = 0x20;
        const HIDE_OVERLAY = 0x40;
        const UPDATE_COLOR_KEY = 0x80;
        const FORCE_IMMEDIATE = 0x100;
    }
}

bitflags! {
    /// `D3DFVF_*`
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Pod, Zeroable)]
    #[repr(transparent)]
    pub struct VertexFormat: u32 {
        const NONE = 0x0;
        const POSITION = 0x002;
        const POSITION_RHW = 0x004;
        const POSITION_BLEND1 = 0x006;
        const POSITION_BLEND2 = 0x008;
        const POSITION_BLEND3 = 0x00A;
        const POSITION_BLEND4 = 0x00C;
        const POSITION_BLEND5 = 0x00E;
        const POSITION_W = 0x4002;
        const NORMAL = 0x010;
        const POINT_SIZE = 0x020;
        const DIFFUSE = 0x040;
        const SPECULAR = 0x080;
        const TEXTURE1 = 0x100;
        const TEXTURE2 = 0x200;
        const TEXTURE3 = 0x300;
        const TEXTURE4 = 0x400;
        const TEXTURE5 = 0x500;
        const TEXTURE6 = 0x600;
        const TEXTURE7 = 0x700;
        const TEXTURE8 = 0x800;
        const LAST_BETA_UBYTE4 = 0x1000;
        const LAST_BETA_D3DCOLOR = 0x8000;
        const POSITION_MASK = 0x400E;
        const TEXTURE_COUNT_MASK = 0xF00;
    }
}

impl VertexFormat {
    /// Number of texture coordinate sets encoded in the format.
    #[inline]
    pub const fn texture_count(self) -> u32 {
        (self.bits() & Self::TEXTURE_COUNT_MASK.bits()) >> 8
    }
}
