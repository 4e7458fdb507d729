const fn hresult(code: u32) -> i32 {
    code as i32
}

const fn d3d_error(code: u32) -> i32 {
    (0x8876_0000 | code) as i32
}

const fn d3d_status(code: u32) -> i32 {
    (0x0876_0000 | code) as i32
}

const fn d2d_error(code: u32) -> i32 {
    (0x8899_0000 | code) as i32
}

native_enum! {
    /// Well-known native result codes, with discriminants equal to the native values.
    pub enum ErrorKind: i32 {
        Ok = 0,
        False = 1,
        Fail = hresult(0x8000_4005),
        Abort = hresult(0x8000_4004),
        AccessDenied = hresult(0x8007_0005),
        InvalidArg = hresult(0x8007_0057),
        NoInterface = hresult(0x8000_4002),
        NotImpl = hresult(0x8000_4001),
        OutOfMemory = hresult(0x8007_000E),
        Pointer = hresult(0x8000_4003),
        Unexpected = hresult(0x8000_FFFF),
        WrongTextureFormat = d3d_error(2072),
        UnsupportedColorOperation = d3d_error(2073),
        UnsupportedColorArg = d3d_error(2074),
        UnsupportedAlphaOperation = d3d_error(2075),
        UnsupportedAlphaArg = d3d_error(2076),
        TooManyOperations = d3d_error(2077),
        ConflictingTextureFilter = d3d_error(2078),
        UnsupportedFactorValue = d3d_error(2079),
        ConflictingRenderState = d3d_error(2081),
        UnsupportedTextureFilter = d3d_error(2082),
        ConflictingTexturePalette = d3d_error(2086),
        DriverInternalError = d3d_error(2087),
        NotFound = d3d_error(2150),
        MoreData = d3d_error(2151),
        DeviceLost = d3d_error(2152),
        DeviceNotReset = d3d_error(2153),
        NotAvailable = d3d_error(2154),
        OutOfVideoMemory = d3d_error(380),
        InvalidDevice = d3d_error(2155),
        InvalidCall = d3d_error(2156),
        DriverInvalidCall = d3d_error(2157),
        WasStillDrawing = d3d_error(540),
        DeviceRemoved = d3d_error(2160),
        DeviceHung = d3d_error(2164),
        UnsupportedOverlay = d3d_error(2171),
        UnsupportedOverlayFormat = d3d_error(2172),
        CannotProtectContent = d3d_error(2173),
        UnsupportedCrypto = d3d_error(2174),
        PresentStatisticsDisjoint = d3d_error(2180),
        NoAutoGen = d3d_status(2159),
        NotResident = d3d_status(2165),
        ResidentInSharedMemory = d3d_status(2166),
        PresentModeChanged = d3d_status(2167),
        PresentOccluded = d3d_status(2168),
        WrongState = d2d_error(0x01),
        NotInitialized = d2d_error(0x02),
        UnsupportedOperation = d2d_error(0x03),
        ScannerFailed = d2d_error(0x04),
        ScreenAccessDenied = d2d_error(0x05),
        DisplayStateInvalid = d2d_error(0x06),
        ZeroVector = d2d_error(0x07),
        InternalError = d2d_error(0x08),
        DisplayFormatNotSupported = d2d_error(0x09),
        Direct2DInvalidCall = d2d_error(0x0A),
        NoHardwareDevice = d2d_error(0x0B),
        RecreateTarget = d2d_error(0x0C),
        TooManyShaderElements = d2d_error(0x0D),
        ShaderCompileFailed = d2d_error(0x0E),
        MaxTextureSizeExceeded = d2d_error(0x0F),
        UnsupportedVersion = d2d_error(0x10),
        BadNumber = d2d_error(0x11),
        WrongFactory = d2d_error(0x12),
        LayerAlreadyInUse = d2d_error(0x13),
        PopCallDidNotMatchPush = d2d_error(0x14),
        WrongResourceDomain = d2d_error(0x15),
        PushPopUnbalanced = d2d_error(0x16),
        RenderTargetHasLayerOrClipRect = d2d_error(0x17),
        IncompatibleBrushTypes = d2d_error(0x18),
        Win32Error = d2d_error(0x19),
        TargetNotGdiCompatible = d2d_error(0x1A),
        TextEffectIsWrongType = d2d_error(0x1B),
        TextRendererNotReleased = d2d_error(0x1C),
        ExceedsMaxBitmapSize = d2d_error(0x1D),
        UnsupportedPixelFormat = hresult(0x8898_2F80),
        InsufficientBuffer = hresult(0x8007_007A),
        FileNotFound = hresult(0x8007_0002),
    }
}

/// A raw `HRESULT` as returned by a native entry point.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(transparent)]
pub struct ResultCode(pub i32);

impl ResultCode {
    pub const OK: Self = Self(0);

    #[inline]
    pub const fn is_success(self) -> bool {
        self.0 >= 0
    }

    #[inline]
    pub const fn is_failure(self) -> bool {
        self.0 < 0
    }

    #[inline]
    pub fn kind(self) -> Option<ErrorKind> {
        ErrorKind::try_from(self.0).ok()
    }

    /// Maps failure codes to `Err`, discarding success codes.
    #[inline]
    pub fn ok(self) -> crate::Result<()> {
        self.check().map(|_| ())
    }

    /// Maps failure codes to `Err` and hands success codes back to the caller.
    #[inline]
    pub fn check(self) -> crate::Result<Self> {
        if self.is_failure() {
            Err(Error::Native(self))
        } else {
            Ok(self)
        }
    }
}

impl From<ErrorKind> for ResultCode {
    #[inline]
    fn from(src: ErrorKind) -> Self {
        Self(src as i32)
    }
}

impl PartialEq<ErrorKind> for ResultCode {
    #[inline]
    fn eq(&self, rhs: &ErrorKind) -> bool {
        self.0 == *rhs as i32
    }
}

impl std::fmt::Debug for ResultCode {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.kind() {
            Some(kind) => write!(fmt, "ResultCode({:?}, {:#010X})", kind, self.0 as u32),
            None => write!(fmt, "ResultCode({:#010X})", self.0 as u32),
        }
    }
}

impl std::fmt::Display for ResultCode {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.kind() {
            Some(kind) => write!(fmt, "{:?} ({:#010X})", kind, self.0 as u32),
            None => write!(fmt, "{:#010X}", self.0 as u32),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, thiserror::Error)]
pub enum Error {
    #[error("native call failed: {0}")]
    Native(ResultCode),
    #[error("native code returned an unknown {type_name} value {value:#x}")]
    UnknownValue { type_name: &'static str, value: i64 },
}

impl Error {
    /// The native code behind this error. `UnknownValue` reports `E_UNEXPECTED`.
    #[inline]
    pub fn code(&self) -> ResultCode {
        match self {
            Self::Native(code) => *code,
            Self::UnknownValue { .. } => ErrorKind::Unexpected.into(),
        }
    }

    #[inline]
    pub fn kind(&self) -> Option<ErrorKind> {
        self.code().kind()
    }
}

impl From<ResultCode> for Error {
    #[inline]
    fn from(src: ResultCode) -> Self {
        Self::Native(src)
    }
}

impl From<ErrorKind> for Error {
    #[inline]
    fn from(src: ErrorKind) -> Self {
        Self::Native(src.into())
    }
}

#[cfg(windows)]
impl From<windows::core::Error> for Error {
    #[inline]
    fn from(src: windows::core::Error) -> Self {
        Self::Native(ResultCode(src.code().0))
    }
}

impl PartialEq<ErrorKind> for Error {
    fn eq(&self, rhs: &ErrorKind) -> bool {
        matches!(self, Self::Native(code) if code == rhs)
    }
}

impl PartialEq<Error> for ErrorKind {
    fn eq(&self, rhs: &Error) -> bool {
        rhs == self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn eq_test() {
        assert!(Error::from(ErrorKind::DeviceLost) == ErrorKind::DeviceLost);
        assert!(ErrorKind::DeviceLost == Error::from(ErrorKind::DeviceLost));
        assert!(Error::from(ErrorKind::DeviceLost) != ErrorKind::Fail);
    }

    #[test]
    fn native_values() {
        assert_eq!(ErrorKind::DeviceLost as i32 as u32, 0x8876_0868);
        assert_eq!(ErrorKind::DeviceNotReset as i32 as u32, 0x8876_0869);
        assert_eq!(ErrorKind::InvalidCall as i32 as u32, 0x8876_086C);
        assert_eq!(ErrorKind::OutOfVideoMemory as i32 as u32, 0x8876_017C);
        assert_eq!(ErrorKind::PresentOccluded as i32 as u32, 0x0876_0878);
        assert_eq!(ErrorKind::RecreateTarget as i32 as u32, 0x8899_000C);
        assert_eq!(ErrorKind::InvalidArg as i32 as u32, 0x8007_0057);
    }

    #[test]
    fn direct2d_codes_shared_with_other_facilities() {
        let code = ResultCode(0x8898_2F80u32 as i32);
        assert_eq!(code.kind(), Some(ErrorKind::UnsupportedPixelFormat));
        assert_eq!(
            ResultCode(0x8007_007Au32 as i32).kind(),
            Some(ErrorKind::InsufficientBuffer)
        );
        assert_eq!(
            ResultCode(0x8007_0002u32 as i32).kind(),
            Some(ErrorKind::FileNotFound)
        );
        assert!(Error::from(code) == ErrorKind::UnsupportedPixelFormat);
    }

    #[test]
    fn kinds_are_bijective() {
        let values = ErrorKind::ALL
            .iter()
            .map(|kind| kind.to_raw())
            .collect::<HashSet<_>>();
        assert_eq!(values.len(), ErrorKind::ALL.len());
        for kind in ErrorKind::ALL {
            assert_eq!(ErrorKind::try_from(kind.to_raw()).unwrap(), *kind);
            assert_eq!(ResultCode::from(*kind).kind(), Some(*kind));
        }
    }

    #[test]
    fn success_codes_pass_through_check() {
        let occluded = ResultCode::from(ErrorKind::PresentOccluded);
        assert!(occluded.is_success());
        assert_eq!(occluded.check().unwrap(), occluded);
        assert!(occluded.ok().is_ok());
    }

    #[test]
    fn failure_codes_are_surfaced_unchanged() {
        let code = ResultCode(0x8123_4567u32 as i32);
        assert!(code.is_failure());
        assert_eq!(code.kind(), None);
        let err = code.ok().unwrap_err();
        assert_eq!(err, Error::Native(code));
        assert_eq!(err.code(), code);
    }

    #[test]
    fn unknown_value_reports_unexpected() {
        let err = Error::UnknownValue {
            type_name: "Format",
            value: 0x1234,
        };
        assert_eq!(err.kind(), Some(ErrorKind::Unexpected));
        assert!(err != ErrorKind::Unexpected);
        assert_eq!(
            err.to_string(),
            "native code returned an unknown Format value 0x1234"
        );
    }

    #[test]
    fn display_names_known_codes() {
        let code = ResultCode::from(ErrorKind::DeviceLost);
        assert_eq!(code.to_string(), "DeviceLost (0x88760868)");
        assert_eq!(ResultCode(0x7f).to_string(), "0x0000007F");
    }

    #[cfg(windows)]
    #[test]
    fn matches_windows_constants() {
        use windows::Win32::Foundation::*;
        use windows::Win32::Graphics::Direct3D9::*;
        assert_eq!(ErrorKind::Fail as i32, E_FAIL.0);
        assert_eq!(ErrorKind::InvalidArg as i32, E_INVALIDARG.0);
        assert_eq!(ErrorKind::DeviceLost as i32, D3DERR_DEVICELOST.0);
        assert_eq!(ErrorKind::DeviceNotReset as i32, D3DERR_DEVICENOTRESET.0);
        assert_eq!(ErrorKind::DeviceRemoved as i32, D3DERR_DEVICEREMOVED.0);
        assert_eq!(ErrorKind::InvalidCall as i32, D3DERR_INVALIDCALL.0);
        assert_eq!(ErrorKind::PresentOccluded as i32, S_PRESENT_OCCLUDED.0);
        assert_eq!(ErrorKind::NotResident as i32, S_NOT_RESIDENT.0);
        assert_eq!(ErrorKind::WrongState as i32, D2DERR_WRONG_STATE.0);
        assert_eq!(ErrorKind::RecreateTarget as i32, D2DERR_RECREATE_TARGET.0);
        assert_eq!(ErrorKind::Direct2DInvalidCall as i32, D2DERR_INVALID_CALL.0);
        assert_eq!(ErrorKind::ExceedsMaxBitmapSize as i32, D2DERR_EXCEEDS_MAX_BITMAP_SIZE.0);
        assert_eq!(
            ErrorKind::UnsupportedPixelFormat as i32,
            WINCODEC_ERR_UNSUPPORTEDPIXELFORMAT.0
        );
        assert_eq!(ErrorKind::InsufficientBuffer as i32, E_NOT_SUFFICIENT_BUFFER.0);
        assert_eq!(
            ErrorKind::FileNotFound as i32,
            windows::core::HRESULT::from_win32(ERROR_FILE_NOT_FOUND.0).0
        );
    }
}
