use raw_window_handle::RawWindowHandle;

/// Declares a Rust enum whose discriminants are the native values it mirrors.
///
/// The generated type converts losslessly into the native integer and back
/// through `TryFrom`, and lists every variant in `ALL`.
macro_rules! native_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident: $repr:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $value:expr,
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        #[repr($repr)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant = $value,
            )*
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant,)*];

            #[inline]
            pub const fn to_raw(self) -> $repr {
                self as $repr
            }
        }

        impl From<$name> for $repr {
            #[inline]
            fn from(src: $name) -> $repr {
                src as $repr
            }
        }

        impl TryFrom<$repr> for $name {
            type Error = crate::Error;

            fn try_from(src: $repr) -> crate::Result<Self> {
                $(
                    if src == $name::$variant as $repr {
                        return Ok($name::$variant);
                    }
                )*
                Err(crate::Error::UnknownValue {
                    type_name: stringify!($name),
                    value: src as i64,
                })
            }
        }
    };
}

/// Packs a four-character code the way `MAKEFOURCC` does.
#[inline]
pub(crate) const fn fourcc(code: [u8; 4]) -> u32 {
    code[0] as u32 | (code[1] as u32) << 8 | (code[2] as u32) << 16 | (code[3] as u32) << 24
}

/// A native window handle (`HWND`). Zero is the null handle.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(transparent)]
pub struct Hwnd(pub isize);

impl Hwnd {
    pub const NULL: Self = Self(0);

    #[inline]
    pub const fn is_null(self) -> bool {
        self.0 == 0
    }
}

pub trait AsWindowHandle {
    fn window_handle(&self) -> Hwnd;
}

impl AsWindowHandle for Hwnd {
    #[inline]
    fn window_handle(&self) -> Hwnd {
        *self
    }
}

impl AsWindowHandle for RawWindowHandle {
    #[inline]
    fn window_handle(&self) -> Hwnd {
        let RawWindowHandle::Win32(handle) = self else {
            panic!("not a Win32 window handle: {:?}", self)
        };
        Hwnd(handle.hwnd as isize)
    }
}

impl AsWindowHandle for *const std::ffi::c_void {
    #[inline]
    fn window_handle(&self) -> Hwnd {
        Hwnd(*self as isize)
    }
}

impl AsWindowHandle for *mut std::ffi::c_void {
    #[inline]
    fn window_handle(&self) -> Hwnd {
        Hwnd(*self as isize)
    }
}

impl AsWindowHandle for isize {
    #[inline]
    fn window_handle(&self) -> Hwnd {
        Hwnd(*self)
    }
}

#[cfg(windows)]
impl AsWindowHandle for windows::Win32::Foundation::HWND {
    #[inline]
    fn window_handle(&self) -> Hwnd {
        Hwnd(self.0 as isize)
    }
}

#[cfg(windows)]
impl From<Hwnd> for windows::Win32::Foundation::HWND {
    #[inline]
    fn from(src: Hwnd) -> Self {
        Self(src.0 as _)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fourcc_matches_makefourcc() {
        assert_eq!(fourcc(*b"DXT1"), 0x3154_5844);
        assert_eq!(fourcc(*b"YUY2"), 0x3259_5559);
    }

    #[test]
    fn raw_window_handle_into_hwnd() {
        let mut handle = raw_window_handle::Win32WindowHandle::empty();
        handle.hwnd = 0x1234 as *mut std::ffi::c_void;
        let raw = RawWindowHandle::Win32(handle);
        assert_eq!(raw.window_handle(), Hwnd(0x1234));
        assert_eq!(0x55isize.window_handle(), Hwnd(0x55));
        assert!(Hwnd::NULL.is_null());
    }
}
