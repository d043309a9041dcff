//! crates/logging/src/format.rs
//! Conversion of arbitrary values into the text written by the logger.
//!
//! Anything implementing [`std::fmt::Display`] is [`Loggable`] directly. Values
//! without a textual form go through one of the adapters:
//!
//! - [`Opaque`] renders `"<type name> at <address>"`,
//! - [`CText`] renders a NUL-terminated C string as text rather than as an address,
//! - [`Debugged`] renders through [`std::fmt::Debug`].

use std::any;
use std::ffi::CStr;
use std::fmt::{self, Write as _};
use std::marker::PhantomData;

/// A value the logger can turn into text.
///
/// Rendering never fails: a `Display` implementation reporting an error
/// simply leaves whatever it produced so far.
pub trait Loggable {
    /// Appends the textual representation of `self` to `out`.
    fn render_into(&self, out: &mut String);

    /// Returns the textual representation of `self`.
    fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }
}

impl<T> Loggable for T
where
    T: fmt::Display + ?Sized,
{
    fn render_into(&self, out: &mut String) {
        let _ = write!(out, "{self}");
    }
}

/// Renders a value with no textual form as its type name and address.
///
/// ```
/// use logging::{Loggable, Opaque};
///
/// struct Handle;
/// let handle = Handle;
/// let text = Opaque::new(&handle).render();
/// assert!(text.contains("Handle at 0x"));
/// ```
pub struct Opaque<'a, T: ?Sized> {
    address: *const T,
    _borrow: PhantomData<&'a T>,
}

impl<'a, T: ?Sized> Opaque<'a, T> {
    /// Wraps a reference.
    #[must_use]
    pub const fn new(value: &'a T) -> Self {
        Self {
            address: value,
            _borrow: PhantomData,
        }
    }

    /// Wraps a raw pointer. The pointer is only printed, never dereferenced.
    #[must_use]
    pub const fn from_ptr(address: *const T) -> Self {
        Self {
            address,
            _borrow: PhantomData,
        }
    }
}

impl<T: ?Sized> fmt::Display for Opaque<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {:p}", any::type_name::<T>(), self.address)
    }
}

impl<T: ?Sized> fmt::Debug for Opaque<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Shorthand for [`Opaque::new`].
#[must_use]
pub const fn opaque<T: ?Sized>(value: &T) -> Opaque<'_, T> {
    Opaque::new(value)
}

/// Renders a NUL-terminated C string as its text.
///
/// Invalid UTF-8 is replaced with U+FFFD.
#[derive(Clone, Copy, Debug)]
pub struct CText<'a>(&'a CStr);

impl<'a> CText<'a> {
    /// Wraps a C string.
    #[must_use]
    pub const fn new(text: &'a CStr) -> Self {
        Self(text)
    }
}

impl fmt::Display for CText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_string_lossy())
    }
}

impl<'a> From<&'a CStr> for CText<'a> {
    fn from(text: &'a CStr) -> Self {
        Self::new(text)
    }
}

/// Renders a value through its [`fmt::Debug`] implementation.
#[derive(Clone, Copy)]
pub struct Debugged<'a, T: ?Sized>(&'a T);

impl<'a, T: fmt::Debug + ?Sized> Debugged<'a, T> {
    /// Wraps a reference.
    #[must_use]
    pub const fn new(value: &'a T) -> Self {
        Self(value)
    }
}

impl<T: fmt::Debug + ?Sized> fmt::Display for Debugged<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl<T: fmt::Debug + ?Sized> fmt::Debug for Debugged<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoText;

    #[derive(Debug)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[test]
    fn display_values_render_directly() {
        assert_eq!("x=".render(), "x=");
        assert_eq!(5.render(), "5");
        assert_eq!('\n'.render(), "\n");
        assert_eq!(String::from("owned").render(), "owned");
        assert_eq!(2.5_f64.render(), "2.5");
    }

    #[test]
    fn render_into_appends() {
        let mut out = String::from("a");
        "b".render_into(&mut out);
        7_u8.render_into(&mut out);
        assert_eq!(out, "ab7");
    }

    #[test]
    fn opaque_renders_type_name_and_address() {
        let value = NoText;
        let text = opaque(&value).render();
        assert!(text.contains("NoText"), "{text}");
        assert!(text.contains(" at 0x"), "{text}");
    }

    #[test]
    fn opaque_type_names_differ_by_type() {
        let first = NoText;
        let second = Point { x: 1, y: 2 };
        let a = opaque(&first).render();
        let b = opaque(&second).render();
        let name = |text: &str| text.split(" at ").next().map(str::to_owned);
        assert_ne!(name(&a), name(&b));
    }

    #[test]
    fn opaque_from_pointer_prints_address() {
        let value = 42_u32;
        let pointer: *const u32 = &value;
        let text = Opaque::from_ptr(pointer).render();
        assert_eq!(text, format!("u32 at {pointer:p}"));
    }

    #[test]
    fn c_strings_render_as_text() {
        let text = c"const char*";
        assert_eq!(CText::new(text).render(), "const char*");
        assert_eq!(CText::from(c"char[]").render(), "char[]");
    }

    #[test]
    fn c_strings_with_invalid_utf8_are_lossy() {
        let bytes = [b'o', b'k', 0xff, 0];
        let text = CStr::from_bytes_with_nul(&bytes).expect("valid C string");
        assert_eq!(CText::new(text).render(), "ok\u{fffd}");
    }

    #[test]
    fn debugged_uses_debug_representation() {
        let point = Point { x: 1, y: -2 };
        assert_eq!(Debugged::new(&point).render(), "Point { x: 1, y: -2 }");
        assert_eq!(Debugged::new(&[1, 2]).render(), "[1, 2]");
    }

    #[test]
    fn loggable_is_object_safe() {
        let values: [&dyn Loggable; 3] = [&"a", &1, &CText::new(c"b")];
        let joined: String = values.iter().map(|value| value.render()).collect();
        assert_eq!(joined, "a1b");
    }
}
