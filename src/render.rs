//! # Debug Rendering
//!
//! Human-readable printing of a container's contents, in logical order.
//!
//! ## Plain English Explanation
//!
//! Each sequence container can hand out a [`Rendered`] value. It doesn't
//! print anything by itself: it implements `Display`, so you can put it in
//! `println!`, `log::debug!` or `format!`. You choose how each element is
//! written, e.g. quoted, in hex, or with a custom type's fields.
//!
//! ```text
//! RingBuffer<char> ['a', 'b', 'c']
//! ```

use std::any::type_name;
use std::fmt;

/// A `Display` adapter over a sequence of elements.
///
/// Created by `render_with` on `DynArray`, `RingBuffer` and `LinkedList`.
pub struct Rendered<I, F> {
    label: &'static str,
    type_name: String,
    items: I,
    write_item: F,
}

impl<I, F> Rendered<I, F> {
    pub(crate) fn new<T>(label: &'static str, items: I, write_item: F) -> Self
    where
        F: Fn(&mut fmt::Formatter<'_>, &T) -> fmt::Result,
    {
        Self {
            label,
            type_name: short_type_name::<T>(),
            items,
            write_item,
        }
    }
}

impl<'a, T, I, F> fmt::Display for Rendered<I, F>
where
    T: 'a,
    I: Iterator<Item = &'a T> + Clone,
    F: Fn(&mut fmt::Formatter<'_>, &T) -> fmt::Result,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}<{}> [", self.label, self.type_name)?;
        for (n, item) in self.items.clone().enumerate() {
            if n > 0 {
                f.write_str(", ")?;
            }
            (self.write_item)(f, item)?;
        }
        f.write_str("]")
    }
}

/// Writes an element with its own `Display` impl.
pub(crate) fn display_item<T: fmt::Display>(f: &mut fmt::Formatter<'_>, item: &T) -> fmt::Result {
    write!(f, "{}", item)
}

/// `type_name` without module paths: `Option<alloc::string::String>`
/// becomes `Option<String>`.
pub(crate) fn short_type_name<T: ?Sized>() -> String {
    let full = type_name::<T>();
    let mut out = String::with_capacity(full.len());
    let mut segment = String::new();
    let mut chars = full.chars().peekable();

    while let Some(c) = chars.next() {
        if c == ':' && chars.peek() == Some(&':') {
            chars.next();
            segment.clear();
        } else if c.is_alphanumeric() || c == '_' {
            segment.push(c);
        } else {
            out.push_str(&segment);
            segment.clear();
            out.push(c);
        }
    }
    out.push_str(&segment);
    out
}

// ============================================
// TESTS
// ============================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_type_name() {
        assert_eq!(short_type_name::<i32>(), "i32");
        assert_eq!(short_type_name::<String>(), "String");
        assert_eq!(short_type_name::<Option<String>>(), "Option<String>");
        assert_eq!(short_type_name::<(u8, Vec<u8>)>(), "(u8, Vec<u8>)");
    }

    #[test]
    fn test_render_custom_items() {
        let values = ['a', 'b'];
        let rendered = Rendered::new::<char>("Demo", values.iter(), |f, c: &char| {
            write!(f, "'{}'", c)
        });
        assert_eq!(rendered.to_string(), "Demo<char> ['a', 'b']");
    }

    #[test]
    fn test_render_empty() {
        let values: [u8; 0] = [];
        let rendered = Rendered::new::<u8>("Demo", values.iter(), display_item::<u8>);
        assert_eq!(rendered.to_string(), "Demo<u8> []");
    }
}
