//! Message payload rendering
//!
//! Anything passed to a logging call is turned into a plain string before it
//! reaches the formatter. Strings render as themselves; sequences render as
//! the concatenation of their elements' `Display` output with no separator.

use std::borrow::Cow;
use std::collections::VecDeque;
use std::fmt::{self, Display, Write as _};

/// A payload accepted by the logging calls.
pub trait LogMessage {
    fn render(&self) -> String;
}

impl LogMessage for str {
    fn render(&self) -> String {
        self.to_owned()
    }
}

impl LogMessage for String {
    fn render(&self) -> String {
        self.clone()
    }
}

impl LogMessage for Cow<'_, str> {
    fn render(&self) -> String {
        self.as_ref().to_owned()
    }
}

impl LogMessage for fmt::Arguments<'_> {
    fn render(&self) -> String {
        fmt::format(*self)
    }
}

impl<T: LogMessage + ?Sized> LogMessage for &T {
    fn render(&self) -> String {
        (**self).render()
    }
}

impl<T: LogMessage + ?Sized> LogMessage for Box<T> {
    fn render(&self) -> String {
        (**self).render()
    }
}

fn concat<'a, T: Display + 'a>(items: impl IntoIterator<Item = &'a T>) -> String {
    let mut out = String::new();
    for item in items {
        // Writing into a String cannot fail.
        let _ = write!(out, "{}", item);
    }
    out
}

impl<T: Display> LogMessage for [T] {
    fn render(&self) -> String {
        concat(self)
    }
}

impl<T: Display, const N: usize> LogMessage for [T; N] {
    fn render(&self) -> String {
        concat(self)
    }
}

impl<T: Display> LogMessage for Vec<T> {
    fn render(&self) -> String {
        concat(self)
    }
}

impl<T: Display> LogMessage for VecDeque<T> {
    fn render(&self) -> String {
        concat(self)
    }
}

/// Marker rendered for an empty optional payload.
pub const NONE_MARKER: &str = "<none>";

impl<T: Display> LogMessage for Option<T> {
    fn render(&self) -> String {
        match self {
            Some(value) => value.to_string(),
            None => NONE_MARKER.to_string(),
        }
    }
}

/// Renders any re-iterable sequence of `Display` items back to back.
///
/// ```
/// use colorlog::core::{Concat, LogMessage};
///
/// let msg = Concat(1..=3);
/// assert_eq!(msg.render(), "123");
/// ```
#[derive(Debug, Clone)]
pub struct Concat<I>(pub I);

impl<I> LogMessage for Concat<I>
where
    I: IntoIterator + Clone,
    I::Item: Display,
{
    fn render(&self) -> String {
        let mut out = String::new();
        for item in self.0.clone() {
            let _ = write!(out, "{}", item);
        }
        out
    }
}
