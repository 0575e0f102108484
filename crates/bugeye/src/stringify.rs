//! Conversion of values into text for failure diagnostics.
//!
//! The conversion rules are tried in a fixed order:
//!
//! 1. text is used verbatim,
//! 2. numbers and booleans use their plain formatting,
//! 3. sequences are rendered as `[ a, b, c ]`,
//! 4. tuples and pairs are rendered as `{ a, b }`,
//! 5. any other `Display` value uses its `Display` output,
//! 6. any other `Debug` value uses its `Debug` output,
//! 7. everything else is rendered as its type name.
//!
//! Rules 1 to 4 are the [`Stringify`] trait. The `stringify_value!` macro
//! dispatches over all of the rules at the call site.

use std::{
    borrow::Cow,
    collections::{BTreeMap, BTreeSet, VecDeque},
    fmt::{self, Write as _},
    rc::Rc,
    sync::Arc,
};

/// Values that have a well-known textual form.
pub trait Stringify {
    /// Write the textual form of `self` into `out`.
    fn stringify_to(&self, out: &mut String);
}

/// Convert a value into its textual form.
pub fn stringify<T>(value: &T) -> String
where
    T: Stringify + ?Sized,
{
    let mut out = String::new();
    value.stringify_to(&mut out);
    out
}

// ==== text ====

impl Stringify for str {
    fn stringify_to(&self, out: &mut String) {
        out.push_str(self);
    }
}

impl Stringify for String {
    fn stringify_to(&self, out: &mut String) {
        out.push_str(self);
    }
}

impl Stringify for Cow<'_, str> {
    fn stringify_to(&self, out: &mut String) {
        out.push_str(self);
    }
}

impl Stringify for char {
    fn stringify_to(&self, out: &mut String) {
        out.push(*self);
    }
}

// ==== numbers and booleans ====

macro_rules! impl_stringify_plain {
    ($($t:ty),*) => {$(
        impl Stringify for $t {
            fn stringify_to(&self, out: &mut String) {
                let _ = write!(out, "{}", self);
            }
        }
    )*};
}

impl_stringify_plain!(
    bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

// ==== pointers ====

fn stringify_address(addr: usize, out: &mut String) {
    let _ = write!(
        out,
        "0x{:01$x}",
        addr,
        std::mem::size_of::<usize>() * 2
    );
}

impl<T: ?Sized> Stringify for *const T {
    fn stringify_to(&self, out: &mut String) {
        stringify_address(*self as *const () as usize, out);
    }
}

impl<T: ?Sized> Stringify for *mut T {
    fn stringify_to(&self, out: &mut String) {
        stringify_address(*self as *const () as usize, out);
    }
}

// ==== sequences ====

fn stringify_seq<'a, I, T>(iter: I, out: &mut String)
where
    I: IntoIterator<Item = &'a T>,
    T: Stringify + ?Sized + 'a,
{
    out.push_str("[ ");
    for (i, item) in iter.into_iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        item.stringify_to(out);
    }
    out.push_str(" ]");
}

impl<T: Stringify> Stringify for [T] {
    fn stringify_to(&self, out: &mut String) {
        stringify_seq(self, out);
    }
}

impl<T: Stringify, const N: usize> Stringify for [T; N] {
    fn stringify_to(&self, out: &mut String) {
        stringify_seq(self, out);
    }
}

impl<T: Stringify> Stringify for Vec<T> {
    fn stringify_to(&self, out: &mut String) {
        stringify_seq(self, out);
    }
}

impl<T: Stringify> Stringify for VecDeque<T> {
    fn stringify_to(&self, out: &mut String) {
        stringify_seq(self, out);
    }
}

impl<T: Stringify> Stringify for BTreeSet<T> {
    fn stringify_to(&self, out: &mut String) {
        stringify_seq(self, out);
    }
}

impl<K: Stringify, V: Stringify> Stringify for BTreeMap<K, V> {
    fn stringify_to(&self, out: &mut String) {
        out.push_str("[ ");
        for (i, entry) in self.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            entry.stringify_to(out);
        }
        out.push_str(" ]");
    }
}

// ==== tuples ====

macro_rules! impl_stringify_tuple {
    ($( ($($name:ident)+) )*) => {$(
        #[allow(non_snake_case)]
        impl<$($name: Stringify),+> Stringify for ($($name,)+) {
            #[allow(unused_assignments)]
            fn stringify_to(&self, out: &mut String) {
                let ($(ref $name,)+) = *self;
                out.push_str("{ ");
                let mut _first = true;
                $(
                    if !_first {
                        out.push_str(", ");
                    }
                    _first = false;
                    $name.stringify_to(out);
                )+
                out.push_str(" }");
            }
        }
    )*};
}

impl_stringify_tuple! {
    (A)
    (A B)
    (A B C)
    (A B C D)
    (A B C D E)
    (A B C D E F)
    (A B C D E F G)
    (A B C D E F G H)
}

// ==== smart pointers and references ====

impl<T: Stringify + ?Sized> Stringify for &T {
    fn stringify_to(&self, out: &mut String) {
        (**self).stringify_to(out);
    }
}

impl<T: Stringify + ?Sized> Stringify for &mut T {
    fn stringify_to(&self, out: &mut String) {
        (**self).stringify_to(out);
    }
}

impl<T: Stringify + ?Sized> Stringify for Box<T> {
    fn stringify_to(&self, out: &mut String) {
        (**self).stringify_to(out);
    }
}

impl<T: Stringify + ?Sized> Stringify for Rc<T> {
    fn stringify_to(&self, out: &mut String) {
        (**self).stringify_to(out);
    }
}

impl<T: Stringify + ?Sized> Stringify for Arc<T> {
    fn stringify_to(&self, out: &mut String) {
        (**self).stringify_to(out);
    }
}

// ==== call-site dispatch ====
//
// Each rule is a trait implemented for a different number of references to
// `Wrap`. Method resolution on `(&&&&Wrap(&value))` tries the receivers with
// the most references first, so the first applicable rule wins.

#[doc(hidden)] // private API
pub struct Wrap<'a, T: ?Sized>(pub &'a T);

#[doc(hidden)] // private API
pub trait ViaStringify {
    fn bugeye_stringify(&self) -> String;
}

impl<T: Stringify + ?Sized> ViaStringify for &&&Wrap<'_, T> {
    fn bugeye_stringify(&self) -> String {
        stringify(self.0)
    }
}

#[doc(hidden)] // private API
pub trait ViaDisplay {
    fn bugeye_stringify(&self) -> String;
}

impl<T: fmt::Display + ?Sized> ViaDisplay for &&Wrap<'_, T> {
    fn bugeye_stringify(&self) -> String {
        self.0.to_string()
    }
}

#[doc(hidden)] // private API
pub trait ViaDebug {
    fn bugeye_stringify(&self) -> String;
}

impl<T: fmt::Debug + ?Sized> ViaDebug for &Wrap<'_, T> {
    fn bugeye_stringify(&self) -> String {
        format!("{:?}", self.0)
    }
}

#[doc(hidden)] // private API
pub trait ViaTypeName {
    fn bugeye_stringify(&self) -> String;
}

impl<T: ?Sized> ViaTypeName for Wrap<'_, T> {
    fn bugeye_stringify(&self) -> String {
        std::any::type_name::<T>().to_owned()
    }
}
