use std::borrow::Cow;
use std::iter::{DoubleEndedIterator, ExactSizeIterator, FusedIterator};
use std::str::FromStr;

use smallvec::SmallVec;

/// Variables extracted by a successful match, in segment order.
///
/// A skipped optional placeholder contributes no value, so the n-th value
/// belongs to the n-th *matched* placeholder rather than the n-th declared one.
#[derive(Debug, Clone, Default)]
pub struct Captures<'r> {
    path: Option<String>,
    spans: SmallVec<[(&'r str, usize, usize); 8]>, // (name, start, end)
}

impl<'r> Captures<'r> {
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        let path = self.path.as_deref()?;
        self.spans
            .iter()
            .find_map(|&(n, s, e)| some_if(n == name, || &path[s..e]))
    }

    pub fn parse<T: FromStr>(&self, name: &str) -> Option<Result<T, T::Err>> {
        self.get(name).map(T::from_str)
    }

    /// Iterates over `(name, value)` pairs.
    pub fn iter(&self) -> Iter<'_, 'r> {
        Iter {
            path: self.path.as_deref().unwrap_or_default(),
            spans: self.spans.iter(),
        }
    }

    /// Iterates over the values alone, in segment order.
    pub fn values(&self) -> Values<'_, 'r> {
        Values { inner: self.iter() }
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.values().map(str::to_owned).collect()
    }
}

impl<'r> Captures<'r> {
    pub(super) fn new(path: Cow<'_, str>, spans: SmallVec<[(&'r str, usize, usize); 8]>) -> Self {
        let path = some_if(!spans.is_empty(), || path.into_owned());
        Self { path, spans }
    }
}

impl<'a, 'r> IntoIterator for &'a Captures<'r> {
    type Item = (&'r str, &'a str);
    type IntoIter = Iter<'a, 'r>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[inline(always)]
fn some_if<T>(cond: bool, f: impl FnOnce() -> T) -> Option<T> {
    if cond {
        Some(f())
    } else {
        None
    }
}

pub struct Iter<'a, 'r> {
    path: &'a str,
    spans: std::slice::Iter<'a, (&'r str, usize, usize)>,
}

pub struct Values<'a, 'r> {
    inner: Iter<'a, 'r>,
}

macro_rules! delegate {
    (iter, $method:tt) => {
        fn $method(&mut self) -> Option<Self::Item> {
            let &(n, s, e) = self.spans.$method()?;
            Some((n, &self.path[s..e]))
        }
    };

    (values, $method:tt) => {
        fn $method(&mut self) -> Option<Self::Item> {
            self.inner.$method().map(|(_, v)| v)
        }
    };

    (size_hint, $field:tt) => {
        fn size_hint(&self) -> (usize, Option<usize>) {
            self.$field.size_hint()
        }
    };

    (len, $field:tt) => {
        fn len(&self) -> usize {
            self.$field.len()
        }
    };
}

impl<'a, 'r> Iterator for Iter<'a, 'r> {
    type Item = (&'r str, &'a str);
    delegate!(iter, next);
    delegate!(size_hint, spans);
}

impl DoubleEndedIterator for Iter<'_, '_> {
    delegate!(iter, next_back);
}

impl<'a> Iterator for Values<'a, '_> {
    type Item = &'a str;
    delegate!(values, next);
    delegate!(size_hint, inner);
}

impl DoubleEndedIterator for Values<'_, '_> {
    delegate!(values, next_back);
}

impl FusedIterator for Iter<'_, '_> {}
impl FusedIterator for Values<'_, '_> {}

impl ExactSizeIterator for Iter<'_, '_> {
    delegate!(len, spans);
}

impl ExactSizeIterator for Values<'_, '_> {
    delegate!(len, inner);
}
