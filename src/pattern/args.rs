use super::Captures;

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// A source of placeholder values for URI generation.
pub trait UriArgs {
    fn arg(&self, name: &str) -> Option<&str>;
}

impl<T: UriArgs + ?Sized> UriArgs for &T {
    fn arg(&self, name: &str) -> Option<&str> {
        (**self).arg(name)
    }
}

impl<K, V, S> UriArgs for HashMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    V: AsRef<str>,
    S: BuildHasher,
{
    fn arg(&self, name: &str) -> Option<&str> {
        self.get(name).map(AsRef::as_ref)
    }
}

impl<K, V> UriArgs for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: AsRef<str>,
{
    fn arg(&self, name: &str) -> Option<&str> {
        self.get(name).map(AsRef::as_ref)
    }
}

impl<K, V> UriArgs for [(K, V)]
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn arg(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v.as_ref())
    }
}

impl<K, V, const N: usize> UriArgs for [(K, V); N]
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn arg(&self, name: &str) -> Option<&str> {
        self[..].arg(name)
    }
}

impl<K, V> UriArgs for Vec<(K, V)>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn arg(&self, name: &str) -> Option<&str> {
        self[..].arg(name)
    }
}

impl UriArgs for Captures<'_> {
    fn arg(&self, name: &str) -> Option<&str> {
        self.get(name)
    }
}
