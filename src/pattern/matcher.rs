use super::captures::Captures;
use super::{Pattern, Segment, UriArgs};

use crate::error::RouterError;

use std::borrow::Cow;

use smallvec::SmallVec;

const SLASH: char = '/';
const ROOT: &str = "/";

type Spans<'r> = SmallVec<[(&'r str, usize, usize); 8]>;

/// Collapses runs of `/` into one, then strips a single leading and a single
/// trailing slash unless the result is exactly `/`.
pub(super) fn normalize(path: &str) -> Cow<'_, str> {
    if !path.contains("//") {
        return Cow::Borrowed(trim_slashes(path));
    }

    let mut collapsed = String::with_capacity(path.len());
    let mut last_slash = false;
    for c in path.chars() {
        let slash = c == SLASH;
        if !(slash && last_slash) {
            collapsed.push(c);
        }
        last_slash = slash;
    }

    Cow::Owned(trim_slashes(&collapsed).to_owned())
}

#[inline]
fn trim_slashes(s: &str) -> &str {
    if s == ROOT {
        return s;
    }
    let s = s.strip_prefix(SLASH).unwrap_or(s);
    s.strip_suffix(SLASH).unwrap_or(s)
}

/// Number of segments of a normalized path. The root path splits into two
/// empty parts.
#[inline]
fn count_parts(path: &str) -> usize {
    path.matches(SLASH).count() + 1
}

/// Segments of a normalized path together with their byte offsets.
fn parts<'a>(path: &'a str) -> impl Iterator<Item = (usize, &'a str)> + 'a {
    path.split(SLASH).scan(0, |offset, part| {
        let start = *offset;
        *offset += part.len() + 1;
        Some((start, part))
    })
}

impl Pattern {
    /// Matches `path` against this pattern.
    ///
    /// A path that equals the pattern text itself (after normalization) matches
    /// without any placeholder being checked.
    pub fn find<'r>(&'r self, path: &str) -> Option<Captures<'r>> {
        let path = normalize(path);

        if *path == *self.stripped {
            return Some(Captures::default());
        }

        let spans = self.match_parts(&path)?;
        Some(Captures::new(path, spans))
    }

    pub fn is_match(&self, path: &str) -> bool {
        let path = normalize(path);
        *path == *self.stripped || self.match_parts(&path).is_some()
    }

    fn match_parts<'r>(&'r self, path: &str) -> Option<Spans<'r>> {
        if count_parts(path) > self.segments.len() {
            return None;
        }

        let mut parts = parts(path);
        let mut spans: Spans<'r> = SmallVec::new();

        for segment in &self.segments {
            // missing trailing parts are matched as empty strings
            let (offset, bit) = parts.next().unwrap_or((path.len(), ""));

            match segment {
                Segment::Literal(lit) => {
                    if !lit.is_empty() && **lit != *bit {
                        return None;
                    }
                }
                Segment::Placeholder(p) => {
                    if p.name.is_empty() || (p.optional && bit.is_empty()) {
                        continue;
                    }
                    if p.value_type.accepts(bit) {
                        spans.push((&*p.name, offset, offset + bit.len()));
                    } else if !p.optional {
                        return None;
                    }
                }
            }
        }

        Some(spans)
    }

    /// Builds a concrete URI from placeholder values.
    ///
    /// Missing optional placeholders are left out when nothing follows them.
    /// Any other missing value is an error.
    ///
    /// ```
    /// use traffic_router::Pattern;
    ///
    /// let pattern = Pattern::compile("/users/{id:int}/posts/{slug?}");
    ///
    /// assert_eq!(pattern.uri([("id", "42")]).unwrap(), "/users/42/posts");
    /// assert_eq!(
    ///     pattern.uri([("id", "42"), ("slug", "hello")]).unwrap(),
    ///     "/users/42/posts/hello"
    /// );
    /// assert!(pattern.uri([("slug", "hello")]).is_err());
    /// ```
    pub fn uri(&self, args: impl UriArgs) -> Result<String, RouterError> {
        if self.is_root() {
            return Ok(ROOT.to_owned());
        }

        let mut uri = String::with_capacity(self.source.len());
        let mut gap: Option<&str> = None;

        for segment in &self.segments {
            let value: &str = match segment {
                Segment::Literal(lit) => &**lit,
                Segment::Placeholder(p) => match args.arg(&p.name) {
                    Some(v) => v,
                    None if p.optional => {
                        if gap.is_none() {
                            gap = Some(&*p.name);
                        }
                        continue;
                    }
                    None => return Err(RouterError::unresolved(&self.source, &p.name)),
                },
            };

            // a skipped optional in the middle would shift every later position
            if let Some(name) = gap {
                return Err(RouterError::unresolved(&self.source, name));
            }

            uri.push(SLASH);
            uri.push_str(value);
        }

        if uri.is_empty() {
            uri.push(SLASH);
        }

        Ok(uri)
    }
}
