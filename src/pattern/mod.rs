mod args;
mod captures;
mod matcher;
mod parse;
mod validate;

pub use self::args::UriArgs;
pub use self::captures::{Captures, Iter, Values};

/// The type constraint of a placeholder, written after a colon: `{id:int}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueType {
    /// No constraint. Every value is accepted, including an empty one.
    None,
    /// One or more ASCII decimal digits.
    Int,
    /// Any value.
    String,
    Email,
    /// An IPv4 or IPv6 address.
    Ip,
    /// An unknown type name. Every value is accepted.
    Custom(Box<str>),
}

impl ValueType {
    pub fn from_name(name: &str) -> Self {
        match name {
            "" => Self::None,
            "int" => Self::Int,
            "string" => Self::String,
            "email" => Self::Email,
            "ip" => Self::Ip,
            other => Self::Custom(other.into()),
        }
    }

    /// Returns whether `value` satisfies this type.
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            Self::None | Self::String | Self::Custom(_) => true,
            Self::Int => validate::is_int(value),
            Self::Email => validate::is_email(value),
            Self::Ip => validate::is_ip(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    name: Box<str>,
    value_type: ValueType,
    optional: bool,
}

impl Placeholder {
    /// The variable name, without the optional marker and the type.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value_type(&self) -> &ValueType {
        &self.value_type
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }
}

/// One `/`-separated position of a compiled pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(Box<str>),
    Placeholder(Placeholder),
}

impl Segment {
    pub fn literal(value: &str) -> Self {
        Self::Literal(value.into())
    }

    pub fn placeholder(name: &str, value_type: ValueType, optional: bool) -> Self {
        Self::Placeholder(Placeholder {
            name: name.into(),
            value_type,
            optional,
        })
    }

    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Self::Literal(s) => Some(s),
            Self::Placeholder(_) => None,
        }
    }

    pub fn as_placeholder(&self) -> Option<&Placeholder> {
        match self {
            Self::Literal(_) => None,
            Self::Placeholder(p) => Some(p),
        }
    }
}

/// Compiles a route pattern into its positional segments.
///
/// See [`Pattern::compile`] for the accepted syntax.
pub fn compile(pattern: &str) -> Vec<Segment> {
    parse::compile(pattern)
}

/// A compiled route pattern.
///
/// Patterns use `/` as separator; leading and trailing slashes are
/// insignificant. A placeholder is written `{name}`, `{name:type}` or, when
/// optional, `{name?}` / `{name?:type}` / `{name:type?}`.
///
/// ```
/// use traffic_router::Pattern;
///
/// let pattern = Pattern::compile("/users/{id:int}/posts/{slug:string?}");
///
/// let caps = pattern.find("/users/42/posts").unwrap();
/// assert_eq!(caps.to_vec(), ["42"]);
///
/// assert!(pattern.find("/users/abc/posts").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Pattern {
    source: Box<str>,
    stripped: Box<str>,
    segments: Vec<Segment>,
}

impl Pattern {
    pub fn compile(pattern: &str) -> Self {
        Self {
            source: pattern.into(),
            stripped: matcher::normalize(pattern).into(),
            segments: parse::compile(pattern),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn placeholders(&self) -> impl Iterator<Item = &Placeholder> + '_ {
        self.segments.iter().filter_map(Segment::as_placeholder)
    }

    pub fn is_root(&self) -> bool {
        &*self.source == "/"
    }
}
