use super::Method;

use crate::error::RouterError;
use crate::pattern::{Captures, Pattern, Segment, UriArgs};

/// A pattern bound to a method, a name and a handler.
///
/// Immutable once registered.
#[derive(Debug)]
pub struct CompiledRoute<H> {
    method: Method,
    name: Box<str>,
    pattern: Pattern,
    handler: H,
}

impl<H> CompiledRoute<H> {
    /// Compiles `pattern`. The route is named after the pattern unless `name` is given.
    pub fn new(method: Method, pattern: &str, name: Option<&str>, handler: H) -> Self {
        Self {
            method,
            name: name.unwrap_or(pattern).into(),
            pattern: Pattern::compile(pattern),
            handler,
        }
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn segments(&self) -> &[Segment] {
        self.pattern.segments()
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    #[inline]
    pub fn allows(&self, request: Method) -> bool {
        self.method.allows(request)
    }

    pub fn find<'r>(&'r self, path: &str) -> Option<Captures<'r>> {
        self.pattern.find(path)
    }

    pub fn uri(&self, args: impl UriArgs) -> Result<String, RouterError> {
        self.pattern.uri(args)
    }
}
