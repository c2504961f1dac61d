use crate::error::RouterError;
use crate::pattern::Captures;
use crate::router::{CompiledRoute, Handler, Method, Router};

use std::convert::TryFrom;

impl TryFrom<&http::Method> for Method {
    type Error = RouterError;

    fn try_from(method: &http::Method) -> Result<Self, Self::Error> {
        method.as_str().parse()
    }
}

impl<H> Router<H> {
    /// Like [`Router::find`], for a method taken from an `http` request.
    pub fn find_http<'r>(
        &'r self,
        method: &http::Method,
        path: &str,
    ) -> Option<(&'r CompiledRoute<H>, Captures<'r>)> {
        let method = Method::try_from(method).ok()?;
        self.find_by(method, path)
    }

    /// Like [`Router::execute_all`], for a method taken from an `http` request.
    pub fn execute_http(&self, method: &http::Method, path: &str) -> Option<&CompiledRoute<H>>
    where
        H: Handler,
    {
        let method = Method::try_from(method).ok()?;
        self.execute_by(method, path)
    }
}
