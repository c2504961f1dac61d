use super::{BoxHandler, CompiledRoute, Handler, Method, Router};

use crate::error::RouterError;
use crate::pattern::{Captures, UriArgs};

use std::collections::HashMap;

use tracing::{debug, trace, warn};

impl<H> Router<H> {
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            names: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn clear(&mut self) {
        self.routes.clear();
        self.names.clear();
    }

    /// Iterates over the routes in registration order.
    pub fn iter(&self) -> std::slice::Iter<'_, CompiledRoute<H>> {
        self.routes.iter()
    }

    pub fn register(&mut self, method: Method, pattern: &str, handler: H) -> &mut Self {
        self.insert_route(CompiledRoute::new(method, pattern, None, handler));
        self
    }

    pub fn register_named(
        &mut self,
        method: Method,
        pattern: &str,
        name: &str,
        handler: H,
    ) -> &mut Self {
        self.insert_route(CompiledRoute::new(method, pattern, Some(name), handler));
        self
    }

    /// Registers a route for a method given by name, e.g. `"GET"` or `"any"`.
    ///
    /// Nothing is registered when the method name is invalid.
    pub fn try_register(
        &mut self,
        method: &str,
        pattern: &str,
        name: Option<&str>,
        handler: H,
    ) -> Result<&CompiledRoute<H>, RouterError> {
        let method: Method = method.parse()?;
        let idx = self.insert_route(CompiledRoute::new(method, pattern, name, handler));
        Ok(&self.routes[idx])
    }

    pub fn by_name(&self, name: &str) -> Option<&CompiledRoute<H>> {
        self.names.get(name).map(|&idx| &self.routes[idx])
    }

    /// Builds the URI of the route named `name`.
    pub fn uri(&self, name: &str, args: impl UriArgs) -> Result<String, RouterError> {
        match self.by_name(name) {
            Some(route) => route.uri(args),
            None => Err(RouterError::RouteNotFound(name.to_owned())),
        }
    }

    /// Finds the first route that serves `method` and matches `path`.
    ///
    /// Returns `None` for an unknown method.
    pub fn find<'r>(
        &'r self,
        method: &str,
        path: &str,
    ) -> Option<(&'r CompiledRoute<H>, Captures<'r>)> {
        let method = parse_request_method(method)?;
        self.find_by(method, path)
    }

    /// Finds every route that serves `method` and matches `path`, in registration order.
    pub fn matches<'r>(
        &'r self,
        method: &str,
        path: &str,
    ) -> Vec<(&'r CompiledRoute<H>, Captures<'r>)> {
        let method = match parse_request_method(method) {
            Some(m) => m,
            None => return Vec::new(),
        };
        self.routes
            .iter()
            .filter(|r| r.allows(method))
            .filter_map(|r| r.find(path).map(|caps| (r, caps)))
            .collect()
    }

    /// Invokes the handler of every route that serves `method` and matches `path`.
    ///
    /// Returns the last matched route, or `None` when nothing matched.
    pub fn execute_all(&self, method: &str, path: &str) -> Option<&CompiledRoute<H>>
    where
        H: Handler,
    {
        let method = parse_request_method(method)?;
        self.execute_by(method, path)
    }
}

impl<H> Router<H> {
    fn insert_route(&mut self, route: CompiledRoute<H>) -> usize {
        debug!(
            method = %route.method(),
            name = route.name(),
            pattern = route.pattern().as_str(),
            segments = route.segments().len(),
            "route registered"
        );

        let existing = self.names.get(route.name()).copied();
        match existing {
            Some(idx) => {
                warn!(name = route.name(), "route name reused, replacing the earlier route");
                self.routes[idx] = route;
                idx
            }
            None => {
                let idx = self.routes.len();
                self.names.insert(route.name().into(), idx);
                self.routes.push(route);
                idx
            }
        }
    }

    pub(crate) fn find_by<'r>(
        &'r self,
        method: Method,
        path: &str,
    ) -> Option<(&'r CompiledRoute<H>, Captures<'r>)> {
        self.routes
            .iter()
            .filter(|r| r.allows(method))
            .find_map(|r| r.find(path).map(|caps| (r, caps)))
    }

    pub(crate) fn execute_by(&self, method: Method, path: &str) -> Option<&CompiledRoute<H>>
    where
        H: Handler,
    {
        let mut current = None;

        for route in self.routes.iter().filter(|r| r.allows(method)) {
            match route.find(path) {
                Some(caps) => {
                    trace!(name = route.name(), captures = caps.len(), "route matched");
                    route.handler().call(&caps);
                    current = Some(route);
                }
                None => trace!(name = route.name(), "route skipped"),
            }
        }

        if current.is_none() {
            debug!(%method, path, "no route matched");
        }

        current
    }
}

fn parse_request_method(method: &str) -> Option<Method> {
    match method.parse() {
        Ok(m) => Some(m),
        Err(e) => {
            debug!(error = %e, "unknown request method");
            None
        }
    }
}

impl Router<BoxHandler> {
    pub fn route(
        &mut self,
        method: Method,
        pattern: &str,
        h: impl Handler + Send + Sync + 'static,
    ) -> &mut Self {
        self.register(method, pattern, Box::new(h))
    }

    pub fn route_named(
        &mut self,
        method: Method,
        pattern: &str,
        name: &str,
        h: impl Handler + Send + Sync + 'static,
    ) -> &mut Self {
        self.register_named(method, pattern, name, Box::new(h))
    }
}

macro_rules! define_method {
    ($name:tt, $method:tt) => {
        pub fn $name<F>(&mut self, pattern: &str, f: F) -> &mut Self
        where
            F: Fn(&Captures<'_>) + Send + Sync + 'static,
        {
            self.route(Method::$method, pattern, f)
        }
    };
}

impl Router<BoxHandler> {
    define_method!(get, Get);
    define_method!(head, Head);
    define_method!(post, Post);
    define_method!(put, Put);
    define_method!(patch, Patch);
    define_method!(delete, Delete);
    define_method!(options, Options);
    define_method!(any, Any);
}
