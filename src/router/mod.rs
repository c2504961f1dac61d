mod handler;
mod imp;
mod method;
mod route;
mod router_macro;

pub use self::handler::{BoxHandler, Handler};
pub use self::method::Method;
pub use self::route::CompiledRoute;

use std::collections::HashMap;

/// An ordered table of compiled routes, keyed by route name.
///
/// Registration takes `&mut self` and matching takes `&self`, so a router
/// must be fully built before it is shared between threads.
#[derive(Debug)]
pub struct Router<H = BoxHandler> {
    routes: Vec<CompiledRoute<H>>,
    names: HashMap<Box<str>, usize>,
}

impl<H> Default for Router<H> {
    fn default() -> Self {
        Self::new()
    }
}
