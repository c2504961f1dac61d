use crate::pattern::Captures;

/// The callback of a route.
///
/// It receives the extracted variables in segment order. Skipped optional
/// placeholders shrink the list instead of padding it.
pub trait Handler {
    fn call(&self, captures: &Captures<'_>);
}

pub type BoxHandler = Box<dyn Handler + Send + Sync>;

impl Handler for BoxHandler {
    fn call(&self, captures: &Captures<'_>) {
        Handler::call(&**self, captures)
    }
}

impl<F> Handler for F
where
    F: Fn(&Captures<'_>),
{
    fn call(&self, captures: &Captures<'_>) {
        (self)(captures)
    }
}
