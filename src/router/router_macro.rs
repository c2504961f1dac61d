/// Builds a [`Router`](crate::Router) from `METHOD "pattern" => handler` entries.
///
/// ```
/// use traffic_router::{router, Router};
///
/// let router: Router<u32> = router! {
///     GET "/users/{id:int}" => 1,
///     POST "/users" => 2,
///     ANY "/" => 3
/// };
///
/// assert_eq!(*router.find("get", "/users/7").unwrap().0.handler(), 1);
/// ```
#[macro_export]
macro_rules! router {
    {$($method:tt $pattern:expr => $handler:expr),+ $(,)?} => {{
        let mut __router = $crate::Router::new();
        $($crate::router!(@entry __router, $method, $pattern, $handler);)+
        __router
    }};

    {@entry $router:expr, GET, $pattern:expr, $handler:expr} => {
        $router.register($crate::Method::Get, $pattern, $handler)
    };
    {@entry $router:expr, HEAD, $pattern:expr, $handler:expr} => {
        $router.register($crate::Method::Head, $pattern, $handler)
    };
    {@entry $router:expr, POST, $pattern:expr, $handler:expr} => {
        $router.register($crate::Method::Post, $pattern, $handler)
    };
    {@entry $router:expr, PUT, $pattern:expr, $handler:expr} => {
        $router.register($crate::Method::Put, $pattern, $handler)
    };
    {@entry $router:expr, PATCH, $pattern:expr, $handler:expr} => {
        $router.register($crate::Method::Patch, $pattern, $handler)
    };
    {@entry $router:expr, DELETE, $pattern:expr, $handler:expr} => {
        $router.register($crate::Method::Delete, $pattern, $handler)
    };
    {@entry $router:expr, OPTIONS, $pattern:expr, $handler:expr} => {
        $router.register($crate::Method::Options, $pattern, $handler)
    };
    {@entry $router:expr, ANY, $pattern:expr, $handler:expr} => {
        $router.register($crate::Method::Any, $pattern, $handler)
    };
}
