use traffic_router::{router, Captures, Method, Router, RouterError};

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

type Calls = Arc<Mutex<Vec<(&'static str, Vec<String>)>>>;

fn recorder(calls: &Calls, tag: &'static str) -> impl Fn(&Captures<'_>) + Send + Sync + 'static {
    let calls = Arc::clone(calls);
    move |caps: &Captures<'_>| calls.lock().unwrap().push((tag, caps.to_vec()))
}

#[test]
fn router_common() {
    let router: Router<usize> = router! {
        GET "/" => 0,
        GET "/users/{id:int}" => 1,
        GET "/users/{id:int}/posts/{slug:string?}" => 2,
        POST "/users" => 3,
        ANY "/contact/{email:email}" => 4,
        DELETE "/hosts/{addr:ip}" => 5,
    };

    let cases: &[(&str, &str, usize, &[&str])] = &[
        ("GET", "/", 0, &[]),
        ("GET", "/users/42", 1, &["42"]),
        ("GET", "/users/42/posts/hello", 2, &["42", "hello"]),
        ("GET", "/users/42/posts", 2, &["42"]),
        ("POST", "/users/", 3, &[]),
        ("PATCH", "/contact/a@b.com", 4, &["a@b.com"]),
        ("get", "/contact/a@b.com", 4, &["a@b.com"]),
        ("DELETE", "/hosts/::1", 5, &["::1"]),
    ];

    for &(method, path, data, values) in cases {
        let (route, caps) = router.find(method, path).unwrap();
        assert_eq!(*route.handler(), data, "{} {}", method, path);
        assert_eq!(caps.values().collect::<Vec<_>>(), values);
    }
}

#[test]
fn router_no_match() {
    let router: Router<usize> = router! {
        GET "/users/{id:int}" => 1,
        POST "/users" => 2
    };

    assert!(router.find("GET", "/users/abc").is_none());
    assert!(router.find("GET", "/users/1/2").is_none());
    assert!(router.find("POST", "/users/1").is_none());
    assert!(router.find("PUT", "/users").is_none());
    assert!(router.find("TRACE", "/users/1").is_none());
    assert!(router.matches("bogus", "/users/1").is_empty());
}

#[test]
fn router_register_invalid_method() {
    let mut router: Router<usize> = Router::new();

    match router.try_register("connect", "/tunnel", None, 1) {
        Err(RouterError::InvalidMethod(name)) => assert_eq!(name, "connect"),
        other => panic!("unexpected: {:?}", other.map(|r| r.name().to_owned())),
    }
    assert!(router.is_empty());
    assert!(router.by_name("/tunnel").is_none());

    for &name in &["get", "HEAD", "Post", "put", "patch", "delete", "options", "ANY"] {
        assert!(router.try_register(name, "/ok", Some(name), 0).is_ok());
    }
    assert_eq!(router.len(), 8);
}

#[test]
fn router_try_register_returns_route() {
    let mut router: Router<usize> = Router::new();
    let route = router
        .try_register("GET", "/users/{id:int}", Some("user"), 7)
        .unwrap();

    assert_eq!(route.method(), Method::Get);
    assert_eq!(route.name(), "user");
    assert_eq!(route.pattern().as_str(), "/users/{id:int}");
    assert_eq!(route.segments().len(), 2);
    assert_eq!(*route.handler(), 7);
}

#[test]
fn router_names() {
    let mut router: Router<usize> = Router::new();
    router
        .register(Method::Get, "/about", 1)
        .register_named(Method::Get, "/users/{id:int}", "user", 2);

    assert_eq!(*router.by_name("/about").unwrap().handler(), 1);
    assert_eq!(*router.by_name("user").unwrap().handler(), 2);
    assert!(router.by_name("/users/{id:int}").is_none());

    // same name replaces the route in place
    router.register_named(Method::Post, "/people/{id:int}", "user", 3);
    assert_eq!(router.len(), 2);
    let names: Vec<&str> = router.iter().map(|r| r.name()).collect();
    assert_eq!(names, ["/about", "user"]);
    assert_eq!(router.by_name("user").unwrap().method(), Method::Post);
    assert!(router.find("GET", "/users/1").is_none());
    assert!(router.find("POST", "/people/1").is_some());
}

#[test]
fn router_uri() {
    let mut router: Router<usize> = Router::new();
    router
        .register(Method::Get, "/", 0)
        .register_named(Method::Get, "/users/{id:int}/posts/{slug?}", "post", 1);

    let mut args = HashMap::new();
    args.insert("id".to_owned(), "42".to_owned());
    assert_eq!(router.uri("post", &args).unwrap(), "/users/42/posts");

    args.insert("slug".to_owned(), "hi".to_owned());
    assert_eq!(router.uri("post", &args).unwrap(), "/users/42/posts/hi");

    assert_eq!(router.uri("/", &args).unwrap(), "/");

    match router.uri("missing", &args) {
        Err(RouterError::RouteNotFound(name)) => assert_eq!(name, "missing"),
        other => panic!("unexpected: {:?}", other),
    }
}

#[test]
fn router_execute_all() {
    init_tracing();

    let calls: Calls = Arc::default();
    let mut router: Router = Router::new();
    router
        .route_named(Method::Get, "/users/{id:int}", "user", recorder(&calls, "user"))
        .get("/users/{name}", recorder(&calls, "by-name"))
        .route_named(Method::Post, "/users/{id:int}", "update", recorder(&calls, "update"))
        .any("/users/{id}", recorder(&calls, "any"));
    assert_eq!(router.len(), 4);

    let current = router.execute_all("GET", "/users/42").unwrap();
    assert_eq!(current.name(), "/users/{id}");

    let recorded = calls.lock().unwrap().clone();
    assert_eq!(
        recorded,
        [
            ("user", vec!["42".to_owned()]),
            ("by-name", vec!["42".to_owned()]),
            ("any", vec!["42".to_owned()]),
        ]
    );
}

#[test]
fn router_default_names_replace() {
    let calls: Calls = Arc::default();
    let mut router: Router = Router::new();
    router
        .get("/users/{id:int}", recorder(&calls, "show"))
        .post("/users/{id:int}", recorder(&calls, "update"));

    // both routes are named after the pattern, so the second one wins
    assert_eq!(router.len(), 1);
    assert!(router.execute_all("GET", "/users/42").is_none());

    let current = router.execute_all("POST", "/users/42").unwrap();
    assert_eq!(current.method(), Method::Post);
    assert_eq!(
        calls.lock().unwrap().clone(),
        [("update", vec!["42".to_owned()])]
    );
}

#[test]
fn router_current_route_includes_literal_matches() {
    let calls: Calls = Arc::default();
    let mut router: Router = Router::new();
    router
        .route_named(Method::Get, "/users/{id:int}", "user", recorder(&calls, "user"))
        .route_named(Method::Get, "/users/me", "me", recorder(&calls, "me"));

    let current = router.execute_all("GET", "/users/me").unwrap();
    assert_eq!(current.name(), "me");
    assert_eq!(calls.lock().unwrap().clone(), [("me", Vec::<String>::new())]);

    let current = router.execute_all("GET", "/users/7").unwrap();
    assert_eq!(current.name(), "user");
}

#[test]
fn router_execute_all_no_match() {
    init_tracing();

    let calls: Calls = Arc::default();
    let mut router: Router = Router::new();
    router.put("/users/{id:int}", recorder(&calls, "user"));

    assert!(router.execute_all("PUT", "/users/x").is_none());
    assert!(router.execute_all("GET", "/users/1").is_none());
    assert!(router.execute_all("BREW", "/users/1").is_none());
    assert!(calls.lock().unwrap().is_empty());
}

#[test]
fn router_handler_sees_shrunk_values() {
    let calls: Calls = Arc::default();
    let mut router: Router = Router::new();
    router.route_named(
        Method::Get,
        "/archive/{year?:int}/{slug}",
        "archive",
        recorder(&calls, "archive"),
    );

    router.execute_all("GET", "/archive/latest/intro").unwrap();
    router.execute_all("GET", "/archive/2020/intro").unwrap();

    let recorded = calls.lock().unwrap().clone();
    assert_eq!(recorded[0].1, ["intro"]);
    assert_eq!(recorded[1].1, ["2020", "intro"]);
}

#[test]
fn router_matches_in_order() {
    let router: Router<&str> = router! {
        GET "/a/{x}" => "first",
        ANY "/a/{y:int}" => "second",
        GET "/b" => "third"
    };

    let found: Vec<&str> = router
        .matches("GET", "/a/1")
        .into_iter()
        .map(|(r, _)| *r.handler())
        .collect();
    assert_eq!(found, ["first", "second"]);

    let (route, _) = router.find("HEAD", "/a/1").unwrap();
    assert_eq!(*route.handler(), "second");
}

#[test]
fn router_is_shareable_once_built() {
    let mut router: Router = Router::new();
    router.get("/ping", |_: &Captures<'_>| {});
    let router = Arc::new(router);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let router = Arc::clone(&router);
            std::thread::spawn(move || router.execute_all("GET", "/ping").is_some())
        })
        .collect();

    for h in handles {
        assert!(h.join().unwrap());
    }
}
