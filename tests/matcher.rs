use nuclear_matcher::{CompileError, Matcher, Params};

use std::sync::Arc;
use std::thread;

#[test]
fn matcher_cases() {
    let cases: &[(&str, &str, &[(&str, &str)])] = &[
        ("/:first", "/ok", &[("first", "ok")]),
        ("/:first/", "/ok/", &[("first", "ok")]),
        (
            "/:first/:second",
            "/ok/second",
            &[("first", "ok"), ("second", "second")],
        ),
        (
            "/:first(/:second)",
            "/ok/second",
            &[("first", "ok"), ("second", "second")],
        ),
        ("/:first(/:second)", "/ok", &[("first", "ok")]),
        ("/users/:id", "/users/scrooge-mc-duck", &[("id", "scrooge-mc-duck")]),
        ("/users/:id", "/users/47", &[("id", "47")]),
        (
            "/schools/:schoolId/teachers/:teacherId",
            "/schools/richland/teachers/47",
            &[("schoolId", "richland"), ("teacherId", "47")],
        ),
        ("/random/*", "/random/something/stuff", &[("path", "something/stuff")]),
        ("/*", "/sdfasfas", &[("path", "sdfasfas")]),
    ];

    for &(pattern, url, params) in cases.iter() {
        let matcher = Matcher::new(vec![(pattern, 1_usize)]);
        let m = match matcher.find(url).unwrap() {
            Some(m) => m,
            None => panic!("no match: pattern = {:?}, url = {:?}", pattern, url),
        };
        assert_eq!(*m.value(), 1);
        assert_eq!(m.url(), url);
        assert_eq!(m.pattern(), pattern);
        assert_eq!(&**m.params(), params, "pattern = {:?}", pattern);
    }
}

#[test]
fn matcher_mismatch_cases() {
    let cases: &[(&str, &str)] = &[
        ("/:first/:second", "/ok"),
        ("/:first/", "/ok"),
        ("/:first/:second", "/ok/"),
        ("/users/:id", "/something-else"),
        ("/random/*", "/random/"),
    ];

    for &(pattern, url) in cases.iter() {
        let matcher = Matcher::new(vec![(pattern, ())]);
        let ret = matcher.find(url).unwrap();
        assert!(
            ret.is_none(),
            "unexpected match: pattern = {:?}, url = {:?}, ret = {:?}",
            pattern,
            url,
            ret
        );
    }
}

#[test]
fn matcher_absent_optional_is_omitted() {
    let matcher = Matcher::new(vec![("/:first(/:second)", ())]);
    let m = matcher.find("/ok").unwrap().unwrap();
    assert_eq!(m.params().get("first"), Some("ok"));
    assert_eq!(m.params().get("second"), None);
    assert!(!m.params().contains("second"));
    assert_eq!(m.params().len(), 1);
}

#[test]
fn matcher_static_patterns() {
    let matcher = Matcher::new(vec![("/a.b/c+d", 1), ("/plain", 2)]);

    assert_eq!(*matcher.find("/a.b/c+d").unwrap().unwrap().value(), 1);
    assert!(matcher.find("/aXb/cd").unwrap().is_none());
    assert!(matcher.find("/a.b/c+d/").unwrap().is_none());

    assert_eq!(*matcher.find("/plain").unwrap().unwrap().value(), 2);
    assert!(matcher.find("/plain/").unwrap().is_none());
    assert!(matcher.find("/plai").unwrap().is_none());
    assert!(matcher.find("/Plain").unwrap().is_none());
}

#[test]
fn matcher_query_string() {
    let matcher = Matcher::new(vec![("/users/:id", ()), ("/about", ())]);

    let m = matcher.find("/users/47?tab=posts&x=1").unwrap().unwrap();
    assert_eq!(m.params().get("id"), Some("47"));
    assert_eq!(m.query(), Some("tab=posts&x=1"));
    assert_eq!(m.url(), "/users/47?tab=posts&x=1");

    let m = matcher.find("/about?").unwrap().unwrap();
    assert_eq!(m.pattern(), "/about");
    assert_eq!(m.query(), Some(""));

    let m = matcher.find("/about").unwrap().unwrap();
    assert_eq!(m.query(), None);
    assert!(m.params().is_empty());
}

#[test]
fn matcher_segment_never_spans_separators() {
    let matcher = Matcher::new(vec![("/:name", ())]);
    for url in &["/a/b", "/a?b/c", "/", "//"] {
        if let Some(m) = matcher.find(url).unwrap() {
            let v = m.params().get("name").unwrap();
            assert!(!v.contains('/') && !v.contains('?'), "url = {:?}", url);
        }
    }
    assert!(matcher.find("/a/b").unwrap().is_none());
    assert!(matcher.find("/").unwrap().is_none());
}

#[test]
fn matcher_first_match_wins() {
    let matcher: Matcher<usize> = vec![
        ("/users/:id", 1),
        ("/users/me", 2),
        ("/*", 3),
    ]
    .into();

    let m = matcher.find("/users/me").unwrap().unwrap();
    assert_eq!(*m.value(), 1);
    assert_eq!(m.pattern(), "/users/:id");

    let m = matcher.find("/users").unwrap().unwrap();
    assert_eq!(*m.value(), 3);
    assert_eq!(m.params().get("path"), Some("users"));

    assert!(matcher.find("/").unwrap().is_none());
}

#[test]
fn matcher_reinsert_keeps_position() {
    let mut matcher: Matcher<usize> = Matcher::empty();
    matcher
        .insert("/a/:x", 1)
        .insert("/a/b", 2)
        .insert("/a/:x", 3);

    assert_eq!(matcher.len(), 2);
    assert_eq!(matcher.patterns().collect::<Vec<_>>(), ["/a/:x", "/a/b"]);
    assert_eq!(*matcher.find("/a/b").unwrap().unwrap().value(), 3);
}

#[test]
fn matcher_does_not_touch_input() {
    let routes = vec![("/users/:id", String::from("user")), ("/*", String::from("any"))];
    let before = format!("{:?}", routes);

    let matcher: Matcher<String> = routes.iter().cloned().collect();
    matcher.find("/users/1").unwrap();
    matcher.find("/x").unwrap();

    assert_eq!(format!("{:?}", routes), before);
}

#[test]
fn matcher_compile_error_surfaces_on_lookup() {
    let matcher = Matcher::new(vec![("/ok", 1), ("/broken(/:id", 2), ("/later", 3)]);

    // routes before the broken one still resolve
    assert_eq!(*matcher.find("/ok").unwrap().unwrap().value(), 1);

    let err = matcher.find("/later").unwrap_err();
    assert!(matches!(err, CompileError::UnbalancedGroup { .. }));
    assert_eq!(err.pattern(), "/broken(/:id");

    // not cached, reported again
    assert!(matcher.find("/later").is_err());
    assert!(matcher.compile_all().is_err());
}

#[test]
fn matcher_try_insert() {
    let mut matcher: Matcher<usize> = Matcher::default();
    assert!(matcher.try_insert("/u/:id", 1).is_ok());
    assert!(matcher.try_insert("/u/(:id", 2).is_err());
    assert!(matcher.try_insert("/*/*", 3).is_err());
    assert_eq!(matcher.len(), 1);
    assert!(matcher.compile_all().is_ok());

    matcher.clear();
    assert!(matcher.is_empty());
    assert!(matcher.find("/u/1").unwrap().is_none());
}

#[test]
fn matcher_dispatch() {
    fn show(ctx: &str, params: Params<'_>) -> String {
        format!("{}:{}", ctx, params.get("id").unwrap_or("-"))
    }
    fn list(ctx: &str, _: Params<'_>) -> String {
        format!("{}:list", ctx)
    }

    let mut matcher: Matcher<fn(&str, Params<'_>) -> String> = Matcher::empty();
    matcher.insert("/users(/:id)", show).insert("/posts", list);

    assert_eq!(
        matcher.dispatch("/users/7", "state").unwrap(),
        Some(String::from("state:7"))
    );
    assert_eq!(
        matcher.dispatch("/users", "state").unwrap(),
        Some(String::from("state:-"))
    );
    assert_eq!(
        matcher.dispatch("/posts", "s").unwrap(),
        Some(String::from("s:list"))
    );
    assert_eq!(matcher.dispatch("/nope", "s").unwrap(), None);
}

#[test]
fn matcher_params_parse() {
    let matcher = Matcher::new(vec![("/page/:n", ())]);
    let m = matcher.find("/page/12").unwrap().unwrap();
    assert_eq!(m.params().parse::<u32>("n"), Some(Ok(12)));
    assert!(m.params().parse::<u32>("missing").is_none());

    let m = matcher.find("/page/x").unwrap().unwrap();
    assert!(m.params().parse::<u32>("n").unwrap().is_err());

    let map = m.into_params().to_map();
    assert_eq!(map.get("n").map(String::as_str), Some("x"));
}

#[test]
fn matcher_concurrent_first_use() {
    let matcher: Arc<Matcher<usize>> = Arc::new(
        (0..32)
            .map(|i| (format!("/r{}/:id", i), i))
            .collect(),
    );

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let matcher = Arc::clone(&matcher);
            thread::spawn(move || {
                for i in (0..32).rev() {
                    let url = format!("/r{}/x", i);
                    let m = matcher.find(&url).unwrap().unwrap();
                    assert_eq!(*m.value(), i);
                    assert_eq!(m.params().get("id"), Some("x"));
                }
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }
}

#[test]
fn matcher_oversized_rule_surfaces_on_lookup() {
    let pattern: String = (0..200_000).map(|i| format!("/:p{}", i)).collect();
    let matcher = Matcher::new(vec![("/ok", 1), (pattern.as_str(), 2)]);

    assert_eq!(*matcher.find("/ok").unwrap().unwrap().value(), 1);

    let err = matcher.find("/p0").unwrap_err();
    assert!(matches!(err, CompileError::Regex { .. }));
    assert_eq!(err.pattern(), pattern);
}

#[test]
fn matcher_try_insert_replaces_compiled_route() {
    let mut matcher: Matcher<usize> = Matcher::empty();
    matcher.insert("/a/:x", 1).insert("/b", 2);
    matcher.try_insert("/a/:x", 3).unwrap();

    assert_eq!(matcher.patterns().collect::<Vec<_>>(), ["/a/:x", "/b"]);
    let m = matcher.find("/a/y").unwrap().unwrap();
    assert_eq!(*m.value(), 3);
    assert_eq!(m.params().get("x"), Some("y"));

    // lookup on an owned url
    let url = String::from("/b");
    let pattern = {
        let m = matcher.find(&url).unwrap().unwrap();
        m.pattern()
    };
    assert_eq!(pattern, "/b");
}
