#[macro_export]
macro_rules! http_matcher {
    {@entry $matcher:expr, GET, $pattern:expr, $data:expr} => {
        $matcher.insert($crate::Method::GET, $pattern, $data)
    };
    {@entry $matcher:expr, POST, $pattern:expr, $data:expr} => {
        $matcher.insert($crate::Method::POST, $pattern, $data)
    };
    {@entry $matcher:expr, PUT, $pattern:expr, $data:expr} => {
        $matcher.insert($crate::Method::PUT, $pattern, $data)
    };
    {@entry $matcher:expr, DELETE, $pattern:expr, $data:expr} => {
        $matcher.insert($crate::Method::DELETE, $pattern, $data)
    };
    {@entry $matcher:expr, HEAD, $pattern:expr, $data:expr} => {
        $matcher.insert($crate::Method::HEAD, $pattern, $data)
    };
    {@entry $matcher:expr, OPTIONS, $pattern:expr, $data:expr} => {
        $matcher.insert($crate::Method::OPTIONS, $pattern, $data)
    };
    {@entry $matcher:expr, CONNECT, $pattern:expr, $data:expr} => {
        $matcher.insert($crate::Method::CONNECT, $pattern, $data)
    };
    {@entry $matcher:expr, PATCH, $pattern:expr, $data:expr} => {
        $matcher.insert($crate::Method::PATCH, $pattern, $data)
    };
    {@entry $matcher:expr, TRACE, $pattern:expr, $data:expr} => {
        $matcher.insert($crate::Method::TRACE, $pattern, $data)
    };

    {$($method:tt $pattern:expr => $data:expr),+ $(,)?} => {{
        let mut __matcher = $crate::HttpMatcher::new();
        $($crate::http_matcher!(@entry __matcher, $method, $pattern, $data);)+
        __matcher
    }};
}
