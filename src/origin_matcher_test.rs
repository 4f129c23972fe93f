use super::*;

fn pattern(value: &str) -> OriginPattern {
    OriginPattern::parse(value).expect("valid origin pattern")
}

fn matcher(values: &[&str]) -> OriginMatcher {
    let mut matcher = OriginMatcher::new();
    for value in values {
        assert!(matcher.insert(&pattern(value)), "duplicate {value}");
    }
    matcher
}

mod insert {
    use super::*;

    #[test]
    fn when_patterns_distinct_should_count_each_tier() {
        // Arrange & Act
        let matcher = matcher(&[
            "https://example.com",
            "https://example.com:8443",
            "http://example.com",
            "https://*.example.com",
        ]);

        // Assert
        assert_eq!(matcher.len(), 4);
        assert_eq!(matcher.exact_len(), 3);
        assert_eq!(matcher.wildcard_len(), 1);
        assert_eq!(matcher.scheme_len(Scheme::Http), 1);
        assert_eq!(matcher.scheme_len(Scheme::Https), 3);
        assert!(!matcher.is_empty());
    }

    #[test]
    fn when_exact_pattern_repeated_should_return_false() {
        // Arrange
        let mut matcher = matcher(&["https://example.com"]);

        // Act
        let inserted = matcher.insert(&pattern("https://example.com:443"));

        // Assert
        assert!(!inserted);
        assert_eq!(matcher.len(), 1);
    }

    #[test]
    fn when_wildcard_pattern_repeated_should_return_false() {
        // Arrange
        let mut matcher = matcher(&["https://*.example.com:*"]);

        // Act
        let inserted = matcher.insert(&pattern("https://*.EXAMPLE.com:*"));

        // Assert
        assert!(!inserted);
        assert_eq!(matcher.wildcard_len(), 1);
    }

    #[test]
    fn when_same_host_has_other_port_should_insert() {
        // Arrange
        let mut matcher = matcher(&["http://localhost:3000"]);

        // Act
        let inserted = matcher.insert(&pattern("http://localhost:4000"));

        // Assert
        assert!(inserted);
        assert_eq!(matcher.len(), 2);
    }

    #[test]
    fn when_collected_from_iterator_should_skip_duplicates() {
        // Arrange
        let patterns = [
            pattern("https://a.example"),
            pattern("https://a.example"),
            pattern("https://*.b.example"),
        ];

        // Act
        let matcher: OriginMatcher = patterns.iter().collect();

        // Assert
        assert_eq!(matcher.len(), 2);
    }
}

mod matches {
    use super::*;

    #[test]
    fn when_empty_should_match_nothing() {
        // Arrange
        let matcher = OriginMatcher::new();

        // Act & Assert
        assert!(matcher.is_empty());
        assert!(!matcher.matches(Scheme::Https, "example.com", None));
    }

    #[test]
    fn when_exact_host_listed_should_match_only_that_scheme() {
        // Arrange
        let matcher = matcher(&["https://jub0bs.com"]);

        // Act & Assert
        assert!(matcher.matches(Scheme::Https, "jub0bs.com", None));
        assert!(matcher.matches(Scheme::Https, "jub0bs.com", Some(443)));
        assert!(!matcher.matches(Scheme::Http, "jub0bs.com", None));
        assert!(!matcher.matches(Scheme::Https, "jub0bs.com", Some(8443)));
    }

    #[test]
    fn when_exact_host_has_port_set_should_match_each_port() {
        // Arrange
        let matcher = matcher(&["http://localhost:3000", "http://localhost:4000"]);

        // Act & Assert
        assert!(matcher.matches(Scheme::Http, "localhost", Some(3000)));
        assert!(matcher.matches(Scheme::Http, "localhost", Some(4000)));
        assert!(!matcher.matches(Scheme::Http, "localhost", Some(5000)));
        assert!(!matcher.matches(Scheme::Http, "localhost", None));
    }

    #[test]
    fn when_exact_host_allows_any_port_should_match_every_port() {
        // Arrange
        let matcher = matcher(&["http://localhost:*"]);

        // Act & Assert
        assert!(matcher.matches(Scheme::Http, "localhost", None));
        assert!(matcher.matches(Scheme::Http, "localhost", Some(9999)));
    }

    #[test]
    fn when_wildcard_listed_should_match_subdomains_at_any_depth() {
        // Arrange
        let matcher = matcher(&["https://*.example.com"]);

        // Act & Assert
        assert!(matcher.matches(Scheme::Https, "foo.example.com", None));
        assert!(matcher.matches(Scheme::Https, "foo.bar.example.com", None));
        assert!(!matcher.matches(Scheme::Https, "example.com", None));
        assert!(!matcher.matches(Scheme::Https, "com", None));
        assert!(!matcher.matches(Scheme::Https, "fooexample.com", None));
        assert!(!matcher.matches(Scheme::Https, "foo.example.org", None));
    }

    #[test]
    fn when_base_also_listed_exactly_should_match_base() {
        // Arrange
        let matcher = matcher(&["https://*.example.com", "https://example.com"]);

        // Act & Assert
        assert!(matcher.matches(Scheme::Https, "example.com", None));
        assert!(matcher.matches(Scheme::Https, "www.example.com", None));
    }

    #[test]
    fn when_nested_wildcards_listed_should_honour_each_port_rule() {
        // Arrange
        let matcher = matcher(&[
            "https://*.example.com",
            "https://*.api.example.com:8443",
        ]);

        // Act & Assert
        assert!(matcher.matches(Scheme::Https, "v1.api.example.com", Some(8443)));
        assert!(matcher.matches(Scheme::Https, "v1.api.example.com", None));
        assert!(matcher.matches(Scheme::Https, "api.example.com", None));
        assert!(!matcher.matches(Scheme::Https, "api.example.com", Some(8443)));
    }

    #[test]
    fn when_wildcard_has_port_should_require_it() {
        // Arrange
        let matcher = matcher(&["http://*.example.com:8080"]);

        // Act & Assert
        assert!(matcher.matches(Scheme::Http, "a.example.com", Some(8080)));
        assert!(!matcher.matches(Scheme::Http, "a.example.com", None));
        assert!(!matcher.matches(Scheme::Https, "a.example.com", Some(8080)));
    }

    #[test]
    fn when_host_is_pathologically_long_should_reject_without_match() {
        // Arrange
        let suffix = ".a".repeat(126);
        let first = format!("https://a{suffix}");
        let second = format!("https://b{suffix}");
        let matcher = matcher(&[first.as_str(), second.as_str()]);

        // Act & Assert
        assert!(matcher.matches(Scheme::Https, &format!("a{suffix}"), None));
        assert!(!matcher.matches(Scheme::Https, &format!("c{suffix}"), None));
    }

    #[test]
    fn when_many_patterns_listed_should_agree_with_linear_scan() {
        // Arrange
        let mut values = Vec::new();
        for i in 0..100 {
            values.push(format!("https://example{i}.com"));
            values.push(format!("https://example{i}.com:7070"));
            values.push(format!("https://*.example{i}.com"));
            values.push(format!("http://example{i}.com:*"));
        }
        let patterns: Vec<_> = values.iter().map(|value| pattern(value)).collect();
        let matcher: OriginMatcher = patterns.iter().collect();
        let candidates = [
            (Scheme::Https, "example42.com", None),
            (Scheme::Https, "example42.com", Some(7070)),
            (Scheme::Https, "example42.com", Some(7071)),
            (Scheme::Https, "deep.sub.example99.com", None),
            (Scheme::Https, "example100.com", None),
            (Scheme::Http, "example7.com", Some(1234)),
            (Scheme::Http, "sub.example7.com", None),
        ];

        // Act & Assert
        for (scheme, host, port) in candidates {
            let expected = patterns
                .iter()
                .any(|pattern| pattern.matches(scheme, host, port));
            assert_eq!(
                matcher.matches(scheme, host, port),
                expected,
                "{scheme}://{host}:{port:?}"
            );
        }
    }
}
