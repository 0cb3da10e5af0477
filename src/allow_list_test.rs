use super::*;

mod new {
    use super::*;

    #[test]
    fn should_keep_insertion_order_when_origins_are_distinct() {
        // Arrange & Act
        let list = AllowList::new(["https://b.test", "https://a.test"]);

        // Assert
        let origins: Vec<&str> = list.iter().map(String::as_str).collect();
        assert_eq!(origins, vec!["https://b.test", "https://a.test"]);
    }

    #[test]
    fn should_drop_duplicates_when_origin_repeats_then_keep_first_position() {
        // Arrange & Act
        let list = AllowList::new([
            "http://localhost:3000",
            "https://app.test",
            "http://localhost:3000",
        ]);

        // Assert
        assert_eq!(list.len(), 2);
        assert_eq!(
            list.iter().next().map(String::as_str),
            Some("http://localhost:3000")
        );
    }

    #[test]
    fn should_trim_whitespace_and_skip_blank_entries() {
        // Arrange & Act
        let list = AllowList::new(["  https://app.test ", "", "   "]);

        // Assert
        assert_eq!(list.len(), 1);
        assert!(list.contains("https://app.test"));
    }

    #[test]
    fn should_be_empty_when_iterator_is_empty() {
        // Arrange
        let input: [&str; 0] = [];

        // Act
        let list = AllowList::new(input);

        // Assert
        assert!(list.is_empty());
    }
}

mod contains {
    use super::*;

    #[test]
    fn should_match_exact_origin() {
        let list = AllowList::new(["https://app.test"]);

        assert!(list.contains("https://app.test"));
    }

    #[test]
    fn should_not_match_when_case_differs() {
        let list = AllowList::new(["https://app.test"]);

        assert!(!list.contains("https://APP.test"));
    }

    #[test]
    fn should_not_match_subdomain_or_other_scheme() {
        let list = AllowList::new(["https://app.test"]);

        assert!(!list.contains("https://evil.app.test"));
        assert!(!list.contains("http://app.test"));
        assert!(!list.contains("//app.test"));
    }

    #[test]
    fn should_not_match_when_trailing_slash_present() {
        let list = AllowList::new(["https://app.test"]);

        assert!(!list.contains("https://app.test/"));
    }
}

mod oversized_origin {
    use super::*;

    #[test]
    fn should_drop_entries_longer_than_origin_limit() {
        // Arrange
        let oversized = format!("https://{}.test", "a".repeat(MAX_ORIGIN_LENGTH));

        // Act
        let list = AllowList::new([oversized.as_str(), "https://app.test"]);

        // Assert
        assert!(!list.contains(&oversized));
        assert_eq!(list.len(), 1);
        assert_eq!(list.oversized_origin(), Some(oversized.len()));
    }

    #[test]
    fn should_keep_entry_exactly_at_origin_limit() {
        let origin = format!("https://{}", "a".repeat(MAX_ORIGIN_LENGTH - "https://".len()));

        let list = AllowList::new([origin.as_str()]);

        assert!(list.contains(&origin));
        assert!(list.oversized_origin().is_none());
    }
}

mod has_wildcard {
    use super::*;

    #[test]
    fn should_detect_literal_star_entry() {
        let list: AllowList = ["https://app.test", " * "].into_iter().collect();

        assert!(list.has_wildcard());
    }

    #[test]
    fn should_not_store_star_as_matchable_origin() {
        // Arrange & Act
        let list = AllowList::new(["*", "https://app.test"]);

        // Assert
        assert!(!list.contains("*"));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn should_return_false_when_only_concrete_origins() {
        let list = AllowList::new(["https://app.test"]);

        assert!(!list.has_wildcard());
    }
}
