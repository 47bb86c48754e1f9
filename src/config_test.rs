use super::*;

mod parse_exclusion_paths {
    use super::*;

    #[test]
    fn when_value_is_only_whitespace_should_return_error() {
        // Arrange & Act
        let result = parse_exclusion_paths("   \t\n\r\n");

        // Assert
        let err = result.expect_err("whitespace-only value must be rejected");
        assert!(matches!(err, ConfigError::EmptyExclusionPaths));
        assert_eq!(
            err.to_string(),
            "When specified, exclusion-paths must have at least one value"
        );
    }

    #[test]
    fn when_rejected_should_name_the_parameter() {
        // Arrange & Act
        let err = parse_exclusion_paths(",").unwrap_err();

        // Assert
        assert_eq!(
            err.to_string(),
            format!(
                "When specified, {} must have at least one value",
                crate::constants::parameter::EXCLUSION_PATHS
            )
        );
    }

    #[test]
    fn when_value_is_empty_should_return_error() {
        // Arrange & Act
        let result = parse_exclusion_paths("");

        // Assert
        assert!(matches!(result, Err(ConfigError::EmptyExclusionPaths)));
    }

    #[test]
    fn when_value_is_only_commas_should_return_error() {
        // Arrange & Act
        let result = parse_exclusion_paths(", ,,");

        // Assert
        assert!(matches!(result, Err(ConfigError::EmptyExclusionPaths)));
    }

    #[test]
    fn when_values_separated_by_comma_should_split_them() {
        // Arrange & Act
        let paths = parse_exclusion_paths("one,two").unwrap();

        // Assert
        assert_eq!(&*paths, ["/one", "/two"]);
    }

    #[test]
    fn when_values_separated_by_whitespace_should_split_them() {
        // Arrange & Act
        let paths = parse_exclusion_paths("  one\n\ttwo   ").unwrap();

        // Assert
        assert_eq!(&*paths, ["/one", "/two"]);
    }

    #[test]
    fn when_single_value_surrounded_by_whitespace_should_return_it() {
        // Arrange & Act
        let paths = parse_exclusion_paths("  one\n\t   ").unwrap();

        // Assert
        assert_eq!(&*paths, ["/one"]);
    }

    #[test]
    fn when_value_already_has_slash_should_not_prepend_another() {
        // Arrange & Act
        let paths = parse_exclusion_paths("/one,two").unwrap();

        // Assert
        assert_eq!(&*paths, ["/one", "/two"]);
    }

    #[test]
    fn when_values_contain_empty_entries_should_skip_them() {
        // Arrange & Act
        let paths = parse_exclusion_paths("/one,,").unwrap();

        // Assert
        assert_eq!(&*paths, ["/one"]);
    }

    #[test]
    fn when_commas_and_whitespace_mixed_should_keep_input_order() {
        // Arrange & Act
        let paths = parse_exclusion_paths("c, /b ,\r\na").unwrap();

        // Assert
        assert_eq!(paths.into_inner(), vec!["/c", "/b", "/a"]);
    }
}

mod exclusion_paths_new {
    use super::*;

    #[test]
    fn when_iterator_empty_should_return_error() {
        // Arrange
        let empty: Vec<String> = Vec::new();

        // Act
        let result = ExclusionPaths::new(empty);

        // Assert
        assert!(matches!(result, Err(ConfigError::EmptyExclusionPaths)));
    }

    #[test]
    fn when_values_given_should_normalize_each_one() {
        // Arrange & Act
        let paths = ExclusionPaths::new([" api ", "/health", ""]).unwrap();

        // Assert
        assert_eq!(paths.len(), 2);
        assert_eq!(
            paths.iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["/api", "/health"]
        );
    }
}
