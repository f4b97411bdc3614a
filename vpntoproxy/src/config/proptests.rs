//! Property-based tests for key derivation and environment parsing.

use super::environment::EnvironmentConfig;
use super::naming::{env_key, flag_key, to_snake_case, FieldKeys};
use proptest::prelude::*;

// Word-capitalized identifiers such as "Docker", "ImageName" or "TestURL".
fn capitalized_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[A-Z][a-z0-9]{0,6}|[A-Z]{2,4}", 1..=4).prop_map(|words| words.concat())
}

proptest! {
    #[test]
    fn prop_flag_key_is_lowercase(group in capitalized_strategy(), field in capitalized_strategy()) {
        let key = flag_key(&group, &field);
        prop_assert!(!key.chars().any(char::is_uppercase), "{} has capitals", key);
    }

    #[test]
    fn prop_env_key_is_uppercase_flag_key(group in capitalized_strategy(), field in capitalized_strategy()) {
        prop_assert_eq!(env_key(&group, &field), flag_key(&group, &field).to_uppercase());
    }

    #[test]
    fn prop_removing_separators_gives_lowercased_input(input in capitalized_strategy()) {
        let snake = to_snake_case(&input);
        prop_assert_eq!(snake.replace('_', ""), input.to_lowercase());
    }

    #[test]
    fn prop_no_leading_or_double_separator(input in capitalized_strategy()) {
        let snake = to_snake_case(&input);
        prop_assert!(!snake.starts_with('_'));
        prop_assert!(!snake.contains("__"));
    }

    #[test]
    fn prop_deterministic(group in capitalized_strategy(), field in capitalized_strategy()) {
        prop_assert_eq!(FieldKeys::new(&group, &field), FieldKeys::new(&group, &field));
    }

    #[test]
    fn prop_single_word_group_prefixes_key(group in "[A-Z][a-z]{1,8}", field in capitalized_strategy()) {
        let key = flag_key(&group, &field);
        let expected_prefix = format!("{}_", group.to_lowercase());
        prop_assert!(key.starts_with(&expected_prefix), "{} lacks prefix {}", key, expected_prefix);
    }

    #[test]
    fn prop_only_exact_true_is_true(s in "\\PC{0,8}") {
        prop_assert_eq!(EnvironmentConfig::parse_bool(&s), s == "true");
    }
}
