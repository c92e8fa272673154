use colora_lib::{parse, Theme};
use proptest::prelude::*;

fn selector() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[.#]?[a-z][a-z0-9-]{0,12}").expect("regex")
}

fn value() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9#.]{1,10}").expect("regex")
}

proptest! {
    #[test]
    fn add_selector_is_idempotent_and_monotone(selectors in proptest::collection::vec(selector(), 0..32)) {
        let mut theme = Theme::new("prop", "prop.css");
        let mut previous = 0;
        for s in &selectors {
            theme.add_selector(s);
            let once = theme.selector_count();
            theme.add_selector(s);
            prop_assert_eq!(theme.selector_count(), once);
            prop_assert!(once >= previous && once <= previous + 1);
            previous = once;
        }
    }

    #[test]
    fn last_write_wins(s in selector(), property in "[a-z-]{1,12}", first in value(), second in value()) {
        let mut theme = Theme::new("prop", "prop.css");
        theme.add_selector(&s);
        theme.set_declaration(&s, &property, &first).unwrap();
        theme.set_declaration(&s, &property, &second).unwrap();
        prop_assert_eq!(theme.get_declaration(&property, &s), Some(second.as_str()));
        prop_assert_eq!(theme.declaration_count(), 1);
    }

    #[test]
    fn shared_block_selectors_stay_independent(
        selectors in proptest::collection::hash_set(selector(), 2..6),
        initial in value(),
        changed in value(),
    ) {
        let selectors: Vec<String> = selectors.into_iter().collect();
        let css = format!("{} {{ color: {}; }}", selectors.join(", "), initial);
        let mut theme = Theme::new("prop", "prop.css");
        prop_assert!(parse(&css, &mut theme).ok());

        theme.set_declaration(&selectors[0], "color", &changed).unwrap();
        prop_assert_eq!(theme.get_declaration("color", &selectors[0]), Some(changed.as_str()));
        for other in &selectors[1..] {
            prop_assert_eq!(theme.get_declaration("color", other), Some(initial.as_str()));
        }
    }

    #[test]
    fn unknown_selector_is_not_found(registered in selector(), queried in selector()) {
        prop_assume!(registered != queried);
        let mut theme = Theme::new("prop", "prop.css");
        theme.add_selector(&registered);
        prop_assert!(theme.get_declarations_for_selector(&queried).is_none());
        prop_assert!(theme.set_declaration(&queried, "color", "red").is_err());
        prop_assert!(theme.get_declarations_for_selector(&registered).is_some_and(|d| d.is_empty()));
    }
}
