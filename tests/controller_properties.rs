//! Property tests for the suggestion controller.

use proptest::prelude::*;
use suggest_input::suggest::{Controller, Event, FilterConfig, Key};

fn choice_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-cA-C]{1,4}", 1..8)
}

fn filter_strategy() -> impl Strategy<Value = Option<FilterConfig>> {
    prop_oneof![
        Just(None),
        (any::<bool>(), any::<bool>()).prop_map(|(prefix, case_insensitive)| Some(
            FilterConfig::new()
                .with_prefix(prefix)
                .with_case_insensitive(case_insensitive)
        )),
    ]
}

fn expected_match(filter: Option<FilterConfig>, value: &str, text: &str) -> bool {
    let Some(filter) = filter else {
        return true;
    };
    if text.is_empty() {
        return true;
    }
    let (value, text) = if filter.case_insensitive {
        (value.to_lowercase(), text.to_lowercase())
    } else {
        (value.to_string(), text.to_string())
    };
    if filter.prefix {
        value.starts_with(&text)
    } else {
        value.contains(&text)
    }
}

fn active_count(c: &Controller) -> usize {
    c.choices().iter().filter(|ch| ch.is_active()).count()
}

proptest! {
    #[test]
    fn navigation_cycles_with_wraparound(choices in choice_strategy(), ups in any::<bool>(), steps in 1usize..20) {
        let mut c = Controller::new("", choices.clone(), None, false);
        c.focus();
        c.input("\u{1}");
        let n = choices.len();
        let key = if ups { Key::Up } else { Key::Down };
        for step in 0..steps {
            c.key(key);
            prop_assert_eq!(active_count(&c), 1);
            let expected = if ups { n - 1 - (step % n) } else { step % n };
            prop_assert_eq!(c.active_index(), Some(expected));
        }
    }

    #[test]
    fn filtering_is_consistent(
        choices in choice_strategy(),
        filter in filter_strategy(),
        text in "[a-cA-C]{0,3}",
    ) {
        let mut c = Controller::new("", choices, filter, false);
        c.focus();
        c.input(text.clone());
        for choice in c.choices() {
            prop_assert_eq!(
                !choice.is_filtered_out(),
                expected_match(filter, choice.value(), &text)
            );
            prop_assert!(!(choice.is_active() && choice.is_filtered_out()));
        }
    }

    #[test]
    fn exact_match_is_the_only_active(
        choices in choice_strategy(),
        filter in filter_strategy(),
        text in "[a-cA-C]{0,4}",
    ) {
        let mut c = Controller::new("", choices, filter, false);
        c.focus();
        c.input(text.clone());
        let exact = c.available().find(|(_, ch)| ch.value() == text).map(|(i, _)| i);
        prop_assert_eq!(c.active_index(), exact);
        prop_assert!(active_count(&c) <= 1);
    }

    #[test]
    fn commit_sets_value_and_closes(
        choices in choice_strategy(),
        restrict in any::<bool>(),
        downs in 1usize..10,
    ) {
        let mut c = Controller::new("", choices.clone(), None, restrict);
        c.focus();
        for _ in 0..downs {
            c.key(Key::Down);
        }
        let chosen = c.active_choice().map(|ch| ch.value().to_string());
        prop_assert!(chosen.is_some());
        c.key(Key::Enter);
        prop_assert_eq!(Some(c.value().to_string()), chosen);
        prop_assert!(!c.is_suggesting());
        prop_assert!(!c.restriction_error());
    }

    #[test]
    fn restriction_marker_tracks_value(
        choices in choice_strategy(),
        text in "[a-cA-C]{0,4}",
        suggesting in any::<bool>(),
    ) {
        let mut c = Controller::new("", choices.clone(), None, true);
        c.handle(Event::Focus);
        c.handle(Event::Input(text.clone()));
        c.handle(Event::Change);
        if !suggesting {
            c.handle(Event::Key(Key::Escape));
        }
        let invalid = !choices.contains(&text);
        prop_assert_eq!(c.restriction_error(), invalid);

        let response = c.handle(Event::Submit);
        if invalid {
            prop_assert!(response.prevent_default);
            prop_assert!(c.is_suggesting());
        } else {
            prop_assert_eq!(response.prevent_default, suggesting);
        }
    }
}
