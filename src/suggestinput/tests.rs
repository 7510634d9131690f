//! Tests for the suggest input component.

use super::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suggest::FilterConfig;
    use bubbletea_rs::{KeyMsg, Msg};
    use crossterm::event::{KeyCode, KeyModifiers};

    fn strip(s: &str) -> String {
        lipgloss_extras::lipgloss::strip_ansi(s)
    }

    fn key(code: KeyCode) -> Msg {
        Box::new(KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        }) as Msg
    }

    fn key_msg(code: KeyCode) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn type_text(input: &mut Model, text: &str) {
        for ch in text.chars() {
            input.update(key(KeyCode::Char(ch)));
        }
    }

    fn fruits() -> Model {
        new(vec!["apple".into(), "banana".into(), "cherry".into()])
    }

    #[test]
    fn test_new_default_values() {
        let input = fruits();
        assert_eq!(input.prompt, "> ");
        assert_eq!(input.value(), "");
        assert_eq!(input.position(), 0);
        assert!(!input.focused());
        assert!(!input.is_suggesting());
        assert!(!input.restriction_error());
        assert_eq!(input.max_visible_choices, 0);
    }

    #[test]
    fn test_focus_and_blur() {
        let mut input = fruits();
        std::mem::drop(input.focus());
        assert!(input.focused());
        assert!(input.is_suggesting());

        input.blur();
        assert!(!input.focused());
        assert!(!input.is_suggesting());
    }

    #[test]
    fn test_keys_ignored_when_unfocused() {
        let mut input = fruits();
        assert!(input.update(key(KeyCode::Char('a'))).is_none());
        assert_eq!(input.value(), "");
        assert!(!input.is_suggesting());
    }

    #[test]
    fn test_typing_filters_and_moves_cursor() {
        let mut input =
            fruits().with_filter(Some(FilterConfig::new().with_case_insensitive(true)));
        input.focus();
        type_text(&mut input, "AN");
        assert_eq!(input.value(), "AN");
        assert_eq!(input.position(), 2);
        let available: Vec<&str> = input
            .choices()
            .iter()
            .filter(|c| !c.is_filtered_out())
            .map(|c| c.value())
            .collect();
        assert_eq!(available, vec!["banana"]);
        assert_eq!(input.active_value(), None);
    }

    #[test]
    fn test_down_then_enter_commits() {
        let mut input =
            fruits().with_filter(Some(FilterConfig::new().with_case_insensitive(true)));
        input.focus();
        type_text(&mut input, "AN");
        input.update(key(KeyCode::Down));
        assert_eq!(input.active_value(), Some("banana"));

        let cmd = input.update(key(KeyCode::Enter));
        assert!(cmd.is_some());
        assert_eq!(input.value(), "banana");
        assert_eq!(input.position(), 6);
        assert!(!input.is_suggesting());
    }

    #[test]
    fn test_only_commits_produce_a_command() {
        let mut input = fruits();
        input.focus();
        assert!(input.update(key(KeyCode::Char('x'))).is_none());
        assert!(input.update(key(KeyCode::Backspace)).is_none());
        assert!(input.update(key(KeyCode::Down)).is_none());
        assert_eq!(input.active_value(), Some("apple"));
        assert!(input.update(key(KeyCode::Enter)).is_some());
        assert_eq!(input.value(), "apple");
    }

    #[test]
    fn test_enter_without_selection_closes() {
        let mut input = fruits();
        input.focus();
        type_text(&mut input, "ban");
        let response = input.handle_key(&key_msg(KeyCode::Enter));
        assert!(response.prevent_default);
        assert_eq!(input.value(), "ban");
        assert!(!input.is_suggesting());

        let response = input.handle_key(&key_msg(KeyCode::Enter));
        assert!(!response.prevent_default);
    }

    #[test]
    fn test_tab_commits_selection() {
        let mut input = fruits();
        input.focus();
        input.update(key(KeyCode::Up));
        let response = input.handle_key(&key_msg(KeyCode::Tab));
        assert!(response.prevent_default);
        assert_eq!(input.value(), "cherry");
    }

    #[test]
    fn test_escape_closes() {
        let mut input = fruits();
        input.focus();
        let response = input.handle_key(&key_msg(KeyCode::Esc));
        assert!(response.prevent_default);
        assert!(!input.is_suggesting());
        assert!(input.focused());

        type_text(&mut input, "c");
        assert!(input.is_suggesting());
    }

    #[test]
    fn test_editing_keys() {
        let mut input = fruits();
        input.focus();
        type_text(&mut input, "chery");
        input.update(key(KeyCode::Left));
        input.update(key(KeyCode::Left));
        type_text(&mut input, "r");
        assert_eq!(input.value(), "cherry");
        assert_eq!(input.position(), 4);
        assert_eq!(input.active_value(), Some("cherry"));

        input.update(key(KeyCode::Left));
        input.update(key(KeyCode::Backspace));
        assert_eq!(input.value(), "chrry");
        assert_eq!(input.position(), 2);
        type_text(&mut input, "e");
        assert_eq!(input.value(), "cherry");
        assert_eq!(input.position(), 3);

        input.update(key(KeyCode::Home));
        assert_eq!(input.position(), 0);
        input.update(key(KeyCode::Delete));
        assert_eq!(input.value(), "herry");
        assert_eq!(input.active_value(), None);

        input.update(key(KeyCode::End));
        input.update(key(KeyCode::Backspace));
        assert_eq!(input.value(), "herr");
        assert_eq!(input.position(), 4);
    }

    #[test]
    fn test_control_characters_are_not_inserted() {
        let mut input = fruits();
        input.focus();
        input.update(Box::new(KeyMsg {
            key: KeyCode::Char('x'),
            modifiers: KeyModifiers::CONTROL,
        }) as Msg);
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_pointer_click_commits_after_blur() {
        let mut input = fruits();
        input.focus();
        input.update(ChoicePressMsg(1).into());
        input.blur();
        assert!(input.is_suggesting());

        let cmd = input.update(ChoiceReleaseMsg(Some(1)).into());
        assert!(cmd.is_some());
        assert_eq!(input.value(), "banana");
        assert!(!input.is_suggesting());
    }

    #[test]
    fn test_pointer_release_elsewhere_cancels() {
        let mut input = fruits();
        input.focus();
        input.update(ChoicePressMsg(1).into());
        input.blur();
        let cmd = input.update(ChoiceReleaseMsg(Some(2)).into());
        assert!(cmd.is_none());
        assert_eq!(input.value(), "");
        assert!(!input.is_suggesting());
    }

    #[test]
    fn test_hover_highlights() {
        let mut input = fruits();
        input.focus();
        input.update(ChoiceHoverMsg(2).into());
        assert_eq!(input.active_value(), Some("cherry"));
    }

    #[test]
    fn test_restriction_blocks_submit() {
        let mut input = fruits().with_restrict(true);
        assert!(input.restriction_error());
        input.focus();
        type_text(&mut input, "mango");
        input.blur();
        assert!(input.restriction_error());
        assert!(!input.submit());
        assert!(input.focused());
        assert!(input.is_suggesting());

        input.set_value("apple");
        assert!(!input.restriction_error());
        assert!(!input.submit());
        assert!(input.submit());
    }

    #[test]
    fn test_view_closed() {
        let mut input = fruits();
        input.set_placeholder("fruit");
        assert_eq!(strip(&input.view()), "> fruit");

        input.set_value("apple");
        assert_eq!(strip(&input.view()), "> apple");
    }

    #[test]
    fn test_view_lists_available_choices() {
        let mut input = fruits().with_filter(Some(FilterConfig::new()));
        input.focus();
        type_text(&mut input, "an");
        input.update(key(KeyCode::Down));
        let view = strip(&input.view());
        let lines: Vec<&str> = view.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "> an ");
        assert_eq!(lines[1], "> banana");
    }

    #[test]
    fn test_view_marks_only_active_choice() {
        let mut input = fruits();
        input.focus();
        input.update(key(KeyCode::Down));
        let view = strip(&input.view());
        let lines: Vec<&str> = view.lines().collect();
        assert_eq!(lines[1..], ["> apple", "  banana", "  cherry"]);
    }

    #[test]
    fn test_view_window_follows_highlight() {
        let mut input = fruits();
        input.set_max_visible_choices(2);
        input.focus();
        input.update(key(KeyCode::Up));
        let view = strip(&input.view());
        let lines: Vec<&str> = view.lines().collect();
        assert_eq!(lines[1..], ["  banana", "> cherry"]);
        assert_eq!(input.choice_at_line(0), Some(1));
        assert_eq!(input.choice_at_line(1), Some(2));
        assert_eq!(input.choice_at_line(2), None);
    }

    #[test]
    fn test_choice_at_line_when_closed() {
        let input = fruits();
        assert_eq!(input.choice_at_line(0), None);
    }
}
