use super::super::super::messages::Message;
use super::super::super::state::App;
use iced::keyboard::{Key, Modifiers, key};

impl App {
    pub(super) fn shortcut_message_for_key(
        &self,
        key: Key,
        modifiers: Modifiers,
    ) -> Option<Message> {
        let pressed = match key.as_ref() {
            Key::Named(key::Named::ArrowRight) => "arrowright".to_string(),
            Key::Named(key::Named::ArrowLeft) => "arrowleft".to_string(),
            Key::Named(key::Named::Home) => "home".to_string(),
            Key::Named(key::Named::End) => "end".to_string(),
            Key::Named(key::Named::Space) => "space".to_string(),
            Key::Character(ch) => ch.to_ascii_lowercase(),
            _ => return None,
        };

        if Self::shortcut_matches(&self.config.key_next, "arrowright", &pressed, modifiers) {
            Some(Message::Next)
        } else if Self::shortcut_matches(
            &self.config.key_previous,
            "arrowleft",
            &pressed,
            modifiers,
        ) {
            Some(Message::Previous)
        } else if Self::shortcut_matches(&self.config.key_first, "home", &pressed, modifiers) {
            Some(Message::DotPressed(0))
        } else if Self::shortcut_matches(&self.config.key_last, "end", &pressed, modifiers) {
            Some(Message::DotPressed(self.carousel.len().saturating_sub(1)))
        } else if Self::shortcut_matches(&self.config.key_quit, "q", &pressed, modifiers) {
            Some(Message::Quit)
        } else {
            None
        }
    }

    pub(super) fn shortcut_matches(
        raw: &str,
        fallback: &str,
        pressed: &str,
        modifiers: Modifiers,
    ) -> bool {
        let normalized = Self::normalize_shortcut_token(raw, fallback);

        let mut required_ctrl = false;
        let mut required_alt = false;
        let mut required_logo = false;
        let mut required_shift = false;
        let mut required_key: Option<&str> = None;

        for token in normalized
            .split('+')
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            match token {
                "ctrl" | "control" => required_ctrl = true,
                "alt" => required_alt = true,
                "logo" | "meta" | "super" | "cmd" | "command" => required_logo = true,
                "shift" => required_shift = true,
                key => required_key = Some(key),
            }
        }

        let required_key = required_key.unwrap_or(fallback);
        if pressed != required_key {
            return false;
        }

        modifiers.control() == required_ctrl
            && modifiers.alt() == required_alt
            && modifiers.logo() == required_logo
            && modifiers.shift() == required_shift
    }

    pub(super) fn normalize_shortcut_token(raw: &str, fallback: &str) -> String {
        let normalized = raw.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            return fallback.to_string();
        }
        normalized
            .split('+')
            .map(|token| match token.trim() {
                "spacebar" => "space",
                "right" => "arrowright",
                "left" => "arrowleft",
                other => other,
            })
            .collect::<Vec<_>>()
            .join("+")
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::super::state::test_support::build_test_app;
    use super::*;

    #[test]
    fn short_arrow_names_are_accepted() {
        assert_eq!(App::normalize_shortcut_token(" Right ", "x"), "arrowright");
        assert_eq!(App::normalize_shortcut_token("ArrowLeft", "x"), "arrowleft");
        assert_eq!(App::normalize_shortcut_token("Shift+Left", "x"), "shift+arrowleft");
    }

    #[test]
    fn blank_binding_uses_fallback() {
        assert!(App::shortcut_matches("", "q", "q", Modifiers::empty()));
    }

    #[test]
    fn rejects_unexpected_extra_modifier() {
        assert!(!App::shortcut_matches(
            "arrowright",
            "x",
            "arrowright",
            Modifiers::SHIFT,
        ));
        assert!(App::shortcut_matches(
            "ctrl+q",
            "q",
            "q",
            Modifiers::CTRL
        ));
    }

    #[test]
    fn arrow_keys_map_to_navigation() {
        let app = build_test_app(4);
        assert!(matches!(
            app.shortcut_message_for_key(
                Key::Named(key::Named::ArrowRight),
                Modifiers::empty()
            ),
            Some(Message::Next)
        ));
        assert!(matches!(
            app.shortcut_message_for_key(Key::Named(key::Named::End), Modifiers::empty()),
            Some(Message::DotPressed(3))
        ));
        assert!(
            app.shortcut_message_for_key(Key::Named(key::Named::Tab), Modifiers::empty())
                .is_none()
        );
    }
}
