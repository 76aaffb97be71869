//! User-facing console messages
//!
//! These are the only strings a double-click user is expected to read, so they
//! bypass the logger and are written straight to the console. The binary
//! writes them to stderr, not stdout: they still show in the console window,
//! and stdout stays reserved for the delegate's own output.

/// Console language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    /// Russian, the language of the launched application
    #[default]
    Ru,
    /// English
    En,
}

impl Locale {
    /// Parse a locale tag such as `ru`, `en`, `en_US.UTF-8`; unknown tags yield `None`
    pub fn parse(tag: &str) -> Option<Self> {
        let lang = tag
            .trim()
            .split(['_', '-', '.'])
            .next()
            .unwrap_or_default()
            .to_lowercase();
        match lang.as_str() {
            "ru" => Some(Locale::Ru),
            "en" => Some(Locale::En),
            _ => None,
        }
    }
}

/// Fixed messages shown by the shim
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Interpreter missing from the search path
    InterpreterMissing,
    /// Delegate ended with a non-zero status
    DelegateFailed,
    /// Prompt printed while waiting for acknowledgment
    PausePrompt,
}

impl Message {
    /// Localized text
    pub fn text(self, locale: Locale) -> &'static str {
        // "3.9+" is advisory only, no version is checked
        match (self, locale) {
            (Message::InterpreterMissing, Locale::Ru) => {
                "Python не найден. Установите Python 3.9+ и убедитесь, что он добавлен в PATH."
            }
            (Message::InterpreterMissing, Locale::En) => {
                "Python was not found. Install Python 3.9+ and make sure it is on PATH."
            }
            (Message::DelegateFailed, Locale::Ru) => {
                "Лаунчер завершился с ошибкой. Проверьте сообщения выше."
            }
            (Message::DelegateFailed, Locale::En) => {
                "The launcher exited with an error. Review the output above."
            }
            (Message::PausePrompt, Locale::Ru) => "Нажмите Enter, чтобы продолжить...",
            (Message::PausePrompt, Locale::En) => "Press Enter to continue...",
        }
    }
}
