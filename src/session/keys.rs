//! Keyboard mapping for the calculator session.

use crate::calculator::Operation;

/// A UI action a key press maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Digit or decimal point
    Input(char),
    /// Operator button
    Operator(Operation),
    /// `=` button
    Equals,
    /// `C` button
    Clear,
    /// `⌫` button
    Backspace,
}

impl KeyAction {
    /// Maps a key name (as in a DOM `KeyboardEvent.key`) to an action.
    pub fn from_key(key: &str) -> Option<Self> {
        let action = match key {
            "+" => KeyAction::Operator(Operation::Add),
            "-" => KeyAction::Operator(Operation::Subtract),
            "*" => KeyAction::Operator(Operation::Multiply),
            "/" => KeyAction::Operator(Operation::Divide),
            "Enter" | "=" => KeyAction::Equals,
            "Escape" => KeyAction::Clear,
            "Backspace" => KeyAction::Backspace,
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_digit() || c == '.' => KeyAction::Input(c),
                    _ => return None,
                }
            }
        };
        Some(action)
    }
}
