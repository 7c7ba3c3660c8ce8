// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Query input logic and state management.
//!
//! This module implements the query line: a text input component that is
//! focused with `/` and hands every keystroke to the managed input while it
//! has focus. The caller reads the value back after each handled event.

use crossterm::event::{Event, KeyCode};
use tui_input::{Input, backend::crossterm::EventHandler};

#[derive(Default)]
pub(crate) struct Prompt {
    active: bool,
    pub(crate) input: Input,
}

impl Prompt {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    pub(crate) fn value(&self) -> &str {
        self.input.value()
    }

    /// Returns `true` if the event was consumed.
    pub(crate) fn handle_event(&mut self, event: &Event) -> bool {
        let Event::Key(key_event) = event else {
            return false;
        };

        if !self.active {
            if key_event.code == KeyCode::Char('/') {
                self.active = true;
                return true;
            }
            return false;
        }

        match key_event.code {
            // Leaving the prompt keeps the query, the results stay filtered.
            KeyCode::Esc | KeyCode::Enter => {
                self.active = false;
            }

            // Delegate all other key events to the managed input component.
            _ => {
                self.input.handle_event(event);
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEvent;

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::from(code))
    }

    #[test]
    fn slash_focuses_then_keys_edit() {
        let mut prompt = Prompt::new();

        assert!(!prompt.handle_event(&key(KeyCode::Char('g'))));
        assert!(prompt.handle_event(&key(KeyCode::Char('/'))));
        assert!(prompt.active());

        for c in "git".chars() {
            assert!(prompt.handle_event(&key(KeyCode::Char(c))));
        }
        prompt.handle_event(&key(KeyCode::Backspace));
        assert_eq!(prompt.value(), "gi");
    }

    #[test]
    fn enter_and_escape_leave_the_query_in_place() {
        let mut prompt = Prompt::new();
        prompt.handle_event(&key(KeyCode::Char('/')));
        prompt.handle_event(&key(KeyCode::Char('x')));

        assert!(prompt.handle_event(&key(KeyCode::Enter)));
        assert!(!prompt.active());
        assert_eq!(prompt.value(), "x");

        prompt.handle_event(&key(KeyCode::Char('/')));
        prompt.handle_event(&key(KeyCode::Esc));
        assert!(!prompt.active());
        assert_eq!(prompt.value(), "x");
    }
}
