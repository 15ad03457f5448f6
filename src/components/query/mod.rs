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

//! Search query input logic and state management.
//!
//! This module implements the submission half of the client: a text input
//! component that, when typing is finished and a non-empty query is
//! submitted, dispatches a single search command to the command worker. An
//! empty query dispatches nothing.

mod render;

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::actions::commands::AppCommand;

pub(crate) struct QueryBar {
    active: bool,
    pub(crate) input: Input,
}

impl QueryBar {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    /// Routes a terminal event through the query bar.
    ///
    /// Returns `true` when the event was consumed. While inactive only `/`
    /// is consumed, activating the bar; while active every key event is,
    /// with `Esc` deactivating and `Enter` submitting.
    pub(crate) fn handle_event(&mut self, event: Event, command_tx: &mut Sender<AppCommand>) -> bool {
        if self.active {
            match event {
                Event::Key(key_event) => {
                    match key_event.code {
                        KeyCode::Esc => {
                            self.active = false;
                            true
                        }

                        KeyCode::Enter => {
                            let query = self.input.value().trim();
                            if !query.is_empty() {
                                let _ = self.submit(query, command_tx);
                                self.input.reset();
                            }

                            true
                        }

                        _ => {
                            // Delegate all other key events to the managed
                            // input component.
                            self.input.handle_event(&event);
                            true
                        }
                    }
                }

                _ => false,
            }
        } else {
            match event {
                Event::Key(key_event) => {
                    match key_event.code {
                        KeyCode::Char('/') => {
                            self.active = true;
                            true
                        }

                        _ => false,
                    }
                }

                _ => false,
            }
        }
    }

    fn submit(&self, query: &str, command_tx: &mut Sender<AppCommand>) -> Result<()> {
        command_tx.send(AppCommand::Search(query.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_query(bar: &mut QueryBar, tx: &mut Sender<AppCommand>, query: &str) {
        for c in query.chars() {
            bar.handle_event(key(KeyCode::Char(c)), tx);
        }
    }

    #[test]
    fn submitting_a_query_dispatches_exactly_one_search() {
        let (mut tx, rx) = mpsc::channel();
        let mut bar = QueryBar::new();

        bar.handle_event(key(KeyCode::Char('/')), &mut tx);
        type_query(&mut bar, &mut tx, "taking the hobbits");
        bar.handle_event(key(KeyCode::Enter), &mut tx);

        match rx.try_recv() {
            Ok(AppCommand::Search(query)) => assert_eq!(query, "taking the hobbits"),
            other => panic!("expected a search command, got {other:?}"),
        }
        assert!(rx.try_recv().is_err());
        assert_eq!(bar.input.value(), "");
    }

    #[test]
    fn an_empty_query_dispatches_nothing() {
        let (mut tx, rx) = mpsc::channel();
        let mut bar = QueryBar::new();

        bar.handle_event(key(KeyCode::Char('/')), &mut tx);
        bar.handle_event(key(KeyCode::Enter), &mut tx);

        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn a_whitespace_query_dispatches_nothing() {
        let (mut tx, rx) = mpsc::channel();
        let mut bar = QueryBar::new();

        bar.handle_event(key(KeyCode::Char('/')), &mut tx);
        type_query(&mut bar, &mut tx, "   ");
        bar.handle_event(key(KeyCode::Enter), &mut tx);

        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn the_query_is_trimmed_before_submission() {
        let (mut tx, rx) = mpsc::channel();
        let mut bar = QueryBar::new();

        bar.handle_event(key(KeyCode::Char('/')), &mut tx);
        type_query(&mut bar, &mut tx, "  hobbits  ");
        bar.handle_event(key(KeyCode::Enter), &mut tx);

        match rx.try_recv() {
            Ok(AppCommand::Search(query)) => assert_eq!(query, "hobbits"),
            other => panic!("expected a search command, got {other:?}"),
        }
    }

    #[test]
    fn slash_activates_and_escape_deactivates() {
        let (mut tx, _rx) = mpsc::channel();
        let mut bar = QueryBar::new();
        assert!(!bar.active());

        assert!(bar.handle_event(key(KeyCode::Char('/')), &mut tx));
        assert!(bar.active());

        assert!(bar.handle_event(key(KeyCode::Esc), &mut tx));
        assert!(!bar.active());
    }

    #[test]
    fn keys_pass_through_while_inactive() {
        let (mut tx, rx) = mpsc::channel();
        let mut bar = QueryBar::new();

        assert!(!bar.handle_event(key(KeyCode::Char('q')), &mut tx));
        assert!(rx.try_recv().is_err());
        assert_eq!(bar.input.value(), "");
    }
}
