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

//! UI rendering logic for the upcoming tracks table.
//!
//! The table is rebuilt from the shared track list on every draw; there is
//! no diffing. When fewer than two tracks are queued the whole widget stays
//! hidden, the current track alone is covered by its own panel.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Cell, Padding, Paragraph, Row, Table},
};

use crate::{components::UpcomingView, theme::Theme};

impl UpcomingView {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let tracks = self.tracks.lock().unwrap();
        if tracks.is_empty() {
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);

        let header_block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border_colour))
            .padding(Padding::horizontal(1));

        let header = Paragraph::new(format!("Up Next | {} tracks", tracks.len())).block(header_block);
        f.render_widget(header, chunks[0]);

        let rows = tracks.iter().enumerate().map(|(index, track)| {
            // The current track implicitly occupies slot 1
            let slot = format!("{}", index + 2);

            Row::new(vec![
                Cell::from(
                    Line::from(slot)
                        .style(Style::default().fg(theme.table_slot_fg))
                        .alignment(Alignment::Right),
                ),
                Cell::from(
                    Line::from(track.title.as_str())
                        .style(Style::default().fg(theme.table_track_fg)),
                ),
                Cell::from(
                    Line::from(track.caption.as_deref().unwrap_or(""))
                        .style(Style::default().fg(theme.table_caption_fg)),
                ),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(4),
                Constraint::Percentage(50),
                Constraint::Percentage(50),
            ],
        )
        .header(
            Row::new(vec![
                Cell::from(Line::from("Slot").alignment(Alignment::Right)),
                Cell::from("Title"),
                Cell::from("Caption"),
            ])
            .style(Style::default().bold().fg(theme.accent_colour))
            .bottom_margin(1),
        )
        .row_highlight_style(Style::default().bg(Color::Blue).fg(Color::White))
        .block(Block::default().padding(Padding::horizontal(1)));

        let state = &mut self.table_state;
        f.render_stateful_widget(table, chunks[1], state);
    }
}
