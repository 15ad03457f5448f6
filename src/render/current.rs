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

//! Render the current track panel.
//!
//! This module provides renders the visual representation of the track the
//! service is currently playing. The panel disappears entirely while the
//! queue is empty.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::App;

/// Renders the current track widget including title and caption.
pub(crate) fn draw_current(f: &mut Frame, area: Rect, app: &App) {
    let Some(track) = app.queue.current() else {
        return;
    };

    let block = Block::default()
        .borders(Borders::TOP | Borders::BOTTOM)
        .border_style(Style::default().fg(app.theme.border_colour))
        .padding(Padding::horizontal(1));

    let inner_area = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(inner_area);

    let info_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(12)])
        .split(chunks[0]);

    let track_line = Line::from(vec![
        Span::styled(" ♪ ", Style::default().add_modifier(Modifier::BOLD)).fg(Color::White),
        Span::styled(&track.title, Style::default().add_modifier(Modifier::BOLD))
            .fg(app.theme.accent_colour),
    ]);
    f.render_widget(Paragraph::new(track_line), info_chunks[0]);

    let count_line = Line::from(vec![
        Span::styled(
            format!("{} queued", app.queue.track_count()),
            Style::default(),
        )
        .fg(app.theme.table_caption_fg),
    ]);
    f.render_widget(
        Paragraph::new(count_line).alignment(Alignment::Right),
        info_chunks[1],
    );

    if let Some(caption) = track.caption.as_deref() {
        let caption_line = Line::from(
            Span::styled(caption, Style::default()).fg(app.theme.table_caption_fg),
        );
        f.render_widget(Paragraph::new(caption_line), chunks[1]);
    }
}
