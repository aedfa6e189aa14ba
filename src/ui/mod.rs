pub mod farewell;
pub mod naming;
mod status_panel;
pub mod text_input;

use crate::command::HELP_TEXT;
use crate::creature::actions::ActionOutcome;
use crate::creature::status::StatusSnapshot;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use text_input::TextInput;

/// The main screen: creature panel, event log and command line.
pub struct GameScreen {
    pub command_input: TextInput,
    pub last_outcome: Option<ActionOutcome>,
}

impl GameScreen {
    pub fn new() -> Self {
        Self {
            command_input: TextInput::new(),
            last_outcome: None,
        }
    }

    pub fn draw(&self, frame: &mut Frame, snapshot: &StatusSnapshot) {
        let size = frame.size();

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(18),   // Panels
                Constraint::Length(3), // Last outcome
                Constraint::Length(3), // Command line
                Constraint::Length(1), // Help
            ])
            .split(size);

        let panels = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[0]);

        status_panel::draw_status_panel(frame, panels[0], snapshot);
        status_panel::draw_event_log(frame, panels[1], snapshot);
        self.draw_outcome(frame, rows[1]);

        let input = Paragraph::new(format!("> {}", self.command_input.display()))
            .block(Block::default().borders(Borders::ALL).title(" Command "))
            .style(Style::default().fg(Color::White));
        frame.render_widget(input, rows[2]);

        let help = Paragraph::new(HELP_TEXT).style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, rows[3]);
    }

    fn draw_outcome(&self, frame: &mut Frame, area: Rect) {
        let line = match &self.last_outcome {
            Some(outcome) => {
                let color = if outcome.success {
                    Color::Green
                } else {
                    Color::Yellow
                };
                Line::from(Span::styled(
                    outcome.message.clone(),
                    Style::default().fg(color),
                ))
            }
            None => Line::from(Span::styled(
                "Type a command and press Enter.",
                Style::default().fg(Color::Gray),
            )),
        };
        let widget = Paragraph::new(line)
            .block(Block::default().borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        frame.render_widget(widget, area);
    }
}
