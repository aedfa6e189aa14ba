use super::text_input::TextInput;
use crate::creature::status::StatusSnapshot;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Shown once the creature has died. Typing its name starts over.
pub struct FarewellScreen {
    pub confirmation_input: TextInput,
}

impl FarewellScreen {
    pub fn new() -> Self {
        Self {
            confirmation_input: TextInput::new(),
        }
    }

    /// Case-insensitive match against the departed pet's name.
    pub fn is_confirmed(&self, name: &str) -> bool {
        self.confirmation_input.value().trim().to_lowercase() == name.trim().to_lowercase()
    }

    pub fn draw(&self, f: &mut Frame, area: Rect, snapshot: &StatusSnapshot) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(0),    // Memorial
                Constraint::Length(1),
                Constraint::Length(4), // Input label + field
                Constraint::Length(1),
                Constraint::Length(3), // Controls
            ])
            .split(area);

        let title = Paragraph::new("Farewell")
            .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        f.render_widget(title, chunks[0]);

        self.draw_memorial(f, chunks[1], snapshot);

        let label = Paragraph::new(format!(
            "Type '{}' to say goodbye and adopt a new critter:",
            snapshot.name
        ))
        .alignment(Alignment::Center);
        f.render_widget(label, chunks[3]);

        let input_area = Rect {
            x: chunks[3].x + (chunks[3].width.saturating_sub(40)) / 2,
            y: chunks[3].y + 1,
            width: 40.min(chunks[3].width),
            height: 3,
        };
        let input_widget = Paragraph::new(self.confirmation_input.display())
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(input_widget, input_area);

        let controls = Paragraph::new("[Enter] Start over    [Esc] Quit")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(controls, chunks[5]);
    }

    fn draw_memorial(&self, f: &mut Frame, area: Rect, snapshot: &StatusSnapshot) {
        let block = Block::default().borders(Borders::ALL).title("In Memory");
        let inner = block.inner(area);
        f.render_widget(block, area);

        let mut lines = vec![
            Line::from(snapshot.mood.art()),
            Line::from(""),
            Line::from(Span::styled(
                snapshot.name.clone(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(snapshot.condition()),
            Line::from(format!(
                "Lived {} days, reaching the {} stage.",
                snapshot.age_days,
                snapshot.life_stage.name()
            )),
        ];
        if !snapshot.tricks_known.is_empty() {
            let tricks: Vec<&str> = snapshot.tricks_known.iter().map(|t| t.name()).collect();
            lines.push(Line::from(format!("Knew how to {}.", tricks.join(", "))));
        }
        f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
    }
}
