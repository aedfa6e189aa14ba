use super::text_input::TextInput;
use crate::core::constants::{DEFAULT_NAME, MAX_NAME_LENGTH};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Checks a pet name typed on the naming screen. Blank is allowed and means
/// the default name.
pub fn validate_name(name: &str) -> Result<(), String> {
    let trimmed = name.trim();
    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err(format!("Name must be at most {} characters", MAX_NAME_LENGTH));
    }
    if !trimmed
        .chars()
        .all(|c| c.is_alphanumeric() || c == ' ' || c == '-' || c == '_')
    {
        return Err("Name can only contain letters, numbers, spaces, - and _".to_string());
    }
    Ok(())
}

pub struct NamingScreen {
    pub name_input: TextInput,
    pub validation_error: Option<String>,
    /// Shown above the form, e.g. after a corrupt save was moved aside
    pub notice: Option<String>,
}

impl NamingScreen {
    pub fn new() -> Self {
        Self {
            name_input: TextInput::with_max_chars(MAX_NAME_LENGTH),
            validation_error: None,
            notice: None,
        }
    }

    pub fn with_notice(notice: impl Into<String>) -> Self {
        Self {
            notice: Some(notice.into()),
            ..Self::new()
        }
    }

    pub fn draw(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(2), // Notice
                Constraint::Length(4), // Input label + field
                Constraint::Length(1), // Spacer
                Constraint::Length(2), // Hint
                Constraint::Length(2), // Validation
                Constraint::Min(0),
                Constraint::Length(3), // Controls
            ])
            .split(area);

        let title = Paragraph::new("A new critter has hatched!")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        f.render_widget(title, chunks[0]);

        if let Some(notice) = &self.notice {
            let notice = Paragraph::new(notice.as_str())
                .style(Style::default().fg(Color::Yellow))
                .alignment(Alignment::Center);
            f.render_widget(notice, chunks[1]);
        }

        let label = Paragraph::new("What will you name it?");
        f.render_widget(label, chunks[2]);

        let input_area = Rect {
            x: chunks[2].x,
            y: chunks[2].y + 1,
            width: chunks[2].width,
            height: 3,
        };
        let input_widget = Paragraph::new(self.name_input.display())
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::White));
        f.render_widget(input_widget, input_area);

        let hint = Paragraph::new(format!(
            "Up to {} characters. Leave blank for \"{}\".",
            MAX_NAME_LENGTH, DEFAULT_NAME
        ))
        .style(Style::default().fg(Color::Gray));
        f.render_widget(hint, chunks[4]);

        let validation_text = match &self.validation_error {
            Some(error) => Line::from(Span::styled(
                format!("✗ {}", error),
                Style::default().fg(Color::Red),
            )),
            None => Line::from(""),
        };
        f.render_widget(Paragraph::new(validation_text), chunks[5]);

        let controls = Paragraph::new("[Enter] Adopt    [Esc] Quit")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(controls, chunks[7]);
    }

    pub fn handle_char_input(&mut self, c: char) {
        self.name_input.handle_char_input(c);
        self.validate();
    }

    pub fn handle_backspace(&mut self) {
        self.name_input.handle_backspace();
        self.validate();
    }

    pub fn validate(&mut self) {
        self.validation_error = validate_name(self.name_input.value()).err();
    }

    pub fn is_valid(&self) -> bool {
        self.validation_error.is_none()
    }

    pub fn get_name(&self) -> String {
        self.name_input.value().trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Mochi").is_ok());
        assert!(validate_name("Sir Fluff-a_lot").is_ok());
        assert!(validate_name("").is_ok());
        assert!(validate_name("bad/name").is_err());
        assert!(validate_name("abcdefghijklmnopq").is_err());
    }

    #[test]
    fn test_typing_invalid_character_flags_error() {
        let mut screen = NamingScreen::new();
        screen.handle_char_input('P');
        assert!(screen.is_valid());
        screen.handle_char_input('!');
        assert!(!screen.is_valid());
        screen.handle_backspace();
        assert!(screen.is_valid());
        assert_eq!(screen.get_name(), "P");
    }
}
