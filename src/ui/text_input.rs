/// A single-line text field with a cursor, counted in chars.
#[derive(Debug, Default, Clone)]
pub struct TextInput {
    value: String,
    cursor_position: usize,
    max_chars: Option<usize>,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_chars(max_chars: usize) -> Self {
        Self {
            max_chars: Some(max_chars),
            ..Self::default()
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn handle_char_input(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        let count = self.value.chars().count();
        if self.max_chars.is_some_and(|max| count >= max) {
            return;
        }
        let byte = self.byte_index(self.cursor_position);
        self.value.insert(byte, c);
        self.cursor_position += 1;
    }

    pub fn handle_backspace(&mut self) {
        if self.cursor_position > 0 {
            let byte = self.byte_index(self.cursor_position - 1);
            self.value.remove(byte);
            self.cursor_position -= 1;
        }
    }

    pub fn move_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor_position = (self.cursor_position + 1).min(self.value.chars().count());
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor_position = 0;
    }

    /// Returns the contents and empties the field.
    pub fn take(&mut self) -> String {
        self.cursor_position = 0;
        std::mem::take(&mut self.value)
    }

    /// The text with an underscore drawn at the cursor.
    pub fn display(&self) -> String {
        let chars: Vec<char> = self.value.chars().collect();
        let before: String = chars[..self.cursor_position].iter().collect();
        let after: String = chars[self.cursor_position..].iter().collect();
        format!("{}_{}", before, after)
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }
}
