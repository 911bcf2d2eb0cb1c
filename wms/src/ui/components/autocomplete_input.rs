use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem},
    Frame,
};

use crate::engine::{SuggestionEntry, SuggestionKind};
use crate::ui::theme;

/// A text input widget with a suggestion dropdown overlay
pub struct AutocompleteInput<'a> {
    /// The current input value
    pub value: &'a str,
    /// Placeholder text when value is empty
    pub placeholder: &'a str,
    /// Whether the input is focused
    pub is_focused: bool,
    /// Suggestions to show in the dropdown
    pub items: &'a [SuggestionEntry],
    /// Currently selected item index
    pub selected_index: usize,
    /// Optional hint text at bottom of dropdown
    pub hint: Option<&'a str>,
}

impl<'a> AutocompleteInput<'a> {
    pub fn new(value: &'a str, placeholder: &'a str) -> Self {
        Self {
            value,
            placeholder,
            is_focused: false,
            items: &[],
            selected_index: 0,
            hint: None,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.is_focused = focused;
        self
    }

    pub fn items(mut self, items: &'a [SuggestionEntry]) -> Self {
        self.items = items;
        self
    }

    pub fn selected_index(mut self, index: usize) -> Self {
        self.selected_index = index;
        self
    }

    pub fn hint(mut self, hint: Option<&'a str>) -> Self {
        self.hint = hint;
        self
    }

    /// Render the input and dropdown overlay
    pub fn render(self, f: &mut Frame, area: Rect) {
        let style = if self.is_focused {
            theme::form_field_focused_style()
        } else {
            theme::form_field_style()
        };

        let display = if self.value.is_empty() {
            Span::styled(self.placeholder, theme::muted_style())
        } else if self.is_focused {
            Span::styled(format!("{}▏", self.value), style)
        } else {
            Span::styled(self.value, style)
        };

        f.render_widget(Clear, area);
        f.render_widget(display, area);

        if !self.items.is_empty() || self.hint.is_some() {
            self.render_dropdown(f, area);
        }
    }

    fn render_dropdown(&self, f: &mut Frame, input_area: Rect) {
        let item_count = self.items.len();
        let has_hint = self.hint.is_some();
        let content_height = if has_hint { item_count + 1 } else { item_count };

        if content_height == 0 {
            return;
        }

        // Dropdown dimensions (add 2 for borders)
        let dropdown_height = (content_height + 2) as u16;
        let dropdown_width = input_area.width.max(20);

        // Position dropdown below the input's border
        let x = input_area.x.saturating_sub(1);
        let y = input_area.y + 2;

        let frame_height = f.area().height;
        let frame_width = f.area().width;

        let final_height = if y + dropdown_height > frame_height {
            frame_height.saturating_sub(y).max(3)
        } else {
            dropdown_height
        };

        let final_width = (dropdown_width + 2).min(frame_width.saturating_sub(x));
        let dropdown_area = Rect::new(x, y, final_width, final_height);

        f.render_widget(Clear, dropdown_area);

        let mut list_items: Vec<ListItem> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let style = if i == self.selected_index {
                    theme::selection_style()
                } else {
                    Style::default()
                };
                let marker = match entry.kind {
                    SuggestionKind::Code => "#",
                    SuggestionKind::Description => "~",
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{} ", marker), theme::label_style()),
                    Span::from(entry.display.clone()).style(style),
                ]))
            })
            .collect();

        if let Some(hint) = self.hint {
            list_items.push(ListItem::new(Line::from(
                Span::from(hint).style(Style::default().fg(Color::DarkGray)),
            )));
        }

        let list = List::new(list_items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );

        f.render_widget(list, dropdown_area);
    }
}
