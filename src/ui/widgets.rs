//! Custom widgets for the board TUI.

use std::rc::Rc;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::theme::Theme;
use crate::models::{Marker, WordPair};

// ══════════════════════════════════════════════════════════════════════════
// Card Widget
// ══════════════════════════════════════════════════════════════════════════

pub struct CardWidget<'a> {
    pair: &'a WordPair,
    marker: Marker,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> CardWidget<'a> {
    pub fn new(pair: &'a WordPair, marker: Marker, focused: bool, theme: &'a Theme) -> Self {
        Self {
            pair,
            marker,
            focused,
            theme,
        }
    }
}

impl Widget for CardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = self.theme.card(self.marker.color());
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(if self.focused {
                BorderType::Thick
            } else {
                BorderType::Rounded
            })
            .border_style(self.theme.card_border(self.focused))
            .style(style);

        let inner = block.inner(area);
        block.render(area, buf);

        let lines = card_lines(self.pair, inner.width as usize, inner.height as usize);

        // Center vertically
        let vertical_padding = inner.height.saturating_sub(lines.len() as u16) / 2;
        let content_area = Rect {
            y: inner.y + vertical_padding,
            height: inner.height.saturating_sub(vertical_padding),
            ..inner
        };

        Paragraph::new(lines.into_iter().map(Line::from).collect::<Vec<_>>())
            .alignment(Alignment::Center)
            .style(style)
            .render(content_area, buf);
    }
}

/// Front text above back text, wrapped to `width` and cut to `height` lines.
/// The front keeps at least one line when the back has to be dropped.
pub fn card_lines(pair: &WordPair, width: usize, height: usize) -> Vec<String> {
    if width == 0 || height == 0 {
        return Vec::new();
    }

    let wrap = |text: &str| -> Vec<String> {
        textwrap::wrap(text, width)
            .into_iter()
            .map(|line| truncate_to_width(&line, width))
            .collect()
    };
    let mut front = wrap(&pair.front);
    let mut back = wrap(&pair.back);

    let back_room = height.saturating_sub(front.len().min(height.saturating_sub(1)).max(1));
    back.truncate(back_room);
    front.truncate(height - back.len());

    front.extend(back);
    front
}

/// Cut `text` to at most `width` columns, marking the cut with an ellipsis.
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let budget = width.saturating_sub(1);
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    if width > 0 {
        out.push('…');
    }
    out
}

// ══════════════════════════════════════════════════════════════════════════
// Marker Selector Widget
// ══════════════════════════════════════════════════════════════════════════

pub struct MarkerBar {
    selected: Marker,
}

impl MarkerBar {
    const SLOT_WIDTH: u16 = 11;

    pub fn new(selected: Marker) -> Self {
        Self { selected }
    }

    /// Screen slots for each marker, in `Marker::ALL` order.
    pub fn slots(area: Rect) -> Rc<[Rect]> {
        Layout::horizontal([Constraint::Length(Self::SLOT_WIDTH); 5])
            .flex(Flex::Center)
            .spacing(1)
            .split(area)
    }
}

impl Widget for MarkerBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let slots = Self::slots(area);

        for (i, (marker, slot)) in Marker::ALL.iter().zip(slots.iter()).enumerate() {
            let mut style = Style::default().bg(marker.color()).fg(marker.label_color());
            let label = if *marker == self.selected {
                style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
                format!("▶{} {}", i + 1, marker.name())
            } else {
                format!("{} {}", i + 1, marker.name())
            };

            Paragraph::new(Line::from(Span::styled(label, style)))
                .alignment(Alignment::Center)
                .style(style)
                .render(*slot, buf);
        }
    }
}

// ══════════════════════════════════════════════════════════════════════════
// Key Hints Widget
// ══════════════════════════════════════════════════════════════════════════

pub struct KeyHints<'a> {
    hints: &'a [(&'a str, &'a str)],
    theme: &'a Theme,
}

impl<'a> KeyHints<'a> {
    pub fn new(hints: &'a [(&'a str, &'a str)], theme: &'a Theme) -> Self {
        Self { hints, theme }
    }
}

impl Widget for KeyHints<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let spans: Vec<Span> = self
            .hints
            .iter()
            .enumerate()
            .flat_map(|(i, (key, desc))| {
                let mut spans = Vec::with_capacity(3);
                if i > 0 {
                    let separator = Style::default().fg(self.theme.colors.text_dim);
                    spans.push(Span::styled("│ ", separator));
                }
                spans.push(Span::styled(*key, self.theme.key_highlight()));
                spans.push(Span::styled(format!(" {} ", desc), self.theme.key_hint()));
                spans
            })
            .collect();

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
