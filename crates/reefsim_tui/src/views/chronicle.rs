use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};
use reefsim_core::history::{EventLog, LiveEvent};

/// The most recent events, newest first.
pub struct ChronicleWidget<'a> {
    pub events: &'a EventLog,
}

impl ChronicleWidget<'_> {
    pub fn color_for_event(event: &LiveEvent) -> Color {
        match event {
            LiveEvent::Birth { .. } => Color::Green,
            LiveEvent::Death { .. } => Color::DarkGray,
            LiveEvent::TideChange { .. } => Color::Cyan,
            LiveEvent::Extinction { .. } => Color::Red,
        }
    }
}

impl<'a> Widget for ChronicleWidget<'a> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let visible = usize::from(area.height.saturating_sub(2));
        let lines: Vec<Line> = self
            .events
            .iter()
            .rev()
            .take(visible)
            .map(|event| {
                Line::from(Span::styled(
                    format!("[{}] {}", event.step(), event.describe()),
                    Style::default().fg(Self::color_for_event(event)),
                ))
            })
            .collect();
        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(" Chronicle "))
            .render(area, buf);
    }
}
