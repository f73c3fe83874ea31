use crate::renderer::FieldWidget;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};
use reefsim_core::{Conditions, FieldStats, TimeOfDay};
use reefsim_data::Species;

pub struct StatusWidget<'a> {
    pub step: u64,
    pub seed: u64,
    pub conditions: &'a Conditions,
    pub counts: &'a FieldStats,
    pub paused: bool,
}

impl<'a> Widget for StatusWidget<'a> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let status_lines = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        let phase = self.conditions.phase();
        let phase_color = match phase {
            TimeOfDay::Day => Color::Yellow,
            TimeOfDay::Night => Color::Blue,
        };
        let tide = if self.conditions.is_high_tide() {
            "High"
        } else {
            "Low"
        };
        let clock = vec![
            Span::styled(
                phase.icon(),
                Style::default().fg(phase_color).add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(
                " | Step: {} | Tide: {tide} | Seed: {}",
                self.step, self.seed
            )),
            if self.paused {
                Span::styled(" | PAUSED", Style::default().fg(Color::Red))
            } else {
                Span::raw("")
            },
        ];
        Paragraph::new(Line::from(clock)).render(status_lines[0], buf);

        let mut counts = Vec::with_capacity(Species::ALL.len() * 2);
        for species in Species::ALL {
            counts.push(Span::styled(
                format!("{} ", species.symbol()),
                Style::default().fg(FieldWidget::color_for_species(species)),
            ));
            counts.push(Span::raw(format!(
                "{}: {}  ",
                species.name(),
                self.counts.get(species)
            )));
        }
        Paragraph::new(Line::from(counts))
            .style(Style::default().fg(Color::Gray))
            .render(status_lines[1], buf);

        let legend = " [Space] Pause | [S] Step | [T] Tide | [R] Reset | [Q] Quit ";
        Paragraph::new(legend)
            .style(Style::default().fg(Color::DarkGray))
            .render(status_lines[2], buf);
    }
}
