use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Sparkline, Widget};

/// Recent head counts of hunters and of their prey, side by side.
pub struct SparklinesWidget<'a> {
    pub hunter_data: &'a [u64],
    pub prey_data: &'a [u64],
}

impl<'a> Widget for SparklinesWidget<'a> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let spark_layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        Sparkline::default()
            .block(Block::default().title(" Hunters "))
            .data(self.hunter_data)
            .style(Style::default().fg(Color::Rgb(70, 130, 180)))
            .render(spark_layout[0], buf);

        Sparkline::default()
            .block(Block::default().title(" Prey "))
            .data(self.prey_data)
            .style(Style::default().fg(Color::Rgb(255, 140, 0)))
            .render(spark_layout[1], buf);
    }
}
