use crate::app::state::App;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;
use reefsim_tui::renderer::FieldWidget;
use reefsim_tui::views::chronicle::ChronicleWidget;
use reefsim_tui::views::sparklines::SparklinesWidget;
use reefsim_tui::views::status::StatusWidget;

impl App {
    pub fn draw(&self, f: &mut Frame) {
        let main_layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(42)])
            .split(f.area());

        let left_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Status
                Constraint::Length(4), // Sparklines
                Constraint::Min(0),    // Reef
            ])
            .split(main_layout[0]);

        f.render_widget(
            StatusWidget {
                step: self.sim.step(),
                seed: self.sim.seed(),
                conditions: self.sim.conditions(),
                counts: self.sim.counts(),
                paused: self.paused,
            },
            left_layout[0],
        );

        let hunters: Vec<u64> = self.hunter_history.iter().copied().collect();
        let prey: Vec<u64> = self.prey_history.iter().copied().collect();
        f.render_widget(
            SparklinesWidget {
                hunter_data: &hunters,
                prey_data: &prey,
            },
            left_layout[1],
        );

        f.render_widget(
            FieldWidget::new(
                self.sim.field(),
                self.sim.population(),
                self.sim.conditions(),
            ),
            left_layout[2],
        );

        f.render_widget(
            ChronicleWidget {
                events: self.sim.events(),
            },
            main_layout[1],
        );
    }
}
