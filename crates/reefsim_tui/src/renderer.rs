use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::{Block, Borders, Widget};

use reefsim_core::{Conditions, Field, Population};
use reefsim_data::{Location, Species};

/// Draws the reef, one terminal cell per field cell. Parts of the field that
/// do not fit in the area are clipped.
pub struct FieldWidget<'a> {
    field: &'a Field,
    population: &'a Population,
    conditions: &'a Conditions,
}

impl<'a> FieldWidget<'a> {
    pub fn new(field: &'a Field, population: &'a Population, conditions: &'a Conditions) -> Self {
        Self {
            field,
            population,
            conditions,
        }
    }

    pub fn get_inner_area(area: Rect) -> Rect {
        Block::default().borders(Borders::ALL).inner(area)
    }

    pub fn color_for_species(species: Species) -> Color {
        match species {
            Species::Shark => Color::Rgb(200, 200, 210),
            Species::Whale => Color::Rgb(70, 130, 180),
            Species::Clownfish => Color::Rgb(255, 140, 0),
            Species::Salmon => Color::Rgb(250, 128, 114),
            Species::Sardine => Color::Rgb(192, 192, 192),
        }
    }

    pub fn symbol_for_species(species: Species) -> char {
        species.symbol()
    }

    /// Water colour behind the animals: darker at night, brighter at high tide.
    pub fn water_color(conditions: &Conditions) -> Color {
        match (conditions.is_day(), conditions.is_high_tide()) {
            (true, true) => Color::Rgb(0, 60, 120),
            (true, false) => Color::Rgb(0, 40, 90),
            (false, true) => Color::Rgb(0, 25, 60),
            (false, false) => Color::Rgb(0, 15, 40),
        }
    }

    pub fn field_to_screen(location: Location, area: Rect) -> Option<(u16, u16)> {
        let inner = Self::get_inner_area(area);
        let x = u16::try_from(location.col).ok()?.checked_add(inner.x)?;
        let y = u16::try_from(location.row).ok()?.checked_add(inner.y)?;
        (x < inner.right() && y < inner.bottom()).then_some((x, y))
    }
}

impl<'a> Widget for FieldWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(
            " Reef {} {} ",
            self.conditions.phase().icon(),
            if self.conditions.is_high_tide() {
                "high tide"
            } else {
                "low tide"
            }
        );
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .render(area, buf);

        let inner = Self::get_inner_area(area);
        let water = Self::water_color(self.conditions);
        for y in inner.top()..inner.bottom() {
            for x in inner.left()..inner.right() {
                buf[(x, y)].set_bg(water);
            }
        }

        for (location, id) in self.field.occupants() {
            let Some(animal) = self.population.get(id).filter(|a| a.is_alive()) else {
                continue;
            };
            if let Some((x, y)) = Self::field_to_screen(location, area) {
                let species = animal.species();
                let cell = &mut buf[(x, y)];
                cell.set_char(Self::symbol_for_species(species));
                cell.set_fg(Self::color_for_species(species));
            }
        }
    }
}
