//! Input Panel Widget
//! Text area, action buttons, due-date picker and the status line.

use chrono::{Datelike, Local, NaiveDate};
use egui::{Color32, ComboBox, RichText};

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Actions triggered by the input panel
#[derive(Debug, Clone, PartialEq)]
pub enum InputAction {
    None,
    Convert,
    Clear,
    ShowHistory,
}

/// Main form: pasted text, due date and conversion controls.
pub struct InputPanel {
    pub text: String,
    pub due_date: NaiveDate,
    status: String,
    status_is_error: bool,
}

impl Default for InputPanel {
    fn default() -> Self {
        Self {
            text: String::new(),
            due_date: Local::now().date_naive(),
            status: "Ready".to_string(),
            status_is_error: false,
        }
    }
}

impl InputPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
        self.status_is_error = false;
    }

    pub fn set_error(&mut self, status: impl Into<String>) {
        self.status = status.into();
        self.status_is_error = true;
    }

    /// Draw the panel
    pub fn show(&mut self, ui: &mut egui::Ui) -> InputAction {
        let mut action = InputAction::None;

        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("RMA Pullback List Maker")
                    .size(20.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
        });
        ui.add_space(8.0);

        egui::ScrollArea::vertical()
            .max_height((ui.available_height() - 90.0).max(120.0))
            .show(ui, |ui| {
                ui.add(
                    egui::TextEdit::multiline(&mut self.text)
                        .font(egui::TextStyle::Monospace)
                        .desired_width(f32::INFINITY)
                        .desired_rows(18)
                        .hint_text("Paste the RMA pullback list here"),
                );
            });

        ui.add_space(8.0);

        ui.horizontal(|ui| {
            if ui
                .add(egui::Button::new(RichText::new("Convert to Image").size(14.0)))
                .clicked()
            {
                action = InputAction::Convert;
            }
            if ui.button("Clear").clicked() {
                action = InputAction::Clear;
            }

            ui.separator();
            ui.label("Due date:");
            self.date_picker(ui);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("History...").clicked() {
                    action = InputAction::ShowHistory;
                }
            });
        });

        ui.add_space(5.0);

        let status_color = if self.status_is_error {
            Color32::from_rgb(220, 53, 69)
        } else if self.status.contains("saved") {
            Color32::from_rgb(40, 167, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }

    /// Month/day ComboBoxes plus a year DragValue, composed into a date.
    fn date_picker(&mut self, ui: &mut egui::Ui) {
        let mut year = self.due_date.year();
        let mut month = self.due_date.month();
        let mut day = self.due_date.day();

        ComboBox::from_id_salt("due_month")
            .width(60.0)
            .selected_text(MONTH_NAMES[month as usize - 1])
            .show_ui(ui, |ui| {
                for (i, name) in MONTH_NAMES.iter().enumerate() {
                    if ui
                        .selectable_label(month == i as u32 + 1, *name)
                        .clicked()
                    {
                        month = i as u32 + 1;
                    }
                }
            });

        ComboBox::from_id_salt("due_day")
            .width(50.0)
            .selected_text(day.to_string())
            .show_ui(ui, |ui| {
                for d in 1..=days_in_month(year, month) {
                    if ui.selectable_label(day == d, d.to_string()).clicked() {
                        day = d;
                    }
                }
            });

        ui.add(egui::DragValue::new(&mut year).range(2000..=2100).speed(0.1));

        day = day.min(days_in_month(year, month));
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            self.due_date = date;
        }
    }
}

/// Days in a calendar month, leap years included.
fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            let leap = year % 4 == 0 && (year % 100 != 0 || year % 400 == 0);
            if leap {
                29
            } else {
                28
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 1), 31);
        assert_eq!(days_in_month(2024, 4), 30);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2100, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
    }
}
