//! History Dialog
//! Toggled window with past conversions and the export-folder setting.

use std::path::{Path, PathBuf};

use egui::{Color32, RichText};

use crate::history::HistoryStore;
use crate::report::format_currency;

/// Actions triggered by the history dialog
#[derive(Debug, Clone, PartialEq)]
pub enum HistoryDialogAction {
    None,
    BrowseExportsDir,
    ClearHistory,
    OpenFile(PathBuf),
}

pub struct HistoryDialog {
    pub open: bool,
}

impl Default for HistoryDialog {
    fn default() -> Self {
        Self { open: false }
    }
}

impl HistoryDialog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the dialog when open
    pub fn show(
        &mut self,
        ctx: &egui::Context,
        history: &HistoryStore,
        exports_dir: &Path,
    ) -> HistoryDialogAction {
        let mut action = HistoryDialogAction::None;

        egui::Window::new("History & Settings")
            .open(&mut self.open)
            .default_width(520.0)
            .show(ctx, |ui| {
                ui.label(RichText::new("Settings").size(14.0).strong());
                ui.add_space(5.0);

                ui.horizontal(|ui| {
                    ui.label("Exports folder:");
                    ui.label(
                        RichText::new(exports_dir.display().to_string())
                            .size(12.0)
                            .color(Color32::GRAY),
                    );
                    if ui.button("Browse...").clicked() {
                        action = HistoryDialogAction::BrowseExportsDir;
                    }
                });

                ui.add_space(10.0);
                ui.separator();
                ui.add_space(5.0);

                ui.label(RichText::new("Past conversions").size(14.0).strong());
                ui.add_space(5.0);

                if history.is_empty() {
                    ui.label(RichText::new("No conversions yet").color(Color32::GRAY));
                } else {
                    egui::ScrollArea::vertical().max_height(260.0).show(ui, |ui| {
                        egui::Grid::new("history_grid")
                            .striped(true)
                            .min_col_width(60.0)
                            .spacing([10.0, 4.0])
                            .show(ui, |ui| {
                                ui.label(RichText::new("Due").strong().size(11.0));
                                ui.label(RichText::new("Items").strong().size(11.0));
                                ui.label(RichText::new("Total").strong().size(11.0));
                                ui.label(RichText::new("File").strong().size(11.0));
                                ui.label("");
                                ui.end_row();

                                for entry in history.entries().iter().rev() {
                                    let file_name = entry
                                        .file
                                        .file_name()
                                        .map(|n| n.to_string_lossy().to_string())
                                        .unwrap_or_else(|| entry.file.display().to_string());

                                    ui.label(RichText::new(entry.due_date.to_string()).size(11.0));
                                    ui.label(RichText::new(entry.items.to_string()).size(11.0));
                                    ui.label(
                                        RichText::new(format!("${}", format_currency(entry.total)))
                                            .size(11.0),
                                    );
                                    ui.label(RichText::new(file_name).size(11.0));
                                    if ui.small_button("Open").clicked() {
                                        action = HistoryDialogAction::OpenFile(entry.file.clone());
                                    }
                                    ui.end_row();
                                }
                            });
                    });

                    ui.add_space(8.0);
                    if ui.button("Clear history").clicked() {
                        action = HistoryDialogAction::ClearHistory;
                    }
                }
            });

        action
    }
}
