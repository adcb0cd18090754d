//! Pullback Main Application
//! Main window wiring the input form, the export pipeline and the history.

use tracing::{error, info, warn};

use crate::gui::{HistoryDialog, HistoryDialogAction, InputAction, InputPanel};
use crate::history::{HistoryEntry, HistoryStore};
use crate::parse::parse_pullback_text;
use crate::report::{format_currency, Exporter, Report};

/// Main application window.
pub struct PullbackApp {
    input_panel: InputPanel,
    history_dialog: HistoryDialog,
    history: HistoryStore,
    exporter: Exporter,
    error_modal: Option<String>,
}

impl PullbackApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        history: HistoryStore,
        exporter: Exporter,
        startup_notice: Option<String>,
    ) -> Self {
        let mut input_panel = InputPanel::new();
        if let Some(notice) = startup_notice {
            input_panel.set_error(notice);
        }

        Self {
            input_panel,
            history_dialog: HistoryDialog::new(),
            history,
            exporter,
            error_modal: None,
        }
    }

    /// Parse, render, export and record one conversion, synchronously.
    fn handle_convert(&mut self) {
        let table = match parse_pullback_text(&self.input_panel.text) {
            Ok(table) => table,
            Err(e) => {
                warn!(error = %e, "parse failed");
                self.input_panel.set_error(format!("Error: {}", e));
                return;
            }
        };

        let report = Report::new(table, self.input_panel.due_date);
        info!(items = report.table.len(), total = report.total, "parsed pullback list");

        let path = match self.exporter.export(&report) {
            Ok(path) => path,
            Err(e) => {
                error!(error = %e, "conversion failed");
                self.input_panel.set_error(format!("Error: {}", e));
                self.error_modal = Some(e.to_string());
                return;
            }
        };

        let entry = HistoryEntry {
            due_date: report.due_date,
            items: report.table.len(),
            total: report.total,
            file: path.clone(),
        };
        if let Err(e) = self.history.record(entry) {
            warn!(error = %e, "history save failed");
            self.input_panel
                .set_error(format!("Image saved, but history was not: {}", e));
            return;
        }

        self.input_panel.set_status(format!(
            "Image saved and opened: {} ({} items, ${})",
            path.display(),
            report.table.len(),
            format_currency(report.total)
        ));
    }

    fn handle_clear(&mut self) {
        self.input_panel.text.clear();
        self.input_panel.set_status("");
    }

    fn handle_history_action(&mut self, action: HistoryDialogAction) {
        match action {
            HistoryDialogAction::BrowseExportsDir => {
                if let Some(dir) = rfd::FileDialog::new()
                    .set_directory(self.exporter.exports_dir())
                    .pick_folder()
                {
                    info!(dir = %dir.display(), "exports folder changed");
                    self.exporter.set_exports_dir(dir);
                }
            }
            HistoryDialogAction::ClearHistory => {
                if let Err(e) = self.history.clear() {
                    warn!(error = %e, "history clear failed");
                    self.input_panel.set_error(format!("Error: {}", e));
                }
            }
            HistoryDialogAction::OpenFile(path) => {
                if let Err(e) = self.exporter.open_existing(&path) {
                    self.input_panel.set_error(format!("Error: {}", e));
                }
            }
            HistoryDialogAction::None => {}
        }
    }

    fn show_error_modal(&mut self, ctx: &egui::Context) {
        let Some(message) = self.error_modal.clone() else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new("Conversion failed")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(&message);
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });

        if dismissed {
            self.error_modal = None;
        }
    }
}

impl eframe::App for PullbackApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let action = self.input_panel.show(ui);

            match action {
                InputAction::Convert => self.handle_convert(),
                InputAction::Clear => self.handle_clear(),
                InputAction::ShowHistory => self.history_dialog.open = true,
                InputAction::None => {}
            }
        });

        let dialog_action =
            self.history_dialog
                .show(ctx, &self.history, self.exporter.exports_dir());
        self.handle_history_action(dialog_action);

        self.show_error_modal(ctx);
    }
}
