use std::time::Duration;

use client_core::{Completion, Page, ResultsPhase, Session, Submission};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::{option_label, FilterGroup, CATEGORY_OPTIONS};

use crate::{
    backend_bridge::commands::BackendCommand,
    controller::{
        events::{classify_failure, UiEvent},
        orchestration::dispatch_backend_command,
    },
    ui::cards,
};

pub struct DishFinderApp {
    session: Session,
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    status: String,
    notice: Option<String>,
}

impl DishFinderApp {
    pub fn new(
        server_url: String,
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
    ) -> Self {
        Self {
            session: Session::with_welcome(server_url),
            cmd_tx,
            ui_rx,
            status: "Starting backend worker...".to_string(),
            notice: None,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => {
                    self.status = message;
                }
                UiEvent::WorkerFailed(message) => {
                    tracing::error!("{message}");
                    self.status = message;
                }
                UiEvent::RecommendationsFinished { ticket, outcome } => {
                    let hint = outcome.as_ref().err().map(classify_failure);
                    match self.session.complete(ticket, outcome) {
                        Completion::Loaded { count } => {
                            self.status = format!("{count} dishes loaded");
                        }
                        Completion::Empty => {
                            self.status = "No matching dishes".to_string();
                        }
                        Completion::Failed => {
                            self.status = hint.unwrap_or_default();
                        }
                        Completion::Stale => {}
                    }
                    if let Some(notice) = self.session.take_notice() {
                        self.notice = Some(notice);
                    }
                }
            }
        }
    }

    fn submit(&mut self) {
        let Submission { ticket, request } = self.session.begin_submission();
        let queued = dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::Recommend { ticket, request },
            &mut self.status,
        );
        if queued {
            self.status = "Finding dishes...".to_string();
        } else {
            self.session.go_to_preferences();
        }
    }

    fn show_welcome(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(80.0);
                ui.label(egui::RichText::new("🍽️").size(64.0));
                ui.heading("Smart Food Recommendations");
                ui.add_space(8.0);
                ui.label("Tell us what you feel like eating and we will find matching dishes.");
                ui.add_space(24.0);
                if ui
                    .button(egui::RichText::new("Get started").strong().size(16.0))
                    .clicked()
                {
                    self.session.go_to_preferences();
                }
            });
        });
    }

    fn show_preferences(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("◀ Home").clicked() {
                    self.session.go_to_welcome();
                }
                ui.heading("Your preferences");
            });
            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.label(egui::RichText::new("Price range").strong());
                ui.horizontal(|ui| {
                    ui.label("Min");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.session.form.min_price)
                            .hint_text("0")
                            .desired_width(90.0),
                    );
                    ui.label("Max");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.session.form.max_price)
                            .hint_text("10000")
                            .desired_width(90.0),
                    );
                });
                ui.add_space(8.0);

                for group in FilterGroup::ALL {
                    ui.label(egui::RichText::new(group.label()).strong());
                    ui.horizontal_wrapped(|ui| {
                        for option in group.options() {
                            let active = self.session.selection.is_active(group, option);
                            if ui.selectable_label(active, option_label(option)).clicked() {
                                self.session.selection.select(group, *option);
                            }
                        }
                    });
                    ui.add_space(6.0);
                }

                ui.label(egui::RichText::new("Categories").strong());
                ui.horizontal_wrapped(|ui| {
                    for option in CATEGORY_OPTIONS {
                        let active = self.session.selection.is_category_active(option);
                        if ui.selectable_label(active, option_label(option)).clicked() {
                            self.session.selection.toggle_category(option);
                        }
                    }
                });
                ui.add_space(6.0);

                ui.checkbox(&mut self.session.form.vegetarian_only, "Vegetarian only");
                ui.add_space(12.0);

                if ui
                    .button(egui::RichText::new("Find dishes").strong().size(16.0))
                    .clicked()
                {
                    self.submit();
                }
            });
        });
    }

    fn show_results(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("◀ Change preferences").clicked() {
                    self.session.go_to_preferences();
                }
                ui.heading("Recommended for you");
            });
            ui.separator();

            match self.session.results() {
                ResultsPhase::Loading => {
                    ui.vertical_centered(|ui| {
                        ui.add_space(60.0);
                        ui.spinner();
                        ui.label("Finding dishes...");
                    });
                }
                ResultsPhase::Empty => {
                    ui.vertical_centered(|ui| {
                        ui.add_space(60.0);
                        ui.label(egui::RichText::new("😕").size(48.0));
                        ui.heading("No dishes found");
                        ui.label("Try relaxing some of your preferences.");
                    });
                }
                ResultsPhase::Loaded(grid) => cards::show_grid(ui, grid),
            }
        });
    }

    fn show_notice(&mut self, ctx: &egui::Context) {
        let Some(notice) = &self.notice else {
            return;
        };
        let mut dismissed = false;
        egui::Window::new("Connection problem")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(notice.as_str());
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        if dismissed {
            self.notice = None;
        }
    }

    fn show_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.small(egui::RichText::new(&self.status).weak());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.small(egui::RichText::new(self.session.server_url()).weak());
                });
            });
        });
    }
}

impl eframe::App for DishFinderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        self.show_status_bar(ctx);
        match self.session.page() {
            Page::Welcome => self.show_welcome(ctx),
            Page::Preferences => self.show_preferences(ctx),
            Page::Results => self.show_results(ctx),
        }
        self.show_notice(ctx);

        if self.session.is_loading() {
            ctx.request_repaint_after(Duration::from_millis(50));
        } else {
            ctx.request_repaint_after(Duration::from_millis(250));
        }
    }
}

#[cfg(test)]
mod tests {
    use client_core::RecommendError;
    use crossbeam_channel::bounded;
    use shared::protocol::{FoodItem, RecommendationResponse};

    use super::*;

    fn app() -> (DishFinderApp, Receiver<BackendCommand>, Sender<UiEvent>) {
        let (cmd_tx, cmd_rx) = bounded(8);
        let (ui_tx, ui_rx) = bounded(8);
        let app = DishFinderApp::new("http://localhost:5000".to_string(), cmd_tx, ui_rx);
        (app, cmd_rx, ui_tx)
    }

    fn queued_ticket(cmd_rx: &Receiver<BackendCommand>) -> client_core::Ticket {
        match cmd_rx.try_recv().expect("queued command") {
            BackendCommand::Recommend { ticket, .. } => ticket,
        }
    }

    #[test]
    fn submit_queues_request_and_shows_loading() {
        let (mut app, cmd_rx, _ui_tx) = app();
        app.session.selection.select(FilterGroup::Spice, "mild");
        app.submit();

        match cmd_rx.try_recv().expect("queued command") {
            BackendCommand::Recommend { request, .. } => {
                assert_eq!(request.spice_level, "mild");
                assert_eq!(request.max_price, 10_000);
            }
        }
        assert!(app.session.is_loading());
    }

    #[test]
    fn failure_event_raises_notice_once_and_returns_to_preferences() {
        let (mut app, cmd_rx, ui_tx) = app();
        app.submit();
        let ticket = queued_ticket(&cmd_rx);

        ui_tx
            .send(UiEvent::RecommendationsFinished {
                ticket,
                outcome: Err(RecommendError::Status { status: 500 }),
            })
            .expect("send");
        app.process_ui_events();

        assert_eq!(app.session.page(), Page::Preferences);
        assert!(app.notice.is_some());
        assert!(app.status.contains("500"));
        assert!(app.session.pending_notice().is_none());
    }

    #[test]
    fn loaded_event_fills_results() {
        let (mut app, cmd_rx, ui_tx) = app();
        app.submit();
        let ticket = queued_ticket(&cmd_rx);

        let item = FoodItem {
            name: "Tom Yum Soup".to_string(),
            price: Some(300.0),
            calories: "low".to_string(),
            spice: "hot".to_string(),
            protein: Some(14.0),
            prep: "medium".to_string(),
            categories: vec!["seafood".to_string()],
            trending: true,
        };
        ui_tx
            .send(UiEvent::RecommendationsFinished {
                ticket,
                outcome: Ok(RecommendationResponse {
                    success: true,
                    count: 1,
                    recommendations: vec![item],
                }),
            })
            .expect("send");
        app.process_ui_events();

        match app.session.results() {
            ResultsPhase::Loaded(grid) => assert_eq!(grid.cards()[0].icon, "🍲"),
            _ => panic!("results not loaded"),
        }
        assert!(app.notice.is_none());
    }

    #[test]
    fn older_reply_is_ignored_after_resubmit() {
        let (mut app, cmd_rx, ui_tx) = app();
        app.submit();
        let first = queued_ticket(&cmd_rx);
        app.submit();
        let _second = queued_ticket(&cmd_rx);

        ui_tx
            .send(UiEvent::RecommendationsFinished {
                ticket: first,
                outcome: Err(RecommendError::Status { status: 502 }),
            })
            .expect("send");
        app.process_ui_events();

        assert!(app.session.is_loading());
        assert!(app.notice.is_none());
    }

    #[test]
    fn disconnected_worker_returns_to_preferences() {
        let (mut app, cmd_rx, _ui_tx) = app();
        drop(cmd_rx);
        app.submit();
        assert_eq!(app.session.page(), Page::Preferences);
        assert!(app.status.contains("disconnected"));
    }
}
