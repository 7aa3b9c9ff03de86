use client_core::{render::TRENDING_LABEL, ResultCard, ResultsGrid};
use eframe::egui;

const CARD_WIDTH: f32 = 240.0;
const TRENDING_COLOR: egui::Color32 = egui::Color32::from_rgb(230, 160, 20);
const PRICE_COLOR: egui::Color32 = egui::Color32::from_rgb(40, 150, 80);

pub fn show_grid(ui: &mut egui::Ui, grid: &ResultsGrid) {
    ui.label(egui::RichText::new(grid.summary()).strong());
    ui.add_space(8.0);
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing = egui::vec2(12.0, 12.0);
                for (index, card) in grid.cards().iter().enumerate() {
                    show_card(ui, index, card);
                }
            });
        });
}

fn show_card(ui: &mut egui::Ui, index: usize, card: &ResultCard) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(10))
        .show(ui, |ui| {
            ui.set_width(CARD_WIDTH);
            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(card.icon).size(32.0));
                    if card.trending {
                        ui.label(
                            egui::RichText::new(TRENDING_LABEL)
                                .strong()
                                .color(TRENDING_COLOR),
                        );
                    }
                });
                ui.label(egui::RichText::new(&card.name).strong().size(16.0));
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(&card.price).color(PRICE_COLOR).strong());
                    ui.small(card.availability);
                });
                ui.separator();
                egui::Grid::new(("card_details", index))
                    .num_columns(2)
                    .spacing([8.0, 2.0])
                    .show(ui, |ui| {
                        for detail in &card.details {
                            ui.label(egui::RichText::new(format!("{}:", detail.label)).weak());
                            ui.label(&detail.value);
                            ui.end_row();
                        }
                    });
                if !card.badges.is_empty() {
                    ui.add_space(4.0);
                    ui.horizontal_wrapped(|ui| {
                        for badge in &card.badges {
                            ui.small(egui::RichText::new(badge).background_color(
                                ui.visuals().faint_bg_color,
                            ));
                        }
                    });
                }
            });
        });
}
