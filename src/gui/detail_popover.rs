//! Detail Popover
//! Floating window for the selected reel. Clicking outside it or on its close
//! button clears the selection.

use crate::gui::format::{format_count, format_percent, format_score};
use crate::gui::reel_table::open_reel;
use crate::metrics::{display_url, Reel};
use crate::state::Action;
use egui::{Pos2, RichText};

#[derive(Default)]
pub struct DetailPopover {
    anchor: Option<Pos2>,
    /// Set on the frame a selection happens so that the same click is not
    /// treated as an outside click.
    just_opened: bool,
}

impl DetailPopover {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_at(&mut self, anchor: Option<Pos2>) {
        self.anchor = anchor.map(|p| p + egui::vec2(12.0, 12.0));
        self.just_opened = true;
    }

    pub fn close(&mut self) {
        self.anchor = None;
        self.just_opened = false;
    }

    /// Draw the popover for `reel`. Returns `ClearSelection` when it should close.
    pub fn show(&mut self, ctx: &egui::Context, reel: &Reel) -> Option<Action> {
        let mut open = true;
        let mut close_clicked = false;

        let mut window = egui::Window::new(format!("Reel #{}", reel.id))
            .id(egui::Id::new("reel_detail_popover"))
            .open(&mut open)
            .collapsible(false)
            .resizable(false);
        if let Some(anchor) = self.anchor {
            window = window.current_pos(anchor);
        }

        let response = window.show(ctx, |ui| {
            egui::Grid::new("reel_detail_grid")
                .num_columns(2)
                .spacing([16.0, 4.0])
                .show(ui, |ui| {
                    let rows = [
                        ("Short URL", reel.short_url.clone()),
                        ("Label", display_url(&reel.short_url)),
                        ("Views", format_count(reel.views)),
                        ("Likes", format_count(reel.likes)),
                        ("Comments", format_count(reel.comments)),
                        ("Engagement Rate", format_percent(reel.engagement_rate)),
                        ("Engagement Score", format_score(reel.engagement_score)),
                        ("Viral Coefficient", format_score(reel.viral_coefficient)),
                    ];
                    for (name, value) in rows {
                        ui.label(RichText::new(name).strong());
                        ui.label(value);
                        ui.end_row();
                    }
                    for (name, value) in &reel.extra {
                        ui.label(RichText::new(name).strong());
                        ui.label(value);
                        ui.end_row();
                    }
                });

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.link("Open Reel ↗").clicked() {
                    open_reel(&reel.reel);
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Close").clicked() {
                        close_clicked = true;
                    }
                });
            });
        });

        let just_opened = std::mem::take(&mut self.just_opened);
        let clicked_outside = !just_opened
            && response.as_ref().is_some_and(|inner| {
                ctx.input(|i| {
                    i.pointer.any_click()
                        && i
                            .pointer
                            .interact_pos()
                            .is_some_and(|p| !inner.response.rect.contains(p))
                })
            });

        if !open || close_clicked || clicked_outside {
            self.close();
            return Some(Action::ClearSelection);
        }
        None
    }
}
