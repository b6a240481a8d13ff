use crate::model::Point;
use crate::render::draw_scene;
use crate::tools::ToolKind;
use eframe::egui;

use super::painter::PainterRenderer;
use super::{SketchApp, help};

impl eframe::App for SketchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let wants_keyboard = ctx.wants_keyboard_input();
        ctx.input_mut(|i| {
            if !wants_keyboard {
                if i.consume_key(egui::Modifiers::NONE, egui::Key::Escape) {
                    self.set_tool(None);
                }
                if i.consume_key(egui::Modifiers::NONE, egui::Key::D) {
                    self.set_tool(Some(ToolKind::Draw));
                }
                if i.consume_key(egui::Modifiers::NONE, egui::Key::V) {
                    self.set_tool(Some(ToolKind::Select));
                }
                if i.consume_key(egui::Modifiers::NONE, egui::Key::F1) {
                    self.show_help = true;
                }
            }
        });

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                for kind in [ToolKind::Draw, ToolKind::Select] {
                    let active = self.tool == Some(kind);
                    if ui.selectable_label(active, kind.name()).clicked() {
                        // Clicking the active tool puts it away.
                        self.set_tool(if active { None } else { Some(kind) });
                    }
                }
                ui.separator();
                if ui.button("Clear").clicked() {
                    self.clear_all();
                }
                ui.menu_button("Settings", |ui| {
                    ui.add(
                        egui::Slider::new(&mut self.config.grid_spacing, 5.0..=50.0)
                            .text("Grid spacing"),
                    );
                    ui.add(
                        egui::Slider::new(&mut self.config.snap_threshold, 5.0..=60.0)
                            .text("Snap threshold"),
                    );
                    if ui.button("Save").clicked() {
                        self.save_settings();
                        ui.close_menu();
                    }
                });
                if ui.button("Help").clicked() {
                    self.show_help = true;
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if let Some(status) = &self.status {
                        ui.label(status);
                    } else if self.tool.is_none() {
                        ui.label("Pick a tool (D to draw, V to select)");
                    }
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
            let rect = response.rect;
            let response = if self.tool.is_some() {
                response.on_hover_cursor(egui::CursorIcon::Crosshair)
            } else {
                response
            };

            // Canvas-local pointer position; input outside the canvas is
            // not part of any gesture.
            let pointer = ctx
                .input(|i| i.pointer.interact_pos())
                .filter(|p| rect.contains(*p))
                .map(|p| Point::from_pos2(p - rect.min.to_vec2()));

            let pressed = response.drag_started() || response.clicked();
            let released = response.drag_stopped();

            if pressed {
                if let (Some(tool), Some(p)) = (self.tool, pointer) {
                    self.session = tool.behavior().on_press(&self.sketch, &self.config, p);
                }
            }

            if released {
                if let (Some(tool), Some(p)) = (self.tool, pointer) {
                    self.session = tool.behavior().on_release(
                        &mut self.sketch,
                        &mut self.labels,
                        self.session,
                        &self.config,
                        p,
                    );
                    log::debug!("gesture finished, {} segments", self.sketch.len());
                    self.status = Some(format!("{} segments", self.sketch.len()));
                }
            }

            let mut renderer = PainterRenderer::new(&painter, rect, self.config);
            let mut drew = false;
            if response.dragged() {
                if let (Some(tool), Some(p)) = (self.tool, pointer) {
                    drew = tool.behavior().on_move(
                        &self.sketch,
                        &self.session,
                        &self.config,
                        p,
                        &mut renderer,
                    );
                }
            }
            if !drew {
                draw_scene(&mut renderer, &self.sketch.segments, &self.config);
            }
        });

        help::draw_help_window(ctx, &mut self.show_help);
    }
}
