use eframe::egui;

pub(super) fn draw_help_window(ctx: &egui::Context, open: &mut bool) {
    egui::Window::new("Help")
        .open(open)
        .resizable(true)
        .default_width(460.0)
        .show(ctx, |ui| {
            ui.heading("Keyboard Shortcuts");
            ui.separator();
            help_row(ui, "D", "Draw tool");
            help_row(ui, "V", "Select tool");
            help_row(ui, "Escape", "Put the tool away, cancel any gesture");
            help_row(ui, "F1", "This window");

            ui.add_space(10.0);
            ui.heading("Drawing");
            ui.separator();
            ui.label(
                "Draw: press and drag to sketch a segment. Pressing or releasing \
                 within 30px of an existing endpoint snaps to it and reuses its \
                 label; new endpoints are labeled A, B, C, ... automatically.",
            );
            ui.add_space(4.0);
            ui.label(
                "Select: press near a segment endpoint and drag to move it; release \
                 near another endpoint to reconnect. Endpoints shared by three or \
                 more segments cannot be dragged.",
            );
            ui.add_space(4.0);
            ui.label(
                "Lengths are shown in centimeters (4 grid units = 1 cm) and every \
                 vertex shows the interior angle between its segments.",
            );
        });
}

fn help_row(ui: &mut egui::Ui, shortcut: &str, description: &str) {
    ui.horizontal(|ui| {
        ui.add_sized(
            [100.0, 16.0],
            egui::Label::new(egui::RichText::new(shortcut).monospace().strong()),
        );
        ui.label(description);
    });
}
