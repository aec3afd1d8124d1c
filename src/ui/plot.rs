use std::f32::consts::TAU;

use eframe::egui::{self, Align2, Color32, FontId, Mesh, Pos2, Sense, Shape, Stroke, Ui};
use egui_plot::{Legend, Plot, PlotPoints, Points};

use crate::chart::{PieChart, ScatterChart};
use crate::color::{generate_palette, ColorMap, Rgb};

fn to_color32(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb.r, rgb.g, rgb.b)
}

// ---------------------------------------------------------------------------
// Success pie (top of the central panel)
// ---------------------------------------------------------------------------

/// Segments per full turn when tessellating wedges.
const PIE_SEGMENTS: usize = 180;

pub fn success_pie(ui: &mut Ui, chart: Option<&PieChart>) {
    let Some(chart) = chart else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label("No chart yet");
        });
        return;
    };

    ui.heading(&chart.title);
    let size = ui.available_size();
    let (rect, _response) = ui.allocate_exact_size(size, Sense::hover());
    let painter = ui.painter_at(rect);

    if chart.total() == 0 {
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            "No data",
            FontId::proportional(16.0),
            Color32::GRAY,
        );
        return;
    }

    let radius = (rect.height().min(rect.width() * 0.6) / 2.0 - 8.0).max(10.0);
    let center = Pos2::new(rect.left() + radius + 16.0, rect.center().y);
    let colors: Vec<Color32> = generate_palette(chart.slices.len())
        .into_iter()
        .map(to_color32)
        .collect();

    // Triangle fan per slice, starting at 12 o'clock and going clockwise.
    let mut mesh = Mesh::default();
    let mut start = -TAU / 4.0;
    for (fraction, &color) in chart.fractions().iter().zip(&colors) {
        let sweep = *fraction as f32 * TAU;
        let steps = ((sweep / TAU) * PIE_SEGMENTS as f32).ceil().max(1.0) as usize;
        for i in 0..steps {
            let a0 = start + sweep * i as f32 / steps as f32;
            let a1 = start + sweep * (i + 1) as f32 / steps as f32;
            let base = mesh.vertices.len() as u32;
            mesh.colored_vertex(center, color);
            mesh.colored_vertex(center + radius * egui::vec2(a0.cos(), a0.sin()), color);
            mesh.colored_vertex(center + radius * egui::vec2(a1.cos(), a1.sin()), color);
            mesh.add_triangle(base, base + 1, base + 2);
        }
        start += sweep;
    }
    painter.add(Shape::mesh(mesh));
    painter.circle_stroke(center, radius, Stroke::new(1.0, Color32::WHITE));

    // Legend to the right of the pie.
    let legend_x = center.x + radius + 24.0;
    let mut y = rect.top() + 12.0;
    for ((slice, fraction), color) in chart.slices.iter().zip(chart.fractions()).zip(&colors) {
        painter.rect_filled(
            egui::Rect::from_min_size(Pos2::new(legend_x, y - 6.0), egui::vec2(12.0, 12.0)),
            2.0,
            *color,
        );
        painter.text(
            Pos2::new(legend_x + 18.0, y),
            Align2::LEFT_CENTER,
            format!("{}  {} ({:.1}%)", slice.label, slice.value, fraction * 100.0),
            FontId::proportional(13.0),
            ui.visuals().text_color(),
        );
        y += 20.0;
    }
}

// ---------------------------------------------------------------------------
// Payload scatter (bottom of the central panel)
// ---------------------------------------------------------------------------

pub fn payload_scatter(ui: &mut Ui, chart: Option<&ScatterChart>, colors: &ColorMap) {
    let Some(chart) = chart else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label("No chart yet");
        });
        return;
    };

    ui.heading(&chart.title);
    if chart.series.is_empty() {
        ui.label("No launches in the selected payload range.");
    }

    // Hovering a point shows the launch site of the matching record.
    let hover_field = chart.hover_field.clone();
    let lookup = chart.clone();
    Plot::new("payload_scatter")
        .legend(Legend::default())
        .x_axis_label(&chart.x_label)
        .y_axis_label(&chart.y_label)
        .include_y(-0.25)
        .include_y(1.25)
        .include_x(0.0)
        .label_formatter(move |category, value| {
            let site = lookup
                .points()
                .find(|(c, p)| *c == category && p.x == value.x && p.y == value.y)
                .map(|(_, p)| p.hover.as_str());
            match site {
                Some(site) => format!(
                    "{hover_field}: {site}\n{category}\n{} kg, class {}",
                    value.x, value.y
                ),
                None => format!("{:.0} kg, class {:.2}", value.x, value.y),
            }
        })
        .show(ui, |plot_ui| {
            for series in &chart.series {
                let points: PlotPoints = series.points.iter().map(|p| [p.x, p.y]).collect();
                plot_ui.points(
                    Points::new(points)
                        .name(&series.category)
                        .color(to_color32(colors.color_for(&series.category)))
                        .radius(5.0),
                );
            }
        });
}
