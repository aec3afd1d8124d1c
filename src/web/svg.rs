//! Server-side SVG rendering of chart specs.

use std::f64::consts::PI;

use crate::chart::{PieChart, ScatterChart};
use crate::color::{generate_palette, ColorMap};

const PIE_WIDTH: f64 = 560.0;
const PIE_HEIGHT: f64 = 380.0;
const PIE_RADIUS: f64 = 140.0;

const SCATTER_WIDTH: f64 = 820.0;
const SCATTER_HEIGHT: f64 = 420.0;
const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 200.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 60.0;

/// Escape text for use in SVG/HTML content and attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Pie
// ---------------------------------------------------------------------------

pub fn render_pie(chart: &PieChart) -> String {
    let cx = PIE_RADIUS + 40.0;
    let cy = PIE_HEIGHT / 2.0 + 15.0;
    let colors = generate_palette(chart.slices.len());

    let mut wedges = String::new();
    let mut legend = String::new();

    if chart.total() == 0 {
        wedges.push_str(&format!(
            r##"<text x="{cx}" y="{cy}" text-anchor="middle" fill="#888">No data</text>"##
        ));
    }

    let mut start = -PI / 2.0;
    for (i, (slice, fraction)) in chart.slices.iter().zip(chart.fractions()).enumerate() {
        let color = colors[i].to_hex();
        let tooltip = format!("{}: {}", escape(&slice.label), slice.value);

        if fraction >= 1.0 - 1e-9 {
            wedges.push_str(&format!(
                r##"<circle cx="{cx}" cy="{cy}" r="{PIE_RADIUS}" fill="{color}" stroke="white"><title>{tooltip}</title></circle>"##
            ));
        } else if fraction > 0.0 {
            let end = start + fraction * 2.0 * PI;
            let (x1, y1) = (cx + PIE_RADIUS * start.cos(), cy + PIE_RADIUS * start.sin());
            let (x2, y2) = (cx + PIE_RADIUS * end.cos(), cy + PIE_RADIUS * end.sin());
            let large_arc = u8::from(fraction > 0.5);
            wedges.push_str(&format!(
                r##"<path d="M {cx:.2} {cy:.2} L {x1:.2} {y1:.2} A {PIE_RADIUS} {PIE_RADIUS} 0 {large_arc} 1 {x2:.2} {y2:.2} Z" fill="{color}" stroke="white"><title>{tooltip}</title></path>"##
            ));
        }

        if fraction >= 0.04 {
            let mid = start + fraction * PI;
            let (lx, ly) = (
                cx + PIE_RADIUS * 0.65 * mid.cos(),
                cy + PIE_RADIUS * 0.65 * mid.sin(),
            );
            wedges.push_str(&format!(
                r##"<text x="{lx:.2}" y="{ly:.2}" text-anchor="middle" dominant-baseline="middle" font-size="13" fill="white">{:.1}%</text>"##,
                fraction * 100.0
            ));
        }
        start += fraction * 2.0 * PI;

        let ly = 70.0 + i as f64 * 24.0;
        let lx = cx + PIE_RADIUS + 50.0;
        legend.push_str(&format!(
            r##"<rect x="{lx}" y="{}" width="14" height="14" fill="{color}"/><text x="{}" y="{ly}" font-size="13">{} ({})</text>"##,
            ly - 11.0,
            lx + 20.0,
            escape(&slice.label),
            slice.value
        ));
    }

    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{PIE_WIDTH}" height="{PIE_HEIGHT}" viewBox="0 0 {PIE_WIDTH} {PIE_HEIGHT}" font-family="sans-serif">
<text x="20" y="28" font-size="17">{}</text>
{wedges}
{legend}
</svg>"##,
        escape(&chart.title)
    )
}

// ---------------------------------------------------------------------------
// Scatter
// ---------------------------------------------------------------------------

/// Upper end of the x axis: the largest payload rounded up to a full step.
fn x_axis_max(chart: &ScatterChart) -> f64 {
    let largest = chart
        .points()
        .map(|(_, p)| p.x)
        .fold(0.0_f64, f64::max);
    if largest <= 0.0 {
        return 10_000.0;
    }
    ((largest / 1000.0).ceil() * 1000.0).max(1000.0)
}

pub fn render_scatter(chart: &ScatterChart, colors: &ColorMap) -> String {
    let plot_w = SCATTER_WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = SCATTER_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let x_max = x_axis_max(chart);
    let (y_lo, y_hi) = (-0.25, 1.25);

    let sx = |x: f64| MARGIN_LEFT + x / x_max * plot_w;
    let sy = |y: f64| MARGIN_TOP + (y_hi - y) / (y_hi - y_lo) * plot_h;

    let mut axes = String::new();
    let x_step = ((x_max / 10.0 / 1000.0).ceil() * 1000.0).max(1000.0);
    let mut tick = 0.0;
    while tick <= x_max {
        let x = sx(tick);
        axes.push_str(&format!(
            r##"<line x1="{x:.2}" y1="{MARGIN_TOP}" x2="{x:.2}" y2="{:.2}" stroke="#eee"/><text x="{x:.2}" y="{:.2}" text-anchor="middle" font-size="11">{tick}</text>"##,
            MARGIN_TOP + plot_h,
            MARGIN_TOP + plot_h + 16.0
        ));
        tick += x_step;
    }
    for class in [0.0, 1.0] {
        let y = sy(class);
        axes.push_str(&format!(
            r##"<line x1="{MARGIN_LEFT}" y1="{y:.2}" x2="{:.2}" y2="{y:.2}" stroke="#ddd"/><text x="{:.2}" y="{:.2}" text-anchor="end" font-size="11">{class}</text>"##,
            MARGIN_LEFT + plot_w,
            MARGIN_LEFT - 8.0,
            y + 4.0
        ));
    }
    axes.push_str(&format!(
        r##"<rect x="{MARGIN_LEFT}" y="{MARGIN_TOP}" width="{plot_w}" height="{plot_h}" fill="none" stroke="#999"/>
<text x="{:.2}" y="{:.2}" text-anchor="middle" font-size="13">{}</text>
<text x="18" y="{:.2}" text-anchor="middle" font-size="13" transform="rotate(-90 18 {:.2})">{}</text>"##,
        MARGIN_LEFT + plot_w / 2.0,
        SCATTER_HEIGHT - 15.0,
        escape(&chart.x_label),
        MARGIN_TOP + plot_h / 2.0,
        MARGIN_TOP + plot_h / 2.0,
        escape(&chart.y_label)
    ));

    let mut points = String::new();
    let mut legend = format!(
        r##"<text x="{:.2}" y="{MARGIN_TOP}" font-size="13">{}</text>"##,
        MARGIN_LEFT + plot_w + 20.0,
        escape(&chart.color_field)
    );
    for (i, series) in chart.series.iter().enumerate() {
        let color = colors.color_for(&series.category).to_hex();
        for p in &series.points {
            points.push_str(&format!(
                r##"<circle cx="{:.2}" cy="{:.2}" r="6" fill="{color}" fill-opacity="0.8"><title>{}&#10;{} = {}&#10;{} = {}</title></circle>"##,
                sx(p.x),
                sy(p.y),
                escape(&p.hover),
                escape(&chart.x_label),
                p.x,
                escape(&chart.y_label),
                p.y
            ));
        }
        let ly = MARGIN_TOP + 24.0 + i as f64 * 22.0;
        let lx = MARGIN_LEFT + plot_w + 20.0;
        legend.push_str(&format!(
            r##"<circle cx="{:.2}" cy="{:.2}" r="6" fill="{color}"/><text x="{:.2}" y="{ly:.2}" font-size="12">{}</text>"##,
            lx + 6.0,
            ly - 4.0,
            lx + 18.0,
            escape(&series.category)
        ));
    }
    if chart.series.is_empty() {
        points.push_str(&format!(
            r##"<text x="{:.2}" y="{:.2}" text-anchor="middle" fill="#888">No launches in range</text>"##,
            MARGIN_LEFT + plot_w / 2.0,
            MARGIN_TOP + plot_h / 2.0
        ));
    }

    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{SCATTER_WIDTH}" height="{SCATTER_HEIGHT}" viewBox="0 0 {SCATTER_WIDTH} {SCATTER_HEIGHT}" font-family="sans-serif">
<text x="20" y="28" font-size="17">{}</text>
{axes}
{points}
{legend}
</svg>"##,
        escape(&chart.title)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{PieSlice, ScatterPoint, ScatterSeries};

    fn pie(values: &[(&str, usize)]) -> PieChart {
        PieChart {
            title: "A & B".into(),
            slices: values
                .iter()
                .map(|(label, value)| PieSlice {
                    label: label.to_string(),
                    value: *value,
                })
                .collect(),
        }
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(escape(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }

    #[test]
    fn pie_draws_one_wedge_per_slice() {
        let svg = render_pie(&pie(&[("0", 3), ("1", 7)]));
        assert_eq!(svg.matches("<path").count(), 2);
        assert!(svg.contains("A &amp; B"));
        assert!(svg.contains("70.0%"));
    }

    #[test]
    fn single_slice_pie_is_a_full_circle() {
        let svg = render_pie(&pie(&[("1", 4)]));
        assert!(!svg.contains("<path"));
        assert!(svg.contains(&format!(r#"r="{PIE_RADIUS}""#)));
    }

    #[test]
    fn empty_pie_says_no_data() {
        assert!(render_pie(&pie(&[])).contains("No data"));
    }

    #[test]
    fn scatter_point_tooltips_carry_the_site() {
        let chart = ScatterChart {
            title: "Success payload scatter".into(),
            x_label: "Payload Mass (kg)".into(),
            y_label: "class".into(),
            color_field: "Booster Version Category".into(),
            hover_field: "LaunchSite".into(),
            series: vec![ScatterSeries {
                category: "FT".into(),
                points: vec![ScatterPoint {
                    x: 2490.0,
                    y: 1.0,
                    hover: "KSC LC-39A".into(),
                }],
            }],
        };
        let colors = ColorMap::new(["FT"]);
        let svg = render_scatter(&chart, &colors);
        assert!(svg.contains("<title>KSC LC-39A"));
        assert!(svg.contains(&colors.color_for("FT").to_hex()));
        assert_eq!(x_axis_max(&chart), 3000.0);
    }
}
