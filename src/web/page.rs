use super::svg::escape;
use crate::controller::{ChartSlot, ControlsDescriptor};

const STYLE: &str = "\
body { font-family: sans-serif; margin: 0 auto; max-width: 900px; color: #222; }
h1 { text-align: center; color: #503D36; font-size: 40px; }
select { width: 100%; padding: 6px; font-size: 15px; }
.slider { display: flex; gap: 12px; align-items: center; }
.slider input[type=range] { flex: 1; }
.chart { margin: 16px 0; }
";

/// The full dashboard page with both charts already rendered.
pub fn render_page(controls: &ControlsDescriptor, pie_svg: &str, scatter_svg: &str) -> String {
    let mut options = String::new();
    for option in &controls.dropdown {
        let selected = if option.value == controls.site {
            " selected"
        } else {
            ""
        };
        options.push_str(&format!(
            r#"<option value="{}"{selected}>{}</option>"#,
            escape(&option.value),
            escape(&option.label)
        ));
    }

    let slider = &controls.slider;
    let mut marks = String::new();
    for mark in &slider.marks {
        marks.push_str(&format!(r#"<option value="{mark}" label="{mark}"></option>"#));
    }
    // The thumbs carry no `name`: a range input snaps its value to the step
    // grid, so the exact bounds travel in hidden fields that a thumb only
    // overwrites when it is moved.
    let range_input = |field: &str, value: f64| {
        format!(
            r#"<input type="range" id="{field}-thumb" min="{}" max="{}" step="{}" value="{value}" list="payload-marks" onchange="this.form.{field}.value=this.value;this.form.submit()">"#,
            slider.min, slider.max, slider.step
        )
    };
    let [lo, hi] = slider.value;

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>SpaceX Launch Records Dashboard</title>
<style>{STYLE}</style>
</head>
<body>
<h1>SpaceX Launch Records Dashboard</h1>
<form method="get" action="/">
<select id="site-dropdown" name="site" onchange="this.form.submit()">{options}</select>
<br>
<div class="chart" id="{pie_id}">{pie_svg}</div>
<br>
<p>Payload range (Kg): {lo} – {hi}</p>
<input type="hidden" name="payload_min" value="{lo}">
<input type="hidden" name="payload_max" value="{hi}">
<div class="slider" id="payload-slider">{min_input}{max_input}</div>
<datalist id="payload-marks">{marks}</datalist>
<noscript><button type="submit">Apply</button></noscript>
</form>
<div class="chart" id="{scatter_id}">{scatter_svg}</div>
</body>
</html>
"#,
        pie_id = ChartSlot::SuccessPie.id(),
        scatter_id = ChartSlot::PayloadScatter.id(),
        min_input = range_input("payload_min", lo),
        max_input = range_input("payload_max", hi),
    )
}
