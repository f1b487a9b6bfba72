//! Dashboard handler — renders the layout tree as the landing page.

use axum::{extract::State, response::Html};
use launchdash_charts::layout::{Dropdown, RangeSlider, TextStyle};
use launchdash_charts::{Component, LayoutTree};

use crate::state::SharedState;

/// Client script: draws chart specs with Plotly and posts control changes.
pub const DASHBOARD_JS: &str = include_str!("../../templates/dashboard.js");
pub const DASHBOARD_CSS: &str = include_str!("../../templates/dashboard.css");

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

pub async fn dashboard(State(state): State<SharedState>) -> Html<String> {
    let dash = &state.dashboard;
    let boot = serde_json::json!({
        "state": dash.initial_state(),
        "charts": dash.initial_charts(),
    });
    Html(render_dashboard(dash.layout(), &boot.to_string()))
}

pub fn render_dashboard(layout: &LayoutTree, boot_json: &str) -> String {
    let title = layout
        .children
        .iter()
        .find_map(|c| match c {
            Component::Heading { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .unwrap_or("Launch Dashboard");
    let body: String = layout.children.iter().map(render_component).collect();

    format!(r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{}</title>
    <script src="{}"></script>
    <style>{}</style>
</head>
<body>
<div class="app-container">
{}
</div>
<script id="dashboard-boot" type="application/json">{}</script>
<script>{}</script>
</body>
</html>"#,
        escape_html(title),
        PLOTLY_CDN,
        DASHBOARD_CSS,
        body,
        // keep the payload from closing the script element early
        boot_json.replace("</", "<\\/"),
        DASHBOARD_JS,
    )
}

fn render_component(component: &Component) -> String {
    match component {
        Component::Heading { text, style } => format!(
            "<h1 style=\"{}\">{}</h1>\n",
            style_attr(style),
            escape_html(text)
        ),
        Component::Dropdown(dropdown) => render_dropdown(dropdown),
        Component::LineBreak => "<br>\n".to_string(),
        Component::Graph { id } => format!(
            "<div><div id=\"{}\" class=\"graph\"></div></div>\n",
            id
        ),
        Component::Paragraph { text } => format!("<p>{}</p>\n", escape_html(text)),
        Component::RangeSlider(slider) => render_slider(slider),
    }
}

fn style_attr(style: &TextStyle) -> String {
    format!(
        "text-align: {}; color: {}; font-size: {}px",
        escape_html(&style.text_align),
        escape_html(&style.color),
        style.font_size
    )
}

fn render_dropdown(dropdown: &Dropdown) -> String {
    let options: String = dropdown
        .options
        .iter()
        .map(|o| {
            let selected = if o.value == dropdown.value.as_str() { " selected" } else { "" };
            format!(
                "<option value=\"{}\"{}>{}</option>",
                escape_html(&o.value),
                selected,
                escape_html(&o.label)
            )
        })
        .collect();

    let filter = if dropdown.searchable {
        format!(
            "<input type=\"search\" class=\"dropdown-filter\" data-for=\"{}\" placeholder=\"{}\">",
            dropdown.id,
            escape_html(&dropdown.placeholder)
        )
    } else {
        String::new()
    };

    format!(
        "<div class=\"dropdown\">{}<select id=\"{}\">{}</select></div>\n",
        filter, dropdown.id, options
    )
}

fn render_slider(slider: &RangeSlider) -> String {
    let marks: String = slider
        .marks
        .iter()
        .map(|(pos, label)| format!("<option value=\"{}\" label=\"{}\"></option>", pos, escape_html(label)))
        .collect();
    let handle = |name: &str, value: f64| {
        format!(
            "<input type=\"range\" name=\"{}\" min=\"{}\" max=\"{}\" step=\"{}\" value=\"{}\" list=\"{}-marks\">",
            name, slider.min, slider.max, slider.step, value, slider.id
        )
    };

    format!(
        "<div id=\"{id}\" class=\"range-slider\">{lo}{hi}<output class=\"range-value\">{vlo} – {vhi}</output><datalist id=\"{id}-marks\">{marks}</datalist></div>\n",
        id = slider.id,
        lo = handle("lo", slider.value.lo),
        hi = handle("hi", slider.value.hi),
        vlo = slider.value.lo,
        vhi = slider.value.hi,
        marks = marks,
    )
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
