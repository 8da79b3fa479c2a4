//! Server-side HTML rendering of the dashboard page.
//!
//! Output is a pure function of its inputs, so the same view always renders
//! to the same bytes.

use std::fmt::Write;

use crate::domain::dashboard::{
    BarChart, DashboardQuery, DashboardView, Panel, PieChart, QueryResult,
};

/// Static page chrome.
#[derive(Debug, Clone)]
pub struct PageSettings {
    pub title: String,
    pub footer: String,
}

const PALETTE: [&str; 10] = [
    "#636efa", "#ef553b", "#00cc96", "#ab63fa", "#ffa15a", "#19d3f3", "#ff6692", "#b6e880",
    "#ff97ff", "#fecb52",
];

const STYLE: &str = "body{margin:0;font-family:sans-serif;display:flex;min-height:100vh}\
aside{width:280px;padding:1.5rem;background:#f0f2f6}\
main{flex:1;padding:1.5rem 3rem}\
table{border-collapse:collapse;margin:1rem 0}\
th,td{border:1px solid #ddd;padding:.3rem .8rem;text-align:left}\
th{background:#fafafa}\
footer{margin-top:2rem;color:#555}";

/// Full dashboard page with the given view in the main panel.
pub fn render_page(settings: &PageSettings, view: &DashboardView) -> String {
    let mut panel = String::new();
    let _ = writeln!(panel, "<h2>{}</h2>", escape(view.title));
    render_panel(&mut panel, &view.panel);
    layout(settings, view.query, &panel)
}

/// Dashboard page whose main panel shows an error message.
pub fn render_error_page(
    settings: &PageSettings,
    selected: DashboardQuery,
    message: &str,
) -> String {
    let panel = format!(
        "<h2>{}</h2>\n<p class=\"error\">{}</p>\n",
        escape(selected.title()),
        escape(message)
    );
    layout(settings, selected, &panel)
}

fn layout(settings: &PageSettings, selected: DashboardQuery, panel: &str) -> String {
    let mut html = String::new();
    let _ = writeln!(html, "<!DOCTYPE html>");
    let _ = writeln!(html, "<html lang=\"en\">");
    let _ = writeln!(
        html,
        "<head><meta charset=\"utf-8\"><title>{}</title><style>{}</style></head>",
        escape(&settings.title),
        STYLE
    );
    let _ = writeln!(html, "<body>");
    render_sidebar(&mut html, selected);
    let _ = writeln!(html, "<main>");
    let _ = writeln!(html, "<h1>{}</h1>", escape(&settings.title));
    html.push_str(panel);
    let _ = writeln!(html, "<footer>{}</footer>", escape(&settings.footer));
    let _ = writeln!(html, "</main>");
    let _ = writeln!(html, "</body>");
    let _ = writeln!(html, "</html>");
    html
}

fn render_sidebar(html: &mut String, selected: DashboardQuery) {
    let _ = writeln!(html, "<aside>");
    let _ = writeln!(html, "<h3>Select Query</h3>");
    let _ = writeln!(html, "<form method=\"get\" action=\"/\">");
    let _ = writeln!(html, "<label for=\"query\">Choose a query to execute:</label>");
    let _ = writeln!(
        html,
        "<select id=\"query\" name=\"query\" onchange=\"this.form.submit()\">"
    );
    for query in DashboardQuery::all() {
        let marker = if *query == selected { " selected" } else { "" };
        let _ = writeln!(
            html,
            "<option value=\"{}\"{}>{}</option>",
            query.slug(),
            marker,
            escape(query.label())
        );
    }
    let _ = writeln!(html, "</select>");
    let _ = writeln!(html, "<button type=\"submit\">Run</button>");
    let _ = writeln!(html, "</form>");
    let _ = writeln!(html, "</aside>");
}

fn render_panel(html: &mut String, panel: &Panel) {
    match panel {
        Panel::Table { table } => render_table(html, table),
        Panel::Scalar { text, .. } => {
            let _ = writeln!(html, "<p class=\"scalar\">{}</p>", escape(text));
        }
        Panel::TableWithBar { table, chart } => {
            render_table(html, table);
            render_bar_chart(html, chart);
        }
        Panel::TableWithPie { table, chart } => {
            render_table(html, table);
            render_pie_chart(html, chart);
        }
        Panel::Unavailable => {}
    }
}

fn render_table(html: &mut String, table: &QueryResult) {
    let _ = writeln!(html, "<table>");
    let _ = write!(html, "<thead><tr>");
    for column in table.columns() {
        let _ = write!(html, "<th>{}</th>", escape(column));
    }
    let _ = writeln!(html, "</tr></thead>");
    let _ = writeln!(html, "<tbody>");
    for row in table.rows() {
        let _ = write!(html, "<tr>");
        for value in row {
            let _ = write!(html, "<td>{}</td>", escape(&value.to_string()));
        }
        let _ = writeln!(html, "</tr>");
    }
    let _ = writeln!(html, "</tbody>");
    let _ = writeln!(html, "</table>");
}

const BAR_WIDTH: f64 = 760.0;
const BAR_HEIGHT: f64 = 420.0;
const BAR_MARGIN_LEFT: f64 = 80.0;
const BAR_MARGIN_TOP: f64 = 40.0;
const BAR_MARGIN_BOTTOM: f64 = 140.0;

fn render_bar_chart(html: &mut String, chart: &BarChart) {
    let plot_width = BAR_WIDTH - BAR_MARGIN_LEFT - 20.0;
    let plot_height = BAR_HEIGHT - BAR_MARGIN_TOP - BAR_MARGIN_BOTTOM;
    let baseline = BAR_MARGIN_TOP + plot_height;
    let max = chart.max_value();
    let slot = if chart.bars.is_empty() {
        0.0
    } else {
        plot_width / chart.bars.len() as f64
    };

    let _ = writeln!(
        html,
        "<svg class=\"bar-chart\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" role=\"img\">",
        w = BAR_WIDTH,
        h = BAR_HEIGHT
    );
    let _ = writeln!(
        html,
        "<text x=\"{:.2}\" y=\"24\" font-weight=\"bold\">{}</text>",
        BAR_MARGIN_LEFT,
        escape(&chart.title)
    );
    let _ = writeln!(
        html,
        "<line x1=\"{x:.2}\" y1=\"{top:.2}\" x2=\"{x:.2}\" y2=\"{base:.2}\" stroke=\"#444\"/>",
        x = BAR_MARGIN_LEFT,
        top = BAR_MARGIN_TOP,
        base = baseline
    );
    let _ = writeln!(
        html,
        "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"end\" font-size=\"11\">{}</text>",
        BAR_MARGIN_LEFT - 6.0,
        BAR_MARGIN_TOP + 4.0,
        max
    );

    for (i, bar) in chart.bars.iter().enumerate() {
        let height = if max > 0.0 {
            (bar.value.max(0.0) / max) * plot_height
        } else {
            0.0
        };
        let x = BAR_MARGIN_LEFT + slot * i as f64 + slot * 0.1;
        let label_x = BAR_MARGIN_LEFT + slot * (i as f64 + 0.5);
        let _ = writeln!(
            html,
            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"{}\"><title>{}: {}</title></rect>",
            x,
            baseline - height,
            slot * 0.8,
            height,
            PALETTE[0],
            escape(&bar.category),
            bar.value
        );
        let _ = writeln!(
            html,
            "<text x=\"{x:.2}\" y=\"{y:.2}\" font-size=\"10\" text-anchor=\"end\" transform=\"rotate(-45 {x:.2} {y:.2})\">{}</text>",
            escape(&bar.category),
            x = label_x,
            y = baseline + 12.0
        );
    }

    let _ = writeln!(
        html,
        "<line x1=\"{:.2}\" y1=\"{base:.2}\" x2=\"{:.2}\" y2=\"{base:.2}\" stroke=\"#444\"/>",
        BAR_MARGIN_LEFT,
        BAR_MARGIN_LEFT + plot_width,
        base = baseline
    );
    let _ = writeln!(
        html,
        "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\">{}</text>",
        BAR_MARGIN_LEFT + plot_width / 2.0,
        BAR_HEIGHT - 8.0,
        escape(&chart.x_field)
    );
    let _ = writeln!(html, "</svg>");
}

const PIE_CX: f64 = 200.0;
const PIE_CY: f64 = 220.0;
const PIE_RADIUS: f64 = 160.0;

fn render_pie_chart(html: &mut String, chart: &PieChart) {
    let height = (PIE_CY + PIE_RADIUS + 20.0).max(60.0 + 18.0 * chart.slices.len() as f64);

    let _ = writeln!(
        html,
        "<svg class=\"pie-chart\" width=\"640\" height=\"{h:.0}\" viewBox=\"0 0 640 {h:.0}\" role=\"img\">",
        h = height
    );
    let _ = writeln!(
        html,
        "<text x=\"20\" y=\"24\" font-weight=\"bold\">{}</text>",
        escape(&chart.title)
    );

    let mut start = -std::f64::consts::FRAC_PI_2;
    for (i, slice) in chart.slices.iter().enumerate() {
        let color = PALETTE[i % PALETTE.len()];
        let tooltip = format!("{}: {} ({:.1}%)", slice.name, slice.value, slice.fraction * 100.0);

        if slice.fraction >= 1.0 {
            let _ = writeln!(
                html,
                "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" fill=\"{}\"><title>{}</title></circle>",
                PIE_CX,
                PIE_CY,
                PIE_RADIUS,
                color,
                escape(&tooltip)
            );
        } else if slice.fraction > 0.0 {
            let end = start + slice.fraction * std::f64::consts::TAU;
            let large_arc = if slice.fraction > 0.5 { 1 } else { 0 };
            let _ = writeln!(
                html,
                "<path d=\"M {cx:.2} {cy:.2} L {x1:.2} {y1:.2} A {r:.2} {r:.2} 0 {large} 1 {x2:.2} {y2:.2} Z\" fill=\"{}\"><title>{}</title></path>",
                color,
                escape(&tooltip),
                cx = PIE_CX,
                cy = PIE_CY,
                r = PIE_RADIUS,
                x1 = PIE_CX + PIE_RADIUS * start.cos(),
                y1 = PIE_CY + PIE_RADIUS * start.sin(),
                x2 = PIE_CX + PIE_RADIUS * end.cos(),
                y2 = PIE_CY + PIE_RADIUS * end.sin(),
                large = large_arc
            );
            start = end;
        }

        let legend_y = 50.0 + 18.0 * i as f64;
        let _ = writeln!(
            html,
            "<rect x=\"400\" y=\"{:.2}\" width=\"12\" height=\"12\" fill=\"{}\"/><text x=\"418\" y=\"{:.2}\" font-size=\"12\">{}</text>",
            legend_y,
            color,
            legend_y + 10.0,
            escape(&slice.name)
        );
    }
    let _ = writeln!(html, "</svg>");
}

/// Escapes text for use in HTML element content and attribute values.
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
