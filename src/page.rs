//! Self-contained HTML page around a rendered heat map.
//!
//! The page embeds the SVG plus inline CSS and JavaScript. The script wires
//! the same hover behavior as [`crate::interact::HoverOverlay`]: entering a
//! cell replaces the tooltip and outline, leaving removes them.

use chrono::{DateTime, Utc};

use crate::canvas::escape;
use crate::format::MONTH_ABBREVIATIONS;
use crate::render::HeatMap;

/// Renders a standalone HTML page stamped with the current time.
#[must_use]
pub fn render_html(heatmap: &HeatMap) -> String {
    render_html_at(heatmap, Utc::now())
}

/// Renders a standalone HTML page stamped with `generated_at`.
#[must_use]
pub fn render_html_at(heatmap: &HeatMap, generated_at: DateTime<Utc>) -> String {
    let months = serde_json::to_string(&MONTH_ABBREVIATIONS).unwrap_or_else(|_| "[]".to_string());

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <style>{css}</style>
</head>
<body>
<!-- generated {generated} -->
{svg}<script>
const MONTHS = {months};
{js}</script>
</body>
</html>
"#,
        title = escape(heatmap.title()),
        css = inline_css(),
        generated = generated_at.to_rfc3339(),
        svg = heatmap.to_svg(),
        months = months,
        js = inline_javascript(),
    )
}

fn inline_css() -> &'static str {
    r##"
body { font-family: system-ui, sans-serif; margin: 0; }
svg { display: block; margin: 0 auto; }
rect.cell { shape-rendering: crispEdges; }
#tooltip {
    position: absolute;
    pointer-events: none;
    padding: 6px 10px;
    background: rgba(255, 255, 255, 0.9);
    border: 1px solid #333;
    border-radius: 4px;
    font-size: 14px;
}
"##
}

fn inline_javascript() -> &'static str {
    r##"(function () {
    const NS = "http://www.w3.org/2000/svg";
    const svg = document.querySelector("svg");

    function clearOverlay() {
        document.querySelectorAll("#tooltip, #activebar").forEach((el) => el.remove());
    }

    svg.querySelectorAll("rect.cell").forEach((cell) => {
        cell.addEventListener("mouseover", () => {
            clearOverlay();

            const year = cell.dataset.year;
            const temp = Number(cell.dataset.temp);
            const tip = document.createElement("div");
            tip.id = "tooltip";
            tip.dataset.year = year;
            tip.innerHTML = MONTHS[Number(cell.dataset.month)] + " " + year +
                "<br>Temperature: " + temp.toPrecision(2) + "° C";

            const box = cell.getBoundingClientRect();
            tip.style.left = (window.scrollX + box.right + 8) + "px";
            tip.style.top = (window.scrollY + box.top) + "px";
            document.body.appendChild(tip);

            const bar = document.createElementNS(NS, "rect");
            bar.id = "activebar";
            for (const attr of ["x", "y", "width", "height"]) {
                bar.setAttribute(attr, cell.getAttribute(attr));
            }
            bar.setAttribute("fill", "transparent");
            bar.setAttribute("stroke", "black");
            bar.style.pointerEvents = "none";
            svg.appendChild(bar);
        });
        cell.addEventListener("mouseout", clearOverlay);
    });
})();
"##
}
