//! Bottom (year) and left (month) axes.
//!
//! Axis groups follow the usual charting layout: a `path.domain` along the
//! plot edge, then one `g.tick` per tick holding a 6px line and a label.
//! Outer ticks are suppressed, so the domain path is a plain line.

use super::px;
use crate::canvas::Element;
use crate::config::HeatMapConfig;
use crate::format::{format_year, month_name};
use crate::scale::{MONTHS, Scales};

const TICK_SIZE: f64 = 6.0;
const TICK_PADDING: f64 = 3.0;

/// Year axis along the bottom of the plot, one tick per round year value.
pub(crate) fn year_axis(scales: &Scales, config: &HeatMapConfig) -> Element {
    let (r0, r1) = scales.x.range;
    let mut axis = axis_group(
        "x-axis",
        format!("translate(0,{})", config.height - config.padding),
        "middle",
        config.axis_font_size,
    )
    .child(
        Element::new("path")
            .attr("class", "domain")
            .attr("stroke", "currentColor")
            .attr("d", format!("M{},0H{}", px(r0), px(r1))),
    );

    for value in scales.x.ticks(config.tick_count) {
        let x = scales.x.apply(value);
        axis.push(
            Element::new("g")
                .attr("class", "tick")
                .attr("transform", format!("translate({},0)", px(x)))
                .child(
                    Element::new("line")
                        .attr("stroke", "currentColor")
                        .attr("y2", TICK_SIZE),
                )
                .child(
                    Element::new("text")
                        .attr("fill", "currentColor")
                        .attr("y", TICK_SIZE + TICK_PADDING)
                        .attr("dy", "0.71em")
                        .text(format_year(value)),
                ),
        );
    }

    axis
}

/// Month axis along the left of the plot, one tick per band center.
pub(crate) fn month_axis(scales: &Scales, config: &HeatMapConfig) -> Element {
    let top = f64::from(config.padding);
    let bottom = f64::from(config.height) - top;
    let mut axis = axis_group(
        "y-axis",
        format!("translate({},0)", config.padding),
        "end",
        config.axis_font_size,
    )
    .child(
        Element::new("path")
            .attr("class", "domain")
            .attr("stroke", "currentColor")
            .attr("d", format!("M0,{}V{}", px(bottom), px(top))),
    );

    for month in 0..MONTHS {
        let Some(y) = scales.y.center(month) else {
            continue;
        };
        axis.push(
            Element::new("g")
                .attr("class", "tick")
                .attr("transform", format!("translate(0,{})", px(y)))
                .child(
                    Element::new("line")
                        .attr("stroke", "currentColor")
                        .attr("x2", -TICK_SIZE),
                )
                .child(
                    Element::new("text")
                        .attr("fill", "currentColor")
                        .attr("x", -(TICK_SIZE + TICK_PADDING))
                        .attr("dy", "0.32em")
                        .text(month_name(month)),
                ),
        );
    }

    axis
}

fn axis_group(id: &str, transform: String, anchor: &str, font_size: u32) -> Element {
    Element::new("g")
        .attr("id", id)
        .attr("transform", transform)
        .attr("fill", "none")
        .attr("font-family", "sans-serif")
        .attr("text-anchor", anchor)
        .attr("style", format!("font-size: {}px", font_size))
}
