//! Hover tooltip and highlight.
//!
//! [`HoverOverlay`] is a two-state machine, idle or hovering one cell. While
//! hovering, the canvas holds exactly one tooltip group and one highlight
//! outline. Entering a cell replaces the whole overlay in one step, so an
//! enter without a matching leave never leaves a stale tooltip behind.

use tracing::debug;

use crate::canvas::{Canvas, Element};
use crate::format::{month_abbreviation, to_precision};
use crate::render::{CellGeometry, px};

/// Element id of the tooltip group.
pub const TOOLTIP_ID: &str = "tooltip";
/// Element id of the highlight outline.
pub const HIGHLIGHT_ID: &str = "activebar";

const TOOLTIP_WIDTH: f64 = 170.0;
const TOOLTIP_HEIGHT: f64 = 48.0;
const TOOLTIP_GAP: f64 = 8.0;

/// Hover state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum HoverState {
    /// No cell is hovered.
    #[default]
    Idle,
    /// The cell with this element id is hovered.
    Hovered {
        /// Element id of the hovered cell.
        cell_id: String,
    },
}

/// The two tooltip lines for a cell: `Jan 1753` and `Temperature: 0.90° C`.
#[must_use]
pub fn tooltip_lines(cell: &CellGeometry) -> [String; 2] {
    [
        format!("{} {}", month_abbreviation(cell.month_index), cell.year),
        format!("Temperature: {}° C", to_precision(cell.temperature, 2)),
    ]
}

/// Tooltip and highlight overlay for a single canvas.
#[derive(Debug, Clone, Default)]
pub struct HoverOverlay {
    state: HoverState,
}

impl HoverOverlay {
    /// Creates an idle overlay.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &HoverState {
        &self.state
    }

    /// Pointer entered `cell`: show its tooltip and outline.
    pub fn enter(&mut self, canvas: &mut Canvas, cell: &CellGeometry) {
        clear(canvas);

        let (x, y) = tooltip_origin(canvas, cell);
        let [heading, temperature] = tooltip_lines(cell);

        canvas.append(
            Element::new("rect")
                .attr("id", HIGHLIGHT_ID)
                .attr("x", px(cell.x))
                .attr("y", px(cell.y))
                .attr("width", px(cell.width))
                .attr("height", px(cell.height))
                .attr("fill", "transparent")
                .attr("stroke", "black")
                .attr("style", "pointer-events: none"),
        );
        canvas.append(
            Element::new("g")
                .attr("id", TOOLTIP_ID)
                .attr("data-year", cell.year)
                .attr(
                    "transform",
                    format!("translate({},{})", px(x), px(y)),
                )
                .attr("style", "pointer-events: none")
                .child(
                    Element::new("rect")
                        .attr("width", TOOLTIP_WIDTH)
                        .attr("height", TOOLTIP_HEIGHT)
                        .attr("rx", 4)
                        .attr("fill", "rgba(255, 255, 255, 0.9)")
                        .attr("stroke", "#333"),
                )
                .child(
                    Element::new("text")
                        .attr("x", TOOLTIP_GAP)
                        .attr("y", 20)
                        .attr("style", "font-size: 14px")
                        .text(heading),
                )
                .child(
                    Element::new("text")
                        .attr("x", TOOLTIP_GAP)
                        .attr("y", 38)
                        .attr("style", "font-size: 14px")
                        .text(temperature),
                ),
        );

        debug!(cell = %cell.id(), "Hover enter");
        self.state = HoverState::Hovered { cell_id: cell.id() };
    }

    /// Pointer left the hovered cell: remove the overlay. Returns `false`
    /// when nothing was hovered.
    pub fn leave(&mut self, canvas: &mut Canvas) -> bool {
        if self.state == HoverState::Idle {
            return false;
        }
        clear(canvas);
        debug!("Hover leave");
        self.state = HoverState::Idle;
        true
    }
}

fn clear(canvas: &mut Canvas) {
    canvas.remove_by_id(TOOLTIP_ID);
    canvas.remove_by_id(HIGHLIGHT_ID);
}

/// Right of the cell, or left of it when that would overflow the canvas.
fn tooltip_origin(canvas: &Canvas, cell: &CellGeometry) -> (f64, f64) {
    let canvas_width = f64::from(canvas.width());
    let canvas_height = f64::from(canvas.height());

    let right = cell.x + cell.width + TOOLTIP_GAP;
    let x = if right + TOOLTIP_WIDTH <= canvas_width {
        right
    } else {
        (cell.x - TOOLTIP_GAP - TOOLTIP_WIDTH).max(0.0)
    };
    let y = cell.y.clamp(0.0, (canvas_height - TOOLTIP_HEIGHT).max(0.0));
    (x, y)
}
