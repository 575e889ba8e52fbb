//! Color legend: six swatches from coldest to warmest.

use crate::canvas::Element;
use crate::color::heat_color;
use crate::config::HeatMapConfig;
use crate::format::format_legend_temperature;
use crate::scale::Scales;

/// Normalized color positions shown in the legend.
pub const LEGEND_STOPS: [f64; 6] = [0.0, 0.2, 0.4, 0.6, 0.8, 1.0];

const SWATCH_SIZE: u32 = 30;

pub(crate) fn legend(scales: &Scales, config: &HeatMapConfig) -> Element {
    let x = 0.9 * f64::from(config.width) + 20.0;
    let y = f64::from(config.height) / 4.0;

    let mut group = Element::new("g")
        .attr("id", "legend")
        .attr("transform", format!("translate({},{})", super::px(x), super::px(y)));

    for (i, t) in LEGEND_STOPS.iter().enumerate() {
        let offset = i as u32 * SWATCH_SIZE;
        group.push(
            Element::new("rect")
                .attr("class", "legend-swatch")
                .attr("x", 5)
                .attr("y", 5 + offset)
                .attr("width", SWATCH_SIZE)
                .attr("height", SWATCH_SIZE)
                .attr("fill", heat_color(*t))
                .attr("stroke", "black"),
        );
    }

    for (i, t) in LEGEND_STOPS.iter().enumerate() {
        let offset = i as u32 * SWATCH_SIZE;
        group.push(
            Element::new("text")
                .attr("class", "legend-label")
                .attr("x", 45)
                .attr("y", 25 + offset)
                .attr("style", format!("font-size: {}px", config.legend_font_size))
                .text(format_legend_temperature(scales.color_inverse.apply(*t))),
        );
    }

    group
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::tests::sample_dataset;

    #[test]
    fn test_six_swatches_and_labels() {
        let config = HeatMapConfig::default();
        let scales = Scales::build(&sample_dataset(), &config).unwrap();
        let group = legend(&scales, &config);

        let swatches: Vec<_> = group.children().iter().filter(|c| c.has_class("legend-swatch")).collect();
        let labels: Vec<_> = group
            .children()
            .iter()
            .filter(|c| c.has_class("legend-label"))
            .filter_map(|c| c.text_content())
            .collect();

        assert_eq!(swatches.len(), 6);
        assert_eq!(swatches[0].get_attr("fill"), Some("hsl(240, 100%, 50%)"));
        assert_eq!(swatches[5].get_attr("fill"), Some("hsl(0, 100%, 50%)"));
        // color domain of the sample is [0, 12]
        assert_eq!(labels, vec!["0.0", "2.4", "4.8", "7.2", "9.6", "12.0"]);
    }

    #[test]
    fn test_position() {
        let config = HeatMapConfig::default();
        let scales = Scales::build(&sample_dataset(), &config).unwrap();
        assert_eq!(legend(&scales, &config).get_attr("transform"), Some("translate(920,250)"));
    }
}
