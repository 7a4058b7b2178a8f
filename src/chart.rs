//! Pie-chart rendering of a cost breakdown
//!
//! Renders the three-way transport/hotel/food split as an inline SVG string
//! so the frontend can embed it directly without a rasterization step.

use plotters::prelude::*;

use crate::error::TripCostError;
use crate::models::CostEstimate;

const CHART_SIZE: (u32, u32) = (480, 360);

// Slice palette: travel, hotel, food
const TRAVEL_COLOR: RGBColor = RGBColor(0x31, 0x85, 0xFC);
const HOTEL_COLOR: RGBColor = RGBColor(0x2E, 0xC4, 0xB6);
const FOOD_COLOR: RGBColor = RGBColor(0xFF, 0x33, 0x66);

/// Render the categorical breakdown of an estimate as a 3-slice pie chart.
///
/// An all-zero breakdown (possible with a zero-night stay and an unrecognized
/// transport mode) yields a blank chart instead of a division by zero.
pub fn pie_chart_svg(estimate: &CostEstimate) -> Result<String, TripCostError> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| TripCostError::chart(e.to_string()))?;

        if estimate.breakdown_total() > 0.0 {
            let center = (
                CHART_SIZE.0 as i32 / 2,
                CHART_SIZE.1 as i32 / 2,
            );
            let radius = f64::from(CHART_SIZE.1) * 0.38;
            let sizes = [
                estimate.transport_cost,
                estimate.hotel_cost,
                estimate.food_cost,
            ];
            let colors = [TRAVEL_COLOR, HOTEL_COLOR, FOOD_COLOR];
            let labels = ["Travel", "Hotel", "Food"];

            let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
            pie.start_angle(90.0);
            pie.label_style(("sans-serif", 18).into_font().color(&BLACK));
            pie.percentages(("sans-serif", 14).into_font().color(&BLACK));
            root.draw(&pie)
                .map_err(|e| TripCostError::chart(e.to_string()))?;
        }

        root.present()
            .map_err(|e| TripCostError::chart(e.to_string()))?;
    }
    Ok(svg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_contains_slice_labels() {
        let estimate = CostEstimate::from_breakdown(5000.0, 6000.0, 1500.0);
        let svg = pie_chart_svg(&estimate).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Travel"));
        assert!(svg.contains("Hotel"));
        assert!(svg.contains("Food"));
    }

    #[test]
    fn test_zero_breakdown_renders_blank_chart() {
        let estimate = CostEstimate::from_breakdown(0.0, 0.0, 0.0);
        let svg = pie_chart_svg(&estimate).unwrap();
        assert!(svg.contains("<svg"));
        assert!(!svg.contains("Travel"));
    }
}
