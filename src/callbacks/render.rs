//! Render functions referenced by the binding table

use crate::analysis::{filter_launches, outcome_counts};
use crate::chart::{payload_scatter, success_pie, ColorMap, Figure};
use crate::dataset::Dataset;
use crate::layout::ControlValues;

/// Success vs. failure pie for the selected site
pub fn render_success_pie(dataset: &Dataset, values: &ControlValues) -> Figure {
    let counts = outcome_counts(dataset, &values.site);
    success_pie(counts, &values.site)
}

/// Payload vs. outcome scatter for the selected site and payload range
pub fn render_payload_scatter(dataset: &Dataset, values: &ControlValues) -> Figure {
    let subset = filter_launches(dataset, &values.site, &values.payload);
    let colors = ColorMap::new(dataset.booster_categories());
    payload_scatter(&subset, &colors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::Trace;
    use crate::dataset::{LaunchRecord, Outcome, PayloadRange, SiteSelector};

    #[test]
    fn test_scatter_colors_stable_across_filters() {
        let dataset = Dataset::from_records(vec![
            LaunchRecord::new("A", 500.0, "v1.1", Outcome::Success),
            LaunchRecord::new("B", 3000.0, "FT", Outcome::Success),
        ])
        .unwrap();

        let only_b = ControlValues::new(SiteSelector::site("B"), PayloadRange::new(0.0, 10_000.0));
        let figure = render_payload_scatter(&dataset, &only_b);

        match &figure.data[..] {
            // "FT" is the second category in the dataset, so it keeps the second colour
            [Trace::Scatter(trace)] => assert_eq!(trace.marker.color, crate::chart::SET1[1]),
            other => panic!("Expected one scatter trace, got {:?}", other),
        }
    }

    #[test]
    fn test_pie_for_empty_selection() {
        let dataset = Dataset::from_records(vec![LaunchRecord::new(
            "A",
            500.0,
            "v1.1",
            Outcome::Success,
        )])
        .unwrap();

        let values = ControlValues::new(SiteSelector::site("Z"), dataset.payload_bounds());
        let figure = render_success_pie(&dataset, &values);
        assert_eq!(figure.title(), "Success vs. Failure Counts for Z");
    }
}
