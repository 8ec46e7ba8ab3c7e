//! Payload vs. outcome scatter chart

use super::{Axis, ColorMap, Figure, FigureLayout, Legend, Marker, ScatterTrace, Title, Trace};
use crate::dataset::LaunchRecord;

pub const SCATTER_TITLE: &str = "Payload vs. Launch Outcome";
pub const PAYLOAD_AXIS_LABEL: &str = "Payload Mass (kg)";
pub const OUTCOME_AXIS_LABEL: &str = "Launch Outcome";
const LEGEND_TITLE: &str = "Booster Version Category";

/// Scatter of payload mass (x) against outcome class (y)
///
/// One trace per booster version category, in order of first appearance in
/// `records`. An empty slice yields a figure with no traces and labelled axes.
pub fn payload_scatter(records: &[&LaunchRecord], colors: &ColorMap) -> Figure {
    let mut traces: Vec<ScatterTrace> = Vec::new();

    for record in records {
        let category = &record.booster_version_category;
        let index = match traces.iter().position(|t| &t.name == category) {
            Some(index) => index,
            None => {
                traces.push(new_trace(category, colors));
                traces.len() - 1
            }
        };
        traces[index].x.push(record.payload_mass_kg);
        traces[index].y.push(record.outcome.class());
    }

    Figure {
        data: traces.into_iter().map(Trace::Scatter).collect(),
        layout: FigureLayout {
            title: Title::new(SCATTER_TITLE),
            xaxis: Some(Axis {
                title: Title::new(PAYLOAD_AXIS_LABEL),
            }),
            yaxis: Some(Axis {
                title: Title::new(OUTCOME_AXIS_LABEL),
            }),
            legend: Some(Legend {
                title: Title::new(LEGEND_TITLE),
                tracegrouporder: "normal".to_string(),
            }),
        },
    }
}

fn new_trace(category: &str, colors: &ColorMap) -> ScatterTrace {
    ScatterTrace {
        name: category.to_string(),
        legendgroup: category.to_string(),
        mode: "markers".to_string(),
        x: Vec::new(),
        y: Vec::new(),
        marker: Marker {
            color: colors.color(category).to_string(),
        },
        hovertemplate: format!(
            "{}={}<br>{}=%{{x}}<br>{}=%{{y}}<extra></extra>",
            LEGEND_TITLE, category, PAYLOAD_AXIS_LABEL, OUTCOME_AXIS_LABEL
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::SET1;
    use crate::dataset::Outcome;

    fn records() -> Vec<LaunchRecord> {
        vec![
            LaunchRecord::new("A", 500.0, "v1.1", Outcome::Success),
            LaunchRecord::new("A", 9000.0, "B5", Outcome::Failure),
            LaunchRecord::new("B", 3000.0, "v1.1", Outcome::Success),
        ]
    }

    #[test]
    fn test_groups_by_booster_category() {
        let records = records();
        let subset: Vec<&LaunchRecord> = records.iter().collect();
        let colors = ColorMap::new(["FT", "v1.1", "B5"]);

        let figure = payload_scatter(&subset, &colors);
        assert_eq!(figure.title(), SCATTER_TITLE);
        assert_eq!(figure.data.len(), 2);

        match &figure.data[0] {
            Trace::Scatter(trace) => {
                assert_eq!(trace.name, "v1.1");
                assert_eq!(trace.x, vec![500.0, 3000.0]);
                assert_eq!(trace.y, vec![1, 1]);
                // Colour slot comes from the colour map, not the subset
                assert_eq!(trace.marker.color, SET1[1]);
            }
            other => panic!("Expected scatter trace, got {:?}", other),
        }
        match &figure.data[1] {
            Trace::Scatter(trace) => {
                assert_eq!(trace.name, "B5");
                assert_eq!(trace.y, vec![0]);
                assert_eq!(trace.marker.color, SET1[2]);
            }
            other => panic!("Expected scatter trace, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_subset_renders() {
        let figure = payload_scatter(&[], &ColorMap::new(["FT"]));
        assert!(figure.data.is_empty());

        let json = serde_json::to_value(&figure).unwrap();
        assert_eq!(json["data"], serde_json::json!([]));
        assert_eq!(json["layout"]["xaxis"]["title"]["text"], PAYLOAD_AXIS_LABEL);
        assert_eq!(json["layout"]["yaxis"]["title"]["text"], OUTCOME_AXIS_LABEL);
    }

    #[test]
    fn test_scatter_json_shape() {
        let records = records();
        let subset: Vec<&LaunchRecord> = records.iter().take(1).collect();
        let json = serde_json::to_value(payload_scatter(&subset, &ColorMap::new(["v1.1"]))).unwrap();

        assert_eq!(json["data"][0]["type"], "scatter");
        assert_eq!(json["data"][0]["mode"], "markers");
        assert_eq!(json["data"][0]["x"], serde_json::json!([500.0]));
        assert_eq!(json["data"][0]["y"], serde_json::json!([1]));
    }
}
