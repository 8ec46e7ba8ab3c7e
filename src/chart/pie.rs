//! Success/failure pie chart

use super::{Figure, FigureLayout, PieTrace, Trace};
use crate::analysis::OutcomeCounts;
use crate::dataset::SiteSelector;

pub const SUCCESS_LABEL: &str = "Success";
pub const FAILURE_LABEL: &str = "Failure";

/// Chart title for the given scope
pub fn pie_title(site: &SiteSelector) -> String {
    match site {
        SiteSelector::AllSites => "Total Success vs. Failure Counts".to_string(),
        SiteSelector::Site(name) => format!("Success vs. Failure Counts for {}", name),
    }
}

/// Two-slice pie of success and failure counts
///
/// Zero counts still produce both slices.
pub fn success_pie(counts: OutcomeCounts, site: &SiteSelector) -> Figure {
    Figure {
        data: vec![Trace::Pie(PieTrace {
            labels: vec![SUCCESS_LABEL.to_string(), FAILURE_LABEL.to_string()],
            values: vec![counts.success, counts.failure],
            hovertemplate: "label=%{label}<br>value=%{value}<extra></extra>".to_string(),
        })],
        layout: FigureLayout::titled(pie_title(site)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_names_site() {
        let site = SiteSelector::site("CCAFS SLC-40");
        let title = pie_title(&site);
        assert_eq!(title, "Success vs. Failure Counts for CCAFS SLC-40");
        assert!(title.contains("CCAFS SLC-40"));
    }

    #[test]
    fn test_title_all_sites() {
        let title = pie_title(&SiteSelector::AllSites);
        assert_eq!(title, "Total Success vs. Failure Counts");
        assert!(!title.contains(" for "));
    }

    #[test]
    fn test_zero_counts_render() {
        let figure = success_pie(OutcomeCounts::default(), &SiteSelector::site("nowhere"));
        match &figure.data[..] {
            [Trace::Pie(pie)] => {
                assert_eq!(pie.values, vec![0, 0]);
                assert_eq!(pie.labels, vec!["Success", "Failure"]);
            }
            other => panic!("Expected a single pie trace, got {:?}", other),
        }
    }

    #[test]
    fn test_pie_json_shape() {
        let counts = OutcomeCounts { success: 2, failure: 1 };
        let json = serde_json::to_value(success_pie(counts, &SiteSelector::AllSites)).unwrap();

        assert_eq!(json["data"][0]["type"], "pie");
        assert_eq!(json["data"][0]["values"], serde_json::json!([2, 1]));
        assert_eq!(json["layout"]["title"]["text"], "Total Success vs. Failure Counts");
        assert!(json["layout"].get("xaxis").is_none());
    }
}
