//! Qualitative colour palette for categorical series

use std::collections::HashMap;

/// Plotly's `Set1` qualitative palette
pub const SET1: [&str; 9] = [
    "rgb(228,26,28)",
    "rgb(55,126,184)",
    "rgb(77,175,74)",
    "rgb(152,78,163)",
    "rgb(255,127,0)",
    "rgb(255,255,51)",
    "rgb(166,86,40)",
    "rgb(247,129,191)",
    "rgb(153,153,153)",
];

/// Maps category labels to palette colours
///
/// Slots are assigned in the order categories are given and wrap around
/// the palette when there are more categories than colours. A category
/// keeps its colour no matter which subset of records is being drawn.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: HashMap<String, &'static str>,
}

impl ColorMap {
    pub fn new<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut mapping = HashMap::new();
        for category in categories {
            let next = SET1[mapping.len() % SET1.len()];
            mapping.entry(category.into()).or_insert(next);
        }
        Self { mapping }
    }

    /// Colour for `category`; unknown categories fall back to the last palette entry
    pub fn color(&self, category: &str) -> &'static str {
        self.mapping
            .get(category)
            .copied()
            .unwrap_or(SET1[SET1.len() - 1])
    }

    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colors_follow_palette_order() {
        let colors = ColorMap::new(["v1.0", "v1.1", "FT"]);
        assert_eq!(colors.color("v1.0"), SET1[0]);
        assert_eq!(colors.color("v1.1"), SET1[1]);
        assert_eq!(colors.color("FT"), SET1[2]);
    }

    #[test]
    fn test_duplicate_categories_keep_first_slot() {
        let colors = ColorMap::new(["FT", "B5", "FT", "B4"]);
        assert_eq!(colors.len(), 3);
        assert_eq!(colors.color("FT"), SET1[0]);
        assert_eq!(colors.color("B4"), SET1[2]);
    }

    #[test]
    fn test_palette_wraps() {
        let categories: Vec<String> = (0..11).map(|i| format!("c{}", i)).collect();
        let colors = ColorMap::new(categories);
        assert_eq!(colors.color("c9"), SET1[0]);
        assert_eq!(colors.color("c10"), SET1[1]);
    }
}
