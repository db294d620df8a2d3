//! Gallery Filter — pure selection of gallery entries by category.
//!
//! `All` is the identity selection. Everything else returns the subsequence
//! of entries carrying that tag, in original order. An empty result is a
//! valid outcome the renderer turns into an explicit "no projects" state,
//! not an error.

use crate::models::{Category, GalleryEntry};

/// Filters `entries` by `selection`, preserving relative order.
///
/// Deterministic, O(n), borrows the input untouched.
pub fn filter_gallery(entries: &[GalleryEntry], selection: Category) -> Vec<&GalleryEntry> {
    entries
        .iter()
        .filter(|entry| selection == Category::All || entry.has_category(selection))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MediaRef;

    fn make_entry(title: &str, categories: Vec<Category>) -> GalleryEntry {
        GalleryEntry {
            title: title.to_string(),
            categories,
            media: MediaRef::classify("assets/sample.png"),
            link: None,
            summary: "A sample project.".to_string(),
        }
    }

    /// The three-entry gallery from the end-to-end filtering scenario:
    /// {ML}, {ML, Analysis}, {AWS}.
    fn make_gallery() -> Vec<GalleryEntry> {
        vec![
            make_entry("Poster", vec![Category::MachineLearningModel]),
            make_entry(
                "Outage Study",
                vec![
                    Category::MachineLearningModel,
                    Category::AnalysisVisualizationReport,
                ],
            ),
            make_entry("Cloud Deploy", vec![Category::AwsCloudComputing]),
        ]
    }

    fn titles<'a>(entries: &[&'a GalleryEntry]) -> Vec<&'a str> {
        entries.iter().map(|e| e.title.as_str()).collect()
    }

    #[test]
    fn test_all_is_identity() {
        let gallery = make_gallery();
        let result = filter_gallery(&gallery, Category::All);
        assert_eq!(result.len(), gallery.len());
        assert_eq!(titles(&result), vec!["Poster", "Outage Study", "Cloud Deploy"]);
    }

    #[test]
    fn test_ml_selection_returns_first_two_in_order() {
        let gallery = make_gallery();
        let result = filter_gallery(&gallery, Category::MachineLearningModel);
        assert_eq!(titles(&result), vec!["Poster", "Outage Study"]);
    }

    #[test]
    fn test_result_is_subsequence_preserving_order() {
        let gallery = make_gallery();
        for selection in Category::OPTIONS {
            let result = filter_gallery(&gallery, selection);
            assert!(result.len() <= gallery.len());
            // Each filtered entry appears in the gallery after the previous
            // one did, so relative order is preserved.
            let mut last_index = 0;
            for entry in &result {
                let index = gallery
                    .iter()
                    .position(|g| std::ptr::eq(g, *entry))
                    .expect("filtered entry must come from the input gallery");
                assert!(index >= last_index);
                last_index = index;
            }
        }
    }

    #[test]
    fn test_every_returned_entry_contains_selection() {
        let gallery = make_gallery();
        let result = filter_gallery(&gallery, Category::AnalysisVisualizationReport);
        assert!(!result.is_empty());
        for entry in &result {
            assert!(entry.has_category(Category::AnalysisVisualizationReport));
        }
    }

    #[test]
    fn test_no_excluded_entry_contains_selection() {
        let gallery = make_gallery();
        let selection = Category::AnalysisVisualizationReport;
        let kept: Vec<&str> = titles(&filter_gallery(&gallery, selection));
        for entry in &gallery {
            if !kept.contains(&entry.title.as_str()) {
                assert!(!entry.has_category(selection));
            }
        }
    }

    #[test]
    fn test_no_match_returns_empty() {
        let gallery = vec![
            make_entry("Poster", vec![Category::MachineLearningModel]),
            make_entry("Report", vec![Category::AnalysisVisualizationReport]),
        ];
        let result = filter_gallery(&gallery, Category::AwsCloudComputing);
        assert!(result.is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let gallery = make_gallery();
        for selection in Category::OPTIONS {
            let once = filter_gallery(&gallery, selection);
            let owned: Vec<GalleryEntry> = once.iter().map(|e| (*e).clone()).collect();
            let twice = filter_gallery(&owned, selection);
            assert_eq!(titles(&twice), titles(&once));
        }
    }

    #[test]
    fn test_empty_gallery() {
        let result = filter_gallery(&[], Category::MachineLearningModel);
        assert!(result.is_empty());
        assert!(filter_gallery(&[], Category::All).is_empty());
    }
}
