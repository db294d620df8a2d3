use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Category vocabulary
// ────────────────────────────────────────────────────────────────────────────

/// The fixed filter vocabulary for the project gallery.
///
/// `All` is a filter sentinel meaning "no filter" — gallery entries never
/// carry it as a tag. Serde names match the user-facing labels, so the same
/// strings travel through query parameters and JSON unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "All")]
    All,
    #[serde(rename = "Machine Learning Model")]
    MachineLearningModel,
    #[serde(rename = "AWS Cloud Computing")]
    AwsCloudComputing,
    #[serde(rename = "Analysis & Visualization Report")]
    AnalysisVisualizationReport,
}

impl Category {
    /// Every selectable filter option, in display order.
    pub const OPTIONS: [Category; 4] = [
        Category::All,
        Category::MachineLearningModel,
        Category::AwsCloudComputing,
        Category::AnalysisVisualizationReport,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::All => "All",
            Category::MachineLearningModel => "Machine Learning Model",
            Category::AwsCloudComputing => "AWS Cloud Computing",
            Category::AnalysisVisualizationReport => "Analysis & Visualization Report",
        }
    }

}

// ────────────────────────────────────────────────────────────────────────────
// Media references
// ────────────────────────────────────────────────────────────────────────────

/// Where a gallery entry's showcase media lives, and how to display it.
///
/// Documents get an embedded viewer, images an `<img>` tag, external URLs a
/// plain link widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MediaRef {
    Image { path: String },
    Document { path: String },
    External { url: String },
}

impl MediaRef {
    /// Classifies a raw reference: `http(s)` URLs stay external, local paths
    /// are discriminated by extension (`.pdf` renders as a document,
    /// everything else as an image).
    pub fn classify(reference: &str) -> MediaRef {
        if reference.starts_with("http://") || reference.starts_with("https://") {
            return MediaRef::External {
                url: reference.to_string(),
            };
        }
        let is_document = reference
            .rsplit('.')
            .next()
            .map(|ext| ext.eq_ignore_ascii_case("pdf"))
            .unwrap_or(false);
        if is_document {
            MediaRef::Document {
                path: reference.to_string(),
            }
        } else {
            MediaRef::Image {
                path: reference.to_string(),
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Gallery entries
// ────────────────────────────────────────────────────────────────────────────

/// One showcased project: title, tags, media, optional external link, summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryEntry {
    pub title: String,
    pub categories: Vec<Category>,
    pub media: MediaRef,
    pub link: Option<String>,
    pub summary: String,
}

impl GalleryEntry {
    pub fn has_category(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_external_url() {
        let media = MediaRef::classify("https://example.com/demo");
        assert_eq!(
            media,
            MediaRef::External {
                url: "https://example.com/demo".to_string()
            }
        );
    }

    #[test]
    fn test_classify_pdf_as_document() {
        let media = MediaRef::classify("assets/poster.pdf");
        assert!(matches!(media, MediaRef::Document { .. }));
    }

    #[test]
    fn test_classify_uppercase_pdf_as_document() {
        let media = MediaRef::classify("assets/report.PDF");
        assert!(matches!(media, MediaRef::Document { .. }));
    }

    #[test]
    fn test_classify_image_extensions() {
        assert!(matches!(
            MediaRef::classify("assets/screenshot.png"),
            MediaRef::Image { .. }
        ));
        assert!(matches!(
            MediaRef::classify("assets/photo.jpg"),
            MediaRef::Image { .. }
        ));
    }

    #[test]
    fn test_category_label_round_trip() {
        // Serde names are the user-facing labels, so labels survive a trip
        // through the query-parsing path.
        for category in Category::OPTIONS {
            let json = format!("\"{}\"", category.label());
            let parsed: Category = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn test_out_of_vocabulary_label_is_rejected() {
        assert!(serde_json::from_str::<Category>("\"Quantum Computing\"").is_err());
        assert!(serde_json::from_str::<Category>("\"all\"").is_err());
    }

    #[test]
    fn test_category_serde_uses_display_labels() {
        let json = serde_json::to_string(&Category::AnalysisVisualizationReport).unwrap();
        assert_eq!(json, "\"Analysis & Visualization Report\"");
        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Category::AnalysisVisualizationReport);
    }
}
