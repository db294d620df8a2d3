//! Home page: hero, education & skills, experience timeline, filterable
//! project gallery, and the chart dashboard.

use crate::assets::LoadedAssets;
use crate::charts::Dashboard;
use crate::content::{ContentStore, PAGE_TITLE};
use crate::filter::filter_gallery;
use crate::models::{Category, GalleryEntry, MediaRef};
use crate::render::{escape_html, page, ViewState};

/// Translates the declarative chart specs into Plotly traces in the browser.
const DASHBOARD_JS: &str = "\
function renderDashboard(d) {\n\
  Plotly.newPlot('chart-pie', [{type: 'pie',\n\
    labels: d.category_pie.slices.map(s => s.label),\n\
    values: d.category_pie.slices.map(s => s.value)}],\n\
    {title: d.category_pie.title});\n\
  Plotly.newPlot('chart-bar', [{type: 'bar',\n\
    x: d.category_bar.labels, y: d.category_bar.values,\n\
    text: d.category_bar.annotations, textposition: 'outside'}],\n\
    {title: d.category_bar.title,\n\
     xaxis: {title: d.category_bar.x_title},\n\
     yaxis: {title: d.category_bar.y_title}});\n\
  Plotly.newPlot('chart-line', [{type: 'scatter', mode: 'lines+markers',\n\
    x: d.growth_line.years, y: d.growth_line.totals,\n\
    text: d.growth_line.hover_texts, hoverinfo: 'text+y'}],\n\
    {title: d.growth_line.title,\n\
     xaxis: {title: d.growth_line.x_title},\n\
     yaxis: {title: d.growth_line.y_title}});\n\
}";

/// Renders the full home page for one view state.
pub fn render_home(
    content: &ContentStore,
    assets: &LoadedAssets,
    dashboard: &Dashboard,
    view: &ViewState,
) -> String {
    let mut body = String::new();
    body.push_str(&hero_section(content, assets));
    body.push_str(&education_skills_section(content));
    body.push_str(&timeline_section(content));
    body.push_str(&projects_section(content, view));
    body.push_str(&dashboard_section(dashboard));
    page(PAGE_TITLE, assets.stylesheet.as_deref(), view.tab, &body)
}

// ────────────────────────────────────────────────────────────────────────────
// Sections
// ────────────────────────────────────────────────────────────────────────────

fn hero_section(content: &ContentStore, assets: &LoadedAssets) -> String {
    let profile = content.profile();
    let mut html = String::from("<section class=\"hero\">\n<div class=\"hero-side\">\n");

    match &assets.profile_image {
        Some(image) => html.push_str(&format!(
            "<img class=\"profile-photo\" src=\"/assets/{}\" alt=\"{}\" width=\"200\">\n",
            image.file_name,
            escape_html(&profile.name)
        )),
        None => html.push_str("<div class=\"profile-photo placeholder\">Photo unavailable</div>\n"),
    }

    match &assets.resume {
        Some(resume) => html.push_str(&format!(
            "<a class=\"resume-download\" href=\"/assets/{}\" download>\u{1F4C4} Download Resume</a>\n",
            resume.file_name
        )),
        None => html.push_str("<p class=\"notice\">R\u{e9}sum\u{e9} not available.</p>\n"),
    }

    html.push_str(&format!(
        "<div class=\"social-row\">\
         <a href=\"{linkedin}\" target=\"_blank\"><img src=\"https://cdn.jsdelivr.net/npm/simple-icons@v6/icons/linkedin.svg\" width=\"24\" alt=\"LinkedIn\"></a>\
         <a href=\"{github}\" target=\"_blank\"><img src=\"https://cdn.jsdelivr.net/npm/simple-icons@v6/icons/github.svg\" width=\"24\" alt=\"GitHub\"></a>\
         <a href=\"mailto:{email}\"><img src=\"https://cdn.jsdelivr.net/npm/simple-icons@v6/icons/gmail.svg\" width=\"24\" alt=\"Email\"></a>\
         </div>\n",
        linkedin = escape_html(&profile.linkedin_url),
        github = escape_html(&profile.github_url),
        email = escape_html(&profile.email),
    ));

    html.push_str("</div>\n<div class=\"hero-main\">\n");
    html.push_str(&format!("<h1>{}</h1>\n", escape_html(&profile.name)));
    html.push_str(&format!("<p>{}</p>\n", escape_html(&profile.description)));
    html.push_str("</div>\n</section>\n");
    html
}

fn education_skills_section(content: &ContentStore) -> String {
    let education = content.education();
    let mut html = String::from("<section class=\"columns\">\n<div class=\"column\">\n");
    html.push_str("<h2>Education</h2>\n");
    html.push_str(&format!(
        "<p><strong>{}</strong></p>\n<p><em>{}</em></p>\n",
        escape_html(&education.institution),
        escape_html(&education.degree)
    ));
    html.push_str("</div>\n<div class=\"column\">\n<h2>Skills</h2>\n");
    for group in content.skills() {
        html.push_str(&format!(
            "<h4>{} <span class=\"kpi\">{}</span></h4>\n<ul>",
            escape_html(&group.name),
            group.kpi_count()
        ));
        for skill in &group.skills {
            html.push_str(&format!("<li>{}</li>", escape_html(skill)));
        }
        html.push_str("</ul>\n");
    }
    html.push_str("</div>\n</section>\n");
    html
}

fn timeline_section(content: &ContentStore) -> String {
    let mut html =
        String::from("<section>\n<h2>Professional Experience</h2>\n<div class=\"timeline\">\n");
    for entry in content.experience() {
        html.push_str("<div class=\"timeline-item\"><div class=\"tl-content\">");
        html.push_str(&format!(
            "<h4>{}<span class=\"tl-date\">{}</span></h4><ul>",
            escape_html(&entry.role),
            escape_html(&entry.date_range)
        ));
        for bullet in &entry.bullets {
            html.push_str(&format!("<li>{}</li>", escape_html(bullet)));
        }
        html.push_str("</ul></div></div>\n");
    }
    html.push_str("</div>\n</section>\n");
    html
}

fn projects_section(content: &ContentStore, view: &ViewState) -> String {
    let mut html = String::from("<section>\n<h2>Projects</h2>\n<div class=\"filter-row\">Filter by: ");
    for option in Category::OPTIONS {
        if option == view.selection {
            html.push_str(&format!(
                "<span class=\"filter active\">{}</span>",
                escape_html(option.label())
            ));
        } else {
            html.push_str(&format!(
                "<a class=\"filter\" href=\"{}\">{}</a>",
                ViewState::home_link(option),
                escape_html(option.label())
            ));
        }
    }
    html.push_str("</div>\n");

    let filtered = filter_gallery(content.gallery(), view.selection);
    if filtered.is_empty() {
        html.push_str("<p class=\"notice\">No projects in this category.</p>\n");
    } else {
        html.push_str("<div class=\"project-grid\">\n");
        for entry in filtered {
            html.push_str(&project_card(entry));
        }
        html.push_str("</div>\n");
    }
    html.push_str("</section>\n");
    html
}

fn project_card(entry: &GalleryEntry) -> String {
    let media = match &entry.media {
        MediaRef::Document { path } => format!(
            "<embed class=\"card-media\" src=\"/{path}\" type=\"application/pdf\" height=\"150\">"
        ),
        MediaRef::Image { path } => format!(
            "<img class=\"card-media\" src=\"/{path}\" alt=\"{}\">",
            escape_html(&entry.title)
        ),
        MediaRef::External { url } => format!(
            "<a class=\"card-media external\" href=\"{0}\" target=\"_blank\">{0}</a>",
            escape_html(url)
        ),
    };

    let title = match &entry.link {
        Some(link) => format!(
            "<a href=\"{}\" target=\"_blank\">{}</a>",
            escape_html(link),
            escape_html(&entry.title)
        ),
        None => escape_html(&entry.title),
    };

    format!(
        "<div class=\"project-card\">{media}<h5>{title}</h5><p class=\"summary\">{}</p></div>\n",
        escape_html(&entry.summary)
    )
}

fn dashboard_section(dashboard: &Dashboard) -> String {
    let spec_json = serde_json::to_string(dashboard).unwrap_or_else(|_| "null".to_string());
    format!(
        "<section>\n<h2>{title}</h2>\n\
         <div id=\"chart-pie\"></div>\n\
         <div id=\"chart-bar\"></div>\n\
         <div id=\"chart-line\"></div>\n\
         <script src=\"https://cdn.plot.ly/plotly-2.32.0.min.js\"></script>\n\
         <script>\n{js}\nrenderDashboard({spec_json});\n</script>\n\
         </section>\n",
        title = escape_html(&dashboard.title),
        js = DASHBOARD_JS,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{AssetFile, LoadedAssets};
    use crate::charts::build_dashboard;
    use bytes::Bytes;

    fn make_assets_with_resume() -> LoadedAssets {
        LoadedAssets {
            stylesheet: Some(".timeline {}".to_string()),
            resume: Some(AssetFile {
                file_name: "resume.pdf".to_string(),
                content_type: "application/pdf",
                bytes: Bytes::from_static(b"%PDF-1.4"),
            }),
            profile_image: None,
        }
    }

    fn make_page(assets: &LoadedAssets, selection: Category) -> String {
        let content = ContentStore::new();
        let dashboard = build_dashboard(&content).unwrap();
        render_home(&content, assets, &dashboard, &ViewState::home(selection))
    }

    #[test]
    fn test_missing_resume_hides_download_control() {
        let page = make_page(&LoadedAssets::default(), Category::All);
        assert!(!page.contains("Download Resume"));
        assert!(!page.contains("resume-download"));
        assert!(!page.contains(" download>"));
        // The rest of the page still renders.
        assert!(page.contains("Professional Experience"));
        assert!(page.contains("project-card"));
        assert!(page.contains("chart-pie"));
    }

    #[test]
    fn test_present_resume_renders_download_control() {
        let page = make_page(&make_assets_with_resume(), Category::All);
        assert!(page.contains("href=\"/assets/resume.pdf\" download"));
    }

    #[test]
    fn test_missing_photo_renders_placeholder() {
        let page = make_page(&LoadedAssets::default(), Category::All);
        assert!(page.contains("Photo unavailable"));
    }

    #[test]
    fn test_all_selection_shows_every_card() {
        let page = make_page(&LoadedAssets::default(), Category::All);
        assert_eq!(page.matches("project-card").count(), 3);
        assert!(page.contains("RunBuggy Internship Final Poster"));
        assert!(page.contains("Outage Severity Across the U.S."));
        assert!(page.contains("M&amp;A Merger &amp; Acquisition Predictor"));
    }

    #[test]
    fn test_aws_selection_shows_no_results_state() {
        // "AWS Cloud Computing" has no matching entries in the shipped
        // content — the page shows the informational state, not an error.
        let page = make_page(&LoadedAssets::default(), Category::AwsCloudComputing);
        assert!(page.contains("No projects in this category."));
        assert!(!page.contains("project-card"));
    }

    #[test]
    fn test_active_filter_is_not_a_link() {
        let page = make_page(&LoadedAssets::default(), Category::MachineLearningModel);
        assert!(page.contains("<span class=\"filter active\">Machine Learning Model</span>"));
        // The other options round-trip the view state through links.
        assert!(page.contains("href=\"/?category=AWS%20Cloud%20Computing\""));
        assert!(page.contains("<a class=\"filter\" href=\"/\">All</a>"));
    }

    #[test]
    fn test_document_media_embeds_viewer() {
        let page = make_page(&LoadedAssets::default(), Category::All);
        assert!(page.contains("<embed class=\"card-media\" src=\"/assets/runbuggy-final-poster.pdf\""));
        assert!(page.contains("<img class=\"card-media\" src=\"/assets/outage-severity.png\""));
    }

    #[test]
    fn test_dashboard_embeds_specs_and_collaborator() {
        let page = make_page(&LoadedAssets::default(), Category::All);
        assert!(page.contains("cdn.plot.ly"));
        assert!(page.contains("renderDashboard("));
        assert!(page.contains("\"category_pie\""));
        assert!(page.contains("\"growth_line\""));
    }

    #[test]
    fn test_skill_kpi_counts_render() {
        let page = make_page(&LoadedAssets::default(), Category::All);
        assert!(page.contains("Languages &amp; Tools <span class=\"kpi\">7</span>"));
    }
}
