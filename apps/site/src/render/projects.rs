//! Projects page: the flat list of showcased work, linked where a project
//! has an external home.

use crate::assets::LoadedAssets;
use crate::content::ContentStore;
use crate::render::{escape_html, page, ViewState};

pub fn render_projects(content: &ContentStore, assets: &LoadedAssets, view: &ViewState) -> String {
    let mut body = String::from(
        "<section>\n<h1>Projects &amp; Accomplishments</h1>\n<ul class=\"project-list\">\n",
    );
    for entry in content.gallery() {
        match &entry.link {
            Some(link) => body.push_str(&format!(
                "<li><a href=\"{}\" target=\"_blank\">{}</a></li>\n",
                escape_html(link),
                escape_html(&entry.title)
            )),
            None => body.push_str(&format!("<li>{}</li>\n", escape_html(&entry.title))),
        }
    }
    body.push_str("</ul>\n</section>\n");
    page(
        "Projects | Yuxing Liu",
        assets.stylesheet.as_deref(),
        view.tab,
        &body,
    )
}
