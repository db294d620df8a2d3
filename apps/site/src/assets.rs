//! Asset Loader — one-time best-effort reads of optional local files.
//!
//! Each of the three optional assets (stylesheet, résumé PDF, profile photo)
//! loads independently at startup. A missing or unreadable file logs a
//! warning and leaves its slot empty; the renderer substitutes an inline
//! placeholder for that element only.

use std::path::Path;

use bytes::Bytes;
use tracing::{info, warn};

use crate::config::Config;
use crate::errors::AssetError;
use crate::models::Profile;

/// A binary asset held in memory for the process lifetime.
#[derive(Debug, Clone)]
pub struct AssetFile {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Bytes,
}

/// Whatever subset of the optional assets was present at startup.
#[derive(Debug, Clone, Default)]
pub struct LoadedAssets {
    pub stylesheet: Option<String>,
    pub resume: Option<AssetFile>,
    pub profile_image: Option<AssetFile>,
}

/// Loads all optional assets, degrading per file. Never fails.
pub fn load_assets(config: &Config, profile: &Profile) -> LoadedAssets {
    let stylesheet = match read_text_asset(&config.styles_dir.join("main.css")) {
        Ok(css) => {
            info!("Stylesheet loaded ({} bytes)", css.len());
            Some(css)
        }
        Err(e) => {
            warn!("Stylesheet unavailable, falling back to inline styles: {e}");
            None
        }
    };

    let resume = profile
        .resume_document
        .as_deref()
        .and_then(|name| load_binary(config, name, "Résumé"));
    let profile_image = profile
        .profile_image
        .as_deref()
        .and_then(|name| load_binary(config, name, "Profile image"));

    LoadedAssets {
        stylesheet,
        resume,
        profile_image,
    }
}

fn load_binary(config: &Config, file_name: &str, what: &str) -> Option<AssetFile> {
    let path = config.assets_dir.join(file_name);
    match read_binary_asset(&path) {
        Ok(bytes) => {
            info!("{what} loaded ({} bytes)", bytes.len());
            Some(AssetFile {
                file_name: file_name.to_string(),
                content_type: content_type_for(file_name),
                bytes,
            })
        }
        Err(e) => {
            warn!("{what} unavailable, element will be hidden: {e}");
            None
        }
    }
}

pub fn read_text_asset(path: &Path) -> Result<String, AssetError> {
    std::fs::read_to_string(path).map_err(|source| classify_io_error(path, source))
}

pub fn read_binary_asset(path: &Path) -> Result<Bytes, AssetError> {
    std::fs::read(path)
        .map(Bytes::from)
        .map_err(|source| classify_io_error(path, source))
}

/// Content type by file extension — the same discriminator the renderer
/// uses to pick a display widget.
pub fn content_type_for(file_name: &str) -> &'static str {
    let ext = file_name.rsplit('.').next().unwrap_or_default();
    if ext.eq_ignore_ascii_case("pdf") {
        "application/pdf"
    } else if ext.eq_ignore_ascii_case("png") {
        "image/png"
    } else if ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg") {
        "image/jpeg"
    } else if ext.eq_ignore_ascii_case("css") {
        "text/css"
    } else {
        "application/octet-stream"
    }
}

fn classify_io_error(path: &Path, source: std::io::Error) -> AssetError {
    if source.kind() == std::io::ErrorKind::NotFound {
        AssetError::NotFound {
            path: path.to_path_buf(),
        }
    } else {
        AssetError::Unreadable {
            path: path.to_path_buf(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn make_config(assets_dir: PathBuf, styles_dir: PathBuf) -> Config {
        Config {
            port: 0,
            assets_dir,
            styles_dir,
            rust_log: "info".to_string(),
        }
    }

    fn make_profile() -> Profile {
        Profile {
            name: "Test".to_string(),
            description: String::new(),
            email: String::new(),
            linkedin_url: String::new(),
            github_url: String::new(),
            profile_image: Some("profile.jpg".to_string()),
            resume_document: Some("resume.pdf".to_string()),
        }
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_text_asset(&dir.path().join("main.css")).unwrap_err();
        assert!(matches!(err, AssetError::NotFound { .. }));
    }

    #[test]
    fn test_present_text_asset_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("main.css");
        std::fs::write(&path, ".timeline { color: red; }").unwrap();
        assert_eq!(read_text_asset(&path).unwrap(), ".timeline { color: red; }");
    }

    #[test]
    fn test_present_binary_asset_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.pdf");
        std::fs::write(&path, b"%PDF-1.4").unwrap();
        let bytes = read_binary_asset(&path).unwrap();
        assert_eq!(&bytes[..], b"%PDF-1.4");
    }

    #[test]
    fn test_assets_fail_independently() {
        // Only the résumé exists; the stylesheet and photo slots stay empty.
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("resume.pdf"), b"%PDF-1.4").unwrap();
        let config = make_config(dir.path().to_path_buf(), dir.path().join("styles"));

        let assets = load_assets(&config, &make_profile());
        assert!(assets.stylesheet.is_none());
        assert!(assets.profile_image.is_none());
        let resume = assets.resume.expect("resume should have loaded");
        assert_eq!(resume.content_type, "application/pdf");
        assert_eq!(resume.file_name, "resume.pdf");
    }

    #[test]
    fn test_all_assets_present() {
        let dir = tempfile::tempdir().unwrap();
        let styles = dir.path().join("styles");
        std::fs::create_dir(&styles).unwrap();
        std::fs::write(styles.join("main.css"), "body {}").unwrap();
        std::fs::write(dir.path().join("resume.pdf"), b"%PDF-1.4").unwrap();
        std::fs::write(dir.path().join("profile.jpg"), b"\xff\xd8\xff").unwrap();
        let config = make_config(dir.path().to_path_buf(), styles);

        let assets = load_assets(&config, &make_profile());
        assert!(assets.stylesheet.is_some());
        assert_eq!(assets.resume.unwrap().content_type, "application/pdf");
        assert_eq!(assets.profile_image.unwrap().content_type, "image/jpeg");
    }

    #[test]
    fn test_content_type_by_extension() {
        assert_eq!(content_type_for("a.pdf"), "application/pdf");
        assert_eq!(content_type_for("a.PNG"), "image/png");
        assert_eq!(content_type_for("a.jpeg"), "image/jpeg");
        assert_eq!(content_type_for("main.css"), "text/css");
        assert_eq!(content_type_for("noext"), "application/octet-stream");
    }
}
