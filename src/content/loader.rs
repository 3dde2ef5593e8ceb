//! Loading page content from a TOML file and checking its invariants.

use std::collections::HashSet;
use std::path::Path;

use url::Url;

use super::{Portfolio, SectionId};
use crate::error::{FolioError, Result};

impl Portfolio {
    /// Parse and validate content from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let portfolio: Portfolio = toml::from_str(content)?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    /// Read content from `path`, or fall back to the builtin content when
    /// no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                log::info!("Loading content from {}", path.display());
                let text = std::fs::read_to_string(path)?;
                Self::from_toml_str(&text)
            }
            None => Ok(Self::builtin()),
        }
    }

    /// Check the invariants the page relies on.
    pub fn validate(&self) -> Result<()> {
        let mut titles = HashSet::new();
        for project in &self.projects {
            if project.title.trim().is_empty() {
                return Err(FolioError::content("project title cannot be empty"));
            }
            if !titles.insert(project.title.as_str()) {
                return Err(FolioError::content(format!(
                    "duplicate project title: {}",
                    project.title
                )));
            }
            validate_link("project href", &project.href)?;
        }

        for role in &self.roles {
            validate_link("org_link", &role.org_link)?;
        }

        for link in &self.nav {
            if link.target().is_none() {
                return Err(FolioError::content(format!(
                    "nav link {:?} does not point at a section (expected one of {})",
                    link.href,
                    SectionId::ALL
                        .iter()
                        .map(|s| format!("#{}", s.anchor()))
                        .collect::<Vec<_>>()
                        .join(", ")
                )));
            }
        }

        if self.profile.name.trim().is_empty() {
            return Err(FolioError::content("profile name cannot be empty"));
        }

        Ok(())
    }
}

/// Accept the `#` placeholder or an absolute http(s) URL.
fn validate_link(field: &str, href: &str) -> Result<()> {
    if href == "#" {
        return Ok(());
    }
    match Url::parse(href) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(FolioError::content(format!(
                "{field} {href:?}: unsupported URL scheme {scheme}"
            ))),
        },
        Err(e) => Err(FolioError::content(format!("{field} {href:?}: {e}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const MINIMAL: &str = r##"
        skills = ["Rust", "Go"]

        [profile]
        name = "Sam"
        role = "Engineer"
        tagline = "Hi"
        email = "sam@example.com"

        [[projects]]
        title = "One"
        description = "First"
        tags = ["b", "a", "b"]
        href = "https://example.com/one"

        [[projects]]
        title = "Two"
        description = "Second"
    "##;

    #[test]
    fn parses_minimal_content_in_declared_order() {
        let p = Portfolio::from_toml_str(MINIMAL).unwrap();
        assert_eq!(p.projects.len(), 2);
        assert_eq!(p.projects[0].title, "One");
        // Tags are kept verbatim, duplicates included.
        assert_eq!(p.projects[0].tags, vec!["b", "a", "b"]);
        assert_eq!(p.projects[1].href, "#");
        assert_eq!(p.skills, vec!["Rust", "Go"]);
        // Nav falls back to one link per section.
        assert_eq!(p.nav.len(), SectionId::ALL.len());
    }

    #[test]
    fn rejects_duplicate_titles() {
        let text = MINIMAL.replace("title = \"Two\"", "title = \"One\"");
        let err = Portfolio::from_toml_str(&text).unwrap_err();
        assert!(err.to_string().contains("duplicate project title"));
    }

    #[test]
    fn rejects_non_http_links() {
        let text = MINIMAL.replace("https://example.com/one", "ftp://example.com/one");
        assert!(Portfolio::from_toml_str(&text).is_err());
        let text = MINIMAL.replace("https://example.com/one", "not a url");
        assert!(Portfolio::from_toml_str(&text).is_err());
    }

    #[test]
    fn rejects_nav_without_section() {
        let mut p = Portfolio::builtin();
        p.nav[0].href = "#blog".into();
        assert!(p.validate().is_err());
    }

    #[test]
    fn load_without_path_is_builtin() {
        assert_eq!(Portfolio::load(None).unwrap(), Portfolio::builtin());
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MINIMAL.as_bytes()).unwrap();
        let p = Portfolio::load(Some(file.path())).unwrap();
        assert_eq!(p.profile.name, "Sam");
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Portfolio::load(Some(Path::new("/nonexistent/folio.toml"))).unwrap_err();
        assert!(matches!(err, FolioError::Io(_)));
    }
}
