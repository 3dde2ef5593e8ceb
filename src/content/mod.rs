pub mod builtin;
pub mod loader;

use serde::Deserialize;

/// A gallery entry. `title` doubles as the list key and must be unique.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// External URL, or `#` while the project has no public page
    #[serde(default = "placeholder_href")]
    pub href: String,
}

/// One entry of the experience timeline
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExperienceRole {
    /// Free-text date range ("2021 – Present")
    pub period: String,
    pub title: String,
    pub org: String,
    #[serde(default = "placeholder_href")]
    pub org_link: String,
    #[serde(default)]
    pub points: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NavLink {
    /// In-page anchor, e.g. `#projects`
    pub href: String,
    pub label: String,
}

impl NavLink {
    /// The section this link scrolls to, if the anchor names one.
    pub fn target(&self) -> Option<SectionId> {
        self.href.strip_prefix('#').and_then(SectionId::from_anchor)
    }
}

/// Short figure shown as a stat card in the About section
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Stat {
    pub value: String,
    pub caption: String,
}

/// Owner copy used by the hero, About section and footer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub tagline: String,
    #[serde(default)]
    pub about: Vec<String>,
    pub email: String,
    #[serde(default)]
    pub stats: Vec<Stat>,
}

/// Page regions that own an anchor, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionId {
    About,
    Projects,
    Skills,
    Experience,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::About,
        SectionId::Projects,
        SectionId::Skills,
        SectionId::Experience,
        SectionId::Contact,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::About => "about",
            SectionId::Projects => "projects",
            SectionId::Skills => "skills",
            SectionId::Experience => "experience",
            SectionId::Contact => "contact",
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.anchor() == anchor)
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Small label shown above the section title
    pub fn kicker(self) -> &'static str {
        match self {
            SectionId::About => "Introduction",
            SectionId::Projects => "Selected work",
            SectionId::Skills => "Toolbox",
            SectionId::Experience => "Career",
            SectionId::Contact => "Say hello",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            SectionId::About => "About me",
            SectionId::Projects => "Projects",
            SectionId::Skills => "Skills",
            SectionId::Experience => "Experience",
            SectionId::Contact => "Contact",
        }
    }
}

/// Everything the page displays. Built once at startup and only read after.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub roles: Vec<ExperienceRole>,
    #[serde(default = "builtin::nav_links")]
    pub nav: Vec<NavLink>,
}

fn placeholder_href() -> String {
    "#".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_round_trip_in_page_order() {
        let anchors: Vec<&str> = SectionId::ALL.iter().map(|s| s.anchor()).collect();
        assert_eq!(anchors, ["about", "projects", "skills", "experience", "contact"]);
        for (i, s) in SectionId::ALL.iter().enumerate() {
            assert_eq!(SectionId::from_anchor(s.anchor()), Some(*s));
            assert_eq!(s.index(), i);
        }
        assert_eq!(SectionId::from_anchor("hero"), None);
    }

    #[test]
    fn nav_link_target() {
        let link = NavLink { href: "#skills".into(), label: "Skills".into() };
        assert_eq!(link.target(), Some(SectionId::Skills));
        let bare = NavLink { href: "skills".into(), label: "Skills".into() };
        assert_eq!(bare.target(), None);
    }
}
