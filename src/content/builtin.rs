//! Compiled-in page content.

use super::{ExperienceRole, NavLink, Portfolio, Profile, Project, SectionId, Stat};

impl Portfolio {
    /// The default content. Returns equal collections on every call.
    pub fn builtin() -> Self {
        Self {
            profile: profile(),
            projects: projects(),
            skills: skills(),
            roles: roles(),
            nav: nav_links(),
        }
    }
}

fn profile() -> Profile {
    Profile {
        name: "Jordan Avery".into(),
        role: "Software Engineer".into(),
        tagline: "I build fast, reliable systems and the interfaces people use to steer them."
            .into(),
        about: vec![
            "I'm a systems-minded engineer who enjoys the whole stack: from storage engines \
             and network services up to the interactive tools that sit on top of them."
                .into(),
            "Lately I've been working on real-time rendering, developer tooling and data \
             pipelines, with a soft spot for Rust and anything that runs at 60 frames a second."
                .into(),
        ],
        email: "hello@jordanavery.dev".into(),
        stats: vec![
            Stat { value: "6+".into(), caption: "Years shipping production software".into() },
            Stat { value: "20+".into(), caption: "Projects delivered end to end".into() },
            Stat { value: "3".into(), caption: "Open-source libraries maintained".into() },
        ],
    }
}

fn projects() -> Vec<Project> {
    vec![
        Project {
            title: "Orbital".into(),
            description: "A real-time 3D dashboard for satellite telemetry with \
                          frame-rate independent animation and orbit camera controls."
                .into(),
            tags: vec!["Rust".into(), "wgpu".into(), "egui".into()],
            href: "https://github.com/jordanavery/orbital".into(),
        },
        Project {
            title: "Ledgerline".into(),
            description: "An append-only event store with snapshotting and a small \
                          query language for auditing financial workflows."
                .into(),
            tags: vec!["Rust".into(), "Storage".into(), "Tokio".into()],
            href: "https://github.com/jordanavery/ledgerline".into(),
        },
        Project {
            title: "Pipewright".into(),
            description: "Declarative ETL pipelines configured in TOML, with retries, \
                          field mapping and structured logs."
                .into(),
            tags: vec!["Rust".into(), "ETL".into(), "TOML".into()],
            href: "https://github.com/jordanavery/pipewright".into(),
        },
        Project {
            title: "Lumen UI".into(),
            description: "A component kit for data-heavy internal tools: tables, \
                          charts and forms that stay responsive with large datasets."
                .into(),
            tags: vec!["TypeScript".into(), "Design Systems".into()],
            href: "#".into(),
        },
    ]
}

fn skills() -> Vec<String> {
    [
        "Rust",
        "TypeScript",
        "Python",
        "WebGPU",
        "egui",
        "PostgreSQL",
        "Docker",
        "Linux",
        "Distributed Systems",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn roles() -> Vec<ExperienceRole> {
    vec![
        ExperienceRole {
            period: "2022 – Present".into(),
            title: "Senior Software Engineer".into(),
            org: "Northwind Labs".into(),
            org_link: "https://northwind.example.com".into(),
            points: vec![
                "Led the rewrite of the ingestion service, cutting p99 latency by 70%.".into(),
                "Built the internal visualisation toolkit used by four product teams.".into(),
            ],
        },
        ExperienceRole {
            period: "2019 – 2022".into(),
            title: "Software Engineer".into(),
            org: "Fathom Analytics".into(),
            org_link: "https://fathom.example.com".into(),
            points: vec![
                "Designed the columnar cache behind the real-time reporting API.".into(),
                "Mentored new hires and ran the backend reading group.".into(),
            ],
        },
        ExperienceRole {
            period: "2018 – 2019".into(),
            title: "Junior Developer".into(),
            org: "Brightside Studio".into(),
            org_link: "https://brightside.example.com".into(),
            points: vec!["Shipped interactive marketing sites with WebGL hero scenes.".into()],
        },
    ]
}

/// One link per anchored section, in page order.
pub(crate) fn nav_links() -> Vec<NavLink> {
    SectionId::ALL
        .iter()
        .map(|s| NavLink {
            href: format!("#{}", s.anchor()),
            label: match s {
                SectionId::About => "About",
                SectionId::Projects => "Projects",
                SectionId::Skills => "Skills",
                SectionId::Experience => "Experience",
                SectionId::Contact => "Contact",
            }
            .to_string(),
        })
        .collect()
}
