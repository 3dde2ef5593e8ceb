//! Static single-page HTML rendering of the portfolio.
//!
//! The document has no 3D context: the hero backdrop is an empty placeholder
//! container, which is the degraded path of the native scene. The only
//! script is the contact form's submit handler, which never transmits and
//! only flips the button to its sent label.

use std::fmt::Write;

use crate::content::{ExperienceRole, Portfolio, Project, SectionId};
use crate::form::{Field, SENT_LABEL, SUBMIT_LABEL};

const STYLE: &str = r#"
:root { color-scheme: dark; }
* { box-sizing: border-box; }
body { margin: 0; font-family: system-ui, sans-serif; background: #090a14; color: #bec2d7; }
.bg { position: fixed; inset: 0; pointer-events: none; z-index: -1; }
.bg-wash { background: radial-gradient(60% 50% at 20% 0%, rgba(124,92,255,.18), transparent),
           radial-gradient(40% 40% at 85% 35%, rgba(34,211,238,.12), transparent); }
.bg-grid { background-image: linear-gradient(rgba(255,255,255,.03) 1px, transparent 1px),
           linear-gradient(90deg, rgba(255,255,255,.03) 1px, transparent 1px);
           background-size: 48px 48px; }
.bg-vignette { background: radial-gradient(ellipse at center, transparent 55%, rgba(0,0,0,.6)); }
nav.navbar { position: fixed; top: 0; left: 0; right: 0; z-index: 10; display: flex; gap: 24px;
             justify-content: center; padding: 18px; backdrop-filter: blur(8px); background: rgba(9,10,20,.6); }
nav.navbar a { color: #8086a5; text-decoration: none; }
main, footer { max-width: 1040px; margin: 0 auto; padding: 0 24px; }
.hero { position: relative; min-height: 100vh; display: flex; flex-direction: column; justify-content: center; }
.hero-scene { position: absolute; inset: 0; z-index: -1; }
section { padding: 96px 0 48px; scroll-margin-top: 64px; }
.kicker { text-transform: uppercase; letter-spacing: .2em; font-size: 12px; color: #22d3ee; }
.cards, .stats { display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 16px; }
.card, .stat { border: 1px solid #2c304e; border-radius: 12px; padding: 16px; background: #121424; }
.tags { display: flex; flex-wrap: wrap; gap: 6px; padding: 0; list-style: none; }
.tag { border-radius: 999px; padding: 4px 10px; font-size: 12px; background: #242048; color: #c4b8ff; }
.skills { display: grid; grid-template-columns: repeat(3, 1fr); gap: 12px; padding: 0; list-style: none; }
.timeline { list-style: none; padding: 0; border-left: 2px solid #2c304e; }
.role { padding: 0 0 24px 20px; }
form.contact { display: grid; gap: 12px; max-width: 560px; }
input, textarea { width: 100%; padding: 10px; border-radius: 8px; border: 1px solid #2c304e; background: #121424; color: inherit; }
"#;

/// Escape text for HTML element content and attribute values.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the full document. `year` feeds the footer copyright line.
pub fn render_document(portfolio: &Portfolio, resume_href: &str, year: i32) -> String {
    let mut html = String::with_capacity(16 * 1024);
    let p = &portfolio.profile;

    // `write!` into a String cannot fail.
    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{} | {}</title>\n<style>{}</style>\n</head>\n<body>\n",
        escape(&p.name),
        escape(&p.role),
        STYLE
    );

    html.push_str(
        "<div class=\"bg bg-wash\" aria-hidden=\"true\"></div>\n\
         <div class=\"bg bg-grid\" aria-hidden=\"true\"></div>\n\
         <div class=\"bg bg-vignette\" aria-hidden=\"true\"></div>\n",
    );

    html.push_str("<nav class=\"navbar\">\n");
    for link in &portfolio.nav {
        let _ = writeln!(
            html,
            "  <a href=\"{}\">{}</a>",
            escape(&link.href),
            escape(&link.label)
        );
    }
    html.push_str("</nav>\n<main>\n");

    let _ = write!(
        html,
        "<header class=\"hero\">\n  <div class=\"hero-scene\" data-scene=\"placeholder\"></div>\n  \
         <p class=\"kicker\">{}</p>\n  <h1>{}</h1>\n  <p class=\"tagline\">{}</p>\n  \
         <div class=\"cta\"><a href=\"#projects\">View projects</a> <a href=\"#contact\">Get in touch</a></div>\n\
         </header>\n",
        escape(&p.role),
        escape(&p.name),
        escape(&p.tagline)
    );

    for id in SectionId::ALL {
        let _ = write!(
            html,
            "<section id=\"{}\">\n  <p class=\"kicker\">{}</p>\n  <h2>{}</h2>\n",
            id.anchor(),
            escape(id.kicker()),
            escape(id.title())
        );
        match id {
            SectionId::About => render_about(&mut html, portfolio),
            SectionId::Projects => render_projects(&mut html, &portfolio.projects),
            SectionId::Skills => render_skills(&mut html, &portfolio.skills),
            SectionId::Experience => render_roles(&mut html, &portfolio.roles),
            SectionId::Contact => render_contact(&mut html, &p.email),
        }
        html.push_str("</section>\n");
    }

    let _ = write!(
        html,
        "</main>\n<footer>\n  <p>&copy; {} {}</p>\n  \
         <a class=\"resume\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">R\u{e9}sum\u{e9}</a>\n\
         </footer>\n</body>\n</html>\n",
        year,
        escape(&p.name),
        escape(resume_href)
    );

    html
}

fn render_about(html: &mut String, portfolio: &Portfolio) {
    for para in &portfolio.profile.about {
        let _ = writeln!(html, "  <p>{}</p>", escape(para));
    }
    html.push_str("  <div class=\"stats\">\n");
    for stat in &portfolio.profile.stats {
        let _ = writeln!(
            html,
            "    <div class=\"stat\"><strong>{}</strong><span>{}</span></div>",
            escape(&stat.value),
            escape(&stat.caption)
        );
    }
    html.push_str("  </div>\n");
}

fn render_projects(html: &mut String, projects: &[Project]) {
    html.push_str("  <div class=\"cards\">\n");
    for project in projects {
        let _ = write!(
            html,
            "    <article class=\"card\" data-key=\"{}\">\n      <h3><a href=\"{}\"{}>{}</a></h3>\n      <p>{}</p>\n      <ul class=\"tags\">",
            escape(&project.title),
            escape(&project.href),
            if project.href == "#" { "" } else { " target=\"_blank\" rel=\"noopener noreferrer\"" },
            escape(&project.title),
            escape(&project.description)
        );
        for tag in &project.tags {
            let _ = write!(html, "<li class=\"tag\">{}</li>", escape(tag));
        }
        html.push_str("</ul>\n    </article>\n");
    }
    html.push_str("  </div>\n");
}

fn render_skills(html: &mut String, skills: &[String]) {
    html.push_str("  <ul class=\"skills\">\n");
    for skill in skills {
        let _ = writeln!(html, "    <li class=\"skill\">{}</li>", escape(skill));
    }
    html.push_str("  </ul>\n");
}

fn render_roles(html: &mut String, roles: &[ExperienceRole]) {
    html.push_str("  <ol class=\"timeline\">\n");
    for role in roles {
        let _ = write!(
            html,
            "    <li class=\"role\">\n      <span class=\"period\">{}</span>\n      <h3>{} &middot; <a href=\"{}\">{}</a></h3>\n      <ul>",
            escape(&role.period),
            escape(&role.title),
            escape(&role.org_link),
            escape(&role.org)
        );
        for point in &role.points {
            let _ = write!(html, "<li>{}</li>", escape(point));
        }
        html.push_str("</ul>\n    </li>\n");
    }
    html.push_str("  </ol>\n");
}

fn render_contact(html: &mut String, email: &str) {
    let _ = writeln!(
        html,
        "  <p>Prefer email? <a href=\"mailto:{0}\">{0}</a></p>",
        escape(email)
    );
    // Native validation blocks invalid input before the handler runs.
    let on_submit = format!(
        "event.preventDefault(); this.querySelector('button').textContent = '{SENT_LABEL}';"
    );
    let _ = write!(
        html,
        "  <form class=\"contact\" onsubmit=\"{}\">\n\
         \x20   <label>{} <input name=\"name\" type=\"text\" required></label>\n\
         \x20   <label>{} <input name=\"email\" type=\"email\" required></label>\n\
         \x20   <label>{} <input name=\"subject\" type=\"text\"></label>\n\
         \x20   <label>{} <textarea name=\"message\" rows=\"5\" required></textarea></label>\n\
         \x20   <button type=\"submit\">{}</button>\n  </form>\n",
        escape(&on_submit),
        Field::Name.label(),
        Field::Email.label(),
        Field::Subject.label(),
        Field::Message.label(),
        SUBMIT_LABEL
    );
}
