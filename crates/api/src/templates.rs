//! Server-rendered page templates.
//!
//! Templates are compiled into the binary and registered once at startup.

use axum::response::Html;
use minijinja::Environment;
use serde::Serialize;

/// `(name, source)` of every page template.
const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../templates/base.html")),
    ("index.html", include_str!("../templates/index.html")),
    ("characters_list.html", include_str!("../templates/characters_list.html")),
    ("character_fields.html", include_str!("../templates/character_fields.html")),
    ("characters_new.html", include_str!("../templates/characters_new.html")),
    ("characters_edit.html", include_str!("../templates/characters_edit.html")),
    ("teams_list.html", include_str!("../templates/teams_list.html")),
    ("dashboard.html", include_str!("../templates/dashboard.html")),
];

/// Template renderer: a template name plus a serializable context yields HTML.
pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    /// Register every bundled template. Fails if any template has a syntax error.
    pub fn load() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        for &(name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    pub fn render<S: Serialize>(&self, name: &str, context: S) -> Result<Html<String>, minijinja::Error> {
        let template = self.env.get_template(name)?;
        Ok(Html(template.render(context)?))
    }
}

#[cfg(test)]
mod tests {
    use minijinja::context;

    use super::*;

    #[test]
    fn all_templates_parse() {
        Templates::load().unwrap();
    }

    #[test]
    fn dashboard_shows_counts() {
        let templates = Templates::load().unwrap();
        let html = templates
            .render(
                "dashboard.html",
                context! { stats => context! { characters => 7, teams => 2, identities => 5 } },
            )
            .unwrap();
        assert!(html.0.contains("<h2>7</h2>"));
        assert!(html.0.contains("<h2>5</h2>"));
    }

    #[test]
    fn character_values_are_escaped() {
        let templates = Templates::load().unwrap();
        let html = templates
            .render(
                "characters_list.html",
                context! {
                    q => "",
                    characters => vec![context! {
                        id => 1,
                        name => "<script>",
                        alias => (),
                        alignment => "villain",
                        image_url => (),
                    }],
                },
            )
            .unwrap();
        assert!(html.0.contains("&lt;script&gt;"));
        assert!(!html.0.contains("<script>"));
    }
}
