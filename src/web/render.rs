//! Page rendering.
//!
//! The renderer is a named-template registry: handlers hand it a template
//! name and a bag of named values and get HTML back. Templates are embedded
//! at compile time so the binary deploys standalone.

use crate::errors::Result;
use minijinja::{Environment, value::Value};

/// All page templates, compiled into one environment at startup.
pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    /// Loads every page template into the registry.
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.add_template("base.html", include_str!("../../templates/base.html"))?;
        env.add_template("home.html", include_str!("../../templates/home.html"))?;
        env.add_template("error.html", include_str!("../../templates/error.html"))?;
        env.add_template(
            "admin_login.html",
            include_str!("../../templates/admin_login.html"),
        )?;
        env.add_template(
            "create_admin.html",
            include_str!("../../templates/create_admin.html"),
        )?;
        env.add_template(
            "admin_page.html",
            include_str!("../../templates/admin_page.html"),
        )?;
        env.add_template(
            "update_league.html",
            include_str!("../../templates/update_league.html"),
        )?;
        env.add_template(
            "update_announcement.html",
            include_str!("../../templates/update_announcement.html"),
        )?;
        env.add_template(
            "update_resource.html",
            include_str!("../../templates/update_resource.html"),
        )?;
        env.add_template(
            "update_quick_link.html",
            include_str!("../../templates/update_quick_link.html"),
        )?;
        env.add_template(
            "league_submit_scores.html",
            include_str!("../../templates/league_submit_scores.html"),
        )?;
        env.add_template(
            "league_sign_up.html",
            include_str!("../../templates/league_sign_up.html"),
        )?;
        env.add_template(
            "league_request_info.html",
            include_str!("../../templates/league_request_info.html"),
        )?;
        env.add_template(
            "league_standings.html",
            include_str!("../../templates/league_standings.html"),
        )?;
        Ok(Self { env })
    }

    /// Renders the named template with the given values.
    pub fn render(&self, name: &str, ctx: Value) -> Result<String> {
        Ok(self.env.get_template(name)?.render(ctx)?)
    }
}
