//! Unauthenticated pages.
//!
//! Error policy is uniform across every public page: a persistence failure
//! redirects to the generic error page instead of surfacing a status code.

use crate::core::{announcement, league, quick_link, resource};
use crate::web::session;
use crate::web::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum_extra::extract::SignedCookieJar;
use minijinja::context;
use tracing::warn;

/// `GET /` - the composite landing page.
pub async fn home(State(state): State<AppState>, jar: SignedCookieJar) -> Response {
    match render_home(&state, jar).await {
        Ok(response) => response,
        Err(err) => {
            warn!(error = %err, "home page failed, redirecting to error page");
            Redirect::to("/error").into_response()
        }
    }
}

async fn render_home(state: &AppState, jar: SignedCookieJar) -> crate::errors::Result<Response> {
    let announcements = announcement::list_announcements(&state.db).await?;
    let leagues = league::list_leagues(&state.db).await?;
    let resources = resource::list_resources(&state.db).await?;
    let quick_links = quick_link::list_quick_links(&state.db).await?;

    let (jar, flashes) = session::take_flashes(jar);
    let html = state.templates.render(
        "home.html",
        context! {
            page_title => state.settings.site_name.clone(),
            flashes,
            announcements,
            leagues,
            resources,
            quick_links,
        },
    )?;
    Ok((jar, Html(html)).into_response())
}

/// `GET /error` - static generic error page.
pub async fn error_page(State(state): State<AppState>, jar: SignedCookieJar) -> Response {
    let (jar, flashes) = session::take_flashes(jar);
    let title = format!("{} - Site Error", state.settings.site_name);
    match state
        .templates
        .render("error.html", context! { page_title => title, flashes })
    {
        Ok(html) => (jar, Html(html)).into_response(),
        Err(err) => {
            warn!(error = %err, "error page failed to render");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// `GET /league/{n}/submit-scores`
pub async fn submit_scores_page(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Path(number): Path<i32>,
) -> Response {
    league_page(&state, jar, number, "league_submit_scores.html").await
}

/// `GET /league/{n}/sign-up`
pub async fn sign_up_page(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Path(number): Path<i32>,
) -> Response {
    league_page(&state, jar, number, "league_sign_up.html").await
}

/// `GET /league/{n}/request-info`
pub async fn request_info_page(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Path(number): Path<i32>,
) -> Response {
    league_page(&state, jar, number, "league_request_info.html").await
}

/// `GET /league/{n}/standings`
pub async fn standings_page(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Path(number): Path<i32>,
) -> Response {
    league_page(&state, jar, number, "league_standings.html").await
}

/// Shared shape of the per-league informational pages: validate the number
/// against the configured set, fetch the full league list for display
/// context, render.
async fn league_page(
    state: &AppState,
    jar: SignedCookieJar,
    number: i32,
    template: &str,
) -> Response {
    if !state.settings.is_valid_league_number(number) {
        return (StatusCode::NOT_FOUND, "no such league page").into_response();
    }
    match render_league_page(state, jar, number, template).await {
        Ok(response) => response,
        Err(err) => {
            warn!(error = %err, league_number = number, "league page failed, redirecting to error page");
            Redirect::to("/error").into_response()
        }
    }
}

async fn render_league_page(
    state: &AppState,
    jar: SignedCookieJar,
    number: i32,
    template: &str,
) -> crate::errors::Result<Response> {
    let leagues = league::list_leagues(&state.db).await?;
    let (jar, flashes) = session::take_flashes(jar);
    let html = state.templates.render(
        template,
        context! {
            page_title => state.settings.site_name.clone(),
            flashes,
            league_number => number,
            leagues,
        },
    )?;
    Ok((jar, Html(html)).into_response())
}
