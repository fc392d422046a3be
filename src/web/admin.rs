//! Admin interface: login, registration, logout, and content CRUD.
//!
//! Handlers stay thin: decode the form, call `core`, translate the outcome
//! into a flash and a redirect. Validation failures flash and redirect;
//! anything else propagates through [`WebError`]. The `AdminUser` extractor
//! gates every mutating route before the body is even read.
//!
//! Mutation routes also accept GET: a GET performs no mutation and just
//! redirects to the admin page.

use crate::core::{announcement, auth, league, quick_link, resource};
use crate::errors::Error;
use crate::web::error::WebResult;
use crate::web::session::{self, AdminUser, Flash};
use crate::web::AppState;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use axum_extra::extract::SignedCookieJar;
use minijinja::context;
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Forms

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub name: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub name: String,
    pub password1: String,
    pub password2: String,
    pub secret_code: String,
}

#[derive(Debug, Deserialize)]
pub struct LeagueForm {
    pub league_number: i32,
    pub league_name: String,
    pub contact_name: String,
    pub email: String,
    pub link: String,
}

#[derive(Debug, Deserialize)]
pub struct AnnouncementForm {
    pub item: String,
    pub date: String,
    pub rank: i32,
}

#[derive(Debug, Deserialize)]
pub struct ResourceForm {
    pub heading: String,
    pub description: String,
    pub link: String,
    pub rank: i32,
}

#[derive(Debug, Deserialize)]
pub struct QuickLinkForm {
    pub description: String,
    pub link: String,
    pub rank: i32,
}

// ---------------------------------------------------------------------------
// Session endpoints

/// `GET /admin_login` - the login form.
pub async fn login_page(
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> WebResult<Response> {
    let (jar, flashes) = session::take_flashes(jar);
    let title = format!("{} - Admin Login", state.settings.site_name);
    let html = state
        .templates
        .render("admin_login.html", context! { page_title => title, flashes })?;
    Ok((jar, Html(html)).into_response())
}

/// `GET /login` - plain GETs bounce home; only the POST half logs in.
pub async fn login_get() -> Redirect {
    Redirect::to("/")
}

/// `POST /login` - authenticate and establish the session.
pub async fn login(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(form): Form<LoginForm>,
) -> WebResult<(SignedCookieJar, Redirect)> {
    match auth::authenticate(&state.db, &form.name, &form.password).await {
        Ok(user) => Ok((session::log_in(jar, user.id), Redirect::to("/admin_page"))),
        Err(Error::Auth { message }) => Ok((
            session::push_flash(jar, Flash::error(message)),
            Redirect::to("/admin_login"),
        )),
        Err(err) => Err(err.into()),
    }
}

/// `GET /create_admin` - the registration form.
pub async fn register_page(
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> WebResult<Response> {
    let (jar, flashes) = session::take_flashes(jar);
    let html = state
        .templates
        .render(
            "create_admin.html",
            context! { page_title => state.settings.site_name.clone(), flashes },
        )?;
    Ok((jar, Html(html)).into_response())
}

/// `POST /create_admin` - self-service registration behind the signup code.
/// Success and every validation failure alike flash and land back on the
/// login page.
pub async fn register(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(form): Form<RegisterForm>,
) -> WebResult<(SignedCookieJar, Redirect)> {
    let outcome = auth::register(
        &state.db,
        &form.name,
        &form.password1,
        &form.password2,
        &form.secret_code,
        &state.settings.signup_code,
    )
    .await;

    let jar = match outcome {
        Ok(_) => session::push_flash(
            jar,
            Flash::success(
                "Account Created! Please remember your password, \
                 there is currently no way to find your password if forgotten",
            ),
        ),
        Err(Error::Validation { message }) => session::push_flash(jar, Flash::error(message)),
        Err(err) => return Err(err.into()),
    };
    Ok((jar, Redirect::to("/admin_login")))
}

/// `GET /logout` - requires an active session.
pub async fn logout(_user: AdminUser, jar: SignedCookieJar) -> (SignedCookieJar, Redirect) {
    (session::log_out(jar), Redirect::to("/"))
}

/// `GET+POST /delete-admin/{id}` - any admin can delete any account,
/// including their own.
pub async fn delete_admin(
    _user: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> WebResult<Redirect> {
    auth::delete_user(&state.db, id).await?;
    Ok(Redirect::to("/"))
}

/// `GET /admin_page` - the landing page for everything administrative:
/// all five entity listings plus the signup code for sharing.
pub async fn admin_page(
    user: AdminUser,
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> WebResult<Response> {
    let announcements = announcement::list_announcements(&state.db).await?;
    let leagues = league::list_leagues(&state.db).await?;
    let resources = resource::list_resources(&state.db).await?;
    let quick_links = quick_link::list_quick_links(&state.db).await?;
    let users = auth::list_users(&state.db).await?;

    let (jar, flashes) = session::take_flashes(jar);
    let title = format!("{} - Admin Page", state.settings.site_name);
    let html = state
        .templates
        .render(
            "admin_page.html",
            context! {
                page_title => title,
                flashes,
                current_user => user.0.name,
                signup_code => state.settings.signup_code.clone(),
                announcements,
                leagues,
                resources,
                quick_links,
                users,
            },
        )?;
    Ok((jar, Html(html)).into_response())
}

/// GET half of the mutation routes: no mutation, no observable effect
/// beyond landing back on the admin page.
pub async fn mutation_noop(_user: AdminUser) -> Redirect {
    Redirect::to("/admin_page")
}

// ---------------------------------------------------------------------------
// League CRUD

/// `POST /add_league`
pub async fn add_league(
    _user: AdminUser,
    State(state): State<AppState>,
    Form(form): Form<LeagueForm>,
) -> WebResult<Redirect> {
    league::create_league(
        &state.db,
        form.league_number,
        form.league_name,
        form.contact_name,
        form.email,
        form.link,
    )
    .await?;
    Ok(Redirect::to("/admin_page"))
}

/// `GET /update-league/{id}` - the edit form, prefilled.
pub async fn update_league_page(
    _user: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> WebResult<Html<String>> {
    let row = league::get_league_by_id(&state.db, id)
        .await?
        .ok_or(Error::NotFound {
            entity: "league",
            id,
        })?;
    let title = format!("{} - Update League", state.settings.site_name);
    let html = state
        .templates
        .render(
            "update_league.html",
            context! { page_title => title, flashes => Vec::<Flash>::new(), league => row },
        )?;
    Ok(Html(html))
}

/// `POST /update-league/{id}` - overwrites every field.
pub async fn update_league(
    _user: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<LeagueForm>,
) -> WebResult<Redirect> {
    league::update_league(
        &state.db,
        id,
        form.league_number,
        form.league_name,
        form.contact_name,
        form.email,
        form.link,
    )
    .await?;
    Ok(Redirect::to("/admin_page"))
}

/// `GET+POST /delete-league/{id}`
pub async fn delete_league(
    _user: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> WebResult<Redirect> {
    league::delete_league(&state.db, id).await?;
    Ok(Redirect::to("/admin_page"))
}

// ---------------------------------------------------------------------------
// Announcement CRUD

/// `POST /add_announcement`
pub async fn add_announcement(
    _user: AdminUser,
    State(state): State<AppState>,
    Form(form): Form<AnnouncementForm>,
) -> WebResult<Redirect> {
    announcement::create_announcement(&state.db, form.item, form.date, form.rank).await?;
    Ok(Redirect::to("/admin_page"))
}

/// `GET /update-announcement/{id}`
pub async fn update_announcement_page(
    _user: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> WebResult<Html<String>> {
    let row = announcement::get_announcement_by_id(&state.db, id)
        .await?
        .ok_or(Error::NotFound {
            entity: "announcement",
            id,
        })?;
    let title = format!("{} - Update Announcement", state.settings.site_name);
    let html = state
        .templates
        .render(
            "update_announcement.html",
            context! { page_title => title, flashes => Vec::<Flash>::new(), announcement => row },
        )?;
    Ok(Html(html))
}

/// `POST /update-announcement/{id}`
pub async fn update_announcement(
    _user: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<AnnouncementForm>,
) -> WebResult<Redirect> {
    announcement::update_announcement(&state.db, id, form.item, form.date, form.rank).await?;
    Ok(Redirect::to("/admin_page"))
}

/// `GET+POST /delete-announcement/{id}`
pub async fn delete_announcement(
    _user: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> WebResult<Redirect> {
    announcement::delete_announcement(&state.db, id).await?;
    Ok(Redirect::to("/admin_page"))
}

// ---------------------------------------------------------------------------
// Resource CRUD

/// `POST /add_resource`
pub async fn add_resource(
    _user: AdminUser,
    State(state): State<AppState>,
    Form(form): Form<ResourceForm>,
) -> WebResult<Redirect> {
    resource::create_resource(&state.db, form.heading, form.description, form.link, form.rank)
        .await?;
    Ok(Redirect::to("/admin_page"))
}

/// `GET /update-resource/{id}`
pub async fn update_resource_page(
    _user: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> WebResult<Html<String>> {
    let row = resource::get_resource_by_id(&state.db, id)
        .await?
        .ok_or(Error::NotFound {
            entity: "resource",
            id,
        })?;
    let title = format!("{} - Update Resource", state.settings.site_name);
    let html = state
        .templates
        .render(
            "update_resource.html",
            context! { page_title => title, flashes => Vec::<Flash>::new(), resource => row },
        )?;
    Ok(Html(html))
}

/// `POST /update-resource/{id}`
pub async fn update_resource(
    _user: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<ResourceForm>,
) -> WebResult<Redirect> {
    resource::update_resource(
        &state.db,
        id,
        form.heading,
        form.description,
        form.link,
        form.rank,
    )
    .await?;
    Ok(Redirect::to("/admin_page"))
}

/// `GET+POST /delete-resource/{id}`
pub async fn delete_resource(
    _user: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> WebResult<Redirect> {
    resource::delete_resource(&state.db, id).await?;
    Ok(Redirect::to("/admin_page"))
}

// ---------------------------------------------------------------------------
// Quick link CRUD

/// `POST /add_quick_link`
pub async fn add_quick_link(
    _user: AdminUser,
    State(state): State<AppState>,
    Form(form): Form<QuickLinkForm>,
) -> WebResult<Redirect> {
    quick_link::create_quick_link(&state.db, form.description, form.link, form.rank).await?;
    Ok(Redirect::to("/admin_page"))
}

/// `GET /update-quick_link/{id}`
pub async fn update_quick_link_page(
    _user: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> WebResult<Html<String>> {
    let row = quick_link::get_quick_link_by_id(&state.db, id)
        .await?
        .ok_or(Error::NotFound {
            entity: "quick link",
            id,
        })?;
    let title = format!("{} - Update Quick Link", state.settings.site_name);
    let html = state
        .templates
        .render(
            "update_quick_link.html",
            context! { page_title => title, flashes => Vec::<Flash>::new(), quick_link => row },
        )?;
    Ok(Html(html))
}

/// `POST /update-quick_link/{id}`
pub async fn update_quick_link(
    _user: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<QuickLinkForm>,
) -> WebResult<Redirect> {
    quick_link::update_quick_link(&state.db, id, form.description, form.link, form.rank).await?;
    Ok(Redirect::to("/admin_page"))
}

/// `GET+POST /delete-quick_link/{id}`
pub async fn delete_quick_link(
    _user: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> WebResult<Redirect> {
    quick_link::delete_quick_link(&state.db, id).await?;
    Ok(Redirect::to("/admin_page"))
}
