//! Public inquiry-relay handlers.
//!
//! POST-only in effect: the GET half of each route performs nothing and
//! redirects to the page the form lives on. A relay for a league number
//! with no matching rows sends nothing and still redirects — the visitor
//! sees no error, only the absence of a success notice.

use crate::core::relay::{self, ContactInquiry, InquiryKind, ScoreReport};
use crate::errors::Error;
use crate::web::error::WebResult;
use crate::web::session::{self, Flash};
use crate::web::AppState;
use axum::extract::{Path, State};
use axum::response::Redirect;
use axum::Form;
use axum_extra::extract::SignedCookieJar;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ScoreForm {
    pub p1_name: String,
    pub p1_score: String,
    pub p2_name: String,
    pub p2_score: String,
    pub email: String,
    pub comments: String,
}

#[derive(Debug, Deserialize)]
pub struct InquiryForm {
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub comments: String,
}

fn check_league_number(state: &AppState, number: i32) -> WebResult<()> {
    if state.settings.is_valid_league_number(number) {
        Ok(())
    } else {
        Err(Error::NotFound {
            entity: "league page",
            id: i64::from(number),
        }
        .into())
    }
}

/// `POST /league/{n}/send-scores`
pub async fn send_scores(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Path(number): Path<i32>,
    Form(form): Form<ScoreForm>,
) -> WebResult<(SignedCookieJar, Redirect)> {
    check_league_number(&state, number)?;
    let report = ScoreReport {
        player1_name: form.p1_name,
        player1_score: form.p1_score,
        player2_name: form.p2_name,
        player2_score: form.p2_score,
        reply_email: form.email,
        comments: form.comments,
    };
    let sent = relay::relay_score_report(&state.db, state.mailer.as_ref(), number, &report).await?;

    let mut jar = jar;
    for _ in 0..sent {
        jar = session::push_flash(jar, Flash::success("Score submitted successfully!"));
    }
    Ok((jar, Redirect::to(&format!("/league/{number}/submit-scores"))))
}

/// `POST /league/{n}/send-signup`
pub async fn send_signup(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Path(number): Path<i32>,
    Form(form): Form<InquiryForm>,
) -> WebResult<(SignedCookieJar, Redirect)> {
    relay_inquiry(state, jar, number, InquiryKind::SignUp, form, "sign-up").await
}

/// `POST /league/{n}/send-info-request`
pub async fn send_info_request(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Path(number): Path<i32>,
    Form(form): Form<InquiryForm>,
) -> WebResult<(SignedCookieJar, Redirect)> {
    relay_inquiry(
        state,
        jar,
        number,
        InquiryKind::InfoRequest,
        form,
        "request-info",
    )
    .await
}

async fn relay_inquiry(
    state: AppState,
    jar: SignedCookieJar,
    number: i32,
    kind: InquiryKind,
    form: InquiryForm,
    back_to: &str,
) -> WebResult<(SignedCookieJar, Redirect)> {
    check_league_number(&state, number)?;
    let inquiry = ContactInquiry {
        full_name: form.name,
        phone_number: form.phone_number,
        email: form.email,
        comments: form.comments,
    };
    let sent =
        relay::relay_contact_inquiry(&state.db, state.mailer.as_ref(), number, kind, &inquiry)
            .await?;

    let mut jar = jar;
    for _ in 0..sent {
        jar = session::push_flash(jar, Flash::success("Message sent successfully!"));
    }
    Ok((jar, Redirect::to(&format!("/league/{number}/{back_to}"))))
}

/// GET half of `send-scores`: nothing happens, back to the form page.
pub async fn scores_noop(Path(number): Path<i32>) -> Redirect {
    Redirect::to(&format!("/league/{number}/submit-scores"))
}

/// GET half of `send-signup`.
pub async fn signup_noop(Path(number): Path<i32>) -> Redirect {
    Redirect::to(&format!("/league/{number}/sign-up"))
}

/// GET half of `send-info-request`.
pub async fn info_request_noop(Path(number): Path<i32>) -> Redirect {
    Redirect::to(&format!("/league/{number}/request-info"))
}
