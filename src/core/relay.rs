//! Inquiry relay - forwards public form submissions as email to league
//! contacts.
//!
//! A relay looks up the league rows matching the requested number (a
//! filter, so zero matches is a silent no-op), composes a fixed-template
//! subject and newline-joined body, and sends one notification per matching
//! row. A transport failure propagates to the caller; there is no retry or
//! queuing.

use crate::{core::league, errors::Result, mail::Mailer};
use sea_orm::DatabaseConnection;

/// The three kinds of public inquiry the site relays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InquiryKind {
    /// A match score submitted after play
    ScoreSubmission,
    /// A request to join the league
    SignUp,
    /// A general information request
    InfoRequest,
}

impl InquiryKind {
    /// Label appended to the league name to form the mail subject.
    #[must_use]
    pub const fn subject_label(self) -> &'static str {
        match self {
            InquiryKind::ScoreSubmission => "Score Submission",
            InquiryKind::SignUp => "Sign Up Inquiry",
            InquiryKind::InfoRequest => "Information Request",
        }
    }
}

/// A submitted match result, relayed verbatim to the league contact.
#[derive(Debug, Clone)]
pub struct ScoreReport {
    /// First player's name
    pub player1_name: String,
    /// First player's score
    pub player1_score: String,
    /// Second player's name
    pub player2_name: String,
    /// Second player's score
    pub player2_score: String,
    /// Submitter's email, included so the contact can reply
    pub reply_email: String,
    /// Free-text comments
    pub comments: String,
}

impl ScoreReport {
    fn body(&self) -> String {
        format!(
            "Player 1 - Name: {}\nPlayer 1 - Score: {}\nPlayer 2 - Name: {}\nPlayer 2 - Score: {}\nYour Email: {}\nComments: {}",
            self.player1_name,
            self.player1_score,
            self.player2_name,
            self.player2_score,
            self.reply_email,
            self.comments,
        )
    }
}

/// A sign-up or information-request form submission.
#[derive(Debug, Clone)]
pub struct ContactInquiry {
    /// Submitter's full name
    pub full_name: String,
    /// Submitter's phone number, free text
    pub phone_number: String,
    /// Submitter's email
    pub email: String,
    /// Free-text comments
    pub comments: String,
}

impl ContactInquiry {
    fn body(&self) -> String {
        format!(
            "Full Name: {}\nPhone Number: {}\nEmail: {}\nComments: {}",
            self.full_name, self.phone_number, self.email, self.comments,
        )
    }
}

/// Relays a score report to every league row matching `league_number`.
///
/// Returns how many notifications were sent so the caller can surface one
/// success notice per delivery. Zero matching rows sends nothing and is not
/// an error.
pub async fn relay_score_report(
    db: &DatabaseConnection,
    mailer: &dyn Mailer,
    league_number: i32,
    report: &ScoreReport,
) -> Result<usize> {
    send_to_matching_leagues(
        db,
        mailer,
        league_number,
        InquiryKind::ScoreSubmission,
        &report.body(),
    )
    .await
}

/// Relays a sign-up or information-request inquiry to every league row
/// matching `league_number`. Same zero-match semantics as score reports.
pub async fn relay_contact_inquiry(
    db: &DatabaseConnection,
    mailer: &dyn Mailer,
    league_number: i32,
    kind: InquiryKind,
    inquiry: &ContactInquiry,
) -> Result<usize> {
    send_to_matching_leagues(db, mailer, league_number, kind, &inquiry.body()).await
}

async fn send_to_matching_leagues(
    db: &DatabaseConnection,
    mailer: &dyn Mailer,
    league_number: i32,
    kind: InquiryKind,
    body: &str,
) -> Result<usize> {
    let leagues = league::find_leagues_by_number(db, league_number).await?;
    let mut sent = 0;
    for league in &leagues {
        let subject = format!("{} - {}", league.name, kind.subject_label());
        mailer.send(&subject, body, &league.contact_email).await?;
        sent += 1;
    }
    Ok(sent)
}
