//! End-to-end evaluation: build, send, parse, render.
//!
//! Failures never escape this module. The caller gets an [`Outcome`] and the
//! page gets either the rows or the failure notice.

use serde::Serialize;

use crate::page::{Page, CONFIDENCE_SLOT_ID, PANEL_ID, SCORE_SLOT_ID};
use crate::render::{build_rows, failure_notice, render_rows, PanelRow};
use crate::transport::CheckTransport;
use crate::types::{CheckRequest, CheckResponse, ScoreSummary, SiteSource};

/// How one evaluation ended.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// No site record; nothing was sent and the page was not touched.
    InputUnavailable,
    /// The panel now shows these rows.
    Rendered {
        rows: Vec<PanelRow>,
        summary: ScoreSummary,
    },
    /// The panel now shows the failure notice. `reason` is for logs only and
    /// is never serialized.
    Failed {
        #[serde(skip)]
        reason: String,
        status: Option<u16>,
    },
}

impl Outcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed { .. })
    }
}

/// Run one evaluation for `source` and write the result into `page`.
pub async fn fetch_site_checks<T, P>(source: &SiteSource, transport: &T, page: &mut P) -> Outcome
where
    T: CheckTransport + ?Sized,
    P: Page + ?Sized,
{
    let Some(request) = CheckRequest::from_source(source) else {
        tracing::warn!("Site record missing; skipping site checks");
        return Outcome::InputUnavailable;
    };

    match transport.analyze(&request).await {
        Ok(response) => render_response(response, page),
        Err(e) => {
            tracing::error!(error = %e, "Site checks failed");
            page.set_html(PANEL_ID, &failure_notice());
            Outcome::Failed {
                reason: e.to_string(),
                status: e.status_code(),
            }
        }
    }
}

/// Write a successful response into the page.
pub fn render_response<P: Page + ?Sized>(response: CheckResponse, page: &mut P) -> Outcome {
    let rows = build_rows(&response.check_list);

    if !page.set_html(PANEL_ID, &render_rows(&rows)) {
        tracing::debug!("Panel element {PANEL_ID} not present");
    }

    let summary = response.summary;
    if let Some(score) = &summary.total_score {
        page.set_text(SCORE_SLOT_ID, score);
    }
    if let Some(confidence) = &summary.confidence {
        page.set_text(CONFIDENCE_SLOT_ID, confidence);
    }

    Outcome::Rendered { rows, summary }
}
