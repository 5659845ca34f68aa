//! Site Checks — eight-criterion evaluation of a candidate solar parcel.
//!
//! A site record is normalized into a check request, sent to the scoring
//! service, and the per-criterion results are rendered into a fixed-order
//! panel on a [`Page`].

pub mod catalog;
pub mod config;
pub mod page;
pub mod pipeline;
pub mod render;
pub mod request;
pub mod transport;
pub mod types;

pub use catalog::{criterion, Criterion, CRITERIA};
pub use config::resolve_backend_url;
pub use page::{MemoryPage, Page, CONFIDENCE_SLOT_ID, PANEL_ID, SCORE_SLOT_ID};
pub use pipeline::{fetch_site_checks, Outcome};
pub use render::{build_rows, classify, escape_html, failure_notice, render_rows, PanelRow, StatusClass};
pub use transport::{CheckTransport, HttpTransport};
pub use types::*;
