//! Server-side HTML rendering of enriched game views.

pub mod error;
pub mod html;

pub use error::FrontendError;
pub use html::{HtmlPage, escape_html, region_label};
