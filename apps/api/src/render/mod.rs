pub mod html;
pub mod templates;

pub use html::{render_document_html, render_paginated_html};
pub use templates::Template;
