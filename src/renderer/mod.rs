//! HTML renderer for producing printable output from a document
//!
//! This module takes a Document and produces a standalone HTML string
//! suitable for iframe preview or external PDF/DOCX conversion. All
//! user-supplied text is escaped before embedding.

pub mod config;
pub mod html;
pub mod layout;

pub use config::RenderConfig;
pub use html::escape_html;
pub use layout::{render_document, Variant};
