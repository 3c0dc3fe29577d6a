//! Fixed template catalog
//!
//! The editor offers eight templates, each pairing a display name with a
//! layout variant (and, for one of them, the header photo). The set is fixed
//! at build time; there is no dynamic registration.

mod defaults;
mod registry;

pub use defaults::default_document;
pub use registry::{get, Template, TemplateId, TEMPLATES};
