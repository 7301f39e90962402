//! `remitcert-xml` — Schema serialization layer for Form 15CB.
//!
//! Generation substitutes a flat field dictionary into a placeholder
//! template; parsing walks the fixed namespaced tag table back to the same
//! dictionary. The tag table and the template placeholder set mirror each
//! other, which is what makes the round trip lossless.

pub mod error;
pub mod escape;
pub mod generate;
pub mod parse;
pub mod tags;

pub use error::XmlError;
pub use escape::escape_xml;
pub use generate::generate;
pub use parse::parse_fields;

/// The bundled Form 15CB template. Deployments may override the template
/// path through settings; this copy keeps the tool self-contained.
pub const DEFAULT_TEMPLATE: &str = include_str!("../assets/form15cb_template.xml");
