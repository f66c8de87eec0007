// Document Model Builder: upstream JSON → normalized, immutable ResumeDocument.
// Missing or malformed upstream fields are replaced with placeholders, never reported.

pub mod builder;
pub mod defaults;
pub mod model;

pub use builder::build_document;
pub use model::ResumeDocument;
