//! Deterministic result templates, one per [`Category`](crate::Category).

mod template;

pub use template::render_result;
