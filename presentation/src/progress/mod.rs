//! Progress indicators driven by controller notifications

pub mod reporter;
