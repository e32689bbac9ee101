//! Result generator adapters implementing the
//! [`ResultGenerator`](omni_application::ResultGenerator) port.

mod template_generator;

pub use template_generator::TemplateGenerator;
