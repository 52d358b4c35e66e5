//! Formatted literals: detection, variable extraction, and rendering.
//!
//! A formatted literal is a quoted literal with the `f` marker whose body
//! holds `{name}` placeholders:
//!
//! ```text
//! f"Hi {name}, you are {age:>3} years old"
//! ```
//!
//! - **Detection** classifies raw input as a template or a plain literal
//! - **Extraction** lists the placeholder variables in first-occurrence order
//! - **Rendering** substitutes bound values and decodes escapes once
//!
//! Placeholders are found with an explicit scanner that balances braces by
//! depth. `{{` and `}}` stand for literal braces. Nothing inside a
//! placeholder is evaluated; only the bare variable name is looked up.

mod detect;
mod extract;
mod render;
mod span;


// Re-export public API
pub use detect::is_template;
pub use extract::extract_variable_names;
pub use render::{
    Bindings, MissingPolicy, RenderError, RenderOptions, bindings, render_template,
    render_template_with,
};
pub use span::{PlaceholderSpan, Scanner, Segment, is_identifier, placeholder_spans};
