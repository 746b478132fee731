//! Compiled page templates for the webdm UI.
//!
//! Each template is a hand-compiled render function: a plain Rust function
//! from a typed context to an HTML fragment string. Module paths mirror the
//! page tree of the UI (the snap details page lives at
//! [`snap::details`]), so the call site reads like the page it renders.
//!
//! ## Rendering contract
//!
//! Templates are pure: context in, fragment out, no I/O and no state between
//! calls. A render either returns the complete fragment or fails fast with
//! [`crate::error::WebdmPagesError::InvalidContext`] before producing any
//! output. All interpolated values pass through [`crate::escape::html`], and
//! optional values resolve through [`crate::value::resolve`].
//!
//! ## Adding a new page template
//!
//! 1. Add a module here named after the page section (or extend one)
//! 2. Take the typed context as `&` and return `Result<String>`
//! 3. Build sections as private helpers returning `String`, composed with
//!    `format!` (see [`snap::details`] for the shape)

pub mod snap;
