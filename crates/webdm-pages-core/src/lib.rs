//! Core library for webdm-pages, the page-fragment templates of the webdm
//! snap device manager web UI.
//!
//! Provides the [`context::SnapDetails`] data context consumed by a render
//! call, the rendering primitives every template interpolates through
//! ([`escape::html`] and the zero-preserving [`value::resolve`] fallback),
//! and the compiled templates themselves under [`templates`].
//!
//! Templates here are compiled by hand: each one is a plain Rust function
//! from a typed context to an HTML fragment string. There is no template
//! source format and no runtime parser; the surrounding application embeds
//! the returned fragment into a full document and serves it.

pub mod context;
pub mod error;
pub mod escape;
pub mod templates;
pub mod value;
