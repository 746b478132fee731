//! The snap details page fragment.
//!
//! Compiled from the store detail view: a description section, a
//! screenshots grid rendered only when the snap has screenshots, and a
//! frameworks sidebar listing the snap's click frameworks. Class names
//! follow the UI grid vocabulary (`seven-col`, `three-col`, `last-col`, …).

use std::collections::BTreeMap;

use crate::context::SnapDetails;
use crate::error::Result;
use crate::escape;
use crate::value;

/// Framework values with this prefix are omitted from the sidebar list.
pub const HIDDEN_FRAMEWORK_PREFIX: &str = "ubuntu-core-";

/// Render the snap details fragment.
///
/// Pure and deterministic: the same context renders byte-identical output,
/// and nothing is retained between calls. Fails fast with
/// [`crate::error::WebdmPagesError::InvalidContext`] on a malformed context
/// (non-scalar description) before producing any output; for a well-formed
/// context it always succeeds.
///
/// ```
/// use webdm_pages_core::context::SnapDetails;
/// use webdm_pages_core::templates::snap;
///
/// let fragment = snap::details(&SnapDetails::sample())?;
/// assert!(fragment.contains("<h2>Details</h2>"));
/// # Ok::<(), webdm_pages_core::error::WebdmPagesError>(())
/// ```
pub fn details(context: &SnapDetails) -> Result<String> {
    context.validate()?;

    let description = escape::html(&value::resolve(&context.description));
    let screenshots = screenshots_section(&context.screenshot_urls);
    let frameworks = framework_items(&context.click_framework);

    Ok(format!(
        r#"<div class="row details">
  <div class="inner-wrapper">
    <main class="seven-col append-one">
      <div class="app__details-description">
        <h2>Details</h2>
        <p>{description}</p>
      </div>
{screenshots}    </main>
    <aside class="four-col last-col">
      <div class="frameworks box four-col">
        <h3>Frameworks</h3>
        <ul class="no-bullets">
{frameworks}        </ul>
      </div>
    </aside>
  </div>
</div>
"#
    ))
}

/// The screenshots section, omitted entirely (heading included) when there
/// are no URLs. Items lay out two across; every odd zero-based index
/// carries `last-col` to close its row.
fn screenshots_section(urls: &[String]) -> String {
    if urls.is_empty() {
        return String::new();
    }

    let items: String = urls
        .iter()
        .enumerate()
        .map(|(index, url)| {
            let last_col = if index % 2 == 1 { " last-col" } else { "" };
            format!(
                "          <li class=\"three-col{last_col}\"><img src=\"{src}\" /></li>\n",
                src = escape::html(url),
            )
        })
        .collect();

    format!(
        r#"      <div class="app__details-screenshots">
        <h3>Screenshots</h3>
        <ul class="inline">
{items}        </ul>
      </div>
"#
    )
}

/// Sidebar list items, one per framework entry in key order. Entries whose
/// value starts with [`HIDDEN_FRAMEWORK_PREFIX`] are skipped silently; the
/// surrounding heading and list render regardless.
fn framework_items(click_framework: &BTreeMap<String, String>) -> String {
    click_framework
        .values()
        .filter(|name| !name.starts_with(HIDDEN_FRAMEWORK_PREFIX))
        .map(|name| {
            format!(
                "          <li class=\"smaller\">{}</li>\n",
                escape::html(name)
            )
        })
        .collect()
}
