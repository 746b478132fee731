use std::path::Path;

use anyhow::Result;

use webdm_pages_core::context::SnapDetails;
use webdm_pages_core::templates::snap::HIDDEN_FRAMEWORK_PREFIX;
use webdm_pages_core::value;

use crate::output;

/// Validate a context document without rendering it.
///
/// Loads the file, runs the renderer's fail-fast validation, and reports
/// what a render would produce: description presence, screenshot count, and
/// framework entries shown vs hidden by the sidebar filter.
pub fn run(context_path: &Path) -> Result<()> {
    output::print_header("webdm-pages check");

    let context = SnapDetails::load(context_path)?;
    context.validate()?;

    let description = value::resolve(&context.description);
    let description_summary = if description.is_empty() {
        "empty".to_string()
    } else {
        format!("{} chars", description.chars().count())
    };

    let shown = context
        .click_framework
        .values()
        .filter(|v| !v.starts_with(HIDDEN_FRAMEWORK_PREFIX))
        .count();
    let hidden = context.click_framework.len() - shown;

    output::print_key_value("Context", &context_path.display().to_string());
    output::print_key_value("Description", &description_summary);
    output::print_key_value("Screenshots", &context.screenshot_urls.len().to_string());
    output::print_key_value("Frameworks", &format!("{shown} shown, {hidden} hidden"));

    if shown == 0 && hidden > 0 {
        output::print_warning("every framework entry is hidden by the sidebar filter");
    }

    output::print_success("Context is valid");
    Ok(())
}
