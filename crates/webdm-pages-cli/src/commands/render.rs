use std::path::Path;

use anyhow::Result;

use webdm_pages_core::context::SnapDetails;
use webdm_pages_core::templates;

use crate::output;

/// Render the snap details fragment from a context document.
///
/// With `--output`, writes the fragment to the file and prints a summary.
/// Without it, prints the bare fragment to stdout so it can be piped into
/// whatever assembles the surrounding page.
pub fn run(context_path: &Path, output_path: Option<&Path>) -> Result<()> {
    let context = SnapDetails::load(context_path)?;
    tracing::debug!(
        "rendering details fragment ({} screenshots, {} framework entries)",
        context.screenshot_urls.len(),
        context.click_framework.len()
    );

    let fragment = templates::snap::details(&context)?;

    match output_path {
        Some(path) => {
            output::print_header("webdm-pages render");
            std::fs::write(path, &fragment)?;
            output::print_success("Fragment rendered");
            output::print_key_value("Context", &context_path.display().to_string());
            output::print_key_value("Output", &path.display().to_string());
            output::print_key_value("Size", &format!("{} bytes", fragment.len()));
        }
        None => print!("{fragment}"),
    }

    Ok(())
}
