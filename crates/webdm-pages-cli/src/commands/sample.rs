use std::path::Path;

use anyhow::Result;

use webdm_pages_core::context::SnapDetails;

use crate::output;

/// Write a starter context document.
///
/// The sample includes one framework entry hidden by the sidebar filter, so
/// rendering it demonstrates the filtering.
pub fn run(output_path: &Path, force: bool) -> Result<()> {
    output::print_header("webdm-pages sample");

    if output_path.exists() && !force {
        anyhow::bail!(
            "{} already exists (pass --force to overwrite)",
            output_path.display()
        );
    }

    SnapDetails::sample().save(output_path)?;

    output::print_success(&format!("Wrote {}", output_path.display()));
    println!();
    println!("  Next steps:");
    println!("    webdm-pages check --context {}", output_path.display());
    println!("    webdm-pages render --context {}", output_path.display());
    println!();

    Ok(())
}
