use anyhow::{Context, Result};
use renombra_core::{organize_operation, OrganizeOptions, OutputFormatter};
use std::path::Path;

use crate::OutputFormat;

pub fn handle_run(
    directory: &Path,
    dry_run: bool,
    skip_normalize: bool,
    output: OutputFormat,
    quiet: bool,
    use_color: bool,
) -> Result<()> {
    let options = OrganizeOptions {
        dry_run,
        normalize: !skip_normalize,
        ..OrganizeOptions::default()
    };

    // JSON output is a single document; progress lines would corrupt it
    let show_progress = !quiet && output != OutputFormat::Json;

    let result = organize_operation(directory, &options, &mut |event| {
        if show_progress {
            println!("{}", event.render(use_color));
        }
    })
    .with_context(|| format!("Failed to rename files in {}", directory.display()))?;

    match output {
        OutputFormat::Json => println!("{}", result.format_json()),
        OutputFormat::Summary => {
            if !quiet {
                println!();
            }
            print!("{}", result.format_summary());
        },
    }

    Ok(())
}
