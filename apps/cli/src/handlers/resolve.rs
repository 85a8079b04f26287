use crate::models::args::OutputFormat;
use crate::models::output::ResolvedLicense;
use anyhow::{Context, Result};
use preface_kernel::config::Settings;
use preface_licensing::{LicenseResolver, copyright_line, registry};
use tracing::info;

/// Resolves the effective license and prints it in the requested format.
///
/// The none license prints nothing in text mode.
///
/// # Errors
/// Returns an error if the registry fails to build, the requested license is unknown, or the
/// JSON output cannot be serialized.
pub fn resolve_license(
    settings: &Settings,
    explicit: &str,
    header: bool,
    format: OutputFormat,
) -> Result<()> {
    let registry = registry::initialize()?;
    let resolution = LicenseResolver::new(registry).resolution(explicit, settings)?;
    let copyright = copyright_line(settings);

    info!(license = %resolution.license.name, source = %resolution.source, "Printing license");

    match format {
        OutputFormat::Text => {
            let license = &resolution.license;
            let body =
                if header { license.render_header(&copyright) } else { license.render_text(&copyright) };

            if !body.is_empty() {
                print!("{body}");
                if !body.ends_with('\n') {
                    println!();
                }
            }
        },
        OutputFormat::Json => {
            let output = ResolvedLicense::new(&resolution, &copyright);
            let json =
                serde_json::to_string_pretty(&output).context("Failed to serialize license")?;
            println!("{json}");
        },
    }

    Ok(())
}
