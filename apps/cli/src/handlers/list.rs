use anyhow::Result;
use preface_licensing::registry;

/// Prints the built-in catalog in registry order.
///
/// # Errors
/// Returns an error if the registry fails to build.
pub fn list_licenses() -> Result<()> {
    let registry = registry::initialize()?;

    println!("\nLicenses:\n");
    println!("{:<10} {:<45} {}", "Key", "Name", "Aliases");
    println!("{:-<90}", "");

    for (key, license) in registry.iter() {
        let aliases = license.possible_matches.join(", ");
        println!("{:<10} {:<45} {}", key, license.name, aliases);
    }
    println!();

    Ok(())
}
