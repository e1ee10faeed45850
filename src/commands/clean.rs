use crate::core::assets::Manifest;
use crate::error::Result;
use crate::utils::fs;
use std::path::Path;

/// Remove the extraction destinations so the next fetch starts clean.
pub fn clean_assets(manifest_path: Option<&Path>) -> Result<()> {
    let manifest = Manifest::load_or_builtin(manifest_path)?;

    let mut removed = 0;
    // Parts may share a destination; only visit each directory once.
    let mut seen: Vec<&Path> = Vec::new();

    for asset in &manifest.assets {
        let dest = asset.dest.as_path();
        if seen.contains(&dest) {
            continue;
        }
        seen.push(dest);

        if dest.exists() {
            fs::remove_dir_recursive(dest)?;
            println!("Removed {dest:?}");
            removed += 1;
        }
    }

    if removed == 0 {
        println!("Nothing to clean");
    }

    Ok(())
}
