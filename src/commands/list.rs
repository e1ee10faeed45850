use crate::core::assets::Manifest;
use crate::error::Result;
use std::path::Path;

pub fn list_assets(manifest_path: Option<&Path>) -> Result<()> {
    let manifest = Manifest::load_or_builtin(manifest_path)?;
    let total = manifest.assets.len();

    println!("Configured assets:");
    for (index, asset) in manifest.assets.iter().enumerate() {
        println!(
            "  part {}/{}: {} -> {:?} [{}]",
            index + 1,
            total,
            asset.id,
            asset.dest,
            dest_status(&asset.dest)
        );
    }

    Ok(())
}

fn dest_status(dest: &Path) -> &'static str {
    if !dest.exists() {
        return "missing";
    }
    let populated = std::fs::read_dir(dest)
        .map(|mut entries| entries.next().is_some())
        .unwrap_or(false);
    if populated {
        "extracted"
    } else {
        "empty"
    }
}
