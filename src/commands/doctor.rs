use crate::core::assets::Manifest;
use crate::error::Result;
use std::path::Path;

/// Check that the environment can run a fetch: curl on PATH, a writable temp
/// directory, and reachable destination paths.
pub fn check_environment() -> Result<()> {
    println!("🔍 benchfetch - Environment Check");
    println!();

    let mut issues_found = 0;

    println!("🌐 Download tool:");
    match which::which("curl") {
        Ok(path) => println!("  curl: {path:?} ✅"),
        Err(_) => {
            println!("  curl: not found on PATH ❌");
            issues_found += 1;
        }
    }
    println!();

    println!("📁 Temp directory:");
    let temp_dir = std::env::temp_dir();
    match tempfile::NamedTempFile::new() {
        Ok(_file) => println!("  {temp_dir:?}: writable ✅"),
        Err(e) => {
            println!("  {temp_dir:?}: not writable ({e}) ❌");
            issues_found += 1;
        }
    }
    println!();

    println!("📦 Destinations:");
    let manifest = Manifest::builtin();
    let mut seen: Vec<&Path> = Vec::new();
    for asset in &manifest.assets {
        let dest = asset.dest.as_path();
        if seen.contains(&dest) {
            continue;
        }
        seen.push(dest);

        if dest.is_dir() {
            println!("  {dest:?}: exists ✅");
        } else {
            println!("  {dest:?}: will be created on fetch");
        }
    }
    println!();

    if issues_found == 0 {
        println!("✅ Environment looks good");
    } else {
        println!("❌ {issues_found} issue(s) found");
    }

    Ok(())
}
