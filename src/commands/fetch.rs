use crate::core::assets::{Asset, Manifest};
use crate::core::download::Downloader;
use crate::error::{FetchError, Result};
use std::path::Path;
use tempfile::NamedTempFile;

/// Fetch and extract the configured asset parts, in manifest order. A failure
/// in any part aborts the run before later parts start.
pub fn fetch_assets(manifest_path: Option<&Path>, part: Option<usize>) -> Result<()> {
    let manifest = Manifest::load_or_builtin(manifest_path)?;
    let total = manifest.assets.len();
    let downloader = Downloader::new();

    for (number, asset) in select_parts(&manifest.assets, part)? {
        println!("Downloading part {number}/{total}");
        fetch_one(&downloader, asset)?;
    }

    println!("Done");
    Ok(())
}

/// Resolve `--part` against the asset table. Part numbers are 1-based.
fn select_parts(assets: &[Asset], part: Option<usize>) -> Result<Vec<(usize, &Asset)>> {
    match part {
        None => Ok(assets.iter().enumerate().map(|(i, a)| (i + 1, a)).collect()),
        Some(n) if n >= 1 && n <= assets.len() => Ok(vec![(n, &assets[n - 1])]),
        Some(n) => Err(FetchError::PartNotFound {
            part: n,
            total: assets.len(),
        }),
    }
}

fn fetch_one(downloader: &Downloader, asset: &Asset) -> Result<()> {
    let url = asset.url();

    // Transient download buffer; removed by close() on success, or by the
    // Drop impl if extraction bails out.
    let archive = NamedTempFile::new()?;

    downloader
        .download_file(&url, archive.path())
        .map_err(|_e| FetchError::Download { url: url.clone() })?;

    downloader
        .extract_archive(archive.path(), &asset.dest)
        .map_err(|_e| FetchError::Extraction {
            path: asset.dest.clone(),
        })?;

    archive.close()?;
    Ok(())
}
