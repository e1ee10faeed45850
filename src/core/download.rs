use anyhow::Result;
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tar::Archive;
use zip::ZipArchive;

/// Archive format detected from the leading bytes of a downloaded file.
/// Downloads land in extensionless temp files, so the file name tells us
/// nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveFormat {
    TarGz,
    Tar,
    Zip,
}

pub struct Downloader;

impl Default for Downloader {
    fn default() -> Self {
        Self
    }
}

impl Downloader {
    pub fn new() -> Self {
        Self
    }

    pub fn download_file(&self, url: &str, destination: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = destination.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let output = std::process::Command::new("curl")
            .arg("-L") // Follow redirects
            .arg("-s") // Silent
            .arg("-H")
            .arg("User-Agent: benchfetch/0.1.0")
            .arg("-o")
            .arg(destination)
            .arg(url)
            .output()?;

        if !output.status.success() {
            return Err(anyhow::anyhow!(
                "Failed to download file: curl exited with status {:?}",
                output.status.code()
            ));
        }

        Ok(())
    }

    pub fn extract_archive(&self, archive_path: &Path, destination: &Path) -> Result<()> {
        crate::utils::fs::ensure_dir_exists(destination)?;

        match sniff_format(archive_path)? {
            ArchiveFormat::TarGz => self.extract_tar_gz(archive_path, destination)?,
            ArchiveFormat::Tar => self.extract_tar(archive_path, destination)?,
            ArchiveFormat::Zip => self.extract_zip(archive_path, destination)?,
        }

        Ok(())
    }

    fn extract_tar_gz(&self, archive_path: &Path, destination: &Path) -> Result<()> {
        let file = File::open(archive_path)?;
        let decoder = GzDecoder::new(file);
        let mut archive = Archive::new(decoder);
        archive.unpack(destination)?;
        Ok(())
    }

    fn extract_tar(&self, archive_path: &Path, destination: &Path) -> Result<()> {
        let file = File::open(archive_path)?;
        let mut archive = Archive::new(file);
        archive.unpack(destination)?;
        Ok(())
    }

    fn extract_zip(&self, archive_path: &Path, destination: &Path) -> Result<()> {
        let file = File::open(archive_path)?;
        let mut archive = ZipArchive::new(file)?;

        for i in 0..archive.len() {
            let mut file = archive.by_index(i)?;
            let outpath = match file.enclosed_name() {
                Some(path) => destination.join(path),
                None => continue,
            };

            if file.name().ends_with('/') {
                std::fs::create_dir_all(&outpath)?;
            } else {
                if let Some(p) = outpath.parent() {
                    if !p.exists() {
                        std::fs::create_dir_all(p)?;
                    }
                }
                let mut outfile = File::create(&outpath)?;
                std::io::copy(&mut file, &mut outfile)?;
            }

            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if let Some(mode) = file.unix_mode() {
                    std::fs::set_permissions(&outpath, std::fs::Permissions::from_mode(mode))?;
                }
            }
        }
        Ok(())
    }
}

/// Detect the archive format from magic bytes: gzip (`1f 8b`), zip (`PK`),
/// or the `ustar` marker at offset 257 for an uncompressed tar.
pub fn sniff_format(path: &Path) -> Result<ArchiveFormat> {
    let file = File::open(path)?;
    let mut head = Vec::with_capacity(262);
    file.take(262).read_to_end(&mut head)?;

    if head.len() >= 2 && head[..2] == [0x1f, 0x8b] {
        return Ok(ArchiveFormat::TarGz);
    }
    if head.len() >= 2 && &head[..2] == b"PK" {
        return Ok(ArchiveFormat::Zip);
    }
    if head.len() >= 262 && &head[257..262] == b"ustar" {
        return Ok(ArchiveFormat::Tar);
    }

    Err(anyhow::anyhow!(
        "Unsupported archive format: {path:?} is not a tar, tar.gz, or zip file"
    ))
}
