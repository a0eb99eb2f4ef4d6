// SPDX-License-Identifier: MPL-2.0
//! Save-as flow for downloaded avatars.

use crate::error::Result;
use std::path::{Path, PathBuf};

/// Bytes fetched for a download, together with the name offered to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadedImage {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Opens the native save dialog seeded with the derived file name and writes
/// the image where the user chose.
///
/// Returns `Ok(None)` when the user cancels the dialog.
///
/// # Errors
///
/// Returns `Error::Io` if the file cannot be written.
pub async fn save_with_dialog(image: DownloadedImage) -> Result<Option<PathBuf>> {
    let mut dialog = rfd::AsyncFileDialog::new()
        .set_title("Save Avatar As")
        .set_file_name(&image.file_name)
        .add_filter("PNG", &["png"]);

    if let Some(dir) = dirs::download_dir() {
        dialog = dialog.set_directory(dir);
    }

    let Some(handle) = dialog.save_file().await else {
        return Ok(None);
    };

    let path = handle.path().to_path_buf();
    write_image(&path, &image.bytes).await?;
    Ok(Some(path))
}

/// Writes image bytes to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns `Error::Io` if the file cannot be written.
pub async fn write_image(path: &Path, bytes: &[u8]) -> Result<()> {
    tokio::fs::write(path, bytes).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[tokio::test]
    async fn write_image_creates_file_with_bytes() {
        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join("bo.png");

        write_image(&path, b"not really a png").await.expect("write");

        assert_eq!(std::fs::read(&path).unwrap(), b"not really a png");
    }

    #[tokio::test]
    async fn write_image_into_missing_directory_is_io_error() {
        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join("missing").join("bo.png");

        let result = write_image(&path, b"x").await;
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
