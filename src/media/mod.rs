// SPDX-License-Identifier: MPL-2.0
//! Remote avatar images: fetching, download naming and saving.

pub mod fetch;
pub mod file_name;
pub mod save;

pub use fetch::{build_client, fetch_image};
pub use save::{save_with_dialog, DownloadedImage};
