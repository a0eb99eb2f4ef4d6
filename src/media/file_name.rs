// SPDX-License-Identifier: MPL-2.0
//! Download file name derivation.
//!
//! The offered name is the display name lower-cased, with every run of
//! whitespace replaced by a single underscore, followed by a `.png`
//! extension. The extension is fixed: the bundled avatars are JPEG or WEBP
//! on the wire, but the offered name always ends in `.png`.

/// Extension appended to every derived download name.
pub const DOWNLOAD_EXTENSION: &str = "png";

/// Derives the save-as file name for an avatar display name.
///
/// Leading and trailing whitespace runs are replaced too, so `" Bo "` gives
/// `"_bo_.png"`.
#[must_use]
pub fn derive(display_name: &str) -> String {
    let lowered = display_name.to_lowercase();
    let mut stem = String::with_capacity(lowered.len() + DOWNLOAD_EXTENSION.len() + 1);
    let mut in_whitespace = false;

    for ch in lowered.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                stem.push('_');
            }
            in_whitespace = true;
        } else {
            stem.push(ch);
            in_whitespace = false;
        }
    }

    format!("{stem}.{DOWNLOAD_EXTENSION}")
}
