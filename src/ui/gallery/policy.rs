// SPDX-License-Identifier: MPL-2.0
//! Interaction policies selected through `[gallery]` in `settings.toml`.

use serde::Deserialize;

/// Which clicks inside the open preview close it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DismissPolicy {
    /// Any click inside the overlay closes it, including on the image.
    AnyClick,
    /// Only the backdrop and the close control close the overlay.
    #[default]
    BackdropOnly,
}

/// Gesture that opens the preview from a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OpenTrigger {
    /// A plain click on the tile image.
    #[default]
    Click,
    /// Press and hold the tile image past the long-press threshold.
    LongPress,
}

/// Region of the preview overlay that received a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The dimmed area around the previewed content.
    Backdrop,
    /// The previewed image, its caption or its action row.
    Content,
}

impl DismissPolicy {
    /// Returns whether a click on `target` closes the overlay.
    #[must_use]
    pub fn dismisses(self, target: ClickTarget) -> bool {
        match self {
            DismissPolicy::AnyClick => true,
            DismissPolicy::BackdropOnly => target == ClickTarget::Backdrop,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backdrop_only_ignores_content_clicks() {
        let policy = DismissPolicy::BackdropOnly;
        assert!(policy.dismisses(ClickTarget::Backdrop));
        assert!(!policy.dismisses(ClickTarget::Content));
    }

    #[test]
    fn any_click_dismisses_everywhere() {
        let policy = DismissPolicy::AnyClick;
        assert!(policy.dismisses(ClickTarget::Backdrop));
        assert!(policy.dismisses(ClickTarget::Content));
    }

    #[test]
    fn defaults_are_backdrop_only_and_click() {
        assert_eq!(DismissPolicy::default(), DismissPolicy::BackdropOnly);
        assert_eq!(OpenTrigger::default(), OpenTrigger::Click);
    }
}
