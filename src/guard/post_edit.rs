//! D-pad focus check for Compose sources, run after an edit lands.
//!
//! TV users have no touch screen. A composable that reacts to clicks but
//! can never take focus is unreachable with a remote. The check is a coarse
//! text scan over everything the edit introduced, not a parse.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::Advisory;
use crate::event::EditEvent;

/// Only Kotlin sources are scanned.
pub const SOURCE_SUFFIX: &str = ".kt";

/// Marks a UI declaration.
pub const DECLARATION_MARKER: &str = "@Composable";

/// Click and selection handlers. `onClick =` excludes parameter declarations.
pub const INTERACTIVITY_MARKERS: [&str; 5] = [
    "clickable",
    "onClick =",
    "onClick = {",
    "selectable",
    "toggleable",
];

/// Evidence that focus or key input is already handled.
pub const FOCUS_MARKERS: [&str; 11] = [
    "focusable",
    "FocusRequester",
    "onFocusChanged",
    "hasFocus",
    "androidx.tv",
    ".tv.material",
    "tvClickable",
    "FocusDirection",
    "BringIntoViewRequester",
    "onKeyEvent",
    "onPreviewKeyEvent",
];

// `@Composable` followed by `fun`, optionally qualified. Generic
// declarations (`fun <T>`) count too.
static COMPOSABLE_FN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@Composable\s+(?:(?:private|internal|public)\s+)?fun\b").unwrap()
});

pub const FOCUS_ADVISORY: &str = "\
📺 TV-FOCUS WARNING ─────────────────────────────────
   New @Composable with interactive behavior detected.
   Touchscreen is required=false — D-pad must work.

   Options:
   1. Use androidx.tv.material3.Card / Button (focus built-in)
   2. Add Modifier.focusable() + onFocusChanged { }
   3. Add FocusRequester for programmatic focus control
─────────────────────────────────────────────────────";

/// Count `@Composable fun` declarations in `text`.
pub fn count_composables(text: &str) -> usize {
    COMPOSABLE_FN.find_iter(text).count()
}

fn is_interactive(text: &str) -> bool {
    INTERACTIVITY_MARKERS.iter().any(|m| text.contains(m))
}

fn handles_focus(text: &str) -> bool {
    FOCUS_MARKERS.iter().any(|m| text.contains(m))
}

/// Warn when an edit introduces interactive composables without focus handling.
pub fn evaluate(event: &EditEvent) -> Advisory {
    if !event.file_path.ends_with(SOURCE_SUFFIX) {
        return Advisory::allow();
    }

    let text = event.changed_text();
    if !text.contains(DECLARATION_MARKER) {
        return Advisory::allow();
    }

    let interactive = is_interactive(&text);
    let focus = handles_focus(&text);
    let composables = count_composables(&text);
    debug!(
        path = %event.file_path,
        interactive,
        focus,
        composables,
        "Scanned composable edit"
    );

    if interactive && !focus && composables > 0 {
        Advisory::warn(FOCUS_ADVISORY.to_string())
    } else {
        Advisory::allow()
    }
}
