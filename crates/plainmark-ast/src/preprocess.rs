//! Textual preprocessing applied before the markup is parsed.
//!
//! Comments, `<style>` regions and `<script>` regions carry nothing the
//! generator reads, so they are removed from the text first. Offsets in the
//! parsed tree then refer to the stripped text.

use regex::Regex;
use std::sync::LazyLock;

/// A comment, or a style region: `<style ...>` up to the first `</style>`, or
/// a self-closing `<style .../>`.
static STYLE_REGION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<!--.*?-->|<style(\s.*?)?(?:>.*?</style>|/>)").expect("style pattern is valid")
});

/// Same as [`STYLE_REGION`] for scripts.
static SCRIPT_REGION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<!--.*?-->|<script(\s.*?)?(?:>.*?</script>|/>)").expect("script pattern is valid")
});

/// Removes HTML comments, style regions and script regions from `markup`.
///
/// Tag names match case-insensitively. Unterminated comments and regions are
/// left in place.
#[must_use]
pub fn strip_tags(markup: &str) -> String {
    let without_styles = STYLE_REGION.replace_all(markup, "");
    SCRIPT_REGION.replace_all(&without_styles, "").into_owned()
}
