//! Tests for markup preprocessing.

use plainmark_ast::strip_tags;

#[test]
fn test_strip_script() {
    let markup = "<script>let a = 1;</script>\n<p>{a}</p>";
    assert_eq!(strip_tags(markup), "\n<p>{a}</p>");
}

#[test]
fn test_strip_style_with_attributes() {
    let markup = "<style lang=\"scss\">p { color: red; }</style><p>x</p>";
    assert_eq!(strip_tags(markup), "<p>x</p>");
}

#[test]
fn test_strip_is_case_insensitive() {
    assert_eq!(strip_tags("<SCRIPT>x</Script>y"), "y");
}

#[test]
fn test_strip_comments() {
    assert_eq!(strip_tags("a<!-- {b} -->c<!---->d"), "acd");
}

#[test]
fn test_strip_comment_hiding_a_script() {
    assert_eq!(strip_tags("<!-- <script>x</script> -->ok"), "ok");
}

#[test]
fn test_strip_self_closing() {
    assert_eq!(strip_tags("<script src=\"app.js\"/>z<style/>"), "z");
}

#[test]
fn test_strip_leaves_unterminated_regions() {
    assert_eq!(strip_tags("<script>let a"), "<script>let a");
    assert_eq!(strip_tags("a<!-- b"), "a<!-- b");
}

#[test]
fn test_strip_requires_tag_boundary() {
    assert_eq!(strip_tags("<styles>x</styles>"), "<styles>x</styles>");
    assert_eq!(strip_tags("<scripted/>"), "<scripted/>");
}

#[test]
fn test_strip_multiple_regions() {
    let markup = "<script context=\"module\">a</script><script>b</script>{c}<style>d</style>";
    assert_eq!(strip_tags(markup), "{c}");
}

#[test]
fn test_strip_keeps_multibyte_text() {
    assert_eq!(strip_tags("é<script>x</script>ü"), "éü");
}
