use email_normalizer::*;

#[test]
fn test_script_block_removed() {
    assert_eq!(html_to_text("<script>alert(1)</script>hello"), "hello");
}

#[test]
fn test_style_block_removed_case_insensitive_multiline() {
    let html = "<STYLE type=\"text/css\">\n.x { color: red; }\n</STYLE><p>Body</p>";
    assert_eq!(html_to_text(html), "Body");
}

#[test]
fn test_script_spanning_lines_never_leaks() {
    let html = "<p>Before</p><script>\nvar secret = 1;\n</script>\n<p>After</p>";
    let text = html_to_text(html);
    assert_eq!(text, "Before After");
    assert!(!text.contains("secret"));
}

#[test]
fn test_tags_become_spaces() {
    assert_eq!(html_to_text("<p>one</p><p>two</p>"), "one two");
    assert_eq!(html_to_text("line<br/>break"), "line break");
}

#[test]
fn test_basic_entities() {
    assert_eq!(html_to_text("a &amp; b &lt;c&gt;"), "a & b <c>");
}

#[test]
fn test_quote_and_hex_entities() {
    let html = "&quot;hi&quot; &#39;x&#39; &apos;y&apos; &#x27;z&#x27; &#x2F;path &#x60;c&#x60; a&#x3D;b";
    assert_eq!(html_to_text(html), "\"hi\" 'x' 'y' 'z' /path `c` a=b");
}

#[test]
fn test_nbsp_collapses_with_whitespace() {
    assert_eq!(html_to_text("a&nbsp;&nbsp; b"), "a b");
}

#[test]
fn test_ampersand_not_double_unescaped() {
    assert_eq!(html_to_text("&amp;lt;tag&amp;gt;"), "&lt;tag&gt;");
}

#[test]
fn test_empty_input() {
    assert_eq!(html_to_text(""), "");
    assert_eq!(html_to_text("   \n\t "), "");
    assert_eq!(html_to_text("<div></div>"), "");
}

#[test]
fn test_whitespace_collapsed_and_trimmed() {
    assert_eq!(
        html_to_text("\n  <div>Hello <i>world</i></div>\n\n   Regards  "),
        "Hello world Regards"
    );
}

#[test]
fn test_decoding_decoded_text_is_stable() {
    let samples = [
        "<div>Hello <i>world</i></div>\n\n  Regards",
        "plain text only",
        "<p>Tom &amp; Jerry</p>",
        "<style>p{}</style><ul><li>one</li><li>two</li></ul>",
        "",
    ];

    for sample in samples {
        let once = html_to_text(sample);
        assert_eq!(html_to_text(&once), once, "unstable for {sample:?}");
    }
}

#[test]
fn test_collapse_whitespace() {
    assert_eq!(collapse_whitespace("  a\n\n b\t\tc  "), "a b c");
}

#[test]
fn test_entity_encoded_markup_decodes_again_on_second_pass() {
    let once = html_to_text("a &amp; b &lt;c&gt;");
    assert_eq!(once, "a & b <c>");
    assert_eq!(html_to_text(&once), "a & b");
}
