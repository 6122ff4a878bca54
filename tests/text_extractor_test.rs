//! End-to-end extraction tests over realistic page layouts

use kodegen_tools_wikiscrape::{NoiseSpec, TextExtractor, extract_text};

mod common;
use common::wiki_page;

#[test]
fn test_footnote_marker_and_script_removed() {
    let html = r#"<div id="bodyContent"><p>Hello <sup>[1]</sup> world</p><script>evil()</script></div>"#;
    assert_eq!(extract_text(html), "Hello world");
}

#[test]
fn test_page_without_body_content_is_empty() {
    let html = r#"<html><body><div id="content"><p>Redirect page</p></div></body></html>"#;
    assert_eq!(extract_text(html), "");
}

#[test]
fn test_script_inside_body_contributes_nothing() {
    let body = r#"<p>Visible.</p><script>document.write("Looks like prose")</script>"#;
    let text = extract_text(&wiki_page("Script", body));
    assert_eq!(text, "Visible.");
}

#[test]
fn test_wikipedia_boilerplate_stripped() {
    let body = r##"
        <div class="dablink noprint">This article is about the crab.</div>
        <table class="infobox"><tr><th>Kingdom</th><td>Animalia</td></tr></table>
        <p><b>Ferris</b> is the unofficial mascot<sup id="cite_ref-1" class="reference"><a href="#cite_note-1">[1]</a></sup> of Rust.</p>
        <table id="toc" class="toc"><tr><td><ul><li>1 History</li></ul></td></tr></table>
        <h2><span class="editsection">[<a href="edit">edit</a>]</span> <span class="mw-headline" id="History">History</span></h2>
        <p>Ferris was drawn
        in 2015.</p>
        <div class="references"><ol><li>Reference list item</li></ol></div>
    "##;
    let text = extract_text(&wiki_page("Ferris", body));
    assert_eq!(
        text,
        "Ferris is the unofficial mascot of Rust. Ferris was drawn in 2015."
    );
}

#[test]
fn test_title_and_head_are_not_part_of_article() {
    let text = extract_text(&wiki_page("Elsewhere", "<p>Only this.</p>"));
    assert_eq!(text, "Only this.");
    assert!(!text.contains("Wikipedia"));
}

#[test]
fn test_output_has_no_runs_or_outer_whitespace() {
    let body = "<p>\n\t  spaced \n\n out\u{a0}\u{a0}text  </p>\n\n<p>  again </p>";
    let text = extract_text(&wiki_page("Spacing", body));
    assert_eq!(text, "spaced out text again");
}

#[test]
fn test_garbage_input_does_not_fail() {
    for html in ["", "<<<>>>", "<div id=\"bodyContent\"", "</div></div>", "\u{0}\u{fffd}"] {
        let text = extract_text(html);
        assert_eq!(text, text.trim());
    }
}

#[test]
fn test_custom_noise_spec() {
    let spec = NoiseSpec {
        emptied_tags: vec!["aside".to_string()],
        emptied_ids: Vec::new(),
        removed_div_markers: Vec::new(),
        removed_span_markers: Vec::new(),
        content_region_id: "main".to_string(),
    };
    let extractor = TextExtractor::new(spec);
    let html = r#"<div id="main"><aside>ad</aside><ul><li>kept list</li></ul></div>"#;
    assert_eq!(extractor.extract(html), "kept list");
}
