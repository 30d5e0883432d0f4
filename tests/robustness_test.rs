use rs_paging_links::dom::Document;
use rs_paging_links::{find_next, find_paging_link, find_previous, Direction, Error, Options};

const PAGE: &str = "http://example.com/story/2";

fn next(html: &str) -> Option<String> {
    let doc = Document::from(html);
    find_next(&doc.select("html"), PAGE).unwrap_or_else(|e| panic!("{e}"))
}

#[test]
fn malformed_html_does_not_panic() {
    for html in [
        "<a href=\"/story/3\">Next",
        "<p><a href=\"/story/3\"></p>Next</a>",
        "<a href=\"/story/3 class=next>Next</a>",
        "<a href='/story/3'>&amp Next &lt;</a>",
        "",
    ] {
        let _ = next(html);
    }
}

#[test]
fn unclosed_anchor_still_found() {
    assert_eq!(next("<a href=\"/story/3\">Next").as_deref(), Some("http://example.com/story/3"));
}

#[test]
fn odd_hrefs_are_skipped() {
    let html = r##"
        <a href="javascript:void(0)">Next 3</a>
        <a href="mailto:me@example.com?subject=3">Next</a>
        <a href="http://[broken/3">Next</a>
        <a href="#3">Next</a>
        <a>Next</a>
    "##;
    let doc = Document::from(html);
    let options = Options {
        collect_trace: true,
        ..Options::default()
    };
    let result = find_paging_link(&doc.select("html"), PAGE, Direction::Next, &options)
        .unwrap_or_else(|e| panic!("{e}"));

    assert_eq!(result.href, None);
    assert_eq!(result.links_examined, 5);
    assert_eq!(result.candidates, 0);

    let Some(trace) = result.trace else {
        panic!("trace requested");
    };
    assert!(trace.links[2]
        .messages
        .contains(&"ignored: unresolvable href".to_string()));
}

#[test]
fn page_url_errors() {
    let doc = Document::from(r#"<a href="/story/3">Next</a>"#);
    let root = doc.select("html");

    assert!(matches!(find_next(&root, "example.com/story/2"), Err(Error::MalformedUrl(_))));
    assert!(matches!(find_previous(&root, ""), Err(Error::MalformedUrl(_))));
    assert!(matches!(
        find_next(&root, "http://exa mple.com/story/2"),
        Err(Error::InvalidUrl { .. })
    ));
}

#[test]
fn deep_nesting_is_bounded() {
    let mut html = String::new();
    for _ in 0..500 {
        html.push_str("<div>");
    }
    html.push_str(r#"<a href="/story/3">Next</a>"#);
    for _ in 0..500 {
        html.push_str("</div>");
    }
    assert_eq!(next(&html).as_deref(), Some("http://example.com/story/3"));
}

#[test]
fn multibyte_text_is_counted_in_characters() {
    // 25 characters, 75 bytes: still short enough.
    let text = "ページ".repeat(8) + "次";
    assert_eq!(text.chars().count(), 25);
    let html = format!(r#"<a class="next" href="/story/3">{text}</a>"#);

    let doc = Document::from(html.as_str());
    let options = Options {
        collect_trace: true,
        ..Options::default()
    };
    let result = find_paging_link(&doc.select("html"), PAGE, Direction::Next, &options)
        .unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(result.candidates, 1);
    // +50 for the class, -25 for the length.
    assert_eq!(result.trace.map(|t| t.candidates[0].score), Some(25));
}

#[test]
fn uppercase_link_hosts_match() {
    let doc = Document::from(r#"<a href="HTTP://EXAMPLE.COM/story/3">Next</a>"#);
    assert_eq!(
        find_next(&doc.select("html"), PAGE).ok().flatten().as_deref(),
        Some("http://example.com/story/3")
    );
}

#[test]
fn very_long_page_url_does_not_panic() {
    let page = format!("http://example.com/{}/2", "k".repeat(100_000));
    let doc = Document::from(r#"<a href="3">Next</a>"#);
    let expected = format!("http://example.com/{}/3", "k".repeat(100_000));

    let found = find_next(&doc.select("html"), &page).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(found, Some(expected));
}

#[test]
fn uppercase_page_host_matches_links() {
    let doc = Document::from(r#"<a href="/story/3">Next</a>"#);
    assert_eq!(
        find_next(&doc.select("html"), "HTTP://Example.COM/story/2").ok().flatten().as_deref(),
        Some("http://example.com/story/3")
    );
}

#[test]
fn non_ascii_page_path_matches_encoded_links() {
    let doc = Document::from(r#"<a href="/café/3">Next</a>"#);
    let options = Options {
        collect_trace: true,
        ..Options::default()
    };
    let result = find_paging_link(&doc.select("html"), "http://example.com/café/2", Direction::Next, &options)
        .unwrap_or_else(|e| panic!("{e}"));

    assert_eq!(result.href.as_deref(), Some("http://example.com/caf%C3%A9/3"));
    // +50 for the word, and no off-base penalty.
    assert_eq!(result.trace.map(|t| t.candidates[0].score), Some(50));
}

#[test]
fn important_hidden_link_is_skipped() {
    let html = r#"<a href="/story/3" style="display:none !IMPORTANT">Next</a>"#;
    assert_eq!(next(html), None);
}
