use rs_paging_links::{find_base_url, Error};

fn base(url: &str) -> String {
    find_base_url(url).unwrap_or_else(|e| panic!("{url}: {e}"))
}

#[test]
fn page_number_suffix_and_extension() {
    assert_eq!(base("http://example.com/article/page-2.html"), "http://example.com/article/page");
    assert_eq!(base("http://example.com/story_p3.htm"), "http://example.com/story");
}

#[test]
fn dated_permalink_with_page_segment() {
    assert_eq!(
        base("https://www.example.com/2015/06/story-title/2/"),
        "https://www.example.com/2015/06/story-title"
    );
}

#[test]
fn index_with_query() {
    assert_eq!(base("http://example.com/index.php?page=2"), "http://example.com/");
}

#[test]
fn numeric_tail_drops_short_segments() {
    assert_eq!(base("http://example.com/a/b/12"), "http://example.com/a");
}

#[test]
fn base_is_not_always_a_prefix() {
    let url = "http://example.com/article/page-2.html";
    let base = base(url);
    assert!(!url.starts_with(&format!("{base}/")));
    assert!(url.starts_with(&base));

    // A page number in the middle of the path is cut out.
    let url = "http://example.com/news/12/story";
    assert_eq!(find_base_url(url).ok().as_deref(), Some("http://example.com/news/story"));
    assert!(!url.starts_with("http://example.com/news/story"));
}

#[test]
fn malformed_urls_are_rejected() {
    for url in ["example.com", "", "/relative/path", "http://"] {
        assert!(
            matches!(find_base_url(url), Err(Error::MalformedUrl(_))),
            "{url:?} should be rejected"
        );
    }
}
