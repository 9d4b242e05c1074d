//! End-to-end scenarios through [`pagedate::find_date`], each exercising a
//! different tier of the discovery pipeline.

use pagedate::{find_date, Config};

#[test]
fn header_meta_tag_wins_outright() {
    let html = r#"<html><head>
        <meta property="article:published_time" content="2017-09-01"/>
    </head><body><p>Updated 2099-01-01 somewhere unrelated.</p></body></html>"#;
    assert_eq!(
        find_date(html, &Config::default()).as_deref(),
        Some("2017-09-01")
    );
}

#[test]
fn json_ld_in_body_is_used_when_header_is_silent() {
    let html = r#"<html><head></head><body>
        <script type="application/ld+json">
            {"@type":"Article","datePublished":"2019-03-26","dateModified":"2020-01-02"}
        </script>
    </body></html>"#;
    let d = find_date(html, &Config::default()).unwrap();
    assert_eq!(d, "2020-01-02");

    let config = Config {
        original_date: true,
        ..Config::default()
    };
    assert_eq!(find_date(html, &config).as_deref(), Some("2019-03-26"));
}

#[test]
fn url_path_is_used_when_header_and_body_are_silent() {
    let html = "<html><head></head><body><p>No date here.</p></body></html>";
    let config = Config {
        url: Some("https://example.org/blog/2016/07/12/some-post".to_string()),
        ..Config::default()
    };
    assert_eq!(
        find_date(html, &config).as_deref(),
        Some("2016-07-12")
    );
}

#[test]
fn extensive_search_finds_a_date_in_free_text() {
    let html = "<html><head></head><body><p>Dieser Artikel wurde am 3. Dezember 2008 veröffentlicht.</p></body></html>";
    let config = Config {
        extensive_search: true,
        ..Config::default()
    };
    assert_eq!(find_date(html, &config).as_deref(), Some("2008-12-03"));
}

#[test]
fn out_of_range_header_date_is_rejected_and_pipeline_falls_through() {
    let html = r#"<html><head>
        <meta property="article:published_time" content="1950-01-01"/>
    </head><body>
        <script type="application/ld+json">{"datePublished":"2018-05-05"}</script>
    </body></html>"#;
    assert_eq!(
        find_date(html, &Config::default()).as_deref(),
        Some("2018-05-05")
    );
}

#[test]
fn empty_document_yields_no_date() {
    assert_eq!(find_date("", &Config::default()), None);
    assert_eq!(find_date("<html></html>", &Config::default()), None);
}

#[test]
fn invalid_output_format_yields_no_date() {
    let config = Config {
        output_format: "not a format".to_string(),
        ..Config::default()
    };
    let html = r#"<html><head><meta property="article:published_time" content="2017-09-01"/></head></html>"#;
    assert_eq!(find_date(html, &config), None);
}

#[test]
fn custom_output_format_is_honored() {
    let config = Config {
        output_format: "%d %B %Y".to_string(),
        ..Config::default()
    };
    let html = r#"<html><head><meta property="article:published_time" content="2017-09-01"/></head></html>"#;
    assert_eq!(find_date(html, &config).as_deref(), Some("01 September 2017"));
}
