use markdown_folio_engine::{Resolver, TranslationSet, render_lines};

#[test]
fn fixture_headings() {
    assert_fixture("headings", Resolver::identity());
}

#[test]
fn fixture_tables_and_quotes() {
    assert_fixture("tables_and_quotes", Resolver::identity());
}

#[test]
fn fixture_inline() {
    assert_fixture("inline", Resolver::identity());
}

#[test]
fn fixture_translated_de() {
    let set = translations();
    let de = set.language("de").unwrap();
    assert_fixture_as("translated", "translated_de", Resolver::new(de));
}

#[test]
fn fixture_translated_en() {
    let set = translations();
    let en = set.language("en").unwrap();
    assert_fixture_as("translated", "translated_en", Resolver::new(en));
}

fn fixtures_dir() -> String {
    format!("{}/tests/fixtures", env!("CARGO_MANIFEST_DIR"))
}

fn translations() -> TranslationSet {
    let csv = std::fs::read_to_string(format!("{}/translations.csv", fixtures_dir())).unwrap();
    TranslationSet::from_csv(&csv).unwrap()
}

fn assert_fixture(name: &str, resolver: Resolver<'_>) {
    assert_fixture_as(name, name, resolver);
}

fn assert_fixture_as(fixture: &str, snapshot: &str, resolver: Resolver<'_>) {
    let fixtures_dir = fixtures_dir();
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{fixture}.md")).unwrap();

    let html = render_lines(md.lines(), resolver);
    assert_balanced(&html);

    insta::with_settings!({
        snapshot_path => fixtures_dir.as_str(),
        prepend_module_to_snapshot => false,
    }, {
        insta::assert_snapshot!(snapshot, html.trim_end());
    });
}

/// Every section and block element that is opened is closed again.
fn assert_balanced(html: &str) {
    for tag in ["article", "table", "tr", "blockquote", "p", "b", "i", "span"] {
        let opened = html.matches(&format!("<{tag}>")).count()
            + html.matches(&format!("<{tag} ")).count();
        let closed = html.matches(&format!("</{tag}>")).count();
        assert_eq!(opened, closed, "unbalanced <{tag}> in:\n{html}");
    }
}
