// Extractor tests.

use super::*;

fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_adblock_single_rule() {
    assert_eq!(extract_adblock("||example.com^"), set(&["*.example.com"]));
}

#[test]
fn test_adblock_skips_www() {
    assert!(extract_adblock("||www.example.com^").is_empty());
}

#[test]
fn test_adblock_rules_with_modifiers_and_comments() {
    let content = "! Title: Spyware filter\n\
                   ||tracker.example.net^$third-party\n\
                   @@||allowed.example.org^|\n\
                   example.com##.banner\n\
                   ||cdn-1.example.io^\n";
    assert_eq!(
        extract_adblock(content),
        set(&[
            "*.allowed.example.org",
            "*.cdn-1.example.io",
            "*.tracker.example.net"
        ])
    );
}

#[test]
fn test_adblock_ignores_rules_with_paths() {
    // `/` is not a domain character, so the caret is never reached
    assert!(extract_adblock("||example.com/ads/*^").is_empty());
}

#[test]
fn test_plain_list_example() {
    let content = "# comment\nexample.org\nwww.example.org\nfoo.bar baz\n";
    assert_eq!(
        extract_plain_list(content),
        set(&["*.example.org", "*.foo.bar"])
    );
}

#[test]
fn test_plain_list_skips_tokens_without_dot() {
    let content = "localhost\n  \n\tindented.example.com  \n# another.example.com\n";
    assert_eq!(extract_plain_list(content), set(&["*.indented.example.com"]));
}

#[test]
fn test_plain_list_takes_first_token_only() {
    let content = "ads.example.com\t# known tracker\n";
    assert_eq!(extract_plain_list(content), set(&["*.ads.example.com"]));
}

#[test]
fn test_vendor_mentions_in_html() {
    let content = r#"<td>outlook.office365.com</td><p>Join via Zoom.us or webex.com.</p>"#;
    assert_eq!(
        extract_vendor_mentions(content),
        set(&["*.Zoom.us", "*.outlook.office365.com", "*.webex.com"])
    );
}

#[test]
fn test_vendor_mentions_without_suffix() {
    // A bare stem with no dotted suffix is not a domain
    assert!(extract_vendor_mentions("Microsoft Teams and Feishu").is_empty());
}

#[test]
fn test_vendor_suffixes_with_subdomains() {
    let content = "<li>portal.microsoft.com</li><li>a.b.outlook.office.com</li>";
    assert_eq!(
        extract_vendor_suffixes(content),
        set(&["*.a.b.outlook.office.com", "*.portal.microsoft.com"])
    );
}

#[test]
fn test_vendor_suffixes_wildcard_notation() {
    let content = "Allow *.sharepoint.com and *.teams.microsoft.com";
    assert_eq!(
        extract_vendor_suffixes(content),
        set(&["*.sharepoint.com", "*.teams.microsoft.com"])
    );
}

#[test]
fn test_vendor_suffixes_ignore_other_vendors() {
    assert!(extract_vendor_suffixes("login.microsoftonline.com zoom.us").is_empty());
}

#[test]
fn test_labeled_fields_json_and_assignment() {
    let content = r#"{"domain": "oapi.dingtalk.com"} domain="Open.Feishu.cn" domain : "x-1.larksuite.com""#;
    assert_eq!(
        extract_labeled_fields(content),
        set(&["Open.Feishu.cn", "oapi.dingtalk.com", "x-1.larksuite.com"])
    );
}

#[test]
fn test_labeled_fields_require_quoted_value() {
    assert!(extract_labeled_fields("domain: example.com").is_empty());
}

#[test]
fn test_extractors_accept_empty_input() {
    use strum::IntoEnumIterator;

    for format in SourceFormat::iter() {
        assert!(format.extract("").is_empty(), "{} should yield nothing", format);
    }
}

#[test]
fn test_format_dispatch() {
    assert_eq!(
        SourceFormat::Adblock.extract("||example.com^"),
        set(&["*.example.com"])
    );
    assert_eq!(
        SourceFormat::PlainList.extract("example.com\n"),
        set(&["*.example.com"])
    );
    assert_eq!(
        SourceFormat::LabeledField.extract(r#""domain":"example.com""#),
        set(&["example.com"])
    );
}
