//! Golden-string tests for every axis-step form of the path builder.

use rstest::rstest;
use xpath_builder::{Filter, XPath, filter, xpath};

fn checked() -> Filter {
    filter().has_attribute("checked")
}

#[rstest]
#[case::descendant(xpath().descendant(None), ".//*")]
#[case::descendant_by_tag(xpath().descendant_by_tag("div", None), ".//div")]
#[case::descendant_by_svg_tag(
    xpath().descendant_by_svg_tag("circle", None),
    ".//*[local-name() = 'circle']"
)]
#[case::descendant_or_self(xpath().descendant_or_self(None), "./descendant-or-self::*")]
#[case::descendant_or_self_by_tag(
    xpath().descendant_or_self_by_tag("div", None),
    "./descendant-or-self::div"
)]
#[case::descendant_or_self_by_svg_tag(
    xpath().descendant_or_self_by_svg_tag("circle", None),
    "./descendant-or-self::*[local-name() = 'circle']"
)]
#[case::child(xpath().child(None), "./*")]
#[case::child_by_tag(xpath().child_by_tag("li", None), "./li")]
#[case::child_by_svg_tag(xpath().child_by_svg_tag("rect", None), "./*[local-name() = 'rect']")]
#[case::ancestor(xpath().ancestor(None), "./ancestor::*")]
#[case::ancestor_by_tag(xpath().ancestor_by_tag("ul", None), "./ancestor::ul")]
#[case::ancestor_by_svg_tag(xpath().ancestor_by_svg_tag("g", None), "./ancestor::*[local-name() = 'g']")]
#[case::ancestor_or_self(xpath().ancestor_or_self(None), "./ancestor-or-self::*")]
#[case::ancestor_or_self_by_tag(xpath().ancestor_or_self_by_tag("ul", None), "./ancestor-or-self::ul")]
#[case::ancestor_or_self_by_svg_tag(
    xpath().ancestor_or_self_by_svg_tag("g", None),
    "./ancestor-or-self::*[local-name() = 'g']"
)]
#[case::following(xpath().following(None), "./following::*")]
#[case::following_by_tag(xpath().following_by_tag("section", None), "./following::section")]
#[case::following_by_svg_tag(
    xpath().following_by_svg_tag("path", None),
    "./following::*[local-name() = 'path']"
)]
#[case::following_sibling(xpath().following_sibling(None), "./following-sibling::*")]
#[case::following_sibling_by_tag(
    xpath().following_sibling_by_tag("li", None),
    "./following-sibling::li"
)]
#[case::following_sibling_by_svg_tag(
    xpath().following_sibling_by_svg_tag("use", None),
    "./following-sibling::*[local-name() = 'use']"
)]
#[case::preceding(xpath().preceding(None), "./preceding::*")]
#[case::preceding_by_tag(xpath().preceding_by_tag("section", None), "./preceding::section")]
#[case::preceding_by_svg_tag(
    xpath().preceding_by_svg_tag("path", None),
    "./preceding::*[local-name() = 'path']"
)]
#[case::preceding_sibling(xpath().preceding_sibling(None), "./preceding-sibling::*")]
#[case::preceding_sibling_by_tag(
    xpath().preceding_sibling_by_tag("li", None),
    "./preceding-sibling::li"
)]
#[case::preceding_sibling_by_svg_tag(
    xpath().preceding_sibling_by_svg_tag("use", None),
    "./preceding-sibling::*[local-name() = 'use']"
)]
fn renders_axis_step(#[case] built: XPath, #[case] expected: &str) {
    assert_eq!(built.to_string(), expected);
}

#[rstest]
#[case::plain(xpath().child(Some(&checked())), "./*[@checked]")]
#[case::by_tag(xpath().ancestor_by_tag("div", Some(&checked())), "./ancestor::div[@checked]")]
#[case::by_svg_tag(
    xpath().following_by_svg_tag("path", Some(&checked())),
    "./following::*[local-name() = 'path'][@checked]"
)]
fn embeds_the_predicate_after_the_node_test(#[case] built: XPath, #[case] expected: &str) {
    assert_eq!(built.to_string(), expected);
}

#[rstest]
fn missing_and_empty_filters_add_no_brackets() {
    assert_eq!(xpath().element_by_tag("h1", None).to_string(), ".//h1");
    assert_eq!(xpath().element_by_tag("h1", Some(&filter())).to_string(), ".//h1");
}

#[rstest]
fn element_synonyms_match_the_descendant_forms() {
    assert_eq!(xpath().element(None), xpath().descendant(None));
    assert_eq!(xpath().element_by_tag("a", Some(&checked())), xpath().descendant_by_tag("a", Some(&checked())));
    assert_eq!(xpath().element_by_svg_tag("svg", None), xpath().descendant_by_svg_tag("svg", None));
}

#[rstest]
fn parent_appends_the_dot_dot_step() {
    assert_eq!(xpath().element_by_tag("li", None).parent().to_string(), ".//li/..");
}

#[rstest]
fn raw_fragments_are_appended_verbatim() {
    let path = xpath().raw("//div[1]/../span");
    assert_eq!(path.to_string(), ".//div[1]/../span");
}

#[rstest]
fn chaining_leaves_the_receiver_untouched() {
    let base = xpath().element_by_tag("ul", None);
    let rendered = base.to_string();
    let extended = base.child_by_tag("li", Some(&filter().first()));
    assert_eq!(base.to_string(), rendered);
    assert_eq!(extended.to_string(), ".//ul/li[1]");
}

#[rstest]
fn rendering_is_idempotent() {
    let built = xpath().descendant_by_tag("table", Some(&checked()));
    assert_eq!(built.to_string(), built.to_string());
}

#[rstest]
fn clear_reseeds_without_touching_prior_renderings() {
    let mut path = xpath().element_by_tag("ul", None).parent();
    let captured = path.to_string();
    path.clear();
    assert!(path.is_empty());
    assert_eq!(path.to_string(), ".");
    assert_eq!(captured, ".//ul/..");
}

#[rstest]
#[case::by_tag(xpath().element_by_tag("h1", None), ".//h1")]
#[case::by_tag_with_attribute(
    xpath().element_by_tag("body", Some(&filter().has_attribute("data-x"))),
    ".//body[@data-x]"
)]
#[case::positional(xpath().element_by_tag("li", Some(&filter().position(2))), ".//li[2]")]
fn renders_documented_scenarios(#[case] built: XPath, #[case] expected: &str) {
    assert_eq!(built.to_string(), expected);
}
