//! Tests for document parsing, rendering and version selection.

use super::*;
use crate::error::ConfigError;

const CURRENT_DOC: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE configuration PUBLIC "-//Chainconf//DTD Configuration 1.1//EN" "chainconf-1.1.dtd">
<configuration>
    <!-- comments are dropped -->
    <param name="encoding">UTF-8</param>
    <chain name="main">
        <reader path="src" />
        <transformation type="imports-cleaner" />
    </chain>
</configuration>
"#;

#[test]
fn test_parse_keeps_element_structure() {
    let doc = Document::parse(CURRENT_DOC).unwrap();
    let root = doc.root();

    assert_eq!(root.name(), "configuration");
    let names: Vec<&str> = root.elements().map(|e| e.name()).collect();
    assert_eq!(names, vec!["param", "chain"]);

    let chain = root.find("chain").unwrap();
    assert_eq!(chain.attr("name"), Some("main"));
    assert_eq!(chain.elements().count(), 2);
}

#[test]
fn test_parse_drops_whitespace_text() {
    let doc = Document::parse(CURRENT_DOC).unwrap();
    assert!(
        doc.root()
            .children()
            .iter()
            .all(|n| matches!(n, Node::Element(_)))
    );
}

#[test]
fn test_text_content_is_trimmed_and_unescaped() {
    let doc = Document::parse(
        "<configuration><param name=\"a\">\n   x &amp; y  \n</param></configuration>",
    )
    .unwrap();
    assert_eq!(doc.root().find("param").unwrap().text(), "x & y");
}

#[test]
fn test_cdata_is_text() {
    let doc = Document::parse(
        "<configuration><param name=\"a\"><![CDATA[{\"k\": 1}]]></param></configuration>",
    )
    .unwrap();
    assert_eq!(doc.root().find("param").unwrap().text(), "{\"k\": 1}");
}

#[test]
fn test_parse_doctype() {
    let doc = Document::parse(CURRENT_DOC).unwrap();
    let doctype = doc.doctype().unwrap();
    assert_eq!(doctype.name, "configuration");
    assert_eq!(doctype.public_id.as_deref(), Some(grammar::CURRENT_PUBLIC_ID));
    assert_eq!(doctype.system_id.as_deref(), Some("chainconf-1.1.dtd"));
}

#[test]
fn test_doctype_system_only() {
    let doctype = DocType::parse(" configuration SYSTEM \"local.dtd\"");
    assert_eq!(doctype.name, "configuration");
    assert_eq!(doctype.public_id, None);
    assert_eq!(doctype.system_id.as_deref(), Some("local.dtd"));
}

#[test]
fn test_grammar_selected_by_public_id() {
    let mappings = GrammarMappings::default();

    let legacy = Document::parse(
        "<!DOCTYPE configuration PUBLIC \"-//Chainconf//DTD Configuration 1.0//EN\" \"chainconf-1.0.dtd\"><configuration/>",
    )
    .unwrap();
    assert_eq!(legacy.grammar(&mappings).unwrap(), Grammar::Legacy);

    let current = Document::parse(CURRENT_DOC).unwrap();
    assert_eq!(current.grammar(&mappings).unwrap(), Grammar::Current);
}

#[test]
fn test_missing_doctype_reads_as_current() {
    let doc = Document::parse("<configuration/>").unwrap();
    assert_eq!(
        doc.grammar(&GrammarMappings::default()).unwrap(),
        Grammar::Current
    );
}

#[test]
fn test_unknown_public_id_is_unsupported() {
    let doc = Document::parse(
        "<!DOCTYPE configuration PUBLIC \"-//Someone//DTD Other 9.9//EN\" \"x.dtd\"><configuration/>",
    )
    .unwrap();
    let err = doc.grammar(&GrammarMappings::default()).unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedVersion(ref id) if id.contains("Other 9.9")));
}

#[test]
fn test_custom_mappings() {
    let mut mappings = GrammarMappings::empty();
    mappings.insert("-//Acme//Pipelines//EN", Grammar::Legacy);
    let doc =
        Document::parse("<!DOCTYPE configuration PUBLIC \"-//Acme//Pipelines//EN\"><configuration/>")
            .unwrap();
    assert_eq!(doc.grammar(&mappings).unwrap(), Grammar::Legacy);
}

#[test]
fn test_wrong_root_is_malformed() {
    let err = Document::parse("<pipelines/>").unwrap_err();
    assert!(matches!(err, ConfigError::Malformed(ref msg) if msg.contains("pipelines")));
}

#[test]
fn test_unclosed_element_is_malformed() {
    let err = Document::parse("<configuration><chain></configuration>").unwrap_err();
    assert!(matches!(err, ConfigError::Malformed(_)));
}

#[test]
fn test_empty_input_is_malformed() {
    let err = Document::parse("").unwrap_err();
    assert!(matches!(err, ConfigError::Malformed(_)));
}

#[test]
fn test_render_emits_fixed_doctype_and_indentation() {
    let mut doc = Document::empty();
    doc.root_mut().push_element(
        Element::new("chain")
            .with_attr("name", "main")
            .with_child(Element::new("param").with_attr("name", "k").with_text("a < b")),
    );

    let xml = doc.to_xml_string().unwrap();
    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(xml.contains(
        "<!DOCTYPE configuration PUBLIC \"-//Chainconf//DTD Configuration 1.1//EN\" \"chainconf-1.1.dtd\">"
    ));
    assert!(xml.contains("\n    <chain name=\"main\">"));
    assert!(xml.contains("<param name=\"k\">a &lt; b</param>"));
    assert!(xml.ends_with("</configuration>\n"));
}

#[test]
fn test_render_then_parse_preserves_tree() {
    let doc = Document::parse(CURRENT_DOC).unwrap();
    let reparsed = Document::parse(&doc.to_xml_string().unwrap()).unwrap();
    assert_eq!(reparsed.root(), doc.root());
}

#[test]
fn test_set_attr_replaces_in_place() {
    let mut element = Element::new("reader").with_attr("path", "a").with_attr("type", "t");
    element.set_attr("path", "b");
    let attrs: Vec<(&str, &str)> = element.attributes().collect();
    assert_eq!(attrs, vec![("path", "b"), ("type", "t")]);
}

#[test]
fn test_prepend_element_goes_first() {
    let mut element = Element::new("plugins").with_child(Element::new("plugin").with_attr("n", "1"));
    element.prepend_element(Element::new("plugin").with_attr("n", "2"));
    let order: Vec<&str> = element.elements().map(|e| e.attr_or_empty("n")).collect();
    assert_eq!(order, vec!["2", "1"]);
}
