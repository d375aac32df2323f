//! Markup document import: token stream → element tree → ViewDocument.

use crate::error::ParseResult;
use crate::parsed::{ParsedView, SourceFormat};
use crate::tokenizer::{tokenize, Token};
use serde_json::{json, Value};
use tracing::debug;
use viewforge_common::{dashed_to_camel, IdGenerator};
use viewforge_model::{
    ComponentNode, ViewDocument, ViewMetadata, GENERATOR_VERSION,
};
use viewforge_registry::{kind_for_name, ComponentRegistry, PropType};

/// Tags that never take children
const VOID_TAGS: &[&str] = &["input", "img", "br", "hr", "meta", "link"];

/// Attributes recognized as component props, with their prop names
const PROP_ATTRIBUTES: &[(&str, &str)] = &[
    ("placeholder", "placeholder"),
    ("type", "type"),
    ("value", "value"),
    ("disabled", "disabled"),
    ("checked", "checked"),
    ("data-variant", "variant"),
    ("data-size", "size"),
];

/// Parse a markup document into a view tree
pub fn parse_markup(source: &str, registry: &ComponentRegistry) -> ParsedView {
    match markup_to_document(source, registry) {
        Ok(document) => ParsedView::success(document, SourceFormat::Html),
        Err(err) => {
            debug!(error = %err, "markup import failed");
            ParsedView::failure(SourceFormat::Html, vec![err.to_string()])
        }
    }
}

pub(crate) fn markup_to_document(
    source: &str,
    registry: &ComponentRegistry,
) -> ParseResult<ViewDocument> {
    let tokens = tokenize(source)?;
    let nodes = TreeParser::new(tokens).parse_forest()?;

    let body_comments = collect_body_comments(&nodes);

    let name = find_element(&nodes, "title")
        .and_then(text_content)
        .or_else(|| comment_value(&body_comments, "View:"))
        .unwrap_or_else(|| "Imported View".to_string());

    let description = find_meta(&nodes, "description").unwrap_or_default();

    let version = find_meta(&nodes, "generator")
        .and_then(|content| {
            content
                .rsplit_once('v')
                .map(|(_, version)| version.trim().to_string())
        })
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| GENERATOR_VERSION.to_string());

    let mut doc = ViewDocument::new(name, description);
    doc.metadata = ViewMetadata {
        created: comment_value(&body_comments, "Created:")
            .unwrap_or_else(|| doc.metadata.created.clone()),
        updated: comment_value(&body_comments, "Updated:")
            .unwrap_or_else(|| doc.metadata.updated.clone()),
        version,
        author: comment_value(&body_comments, "Author:"),
    };

    let mut ids = IdGenerator::new(&doc.name);
    ids.next_id(); // the root consumed the first id

    let body_children: Vec<&DomNode> = match find_element(&nodes, "body") {
        Some(body) => body.children.iter().collect(),
        // Lenient fallback for fragments without a document shell
        None => nodes.iter().collect(),
    };

    for node in body_children {
        if let DomNode::Element(el) = node {
            if matches!(el.name.as_str(), "style" | "script" | "head" | "title" | "meta") {
                continue;
            }
            doc.root.children.push(convert_element(el, registry, &mut ids));
        }
    }

    Ok(doc)
}

fn convert_element(
    el: &DomElement,
    registry: &ComponentRegistry,
    ids: &mut IdGenerator,
) -> ComponentNode {
    let component_name = el
        .attr("data-component")
        .map(str::to_string)
        .unwrap_or_else(|| el.name.clone());
    let id = el
        .attr("id")
        .map(str::to_string)
        .unwrap_or_else(|| ids.next_id());

    let mut node = ComponentNode::new(id, kind_for_name(&component_name), component_name.clone());

    if let Some(class) = el.attr("class") {
        node.class_name = Some(class.to_string());
    }
    if let Some(style) = el.attr("style") {
        node.styles = parse_inline_styles(style);
    }

    for (attr, prop) in PROP_ATTRIBUTES {
        if let Some(raw) = el.attr(attr) {
            node.props.insert(
                prop.to_string(),
                coerce_prop(&component_name, prop, raw, registry),
            );
        }
    }

    let child_elements: Vec<&DomElement> = el
        .children
        .iter()
        .filter_map(|child| match child {
            DomNode::Element(el) if !matches!(el.name.as_str(), "style" | "script") => Some(el),
            _ => None,
        })
        .collect();

    if child_elements.is_empty() {
        if let Some(text) = text_content_of(&el.children) {
            node.props.insert("children".to_string(), json!(text));
        }
    } else {
        for child in child_elements {
            node.children.push(convert_element(child, registry, ids));
        }
    }

    node
}

/// Semicolon-separated `property: value` pairs, property names converted
/// from dashed to camel form
pub fn parse_inline_styles(style: &str) -> std::collections::BTreeMap<String, String> {
    let mut styles = std::collections::BTreeMap::new();
    for declaration in style.split(';') {
        if let Some((property, value)) = declaration.split_once(':') {
            let property = property.trim();
            let value = value.trim();
            if !property.is_empty() && !value.is_empty() {
                styles.insert(dashed_to_camel(property), value.to_string());
            }
        }
    }
    styles
}

/// Best-effort coercion against the registry schema. Unknown props and
/// unparseable values stay strings; bare boolean attributes mean true.
fn coerce_prop(component: &str, prop: &str, raw: &str, registry: &ComponentRegistry) -> Value {
    let declared = registry
        .get(component)
        .and_then(|def| def.props.get(prop))
        .map(|schema| schema.prop_type);

    match declared {
        Some(PropType::Boolean) => json!(raw.is_empty() || raw == "true"),
        Some(PropType::Number) => raw
            .parse::<f64>()
            .map(|n| json!(n))
            .unwrap_or_else(|_| json!(raw)),
        _ if raw.is_empty() && matches!(prop, "disabled" | "checked") => json!(true),
        _ => json!(raw),
    }
}

// ---- element tree ----

#[derive(Debug)]
pub(crate) struct DomElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<DomNode>,
}

impl DomElement {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(attr, _)| attr == name)
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug)]
pub(crate) enum DomNode {
    Element(DomElement),
    Text(String),
    Comment(String),
}

struct TreeParser {
    tokens: Vec<(Token, usize)>,
    pos: usize,
}

impl TreeParser {
    fn new(tokens: Vec<(Token, usize)>) -> Self {
        Self { tokens, pos: 0 }
    }

    fn parse_forest(mut self) -> ParseResult<Vec<DomNode>> {
        self.parse_children(None)
    }

    /// Parse sibling nodes until EOF or the parent's close tag
    fn parse_children(&mut self, parent: Option<&str>) -> ParseResult<Vec<DomNode>> {
        let mut nodes = Vec::new();

        while self.pos < self.tokens.len() {
            let (token, _) = &self.tokens[self.pos];
            match token {
                Token::Doctype => {
                    self.pos += 1;
                }
                Token::Text(text) => {
                    nodes.push(DomNode::Text(text.clone()));
                    self.pos += 1;
                }
                Token::Comment(comment) => {
                    nodes.push(DomNode::Comment(comment.clone()));
                    self.pos += 1;
                }
                Token::CloseTag(name) => {
                    self.pos += 1;
                    if parent == Some(name.as_str()) {
                        return Ok(nodes);
                    }
                    // Stray close tag, skip it
                }
                Token::OpenTag {
                    name,
                    attributes,
                    self_closing,
                } => {
                    let name = name.clone();
                    let attributes = attributes.clone();
                    let leaf = *self_closing || VOID_TAGS.contains(&name.as_str());
                    self.pos += 1;

                    let children = if leaf {
                        Vec::new()
                    } else {
                        self.parse_children(Some(&name))?
                    };
                    nodes.push(DomNode::Element(DomElement {
                        name,
                        attributes,
                        children,
                    }));
                }
            }
        }

        Ok(nodes)
    }
}

// ---- tree queries ----

/// Depth-first search for the first element with `name`
fn find_element<'a>(nodes: &'a [DomNode], name: &str) -> Option<&'a DomElement> {
    for node in nodes {
        if let DomNode::Element(el) = node {
            if el.name == name {
                return Some(el);
            }
            if let Some(found) = find_element(&el.children, name) {
                return Some(found);
            }
        }
    }
    None
}

fn find_meta(nodes: &[DomNode], meta_name: &str) -> Option<String> {
    find_matching(nodes, &mut |el: &DomElement| {
        el.name == "meta" && el.attr("name") == Some(meta_name)
    })
    .and_then(|el| el.attr("content"))
    .map(str::to_string)
}

fn find_matching<'a>(
    nodes: &'a [DomNode],
    predicate: &mut impl FnMut(&DomElement) -> bool,
) -> Option<&'a DomElement> {
    for node in nodes {
        if let DomNode::Element(el) = node {
            if predicate(el) {
                return Some(el);
            }
            if let Some(found) = find_matching(&el.children, predicate) {
                return Some(found);
            }
        }
    }
    None
}

fn text_content(el: &DomElement) -> Option<String> {
    text_content_of(&el.children)
}

fn text_content_of(children: &[DomNode]) -> Option<String> {
    let parts: Vec<&str> = children
        .iter()
        .filter_map(|node| match node {
            DomNode::Text(text) => Some(text.as_str()),
            _ => None,
        })
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}

/// Comments directly inside the body element (or at top level for
/// fragments)
fn collect_body_comments(nodes: &[DomNode]) -> Vec<String> {
    let scope: &[DomNode] = match find_element(nodes, "body") {
        Some(body) => &body.children,
        None => nodes,
    };
    scope
        .iter()
        .filter_map(|node| match node {
            DomNode::Comment(comment) => Some(comment.clone()),
            _ => None,
        })
        .collect()
}

fn comment_value(comments: &[String], prefix: &str) -> Option<String> {
    comments.iter().find_map(|comment| {
        comment
            .strip_prefix(prefix)
            .map(|rest| rest.trim().to_string())
            .filter(|rest| !rest.is_empty())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use viewforge_model::ComponentKind;
    use viewforge_registry::install_builtins;

    fn registry() -> ComponentRegistry {
        let mut registry = ComponentRegistry::new();
        install_builtins(&mut registry);
        registry
    }

    #[test]
    fn test_parse_input_with_inline_style() {
        let source = r#"
            <div data-component="Input" id="n1" type="email" placeholder="Email"
                 style="margin-top: 4px"></div>
        "#;
        let result = parse_markup(source, &registry());
        assert!(result.parsed);

        let node = &result.document.root.children[0];
        assert_eq!(node.name, "Input");
        assert_eq!(node.id, "n1");
        assert_eq!(node.styles.get("marginTop").map(String::as_str), Some("4px"));
        assert_eq!(node.props.get("placeholder"), Some(&json!("Email")));
    }

    #[test]
    fn test_full_document_metadata_extraction() {
        let source = r#"<!DOCTYPE html>
<html>
<head>
  <title>Landing</title>
  <meta name="description" content="Marketing page">
  <meta name="generator" content="Viewforge v2.3.1">
</head>
<body>
  <!-- View: Landing -->
  <!-- Created: 2026-01-01T00:00:00.000Z -->
  <!-- Updated: 2026-02-01T00:00:00.000Z -->
  <!-- Author: Dana -->
  <button data-component="Button" id="n1" data-variant="primary">Go</button>
</body>
</html>"#;
        let result = parse_markup(source, &registry());
        assert!(result.parsed, "{:?}", result.errors);

        let doc = &result.document;
        assert_eq!(doc.name, "Landing");
        assert_eq!(doc.description, "Marketing page");
        assert_eq!(doc.metadata.version, "2.3.1");
        assert_eq!(doc.metadata.created, "2026-01-01T00:00:00.000Z");
        assert_eq!(doc.metadata.updated, "2026-02-01T00:00:00.000Z");
        assert_eq!(doc.metadata.author.as_deref(), Some("Dana"));

        let button = &doc.root.children[0];
        assert_eq!(button.name, "Button");
        assert_eq!(button.kind, ComponentKind::Atomic);
        assert_eq!(button.props.get("variant"), Some(&json!("primary")));
        assert_eq!(button.props.get("children"), Some(&json!("Go")));
    }

    #[test]
    fn test_boolean_and_number_coercion() {
        let source = r#"
            <input data-component="Checkbox" id="c1" type="checkbox" checked disabled>
            <progress data-component="Progress" id="p1" value="30"></progress>
        "#;
        let result = parse_markup(source, &registry());
        assert!(result.parsed);

        let checkbox = &result.document.root.children[0];
        assert_eq!(checkbox.props.get("checked"), Some(&json!(true)));
        assert_eq!(checkbox.props.get("disabled"), Some(&json!(true)));

        let progress = &result.document.root.children[1];
        assert_eq!(progress.props.get("value"), Some(&json!(30.0)));
    }

    #[test]
    fn test_unknown_component_defaults_to_template_kind() {
        let source = r#"<section data-component="Hero" id="h1"><p>Hi</p></section>"#;
        let result = parse_markup(source, &registry());

        let hero = &result.document.root.children[0];
        assert_eq!(hero.kind, ComponentKind::Template);
        // Fallback to tag name when no marker is present
        assert_eq!(hero.children[0].name, "p");
    }

    #[test]
    fn test_broken_markup_returns_fallback_document() {
        let result = parse_markup("<div <!-- nope", &registry());
        assert!(!result.parsed);
        assert!(!result.errors.is_empty());
        // Fallback is still a loadable empty view
        assert!(result.document.root.children.is_empty());
    }

    #[test]
    fn test_style_and_script_blocks_do_not_become_nodes() {
        let source = r#"
<body>
  <style>.a { color: red; }</style>
  <button data-component="Button" id="n1">Go</button>
  <script>wire();</script>
</body>
        "#;
        let result = parse_markup(source, &registry());
        assert!(result.parsed);
        assert_eq!(result.document.root.children.len(), 1);
    }
}
