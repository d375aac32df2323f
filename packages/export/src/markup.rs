//! Markup (HTML) page generation.

use crate::assets::{page_script, stylesheet};
use crate::context::{escape_markup, Context};
use serde_json::Value;
use viewforge_common::{camel_to_dashed, slugify};
use viewforge_model::{ComponentNode, ViewDocument};

/// One generated page plus its companion assets
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedPage {
    pub content: String,
    pub styles: String,
    pub scripts: String,
    pub filename: String,
}

/// Generate a standalone markup document for a view
pub fn generate_markup(doc: &ViewDocument) -> GeneratedPage {
    let styles = stylesheet(doc);
    let scripts = page_script();
    let content = render_document(doc, &styles, &scripts);

    let mut slug = slugify(&doc.name);
    if slug.is_empty() {
        slug = "view".to_string();
    }

    GeneratedPage {
        content,
        styles,
        scripts,
        filename: format!("{}.html", slug),
    }
}

/// Full document wrap: head metadata, body comments, rendered tree,
/// embedded stylesheet and script
pub(crate) fn render_document(doc: &ViewDocument, styles: &str, scripts: &str) -> String {
    let mut ctx = Context::new(!doc.settings.minify);

    ctx.add_line("<!DOCTYPE html>");
    ctx.add_line("<html lang=\"en\">");
    ctx.add_line("<head>");
    ctx.indent();
    ctx.add_line("<meta charset=\"UTF-8\">");
    ctx.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");
    ctx.add_line(&format!("<title>{}</title>", escape_markup(&doc.name)));
    if !doc.description.is_empty() {
        ctx.add_line(&format!(
            "<meta name=\"description\" content=\"{}\">",
            escape_markup(&doc.description)
        ));
    }
    ctx.add_line(&format!(
        "<meta name=\"generator\" content=\"Viewforge v{}\">",
        doc.metadata.version
    ));
    if doc.settings.include_styles {
        ctx.add_line("<style>");
        ctx.add(styles);
        ctx.add_line("</style>");
    }
    ctx.dedent();
    ctx.add_line("</head>");

    ctx.add_line("<body>");
    ctx.indent();
    ctx.add_line(&format!("<!-- View: {} -->", escape_markup(&doc.name)));
    ctx.add_line(&format!("<!-- Created: {} -->", doc.metadata.created));
    ctx.add_line(&format!("<!-- Updated: {} -->", doc.metadata.updated));
    if let Some(author) = &doc.metadata.author {
        ctx.add_line(&format!("<!-- Author: {} -->", escape_markup(author)));
    }

    for child in &doc.root.children {
        render_node(child, doc.settings.include_styles, &mut ctx);
    }

    ctx.add_line("<script>");
    ctx.add(scripts);
    ctx.add_line("</script>");
    ctx.dedent();
    ctx.add_line("</body>");
    ctx.add_line("</html>");

    ctx.into_output()
}

/// Fixed node-name to tag mapping; anything unknown renders as a div
fn tag_for(name: &str) -> &'static str {
    match name {
        "Button" => "button",
        "Input" | "Checkbox" | "Switch" => "input",
        "Text" => "p",
        "Image" => "img",
        "Badge" => "span",
        "Progress" => "progress",
        "Divider" => "hr",
        "Form" => "form",
        "List" => "ul",
        "Modal" => "dialog",
        "Table" => "table",
        "Navbar" => "nav",
        _ => "div",
    }
}

fn is_self_closing(tag: &str) -> bool {
    matches!(tag, "input" | "img" | "br" | "hr" | "meta" | "link")
}

pub(crate) fn render_node(node: &ComponentNode, include_styles: bool, ctx: &mut Context) {
    let tag = tag_for(&node.name);

    if ctx.pretty() {
        ctx.add_indent();
    }
    ctx.add(&format!("<{}", tag));

    for (name, value) in derive_attributes(node) {
        match value {
            Some(value) => ctx.add(&format!(" {}=\"{}\"", name, escape_markup(&value))),
            None => ctx.add(&format!(" {}", name)),
        }
    }

    if include_styles && !node.styles.is_empty() {
        ctx.add(&format!(
            " style=\"{}\"",
            escape_markup(&serialize_styles(node))
        ));
    }

    if is_self_closing(tag) {
        ctx.add(" />");
        if ctx.pretty() {
            ctx.add("\n");
        }
        return;
    }
    ctx.add(">");

    if node.children.is_empty() {
        if let Some(text) = prop_string(node, "children") {
            ctx.add(&escape_markup(&text));
        }
    } else {
        if ctx.pretty() {
            ctx.add("\n");
        }
        ctx.indent();
        for child in &node.children {
            render_node(child, include_styles, ctx);
        }
        ctx.dedent();
        if ctx.pretty() {
            ctx.add_indent();
        }
    }

    ctx.add(&format!("</{}>", tag));
    if ctx.pretty() {
        ctx.add("\n");
    }
}

/// Per-name attribute derivation. `None` values render as bare flags.
fn derive_attributes(node: &ComponentNode) -> Vec<(String, Option<String>)> {
    let mut attrs: Vec<(String, Option<String>)> = vec![
        ("data-component".to_string(), Some(node.name.clone())),
        ("id".to_string(), Some(node.id.clone())),
    ];
    if let Some(class) = &node.class_name {
        attrs.push(("class".to_string(), Some(class.clone())));
    }

    match node.name.as_str() {
        "Input" => {
            attrs.push((
                "type".to_string(),
                Some(prop_string(node, "type").unwrap_or_else(|| "text".to_string())),
            ));
            if let Some(placeholder) = prop_string(node, "placeholder").filter(|s| !s.is_empty()) {
                attrs.push(("placeholder".to_string(), Some(placeholder)));
            }
            if let Some(value) = prop_string(node, "value").filter(|s| !s.is_empty()) {
                attrs.push(("value".to_string(), Some(value)));
            }
            if prop_truthy(node, "disabled") {
                attrs.push(("disabled".to_string(), None));
            }
        }
        "Button" => {
            if prop_truthy(node, "disabled") {
                attrs.push(("disabled".to_string(), None));
            }
            if let Some(variant) = prop_string(node, "variant") {
                attrs.push(("data-variant".to_string(), Some(variant)));
            }
            if let Some(size) = prop_string(node, "size") {
                attrs.push(("data-size".to_string(), Some(size)));
            }
        }
        "Checkbox" | "Switch" => {
            attrs.push(("type".to_string(), Some("checkbox".to_string())));
            if prop_truthy(node, "checked") {
                attrs.push(("checked".to_string(), None));
            }
            if prop_truthy(node, "disabled") {
                attrs.push(("disabled".to_string(), None));
            }
        }
        "Progress" => {
            if let Some(value) = prop_string(node, "value") {
                attrs.push(("value".to_string(), Some(value)));
            }
            if let Some(max) = prop_string(node, "max") {
                attrs.push(("max".to_string(), Some(max)));
            }
        }
        "Image" => {
            if let Some(src) = prop_string(node, "src") {
                attrs.push(("src".to_string(), Some(src)));
            }
            if let Some(alt) = prop_string(node, "alt") {
                attrs.push(("alt".to_string(), Some(alt)));
            }
        }
        _ => {}
    }

    attrs
}

/// camelCase keys to dashed form, joined as `key: value; key: value`
pub fn serialize_styles(node: &ComponentNode) -> String {
    node.styles
        .iter()
        .map(|(key, value)| format!("{}: {}", camel_to_dashed(key), value))
        .collect::<Vec<_>>()
        .join("; ")
}

fn prop_string(node: &ComponentNode, key: &str) -> Option<String> {
    match node.props.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => {
            let n = n.as_f64()?;
            if n.fract() == 0.0 {
                Some(format!("{}", n as i64))
            } else {
                Some(format!("{}", n))
            }
        }
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn prop_truthy(node: &ComponentNode, key: &str) -> bool {
    match node.props.get(key) {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => s == "true",
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use viewforge_model::{ComponentKind, ViewDocument};

    fn doc_with(node: ComponentNode) -> ViewDocument {
        let mut doc = ViewDocument::new("Landing", "Marketing page");
        doc.root.children.push(node);
        doc
    }

    #[test]
    fn test_button_markup_carries_markers_and_variant() {
        let mut button = ComponentNode::new("n1", ComponentKind::Atomic, "Button");
        button.props.insert("variant".to_string(), json!("primary"));
        button.props.insert("children".to_string(), json!("Go"));

        let page = generate_markup(&doc_with(button));

        assert!(page.content.contains("<button data-component=\"Button\" id=\"n1\""));
        assert!(page.content.contains("data-variant=\"primary\""));
        assert!(page.content.contains(">Go</button>"));
    }

    #[test]
    fn test_input_is_self_closing_with_derived_attrs() {
        let mut input = ComponentNode::new("n2", ComponentKind::Atomic, "Input");
        input.props.insert("type".to_string(), json!("email"));
        input.props.insert("placeholder".to_string(), json!("Email"));
        input.props.insert("disabled".to_string(), json!(true));

        let page = generate_markup(&doc_with(input));

        assert!(page
            .content
            .contains("<input data-component=\"Input\" id=\"n2\" type=\"email\" placeholder=\"Email\" disabled />"));
        assert!(!page.content.contains("</input>"));
    }

    #[test]
    fn test_styles_serialized_dashed() {
        let mut text = ComponentNode::new("n3", ComponentKind::Atomic, "Text");
        text.styles
            .insert("marginTop".to_string(), "4px".to_string());
        text.styles
            .insert("backgroundColor".to_string(), "red".to_string());

        let page = generate_markup(&doc_with(text));

        assert!(page
            .content
            .contains("style=\"background-color: red; margin-top: 4px\""));
    }

    #[test]
    fn test_filename_is_slugged() {
        let doc = ViewDocument::new("My Landing Page!", "");
        let page = generate_markup(&doc);
        assert_eq!(page.filename, "my-landing-page.html");
    }

    #[test]
    fn test_head_and_body_metadata() {
        let mut doc = ViewDocument::new("Landing", "Marketing page");
        doc.metadata.author = Some("Dana".to_string());

        let page = generate_markup(&doc);

        assert!(page.content.contains("<title>Landing</title>"));
        assert!(page
            .content
            .contains("<meta name=\"description\" content=\"Marketing page\">"));
        assert!(page.content.contains("<meta name=\"generator\" content=\"Viewforge v1.0.0\">"));
        assert!(page.content.contains("<!-- View: Landing -->"));
        assert!(page.content.contains("<!-- Author: Dana -->"));
    }

    #[test]
    fn test_comment_values_cannot_close_the_comment() {
        let mut doc = ViewDocument::new("A --> B", "");
        doc.metadata.author = Some("x --> y".to_string());

        let page = generate_markup(&doc);

        assert!(page.content.contains("<!-- View: A --&gt; B -->"));
        assert!(page.content.contains("<!-- Author: x --&gt; y -->"));
        assert!(!page.content.contains("<!-- View: A --> B -->"));
    }

    #[test]
    fn test_text_content_is_escaped() {
        let mut text = ComponentNode::new("n4", ComponentKind::Atomic, "Text");
        text.props
            .insert("children".to_string(), json!("a < b & c"));

        let page = generate_markup(&doc_with(text));
        assert!(page.content.contains(">a &lt; b &amp; c</p>"));
    }

    #[test]
    fn test_minified_output_has_no_pretty_whitespace() {
        let mut doc = doc_with(ComponentNode::new("n1", ComponentKind::Atomic, "Divider"));
        doc.settings.minify = true;

        let page = generate_markup(&doc);
        assert!(!page.content.contains("\n  "));
    }

    #[test]
    fn test_unknown_component_renders_as_div() {
        let hero = ComponentNode::new("h1", ComponentKind::Template, "Hero");
        let page = generate_markup(&doc_with(hero));
        assert!(page.content.contains("<div data-component=\"Hero\" id=\"h1\""));
    }
}
