//! Templated (PHP) page generation.
//!
//! Mirrors the markup generator's tree walk and wraps the document in
//! server-side templating constructs. The embedded markup window stays
//! structurally intact so the templated import can round-trip it.

use crate::assets::{page_script, stylesheet};
use crate::markup::render_document;
use viewforge_common::slugify;
use viewforge_model::ViewDocument;

pub use crate::markup::GeneratedPage;

pub fn generate_templated(doc: &ViewDocument) -> GeneratedPage {
    let styles = stylesheet(doc);
    let scripts = page_script();
    let markup = render_document(doc, &styles, &scripts);

    let mut slug = slugify(&doc.name);
    if slug.is_empty() {
        slug = "view".to_string();
    }

    let mut content = String::new();
    content.push_str("<?php\n");
    content.push_str(&format!("// View: {}\n", doc.name));
    content.push_str(&format!("// Generated: {}\n", doc.metadata.updated));
    content.push_str(&format!(
        "$viewName = {};\n",
        php_string_literal(&doc.name)
    ));
    content.push_str(&format!(
        "$viewDescription = {};\n",
        php_string_literal(&doc.description)
    ));
    content.push_str("?>\n");
    content.push_str(&markup);
    content.push_str("<?php // end of generated view ?>\n");

    GeneratedPage {
        content,
        styles,
        scripts,
        filename: format!("{}.php", slug),
    }
}

fn php_string_literal(value: &str) -> String {
    format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
}
