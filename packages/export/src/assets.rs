//! Companion stylesheet and script emitted alongside every page.

use viewforge_common::relative_path;
use viewforge_model::ViewDocument;

/// Static rules plus a relative theme import for portable deployments
pub fn stylesheet(doc: &ViewDocument) -> String {
    let mut css = String::new();

    if doc.settings.portable {
        let theme = relative_path("dist/pages", "dist/assets/theme.css");
        css.push_str(&format!("@import url(\"{}\");\n\n", theme));
    }

    css.push_str(
        r#"body {
  margin: 0;
  font-family: -apple-system, "Segoe UI", Roboto, sans-serif;
  color: #1f2933;
}
button[data-component] {
  padding: 8px 16px;
  border: 1px solid transparent;
  border-radius: 6px;
  cursor: pointer;
}
button[data-variant="primary"] {
  background: #2563eb;
  color: #fff;
}
button[data-variant="secondary"] {
  background: #e5e7eb;
  color: #1f2933;
}
button[data-variant="danger"] {
  background: #dc2626;
  color: #fff;
}
input[data-component] {
  padding: 8px 10px;
  border: 1px solid #cbd2d9;
  border-radius: 6px;
}
div[data-component="Card"] {
  border: 1px solid #e4e7eb;
  border-radius: 8px;
  padding: 16px;
}
dialog[data-component="Modal"] {
  border: none;
  border-radius: 8px;
  box-shadow: 0 10px 40px rgba(0, 0, 0, 0.2);
}
"#,
    );

    css
}

/// DOM-ready event wiring plus a minimal fetch helper
pub fn page_script() -> String {
    r#"document.addEventListener('DOMContentLoaded', function () {
  document.querySelectorAll('button[data-component]').forEach(function (button) {
    button.addEventListener('click', function () {
      button.dispatchEvent(new CustomEvent('component:action', { bubbles: true }));
    });
  });

  document.querySelectorAll('input[data-component]').forEach(function (input) {
    input.addEventListener('change', function () {
      input.dispatchEvent(new CustomEvent('component:change', { bubbles: true }));
    });
  });

  document.querySelectorAll('dialog[data-component="Modal"]').forEach(function (modal) {
    modal.addEventListener('click', function (event) {
      if (event.target === modal) {
        modal.close();
      }
    });
  });
});

function fetchJson(url, options) {
  return fetch(url, options).then(function (response) {
    if (!response.ok) {
      throw new Error('Request failed: ' + response.status);
    }
    return response.json();
  });
}
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portable_stylesheet_imports_relative_theme() {
        let doc = ViewDocument::new("Landing", "");
        assert!(doc.settings.portable);
        let css = stylesheet(&doc);
        assert!(css.starts_with("@import url(\"../assets/theme.css\");"));
    }

    #[test]
    fn test_non_portable_stylesheet_has_no_import() {
        let mut doc = ViewDocument::new("Landing", "");
        doc.settings.portable = false;
        let css = stylesheet(&doc);
        assert!(!css.contains("@import"));
        assert!(css.contains("button[data-component]"));
    }

    #[test]
    fn test_script_wires_dom_ready_and_fetch_helper() {
        let js = page_script();
        assert!(js.contains("DOMContentLoaded"));
        assert!(js.contains("function fetchJson"));
    }
}
