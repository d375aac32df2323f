use crate::registry::{ComponentDefinition, ComponentRegistry, PropSchema, PropType};
use serde_json::json;
use viewforge_model::ComponentKind;

/// Component names in the atomic category, used for import kind inference
pub const ATOMIC_COMPONENTS: &[&str] = &[
    "Button", "Input", "Checkbox", "Switch", "Text", "Image", "Badge", "Progress", "Divider",
];

/// Component names in the composite category
pub const COMPOSITE_COMPONENTS: &[&str] = &["Card", "Form", "List", "Toolbar"];

/// Component names in the complex category
pub const COMPLEX_COMPONENTS: &[&str] = &["Modal", "Table", "Tabs", "Navbar"];

/// Infer a component kind from its name. Unrecognized names fall back
/// to the template category.
pub fn kind_for_name(name: &str) -> ComponentKind {
    if ATOMIC_COMPONENTS.contains(&name) {
        ComponentKind::Atomic
    } else if COMPOSITE_COMPONENTS.contains(&name) {
        ComponentKind::Composite
    } else if COMPLEX_COMPONENTS.contains(&name) {
        ComponentKind::Complex
    } else {
        ComponentKind::Template
    }
}

/// Install the built-in catalog. Safe to call repeatedly: entries are
/// keyed by name and re-registration replaces them.
pub fn install_builtins(registry: &mut ComponentRegistry) {
    registry.register(
        ComponentDefinition::new("Container", ComponentKind::Template)
            .describe("Generic layout container")
            .tag("layout")
            .prop(
                "direction",
                PropSchema::new(PropType::String)
                    .with_default(json!("column"))
                    .with_options(&["row", "column"]),
            ),
    );

    registry.register(
        ComponentDefinition::new("Button", ComponentKind::Atomic)
            .describe("Clickable action button")
            .tag("form")
            .tag("action")
            .prop(
                "variant",
                PropSchema::new(PropType::String)
                    .with_default(json!("primary"))
                    .with_options(&["primary", "secondary", "danger", "ghost"])
                    .describe("Visual emphasis"),
            )
            .prop(
                "size",
                PropSchema::new(PropType::String)
                    .with_default(json!("medium"))
                    .with_options(&["small", "medium", "large"]),
            )
            .prop("disabled", PropSchema::new(PropType::Boolean).with_default(json!(false)))
            .prop(
                "children",
                PropSchema::new(PropType::Node)
                    .with_default(json!("Button"))
                    .describe("Label content"),
            ),
    );

    registry.register(
        ComponentDefinition::new("Input", ComponentKind::Atomic)
            .describe("Single-line text input")
            .tag("form")
            .prop(
                "type",
                PropSchema::new(PropType::String)
                    .with_default(json!("text"))
                    .with_options(&["text", "email", "password", "number"]),
            )
            .prop("placeholder", PropSchema::new(PropType::String).with_default(json!("")))
            .prop("value", PropSchema::new(PropType::String).with_default(json!("")))
            .prop("disabled", PropSchema::new(PropType::Boolean).with_default(json!(false))),
    );

    registry.register(
        ComponentDefinition::new("Checkbox", ComponentKind::Atomic)
            .describe("Binary checkbox")
            .tag("form")
            .prop("checked", PropSchema::new(PropType::Boolean).with_default(json!(false)))
            .prop("disabled", PropSchema::new(PropType::Boolean).with_default(json!(false)))
            .prop("label", PropSchema::new(PropType::String).with_default(json!(""))),
    );

    registry.register(
        ComponentDefinition::new("Switch", ComponentKind::Atomic)
            .describe("On/off toggle")
            .tag("form")
            .prop("checked", PropSchema::new(PropType::Boolean).with_default(json!(false)))
            .prop("disabled", PropSchema::new(PropType::Boolean).with_default(json!(false))),
    );

    registry.register(
        ComponentDefinition::new("Text", ComponentKind::Atomic)
            .describe("Text block")
            .tag("typography")
            .prop(
                "children",
                PropSchema::new(PropType::Node).with_default(json!("Text")),
            )
            .prop(
                "variant",
                PropSchema::new(PropType::String)
                    .with_default(json!("body"))
                    .with_options(&["body", "heading", "caption"]),
            ),
    );

    registry.register(
        ComponentDefinition::new("Image", ComponentKind::Atomic)
            .describe("Image element")
            .tag("media")
            .prop("src", PropSchema::new(PropType::String).required())
            .prop("alt", PropSchema::new(PropType::String).with_default(json!(""))),
    );

    registry.register(
        ComponentDefinition::new("Badge", ComponentKind::Atomic)
            .describe("Small status label")
            .prop(
                "children",
                PropSchema::new(PropType::Node).with_default(json!("Badge")),
            ),
    );

    registry.register(
        ComponentDefinition::new("Progress", ComponentKind::Atomic)
            .describe("Progress bar")
            .tag("feedback")
            .prop("value", PropSchema::new(PropType::Number).with_default(json!(0)))
            .prop("max", PropSchema::new(PropType::Number).with_default(json!(100))),
    );

    registry.register(
        ComponentDefinition::new("Divider", ComponentKind::Atomic)
            .describe("Horizontal rule")
            .tag("layout"),
    );

    registry.register(
        ComponentDefinition::new("Card", ComponentKind::Composite)
            .describe("Content card with optional header")
            .tag("layout")
            .prop("title", PropSchema::new(PropType::String).with_default(json!(""))),
    );

    registry.register(
        ComponentDefinition::new("Form", ComponentKind::Composite)
            .describe("Form grouping with submit wiring")
            .tag("form")
            .prop("action", PropSchema::new(PropType::String).with_default(json!(""))),
    );

    registry.register(
        ComponentDefinition::new("List", ComponentKind::Composite)
            .describe("Vertical item list")
            .prop(
                "ordered",
                PropSchema::new(PropType::Boolean).with_default(json!(false)),
            ),
    );

    registry.register(
        ComponentDefinition::new("Toolbar", ComponentKind::Composite)
            .describe("Horizontal action strip")
            .tag("layout"),
    );

    registry.register(
        ComponentDefinition::new("Modal", ComponentKind::Complex)
            .describe("Overlay dialog")
            .tag("overlay")
            .prop("title", PropSchema::new(PropType::String).with_default(json!("")))
            .prop("open", PropSchema::new(PropType::Boolean).with_default(json!(false))),
    );

    registry.register(
        ComponentDefinition::new("Table", ComponentKind::Complex)
            .describe("Data table")
            .prop("columns", PropSchema::new(PropType::Array).with_default(json!([]))),
    );

    registry.register(
        ComponentDefinition::new("Tabs", ComponentKind::Complex)
            .describe("Tabbed panels")
            .prop("active", PropSchema::new(PropType::Number).with_default(json!(0))),
    );

    registry.register(
        ComponentDefinition::new("Navbar", ComponentKind::Complex)
            .describe("Top navigation bar")
            .tag("navigation"),
    );
}
