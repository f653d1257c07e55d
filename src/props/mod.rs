// Prop adaptation and sanitization
// Raw props objects come from several AI providers with inconsistent field
// names and occasional framework-reserved fields. Adaptation reconciles
// synonyms onto canonical names; sanitization guarantees the shape a
// renderer can spread safely.
//
// Nullish rule: `null` and a missing key are treated identically everywhere
// in this module. An empty string is a present value and is never replaced.


use anyhow::Context;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::Result;

/// Synonym pairs reconciled for hero sections, `(synonym, canonical)`.
/// The canonical name wins when both are present.
const HERO_SYNONYMS: [(&str, &str); 4] = [
    ("cta", "buttonText"),
    ("ctaLink", "buttonLink"),
    ("secondaryCta", "secondaryButtonText"),
    ("secondaryCtaLink", "secondaryButtonLink"),
];

/// Fields defaulted to an empty string by sanitization when nullish.
const TEXT_DEFAULT_FIELDS: [&str; 4] = ["title", "subtitle", "description", "logo"];

fn is_nullish(value: Option<&Value>) -> bool {
    matches!(value, None | Some(Value::Null))
}

fn as_object(props: Option<&Value>) -> Map<String, Value> {
    match props {
        Some(Value::Object(map)) => map.clone(),
        _ => Map::new(),
    }
}

/// Default `link` to `"#"` on every menu entry that lacks one. Missing,
/// null, and empty-string links all count as absent so no entry renders a
/// dead anchor.
fn normalize_menu(map: &mut Map<String, Value>) {
    let Some(Value::Array(menu)) = map.get_mut("menu") else {
        return;
    };

    for entry in menu.iter_mut() {
        if let Value::Object(fields) = entry {
            let missing = match fields.get("link") {
                None | Some(Value::Null) => true,
                Some(Value::String(link)) => link.is_empty(),
                Some(_) => false,
            };
            if missing {
                fields.insert("link".to_string(), Value::String("#".to_string()));
            }
        }
    }
}

fn default_to_empty_string(map: &mut Map<String, Value>, field: &str) {
    if is_nullish(map.get(field)) {
        map.insert(field.to_string(), Value::String(String::new()));
    }
}

/// Copy known synonym fields onto their canonical names for the given
/// component type. Returns a new object; the input is never mutated, and a
/// nullish input yields `{}`. Unknown component types pass through
/// unchanged.
#[inline]
pub fn adapt_props(props: Option<&Value>, component_type: &str) -> Value {
    let mut map = as_object(props);

    match component_type {
        "hero" => {
            for (synonym, canonical) in HERO_SYNONYMS {
                if is_nullish(map.get(canonical)) {
                    let value = map.get(synonym).cloned();
                    if let Some(value) = value {
                        if !value.is_null() {
                            map.insert(canonical.to_string(), value);
                        }
                    }
                }
            }
        }
        "header" => {
            normalize_menu(&mut map);
            default_to_empty_string(&mut map, "logo");
        }
        _ => {}
    }

    Value::Object(map)
}

/// Make a props object safe to spread onto a presentational component.
/// Pure and total: never throws for any JSON-serializable input.
///
/// - `className` is stripped unconditionally; downstream components forward
///   `...props` onto wrappers that cannot accept one.
/// - menu entries get a non-empty `link`.
/// - `title`, `subtitle`, `description`, and `logo` default to `""`.
#[inline]
pub fn sanitize_props(props: Option<&Value>) -> Value {
    let mut map = as_object(props);

    map.remove("className");
    normalize_menu(&mut map);
    for field in TEXT_DEFAULT_FIELDS {
        default_to_empty_string(&mut map, field);
    }

    Value::Object(map)
}

/// One entry of a raw generation output, as parsed from an LLM response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawSection {
    #[serde(rename = "type")]
    pub component_type: String,
    #[serde(default)]
    pub variant: Option<String>,
    #[serde(default)]
    pub props: Option<Value>,
}

/// A section with adapted and sanitized props, ready for a renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedSection {
    #[serde(rename = "type")]
    pub component_type: String,
    pub variant: String,
    pub props: Value,
}

#[inline]
pub fn normalize_section(section: &RawSection) -> NormalizedSection {
    let adapted = adapt_props(section.props.as_ref(), &section.component_type);
    NormalizedSection {
        component_type: section.component_type.clone(),
        variant: section
            .variant
            .clone()
            .unwrap_or_else(|| "default".to_string()),
        props: sanitize_props(Some(&adapted)),
    }
}

/// Parse a raw generation output (a JSON array of sections) and run every
/// entry through adapt-then-sanitize.
#[inline]
pub fn normalize_sections(raw: &str) -> Result<Vec<NormalizedSection>> {
    let sections: Vec<RawSection> =
        serde_json::from_str(raw).context("Failed to parse generation output")?;
    Ok(sections.iter().map(normalize_section).collect())
}
