use super::*;

fn extract(source: &str) -> BTreeMap<String, String> {
    RegexPropExtractor::new().extract_props(source)
}

#[test]
fn interface_declaration() {
    let source = r#"
import React from "react";

interface CardProps {
  title: string;
  subtitle?: string;
}

export default function Card({ title, subtitle }: CardProps) {
  return <div>{title}</div>;
}
"#;

    let props = extract(source);
    assert_eq!(props.len(), 2);
    assert_eq!(props.get("title").map(String::as_str), Some("string"));
    // Optional marker is stripped from the key.
    assert_eq!(props.get("subtitle").map(String::as_str), Some("string"));
    assert!(!props.contains_key("subtitle?"));
}

#[test]
fn type_alias_declaration() {
    let source = r#"
type HeroProps = {
  title: string;
  buttonText?: string;
  align: "left" | "center";
};
"#;

    let props = extract(source);
    assert_eq!(props.len(), 3);
    assert_eq!(
        props.get("align").map(String::as_str),
        Some(r#""left" | "center""#)
    );
}

#[test]
fn no_props_block_yields_empty_map() {
    let source = "export default function Spinner() { return <div />; }";
    assert!(extract(source).is_empty());
}

#[test]
fn empty_source_yields_empty_map() {
    assert!(extract("").is_empty());
}

#[test]
fn only_first_block_is_used() {
    let source = r#"
interface HeaderProps {
  logo: string;
}

interface FooterProps {
  copyright: string;
}
"#;

    let props = extract(source);
    assert_eq!(props.len(), 1);
    assert!(props.contains_key("logo"));
    assert!(!props.contains_key("copyright"));
}

#[test]
fn comments_inside_block_are_skipped() {
    let source = r#"
interface MenuProps {
  // The list of navigation entries
  items: MenuItem[];
  /* inline styles are not allowed */
  vertical?: boolean;
}
"#;

    let props = extract(source);
    assert_eq!(props.len(), 2);
    assert_eq!(props.get("items").map(String::as_str), Some("MenuItem[]"));
    assert_eq!(props.get("vertical").map(String::as_str), Some("boolean"));
}

#[test]
fn complex_type_expressions_are_kept_raw() {
    let source = r#"
interface GalleryProps {
  images: { src: string; alt: string }[];
  onSelect: (index: number) => void;
  columns: number,
}
"#;

    let props = extract(source);
    assert_eq!(
        props.get("images").map(String::as_str),
        Some("{ src: string; alt: string }[]")
    );
    assert_eq!(
        props.get("onSelect").map(String::as_str),
        Some("(index: number) => void")
    );
    // Trailing comma separators are trimmed like semicolons.
    assert_eq!(props.get("columns").map(String::as_str), Some("number"));
}

#[test]
fn readonly_modifier_is_ignored() {
    let source = r#"
interface BannerProps {
  readonly message: string;
}
"#;

    let props = extract(source);
    assert_eq!(props.get("message").map(String::as_str), Some("string"));
}
