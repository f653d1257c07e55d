// Prop shape extraction from component source text
// Best-effort text scan over the first `XxxProps` declaration; a real
// TypeScript parser could replace the naive implementation behind the trait
// without touching callers.

#[cfg(test)]
mod tests;

use fancy_regex::Regex;
use std::collections::BTreeMap;
use tracing::trace;

/// Given component source text, return a mapping of prop name to declared
/// type string, or an empty mapping when no prop block is found (not an
/// error, just "no known props").
pub trait PropExtractor {
    fn extract_props(&self, source: &str) -> BTreeMap<String, String>;
}

/// Naive text-scan implementation: finds the first
/// `interface XxxProps { ... }` or `type XxxProps = { ... }` block, splits
/// the body into declarations at top-level `;`/newlines, and parses each as
/// `name: type`. The optional marker (`?`) is stripped from the key; the
/// type expression is kept raw.
#[derive(Debug)]
pub struct RegexPropExtractor {
    block_start: Regex,
    field: Regex,
}

impl Default for RegexPropExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl RegexPropExtractor {
    #[inline]
    pub fn new() -> Self {
        let block_start = Regex::new(r"(?:interface|type)\s+\w+Props(?:\s*=)?\s*\{")
            .expect("valid block pattern");

        let field = Regex::new(
            r"^(?:readonly\s+)?([A-Za-z_$][A-Za-z0-9_$]*)(\?)?\s*:\s*(.+?),?$",
        )
        .expect("valid field pattern");

        Self { block_start, field }
    }

    /// Body of the first props block, delimited by brace matching so nested
    /// object types do not end the block early.
    fn first_block_body<'a>(&self, source: &'a str) -> Option<&'a str> {
        let open = match self.block_start.find(source) {
            Ok(Some(m)) => m.end(),
            _ => return None,
        };

        let mut depth = 1usize;
        for (offset, ch) in source[open..].char_indices() {
            match ch {
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(&source[open..open + offset]);
                    }
                }
                _ => {}
            }
        }

        // Unbalanced braces; treat as no block rather than guessing.
        None
    }
}

/// Split a block body into declarations at `;` and newlines, but only at
/// brace/paren/bracket depth zero so types like `{ src: string }[]` stay
/// intact.
fn split_declarations(body: &str) -> Vec<&str> {
    let mut declarations = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;

    for (offset, ch) in body.char_indices() {
        match ch {
            '{' | '(' | '[' => depth += 1,
            '}' | ')' | ']' => depth = depth.saturating_sub(1),
            ';' | '\n' if depth == 0 => {
                declarations.push(&body[start..offset]);
                start = offset + 1;
            }
            _ => {}
        }
    }
    declarations.push(&body[start..]);

    declarations
}

impl PropExtractor for RegexPropExtractor {
    fn extract_props(&self, source: &str) -> BTreeMap<String, String> {
        let mut props = BTreeMap::new();

        let Some(body) = self.first_block_body(source) else {
            trace!("No props block found in source");
            return props;
        };

        for declaration in split_declarations(body) {
            let trimmed = declaration.trim();
            if trimmed.is_empty()
                || trimmed.starts_with("//")
                || trimmed.starts_with('*')
                || trimmed.starts_with("/*")
            {
                continue;
            }

            if let Ok(Some(captures)) = self.field.captures(trimmed) {
                let name = captures
                    .get(1)
                    .map(|m| m.as_str().to_string())
                    .unwrap_or_default();
                let declared_type = captures
                    .get(3)
                    .map(|m| m.as_str().trim().to_string())
                    .unwrap_or_default();
                if !name.is_empty() && !declared_type.is_empty() {
                    props.insert(name, declared_type);
                }
            }
        }

        props
    }
}
