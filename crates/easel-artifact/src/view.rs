//! View tree
//!
//! Rendering output is a pure data tree; the surrounding UI maps each node
//! to a widget. Keeping the tree as data makes per-kind renders testable
//! without a UI host: tests walk the tree with [`View::contains_text`] and
//! [`View::find_banners`].

use serde::{Deserialize, Serialize};

/// Visual tone for badges and banners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Neutral,
    Info,
    Success,
    Warning,
    Danger,
}

/// A rendered artifact view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum View {
    /// Nothing to show; the tolerant answer to missing core fields
    Empty,
    /// Plain text run
    Text { text: String },
    /// Heading, level 1-6
    Heading { level: u8, text: String },
    /// Small labelled pill
    Badge { label: String, tone: Tone },
    /// Label/value rows
    KeyValue { pairs: Vec<(String, String)> },
    /// Ordered or unordered list
    List { ordered: bool, items: Vec<View> },
    /// Tabular data
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    /// Remote image
    Image { url: String, alt: String },
    /// External link
    Link { url: String, label: String },
    /// Preformatted code
    CodeBlock {
        language: Option<String>,
        code: String,
    },
    /// Prominent status strip
    Banner { tone: Tone, message: String },
    /// Titled group of children
    Section { title: String, children: Vec<View> },
    /// Untitled vertical group
    Stack { children: Vec<View> },
    /// Generic fallback: truncated pretty-printed JSON
    JsonPreview { excerpt: String, truncated: bool },
    /// Placeholder while processing has not resolved
    Loading { message: String },
}

impl View {
    /// Text node
    #[inline]
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        View::Text { text: text.into() }
    }

    /// Heading node
    #[inline]
    #[must_use]
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        View::Heading {
            level,
            text: text.into(),
        }
    }

    /// Badge node
    #[inline]
    #[must_use]
    pub fn badge(label: impl Into<String>, tone: Tone) -> Self {
        View::Badge {
            label: label.into(),
            tone,
        }
    }

    /// Banner node
    #[inline]
    #[must_use]
    pub fn banner(tone: Tone, message: impl Into<String>) -> Self {
        View::Banner {
            tone,
            message: message.into(),
        }
    }

    /// Titled section
    #[inline]
    #[must_use]
    pub fn section(title: impl Into<String>, children: Vec<View>) -> Self {
        View::Section {
            title: title.into(),
            children,
        }
    }

    /// Untitled stack
    #[inline]
    #[must_use]
    pub fn stack(children: Vec<View>) -> Self {
        View::Stack { children }
    }

    /// Deep emptiness: `Empty`, or a container whose children are all empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            View::Empty => true,
            View::Stack { children } => children.iter().all(View::is_empty),
            View::List { items, .. } => items.iter().all(View::is_empty),
            _ => false,
        }
    }

    /// All human-visible text in the tree, top-down
    #[must_use]
    pub fn flatten_text(&self) -> String {
        let mut out = Vec::new();
        self.collect_text(&mut out);
        out.join("\n")
    }

    /// Whether any text in the tree contains `needle`
    #[must_use]
    pub fn contains_text(&self, needle: &str) -> bool {
        self.flatten_text().contains(needle)
    }

    /// All banners in the tree, top-down
    #[must_use]
    pub fn find_banners(&self) -> Vec<(Tone, &str)> {
        let mut out = Vec::new();
        self.collect_banners(&mut out);
        out
    }

    /// Whether the tree contains any [`View::Table`] node
    #[must_use]
    pub fn has_table(&self) -> bool {
        match self {
            View::Table { .. } => true,
            View::Section { children, .. } | View::Stack { children } => {
                children.iter().any(View::has_table)
            }
            View::List { items, .. } => items.iter().any(View::has_table),
            _ => false,
        }
    }

    fn collect_text(&self, out: &mut Vec<String>) {
        match self {
            View::Empty => {}
            View::Text { text } | View::Heading { text, .. } => out.push(text.clone()),
            View::Badge { label, .. } => out.push(label.clone()),
            View::KeyValue { pairs } => {
                for (key, value) in pairs {
                    out.push(format!("{key}: {value}"));
                }
            }
            View::List { items, .. } => {
                for item in items {
                    item.collect_text(out);
                }
            }
            View::Table { headers, rows } => {
                out.push(headers.join(" "));
                for row in rows {
                    out.push(row.join(" "));
                }
            }
            View::Image { alt, .. } => out.push(alt.clone()),
            View::Link { label, .. } => out.push(label.clone()),
            View::CodeBlock { code, .. } => out.push(code.clone()),
            View::Banner { message, .. } => out.push(message.clone()),
            View::Section { title, children } => {
                out.push(title.clone());
                for child in children {
                    child.collect_text(out);
                }
            }
            View::Stack { children } => {
                for child in children {
                    child.collect_text(out);
                }
            }
            View::JsonPreview { excerpt, .. } => out.push(excerpt.clone()),
            View::Loading { message } => out.push(message.clone()),
        }
    }

    fn collect_banners<'a>(&'a self, out: &mut Vec<(Tone, &'a str)>) {
        match self {
            View::Banner { tone, message } => out.push((*tone, message)),
            View::Section { children, .. } | View::Stack { children } => {
                for child in children {
                    child.collect_banners(out);
                }
            }
            View::List { items, .. } => {
                for item in items {
                    item.collect_banners(out);
                }
            }
            _ => {}
        }
    }
}

impl Default for View {
    fn default() -> Self {
        View::Empty
    }
}
