use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

/// Cells reserved for a leading icon in the text rendering.
const ICON_CELLS: usize = 2;
const RULE_WIDTH: usize = 40;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Accent {
    #[default]
    None,
    Primary,
    Secondary,
}

impl Accent {
    fn css_var(&self) -> Option<&'static str> {
        match self {
            Accent::None => None,
            Accent::Primary => Some("--primary-cyan"),
            Accent::Secondary => Some("--primary-magenta"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Control {
    pub label: String,
    /// Trigger line the control fires, e.g. `roll d20`.
    pub trigger: String,
    pub primary: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    pub method: String,
    pub path: String,
    pub description: String,
}

/// The region inside the modal body that roll results are written into.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRegion {
    pub content: Markup,
    pub emphasised: bool,
}

impl ResultRegion {
    pub fn new(content: Markup) -> Self {
        Self {
            content,
            emphasised: false,
        }
    }

    /// Swaps in new content. Earlier results are dropped, never appended to.
    pub fn replace(&mut self, content: Markup) {
        self.content = content;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Node {
    Heading(String),
    Text(String),
    Strong(String),
    Note(String),
    Value {
        icon: String,
        label: String,
        value: String,
        accent: Accent,
        strong: bool,
    },
    Rule,
    Small(String),
    Controls(Vec<Control>),
    Endpoints {
        title: String,
        items: Vec<Endpoint>,
    },
    Results(ResultRegion),
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Markup {
    nodes: Vec<Node>,
}

impl Markup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn push(&mut self, node: Node) -> &mut Self {
        self.nodes.push(node);
        self
    }

    pub fn heading(mut self, text: impl Into<String>) -> Self {
        self.nodes.push(Node::Heading(text.into()));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.nodes.push(Node::Text(text.into()));
        self
    }

    pub fn strong(mut self, text: impl Into<String>) -> Self {
        self.nodes.push(Node::Strong(text.into()));
        self
    }

    pub fn note(mut self, text: impl Into<String>) -> Self {
        self.nodes.push(Node::Note(text.into()));
        self
    }

    pub fn value(
        mut self,
        icon: &str,
        label: impl Into<String>,
        value: impl ToString,
        accent: Accent,
        strong: bool,
    ) -> Self {
        self.nodes.push(Node::Value {
            icon: icon.to_string(),
            label: label.into(),
            value: value.to_string(),
            accent,
            strong,
        });
        self
    }

    pub fn rule(mut self) -> Self {
        self.nodes.push(Node::Rule);
        self
    }

    pub fn small(mut self, text: impl Into<String>) -> Self {
        self.nodes.push(Node::Small(text.into()));
        self
    }

    pub fn results(&self) -> Option<&ResultRegion> {
        self.nodes.iter().find_map(|node| match node {
            Node::Results(region) => Some(region),
            _ => None,
        })
    }

    pub fn results_mut(&mut self) -> Option<&mut ResultRegion> {
        self.nodes.iter_mut().find_map(|node| match node {
            Node::Results(region) => Some(region),
            _ => None,
        })
    }

    /// Every line of the plain-text rendering joined, for quick matching.
    pub fn plain_text(&self) -> String {
        self.to_string()
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out).ok();
        out
    }

    pub fn write_html(&self, f: &mut impl std::fmt::Write) -> std::fmt::Result {
        for node in &self.nodes {
            match node {
                Node::Heading(text) => writeln!(f, "<h4>{}</h4>", escape(text))?,
                Node::Text(text) => writeln!(f, "<p>{}</p>", escape(text))?,
                Node::Strong(text) => writeln!(f, "<p><strong>{}</strong></p>", escape(text))?,
                Node::Note(text) => writeln!(f, "<p><em>{}</em></p>", escape(text))?,
                Node::Value {
                    icon,
                    label,
                    value,
                    accent,
                    strong,
                } => {
                    let value = match accent.css_var() {
                        Some(var) => format!(
                            "<span style=\"color: var({var}); font-weight: bold;\">{}</span>",
                            escape(value)
                        ),
                        None => escape(value),
                    };
                    if *strong {
                        writeln!(f, "<p>{icon} <strong>{}: {value}</strong></p>", escape(label))?;
                    } else {
                        writeln!(f, "<p>{icon} {}: {value}</p>", escape(label))?;
                    }
                }
                Node::Rule => {
                    writeln!(f, "<hr style=\"margin: 1rem 0; border-color: var(--gray-300);\">")?
                }
                Node::Small(text) => writeln!(f, "<p><small>{}</small></p>", escape(text))?,
                Node::Controls(controls) => {
                    writeln!(f, "<div class=\"test-controls\">")?;
                    for control in controls {
                        let class = if control.primary {
                            "btn btn-primary"
                        } else {
                            "btn btn-secondary"
                        };
                        writeln!(
                            f,
                            "<button class=\"{class}\" data-trigger=\"{}\">{}</button>",
                            escape(&control.trigger),
                            escape(&control.label)
                        )?;
                    }
                    writeln!(f, "</div>")?;
                }
                Node::Endpoints { title, items } => {
                    writeln!(f, "<div class=\"api-info\">")?;
                    writeln!(f, "<h5>{}</h5>", escape(title))?;
                    writeln!(f, "<ul>")?;
                    for item in items {
                        writeln!(
                            f,
                            "<li><code>{} {}</code> - {}</li>",
                            escape(&item.method),
                            escape(&item.path),
                            escape(&item.description)
                        )?;
                    }
                    writeln!(f, "</ul>")?;
                    writeln!(f, "</div>")?;
                }
                Node::Results(region) => {
                    if region.emphasised {
                        writeln!(
                            f,
                            "<div class=\"test-results\" style=\"transform: scale(1.05);\">"
                        )?;
                    } else {
                        writeln!(f, "<div class=\"test-results\">")?;
                    }
                    region.content.write_html(f)?;
                    writeln!(f, "</div>")?;
                }
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for Markup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for node in &self.nodes {
            match node {
                Node::Heading(text)
                | Node::Text(text)
                | Node::Strong(text)
                | Node::Note(text)
                | Node::Small(text) => writeln!(f, "{text}")?,
                Node::Value {
                    icon, label, value, ..
                } => writeln!(f, "{} {label}: {value}", format_icon(icon, ICON_CELLS))?,
                Node::Rule => writeln!(f, "{}", "-".repeat(RULE_WIDTH))?,
                Node::Controls(controls) => {
                    let labels: Vec<String> =
                        controls.iter().map(|c| format!("[{}]", c.label)).collect();
                    writeln!(f, "{}", labels.join(" "))?
                }
                Node::Endpoints { title, items } => {
                    writeln!(f, "{title}")?;
                    for item in items {
                        writeln!(f, "  {} {} - {}", item.method, item.path, item.description)?;
                    }
                }
                Node::Results(region) => write!(f, "{}", region.content)?,
            }
        }
        Ok(())
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

fn emoji_presentation(s: &str) -> String {
    if s.chars().any(|c| c == '\u{FE0F}' || c == '\u{200D}') {
        s.to_string()
    } else {
        format!("{s}\u{FE0F}")
    }
}

fn pad_cells(s: &str, field_cells: usize) -> String {
    let w = s.width();
    let pad = field_cells.saturating_sub(w);
    format!("{s}{}", " ".repeat(pad))
}

fn format_icon(icon: &str, field_cells: usize) -> String {
    pad_cells(&emoji_presentation(icon), field_cells)
}
