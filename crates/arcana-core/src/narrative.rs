//! Line markup for narrative text.
//!
//! A line that starts with `#` or `**` is a heading. Headings have every `#`
//! and `**` removed; any other line is kept verbatim as a paragraph.

/// One display line of a narrative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NarrativeLine {
    /// An emphasized line with its markers stripped.
    Heading(String),
    /// Plain paragraph text, possibly empty.
    Paragraph(String),
}

impl NarrativeLine {
    /// The text to display.
    pub fn text(&self) -> &str {
        match self {
            Self::Heading(s) | Self::Paragraph(s) => s,
        }
    }

    /// Whether this line is a heading.
    pub fn is_heading(&self) -> bool {
        matches!(self, Self::Heading(_))
    }
}

/// Split narrative text into display lines.
pub fn parse_narrative(text: &str) -> Vec<NarrativeLine> {
    text.split('\n').map(parse_line).collect()
}

fn parse_line(line: &str) -> NarrativeLine {
    if line.starts_with('#') || line.starts_with("**") {
        NarrativeLine::Heading(line.replace('#', "").replace("**", ""))
    } else {
        NarrativeLine::Paragraph(line.to_string())
    }
}
