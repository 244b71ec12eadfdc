//! Prompt construction for text-generation backends.

use arcana_core::{DrawnCard, Position};

/// A drawn card as the narrative request sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardPrompt {
    /// Slot in the spread.
    pub position: Position,
    /// Display name.
    pub name: String,
    /// Whether the card lies inverted.
    pub reversed: bool,
}

impl From<&DrawnCard> for CardPrompt {
    fn from(card: &DrawnCard) -> Self {
        Self {
            position: card.position,
            name: card.card.name.to_string(),
            reversed: card.reversed,
        }
    }
}

impl std::fmt::Display for CardPrompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let orientation = if self.reversed { "reversed" } else { "upright" };
        write!(f, "{}: {} ({orientation})", self.position, self.name)
    }
}

/// Build the reading prompt for a question and spread.
pub fn build_prompt(question: &str, cards: &[CardPrompt]) -> String {
    let spread: Vec<String> = cards.iter().map(ToString::to_string).collect();
    let mut out = String::new();
    out.push_str("You are a mysterious, elegant and wise tarot reader.\n");
    out.push_str(&format!("The querent asks: \"{question}\"\n"));
    out.push_str("The spread drawn:\n");
    out.push_str(&spread.join("\n"));
    out.push_str("\n\n");
    out.push_str(
        "Interpret the spread in light of the question. Keep the tone mystical and \
         poetic, but give concrete guidance.\n",
    );
    out.push_str("Structure the reading in sections:\n");
    out.push_str("1. Overall symbolism\n");
    out.push_str("2. Influence of the past\n");
    out.push_str("3. The present situation\n");
    out.push_str("4. Guidance and advice for the future\n\n");
    out.push_str("Format the reading in Markdown.");
    out
}
