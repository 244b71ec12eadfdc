//! Card definitions, the Major Arcana catalog, and drawn cards.

use serde::Serialize;

use crate::error::{CoreError, CoreResult};

/// An immutable card from the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CardDef {
    /// Unique identifier (0-21, the arcana number).
    pub id: u8,
    /// Display name.
    pub name: &'static str,
    /// Canonical English name.
    pub name_en: &'static str,
    /// Image reference for front-ends that render artwork.
    pub image: &'static str,
}

/// The 22 cards of the Major Arcana in canonical order.
pub const MAJOR_ARCANA: [CardDef; 22] = [
    card(0, "愚者 (The Fool)", "The Fool", "https://picsum.photos/seed/tarot0/300/500"),
    card(1, "魔术师 (The Magician)", "The Magician", "https://picsum.photos/seed/tarot1/300/500"),
    card(2, "女祭司 (The High Priestess)", "The High Priestess", "https://picsum.photos/seed/tarot2/300/500"),
    card(3, "女皇 (The Empress)", "The Empress", "https://picsum.photos/seed/tarot3/300/500"),
    card(4, "皇帝 (The Emperor)", "The Emperor", "https://picsum.photos/seed/tarot4/300/500"),
    card(5, "教皇 (The Hierophant)", "The Hierophant", "https://picsum.photos/seed/tarot5/300/500"),
    card(6, "恋人 (The Lovers)", "The Lovers", "https://picsum.photos/seed/tarot6/300/500"),
    card(7, "战车 (The Chariot)", "The Chariot", "https://picsum.photos/seed/tarot7/300/500"),
    card(8, "力量 (Strength)", "Strength", "https://picsum.photos/seed/tarot8/300/500"),
    card(9, "隐士 (The Hermit)", "The Hermit", "https://picsum.photos/seed/tarot9/300/500"),
    card(10, "命运之轮 (Wheel of Fortune)", "Wheel of Fortune", "https://picsum.photos/seed/tarot10/300/500"),
    card(11, "正义 (Justice)", "Justice", "https://picsum.photos/seed/tarot11/300/500"),
    card(12, "倒吊人 (The Hanged Man)", "The Hanged Man", "https://picsum.photos/seed/tarot12/300/500"),
    card(13, "死神 (Death)", "Death", "https://picsum.photos/seed/tarot13/300/500"),
    card(14, "节制 (Temperance)", "Temperance", "https://picsum.photos/seed/tarot14/300/500"),
    card(15, "恶魔 (The Devil)", "The Devil", "https://picsum.photos/seed/tarot15/300/500"),
    card(16, "高塔 (The Tower)", "The Tower", "https://picsum.photos/seed/tarot16/300/500"),
    card(17, "星星 (The Star)", "The Star", "https://picsum.photos/seed/tarot17/300/500"),
    card(18, "月亮 (The Moon)", "The Moon", "https://picsum.photos/seed/tarot18/300/500"),
    card(19, "太阳 (The Sun)", "The Sun", "https://picsum.photos/seed/tarot19/300/500"),
    card(20, "审判 (Judgement)", "Judgement", "https://picsum.photos/seed/tarot20/300/500"),
    card(21, "世界 (The World)", "The World", "https://picsum.photos/seed/tarot21/300/500"),
];

const fn card(
    id: u8,
    name: &'static str,
    name_en: &'static str,
    image: &'static str,
) -> CardDef {
    CardDef {
        id,
        name,
        name_en,
        image,
    }
}

/// Look up a catalog card by identifier.
pub fn card_by_id(id: u8) -> CoreResult<&'static CardDef> {
    MAJOR_ARCANA
        .iter()
        .find(|c| c.id == id)
        .ok_or(CoreError::UnknownCard(id))
}

/// Temporal slot of a drawn card in the three-card spread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    /// First card drawn.
    Past,
    /// Second card drawn.
    Present,
    /// Third card drawn.
    Future,
}

impl Position {
    /// All positions in draw order.
    pub const ALL: [Position; 3] = [Position::Past, Position::Present, Position::Future];

    /// The position assigned to the card drawn at `index` (0-based).
    pub fn from_draw_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Index of this position in draw order.
    pub fn index(self) -> usize {
        match self {
            Self::Past => 0,
            Self::Present => 1,
            Self::Future => 2,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Past => write!(f, "Past"),
            Self::Present => write!(f, "Present"),
            Self::Future => write!(f, "Future"),
        }
    }
}

/// A card removed from the deck and placed in the spread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DrawnCard {
    /// The catalog card.
    #[serde(flatten)]
    pub card: CardDef,
    /// Slot assigned from draw order.
    pub position: Position,
    /// Whether the card lies inverted. Rolled once at draw time.
    pub reversed: bool,
    /// Whether the card has been turned face-up.
    pub revealed: bool,
}

impl DrawnCard {
    /// Orientation label for display and prompts.
    pub fn orientation(&self) -> &'static str {
        if self.reversed { "reversed" } else { "upright" }
    }
}
