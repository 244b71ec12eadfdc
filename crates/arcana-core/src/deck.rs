//! The undrawn pile.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{CardDef, MAJOR_ARCANA};

/// Ordered sequence of cards not yet drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<CardDef>,
}

impl Default for Deck {
    fn default() -> Self {
        Self::full()
    }
}

impl Deck {
    /// A fresh copy of the catalog in canonical order.
    pub fn full() -> Self {
        Self {
            cards: MAJOR_ARCANA.to_vec(),
        }
    }

    /// Cards in current order.
    pub fn cards(&self) -> &[CardDef] {
        &self.cards
    }

    /// Number of cards left.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether every card has been drawn.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Whether the card is still in the pile.
    pub fn contains(&self, id: u8) -> bool {
        self.cards.iter().any(|c| c.id == id)
    }

    /// Uniformly permute the pile in place (Fisher-Yates).
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Remove a card by identifier, returning it if it was present.
    pub fn take(&mut self, id: u8) -> Option<CardDef> {
        let idx = self.cards.iter().position(|c| c.id == id)?;
        Some(self.cards.remove(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn full_deck_matches_catalog() {
        let deck = Deck::full();
        assert_eq!(deck.len(), 22);
        assert_eq!(deck.cards(), &MAJOR_ARCANA[..]);
    }

    #[test]
    fn take_removes_by_id() {
        let mut deck = Deck::full();
        let card = deck.take(7).unwrap();
        assert_eq!(card.name_en, "The Chariot");
        assert_eq!(deck.len(), 21);
        assert!(!deck.contains(7));
        assert!(deck.take(7).is_none());
        assert_eq!(deck.len(), 21);
    }

    #[test]
    fn shuffle_is_seed_deterministic() {
        let mut a = Deck::full();
        let mut b = Deck::full();
        a.shuffle(&mut StdRng::seed_from_u64(9));
        b.shuffle(&mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn shuffle_is_a_permutation(seed in any::<u64>()) {
            let mut deck = Deck::full();
            deck.shuffle(&mut StdRng::seed_from_u64(seed));
            prop_assert_eq!(deck.len(), MAJOR_ARCANA.len());
            let mut ids: Vec<u8> = deck.cards().iter().map(|c| c.id).collect();
            ids.sort_unstable();
            let expected: Vec<u8> = (0..22).collect();
            prop_assert_eq!(ids, expected);
        }
    }
}
