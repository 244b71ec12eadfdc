//! Events delivered by scheduled tasks.

/// A delayed transition, tagged with the generation that scheduled it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadingEvent {
    /// The shuffle has settled; picking may open.
    Settled {
        /// Scheduling generation.
        generation: u64,
    },
    /// The spread is full; the fanned deck should collapse.
    Collapse {
        /// Scheduling generation.
        generation: u64,
    },
    /// A card's flip time has come.
    Flip {
        /// Scheduling generation.
        generation: u64,
        /// Draw index of the card.
        index: usize,
    },
    /// Both the narrative and the animation floor are done.
    Narrative {
        /// Scheduling generation.
        generation: u64,
        /// Narrative text, stored verbatim.
        text: String,
    },
}

impl ReadingEvent {
    /// Generation that scheduled this event.
    pub fn generation(&self) -> u64 {
        match self {
            Self::Settled { generation }
            | Self::Collapse { generation }
            | Self::Flip { generation, .. }
            | Self::Narrative { generation, .. } => *generation,
        }
    }
}
