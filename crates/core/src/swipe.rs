//! The swipe session: one card at a time, drag gestures classified as like
//! or skip, and the end-of-deck summary.
//!
//! Phases per card: `Idle` (card at rest), `Dragging` (following the
//! pointer), `Resolved` (decision made, exit animation running client-side).
//! The animation-finished event (`advance`) moves to the next card. Mouse
//! and touch input both arrive as the same horizontal displacement.

use serde::Serialize;

use crate::pet::Pet;

// ---------------------------------------------------------------------------
// Gesture constants
// ---------------------------------------------------------------------------

/// Displacement a completed gesture must exceed (strictly) to count as a
/// decision. Positive -> like, negative -> skip, otherwise snap back.
pub const SWIPE_THRESHOLD: f64 = 100.0;

/// Card tilt: one degree per ten units of displacement.
pub const ROTATION_DIVISOR: f64 = 10.0;

/// Opacity never fades below this, so the card stays visible mid-drag.
pub const OPACITY_FLOOR: f64 = 0.3;

/// Displacement over which opacity decays from 1 toward the floor.
pub const OPACITY_FADE_RANGE: f64 = 300.0;

/// Visual state of the card, a continuous function of displacement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CardTransform {
    pub translate_x: f64,
    pub rotation: f64,
    pub opacity: f64,
}

impl CardTransform {
    pub fn at(delta_x: f64) -> Self {
        Self {
            translate_x: delta_x,
            rotation: delta_x / ROTATION_DIVISOR,
            opacity: (1.0 - delta_x.abs() / OPACITY_FADE_RANGE).max(OPACITY_FLOOR),
        }
    }

    pub fn rest() -> Self {
        Self::at(0.0)
    }
}

// ---------------------------------------------------------------------------
// Session state machine
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Like,
    Skip,
}

/// What a completed gesture resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReleaseOutcome {
    SnapBack,
    Like,
    Skip,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Dragging(f64),
    Resolved(Decision),
}

/// One swipe-through of the deck, with the pets liked along the way.
///
/// The session owns its state explicitly -- deck snapshot, position, adopted
/// list, drag phase -- and is reset wholesale on restart or when the swipe
/// panel is re-entered.
#[derive(Debug)]
pub struct SwipeSession {
    deck: Vec<Pet>,
    index: usize,
    adopted: Vec<Pet>,
    phase: Phase,
}

impl SwipeSession {
    pub fn new(deck: Vec<Pet>) -> Self {
        Self {
            deck,
            index: 0,
            adopted: Vec::new(),
            phase: Phase::Idle,
        }
    }

    /// Reset to the start of a fresh deck, dropping the adopted list.
    pub fn restart(&mut self, deck: Vec<Pet>) {
        *self = Self::new(deck);
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    pub fn adopted(&self) -> &[Pet] {
        &self.adopted
    }

    pub fn is_exhausted(&self) -> bool {
        self.index >= self.deck.len()
    }

    fn current(&self) -> Option<&Pet> {
        self.deck.get(self.index)
    }

    /// Track the pointer mid-gesture. Returns the card's transform, or
    /// `None` when there is no card to drag (deck exhausted or card
    /// already leaving).
    pub fn drag(&mut self, delta_x: f64) -> Option<CardTransform> {
        if self.current().is_none() || matches!(self.phase, Phase::Resolved(_)) {
            return None;
        }
        self.phase = Phase::Dragging(delta_x);
        Some(CardTransform::at(delta_x))
    }

    /// Classify a completed gesture by its final displacement.
    ///
    /// Beyond the positive threshold -> like; beyond the negative -> skip;
    /// otherwise the card snaps back to rest with no decision and no index
    /// change. `None` when there is no card to release.
    pub fn release(&mut self, delta_x: f64) -> Option<ReleaseOutcome> {
        if self.current().is_none() || matches!(self.phase, Phase::Resolved(_)) {
            return None;
        }

        if delta_x > SWIPE_THRESHOLD {
            self.decide(Decision::Like);
            Some(ReleaseOutcome::Like)
        } else if delta_x < -SWIPE_THRESHOLD {
            self.decide(Decision::Skip);
            Some(ReleaseOutcome::Skip)
        } else {
            self.phase = Phase::Idle;
            Some(ReleaseOutcome::SnapBack)
        }
    }

    /// Commit a decision for the current card (gesture or button). A like
    /// appends the pet to the adopted list immediately; the index only
    /// advances once the exit animation reports completion.
    ///
    /// Returns `false` when there is no card or one is already leaving.
    pub fn decide(&mut self, decision: Decision) -> bool {
        if matches!(self.phase, Phase::Resolved(_)) {
            return false;
        }
        let Some(pet) = self.current().cloned() else {
            return false;
        };

        if decision == Decision::Like {
            self.adopted.push(pet);
        }
        self.phase = Phase::Resolved(decision);
        true
    }

    /// Exit animation finished: move to the next card.
    ///
    /// Only meaningful in the `Resolved` phase; anything else is a no-op.
    pub fn advance(&mut self) -> bool {
        if matches!(self.phase, Phase::Resolved(_)) {
            self.index += 1;
            self.phase = Phase::Idle;
            true
        } else {
            false
        }
    }

    // -- view models ---------------------------------------------------------

    pub fn view(&self) -> SwipeView {
        match self.current() {
            None => SwipeView::Summary(self.summary()),
            Some(pet) => {
                let (transform, leaving) = match self.phase {
                    Phase::Idle => (CardTransform::rest(), None),
                    Phase::Dragging(delta) => (CardTransform::at(delta), None),
                    Phase::Resolved(decision) => (CardTransform::rest(), Some(decision)),
                };
                SwipeView::Card(CardView {
                    pet: pet.clone(),
                    position: self.index,
                    total: self.deck.len(),
                    transform,
                    leaving,
                })
            }
        }
    }

    pub fn summary(&self) -> SummaryView {
        let adopted: Vec<AdoptedCard> = self
            .adopted
            .iter()
            .map(|pet| AdoptedCard {
                img: pet.img.clone(),
                name: pet.name.clone(),
            })
            .collect();

        let message = adopted
            .is_empty()
            .then(|| "Vous n'avez adopté aucun animal cette fois-ci.".to_string());

        SummaryView { adopted, message }
    }
}

// ---------------------------------------------------------------------------
// View models
// ---------------------------------------------------------------------------

/// The card currently shown, with its live transform. `leaving` is set once
/// a decision is made, while the exit animation plays.
#[derive(Debug, Clone, Serialize)]
pub struct CardView {
    pub pet: Pet,
    pub position: usize,
    pub total: usize,
    pub transform: CardTransform,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leaving: Option<Decision>,
}

/// One adopted pet in the summary (image + name, accumulation order).
#[derive(Debug, Clone, Serialize)]
pub struct AdoptedCard {
    pub img: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryView {
    pub adopted: Vec<AdoptedCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// What the swipe panel shows: a card, or the summary once the deck is
/// exhausted.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SwipeView {
    Card(CardView),
    Summary(SummaryView),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
