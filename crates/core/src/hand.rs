//! Hand module - the three pieces currently on offer
//!
//! The hand is pure data: it never looks at the grid. After every successful
//! placement the session refills all three slots, discarding the unused ones.

use crate::catalog::{PieceCatalog, Shape};
use crate::rng::SimpleRng;
use crate::types::{ShapeKind, HAND_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hand {
    slots: [Shape; HAND_SIZE],
}

impl Hand {
    /// Draw a full hand
    pub fn deal(catalog: &PieceCatalog, rng: &mut SimpleRng) -> Self {
        let mut hand = Self::from_kinds([ShapeKind::BarH3; HAND_SIZE]);
        hand.refill(catalog, rng);
        hand
    }

    /// A hand holding exactly the given catalog shapes
    pub fn from_kinds(kinds: [ShapeKind; HAND_SIZE]) -> Self {
        Self {
            slots: kinds.map(Shape::of),
        }
    }

    /// Replace every slot with an independent draw (repeats allowed)
    pub fn refill(&mut self, catalog: &PieceCatalog, rng: &mut SimpleRng) {
        for slot in &mut self.slots {
            *slot = catalog.sample(rng);
        }
    }

    pub fn pieces(&self) -> &[Shape; HAND_SIZE] {
        &self.slots
    }

    pub fn get(&self, slot: usize) -> Option<Shape> {
        self.slots.get(slot).copied()
    }

    pub fn kinds(&self) -> [ShapeKind; HAND_SIZE] {
        self.slots.map(|s| s.kind())
    }

    pub fn contains(&self, kind: ShapeKind) -> bool {
        self.slots.iter().any(|s| s.kind() == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deal_fills_every_slot() {
        let catalog = PieceCatalog::standard();
        let mut rng = SimpleRng::new(12345);
        let hand = Hand::deal(&catalog, &mut rng);

        assert_eq!(hand.pieces().len(), HAND_SIZE);
        for slot in 0..HAND_SIZE {
            assert!(hand.get(slot).is_some());
        }
        assert!(hand.get(HAND_SIZE).is_none());
    }

    #[test]
    fn test_refill_consumes_three_draws() {
        let catalog = PieceCatalog::standard();
        let mut rng = SimpleRng::new(77);
        let mut expected_rng = rng.clone();

        let mut hand = Hand::from_kinds([ShapeKind::Square; HAND_SIZE]);
        hand.refill(&catalog, &mut rng);

        let expected = [
            catalog.sample(&mut expected_rng),
            catalog.sample(&mut expected_rng),
            catalog.sample(&mut expected_rng),
        ];
        assert_eq!(hand.pieces(), &expected);
        assert_eq!(rng.state(), expected_rng.state());
    }

    #[test]
    fn test_duplicates_are_allowed() {
        let catalog = PieceCatalog::standard();
        let mut rng = SimpleRng::new(1);
        let mut hand = Hand::deal(&catalog, &mut rng);

        // With replacement, some hand eventually repeats a kind.
        let mut saw_duplicate = false;
        for _ in 0..200 {
            let k = hand.kinds();
            if k[0] == k[1] || k[1] == k[2] || k[0] == k[2] {
                saw_duplicate = true;
                break;
            }
            hand.refill(&catalog, &mut rng);
        }
        assert!(saw_duplicate);
    }

    #[test]
    fn test_contains() {
        let hand = Hand::from_kinds([ShapeKind::Tee, ShapeKind::BarV4, ShapeKind::Tee]);
        assert!(hand.contains(ShapeKind::Tee));
        assert!(hand.contains(ShapeKind::BarV4));
        assert!(!hand.contains(ShapeKind::Square));
    }
}
