//! Local openness signatures.

use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// The 4-bit local openness vector around a cell.
///
/// One bit per cardinal heading in the order up, right, down, left;
/// `true` means the neighboring cell is traversable, `false` means wall or
/// grid boundary. This is the sole observable state of the agent: two
/// physically distinct cells may carry the same signature, which is the
/// ambiguity relocalization has to resolve by moving.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Signature([bool; 4]);

impl Signature {
    /// Build from openness bits in heading order (up, right, down, left).
    #[inline]
    pub fn from_bits(bits: [bool; 4]) -> Self {
        Self(bits)
    }

    /// Openness bits in heading order.
    #[inline]
    pub fn bits(self) -> [bool; 4] {
        self.0
    }

    /// Is the neighbor in `direction` traversable?
    #[inline]
    pub fn is_open(self, direction: Direction) -> bool {
        self.0[direction.index()]
    }

    /// Number of open headings (0..=4).
    #[inline]
    pub fn open_count(self) -> usize {
        self.0.iter().filter(|&&b| b).count()
    }

    /// Open headings in scan order.
    pub fn open_directions(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |d| self.is_open(*d))
    }

    /// Fully enclosed cell (no open heading).
    #[inline]
    pub fn is_enclosed(self) -> bool {
        self.open_count() == 0
    }
}

impl std::fmt::Display for Signature {
    /// Renders as four binary digits in heading order, e.g. `1010`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for &open in &self.0 {
            write!(f, "{}", if open { '1' } else { '0' })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_order() {
        let sig = Signature::from_bits([true, false, true, false]);
        assert!(sig.is_open(Direction::Up));
        assert!(!sig.is_open(Direction::Right));
        assert!(sig.is_open(Direction::Down));
        assert!(!sig.is_open(Direction::Left));
        assert_eq!(sig.to_string(), "1010");
    }

    #[test]
    fn test_open_count() {
        assert_eq!(Signature::from_bits([false; 4]).open_count(), 0);
        assert!(Signature::from_bits([false; 4]).is_enclosed());
        assert_eq!(Signature::from_bits([true; 4]).open_count(), 4);
    }

    #[test]
    fn test_open_directions_order() {
        let sig = Signature::from_bits([false, true, false, true]);
        let dirs: Vec<_> = sig.open_directions().collect();
        assert_eq!(dirs, vec![Direction::Right, Direction::Left]);
    }

    #[test]
    fn test_equality_is_by_bits() {
        let a = Signature::from_bits([true, true, false, false]);
        let b = Signature::from_bits([true, true, false, false]);
        assert_eq!(a, b);
    }
}
