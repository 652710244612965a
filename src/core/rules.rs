//! Move rules - pure predicates over bolts
//!
//! These never mutate anything; the engine consults them before committing
//! a move. Illegal attempts are a normal part of play, so every "no" here
//! is a silent refusal, not an error.

use crate::core::bolt::Bolt;
use crate::types::ColorId;

/// Can `target` receive a screw of `color` on top?
///
/// False when full; true when empty; otherwise the top screw must match.
pub fn can_accept(target: &Bolt, color: ColorId) -> bool {
    if target.is_full() {
        return false;
    }
    match target.top() {
        None => true,
        Some(top) => top.color == color && target.slots_available() > 0,
    }
}

/// Can the player interact with `bolt` at all?
///
/// False only for a locked bolt (full and uniformly colored). A full but
/// mixed-color bolt stays interactable - the player still needs to unstack
/// it.
pub fn can_interact(bolt: &Bolt) -> bool {
    !(bolt.is_full() && bolt.is_uniform())
}

/// Can `bolt` offer its top screw for a swap?
pub fn can_swap(bolt: &Bolt) -> bool {
    !bolt.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::bolt::Screw;
    use crate::types::ScrewId;

    fn bolt_with(colors: &[ColorId]) -> Bolt {
        let mut bolt = Bolt::new(1);
        for (i, &color) in colors.iter().enumerate() {
            assert!(bolt.push(Screw {
                id: i as ScrewId,
                color,
            }));
        }
        bolt
    }

    #[test]
    fn test_can_accept_empty_bolt() {
        assert!(can_accept(&Bolt::new(1), 3));
    }

    #[test]
    fn test_can_accept_matching_top_only() {
        let bolt = bolt_with(&[1, 2]);
        assert!(can_accept(&bolt, 2));
        assert!(!can_accept(&bolt, 1));
    }

    #[test]
    fn test_can_accept_full_bolt_refuses_even_same_color() {
        let bolt = bolt_with(&[1, 1, 1, 1, 1]);
        assert!(!can_accept(&bolt, 1));
    }

    #[test]
    fn test_can_interact_locked_vs_full_mixed() {
        // Full and uniform: locked, untouchable.
        assert!(!can_interact(&bolt_with(&[2, 2, 2, 2, 2])));
        // Full but mixed: still interactable.
        assert!(can_interact(&bolt_with(&[1, 1, 1, 1, 2])));
        // Partially filled uniform: interactable.
        assert!(can_interact(&bolt_with(&[1, 1, 1])));
        assert!(can_interact(&Bolt::new(1)));
    }

    #[test]
    fn test_can_swap_requires_a_screw() {
        assert!(!can_swap(&Bolt::new(1)));
        assert!(can_swap(&bolt_with(&[1])));
    }
}
