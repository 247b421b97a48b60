//! Group-state rules shared by the accordion-like widgets.

/// What a compact project card does when activated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionMode {
    /// Narrow viewport: the card expands in place.
    ExpandInPlace,
    /// Wide viewport: the card replaces the featured project.
    SwitchFeatured,
}

impl InteractionMode {
    pub fn for_viewport(width: f64, breakpoint: f64) -> Self {
        if width <= breakpoint {
            InteractionMode::ExpandInPlace
        } else {
            InteractionMode::SwitchFeatured
        }
    }
}

/// Accordion transition: every other item collapses, the activated one
/// flips. An out-of-range index collapses everything.
pub fn accordion_toggle(expanded: &[bool], index: usize) -> Vec<bool> {
    expanded
        .iter()
        .enumerate()
        .map(|(i, &open)| i == index && !open)
        .collect()
}

/// Exactly one active entry (or none for an out-of-range index).
pub fn single_active(len: usize, index: usize) -> Vec<bool> {
    (0..len).map(|i| i == index).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_inclusive() {
        assert_eq!(
            InteractionMode::for_viewport(768.0, 768.0),
            InteractionMode::ExpandInPlace
        );
        assert_eq!(
            InteractionMode::for_viewport(320.0, 768.0),
            InteractionMode::ExpandInPlace
        );
        assert_eq!(
            InteractionMode::for_viewport(769.0, 768.0),
            InteractionMode::SwitchFeatured
        );
    }

    #[test]
    fn opening_an_item_closes_the_others() {
        let next = accordion_toggle(&[true, false, false], 2);
        assert_eq!(next, vec![false, false, true]);
    }

    #[test]
    fn activating_the_open_item_closes_it() {
        let next = accordion_toggle(&[false, true, false], 1);
        assert_eq!(next, vec![false, false, false]);
    }

    #[test]
    fn at_most_one_item_is_ever_open() {
        let mut state = vec![false; 4];
        for index in [0, 3, 3, 1, 2, 2, 0] {
            state = accordion_toggle(&state, index);
            assert!(state.iter().filter(|open| **open).count() <= 1);
            for (i, open) in state.iter().enumerate() {
                if i != index {
                    assert!(!open);
                }
            }
        }
    }

    #[test]
    fn single_active_marks_one_entry() {
        assert_eq!(single_active(3, 1), vec![false, true, false]);
        assert_eq!(single_active(2, 5), vec![false, false]);
        assert!(single_active(0, 0).is_empty());
    }
}
