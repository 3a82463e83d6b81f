//! Navigable history of visited states.
//!
//! The timeline records the linear path of states reached via forward
//! transitions and a cursor marking the active position. Moving the cursor
//! never rewrites entries; pushing while the cursor sits before the end
//! truncates the abandoned forward branch first, the standard linear
//! undo/redo contract.

/// History vector plus cursor.
///
/// Invariants, maintained by every method: the entry list is never empty,
/// and the cursor always indexes a valid entry.
///
/// # Example
///
/// ```rust
/// use waypoint::Timeline;
///
/// let mut timeline = Timeline::new("off");
/// timeline.push("on");
/// assert_eq!(timeline.back(), Some(&"off"));
/// assert_eq!(timeline.forward(), Some(&"on"));
/// assert!(timeline.forward().is_none());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Timeline<S> {
    entries: Vec<S>,
    cursor: usize,
}

impl<S> Timeline<S> {
    /// Create a timeline holding the single starting entry.
    pub fn new(initial: S) -> Self {
        Self {
            entries: vec![initial],
            cursor: 0,
        }
    }

    /// Record a forward transition.
    ///
    /// Entries beyond the cursor are discarded before appending; the
    /// cursor lands on the new last entry.
    pub fn push(&mut self, state: S) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(state);
        self.cursor = self.entries.len() - 1;
    }

    /// Move the cursor one step back, returning the entry it lands on.
    ///
    /// Returns `None` without mutation when already at the earliest entry.
    pub fn back(&mut self) -> Option<&S> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(&self.entries[self.cursor])
    }

    /// Move the cursor one step forward, returning the entry it lands on.
    ///
    /// Returns `None` without mutation when already at the latest entry.
    pub fn forward(&mut self) -> Option<&S> {
        if self.cursor + 1 == self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(&self.entries[self.cursor])
    }

    /// Whether a backward step exists.
    pub fn can_back(&self) -> bool {
        self.cursor > 0
    }

    /// Whether a forward step exists.
    pub fn can_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Discard everything and restart from a single entry.
    pub fn reset(&mut self, initial: S) {
        self.entries.clear();
        self.entries.push(initial);
        self.cursor = 0;
    }

    /// The entry under the cursor.
    pub fn current(&self) -> &S {
        &self.entries[self.cursor]
    }

    /// All recorded entries in visitation order.
    pub fn entries(&self) -> &[S] {
        &self.entries
    }

    /// Index of the active position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_timeline_holds_initial_only() {
        let timeline = Timeline::new("start");
        assert_eq!(timeline.entries(), &["start"]);
        assert_eq!(timeline.cursor(), 0);
        assert!(!timeline.can_back());
        assert!(!timeline.can_forward());
    }

    #[test]
    fn push_advances_cursor() {
        let mut timeline = Timeline::new(1);
        timeline.push(2);
        timeline.push(3);

        assert_eq!(timeline.entries(), &[1, 2, 3]);
        assert_eq!(timeline.cursor(), 2);
        assert_eq!(timeline.current(), &3);
    }

    #[test]
    fn back_at_start_returns_none() {
        let mut timeline = Timeline::new(1);
        assert_eq!(timeline.back(), None);
        assert_eq!(timeline.cursor(), 0);
    }

    #[test]
    fn forward_at_end_returns_none() {
        let mut timeline = Timeline::new(1);
        timeline.push(2);
        assert_eq!(timeline.forward(), None);
        assert_eq!(timeline.cursor(), 1);
    }

    #[test]
    fn back_and_forward_walk_the_cursor() {
        let mut timeline = Timeline::new(1);
        timeline.push(2);
        timeline.push(3);

        assert_eq!(timeline.back(), Some(&2));
        assert_eq!(timeline.back(), Some(&1));
        assert_eq!(timeline.back(), None);
        assert_eq!(timeline.forward(), Some(&2));
        assert_eq!(timeline.forward(), Some(&3));
        assert_eq!(timeline.forward(), None);
    }

    #[test]
    fn cursor_moves_leave_entries_untouched() {
        let mut timeline = Timeline::new(1);
        timeline.push(2);
        timeline.push(3);

        timeline.back();
        timeline.back();
        timeline.forward();

        assert_eq!(timeline.entries(), &[1, 2, 3]);
    }

    #[test]
    fn push_truncates_forward_branch() {
        let mut timeline = Timeline::new(1);
        timeline.push(2);
        timeline.push(3);
        timeline.back();
        timeline.push(4);

        assert_eq!(timeline.entries(), &[1, 2, 4]);
        assert_eq!(timeline.cursor(), 2);
        assert!(!timeline.can_forward());
    }

    #[test]
    fn reset_returns_to_singleton() {
        let mut timeline = Timeline::new(1);
        timeline.push(2);
        timeline.push(3);
        timeline.back();

        timeline.reset(1);

        assert_eq!(timeline.entries(), &[1]);
        assert_eq!(timeline.cursor(), 0);
        assert!(!timeline.can_back());
        assert!(!timeline.can_forward());
    }
}
