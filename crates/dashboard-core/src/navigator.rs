//! Visit Sequence Navigator
//!
//! Position over an ordered, variable-length sequence. Transitions return a
//! [`Transition`] instead of firing callbacks, so the component decides what
//! to notify and tests need no rendering harness.

/// Outcome of a navigation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Boundary or empty sequence; nothing to notify
    Unchanged,
    Moved { from: usize, to: usize },
}

impl Transition {
    /// New index to notify observers with, if the position moved
    pub fn moved_to(&self) -> Option<usize> {
        match self {
            Transition::Moved { to, .. } => Some(*to),
            Transition::Unchanged => None,
        }
    }
}

/// Invariant: `position.is_some()` iff `len > 0`, and then `position < len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SequenceNavigator {
    len: usize,
    position: Option<usize>,
}

impl SequenceNavigator {
    /// Start on the most recent (last) element
    pub fn starting_at_latest(len: usize) -> Self {
        Self {
            len,
            position: len.checked_sub(1),
        }
    }

    /// Start on a caller-supplied index, clamped into range
    pub fn starting_at(len: usize, index: usize) -> Self {
        Self {
            len,
            position: len.checked_sub(1).map(|last| index.min(last)),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current_index(&self) -> Option<usize> {
        self.position
    }

    pub fn current<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        self.position.and_then(|i| items.get(i))
    }

    pub fn has_previous(&self) -> bool {
        matches!(self.position, Some(p) if p > 0)
    }

    pub fn has_next(&self) -> bool {
        matches!(self.position, Some(p) if p + 1 < self.len)
    }

    pub fn go_previous(&mut self) -> Transition {
        match self.position {
            Some(p) if p > 0 => self.move_to(p - 1),
            _ => Transition::Unchanged,
        }
    }

    pub fn go_next(&mut self) -> Transition {
        match self.position {
            Some(p) if p + 1 < self.len => self.move_to(p + 1),
            _ => Transition::Unchanged,
        }
    }

    /// Jump to an index; out-of-range targets are ignored.
    pub fn go_to(&mut self, index: usize) -> Transition {
        match self.position {
            Some(p) if index < self.len && index != p => self.move_to(index),
            _ => Transition::Unchanged,
        }
    }

    /// Re-clamp after the sequence was replaced wholesale.
    ///
    /// A navigator that had no position lands on the latest element.
    pub fn resize(&mut self, len: usize) {
        self.len = len;
        self.position = match (self.position, len.checked_sub(1)) {
            (_, None) => None,
            (Some(p), Some(last)) => Some(p.min(last)),
            (None, Some(last)) => Some(last),
        };
    }

    /// 1-based "position of total" text, e.g. `Visit 3 / 7`
    pub fn position_label(&self) -> Option<String> {
        self.position.map(|p| format!("Visit {} / {}", p + 1, self.len))
    }

    fn move_to(&mut self, to: usize) -> Transition {
        let from = self.position.unwrap_or(to);
        self.position = Some(to);
        Transition::Moved { from, to }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visit::VisitRecord;
    use chrono::{TimeZone, Utc};
    use proptest::prelude::*;

    fn visit(id: &str, month: u32) -> VisitRecord {
        VisitRecord {
            id: id.to_string(),
            visit_date: Utc.with_ymd_and_hms(2024, month, 1, 9, 0, 0).unwrap(),
            calorie_intake: 2000.0,
            weight_kg: None,
            blood_pressure: None,
            notes: None,
        }
    }

    #[test]
    fn test_three_visit_walkthrough() {
        let visits = vec![visit("jan", 1), visit("feb", 2), visit("mar", 3)];
        let mut nav = SequenceNavigator::starting_at_latest(visits.len());
        assert_eq!(nav.current_index(), Some(2));
        assert_eq!(nav.current(&visits).unwrap().id, "mar");
        assert!(!nav.has_next());

        assert_eq!(nav.go_previous(), Transition::Moved { from: 2, to: 1 });
        assert_eq!(nav.current(&visits).unwrap().id, "feb");
        assert_eq!(nav.position_label().as_deref(), Some("Visit 2 / 3"));

        assert_eq!(nav.go_previous(), Transition::Moved { from: 1, to: 0 });
        assert_eq!(nav.current(&visits).unwrap().id, "jan");
        assert_eq!(nav.position_label().as_deref(), Some("Visit 1 / 3"));

        assert_eq!(nav.go_previous(), Transition::Unchanged);
        assert_eq!(nav.current_index(), Some(0));
        assert!(!nav.has_previous());
    }

    #[test]
    fn test_next_at_end_is_noop() {
        let mut nav = SequenceNavigator::starting_at_latest(4);
        assert_eq!(nav.go_next(), Transition::Unchanged);
        assert_eq!(nav.current_index(), Some(3));
        assert_eq!(nav.go_next().moved_to(), None);
    }

    #[test]
    fn test_empty_sequence_has_no_position() {
        let mut nav = SequenceNavigator::starting_at_latest(0);
        let visits: Vec<VisitRecord> = Vec::new();
        assert!(nav.is_empty());
        assert_eq!(nav.current_index(), None);
        assert!(nav.current(&visits).is_none());
        assert_eq!(nav.position_label(), None);
        assert_eq!(nav.go_previous(), Transition::Unchanged);
        assert_eq!(nav.go_next(), Transition::Unchanged);
        assert_eq!(nav.go_to(0), Transition::Unchanged);

        assert_eq!(SequenceNavigator::starting_at(0, 5).current_index(), None);
    }

    #[test]
    fn test_supplied_start_is_clamped() {
        assert_eq!(SequenceNavigator::starting_at(3, 1).current_index(), Some(1));
        assert_eq!(SequenceNavigator::starting_at(3, 9).current_index(), Some(2));
    }

    #[test]
    fn test_go_to() {
        let mut nav = SequenceNavigator::starting_at(5, 0);
        assert_eq!(nav.go_to(3), Transition::Moved { from: 0, to: 3 });
        assert_eq!(nav.go_to(3), Transition::Unchanged);
        assert_eq!(nav.go_to(5), Transition::Unchanged);
        assert_eq!(nav.current_index(), Some(3));
    }

    #[test]
    fn test_resize_reclamps() {
        let mut nav = SequenceNavigator::starting_at_latest(5);
        nav.resize(2);
        assert_eq!(nav.current_index(), Some(1));
        nav.resize(0);
        assert_eq!(nav.current_index(), None);
        nav.resize(3);
        assert_eq!(nav.current_index(), Some(2));
    }

    proptest! {
        #[test]
        fn prop_previous_then_next_round_trips(len in 1usize..64, start in 0usize..64) {
            let mut nav = SequenceNavigator::starting_at(len, start);
            let p = nav.current_index().unwrap();
            prop_assert!(p < len);
            if nav.has_previous() {
                nav.go_previous();
                let back = nav.go_next();
                prop_assert_eq!(back, Transition::Moved { from: p - 1, to: p });
                prop_assert_eq!(nav.current_index(), Some(p));
            }
        }

        #[test]
        fn prop_position_stays_in_bounds(len in 0usize..32, steps in proptest::collection::vec(0u8..3, 0..64)) {
            let mut nav = SequenceNavigator::starting_at_latest(len);
            for step in steps {
                let transition = match step {
                    0 => nav.go_previous(),
                    1 => nav.go_next(),
                    _ => nav.go_to(len / 2),
                };
                if let Some(to) = transition.moved_to() {
                    prop_assert!(to < len);
                }
                match nav.current_index() {
                    Some(p) => prop_assert!(p < len),
                    None => prop_assert_eq!(len, 0),
                }
            }
        }
    }
}
