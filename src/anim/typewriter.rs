//! Role-text typewriter state machine.
//!
//! Cycles through a fixed list of role strings, typing and deleting them
//! character by character: type at 50ms per char, dwell 2s on the full
//! string, delete at 30ms per char, then advance to the next role (cyclic).
//!
//! The machine is clocked externally: it owns a single pending deadline and
//! `advance(now)` processes every step that has come due. Deadlines chain
//! off the previous due time rather than `now`, so a late caller catches up
//! without drifting. Clearing the deadline (`stop`, or dropping the machine
//! on teardown) cancels all future work.

use std::time::{Duration, Instant};

/// Delay between typed characters
pub const TYPE_INTERVAL: Duration = Duration::from_millis(50);

/// Delay between deleted characters
pub const DELETE_INTERVAL: Duration = Duration::from_millis(30);

/// Dwell on the fully typed role before deleting
pub const DWELL: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Dwelling,
    Deleting,
}

/// Typewriter over a fixed, cyclic role list
pub struct Typewriter {
    roles: Vec<String>,
    index: usize,
    /// Visible prefix length of the current role, in chars
    shown: usize,
    phase: Phase,
    next_due: Option<Instant>,
}

impl Typewriter {
    /// Create a typewriter starting at the first role with nothing shown.
    ///
    /// An empty role list is inert: nothing is displayed and nothing is
    /// ever scheduled. A single-element list cycles onto itself.
    pub fn new(roles: Vec<String>, now: Instant) -> Self {
        let next_due = if roles.is_empty() {
            None
        } else {
            Some(now + TYPE_INTERVAL)
        };
        Self {
            roles,
            index: 0,
            shown: 0,
            phase: Phase::Typing,
            next_due,
        }
    }

    /// The currently visible prefix of the current role
    pub fn visible(&self) -> &str {
        let Some(role) = self.roles.get(self.index) else {
            return "";
        };
        match role.char_indices().nth(self.shown) {
            Some((byte, _)) => &role[..byte],
            None => role,
        }
    }

    /// Index of the role currently being typed or deleted
    pub fn role_index(&self) -> usize {
        self.index
    }

    /// Process every step that has come due by `now`
    pub fn advance(&mut self, now: Instant) {
        while let Some(due) = self.next_due {
            if due > now {
                break;
            }
            self.step(due);
        }
    }

    /// Cancel the pending deadline; the display freezes as-is
    pub fn stop(&mut self) {
        self.next_due = None;
    }

    fn role_len(&self) -> usize {
        self.roles[self.index].chars().count()
    }

    fn step(&mut self, due: Instant) {
        match self.phase {
            Phase::Typing => {
                let len = self.role_len();
                if self.shown < len {
                    self.shown += 1;
                }
                if self.shown == len {
                    self.phase = Phase::Dwelling;
                    self.next_due = Some(due + DWELL);
                } else {
                    self.next_due = Some(due + TYPE_INTERVAL);
                }
            }
            Phase::Dwelling => {
                self.phase = Phase::Deleting;
                self.next_due = Some(due + DELETE_INTERVAL);
            }
            Phase::Deleting => {
                if self.shown > 0 {
                    self.shown -= 1;
                }
                if self.shown == 0 {
                    self.index = (self.index + 1) % self.roles.len();
                    self.phase = Phase::Typing;
                    self.next_due = Some(due + TYPE_INTERVAL);
                } else {
                    self.next_due = Some(due + DELETE_INTERVAL);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roles(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_visible_is_always_a_prefix() {
        let start = Instant::now();
        let mut tw = Typewriter::new(roles(&["Backend Engineer", "Rustacean"]), start);

        // Walk 30 seconds in 10ms slices; the invariants must hold at every step
        for i in 1..3000u64 {
            tw.advance(start + Duration::from_millis(i * 10));
            assert!(tw.role_index() < 2);
            let role = ["Backend Engineer", "Rustacean"][tw.role_index()];
            assert!(role.starts_with(tw.visible()));
        }
    }

    #[test]
    fn test_types_then_dwells_then_deletes() {
        let start = Instant::now();
        let mut tw = Typewriter::new(roles(&["ab"]), start);

        tw.advance(start + Duration::from_millis(50));
        assert_eq!(tw.visible(), "a");
        tw.advance(start + Duration::from_millis(100));
        assert_eq!(tw.visible(), "ab");

        // Dwell: nothing changes until 2s after the last typed char
        tw.advance(start + Duration::from_millis(2000));
        assert_eq!(tw.visible(), "ab");

        // Dwell expires at 2100, first delete lands at 2130
        tw.advance(start + Duration::from_millis(2130));
        assert_eq!(tw.visible(), "a");
        tw.advance(start + Duration::from_millis(2160));
        assert_eq!(tw.visible(), "");
    }

    #[test]
    fn test_single_role_cycles_onto_itself() {
        let start = Instant::now();
        let mut tw = Typewriter::new(roles(&["hi"]), start);

        // One full type/dwell/delete cycle, then it should be typing again
        tw.advance(start + Duration::from_millis(5000));
        assert_eq!(tw.role_index(), 0);
        assert!("hi".starts_with(tw.visible()));
    }

    #[test]
    fn test_roles_advance_in_order() {
        let start = Instant::now();
        let mut tw = Typewriter::new(roles(&["a", "b", "c"]), start);
        let mut seen = vec![0usize];

        for i in 1..5000u64 {
            tw.advance(start + Duration::from_millis(i * 5));
            if *seen.last().unwrap() != tw.role_index() {
                seen.push(tw.role_index());
            }
        }
        // Cyclic order 0 -> 1 -> 2 -> 0
        for pair in seen.windows(2) {
            assert_eq!((pair[0] + 1) % 3, pair[1]);
        }
        assert!(seen.len() > 3, "expected several full cycles");
    }

    #[test]
    fn test_empty_role_list_is_inert() {
        let start = Instant::now();
        let mut tw = Typewriter::new(Vec::new(), start);
        tw.advance(start + Duration::from_secs(60));
        assert_eq!(tw.visible(), "");
    }

    #[test]
    fn test_stop_cancels_pending_work() {
        let start = Instant::now();
        let mut tw = Typewriter::new(roles(&["abc"]), start);
        tw.advance(start + Duration::from_millis(50));
        assert_eq!(tw.visible(), "a");

        tw.stop();
        tw.advance(start + Duration::from_secs(60));
        assert_eq!(tw.visible(), "a");
    }

    #[test]
    fn test_late_caller_catches_up_without_drift() {
        let start = Instant::now();
        let mut tw = Typewriter::new(roles(&["abcd"]), start);

        // A single late advance covers all four type steps
        tw.advance(start + Duration::from_millis(200));
        assert_eq!(tw.visible(), "abcd");
    }

    #[test]
    fn test_multibyte_roles_slice_on_char_boundaries() {
        let start = Instant::now();
        let mut tw = Typewriter::new(roles(&["héllo"]), start);
        tw.advance(start + Duration::from_millis(100));
        assert_eq!(tw.visible(), "hé");
    }
}
