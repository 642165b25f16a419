//! Turn rotation implementation

use thiserror::Error;
use tracing::debug;

use super::{Participant, ParticipantQueue};

/// Errors from rotation operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RotationError {
    /// The rotation holds no participants
    #[error("no participants in the rotation")]
    Empty,
}

/// The TurnsQueue serves participants in circular FIFO order, re-enqueuing
/// each one at the back until its turn allowance runs out.
///
/// Participants enter at the back via [`add_participant`](Self::add_participant)
/// with a turn allowance; an allowance of zero or less keeps them in the
/// rotation forever. A participant served while holding exactly one turn is
/// removed permanently. Arrival order is preserved across rotations; the only
/// movement is front-removal plus back-reinsertion on each service.
#[derive(Debug, Clone, Default)]
pub struct TurnsQueue {
    participants: ParticipantQueue,
}

impl TurnsQueue {
    /// Create an empty rotation
    pub fn new() -> Self {
        Self {
            participants: ParticipantQueue::new(),
        }
    }

    /// Add a new participant at the back of the rotation
    ///
    /// `turns` is the number of services the participant will receive; zero
    /// or less grants unlimited turns. Names are not validated and may repeat.
    pub fn add_participant(&mut self, name: impl Into<String>, turns: i32) {
        let participant = Participant::new(name, turns);
        debug!(name = %participant.name, turns, "TurnsQueue::add_participant: called");
        self.participants.enqueue(participant);
    }

    /// Serve the next participant in rotation order
    ///
    /// The front participant is removed and re-enqueued at the back unless
    /// this service consumed its final turn. The returned record is a
    /// snapshot taken before any decrement: it shows the turn count as it
    /// stood when this turn was consumed, while the decremented copy is what
    /// re-enters the rotation.
    pub fn next_participant(&mut self) -> Result<Participant, RotationError> {
        debug!(len = self.participants.len(), "TurnsQueue::next_participant: called");
        let served = self.participants.dequeue().ok_or(RotationError::Empty)?;

        if served.has_unlimited_turns() {
            // Unlimited participants go back untouched
            self.participants.enqueue(served.clone());
        } else if served.turns > 1 {
            let mut requeued = served.clone();
            requeued.turns -= 1;
            self.participants.enqueue(requeued);
        }
        // Exactly one turn left: consumed, participant leaves the rotation

        Ok(served)
    }

    /// Number of participants still in rotation
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    /// Whether the rotation is empty
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}

impl std::fmt::Display for TurnsQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.participants)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(queue: &mut TurnsQueue, services: usize) -> Vec<String> {
        (0..services)
            .map(|_| queue.next_participant().unwrap().name)
            .collect()
    }

    #[test]
    fn test_single_turn_participants_serve_in_arrival_order() {
        let mut queue = TurnsQueue::new();
        queue.add_participant("bob", 1);
        queue.add_participant("tim", 1);
        queue.add_participant("sue", 1);

        assert_eq!(names(&mut queue, 3), ["bob", "tim", "sue"]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_finite_and_unlimited_rotation() {
        let mut queue = TurnsQueue::new();
        queue.add_participant("a", 1);
        queue.add_participant("b", 2);
        queue.add_participant("c", 0);

        // a is removed after its only turn, b after its second, c cycles forever
        assert_eq!(names(&mut queue, 7), ["a", "b", "c", "b", "c", "c", "c"]);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.to_string(), "[c (forever)]");
    }

    #[test]
    fn test_negative_turns_are_unlimited() {
        let mut queue = TurnsQueue::new();
        queue.add_participant("loner", -5);

        for _ in 0..50 {
            assert_eq!(queue.next_participant().unwrap().name, "loner");
        }
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_empty_rotation_errors() {
        let mut queue = TurnsQueue::new();
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.next_participant(), Err(RotationError::Empty));
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn test_add_after_failed_service_recovers() {
        let mut queue = TurnsQueue::new();
        assert!(queue.next_participant().is_err());

        queue.add_participant("late", 1);
        assert_eq!(queue.next_participant().unwrap().name, "late");
    }

    #[test]
    fn test_duplicate_names_are_distinct_entries() {
        let mut queue = TurnsQueue::new();
        queue.add_participant("twin", 1);
        queue.add_participant("twin", 2);

        assert_eq!(queue.len(), 2);
        assert_eq!(names(&mut queue, 3), ["twin", "twin", "twin"]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_served_snapshot_shows_pre_decrement_count() {
        let mut queue = TurnsQueue::new();
        queue.add_participant("bob", 2);

        let first = queue.next_participant().unwrap();
        assert_eq!(first.turns, 2);

        let second = queue.next_participant().unwrap();
        assert_eq!(second.turns, 1);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_exhaustion_shrinks_length_by_one() {
        let mut queue = TurnsQueue::new();
        queue.add_participant("short", 1);
        queue.add_participant("long", 3);

        queue.next_participant().unwrap();
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_len_is_idempotent() {
        let mut queue = TurnsQueue::new();
        queue.add_participant("bob", 2);

        assert_eq!(queue.len(), 1);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_display_front_to_back_rotates() {
        let mut queue = TurnsQueue::new();
        queue.add_participant("a", 3);
        queue.add_participant("b", 0);
        assert_eq!(queue.to_string(), "[a (3), b (forever)]");

        queue.next_participant().unwrap();
        assert_eq!(queue.to_string(), "[b (forever), a (2)]");
    }
}
