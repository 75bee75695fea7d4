//! The bounded stream of consciousness.
//!
//! Thoughts are stamped with simulated time so a replay produces the same
//! stream. A thought may also be scheduled for a future simulated time; it
//! joins the stream once [`ThoughtStream::release_due`] is called with a
//! time at or past its due time.

use std::collections::VecDeque;

use chrono::Utc;
use genesis_types::{Thought, ThoughtKind};

/// A thought waiting for its moment.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Scheduled {
    due: f64,
    text: &'static str,
    kind: ThoughtKind,
}

/// Ordered, capped thought log.
#[derive(Debug, Clone, PartialEq)]
pub struct ThoughtStream {
    entries: VecDeque<Thought>,
    capacity: usize,
    scheduled: Vec<Scheduled>,
}

impl ThoughtStream {
    /// An empty stream keeping at most `capacity` thoughts.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            scheduled: Vec::new(),
        }
    }

    /// Record a thought, forgetting the oldest if full.
    pub fn think(&mut self, sim_time: f64, text: impl Into<String>, kind: ThoughtKind) {
        if self.capacity == 0 {
            return;
        }
        while self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(Thought {
            sim_time,
            recorded_at: Utc::now(),
            text: text.into(),
            kind,
        });
    }

    /// Hold a thought back until simulated time `due`.
    pub fn schedule(&mut self, due: f64, text: &'static str, kind: ThoughtKind) {
        self.scheduled.push(Scheduled { due, text, kind });
    }

    /// Emit every scheduled thought due by `now`, earliest first.
    pub fn release_due(&mut self, now: f64) {
        let (mut due, waiting): (Vec<_>, Vec<_>) =
            self.scheduled.drain(..).partition(|s| s.due <= now);
        self.scheduled = waiting;
        due.sort_by(|a, b| a.due.total_cmp(&b.due));
        for s in due {
            self.think(s.due, s.text, s.kind);
        }
    }

    /// Scheduled thoughts not yet emitted.
    pub fn pending(&self) -> usize {
        self.scheduled.len()
    }

    /// Number of thoughts held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the stream is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Thoughts, oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Thought> + ExactSizeIterator {
        self.entries.iter()
    }

    /// The newest thought.
    pub fn latest(&self) -> Option<&Thought> {
        self.entries.back()
    }

    /// Copies of the `n` newest thoughts, oldest first.
    pub fn recent(&self, n: usize) -> Vec<Thought> {
        self.entries
            .iter()
            .skip(self.entries.len().saturating_sub(n))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn stream_keeps_the_newest() {
        let mut stream = ThoughtStream::new(3);
        for i in 0..5 {
            stream.think(f64::from(i), format!("thought {i}"), ThoughtKind::Neutral);
        }
        let texts: Vec<&str> = stream.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["thought 2", "thought 3", "thought 4"]);
        assert_eq!(stream.latest().unwrap().text, "thought 4");
        assert_eq!(stream.recent(2).len(), 2);
        assert_eq!(stream.recent(9).len(), 3);
    }

    #[test]
    fn scheduled_thoughts_wait_for_their_time() {
        let mut stream = ThoughtStream::new(10);
        stream.schedule(2.5, "later", ThoughtKind::Hypothesis);
        stream.schedule(1.0, "soon", ThoughtKind::Perception);

        stream.release_due(0.9);
        assert!(stream.is_empty());
        assert_eq!(stream.pending(), 2);

        stream.release_due(3.0);
        let texts: Vec<&str> = stream.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["soon", "later"]);
        assert_eq!(stream.pending(), 0);
        assert!((stream.latest().unwrap().sim_time - 2.5).abs() < f64::EPSILON);
    }
}
