//! Execution timeline model.
//!
//! A timeline is the ordered sequence of half-open `[start, end)` segments
//! a simulation run produced: process execution, idle gaps, and
//! context-switch overhead.
//!
//! # Invariants
//! - Segments are ordered, non-overlapping and gap-free: `seg[i+1].start == seg[i].end`.
//! - Adjacent segments with the same kind (and process) are coalesced, so each
//!   uninterrupted run appears as exactly one segment.
//! - Zero-length segments are never stored.

use log::trace;
use serde::{Deserialize, Serialize};

use super::{Process, ProcessId, Time};

/// Label used for idle segments.
pub const IDLE_LABEL: &str = "Idle";
/// Label used for context-switch segments.
pub const CONTEXT_SWITCH_LABEL: &str = "CS";

/// What the processor was doing during a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SegmentKind {
    /// The given process was executing.
    Execution(ProcessId),
    /// No process was ready.
    Idle,
    /// Switch overhead between two different processes.
    ContextSwitch,
}

impl SegmentKind {
    /// Process id for execution segments.
    pub fn process_id(&self) -> Option<ProcessId> {
        match self {
            SegmentKind::Execution(id) => Some(*id),
            _ => None,
        }
    }

    /// Whether this is an execution segment.
    pub fn is_execution(&self) -> bool {
        matches!(self, SegmentKind::Execution(_))
    }
}

/// A half-open interval `[start, end)` on the simulated clock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Start time (inclusive).
    pub start: Time,
    /// End time (exclusive).
    pub end: Time,
    /// Segment kind.
    pub kind: SegmentKind,
    /// Display label (process name, `Idle` or `CS`).
    pub label: String,
    /// Display color, passed through from the process.
    pub color: Option<String>,
}

impl Segment {
    /// Creates a segment.
    pub fn new(kind: SegmentKind, start: Time, end: Time, label: impl Into<String>) -> Self {
        Self {
            start,
            end,
            kind,
            label: label.into(),
            color: None,
        }
    }

    /// Sets the display color.
    pub fn with_color(mut self, color: Option<String>) -> Self {
        self.color = color;
        self
    }

    /// Duration (end - start).
    #[inline]
    pub fn duration(&self) -> Time {
        self.end - self.start
    }

    /// Whether `time` falls inside `[start, end)`.
    #[inline]
    pub fn contains(&self, time: Time) -> bool {
        self.start <= time && time < self.end
    }
}

/// Append-only, self-coalescing sequence of segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    segments: Vec<Segment>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a segment, extending the last one when it continues the same run.
    ///
    /// Zero-length segments are dropped.
    pub fn push(&mut self, segment: Segment) {
        if segment.end <= segment.start {
            return;
        }

        if let Some(last) = self.segments.last_mut() {
            debug_assert!(
                segment.start >= last.end,
                "segment [{}, {}) overlaps previous end {}",
                segment.start,
                segment.end,
                last.end
            );
            if last.kind == segment.kind && last.end == segment.start {
                trace!("extend {:?} to {}", last.kind, segment.end);
                last.end = segment.end;
                return;
            }
        }

        trace!(
            "append {:?} [{}, {})",
            segment.kind,
            segment.start,
            segment.end
        );
        self.segments.push(segment);
    }

    /// Appends an execution segment for `process`.
    pub fn push_execution(&mut self, process: &Process, start: Time, end: Time) {
        self.push(
            Segment::new(SegmentKind::Execution(process.id), start, end, &process.name)
                .with_color(process.color.clone()),
        );
    }

    /// Appends an idle segment.
    pub fn push_idle(&mut self, start: Time, end: Time) {
        self.push(Segment::new(SegmentKind::Idle, start, end, IDLE_LABEL));
    }

    /// Appends a context-switch segment.
    pub fn push_context_switch(&mut self, start: Time, end: Time) {
        self.push(Segment::new(
            SegmentKind::ContextSwitch,
            start,
            end,
            CONTEXT_SWITCH_LABEL,
        ));
    }

    /// All segments in time order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Iterates segments in time order.
    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the timeline has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Start of the first segment (0 when empty).
    pub fn start(&self) -> Time {
        self.segments.first().map(|s| s.start).unwrap_or(0)
    }

    /// End of the last segment, i.e. the total elapsed time (0 when empty).
    pub fn end(&self) -> Time {
        self.segments.last().map(|s| s.end).unwrap_or(0)
    }

    /// Whether every segment starts exactly where the previous one ended.
    pub fn is_contiguous(&self) -> bool {
        self.segments.windows(2).all(|w| w[0].end == w[1].start)
    }

    /// Segment covering `time`, if any.
    pub fn segment_at(&self, time: Time) -> Option<&Segment> {
        let idx = self.segments.partition_point(|s| s.end <= time);
        self.segments.get(idx).filter(|s| s.contains(time))
    }

    /// Execution segments of one process.
    pub fn segments_for(&self, id: ProcessId) -> Vec<&Segment> {
        self.segments
            .iter()
            .filter(|s| s.kind == SegmentKind::Execution(id))
            .collect()
    }

    /// Total execution time of one process.
    pub fn execution_time_for(&self, id: ProcessId) -> Time {
        self.segments_for(id).iter().map(|s| s.duration()).sum()
    }

    /// Total time spent executing any process.
    pub fn execution_time(&self) -> Time {
        self.duration_where(|k| k.is_execution())
    }

    /// Total idle time.
    pub fn idle_time(&self) -> Time {
        self.duration_where(|k| *k == SegmentKind::Idle)
    }

    /// Total context-switch overhead.
    pub fn switch_time(&self) -> Time {
        self.duration_where(|k| *k == SegmentKind::ContextSwitch)
    }

    fn duration_where(&self, pred: impl Fn(&SegmentKind) -> bool) -> Time {
        self.segments
            .iter()
            .filter(|s| pred(&s.kind))
            .map(|s| s.duration())
            .sum()
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(id: ProcessId) -> Process {
        Process::new(id, 0, 1).with_color("#f59e0b")
    }

    #[test]
    fn test_coalesce_same_process() {
        let mut t = Timeline::new();
        t.push_execution(&p(1), 0, 1);
        t.push_execution(&p(1), 1, 2);
        t.push_execution(&p(1), 2, 5);

        assert_eq!(t.len(), 1);
        assert_eq!(t.segments()[0].start, 0);
        assert_eq!(t.segments()[0].end, 5);
        assert_eq!(t.segments()[0].label, "P1");
        assert_eq!(t.segments()[0].color.as_deref(), Some("#f59e0b"));
    }

    #[test]
    fn test_no_coalesce_different_kind() {
        let mut t = Timeline::new();
        t.push_execution(&p(1), 0, 2);
        t.push_execution(&p(2), 2, 3);
        t.push_context_switch(3, 4);
        t.push_execution(&p(2), 4, 6);

        assert_eq!(t.len(), 4);
        assert!(t.is_contiguous());
        assert_eq!(t.end(), 6);
    }

    #[test]
    fn test_idle_segments_coalesce() {
        let mut t = Timeline::new();
        t.push_idle(0, 2);
        t.push_idle(2, 3);
        assert_eq!(t.len(), 1);
        assert_eq!(t.idle_time(), 3);
        assert_eq!(t.segments()[0].label, IDLE_LABEL);
        assert!(t.segments()[0].color.is_none());
    }

    #[test]
    fn test_zero_length_dropped() {
        let mut t = Timeline::new();
        t.push_execution(&p(1), 3, 3);
        t.push_idle(5, 4);
        assert!(t.is_empty());
        assert_eq!(t.end(), 0);
        assert_eq!(t.start(), 0);
    }

    #[test]
    fn test_durations() {
        let mut t = Timeline::new();
        t.push_idle(0, 1);
        t.push_execution(&p(1), 1, 4);
        t.push_context_switch(4, 5);
        t.push_execution(&p(2), 5, 7);
        t.push_context_switch(7, 8);
        t.push_execution(&p(1), 8, 9);

        assert_eq!(t.idle_time(), 1);
        assert_eq!(t.switch_time(), 2);
        assert_eq!(t.execution_time(), 6);
        assert_eq!(t.execution_time_for(1), 4);
        assert_eq!(t.segments_for(1).len(), 2);
        assert_eq!(t.execution_time_for(3), 0);
    }

    #[test]
    fn test_segment_at() {
        let mut t = Timeline::new();
        t.push_idle(0, 2);
        t.push_execution(&p(1), 2, 5);

        assert_eq!(t.segment_at(0).unwrap().kind, SegmentKind::Idle);
        assert_eq!(t.segment_at(2).unwrap().kind, SegmentKind::Execution(1));
        assert_eq!(t.segment_at(4).unwrap().kind, SegmentKind::Execution(1));
        assert!(t.segment_at(5).is_none());
        assert!(t.segment_at(-1).is_none());
    }

    #[test]
    fn test_segment_kind_helpers() {
        assert_eq!(SegmentKind::Execution(4).process_id(), Some(4));
        assert_eq!(SegmentKind::Idle.process_id(), None);
        assert!(!SegmentKind::ContextSwitch.is_execution());
    }
}
