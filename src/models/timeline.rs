//! Timeline (Gantt chart) model.
//!
//! A timeline is the append-only record of which process held the CPU
//! over which interval. Segments are produced in time order by the
//! simulator and never overlap.

use serde::{Deserialize, Serialize};

use super::{Phase, Time, TIME_EPSILON};

/// One contiguous, uninterrupted execution slice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GanttSegment {
    /// Process that held the CPU.
    pub process_id: u32,
    /// Slice start.
    pub start_time: Time,
    /// Slice end (`end_time > start_time`).
    pub end_time: Time,
    /// CPU burst this slice belongs to (`CpuFirst` or `CpuSecond`).
    pub phase: Phase,
}

impl GanttSegment {
    /// Creates a first-burst segment.
    pub fn new(process_id: u32, start_time: Time, end_time: Time) -> Self {
        Self {
            process_id,
            start_time,
            end_time,
            phase: Phase::CpuFirst,
        }
    }

    /// Sets the burst phase.
    pub fn with_phase(mut self, phase: Phase) -> Self {
        self.phase = phase;
        self
    }

    /// Slice length.
    #[inline]
    pub fn duration(&self) -> Time {
        self.end_time - self.start_time
    }

    /// Color slot for rendering: `(id - 1) mod palette_len`.
    ///
    /// Returns `0` for an empty palette.
    pub fn palette_index(&self, palette_len: usize) -> usize {
        if palette_len == 0 {
            return 0;
        }
        (self.process_id.saturating_sub(1) as usize) % palette_len
    }
}

/// Ordered execution timeline of one simulation run.
///
/// An empty timeline is a valid result meaning "nothing to display".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    /// Segments in time order.
    pub segments: Vec<GanttSegment>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a segment. Slices without positive length are dropped.
    pub fn push(&mut self, segment: GanttSegment) {
        if segment.duration() > 0.0 {
            self.segments.push(segment);
        }
    }

    /// Whether no segments were recorded.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Latest segment end, `0` when empty.
    pub fn makespan(&self) -> Time {
        self.segments
            .iter()
            .map(|s| s.end_time)
            .fold(0.0, f64::max)
    }

    /// Total time the CPU was busy.
    pub fn busy_time(&self) -> Time {
        self.segments.iter().map(GanttSegment::duration).sum()
    }

    /// All segments of one process, in time order.
    pub fn segments_for(&self, process_id: u32) -> Vec<&GanttSegment> {
        self.segments
            .iter()
            .filter(|s| s.process_id == process_id)
            .collect()
    }

    /// CPU time received by one process.
    pub fn busy_time_for(&self, process_id: u32) -> Time {
        self.segments
            .iter()
            .filter(|s| s.process_id == process_id)
            .map(GanttSegment::duration)
            .sum()
    }

    /// Intervals in `[0, makespan]` where no process held the CPU.
    pub fn idle_intervals(&self) -> Vec<(Time, Time)> {
        let mut gaps = Vec::new();
        let mut cursor = 0.0;
        for segment in &self.segments {
            if segment.start_time - cursor > TIME_EPSILON {
                gaps.push((cursor, segment.start_time));
            }
            cursor = segment.end_time;
        }
        gaps
    }

    /// Whether segments are time-ordered and pairwise non-overlapping.
    pub fn is_well_formed(&self) -> bool {
        self.segments.iter().all(|s| s.end_time > s.start_time)
            && self
                .segments
                .windows(2)
                .all(|w| w[1].start_time >= w[0].end_time - TIME_EPSILON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_timeline() -> Timeline {
        let mut t = Timeline::new();
        t.push(GanttSegment::new(1, 0.0, 2.0));
        t.push(GanttSegment::new(2, 3.0, 5.0));
        t.push(GanttSegment::new(1, 5.0, 6.5).with_phase(Phase::CpuSecond));
        t
    }

    #[test]
    fn test_timeline_makespan_and_busy() {
        let t = sample_timeline();
        assert_eq!(t.len(), 3);
        assert!((t.makespan() - 6.5).abs() < 1e-10);
        assert!((t.busy_time() - 5.5).abs() < 1e-10);
    }

    #[test]
    fn test_segments_for_process() {
        let t = sample_timeline();
        let p1 = t.segments_for(1);
        assert_eq!(p1.len(), 2);
        assert_eq!(p1[1].phase, Phase::CpuSecond);
        assert!((t.busy_time_for(1) - 3.5).abs() < 1e-10);
        assert!(t.segments_for(9).is_empty());
    }

    #[test]
    fn test_idle_intervals() {
        let t = sample_timeline();
        assert_eq!(t.idle_intervals(), vec![(2.0, 3.0)]);

        let mut late = Timeline::new();
        late.push(GanttSegment::new(1, 4.0, 5.0));
        assert_eq!(late.idle_intervals(), vec![(0.0, 4.0)]);
    }

    #[test]
    fn test_zero_length_segment_dropped() {
        let mut t = Timeline::new();
        t.push(GanttSegment::new(1, 2.0, 2.0));
        assert!(t.is_empty());
    }

    #[test]
    fn test_short_segment_kept() {
        let mut t = Timeline::new();
        t.push(GanttSegment::new(1, 0.0, 1e-10));
        assert_eq!(t.len(), 1);
        assert!(t.busy_time_for(1) > 0.0);
    }

    #[test]
    fn test_well_formed() {
        assert!(sample_timeline().is_well_formed());

        let overlapping = Timeline {
            segments: vec![GanttSegment::new(1, 0.0, 3.0), GanttSegment::new(2, 2.0, 4.0)],
        };
        assert!(!overlapping.is_well_formed());
    }

    #[test]
    fn test_palette_index() {
        let s = GanttSegment::new(7, 0.0, 1.0);
        assert_eq!(s.palette_index(5), 1);
        assert_eq!(GanttSegment::new(1, 0.0, 1.0).palette_index(5), 0);
        assert_eq!(s.palette_index(0), 0);
    }

    #[test]
    fn test_empty_timeline() {
        let t = Timeline::new();
        assert!(t.is_empty());
        assert_eq!(t.makespan(), 0.0);
        assert!(t.idle_intervals().is_empty());
        assert!(t.is_well_formed());
    }
}
