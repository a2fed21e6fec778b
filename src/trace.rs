//! Per-tick calculation trace.
//!
//! Replays a finished timeline one time unit at a time and records what the
//! CPU did, who was waiting, and how much work each process had left. The
//! waiting time accumulated here is an independent check on the metric
//! `waiting = turnaround - burst`.
//!
//! The replay walks the segments with a forward cursor, so building a trace
//! is O(total_time * n) with no per-tick segment search.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{Process, ProcessId, SegmentKind, Time, Timeline};

/// What the CPU did during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickActivity {
    /// A process executed.
    Running(ProcessId),
    /// Nothing was ready.
    Idle,
    /// Context-switch overhead.
    ContextSwitch,
}

/// One tick `[time, time + 1)` of the trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceStep {
    /// Tick start.
    pub time: Time,
    /// CPU activity during the tick.
    pub activity: TickActivity,
    /// Process that finished at `time + 1`, if any.
    pub completed: Option<ProcessId>,
    /// Processes that were ready but not running (each accrues one unit of waiting).
    pub ready: Vec<ProcessId>,
    /// Remaining burst per process after the tick, in input order.
    pub remaining: Vec<(ProcessId, Time)>,
}

/// Metric derivation for one process, reconstructed from the trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormulaBreakdown {
    /// Process identifier.
    pub id: ProcessId,
    /// Display name.
    pub name: String,
    /// Arrival time.
    pub arrival: Time,
    /// Burst length.
    pub burst: Time,
    /// Completion time (0 if the process never finished).
    pub completion: Time,
    /// Completion - arrival.
    pub turnaround: Time,
    /// Ticks spent ready but not running.
    pub waiting: Time,
    /// First tick on the CPU - arrival.
    pub response: Time,
}

/// Tick-by-tick replay of a timeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationTrace {
    /// One step per tick in `[0, total_time)`.
    pub steps: Vec<TraceStep>,
    /// Per-process formulas, in input order.
    pub formulas: Vec<FormulaBreakdown>,
}

impl CalculationTrace {
    /// Builds the trace of `timeline` for `processes`.
    pub fn build(processes: &[Process], timeline: &Timeline) -> Self {
        if timeline.is_empty() {
            return Self::default();
        }

        let index_of: HashMap<ProcessId, usize> = processes
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id, i))
            .collect();
        let mut remaining: Vec<Time> = processes.iter().map(|p| p.burst).collect();
        let mut waiting: Vec<Time> = vec![0; processes.len()];
        let mut completion: Vec<Option<Time>> = vec![None; processes.len()];
        let mut first_start: Vec<Option<Time>> = vec![None; processes.len()];

        let segments = timeline.segments();
        let total_time = timeline.end();
        let mut steps = Vec::with_capacity(total_time.max(0) as usize);
        let mut cursor = 0;

        for t in 0..total_time {
            while cursor < segments.len() && segments[cursor].end <= t {
                cursor += 1;
            }
            let activity = match segments.get(cursor).filter(|s| s.contains(t)) {
                Some(seg) => match seg.kind {
                    SegmentKind::Execution(id) => TickActivity::Running(id),
                    SegmentKind::Idle => TickActivity::Idle,
                    SegmentKind::ContextSwitch => TickActivity::ContextSwitch,
                },
                None => TickActivity::Idle,
            };
            let running = match activity {
                TickActivity::Running(id) => index_of.get(&id).copied(),
                _ => None,
            };

            let ready: Vec<usize> = (0..processes.len())
                .filter(|&i| {
                    processes[i].arrival <= t && remaining[i] > 0 && Some(i) != running
                })
                .collect();
            for &i in &ready {
                waiting[i] += 1;
            }

            let mut completed = None;
            if let Some(i) = running {
                if first_start[i].is_none() {
                    first_start[i] = Some(t);
                }
                remaining[i] -= 1;
                if remaining[i] == 0 {
                    completion[i] = Some(t + 1);
                    completed = Some(processes[i].id);
                }
            }

            steps.push(TraceStep {
                time: t,
                activity,
                completed,
                ready: ready.iter().map(|&i| processes[i].id).collect(),
                remaining: processes
                    .iter()
                    .zip(&remaining)
                    .map(|(p, &r)| (p.id, r))
                    .collect(),
            });
        }

        let formulas = processes
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let (completion, turnaround) = match completion[i] {
                    Some(c) => (c, c - p.arrival),
                    None => (0, 0),
                };
                FormulaBreakdown {
                    id: p.id,
                    name: p.name.clone(),
                    arrival: p.arrival,
                    burst: p.burst,
                    completion,
                    turnaround,
                    waiting: waiting[i],
                    response: first_start[i].map(|s| s - p.arrival).unwrap_or(0),
                }
            })
            .collect();

        Self { steps, formulas }
    }

    /// Formula breakdown of one process.
    pub fn formula_for(&self, id: ProcessId) -> Option<&FormulaBreakdown> {
        self.formulas.iter().find(|f| f.id == id)
    }
}

/// Counts switches between different processes by replaying the timeline.
///
/// Only execution segments are compared; idle and context-switch segments
/// in between are skipped.
pub fn replay_context_switches(timeline: &Timeline) -> usize {
    let ids: Vec<ProcessId> = timeline
        .iter()
        .filter_map(|s| s.kind.process_id())
        .collect();
    ids.windows(2).filter(|w| w[0] != w[1]).count()
}
