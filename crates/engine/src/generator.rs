//! Event-log generation.

use crate::{ActiveStack, LogSummary};
use im::Vector;
use irqsim_types::{EventId, Interrupt, SimulationEvent};
use std::time::Duration;
use tracing::{debug, info};

/// Result of one simulation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationOutput {
    /// The complete timeline, main-process start first and completion last.
    pub log: Vector<SimulationEvent>,
    /// The stack as the loop left it. Empty unless the generator was seeded.
    pub final_stack: ActiveStack,
}

/// Builds the event log for one run.
///
/// Construction emits the main-process start; [`EventGenerator::finish`]
/// emits its completion. In between, [`EventGenerator::process`] is called
/// once per interrupt in priority order.
///
/// Every event of a run carries the same timestamp, taken when the run
/// began.
#[derive(Debug)]
pub struct EventGenerator {
    stack: ActiveStack,
    log: Vector<SimulationEvent>,
    next_id: EventId,
    now: Duration,
}

impl EventGenerator {
    /// Begin a run with an empty active stack.
    pub fn new(now: Duration) -> Self {
        Self::with_stack(now, ActiveStack::new())
    }

    /// Begin a run on top of already-active interrupts.
    ///
    /// The seeded frames behave as if they were executing when the run
    /// started: arrivals may preempt the top one, and it resumes when the
    /// arrival completes.
    pub fn with_stack(now: Duration, stack: ActiveStack) -> Self {
        let mut generator = Self {
            stack,
            log: Vector::new(),
            next_id: EventId::FIRST,
            now,
        };
        let id = generator.allocate_id();
        generator
            .log
            .push_back(SimulationEvent::main_start(id, now));
        generator
    }

    /// Service one interrupt.
    ///
    /// Emits, in order: a preemption of the current top (only if `interrupt`
    /// has strictly higher priority), the interrupt's start, its completion,
    /// and a resume of whatever is left on top afterwards.
    pub fn process(&mut self, interrupt: &Interrupt) {
        if self.stack.would_preempt(interrupt) {
            if let Some(current) = self.stack.top().cloned() {
                debug!(
                    preempted = %current.id,
                    preempted_priority = current.priority,
                    by = %interrupt.id,
                    by_priority = interrupt.priority,
                    "Preemption"
                );
                let id = self.allocate_id();
                self.log
                    .push_back(SimulationEvent::preempted(id, self.now, &current));
            }
        }

        self.stack.push(interrupt.clone());
        let id = self.allocate_id();
        self.log
            .push_back(SimulationEvent::start(id, self.now, interrupt));

        // Completion is immediate; the duration is never waited on.
        let id = self.allocate_id();
        self.log
            .push_back(SimulationEvent::completed(id, self.now, interrupt));
        self.stack.pop();

        if let Some(previous) = self.stack.top().cloned() {
            let id = self.allocate_id();
            self.log
                .push_back(SimulationEvent::resumed(id, self.now, &previous));
        }

        debug!(
            id = %interrupt.id,
            name = %interrupt.name,
            priority = interrupt.priority,
            depth = self.stack.len(),
            "Serviced interrupt"
        );
    }

    /// Get the events emitted so far.
    pub fn log(&self) -> &Vector<SimulationEvent> {
        &self.log
    }

    /// Get the active stack.
    pub fn stack(&self) -> &ActiveStack {
        &self.stack
    }

    /// Emit the main-process completion and hand over the log.
    pub fn finish(mut self) -> SimulationOutput {
        let id = self.allocate_id();
        self.log
            .push_back(SimulationEvent::main_complete(id, self.now));
        SimulationOutput {
            log: self.log,
            final_stack: self.stack,
        }
    }

    fn allocate_id(&mut self) -> EventId {
        let id = self.next_id;
        self.next_id = id.next();
        id
    }
}

/// Generate the event log for a set of interrupts.
///
/// The input is sorted by priority (highest first) before processing. The
/// sort is stable, so equal priorities keep the order they were given in.
pub fn simulate(interrupts: &[Interrupt], now: Duration) -> SimulationOutput {
    let mut ordered: Vec<&Interrupt> = interrupts.iter().collect();
    ordered.sort_by(|a, b| b.priority.cmp(&a.priority));

    let mut generator = EventGenerator::new(now);
    for interrupt in ordered {
        generator.process(interrupt);
    }
    let output = generator.finish();

    let summary = LogSummary::of(&output.log);
    info!(
        interrupts = interrupts.len(),
        events = output.log.len(),
        preemptions = summary.preemptions,
        resumes = summary.resumes,
        "Simulation generated"
    );

    output
}
