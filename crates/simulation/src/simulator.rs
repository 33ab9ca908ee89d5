//! The interrupt simulator service.

use crate::{EngineState, Playback, RunState, SimulatorConfig};
use im::Vector;
use irqsim_core::{Command, CommandOutcome, StateMachine};
use irqsim_engine::{simulate, ActiveStack};
use irqsim_registry::InterruptRegistry;
use irqsim_types::{InterruptForm, InterruptId, SimulationEvent, ValidationError};
use std::time::Duration;
use tracing::{debug, info};

/// Stateful simulator owned by one front end.
///
/// Holds the interrupt registry, the log of the current run, the playback
/// cursor and the run flags. All mutation goes through `&mut self`, so there
/// is exactly one writer.
#[derive(Debug, Clone)]
pub struct InterruptSimulator {
    registry: InterruptRegistry,
    log: Vector<SimulationEvent>,
    active_stack: ActiveStack,
    playback: Playback,
    run: RunState,
    now: Duration,
}

impl Default for InterruptSimulator {
    fn default() -> Self {
        Self::new(SimulatorConfig::default())
    }
}

impl InterruptSimulator {
    /// Create an idle simulator with an empty registry.
    pub fn new(config: SimulatorConfig) -> Self {
        Self {
            registry: InterruptRegistry::new(config.registry),
            log: Vector::new(),
            active_stack: ActiveStack::new(),
            playback: Playback::new(),
            run: RunState::default(),
            now: Duration::ZERO,
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Registry
    // ═══════════════════════════════════════════════════════════════════════

    /// Register an interrupt, stamped with the current time.
    pub fn add_interrupt(
        &mut self,
        name: impl Into<String>,
        duration_ms: u64,
        priority: u32,
    ) -> Result<InterruptId, ValidationError> {
        self.registry
            .add(InterruptForm::new(name, duration_ms, priority), self.now)
    }

    /// Change an interrupt's name, duration and priority.
    ///
    /// Returns `Ok(false)` if the id is unknown. The current run's log is
    /// not affected.
    pub fn update_interrupt(
        &mut self,
        id: InterruptId,
        name: impl Into<String>,
        duration_ms: u64,
        priority: u32,
    ) -> Result<bool, ValidationError> {
        self.registry
            .update(id, InterruptForm::new(name, duration_ms, priority))
    }

    /// Remove an interrupt. Returns `false` if the id is unknown.
    pub fn remove_interrupt(&mut self, id: InterruptId) -> bool {
        self.registry.remove(id)
    }

    /// Get the registry.
    pub fn registry(&self) -> &InterruptRegistry {
        &self.registry
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Run control
    // ═══════════════════════════════════════════════════════════════════════

    /// Discard any previous run, enter the running state and generate a new log.
    pub fn start_simulation(&mut self) {
        self.reset();
        self.run.start();
        self.simulate();
        info!(
            interrupts = self.registry.len(),
            events = self.log.len(),
            "Simulation started"
        );
    }

    /// Generate the log from the current registry contents.
    ///
    /// The new log replaces the old one only once it is complete. The cursor
    /// is pulled back inside the new log if needed.
    ///
    /// Only an active run has a log: while idle this does nothing and returns
    /// the (empty) current log. Use [`Self::start_simulation`] to begin a run.
    pub fn simulate(&mut self) -> Vector<SimulationEvent> {
        if !self.run.is_running() {
            debug!("Simulate ignored while idle");
            return self.log.clone();
        }

        let snapshot = self.registry.snapshot();
        let output = simulate(&snapshot, self.now);

        self.log = output.log;
        self.active_stack = output.final_stack;
        self.playback.clamp(self.log.len());
        self.log.clone()
    }

    /// Toggle the pause flag.
    ///
    /// Returns `false` and leaves the flag alone if no run is active, so
    /// `is_paused` can never be set while idle.
    pub fn pause_simulation(&mut self) -> bool {
        let toggled = self.run.toggle_pause();
        if toggled {
            debug!(paused = self.run.is_paused(), "Pause toggled");
        } else {
            debug!("Pause ignored while idle");
        }
        toggled
    }

    /// Return to idle, discarding the log. Registered interrupts are kept.
    pub fn reset(&mut self) {
        self.log = Vector::new();
        self.active_stack = ActiveStack::new();
        self.playback.reset();
        self.run.stop();
        debug!("Simulator reset");
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Playback
    // ═══════════════════════════════════════════════════════════════════════

    /// Advance the cursor. Returns whether it moved.
    pub fn next_step(&mut self) -> bool {
        self.playback.next(self.log.len())
    }

    /// Move the cursor back. Returns whether it moved.
    pub fn previous_step(&mut self) -> bool {
        self.playback.previous()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Queries
    // ═══════════════════════════════════════════════════════════════════════

    /// Get a snapshot of the whole simulator.
    pub fn state(&self) -> EngineState {
        EngineState {
            interrupts: self.registry.snapshot(),
            log: self.log.clone(),
            cursor: self.playback.position(),
            is_running: self.run.is_running(),
            is_paused: self.run.is_paused(),
            active_stack: self.active_stack.to_vec(),
        }
    }

    /// Get the log of the current run.
    pub fn log(&self) -> &Vector<SimulationEvent> {
        &self.log
    }

    /// Get the event under the cursor.
    pub fn current_event(&self) -> Option<&SimulationEvent> {
        self.log.get(self.playback.position())
    }

    /// Check if a run is active.
    pub fn is_running(&self) -> bool {
        self.run.is_running()
    }

    /// Check if the active run is paused.
    pub fn is_paused(&self) -> bool {
        self.run.is_paused()
    }
}

impl StateMachine for InterruptSimulator {
    fn handle(&mut self, command: Command) -> Result<CommandOutcome, ValidationError> {
        debug!(command = command.type_name(), "Handling command");

        let changed = match command {
            Command::AddInterrupt(form) => {
                let id = self.registry.add(form, self.now)?;
                return Ok(CommandOutcome::Added(id));
            }
            Command::UpdateInterrupt { id, form } => self.registry.update(id, form)?,
            Command::RemoveInterrupt { id } => self.remove_interrupt(id),
            Command::StartSimulation => {
                self.start_simulation();
                true
            }
            Command::PauseSimulation => self.pause_simulation(),
            Command::Reset => {
                self.reset();
                true
            }
            Command::NextStep => self.next_step(),
            Command::PreviousStep => self.previous_step(),
        };

        Ok(if changed {
            CommandOutcome::Applied
        } else {
            CommandOutcome::Ignored
        })
    }

    fn set_time(&mut self, now: Duration) {
        self.now = now;
    }

    fn now(&self) -> Duration {
        self.now
    }
}
