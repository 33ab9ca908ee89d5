//! Plain-text rendering of simulator state.

use irqsim_engine::LogSummary;
use irqsim_simulation::EngineState;
use irqsim_types::{Interrupt, SimulationEvent};
use std::fmt::{self, Write};

/// Render the full event log, marking the event under the cursor.
pub fn render_log(state: &EngineState) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_log(&mut out, state);
    out
}

/// Render the control-panel view: status, current step, stack, interrupts.
pub fn render_state(state: &EngineState) -> String {
    let mut out = String::new();
    let _ = write_state(&mut out, state);
    out
}

/// Render the configured interrupts.
pub fn render_interrupts(interrupts: &[Interrupt]) -> String {
    let mut out = String::new();
    let _ = write_interrupts(&mut out, interrupts);
    out
}

/// Write the full event log.
pub fn write_log(out: &mut impl Write, state: &EngineState) -> fmt::Result {
    if state.log.is_empty() {
        return writeln!(out, "No hay pasos de simulación disponibles");
    }

    for (index, event) in state.log.iter().enumerate() {
        let marker = if index == state.cursor { '>' } else { ' ' };
        write!(out, "{marker} {:>3}  ", index + 1)?;
        write_event_line(out, event)?;
    }

    let summary = LogSummary::of(&state.log);
    writeln!(
        out,
        "{} pasos: {} inicios, {} interrupciones, {} reanudaciones, {} completados",
        summary.total(),
        summary.starts,
        summary.preemptions,
        summary.resumes,
        summary.completions
    )
}

/// Write the control-panel view.
pub fn write_state(out: &mut impl Write, state: &EngineState) -> fmt::Result {
    let status = match (state.is_running, state.is_paused) {
        (true, true) => "en pausa",
        (true, false) => "en ejecución",
        (false, _) => "detenida",
    };
    writeln!(out, "Simulación {status}")?;

    match (state.progress(), state.current_event()) {
        (Some((step, total)), Some(event)) => {
            writeln!(out, "Paso {step} de {total}")?;
            writeln!(out, "[{}] {}", event.kind.label(), event.subject_name)?;
            writeln!(out, "    {}", event.message)?;
        }
        _ => writeln!(out, "Sin pasos: inicia la simulación para generar la línea de tiempo")?,
    }

    writeln!(out)?;
    writeln!(out, "Pila de interrupciones:")?;
    match state.executing() {
        None => writeln!(out, "  La pila de interrupciones está vacía")?,
        Some(active) => {
            writeln!(
                out,
                "  {} (prioridad {})  ACTIVO",
                active.name, active.priority
            )?;
            // Suspended frames, most recently preempted first.
            for interrupt in state.active_stack.iter().rev().skip(1) {
                writeln!(out, "  {} (prioridad {})", interrupt.name, interrupt.priority)?;
            }
        }
    }

    writeln!(out)?;
    write_interrupts(out, &state.interrupts)?;

    writeln!(out)?;
    write_actions(out, state)
}

/// Write the controls that would currently have an effect.
pub fn write_actions(out: &mut impl Write, state: &EngineState) -> fmt::Result {
    let mut actions = vec!["add"];
    if state.can_start() {
        actions.push("start");
    }
    if state.can_pause() {
        actions.push(if state.is_paused { "pause (reanudar)" } else { "pause" });
    }
    if state.can_step_back() {
        actions.push("prev");
    }
    if state.can_step_forward() {
        actions.push("next");
    }
    if state.is_running {
        actions.push("reset");
    }
    writeln!(out, "Acciones: {}", actions.join(", "))
}

/// Write the configured interrupts.
pub fn write_interrupts(out: &mut impl Write, interrupts: &[Interrupt]) -> fmt::Result {
    writeln!(out, "Interrupciones configuradas:")?;
    if interrupts.is_empty() {
        return writeln!(out, "  No hay interrupciones configuradas");
    }
    for interrupt in interrupts {
        writeln!(
            out,
            "  {:<8} {:<16} prioridad {:>3}  duración {:>5}ms",
            interrupt.id.to_string(),
            interrupt.name,
            interrupt.priority,
            interrupt.duration_ms
        )?;
    }
    Ok(())
}

fn write_event_line(out: &mut impl Write, event: &SimulationEvent) -> fmt::Result {
    writeln!(
        out,
        "{:<13} {:<18} {}",
        event.kind.label(),
        event.subject_name,
        event.message
    )
}
