//! Line-oriented interactive front end.
//!
//! Reads one command per line, applies it to the simulator and re-renders
//! the state, the way the graphical control panel refreshes after every
//! button press.

use crate::render::{render_interrupts, render_log, render_state};
use irqsim_core::{Command, CommandOutcome, StateMachine};
use irqsim_simulation::InterruptSimulator;
use irqsim_types::{InterruptForm, InterruptId};
use std::io::{self, BufRead, Write};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

const HELP: &str = "\
Comandos:
  start                               iniciar la simulación
  pause                               pausar / reanudar
  next | n                            paso siguiente
  prev | p                            paso anterior
  reset                               reiniciar
  add <nombre> <duración> <prioridad> agregar interrupción
  update <id> <nombre> <duración> <prioridad>
  remove <id>                         eliminar interrupción
  list                                interrupciones configuradas
  log                                 lista completa de pasos
  state                               panel de control
  help                                esta ayuda
  quit | q                            salir";

/// A parsed REPL line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// Forwarded to the simulator.
    Simulator(Command),
    /// Show configured interrupts.
    List,
    /// Show the full event log.
    Log,
    /// Show the control panel.
    State,
    /// Show usage.
    Help,
    /// Leave the REPL.
    Quit,
}

/// A REPL line could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Comando desconocido: {0} (escribe 'help')")]
    Unknown(String),

    #[error("Uso: {0}")]
    Usage(&'static str),

    #[error("Valor inválido para {field}: {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}

/// Parse one line. Blank lines parse to `None`.
pub fn parse_line(line: &str) -> Result<Option<ReplCommand>, ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&verb, args)) = tokens.split_first() else {
        return Ok(None);
    };

    let command = match verb.to_lowercase().as_str() {
        "start" => ReplCommand::Simulator(Command::StartSimulation),
        "pause" => ReplCommand::Simulator(Command::PauseSimulation),
        "next" | "n" => ReplCommand::Simulator(Command::NextStep),
        "prev" | "previous" | "p" => ReplCommand::Simulator(Command::PreviousStep),
        "reset" => ReplCommand::Simulator(Command::Reset),
        "add" => {
            let form = parse_form(args, "add <nombre> <duración> <prioridad>")?;
            ReplCommand::Simulator(Command::AddInterrupt(form))
        }
        "update" => {
            const USAGE: &str = "update <id> <nombre> <duración> <prioridad>";
            let (id, rest) = args.split_first().ok_or(ParseError::Usage(USAGE))?;
            let id = parse_id(id)?;
            let form = parse_form(rest, USAGE)?;
            ReplCommand::Simulator(Command::UpdateInterrupt { id, form })
        }
        "remove" | "rm" => match args {
            [id] => ReplCommand::Simulator(Command::RemoveInterrupt { id: parse_id(id)? }),
            _ => return Err(ParseError::Usage("remove <id>")),
        },
        "list" | "ls" => ReplCommand::List,
        "log" => ReplCommand::Log,
        "state" => ReplCommand::State,
        "help" | "?" => ReplCommand::Help,
        "quit" | "exit" | "q" => ReplCommand::Quit,
        _ => return Err(ParseError::Unknown(verb.to_string())),
    };
    Ok(Some(command))
}

/// `<name...> <duration> <priority>`; the name may contain spaces.
fn parse_form(args: &[&str], usage: &'static str) -> Result<InterruptForm, ParseError> {
    let [name @ .., duration, priority] = args else {
        return Err(ParseError::Usage(usage));
    };
    if name.is_empty() {
        return Err(ParseError::Usage(usage));
    }
    let duration_ms: u64 = duration
        .parse()
        .map_err(|_| ParseError::InvalidNumber {
            field: "duración",
            value: duration.to_string(),
        })?;
    let priority: u32 = priority
        .parse()
        .map_err(|_| ParseError::InvalidNumber {
            field: "prioridad",
            value: priority.to_string(),
        })?;
    Ok(InterruptForm::new(name.join(" "), duration_ms, priority))
}

fn parse_id(value: &str) -> Result<InterruptId, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidNumber {
        field: "id",
        value: value.to_string(),
    })
}

/// Run the REPL until `quit` or end of input.
///
/// `clock` is read before every simulator command and fed to
/// [`StateMachine::set_time`].
pub fn run<R, W>(
    simulator: &mut InterruptSimulator,
    mut input: R,
    output: &mut W,
    mut clock: impl FnMut() -> Duration,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{}", render_state(&simulator.state()))?;

    let mut line = String::new();
    loop {
        write!(output, "irqsim> ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(output, "{e}")?;
                continue;
            }
        };

        match command {
            ReplCommand::Quit => break,
            ReplCommand::Help => writeln!(output, "{HELP}")?,
            ReplCommand::List => {
                write!(output, "{}", render_interrupts(&simulator.state().interrupts))?
            }
            ReplCommand::Log => write!(output, "{}", render_log(&simulator.state()))?,
            ReplCommand::State => write!(output, "{}", render_state(&simulator.state()))?,
            ReplCommand::Simulator(command) => {
                simulator.set_time(clock());
                let name = command.type_name();
                match simulator.handle(command) {
                    Ok(CommandOutcome::Added(id)) => writeln!(output, "Agregada {id}")?,
                    Ok(CommandOutcome::Ignored) => {
                        debug!(command = name, "Command had no effect");
                        writeln!(output, "(sin cambios)")?
                    }
                    Ok(CommandOutcome::Applied) => {}
                    Err(e) => writeln!(output, "Error: {e}")?,
                }
                write!(output, "{}", render_state(&simulator.state()))?;
            }
        }
    }
    writeln!(output)?;
    output.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use irqsim_test_helpers::fixed_time;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(parse_line("   "), Ok(None));
        assert_eq!(
            parse_line("next"),
            Ok(Some(ReplCommand::Simulator(Command::NextStep)))
        );
        assert_eq!(
            parse_line("P"),
            Ok(Some(ReplCommand::Simulator(Command::PreviousStep)))
        );
        assert_eq!(parse_line("quit"), Ok(Some(ReplCommand::Quit)));
        // The pause toggle is only reachable through `pause`, so a stray
        // `resume` cannot pause a running simulation.
        assert_eq!(
            parse_line("resume"),
            Err(ParseError::Unknown("resume".to_string()))
        );
        assert_eq!(
            parse_line("jump"),
            Err(ParseError::Unknown("jump".to_string()))
        );
    }

    #[test]
    fn test_parse_add_with_spaced_name() {
        assert_eq!(
            parse_line("add Tarjeta de red 20 7"),
            Ok(Some(ReplCommand::Simulator(Command::AddInterrupt(
                InterruptForm::new("Tarjeta de red", 20, 7)
            ))))
        );
        assert!(matches!(parse_line("add 20 7"), Err(ParseError::Usage(_))));
        assert!(matches!(
            parse_line("add Red veinte 7"),
            Err(ParseError::InvalidNumber { field: "duración", .. })
        ));
    }

    #[test]
    fn test_parse_update_and_remove() {
        assert_eq!(
            parse_line("update irq-2 Disco 60 3"),
            Ok(Some(ReplCommand::Simulator(Command::UpdateInterrupt {
                id: InterruptId(2),
                form: InterruptForm::new("Disco", 60, 3),
            })))
        );
        assert_eq!(
            parse_line("remove 4"),
            Ok(Some(ReplCommand::Simulator(Command::RemoveInterrupt {
                id: InterruptId(4)
            })))
        );
        assert!(matches!(parse_line("remove"), Err(ParseError::Usage(_))));
        assert!(matches!(
            parse_line("remove x"),
            Err(ParseError::InvalidNumber { field: "id", .. })
        ));
    }

    #[test]
    fn test_session() {
        let mut simulator = InterruptSimulator::default();
        let input = "add Teclado 100 5\nadd Disco 50 2\nstart\nnext\nnext\nprev\nbogus\nquit\nnext\n";
        let mut output = Vec::new();

        run(&mut simulator, input.as_bytes(), &mut output, fixed_time).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Agregada irq-1"));
        assert!(text.contains("Agregada irq-2"));
        assert!(text.contains("Paso 3 de 6"));
        assert!(text.contains("Comando desconocido: bogus"));
        // Input after quit is not processed.
        assert_eq!(simulator.state().cursor, 1);
        assert!(simulator.is_running());
    }

    #[test]
    fn test_session_reports_errors_and_no_ops() {
        let mut simulator = InterruptSimulator::default();
        let input = "add Lento 9000 5\nremove 42\npause\n";
        let mut output = Vec::new();

        run(&mut simulator, input.as_bytes(), &mut output, fixed_time).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Error: Interrupt duration 9000ms exceeds maximum of 5000ms"));
        assert_eq!(text.matches("(sin cambios)").count(), 2);
        assert!(simulator.registry().is_empty());
    }
}
