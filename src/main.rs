use std::io::{self, BufRead, Write};

use tracing::info;
use tracing_subscriber::EnvFilter;

use rx_pitfalls::prelude::*;

/// Runs a case with the panic hook silenced for the duration of the run.
///
/// The cases raise faults on purpose and catch them; the default hook would
/// print a message for every captured one. The previous hook is put back
/// afterwards so panics outside a run stay visible.
fn run_quietly(case: Case) -> Outcome {
  let previous = std::panic::take_hook();
  std::panic::set_hook(Box::new(|_| {}));
  let outcome = case.run();
  std::panic::set_hook(previous);
  outcome
}

fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
    .init();

  let stdin = io::stdin();
  let mut out = io::stdout();
  loop {
    writeln!(out)?;
    for case in Case::ALL {
      writeln!(out, "{}: {}", case.index(), case.label())?;
    }
    write!(out, "pick a case (q to quit): ")?;
    out.flush()?;

    let mut line = String::new();
    if stdin.lock().read_line(&mut line)? == 0 {
      break;
    }
    let line = line.trim();
    if line.is_empty() || line.eq_ignore_ascii_case("q") {
      break;
    }
    match line.parse::<usize>().ok().and_then(Case::from_index) {
      Some(case) => {
        info!(target: "catalog", "running case {}: {}", case.index(), case.label());
        writeln!(out, "=> {}", run_quietly(case))?;
      }
      None => writeln!(out, "no case {line}, expected 0..={}", Case::ALL.len() - 1)?,
    }
  }
  Ok(())
}
