use std::io::{stdout, Stdout, Write};

use crossbeam_channel as cbc;
use crossterm::{cursor, terminal, ExecutableCommand, Result};

use crate::shared::{RiderView, SimSnapshot};

/**
 * Terminal front end for the simulation.
 *
 * The view is a pure observer: it renders the snapshots the engine
 * publishes and never touches simulation state. Frame mode redraws the
 * shaft in place; JSON mode prints one object per line for piping into
 * other tools. Logging goes to stderr, so stdout carries nothing but
 * frames or JSON.
 */

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Frames { interactive: bool },
    JsonLines,
}

pub struct ConsoleView {
    snapshot_rx: cbc::Receiver<SimSnapshot>,
    mode: RenderMode,
}

impl ConsoleView {
    pub fn new(mode: RenderMode, snapshot_rx: cbc::Receiver<SimSnapshot>) -> ConsoleView {
        ConsoleView { snapshot_rx, mode }
    }

    pub fn run(self) -> Result<()> {
        let mut stdout = stdout();

        match self.mode {
            RenderMode::Frames { interactive } => self.run_frames(&mut stdout, interactive),
            RenderMode::JsonLines => self.run_json(&mut stdout),
        }
    }

    fn run_frames(&self, stdout: &mut Stdout, interactive: bool) -> Result<()> {
        let mut height: u16 = 0;

        loop {
            let snapshot = match self.snapshot_rx.recv() {
                Ok(snapshot) => snapshot,
                Err(_) => break, // engine is gone, nothing more to draw
            };

            stdout.execute(terminal::Clear(terminal::ClearType::FromCursorDown))?;
            height = print_frame(stdout, &snapshot, interactive)?;
            stdout.execute(cursor::MoveUp(height))?;
        }

        // Leave the cursor below the final frame
        if height > 0 {
            stdout.execute(cursor::MoveDown(height))?;
        }
        Ok(())
    }

    fn run_json(&self, stdout: &mut Stdout) -> Result<()> {
        loop {
            let snapshot = match self.snapshot_rx.recv() {
                Ok(snapshot) => snapshot,
                Err(_) => break,
            };

            let line = serde_json::to_string(&snapshot).expect("Failed to serialize snapshot");
            writeln!(stdout, "{}", line)?;
            stdout.flush()?;
        }
        Ok(())
    }
}

fn print_frame(stdout: &mut Stdout, snapshot: &SimSnapshot, interactive: bool) -> Result<u16> {
    writeln!(stdout)?;
    writeln!(stdout, "+-------+------------------+------------------------------+")?;
    writeln!(stdout, "| {0:<5} | {1:<16} | {2:<28} |", "FLOOR", "SHAFT", "WAITING")?;
    writeln!(stdout, "+-------+------------------+------------------------------+")?;
    for floor in snapshot.floors.iter().rev() {
        let shaft = if floor.number == snapshot.current_floor {
            format!("[{}]", chips(&snapshot.onboard))
        } else {
            String::new()
        };
        writeln!(
            stdout,
            "| {0:<5} | {1:<16} | {2:<28} |",
            floor.number,
            shaft,
            chips(&floor.waiting)
        )?;
    }
    writeln!(stdout, "+-------+------------------+------------------------------+")?;
    writeln!(
        stdout,
        "  car at floor {}, {}, onboard {}",
        snapshot.current_floor,
        if snapshot.moving { "moving" } else { "idle" },
        snapshot.onboard.len()
    )?;

    let mut lines = 6 + snapshot.floors.len() as u16;
    if interactive {
        writeln!(stdout, "  press Enter to start a run, Ctrl-D to quit")?;
        lines += 1;
    }
    stdout.flush()?;

    Ok(lines)
}

/// One `>destination` chip per rider, space separated.
fn chips(riders: &[RiderView]) -> String {
    riders
        .iter()
        .map(|rider| format!(">{}", rider.destination))
        .collect::<Vec<String>>()
        .join(" ")
}
