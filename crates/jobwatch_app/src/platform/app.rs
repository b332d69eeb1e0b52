use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread;

use chrono::Utc;
use jobwatch_core::{update, AppState, Msg};
use jobwatch_logging::watch_info;

use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::render;

/// Everything the main loop reacts to: core messages from the user or the
/// engine, plus the few commands handled outside the state machine.
pub enum Input {
    Core(Msg),
    OpenCard(usize),
    Help,
    Quit,
}

pub fn run_app() {
    logging::initialize(LogDestination::File);
    watch_info!("jobwatch starting");

    let (input_tx, input_rx) = mpsc::channel::<Input>();
    spawn_stdin_reader(input_tx.clone());
    let runner = EffectRunner::new(input_tx);

    render::print_banner();

    let mut state = AppState::new();
    while let Ok(input) = input_rx.recv() {
        match input {
            Input::Core(msg) => {
                let (next, effects) = update(state, msg);
                state = next;
                runner.enqueue(effects);
                if state.consume_dirty() {
                    render::render(&state.view());
                }
            }
            Input::OpenCard(index) => render::print_apply_url(&state.view(), index),
            Input::Help => render::print_help(),
            Input::Quit => break,
        }
    }

    watch_info!("jobwatch exiting");
}

fn spawn_stdin_reader(tx: mpsc::Sender<Input>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            let inputs = parse_command(line.trim());
            for input in inputs {
                let quit = matches!(input, Input::Quit);
                if tx.send(input).is_err() || quit {
                    return;
                }
            }
        }
        // End of stdin shuts the session down.
        let _ = tx.send(Input::Quit);
    });
}

fn parse_command(line: &str) -> Vec<Input> {
    if line.is_empty() {
        return Vec::new();
    }
    let (head, rest) = line.split_once(' ').unwrap_or((line, ""));
    let rest = rest.trim();
    let now = Utc::now();

    match head.to_ascii_lowercase().as_str() {
        "scan" => vec![Input::Core(Msg::ScanClicked { at: now })],
        // `analyze <text>` fills the input box and submits in one go;
        // a bare `analyze` submits whatever was typed before.
        "analyze" if rest.is_empty() => vec![Input::Core(Msg::AnalyzeClicked { at: now })],
        "analyze" => vec![
            Input::Core(Msg::InputChanged(rest.to_string())),
            Input::Core(Msg::AnalyzeClicked { at: now }),
        ],
        "text" => vec![Input::Core(Msg::InputChanged(rest.to_string()))],
        "open" => match rest.parse::<usize>() {
            Ok(index) => vec![Input::OpenCard(index)],
            Err(_) => vec![Input::Help],
        },
        "quit" | "exit" => vec![Input::Quit],
        _ => vec![Input::Help],
    }
}
