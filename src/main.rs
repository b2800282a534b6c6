/* 3rd party libraries */
use clap::{Arg, ArgAction, Command};
use crossbeam_channel as cbc;
use env_logger::Env;
use log::{error, info};
use std::thread::Builder;

/* Custom libraries */
use dispatch::DispatchEngine;
use shared::{Building, RunSummary, SimSnapshot};
use view::{ConsoleView, RenderMode, TriggerInput};

/* Modules */
mod config;
mod dispatch;
mod shared;
mod view;

/* Main */
fn main() {
    // Initialize logging (stderr, so stdout stays free for the view)
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    // Parse the command line
    let matches = Command::new("liftsim")
        .about("Terminal elevator dispatch simulation")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .default_value("config.toml")
                .help("Path to the simulation configuration"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print one JSON snapshot per state change instead of drawing frames"),
        )
        .arg(
            Arg::new("auto")
                .long("auto")
                .action(ArgAction::SetTrue)
                .help("Trigger a single run immediately and exit when it completes"),
        )
        .get_matches();

    let config_path = matches.get_one::<String>("config").unwrap();
    let json = matches.get_flag("json");
    let auto = matches.get_flag("auto");

    // Load the configuration and seed the building
    let config = crate::unwrap_or_exit!(config::load_config(config_path), "configuration error");
    let building = crate::unwrap_or_exit!(Building::from_config(&config), "invalid configuration");
    info!(
        "loaded {} with {} floors and {} passengers",
        config_path,
        building.n_floors(),
        config.passengers.len()
    );

    // Initialize channels
    let (start_tx, start_rx) = cbc::unbounded::<()>();
    let (snapshot_tx, snapshot_rx) = cbc::unbounded::<SimSnapshot>();
    let (run_done_tx, run_done_rx) = cbc::unbounded::<RunSummary>();
    let (terminate_tx, terminate_rx) = cbc::unbounded::<()>();

    // Start the dispatch engine
    let engine = DispatchEngine::new(
        &config.simulation,
        building,
        start_rx,
        snapshot_tx,
        run_done_tx,
        terminate_rx,
    );
    let engine_thread = Builder::new().name("dispatch_engine".into());
    let engine_handle = engine_thread.spawn(move || engine.run()).unwrap();

    // Start the view
    let mode = if json {
        RenderMode::JsonLines
    } else {
        RenderMode::Frames { interactive: !auto }
    };
    let view = ConsoleView::new(mode, snapshot_rx);
    let view_thread = Builder::new().name("console_view".into());
    let view_handle = view_thread
        .spawn(move || {
            if let Err(e) = view.run() {
                error!("view error: {}", e);
                std::process::exit(1);
            }
        })
        .unwrap();

    if auto {
        // One run, then a clean shutdown
        let _ = start_tx.send(());
        if let Ok(summary) = run_done_rx.recv() {
            info!(
                "auto run finished, {} stops, {} passengers delivered",
                summary.stops, summary.delivered
            );
        }
        let _ = terminate_tx.send(());
    } else {
        // Runs are triggered from stdin until end of input
        let input = TriggerInput::new(start_tx);
        let input_thread = Builder::new().name("trigger_input".into());
        input_thread.spawn(move || input.run()).unwrap();
    }

    engine_handle.join().unwrap();
    view_handle.join().unwrap();
}
