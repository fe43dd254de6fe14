/* 3rd party libraries */
use clap::{Arg, Command};
use crossbeam_channel as cbc;
use log::info;
use std::io::{stdin, stdout, BufReader};
use std::thread::Builder;
use std::time::Duration;

/* Custom libraries */
use config::{Config, RenderMode};
use elevator::{ElevatorController, Statistics};
use emulator::Emulator;
use panel::{
    Clock, InputSource, JsonRenderer, KeyboardDriver, PanelInput, Renderer, SpeedPreset,
    SpeedSelector, SpeedSwitch, SystemClock, TerminalBuzzer, TerminalRenderer,
};
use shared::FloorIndex;

/* Modules */
mod config;
mod elevator;
mod emulator;
mod panel;
mod shared;

/* Main */
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = Command::new("elevator-emulator")
        .about("Single-car, four-floor elevator controller emulated in the terminal")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .takes_value(true)
                .default_value("config.toml")
                .help("Path to the TOML configuration file"),
        )
        .arg(
            Arg::new("slow")
                .long("slow")
                .help("Start with the speed switch on the slow preset"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print one JSON status object per change instead of drawing"),
        )
        .get_matches();

    // Load the configuration
    let config_path = matches.value_of("config").unwrap_or("config.toml");
    let mut config = unwrap_or_exit!(config::load_config(config_path), "Failed to load configuration");
    if matches.is_present("json") {
        config.terminal.render = RenderMode::Json;
    }
    let initial_speed = if matches.is_present("slow") {
        SpeedPreset::Slow
    } else {
        SpeedPreset::Fast
    };

    // Panel channels
    let (floor_call_tx, floor_call_rx) = cbc::unbounded::<FloorIndex>();
    let (destination_switch_tx, destination_switch_rx) = cbc::unbounded::<FloorIndex>();
    let (speed_switch_tx, speed_switch_rx) = cbc::unbounded::<SpeedPreset>();
    let (terminate_tx, terminate_rx) = cbc::unbounded::<()>();

    // Start the keyboard driver
    let keyboard = KeyboardDriver::new(
        BufReader::new(stdin()),
        floor_call_tx,
        destination_switch_tx,
        speed_switch_tx,
        terminate_tx,
    );
    let keyboard_thread = Builder::new().name("keyboard".into());
    unwrap_or_exit!(
        keyboard_thread.spawn(move || keyboard.run()),
        "Failed to start keyboard thread"
    );

    info!("Call with 0-3, pick destination with d0-d3, speed with f/s, quit with q");

    let input = PanelInput::new(floor_call_rx, destination_switch_rx);
    let speed = SpeedSwitch::new(&config.speed, initial_speed, speed_switch_rx);

    let statistics = match config.terminal.render {
        RenderMode::Text => run_emulator(
            &config,
            input,
            speed,
            TerminalRenderer::new(stdout()),
            terminate_rx,
        ),
        RenderMode::Json => run_emulator(
            &config,
            input,
            speed,
            JsonRenderer::new(stdout()),
            terminate_rx,
        ),
    };
    let statistics = unwrap_or_exit!(statistics, "Display failed");

    info!(
        "Floors with passenger: {}, floors without passenger: {}",
        statistics.floors_with_passenger(),
        statistics.floors_without_passenger()
    );
}

fn run_emulator<I: InputSource, S: SpeedSelector, R: Renderer>(
    config: &Config,
    input: I,
    speed: S,
    renderer: R,
    terminate_rx: cbc::Receiver<()>,
) -> std::io::Result<Statistics> {
    let clock = SystemClock::new();
    let controller = ElevatorController::new(&config.elevator, &config.feedback, clock.now());

    let emulator = Emulator::new(
        controller,
        clock,
        input,
        speed,
        renderer,
        TerminalBuzzer::new(stdout()),
        Duration::from_millis(config.terminal.tick_ms),
    );
    emulator.run(terminate_rx)
}
