use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand, ValueEnum};
use dc_controls::{ChannelWrite, ManifoldMapper, RotaryControl};
use dc_core::Channel;
use dc_session::{ActuatorSession, SessionError};
use dc_store::ChannelStore;
use dc_transport::RecordingTransport;

#[derive(Parser)]
#[command(name = "dc-cli")]
#[command(about = "Dryerctl CLI - kiln ventilation actuator control", long_about = None)]
struct Cli {
    /// Path to the channel state file (defaults to ~/.dryer-channels.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print committed channel values and derived control positions
    Show,
    /// Write a raw channel value (diagnostic tool)
    Set {
        /// Channel key (lowerDamper, upperDamper, blowerVfd, exhaustDamper)
        channel: String,
        /// Value 0-255
        value: u8,
    },
    /// Set the manifold slider position
    Manifold {
        /// Position 0-100 (100 = fully up)
        position: f64,
    },
    /// Step the blower VFD up or down
    Blower { direction: Direction },
    /// Step the exhaust damper up or down
    Exhaust { direction: Direction },
    /// Interactive session with throttled hardware flushing
    Run,
}

#[derive(Clone, Copy, ValueEnum)]
enum Direction {
    Up,
    Down,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Store(#[from] dc_store::StoreError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

type CliResult<T> = Result<T, CliError>;

fn main() -> CliResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let path = cli.config.unwrap_or_else(ChannelStore::default_path);

    match cli.command {
        Commands::Show => cmd_show(path),
        Commands::Set { channel, value } => {
            let channel = parse_channel(&channel)?;
            cmd_adjust(path, &[ChannelWrite::new(channel, value)])
        }
        Commands::Manifold { position } => {
            let mapper = manifold();
            cmd_adjust(path, &mapper.writes_for_position(position))
        }
        Commands::Blower { direction } => cmd_step(path, Channel::BlowerVfd, direction),
        Commands::Exhaust { direction } => cmd_step(path, Channel::ExhaustDamper, direction),
        Commands::Run => cmd_run(path),
    }
}

fn manifold() -> ManifoldMapper {
    ManifoldMapper::new(Channel::UpperDamper, Channel::LowerDamper)
}

fn parse_channel(key: &str) -> CliResult<Channel> {
    Channel::from_key(key).ok_or_else(|| {
        let known: Vec<&str> = Channel::ALL.iter().map(|c| c.key()).collect();
        CliError::InvalidInput(format!(
            "unknown channel '{key}' (expected one of: {})",
            known.join(", ")
        ))
    })
}

fn print_state(store: &ChannelStore) {
    for channel in Channel::ALL {
        println!("{:>14}: {}", channel.key(), store.get_value(channel));
    }
    let position = manifold().position_for(
        store.get_value(Channel::UpperDamper),
        store.get_value(Channel::LowerDamper),
    );
    println!("{:>14}: {position:.0}", "manifold");
    println!(
        "{:>14}: {:.2} rad",
        "blower dial",
        RotaryControl::dial_angle(store.get_value(Channel::BlowerVfd))
    );
    println!(
        "{:>14}: {:.0} deg",
        "exhaust wedge",
        RotaryControl::wedge_sweep_degrees(store.get_value(Channel::ExhaustDamper))
    );
}

fn cmd_show(path: PathBuf) -> CliResult<()> {
    let store = ChannelStore::open(path)?;
    println!("state file: {}", store.path().display());
    print_state(&store);
    Ok(())
}

/// Persist the writes, then program the bus once with the full config.
fn cmd_adjust(path: PathBuf, writes: &[ChannelWrite]) -> CliResult<()> {
    let store = ChannelStore::open(path)?;
    let mut session = ActuatorSession::new(store, RecordingTransport::new());
    session.apply(writes, 0.0)?;
    session.start(0.0)?;
    print_state(session.store());
    Ok(())
}

fn cmd_step(path: PathBuf, channel: Channel, direction: Direction) -> CliResult<()> {
    let store = ChannelStore::open(path)?;
    let rotary = RotaryControl::new(channel);
    let current = store.get_value(channel);
    let write = match direction {
        Direction::Up => rotary.step_up(current),
        Direction::Down => rotary.step_down(current),
    };

    let mut session = ActuatorSession::new(store, RecordingTransport::new());
    session.apply(&[write], 0.0)?;
    session.start(0.0)?;
    print_state(session.store());
    Ok(())
}

fn cmd_run(path: PathBuf) -> CliResult<()> {
    let store = ChannelStore::open(path)?;
    let mut session = ActuatorSession::new(store, RecordingTransport::new());
    let clock = Instant::now();

    session.start(0.0)?;
    println!("commands: manifold <0-100> | blower up|down | exhaust up|down | show | quit");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let now_s = clock.elapsed().as_secs_f64();

        match run_command(&mut session, line.trim(), now_s) {
            Ok(true) => break,
            Ok(false) => {}
            Err(err) => eprintln!("error: {err}"),
        }
        print!("> ");
        let _ = io::stdout().flush();
    }

    // Pending adjustments go out before the safety stop.
    session.on_exit_to_control_panel()?;
    session.stop()?;
    Ok(())
}

/// Returns true when the session should end.
fn run_command(
    session: &mut ActuatorSession<RecordingTransport>,
    line: &str,
    now_s: f64,
) -> CliResult<bool> {
    let mut words = line.split_whitespace();
    match words.next() {
        None => Ok(false),
        Some("quit") | Some("exit") => Ok(true),
        Some("show") => {
            print_state(session.store());
            Ok(false)
        }
        Some("manifold") => {
            let position: f64 = words
                .next()
                .and_then(|w| w.parse().ok())
                .ok_or_else(|| CliError::InvalidInput("usage: manifold <0-100>".to_string()))?;
            session.apply(&manifold().writes_for_position(position), now_s)?;
            Ok(false)
        }
        Some(cmd @ ("blower" | "exhaust")) => {
            let channel = if cmd == "blower" {
                Channel::BlowerVfd
            } else {
                Channel::ExhaustDamper
            };
            let rotary = RotaryControl::new(channel);
            let current = session.get_value(channel);
            let write = match words.next() {
                Some("up") => rotary.step_up(current),
                Some("down") => rotary.step_down(current),
                _ => {
                    return Err(CliError::InvalidInput(format!("usage: {cmd} up|down")));
                }
            };
            session.apply(&[write], now_s)?;
            Ok(false)
        }
        Some(other) => Err(CliError::InvalidInput(format!("unknown command '{other}'"))),
    }
}
