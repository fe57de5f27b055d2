//! sim-runner: headless driver for the outbreak simulation.
//!
//! Usage:
//!   sim-runner --seed 12345 --ticks 2000 --clicks 5
//!   sim-runner --ticks 400 --realtime --speed fast
//!   sim-runner --config outbreak.json --ipc-mode

mod autoplay;

use anyhow::Result;
use autoplay::Autoplayer;
use outbreak_core::{
    catalog::visible_actions,
    clock::SimSpeed,
    command::PlayerCommand,
    config::SimConfig,
    engine::SimEngine,
    format::format_number,
};
use std::env;
use std::io::{self, BufRead, Write};
use std::thread;

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcCommand {
    GetState,
    Tick { count: u64 },
    /// Like `tick`, but paced at the clock's real-time speed.
    Play { count: u64 },
    Command { command: PlayerCommand },
    Quit,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let ticks = parse_arg(&args, "--ticks", 2000u64);
    let clicks = parse_arg(&args, "--clicks", 5u32);
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let realtime = args.iter().any(|a| a == "--realtime");
    let speed = match args.windows(2).find(|w| w[0] == "--speed") {
        Some(w) => SimSpeed::from_name(&w[1])
            .ok_or_else(|| anyhow::anyhow!("unknown speed {:?}; use normal, fast or turbo", w[1]))?,
        None => SimSpeed::Normal,
    };
    let config = match args.windows(2).find(|w| w[0] == "--config") {
        Some(w) => SimConfig::load(&w[1])?,
        None => SimConfig::default(),
    };

    let run_id = format!("run-{seed}");
    let mut engine = SimEngine::new(run_id, config)?;
    engine.clock.set_speed(speed);

    if ipc_mode {
        run_ipc_loop(&mut engine)?;
        return Ok(());
    }

    println!("Outbreak sim-runner");
    println!("  seed:      {seed}");
    println!("  ticks:     {ticks}");
    println!("  clicks:    {clicks}/tick");
    if realtime {
        println!("  pacing:    {} ticks/s", engine.clock.ticks_per_real_second());
    }
    println!("  humans:    {}", format_number(config.total_humans));
    println!();

    let mut player = Autoplayer::new(seed, clicks);
    engine.clock.resume();
    for _ in 0..ticks {
        player.play(&mut engine)?;
        engine.tick()?;
        if realtime {
            thread::sleep(engine.clock.tick_interval());
        }
    }
    engine.clock.pause();

    print_summary(&engine, &player);
    Ok(())
}

fn run_ipc_loop(engine: &mut SimEngine) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }

        let cmd: IpcCommand = match serde_json::from_str(&buffer) {
            Ok(c) => c,
            Err(e) => {
                write_error(&mut stdout, &e.to_string())?;
                continue;
            }
        };

        let outcome = match cmd {
            IpcCommand::Quit => break,
            IpcCommand::GetState => Ok(()),
            IpcCommand::Tick { count } => engine.run_ticks(count),
            IpcCommand::Play { count } => play_realtime(engine, count),
            IpcCommand::Command { command } => engine.apply_command(command).map(|_| ()),
        };

        match outcome {
            Ok(()) => writeln!(stdout, "{}", serde_json::to_string(&engine.snapshot())?)?,
            Err(e) => {
                log::warn!("IPC command failed: {e}");
                write_error(&mut stdout, &e.to_string())?;
                continue;
            }
        }
        stdout.flush()?;
    }
    Ok(())
}

/// Tick `count` times at the clock's pace.
fn play_realtime(engine: &mut SimEngine, count: u64) -> outbreak_core::error::SimResult<()> {
    engine.clock.resume();
    for _ in 0..count {
        engine.tick()?;
        thread::sleep(engine.clock.tick_interval());
    }
    engine.clock.pause();
    Ok(())
}

fn write_error(stdout: &mut io::Stdout, message: &str) -> Result<()> {
    let err_json = serde_json::json!({ "error": message });
    writeln!(stdout, "{err_json}")?;
    stdout.flush()?;
    Ok(())
}

fn print_summary(engine: &SimEngine, player: &Autoplayer) {
    let state = engine.state();

    println!("=== RUN SUMMARY ===");
    println!("  run_id:          {}", engine.run_id);
    println!("  final tick:      {}", engine.clock.current_tick);
    println!("  day:             {}", state.day);
    println!("  viruses:         {} (total {})",
        format_number(state.current_viruses), format_number(state.total_viruses));
    println!("  healthy:         {}", format_number(state.healthy_humans));
    println!("  infected:        {}", format_number(state.total_infected()));
    println!("  dead:            {}", format_number(state.dead_humans));
    println!("  upgrades bought: {}", player.purchases);
    println!("  events logged:   {}", engine.store().len());

    println!();
    println!("=== UPGRADES ===");
    for def in visible_actions(state) {
        let flag = if def.maxed(state, engine.config()) { " (maxed)" } else { "" };
        println!("  {:<30} next cost {}{flag}", def.name, format_number(def.cost(state)));
    }
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
