use host::{load_config, run_session, SessionSummary};
use pong_core::GameConfig;
use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;
use std::time::Instant;

fn main() {
    // Logs go to stderr; stdout carries the snapshot stream.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage(&args[0]);
        std::process::exit(1);
    }

    let command = &args[1];

    match command.as_str() {
        "play" => {
            let mut config_file: Option<&str> = None;
            let mut input_file: Option<&str> = None;
            let mut latch = false;

            let mut rest = args[2..].iter();
            while let Some(arg) = rest.next() {
                match arg.as_str() {
                    "--config" | "-c" => {
                        config_file = Some(rest.next().map(|s| s.as_str()).unwrap_or_else(|| {
                            eprintln!("❌ Error: --config requires a file path");
                            std::process::exit(1);
                        }));
                    }
                    "--input" | "-i" => {
                        input_file = Some(rest.next().map(|s| s.as_str()).unwrap_or_else(|| {
                            eprintln!("❌ Error: --input requires a file path");
                            std::process::exit(1);
                        }));
                    }
                    "--latch" => latch = true,
                    other => {
                        eprintln!("❌ Unknown option for play: {}", other);
                        print_usage(&args[0]);
                        std::process::exit(1);
                    }
                }
            }

            play_command(config_file, input_file, latch);
        }

        "config" => {
            let config_file = args.get(2).map(|s| s.as_str());
            config_command(config_file);
        }

        "--help" | "-h" => {
            print_usage(&args[0]);
            std::process::exit(0);
        }

        _ => {
            eprintln!("❌ Unknown command: {}", command);
            print_usage(&args[0]);
            std::process::exit(1);
        }
    }
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} <command> [options]", program);
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  play [--config <file>] [--input <file>] [--latch]");
    eprintln!("      Run the game, one tick per input frame");
    eprintln!("      - --config: Optional JSON game config (missing fields use defaults)");
    eprintln!("      - --input:  Read frames from a file instead of stdin");
    eprintln!("      - --latch:  Score each paddle contact once instead of every frame");
    eprintln!();
    eprintln!("  config [file]");
    eprintln!("      Print the effective config as JSON");
    eprintln!();
    eprintln!("Frame format (one JSON object per line):");
    eprintln!("  {{\"hands\":[{{\"type\":\"Left\",\"bbox\":[x,y,w,h]}}],\"command\":\"reset\"}}");
    eprintln!("  command is optional: reset | quit");
    eprintln!();
    eprintln!("Each frame produces one snapshot JSON line on stdout.");
    eprintln!("Set RUST_LOG=debug to see hits and skipped observations.");
}

fn resolve_config(config_file: Option<&str>) -> GameConfig {
    load_config(config_file.map(Path::new)).unwrap_or_else(|e| {
        eprintln!("❌ Error loading config: {}", e);
        std::process::exit(1);
    })
}

fn play_command(config_file: Option<&str>, input_file: Option<&str>, latch: bool) {
    let mut config = resolve_config(config_file);
    if latch {
        config.latch_contacts = true;
    }

    eprintln!("🏓 Hand Pong");
    eprintln!("{}", "=".repeat(70));
    eprintln!("  Input: {}", input_file.unwrap_or("stdin"));
    eprintln!("  Contact latch: {}", if config.latch_contacts { "on" } else { "off" });
    eprintln!();

    let start = Instant::now();
    let stdout = io::stdout();

    let result = match input_file {
        Some(path) => {
            let file = File::open(path).unwrap_or_else(|e| {
                eprintln!("❌ Error opening '{}': {}", path, e);
                std::process::exit(1);
            });
            run_session(config, BufReader::new(file), stdout.lock())
        }
        None => run_session(config, io::stdin().lock(), stdout.lock()),
    };

    match result {
        Ok(summary) => print_summary(&summary, start.elapsed().as_secs_f64()),
        Err(e) => {
            eprintln!("❌ Session failed: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_summary(summary: &SessionSummary, secs: f64) {
    eprintln!();
    eprintln!("✅ Session finished ({})", if summary.quit { "quit" } else { "end of input" });
    eprintln!("  Frames: {} in {:.2}s", summary.frames, secs);
    eprintln!("  Resets: {}", summary.resets);
    eprintln!("  Phase: {}", summary.final_phase);
    eprintln!("  Score: {}-{}", summary.scoreboard.left, summary.scoreboard.right);
    if let Some(game_over) = &summary.game_over {
        eprintln!("  Game over, rallies: {}", game_over.display);
    }
    eprintln!("{}", "=".repeat(70));
}

fn config_command(config_file: Option<&str>) {
    let config = resolve_config(config_file);
    match serde_json::to_string_pretty(&config) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("❌ Error encoding config: {}", e);
            std::process::exit(1);
        }
    }
}
