use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use framemenu::{
    config,
    host::{commands, demo, MenuStack},
    recorder::RecordingRenderer,
    sound::LogSound,
};

#[derive(Parser, Debug)]
#[command(name = "framemenu", version, about = "Headless driver for the framemenu engine")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Feeds an input script to the demo menu and prints the state after each step.
    Run {
        /// Inputs separated by commas or spaces: up, down, left, right, enter, back.
        /// A repeat count may follow a `*` (e.g. `down*3`).
        #[arg(long, default_value = "")]
        script: String,
        /// Print one JSON object per step instead of a text line.
        #[arg(long)]
        json: bool,
    },
    /// Runs the script, then prints the draw calls of the resulting frame as JSON.
    Render {
        #[arg(long, default_value = "")]
        script: String,
        /// Seconds of open animation to play before drawing.
        #[arg(long, default_value_t = 1.0)]
        elapsed: f32,
    },
    /// Prints the config path that would be used (if any).
    ConfigPath,
    /// Writes a starter config file if none exists and prints its path.
    InitConfig,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Run { script, json } => {
            let inputs = commands::parse_script(&script)?;
            let mut stack = load_demo()?;
            let sound = LogSound;

            print_step(&stack, 0, "open", json)?;
            for (i, cmd) in inputs.into_iter().enumerate() {
                let update = stack.handle(cmd, &sound);
                if let Some(title) = update.exited.as_deref() {
                    log::info!("closed '{title}'");
                }
                print_step(&stack, i + 1, &format!("{cmd:?}").to_ascii_lowercase(), json)?;
            }
        }
        Command::Render { script, elapsed } => {
            let inputs = commands::parse_script(&script)?;
            let mut stack = load_demo()?;
            let sound = LogSound;
            for cmd in inputs {
                stack.handle(cmd, &sound);
            }
            stack.advance(elapsed);

            let mut renderer = RecordingRenderer::default();
            stack.render(&mut renderer);
            let out =
                serde_json::to_string_pretty(renderer.calls()).context("serialize draw calls")?;
            println!("{out}");
        }
        Command::ConfigPath => {
            if let Some(path) = config::resolve_config_path() {
                println!("{}", path.display());
            }
        }
        Command::InitConfig => {
            let path = config::ensure_config_file_exists().context("ensure config exists")?;
            println!("{}", path.display());
        }
    }

    Ok(())
}

fn load_demo() -> Result<MenuStack> {
    let cfg = config::load_optional().context("load config")?;
    let resolved = config::resolve(cfg.as_ref());
    let (root, _state) = demo::build(&resolved);
    Ok(MenuStack::new(root))
}

fn print_step(stack: &MenuStack, step: usize, input: &str, json: bool) -> Result<()> {
    let snap = stack.snapshot();
    if json {
        let line = serde_json::to_string(&snap).context("serialize snapshot")?;
        println!("{line}");
        return Ok(());
    }
    println!(
        "[{step:>3}] {input:<6} {} {} scroll={} -> {} ({})",
        snap.path.join(" > "),
        snap.position,
        snap.scroll,
        snap.item.as_deref().unwrap_or("<empty>"),
        snap.kind
    );
    Ok(())
}
