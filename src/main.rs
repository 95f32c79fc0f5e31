use std::{fs, process};

use anyhow::{bail, Context, Result};
use log::info;

use ascii_blobs::{
    engine::{reveal::FRAME_PERIOD, Engine},
    player::{config::PlayerConfig, Player},
    renderer::Renderer,
    types::{FieldKind, FrameInput, PointerState},
};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

const PLAY_USAGE: &str = "ascii-blobs play [balance|duality|flow|chaos]";
const FRAME_USAGE: &str = "ascii-blobs frame <n> [balance|duality|flow|chaos] [--html|--json]";

const LOG_FILE: &str = "ascii-blobs.log";

fn run() -> Result<()> {
    let mut args = std::env::args().skip(1);

    match args.next().as_deref() {
        Some("play") => {
            init_logging(true)?;
            let field = args.next().map(|s| parse_field(&s)).transpose()?;
            play(field)
        }
        Some("frame") => {
            init_logging(false)?;
            let frame = args.next().context(FRAME_USAGE)?;
            let frame: u32 = frame
                .parse()
                .with_context(|| format!("Invalid frame number '{frame}'"))?;
            let mut field = FieldKind::default();
            let mut format = Format::Text;
            for arg in args {
                match arg.as_str() {
                    "--html" => format = Format::Html,
                    "--json" => format = Format::Json,
                    other => field = parse_field(other)?,
                }
            }
            print_frame(frame, field, format)
        }
        _ => bail!(
            "ASCII Blobs — procedural text-art animation\n\nUsage:\n  {PLAY_USAGE}\n  {FRAME_USAGE}"
        ),
    }
}

/// The player owns the terminal, so its log goes to a file instead of stderr.
fn init_logging(to_file: bool) -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    builder.format_timestamp_micros();
    if to_file {
        let path = std::env::temp_dir().join(LOG_FILE);
        let log_file = fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(log_file)));
    }
    builder.init();
    Ok(())
}

fn parse_field(s: &str) -> Result<FieldKind> {
    s.parse::<FieldKind>().map_err(anyhow::Error::msg)
}

fn play(field: Option<FieldKind>) -> Result<()> {
    let mut config = PlayerConfig::load();
    if let Some(field) = field {
        config.initial_field = field;
    }
    let mut player = Player::new(config);
    player.play()
}

enum Format {
    Text,
    Html,
    Json,
}

fn print_frame(frame: u32, field: FieldKind, format: Format) -> Result<()> {
    if frame >= FRAME_PERIOD {
        bail!("Frame {frame} out of range: frames wrap at {FRAME_PERIOD}");
    }
    info!("rendering frame {frame} of field {field}");
    let grid = Engine::render_frame(&FrameInput {
        frame,
        field,
        pointer: PointerState::default(),
        surface: None,
    });
    let output = match format {
        Format::Text => Renderer::to_text(&grid),
        Format::Html => Renderer::to_markup(&grid),
        Format::Json => serde_json::to_string_pretty(&grid)? + "\n",
    };
    print!("{output}");
    Ok(())
}
