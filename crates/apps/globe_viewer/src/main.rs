mod cli;
mod script;

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use clap::Parser;
use formats::{JsonFileStore, MemoryStore, SceneStorage};
use foundation::math::{tile_index, to_cartesian};
use gpu::Renderer;
use runtime::{InputEvent, Session, SessionConfig, SessionStatus};
use streaming::{HttpTileSource, TileSource};
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::{Args, Command, RunArgs};
use crate::script::{ScriptLine, parse_line};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let data_file = args.data_file();
    let ephemeral = args.ephemeral;

    match args.command.unwrap_or(Command::Run(RunArgs::default())) {
        Command::Run(run) => {
            let config = run.session_config();
            let input: Box<dyn BufRead> = match &run.script {
                Some(path) => Box::new(BufReader::new(File::open(path)?)),
                None => Box::new(io::stdin().lock()),
            };
            if ephemeral {
                run_session(MemoryStore::new(), config, input)?;
            } else {
                info!(path = %data_file.display(), "using scene file");
                run_session(JsonFileStore::new(data_file), config, input)?;
            }
        }
        Command::Locate { lat, lon, radius } => {
            let p = to_cartesian(lat, lon, radius);
            println!("{} {} {}", p.x, p.y, p.z);
        }
        Command::Tile {
            lat,
            lon,
            zoom,
            out,
            url_template,
        } => {
            let tile = tile_index(lat, lon, zoom);
            let source = HttpTileSource::new(cli::tile_url_template(url_template))?;
            info!(z = tile.z, x = tile.x, y = tile.y, url = source.url_template(), "fetching tile");
            match source.fetch(tile)? {
                Some(img) => {
                    let out = out.unwrap_or_else(|| {
                        PathBuf::from(format!("tile_{}_{}_{}.png", tile.z, tile.x, tile.y))
                    });
                    img.save(&out)?;
                    println!("{}", out.display());
                }
                None => println!("no image available for tile {}/{}/{}", tile.z, tile.x, tile.y),
            }
        }
    }

    Ok(())
}

/// Feeds a script through a session, one tick per `frame` line.
///
/// End of input quits, and so does a failed read. The scene is saved once
/// more on the way out before any read error is returned.
fn run_session<S: SceneStorage>(
    storage: S,
    config: SessionConfig,
    input: impl BufRead,
) -> Result<S, Box<dyn std::error::Error>> {
    let mut session = Session::open(storage, config)?;
    let renderer = Renderer::default();
    let mut pending: Vec<InputEvent> = Vec::new();
    let mut read_error = None;

    for (index, line) in input.lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                error!(line = index + 1, %err, "script read failed");
                read_error = Some(err);
                break;
            }
        };
        match parse_line(&line) {
            Ok(None) => {}
            Ok(Some(ScriptLine::Events(events))) => pending.extend(events),
            Ok(Some(ScriptLine::Frame)) => {
                let status = session.tick(pending.drain(..));
                draw(&renderer, &session);
                if status == SessionStatus::Quit {
                    break;
                }
            }
            Err(err) => warn!(line = index + 1, %err, "skipping script line"),
        }
    }

    if !session.is_quit() {
        session.tick(pending.drain(..).chain([InputEvent::Quit]));
        draw(&renderer, &session);
    }

    let storage = session.finish()?;
    match read_error {
        Some(err) => Err(err.into()),
        None => Ok(storage),
    }
}

fn draw<S: SceneStorage>(renderer: &Renderer, session: &Session<S>) {
    let view = session.view();
    let frame = renderer.collect(view.scene, view.camera, view.entry);
    debug!(
        frame = session.frame().index,
        commands = frame.commands.len(),
        zoom = frame.view.translate_z,
        "frame collected"
    );
}
