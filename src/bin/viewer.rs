//! Interactive window showing the board as it evolves

use std::path::PathBuf;

use clap::Parser;
use macroquad::prelude::*;
use toroidal_life::{
    GameState, LifeEngine, save_board_to_file,
    application::Camera,
    cli::{EngineArgs, init_logging},
    input::{self, ViewerAction},
    rendering,
};

#[derive(Parser)]
#[command(name = "viewer")]
#[command(version)]
#[command(about = "Watch a life-like automaton evolve", long_about = None)]
struct Cli {
    #[command(flatten)]
    engine: EngineArgs,

    /// Start running instead of paused
    #[arg(long)]
    play: bool,

    /// Directory for boards saved with the S key
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// Pixels per cell side in saved images
    #[arg(long, default_value = "4")]
    scale: u32,
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Toroidal Life".to_owned(),
        window_width: 1000,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    init_logging();
    let cli = Cli::parse();

    let engine = match cli.engine.build_engine() {
        Ok(engine) => engine,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    let mut state = GameState::new(engine).with_running(cli.play);
    let mut camera = Camera::new();
    let mut pan_anchor = None;
    let mut status: Option<String> = None;

    loop {
        let mouse_pos = mouse_position();
        input::handle_zoom(&mut camera);
        input::handle_pan(&mut camera, mouse_pos, &mut pan_anchor);

        let (next, action) = input::process_keyboard_input(state, &mut camera);
        state = next;
        match action {
            ViewerAction::Quit => break,
            ViewerAction::Save => {
                let path = cli.output.join(format!("{}.png", state.engine.generation()));
                status = Some(match save_board_to_file(&state.engine, &path, cli.scale) {
                    Ok(()) => format!("Saved {}", path.display()),
                    Err(e) => {
                        log::error!("{e}");
                        "Save failed, see log".to_owned()
                    }
                });
            }
            ViewerAction::None => {}
        }

        state = state.tick(get_frame_time());

        let render_start = std::time::Instant::now();
        clear_background(BLACK);
        rendering::draw_board(&state.engine, &camera);
        rendering::draw_panel(&state, &camera, status.as_deref());
        state.last_render_time_ms = render_start.elapsed().as_secs_f32() * 1000.0;

        next_frame().await;
    }
}
