use anyhow::{Context, Result};
use log::{error, info, trace};
use pixel_snake::config::Settings;
use pixel_snake::draw::Renderer;
use pixel_snake::game::Game;
use pixel_snake::input::Command;
use pixel_snake::timing::{Clock, TickRate};
use pixels::{Pixels, SurfaceTexture};
use std::collections::VecDeque;
use std::path::PathBuf;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, KeyboardInput, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;
use winit_input_helper::WinitInputHelper;

fn title(rate: TickRate) -> String {
    format!("Snake - {} ticks/s", rate.per_second())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let settings = Settings::load(config_path.as_deref())?;
    info!("starting with {:?}", settings);

    let event_loop = EventLoop::new();
    let mut input = WinitInputHelper::new();

    let window = WindowBuilder::new()
        .with_title(title(settings.tick_rate()))
        .with_inner_size(LogicalSize::new(settings.screen_width, settings.screen_height))
        .with_resizable(false)
        .build(&event_loop)
        .context("creating window")?;

    let mut pixels = {
        let window_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, &window);
        Pixels::new(settings.screen_width, settings.screen_height, surface_texture)
            .context("creating pixel surface")?
    };

    let mut game = Game::new(&settings);
    let mut renderer = Renderer::new();
    let mut clock = Clock::new();
    // key presses since the last tick, in arrival order
    let mut queued: VecDeque<Command> = VecDeque::new();

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Poll;

        if let Event::WindowEvent {
            event:
                WindowEvent::KeyboardInput {
                    input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(key), .. },
                    ..
                },
            ..
        } = &event
        {
            match Command::from_key(*key) {
                Some(Command::Quit) => {
                    info!("quit requested");
                    *control_flow = ControlFlow::Exit;
                    return;
                }
                Some(cmd) => queued.push_back(cmd),
                None => {}
            }
        }

        if let Event::RedrawRequested(_) = event {
            renderer.render(&game, pixels.frame_mut());
            if let Err(err) = pixels.render() {
                error!("render failed: {err}");
                *control_flow = ControlFlow::Exit;
                return;
            }
        }

        if input.update(&event) {
            if input.close_requested() || input.destroyed() {
                *control_flow = ControlFlow::Exit;
                return;
            }

            if clock.tick_due(game.tick_rate()) {
                let rate = game.tick_rate();
                let outcome = game.tick(queued.drain(..));
                trace!("tick {}: {:?}", game.ticks(), outcome);
                if game.tick_rate() != rate {
                    window.set_title(&title(game.tick_rate()));
                }
            }

            window.request_redraw();
        }
    });
}
