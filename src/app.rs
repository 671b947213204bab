use log::{error, info};
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoopBuilder,
};

use crate::config::{AppConfig, CONFIG_FILE};
use crate::render;
use crate::scenes::Scene;
use crate::utils::{error::AppError, logging};
use crate::window::{GlWindow, InputState, EXIT_KEY};

/// Opens the window, builds `S` and drives the render loop until the window
/// is closed. Every GL object the scene owns is released before the context.
pub fn run<S: Scene>(config: AppConfig) -> Result<(), AppError> {
    config.validate()?;

    let event_loop = EventLoopBuilder::new().build()?;
    let gl_window = GlWindow::new(&event_loop, &config.window)?;
    let mut scene = Some(S::create(&config)?);
    let mut input = InputState::new();
    let mut failure = None;

    info!("Entering render loop for {}", S::NAME);

    event_loop.run(|event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::Resized(size) => gl_window.resize(size.width, size.height),
            WindowEvent::KeyboardInput { event, .. } => input.handle_key_event(&event),
            WindowEvent::Focused(false) => input.release_all(),
            WindowEvent::RedrawRequested => {
                if S::EXIT_ON_KEY && input.process_input(EXIT_KEY) {
                    elwt.exit();
                    return;
                }

                if let Some(scene) = scene.as_mut() {
                    if S::CLEARS {
                        render::clear(&config.render);
                    }
                    scene.draw();
                }

                if let Err(err) = gl_window.swap_buffers() {
                    failure = Some(err);
                    elwt.exit();
                }
            }
            _ => (),
        },
        Event::AboutToWait => gl_window.request_redraw(),
        Event::LoopExiting => {
            // The context is still current here.
            if scene.take().is_some() {
                info!("Released GL resources for {}", S::NAME);
            }
        }
        _ => (),
    })?;

    match failure {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Shared body of every tutorial binary.
pub fn main_with<S: Scene>() -> anyhow::Result<()> {
    let config = AppConfig::load_or_default(CONFIG_FILE);
    logging::init(config.as_ref().map_or("info", |config| config.log_level.as_str()));

    let config = config.map_err(|err| {
        error!("Could not load {}: {}", CONFIG_FILE, err);
        err
    })?;

    info!("Starting {}", S::NAME);
    if let Err(err) = run::<S>(config) {
        error!("{} failed: {}", S::NAME, err);
        return Err(err.into());
    }

    info!("{} exited", S::NAME);
    Ok(())
}
