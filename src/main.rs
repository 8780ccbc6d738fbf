// Hero Forge host
// Owns the window, the renderer and the frame pacer; everything the player
// sees and does is decided by game::App.

use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use winit::{
    dpi::LogicalSize,
    event::{Event as WinitEvent, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::Window,
};

use hero_forge::engine::{FramePacer, Renderer, WinitTranslator};
use hero_forge::game::{App, AppFlow};
use hero_forge::{Args, GameConfig, init_logging};

// ============================================================================
// MAIN
// ============================================================================

#[allow(deprecated)] // EventLoop::run / create_window closure style
fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    let config = GameConfig::from(&args);
    log::info!(
        "starting {}x{} at {} fps, name policy {:?}",
        config.width,
        config.height,
        config.fps,
        config.name_policy
    );

    let event_loop = EventLoop::new().context("failed to create event loop")?;

    let window_attributes = Window::default_attributes()
        .with_title("Hero Forge")
        .with_inner_size(LogicalSize::new(config.width, config.height))
        .with_resizable(false);

    let window = Arc::new(
        event_loop
            .create_window(window_attributes)
            .context("failed to create window")?,
    );

    let mut renderer =
        pollster::block_on(Renderer::new(window.clone())).context("failed to initialise graphics")?;
    let mut translator = WinitTranslator::new(window.scale_factor());
    let mut app = App::new(&config);
    let mut pacer = FramePacer::new(config.fps, Instant::now());

    let mut frame_count = 0;
    let mut last_fps_update = Instant::now();

    event_loop.run(move |event, control_flow| match event {
        WinitEvent::WindowEvent {
            ref event,
            window_id,
        } if window_id == window.id() => match event {
            WindowEvent::CloseRequested => control_flow.exit(),
            WindowEvent::Resized(physical_size) => {
                renderer.resize(*physical_size);
            }
            WindowEvent::RedrawRequested => {
                app.tick();
                match renderer.render(&app.draw()) {
                    Ok(()) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        renderer.resize(renderer.size())
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("GPU out of memory, exiting");
                        control_flow.exit();
                    }
                    Err(e) => log::warn!("dropped frame: {e:?}"),
                }

                let now = Instant::now();
                pacer.advance(now);

                frame_count += 1;
                if (now - last_fps_update).as_secs_f32() >= 1.0 {
                    log::debug!("FPS: {frame_count}");
                    frame_count = 0;
                    last_fps_update = now;
                }
            }
            other => {
                if let WindowEvent::ScaleFactorChanged { scale_factor, .. } = other {
                    renderer.set_scale_factor(*scale_factor);
                }
                let Some(input) = translator.translate(other) else {
                    return;
                };
                if app.handle_event(&input) == AppFlow::Exit {
                    control_flow.exit();
                }
                // Desktop has no on-screen keyboard to show or hide.
                while let Some(focus) = app.take_focus_change() {
                    log::debug!("text focus {focus:?}");
                }
            }
        },
        WinitEvent::AboutToWait => {
            if pacer.is_due(Instant::now()) {
                window.request_redraw();
            }
            control_flow.set_control_flow(ControlFlow::WaitUntil(pacer.deadline()));
        }
        _ => {}
    })?;

    Ok(())
}
