// File: crates/livechart-desktop/src/main.rs
// Summary: Interactive window: renders the chart via RGBA blit (CPU) using winit + softbuffer,
//          with keyboard-driven entry, chart/overlay selection, CSV import, export and streaming.

mod blit;
mod keys;

use std::num::NonZeroU32;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use livechart_core::logging::init_tracing;
use livechart_core::stream::RandomSource;
use livechart_core::{AppConfig, AppState, SampleSink, StreamDriver};
use tracing::{debug, info, warn};
use winit::event::{ElementState, Event, KeyboardInput, ModifiersState, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoopBuilder, EventLoopProxy};
use winit::window::{Window, WindowBuilder};

use keys::{accepts_char, command_for, Command};

#[derive(Parser, Debug)]
#[command(name = "livechart", about = "Interactive chart of comma-separated or streamed numbers")]
struct Args {
    /// Initial manual entry, e.g. "3,1,4,1,5".
    #[arg(long)]
    data: Option<String>,

    /// CSV file to import at startup.
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Theme preset: dark or light.
    #[arg(long, default_value = "dark")]
    theme: String,

    /// Log filter used when RUST_LOG is unset.
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Debug)]
enum UserEvent {
    Sample(f64),
}

/// Delivers produced samples onto the event loop thread.
struct ProxySink(EventLoopProxy<UserEvent>);

impl SampleSink for ProxySink {
    fn deliver(&self, sample: f64) -> bool {
        self.0.send_event(UserEvent::Sample(sample)).is_ok()
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level)?;

    let config = AppConfig::with_theme(&args.theme);
    let mut app = AppState::new(config);
    load_startup(&mut app, args.data.as_deref(), args.csv.as_deref())?;

    let event_loop = EventLoopBuilder::<UserEvent>::with_user_event().build();
    let window = WindowBuilder::new()
        .with_title(window_title(&app))
        .with_inner_size(winit::dpi::LogicalSize::new(config.render.width as f64, config.render.height as f64))
        .build(&event_loop)?;

    let context = unsafe { softbuffer::Context::new(&window) }.map_err(|e| anyhow!("softbuffer context: {e}"))?;
    let mut surface =
        unsafe { softbuffer::Surface::new(&context, &window) }.map_err(|e| anyhow!("softbuffer surface: {e}"))?;

    let stream = config.stream;
    let source = RandomSource::new(stream.low, stream.high);
    StreamDriver::new(app.stream_flag(), stream.tick, source, ProxySink(event_loop.create_proxy())).spawn()?;

    let mut modifiers = ModifiersState::empty();
    info!("window ready: type numbers, Enter to update, Tab to change chart");

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => *cf = ControlFlow::Exit,
                WindowEvent::Resized(_) => window.request_redraw(),
                WindowEvent::ModifiersChanged(m) => modifiers = m,
                WindowEvent::ReceivedCharacter(c) if accepts_char(c, modifiers) => {
                    app.entry_mut().push(c);
                    window.set_title(&window_title(&app));
                }
                WindowEvent::KeyboardInput {
                    input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(key), .. },
                    ..
                } => {
                    if let Some(cmd) = command_for(key, modifiers) {
                        if cmd == Command::Quit {
                            *cf = ControlFlow::Exit;
                            return;
                        }
                        dispatch(&mut app, cmd);
                        window.set_title(&window_title(&app));
                        window.request_redraw();
                    }
                }
                _ => {}
            },
            Event::UserEvent(UserEvent::Sample(v)) => {
                debug!(sample = v, "stream sample");
                let _ = app.on_stream_sample(v);
                window.request_redraw();
            }
            Event::RedrawRequested(_) => {
                if let Err(e) = draw(&window, &mut surface, &app) {
                    warn!(error = %e, "frame dropped");
                }
            }
            _ => {}
        }
    })
}

/// Seed the app from `--data` and `--csv`; either failing aborts startup.
fn load_startup(app: &mut AppState, data: Option<&str>, csv: Option<&Path>) -> Result<()> {
    if let Some(data) = data {
        app.set_entry(data);
        app.update().context("invalid --data entry")?;
    }
    if let Some(csv) = csv {
        app.import(csv).with_context(|| format!("failed to import '{}'", csv.display()))?;
    }
    Ok(())
}

/// Apply one command. Failures are already logged and stored as the status line.
fn dispatch(app: &mut AppState, cmd: Command) {
    let selection = app.selection().clone();
    let _ = match cmd {
        Command::Update => app.update(),
        Command::NextKind => app.set_chart_kind(selection.chart_kind.next()),
        Command::PrevKind => app.set_chart_kind(selection.chart_kind.prev()),
        Command::NextOverlay => app.set_overlay(selection.overlay.next()),
        Command::NextColumn => {
            if app.next_column().is_some() {
                app.update()
            } else {
                Ok(())
            }
        }
        Command::ManualEntry => {
            app.select_column(None);
            app.update()
        }
        Command::ToggleStreaming => {
            app.toggle_streaming();
            Ok(())
        }
        Command::Import => match pick_csv() {
            Some(path) => app.import(path),
            None => Ok(()),
        },
        Command::Export => match pick_export_path() {
            Some(path) => app.export(path).map(|_| ()),
            None => Ok(()),
        },
        Command::Backspace => {
            app.entry_mut().pop();
            Ok(())
        }
        Command::ClearEntry => {
            app.entry_mut().clear();
            Ok(())
        }
        Command::Quit => Ok(()),
    };
}

fn pick_csv() -> Option<PathBuf> {
    rfd::FileDialog::new().add_filter("CSV", &["csv"]).pick_file()
}

fn pick_export_path() -> Option<PathBuf> {
    let default_name = format!("chart_{}.png", chrono::Local::now().format("%Y%m%d_%H%M%S"));
    rfd::FileDialog::new()
        .add_filter("PNG image", &["png"])
        .add_filter("JPEG image", &["jpg", "jpeg"])
        .add_filter("PDF document", &["pdf"])
        .set_file_name(&default_name)
        .save_file()
}

fn window_title(app: &AppState) -> String {
    let sel = app.selection();
    let source = sel.column.as_deref().map_or_else(|| format!("[{}]", app.entry()), |c| format!("column {c}"));
    let streaming = if sel.streaming.is_enabled() { " | streaming" } else { "" };
    format!(
        "LiveChart | {} | overlay: {} | {}{} | {}",
        sel.chart_kind,
        sel.overlay,
        source,
        streaming,
        app.status()
    )
}

fn draw(window: &Window, surface: &mut softbuffer::Surface, app: &AppState) -> Result<()> {
    let size = window.inner_size();
    let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
        return Ok(()); // minimized
    };
    surface.resize(w, h).map_err(|e| anyhow!("resize: {e}"))?;

    let mut opts = app.config().render;
    opts.width = size.width as i32;
    opts.height = size.height as i32;
    let (rgba, _, _, _) = app.chart().render_to_rgba8(&opts)?;

    let mut frame = surface.buffer_mut().map_err(|e| anyhow!("buffer: {e}"))?;
    blit::rgba_to_0rgb(&rgba, &mut frame);
    frame.present().map_err(|e| anyhow!("present: {e}"))?;
    Ok(())
}
