// File: crates/window-demo/src/main.rs
// Summary: Windowed driver rendering the heat map to a window via RGBA blit (CPU)
// using winit + softbuffer, with pointer-driven hover tooltips.

use heatmap_core::theme::{self, Theme};
use heatmap_core::{HeatMap, RenderOptions, Tooltip, TooltipState};
use std::num::NonZeroU32;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, Event, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

const WINDOW_TITLE: &str = "Monthly Global Land-Surface Temperature";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Arg: endpoint override, else the fixed dataset URL.
    let url = std::env::args().nth(1).unwrap_or_else(|| heatmap_data::DATASET_URL.to_string());

    // One fetch before the event loop; a failed load aborts with no window.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("tokio runtime");
    let dataset = match runtime.block_on(heatmap_data::load_from(&url)) {
        Ok(dataset) => dataset,
        Err(err) => {
            error!("failed to load dataset: {err}");
            std::process::exit(1);
        }
    };
    info!(observations = dataset.monthly_variance.len(), "dataset loaded");

    let chart = match HeatMap::new(dataset) {
        Ok(chart) => chart,
        Err(err) => {
            error!("dataset rejected: {err}");
            std::process::exit(1);
        }
    };

    // Window + softbuffer setup
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(WINDOW_TITLE)
        .with_inner_size(winit::dpi::LogicalSize::new(1600.0, 700.0))
        .build(&event_loop)
        .expect("build window");

    let context = unsafe { softbuffer::Context::new(&window) }.expect("softbuffer context");
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }.expect("softbuffer surface");

    let mut size = window.inner_size();
    let mut tooltips = TooltipState::new();
    let themes = theme::presets();
    let mut theme_idx = 0usize;

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, window_id: _ } => match event {
                WindowEvent::CloseRequested => {
                    *cf = ControlFlow::Exit;
                }
                WindowEvent::Resized(new_size) => {
                    size = new_size;
                    window.request_redraw();
                }
                WindowEvent::CursorMoved { position, .. } => {
                    let pointer = (position.x as f32, position.y as f32);
                    update_tooltip(&chart, &mut tooltips, pointer, size);
                    window.request_redraw();
                }
                WindowEvent::CursorLeft { .. } => {
                    // Dismissing with no tooltip visible is a no-op.
                    tooltips.dismiss();
                    window.request_redraw();
                }
                WindowEvent::KeyboardInput { input, .. } => {
                    if input.state != ElementState::Pressed {
                        return;
                    }
                    match input.virtual_keycode {
                        Some(VirtualKeyCode::T) => {
                            theme_idx = (theme_idx + 1) % themes.len();
                            window.set_title(&format!(
                                "{} | {}",
                                WINDOW_TITLE,
                                themes.get(theme_idx).map(|t| t.name).unwrap_or("light")
                            ));
                            window.request_redraw();
                        }
                        Some(VirtualKeyCode::Escape) => {
                            *cf = ControlFlow::Exit;
                        }
                        _ => {}
                    }
                }
                _ => {}
            },
            Event::RedrawRequested(_) => {
                let w = size.width.max(1);
                let h = size.height.max(1);
                surface
                    .resize(NonZeroU32::new(w).unwrap(), NonZeroU32::new(h).unwrap())
                    .ok();

                let mut opts = render_options(w, h, tooltips.active().cloned());
                opts.theme = themes.get(theme_idx).copied().unwrap_or(Theme::light());
                let (rgba, _, _, _) = match chart.render_to_rgba8(&opts) {
                    Ok(frame) => frame,
                    Err(err) => {
                        error!("render failed: {err:#}");
                        return;
                    }
                };

                // Convert RGBA to the u32 layout softbuffer expects.
                let mut frame = surface.buffer_mut().expect("frame");
                let max_px = frame.len().min(rgba.len() / 4);
                for (i, px) in rgba.chunks_exact(4).take(max_px).enumerate() {
                    let r = px[0] as u32;
                    let g = px[1] as u32;
                    let b = px[2] as u32;
                    let a = px[3] as u32;
                    frame[i] = (a << 24) | (r << 16) | (g << 8) | b;
                }
                if let Err(e) = frame.present() {
                    error!("present error: {e:?}");
                }
            }
            _ => {}
        }
    });
}

fn render_options(width: u32, height: u32, tooltip: Option<Tooltip>) -> RenderOptions {
    RenderOptions {
        width: width as i32,
        height: height as i32,
        tooltip,
        ..RenderOptions::default()
    }
}

fn update_tooltip(
    chart: &HeatMap,
    tooltips: &mut TooltipState,
    pointer: (f32, f32),
    size: PhysicalSize<u32>,
) {
    let opts = render_options(size.width.max(1), size.height.max(1), None);
    match chart.cell_at(&opts, pointer.0, pointer.1) {
        Some(hit) => tooltips.show(Tooltip::for_cell(&hit, pointer)),
        None => {
            tooltips.dismiss();
        }
    }
}
