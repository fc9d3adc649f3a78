// File: crates/physviz-scripts/src/viewer.rs
// Summary: Interactive display of a rendered figure via RGBA blit (CPU) using winit + softbuffer.

use std::num::NonZeroU32;

use anyhow::{anyhow, Result};
use physviz_core::{Figure, RenderOptions};
use tracing::{debug, error};
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

/// Window size for a figure before any resize, logical pixels.
const INITIAL_DPI: f32 = 80.0;

/// Open a window showing `fig`, re-rendered to fit on every resize.
/// Returns only if the window cannot be created; closing it exits the process.
pub fn show(fig: &Figure, title: &str) -> Result<()> {
    let mut fig = fig.clone();
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(title)
        .with_inner_size(winit::dpi::LogicalSize::new(
            fig.width_in * INITIAL_DPI,
            fig.height_in * INITIAL_DPI,
        ))
        .build(&event_loop)
        .map_err(|e| anyhow!("building window: {e}"))?;

    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| anyhow!("softbuffer context: {e}"))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow!("softbuffer surface: {e}"))?;

    let opts = RenderOptions::default();
    let mut size = window.inner_size();

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested
                | WindowEvent::KeyboardInput {
                    input:
                        KeyboardInput {
                            state: ElementState::Pressed,
                            virtual_keycode: Some(VirtualKeyCode::Escape),
                            ..
                        },
                    ..
                } => {
                    *cf = ControlFlow::Exit;
                }
                WindowEvent::Resized(new_size) => {
                    size = new_size;
                    window.request_redraw();
                }
                _ => {}
            },
            Event::RedrawRequested(_) => {
                let (w, h) = (size.width.max(1), size.height.max(1));
                let (Some(nw), Some(nh)) = (NonZeroU32::new(w), NonZeroU32::new(h)) else {
                    return;
                };
                if let Err(e) = surface.resize(nw, nh) {
                    error!("resize error: {e}");
                    return;
                }

                // Largest DPI at which the whole page fits the window
                fig.dpi = (w as f32 / fig.width_in).min(h as f32 / fig.height_in);
                let (rgba, fw, fh, stride) = match fig.render_to_rgba8(&opts) {
                    Ok(frame) => frame,
                    Err(e) => {
                        error!("render error: {e:#}");
                        return;
                    }
                };
                debug!(w, h, fw, fh, "redraw");

                let mut frame = match surface.buffer_mut() {
                    Ok(frame) => frame,
                    Err(e) => {
                        error!("frame error: {e}");
                        return;
                    }
                };
                // Letterbox in white, then copy rows as 0RGB
                frame.fill(0x00FF_FFFF);
                let cols = (fw as usize).min(w as usize);
                let rows = (fh as usize).min(h as usize);
                for y in 0..rows {
                    let src = &rgba[y * stride..y * stride + cols * 4];
                    let dst = &mut frame[y * w as usize..y * w as usize + cols];
                    for (d, px) in dst.iter_mut().zip(src.chunks_exact(4)) {
                        *d = ((px[0] as u32) << 16) | ((px[1] as u32) << 8) | px[2] as u32;
                    }
                }
                if let Err(e) = frame.present() {
                    error!("present error: {e}");
                }
            }
            _ => {}
        }
    })
}
