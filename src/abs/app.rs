//! SDL2 and OpenGL application management.
//!
//! This module defines the [`App`] struct which encapsulates the SDL2
//! and OpenGL context necessary for creating a windowed application.

use std::sync::Arc;

use glam::Vec2;
use glow::HasContext;
use sdl2::{event::Event, event::WindowEvent, keyboard::Keycode};

use crate::{
    input::{KeyboardState, MouseState},
    settings::Settings,
};

/// The [`App`] struct encapsulates the SDL2 and OpenGL context.
pub struct App {
    pub sdl: sdl2::Sdl,
    pub video_subsystem: sdl2::VideoSubsystem,
    pub window: sdl2::video::Window,
    pub gl_context: sdl2::video::GLContext,
    pub gl: Arc<glow::Context>,
    pub event_pump: sdl2::EventPump,
}

impl App {
    /// Creates a window of the configured size with an OpenGL 3.3 core context.
    pub fn new(title: &str, settings: &Settings) -> Result<Self, String> {
        let sdl = sdl2::init()?;
        let video_subsystem = sdl.video()?;
        let gl_attr = video_subsystem.gl_attr();
        gl_attr.set_context_profile(sdl2::video::GLProfile::Core);
        gl_attr.set_context_version(3, 3);
        gl_attr.set_depth_size(24);

        let window = video_subsystem
            .window(title, settings.width, settings.height)
            .opengl()
            .resizable()
            .position_centered()
            .build()
            .map_err(|e| format!("Failed to create window: {}", e))?;
        let gl_context = window.gl_create_context()?;
        window.gl_make_current(&gl_context)?;

        let interval = if settings.vsync {
            sdl2::video::SwapInterval::VSync
        } else {
            sdl2::video::SwapInterval::Immediate
        };
        if let Err(e) = video_subsystem.gl_set_swap_interval(interval) {
            log::warn!("Could not set swap interval: {}", e);
        }

        let gl = unsafe {
            glow::Context::from_loader_function(|s| {
                video_subsystem.gl_get_proc_address(s) as *const _
            })
        };
        let event_pump = sdl.event_pump()?;
        let gl = Arc::new(gl);

        let (width, height) = window.drawable_size();
        unsafe {
            let (x, y, w, h) = viewport_rect(width, height);
            gl.viewport(x, y, w, h);
            log::info!(
                "{} opened: {}x{}, {}",
                title,
                width,
                height,
                gl.get_parameter_string(glow::VERSION)
            );
        }

        Ok(Self {
            sdl,
            video_subsystem,
            window,
            gl_context,
            gl,
            event_pump,
        })
    }

    /// Drains pending events into the input state.
    ///
    /// Resizes the viewport to follow the window. Returns `false` once the
    /// window is closed or Escape is pressed.
    pub fn pump_events(&mut self, keyboard: &mut KeyboardState, mouse: &mut MouseState) -> bool {
        keyboard.begin_frame();
        mouse.begin_frame();

        let mut running = true;
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => running = false,
                Event::Window {
                    win_event: WindowEvent::SizeChanged(..),
                    ..
                } => {
                    // The viewport is in framebuffer pixels, not window coordinates.
                    let (width, height) = self.window.drawable_size();
                    log::debug!("Framebuffer resized to {}x{}", width, height);
                    let (x, y, w, h) = viewport_rect(width, height);
                    unsafe {
                        self.gl.viewport(x, y, w, h);
                    }
                }
                Event::KeyDown {
                    keycode: Some(keycode),
                    repeat: false,
                    ..
                } => keyboard.key_down(keycode),
                Event::KeyUp {
                    keycode: Some(keycode),
                    ..
                } => keyboard.key_up(keycode),
                Event::MouseMotion {
                    x, y, xrel, yrel, ..
                } => mouse.motion(
                    Vec2::new(x as f32, y as f32),
                    Vec2::new(xrel as f32, yrel as f32),
                ),
                Event::MouseWheel { x, y, .. } => mouse.scroll(Vec2::new(x as f32, y as f32)),
                Event::MouseButtonDown { mouse_btn, .. } => mouse.button_down(mouse_btn),
                Event::MouseButtonUp { mouse_btn, .. } => mouse.button_up(mouse_btn),
                _ => {}
            }
        }
        running
    }

    /// Hides the cursor and reports relative motion, for mouse-look.
    pub fn capture_mouse(&self, captured: bool) {
        self.sdl.mouse().set_relative_mouse_mode(captured);
    }

    pub fn aspect_ratio(&self) -> f32 {
        let (width, height) = self.window.drawable_size();
        aspect_ratio(width, height)
    }

    pub fn swap(&self) {
        self.window.gl_swap_window();
    }
}

/// Viewport covering the whole framebuffer of the given size.
pub fn viewport_rect(width: u32, height: u32) -> (i32, i32, i32, i32) {
    (0, 0, width as i32, height as i32)
}

/// Width over height. A minimized window reports zero height.
pub fn aspect_ratio(width: u32, height: u32) -> f32 {
    width as f32 / height.max(1) as f32
}
