//! The two full-viewport canvases: falling particles and the cursor trail.

pub mod particles;
pub mod surface;
pub mod trail;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, MouseEvent, Window};

use crate::config::EffectsConfig;
use crate::scheduler::{FrameLoop, Handle, Listener};
use crate::utils::browser_rng;
use particles::ParticleField;
use surface::{CanvasSurface, Surface};
use trail::CursorTrail;

pub const PARTICLES_CANVAS_ID: &str = "particles-canvas";
pub const TRAIL_CANVAS_ID: &str = "cursor-trail";

/// Start the particle background on `#particles-canvas`.
pub fn mount_particles(window: &Window, document: &Document, config: &EffectsConfig) -> Result<Vec<Handle>, JsValue> {
    let mut canvas = CanvasSurface::from_id(document, PARTICLES_CANVAS_ID)?;
    canvas.resize_to_viewport(window);
    let (w, h) = canvas.size();

    let field = Rc::new(RefCell::new(ParticleField::new(
        config.particle_count,
        w,
        h,
        config.particle_colors.clone(),
        browser_rng(),
    )));
    let canvas = Rc::new(RefCell::new(canvas));

    let on_resize = {
        let (field, canvas, win) = (field.clone(), canvas.clone(), window.clone());
        Listener::new(window, "resize", move |_| {
            let mut canvas = canvas.borrow_mut();
            canvas.resize_to_viewport(&win);
            let (w, h) = canvas.size();
            field.borrow_mut().resize(w, h);
        })?
    };
    let frames = FrameLoop::animate(field, canvas)?;
    crate::debug_log!("Particle field running with {} particles", config.particle_count);
    Ok(vec![frames.into(), on_resize.into()])
}

/// Start the cursor trail on `#cursor-trail`.
pub fn mount_trail(window: &Window, document: &Document, config: &EffectsConfig) -> Result<Vec<Handle>, JsValue> {
    let mut canvas = CanvasSurface::from_id(document, TRAIL_CANVAS_ID)?;
    canvas.resize_to_viewport(window);

    let trail = Rc::new(RefCell::new(CursorTrail::new(
        config.trail_capacity,
        config.trail_decay_step,
    )));
    let canvas = Rc::new(RefCell::new(canvas));

    let on_resize = {
        let (canvas, win) = (canvas.clone(), window.clone());
        Listener::new(window, "resize", move |_| {
            canvas.borrow_mut().resize_to_viewport(&win);
        })?
    };
    let on_move = {
        let trail = trail.clone();
        Listener::new(document, "mousemove", move |event| {
            if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                trail
                    .borrow_mut()
                    .push(mouse.client_x() as f64, mouse.client_y() as f64);
            }
        })?
    };
    let frames = FrameLoop::animate(trail, canvas)?;
    Ok(vec![frames.into(), on_resize.into(), on_move.into()])
}
