use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, MouseEvent, Window};

use super::viewport::{frame_rotation, frame_transform, tilt_angles, tilt_transform, TILT_RESET};
use crate::canvas::surface::viewport_size;
use crate::dom_utils::{query_all, query_one, set_style};
use crate::scheduler::Listener;

/// Pointer-following 3D tilt on every `.tilt-3d` card.
pub fn mount_cards(document: &Document) -> Result<Vec<Listener>, JsValue> {
    let mut listeners = Vec::new();
    for card in query_all(document, ".tilt-3d") {
        let moving = card.clone();
        listeners.push(Listener::new(&card, "mousemove", move |event| {
            let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let rect = moving.get_bounding_client_rect();
            let x = mouse.client_x() as f64 - rect.left();
            let y = mouse.client_y() as f64 - rect.top();
            let (rx, ry) = tilt_angles(x, y, rect.width(), rect.height());
            set_style(&moving, "transform", &tilt_transform(rx, ry));
        })?);

        let leaving = card.clone();
        listeners.push(Listener::new(&card, "mouseleave", move |_| {
            set_style(&leaving, "transform", TILT_RESET);
        })?);
    }
    Ok(listeners)
}

/// The portrait frame leans toward the pointer anywhere on the page.
pub fn mount_image_frame(window: &Window, document: &Document) -> Result<Option<Listener>, JsValue> {
    let Some(frame) = query_one(document, ".image-frame-3d") else {
        return Ok(None);
    };
    let window = window.clone();
    let listener = Listener::new(document, "mousemove", move |event| {
        let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        let (w, h) = viewport_size(&window);
        let (x, y) = frame_rotation(mouse.client_x() as f64, mouse.client_y() as f64, w, h);
        set_style(&frame, "transform", &frame_transform(x, y));
    })?;
    Ok(Some(listener))
}
