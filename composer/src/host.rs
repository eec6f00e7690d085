//! DOM host wiring.
//!
//! Binds the composer to the host page: the file input, color picker,
//! per-surface alignment buttons, pointer events on each canvas, and the
//! generate/download controls. The host layer owns no composition logic —
//! every transition goes through [`ComposerCore`] and every repaint goes
//! through [`Composer::render`].
//!
//! ERROR HANDLING
//! ==============
//! A missing or mistyped DOM element fails `boot` outright — the page is
//! unusable without its contract. Per-event failures (render, canvas
//! serialization, transport) are logged and surfaced to the user with a
//! blocking alert; none of them are fatal to the session.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Document, Event, HtmlButtonElement, HtmlCanvasElement, HtmlElement, HtmlImageElement,
    HtmlInputElement, MouseEvent, Url,
};

use crate::composer::{Composer, ComposerCore};
use crate::net::{self, SaveImagesRequest};
use crate::surface::{Point, SurfaceKind};

/// Background color every surface starts with.
const DEFAULT_BACKGROUND: &str = "#ffffff";

type Shared = Rc<RefCell<Composer>>;

/// Build the composer against the live document and attach all listeners.
///
/// # Errors
///
/// Returns `Err` when the DOM structure contract is not met (missing
/// canvas mounts, inputs, or buttons).
pub fn boot() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let composer: Shared = Rc::new(RefCell::new(Composer::new(&document, DEFAULT_BACKGROUND)?));
    composer.borrow().render_all()?;

    wire_pointer_events(&composer)?;
    wire_logo_upload(&document, &composer)?;
    wire_color_picker(&document, &composer)?;
    wire_alignment_buttons(&document, &composer)?;
    wire_generate(&document, &composer)?;
    wire_download(&document)?;

    log::info!("composer ready");
    Ok(())
}

// =============================================================
// Pointer events
// =============================================================

fn wire_pointer_events(composer: &Shared) -> Result<(), JsValue> {
    for kind in SurfaceKind::ALL {
        let canvas = composer.borrow().canvas(kind).clone();

        {
            let composer = composer.clone();
            let canvas_ref = canvas.clone();
            let on_down = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
                let at = canvas_point(&canvas_ref, &event);
                composer.borrow_mut().core.pointer_down(kind, at);
            });
            canvas.add_event_listener_with_callback("mousedown", on_down.as_ref().unchecked_ref())?;
            on_down.forget();
        }

        {
            let composer = composer.clone();
            let canvas_ref = canvas.clone();
            let on_move = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
                let at = canvas_point(&canvas_ref, &event);
                let dragging = composer.borrow_mut().core.pointer_move(at);
                if dragging {
                    redraw(&composer, kind);
                }
            });
            canvas.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
            on_move.forget();
        }

        // A drag that leaves the canvas ends the same way a release does.
        for event_name in ["mouseup", "mouseleave"] {
            let composer = composer.clone();
            let on_up = Closure::<dyn FnMut(MouseEvent)>::new(move |_event: MouseEvent| {
                if let Some(finished) = composer.borrow_mut().core.pointer_up() {
                    redraw(&composer, finished);
                }
            });
            canvas.add_event_listener_with_callback(event_name, on_up.as_ref().unchecked_ref())?;
            on_up.forget();
        }
    }
    Ok(())
}

/// Map a mouse event to canvas coordinates, accounting for CSS scaling.
fn canvas_point(canvas: &HtmlCanvasElement, event: &MouseEvent) -> Point {
    let rect = canvas.get_bounding_client_rect();
    let scale_x = if rect.width() > 0.0 {
        f64::from(canvas.width()) / rect.width()
    } else {
        1.0
    };
    let scale_y = if rect.height() > 0.0 {
        f64::from(canvas.height()) / rect.height()
    } else {
        1.0
    };
    Point::new(
        (f64::from(event.client_x()) - rect.left()) * scale_x,
        (f64::from(event.client_y()) - rect.top()) * scale_y,
    )
}

// =============================================================
// Logo upload
// =============================================================

fn wire_logo_upload(document: &Document, composer: &Shared) -> Result<(), JsValue> {
    let input = input_element(document, "logo-upload")?;
    let composer = composer.clone();
    let input_ref = input.clone();
    let on_change = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        // No file selected is a silent no-op.
        let Some(file) = input_ref.files().and_then(|files| files.get(0)) else {
            return;
        };
        let url = match Url::create_object_url_with_blob(&file) {
            Ok(url) => url,
            Err(err) => {
                log::error!("object URL creation failed: {err:?}");
                return;
            }
        };
        let image = match HtmlImageElement::new() {
            Ok(image) => image,
            Err(err) => {
                log::error!("image element creation failed: {err:?}");
                return;
            }
        };

        // Decode completion is what triggers the four-way placement.
        let composer = composer.clone();
        let image_ref = image.clone();
        let url_ref = url.clone();
        let on_load = Closure::once(Box::new(move |_event: Event| {
            let width = f64::from(image_ref.natural_width());
            let height = f64::from(image_ref.natural_height());
            composer.borrow_mut().set_logo(image_ref.clone(), width, height);
            if let Err(err) = composer.borrow().render_all() {
                log::error!("render failed: {err:?}");
            }
            let _ = Url::revoke_object_url(&url_ref);
        }) as Box<dyn FnOnce(Event)>);
        image.set_onload(Some(on_load.as_ref().unchecked_ref()));
        on_load.forget();
        image.set_src(&url);
    });
    input.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;
    on_change.forget();
    Ok(())
}

// =============================================================
// Color picker
// =============================================================

fn wire_color_picker(document: &Document, composer: &Shared) -> Result<(), JsValue> {
    let input = input_element(document, "color-picker")?;
    let composer = composer.clone();
    let input_ref = input.clone();
    let on_input = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        let color = input_ref.value();
        composer.borrow_mut().core.set_background_color(&color);
        if let Err(err) = composer.borrow().render_all() {
            log::error!("render failed: {err:?}");
        }
    });
    input.add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref())?;
    on_input.forget();
    Ok(())
}

// =============================================================
// Alignment buttons
// =============================================================

fn wire_alignment_buttons(document: &Document, composer: &Shared) -> Result<(), JsValue> {
    wire_button_family(document, composer, ".center-horizontal-btn", |core, kind| {
        core.center_horizontal(kind)
    })?;
    wire_button_family(document, composer, ".center-vertical-btn", |core, kind| {
        core.center_vertical(kind)
    })?;
    wire_button_family(document, composer, ".reset-logo-btn", |core, kind| {
        core.reset_logo(kind)
    })?;
    Ok(())
}

fn wire_button_family(
    document: &Document,
    composer: &Shared,
    selector: &str,
    apply: fn(&mut ComposerCore, SurfaceKind) -> bool,
) -> Result<(), JsValue> {
    let buttons = document.query_selector_all(selector)?;
    for index in 0..buttons.length() {
        let Some(node) = buttons.item(index) else {
            continue;
        };
        let Ok(element) = node.dyn_into::<HtmlElement>() else {
            continue;
        };
        let Some(kind) = element
            .dataset()
            .get("canvas")
            .as_deref()
            .and_then(SurfaceKind::from_attr)
        else {
            log::warn!("{selector} button without a valid data-canvas attribute");
            continue;
        };
        let composer = composer.clone();
        let on_click = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            let changed = apply(&mut composer.borrow_mut().core, kind);
            if changed {
                redraw(&composer, kind);
            }
        });
        element.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }
    Ok(())
}

// =============================================================
// Generate / download
// =============================================================

fn wire_generate(document: &Document, composer: &Shared) -> Result<(), JsValue> {
    let generate = button_element(document, "generate-btn")?;
    let download = button_element(document, "download-btn")?;
    let agency_input = input_element(document, "agency-id")?;
    let composer = composer.clone();
    let on_click = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        let agency_id = agency_input.value().trim().to_owned();
        if agency_id.is_empty() {
            alert("Please enter an Agency ID");
            return;
        }

        // Hide guides and serialize synchronously, before the request.
        let images = {
            let mut guard = composer.borrow_mut();
            guard.core.prepare_export();
            if let Err(err) = guard.render_all() {
                log::error!("render failed: {err:?}");
                alert("An error occurred. Please try again.");
                return;
            }
            match guard.export_images() {
                Ok(images) => images,
                Err(err) => {
                    log::error!("canvas serialization failed: {err:?}");
                    alert("An error occurred. Please try again.");
                    return;
                }
            }
        };

        let request = SaveImagesRequest { agency_id, images };
        let download = download.clone();
        spawn_local(async move {
            match net::save_images(&request).await {
                Ok(response) if response.success => {
                    download.set_disabled(false);
                    alert("Images generated successfully!");
                }
                Ok(response) => {
                    alert(&format!("Error: {}", response.error.unwrap_or_default()));
                }
                Err(err) => {
                    log::error!("save-images request failed: {err}");
                    alert("An error occurred. Please try again.");
                }
            }
        });
    });
    generate.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();
    Ok(())
}

fn wire_download(document: &Document) -> Result<(), JsValue> {
    let download = button_element(document, "download-btn")?;
    let agency_input = input_element(document, "agency-id")?;
    let on_click = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        let agency_id = agency_input.value().trim().to_owned();
        if agency_id.is_empty() {
            alert("Please enter an Agency ID");
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.location().set_href(&format!("/download/{agency_id}")) {
            log::error!("navigation failed: {err:?}");
        }
    });
    download.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();
    Ok(())
}

// =============================================================
// DOM helpers
// =============================================================

fn input_element(document: &Document, id: &str) -> Result<HtmlInputElement, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing element: {id}")))?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| JsValue::from_str(&format!("element is not an input: {id}")))
}

fn button_element(document: &Document, id: &str) -> Result<HtmlButtonElement, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing element: {id}")))?
        .dyn_into::<HtmlButtonElement>()
        .map_err(|_| JsValue::from_str(&format!("element is not a button: {id}")))
}

fn redraw(composer: &Shared, kind: SurfaceKind) {
    if let Err(err) = composer.borrow().render(kind) {
        log::error!("render failed: {err:?}");
    }
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
