#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlCanvasElement, HtmlElement};

use gradient_showcase::canvas::{CanvasEffect, CanvasSurface};
use gradient_showcase::drift::HomeDrift;
use gradient_showcase::driver::{DriverState, Effect};
use gradient_showcase::error::FrameError;
use gradient_showcase::input::Viewport;
use gradient_showcase::linear::{LinearShift, BACKGROUND_SIZE};
use gradient_showcase::mount::EffectMount;
use gradient_showcase::plane::PlaneEffect;
use gradient_showcase::random::XorShift;
use gradient_showcase::shaders::ShaderVariant;
use gradient_showcase::wasm::{
    drive, Canvas2d, DomCircles, DomStyle, GlPlane, GlSurface, WindowEvents,
};

wasm_bindgen_test_configure!(run_in_browser);

fn page() -> (web_sys::Window, Document, HtmlElement) {
    let window = web_sys::window().unwrap();
    let document = window.document().unwrap();
    let body = document.body().unwrap();
    (window, document, body)
}

fn attached_canvas(document: &Document, body: &HtmlElement) -> HtmlCanvasElement {
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();
    body.append_child(&canvas).unwrap();
    canvas
}

#[wasm_bindgen_test]
fn linear_mount_styles_and_removes_its_layer() {
    let (window, document, body) = page();
    let before = body.child_element_count();
    let effect = LinearShift::new(DomStyle::new(&document, &body).unwrap());
    let driver = drive(&window, effect);
    let now = window.performance().unwrap().now();

    let mut mount = EffectMount::mount(driver.clone(), WindowEvents::new(&window), now).unwrap();
    assert_eq!(driver.borrow().state(), DriverState::Running);
    let layer = body.last_element_child().unwrap().dyn_into::<HtmlElement>().unwrap();
    assert_eq!(layer.style().get_property_value("background-size").unwrap(), BACKGROUND_SIZE);

    mount.teardown();
    assert_eq!(driver.borrow().state(), DriverState::Stopped);
    assert_eq!(driver.borrow().ledger().stops, 1);
    assert_eq!(body.child_element_count(), before);
}

#[wasm_bindgen_test]
fn canvas_effect_draws_then_detaches() {
    let (_, document, body) = page();
    let canvas = attached_canvas(&document, &body);
    let mut surface = Canvas2d::acquire(canvas.clone()).unwrap();
    surface.resize(Viewport::new(64, 48));

    let mut effect = CanvasEffect::new(surface, XorShift::seeded(3), 30.0);
    effect.frame(0.5);
    assert_eq!(effect.surface().viewport(), Viewport::new(64, 48));

    effect.teardown();
    effect.teardown();
    assert!(!canvas.is_connected());
}

#[wasm_bindgen_test]
fn noise_plane_releases_its_canvas_or_reports_unavailable() {
    let (_, document, body) = page();
    let canvas = attached_canvas(&document, &body);

    let surface = match GlSurface::acquire(canvas.clone()) {
        Ok(surface) => surface,
        Err(err) => {
            // Headless runners without a GPU.
            assert!(matches!(err, FrameError::Unavailable(_) | FrameError::Platform(_)));
            canvas.remove();
            return;
        }
    };
    let plane = GlPlane::new(surface, ShaderVariant::Noise).unwrap();
    let mut effect = PlaneEffect::new(plane, ShaderVariant::Noise, Viewport::new(32, 32));
    assert_eq!(canvas.width(), 32);
    effect.frame(1.0);

    effect.teardown();
    assert!(effect.is_released());
    assert!(!canvas.is_connected());
}

#[wasm_bindgen_test]
fn home_circles_turn_then_leave_the_page() {
    let (_, document, body) = page();
    let before = body.child_element_count();
    let mut effect = HomeDrift::new(DomCircles::new(&document, &body).unwrap());

    effect.frame(5.0);
    let root = body.last_element_child().unwrap();
    assert_eq!(root.child_element_count(), 5);
    let first = root.first_element_child().unwrap().dyn_into::<HtmlElement>().unwrap();
    let transform = first.style().get_property_value("transform").unwrap();
    assert!(transform.contains("rotate(180"), "{}", transform);

    effect.teardown();
    assert_eq!(body.child_element_count(), before);
}
