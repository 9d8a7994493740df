//! Hash-routed page shell. Exactly one backdrop is mounted at a time; the
//! previous one is torn down before the next is built.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Document, Element, Event, HtmlCanvasElement, KeyboardEvent, Window};

use super::events::{window_viewport, WindowEvents};
use super::render::{GlPlane, GlShapes, GlSurface};
use super::scheduler::drive;
use super::surfaces::{layer, Canvas2d, DomBlobs, DomCircles, DomStyle};
use crate::blobs::BlobField;
use crate::canvas::{canvas_style, CanvasEffect, CanvasSurface};
use crate::config::ShowcaseConfig;
use crate::drift::HomeDrift;
use crate::driver::Effect;
use crate::error::FrameError;
use crate::linear::LinearShift;
use crate::mount::{EffectMount, Mounted};
use crate::plane::PlaneEffect;
use crate::routes::{Backdrop, Route, HOME_BACKGROUND};
use crate::scene::{self, ShapeScene, SHAPES};
use crate::shaders::ShaderVariant;

const FULL_BLEED: &str = "position:absolute;inset:0;width:100%;height:100%;";
const NAV_HINT: &str = "Use navigation dots above or arrow keys to navigate";

type Mounting = Result<Option<Box<dyn Mounted>>, FrameError>;

pub struct Showcase {
    window: Window,
    document: Document,
    config: ShowcaseConfig,
    route: Route,
    mounted: Option<Box<dyn Mounted>>,
}

/// Renders the route in the current hash and keeps following it.
pub fn boot(window: Window, config: ShowcaseConfig) -> Result<(), FrameError> {
    let document = window
        .document()
        .ok_or_else(|| FrameError::Unavailable("document".into()))?;
    let initial = current_route(&window);
    let showcase = Rc::new(RefCell::new(Showcase {
        window: window.clone(),
        document,
        config,
        route: initial,
        mounted: None,
    }));
    showcase.borrow_mut().show(initial);

    // Both listeners live as long as the page.
    let app = showcase.clone();
    let on_hash = Closure::wrap(Box::new(move |_event: Event| {
        let mut app = app.borrow_mut();
        let route = current_route(&app.window);
        app.show(route);
    }) as Box<dyn FnMut(Event)>);
    window.add_event_listener_with_callback("hashchange", on_hash.as_ref().unchecked_ref())?;
    on_hash.forget();

    let app = showcase;
    let on_key = Closure::wrap(Box::new(move |event: KeyboardEvent| {
        let app = app.borrow();
        let target = match event.key().as_str() {
            "ArrowRight" => app.route.next(),
            "ArrowLeft" => app.route.previous(),
            _ => return,
        };
        app.navigate(target);
    }) as Box<dyn FnMut(KeyboardEvent)>);
    window.add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref())?;
    on_key.forget();

    Ok(())
}

fn current_route(window: &Window) -> Route {
    Route::from_hash(&window.location().hash().unwrap_or_default())
}

impl Showcase {
    fn navigate(&self, route: Route) {
        log::debug!("navigating to {}", route.path());
        if let Err(err) = self.window.location().set_hash(route.path()) {
            log::warn!("hash update failed: {:?}", err);
        }
    }

    fn show(&mut self, route: Route) {
        if let Some(mut previous) = self.mounted.take() {
            previous.teardown();
            log::info!("unmounted {}", self.route.label());
        }
        self.route = route;

        if let Err(err) = self.render_nav().and_then(|_| self.render_content()) {
            log::warn!("page markup for {} failed: {}", route.label(), err);
        }

        match self.mount_backdrop(route.backdrop()) {
            Ok(mounted) => {
                log::info!("mounted {} ({:?})", route.label(), route.backdrop());
                self.mounted = mounted;
            }
            Err(err) => log::warn!("{:?} backdrop failed: {}", route.backdrop(), err),
        }
    }

    fn now(&self) -> f64 {
        self.window.performance().map(|p| p.now()).unwrap_or(0.0)
    }

    fn by_id(&self, id: &str) -> Result<Element, FrameError> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| FrameError::Unavailable(format!("#{}", id)))
    }

    fn child(
        &self,
        parent: &Element,
        tag: &str,
        class: &str,
        text: &str,
    ) -> Result<Element, FrameError> {
        let element = self.document.create_element(tag)?;
        if !class.is_empty() {
            element.set_class_name(class);
        }
        if !text.is_empty() {
            element.set_text_content(Some(text));
        }
        parent.append_child(&element)?;
        Ok(element)
    }

    fn link(
        &self,
        parent: &Element,
        route: Route,
        class: &str,
        text: &str,
    ) -> Result<Element, FrameError> {
        let anchor = self.child(parent, "a", class, text)?;
        anchor.set_attribute("href", route.path())?;
        anchor.set_attribute("title", route.label())?;
        Ok(anchor)
    }

    fn render_nav(&self) -> Result<(), FrameError> {
        let nav = self.by_id("nav")?;
        nav.set_inner_html("");
        for &route in Route::all() {
            let class = if route == self.route {
                "nav-indicator active"
            } else {
                "nav-indicator"
            };
            self.link(&nav, route, class, "")?;
        }
        Ok(())
    }

    fn render_content(&self) -> Result<(), FrameError> {
        let content = self.by_id("content")?;
        content.set_inner_html("");
        let copy = self.route.copy();

        self.child(&content, "h1", "title", copy.title)?;
        self.child(&content, "h2", "subtitle", copy.subtitle)?;
        self.child(&content, "p", "description", copy.description)?;

        if self.route == Route::Home {
            self.link(&content, Route::Gradient1, "start", "Start Demo")?;
            self.child(&content, "p", "hint", NAV_HINT)?;
            return Ok(());
        }

        let pre = self.child(&content, "pre", "snippet", "")?;
        self.child(&pre, "code", "", &copy.snippet.join("\n"))?;

        let footer = self.child(&content, "div", "pager", "")?;
        let (back, forward) = (self.route.previous(), self.route.next());
        self.link(&footer, back, "previous", self.route.back_label())?;
        if let Some(progress) = self.route.progress() {
            self.child(&footer, "span", "progress", &progress)?;
        }
        self.link(&footer, forward, "next", self.route.forward_label())?;
        Ok(())
    }

    fn canvas(&self, parent: &Element, css: &str) -> Result<HtmlCanvasElement, FrameError> {
        let canvas = self
            .document
            .create_element("canvas")?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| FrameError::Platform("canvas element has unexpected type".into()))?;
        canvas.set_attribute("style", css)?;
        parent.append_child(&canvas)?;
        Ok(canvas)
    }

    fn webgl(&self, parent: &Element, css: &str) -> Result<GlSurface, FrameError> {
        let canvas = self.canvas(parent, css)?;
        GlSurface::acquire(canvas.clone()).map_err(|err| {
            canvas.remove();
            err
        })
    }

    fn launch<E: Effect + 'static>(&self, effect: E) -> Mounting {
        let driver = drive(&self.window, effect);
        let mount = EffectMount::mount(driver, WindowEvents::new(&self.window), self.now())?;
        let mounted: Box<dyn Mounted> = Box::new(mount);
        Ok(Some(mounted))
    }

    fn still(&self, parent: &Element, background: &str) -> Result<(), FrameError> {
        layer(&self.document, parent, &format!("{}background:{};", FULL_BLEED, background))?;
        Ok(())
    }

    fn mount_backdrop(&self, backdrop: Backdrop) -> Mounting {
        let container = self.by_id("background")?;
        container.set_inner_html("");
        let viewport = window_viewport(&self.window);

        match backdrop {
            Backdrop::Still => {
                self.still(&container, HOME_BACKGROUND)?;
                self.launch(HomeDrift::new(DomCircles::new(&self.document, &container)?))
            }
            Backdrop::Linear => {
                let surface = DomStyle::new(&self.document, &container)?;
                self.launch(LinearShift::new(surface))
            }
            Backdrop::Blobs => {
                let surface = DomBlobs::new(&self.document, &container)?;
                self.launch(BlobField::new(surface, self.config.smoothing))
            }
            Backdrop::Shapes => {
                let specs = &SHAPES[..self.config.shape_count.min(SHAPES.len())];
                let css = format!("{}filter:blur({}px);", FULL_BLEED, self.config.blur_px);
                let mut rng = js_sys::Math::random;
                let built = self.webgl(&container, &css).and_then(|surface| {
                    ShapeScene::new(GlShapes::new(surface), specs, viewport, &mut rng)
                });
                match built {
                    Ok(scene) => self.launch(scene),
                    Err(err) => {
                        log::warn!("3D shapes unavailable ({}); showing static gradient", err);
                        let css = format!(
                            "{};filter:blur({}px)",
                            scene::fallback_css(specs),
                            self.config.blur_px
                        );
                        self.still(&container, &css)?;
                        Ok(None)
                    }
                }
            }
            Backdrop::Noise => {
                self.still(&container, &ShaderVariant::Noise.fallback_css())?;
                let built = self
                    .webgl(&container, FULL_BLEED)
                    .and_then(|surface| GlPlane::new(surface, ShaderVariant::Noise));
                match built {
                    Ok(plane) => {
                        self.launch(PlaneEffect::new(plane, ShaderVariant::Noise, viewport))
                    }
                    Err(err) => {
                        log::warn!("noise shader unavailable ({}); keeping CSS gradient", err);
                        Ok(None)
                    }
                }
            }
            Backdrop::Deform => {
                let built = self
                    .webgl(&container, FULL_BLEED)
                    .and_then(|surface| GlPlane::new(surface, ShaderVariant::Deform));
                match built {
                    Ok(plane) => {
                        self.launch(PlaneEffect::new(plane, ShaderVariant::Deform, viewport))
                    }
                    Err(err) => {
                        log::warn!("vertex shader unavailable ({}); drawing on 2D canvas", err);
                        let canvas = self.canvas(&container, &canvas_style(FULL_BLEED))?;
                        let mut surface = Canvas2d::acquire(canvas.clone()).map_err(|err| {
                            canvas.remove();
                            err
                        })?;
                        surface.resize(viewport);
                        let grain = self.config.grain;
                        self.launch(CanvasEffect::new(surface, js_sys::Math::random, grain))
                    }
                }
            }
        }
    }
}
