//! DOM and 2D-canvas targets for the non-WebGL effects.

use glam::DVec2;
use wasm_bindgen::{Clamped, JsCast, JsValue};
use web_sys::{
    CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, HtmlElement, ImageData,
};

use crate::blobs::{self, BlobPose, BlobSurface, BLOB_COLORS, BLOB_SIZE};
use crate::canvas::{CanvasSurface, RadialBlob};
use crate::drift::{self, CirclePose, CircleSurface, CIRCLE_COUNT, CIRCLE_FILL, CIRCLE_SIZE};
use crate::error::FrameError;
use crate::input::Viewport;
use crate::linear::StyleSurface;

fn report(what: &str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        log::warn!("{} failed: {:?}", what, err);
    }
}

/// Creates a `div` inside `parent` with the given inline style.
pub fn layer(document: &Document, parent: &Element, css: &str) -> Result<HtmlElement, FrameError> {
    let element = document
        .create_element("div")?
        .dyn_into::<HtmlElement>()
        .map_err(|_| FrameError::Platform("div is not an HtmlElement".into()))?;
    element.set_attribute("style", css)?;
    parent.append_child(&element)?;
    Ok(element)
}

/// One full-bleed element whose inline style an effect drives.
pub struct DomStyle {
    element: HtmlElement,
}

impl DomStyle {
    pub fn new(document: &Document, parent: &Element) -> Result<Self, FrameError> {
        let element = layer(document, parent, "position:absolute;inset:0;")?;
        Ok(Self { element })
    }
}

impl StyleSurface for DomStyle {
    fn set_style(&mut self, property: &str, value: &str) {
        report("style update", self.element.style().set_property(property, value));
    }

    fn release(&mut self) {
        self.element.remove();
    }
}

/// Base gradient layer, the floating blobs, and the pointer follower.
pub struct DomBlobs {
    root: HtmlElement,
    floating: Vec<HtmlElement>,
    follower: HtmlElement,
}

impl DomBlobs {
    pub fn new(document: &Document, parent: &Element) -> Result<Self, FrameError> {
        let root = layer(
            document,
            parent,
            &format!("position:absolute;inset:0;overflow:hidden;background:{};", blobs::BASE_LAYER),
        )?;

        let size = BLOB_SIZE;
        let mut floating = Vec::with_capacity(BLOB_COLORS.len());
        for (i, color) in BLOB_COLORS.iter().enumerate() {
            let (left, top) = blobs::anchor(i);
            let css = format!(
                "position:absolute;left:{left}%;top:{top}%;width:{size}px;height:{size}px;\
                 border-radius:50%;opacity:0.6;\
                 background:radial-gradient(circle, {color}, transparent);will-change:transform;"
            );
            floating.push(layer(document, &root, &css)?);
        }

        let follower = layer(
            document,
            &root,
            &format!(
                "position:absolute;left:0;top:0;width:{size}px;height:{size}px;border-radius:50%;\
                 opacity:0.7;pointer-events:none;mix-blend-mode:screen;\
                 background:radial-gradient(circle, #ffeaa7, transparent);will-change:transform;"
            ),
        )?;

        Ok(Self {
            root,
            floating,
            follower,
        })
    }
}

impl BlobSurface for DomBlobs {
    fn place(&mut self, index: usize, pose: BlobPose) {
        if let Some(element) = self.floating.get(index) {
            let transform = format!(
                "translate({:.2}px, {:.2}px) scale({:.4})",
                pose.offset.x, pose.offset.y, pose.scale
            );
            report("blob transform", element.style().set_property("transform", &transform));
        }
    }

    fn follow(&mut self, position: DVec2) {
        let half = BLOB_SIZE / 2.0;
        let transform = format!(
            "translate({:.2}px, {:.2}px)",
            position.x - half,
            position.y - half
        );
        report("follower transform", self.follower.style().set_property("transform", &transform));
    }

    fn release(&mut self) {
        self.root.remove();
    }
}

/// Landing-view circles in a click-through layer.
pub struct DomCircles {
    root: HtmlElement,
    circles: Vec<HtmlElement>,
}

impl DomCircles {
    pub fn new(document: &Document, parent: &Element) -> Result<Self, FrameError> {
        let root = layer(
            document,
            parent,
            "position:absolute;inset:0;overflow:hidden;pointer-events:none;",
        )?;

        let size = CIRCLE_SIZE;
        let mut circles = Vec::with_capacity(CIRCLE_COUNT);
        for i in 0..CIRCLE_COUNT {
            let (left, top) = drift::circle_anchor(i);
            let css = format!(
                "position:absolute;left:{left}%;top:{top}%;width:{size}px;height:{size}px;\
                 border-radius:50%;background:{CIRCLE_FILL};will-change:transform;"
            );
            circles.push(layer(document, &root, &css)?);
        }

        Ok(Self { root, circles })
    }
}

impl CircleSurface for DomCircles {
    fn place(&mut self, index: usize, pose: CirclePose) {
        if let Some(element) = self.circles.get(index) {
            let transform = format!(
                "translateY({:.2}px) rotate({:.2}deg)",
                pose.lift, pose.turn_deg
            );
            report("circle transform", element.style().set_property("transform", &transform));
        }
    }

    fn release(&mut self) {
        self.root.remove();
    }
}

/// 2D context over a full-viewport canvas.
pub struct Canvas2d {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl Canvas2d {
    pub fn acquire(canvas: HtmlCanvasElement) -> Result<Self, FrameError> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| FrameError::Unavailable("2d context".into()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| FrameError::Unavailable("2d context has unexpected type".into()))?;
        Ok(Self { canvas, ctx })
    }

    fn area(&self) -> (f64, f64) {
        (self.canvas.width() as f64, self.canvas.height() as f64)
    }
}

impl CanvasSurface for Canvas2d {
    fn viewport(&self) -> Viewport {
        Viewport::new(self.canvas.width(), self.canvas.height())
    }

    fn resize(&mut self, viewport: Viewport) {
        self.canvas.set_width(viewport.width);
        self.canvas.set_height(viewport.height);
    }

    fn clear(&mut self) {
        let (w, h) = self.area();
        self.ctx.clear_rect(0.0, 0.0, w, h);
    }

    fn fill_radial(&mut self, blob: &RadialBlob) {
        let gradient = match self
            .ctx
            .create_radial_gradient(blob.x, blob.y, 0.0, blob.x, blob.y, blob.radius)
        {
            Ok(gradient) => gradient,
            Err(err) => {
                log::warn!("createRadialGradient failed: {:?}", err);
                return;
            }
        };
        report("color stop", gradient.add_color_stop(0.0, &blob.inner));
        report("color stop", gradient.add_color_stop(0.5, &blob.middle));
        report("color stop", gradient.add_color_stop(1.0, "transparent"));
        self.ctx.set_fill_style(&gradient);
        let (w, h) = self.area();
        self.ctx.fill_rect(0.0, 0.0, w, h);
    }

    fn edit_pixels(&mut self, edit: &mut dyn FnMut(&mut [u8])) {
        if self.viewport().is_empty() {
            return;
        }
        let (w, h) = self.area();
        let image = match self.ctx.get_image_data(0.0, 0.0, w, h) {
            Ok(image) => image,
            Err(err) => {
                log::warn!("getImageData failed: {:?}", err);
                return;
            }
        };
        let mut pixels = image.data();
        edit(&mut pixels.0);
        let edited =
            ImageData::new_with_u8_clamped_array_and_sh(Clamped(&pixels.0[..]), w as u32, h as u32);
        match edited {
            Ok(edited) => report("putImageData", self.ctx.put_image_data(&edited, 0.0, 0.0)),
            Err(err) => log::warn!("ImageData construction failed: {:?}", err),
        }
    }

    fn release(&mut self) {
        self.canvas.remove();
    }
}
