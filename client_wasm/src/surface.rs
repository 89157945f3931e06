//! Canvas 2D surface
//!
//! The only place that touches [`web_sys::CanvasRenderingContext2d`]. The
//! device pixel ratio is applied once as a context scale, so every draw call
//! takes logical (CSS pixel) coordinates.

use std::f64::consts::TAU;

use game_core::{
    client_to_logical, ClickHandler, Color, FillMode, RectPosition, Surface, TextAnchor,
    TextMetrics, TextStyle, Vec2,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement, MouseEvent};

/// Id of the element canvases are appended to when present
const MOUNT_ID: &str = "app";

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
    // Kept alive while installed as the canvas `onclick`
    on_click: Option<Closure<dyn FnMut(MouseEvent)>>,
}

impl CanvasSurface {
    /// Create a canvas of `width × height` logical pixels inside `container`
    pub fn new(width: f64, height: f64, container: &Element) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("No document"))?;

        let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
        container.append_child(&canvas)?;

        let style = canvas.style();
        style.set_property("width", &format!("{width}px"))?;
        style.set_property("height", &format!("{height}px"))?;

        let dpr = window.device_pixel_ratio();
        canvas.set_width((width * dpr).round() as u32);
        canvas.set_height((height * dpr).round() as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("Canvas 2D context unavailable"))?
            .dyn_into()?;
        ctx.scale(dpr, dpr)?;

        log::debug!("canvas {width}x{height} mounted at dpr {dpr}");

        Ok(Self {
            canvas,
            ctx,
            width,
            height,
            on_click: None,
        })
    }

    /// Create a canvas inside `#app`, or `<body>` when there is none
    pub fn mount(width: f64, height: f64) -> Result<Self, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("No document"))?;
        let container: Element = match document.get_element_by_id(MOUNT_ID) {
            Some(el) => el,
            None => document
                .body()
                .ok_or_else(|| JsValue::from_str("No body"))?
                .into(),
        };
        Self::new(width, height, &container)
    }

    fn measure(&self, text: &str) -> TextMetrics {
        match self.ctx.measure_text(text) {
            Ok(m) => TextMetrics {
                width: m.width(),
                ascent: m.font_bounding_box_ascent(),
                descent: m.font_bounding_box_descent(),
            },
            Err(e) => {
                log::error!("measure_text failed: {e:?}");
                TextMetrics {
                    width: 0.0,
                    ascent: 0.0,
                    descent: 0.0,
                }
            }
        }
    }
}

impl Surface for CanvasSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear(&mut self, color: &Color) {
        self.ctx.set_fill_style_str(color.hex_string());
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);
    }

    fn draw_circle(&mut self, origin: Vec2, radius: f64, color: &Color, mode: FillMode) {
        self.ctx.begin_path();
        if let Err(e) = self
            .ctx
            .ellipse(origin.x, origin.y, radius, radius, 0.0, 0.0, TAU)
        {
            log::error!("ellipse failed: {e:?}");
            return;
        }

        match mode {
            FillMode::Fill => {
                self.ctx.set_fill_style_str(color.hex_string());
                self.ctx.fill();
            }
            FillMode::Stroke => {
                self.ctx.set_stroke_style_str(color.hex_string());
                self.ctx.stroke();
            }
        }
    }

    fn draw_rect(
        &mut self,
        point: Vec2,
        width: f64,
        height: f64,
        color: &Color,
        position: RectPosition,
    ) {
        let corner = match position {
            RectPosition::Origin => point,
            RectPosition::Centered => point - Vec2::new(width / 2.0, height / 2.0),
        };
        self.ctx.set_fill_style_str(color.hex_string());
        self.ctx.fill_rect(corner.x, corner.y, width, height);
    }

    fn draw_point(&mut self, point: Vec2, color: &Color) {
        self.ctx.set_fill_style_str(color.hex_string());
        self.ctx.fill_rect(point.x, point.y, 1.0, 1.0);
    }

    fn draw_text(&mut self, text: &str, color: &Color, position: Vec2, style: TextStyle) {
        // Alpha and font stay scoped to this call
        self.ctx.save();
        self.ctx.set_fill_style_str(color.hex_string());
        self.ctx.set_font(&style.font());

        let p = match style.anchor {
            TextAnchor::BaselineLeft => position,
            anchor => position + anchor.offset(self.measure(text)),
        };

        self.ctx.set_global_alpha(style.opacity);
        if let Err(e) = self.ctx.fill_text(text, p.x, p.y) {
            log::error!("fill_text failed: {e:?}");
        }
        self.ctx.restore();
    }

    fn set_click_handler(&mut self, mut handler: ClickHandler) {
        let canvas = self.canvas.clone();
        let on_click = Closure::<dyn FnMut(MouseEvent)>::new(move |evt: MouseEvent| {
            let rect = canvas.get_bounding_client_rect();
            let client = Vec2::new(f64::from(evt.client_x()), f64::from(evt.client_y()));
            handler(client_to_logical(client, Vec2::new(rect.x(), rect.y())));
        });
        self.canvas
            .set_onclick(Some(on_click.as_ref().unchecked_ref()));
        // Dropping the previous closure is safe once it is no longer installed
        self.on_click = Some(on_click);
    }
}
