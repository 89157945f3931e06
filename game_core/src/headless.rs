//! Headless surface that records draw calls
//!
//! Used by tests and by any host without a real pixel target. Text metrics
//! are estimated from the font size so anchored positions stay
//! deterministic.

use std::cell::RefCell;
use std::rc::Rc;

use crate::surface::{
    client_to_logical, ClickHandler, FillMode, RectPosition, Surface, TextMetrics, TextStyle,
};
use crate::{Color, Vec2};

/// One recorded draw call, in logical coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear {
        color: Color,
    },
    Circle {
        origin: Vec2,
        radius: f64,
        color: Color,
        mode: FillMode,
    },
    /// Always stored by its top-left corner
    Rect {
        top_left: Vec2,
        width: f64,
        height: f64,
        color: Color,
    },
    Point {
        point: Vec2,
        color: Color,
    },
    /// `origin` is the baseline-left point after anchoring
    Text {
        text: String,
        color: Color,
        origin: Vec2,
        font_size: f64,
        opacity: f64,
    },
}

type HandlerSlot = Rc<RefCell<Option<ClickHandler>>>;

/// Surface that keeps a log of every draw call
pub struct RecordingSurface {
    width: f64,
    height: f64,
    scale: f64,
    origin: Vec2,
    commands: Vec<DrawCommand>,
    handler: HandlerSlot,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            scale: 1.0,
            origin: Vec2::ZERO,
            commands: Vec::new(),
            handler: Rc::new(RefCell::new(None)),
        }
    }

    /// Device pixel ratio applied to the backing size
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// On-screen top-left corner used to translate host clicks
    pub fn with_origin(mut self, origin: Vec2) -> Self {
        self.origin = origin;
        self
    }

    /// Backing store size in physical pixels
    pub fn physical_size(&self) -> (u32, u32) {
        (
            (self.width * self.scale).round() as u32,
            (self.height * self.scale).round() as u32,
        )
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Text of every recorded text command, in draw order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Circles drawn centered on `origin`
    pub fn circles_at(&self, origin: Vec2) -> Vec<&DrawCommand> {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Circle { origin: o, .. } if *o == origin))
            .collect()
    }

    pub fn has_click_handler(&self) -> bool {
        self.handler.borrow().is_some()
    }

    /// Handle for delivering clicks after the surface has been moved
    pub fn click_source(&self) -> ClickSource {
        ClickSource {
            handler: Rc::clone(&self.handler),
            origin: self.origin,
        }
    }

    /// Rough metrics for a proportional font
    pub fn measure_text(text: &str, font_size: f64) -> TextMetrics {
        TextMetrics {
            width: text.chars().count() as f64 * font_size * 0.5,
            ascent: font_size * 0.8,
            descent: font_size * 0.2,
        }
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear(&mut self, color: &Color) {
        self.commands.push(DrawCommand::Clear {
            color: color.clone(),
        });
    }

    fn draw_circle(&mut self, origin: Vec2, radius: f64, color: &Color, mode: FillMode) {
        self.commands.push(DrawCommand::Circle {
            origin,
            radius,
            color: color.clone(),
            mode,
        });
    }

    fn draw_rect(
        &mut self,
        point: Vec2,
        width: f64,
        height: f64,
        color: &Color,
        position: RectPosition,
    ) {
        let top_left = match position {
            RectPosition::Origin => point,
            RectPosition::Centered => point - Vec2::new(width / 2.0, height / 2.0),
        };
        self.commands.push(DrawCommand::Rect {
            top_left,
            width,
            height,
            color: color.clone(),
        });
    }

    fn draw_point(&mut self, point: Vec2, color: &Color) {
        self.commands.push(DrawCommand::Point {
            point,
            color: color.clone(),
        });
    }

    fn draw_text(&mut self, text: &str, color: &Color, position: Vec2, style: TextStyle) {
        let metrics = Self::measure_text(text, style.font_size);
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            color: color.clone(),
            origin: position + style.anchor.offset(metrics),
            font_size: style.font_size,
            opacity: style.opacity,
        });
    }

    fn set_click_handler(&mut self, handler: ClickHandler) {
        *self.handler.borrow_mut() = Some(handler);
    }
}

/// Delivers clicks to a [`RecordingSurface`]'s current handler
#[derive(Clone)]
pub struct ClickSource {
    handler: HandlerSlot,
    origin: Vec2,
}

impl ClickSource {
    /// Click at a logical position. Returns false when no handler is set.
    pub fn click(&self, pos: Vec2) -> bool {
        // Taken out for the call so the handler may replace itself
        let Some(mut handler) = self.handler.borrow_mut().take() else {
            return false;
        };
        handler(pos);

        let mut slot = self.handler.borrow_mut();
        if slot.is_none() {
            *slot = Some(handler);
        }
        true
    }

    /// Click at a host (device) position, translated by the surface origin
    pub fn click_client(&self, client: Vec2) -> bool {
        self.click(client_to_logical(client, self.origin))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::TextAnchor;

    #[test]
    fn test_geometry_helpers() {
        let surface = RecordingSurface::new(500.0, 100.0);
        assert_eq!(surface.midpoint(), Vec2::new(250.0, 50.0));
        assert_eq!(surface.inscribed_radius(), 50.0);
        let expected = (250.0f64 * 250.0 + 50.0 * 50.0).sqrt();
        assert!((surface.circumscribed_radius() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_physical_size_uses_scale() {
        let surface = RecordingSurface::new(500.0, 100.0).with_scale(2.0);
        assert_eq!(surface.physical_size(), (1000, 200));
        assert_eq!(surface.width(), 500.0, "Logical size is unchanged");
    }

    #[test]
    fn test_centered_rect_is_recorded_by_corner() {
        let mut surface = RecordingSurface::new(100.0, 100.0);
        let color = Color::white();
        surface.draw_rect(Vec2::new(50.0, 50.0), 20.0, 10.0, &color, RectPosition::Centered);
        surface.draw_rect(Vec2::new(50.0, 50.0), 20.0, 10.0, &color, RectPosition::Origin);
        let corners: Vec<Vec2> = surface
            .commands()
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Rect { top_left, .. } => Some(*top_left),
                _ => None,
            })
            .collect();
        assert_eq!(corners, vec![Vec2::new(40.0, 45.0), Vec2::new(50.0, 50.0)]);
    }

    #[test]
    fn test_text_is_anchored() {
        let mut surface = RecordingSurface::new(100.0, 100.0);
        let style = TextStyle::new(10.0, TextAnchor::TopRight).with_opacity(0.25);
        surface.draw_text("abcd", &Color::black(), Vec2::new(90.0, 0.0), style);
        match &surface.commands()[0] {
            DrawCommand::Text { origin, opacity, .. } => {
                assert_eq!(*origin, Vec2::new(70.0, 8.0));
                assert_eq!(*opacity, 0.25);
            }
            other => panic!("Unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_click_without_handler_is_unhandled() {
        let surface = RecordingSurface::new(100.0, 100.0);
        assert!(!surface.has_click_handler());
        assert!(!surface.click_source().click(Vec2::new(1.0, 1.0)));
    }

    #[test]
    fn test_new_handler_replaces_previous() {
        let mut surface = RecordingSurface::new(100.0, 100.0);
        let log = Rc::new(RefCell::new(Vec::new()));

        let first = Rc::clone(&log);
        surface.set_click_handler(Box::new(move |_| first.borrow_mut().push("first")));
        let second = Rc::clone(&log);
        surface.set_click_handler(Box::new(move |_| second.borrow_mut().push("second")));

        assert!(surface.click_source().click(Vec2::ZERO));
        assert_eq!(*log.borrow(), vec!["second"]);
    }

    #[test]
    fn test_click_client_translates_by_origin() {
        let mut surface = RecordingSurface::new(100.0, 100.0).with_origin(Vec2::new(8.0, 40.0));
        let seen = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&seen);
        surface.set_click_handler(Box::new(move |pos| *sink.borrow_mut() = Some(pos)));

        surface.click_source().click_client(Vec2::new(58.0, 90.0));
        assert_eq!(*seen.borrow(), Some(Vec2::new(50.0, 50.0)));
    }

    #[test]
    fn test_take_commands_drains() {
        let mut surface = RecordingSurface::new(10.0, 10.0);
        surface.clear(&Color::white());
        surface.draw_point(Vec2::new(1.0, 2.0), &Color::black());
        assert_eq!(surface.take_commands().len(), 2);
        assert!(surface.commands().is_empty());
    }
}
