use iced::mouse::{self, Cursor};
use iced::widget::canvas::{self, Program};
use iced::widget::image::Handle;
use iced::{Color, Point, Rectangle, Renderer, Size, Theme};

use crate::reel::{Direction, PaintParams, Reel};
use crate::Message;

/// Canvas painting one reel window
///
/// The strip is drawn once per tile row, clipped to the window, then the
/// half-frame padding at the top and bottom is covered by the masks.
pub struct ReelView {
    pub reel: Reel,
    pub params: PaintParams,
    /// Rendered frame height, the wheel step in pixels
    pub frame_height: f32,
    pub handle: Handle,
    /// Alpha of the padding masks
    pub mask_alpha: f32,
}

impl Program<Message> for ReelView {
    type State = DragState;

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let window = Rectangle::with_size(bounds.size());
        let tile_size = Size::new(self.params.tile_width, self.params.tile_height);

        frame.with_clip(window, |frame| {
            for y in self.params.tile_rows() {
                let tile = Rectangle::new(Point::new(self.params.origin.x, y), tile_size);
                frame.draw_image(tile, canvas::Image::new(self.handle.clone()));
            }
        });

        let mask = Color {
            a: self.mask_alpha,
            ..Color::BLACK
        };
        frame.fill_rectangle(
            Point::ORIGIN,
            Size::new(bounds.width, self.params.mask_top),
            mask,
        );
        frame.fill_rectangle(
            Point::new(0.0, self.params.mask_top + self.params.unmasked_height()),
            Size::new(bounds.width, self.params.mask_bottom),
            mask,
        );

        vec![frame.into_geometry()]
    }

    fn update(
        &self,
        state: &mut Self::State,
        event: canvas::Event,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> (canvas::event::Status, Option<Message>) {
        match event {
            canvas::Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                if !cursor.is_over(bounds) {
                    return (canvas::event::Status::Ignored, None);
                }
                let nudge = wheel_nudge(&mut state.wheel_pixels, delta, self.frame_height)
                    .map(|direction| Message::Nudge(self.reel, direction));
                return (canvas::event::Status::Captured, nudge);
            }

            // Mouse button press on this reel - start dragging
            canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if let Some(pos) = cursor.position_over(bounds) {
                    state.is_dragging = true;
                    state.last_position = Some(pos);
                    return (canvas::event::Status::Captured, None);
                }
            }

            canvas::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                if state.is_dragging {
                    state.is_dragging = false;
                    state.last_position = None;
                    return (canvas::event::Status::Captured, None);
                }
            }

            // Drag keeps tracking outside the window until release
            canvas::Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                if state.is_dragging {
                    if let (Some(current_pos), Some(last_pos)) =
                        (cursor.position(), state.last_position)
                    {
                        let delta_y = current_pos.y - last_pos.y;
                        state.last_position = Some(current_pos);
                        if delta_y != 0.0 {
                            return (
                                canvas::event::Status::Captured,
                                Some(Message::ReelDragged(self.reel, delta_y)),
                            );
                        }
                    }
                }
            }

            _ => {}
        }

        (canvas::event::Status::Ignored, None)
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> mouse::Interaction {
        if state.is_dragging {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(bounds) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

/// State for drag and wheel interactions
#[derive(Debug, Clone, Default)]
pub struct DragState {
    pub is_dragging: bool,
    pub last_position: Option<Point>,
    /// Trackpad scroll not yet turned into a nudge
    pub wheel_pixels: f32,
}

/// Turn one wheel event into at most one nudge
///
/// Line deltas (mouse wheels) step once per notch. Pixel deltas (trackpads)
/// are summed in `pending` until they cover a whole frame; the remainder
/// carries over to the next event.
fn wheel_nudge(
    pending: &mut f32,
    delta: mouse::ScrollDelta,
    frame_height: f32,
) -> Option<Direction> {
    let y = match delta {
        mouse::ScrollDelta::Lines { y, .. } => {
            *pending = 0.0;
            y
        }
        mouse::ScrollDelta::Pixels { y, .. } => {
            *pending += y;
            if pending.abs() < frame_height {
                return None;
            }
            let total = *pending;
            *pending -= frame_height.copysign(total);
            total
        }
    };

    if y > 0.0 {
        Some(Direction::Up)
    } else if y < 0.0 {
        Some(Direction::Down)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reel::{compute_paint_params, derive_geometry};

    fn left_reel() -> (ReelView, Rectangle) {
        let geometry = derive_geometry(300, 2100).unwrap();
        let view = ReelView {
            reel: Reel::Left,
            params: compute_paint_params(&geometry, 0.0, Reel::Left),
            frame_height: geometry.frame_height(),
            handle: Handle::from_rgba(3, 21, vec![0u8; 3 * 21 * 4]),
            mask_alpha: 1.0,
        };
        (view, Rectangle::new(Point::ORIGIN, Size::new(100.0, 400.0)))
    }

    fn wheel(delta: mouse::ScrollDelta) -> canvas::Event {
        canvas::Event::Mouse(mouse::Event::WheelScrolled { delta })
    }

    #[test]
    fn test_wheel_lines_step_every_notch() {
        let mut pending = 0.0;
        let up = mouse::ScrollDelta::Lines { x: 0.0, y: 1.0 };
        let down = mouse::ScrollDelta::Lines { x: 0.0, y: -2.0 };
        assert_eq!(wheel_nudge(&mut pending, up, 100.0), Some(Direction::Up));
        assert_eq!(wheel_nudge(&mut pending, down, 100.0), Some(Direction::Down));
    }

    #[test]
    fn test_trackpad_pixels_add_up_to_one_frame() {
        let mut pending = 0.0;
        let swipe = mouse::ScrollDelta::Pixels { x: 0.0, y: -30.0 };
        let nudges: Vec<_> = (0..10)
            .filter_map(|_| wheel_nudge(&mut pending, swipe, 100.0))
            .collect();
        // 300px of swipe is three frames, not ten
        assert_eq!(nudges, vec![Direction::Down; 3]);
        assert_eq!(pending, 0.0);
    }

    #[test]
    fn test_wheel_up_over_reel_nudges_up() {
        let (view, bounds) = left_reel();
        let mut state = DragState::default();
        let cursor = Cursor::Available(Point::new(50.0, 200.0));

        let (status, message) = view.update(
            &mut state,
            wheel(mouse::ScrollDelta::Lines { x: 0.0, y: 1.0 }),
            bounds,
            cursor,
        );
        assert_eq!(status, canvas::event::Status::Captured);
        assert!(matches!(message, Some(Message::Nudge(Reel::Left, Direction::Up))));

        // outside the window the wheel is left to other widgets
        let outside = Cursor::Available(Point::new(500.0, 200.0));
        let (status, message) = view.update(
            &mut state,
            wheel(mouse::ScrollDelta::Lines { x: 0.0, y: 1.0 }),
            bounds,
            outside,
        );
        assert_eq!(status, canvas::event::Status::Ignored);
        assert!(message.is_none());
    }

    #[test]
    fn test_drag_down_reports_pointer_delta() {
        let (view, bounds) = left_reel();
        let mut state = DragState::default();

        let press = canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        view.update(&mut state, press, bounds, Cursor::Available(Point::new(50.0, 100.0)));
        assert!(state.is_dragging);

        let position = Point::new(50.0, 130.0);
        let moved = canvas::Event::Mouse(mouse::Event::CursorMoved { position });
        let (_, message) = view.update(&mut state, moved, bounds, Cursor::Available(position));
        assert!(matches!(message, Some(Message::ReelDragged(Reel::Left, dy)) if dy == 30.0));

        let release = canvas::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left));
        view.update(&mut state, release, bounds, Cursor::Available(position));
        assert!(!state.is_dragging);
    }
}
