/// Reel controls: windows, nudge buttons and offset sliders

use iced::widget::image::Handle;
use iced::widget::{button, canvas, column, container, row, slider, text};
use iced::{Alignment, Element, Length};

use super::reel_view::ReelView;
use crate::reel::{Direction, PaintParams, Reel, ReelGeometry};
use crate::state::EditorSession;
use crate::Message;

/// One reel window with its ▲/▼ nudge buttons underneath
pub fn reel_column<'a>(
    reel: Reel,
    params: PaintParams,
    frame_height: f32,
    handle: &Handle,
    mask_alpha: f32,
    stops: [usize; 3],
) -> Element<'a, Message> {
    let window = canvas(ReelView {
        reel,
        params,
        frame_height,
        handle: handle.clone(),
        mask_alpha,
    })
    .width(Length::Fixed(params.viewport.x))
    .height(Length::Fixed(params.viewport.y));

    let nudges = row![
        button(text("▲")).on_press(Message::Nudge(reel, Direction::Up)).padding(8),
        button(text("▼")).on_press(Message::Nudge(reel, Direction::Down)).padding(8),
    ]
    .spacing(8);

    column![
        container(window).style(container::bordered_box),
        nudges,
        text(format_stops(stops)).size(12),
    ]
    .spacing(10)
    .align_x(Alignment::Center)
    .into()
}

/// Slider over the whole band for one reel, labelled in frames
///
/// The range stops one step short of the band end; `total_height` is the
/// same position as 0.
pub fn offset_slider<'a>(
    reel: Reel,
    offset: f32,
    geometry: &ReelGeometry,
    subdivisions: u32,
) -> Element<'a, Message> {
    let range = 0.0..=geometry.slider_max(subdivisions);
    let position = slider(range, offset, move |value| {
        Message::OffsetChanged(reel, value)
    })
    .step(geometry.slider_step(subdivisions))
    .width(Length::Fill);

    row![
        text(reel.label()).width(Length::Fixed(60.0)),
        position,
        text(format_frames(geometry.frames_at(offset))).width(Length::Fixed(90.0)),
    ]
    .spacing(12)
    .align_y(Alignment::Center)
    .into()
}

/// "4.5 frames"
pub fn format_frames(frames: f32) -> String {
    format!("{:.1} frames", frames)
}

/// Stops shown as 1-based frame numbers, top to bottom
pub fn format_stops(stops: [usize; 3]) -> String {
    format!("#{} / #{} / #{}", stops[0] + 1, stops[1] + 1, stops[2] + 1)
}

/// Plain-text outcome for the clipboard: each reel's stops, then the description
///
/// `None` until a strip is loaded.
pub fn outcome_summary(session: &EditorSession) -> Option<String> {
    let mut lines = Vec::with_capacity(Reel::ALL.len() + 2);
    for reel in Reel::ALL {
        let stops = session.visible_stops(reel)?;
        lines.push(format!("{}: {}", reel.label(), format_stops(stops)));
    }

    let description = session.description().trim();
    if !description.is_empty() {
        lines.push(String::new());
        lines.push(description.to_string());
    }

    Some(lines.join("\n"))
}
