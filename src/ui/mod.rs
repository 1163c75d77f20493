/// iced front end
///
/// - `reel_view.rs` - canvas program painting one reel window
/// - `controls.rs` - reel columns, nudge buttons and sliders

pub mod controls;
pub mod reel_view;
