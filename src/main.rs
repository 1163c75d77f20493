use iced::widget::{button, column, container, row, text, text_editor, Column, Row};
use iced::{Alignment, Element, Length, Task, Theme};
use log::LevelFilter;
use rfd::FileDialog;
use std::path::PathBuf;

mod config;
mod reel;
mod state;
mod strip;
mod ui;

use config::{EditorConfig, APP_SUBTITLE, APP_TITLE};
use reel::{Direction, Reel};
use state::{EditorSession, LoadOutcome, LoadTicket, SessionError};
use strip::loader::{has_image_extension, IMAGE_EXTENSIONS};
use strip::{load_strip, DecodedStrip, LoadError};

/// Main application state
struct ReelEditor {
    /// Strip, geometry, offsets and description
    session: EditorSession,
    /// Editor buffer backing the description
    description: text_editor::Content,
    config: EditorConfig,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User clicked "Choose Image"
    PickStrip,
    /// Open a strip from a known path (command line)
    OpenStrip(PathBuf),
    /// Background decode finished
    StripLoaded(LoadTicket, Result<DecodedStrip, LoadError>),
    /// Slider moved to an absolute offset
    OffsetChanged(Reel, f32),
    /// ▲/▼ button or mouse wheel
    Nudge(Reel, Direction),
    /// Vertical drag on a reel window, in pixels
    ReelDragged(Reel, f32),
    DescriptionEdited(text_editor::Action),
    /// Copy stops and description to the clipboard
    CopyOutcome,
}

impl ReelEditor {
    /// Create a new instance of the application
    fn new(config: EditorConfig, initial_strip: Option<PathBuf>) -> (Self, Task<Message>) {
        let session = EditorSession::new();
        let editor = ReelEditor {
            description: text_editor::Content::with_text(session.description()),
            session,
            config,
            status: "Choose a reel strip image to begin.".to_string(),
        };

        let task = match initial_strip {
            Some(path) => Task::done(Message::OpenStrip(path)),
            None => Task::none(),
        };

        (editor, task)
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PickStrip => {
                // Show the native file picker dialog
                let file = FileDialog::new()
                    .set_title("Select Reel Strip Image")
                    .add_filter("Images", &IMAGE_EXTENSIONS)
                    .pick_file();

                // Cancelled: keep whatever is loaded
                match file {
                    Some(path) => self.open_strip(path),
                    None => Task::none(),
                }
            }
            Message::OpenStrip(path) => {
                if !has_image_extension(&path) {
                    log::warn!("⚠️  Not an image file: {}", path.display());
                    self.status = format!("⚠️  Not an image file: {}", path.display());
                    return Task::none();
                }
                self.open_strip(path)
            }
            Message::StripLoaded(ticket, Ok(strip)) => {
                let name = strip.path.display().to_string();
                let size = format!("{}x{}", strip.width, strip.height);

                match self.session.finish_load(ticket, strip) {
                    Ok(LoadOutcome::Loaded) => {
                        self.status = format!("✅ Loaded {} ({})", name, size);
                    }
                    Ok(LoadOutcome::Superseded) => {}
                    Err(e) => {
                        log::warn!("⚠️  Rejected {}: {}", name, e);
                        self.status = format!("⚠️  {}: {}", name, e);
                    }
                }
                Task::none()
            }
            Message::StripLoaded(ticket, Err(e)) => {
                if self.session.fail_load(ticket) {
                    log::warn!("⚠️  {}", e);
                    self.status = format!("⚠️  {}", e);
                }
                Task::none()
            }
            Message::OffsetChanged(reel, value) => {
                let result = self.session.set_offset(reel, value);
                self.apply(reel, result)
            }
            Message::Nudge(reel, direction) => {
                let result = self.session.nudge(reel, direction);
                self.apply(reel, result)
            }
            Message::ReelDragged(reel, delta_y) => {
                let result = self.session.drag(reel, delta_y);
                self.apply(reel, result)
            }
            Message::DescriptionEdited(action) => {
                self.description.perform(action);
                self.session.set_description(self.description.text());
                Task::none()
            }
            Message::CopyOutcome => match ui::controls::outcome_summary(&self.session) {
                Some(summary) => {
                    log::info!("📋 Copied outcome ({} chars)", summary.len());
                    self.status = "📋 Outcome copied to clipboard".to_string();
                    iced::clipboard::write(summary)
                }
                None => Task::none(),
            },
        }
    }

    /// Start decoding `path`, or short-circuit if it is already the current strip
    fn open_strip(&mut self, path: PathBuf) -> Task<Message> {
        if self.session.is_current(&path) {
            if let Err(e) = self.session.reload_current() {
                log::warn!("⚠️  Reload failed: {}", e);
            }
            self.status = format!("🔄 Reset {}", path.display());
            return Task::none();
        }

        log::info!("🔍 Loading reel strip: {}", path.display());
        self.status = format!("Loading {}...", path.display());

        let ticket = self.session.begin_load();
        Task::perform(load_strip(path), move |result| {
            Message::StripLoaded(ticket, result)
        })
    }

    fn status_line(&self) -> String {
        if self.session.is_loading() {
            format!("⏳ {}", self.status)
        } else {
            self.status.clone()
        }
    }

    /// Log offset mutations; failures only happen before a strip is loaded
    fn apply(&self, reel: Reel, result: Result<f32, SessionError>) -> Task<Message> {
        match result {
            Ok(offset) => log::debug!("{} reel offset -> {:.2}", reel, offset),
            Err(e) => log::warn!("⚠️  {} reel: {}", reel, e),
        }
        Task::none()
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let header = column![
            text(APP_TITLE).size(40),
            text(APP_SUBTITLE).size(16),
        ]
        .spacing(6)
        .align_x(Alignment::Center);

        let mut reel_section: Column<Message> = column![
            text("1. Upload Reel Image").size(22),
            row![
                button("Choose Image...").on_press(Message::PickStrip).padding(10),
                text(self.status_line()).size(14),
            ]
            .spacing(16)
            .align_y(Alignment::Center),
        ]
        .spacing(16);

        if let (Some(image), Some(geometry)) = (self.session.image(), self.session.geometry()) {
            let mut reels = Row::new().spacing(24);
            let mut sliders = Column::new().spacing(10);

            for reel in Reel::ALL {
                if let (Some(params), Some(stops)) =
                    (self.session.paint_params(reel), self.session.visible_stops(reel))
                {
                    reels = reels.push(ui::controls::reel_column(
                        reel,
                        params,
                        geometry.frame_height(),
                        &image.handle,
                        self.config.mask_alpha(),
                        stops,
                    ));
                }
                sliders = sliders.push(ui::controls::offset_slider(
                    reel,
                    self.session.offset(reel),
                    geometry,
                    self.config.slider_subdivisions,
                ));
            }

            reel_section = reel_section
                .push(text("2. Adjust Position (Left / Center / Right)").size(22))
                .push(reels)
                .push(sliders);
        }

        let description_section = column![
            text("3. Description").size(22),
            text_editor(&self.description)
                .placeholder("Write your explanation here...")
                .on_action(Message::DescriptionEdited)
                .height(240.0),
            button("Copy Outcome")
                .on_press_maybe(self.session.image().map(|_| Message::CopyOutcome))
                .padding(10),
        ]
        .spacing(16)
        .width(Length::FillPortion(2));

        let content = column![
            header,
            row![
                reel_section.width(Length::FillPortion(3)),
                description_section,
            ]
            .spacing(40),
        ]
        .spacing(30)
        .padding(30)
        .align_x(Alignment::Center);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        if self.config.dark_theme {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

fn main() -> iced::Result {
    // Config first so it can pick the default log level; RUST_LOG still wins
    let config = EditorConfig::load();
    let level = config
        .as_ref()
        .map(EditorConfig::log_filter)
        .unwrap_or(LevelFilter::Info);
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let config = config.unwrap_or_else(|e| {
        log::warn!("⚠️  {}, using default config", e);
        EditorConfig::default()
    });

    // Optional strip to open at start-up
    let initial_strip = std::env::args_os().nth(1).map(PathBuf::from);

    log::info!("🎰 {} starting", APP_TITLE);

    let window_size = (config.window_width, config.window_height);
    iced::application(APP_TITLE, ReelEditor::update, ReelEditor::view)
        .theme(ReelEditor::theme)
        .window_size(window_size)
        .centered()
        .run_with(move || ReelEditor::new(config, initial_strip))
}
