use iced::widget::{button, column, container, image, row, scrollable, text, text_input, Column};
use iced::{Alignment, ContentFit, Element, Length, Task, Theme};
use rfd::FileDialog;
use tracing::{debug, info, warn};

use crate::analysis::{self, GeminiClient};
use crate::config::Config;
use crate::error::{AnalysisError, ImageError};
use crate::photo::{self, PICKER_EXTENSIONS};
use crate::state::data::LoadedImage;
use crate::state::Session;
use crate::ui::{palette, results};

/// Side of the square preview box
const PREVIEW_BOX: f32 = 256.0;

/// Main application state
pub struct SkinCareApp {
    /// Selected photo, preview and analysis state
    session: Session,
    client: GeminiClient,
    /// Optional instructions appended to the prompt
    extra: String,
    /// Last photo loading problem, shown under the upload button
    status: Option<String>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User clicked the upload button
    PickImage,
    /// Background photo load finished
    ImageLoaded(Result<LoadedImage, ImageError>),
    RemoveImage,
    ExtraChanged(String),
    /// User clicked "Analyze Skin"
    Analyze,
    /// The model answered (normalized text) or the request failed
    AnalysisComplete(Result<String, AnalysisError>),
}

impl SkinCareApp {
    /// Create a new instance of the application
    pub fn new(config: Config) -> (Self, Task<Message>) {
        let client = GeminiClient::new(&config.gemini);
        if config.gemini.api_key.is_none() {
            warn!("No Gemini API key configured, analysis requests will fail");
        }
        info!("SkinCare AI ready (model {})", client.model());

        (
            SkinCareApp {
                session: Session::new(),
                client,
                extra: String::new(),
                status: None,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PickImage => {
                // Show the native file picker dialog
                let file = FileDialog::new()
                    .set_title("Select a selfie")
                    .add_filter("Images", &PICKER_EXTENSIONS)
                    .pick_file();

                Task::perform(photo::load_image(file), Message::ImageLoaded)
            }
            Message::ImageLoaded(Ok(loaded)) => {
                self.session.select_image(loaded);
                self.status = None;
                Task::none()
            }
            Message::ImageLoaded(Err(ImageError::NoFile)) => {
                debug!("No file selected");
                Task::none()
            }
            Message::ImageLoaded(Err(err)) => {
                warn!("Could not load photo: {}", err);
                self.status = Some(format!("Could not load photo: {}", err));
                Task::none()
            }
            Message::RemoveImage => {
                self.session.clear_image();
                Task::none()
            }
            Message::ExtraChanged(extra) => {
                self.extra = extra;
                Task::none()
            }
            Message::Analyze => match self.session.begin_analysis(&self.extra) {
                Some(request) => {
                    info!("Analyzing {}", request.image.name);
                    Task::perform(
                        analysis::analyze(self.client.clone(), request),
                        Message::AnalysisComplete,
                    )
                }
                None => Task::none(),
            },
            Message::AnalysisComplete(outcome) => {
                self.session.complete_analysis(outcome);
                Task::none()
            }
        }
    }

    /// Build the user interface
    pub fn view(&self) -> Element<Message> {
        let header = row![
            text("✦").size(32).color(palette::ACCENT),
            text("SkinCare AI").size(32).color(palette::ACCENT),
        ]
        .spacing(12)
        .align_y(Alignment::Center);

        let upload_label = self
            .session
            .selected()
            .map(|image| image.name.as_str())
            .unwrap_or("Click to browse for a selfie");

        let mut analyze_section: Column<Message> = column![
            text("Analyze Your Skin").size(28),
            text("Upload a clear selfie for personalized skincare recommendations")
                .size(15)
                .color(palette::MUTED),
            button(text(upload_label).size(16))
                .on_press(Message::PickImage)
                .padding(20)
                .width(Length::Fill)
                .style(button::secondary),
        ]
        .spacing(16)
        .align_x(Alignment::Center);

        if let Some(status) = &self.status {
            analyze_section = analyze_section.push(text(status).size(14).color(palette::WARNING));
        }

        if let Some(handle) = self
            .session
            .selected()
            .and_then(|image| self.session.previews().get(image.preview))
        {
            analyze_section = analyze_section
                .push(
                    image(handle.clone())
                        .width(Length::Fixed(PREVIEW_BOX))
                        .height(Length::Fixed(PREVIEW_BOX))
                        .content_fit(ContentFit::Cover),
                )
                .push(
                    button(text("Remove photo").size(14))
                        .on_press_maybe((!self.session.is_loading()).then_some(Message::RemoveImage))
                        .style(button::text),
                );
        }

        let analyze_label = if self.session.is_loading() {
            "Analyzing..."
        } else {
            "Analyze Skin ✦"
        };

        analyze_section = analyze_section
            .push(
                text_input("Additional instructions (optional)", &self.extra)
                    .on_input(Message::ExtraChanged)
                    .padding(10),
            )
            .push(
                button(text(analyze_label).size(18))
                    .on_press_maybe(self.session.can_analyze().then_some(Message::Analyze))
                    .padding(12)
                    .width(Length::Fill)
                    .style(button::primary),
            );

        let mut content: Column<Message> = column![
            header,
            container(analyze_section)
                .padding(32)
                .width(Length::Fill)
                .style(container::rounded_box),
        ]
        .spacing(32)
        .padding(40)
        .max_width(900);

        if let Some(results) = results::view(self.session.analysis()) {
            content = content.push(results);
        }

        scrollable(
            container(content)
                .width(Length::Fill)
                .center_x(Length::Fill),
        )
        .into()
    }

    /// Set the application theme
    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}
