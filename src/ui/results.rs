/// Analysis results panel
/// Shows one row per display line, warning lines with an icon in red bold
use iced::font::{self, Font};
use iced::widget::{column, container, horizontal_rule, row, text, Column};
use iced::{Alignment, Element, Length};

use super::palette;
use crate::analysis::render::DisplayLine;
use crate::state::AnalysisState;
use crate::Message;

const BOLD: Font = Font {
    weight: font::Weight::Bold,
    ..Font::DEFAULT
};

/// Build the results section, or nothing while there is no outcome to show
pub fn view(state: &AnalysisState) -> Option<Element<'_, Message>> {
    match state {
        AnalysisState::Idle | AnalysisState::Pending => None,
        AnalysisState::Done(result) => {
            let lines: Column<Message> = result
                .lines
                .iter()
                .fold(column![].spacing(10), |col, line| col.push(line_view(line)));

            Some(section("Skin Analysis Results", lines.into()))
        }
        AnalysisState::Failed(reason) => {
            let body = row![
                text("⚠").size(20).color(palette::WARNING),
                text(format!("Error analyzing image: {}", reason))
                    .color(palette::WARNING)
                    .font(BOLD),
            ]
            .spacing(8)
            .align_y(Alignment::Start);

            Some(section("Analysis Failed", body.into()))
        }
    }
}

fn line_view(line: &DisplayLine) -> Element<'_, Message> {
    if line.is_warning {
        row![
            text("⚠").size(18).color(palette::WARNING),
            text(&line.content).color(palette::WARNING).font(BOLD),
        ]
        .spacing(8)
        .align_y(Alignment::Start)
        .into()
    } else {
        text(&line.content).into()
    }
}

fn section<'a>(title: &'a str, body: Element<'a, Message>) -> Element<'a, Message> {
    container(
        column![
            text(title).size(24).color(palette::ACCENT),
            horizontal_rule(1),
            body,
        ]
        .spacing(16),
    )
    .padding(24)
    .width(Length::Fill)
    .style(container::rounded_box)
    .into()
}
