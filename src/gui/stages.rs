use iced::widget::image as iced_image;
use iced::widget::{Column, Row, column, container, text};
use iced::{Element, Length, Subscription, Task, Theme, keyboard};

use super::ViewerMessage;
use super::widgets::{image_panel, to_handle};
use crate::pipeline::PipelineData;

/// Panels per row of the stage grid
const COLUMNS: usize = 3;

/// Window showing every recorded pipeline view until a key is pressed
#[derive(Debug, Clone)]
pub struct StageViewer {
    panels: Vec<(String, iced_image::Handle)>,
    caption: String,
}

impl StageViewer {
    pub fn new(data: &PipelineData) -> Self {
        let panels = data
            .stages
            .iter()
            .map(|stage| (stage.name.clone(), to_handle(&stage.image)))
            .collect();
        let caption = match &data.contours {
            Some(contours) => contours.label(),
            None => String::new(),
        };
        Self { panels, caption }
    }

    fn update(&mut self, message: ViewerMessage) -> Task<ViewerMessage> {
        match message {
            ViewerMessage::KeyPressed => {
                log::debug!("Key pressed, closing stage viewer");
                iced::exit()
            }
        }
    }

    fn view(&self) -> Element<'_, ViewerMessage> {
        let rows: Vec<Element<'_, ViewerMessage>> = self
            .panels
            .chunks(COLUMNS)
            .map(|chunk| {
                Row::with_children(
                    chunk
                        .iter()
                        .map(|(name, handle)| image_panel(name.as_str(), handle)),
                )
                .spacing(10)
                .height(Length::FillPortion(1))
                .into()
            })
            .collect();

        let content = column![
            Column::with_children(rows).spacing(10).height(Length::Fill),
            text(format!("{}    Press any key to exit.", self.caption)).size(16),
        ]
        .spacing(10)
        .padding(10);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn subscription(&self) -> Subscription<ViewerMessage> {
        keyboard::listen().filter_map(|event| match event {
            keyboard::Event::KeyPressed { .. } => Some(ViewerMessage::KeyPressed),
            _ => None,
        })
    }
}

/// Open the stage viewer and block until it is dismissed
pub fn run_stage_viewer(data: &PipelineData) -> iced::Result {
    let viewer = StageViewer::new(data);
    iced::application(move || viewer.clone(), StageViewer::update, StageViewer::view)
        .title("Morphology pipeline")
        .subscription(StageViewer::subscription)
        .theme(Theme::Dark)
        .window_size((1200.0, 800.0))
        .run()
}
