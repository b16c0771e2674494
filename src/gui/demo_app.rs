use iced::Alignment::Center;
use iced::widget::image as iced_image;
use iced::widget::{button, checkbox, column, container, pick_list, row, slider, text};
use iced::{Element, Length, Task, Theme};
use rfd::AsyncFileDialog;

use super::DemoMessage;
use super::widgets::{image_panel, to_handle};
use crate::demo::{ControlEvent, DemoState, MAX_KERNEL_RADIUS};
use crate::models::{ElementShape, MorphOp};
use crate::source::SourceImage;

/// Interactive erosion/dilation window
pub struct MorphologyDemo {
    state: DemoState,
    result: iced_image::Handle,
    status: String,
}

impl MorphologyDemo {
    pub fn new(state: DemoState) -> Self {
        let result = to_handle(state.derived());
        let status = state.source().path().display().to_string();
        Self {
            state,
            result,
            status,
        }
    }

    fn update(&mut self, message: DemoMessage) -> Task<DemoMessage> {
        match message {
            DemoMessage::Control(event) => {
                match self.state.handle(event) {
                    Ok(()) => self.result = to_handle(self.state.derived()),
                    Err(e) => {
                        log::error!("Recompute failed: {e}");
                        self.status = e.to_string();
                    }
                }
                Task::none()
            }
            DemoMessage::OpenImage => Task::perform(
                AsyncFileDialog::new()
                    .set_title("Open image")
                    .add_filter("Images", &["bmp", "png", "jpg", "jpeg"])
                    .pick_file(),
                |handle| DemoMessage::ImagePicked(handle.map(|file| file.path().to_path_buf())),
            ),
            DemoMessage::ImagePicked(None) => Task::none(),
            DemoMessage::ImagePicked(Some(path)) => {
                let loaded = SourceImage::load(&path)
                    .and_then(|source| self.state.replace_source(source));
                match loaded {
                    Ok(()) => {
                        log::info!("Opened {}", path.display());
                        self.result = to_handle(self.state.derived());
                        self.status = path.display().to_string();
                    }
                    Err(e) => {
                        log::warn!("Keeping previous image: {e}");
                        self.status = e.to_string();
                    }
                }
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, DemoMessage> {
        let params = self.state.params();

        let controls = column![
            text("Element"),
            pick_list(ElementShape::ALL, Some(params.shape), |shape| {
                DemoMessage::Control(ControlEvent::ShapeSelected(shape))
            }),
            text("Kernel size: 2n + 1"),
            slider(0..=MAX_KERNEL_RADIUS, params.radius(), |radius| {
                DemoMessage::Control(ControlEvent::RadiusChanged(radius))
            }),
            text(format!(
                "n = {}  ({}x{})",
                params.radius(),
                params.kernel_size(),
                params.kernel_size()
            )),
            text("Operation"),
            pick_list(MorphOp::ALL, Some(params.op), |op| {
                DemoMessage::Control(ControlEvent::OperationSelected(op))
            }),
            checkbox(params.negative)
                .label("Negative")
                .on_toggle(|negative| {
                    DemoMessage::Control(ControlEvent::NegativeToggled(negative))
                }),
            button("Open image...").on_press(DemoMessage::OpenImage),
            text(&self.status).size(12),
        ]
        .spacing(12)
        .width(Length::Fixed(260.0));

        let content = row![controls, image_panel(self.title_text(), &self.result)]
            .spacing(20)
            .padding(20)
            .align_y(Center);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn title_text(&self) -> &'static str {
        match self.state.params().op {
            MorphOp::Erode => "Erosion",
            MorphOp::Dilate => "Dilation",
        }
    }
}

/// Open the demo window and block until it is closed
pub fn run_demo(state: DemoState) -> iced::Result {
    iced::application(
        move || MorphologyDemo::new(state.clone()),
        MorphologyDemo::update,
        MorphologyDemo::view,
    )
    .title("Erosion and dilation demo")
    .theme(Theme::Dark)
    .window_size((1000.0, 700.0))
    .run()
}
