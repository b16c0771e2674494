use iced::widget::image as iced_image;
use iced::widget::{column, container, text};
use iced::{ContentFit, Element, Length, Theme, border};
use iced_widget::container::bordered_box;
use image::DynamicImage;

/// Upload-ready handle for a decoded raster
pub fn to_handle(img: &DynamicImage) -> iced_image::Handle {
    let rgba = img.to_rgba8();
    iced_image::Handle::from_rgba(rgba.width(), rgba.height(), rgba.into_raw())
}

fn panel_style(theme: &Theme) -> container::Style {
    bordered_box(theme).border(border::width(2))
}

/// Titled, bordered frame around an image that scales down to fit
pub fn image_panel<'a, Message>(
    title: &'a str,
    handle: &iced_image::Handle,
) -> Element<'a, Message>
where
    Message: 'a,
{
    container(
        column![
            text(title).size(16),
            iced_image::Image::new(handle.clone())
                .content_fit(ContentFit::Contain)
                .width(Length::Fill)
                .height(Length::Fill),
        ]
        .spacing(6),
    )
    .style(panel_style)
    .padding(8)
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}
