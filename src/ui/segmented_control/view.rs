// SPDX-License-Identifier: MPL-2.0
//! Rendering and tap routing.
//!
//! The control is a stack of three layers: the pill background, the
//! indicator, and a row of tinted glyphs. Each glyph sits in a full-height
//! hit region that publishes [`Message::TabPressed`] with its own index.

use super::{Layout, Message, SegmentedControl, Tab};
use crate::ui::design_tokens::shadow;
use crate::ui::styles::container as container_styles;
use iced::widget::{container, mouse_area, svg, Container, Row, Space, Stack};
use iced::{mouse, ContentFit, Element, Length, Padding, Theme};

pub(super) fn view(control: &SegmentedControl) -> Element<'_, Message> {
    let layout = control.layout();
    let size = layout.size();
    let colors = *control.colors();

    let background = Container::new(Space::new())
        .width(Length::Fixed(size.width))
        .height(Length::Fixed(size.height))
        .style(container_styles::pill(
            colors.control,
            layout.control_radius(),
            shadow::CONTROL,
        ));

    let indicator_pill = Container::new(Space::new())
        .width(Length::Fixed(layout.tab_width()))
        .height(Length::Fixed(layout.tab_height()))
        .style(container_styles::pill(
            colors.selected_tab,
            layout.indicator_radius(),
            shadow::INDICATOR,
        ));

    let indicator = Container::new(indicator_pill)
        .padding(Padding {
            top: layout.metrics().margin,
            left: layout.indicator_offset(control.indicator_x()),
            ..Padding::ZERO
        })
        .width(Length::Fixed(size.width))
        .height(Length::Fixed(size.height));

    let metrics = layout.metrics();
    let tabs = control
        .tabs()
        .iter()
        .enumerate()
        .fold(
            Row::new().spacing(metrics.spacing).padding(Padding {
                left: metrics.margin,
                right: metrics.margin,
                ..Padding::ZERO
            }),
            |row, (index, tab)| row.push(tab_view(&layout, index, tab)),
        )
        .width(Length::Fixed(size.width))
        .height(Length::Fixed(size.height));

    Stack::new()
        .push(background)
        .push(indicator)
        .push(tabs)
        .width(Length::Fixed(size.width))
        .height(Length::Fixed(size.height))
        .into()
}

fn tab_view<'a>(layout: &Layout, index: usize, tab: &Tab) -> Element<'a, Message> {
    let icon_area = layout.icon_area(index);
    let hit_region = layout.hit_region(index);
    let tint = tab.tint();

    let glyph = svg::Svg::new(tab.icon().clone())
        .width(Length::Fixed(icon_area.width))
        .height(Length::Fixed(icon_area.height))
        .content_fit(ContentFit::Contain)
        .style(move |_theme: &Theme, _status: svg::Status| svg::Style { color: Some(tint) });

    let region = container(glyph)
        .padding(Padding {
            top: icon_area.y - hit_region.y,
            ..Padding::ZERO
        })
        .width(Length::Fixed(hit_region.width))
        .height(Length::Fixed(hit_region.height))
        .clip(true);

    mouse_area(region)
        .on_press(Message::TabPressed(index))
        .interaction(mouse::Interaction::Pointer)
        .into()
}
