// SPDX-License-Identifier: MPL-2.0
//! Glyphs shown in the demo control.
//!
//! Single-color SVGs on a transparent background; the control recolors them
//! through the svg style, so the fill color here does not matter.

use iced::widget::svg;

const BEER_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path fill="black" d="M5 4h11v3h2a2 2 0 0 1 2 2v6a2 2 0 0 1-2 2h-2v2a1 1 0 0 1-1 1H6a1 1 0 0 1-1-1zm11 5v6h2V9zM7 8v10h2V8zm4 0v10h2V8z"/></svg>"#;

const BAR_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path fill="black" d="M3 3h18l-8 9v7h4v2H7v-2h4v-7zm4.5 2 1.8 2h5.4l1.8-2z"/></svg>"#;

const NIGHT_CLUB_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path fill="black" d="M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20zm0 4a6 6 0 0 1 6 6h-2a4 4 0 0 0-4-4zm0 4a2 2 0 1 1 0 4 2 2 0 0 1 0-4z"/></svg>"#;

const RESTAURANT_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path fill="black" d="M6 2h1v7h1V2h1v7h1V2h1v8a2 2 0 0 1-2 2v10H8V12a2 2 0 0 1-2-2zm10 0c2 0 3 3 3 7v4h-2v9h-2V2z"/></svg>"#;

/// The four demo glyphs in tab order.
pub fn demo_icons() -> Vec<svg::Handle> {
    [BEER_SVG, BAR_SVG, NIGHT_CLUB_SVG, RESTAURANT_SVG]
        .into_iter()
        .map(|source| svg::Handle::from_memory(source.as_bytes()))
        .collect()
}
