//! Contact panel link row.

use egui::{Color32, CursorIcon, FontId, OpenUrl, Response, Sense, Ui};

use crate::profile::SocialLink;
use crate::ui::theme::Palette;

/// Link text size, in points.
const LINK_SIZE: f32 = 18.0;

/// Link text color for the hover state.
pub fn link_color(palette: &Palette, hovered: bool) -> Color32 {
    if hovered {
        palette.link_hover
    } else {
        palette.text_body
    }
}

/// Render the links centered in a row, each opening in a new browsing context.
pub fn show(ui: &mut Ui, links: &[SocialLink], palette: &Palette) {
    ui.vertical_centered(|ui| {
        ui.horizontal(|ui| {
            for link in links {
                social_link(ui, link, palette);
                ui.add_space(16.0);
            }
        });
    });
}

/// One link, painted in the body color and recolored while hovered.
fn social_link(ui: &mut Ui, link: &SocialLink, palette: &Palette) -> Response {
    let galley = ui.painter().layout_no_wrap(
        link.kind.label().to_owned(),
        FontId::proportional(LINK_SIZE),
        palette.text_body,
    );
    let (rect, response) = ui.allocate_exact_size(galley.size(), Sense::click());

    let hovered = response.hovered();
    if hovered {
        ui.ctx().set_cursor_icon(CursorIcon::PointingHand);
    }
    ui.painter()
        .galley_with_override_text_color(rect.min, galley, link_color(palette, hovered));

    if response.clicked() {
        ui.ctx().open_url(OpenUrl::new_tab(&link.url));
    }

    response.on_hover_text(&link.url)
}
