//! Window icon, drawn procedurally.

/// Edge length of the icon in pixels.
pub const ICON_SIZE: u32 = 32;

/// A blue disc with a light ring, in RGBA.
pub fn window_icon() -> egui::IconData {
    let size = ICON_SIZE as usize;
    let center = (ICON_SIZE as f32 - 1.0) / 2.0;
    let radius = ICON_SIZE as f32 / 2.0 - 1.0;
    let mut rgba = Vec::with_capacity(size * size * 4);

    for y in 0..size {
        for x in 0..size {
            let dx = x as f32 - center;
            let dy = y as f32 - center;
            let d = (dx * dx + dy * dy).sqrt();
            let pixel = if d > radius {
                [0, 0, 0, 0]
            } else if d > radius - 3.0 {
                [229, 231, 235, 255]
            } else {
                [37, 99, 235, 255]
            };
            rgba.extend_from_slice(&pixel);
        }
    }

    egui::IconData {
        rgba,
        width: ICON_SIZE,
        height: ICON_SIZE,
    }
}
