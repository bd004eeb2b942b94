//! System CJK font discovery.
//!
//! egui's bundled fonts have no Japanese glyphs, so the first CJK font found
//! at a well-known system path is registered as a fallback family.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use egui::{FontData, FontDefinitions, FontFamily};

const CJK_FONT_NAME: &str = "system-cjk";

/// Candidate font files, tried in order.
pub fn cjk_font_candidates() -> Vec<PathBuf> {
    [
        // Linux (Noto / IPA)
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/truetype/fonts-japanese-gothic.ttf",
        "/usr/share/fonts/opentype/ipafont-gothic/ipag.ttf",
        // macOS
        "/System/Library/Fonts/ヒラギノ角ゴシック W3.ttc",
        "/System/Library/Fonts/Hiragino Sans GB.ttc",
        // Windows
        "C:\\Windows\\Fonts\\YuGothM.ttc",
        "C:\\Windows\\Fonts\\meiryo.ttc",
        "C:\\Windows\\Fonts\\msgothic.ttc",
    ]
    .iter()
    .map(PathBuf::from)
    .collect()
}

/// Read the first existing candidate.
pub fn find_cjk_font(candidates: &[PathBuf]) -> Option<(PathBuf, Vec<u8>)> {
    candidates.iter().find_map(|path| read_font(path).map(|bytes| (path.clone(), bytes)))
}

fn read_font(path: &Path) -> Option<Vec<u8>> {
    match std::fs::read(path) {
        Ok(bytes) => Some(bytes),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
        Err(e) => {
            tracing::debug!("Skipping font {}: {}", path.display(), e);
            None
        }
    }
}

/// Font definitions with `bytes` appended as a fallback to both families.
pub fn with_fallback_font(bytes: Vec<u8>) -> FontDefinitions {
    let mut fonts = FontDefinitions::default();
    fonts
        .font_data
        .insert(CJK_FONT_NAME.to_owned(), Arc::new(FontData::from_owned(bytes)));
    for family in [FontFamily::Proportional, FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(CJK_FONT_NAME.to_owned());
    }
    fonts
}

/// Install a system CJK font. Returns false when none could be found.
pub fn install_cjk_font(ctx: &egui::Context) -> bool {
    match find_cjk_font(&cjk_font_candidates()) {
        Some((path, bytes)) => {
            tracing::info!("Using CJK font {}", path.display());
            ctx.set_fonts(with_fallback_font(bytes));
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_find_skips_missing_candidates() {
        let dir = tempdir().unwrap();
        let present = dir.path().join("font.ttf");
        std::fs::write(&present, b"fake").unwrap();

        let candidates = vec![dir.path().join("missing.ttf"), present.clone()];
        let (path, bytes) = find_cjk_font(&candidates).unwrap();
        assert_eq!(path, present);
        assert_eq!(bytes, b"fake");
    }

    #[test]
    fn test_fallback_appended_last() {
        let fonts = with_fallback_font(vec![0u8; 4]);
        let proportional = &fonts.families[&FontFamily::Proportional];
        assert_eq!(proportional.last().map(String::as_str), Some(CJK_FONT_NAME));
    }
}
