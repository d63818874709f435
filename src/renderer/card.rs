//! Card Renderer - stateless presentation of one bilingual card record.
//!
//! Given one [`CardContent`] and a language flag, resolves the matching text
//! pair, truncates it to the card face width, and produces a [`CardVisual`]
//! ready for the host to paint. Missing optional fields degrade to fallback
//! visuals - never an error:
//!
//! - no image URL -> the gradient background
//! - no badge -> no badge
//! - no rating -> no star row (out-of-range ratings are clamped into [0, 5])

use crate::types::{Badge, CardContent, Gradient, Language, Rgba};

use super::text::truncate_text;

// =============================================================================
// VISUAL TYPES
// =============================================================================

/// What fills the card face behind the text.
#[derive(Debug, Clone, PartialEq)]
pub enum CardBackground {
    /// Host-loaded image; the gradient remains the loading/failure fallback.
    Image { url: String, fallback: Gradient },
    /// Gradient only.
    Gradient(Gradient),
}

/// A resolved, paintable badge.
#[derive(Debug, Clone, PartialEq)]
pub struct BadgeVisual {
    pub text: String,
    pub tint: Rgba,
}

/// Five-glyph star row for a rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarRow {
    /// Filled stars out of five.
    pub filled: u8,
}

impl StarRow {
    /// Render as a five-glyph string, e.g. `★★★★☆`.
    pub fn glyphs(&self) -> String {
        let filled = self.filled.min(5) as usize;
        let mut row = String::with_capacity(5 * '★'.len_utf8());
        for _ in 0..filled {
            row.push('★');
        }
        for _ in filled..5 {
            row.push('☆');
        }
        row
    }
}

/// One fully resolved card face, ready to paint.
///
/// Pure presentation data: the renderer holds no state and the same content,
/// language and width always produce the same visual.
#[derive(Debug, Clone, PartialEq)]
pub struct CardVisual {
    pub title: String,
    pub subtitle: String,
    pub background: CardBackground,
    pub badge: Option<BadgeVisual>,
    /// Icon reference, or the fallback glyph name when the record has none.
    pub icon: String,
    pub stars: Option<StarRow>,
}

// =============================================================================
// RENDERING
// =============================================================================

/// Icon used when a record carries no icon reference.
pub const FALLBACK_ICON: &str = "placeholder";

/// Render one card record for a language.
///
/// `face_width` is the text budget in cells; title and subtitle are truncated
/// to it with an ellipsis.
pub fn render_card(card: &CardContent, language: Language, face_width: u16) -> CardVisual {
    let background = match &card.image_url {
        Some(url) if !url.is_empty() => CardBackground::Image {
            url: url.clone(),
            fallback: card.gradient,
        },
        _ => CardBackground::Gradient(card.gradient),
    };

    let badge = card.badge.as_ref().map(|badge| render_badge(badge, language));

    let icon = if card.icon.is_empty() {
        FALLBACK_ICON.to_string()
    } else {
        card.icon.clone()
    };

    let stars = card.rating.map(|rating| StarRow {
        filled: rating.clamp(0.0, 5.0).round() as u8,
    });

    CardVisual {
        title: truncate_text(card.title.resolve(language), face_width),
        subtitle: truncate_text(card.subtitle.resolve(language), face_width),
        background,
        badge,
        icon,
        stars,
    }
}

fn render_badge(badge: &Badge, language: Language) -> BadgeVisual {
    BadgeVisual {
        text: badge.text.resolve(language).to_string(),
        tint: badge.tint,
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BilingualText;

    fn card() -> CardContent {
        CardContent::new(
            "svc-paint",
            BilingualText::new("Painting", "دهانات"),
            BilingualText::new("Interior & exterior", "داخلي وخارجي"),
        )
    }

    #[test]
    fn test_language_selection() {
        let visual = render_card(&card(), Language::Primary, 40);
        assert_eq!(visual.title, "Painting");
        assert_eq!(visual.subtitle, "Interior & exterior");

        let visual = render_card(&card(), Language::Secondary, 40);
        assert_eq!(visual.title, "دهانات");
    }

    #[test]
    fn test_title_truncated_to_face_width() {
        let visual = render_card(&card(), Language::Primary, 6);
        assert_eq!(visual.title, "Paint…");
    }

    #[test]
    fn test_missing_image_falls_back_to_gradient() {
        let visual = render_card(&card(), Language::Primary, 40);
        assert_eq!(visual.background, CardBackground::Gradient(card().gradient));
    }

    #[test]
    fn test_image_keeps_gradient_as_fallback() {
        let with_image = card().with_image_url("https://cdn.example/p.webp");
        let visual = render_card(&with_image, Language::Primary, 40);
        match visual.background {
            CardBackground::Image { url, fallback } => {
                assert_eq!(url, "https://cdn.example/p.webp");
                assert_eq!(fallback, card().gradient);
            }
            other => panic!("expected image background, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_image_url_treated_as_missing() {
        let with_empty = card().with_image_url("");
        let visual = render_card(&with_empty, Language::Primary, 40);
        assert!(matches!(visual.background, CardBackground::Gradient(_)));
    }

    #[test]
    fn test_missing_optionals_render_without_error() {
        let visual = render_card(&card(), Language::Primary, 40);
        assert!(visual.badge.is_none());
        assert!(visual.stars.is_none());
        assert_eq!(visual.icon, FALLBACK_ICON);
    }

    #[test]
    fn test_badge_resolves_language() {
        let with_badge = card().with_badge(Badge::new(
            BilingualText::new("New", "جديد"),
            Rgba::rgb(255, 120, 0),
        ));
        let visual = render_card(&with_badge, Language::Secondary, 40);
        let badge = visual.badge.unwrap();
        assert_eq!(badge.text, "جديد");
        assert_eq!(badge.tint, Rgba::rgb(255, 120, 0));
    }

    #[test]
    fn test_star_row() {
        let visual = render_card(&card().with_rating(3.6), Language::Primary, 40);
        let stars = visual.stars.unwrap();
        assert_eq!(stars.filled, 4);
        assert_eq!(stars.glyphs(), "★★★★☆");
    }

    #[test]
    fn test_rating_clamped() {
        let visual = render_card(&card().with_rating(9.0), Language::Primary, 40);
        assert_eq!(visual.stars.unwrap().filled, 5);

        let visual = render_card(&card().with_rating(-2.0), Language::Primary, 40);
        assert_eq!(visual.stars.unwrap().filled, 0);
        assert_eq!(visual.stars.unwrap().glyphs(), "☆☆☆☆☆");
    }

    #[test]
    fn test_renderer_is_stateless() {
        let a = render_card(&card(), Language::Primary, 40);
        let _ = render_card(&card().with_rating(1.0), Language::Secondary, 3);
        let b = render_card(&card(), Language::Primary, 40);
        assert_eq!(a, b);
    }
}
