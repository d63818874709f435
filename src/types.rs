//! Core types for spark-carousel.
//!
//! These types define the content model the engine consumes: bilingual text,
//! colors, gradients, badges, and the card record rendered on each face of
//! the ring. They are plain values — all behavior lives in the state and
//! layout modules.

// =============================================================================
// Color
// =============================================================================

/// RGBA color with 8-bit channels (0-255).
///
/// Using integers for exact comparison - no floating point epsilon needed.
/// Alpha 255 = fully opaque, 0 = fully transparent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Create a new RGBA color.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Transparent color.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    // Standard colors
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const GRAY: Self = Self::rgb(128, 128, 128);

    /// Linear interpolation between two colors.
    #[inline]
    pub fn lerp(a: Self, b: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let inv_t = 1.0 - t;

        Self {
            r: ((a.r as f32 * inv_t) + (b.r as f32 * t)) as u8,
            g: ((a.g as f32 * inv_t) + (b.g as f32 * t)) as u8,
            b: ((a.b as f32 * inv_t) + (b.b as f32 * t)) as u8,
            a: ((a.a as f32 * inv_t) + (b.a as f32 * t)) as u8,
        }
    }

    /// Dim the color by a factor (0.0 = black, 1.0 = unchanged).
    ///
    /// Used by hosts to fade card faces on the far side of the ring.
    #[inline]
    pub fn dim(self, factor: f32) -> Self {
        let factor = factor.clamp(0.0, 1.0);
        Self {
            r: (self.r as f32 * factor) as u8,
            g: (self.g as f32 * factor) as u8,
            b: (self.b as f32 * factor) as u8,
            a: self.a,
        }
    }
}

// =============================================================================
// Gradient
// =============================================================================

/// Two-stop linear gradient used as a card face background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    pub from: Rgba,
    pub to: Rgba,
}

impl Gradient {
    /// Create a gradient between two colors.
    pub const fn new(from: Rgba, to: Rgba) -> Self {
        Self { from, to }
    }

    /// Sample the gradient at position t in [0, 1].
    #[inline]
    pub fn sample(&self, t: f32) -> Rgba {
        Rgba::lerp(self.from, self.to, t)
    }
}

impl Default for Gradient {
    fn default() -> Self {
        Self::new(Rgba::GRAY, Rgba::BLACK)
    }
}

// =============================================================================
// Language / Reading direction
// =============================================================================

/// Which half of a bilingual text pair to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// The primary language of the content source.
    #[default]
    Primary,
    /// The secondary (translated) language.
    Secondary,
}

/// Layout reading direction.
///
/// Affects the drag sign convention only: under a mirrored layout the visible
/// content must still follow the gesture direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadingDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

// =============================================================================
// Bilingual text
// =============================================================================

/// A text pair carrying both languages of one string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BilingualText {
    pub primary: String,
    pub secondary: String,
}

impl BilingualText {
    /// Create a bilingual pair.
    pub fn new(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            secondary: secondary.into(),
        }
    }

    /// Resolve the pair for a language.
    ///
    /// Falls back to the other half when the requested one is empty, so a
    /// partially translated record still renders something.
    pub fn resolve(&self, language: Language) -> &str {
        let (wanted, fallback) = match language {
            Language::Primary => (&self.primary, &self.secondary),
            Language::Secondary => (&self.secondary, &self.primary),
        };
        if wanted.is_empty() { fallback } else { wanted }
    }
}

// =============================================================================
// Badge
// =============================================================================

/// Optional corner badge on a card face (e.g. "New", a discount tag).
#[derive(Debug, Clone, PartialEq)]
pub struct Badge {
    pub text: BilingualText,
    pub tint: Rgba,
}

impl Badge {
    /// Create a badge with a tint color.
    pub fn new(text: BilingualText, tint: Rgba) -> Self {
        Self { text, tint }
    }
}

// =============================================================================
// Card content
// =============================================================================

/// The content payload rendered on one carousel face.
///
/// Sequence order in the card list fixes angular slot order. The `id` must be
/// unique within one ring — it is what keeps a face visually stable across
/// re-renders while the ring rotates.
///
/// Every optional field degrades gracefully when absent: no image falls back
/// to the gradient, no badge renders nothing, no rating renders no star row.
#[derive(Debug, Clone, PartialEq)]
pub struct CardContent {
    /// Stable unique identifier within one ring.
    pub id: String,
    /// Card title, both languages.
    pub title: BilingualText,
    /// Card subtitle, both languages.
    pub subtitle: BilingualText,
    /// Optional corner badge.
    pub badge: Option<Badge>,
    /// Face background gradient (also the image fallback).
    pub gradient: Gradient,
    /// Icon reference, resolved by the host's icon set.
    pub icon: String,
    /// Optional image URL; the host loads it, the engine only carries it.
    pub image_url: Option<String>,
    /// Optional rating in [0, 5].
    pub rating: Option<f32>,
}

impl CardContent {
    /// Create a card with the required fields; optionals start empty.
    pub fn new(id: impl Into<String>, title: BilingualText, subtitle: BilingualText) -> Self {
        Self {
            id: id.into(),
            title,
            subtitle,
            badge: None,
            gradient: Gradient::default(),
            icon: String::new(),
            image_url: None,
            rating: None,
        }
    }

    /// Set the background gradient.
    pub fn with_gradient(mut self, gradient: Gradient) -> Self {
        self.gradient = gradient;
        self
    }

    /// Set the badge.
    pub fn with_badge(mut self, badge: Badge) -> Self {
        self.badge = Some(badge);
        self
    }

    /// Set the icon reference.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Set the image URL.
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Set the rating.
    pub fn with_rating(mut self, rating: f32) -> Self {
        self.rating = Some(rating);
        self
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_lerp() {
        let a = Rgba::rgb(0, 0, 0);
        let b = Rgba::rgb(200, 100, 50);

        assert_eq!(Rgba::lerp(a, b, 0.0), a);
        assert_eq!(Rgba::lerp(a, b, 1.0), b);

        let mid = Rgba::lerp(a, b, 0.5);
        assert_eq!(mid.r, 100);
        assert_eq!(mid.g, 50);
        assert_eq!(mid.b, 25);
    }

    #[test]
    fn test_rgba_lerp_clamps_t() {
        let a = Rgba::rgb(10, 10, 10);
        let b = Rgba::rgb(20, 20, 20);
        assert_eq!(Rgba::lerp(a, b, -1.0), a);
        assert_eq!(Rgba::lerp(a, b, 2.0), b);
    }

    #[test]
    fn test_rgba_dim() {
        let c = Rgba::new(100, 200, 50, 128);
        let dimmed = c.dim(0.5);
        assert_eq!(dimmed.r, 50);
        assert_eq!(dimmed.g, 100);
        assert_eq!(dimmed.b, 25);
        assert_eq!(dimmed.a, 128); // Alpha untouched
    }

    #[test]
    fn test_gradient_sample() {
        let g = Gradient::new(Rgba::BLACK, Rgba::WHITE);
        assert_eq!(g.sample(0.0), Rgba::BLACK);
        assert_eq!(g.sample(1.0), Rgba::WHITE);
    }

    #[test]
    fn test_bilingual_resolve() {
        let t = BilingualText::new("Hello", "مرحبا");
        assert_eq!(t.resolve(Language::Primary), "Hello");
        assert_eq!(t.resolve(Language::Secondary), "مرحبا");
    }

    #[test]
    fn test_bilingual_resolve_falls_back_when_empty() {
        let t = BilingualText::new("Hello", "");
        assert_eq!(t.resolve(Language::Secondary), "Hello");

        let t = BilingualText::new("", "مرحبا");
        assert_eq!(t.resolve(Language::Primary), "مرحبا");
    }

    #[test]
    fn test_card_builder() {
        let card = CardContent::new(
            "offer-1",
            BilingualText::new("Tile work", "أعمال البلاط"),
            BilingualText::new("From 250 SAR", "ابتداءً من 250 ريال"),
        )
        .with_icon("tools")
        .with_rating(4.5);

        assert_eq!(card.id, "offer-1");
        assert_eq!(card.icon, "tools");
        assert_eq!(card.rating, Some(4.5));
        assert!(card.badge.is_none());
        assert!(card.image_url.is_none());
    }
}
