// Slide catalog - the immutable ordered slide sequence
//
// The deck content is embedded into the binary at compile time as a TOML
// document (assets/deck.toml) and validated here at startup. Slides arrive
// as loosely-typed raw records and are promoted to the `Slide` enum, so a
// record whose fields don't match its declared variant is rejected with the
// offending slide index and field name before anything is rendered.

use serde::Deserialize;
use thiserror::Error;

/// The embedded deck document. Compile-time data, validated at startup.
const BUILTIN_DECK: &str = include_str!("../assets/deck.toml");

/// One content unit in the deck, tagged with the variant that determines
/// its layout. The enum makes the variant/field invariant structural: a
/// constructed `Slide` cannot carry fields its variant doesn't define.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slide {
    /// Full-bleed background image (or generated placeholder) with a
    /// darkening scrim and centered title/subtitle/author stack.
    Title {
        title: String,
        subtitle: Option<String>,
        author: Option<String>,
        background_image: Option<String>,
    },
    /// Centered block of body text, bounded width, no imagery.
    FullText { text: String },
    /// Large image region beside a narrower caption column.
    ImageCaption {
        image: String,
        caption: Option<String>,
    },
    /// Image on one side, quote plus attribution on the other, equal halves.
    ImageQuote {
        image: String,
        quote: Option<String>,
        author: Option<String>,
    },
}

impl Slide {
    /// Display name of the variant, used in error messages.
    pub fn variant_name(&self) -> &'static str {
        match self {
            Slide::Title { .. } => "title",
            Slide::FullText { .. } => "full-text",
            Slide::ImageCaption { .. } => "image-caption",
            Slide::ImageQuote { .. } => "image-quote",
        }
    }
}

/// Errors raised while building a catalog. All of these are
/// construction-time failures; once a `Catalog` exists, rendering and
/// navigation cannot fail.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid deck document: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("slide {index}: unknown variant `{tag}`")]
    UnknownVariant { index: usize, tag: String },

    #[error("slide {index} ({variant}): missing required field `{field}`")]
    MissingField {
        index: usize,
        variant: &'static str,
        field: &'static str,
    },
}

/// Loosely-typed slide record as it appears in the TOML document.
/// Every content field is optional here; `Slide::from_raw` enforces the
/// per-variant requirements.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSlide {
    variant: String,
    title: Option<String>,
    subtitle: Option<String>,
    author: Option<String>,
    image: Option<String>,
    text: Option<String>,
    caption: Option<String>,
    quote: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawDeck {
    #[serde(default)]
    slide: Vec<RawSlide>,
}

impl Slide {
    /// Promote a raw record to a typed slide, or explain exactly which
    /// field is missing for the declared variant.
    fn from_raw(index: usize, raw: RawSlide) -> Result<Self, CatalogError> {
        let missing = |variant, field| CatalogError::MissingField {
            index,
            variant,
            field,
        };

        match raw.variant.as_str() {
            "title" => Ok(Slide::Title {
                title: raw.title.ok_or_else(|| missing("title", "title"))?,
                subtitle: raw.subtitle,
                author: raw.author,
                background_image: raw.image,
            }),
            "full-text" => Ok(Slide::FullText {
                text: raw.text.ok_or_else(|| missing("full-text", "text"))?,
            }),
            "image-caption" => Ok(Slide::ImageCaption {
                image: raw
                    .image
                    .ok_or_else(|| missing("image-caption", "image"))?,
                caption: raw.caption,
            }),
            "image-quote" => Ok(Slide::ImageQuote {
                image: raw.image.ok_or_else(|| missing("image-quote", "image"))?,
                quote: raw.quote,
                author: raw.author,
            }),
            _ => Err(CatalogError::UnknownVariant {
                index,
                tag: raw.variant,
            }),
        }
    }
}

/// Immutable, ordered, validated slide sequence. Pure data - the position
/// cursor lives on `Deck`, not here.
#[derive(Debug, Clone)]
pub struct Catalog {
    slides: Vec<Slide>,
}

impl Catalog {
    /// Parse and validate a deck document. Fails fast on the first
    /// malformed slide rather than deferring to render time.
    pub fn from_toml(doc: &str) -> Result<Self, CatalogError> {
        let raw: RawDeck = toml::from_str(doc)?;
        let slides = raw
            .slide
            .into_iter()
            .enumerate()
            .map(|(index, raw)| Slide::from_raw(index, raw))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { slides })
    }

    /// The deck embedded in the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_toml(BUILTIN_DECK)
    }

    /// Build a catalog directly from typed slides (used by tests and any
    /// future host that constructs slides in code).
    pub fn from_slides(slides: Vec<Slide>) -> Self {
        Self { slides }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }
}
