//! Hero carousel slides for the home page.

use crate::forms::Translate;
use crate::pages::Page;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CtaVariant {
    Primary,
    Secondary,
}

impl CtaVariant {
    pub fn class(self) -> &'static str {
        match self {
            CtaVariant::Primary => "button button--primary",
            CtaVariant::Secondary => "button button--ghost",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SlideCta {
    pub label: String,
    pub page: Page,
    pub variant: CtaVariant,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    pub id: u32,
    pub title: String,
    pub subtitle: String,
    pub image: &'static str,
    pub alt: String,
    pub ctas: Vec<SlideCta>,
}

struct SlideDef {
    id: u32,
    title: &'static str,
    subtitle: &'static str,
    alt: &'static str,
    image: &'static str,
    primary: &'static str,
    secondary: &'static str,
    secondary_page: Page,
}

const SLIDES: [SlideDef; 4] = [
    SlideDef {
        id: 1,
        title: "slides-s1-title",
        subtitle: "slides-s1-subtitle",
        alt: "slides-s1-alt",
        image: "https://images.unsplash.com/photo-1521791136064-7986c2920216?q=80&w=2070&auto=format&fit=crop",
        primary: "slides-s1-cta1",
        secondary: "slides-s1-cta2",
        secondary_page: Page::Contact,
    },
    SlideDef {
        id: 2,
        title: "slides-s2-title",
        subtitle: "slides-s2-subtitle",
        alt: "slides-s2-alt",
        image: "https://images.unsplash.com/photo-1541888946425-d81bb19240f5?q=80&w=2070&auto=format&fit=crop",
        primary: "slides-s2-cta1",
        secondary: "slides-s2-cta2",
        secondary_page: Page::Apply,
    },
    SlideDef {
        id: 3,
        title: "slides-s3-title",
        subtitle: "slides-s3-subtitle",
        alt: "slides-s3-alt",
        image: "https://images.unsplash.com/photo-1576091160550-2173dba999ef?q=80&w=2070&auto=format&fit=crop",
        primary: "slides-s3-cta1",
        secondary: "slides-s3-cta2",
        secondary_page: Page::Apply,
    },
    SlideDef {
        id: 4,
        title: "slides-s4-title",
        subtitle: "slides-s4-subtitle",
        alt: "slides-s4-alt",
        image: "https://images.unsplash.com/photo-1487813489326-4c3a1535515f?q=80&w=2070&auto=format&fit=crop",
        primary: "slides-s4-cta1",
        secondary: "slides-s4-cta2",
        secondary_page: Page::Apply,
    },
];

/// Build the hero slides from translated strings. Every slide leads with a
/// services CTA.
pub fn slides(tr: Translate<'_>) -> Vec<Slide> {
    SLIDES
        .iter()
        .map(|def| Slide {
            id: def.id,
            title: tr(def.title),
            subtitle: tr(def.subtitle),
            image: def.image,
            alt: tr(def.alt),
            ctas: vec![
                SlideCta {
                    label: tr(def.primary),
                    page: Page::Services,
                    variant: CtaVariant::Primary,
                },
                SlideCta {
                    label: tr(def.secondary),
                    page: def.secondary_page,
                    variant: CtaVariant::Secondary,
                },
            ],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_slides_with_two_ctas_each() {
        let slides = slides(&|k: &str| k.to_uppercase());
        assert_eq!(slides.len(), 4);
        assert_eq!(
            slides.iter().map(|s| s.id).collect::<Vec<_>>(),
            vec![1, 2, 3, 4]
        );
        assert_eq!(slides[0].title, "SLIDES-S1-TITLE");
        for slide in &slides {
            assert_eq!(slide.ctas.len(), 2);
            assert_eq!(slide.ctas[0].page, Page::Services);
            assert_eq!(slide.ctas[0].variant, CtaVariant::Primary);
            assert_eq!(slide.ctas[1].variant, CtaVariant::Secondary);
        }
    }

    #[test]
    fn only_the_first_slide_points_at_contact() {
        let slides = slides(&|k: &str| k.to_string());
        let secondary: Vec<Page> = slides.iter().map(|s| s.ctas[1].page).collect();
        assert_eq!(
            secondary,
            vec![Page::Contact, Page::Apply, Page::Apply, Page::Apply]
        );
    }
}
