//! About page content: header images, stat cards and service items.

use crate::forms::Translate;

/// Backgrounds cycled behind the about page header.
pub fn about_header_images() -> &'static [&'static str] {
    &[
        "https://images.unsplash.com/photo-1521791136064-7986c2920216?q=80&w=2070&auto=format&fit=crop",
        "https://images.unsplash.com/photo-1556761175-b413da4b248a?q=80&w=2070&auto=format&fit=crop",
        "https://images.unsplash.com/photo-1573496773905-f5b17e76b254?q=80&w=2070&auto=format&fit=crop",
        "https://images.unsplash.com/photo-1522202176988-66273c2fd55f?q=80&w=2071&auto=format&fit=crop",
    ]
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stat {
    pub value: &'static str,
    pub label: String,
}

pub fn stats(tr: Translate<'_>) -> Vec<Stat> {
    [
        ("35+", "about-stats-s1"),
        ("512+", "about-stats-s2"),
        ("1120+", "about-stats-s3"),
        ("1520+", "about-stats-s4"),
    ]
    .into_iter()
    .map(|(value, key)| Stat {
        value,
        label: tr(key),
    })
    .collect()
}

/// Icon reference for a service card; the views map it to a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceIcon {
    Recruitment,
    Construction,
    Housing,
    Administration,
    Consulting,
}

impl ServiceIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            ServiceIcon::Recruitment => "👥",
            ServiceIcon::Construction => "🏗️",
            ServiceIcon::Housing => "🏠",
            ServiceIcon::Administration => "📑",
            ServiceIcon::Consulting => "💬",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceItem {
    pub icon: ServiceIcon,
    pub title: String,
    pub description: String,
    pub image: &'static str,
}

pub fn about_services(tr: Translate<'_>) -> Vec<ServiceItem> {
    [
        (
            ServiceIcon::Recruitment,
            "about-services-recruitment-title",
            "about-services-recruitment-description",
            "https://images.unsplash.com/photo-1521737604893-d14cc237f11d?q=80&w=2070&auto=format&fit=crop",
        ),
        (
            ServiceIcon::Construction,
            "about-services-construction-title",
            "about-services-construction-description",
            "https://images.unsplash.com/photo-1541888946425-d81bb19240f5?q=80&w=2070&auto=format&fit=crop",
        ),
        (
            ServiceIcon::Housing,
            "about-services-housing-title",
            "about-services-housing-description",
            "https://images.unsplash.com/photo-1560448204-e02f11c3d0e2?q=80&w=2070&auto=format&fit=crop",
        ),
        (
            ServiceIcon::Administration,
            "about-services-administration-title",
            "about-services-administration-description",
            "https://images.unsplash.com/photo-1554224155-6726b3ff858f?q=80&w=2070&auto=format&fit=crop",
        ),
        (
            ServiceIcon::Consulting,
            "about-services-consulting-title",
            "about-services-consulting-description",
            "https://images.unsplash.com/photo-1573497019940-1c28c88b4f3e?q=80&w=2070&auto=format&fit=crop",
        ),
    ]
    .into_iter()
    .map(|(icon, title, description, image)| ServiceItem {
        icon,
        title: tr(title),
        description: tr(description),
        image,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_has_four_images() {
        assert_eq!(about_header_images().len(), 4);
    }

    #[test]
    fn services_carry_distinct_images() {
        let items = about_services(&|k: &str| k.to_string());
        assert_eq!(items.len(), 5);
        let mut images: Vec<_> = items.iter().map(|i| i.image).collect();
        images.dedup();
        assert_eq!(images.len(), 5);
        assert!(items[0].title.ends_with("-title"));
    }

    #[test]
    fn stats_keep_their_figures() {
        let values: Vec<_> = stats(&|k: &str| k.to_string())
            .into_iter()
            .map(|s| s.value)
            .collect();
        assert_eq!(values, vec!["35+", "512+", "1120+", "1520+"]);
    }
}
