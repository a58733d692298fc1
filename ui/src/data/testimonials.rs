//! Client testimonials shown on the about page.

use crate::forms::Translate;

pub const MAX_RATING: u8 = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: String,
    pub quote: String,
    pub image: &'static str,
    /// 1..=MAX_RATING stars.
    pub rating: u8,
}

impl Testimonial {
    /// One flag per star, `true` when filled.
    pub fn stars(&self) -> impl Iterator<Item = bool> + '_ {
        (0..MAX_RATING).map(move |i| i < self.rating)
    }
}

pub fn testimonials(tr: Translate<'_>) -> Vec<Testimonial> {
    [
        (
            "Mark de Jong",
            "testimonials-t1-role",
            "testimonials-t1-quote",
            "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?q=80&w=400&auto=format&fit=crop",
            5,
        ),
        (
            "Agnieszka Wiśniewska",
            "testimonials-t2-role",
            "testimonials-t2-quote",
            "https://images.unsplash.com/photo-1494790108377-be9c29b29330?q=80&w=400&auto=format&fit=crop",
            5,
        ),
        (
            "Sander Bakker",
            "testimonials-t3-role",
            "testimonials-t3-quote",
            "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?q=80&w=400&auto=format&fit=crop",
            4,
        ),
    ]
    .into_iter()
    .map(|(name, role, quote, image, rating)| Testimonial {
        name,
        role: tr(role),
        quote: tr(quote),
        image,
        rating,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratings_stay_in_range() {
        for t in testimonials(&|k: &str| k.to_string()) {
            assert!((1..=MAX_RATING).contains(&t.rating), "{}", t.name);
        }
    }

    #[test]
    fn stars_fill_up_to_rating() {
        let four = testimonials(&|k: &str| k.to_string())
            .into_iter()
            .find(|t| t.rating == 4)
            .unwrap();
        let stars: Vec<bool> = four.stars().collect();
        assert_eq!(stars, vec![true, true, true, true, false]);
    }
}
