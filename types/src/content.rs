use jiff::civil::{Date, date};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentStatus {
    Draft,
    Published,
}

impl ContentStatus {
    pub fn label(self) -> &'static str {
        match self {
            ContentStatus::Draft => "Draft",
            ContentStatus::Published => "Published",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            ContentStatus::Draft => "badge badge-amber",
            ContentStatus::Published => "badge badge-green",
        }
    }
}

/// A page or blog post. Which of the two a given entry is depends on the
/// collection holding it, not the entry itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentEntry {
    pub id: u32,
    pub title: String,
    pub slug: String,
    pub body: String,
    pub status: ContentStatus,
    pub modified: Date,
    pub author: String,
}

/// URL slug from a title: lowercased, punctuation stripped, whitespace runs
/// collapsed to single hyphens.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut last_was_hyphen = true; // suppress a leading hyphen
    for ch in title.chars() {
        if ch.is_alphanumeric() {
            slug.extend(ch.to_lowercase());
            last_was_hyphen = false;
        } else if (ch.is_whitespace() || ch == '-' || ch == '_') && !last_was_hyphen {
            slug.push('-');
            last_was_hyphen = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

pub fn sample_pages() -> Vec<ContentEntry> {
    vec![
        ContentEntry {
            id: 1,
            title: "Home".into(),
            slug: "home".into(),
            body: "Welcome to the cosmos.".into(),
            status: ContentStatus::Published,
            modified: date(2025, 4, 15),
            author: "Admin".into(),
        },
        ContentEntry {
            id: 2,
            title: "About Us".into(),
            slug: "about".into(),
            body: "Who we are and what the stars say about it.".into(),
            status: ContentStatus::Published,
            modified: date(2025, 4, 10),
            author: "Admin".into(),
        },
        ContentEntry {
            id: 3,
            title: "Services".into(),
            slug: "services".into(),
            body: "Readings, charts, and consultations.".into(),
            status: ContentStatus::Published,
            modified: date(2025, 4, 8),
            author: "Admin".into(),
        },
        ContentEntry {
            id: 4,
            title: "Contact".into(),
            slug: "contact".into(),
            body: "Reach us across the astral plane.".into(),
            status: ContentStatus::Draft,
            modified: date(2025, 4, 20),
            author: "Admin".into(),
        },
    ]
}

pub fn sample_blog_posts() -> Vec<ContentEntry> {
    vec![
        ContentEntry {
            id: 1,
            title: "2025 Astrological Predictions".into(),
            slug: "2025-astrological-predictions".into(),
            body: "What the coming year holds for every sign.".into(),
            status: ContentStatus::Published,
            modified: date(2025, 4, 19),
            author: "Jane Doe".into(),
        },
        ContentEntry {
            id: 2,
            title: "The Meaning of Your Birth Chart".into(),
            slug: "birth-chart-meaning".into(),
            body: "A beginner's tour of houses and planets.".into(),
            status: ContentStatus::Published,
            modified: date(2025, 4, 17),
            author: "John Smith".into(),
        },
        ContentEntry {
            id: 3,
            title: "How Planets Affect Your Love Life".into(),
            slug: "planets-love-life".into(),
            body: "Venus, Mars, and everything between.".into(),
            status: ContentStatus::Draft,
            modified: date(2025, 4, 21),
            author: "Admin".into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::slugify;

    #[test]
    fn slugify_collapses_and_strips() {
        assert_eq!(slugify("2025 Astrological Predictions"), "2025-astrological-predictions");
        assert_eq!(slugify("  How -- Planets  Affect You!  "), "how-planets-affect-you");
        assert_eq!(slugify("Hello, World?"), "hello-world");
        assert_eq!(slugify(""), "");
    }
}
