//! Deterministic placeholder articles served when no live endpoint is configured.

use crate::domain::model::Article;
use crate::utils::error::{NewsError, Result};
use chrono::{DateTime, Duration, SecondsFormat, Utc};

const SAMPLE_TITLES: [&str; 15] = [
    "Breaking: Major Tech Company Announces New Product",
    "Global Climate Summit Reaches Historic Agreement",
    "Sports Team Wins Championship After Dramatic Final",
    "Scientists Discover New Species in Deep Ocean",
    "Economic Markets Show Strong Growth This Quarter",
    "New Study Reveals Benefits of Daily Exercise",
    "Technology Breakthrough in Renewable Energy",
    "International Space Station Completes Mission",
    "Healthcare Innovation Improves Patient Outcomes",
    "Education System Undergoes Major Reforms",
    "Entertainment Industry Celebrates Award Winners",
    "Transportation Network Expands to New Cities",
    "Food Industry Introduces Sustainable Practices",
    "Art Exhibition Opens to Critical Acclaim",
    "Weather Forecast Predicts Unusual Patterns",
];

const SAMPLE_DESCRIPTIONS: [&str; 15] = [
    "A comprehensive look at the latest developments in technology and innovation.",
    "Environmental experts discuss the implications of new climate policies.",
    "Fans celebrate as their team achieves victory in the championship match.",
    "Marine biologists share details about the newly discovered deep-sea creature.",
    "Financial analysts provide insights into current market trends.",
    "Research highlights the positive impact of regular physical activity.",
    "Engineers explain the technical details of the renewable energy advancement.",
    "Astronauts reflect on their successful mission aboard the space station.",
    "Medical professionals discuss improvements in treatment methods.",
    "Educators and policymakers outline changes to the education system.",
    "Stars and creators gather to honor outstanding achievements.",
    "City planners announce expansion of public transportation services.",
    "Companies commit to more environmentally friendly production methods.",
    "Critics praise the artistic vision and execution of the exhibition.",
    "Meteorologists analyze unusual weather patterns affecting the region.",
];

const SAMPLE_SOURCES: [&str; 15] = [
    "Tech News",
    "Climate Today",
    "Sports Central",
    "Science Daily",
    "Financial Times",
    "Health Weekly",
    "Energy Report",
    "Space News",
    "Medical Journal",
    "Education Today",
    "Entertainment Weekly",
    "Transport News",
    "Food Network",
    "Arts & Culture",
    "Weather Channel",
];

const SAMPLE_IMAGE_URLS: [&str; 5] = [
    "https://picsum.photos/400/300?random=1",
    "https://picsum.photos/400/300?random=2",
    "https://picsum.photos/400/300?random=3",
    "https://picsum.photos/400/300?random=4",
    "https://picsum.photos/400/300?random=5",
];

/// Builds page `page` (1-based) of sample articles, timestamped relative to now.
pub fn sample_articles(page: usize, page_size: usize) -> Result<Vec<Article>> {
    sample_articles_at(page, page_size, Utc::now())
}

/// Article `i` on the page uses global offset `(page - 1) * page_size + i`
/// for its id and cycles each content pool by that offset. Its timestamp is
/// `i` hours before `now`. Offsets that do not fit in `usize` are an
/// `InvalidRequest`.
pub fn sample_articles_at(
    page: usize,
    page_size: usize,
    now: DateTime<Utc>,
) -> Result<Vec<Article>> {
    let start = page
        .saturating_sub(1)
        .checked_mul(page_size)
        .filter(|start| start.checked_add(page_size).is_some())
        .ok_or_else(|| NewsError::InvalidRequest {
            message: format!("page {} of size {} is out of range", page, page_size),
        })?;

    let articles = (0..page_size)
        .map(|i| {
            let offset = start + i;
            let index = offset % SAMPLE_TITLES.len();
            let published_at = now - Duration::hours(i as i64);

            Article::new(
                SAMPLE_TITLES[index],
                SAMPLE_DESCRIPTIONS[index],
                SAMPLE_SOURCES[index],
            )
            .with_id(format!("sample-{}", offset))
            .with_image_url(SAMPLE_IMAGE_URLS[offset % SAMPLE_IMAGE_URLS.len()])
            .with_published_at(published_at.to_rfc3339_opts(SecondsFormat::Secs, true))
        })
        .collect();
    Ok(articles)
}
