use chrono::NaiveDate;

// Placeholder presentation data. Posts pick entries by position, wrapping around.
pub const IMAGES: [&str; 4] = [
    "/images/post-1.png",
    "/images/post-2.png",
    "/images/post-3.png",
    "/images/post-4.png",
];

pub const AUTHORS: [&str; 9] = [
    "Olivia Rhye",
    "Phoenix Baker",
    "Lana Steiner",
    "Alec Whitten",
    "Demi Wilkinson",
    "Candice Wu",
    "Natal Craig",
    "Drew Cano",
    "Orlando Diggs",
];

pub type TagTable = [&'static [&'static str]; 9];

pub const LISTING_TAGS: TagTable = [
    &["Design", "Research", "Presentation"],
    &["Design", "Research"],
    &["Design", "Interface"],
    &["Leadership", "Management", "Presentation"],
    &["Product", "Research", "Frameworks"],
    &["Design", "Research"],
    &["Design", "Research", "Presentation"],
    &["Software Development", "Tools", "SaaS"],
    &["Podcasts", "Customer Success", "Presentation"],
];

/// Same as the listing table except for the first entry.
pub const DETAIL_TAGS: TagTable = [
    &["Design", "Interface"],
    &["Design", "Research"],
    &["Design", "Interface"],
    &["Leadership", "Management", "Presentation"],
    &["Product", "Research", "Frameworks"],
    &["Design", "Research"],
    &["Design", "Research", "Presentation"],
    &["Software Development", "Tools", "SaaS"],
    &["Podcasts", "Customer Success", "Presentation"],
];

#[derive(Clone, Debug, PartialEq)]
pub struct Decoration {
    pub image: &'static str,
    pub author: &'static str,
    pub date: String,
    pub tags: &'static [&'static str],
}

impl Decoration {
    pub fn at(index: usize, tags: &TagTable) -> Self {
        Self {
            image: IMAGES[index % IMAGES.len()],
            author: AUTHORS[index % AUTHORS.len()],
            date: publish_date(),
            tags: tags[index % tags.len()],
        }
    }

    /// Author line shown above card and article titles.
    pub fn byline(&self) -> String {
        format!("{} • {}", self.author, self.date)
    }
}

fn publish_date() -> String {
    NaiveDate::from_ymd_opt(2023, 1, 1)
        .map(|date| date.format("%-d %b %Y").to_string())
        .unwrap_or_default()
}
