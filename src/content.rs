//! In-page content
//!
//! Static data the surrounding page supplies: news card metadata (the modal
//! combines it with the fetched post), review slides, FAQ entries, the
//! reading list, and the archive calendar's selectable dates.

/// Metadata for one news card. `id` is the record id at the posts API; the
/// date and image never travel over the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewsItem {
    pub id: u32,
    pub date: &'static str,
    pub image: &'static str,
}

pub fn news_items() -> &'static [NewsItem] {
    &[
        NewsItem { id: 1, date: "2025-06-12", image: "images/news/solstice-readings.jpg" },
        NewsItem { id: 2, date: "2025-05-28", image: "images/news/spring-catalog.jpg" },
        NewsItem { id: 3, date: "2025-04-14", image: "images/news/translation-prize.jpg" },
        NewsItem { id: 4, date: "2025-03-02", image: "images/news/reading-club.jpg" },
        NewsItem { id: 5, date: "2025-02-08", image: "images/news/winter-fair.jpg" },
    ]
}

/// Dates the archive calendar lets the visitor pick.
pub fn archive_dates() -> &'static [&'static str] {
    &["2025-06-12", "2025-05-28", "2025-04-14", "2025-03-02", "2025-02-08"]
}

/// One review slide: the same content the review dialog shows enlarged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewEntry {
    pub reviewer: &'static str,
    pub text: &'static str,
}

pub fn reviews() -> &'static [ReviewEntry] {
    &[
        ReviewEntry {
            reviewer: "Marta K.",
            text: "I ordered one title and ended up reading the whole series in a \
                   month. The translations read as if they were written yesterday.",
        },
        ReviewEntry {
            reviewer: "Jonas B.",
            text: "Beautiful editions, sturdy bindings, and the catalog keeps \
                   surprising me. The staff picks have never missed for me.",
        },
        ReviewEntry {
            reviewer: "Aino S.",
            text: "The reading club recommendations introduced me to three authors \
                   I had never heard of. Two of them are now favorites.",
        },
        ReviewEntry {
            reviewer: "Pavel D.",
            text: "Shipping was quick and the books arrived wrapped like presents. \
                   You can tell the people behind this love what they do.",
        },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub fn faq_entries() -> &'static [FaqEntry] {
    &[
        FaqEntry {
            question: "How long does delivery take?",
            answer: "Orders ship within two business days; most arrive within a week.",
        },
        FaqEntry {
            question: "Do you ship abroad?",
            answer: "Yes. International orders are sent tracked; rates are shown at checkout.",
        },
        FaqEntry {
            question: "Can I return a book?",
            answer: "Unread books can be returned within 30 days for a full refund.",
        },
        FaqEntry {
            question: "Are the e-book editions included?",
            answer: "Titles marked with the digital badge include a download code.",
        },
        FaqEntry {
            question: "How do I join the reading club?",
            answer: "Pick any club title from the catalog; membership is free.",
        },
    ]
}

/// The seasonal reading list. Only the first five entries stay visible on
/// narrow screens.
pub fn reading_list() -> &'static [&'static str] {
    &[
        "The Cartographer's Daughter",
        "Letters from the Low Coast",
        "A Winter in Tallinn",
        "The Orchard Keeper's Almanac",
        "Salt and Starlight",
        "The Last Ferry South",
        "Notes on a Vanished Street",
        "The Glassmaker's Apprentice",
    ]
}
