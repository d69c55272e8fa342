//! Floor and subcategory classification.
//!
//! Books are routed onto one of seven themed floors by scanning their
//! bookshelf and subject strings against coarse keyword patterns, then given
//! a subcategory label that later becomes a shelf block and a shelf tag.
//! Classification is pure string matching, so reclassifying the same dump
//! always yields the same layout.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::OnceLock;

use regex::{Regex, RegexSet, RegexSetBuilder};
use serde::{Deserialize, Serialize};

use crate::meta::BookMeta;

/// The seven floors of the library, in room-assignment order.
///
/// Rooms are handed out floor by floor in variant order, and artifact maps
/// keyed by floor serialize in the same order, so the order here is
/// load-bearing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FloorId {
    /// History & War.
    HistoryWar,
    /// Literature & Fiction, also the default for unmatched books.
    LiteratureFiction,
    /// Crime, Mystery & Gothic.
    CrimeMysteryGothic,
    /// Sci-Fi & Fantasy.
    ScifiFantasy,
    /// Children & YA.
    ChildrenYa,
    /// Poetry & Drama.
    PoetryDrama,
    /// Non-fiction & Thought.
    NonfictionThought,
}

impl FloorId {
    /// All floors in room-assignment order.
    pub const ALL: [FloorId; 7] = [
        FloorId::HistoryWar,
        FloorId::LiteratureFiction,
        FloorId::CrimeMysteryGothic,
        FloorId::ScifiFantasy,
        FloorId::ChildrenYa,
        FloorId::PoetryDrama,
        FloorId::NonfictionThought,
    ];

    /// Stable identifier used in artifact files and shuffle seeds.
    pub fn as_str(self) -> &'static str {
        match self {
            FloorId::HistoryWar => "history_war",
            FloorId::LiteratureFiction => "literature_fiction",
            FloorId::CrimeMysteryGothic => "crime_mystery_gothic",
            FloorId::ScifiFantasy => "scifi_fantasy",
            FloorId::ChildrenYa => "children_ya",
            FloorId::PoetryDrama => "poetry_drama",
            FloorId::NonfictionThought => "nonfiction_thought",
        }
    }

    /// Display label for the frontend. The hyphenated names use U+2011 so
    /// they never wrap mid-word.
    pub fn label(self) -> &'static str {
        match self {
            FloorId::HistoryWar => "History & War",
            FloorId::LiteratureFiction => "Literature & Fiction",
            FloorId::CrimeMysteryGothic => "Crime, Mystery & Gothic",
            FloorId::ScifiFantasy => "Sci\u{2011}Fi & Fantasy",
            FloorId::ChildrenYa => "Children & YA",
            FloorId::PoetryDrama => "Poetry & Drama",
            FloorId::NonfictionThought => "Non\u{2011}fiction & Thought",
        }
    }

    /// Donor floors used to fill this floor's slack capacity, cycled in
    /// order.
    pub fn fill_from(self) -> &'static [FloorId] {
        match self {
            FloorId::HistoryWar => &[FloorId::LiteratureFiction],
            FloorId::LiteratureFiction => &[FloorId::HistoryWar],
            FloorId::CrimeMysteryGothic => {
                &[FloorId::LiteratureFiction, FloorId::ScifiFantasy]
            }
            FloorId::ScifiFantasy => &[FloorId::LiteratureFiction],
            FloorId::ChildrenYa => &[FloorId::LiteratureFiction],
            FloorId::PoetryDrama => &[FloorId::LiteratureFiction],
            FloorId::NonfictionThought => {
                &[FloorId::HistoryWar, FloorId::LiteratureFiction]
            }
        }
    }
}

impl fmt::Display for FloorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Floor matching rules, tried in order. Children's books are claimed
/// before poetry, poetry before sci-fi, and so on; anything left over is
/// fiction.
fn floor_rules() -> &'static [(FloorId, RegexSet)] {
    static RULES: OnceLock<Vec<(FloorId, RegexSet)>> = OnceLock::new();
    RULES.get_or_init(|| {
        let rule = |floor: FloorId, patterns: &[&str]| {
            let set = RegexSetBuilder::new(patterns)
                .case_insensitive(true)
                .build()
                .expect("valid floor patterns");
            (floor, set)
        };
        vec![
            rule(FloorId::ChildrenYa, &["children", "juvenile"]),
            rule(
                FloorId::PoetryDrama,
                &[
                    r"\bpoetry\b",
                    r"\bpoems\b",
                    "plays/films/dramas",
                    r"\bdrama\b",
                    r"\btheatre\b",
                ],
            ),
            rule(
                FloorId::ScifiFantasy,
                &[
                    "science-?fiction",
                    "sci-?fi",
                    "fantasy",
                    "mythology",
                    "legends?",
                    "folklore",
                    "fairy tales",
                ],
            ),
            rule(
                FloorId::CrimeMysteryGothic,
                &[
                    "crime",
                    "thrillers?",
                    "mystery",
                    "detective",
                    "horror",
                    "gothic",
                    "ghost",
                    "vampire",
                    "occult",
                    "haunted",
                ],
            ),
            rule(
                FloorId::HistoryWar,
                &[r"\bhistory\b", r"\bwar\b", "military", "revolution", "history -"],
            ),
            rule(
                FloorId::NonfictionThought,
                &[
                    "philosophy",
                    "ethics",
                    "religion",
                    "spiritual",
                    "theology",
                    "science",
                    "physics",
                    "chemistry",
                    "biology",
                    "mathematics",
                    "engineering",
                    "technology",
                    "how to",
                    "travel",
                    "voyage",
                    "geography",
                    "biograph",
                    "autobiograph",
                    "memoirs",
                ],
            ),
        ]
    })
}

fn classification_text(book: &BookMeta) -> String {
    let mut parts: Vec<&str> =
        Vec::with_capacity(book.bookshelves.len() + book.subjects.len());
    parts.extend(book.bookshelves.iter().map(String::as_str));
    parts.extend(book.subjects.iter().map(String::as_str));
    parts.join("\n").to_lowercase()
}

/// Assigns a book to a floor from its bookshelves and subjects.
///
/// The first matching rule wins; books that match nothing land on
/// Literature & Fiction.
pub fn classify_floor(book: &BookMeta) -> FloorId {
    let text = classification_text(book);
    for (floor, patterns) in floor_rules() {
        if patterns.is_match(&text) {
            return *floor;
        }
    }
    FloorId::LiteratureFiction
}

/// Normalizes a bookshelf label: trims it, strips a leading `Category:`
/// prefix and collapses whitespace runs to single spaces.
pub fn norm_bookshelf(raw: &str) -> String {
    static CATEGORY_PREFIX: OnceLock<Regex> = OnceLock::new();
    static WHITESPACE_RUN: OnceLock<Regex> = OnceLock::new();
    let prefix = CATEGORY_PREFIX
        .get_or_init(|| Regex::new(r"(?i)^category:\s*").expect("valid prefix pattern"));
    let runs =
        WHITESPACE_RUN.get_or_init(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

    let stripped = prefix.replace(raw.trim(), "");
    runs.replace_all(&stripped, " ").into_owned()
}

/// Picks a subcategory label for a book already assigned to `floor`.
///
/// The first normalized bookshelf wins, except that overly broad shelf
/// names are skipped off the fiction floor. Books without a usable shelf
/// fall back to keyword buckets over their subject headings.
pub fn choose_subcategory(book: &BookMeta, floor: FloorId) -> String {
    let shelves: Vec<String> = book
        .bookshelves
        .iter()
        .filter(|raw| !raw.trim().is_empty())
        .map(|raw| norm_bookshelf(raw))
        .collect();

    for shelf in &shelves {
        let lowered = shelf.to_lowercase();
        let broad = lowered == "novels" || lowered == "short stories";
        if broad && floor != FloorId::LiteratureFiction {
            continue;
        }
        return shelf.clone();
    }

    let subjects = book
        .subjects
        .iter()
        .map(String::as_str)
        .filter(|subject| !subject.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
        .to_lowercase();
    subject_bucket(floor, &subjects).to_string()
}

fn subject_bucket(floor: FloorId, subjects: &str) -> &'static str {
    match floor {
        FloorId::HistoryWar => {
            if subjects.contains("american") {
                "History - American"
            } else if subjects.contains("europe") {
                "History - European"
            } else if subjects.contains("brit") {
                "History - British"
            } else if subjects.contains("war") || subjects.contains("military") {
                "History - Warfare"
            } else {
                "History - Other"
            }
        }
        FloorId::CrimeMysteryGothic => {
            if subjects.contains("detective") {
                "Detective Fiction"
            } else if subjects.contains("gothic") || subjects.contains("horror") {
                "Gothic & Horror"
            } else {
                "Crime & Mystery"
            }
        }
        FloorId::ScifiFantasy => {
            if subjects.contains("science fiction")
                || subjects.contains("space")
                || subjects.contains("time travel")
            {
                "Science Fiction"
            } else if subjects.contains("myth")
                || subjects.contains("legend")
                || subjects.contains("folklore")
            {
                "Mythology & Folklore"
            } else {
                "Fantasy"
            }
        }
        FloorId::ChildrenYa => {
            if subjects.contains("fairy") {
                "Fairy Tales"
            } else if subjects.contains("animals") || subjects.contains("birds") {
                "Animals & Nature"
            } else {
                "Children"
            }
        }
        FloorId::PoetryDrama => {
            if subjects.contains("plays")
                || subjects.contains("drama")
                || subjects.contains("theatre")
            {
                "Drama"
            } else {
                "Poetry"
            }
        }
        FloorId::NonfictionThought => {
            if subjects.contains("philosophy") || subjects.contains("ethics") {
                "Philosophy"
            } else if subjects.contains("religion") || subjects.contains("theology") {
                "Religion"
            } else if subjects.contains("travel") || subjects.contains("geography") {
                "Travel"
            } else if subjects.contains("biograph") || subjects.contains("memoir") {
                "Biography"
            } else {
                "Science & Reference"
            }
        }
        // A fiction book with any shelf already returned above, so only
        // shelfless books reach this arm.
        FloorId::LiteratureFiction => "Other",
    }
}

/// Classification of the whole catalogue, grouped for the planning stage.
#[derive(Debug, Clone, Default)]
pub struct Classified {
    by_floor: BTreeMap<FloorId, Vec<u32>>,
    sub_by_book: HashMap<u32, String>,
    sub_counts: BTreeMap<FloorId, BTreeMap<String, usize>>,
}

impl Classified {
    /// Book ids assigned to a floor, in input order. Every floor answers,
    /// even when no book landed on it.
    pub fn floor_ids(&self, floor: FloorId) -> &[u32] {
        self.by_floor.get(&floor).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Subcategory chosen for a book, defaulting to `Other` for unknown
    /// ids.
    pub fn subcategory_of(&self, id: u32) -> &str {
        self.sub_by_book.get(&id).map(String::as_str).unwrap_or("Other")
    }

    /// Subcategory frequencies for a floor, sorted by label.
    pub fn floor_sub_counts(&self, floor: FloorId) -> Vec<(&str, usize)> {
        self.sub_counts
            .get(&floor)
            .map(|counts| counts.iter().map(|(sub, count)| (sub.as_str(), *count)).collect())
            .unwrap_or_default()
    }

    /// Total number of classified book entries across all floors.
    pub fn book_entries(&self) -> usize {
        self.by_floor.values().map(Vec::len).sum()
    }
}

/// Classifies every book onto a floor and a subcategory.
pub fn classify_books(books: &[BookMeta]) -> Classified {
    let mut classified = Classified::default();
    for floor in FloorId::ALL {
        classified.by_floor.entry(floor).or_default();
        classified.sub_counts.entry(floor).or_default();
    }

    for book in books {
        let floor = classify_floor(book);
        let sub = choose_subcategory(book, floor);
        classified.by_floor.entry(floor).or_default().push(book.id);
        *classified
            .sub_counts
            .entry(floor)
            .or_default()
            .entry(sub.clone())
            .or_insert(0) += 1;
        classified.sub_by_book.insert(book.id, sub);
    }
    classified
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: u32, bookshelves: &[&str], subjects: &[&str]) -> BookMeta {
        BookMeta {
            id,
            bookshelves: bookshelves.iter().map(|s| s.to_string()).collect(),
            subjects: subjects.iter().map(|s| s.to_string()).collect(),
            ..BookMeta::default()
        }
    }

    #[test]
    fn test_floor_id_strings_round_trip() {
        for floor in FloorId::ALL {
            let json = serde_json::to_string(&floor).unwrap();
            assert_eq!(json, format!("\"{}\"", floor.as_str()));
            let back: FloorId = serde_json::from_str(&json).unwrap();
            assert_eq!(back, floor);
        }
    }

    #[test]
    fn test_floor_order_is_room_assignment_order() {
        let ids: Vec<&str> = FloorId::ALL.iter().map(|f| f.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "history_war",
                "literature_fiction",
                "crime_mystery_gothic",
                "scifi_fantasy",
                "children_ya",
                "poetry_drama",
                "nonfiction_thought",
            ]
        );
        let mut sorted = FloorId::ALL;
        sorted.sort();
        assert_eq!(sorted, FloorId::ALL);
    }

    #[test]
    fn test_labels_use_non_breaking_hyphens() {
        assert_eq!(FloorId::ScifiFantasy.label(), "Sci\u{2011}Fi & Fantasy");
        assert_eq!(FloorId::NonfictionThought.label(), "Non\u{2011}fiction & Thought");
        assert_eq!(FloorId::HistoryWar.label(), "History & War");
    }

    #[test]
    fn test_every_floor_has_donors() {
        for floor in FloorId::ALL {
            let donors = floor.fill_from();
            assert!(!donors.is_empty());
            assert!(!donors.contains(&floor));
        }
    }

    #[test]
    fn test_classify_matches_known_subjects() {
        let cases = [
            (book(1, &[], &["History of England"]), FloorId::HistoryWar),
            (book(2, &["Children's Literature"], &[]), FloorId::ChildrenYa),
            (book(3, &[], &["Science fiction"]), FloorId::ScifiFantasy),
            (book(4, &[], &["DETECTIVE and mystery stories"]), FloorId::CrimeMysteryGothic),
            (book(5, &[], &["English poetry"]), FloorId::PoetryDrama),
            (book(6, &[], &["Philosophy, Ancient"]), FloorId::NonfictionThought),
            (book(7, &[], &["Man-woman relationships -- Fiction"]), FloorId::LiteratureFiction),
            (book(8, &[], &[]), FloorId::LiteratureFiction),
        ];
        for (meta, expected) in cases {
            assert_eq!(classify_floor(&meta), expected, "book {}", meta.id);
        }
    }

    #[test]
    fn test_classify_first_rule_wins() {
        // Matches both the children and poetry rules; children is tried
        // first.
        let meta = book(9, &[], &["Children's poetry"]);
        assert_eq!(classify_floor(&meta), FloorId::ChildrenYa);

        // "Folklore" belongs to the sci-fi rule, which is tried before the
        // crime rule that would claim "Ghost stories".
        let meta = book(10, &[], &["Ghost stories", "Folklore"]);
        assert_eq!(classify_floor(&meta), FloorId::ScifiFantasy);
    }

    #[test]
    fn test_norm_bookshelf() {
        assert_eq!(norm_bookshelf("Category: Science Fiction"), "Science Fiction");
        assert_eq!(norm_bookshelf("CATEGORY:   Gothic Fiction"), "Gothic Fiction");
        assert_eq!(norm_bookshelf("  spaced   out\tlabel  "), "spaced out label");
        assert_eq!(norm_bookshelf("Category:"), "");
        assert_eq!(norm_bookshelf("Best Category: Books"), "Best Category: Books");
    }

    #[test]
    fn test_subcategory_prefers_first_shelf() {
        let meta = book(11, &["Category: Gothic Fiction", "Horror"], &[]);
        assert_eq!(
            choose_subcategory(&meta, FloorId::CrimeMysteryGothic),
            "Gothic Fiction"
        );
    }

    #[test]
    fn test_subcategory_skips_broad_shelves_off_fiction_floor() {
        let meta = book(12, &["Novels"], &["France"]);
        assert_eq!(choose_subcategory(&meta, FloorId::HistoryWar), "History - Other");
        assert_eq!(choose_subcategory(&meta, FloorId::LiteratureFiction), "Novels");

        let meta = book(13, &["Short Stories", "Sea stories"], &[]);
        assert_eq!(choose_subcategory(&meta, FloorId::CrimeMysteryGothic), "Sea stories");
    }

    #[test]
    fn test_subcategory_keyword_buckets() {
        let cases = [
            (FloorId::HistoryWar, &["American Civil War"][..], "History - American"),
            (FloorId::HistoryWar, &["Napoleonic Wars"], "History - Warfare"),
            (FloorId::CrimeMysteryGothic, &["Detective and mystery stories"], "Detective Fiction"),
            (FloorId::ScifiFantasy, &["Time travel -- Fiction"], "Science Fiction"),
            (FloorId::ScifiFantasy, &["Legends, Celtic"], "Mythology & Folklore"),
            (FloorId::ChildrenYa, &["Fairy tales"], "Fairy Tales"),
            (FloorId::ChildrenYa, &["Animals -- Juvenile fiction"], "Animals & Nature"),
            (FloorId::PoetryDrama, &["Greek drama"], "Drama"),
            (FloorId::PoetryDrama, &["Sonnets"], "Poetry"),
            (FloorId::NonfictionThought, &["Voyages and travels"], "Travel"),
            (FloorId::NonfictionThought, &["Statesmen -- Biography"], "Biography"),
            (FloorId::NonfictionThought, &["Astronomy"], "Science & Reference"),
        ];
        for (floor, subjects, expected) in cases {
            let meta = book(14, &[], subjects);
            assert_eq!(choose_subcategory(&meta, floor), expected, "floor {}", floor);
        }
    }

    #[test]
    fn test_subcategory_fiction_without_shelves_is_other() {
        let meta = book(15, &[], &["Domestic fiction"]);
        assert_eq!(choose_subcategory(&meta, FloorId::LiteratureFiction), "Other");
        let blank = book(16, &["   "], &[]);
        assert_eq!(choose_subcategory(&blank, FloorId::LiteratureFiction), "Other");
    }

    #[test]
    fn test_classify_books_groups_and_counts() {
        let books = vec![
            book(21, &[], &["History of France"]),
            book(22, &[], &["History of Rome"]),
            book(23, &["Category: Western"], &[]),
            book(24, &[], &[]),
        ];
        let classified = classify_books(&books);

        assert_eq!(classified.floor_ids(FloorId::HistoryWar), &[21, 22]);
        assert_eq!(classified.floor_ids(FloorId::LiteratureFiction), &[23, 24]);
        assert_eq!(classified.floor_ids(FloorId::PoetryDrama), &[] as &[u32]);
        assert_eq!(classified.book_entries(), 4);

        assert_eq!(classified.subcategory_of(23), "Western");
        assert_eq!(classified.subcategory_of(24), "Other");
        assert_eq!(classified.subcategory_of(999), "Other");

        let history_counts = classified.floor_sub_counts(FloorId::HistoryWar);
        assert!(history_counts.contains(&("History - Other", 2)));
    }

    #[test]
    fn test_classify_books_all_floors_present_when_empty() {
        let classified = classify_books(&[]);
        for floor in FloorId::ALL {
            assert!(classified.floor_ids(floor).is_empty());
            assert!(classified.floor_sub_counts(floor).is_empty());
        }
        assert_eq!(classified.book_entries(), 0);
    }
}
