//! Tag vocabulary and the keyword fallback classifier.
//!
//! The completion is asked to pick tags from a fixed vocabulary; when it
//! returns nothing usable, `heuristic_tags` assigns up to two tags from
//! keyword membership, preferring one domain tag plus one register tag.

/// The fixed tag vocabulary the store schema understands.
pub const ALLOWED_TAGS: &[&str] = &[
    "社会問題",
    "口語OK",
    "書き言葉・報道",
    "フォーマル",
    "専門用語",
    "法律用語",
    "ビジネス",
    "Football",
    "医学",
    "科学・技術",
    "IT",
    "スポーツ",
    "文化・芸術",
    "食べ物・料理",
    "歴史",
    "政治",
    "自然・環境",
];

/// Tie-break ordering: domain tags first, register tags last.
const PRIORITY: &[&str] = &[
    "法律用語",
    "ビジネス",
    "専門用語",
    "Football",
    "医学",
    "科学・技術",
    "IT",
    "スポーツ",
    "文化・芸術",
    "食べ物・料理",
    "歴史",
    "政治",
    "自然・環境",
    "社会問題",
    "フォーマル",
    "書き言葉・報道",
    "口語OK",
];

const REGISTER_TAGS: &[&str] = &["口語OK", "フォーマル", "書き言葉・報道"];

// Exact-membership domain word lists.

const SOCIAL_WORDS: &[&str] = &[
    "democracy",
    "feminism",
    "inequality",
    "racism",
    "poverty",
    "refugee",
    "gender",
    "discrimination",
    "immigration",
    "homelessness",
    "opioid",
    "climate",
    "activism",
];

const LEGAL_WORDS: &[&str] = &[
    "lawsuit",
    "litigation",
    "plaintiff",
    "defendant",
    "statute",
    "ordinance",
    "subpoena",
    "appeal",
    "jurisdiction",
    "precedent",
    "constitution",
    "tort",
    "contract",
];

const BUSINESS_WORDS: &[&str] = &[
    "revenue",
    "profit",
    "margin",
    "kpi",
    "roi",
    "stakeholder",
    "synergy",
    "merger",
    "acquisition",
    "quarterly",
    "fiscal",
    "okr",
    "pipeline",
    "invoice",
    "cashflow",
    "ebitda",
    "churn",
    "retention",
];

const FOOTBALL_WORDS: &[&str] = &[
    "goal",
    "assist",
    "midfielder",
    "striker",
    "forward",
    "defender",
    "winger",
    "offside",
    "penalty",
    "header",
    "fixture",
    "derby",
    "counterattack",
    "pressing",
];

const JARGON_WORDS: &[&str] = &[
    "algorithm",
    "protocol",
    "quantum",
    "neural",
    "latency",
    "throughput",
    "container",
    "orchestration",
    "kubernetes",
    "syntax",
    "blockchain",
];

/// Substring-membership domain lists.
const DOMAIN_SUBSTRINGS: &[(&str, &[&str])] = &[
    (
        "医学",
        &[
            "doctor", "medicine", "health", "disease", "virus", "vaccine", "hospital", "clinic",
        ],
    ),
    (
        "科学・技術",
        &[
            "physics",
            "chemistry",
            "biology",
            "experiment",
            "science",
            "scientific",
            "technology",
            "engineering",
        ],
    ),
    (
        "IT",
        &[
            "computer", "algorithm", "program", "coding", "software", "hardware", "server",
            "database", "network", "internet",
        ],
    ),
    (
        "スポーツ",
        &[
            "baseball",
            "basketball",
            "tennis",
            "cricket",
            "golf",
            "athletic",
            "athlete",
            "sports",
        ],
    ),
    (
        "文化・芸術",
        &[
            "music",
            "art",
            "painting",
            "film",
            "movie",
            "literature",
            "theater",
            "novel",
            "artist",
            "culture",
            "dance",
        ],
    ),
    (
        "食べ物・料理",
        &[
            "food",
            "meal",
            "cuisine",
            "recipe",
            "chef",
            "restaurant",
            "dish",
            "ingredient",
            "cook",
        ],
    ),
    (
        "歴史",
        &[
            "history",
            "historical",
            "ancient",
            "empire",
            "dynasty",
            "revolution",
            "historian",
        ],
    ),
    (
        "政治",
        &[
            "politic",
            "politics",
            "government",
            "election",
            "policy",
            "democracy",
            "diplomacy",
        ],
    ),
    (
        "自然・環境",
        &[
            "nature",
            "natural",
            "environment",
            "ecology",
            "climate",
            "forest",
            "wildlife",
            "plant",
            "animal",
        ],
    ),
];

// Register word lists; checked in this order, first match wins.

const COLLOQUIAL_WORDS: &[&str] = &[
    "hi", "yeah", "okay", "ok", "gonna", "wanna", "dude", "bro", "buddy", "cool", "kinda",
    "sorta", "ain't", "y'all",
];

const FORMAL_WORDS: &[&str] = &[
    "therefore",
    "hence",
    "pursuant",
    "notwithstanding",
    "hereby",
    "whereas",
    "aforementioned",
    "heretofore",
    "therein",
    "thereof",
];

const NEWS_WORDS: &[&str] = &[
    "summit",
    "ceasefire",
    "sanction",
    "parliament",
    "minister",
    "administration",
    "diplomacy",
    "alliance",
    "spokesperson",
    "cease-fire",
];

/// Keep only tags from the allowed vocabulary: split on commas, trim,
/// dedupe, sort, cap at two.
pub fn sanitize_tags(raw: &str) -> Vec<String> {
    let mut tags: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty() && ALLOWED_TAGS.contains(t))
        .collect();
    tags.sort_unstable();
    tags.dedup();
    tags.truncate(2);
    tags.into_iter().map(str::to_string).collect()
}

/// Classify a word by keyword membership, returning at most two tags:
/// the best-priority domain tag, then the best-priority register tag,
/// topping up by priority when one of the two is missing.
pub fn heuristic_tags(word: &str) -> Vec<String> {
    let w = word.trim().to_lowercase();
    let mut found: Vec<&'static str> = Vec::new();

    if SOCIAL_WORDS.contains(&w.as_str()) {
        push_tag(&mut found, "社会問題");
    }
    if LEGAL_WORDS.contains(&w.as_str()) || w.ends_with("act") {
        push_tag(&mut found, "法律用語");
    }
    if BUSINESS_WORDS.contains(&w.as_str()) {
        push_tag(&mut found, "ビジネス");
    }
    if FOOTBALL_WORDS.contains(&w.as_str()) {
        push_tag(&mut found, "Football");
    }
    if JARGON_WORDS.contains(&w.as_str()) {
        push_tag(&mut found, "専門用語");
    }
    for &(tag, keywords) in DOMAIN_SUBSTRINGS {
        if keywords.iter().any(|k| w.contains(k)) {
            push_tag(&mut found, tag);
        }
    }

    if COLLOQUIAL_WORDS.contains(&w.as_str()) {
        push_tag(&mut found, "口語OK");
    } else if FORMAL_WORDS.contains(&w.as_str()) {
        push_tag(&mut found, "フォーマル");
    } else if NEWS_WORDS.contains(&w.as_str()) {
        push_tag(&mut found, "書き言葉・報道");
    }

    pick_tags(&found)
}

fn push_tag(found: &mut Vec<&'static str>, tag: &'static str) {
    if !found.contains(&tag) {
        found.push(tag);
    }
}

fn priority_rank(tag: &str) -> usize {
    PRIORITY
        .iter()
        .position(|&t| t == tag)
        .unwrap_or(usize::MAX)
}

fn is_register(tag: &str) -> bool {
    REGISTER_TAGS.contains(&tag)
}

fn pick_tags(found: &[&'static str]) -> Vec<String> {
    let mut picked: Vec<&str> = Vec::new();
    if let Some(&tag) = found
        .iter()
        .filter(|t| !is_register(t))
        .min_by_key(|t| priority_rank(t))
    {
        picked.push(tag);
    }
    if let Some(&tag) = found
        .iter()
        .filter(|t| is_register(t))
        .min_by_key(|t| priority_rank(t))
    {
        picked.push(tag);
    }
    if picked.len() < 2 {
        let mut rest = found.to_vec();
        rest.sort_by_key(|t| priority_rank(t));
        for tag in rest {
            if !picked.contains(&tag) {
                picked.push(tag);
                if picked.len() == 2 {
                    break;
                }
            }
        }
    }
    picked.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_keeps_allowed_sorted_capped() {
        assert_eq!(sanitize_tags("ビジネス, bogus, IT"), vec!["IT", "ビジネス"]);
        assert_eq!(sanitize_tags("医学, IT, 歴史").len(), 2);
        assert!(sanitize_tags("").is_empty());
        assert!(sanitize_tags("random, nonsense").is_empty());
    }

    #[test]
    fn legal_membership_and_suffix() {
        assert_eq!(heuristic_tags("lawsuit"), vec!["法律用語"]);
        assert_eq!(heuristic_tags("impact"), vec!["法律用語"]);
    }

    #[test]
    fn domain_priority_resolves_overlap() {
        // democracy sits in both the social-issue list and the politics
        // substring list; politics outranks it.
        assert_eq!(heuristic_tags("democracy"), vec!["政治", "社会問題"]);
        // algorithm is both jargon and an IT keyword.
        assert_eq!(heuristic_tags("algorithm"), vec!["専門用語", "IT"]);
    }

    #[test]
    fn register_classification() {
        assert_eq!(heuristic_tags("gonna"), vec!["口語OK"]);
        assert_eq!(heuristic_tags("notwithstanding"), vec!["フォーマル"]);
        assert_eq!(heuristic_tags("summit"), vec!["書き言葉・報道"]);
    }

    #[test]
    fn domain_plus_register_pairs_up() {
        // parliament matches the news register list and no domain list.
        assert_eq!(heuristic_tags("parliament"), vec!["書き言葉・報道"]);
        // ceasefire: news register; no domain hit.
        assert_eq!(heuristic_tags("ceasefire"), vec!["書き言葉・報道"]);
    }

    #[test]
    fn never_more_than_two() {
        // climate: social issues + nature substring, both domains.
        let tags = heuristic_tags("climate");
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0], "自然・環境");
    }

    #[test]
    fn unknown_word_yields_nothing() {
        assert!(heuristic_tags("xylophone").is_empty());
    }
}
