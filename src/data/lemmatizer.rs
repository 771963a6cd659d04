// ============================================================
// Layer 4 — Noun Lemmatizer
// ============================================================
// Maps a token to its dictionary (noun) form.
//
// The rules follow WordNet's `morphy` noun detachment table.
// WordNet then checks each candidate against its lexicon; we
// carry no lexicon, so a length floor and per-rule guards
// stand in for that lookup:
//
//   1. exception table       children → child, buses → bus, news → news
//   2. protected endings     -ss, -us, -is stay as they are
//   3. suffix rules          first rule whose guard accepts the
//                            candidate and leaves at least 3 chars
//   4. otherwise             token unchanged
//
// The guards keep `-ses` and `-zes` from eating a real `e`:
// classes → class and viruses → virus, but houses → house and
// sizes → size.
//
// Everything is treated as a noun, so verb forms such as
// "running" pass through untouched while "runs" → "run".

use std::collections::HashMap;

use crate::domain::traits::WordNormalizer;

const MIN_LEMMA_CHARS: usize = 3;

/// Endings that look plural but almost never are.
const PROTECTED_ENDINGS: &[&str] = &["ss", "us", "is"];

/// `-us` endings where the `e` usually belongs to the singular
/// (house, cause, excuse, abuse, refuse, amuse).
const SILENT_E_US: &[&str] = &["ous", "aus", "cus", "bus", "fus", "mus"];

struct SuffixRule {
    suffix:      &'static str,
    replacement: &'static str,
    accepts:     fn(&str) -> bool,
}

const SUFFIX_RULES: &[SuffixRule] = &[
    SuffixRule { suffix: "ies",  replacement: "y",   accepts: any },
    SuffixRule { suffix: "xes",  replacement: "x",   accepts: any },
    SuffixRule { suffix: "ches", replacement: "ch",  accepts: any },
    SuffixRule { suffix: "shes", replacement: "sh",  accepts: any },
    SuffixRule { suffix: "zes",  replacement: "z",   accepts: doubled_z },
    SuffixRule { suffix: "ses",  replacement: "s",   accepts: sibilant_singular },
    SuffixRule { suffix: "men",  replacement: "man", accepts: any },
    SuffixRule { suffix: "s",    replacement: "",    accepts: any },
];

fn any(_: &str) -> bool {
    true
}

/// buzz, fizz, waltz, blitz
fn doubled_z(candidate: &str) -> bool {
    candidate.ends_with("zz") || candidate.ends_with("tz")
}

/// class, boss, virus, campus; not hous(e), caus(e)
fn sibilant_singular(candidate: &str) -> bool {
    candidate.ends_with("ss")
        || (candidate.ends_with("us")
            && candidate.chars().count() >= 4
            && !SILENT_E_US.iter().any(|e| candidate.ends_with(e)))
}

const EXCEPTIONS: &[(&str, &str)] = &[
    // irregular plurals
    ("children", "child"),
    ("men", "man"),
    ("women", "woman"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("geese", "goose"),
    ("mice", "mouse"),
    ("lice", "louse"),
    ("oxen", "ox"),
    ("dice", "die"),
    ("data", "datum"),
    ("criteria", "criterion"),
    ("phenomena", "phenomenon"),
    ("strata", "stratum"),
    // -ves → -f / -fe
    ("lives", "life"),
    ("wives", "wife"),
    ("knives", "knife"),
    ("leaves", "leaf"),
    ("halves", "half"),
    ("wolves", "wolf"),
    ("shelves", "shelf"),
    ("thieves", "thief"),
    ("calves", "calf"),
    ("loaves", "loaf"),
    // -ses whose singular the guards cannot tell apart
    ("buses", "bus"),
    ("gases", "gas"),
    ("lenses", "lens"),
    ("atlases", "atlas"),
    ("aliases", "alias"),
    ("canvases", "canvas"),
    ("biases", "bias"),
    ("focuses", "focus"),
    ("quizzes", "quiz"),
    // Greek -is → -es
    ("analyses", "analysis"),
    ("crises", "crisis"),
    ("theses", "thesis"),
    ("hypotheses", "hypothesis"),
    ("diagnoses", "diagnosis"),
    ("syntheses", "synthesis"),
    // look plural, are not
    ("news", "news"),
    ("series", "series"),
    ("species", "species"),
    ("means", "means"),
    ("physics", "physics"),
    ("mathematics", "mathematics"),
    ("politics", "politics"),
    ("always", "always"),
    ("perhaps", "perhaps"),
    ("whereas", "whereas"),
    ("towards", "towards"),
    ("afterwards", "afterwards"),
    ("sometimes", "sometimes"),
    ("besides", "besides"),
    ("omen", "omen"),
    ("abdomen", "abdomen"),
    ("specimen", "specimen"),
];

#[derive(Debug, Clone)]
pub struct NounLemmatizer {
    exceptions: HashMap<&'static str, &'static str>,
}

impl NounLemmatizer {
    pub fn new() -> Self {
        Self {
            exceptions: EXCEPTIONS.iter().copied().collect(),
        }
    }

    fn detach(word: &str) -> Option<String> {
        SUFFIX_RULES.iter().find_map(|rule| {
            let stem = word.strip_suffix(rule.suffix)?;
            let candidate = format!("{stem}{}", rule.replacement);
            ((rule.accepts)(&candidate) && candidate.chars().count() >= MIN_LEMMA_CHARS)
                .then_some(candidate)
        })
    }
}

impl WordNormalizer for NounLemmatizer {
    fn normalize(&self, word: &str) -> String {
        if let Some(lemma) = self.exceptions.get(word) {
            return (*lemma).to_string();
        }
        if PROTECTED_ENDINGS.iter().any(|e| word.ends_with(e)) {
            return word.to_string();
        }
        Self::detach(word).unwrap_or_else(|| word.to_string())
    }
}
