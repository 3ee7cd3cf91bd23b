//! Estonian lookup tables
//!
//! Read-only word tables shared by the formatter and the parser. The parse
//! map is built once on first use.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Grammatical case used to pick a word form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrammaticalCase {
    /// Cardinal, nominative ("kolm")
    Nominative,
    /// Cardinal, genitive ("kolme")
    Genitive,
    /// Cardinal, partitive ("kolme", "kahte")
    Partitive,
    /// Ordinal, nominative ("kolmas")
    OrdinalNominative,
    /// Ordinal, genitive ("kolmanda")
    OrdinalGenitive,
    /// Ordinal, partitive ("kolmandat")
    OrdinalPartitive,
}

impl GrammaticalCase {
    pub fn is_ordinal(&self) -> bool {
        matches!(
            self,
            Self::OrdinalNominative | Self::OrdinalGenitive | Self::OrdinalPartitive
        )
    }
}

/// Word for 0..=20, the tens and 100, in one case
#[derive(Debug)]
pub struct DigitTable {
    small: [&'static str; 21],
    tens: [&'static str; 10],
    hundred: &'static str,
}

impl DigitTable {
    /// Look up 0..=20, 30, 40, ..., 90 or 100
    pub fn get(&self, n: u32) -> Option<&'static str> {
        match n {
            0..=20 => Some(self.small[n as usize]),
            100 => Some(self.hundred),
            _ if n < 100 && n % 10 == 0 => Some(self.tens[(n / 10) as usize]),
            _ => None,
        }
    }

    pub fn zero(&self) -> &'static str {
        self.small[0]
    }

    pub fn one(&self) -> &'static str {
        self.small[1]
    }

    pub fn hundred(&self) -> &'static str {
        self.hundred
    }
}

pub static DIGITS_NOMINATIVE: DigitTable = DigitTable {
    small: [
        "null",
        "üks",
        "kaks",
        "kolm",
        "neli",
        "viis",
        "kuus",
        "seitse",
        "kaheksa",
        "üheksa",
        "kümme",
        "üksteist",
        "kaksteist",
        "kolmteist",
        "neliteist",
        "viisteist",
        "kuusteist",
        "seitseteist",
        "kaheksateist",
        "üheksateist",
        "kakskümmend",
    ],
    tens: [
        "",
        "kümme",
        "kakskümmend",
        "kolmkümmend",
        "nelikümmend",
        "viiskümmend",
        "kuuskümmend",
        "seitsekümmend",
        "kaheksakümmend",
        "üheksakümmend",
    ],
    hundred: "sada",
};

pub static DIGITS_GENITIVE: DigitTable = DigitTable {
    small: [
        "nulli",
        "ühe",
        "kahe",
        "kolme",
        "nelja",
        "viie",
        "kuue",
        "seitsme",
        "kaheksa",
        "üheksa",
        "kümne",
        "üheteistkümne",
        "kaheteistkümne",
        "kolmeteistkümne",
        "neljateistkümne",
        "viieteistkümne",
        "kuueteistkümne",
        "seitsmeteistkümne",
        "kaheksateistkümne",
        "üheksateistkümne",
        "kahekümne",
    ],
    tens: [
        "",
        "kümne",
        "kahekümne",
        "kolmekümne",
        "neljakümne",
        "viiekümne",
        "kuuekümne",
        "seitsmekümne",
        "kaheksakümne",
        "üheksakümne",
    ],
    hundred: "saja",
};

/// Powers of one thousand, indexed by triplet position
pub const SCALES_NOMINATIVE: [&str; 8] = [
    "", "tuhat", "miljon", "miljard", "billjon", "biljard", "trilljon", "trilljard",
];

pub const SCALES_GENITIVE: [&str; 8] = [
    "", "tuhande", "miljoni", "miljardi", "billjoni", "biljardi", "trilljoni", "trilljardi",
];

/// Fraction names for denominators 2..=20
const FRACTION_NAMES: [&str; 19] = [
    "pool",
    "kolmandik",
    "neljandik",
    "viiendik",
    "kuuendik",
    "seitsmendik",
    "kaheksandik",
    "üheksandik",
    "kümnendik",
    "üheteistkümnendik",
    "kaheteistkümnendik",
    "kolmeteistkümnendik",
    "neljateistkümnendik",
    "viieteistkümnendik",
    "kuueteistkümnendik",
    "seitsmeteistkümnendik",
    "kaheksateistkümnendik",
    "üheksateistkümnendik",
    "kahekümnendik",
];

pub fn fraction_name(denominator: u32) -> Option<&'static str> {
    match denominator {
        2..=20 => Some(FRACTION_NAMES[(denominator - 2) as usize]),
        _ => None,
    }
}

pub const MONTHS: [&str; 12] = [
    "jaanuar",
    "veebruar",
    "märts",
    "aprill",
    "mai",
    "juuni",
    "juuli",
    "august",
    "september",
    "oktoober",
    "november",
    "detsember",
];

pub fn is_month(word: &str) -> bool {
    let lower = word.to_lowercase();
    MONTHS.contains(&lower.as_str())
}

// Parse word lists, each indexed by value 0..=10
const PARSE_NOMINATIVE: [&str; 11] = [
    "null", "üks", "kaks", "kolm", "neli", "viis", "kuus", "seitse", "kaheksa", "üheksa",
    "kümme",
];
const PARSE_GENITIVE: [&str; 11] = [
    "nulli", "ühe", "kahe", "kolme", "nelja", "viie", "kuue", "seitsme", "kaheksa", "üheksa",
    "kümne",
];
const PARSE_PARTITIVE: [&str; 11] = [
    "nulli", "ühte", "kahte", "kolme", "nelja", "viite", "kuute", "seitset", "kaheksat",
    "üheksat", "kümmet",
];
const PARSE_ORDINAL_NOMINATIVE: [&str; 11] = [
    "nullis", "esimene", "teine", "kolmas", "neljas", "viies", "kuues", "seitsmes", "kaheksas",
    "üheksas", "kümnes",
];
const PARSE_ORDINAL_GENITIVE: [&str; 11] = [
    "nullinda",
    "esimese",
    "teise",
    "kolmanda",
    "neljanda",
    "viienda",
    "kuuenda",
    "seitsmenda",
    "kaheksanda",
    "üheksanda",
    "kümnenda",
];
const PARSE_ORDINAL_PARTITIVE: [&str; 11] = [
    "nullindat",
    "esimest",
    "teist",
    "kolmandat",
    "neljandat",
    "viiendat",
    "kuuendat",
    "seitsmendat",
    "kaheksandat",
    "üheksandat",
    "kümnendat",
];

/// Case endings recognised on genitive stems ("kolmandale", "ühega")
pub const CASE_SUFFIXES: [&str; 11] = [
    "sse", "s", "st", "le", "l", "lt", "ks", "ni", "na", "ta", "ga",
];

/// A recognised number word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordForm {
    pub value: u8,
    pub case: GrammaticalCase,
    /// Case ending stripped from the stem, if any
    pub suffix: Option<&'static str>,
}

/// Every recognised number word form mapped to its value
///
/// Plain forms are inserted before suffixed ones and the first insertion of a
/// form wins.
pub static WORD_FORMS: Lazy<HashMap<String, WordForm>> = Lazy::new(|| {
    let mut forms = HashMap::new();

    let plain: [(&[&str; 11], GrammaticalCase); 6] = [
        (&PARSE_NOMINATIVE, GrammaticalCase::Nominative),
        (&PARSE_GENITIVE, GrammaticalCase::Genitive),
        (&PARSE_PARTITIVE, GrammaticalCase::Partitive),
        (&PARSE_ORDINAL_NOMINATIVE, GrammaticalCase::OrdinalNominative),
        (&PARSE_ORDINAL_GENITIVE, GrammaticalCase::OrdinalGenitive),
        (&PARSE_ORDINAL_PARTITIVE, GrammaticalCase::OrdinalPartitive),
    ];

    for (words, case) in plain {
        for (value, word) in words.iter().enumerate() {
            forms.entry(word.to_string()).or_insert(WordForm {
                value: value as u8,
                case,
                suffix: None,
            });
        }
    }

    let stems: [(&[&str; 11], GrammaticalCase); 2] = [
        (&PARSE_GENITIVE, GrammaticalCase::Genitive),
        (&PARSE_ORDINAL_GENITIVE, GrammaticalCase::OrdinalGenitive),
    ];

    for (words, case) in stems {
        for suffix in CASE_SUFFIXES {
            for (value, word) in words.iter().enumerate() {
                forms.entry(format!("{}{}", word, suffix)).or_insert(WordForm {
                    value: value as u8,
                    case,
                    suffix: Some(suffix),
                });
            }
        }
    }

    tracing::trace!("Built Estonian word-form map with {} entries", forms.len());
    forms
});

/// Look up a single token, case-insensitively
pub fn lookup_word(word: &str) -> Option<WordForm> {
    if let Some(form) = WORD_FORMS.get(word) {
        return Some(*form);
    }
    WORD_FORMS.get(&word.to_lowercase()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_table_lookup() {
        assert_eq!(DIGITS_NOMINATIVE.get(0), Some("null"));
        assert_eq!(DIGITS_NOMINATIVE.get(13), Some("kolmteist"));
        assert_eq!(DIGITS_NOMINATIVE.get(40), Some("nelikümmend"));
        assert_eq!(DIGITS_NOMINATIVE.get(100), Some("sada"));
        assert_eq!(DIGITS_GENITIVE.get(70), Some("seitsmekümne"));
        assert_eq!(DIGITS_GENITIVE.get(100), Some("saja"));
        assert_eq!(DIGITS_NOMINATIVE.get(21), None);
        assert_eq!(DIGITS_NOMINATIVE.get(101), None);
    }

    #[test]
    fn test_fraction_names() {
        assert_eq!(fraction_name(2), Some("pool"));
        assert_eq!(fraction_name(9), Some("üheksandik"));
        assert_eq!(fraction_name(20), Some("kahekümnendik"));
        assert_eq!(fraction_name(1), None);
        assert_eq!(fraction_name(21), None);
    }

    #[test]
    fn test_months() {
        assert!(is_month("jaanuar"));
        assert!(is_month("Märts"));
        assert!(!is_month("esmaspäev"));
    }

    #[test]
    fn test_plain_word_forms() {
        assert_eq!(lookup_word("kolm").unwrap().value, 3);
        assert_eq!(lookup_word("kahte").unwrap().case, GrammaticalCase::Partitive);
        let first = lookup_word("esimene").unwrap();
        assert_eq!(first.value, 1);
        assert!(first.case.is_ordinal());
    }

    #[test]
    fn test_earlier_list_wins() {
        // "kolme" is both genitive and partitive
        let form = lookup_word("kolme").unwrap();
        assert_eq!(form.case, GrammaticalCase::Genitive);
        // "kümnes" is a plain ordinal before it is "kümne" + "s"
        let form = lookup_word("kümnes").unwrap();
        assert_eq!(form.case, GrammaticalCase::OrdinalNominative);
        assert_eq!(form.suffix, None);
    }

    #[test]
    fn test_suffixed_word_forms() {
        let form = lookup_word("kolmandale").unwrap();
        assert_eq!(form.value, 3);
        assert_eq!(form.case, GrammaticalCase::OrdinalGenitive);
        assert_eq!(form.suffix, Some("le"));

        let form = lookup_word("ühega").unwrap();
        assert_eq!(form.value, 1);
        assert_eq!(form.suffix, Some("ga"));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(lookup_word("Kolm").unwrap().value, 3);
        assert!(lookup_word("test").is_none());
    }
}
