//! Localized yes/no strings.
//!
//! Lookup walks the locale tag: exact match first, then the primary
//! language subtag, then English `yes`/`no`. The table covers the CLDR
//! "yes/no" pair for common languages; locale data richer than this
//! belongs in the engine, not here.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

/// A constructed formatting function: `bool -> &str`.
pub struct BooleanFormatter {
    yes: String,
    no: String,
}

impl BooleanFormatter {
    pub fn format(&self, value: bool) -> &str {
        if value { &self.yes } else { &self.no }
    }
}

static BOOLEAN_DATA: Lazy<FxHashMap<&'static str, (&'static str, &'static str)>> =
    Lazy::new(|| {
        FxHashMap::from_iter([
            ("en", ("yes", "no")),
            ("de", ("ja", "nein")),
            ("fr", ("oui", "non")),
            ("es", ("sí", "no")),
            ("it", ("sì", "no")),
            ("pt", ("sim", "não")),
            ("nl", ("ja", "nee")),
            ("sv", ("ja", "nej")),
            ("da", ("ja", "nej")),
            ("nb", ("ja", "nei")),
            ("fi", ("kyllä", "ei")),
            ("pl", ("tak", "nie")),
            ("cs", ("ano", "ne")),
            ("tr", ("evet", "hayır")),
            ("el", ("ναι", "όχι")),
            ("ru", ("да", "нет")),
            ("uk", ("так", "ні")),
            ("ar", ("نعم", "لا")),
            ("he", ("כן", "לא")),
            ("ja", ("はい", "いいえ")),
            ("ko", ("예", "아니요")),
            ("zh", ("是", "否")),
        ])
    });

pub(crate) fn lookup(locale: &str) -> BooleanFormatter {
    let pair = BOOLEAN_DATA
        .get(locale)
        .or_else(|| {
            locale
                .split('-')
                .next()
                .and_then(|primary| BOOLEAN_DATA.get(primary))
        })
        .copied()
        .unwrap_or(("yes", "no"));
    BooleanFormatter {
        yes: pair.0.to_string(),
        no: pair.1.to_string(),
    }
}
