//! Embedded fixture data for five locales. Symbol choices mirror CLDR so
//! the engine's output has the same texture real ICU output has:
//! narrow/no-break spaces as group separators, bidi-marked Arabic affixes,
//! a U+2212 minus for Swedish.

pub(crate) struct LocaleData {
    pub digits: [&'static str; 10],
    pub group: &'static str,
    pub decimal: &'static str,
    pub plus: &'static str,
    pub minus: &'static str,
    pub exponent: &'static str,
    pub exponent_minus: &'static str,
    pub nan: &'static str,
    pub infinity: &'static str,
    pub percent_suffix: &'static str,
    /// Currency symbol before the number (true) or after it (false).
    pub currency_prefixed: bool,
    pub currency_gap: &'static str,
    /// Accounting negatives render as parentheses.
    pub accounting_parens: bool,
    pub date_short: &'static str,
    pub date_full: &'static str,
    pub time_short: &'static str,
    pub time_medium: &'static str,
    pub glue_short: &'static str,
    pub glue_full: &'static str,
    pub month_day: &'static str,
    pub year_month: &'static str,
    pub months_long: [&'static str; 12],
    pub months_short: [&'static str; 12],
    pub weekdays_long: [&'static str; 7],
    pub weekdays_short: [&'static str; 7],
    /// (before noon, after noon)
    pub day_periods: (&'static str, &'static str),
}

const ASCII_DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

static EN_US: LocaleData = LocaleData {
    digits: ASCII_DIGITS,
    group: ",",
    decimal: ".",
    plus: "+",
    minus: "-",
    exponent: "E",
    exponent_minus: "-",
    nan: "NaN",
    infinity: "∞",
    percent_suffix: "%",
    currency_prefixed: true,
    currency_gap: "",
    accounting_parens: true,
    date_short: "M/d/yyyy",
    date_full: "EEEE, MMMM d, yyyy",
    time_short: "h:mm a",
    time_medium: "h:mm:ss a",
    glue_short: ", ",
    glue_full: " 'at' ",
    month_day: "MMMM d",
    year_month: "MMMM yyyy",
    months_long: [
        "January", "February", "March", "April", "May", "June", "July", "August", "September",
        "October", "November", "December",
    ],
    months_short: [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ],
    weekdays_long: [
        "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday",
    ],
    weekdays_short: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
    day_periods: ("AM", "PM"),
};

static DE_DE: LocaleData = LocaleData {
    digits: ASCII_DIGITS,
    group: ".",
    decimal: ",",
    plus: "+",
    minus: "-",
    exponent: "E",
    exponent_minus: "-",
    nan: "NaN",
    infinity: "∞",
    percent_suffix: "\u{A0}%",
    currency_prefixed: false,
    currency_gap: "\u{A0}",
    accounting_parens: false,
    date_short: "dd.MM.yy",
    date_full: "EEEE, d. MMMM yyyy",
    time_short: "HH:mm",
    time_medium: "HH:mm:ss",
    glue_short: ", ",
    glue_full: " 'um' ",
    month_day: "d. MMMM",
    year_month: "MMMM yyyy",
    months_long: [
        "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August", "September",
        "Oktober", "November", "Dezember",
    ],
    months_short: [
        "Jan.", "Feb.", "März", "Apr.", "Mai", "Juni", "Juli", "Aug.", "Sept.", "Okt.", "Nov.",
        "Dez.",
    ],
    weekdays_long: [
        "Sonntag", "Montag", "Dienstag", "Mittwoch", "Donnerstag", "Freitag", "Samstag",
    ],
    weekdays_short: ["So.", "Mo.", "Di.", "Mi.", "Do.", "Fr.", "Sa."],
    day_periods: ("AM", "PM"),
};

static FR_FR: LocaleData = LocaleData {
    digits: ASCII_DIGITS,
    group: "\u{202F}",
    decimal: ",",
    plus: "+",
    minus: "-",
    exponent: "E",
    exponent_minus: "-",
    nan: "NaN",
    infinity: "∞",
    percent_suffix: "\u{A0}%",
    currency_prefixed: false,
    currency_gap: "\u{A0}",
    accounting_parens: false,
    date_short: "dd/MM/yyyy",
    date_full: "EEEE d MMMM yyyy",
    time_short: "HH:mm",
    time_medium: "HH:mm:ss",
    glue_short: " ",
    glue_full: " 'à' ",
    month_day: "d MMMM",
    year_month: "MMMM yyyy",
    months_long: [
        "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août", "septembre",
        "octobre", "novembre", "décembre",
    ],
    months_short: [
        "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.",
        "nov.", "déc.",
    ],
    weekdays_long: [
        "dimanche", "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi",
    ],
    weekdays_short: ["dim.", "lun.", "mar.", "mer.", "jeu.", "ven.", "sam."],
    day_periods: ("AM", "PM"),
};

static AR_EG: LocaleData = LocaleData {
    digits: ["٠", "١", "٢", "٣", "٤", "٥", "٦", "٧", "٨", "٩"],
    group: "٬",
    decimal: "٫",
    plus: "\u{61C}+",
    minus: "\u{61C}-\u{200F}",
    exponent: "أس",
    exponent_minus: "\u{61C}-",
    nan: "ليس رقمًا",
    infinity: "∞",
    percent_suffix: "٪\u{61C}",
    currency_prefixed: false,
    currency_gap: "\u{A0}",
    accounting_parens: false,
    date_short: "d\u{200F}/M\u{200F}/yyyy",
    date_full: "EEEE، d MMMM yyyy",
    time_short: "h:mm a",
    time_medium: "h:mm:ss a",
    glue_short: "، ",
    glue_full: " في ",
    month_day: "d MMMM",
    year_month: "MMMM yyyy",
    months_long: [
        "يناير", "فبراير", "مارس", "أبريل", "مايو", "يونيو", "يوليو", "أغسطس", "سبتمبر",
        "أكتوبر", "نوفمبر", "ديسمبر",
    ],
    months_short: [
        "يناير", "فبراير", "مارس", "أبريل", "مايو", "يونيو", "يوليو", "أغسطس", "سبتمبر",
        "أكتوبر", "نوفمبر", "ديسمبر",
    ],
    weekdays_long: [
        "الأحد", "الاثنين", "الثلاثاء", "الأربعاء", "الخميس", "الجمعة", "السبت",
    ],
    weekdays_short: [
        "الأحد", "الاثنين", "الثلاثاء", "الأربعاء", "الخميس", "الجمعة", "السبت",
    ],
    day_periods: ("ص", "م"),
};

static SV_SE: LocaleData = LocaleData {
    digits: ASCII_DIGITS,
    group: "\u{A0}",
    decimal: ",",
    plus: "+",
    minus: "\u{2212}",
    exponent: "E",
    exponent_minus: "\u{2212}",
    nan: "NaN",
    infinity: "∞",
    percent_suffix: "\u{A0}%",
    currency_prefixed: false,
    currency_gap: "\u{A0}",
    accounting_parens: false,
    date_short: "yyyy-MM-dd",
    date_full: "EEEE d MMMM yyyy",
    time_short: "HH:mm",
    time_medium: "HH:mm:ss",
    glue_short: " ",
    glue_full: " ",
    month_day: "d MMMM",
    year_month: "MMMM yyyy",
    months_long: [
        "januari", "februari", "mars", "april", "maj", "juni", "juli", "augusti", "september",
        "oktober", "november", "december",
    ],
    months_short: [
        "jan.", "feb.", "mars", "apr.", "maj", "juni", "juli", "aug.", "sep.", "okt.", "nov.",
        "dec.",
    ],
    weekdays_long: [
        "söndag", "måndag", "tisdag", "onsdag", "torsdag", "fredag", "lördag",
    ],
    weekdays_short: ["sön", "mån", "tis", "ons", "tors", "fre", "lör"],
    day_periods: ("fm", "em"),
};

/// Exact tag first, then the primary language subtag; en-US is the
/// fallback for everything else.
pub(crate) fn locale_data(locale: &str) -> &'static LocaleData {
    let primary = locale.split('-').next().unwrap_or(locale);
    match (locale, primary) {
        (_, "en") => &EN_US,
        (_, "de") => &DE_DE,
        (_, "fr") => &FR_FR,
        (_, "ar") => &AR_EG,
        (_, "sv") => &SV_SE,
        _ => &EN_US,
    }
}

pub(crate) fn currency_symbol(code: &str) -> Option<&'static str> {
    match code {
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "JPY" => Some("¥"),
        "SEK" => Some("kr"),
        "EGP" => Some("ج.م.\u{200F}"),
        _ => None,
    }
}

pub(crate) fn display_name(
    primary: &str,
    kind: specfmt_common::DisplayNameKind,
    code: &str,
) -> Option<&'static str> {
    use specfmt_common::DisplayNameKind::*;
    match (primary, kind, code) {
        ("en", Language, "en") => Some("English"),
        ("en", Language, "de") => Some("German"),
        ("en", Language, "fr") => Some("French"),
        ("en", Language, "ar") => Some("Arabic"),
        ("en", Language, "sv") => Some("Swedish"),
        ("en", Language, "es") => Some("Spanish"),
        ("en", Region, "US") => Some("United States"),
        ("en", Region, "DE") => Some("Germany"),
        ("en", Region, "FR") => Some("France"),
        ("en", Region, "EG") => Some("Egypt"),
        ("en", Region, "SE") => Some("Sweden"),
        ("en", Region, "GB") => Some("United Kingdom"),
        ("de", Language, "en") => Some("Englisch"),
        ("de", Language, "de") => Some("Deutsch"),
        ("de", Language, "fr") => Some("Französisch"),
        ("de", Region, "US") => Some("Vereinigte Staaten"),
        ("de", Region, "DE") => Some("Deutschland"),
        ("fr", Language, "en") => Some("anglais"),
        ("fr", Language, "fr") => Some("français"),
        ("fr", Language, "de") => Some("allemand"),
        _ => None,
    }
}
