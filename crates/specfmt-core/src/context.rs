//! The formatting context: one engine, one set of caches.
//!
//! Construction (rule derivation, matcher probing) is far more expensive
//! than use, so built parsers/formatters are memoized per cache key and
//! shared as `Arc`s: equal (locale, specifier) requests return the
//! identical function instance. The caches are the only shared mutable
//! state in the crate. Two threads racing on an uncached key may both
//! build; the first insertion wins and every caller observes a
//! fully-built entry.

use std::sync::Arc;

use dashmap::DashMap;

use specfmt_common::{
    BuildError, FormatError, FormatValue, LocaleEngine, NumberOptions, SpecifierError,
};

use crate::boolean::{self, BooleanFormatter};
use crate::date::fields::build_steps;
use crate::date::{DateFormatter, DateParser, TimeZoneSpec};
use crate::duration::DurationFormatter;
use crate::number::{NumberFormatter, NumberParser};
use crate::specifier::{DateSpecifier, NumberSpecifier};
use crate::template;

const DEFAULT_NUMBER_SPECIFIER: &str = "n";
const DEFAULT_DATE_SPECIFIER: &str = "f";

pub struct FormatContext {
    engine: Arc<dyn LocaleEngine>,
    number_parsers: DashMap<String, Arc<NumberParser>>,
    number_formatters: DashMap<String, Arc<NumberFormatter>>,
    date_parsers: DashMap<String, Arc<DateParser>>,
    date_formatters: DashMap<String, Arc<DateFormatter>>,
    duration_formatters: DashMap<String, Arc<DurationFormatter>>,
    boolean_formatters: DashMap<String, Arc<BooleanFormatter>>,
    digit_glyphs: DashMap<String, Arc<[String; 10]>>,
    pub(crate) name_tables: DashMap<String, Arc<Vec<String>>>,
}

impl FormatContext {
    pub fn new(engine: Arc<dyn LocaleEngine>) -> Self {
        Self {
            engine,
            number_parsers: DashMap::new(),
            number_formatters: DashMap::new(),
            date_parsers: DashMap::new(),
            date_formatters: DashMap::new(),
            duration_formatters: DashMap::new(),
            boolean_formatters: DashMap::new(),
            digit_glyphs: DashMap::new(),
            name_tables: DashMap::new(),
        }
    }

    pub fn engine(&self) -> &Arc<dyn LocaleEngine> {
        &self.engine
    }

    pub(crate) fn digit_glyphs(&self, locale: &str) -> Arc<[String; 10]> {
        if let Some(cached) = self.digit_glyphs.get(locale) {
            return cached.clone();
        }
        let built = Arc::new(self.engine.digit_glyphs(locale));
        self.digit_glyphs
            .entry(locale.to_string())
            .or_insert(built)
            .clone()
    }

    /// Build (or fetch) the number parser for a (locale, specifier) pair.
    /// An empty specifier means `n`.
    pub fn number_parser(
        &self,
        locale: &str,
        specifier: &str,
    ) -> Result<Arc<NumberParser>, SpecifierError> {
        let specifier = if specifier.is_empty() {
            DEFAULT_NUMBER_SPECIFIER
        } else {
            specifier
        };
        let spec = NumberSpecifier::parse(specifier, locale)?;
        if let Some(cached) = self.number_parsers.get(&spec.key) {
            return Ok(cached.clone());
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(locale, key = %spec.key, "deriving number parsing rules");
        let built = Arc::new(self.build_number_parser(locale, &spec));
        Ok(self
            .number_parsers
            .entry(spec.key)
            .or_insert(built)
            .clone())
    }

    /// Build a parser straight from an engine option bag. Uncached: when
    /// the same options recur, callers should keep the returned `Arc`.
    pub fn number_parser_with_options(
        &self,
        locale: &str,
        options: &NumberOptions,
    ) -> Arc<NumberParser> {
        Arc::new(NumberParser::from_options(
            self.engine.as_ref(),
            locale,
            options,
            self.digit_glyphs(locale),
        ))
    }

    fn build_number_parser(&self, locale: &str, spec: &NumberSpecifier) -> NumberParser {
        match spec.family {
            'b' | 'B' => NumberParser::binary(),
            'x' | 'X' => NumberParser::hex(),
            'r' | 'R' => NumberParser::round_trip(),
            'g' | 'G' => {
                let (fixed, scientific) = spec.general_options();
                let digits = self.digit_glyphs(locale);
                NumberParser::general(
                    NumberParser::from_options(self.engine.as_ref(), locale, &fixed, digits.clone()),
                    NumberParser::from_options(self.engine.as_ref(), locale, &scientific, digits),
                )
            }
            _ => NumberParser::from_options(
                self.engine.as_ref(),
                locale,
                &spec.engine_options(),
                self.digit_glyphs(locale),
            ),
        }
    }

    /// Build (or fetch) the number formatter for a (locale, specifier)
    /// pair. An empty specifier means `n`.
    pub fn number_formatter(
        &self,
        locale: &str,
        specifier: &str,
    ) -> Result<Arc<NumberFormatter>, SpecifierError> {
        let specifier = if specifier.is_empty() {
            DEFAULT_NUMBER_SPECIFIER
        } else {
            specifier
        };
        let spec = NumberSpecifier::parse(specifier, locale)?;
        if let Some(cached) = self.number_formatters.get(&spec.key) {
            return Ok(cached.clone());
        }
        let built = Arc::new(self.build_number_formatter(locale, &spec));
        Ok(self
            .number_formatters
            .entry(spec.key)
            .or_insert(built)
            .clone())
    }

    fn build_number_formatter(&self, locale: &str, spec: &NumberSpecifier) -> NumberFormatter {
        match spec.family {
            'b' | 'B' => NumberFormatter::binary(spec.precision),
            'x' => NumberFormatter::hex(false, spec.precision),
            'X' => NumberFormatter::hex(true, spec.precision),
            'r' | 'R' => NumberFormatter::round_trip(),
            'g' | 'G' => {
                let (fixed, scientific) = spec.general_options();
                NumberFormatter::general(self.engine.clone(), locale, fixed, scientific)
            }
            family => NumberFormatter::engine_backed(
                self.engine.clone(),
                locale,
                spec.engine_options(),
                matches!(family, 'd' | 'D'),
            ),
        }
    }

    /// Build (or fetch) the date parser for (locale, specifier, zone).
    /// An empty specifier means `f`.
    pub fn date_parser(
        &self,
        locale: &str,
        specifier: &str,
        time_zone: Option<&str>,
    ) -> Result<Arc<DateParser>, BuildError> {
        let specifier = if specifier.is_empty() {
            DEFAULT_DATE_SPECIFIER
        } else {
            specifier
        };
        let spec = DateSpecifier::parse(specifier, locale, time_zone)?;
        if let Some(cached) = self.date_parsers.get(&spec.key) {
            return Ok(cached.clone());
        }
        let built = if spec.locale_independent {
            DateParser::locale_independent(spec.family)
        } else {
            #[cfg(feature = "tracing")]
            tracing::debug!(locale, key = %spec.key, "probing date field matchers");
            let zone = TimeZoneSpec::resolve(time_zone)?;
            let mut options = spec.engine_options();
            options.time_zone = time_zone.map(str::to_string);
            let digits = self.digit_glyphs(locale);
            let steps = build_steps(self.engine.as_ref(), locale, &options, &digits)?;
            DateParser::driven(steps, digits, zone)
        };
        Ok(self
            .date_parsers
            .entry(spec.key)
            .or_insert(Arc::new(built))
            .clone())
    }

    /// Build (or fetch) the date formatter for (locale, specifier, zone).
    /// An empty specifier means `f`.
    pub fn date_formatter(
        &self,
        locale: &str,
        specifier: &str,
        time_zone: Option<&str>,
    ) -> Result<Arc<DateFormatter>, BuildError> {
        let specifier = if specifier.is_empty() {
            DEFAULT_DATE_SPECIFIER
        } else {
            specifier
        };
        let spec = DateSpecifier::parse(specifier, locale, time_zone)?;
        if let Some(cached) = self.date_formatters.get(&spec.key) {
            return Ok(cached.clone());
        }
        let built = if spec.locale_independent {
            DateFormatter::locale_independent(spec.family)
        } else {
            let zone = TimeZoneSpec::resolve(time_zone)?;
            let mut options = spec.engine_options();
            options.time_zone = time_zone.map(str::to_string);
            let year_parser = self.number_parser(locale, "d")?;
            let year_formatter = self.number_formatter(locale, "d")?;
            DateFormatter::engine_backed(
                self.engine.clone(),
                locale,
                options,
                zone,
                year_parser,
                year_formatter,
            )
        };
        Ok(self
            .date_formatters
            .entry(spec.key)
            .or_insert(Arc::new(built))
            .clone())
    }

    /// Build (or fetch) a duration formatter. `format` is a preset name
    /// (`constant`, `short`, `long`, `racing`) or a raw pattern; `None`
    /// means the `short` preset.
    pub fn duration_formatter(
        &self,
        locale: &str,
        format: Option<&str>,
    ) -> Result<Arc<DurationFormatter>, BuildError> {
        let pattern = crate::duration::resolve_pattern(format);
        let key = format!("{locale}/{pattern}");
        if let Some(cached) = self.duration_formatters.get(&key) {
            return Ok(cached.clone());
        }
        let built = Arc::new(DurationFormatter::compile(self, locale, pattern)?);
        Ok(self
            .duration_formatters
            .entry(key)
            .or_insert(built)
            .clone())
    }

    pub fn boolean_formatter(&self, locale: &str) -> Arc<BooleanFormatter> {
        if let Some(cached) = self.boolean_formatters.get(locale) {
            return cached.clone();
        }
        let built = Arc::new(boolean::lookup(locale));
        self.boolean_formatters
            .entry(locale.to_string())
            .or_insert(built)
            .clone()
    }

    /// `.NET string.Format`-style interpolation: `{0}`, `{1:N2}`, …
    pub fn format_template(
        &self,
        locale: &str,
        template_text: &str,
        args: &[FormatValue],
    ) -> Result<String, FormatError> {
        template::format_template(self, locale, template_text, args)
    }
}
