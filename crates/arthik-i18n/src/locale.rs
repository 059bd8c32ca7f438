//! Supported locales and language-tag parsing.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Locale codes the application ships catalogs for.
///
/// English is the source locale: its catalog holds the authored strings and it
/// never triggers machine translation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocaleCode {
    /// English (source locale).
    En,
    /// Hindi.
    Hi,
    /// Kannada.
    Kn,
}

/// Default fallback locale; also the translation source language.
pub const DEFAULT_LOCALE: LocaleCode = LocaleCode::En;

impl LocaleCode {
    /// All supported locales in display order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::En, Self::Hi, Self::Kn]
    }

    /// RFC 5646 tag for the locale.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Hi => "hi",
            Self::Kn => "kn",
        }
    }

    /// Native display name for language pickers.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Hi => "हिन्दी",
            Self::Kn => "ಕನ್ನಡ",
        }
    }

    /// English language name used when prompting the completion backend.
    #[must_use]
    pub const fn language_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Hi => "Hindi",
            Self::Kn => "Kannada",
        }
    }

    /// Whether this locale is the translation source language.
    #[must_use]
    pub const fn is_source(self) -> bool {
        matches!(self, Self::En)
    }

    /// Map an arbitrary language tag (`hi`, `hi-IN`, `EN-us`) to a supported
    /// locale, ignoring the region subtag.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag.split('-').next().unwrap_or(tag).trim();
        Self::all()
            .into_iter()
            .find(|locale| primary.eq_ignore_ascii_case(locale.code()))
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.code())
    }
}
