//! Card identifier model and normalization.
//!
//! Card numbers come in three surface forms:
//! ```text
//! F-013        regular print
//! F-013 (P)    promotional reprint (same rarity as the base card)
//! F-013-P      parallel variant (its own, distinct rarity)
//! ```
//!
//! The two promo notations must compare equal for deduplication and
//! lookup, so every comparison goes through the canonical `-P` form
//! produced by [`normalize`]. Which print a number refers to is decided
//! once, at parse time, and carried as a [`NumberKind`] so the rest of
//! the codebase never re-runs substring checks.

use thiserror::Error;

/// Prefix shared by every card number in the set.
pub const NUMBER_PREFIX: &str = "F-";

const PROMO_MARKER: &str = " (P)";
const PARALLEL_SUFFIX: &str = "-P";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NumberError {
    /// A number carrying both the `(P)` and `-P` markers is a data defect
    /// that must be surfaced, never coerced into one of the two forms.
    #[error("number '{0}' carries both the '(P)' and '-P' promo markers")]
    ConflictingMarkers(String),
}

/// Which print of a card a number refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumberKind {
    Regular,
    /// `"F-013 (P)"` — a reissue sharing the base card's rarity.
    PromoReprint { base: String },
    /// `"F-013-P"` — a distinct print with its own (`-P`) rarity.
    Parallel { base: String },
}

/// A parsed card identifier: the raw surface form plus its classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardNumber {
    raw: String,
    kind: NumberKind,
}

impl CardNumber {
    /// Parse a raw number string, classifying its variant kind.
    ///
    /// Returns [`NumberError::ConflictingMarkers`] when both promo
    /// notations are present at once.
    pub fn parse(raw: &str) -> Result<Self, NumberError> {
        let trimmed = raw.trim();
        let has_promo = trimmed.contains("(P)");

        if has_promo && trimmed.contains(PARALLEL_SUFFIX) {
            return Err(NumberError::ConflictingMarkers(trimmed.to_string()));
        }

        let kind = if has_promo {
            let base = trimmed.replace("(P)", "").trim().to_string();
            NumberKind::PromoReprint { base }
        } else if let Some(base) = trimmed.strip_suffix(PARALLEL_SUFFIX) {
            NumberKind::Parallel {
                base: base.to_string(),
            }
        } else {
            NumberKind::Regular
        };

        Ok(Self {
            raw: trimmed.to_string(),
            kind,
        })
    }

    /// The surface form as found in the data, trimmed.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn kind(&self) -> &NumberKind {
        &self.kind
    }

    /// The unsuffixed base number (`"F-013"` for all three forms).
    pub fn base(&self) -> &str {
        match &self.kind {
            NumberKind::Regular => &self.raw,
            NumberKind::PromoReprint { base } | NumberKind::Parallel { base } => base,
        }
    }

    /// The canonical form used for all equality and lookup comparisons:
    /// the base number for regular prints, `{base}-P` for both promo
    /// notations.
    pub fn canonical(&self) -> String {
        match &self.kind {
            NumberKind::Regular => self.raw.clone(),
            NumberKind::PromoReprint { base } | NumberKind::Parallel { base } => {
                format!("{base}{PARALLEL_SUFFIX}")
            }
        }
    }

    pub fn is_variant(&self) -> bool {
        !matches!(self.kind, NumberKind::Regular)
    }

    pub fn sort_key(&self) -> SortKey {
        sort_key(&self.raw)
    }
}

impl std::fmt::Display for CardNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Canonicalize a card number string for comparison.
///
/// The literal substring `" (P)"` becomes `"-P"`; anything else passes
/// through unchanged, so the function is idempotent. Malformed numbers
/// carrying both markers are *not* repaired here — [`CardNumber::parse`]
/// flags those.
pub fn normalize(number: &str) -> String {
    if number.contains(PROMO_MARKER) {
        number.replace(PROMO_MARKER, PARALLEL_SUFFIX)
    } else {
        number.to_string()
    }
}

/// Presentation sort key for card numbers.
///
/// Orders by the integer portion of the number, with the three print
/// forms of one base number adjacent in a fixed order: base, promo
/// `(P)`, parallel `-P`. Unparseable numbers sort after everything
/// valid rather than failing, so a stray identifier never aborts a
/// batch sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SortKey {
    base: u32,
    variant: u8,
}

impl SortKey {
    /// True when the numeric portion failed to parse and the key was
    /// assigned the sort-last sentinel.
    pub fn sorts_last(&self) -> bool {
        self.base == u32::MAX
    }
}

/// Compute the [`SortKey`] for a raw number string.
pub fn sort_key(number: &str) -> SortKey {
    let trimmed = number.trim();

    // Variant rank comes from the raw surface form: the promo notation
    // sorts between the base card and the parallel.
    let (variant, stripped) = if trimmed.contains("(P)") {
        (1, trimmed.replace("(P)", ""))
    } else if let Some(base) = trimmed.strip_suffix(PARALLEL_SUFFIX) {
        (2, base.to_string())
    } else {
        (0, trimmed.to_string())
    };

    let body = stripped.trim().trim_end_matches(PARALLEL_SUFFIX);
    let base = body
        .strip_prefix(NUMBER_PREFIX)
        .and_then(|digits| digits.parse::<u32>().ok())
        .unwrap_or(u32::MAX);

    SortKey { base, variant }
}
