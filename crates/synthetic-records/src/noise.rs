//! Character-level typo injection.
//!
//! Edits are applied to a `Vec<char>` so multi-byte letters (Cyrillic,
//! umlauts) are never split. Positions are re-drawn against the current,
//! already edited length, so edits compound.

use rand::Rng;

use crate::error::GenerationError;
use crate::locale::Locale;

/// Expected number of character edits per field.
///
/// The integer part is the guaranteed edit count; the fractional part is the
/// probability of one extra edit.
///
/// # Example
///
/// ```
/// use synthetic_records::ErrorBudget;
///
/// let budget = ErrorBudget::new(2.25).expect("valid budget");
/// assert_eq!(budget.guaranteed_edits(), 2);
/// assert!((budget.extra_edit_probability() - 0.25).abs() < f64::EPSILON);
/// assert!(ErrorBudget::new(-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct ErrorBudget(f64);

impl ErrorBudget {
    /// No edits at all.
    pub const NONE: Self = Self(0.0);

    /// Validates a finite, non-negative budget.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidErrorBudget`] for negative, NaN or
    /// infinite values.
    pub fn new(value: f64) -> Result<Self, GenerationError> {
        if value.is_finite() && value >= 0.0 {
            Ok(Self(value))
        } else {
            Err(GenerationError::InvalidErrorBudget { value })
        }
    }

    /// Raw budget value.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Returns the smaller of this budget and `ceiling`.
    #[must_use]
    pub const fn min(self, ceiling: Self) -> Self {
        if self.0 > ceiling.0 { ceiling } else { self }
    }

    /// Number of edits that always happen.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "value is finite and non-negative; saturating cast is intended"
    )]
    pub fn guaranteed_edits(self) -> u64 {
        self.0.floor() as u64
    }

    /// Probability of one additional edit.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "fractional part of the budget")]
    pub fn extra_edit_probability(self) -> f64 {
        self.0 - self.0.floor()
    }
}

/// Kind of edit applied at a random position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edit {
    Delete,
    Insert,
    Swap,
}

impl Edit {
    const KINDS: [Self; 3] = [Self::Delete, Self::Insert, Self::Swap];
}

/// Applies `budget` random edits to `input` using the locale's seeded state.
///
/// Deletions never empty a string, swaps at the last position are skipped and
/// an empty input is only ever grown by insertions.
///
/// # Example
///
/// ```
/// use synthetic_records::{ErrorBudget, Locale, Region, introduce_errors};
///
/// let mut locale = Locale::new(Region::En, 1);
/// assert_eq!(introduce_errors("Ada", ErrorBudget::NONE, &mut locale), "Ada");
///
/// let noisy = introduce_errors("Ada Lovelace", ErrorBudget::new(3.0).expect("budget"), &mut locale);
/// assert!(!noisy.is_empty());
/// ```
pub fn introduce_errors(input: &str, budget: ErrorBudget, locale: &mut Locale) -> String {
    let mut chars: Vec<char> = input.chars().collect();

    for _ in 0..budget.guaranteed_edits() {
        apply_random_edit(&mut chars, locale);
    }

    let probability = budget.extra_edit_probability();
    if probability > 0.0 && locale.rng().random::<f64>() < probability {
        apply_random_edit(&mut chars, locale);
    }

    chars.into_iter().collect()
}

fn apply_random_edit(chars: &mut Vec<char>, locale: &mut Locale) {
    let kind = draw_edit(locale);
    let index = if chars.is_empty() {
        0
    } else {
        locale.rng().random_range(0..chars.len())
    };
    apply_edit(chars, kind, index, locale);
}

fn draw_edit(locale: &mut Locale) -> Edit {
    let slot = locale.rng().random_range(0..Edit::KINDS.len());
    Edit::KINDS.get(slot).copied().unwrap_or(Edit::Swap)
}

fn apply_edit(chars: &mut Vec<char>, kind: Edit, index: usize, locale: &mut Locale) {
    match kind {
        Edit::Delete if chars.len() > 1 => {
            chars.remove(index);
        }
        Edit::Insert => {
            let letter = locale.random_letter();
            chars.insert(index, letter);
        }
        Edit::Swap if index + 1 < chars.len() => chars.swap(index, index + 1),
        Edit::Delete | Edit::Swap => {}
    }
}
