// ============================================================================
// Digit Grouper
// Splits a numeral into the two-digit groups consumed by the root engine
// ============================================================================

use super::errors::{SqrtError, SqrtResult};
use super::numeral::Numeral;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ordered two-digit groups of a numeral, each in `0..=99`.
///
/// The whole part is split from the decimal point leftward, so an odd-length
/// whole part yields a single-digit first group: `123` becomes `[1, 23]`.
/// The fractional part is split from the decimal point rightward, and a final
/// group below 10 is multiplied by 10 to stand for an implied trailing zero:
/// `.4` becomes `[40]`.
///
/// # Example
/// ```
/// use digit_sqrt::domain::GroupSequence;
///
/// let groups = GroupSequence::parse("123.4").unwrap();
/// assert_eq!(groups.groups(), &[1, 23, 40]);
/// assert_eq!(groups.answer_decimal_index(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGroupSequence"))]
pub struct GroupSequence {
    groups: Vec<u8>,
    answer_decimal_index: usize,
}

/// Unchecked wire shape of a [`GroupSequence`]
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawGroupSequence {
    groups: Vec<u8>,
    answer_decimal_index: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGroupSequence> for GroupSequence {
    type Error = SqrtError;

    fn try_from(raw: RawGroupSequence) -> Result<Self, Self::Error> {
        if raw.groups.is_empty() {
            return Err(SqrtError::EmptyGroupSequence);
        }
        if let Some(bad) = raw.groups.iter().find(|&&g| g > 99) {
            return Err(SqrtError::InvalidRecord(format!("group {} exceeds 99", bad)));
        }
        if raw.answer_decimal_index > raw.groups.len() {
            return Err(SqrtError::InvalidRecord(format!(
                "decimal index {} past {} groups",
                raw.answer_decimal_index,
                raw.groups.len()
            )));
        }

        Ok(Self {
            groups: raw.groups,
            answer_decimal_index: raw.answer_decimal_index,
        })
    }
}

impl GroupSequence {
    /// Group a validated numeral.
    ///
    /// # Errors
    /// `EmptyGroupSequence` if no group could be formed.
    pub fn from_numeral(numeral: &Numeral) -> SqrtResult<Self> {
        let whole = numeral.whole().as_bytes();
        let mut groups = Vec::with_capacity(whole.len() / 2 + numeral.fraction().len() / 2 + 2);

        let lead = whole.len() % 2;
        if lead == 1 {
            groups.push(chunk_value(&whole[..1]));
        }
        groups.extend(whole[lead..].chunks(2).map(chunk_value));

        // One result digit per whole-side group lands left of the point
        let answer_decimal_index = groups.len();

        groups.extend(numeral.fraction().as_bytes().chunks(2).map(chunk_value));

        // Applies to any final group below 10, including a "0x" pair
        let last = groups.last_mut().ok_or(SqrtError::EmptyGroupSequence)?;
        if *last < 10 {
            *last *= 10;
        }

        tracing::debug!(?groups, answer_decimal_index, "grouped numeral {}", numeral);

        Ok(Self {
            groups,
            answer_decimal_index,
        })
    }

    /// Parse a numeral string and group it in one step.
    pub fn parse(input: &str) -> SqrtResult<Self> {
        Self::from_numeral(&Numeral::parse(input)?)
    }

    /// All groups in consumption order
    #[inline]
    pub fn groups(&self) -> &[u8] {
        &self.groups
    }

    /// Count of whole-side groups; the result's decimal point follows that many digits.
    #[inline]
    pub fn answer_decimal_index(&self) -> usize {
        self.answer_decimal_index
    }

    /// Groups formed from the whole part
    pub fn whole_groups(&self) -> &[u8] {
        &self.groups[..self.answer_decimal_index]
    }

    /// Groups formed from the fractional part
    pub fn fraction_groups(&self) -> &[u8] {
        &self.groups[self.answer_decimal_index..]
    }

    /// The group that seeds the first result digit
    #[inline]
    pub fn first(&self) -> Option<u8> {
        self.groups.first().copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self {
            groups: Vec::new(),
            answer_decimal_index: 0,
        }
    }
}

/// Value of one or two ASCII digits
fn chunk_value(chunk: &[u8]) -> u8 {
    chunk.iter().fold(0, |acc, b| acc * 10 + (b - b'0'))
}
