use std::fmt;

/// Text shown when no digit has been entered yet.
pub const EMPTY_ANSWER: &str = "0";

/// Bounded answer text built from finger-count readings.
///
/// Starts as `"0"`. The first appended reading replaces the `"0"`; later
/// readings are concatenated. Readings that would push the text past
/// `max_len` characters are dropped whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    text: String,
    max_len: usize,
}

impl Answer {
    pub fn new(max_len: usize) -> Self {
        Self {
            text: EMPTY_ANSWER.to_string(),
            max_len,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// True while the answer still holds the initial `"0"`.
    pub fn is_empty(&self) -> bool {
        self.text == EMPTY_ANSWER
    }

    /// Append a finger-count reading. Returns whether it was accepted.
    pub fn push_reading(&mut self, reading: u32) -> bool {
        let digits = reading.to_string();
        let base_len = if self.is_empty() { 0 } else { self.text.len() };
        if base_len + digits.len() > self.max_len {
            return false;
        }
        if self.is_empty() {
            self.text.clear();
        }
        self.text.push_str(&digits);
        true
    }

    /// Back to `"0"`. Returns whether anything changed.
    pub fn reset(&mut self) -> bool {
        if self.is_empty() {
            return false;
        }
        self.text.clear();
        self.text.push_str(EMPTY_ANSWER);
        true
    }

    /// Numeric value of the text.
    pub fn value(&self) -> Option<u64> {
        self.text.parse().ok()
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_reading_replaces_zero() {
        let mut answer = Answer::new(4);
        assert!(answer.is_empty());
        assert!(answer.push_reading(3));
        assert_eq!(answer.as_str(), "3");
        assert!(answer.push_reading(7));
        assert_eq!(answer.as_str(), "37");
    }

    #[test]
    fn test_zero_reading_after_reset() {
        let mut answer = Answer::new(4);
        assert!(answer.push_reading(0));
        assert_eq!(answer.as_str(), "0");
        // A literal zero reading is indistinguishable from the empty answer.
        assert!(answer.push_reading(5));
        assert_eq!(answer.as_str(), "5");
    }

    #[test]
    fn test_length_cap() {
        let mut answer = Answer::new(4);
        for reading in [1, 2, 3, 4] {
            assert!(answer.push_reading(reading));
        }
        assert!(!answer.push_reading(5));
        assert_eq!(answer.as_str(), "1234");

        // Two-digit reading that would overflow is dropped whole.
        let mut answer = Answer::new(4);
        for reading in [1, 2, 3] {
            answer.push_reading(reading);
        }
        assert!(!answer.push_reading(10));
        assert_eq!(answer.as_str(), "123");
        assert!(answer.push_reading(9));
    }

    #[test]
    fn test_reset() {
        let mut answer = Answer::new(4);
        assert!(!answer.reset());
        answer.push_reading(4);
        answer.push_reading(2);
        assert_eq!(answer.value(), Some(42));
        assert!(answer.reset());
        assert_eq!(answer.to_string(), "0");
        assert_eq!(answer.value(), Some(0));
    }
}
