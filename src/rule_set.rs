use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Rules of Conway's Game of Life.
pub const B3S23: RuleSet = RuleSet::new(0b1000, 0b1100);

/// Largest neighbour count a Moore neighbourhood can produce
const MAX_NEIGHBORS: u8 = 8;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleSetError {
    #[error("Unexpected character '{0}' in rulestring")]
    InvalidChar(char),

    #[error("Neighbour count {0} is out of range, expected 0 to 8")]
    CountOutOfRange(u32),

    #[error("Rulestring is empty")]
    Empty,
}

/// # Representation
/// Life rules are represented as
/// ```notrust
/// |------birth------|
/// 0000_0000_0000_0000_0000_0000_0000_0000
///                     |----survival-----|
/// ```
///
/// # Examples
/// ```notrust
/// b3s23:                0000_0000_0000_1000_0000_0000_0000_1100
///
/// b0s0:                 0000_0000_0000_0000_0000_0000_0000_0000
/// b012345678s012345678: 0000_0001_1111_1111_0000_0001_1111_1111
/// ```
///
/// See: https://conwaylife.com/wiki/Rulestring
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSet {
    rule: u32,
}

impl Default for RuleSet {
    fn default() -> Self {
        B3S23
    }
}

impl RuleSet {
    /// Create a new `RuleSet` for the given births and survivals. For both `b` and
    /// `s`, numbers are set on a bit basis. For instance if bit `i` in `b` is on, it
    /// means `i` is included in the set of births. Any bit past the 8th is ignored.
    pub const fn new(b: u16, s: u16) -> Self {
        let b = b & 0x1FF;
        let s = s & 0x1FF;

        Self {
            rule: (b as u32) << 16 | s as u32,
        }
    }

    pub fn births(&self) -> u16 {
        ((self.rule & 0x1FF0000) >> 0x10) as u16
    }

    pub fn survivals(&self) -> u16 {
        (self.rule & 0x1FF) as u16
    }

    /// State of a cell in the next generation, given its current state and the number of
    /// live cells in its Moore neighbourhood.
    ///
    /// Counts above 8 can't occur on a grid and always yield a dead cell.
    pub fn next(&self, live: bool, neighbors: u8) -> bool {
        if neighbors > MAX_NEIGHBORS {
            return false;
        }

        let bit = 1u16 << neighbors;
        let set = if live {
            self.survivals()
        } else {
            self.births()
        };

        set & bit == bit
    }
}

/// Accepts `b3s23`, `B3/S23` and the nameless `3/23` form used in RLE comments.
impl FromStr for RuleSet {
    type Err = RuleSetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        enum State {
            Birth,
            Survival,
        }

        let s = s.trim();
        if s.is_empty() {
            return Err(RuleSetError::Empty);
        }

        let mut state = State::Birth;
        let mut births = 0u16;
        let mut survivals = 0u16;

        for c in s.chars() {
            match c {
                'b' | 'B' => {
                    state = State::Birth;
                }
                's' | 'S' | '/' => {
                    state = State::Survival;
                }
                n => {
                    let n = n.to_digit(10).ok_or(RuleSetError::InvalidChar(n))?;

                    if n > MAX_NEIGHBORS as u32 {
                        return Err(RuleSetError::CountOutOfRange(n));
                    }

                    match state {
                        State::Birth => births |= 1 << n,
                        State::Survival => survivals |= 1 << n,
                    }
                }
            }
        }

        Ok(RuleSet::new(births, survivals))
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = |set: u16| -> String {
            (0..=MAX_NEIGHBORS)
                .filter(|&n| set & (1u16 << n) != 0)
                .map(|n| char::from(b'0' + n))
                .collect()
        };

        write!(f, "B{}/S{}", digits(self.births()), digits(self.survivals()))
    }
}

#[cfg(test)]
mod tests {
    use super::RuleSet;
    use super::RuleSetError;
    use super::B3S23;

    #[test]
    fn life_rule() {
        for n in 0..=8 {
            assert_eq!(B3S23.next(false, n), n == 3, "dead cell with {n} neighbours");
            assert_eq!(B3S23.next(true, n), n == 2 || n == 3, "live cell with {n} neighbours");
        }
    }

    #[test]
    fn parse_forms() {
        assert_eq!("b3s23".parse::<RuleSet>(), Ok(B3S23));
        assert_eq!("B3/S23".parse::<RuleSet>(), Ok(B3S23));
        assert_eq!("3/23".parse::<RuleSet>(), Ok(B3S23));
    }

    #[test]
    fn parse_highlife() {
        let rule: RuleSet = "B36/S23".parse().unwrap();

        assert!(rule.next(false, 6));
        assert!(!B3S23.next(false, 6));
        assert_eq!(rule.to_string(), "B36/S23");
    }

    #[test]
    fn parse_errors() {
        assert_eq!("b9s23".parse::<RuleSet>(), Err(RuleSetError::CountOutOfRange(9)));
        assert_eq!("b3x23".parse::<RuleSet>(), Err(RuleSetError::InvalidChar('x')));
        assert_eq!("  ".parse::<RuleSet>(), Err(RuleSetError::Empty));
    }

    #[test]
    fn display_default() {
        assert_eq!(RuleSet::default().to_string(), "B3/S23");
    }
}
