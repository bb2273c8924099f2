use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Rules of Conway's Game of Life.
pub const B3S23: RuleSet = RuleSet::new(0b1000, 0b1100);

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
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
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

    /// The state a cell takes on in the next generation, given whether it is alive now and how
    /// many of its neighbors are.
    pub fn next_state(&self, alive: bool, neighbors: u8) -> bool {
        // A cell has at most 8 neighbors
        if neighbors > 8 {
            return false;
        }

        let mask = 1 << neighbors;

        if alive {
            self.survivals() & mask == mask
        } else {
            self.births() & mask == mask
        }
    }
}

/// Conway's rule: born on 3, survives on 2 or 3, dies otherwise.
pub fn cell_next_state(alive: bool, neighbors: u8) -> bool {
    B3S23.next_state(alive, neighbors)
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RuleSetError {
    #[error("Rule string is empty")]
    Empty,

    #[error("Unexpected character '{0}' in rule string")]
    InvalidChar(char),

    #[error("Neighbor count {0} is out of range, expected 0 through 8")]
    OutOfRange(u32),

    #[error("Rule string must start with b or B")]
    MissingBirth,
}

/// # Format
///
/// `b[0-8]*/?s[0-8]*`, case insensitive. For instance `b3s23` or `B3/S23`.
impl FromStr for RuleSet {
    type Err = RuleSetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        #[derive(Clone, Copy)]
        enum State {
            Start,
            Birth,
            Survival,
        }

        let s = s.trim();
        if s.is_empty() {
            return Err(RuleSetError::Empty);
        }

        let mut state = State::Start;
        let (mut b, mut s_mask) = (0u16, 0u16);

        for c in s.chars() {
            match (state, c) {
                (State::Start, 'b' | 'B') => {
                    state = State::Birth;
                }
                (State::Start, _) => return Err(RuleSetError::MissingBirth),
                (State::Birth, '/') => {}
                (State::Birth, 's' | 'S') => {
                    state = State::Survival;
                }
                (State::Birth | State::Survival, n) if n.is_ascii_digit() => {
                    let n = n as u32 - '0' as u32;

                    if n > 8 {
                        return Err(RuleSetError::OutOfRange(n));
                    }

                    match state {
                        State::Birth => b |= 1 << n,
                        _ => s_mask |= 1 << n,
                    }
                }
                (_, c) => return Err(RuleSetError::InvalidChar(c)),
            }
        }

        Ok(RuleSet::new(b, s_mask))
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = |mask: u16| -> String {
            (0..=8u8)
                .filter(|&n| mask & (1 << n) != 0)
                .map(|n| char::from(b'0' + n))
                .collect()
        };

        write!(f, "B{}/S{}", digits(self.births()), digits(self.survivals()))
    }
}
