use std::cmp::Ordering;

/// A score or expectation value in the range `0.0..=1.0`, where `0.0` is a
/// loss and `1.0` is a win.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default)]
pub struct Score(pub f64);

impl From<Score> for f64 {
    fn from(Score(score): Score) -> f64 {
        score
    }
}

impl Score {
    pub const LOSS: Score = Score(0.0);
    pub const DRAW: Score = Score(0.5);
    pub const WIN: Score = Score(1.0);

    /// Score of a participant finishing at `rank` against a participant
    /// finishing at `other`. Lower ranks are better.
    pub fn from_ranks(rank: u32, other: u32) -> Score {
        match rank.cmp(&other) {
            Ordering::Less => Score::WIN,
            Ordering::Equal => Score::DRAW,
            Ordering::Greater => Score::LOSS,
        }
    }

    pub fn opposite(self) -> Score {
        Score(1.0 - self.0)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}
