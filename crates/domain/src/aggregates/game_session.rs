//! GameSession aggregate - one round of the guessing game
//!
//! # Design
//!
//! - **Private fields**: state only changes through `submit_guess`
//! - **Newtypes**: every number is a validated `Guess`
//! - **Injected randomness**: constructors and `hint` take a roll closure
//! - **Explicit status**: terminal sessions reject further guesses

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::common::shuffle;
use crate::error::DomainError;
use crate::events::GuessFeedback;
use crate::value_objects::{Direction, Guess, Hint, MAX_GUESS, MIN_GUESS};
use hotcold_domain::SessionId;

/// Number of distinct guesses before the session is lost
pub const MAX_GUESSES: usize = 5;

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SessionStatus {
    InProgress,
    Won,
    Lost,
}

impl SessionStatus {
    /// Returns true once the session is won or lost.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::InProgress => "in_progress",
            Self::Won => "won",
            Self::Lost => "lost",
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The state of one game
///
/// # Invariants
///
/// - `target` never changes after construction
/// - `history` holds distinct guesses in submission order
/// - `history.len() <= MAX_GUESSES`
///
/// # Example
///
/// ```
/// use chrono::Utc;
/// use hotcold_domain::{GameSession, Guess, GuessFeedback, SessionId, SessionStatus};
/// use uuid::Uuid;
///
/// let id = SessionId::from_uuid(Uuid::nil());
/// let mut session = GameSession::with_target(id, Guess::new(7).unwrap(), Utc::now());
///
/// let feedback = session.submit_guess(Guess::new(7).unwrap()).unwrap();
/// assert_eq!(feedback, GuessFeedback::Win);
/// assert_eq!(session.status(), SessionStatus::Won);
/// ```
#[derive(Debug, Clone)]
pub struct GameSession {
    id: SessionId,
    target: Guess,
    current_guess: Option<Guess>,
    history: Vec<Guess>,
    status: SessionStatus,
    started_at: DateTime<Utc>,
}

impl GameSession {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Start a session with a target drawn from `roll(1, 100)`.
    ///
    /// Rolls outside the range are clamped, so the target is always playable.
    pub fn start<R>(id: SessionId, roll: R, now: DateTime<Utc>) -> Self
    where
        R: FnOnce(i32, i32) -> i32,
    {
        let target = Guess::clamped(roll(i32::from(MIN_GUESS), i32::from(MAX_GUESS)));
        Self::with_target(id, target, now)
    }

    /// Start a session with a known target.
    pub fn with_target(id: SessionId, target: Guess, now: DateTime<Utc>) -> Self {
        Self {
            id,
            target,
            current_guess: None,
            history: Vec::with_capacity(MAX_GUESSES),
            status: SessionStatus::InProgress,
            started_at: now,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Returns the winning number.
    #[inline]
    pub fn target(&self) -> Guess {
        self.target
    }

    /// Returns the most recently submitted guess, duplicates included.
    #[inline]
    pub fn current_guess(&self) -> Option<Guess> {
        self.current_guess
    }

    /// Returns the distinct accepted guesses in submission order.
    #[inline]
    pub fn history(&self) -> &[Guess] {
        &self.history
    }

    #[inline]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    #[inline]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Distinct guesses left before the session is lost.
    pub fn guesses_remaining(&self) -> usize {
        MAX_GUESSES.saturating_sub(self.history.len())
    }

    pub fn has_guessed(&self, guess: Guess) -> bool {
        self.history.contains(&guess)
    }

    /// Distance between the current guess and the target.
    pub fn difference(&self) -> Option<u8> {
        self.current_guess.map(|guess| guess.distance(self.target))
    }

    /// Which way the player should move from the current guess.
    ///
    /// `None` before the first guess and when the current guess is the target.
    pub fn direction(&self) -> Option<Direction> {
        match self.current_guess?.cmp(&self.target) {
            Ordering::Less => Some(Direction::Higher),
            Ordering::Greater => Some(Direction::Lower),
            Ordering::Equal => None,
        }
    }

    // =========================================================================
    // Mutation Methods
    // =========================================================================

    /// Evaluate a guess and record it if it is new.
    ///
    /// Classification order: duplicate, win, loss on the last allowed
    /// guess, then the temperature band. A winning last guess is a win.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::GameOver` once the session is won or lost; the
    /// session is left untouched.
    pub fn submit_guess(&mut self, guess: Guess) -> Result<GuessFeedback, DomainError> {
        if self.status.is_terminal() {
            return Err(DomainError::game_over(self.status));
        }

        self.current_guess = Some(guess);

        if self.has_guessed(guess) {
            return Ok(GuessFeedback::Duplicate);
        }
        self.history.push(guess);

        if guess == self.target {
            self.status = SessionStatus::Won;
            return Ok(GuessFeedback::Win);
        }
        if self.history.len() >= MAX_GUESSES {
            self.status = SessionStatus::Lost;
            return Ok(GuessFeedback::Loss);
        }

        Ok(GuessFeedback::for_distance(guess.distance(self.target)))
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Produce a hint: the target plus two decoys from `roll(1, 100)`, shuffled
    /// with the same roll source.
    ///
    /// Allowed in any status and never changes the session.
    pub fn hint<R>(&self, mut roll: R) -> Hint
    where
        R: FnMut(i32, i32) -> i32,
    {
        let (min, max) = (i32::from(MIN_GUESS), i32::from(MAX_GUESS));
        let mut numbers = [
            self.target,
            Guess::clamped(roll(min, max)),
            Guess::clamped(roll(min, max)),
        ];
        shuffle(&mut numbers, &mut roll);
        Hint::new(numbers)
    }
}

// ============================================================================
// Tests
// ============================================================================
