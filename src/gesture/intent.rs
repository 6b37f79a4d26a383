/// Discrete outcome of gesture interpretation, handed to the game layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// A confirmed finger-count reading was appended to the answer.
    AppendDigit(u32),
    /// A fingertip entered the reset button; the answer went back to "0".
    ClearAnswer,
    /// A fingertip entered the submit button.
    SubmitRequest { answer: String },
}

/// Debouncer state after the most recent frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    /// No hand present
    #[default]
    Idle,
    /// Hand present, presence cooldown still running
    Settling,
    /// Cooldown elapsed, waiting for the hold timer
    Armed,
    /// Hold timer expired this frame and the gesture was evaluated
    Confirmed,
}

impl GesturePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Settling => "settling",
            Self::Armed => "armed",
            Self::Confirmed => "confirmed",
        }
    }
}
