use crate::models::Tag;
use crate::quiz::questions::Question;
use thiserror::Error;

/// Errors raised by quiz session transitions
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("Option {option} is out of range for question {question} ({available} options)")]
    InvalidOption {
        question: usize,
        option: usize,
        available: usize,
    },

    #[error("No transition in progress (state: {0:?})")]
    NotTransitioning(QuizState),
}

/// Where the session is in the question flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    /// Waiting for an answer to question `n` (zero based)
    Displaying(usize),
    /// Question `n` was answered, waiting for the transition delay
    Transitioning(usize),
    Complete,
}

/// Answer recorded for one question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub option: usize,
    pub tags: Vec<Tag>,
}

/// State of one pass through the questionnaire
///
/// While an answer is being processed further submissions are ignored, so
/// a double press cannot record two answers or skip a question.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: &'static [Question],
    answers: Vec<Option<Answer>>,
    state: QuizState,
    processing: bool,
}

impl QuizSession {
    pub fn new(questions: &'static [Question]) -> Self {
        Self {
            questions,
            answers: vec![None; questions.len()],
            state: if questions.is_empty() {
                QuizState::Complete
            } else {
                QuizState::Displaying(0)
            },
            processing: false,
        }
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    pub fn is_processing(&self) -> bool {
        self.processing
    }

    pub fn questions(&self) -> &'static [Question] {
        self.questions
    }

    /// Question on screen, also while its answer is transitioning
    pub fn current_question(&self) -> Option<&'static Question> {
        match self.state {
            QuizState::Displaying(n) | QuizState::Transitioning(n) => self.questions.get(n),
            QuizState::Complete => None,
        }
    }

    /// `(question number, total questions)`, one based
    pub fn progress(&self) -> (usize, usize) {
        let total = self.questions.len();
        match self.state {
            QuizState::Displaying(n) | QuizState::Transitioning(n) => (n + 1, total),
            QuizState::Complete => (total, total),
        }
    }

    /// Option previously chosen for the current question, if any
    pub fn selected_option(&self) -> Option<usize> {
        match self.state {
            QuizState::Displaying(n) | QuizState::Transitioning(n) => {
                self.answers[n].as_ref().map(|answer| answer.option)
            }
            QuizState::Complete => None,
        }
    }

    /// Record an answer for the current question and start the transition
    ///
    /// Returns `Ok(false)` when the submission is ignored because another
    /// answer is still being processed or the quiz is already complete.
    pub fn submit(&mut self, option: usize) -> Result<bool, QuizError> {
        if self.processing {
            tracing::debug!("Ignoring answer while a transition is pending");
            return Ok(false);
        }

        let QuizState::Displaying(n) = self.state else {
            return Ok(false);
        };

        let question = &self.questions[n];
        let choice = question.options.get(option).ok_or(QuizError::InvalidOption {
            question: n,
            option,
            available: question.options.len(),
        })?;

        self.answers[n] = Some(Answer {
            option,
            tags: choice.answer(),
        });
        self.processing = true;
        self.state = QuizState::Transitioning(n);

        tracing::debug!("Recorded option {} for question {}", option, question.id);
        Ok(true)
    }

    /// Finish the pending transition
    ///
    /// The processing guard is cleared before anything else, so a failed
    /// transition never leaves the session refusing input. Returns the
    /// collected tags once the last question has been answered.
    pub fn complete_transition(&mut self) -> Result<Option<Vec<Tag>>, QuizError> {
        self.processing = false;

        let QuizState::Transitioning(n) = self.state else {
            return Err(QuizError::NotTransitioning(self.state));
        };

        if n + 1 < self.questions.len() {
            self.state = QuizState::Displaying(n + 1);
            Ok(None)
        } else {
            self.state = QuizState::Complete;
            Ok(Some(self.collected_tags()))
        }
    }

    /// Go back one question. Refused while transitioning or when complete.
    pub fn back(&mut self) -> bool {
        match self.state {
            QuizState::Displaying(n) if n > 0 => {
                self.state = QuizState::Displaying(n - 1);
                true
            }
            _ => false,
        }
    }

    /// All answered tags in question order, duplicates kept
    pub fn collected_tags(&self) -> Vec<Tag> {
        self.answers
            .iter()
            .flatten()
            .flat_map(|answer| answer.tags.iter().cloned())
            .collect()
    }

    /// Clear all answers and start again from the first question
    pub fn restart(&mut self) {
        self.answers = vec![None; self.questions.len()];
        self.processing = false;
        self.state = if self.questions.is_empty() {
            QuizState::Complete
        } else {
            QuizState::Displaying(0)
        };
    }
}
