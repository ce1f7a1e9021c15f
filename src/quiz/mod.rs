// Questionnaire flow: question bank, session state and terminal front end
pub mod questions;
pub mod session;
pub mod terminal;
pub mod transition;

pub use questions::{question_bank, AnswerOption, Question, QuestionKind};
pub use session::{Answer, QuizError, QuizSession, QuizState};
pub use terminal::{write_report, TerminalQuiz};
pub use transition::{QuizEvent, TransitionTimer};
