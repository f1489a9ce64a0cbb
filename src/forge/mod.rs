//! Character forge: questions, synthesis, and the printed sheet.

mod pools;
mod questions;
mod quiz;
mod report;
mod synthesize;

pub use questions::{AnswerOption, Question, QUESTIONS};
pub use quiz::{ask_interactive, simulate_answers, QuizError};
pub use report::write_character;
pub use synthesize::{background_score, class_scores, synthesize};
