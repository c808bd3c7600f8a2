//! Risk tolerance assessment for smartbeta.
//!
//! A fixed five-question questionnaire. Every option is worth one to four
//! points; the total maps onto a [`RiskProfile`](smartbeta_traits::RiskProfile):
//!
//! | Total points | Profile |
//! |---|---|
//! | 5 to 8 | conservative |
//! | 9 to 15 | moderate |
//! | 16 to 20 | aggressive |
//!
//! The crate holds no session state. Callers own the in-progress
//! [`Answers`] and submit them once complete.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

mod answers;
mod profile;
mod questions;

pub use answers::{Answers, Assessment, assess, profile_for_points};
pub use profile::InvestorProfile;
pub use questions::{AnswerOption, QUESTIONS, Question, question};
