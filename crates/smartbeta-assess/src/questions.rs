//! The questionnaire.

use serde::Serialize;

/// One selectable answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnswerOption {
    /// Stable identifier.
    pub value: &'static str,
    /// Text shown to the investor.
    pub label: &'static str,
    /// Points contributed to the total.
    pub points: u8,
}

/// One question with its options, ordered by increasing risk appetite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    /// Question number, starting at 1.
    pub id: u8,
    /// Text shown to the investor.
    pub prompt: &'static str,
    /// Available answers.
    pub options: &'static [AnswerOption],
}

impl Question {
    /// Find an option by its identifier.
    #[must_use]
    pub fn option(&self, value: &str) -> Option<&'static AnswerOption> {
        self.options.iter().find(|o| o.value == value)
    }

    /// Lowest and highest points an answer can carry.
    #[must_use]
    pub fn points_range(&self) -> (u8, u8) {
        let min = self.options.iter().map(|o| o.points).min().unwrap_or(0);
        let max = self.options.iter().map(|o| o.points).max().unwrap_or(0);
        (min, max)
    }
}

/// The risk questionnaire, in presentation order.
pub static QUESTIONS: [Question; 5] = [
    Question {
        id: 1,
        prompt: "What is your primary investment goal?",
        options: &[
            AnswerOption { value: "preservation", label: "Capital preservation", points: 1 },
            AnswerOption { value: "income", label: "Regular income", points: 2 },
            AnswerOption { value: "growth", label: "Long-term growth", points: 3 },
            AnswerOption { value: "aggressive", label: "Aggressive growth", points: 4 },
        ],
    },
    Question {
        id: 2,
        prompt: "What is your investment time horizon?",
        options: &[
            AnswerOption { value: "short", label: "Less than 2 years", points: 1 },
            AnswerOption { value: "medium", label: "2-5 years", points: 2 },
            AnswerOption { value: "long", label: "5-10 years", points: 3 },
            AnswerOption { value: "very_long", label: "More than 10 years", points: 4 },
        ],
    },
    Question {
        id: 3,
        prompt: "How would you react to a 20% drop in your portfolio?",
        options: &[
            AnswerOption { value: "panic", label: "Sell everything immediately", points: 1 },
            AnswerOption { value: "worry", label: "Sell some investments", points: 2 },
            AnswerOption { value: "hold", label: "Hold and wait for recovery", points: 3 },
            AnswerOption { value: "buy", label: "Buy more at lower prices", points: 4 },
        ],
    },
    Question {
        id: 4,
        prompt: "What is your experience with investing?",
        options: &[
            AnswerOption { value: "none", label: "No experience", points: 1 },
            AnswerOption { value: "basic", label: "Basic knowledge", points: 2 },
            AnswerOption { value: "intermediate", label: "Intermediate experience", points: 3 },
            AnswerOption { value: "advanced", label: "Advanced investor", points: 4 },
        ],
    },
    Question {
        id: 5,
        prompt: "What percentage of your income can you invest?",
        options: &[
            AnswerOption { value: "low", label: "Less than 10%", points: 1 },
            AnswerOption { value: "medium", label: "10-20%", points: 2 },
            AnswerOption { value: "high", label: "20-30%", points: 3 },
            AnswerOption { value: "very_high", label: "More than 30%", points: 4 },
        ],
    },
];

/// Look up a question by id.
#[must_use]
pub fn question(id: u8) -> Option<&'static Question> {
    QUESTIONS.iter().find(|q| q.id == id)
}
