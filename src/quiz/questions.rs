use crate::models::Tag;

/// How a question's options are laid out. Scoring treats both alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    Multiple,
    Likert,
}

#[derive(Debug, Clone, Copy)]
pub struct AnswerOption {
    pub label: &'static str,
    pub tags: &'static [&'static str],
}

impl AnswerOption {
    /// Tags contributed by choosing this option, possibly none
    pub fn answer(&self) -> Vec<Tag> {
        self.tags.iter().map(|tag| Tag::from(*tag)).collect()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Question {
    pub id: u32,
    pub prompt: &'static str,
    pub kind: QuestionKind,
    pub options: &'static [AnswerOption],
}

const fn option(label: &'static str, tags: &'static [&'static str]) -> AnswerOption {
    AnswerOption { label, tags }
}

static QUESTIONS: [Question; 9] = [
    Question {
        id: 1,
        prompt: "What's your ideal way to spend a free afternoon?",
        kind: QuestionKind::Multiple,
        options: &[
            option("Working on a creative project or hobby", &["creative", "low-commitment"]),
            option("Attending a networking event or workshop", &["career", "advocacy"]),
            option("Volunteering or helping in the community", &["service", "advocacy"]),
            option("Coding, building, or learning new tech skills", &["tech", "career"]),
            option("Playing sports or working out", &["fitness"]),
            option("Relaxing with friends or social activities", &["low-commitment", "social"]),
        ],
    },
    Question {
        id: 2,
        prompt: "How important is professional development to you?",
        kind: QuestionKind::Likert,
        options: &[
            option(
                "Extremely important - I'm focused on building my career",
                &["career", "high-commitment"],
            ),
            option("Very important - I want to grow professionally", &["career"]),
            option(
                "Somewhat important - I'm interested but flexible",
                &["career", "low-commitment"],
            ),
            option("Not very important - I prefer other priorities", &["low-commitment"]),
        ],
    },
    Question {
        id: 3,
        prompt: "Which creative outlet appeals to you most?",
        kind: QuestionKind::Multiple,
        options: &[
            option("Music, singing, or performing", &["creative"]),
            option("Dance or movement", &["creative", "fitness"]),
            option("Visual arts, design, or crafts", &["creative"]),
            option("Writing, journalism, or storytelling", &["creative", "advocacy"]),
            option("I'm not particularly drawn to creative activities", &[]),
        ],
    },
    Question {
        id: 4,
        prompt: "How do you feel about technology and coding?",
        kind: QuestionKind::Likert,
        options: &[
            option(
                "Love it! I'm passionate about tech and want to dive deep",
                &["tech", "high-commitment"],
            ),
            option("Really enjoy it - I want to learn and grow", &["tech"]),
            option("Interested but still learning", &["tech", "low-commitment"]),
            option("Neutral - not my main focus", &[]),
        ],
    },
    Question {
        id: 5,
        prompt: "What's your approach to community service?",
        kind: QuestionKind::Multiple,
        options: &[
            option(
                "I'm passionate about making a difference",
                &["service", "advocacy", "high-commitment"],
            ),
            option("I enjoy volunteering when I can", &["service"]),
            option(
                "I'm interested but prefer flexible opportunities",
                &["service", "low-commitment"],
            ),
            option("It's not a priority for me right now", &[]),
        ],
    },
    Question {
        id: 6,
        prompt: "How active do you want to be?",
        kind: QuestionKind::Multiple,
        options: &[
            option("Very active - I love sports and fitness", &["fitness", "high-commitment"]),
            option("Moderately active - I enjoy staying fit", &["fitness"]),
            option("Casually active - light activities are fine", &["fitness", "low-commitment"]),
            option("Not particularly interested in fitness activities", &[]),
        ],
    },
    Question {
        id: 8,
        prompt: "What's your interest level in advocacy and social change?",
        kind: QuestionKind::Multiple,
        options: &[
            option(
                "Very passionate - I want to drive change",
                &["advocacy", "service", "high-commitment"],
            ),
            option("Interested - I care about important issues", &["advocacy"]),
            option(
                "Somewhat interested - I support causes I believe in",
                &["advocacy", "low-commitment"],
            ),
            option("Not a main focus for me", &[]),
        ],
    },
    Question {
        id: 9,
        prompt: "What level of commitment are you looking for?",
        kind: QuestionKind::Multiple,
        options: &[
            option("High commitment - I want to be deeply involved", &["high-commitment"]),
            option("Moderate commitment - regular but manageable", &[]),
            option("Low commitment - flexible and casual", &["low-commitment"]),
            option("I'm open to anything that fits my interests", &[]),
        ],
    },
    Question {
        id: 10,
        prompt: "Which area would you most like to explore or develop?",
        kind: QuestionKind::Multiple,
        options: &[
            option(
                "Leadership skills and taking on responsibilities",
                &["career", "advocacy", "high-commitment"],
            ),
            option("Technical skills and innovation", &["tech", "career"]),
            option("Creative expression and artistic growth", &["creative"]),
            option("Community impact and service", &["service", "advocacy"]),
            option("Just finding a fun, supportive community", &["low-commitment", "social"]),
        ],
    },
];

/// The questionnaire, in the order it is asked
pub fn question_bank() -> &'static [Question] {
    &QUESTIONS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TagRegistry;

    #[test]
    fn test_question_bank_shape() {
        let bank = question_bank();
        assert_eq!(bank.len(), 9);
        assert!(bank.iter().all(|question| question.options.len() >= 4));
    }

    #[test]
    fn test_option_tags_are_known() {
        let registry = TagRegistry::standard();
        for question in question_bank() {
            for option in question.options {
                for tag in option.tags {
                    assert!(
                        registry.get(tag).is_some() || *tag == "social",
                        "unexpected tag {} in question {}",
                        tag,
                        question.id
                    );
                }
            }
        }
    }

    #[test]
    fn test_empty_option_answer() {
        let option = &question_bank()[2].options[4];
        assert!(option.answer().is_empty());
    }
}
