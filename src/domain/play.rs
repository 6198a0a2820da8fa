//! Traversal state machine for one round of play.
//!
//! `Asking` walks internal nodes, `Confirming` asks about the isolated
//! character, `Done` holds the outcome. Transitions are pure; reading
//! answers is left to the caller.

use crate::domain::entities::Character;
use crate::domain::tree::Node;

/// A normalized user answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
}

impl Answer {
    /// Only `yes` (after trimming, any case) is affirmative; everything else is `No`.
    pub fn parse(line: &str) -> Self {
        if line.trim().to_lowercase() == "yes" {
            Answer::Yes
        } else {
            Answer::No
        }
    }
}

/// Result of a finished round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The user confirmed the proposed character.
    Found { name: String, questions: usize },
    /// The user rejected the proposed character.
    NoMatch { name: String, questions: usize },
}

impl Outcome {
    pub fn questions(&self) -> usize {
        match self {
            Outcome::Found { questions, .. } | Outcome::NoMatch { questions, .. } => *questions,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Outcome::Found { .. })
    }
}

/// What the player must be asked next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt<'t> {
    /// An attribute question with the candidates left under each answer.
    Question {
        text: &'t str,
        yes_remaining: usize,
        no_remaining: usize,
    },
    /// Final confirmation of a single candidate.
    Confirm { name: &'t str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayState<'t> {
    Asking {
        question: &'t str,
        yes: &'t Node,
        no: &'t Node,
        questions: usize,
    },
    Confirming {
        character: &'t Character,
        questions: usize,
    },
    Done(Outcome),
}

impl<'t> PlayState<'t> {
    /// Initial state at the tree root with no questions asked.
    pub fn start(root: &'t Node) -> Self {
        Self::at(root, 0)
    }

    fn at(node: &'t Node, questions: usize) -> Self {
        match node {
            Node::Leaf(character) => PlayState::Confirming {
                character,
                questions,
            },
            Node::Internal {
                question, yes, no, ..
            } => PlayState::Asking {
                question,
                yes,
                no,
                questions,
            },
        }
    }

    /// The prompt to present in this state, `None` once done.
    pub fn prompt(&self) -> Option<Prompt<'t>> {
        match self {
            PlayState::Asking { question, yes, no, .. } => Some(Prompt::Question {
                text: *question,
                yes_remaining: yes.leaf_count(),
                no_remaining: no.leaf_count(),
            }),
            PlayState::Confirming { character, .. } => Some(Prompt::Confirm {
                name: &character.name,
            }),
            PlayState::Done(_) => None,
        }
    }

    /// Consume one answer. `Done` absorbs further answers unchanged.
    pub fn advance(self, answer: Answer) -> Self {
        match self {
            PlayState::Asking {
                yes, no, questions, ..
            } => {
                let next = match answer {
                    Answer::Yes => yes,
                    Answer::No => no,
                };
                Self::at(next, questions + 1)
            }
            PlayState::Confirming {
                character,
                questions,
            } => {
                let name = character.name.clone();
                PlayState::Done(match answer {
                    Answer::Yes => Outcome::Found { name, questions },
                    Answer::No => Outcome::NoMatch { name, questions },
                })
            }
            done @ PlayState::Done(_) => done,
        }
    }

    /// Questions answered so far, excluding the final confirmation.
    pub fn questions(&self) -> usize {
        match self {
            PlayState::Asking { questions, .. } | PlayState::Confirming { questions, .. } => {
                *questions
            }
            PlayState::Done(outcome) => outcome.questions(),
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, PlayState::Done(_))
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        match self {
            PlayState::Done(outcome) => Some(outcome),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("yes", Answer::Yes)]
    #[case("  YES\n", Answer::Yes)]
    #[case("Yes", Answer::Yes)]
    #[case("no", Answer::No)]
    #[case("y", Answer::No)]
    #[case("yes please", Answer::No)]
    #[case("", Answer::No)]
    fn given_raw_line_when_parsing_answer_then_only_yes_is_affirmative(
        #[case] line: &str,
        #[case] expected: Answer,
    ) {
        assert_eq!(Answer::parse(line), expected);
    }

    #[test]
    fn given_outcome_when_querying_then_reports_questions() {
        let found = Outcome::Found {
            name: "Ada".into(),
            questions: 4,
        };
        assert!(found.is_found());
        assert_eq!(found.questions(), 4);
        let miss = Outcome::NoMatch {
            name: "Ada".into(),
            questions: 2,
        };
        assert!(!miss.is_found());
        assert_eq!(miss.questions(), 2);
    }
}
