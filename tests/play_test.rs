//! Tests for the play state machine

use akinator::application::parse_records;
use akinator::domain::{Answer, Character, Node, Outcome, PlayState, Prompt, TreeBuilder};

fn person(name: &str, alive: &str, royalty: &str) -> Character {
    Character::from_fields(&[name, "female", alive, "adult", "music", "swedish", "none", royalty])
        .unwrap()
}

fn alive_tree() -> Node {
    TreeBuilder::new()
        .build(&[person("Ada", "yes", "no"), person("Bea", "no", "no")])
        .unwrap()
}

/// Answer every question truthfully for `target` until the confirmation prompt.
fn walk_to<'t>(tree: &'t Node, target: &Character) -> PlayState<'t> {
    let mut state = PlayState::start(tree);
    while let PlayState::Asking { yes, .. } = state {
        let answer = if yes.characters().any(|c| c == target) {
            Answer::Yes
        } else {
            Answer::No
        };
        state = state.advance(answer);
    }
    state
}

#[test]
fn given_single_leaf_when_starting_then_confirms_immediately() {
    // Arrange
    let ada = person("Ada", "yes", "no");
    let tree = TreeBuilder::new().build(&[ada.clone()]).unwrap();

    // Act
    let state = PlayState::start(&tree);

    // Assert
    assert_eq!(state.questions(), 0);
    assert_eq!(state.prompt(), Some(Prompt::Confirm { name: "Ada" }));
    let done = state.advance(Answer::Yes);
    assert_eq!(
        done.outcome(),
        Some(&Outcome::Found {
            name: "Ada".into(),
            questions: 0
        })
    );
}

#[test]
fn given_internal_root_when_prompting_then_shows_remaining_per_branch() {
    let tree = alive_tree();

    let state = PlayState::start(&tree);

    assert_eq!(
        state.prompt(),
        Some(Prompt::Question {
            text: "Is the person alive?",
            yes_remaining: 1,
            no_remaining: 1,
        })
    );
}

#[test]
fn given_yes_answer_when_asking_then_moves_to_yes_child() {
    let tree = alive_tree();

    let state = PlayState::start(&tree).advance(Answer::Yes);

    assert_eq!(state.questions(), 1);
    assert_eq!(state.prompt(), Some(Prompt::Confirm { name: "Ada" }));
}

#[test]
fn given_garbage_answer_when_asking_then_treated_as_no() {
    let tree = alive_tree();

    let state = PlayState::start(&tree).advance(Answer::parse("maybe?"));

    assert_eq!(state.prompt(), Some(Prompt::Confirm { name: "Bea" }));
}

#[test]
fn given_rejected_confirmation_when_advancing_then_no_match_with_question_count() {
    let tree = alive_tree();

    let state = PlayState::start(&tree)
        .advance(Answer::No)
        .advance(Answer::parse("no"));

    assert!(state.is_done());
    assert_eq!(state.prompt(), None);
    assert_eq!(
        state.outcome(),
        Some(&Outcome::NoMatch {
            name: "Bea".into(),
            questions: 1
        })
    );
}

#[test]
fn given_done_state_when_advancing_then_unchanged() {
    let tree = alive_tree();
    let done = PlayState::start(&tree)
        .advance(Answer::Yes)
        .advance(Answer::Yes);

    let again = done.clone().advance(Answer::No);

    assert_eq!(again, done);
}

#[test]
fn given_dataset_when_answering_truthfully_then_every_character_found_within_depth() {
    // Arrange
    let characters = parse_records(include_str!("resources/characters.csv"));
    let tree = TreeBuilder::new().build(&characters).unwrap();
    let (_, max_depth) = tree.depth_range();

    for target in &characters {
        // Act
        let state = walk_to(&tree, target);

        // Assert
        assert!(state.questions() <= max_depth);
        assert_eq!(
            state.prompt(),
            Some(Prompt::Confirm {
                name: &target.name
            })
        );
        let outcome = state.advance(Answer::Yes);
        assert!(outcome.outcome().unwrap().is_found());
    }
}

#[test]
fn given_only_no_answers_when_playing_then_terminates_with_no_match() {
    let characters = parse_records(include_str!("resources/characters.csv"));
    let tree = TreeBuilder::new().build(&characters).unwrap();
    let (_, max_depth) = tree.depth_range();

    let mut state = PlayState::start(&tree);
    let mut steps = 0;
    while !state.is_done() {
        state = state.advance(Answer::No);
        steps += 1;
        assert!(steps <= max_depth + 1, "traversal did not terminate");
    }

    assert!(!state.outcome().unwrap().is_found());
}
