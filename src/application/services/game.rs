//! Game service
//!
//! Loads a dataset, builds the discriminator tree and drives one round of
//! play over a line-oriented console.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::application::dataset::parse_records;
use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::config::Settings;
use crate::domain::{Answer, Character, DomainError, Node, Outcome, PlayState, Prompt, TreeBuilder};
use crate::infrastructure::traits::{Console, FileSystem};

/// Service for loading datasets and playing rounds.
pub struct GameService {
    fs: Arc<dyn FileSystem>,
    settings: Arc<Settings>,
}

impl GameService {
    /// Create a new game service.
    pub fn new(fs: Arc<dyn FileSystem>, settings: Arc<Settings>) -> Self {
        Self { fs, settings }
    }

    /// Read and parse the dataset at `dataset`.
    ///
    /// # Errors
    /// - `DatasetNotFound` if the path does not exist
    /// - `OperationFailed` if it cannot be read
    /// - `Domain(NoData)` if no row yields a character
    #[instrument(level = "debug", skip(self))]
    pub fn load_characters(&self, dataset: &Path) -> ApplicationResult<Vec<Character>> {
        if !self.fs.exists(dataset) {
            return Err(ApplicationError::DatasetNotFound(dataset.to_path_buf()));
        }
        let content = self
            .fs
            .read_to_string(dataset)
            .with_path_context("read dataset", dataset)?;

        let characters = parse_records(&content);
        info!("loaded {} characters from {}", characters.len(), dataset.display());
        if characters.is_empty() {
            return Err(DomainError::NoData.into());
        }
        Ok(characters)
    }

    /// Load the dataset and build its discriminator tree.
    pub fn build_tree(&self, dataset: &Path) -> ApplicationResult<Node> {
        let characters = self.load_characters(dataset)?;
        Ok(TreeBuilder::new().build(&characters)?)
    }

    /// Play one round against `tree`, then print the outcome and the reference line.
    ///
    /// End of input counts as a negative answer, so a round always finishes.
    #[instrument(level = "debug", skip_all)]
    pub fn play(&self, tree: &Node, console: &mut dyn Console) -> ApplicationResult<Outcome> {
        let mut state = PlayState::start(tree);
        let mut eof = false;

        let outcome = loop {
            if let PlayState::Done(outcome) = state {
                break outcome;
            }
            if let Some(prompt) = state.prompt() {
                console
                    .write_line(&self.render(prompt))
                    .with_context("write prompt")?;
            }
            let answer = match console.read_line().with_context("read answer")? {
                Some(line) => Answer::parse(&line),
                None => {
                    if !eof {
                        warn!("end of input, treating remaining answers as no");
                        eof = true;
                    }
                    Answer::No
                }
            };
            debug!("answer {:?} after {} questions", answer, state.questions());
            state = state.advance(answer);
        };

        let summary = match &outcome {
            Outcome::Found { questions, .. } => format!("Found in {} questions!", questions),
            Outcome::NoMatch { questions, .. } => {
                format!("Stopped after {} questions - no match.", questions)
            }
        };
        console.write_line(&summary).with_context("write outcome")?;

        let (best, worst) = self.settings.reference.numbers(tree);
        console
            .write_line(&format!("Ideal best: {}, Worst: {}", best, worst))
            .with_context("write reference")?;

        Ok(outcome)
    }

    /// Build the tree for `dataset` and play one round.
    pub fn run(&self, dataset: &Path, console: &mut dyn Console) -> ApplicationResult<Outcome> {
        let tree = self.build_tree(dataset)?;
        self.play(&tree, console)
    }

    fn render(&self, prompt: Prompt<'_>) -> String {
        match prompt {
            Prompt::Question {
                text,
                yes_remaining,
                no_remaining,
            } if self.settings.show_hints => {
                format!("{}  (remaining {}/{})", text, yes_remaining, no_remaining)
            }
            Prompt::Question { text, .. } => text.to_string(),
            Prompt::Confirm { name } => format!("Is your character {}? (yes/no)", name),
        }
    }
}
