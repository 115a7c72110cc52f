use std::rc::Rc;

use serde::Deserialize;
use yew::Reducible;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Question {
    pub id: u32,
    pub text: String,
    pub feedback: String,
    pub score: u32,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Scenario {
    pub case: String,
    pub label: String,
    pub icon: String,
    pub title: String,
    pub witness_statement: String,
    pub questions: Vec<Question>,
}

pub fn find<'a>(scenarios: &'a [Scenario], case: &str) -> Option<&'a Scenario> {
    scenarios.iter().find(|s| s.case == case)
}

pub enum SimulatorAction {
    SelectCase(String),
    Choose(Question),
    TryAnother,
    TogglePlayback,
    ResetScore,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SimulatorState {
    pub case: String,
    pub choice: Option<Question>,
    pub playing: bool,
    pub score: u32,
    pub answered: u32,
}

impl SimulatorState {
    pub fn new(case: impl Into<String>) -> Self {
        Self {
            case: case.into(),
            choice: None,
            playing: false,
            score: 0,
            answered: 0,
        }
    }

    pub fn showing_feedback(&self) -> bool {
        self.choice.is_some()
    }

    /// Every other question is locked while feedback is on screen.
    pub fn is_locked(&self, question_id: u32) -> bool {
        matches!(&self.choice, Some(choice) if choice.id != question_id)
    }

    pub fn apply(&mut self, action: SimulatorAction) {
        match action {
            SimulatorAction::SelectCase(case) => {
                self.case = case;
                self.choice = None;
                self.playing = false;
            }
            SimulatorAction::Choose(question) => {
                if self.showing_feedback() {
                    return;
                }
                self.score += question.score;
                self.answered += 1;
                self.choice = Some(question);
            }
            SimulatorAction::TryAnother => self.choice = None,
            SimulatorAction::TogglePlayback => self.playing = !self.playing,
            SimulatorAction::ResetScore => {
                self.score = 0;
                self.answered = 0;
            }
        }
    }
}

impl Reducible for SimulatorState {
    type Action = SimulatorAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::catalog::Catalog;

    fn question(case: &str, id: u32) -> Question {
        let catalog = Catalog::load().unwrap();
        let scenario = find(&catalog.scenarios, case).unwrap();
        scenario.questions.iter().find(|q| q.id == id).unwrap().clone()
    }

    #[test]
    fn choosing_scores_and_counts() {
        let mut state = SimulatorState::new("property");
        state.apply(SimulatorAction::Choose(question("property", 2)));
        assert_eq!(state.score, 5);
        assert_eq!(state.answered, 1);
        assert!(state.showing_feedback());
        assert!(state.is_locked(1));
        assert!(!state.is_locked(2));
    }

    #[test]
    fn repeated_choice_while_feedback_is_shown_is_ignored() {
        let mut state = SimulatorState::new("property");
        state.apply(SimulatorAction::Choose(question("property", 2)));
        state.apply(SimulatorAction::Choose(question("property", 2)));
        state.apply(SimulatorAction::Choose(question("property", 1)));
        assert_eq!(state.score, 5);
        assert_eq!(state.answered, 1);
    }

    #[test]
    fn try_another_keeps_the_score() {
        let mut state = SimulatorState::new("divorce");
        state.apply(SimulatorAction::Choose(question("divorce", 3)));
        state.apply(SimulatorAction::TryAnother);
        state.apply(SimulatorAction::Choose(question("divorce", 2)));
        assert_eq!(state.score, 6);
        assert_eq!(state.answered, 2);
    }

    #[test]
    fn switching_case_resets_choice_and_playback() {
        let mut state = SimulatorState::new("property");
        state.apply(SimulatorAction::TogglePlayback);
        state.apply(SimulatorAction::Choose(question("property", 1)));
        state.apply(SimulatorAction::SelectCase("consumer".into()));
        assert_eq!(state.case, "consumer");
        assert!(!state.playing);
        assert!(state.choice.is_none());
        assert_eq!(state.score, 3);
    }

    #[test]
    fn reset_score() {
        let mut state = SimulatorState::new("consumer");
        state.apply(SimulatorAction::Choose(question("consumer", 1)));
        state.apply(SimulatorAction::ResetScore);
        assert_eq!((state.score, state.answered), (0, 0));
    }

    #[test]
    fn every_scenario_has_three_questions() {
        let catalog = Catalog::load().unwrap();
        assert_eq!(catalog.scenarios.len(), 3);
        for scenario in &catalog.scenarios {
            assert_eq!(scenario.questions.len(), 3, "{}", scenario.case);
        }
        assert!(find(&catalog.scenarios, "tax").is_none());
    }
}
