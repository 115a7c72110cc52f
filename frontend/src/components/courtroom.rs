use std::rc::Rc;

use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::catalog::Catalog;
use crate::content::courtroom::{find, SimulatorAction, SimulatorState};

const DEFAULT_CASE: &str = "property";

#[function_component(CourtroomSimulator)]
pub fn courtroom_simulator() -> Html {
    let catalog = use_context::<Rc<Catalog>>().unwrap_or_default();
    let state = {
        let first = catalog
            .scenarios
            .first()
            .map(|s| s.case.clone())
            .unwrap_or_else(|| DEFAULT_CASE.to_string());
        use_reducer(move || SimulatorState::new(first))
    };

    let Some(scenario) = find(&catalog.scenarios, &state.case) else {
        return html! {};
    };

    let toggle_playback = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(SimulatorAction::TogglePlayback))
    };

    html! {
        <section class="courtroom-simulator-demo" id="demo">
            <div class="container">
                <h2 class="section-title">{"Step Inside a Virtual Courtroom"}</h2>
                <p class="section-subtitle">{"Experience the law in action. No pressure, just learning."}</p>

                <div class="case-type-selector">
                    { for catalog.scenarios.iter().map(|case_type| {
                        let active = case_type.case == state.case;
                        let onclick = {
                            let state = state.clone();
                            let case = case_type.case.clone();
                            Callback::from(move |_: MouseEvent| state.dispatch(SimulatorAction::SelectCase(case.clone())))
                        };
                        html! {
                            <button class={classes!("case-btn", active.then(|| "active"))} onclick={onclick}>
                                <span class="case-icon">{&case_type.icon}</span>
                                {&case_type.label}
                            </button>
                        }
                    }) }
                </div>

                <div class="score-board">
                    <span>{format!("Score: {}", state.score)}</span>
                    <span>{format!("Questions answered: {}", state.answered)}</span>
                    <button
                        class="reset-score-btn"
                        onclick={{
                            let state = state.clone();
                            Callback::from(move |_: MouseEvent| state.dispatch(SimulatorAction::ResetScore))
                        }}
                    >
                        {"Reset Score"}
                    </button>
                </div>

                <div class="demo-columns">
                    <div class="demo-column watch-column">
                        <h3>{"Observe a Case"}</h3>
                        <div
                            class={classes!("video-placeholder", state.playing.then(|| "playing"))}
                            onclick={toggle_playback.clone()}
                        >
                            <div class="play-icon">{if state.playing { "❚❚" } else { "▶" }}</div>
                            <p>
                                if state.playing {
                                    {"Playing simulation..."}
                                } else {
                                    {format!("Watch {}", scenario.title)}
                                }
                            </p>
                            <div class="video-progress">
                                <div
                                    class="progress-bar"
                                    style={if state.playing { "width: 70%;" } else { "width: 0%;" }}
                                ></div>
                            </div>
                        </div>
                        <button class="watch-btn" onclick={toggle_playback}>
                            {if state.playing { "Pause Simulation" } else { "Watch Simulation" }}
                        </button>
                    </div>

                    <div class="demo-column interact-column">
                        <h3>{"Be the Lawyer (Demo)"}</h3>
                        <div class="scenario-box">
                            <h4>{"Witness Statement:"}</h4>
                            <p>{&scenario.witness_statement}</p>
                        </div>

                        <div class="question-section">
                            <h4>{"Choose your cross-examination question:"}</h4>
                            <div class="question-options">
                                { for scenario.questions.iter().map(|question| {
                                    let selected = state.choice.as_ref().map(|c| c.id) == Some(question.id);
                                    let onclick = {
                                        let state = state.clone();
                                        let question = question.clone();
                                        Callback::from(move |_: MouseEvent| state.dispatch(SimulatorAction::Choose(question.clone())))
                                    };
                                    html! {
                                        <button
                                            class={classes!("question-btn", selected.then(|| "selected"))}
                                            disabled={state.is_locked(question.id)}
                                            onclick={onclick}
                                        >
                                            {&question.text}
                                        </button>
                                    }
                                }) }
                            </div>
                        </div>

                        if let Some(choice) = &state.choice {
                            <div class="feedback-section">
                                <h4>{"AI Feedback:"}</h4>
                                <div class="feedback-box">
                                    <div class="feedback-header">
                                        <span class="feedback-icon">{"💡"}</span>
                                        <span class="feedback-title">{"Expert Analysis"}</span>
                                        <span class="feedback-score">{format!("+{} points", choice.score)}</span>
                                    </div>
                                    <p>{&choice.feedback}</p>
                                    <button
                                        class="try-again-btn"
                                        onclick={{
                                            let state = state.clone();
                                            Callback::from(move |_: MouseEvent| state.dispatch(SimulatorAction::TryAnother))
                                        }}
                                    >
                                        {"Try Another Question"}
                                    </button>
                                </div>
                            </div>
                        }

                        <div class="demo-disclaimer">
                            <p>
                                {"💡 "}<strong>{"Demo Version:"}</strong>
                                {" Experience the full Cross-Examination Simulator with detailed scoring and multiple rounds with a subscription."}
                            </p>
                        </div>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .courtroom-simulator-demo {
                    padding: 5rem 1.5rem;
                    background: #1a3365;
                    color: #fff;
                }
                .courtroom-simulator-demo .container {
                    max-width: 1200px;
                    margin: 0 auto;
                }
                .courtroom-simulator-demo .section-title,
                .courtroom-simulator-demo .section-subtitle {
                    text-align: center;
                }
                .case-type-selector {
                    display: flex;
                    justify-content: center;
                    gap: 0.75rem;
                    margin: 2rem 0 1rem;
                }
                .case-btn {
                    display: flex;
                    gap: 0.4rem;
                    border: 1px solid rgba(255, 255, 255, 0.3);
                    background: transparent;
                    color: #fff;
                    border-radius: 20px;
                    padding: 0.5rem 1.1rem;
                    cursor: pointer;
                }
                .case-btn.active {
                    background: #c8a04a;
                    border-color: #c8a04a;
                    color: #1a3365;
                }
                .score-board {
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    gap: 1.5rem;
                    margin-bottom: 2rem;
                    color: rgba(255, 255, 255, 0.85);
                }
                .reset-score-btn {
                    border: 1px solid rgba(255, 255, 255, 0.4);
                    background: transparent;
                    color: #fff;
                    border-radius: 6px;
                    padding: 0.3rem 0.8rem;
                    cursor: pointer;
                }
                .demo-columns {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2rem;
                }
                .demo-column {
                    padding: 1.5rem;
                    border-radius: 16px;
                    background: rgba(255, 255, 255, 0.06);
                }
                .video-placeholder {
                    padding: 3rem 1rem;
                    border-radius: 12px;
                    text-align: center;
                    background: rgba(0, 0, 0, 0.25);
                    cursor: pointer;
                }
                .play-icon {
                    font-size: 2rem;
                }
                .video-progress {
                    height: 4px;
                    margin-top: 1rem;
                    background: rgba(255, 255, 255, 0.2);
                }
                .progress-bar {
                    height: 100%;
                    background: #c8a04a;
                    transition: width 2s linear;
                }
                .watch-btn, .try-again-btn {
                    margin-top: 1rem;
                    border: none;
                    border-radius: 8px;
                    padding: 0.6rem 1.2rem;
                    background: #c8a04a;
                    color: #1a3365;
                    font-weight: 600;
                    cursor: pointer;
                }
                .scenario-box {
                    padding: 1rem;
                    border-left: 3px solid #c8a04a;
                    background: rgba(255, 255, 255, 0.05);
                }
                .question-options {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }
                .question-btn {
                    text-align: left;
                    border: 1px solid rgba(255, 255, 255, 0.25);
                    background: transparent;
                    color: #fff;
                    border-radius: 8px;
                    padding: 0.7rem 1rem;
                    cursor: pointer;
                }
                .question-btn.selected {
                    background: rgba(200, 160, 74, 0.3);
                    border-color: #c8a04a;
                }
                .question-btn:disabled {
                    opacity: 0.4;
                    cursor: not-allowed;
                }
                .feedback-box {
                    padding: 1rem;
                    border-radius: 10px;
                    background: rgba(255, 255, 255, 0.1);
                }
                .feedback-header {
                    display: flex;
                    gap: 0.5rem;
                    align-items: center;
                }
                .feedback-score {
                    margin-left: auto;
                    color: #c8a04a;
                    font-weight: 700;
                }
                .demo-disclaimer {
                    margin-top: 1.5rem;
                    font-size: 0.85rem;
                    color: rgba(255, 255, 255, 0.7);
                }
                @media (max-width: 900px) {
                    .demo-columns {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
