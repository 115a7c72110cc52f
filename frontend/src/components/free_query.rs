use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use log::{debug, info, warn};
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use crate::config::{
    BONUS_QUERY_GRANT, QUERY_CHAR_LIMIT, QUICK_QUESTION_FLASH_MS, SIMULATED_RESPONSE_MS,
};
use crate::content::legal_query::{mock_analysis, Analysis, Language, QuerySession, QUICK_QUESTIONS};
use crate::speech::{self, Dictation};

pub enum FreeQueryMsg {
    SetDraft(String),
    SetLanguage(Language),
    Clear,
    QuickQuestion(usize),
    QuickFlashDone,
    Submit(SubmitEvent),
    Answered,
    ToggleExpand,
    ClaimBonus,
    StartVoice,
    StopVoice,
    Transcript(String),
    VoiceEnded,
}

pub struct FreeQuery {
    session: QuerySession,
    response: Option<Analysis>,
    expanded: bool,
    flashed: Option<usize>,
    flash_timer: Option<Timeout>,
    voice_supported: bool,
    recording: bool,
    dictation: Option<Dictation>,
}

impl Component for FreeQuery {
    type Message = FreeQueryMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let voice_supported = speech::is_supported();
        if !voice_supported {
            warn!("Speech recognition unavailable, hiding voice input");
        }
        Self {
            session: QuerySession::default(),
            response: None,
            expanded: false,
            flashed: None,
            flash_timer: None,
            voice_supported,
            recording: false,
            dictation: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            FreeQueryMsg::SetDraft(text) => {
                self.session.set_draft(&text);
                true
            }
            FreeQueryMsg::SetLanguage(language) => {
                self.session.language = language;
                true
            }
            FreeQueryMsg::Clear => {
                self.session.set_draft("");
                true
            }
            FreeQueryMsg::QuickQuestion(index) => {
                let Some(question) = QUICK_QUESTIONS.get(index) else {
                    return false;
                };
                self.session.set_draft(question);
                self.flashed = Some(index);
                let link = ctx.link().clone();
                // Replacing the handle cancels an earlier flash
                self.flash_timer = Some(Timeout::new(QUICK_QUESTION_FLASH_MS, move || {
                    link.send_message(FreeQueryMsg::QuickFlashDone)
                }));
                true
            }
            FreeQueryMsg::QuickFlashDone => {
                self.flashed = None;
                self.flash_timer = None;
                true
            }
            FreeQueryMsg::Submit(event) => {
                event.prevent_default();
                match self.session.submit() {
                    Some(query) => {
                        debug!("Analyzing free query ({} chars)", query.chars().count());
                        ctx.link().send_future(async {
                            TimeoutFuture::new(SIMULATED_RESPONSE_MS).await;
                            FreeQueryMsg::Answered
                        });
                        true
                    }
                    None => false,
                }
            }
            FreeQueryMsg::Answered => {
                let Some(query) = self.session.complete() else {
                    return false;
                };
                let answered_at = chrono::Local::now().format("%H:%M").to_string();
                self.response = Some(mock_analysis(&query, answered_at));
                self.expanded = true;
                info!("Free query answered, {} remaining", self.session.remaining);
                true
            }
            FreeQueryMsg::ToggleExpand => {
                self.expanded = !self.expanded;
                true
            }
            FreeQueryMsg::ClaimBonus => {
                let claimed = self.session.claim_bonus();
                if claimed {
                    info!("Granted {} bonus queries", BONUS_QUERY_GRANT);
                }
                claimed
            }
            FreeQueryMsg::StartVoice => {
                if self.recording || self.session.exhausted() {
                    return false;
                }
                let on_transcript = ctx.link().callback(FreeQueryMsg::Transcript);
                let on_end = ctx.link().callback(|_: ()| FreeQueryMsg::VoiceEnded);
                match Dictation::start(
                    self.session.language.speech_locale(),
                    move |text| on_transcript.emit(text),
                    move || on_end.emit(()),
                ) {
                    Ok(dictation) => {
                        self.dictation = Some(dictation);
                        self.recording = true;
                    }
                    Err(err) => warn!("Could not start voice input: {}", err),
                }
                true
            }
            FreeQueryMsg::StopVoice => {
                if let Some(dictation) = &self.dictation {
                    dictation.finish();
                }
                self.recording = false;
                true
            }
            FreeQueryMsg::Transcript(text) => {
                self.session.append_transcript(&text);
                self.recording = false;
                true
            }
            FreeQueryMsg::VoiceEnded => {
                self.dictation = None;
                self.recording = false;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let session = &self.session;
        let exhausted = session.exhausted();
        let pending = session.is_pending();

        html! {
            <section class="free-query-widget" id="free-query">
                <div class="container">
                    <div class="query-header">
                        <h2>{"Instant Legal Guidance (FreeQuery)"}</h2>
                        <p>{"Ask any legal question in plain English or Tamil - our AI will analyze and provide relevant legal information"}</p>
                    </div>

                    <div class="query-counter">
                        <div class="counter-badge">
                            <div
                                class="counter-progress"
                                style={format!("width: {}%;", session.remaining_percent())}
                            ></div>
                            <div class="counter-content">
                                <span class="counter-number">{session.remaining}</span>
                                <span class="counter-text">{"free queries remaining"}</span>
                            </div>
                        </div>
                    </div>

                    <form class="query-form" onsubmit={link.callback(FreeQueryMsg::Submit)}>
                        <div class="language-toggle">
                            { for [Language::English, Language::Tamil].into_iter().map(|language| html! {
                                <button
                                    type="button"
                                    class={classes!((session.language == language).then(|| "active"))}
                                    onclick={link.callback(move |_| FreeQueryMsg::SetLanguage(language))}
                                >
                                    {language.label()}
                                </button>
                            }) }
                        </div>

                        <div class="input-container">
                            <div class="input-wrapper">
                                <textarea
                                    class="query-textarea"
                                    rows="3"
                                    maxlength={QUERY_CHAR_LIMIT.to_string()}
                                    value={session.draft.clone()}
                                    placeholder={session.language.placeholder()}
                                    disabled={exhausted}
                                    oninput={link.callback(|e: InputEvent| {
                                        let input: HtmlTextAreaElement = e.target_unchecked_into();
                                        FreeQueryMsg::SetDraft(input.value())
                                    })}
                                />
                                if !session.draft.is_empty() {
                                    <button
                                        type="button"
                                        class="clear-btn"
                                        aria-label="Clear text"
                                        onclick={link.callback(|_| FreeQueryMsg::Clear)}
                                    >
                                        {"✕"}
                                    </button>
                                }
                            </div>
                            <div class="input-actions">
                                if self.voice_supported {
                                    <button
                                        type="button"
                                        class={classes!("voice-input-btn", self.recording.then(|| "recording"))}
                                        disabled={exhausted}
                                        aria-label={if self.recording { "Stop recording" } else { "Start voice input" }}
                                        onclick={if self.recording {
                                            link.callback(|_: MouseEvent| FreeQueryMsg::StopVoice)
                                        } else {
                                            link.callback(|_: MouseEvent| FreeQueryMsg::StartVoice)
                                        }}
                                    >
                                        if self.recording {
                                            <span class="pulse-dot"></span>
                                        } else {
                                            {"🎤"}
                                        }
                                    </button>
                                }
                                <div class="char-count">
                                    {format!("{}/{}", session.draft_len(), QUERY_CHAR_LIMIT)}
                                </div>
                            </div>
                        </div>

                        <div class="quick-questions">
                            <p class="quick-questions-title">{"Try these examples:"}</p>
                            <div class="quick-buttons">
                                { for QUICK_QUESTIONS.iter().enumerate().map(|(index, question)| html! {
                                    <button
                                        type="button"
                                        class={classes!("quick-btn", (self.flashed == Some(index)).then(|| "quick-selected"))}
                                        disabled={exhausted}
                                        onclick={link.callback(move |_| FreeQueryMsg::QuickQuestion(index))}
                                    >
                                        {*question}
                                    </button>
                                }) }
                            </div>
                        </div>

                        <button
                            type="submit"
                            class={classes!("submit-btn", pending.then(|| "loading"))}
                            disabled={!session.can_submit()}
                        >
                            if pending {
                                <>
                                    <span class="spinner"></span>
                                    {"Analyzing your legal question..."}
                                </>
                            } else {
                                {format!("Ask Legal Expert ({} left)", session.remaining)}
                            }
                        </button>
                    </form>

                    if let Some(response) = &self.response {
                        { self.render_response(ctx, response) }
                    }

                    if exhausted {
                        <div class="queries-exhausted">
                            <h3>{"You've used all your free queries!"}</h3>
                            <p>{"Upgrade to LawMaster Pro for unlimited legal queries, detailed analysis, and document generation."}</p>
                            <div class="upgrade-options">
                                <a href="#pricing" class="upgrade-btn primary">{"Upgrade to Pro - $29/mo"}</a>
                                if !session.bonus_claimed {
                                    <button
                                        class="upgrade-btn secondary"
                                        onclick={link.callback(|_| FreeQueryMsg::ClaimBonus)}
                                    >
                                        {format!("Try {} more queries", BONUS_QUERY_GRANT)}
                                    </button>
                                }
                            </div>
                        </div>
                    }
                </div>
                <style>
                    {r#"
                    .free-query-widget {
                        padding: 5rem 1.5rem;
                        background: linear-gradient(180deg, #f5f7fb 0%, #ffffff 100%);
                    }
                    .free-query-widget .container {
                        max-width: 820px;
                        margin: 0 auto;
                    }
                    .query-header {
                        text-align: center;
                        color: #1a3365;
                    }
                    .query-header p {
                        color: #4a5878;
                    }
                    .counter-badge {
                        position: relative;
                        overflow: hidden;
                        border-radius: 24px;
                        background: #e8eef9;
                        margin: 1.5rem auto;
                        max-width: 320px;
                    }
                    .counter-progress {
                        position: absolute;
                        inset: 0 auto 0 0;
                        background: rgba(200, 160, 74, 0.4);
                        transition: width 0.4s ease;
                    }
                    .counter-content {
                        position: relative;
                        display: flex;
                        gap: 0.5rem;
                        justify-content: center;
                        padding: 0.6rem 1rem;
                    }
                    .counter-number {
                        font-weight: 700;
                        color: #1a3365;
                    }
                    .language-toggle {
                        display: flex;
                        gap: 0.5rem;
                        margin-bottom: 1rem;
                    }
                    .language-toggle button {
                        border: 1px solid #d5dbe8;
                        background: #fff;
                        border-radius: 20px;
                        padding: 0.4rem 1rem;
                        cursor: pointer;
                    }
                    .language-toggle button.active {
                        background: #1a3365;
                        color: #fff;
                    }
                    .input-wrapper {
                        position: relative;
                    }
                    .query-textarea {
                        width: 100%;
                        box-sizing: border-box;
                        border: 1px solid #d5dbe8;
                        border-radius: 12px;
                        padding: 1rem 2.5rem 1rem 1rem;
                        font-size: 1rem;
                        resize: vertical;
                    }
                    .clear-btn {
                        position: absolute;
                        top: 0.75rem;
                        right: 0.75rem;
                        border: none;
                        background: none;
                        cursor: pointer;
                    }
                    .input-actions {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        margin-top: 0.5rem;
                    }
                    .voice-input-btn {
                        width: 40px;
                        height: 40px;
                        border: 1px solid #d5dbe8;
                        border-radius: 50%;
                        background: #fff;
                        cursor: pointer;
                    }
                    .voice-input-btn.recording {
                        border-color: #d64545;
                    }
                    .voice-input-btn:disabled {
                        opacity: 0.5;
                        cursor: not-allowed;
                    }
                    .pulse-dot {
                        display: inline-block;
                        width: 12px;
                        height: 12px;
                        border-radius: 50%;
                        background: #d64545;
                        animation: voice-pulse 1s ease-in-out infinite;
                    }
                    @keyframes voice-pulse {
                        0%, 100% { transform: scale(1); opacity: 1; }
                        50% { transform: scale(1.4); opacity: 0.6; }
                    }
                    .char-count {
                        margin-left: auto;
                        font-size: 0.8rem;
                        color: #6b7896;
                    }
                    .quick-buttons {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.5rem;
                    }
                    .quick-btn {
                        border: 1px dashed #c8a04a;
                        background: #fff;
                        border-radius: 16px;
                        padding: 0.4rem 0.8rem;
                        cursor: pointer;
                        transition: background 0.2s ease;
                    }
                    .quick-btn.quick-selected {
                        background: #c8a04a;
                        color: #fff;
                    }
                    .submit-btn {
                        width: 100%;
                        margin-top: 1.5rem;
                        padding: 0.9rem;
                        border: none;
                        border-radius: 10px;
                        background: #1a3365;
                        color: #fff;
                        font-weight: 600;
                        cursor: pointer;
                    }
                    .submit-btn:disabled {
                        opacity: 0.6;
                        cursor: not-allowed;
                    }
                    .spinner {
                        display: inline-block;
                        width: 14px;
                        height: 14px;
                        margin-right: 0.5rem;
                        border: 2px solid rgba(255, 255, 255, 0.4);
                        border-top-color: #fff;
                        border-radius: 50%;
                        animation: query-spin 0.8s linear infinite;
                    }
                    @keyframes query-spin {
                        to { transform: rotate(360deg); }
                    }
                    .response-container {
                        position: relative;
                        margin-top: 2rem;
                        padding: 1.5rem;
                        border-radius: 12px;
                        background: #fff;
                        box-shadow: 0 10px 30px rgba(26, 51, 101, 0.1);
                        max-height: 140px;
                        overflow: hidden;
                        transition: max-height 0.4s ease;
                    }
                    .response-container.expanded {
                        max-height: 1200px;
                    }
                    .expand-toggle {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        border: none;
                        background: none;
                        cursor: pointer;
                    }
                    .response-meta {
                        display: flex;
                        gap: 1rem;
                        font-size: 0.8rem;
                        color: #6b7896;
                    }
                    .section-tags {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.5rem;
                    }
                    .section-tag {
                        background: #e8eef9;
                        border-radius: 12px;
                        padding: 0.3rem 0.7rem;
                        font-size: 0.85rem;
                    }
                    .verification-badge {
                        margin-top: 1rem;
                        color: #2e9d5b;
                        font-size: 0.9rem;
                    }
                    .response-actions {
                        display: flex;
                        gap: 0.5rem;
                        margin-top: 1rem;
                    }
                    .action-btn {
                        border: 1px solid #d5dbe8;
                        background: #fff;
                        border-radius: 8px;
                        padding: 0.5rem 0.9rem;
                        cursor: pointer;
                    }
                    .queries-exhausted {
                        margin-top: 2rem;
                        text-align: center;
                        padding: 2rem;
                        border-radius: 12px;
                        background: #fff6e5;
                    }
                    .upgrade-options {
                        display: flex;
                        gap: 1rem;
                        justify-content: center;
                    }
                    .upgrade-btn {
                        padding: 0.7rem 1.2rem;
                        border-radius: 8px;
                        text-decoration: none;
                        cursor: pointer;
                    }
                    .upgrade-btn.primary {
                        background: #1a3365;
                        color: #fff;
                    }
                    .upgrade-btn.secondary {
                        border: 1px solid #1a3365;
                        background: #fff;
                        color: #1a3365;
                    }
                    "#}
                </style>
            </section>
        }
    }
}

impl FreeQuery {
    fn render_response(&self, ctx: &Context<Self>, response: &Analysis) -> Html {
        html! {
            <div class={classes!("response-container", self.expanded.then(|| "expanded"))}>
                <button
                    class="expand-toggle"
                    aria-label={if self.expanded { "Collapse response" } else { "Expand response" }}
                    onclick={ctx.link().callback(|_| FreeQueryMsg::ToggleExpand)}
                >
                    {if self.expanded { "▾" } else { "▸" }}
                </button>

                <div class="response-header">
                    <h3>{"AI Legal Analysis"}</h3>
                    <div class="response-meta">
                        <span class="response-time">{format!("Generated at {}", response.answered_at)}</span>
                        <span class="confidence-level">{"98% confidence"}</span>
                    </div>
                </div>

                <div class="analysis-text">
                    { for response.paragraphs.iter().map(|paragraph| html! { <p>{paragraph}</p> }) }
                </div>
                <div class="relevant-sections">
                    <h4>{"Relevant Legal Provisions:"}</h4>
                    <div class="section-tags">
                        { for response.relevant_sections.iter().map(|section| html! {
                            <span class="section-tag">{*section}</span>
                        }) }
                    </div>
                </div>

                <div class="verification-badge">{"✔ Verified by multiple AI legal agents"}</div>

                <div class="response-actions">
                    <button class="action-btn">{"Copy Response"}</button>
                    <button class="action-btn">{"Deep Research"}</button>
                    <button class="action-btn">{"Generate Document"}</button>
                </div>
            </div>
        }
    }
}
