use yew::prelude::*;

use crate::components::animated_counter::AnimatedCounter;
use crate::components::particle_canvas::ParticleCanvas;
use crate::config::HERO_PARTICLE_COUNT;
use crate::reveal::counter::CounterSpec;
use crate::reveal::stagger::Stagger;
use crate::reveal::trigger::{use_reveal, RevealOptions};

const HIGHLIGHTS: [&str; 3] = [
    "No credit card required",
    "Set up in minutes",
    "Free onboarding assistance",
];

fn floating_cards() -> [(&'static str, &'static str, CounterSpec); 3] {
    [
        ("📈", "Success Prediction", CounterSpec::new(92.0).suffix("%")),
        ("🔍", "Relevant Cases", CounterSpec::new(142.0)),
        ("⚡", "Avg. Response", CounterSpec::new(5.2).suffix("s")),
    ]
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let hero_ref = use_node_ref();
    let revealed = use_reveal("hero", hero_ref.clone(), RevealOptions::at(0.5));

    html! {
        <section id="home" class="hero" ref={hero_ref}>
            <ParticleCanvas count={HERO_PARTICLE_COUNT} class="particles-canvas" />

            <div class="hero-content">
                <div class={classes!("hero-text", revealed.then(|| "visible"))}>
                    <div class="pre-title">{"AI-Powered Legal Technology"}</div>
                    <h1 class="hero-title">
                        <span class="title-line">{"Transform Your Practice with"}</span>
                        <span class="title-accent">{"LawMaster AI"}</span>
                    </h1>
                    <p class="hero-subtitle">
                        {"Advanced artificial intelligence designed specifically for legal professionals. \
                          Streamline research, drafting, and compliance with cutting-edge technology."}
                    </p>

                    <div class="cta-container">
                        <a href="#pricing" class="cta-button primary">{"Start Free Trial"}</a>
                        <a href="#demo" class="cta-button secondary">{"▶ Watch Demo"}</a>
                    </div>

                    <div class="hero-highlights">
                        { for HIGHLIGHTS.iter().map(|text| html! {
                            <div class="highlight-item">
                                <div class="highlight-icon">{"✓"}</div>
                                <span>{*text}</span>
                            </div>
                        }) }
                    </div>
                </div>

                <div class="hero-visual">
                    <div class="main-card">
                        <div class="card-header">
                            <div class="card-header-icons">
                                <span></span>
                                <span></span>
                                <span></span>
                            </div>
                            <div class="card-title">{"Contract Analysis"}</div>
                        </div>
                        <div class="card-content">
                            <div class="ai-process-line">
                                <div class="process-node active">{"📥"}</div>
                                <div class="process-node">{"🧠"}</div>
                                <div class="process-node">{"✔"}</div>
                            </div>
                            <div class="process-text">{"AI Analyzing Document..."}</div>
                            <div class="document-preview">
                                <div class="document-line"></div>
                                <div class="document-line"></div>
                                <div class="document-line"></div>
                                <div class="document-line highlighted"></div>
                                <div class="document-line"></div>
                            </div>
                        </div>
                    </div>

                    { for floating_cards().into_iter().enumerate().map(|(i, (icon, label, spec))| html! {
                        <div class={classes!("floating-card", format!("card-{}", i + 1))}>
                            <span class="floating-card-icon">{icon}</span>
                            <div class="floating-card-text">
                                <AnimatedCounter
                                    class="card-value"
                                    spec={spec}
                                    active={revealed}
                                    index={i}
                                    stagger={Stagger::NONE}
                                />
                                <div class="card-label">{label}</div>
                            </div>
                        </div>
                    }) }
                </div>
            </div>

            <div class="scroll-indicator">
                <div class="scroll-text">{"Scroll to discover"}</div>
            </div>
            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    overflow: hidden;
                    background: linear-gradient(135deg, #f5f7fb 0%, #e8eef9 100%);
                    padding: 6rem 1.5rem 3rem;
                }
                .particles-canvas {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    pointer-events: none;
                }
                .hero-content {
                    position: relative;
                    max-width: 1200px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1.1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                }
                .hero-text {
                    opacity: 0;
                    transform: translateY(24px);
                    transition: opacity 0.8s ease, transform 0.8s ease;
                }
                .hero-text.visible {
                    opacity: 1;
                    transform: none;
                }
                .pre-title {
                    color: #c8a04a;
                    font-weight: 600;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    font-size: 0.85rem;
                }
                .hero-title {
                    font-size: 3rem;
                    color: #1a3365;
                    line-height: 1.15;
                    margin: 1rem 0;
                }
                .title-line, .title-accent {
                    display: block;
                }
                .title-accent {
                    color: #c8a04a;
                }
                .hero-subtitle {
                    color: #4a5878;
                    font-size: 1.1rem;
                    line-height: 1.6;
                }
                .cta-container {
                    display: flex;
                    gap: 1rem;
                    margin: 2rem 0;
                }
                .cta-button {
                    padding: 0.85rem 1.6rem;
                    border-radius: 8px;
                    text-decoration: none;
                    font-weight: 600;
                }
                .cta-button.primary {
                    background: #1a3365;
                    color: #fff;
                }
                .cta-button.secondary {
                    border: 2px solid #1a3365;
                    color: #1a3365;
                }
                .hero-highlights {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1.25rem;
                    color: #4a5878;
                }
                .highlight-item {
                    display: flex;
                    gap: 0.5rem;
                    align-items: center;
                }
                .highlight-icon {
                    color: #2e9d5b;
                    font-weight: 700;
                }
                .hero-visual {
                    position: relative;
                }
                .main-card {
                    background: #fff;
                    border-radius: 16px;
                    box-shadow: 0 20px 50px rgba(26, 51, 101, 0.15);
                    overflow: hidden;
                }
                .card-header {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    padding: 0.9rem 1.2rem;
                    background: #1a3365;
                    color: #fff;
                }
                .card-header-icons {
                    display: flex;
                    gap: 6px;
                }
                .card-header-icons span {
                    width: 10px;
                    height: 10px;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.5);
                }
                .card-content {
                    padding: 1.5rem;
                }
                .ai-process-line {
                    display: flex;
                    justify-content: space-between;
                }
                .process-node {
                    width: 44px;
                    height: 44px;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: #e8eef9;
                }
                .process-node.active {
                    background: #c8a04a;
                }
                .process-text {
                    margin: 1rem 0;
                    color: #4a5878;
                    font-size: 0.9rem;
                }
                .document-line {
                    height: 8px;
                    margin: 8px 0;
                    border-radius: 4px;
                    background: #e8eef9;
                }
                .document-line.highlighted {
                    background: rgba(200, 160, 74, 0.5);
                }
                .floating-card {
                    position: absolute;
                    display: flex;
                    gap: 0.75rem;
                    align-items: center;
                    background: #fff;
                    padding: 0.75rem 1rem;
                    border-radius: 12px;
                    box-shadow: 0 10px 30px rgba(26, 51, 101, 0.15);
                }
                .floating-card.card-1 { top: -1.5rem; right: -1rem; }
                .floating-card.card-2 { bottom: 2rem; left: -2rem; }
                .floating-card.card-3 { bottom: -1.5rem; right: 2rem; }
                .card-value {
                    font-weight: 700;
                    font-size: 1.25rem;
                    color: #1a3365;
                }
                .card-label {
                    font-size: 0.8rem;
                    color: #6b7896;
                }
                .scroll-indicator {
                    position: absolute;
                    bottom: 1.5rem;
                    left: 50%;
                    transform: translateX(-50%);
                    color: #6b7896;
                    font-size: 0.8rem;
                }
                @media (max-width: 900px) {
                    .hero-content {
                        grid-template-columns: 1fr;
                    }
                    .hero-title {
                        font-size: 2.2rem;
                    }
                    .floating-card {
                        display: none;
                    }
                }
                "#}
            </style>
        </section>
    }
}
