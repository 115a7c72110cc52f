use yew::prelude::*;

use crate::components::animated_counter::AnimatedCounter;
use crate::config::STATS_PARTICLE_COUNT;
use crate::dom;
use crate::reveal::counter::CounterSpec;
use crate::reveal::trigger::{use_reveal, RevealOptions};

struct Stat {
    icon: &'static str,
    label: &'static str,
    spec: CounterSpec,
}

fn stats() -> Vec<Stat> {
    vec![
        Stat {
            icon: "📄",
            label: "Legal Documents Processed",
            spec: CounterSpec::new(10_000.0).suffix("+"),
        },
        Stat {
            icon: "🎯",
            label: "Accuracy Rate",
            spec: CounterSpec::new(98.0).suffix("%"),
        },
        Stat {
            icon: "⚖️",
            label: "Law Firms Using",
            spec: CounterSpec::new(500.0).suffix("+"),
        },
        Stat {
            icon: "⏱️",
            label: "Hours Saved Weekly",
            spec: CounterSpec::new(24.0).prefix("~"),
        },
    ]
}

/// Inline style for one decorative dot, rolled once per mount.
fn particle_style(mut rand: impl FnMut() -> f64) -> String {
    format!(
        "left: {:.2}%; top: {:.2}%; animation-delay: {:.2}s; animation-duration: {:.2}s;",
        rand() * 100.0,
        rand() * 100.0,
        rand() * 5.0,
        5.0 + rand() * 10.0,
    )
}

#[function_component(Stats)]
pub fn stats_section() -> Html {
    let section_ref = use_node_ref();
    let revealed = use_reveal(
        "stats",
        section_ref.clone(),
        RevealOptions::at(0.3).with_root_margin("0px 0px -50px 0px"),
    );
    let particles = use_memo(
        |_| {
            (0..STATS_PARTICLE_COUNT)
                .map(|_| particle_style(dom::random))
                .collect::<Vec<_>>()
        },
        (),
    );

    html! {
        <section class="stats-section" ref={section_ref} aria-labelledby="stats-heading">
            <div class="particles-container">
                { for particles.iter().map(|style| html! {
                    <div class="particle" style={style.clone()}></div>
                }) }
            </div>

            <div class="container">
                <div class="stats-header">
                    <h2 id="stats-heading">
                        <span class="heading-highlight">{"Trusted"}</span>
                        {" by Legal Professionals Nationwide"}
                    </h2>
                    <p>{"LawMaster delivers proven results for law firms of all sizes"}</p>
                </div>

                <div class="stats-grid">
                    { for stats().into_iter().enumerate().map(|(index, stat)| html! {
                        <div class="stat-item" aria-label={format!("{} {}", stat.spec.target, stat.label)}>
                            <div class="stat-icon">{stat.icon}</div>
                            <div class="stat-content">
                                <AnimatedCounter
                                    class="stat-number"
                                    spec={stat.spec}
                                    active={revealed}
                                    index={index}
                                />
                                <div class="stat-label">{stat.label}</div>
                            </div>
                        </div>
                    }) }
                </div>

                <div class="stats-cta">
                    <button class="cta-button">{"See Case Studies →"}</button>
                    <div class="trust-badges">
                        <div class="badge"><span>{"⭐️ 4.9/5 Rating"}</span></div>
                        <div class="badge"><span>{"🔒 SOC 2 Compliant"}</span></div>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .stats-section {
                    position: relative;
                    overflow: hidden;
                    padding: 5rem 1.5rem;
                    background: #1a3365;
                    color: #fff;
                }
                .particles-container {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                }
                .particle {
                    position: absolute;
                    width: 6px;
                    height: 6px;
                    border-radius: 50%;
                    background: rgba(200, 160, 74, 0.35);
                    animation-name: stats-float;
                    animation-iteration-count: infinite;
                    animation-timing-function: ease-in-out;
                }
                @keyframes stats-float {
                    0%, 100% { transform: translateY(0); opacity: 0.3; }
                    50% { transform: translateY(-30px); opacity: 0.8; }
                }
                .stats-section .container {
                    position: relative;
                    max-width: 1200px;
                    margin: 0 auto;
                }
                .stats-header {
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .heading-highlight {
                    color: #c8a04a;
                }
                .stats-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 1.5rem;
                }
                .stat-item {
                    display: flex;
                    gap: 1rem;
                    align-items: center;
                    padding: 1.5rem;
                    border-radius: 12px;
                    background: rgba(255, 255, 255, 0.06);
                    transition: transform 0.3s ease;
                }
                .stat-item:hover {
                    transform: translateY(-4px);
                }
                .stat-icon {
                    font-size: 2rem;
                }
                .stat-number {
                    font-size: 2rem;
                    font-weight: 700;
                    color: #c8a04a;
                }
                .stat-label {
                    color: rgba(255, 255, 255, 0.8);
                }
                .stats-cta {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                    margin-top: 3rem;
                }
                .stats-cta .cta-button {
                    background: #c8a04a;
                    color: #1a3365;
                    border: none;
                    border-radius: 8px;
                    padding: 0.85rem 1.6rem;
                    font-weight: 600;
                    cursor: pointer;
                }
                .trust-badges {
                    display: flex;
                    gap: 1rem;
                }
                .badge {
                    padding: 0.5rem 1rem;
                    border-radius: 20px;
                    background: rgba(255, 255, 255, 0.1);
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_stats_in_display_order() {
        let idle: Vec<String> = stats().iter().map(|s| s.spec.render(s.spec.start)).collect();
        assert_eq!(idle, ["0+", "0%", "0+", "~0"]);
        let settled: Vec<String> = stats().iter().map(|s| s.spec.render(s.spec.target)).collect();
        assert_eq!(settled, ["10,000+", "98%", "500+", "~24"]);
    }

    #[test]
    fn particle_style_scales_random_draws() {
        let style = particle_style(|| 0.5);
        assert_eq!(
            style,
            "left: 50.00%; top: 50.00%; animation-delay: 2.50s; animation-duration: 10.00s;"
        );
    }
}
