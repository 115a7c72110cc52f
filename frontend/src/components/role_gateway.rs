use gloo_timers::callback::Timeout;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config::ROLE_CARD_STEP_MS;
use crate::reveal::stagger::Stagger;

struct Role {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    features: [&'static str; 3],
    color: &'static str,
    satisfaction: &'static str,
    support: &'static str,
}

const ROLES: [Role; 6] = [
    Role {
        icon: "⚖️",
        title: "Advocates",
        description: "Private workspace, case management, alternative arguments, e-filing, and client updates.",
        features: ["Case Management", "E-Filing", "Client Portal"],
        color: "#2563EB",
        satisfaction: "98%",
        support: "24/7",
    },
    Role {
        icon: "🎓",
        title: "Law Students",
        description: "Dissertation help, moot court preparation, exam prep, and career guidance.",
        features: ["Exam Prep", "Moot Court", "Career Guidance"],
        color: "#059669",
        satisfaction: "95%",
        support: "Academic Hours",
    },
    Role {
        icon: "👔",
        title: "Legal Clerks",
        description: "Daily hearing calendars, SMS alerts, and fake case monitoring.",
        features: ["Hearing Calendar", "SMS Alerts", "Case Monitoring"],
        color: "#D97706",
        satisfaction: "97%",
        support: "Business Hours",
    },
    Role {
        icon: "👥",
        title: "Parties",
        description: "Case-based subscriptions with applied research and guidance.",
        features: ["Case Tracking", "Research", "Guidance"],
        color: "#DC2626",
        satisfaction: "94%",
        support: "24/7",
    },
    Role {
        icon: "🔍",
        title: "Researchers",
        description: "Dedicated doctrinal research tools and analysis frameworks.",
        features: ["Research Tools", "Analysis", "Frameworks"],
        color: "#7C3AED",
        satisfaction: "96%",
        support: "Research Hours",
    },
    Role {
        icon: "🧒",
        title: "General Public",
        description: "Free legal queries, micropayments for extras, and easy-to-use templates.",
        features: ["Free Queries", "Templates", "Micropayments"],
        color: "#DB2777",
        satisfaction: "92%",
        support: "Business Hours",
    },
];

const CARD_STAGGER: Stagger = Stagger {
    delay_step_ms: ROLE_CARD_STEP_MS,
    duration_step_ms: 0,
};

#[function_component(RoleGateway)]
pub fn role_gateway() -> Html {
    // Cards 0..shown are on screen
    let shown = use_state_eq(|| 0usize);
    let hovered = use_state(|| None::<usize>);

    {
        let shown = shown.clone();
        use_effect_with_deps(
            move |_| {
                let timers: Vec<Timeout> = (0..ROLES.len())
                    .map(|index| {
                        let shown = shown.clone();
                        Timeout::new(CARD_STAGGER.delay_for(index), move || shown.set(index + 1))
                    })
                    .collect();
                move || drop(timers)
            },
            (),
        );
    }

    html! {
        <section id="role-gateway" class="role-gateway">
            <div class="premium-container">
                <div class="premium-header">
                    <div class="header-badge">{"Role Gateway"}</div>
                    <h2 class="premium-title">
                        {"Designed For "}<span class="gradient-text">{"Every Legal Professional"}</span>
                    </h2>
                    <p class="premium-subtitle">
                        {"Experience tailored solutions designed specifically for your unique legal needs and requirements"}
                    </p>
                </div>

                <div class="premium-grid">
                    { for ROLES.iter().enumerate().map(|(index, role)| {
                        let onmouseenter = {
                            let hovered = hovered.clone();
                            Callback::from(move |_: MouseEvent| hovered.set(Some(index)))
                        };
                        let onmouseleave = {
                            let hovered = hovered.clone();
                            Callback::from(move |_: MouseEvent| hovered.set(None))
                        };
                        html! {
                            <div
                                class={classes!(
                                    "premium-card",
                                    (*hovered == Some(index)).then(|| "active"),
                                    (index < *shown).then(|| "visible"),
                                )}
                                style={format!("--card-color: {};", role.color)}
                                onmouseenter={onmouseenter}
                                onmouseleave={onmouseleave}
                            >
                                <div class="card-inner">
                                    <div class="card-header">
                                        <div class="card-icon-container">{role.icon}</div>
                                        <div class="card-badge">{"Featured"}</div>
                                    </div>
                                    <h3>{role.title}</h3>
                                    <p>{role.description}</p>
                                    <div class="card-features">
                                        { for role.features.iter().map(|feature| html! {
                                            <div class="feature-item">
                                                <span class="feature-check">{"✓"}</span>
                                                <span>{*feature}</span>
                                            </div>
                                        }) }
                                    </div>
                                    <div class="card-hover-content">
                                        <button class="premium-btn">{"Explore Features →"}</button>
                                        <div class="card-stats">
                                            <div class="stat">
                                                <div class="stat-number">{role.satisfaction}</div>
                                                <div class="stat-label">{"Satisfaction"}</div>
                                            </div>
                                            <div class="stat">
                                                <div class="stat-number">{role.support}</div>
                                                <div class="stat-label">{"Support"}</div>
                                            </div>
                                        </div>
                                    </div>
                                </div>
                            </div>
                        }
                    }) }
                </div>

                <div class="audience-cta">
                    <h3>{"Not sure which plan is right for you?"}</h3>
                    <p>{"Speak with our legal experts to find the perfect solution"}</p>
                    <button class="cta-button">{"💬 Contact Our Team"}</button>
                </div>
            </div>
            <style>
                {r#"
                .role-gateway {
                    padding: 5rem 1.5rem;
                    background: #fff;
                }
                .premium-container {
                    max-width: 1200px;
                    margin: 0 auto;
                }
                .premium-header {
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .header-badge {
                    display: inline-block;
                    padding: 0.3rem 0.9rem;
                    border-radius: 20px;
                    background: #e8eef9;
                    color: #1a3365;
                    font-size: 0.8rem;
                    font-weight: 600;
                }
                .premium-title {
                    color: #1a3365;
                }
                .gradient-text {
                    background: linear-gradient(90deg, #1a3365, #c8a04a);
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }
                .premium-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
                    gap: 1.5rem;
                }
                .premium-card {
                    opacity: 0;
                    transform: translateY(30px);
                    transition: opacity 0.5s ease, transform 0.5s ease, box-shadow 0.3s ease;
                    border-radius: 16px;
                    border-top: 4px solid var(--card-color);
                    background: #f5f7fb;
                }
                .premium-card.visible {
                    opacity: 1;
                    transform: none;
                }
                .premium-card.active {
                    box-shadow: 0 16px 40px rgba(26, 51, 101, 0.15);
                    transform: translateY(-6px);
                }
                .card-inner {
                    padding: 1.5rem;
                }
                .premium-card .card-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .card-icon-container {
                    font-size: 2rem;
                }
                .card-badge {
                    font-size: 0.7rem;
                    padding: 0.2rem 0.6rem;
                    border-radius: 10px;
                    background: var(--card-color);
                    color: #fff;
                }
                .feature-item {
                    display: flex;
                    gap: 0.5rem;
                    margin: 0.3rem 0;
                }
                .feature-check {
                    color: var(--card-color);
                }
                .card-hover-content {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    margin-top: 1rem;
                }
                .premium-btn {
                    border: none;
                    border-radius: 8px;
                    padding: 0.5rem 1rem;
                    background: var(--card-color);
                    color: #fff;
                    cursor: pointer;
                }
                .card-stats {
                    display: flex;
                    gap: 1rem;
                    text-align: center;
                    font-size: 0.8rem;
                }
                .card-stats .stat-number {
                    font-weight: 700;
                    color: var(--card-color);
                }
                .audience-cta {
                    margin-top: 3rem;
                    text-align: center;
                }
                .audience-cta .cta-button {
                    border: none;
                    border-radius: 8px;
                    padding: 0.8rem 1.6rem;
                    background: #1a3365;
                    color: #fff;
                    cursor: pointer;
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
    fn cards_appear_two_hundred_ms_apart() {
        let delays: Vec<u32> = (0..ROLES.len()).map(|i| CARD_STAGGER.delay_for(i)).collect();
        assert_eq!(delays, [0, 200, 400, 600, 800, 1000]);
    }
}
