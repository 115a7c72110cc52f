use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use crate::dom;
use crate::error::DomError;
use crate::reveal::frame::{FrameControl, FrameLoop};

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub speed: f64,
    pub direction: f64,
    pub alpha: f64,
}

/// Drifting dots that wrap around the edges of a `width` x `height` box.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParticleField {
    pub particles: Vec<Particle>,
    pub width: f64,
    pub height: f64,
}

impl ParticleField {
    /// `rand` must yield values in `[0, 1)`.
    pub fn scatter(count: usize, width: f64, height: f64, mut rand: impl FnMut() -> f64) -> Self {
        let particles = (0..count)
            .map(|_| Particle {
                x: rand() * width,
                y: rand() * height,
                radius: rand() * 2.0 + 1.0,
                speed: rand() * 0.5 + 0.2,
                direction: rand() * TAU,
                alpha: rand() * 0.1 + 0.05,
            })
            .collect();
        Self {
            particles,
            width,
            height,
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn step(&mut self) {
        for particle in &mut self.particles {
            particle.x += particle.direction.cos() * particle.speed;
            particle.y += particle.direction.sin() * particle.speed;

            if particle.x < 0.0 {
                particle.x = self.width;
            } else if particle.x > self.width {
                particle.x = 0.0;
            }
            if particle.y < 0.0 {
                particle.y = self.height;
            } else if particle.y > self.height {
                particle.y = 0.0;
            }
        }
    }
}

fn fit_to_layout(canvas: &HtmlCanvasElement) -> (f64, f64) {
    let width = canvas.offset_width().max(0) as u32;
    let height = canvas.offset_height().max(0) as u32;
    canvas.set_width(width);
    canvas.set_height(height);
    (f64::from(width), f64::from(height))
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, DomError> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| DomError::Js("2d context unavailable".into()))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| DomError::Js("2d context has an unexpected type".into()))
}

fn draw(ctx: &CanvasRenderingContext2d, field: &ParticleField) {
    ctx.clear_rect(0.0, 0.0, field.width, field.height);
    for particle in &field.particles {
        ctx.begin_path();
        let _ = ctx.arc(particle.x, particle.y, particle.radius, 0.0, TAU);
        ctx.set_fill_style_str(&format!("rgba(26, 51, 101, {:.3})", particle.alpha));
        ctx.fill();
    }
}

struct Animation {
    _frames: FrameLoop,
    on_resize: Closure<dyn FnMut()>,
}

impl Animation {
    fn start(canvas: HtmlCanvasElement, count: usize) -> Result<Self, DomError> {
        let window = web_sys::window().ok_or(DomError::NoWindow)?;
        let ctx = context_2d(&canvas)?;
        let (width, height) = fit_to_layout(&canvas);
        let field = Rc::new(RefCell::new(ParticleField::scatter(
            count,
            width,
            height,
            dom::random,
        )));

        let on_resize = {
            let field = Rc::clone(&field);
            let canvas = canvas.clone();
            Closure::<dyn FnMut()>::new(move || {
                let (width, height) = fit_to_layout(&canvas);
                field.borrow_mut().resize(width, height);
            })
        };
        window.add_event_listener_with_callback(
            "resize",
            on_resize.as_ref().unchecked_ref(),
        )?;

        let frames = FrameLoop::start(move |_| {
            let mut field = field.borrow_mut();
            field.step();
            draw(&ctx, &field);
            FrameControl::Continue
        })?;

        Ok(Self {
            _frames: frames,
            on_resize,
        })
    }
}

impl Drop for Animation {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                "resize",
                self.on_resize.as_ref().unchecked_ref(),
            );
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ParticleCanvasProps {
    pub count: usize,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ParticleCanvas)]
pub fn particle_canvas(props: &ParticleCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |count| {
                let animation = canvas_ref
                    .cast::<HtmlCanvasElement>()
                    .ok_or(DomError::Unmounted)
                    .and_then(|canvas| Animation::start(canvas, *count));
                let animation = match animation {
                    Ok(animation) => Some(animation),
                    Err(err) => {
                        warn!("Particle background disabled: {}", err);
                        None
                    }
                };
                move || drop(animation)
            },
            props.count,
        );
    }

    html! {
        <canvas ref={canvas_ref} class={props.class.clone()}></canvas>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(values: &[f64]) -> impl FnMut() -> f64 + '_ {
        let mut iter = values.iter().cycle();
        move || *iter.next().unwrap()
    }

    #[test]
    fn scatter_stays_inside_the_box() {
        let field = ParticleField::scatter(50, 800.0, 600.0, fixed(&[0.0, 0.25, 0.5, 0.99]));
        assert_eq!(field.particles.len(), 50);
        for p in &field.particles {
            assert!((0.0..800.0).contains(&p.x));
            assert!((0.0..600.0).contains(&p.y));
            assert!((1.0..3.0).contains(&p.radius));
            assert!((0.2..0.7).contains(&p.speed));
            assert!((0.05..0.15).contains(&p.alpha));
        }
    }

    #[test]
    fn particles_move_along_their_heading() {
        let mut field = ParticleField {
            particles: vec![Particle {
                x: 10.0,
                y: 10.0,
                radius: 1.0,
                speed: 0.5,
                direction: 0.0,
                alpha: 0.1,
            }],
            width: 100.0,
            height: 100.0,
        };
        field.step();
        assert!((field.particles[0].x - 10.5).abs() < 1e-9);
        assert!((field.particles[0].y - 10.0).abs() < 1e-9);
    }

    #[test]
    fn particles_wrap_at_the_edges() {
        let mut field = ParticleField {
            particles: vec![
                Particle {
                    x: 99.9,
                    y: 50.0,
                    radius: 1.0,
                    speed: 0.5,
                    direction: 0.0,
                    alpha: 0.1,
                },
                Particle {
                    x: 50.0,
                    y: 0.1,
                    radius: 1.0,
                    speed: 0.5,
                    direction: -TAU / 4.0,
                    alpha: 0.1,
                },
            ],
            width: 100.0,
            height: 100.0,
        };
        field.step();
        assert_eq!(field.particles[0].x, 0.0);
        assert_eq!(field.particles[1].y, 100.0);
    }
}
