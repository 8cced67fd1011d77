use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// `1234567` -> `"1,234,567"`.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Linear step between `start` and `end`, truncated. Progress at or past 1
/// lands exactly on `end`.
pub fn interpolate(start: u64, end: u64, progress: f64) -> u64 {
    let progress = progress.clamp(0.0, 1.0);
    if progress >= 1.0 {
        return end;
    }
    let value = (progress * (end as f64 - start as f64) + start as f64).floor();
    value.max(0.0) as u64
}

/// A running count-up driven by `requestAnimationFrame`. Dropping it cancels
/// the pending frame.
pub struct CountUp {
    frame: Rc<RefCell<Option<i32>>>,
    step: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
}

impl CountUp {
    pub fn start(from: u64, to: u64, duration_ms: f64, on_frame: impl Fn(u64) + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let started_at = window.performance()?.now();

        let frame: Rc<RefCell<Option<i32>>> = Rc::new(RefCell::new(None));
        let step: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));

        {
            let frame = frame.clone();
            let next_step = step.clone();
            let window = window.clone();
            *step.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
                let progress = if duration_ms > 0.0 {
                    (now - started_at) / duration_ms
                } else {
                    1.0
                };
                on_frame(interpolate(from, to, progress));

                let next = if progress < 1.0 {
                    next_step
                        .borrow()
                        .as_ref()
                        .and_then(|cb| window.request_animation_frame(cb.as_ref().unchecked_ref()).ok())
                } else {
                    None
                };
                *frame.borrow_mut() = next;
            }) as Box<dyn FnMut(f64)>));
        }

        let first = step
            .borrow()
            .as_ref()
            .and_then(|cb| window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
        *frame.borrow_mut() = first;

        Some(Self { frame, step })
    }
}

impl Drop for CountUp {
    fn drop(&mut self) {
        if let Some(id) = self.frame.borrow_mut().take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
        // The closure holds a handle to its own cell; clearing it frees both.
        self.step.borrow_mut().take();
    }
}

/// Returns the value to display while counting towards `target`. A new
/// target cancels the running animation and continues from whatever is
/// currently on screen.
#[hook]
pub fn use_count_up(target: u64, duration_ms: u32) -> u64 {
    let displayed = use_state_eq(|| 0u64);
    let latest = use_mut_ref(|| 0u64);

    {
        let displayed = displayed.clone();
        let latest = latest.clone();
        use_effect_with_deps(
            move |&target| {
                let from = *latest.borrow();
                let task = if from == target {
                    None
                } else {
                    let on_frame = {
                        let displayed = displayed.clone();
                        let latest = latest.clone();
                        move |value| {
                            *latest.borrow_mut() = value;
                            displayed.set(value);
                        }
                    };
                    let task = CountUp::start(from, target, duration_ms as f64, on_frame);
                    if task.is_none() {
                        *latest.borrow_mut() = target;
                        displayed.set(target);
                    }
                    task
                };
                move || drop(task)
            },
            target,
        );
    }

    *displayed
}

#[derive(Properties, PartialEq)]
pub struct AnimatedNumberProps {
    pub id: AttrValue,
    pub value: u64,
    #[prop_or(500)]
    pub duration_ms: u32,
}

#[function_component(AnimatedNumber)]
pub fn animated_number(props: &AnimatedNumberProps) -> Html {
    let shown = use_count_up(props.value, props.duration_ms);
    html! {
        <span id={props.id.clone()}>{ format_thousands(shown) }</span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_separators() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1_000), "1,000");
        assert_eq!(format_thousands(31_200), "31,200");
        assert_eq!(format_thousands(220_000), "220,000");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn interpolation_endpoints() {
        assert_eq!(interpolate(0, 220_000, 0.0), 0);
        assert_eq!(interpolate(0, 220_000, 1.0), 220_000);
        assert_eq!(interpolate(0, 220_000, 1.7), 220_000);
        assert_eq!(interpolate(100, 300, -0.2), 100);
        assert_eq!(interpolate(0, 10, 0.55), 5);
    }

    #[test]
    fn interpolation_counts_down_too() {
        assert_eq!(interpolate(300, 100, 0.5), 200);
        assert_eq!(interpolate(10, 0, 0.25), 7);
        assert_eq!(interpolate(10, 0, 1.0), 0);
    }
}
