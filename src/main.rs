//! Pop the Question entry point
//!
//! Handles platform-specific initialization and wires the card to the page.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_card {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use wasm_bindgen::prelude::*;
    use web_sys::{Element, HtmlCanvasElement, HtmlElement, MouseEvent, PointerEvent};

    use pop_the_question::confetti::{Confetti, CreateOptions};
    use pop_the_question::consts::*;
    use pop_the_question::renderer::{CanvasRenderer, buffer_size};
    use pop_the_question::sim::{CardState, CelebrationSchedule, Rect};
    use pop_the_question::{Settings, Tuning};

    /// Card instance owning every DOM handle and all live state
    struct Card {
        state: CardState,
        engine: Confetti,
        renderer: Option<CanvasRenderer>,
        celebration: Option<CelebrationSchedule>,
        rng: Pcg32,
        tuning: Tuning,
        // DOM handles resolved once at mount
        zone: Element,
        decline_btn: HtmlElement,
        accept_btn: HtmlElement,
        prompt: Element,
        result: Element,
    }

    impl Card {
        /// Handle a pointer move over the button zone.
        ///
        /// Rects are resolved from live layout on every event - the zone
        /// and button can both have been resized since the last one.
        fn handle_pointer_move(&mut self, x: f32, y: f32) {
            let zone = rect_of(&self.zone);
            let button = rect_of(&self.decline_btn);

            if let Some(offset) = self
                .state
                .pointer_moved(Vec2::new(x, y), &zone, &button)
            {
                // Centered -> free: inline offset replaces the stylesheet
                // placement
                let style = self.decline_btn.style();
                let _ = style.set_property("left", &format!("{}px", offset.x));
                let _ = style.set_property("top", &format!("{}px", offset.y));
                let _ = style.set_property("transform", "none");

                let _ = self.accept_btn.style().set_property(
                    "transform",
                    &format!("translateY(-50%) scale({})", self.state.accept_scale.value()),
                );
            }
        }

        /// Accept the proposal. Only the first call flips the page and
        /// starts the celebration.
        fn accept(&mut self, now_ms: f64) -> bool {
            if !self.state.accept() {
                return false;
            }

            // Prompt branch unmounts, celebration branch mounts
            let _ = self.prompt.set_attribute("class", "hidden");
            let _ = self.result.set_attribute("class", "result");

            self.celebration = Some(CelebrationSchedule::start(now_ms, &self.tuning));
            log::info!("accepted - celebration running");
            true
        }

        /// One animation frame: poll the schedule, advance the pool, draw
        fn frame(&mut self, now_ms: f64) {
            let mut celebrating = false;
            if let Some(schedule) = self.celebration.as_mut() {
                for burst in schedule.poll(now_ms, &self.tuning, &mut self.rng) {
                    self.engine.emit(&burst);
                }
                if schedule.is_done(now_ms) && self.engine.is_idle() {
                    self.celebration = None;
                    log::info!("celebration finished");
                } else {
                    celebrating = true;
                }
            }

            if celebrating || !self.engine.is_idle() {
                self.engine.tick();
                if let Some(renderer) = &self.renderer {
                    renderer.render(&self.engine);
                }
            }
        }

        /// Recompute the pixel buffer from the viewport and commit it to
        /// the canvas and the engine
        fn resize_surface(&mut self) {
            let Some(window) = web_sys::window() else {
                return;
            };
            let vw = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let vh = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let dpr = window.device_pixel_ratio();

            let w = buffer_size(vw, dpr);
            let h = buffer_size(vh, dpr);
            if let Some(renderer) = &self.renderer {
                renderer.resize(w, h);
            }
            self.engine.set_buffer_size(w, h);
            log::debug!("surface buffer {}x{} (dpr {})", w, h, dpr);
        }
    }

    fn rect_of(el: &Element) -> Rect {
        let r = el.get_bounding_client_rect();
        Rect::new(
            r.left() as f32,
            r.top() as f32,
            r.width() as f32,
            r.height() as f32,
        )
    }

    fn now_ms() -> f64 {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or(0.0)
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Pop the Question starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("confetti-canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        let zone = document
            .get_element_by_id("button-zone")
            .expect("no button zone");
        let decline_btn: HtmlElement = document
            .get_element_by_id("no-btn")
            .expect("no decline button")
            .dyn_into()
            .expect("not an element");
        let accept_btn: HtmlElement = document
            .get_element_by_id("yes-btn")
            .expect("no accept button")
            .dyn_into()
            .expect("not an element");
        let prompt = document.get_element_by_id("prompt").expect("no prompt");
        let result = document.get_element_by_id("result").expect("no result");

        let settings = Settings::load();

        // Optional inline tuning override
        let tuning = document
            .get_element_by_id("tuning")
            .and_then(|el| el.text_content())
            .map(|json| match Tuning::from_json(&json) {
                Ok(t) => t,
                Err(e) => {
                    log::warn!("ignoring bad tuning block: {e}");
                    Tuning::default()
                }
            })
            .unwrap_or_default();

        let seed = js_sys::Date::now() as u64;
        log::info!("Card initialized with seed: {}", seed);

        let engine = Confetti::new(
            canvas.width(),
            canvas.height(),
            Pcg32::seed_from_u64(seed),
            settings.max_particles(),
            CreateOptions {
                resize: false,
                use_worker: true,
            },
        );
        let use_worker = engine.use_worker();
        let renderer = CanvasRenderer::new(canvas, use_worker);
        if renderer.is_none() {
            log::warn!("no 2d context - celebration will not be drawn");
        }

        let card = Rc::new(RefCell::new(Card {
            state: CardState::new(),
            engine,
            renderer,
            celebration: None,
            rng: Pcg32::seed_from_u64(seed.wrapping_add(1)),
            tuning,
            zone,
            decline_btn,
            accept_btn,
            prompt,
            result,
        }));

        // Initial surface sizing before anything draws
        card.borrow_mut().resize_surface();

        setup_pointer_handler(card.clone());
        setup_button_handlers(card.clone());
        setup_resize_handlers(card.clone());

        // Start the frame loop
        request_animation_frame(card);

        log::info!("Pop the Question running!");
    }

    fn setup_pointer_handler(card: Rc<RefCell<Card>>) {
        let zone = card.borrow().zone.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
            card.borrow_mut()
                .handle_pointer_move(event.client_x() as f32, event.client_y() as f32);
        });
        let _ = zone.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_button_handlers(card: Rc<RefCell<Card>>) {
        // Accept - the only way forward
        {
            let card = card.clone();
            let accept_btn = card.borrow().accept_btn.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                card.borrow_mut().accept(now_ms());
            });
            let _ = accept_btn
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Decline - intercepted, produces no effect
        {
            let decline_btn = card.borrow().decline_btn.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                event.prevent_default();
                card.borrow().state.decline_rejected();
            });
            let _ = decline_btn
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize_handlers(card: Rc<RefCell<Card>>) {
        let window = web_sys::window().unwrap();

        // Window resize
        {
            let card = card.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                card.borrow_mut().resize_surface();
            });
            let _ = window
                .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Orientation change - let the viewport settle before resizing
        {
            let settle = Closure::<dyn FnMut()>::new(move || {
                card.borrow_mut().resize_surface();
            });
            let window_clone = window.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                let _ = window_clone.set_timeout_with_callback_and_timeout_and_arguments_0(
                    settle.as_ref().unchecked_ref(),
                    ORIENTATION_SETTLE_MS,
                );
            });
            let _ = window.add_event_listener_with_callback(
                "orientationchange",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }
    }

    fn request_animation_frame(card: Rc<RefCell<Card>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            frame_loop(card, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(card: Rc<RefCell<Card>>, time: f64) {
        card.borrow_mut().frame(time);
        request_animation_frame(card);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_card::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Pop the Question (native) starting...");
    log::info!("This card is web-only - run with `trunk serve`");

    println!("\nRunning evasion smoke test...");
    smoke_test_evade();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn smoke_test_evade() {
    use glam::Vec2;
    use pop_the_question::sim::{Rect, evade_step};

    let zone = Rect::new(0.0, 0.0, 400.0, 300.0);
    let button = Rect::new(100.0, 100.0, 40.0, 30.0);

    let moved = evade_step(Vec2::new(90.0, 75.0), &zone, &button);
    assert!(moved.is_some(), "close pointer should displace the button");
    println!("✓ Evasion smoke test passed!");
}
