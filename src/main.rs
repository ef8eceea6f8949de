//! Hot Dog Derby entry point
//!
//! Handles platform-specific initialization and runs the redraw loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlCanvasElement, HtmlInputElement};

    use hotdog_derby::config::{self, SliderRange};
    use hotdog_derby::consts::BOBBY_RUN_TIME;
    use hotdog_derby::renderer::{field_scene, RenderState, RunnerMarker};
    use hotdog_derby::renderer::vertex::colors;
    use hotdog_derby::sim::{
        self, base_position, compute_progress, ControlInput, Matchup, Progress, RacePhase,
        RaceState, RacerConfig, RacerId,
    };

    /// App instance holding all state
    struct App {
        state: RaceState,
        /// Configs the current run was started with
        matchup: Matchup,
        /// Live slider values, committed to `matchup` on start
        pending: Matchup,
        render_state: Option<RenderState>,
        input: ControlInput,
    }

    impl App {
        fn new() -> Self {
            let matchup = config::default_matchup();
            Self {
                state: RaceState::new(),
                matchup,
                pending: matchup,
                render_state: None,
                input: ControlInput::default(),
            }
        }

        /// Consume pending input and advance the race to `now_ms`
        fn update(&mut self, now_ms: f64) {
            // Configs are immutable during a run: commit slider values only
            // when a fresh run starts
            if self.input.toggle_run && self.state.phase == RacePhase::NotStarted {
                self.matchup = self.pending;
            }
            if self.input.reset {
                self.matchup = self.pending;
            }

            let input = self.input;
            sim::update(&mut self.state, &self.matchup, &input, now_ms);

            // One-shot flags are consumed
            self.input = ControlInput::default();
        }

        /// Configs the HUD and field should reflect right now: the live
        /// slider values before a run starts, the committed ones during it
        fn effective_matchup(&self) -> &Matchup {
            if self.state.phase == RacePhase::NotStarted {
                &self.pending
            } else {
                &self.matchup
            }
        }

        fn progress(&self, id: RacerId) -> Progress {
            let cfg = self.effective_matchup().config(id);
            compute_progress(self.state.elapsed, cfg.eat_time, cfg.run_time)
        }

        /// Render the field with whichever runners are on the basepath
        fn render(&mut self) {
            let mut markers = Vec::with_capacity(2);
            for (id, color) in [(RacerId::Joey, colors::JOEY), (RacerId::Bobby, colors::BOBBY)] {
                let cfg = self.effective_matchup().config(id);
                let progress = self.progress(id);
                if self.state.elapsed > cfg.eat_time && progress.running > 0.0 {
                    markers.push(RunnerMarker {
                        pos: base_position(progress.running),
                        color,
                    });
                }
            }

            let scene = field_scene(&markers);
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&scene) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update HUD elements in the DOM
        fn update_hud(&self, document: &Document) {
            set_text(
                document,
                "race-time",
                &format!("Time: {:.1}s", self.state.elapsed),
            );

            // Start button doubles as pause/resume
            if let Some(btn) = document.get_element_by_id("start-btn") {
                let label = match self.state.phase {
                    RacePhase::NotStarted => "\u{25b6} Start",
                    RacePhase::Running => "\u{23f8} Pause",
                    RacePhase::Paused => "\u{25b6} Resume",
                    RacePhase::Finished => "\u{25b6} Start",
                };
                btn.set_text_content(Some(label));
                set_disabled(&btn, self.state.phase == RacePhase::Finished);
            }

            // Sliders lock while a run is in progress
            let lock = matches!(self.state.phase, RacePhase::Running | RacePhase::Paused);
            for id in ["joey-eat", "joey-run", "bobby-eat"] {
                if let Some(el) = document.get_element_by_id(id) {
                    set_disabled(&el, lock);
                }
            }

            self.update_eating_bar(document, RacerId::Joey, "joey-eat-bar", "joey-eat-caption");
            self.update_eating_bar(document, RacerId::Bobby, "bobby-eat-bar", "bobby-eat-caption");

            // Base-running percent line under the diamond
            let joey = self.base_percent(RacerId::Joey);
            let bobby = self.base_percent(RacerId::Bobby);
            set_text(
                document,
                "base-progress",
                &format!(
                    "Joey: {:.0}% around bases | Bobby: {:.0}% around bases",
                    joey, bobby
                ),
            );

            self.update_winner(document);

            // Hint before the first start
            set_hidden(
                document,
                "start-hint",
                !(self.state.phase == RacePhase::NotStarted && self.state.elapsed == 0.0),
            );
        }

        fn base_percent(&self, id: RacerId) -> f64 {
            let cfg = self.effective_matchup().config(id);
            if self.state.elapsed > cfg.eat_time {
                self.progress(id).running * 100.0
            } else {
                0.0
            }
        }

        fn update_eating_bar(&self, document: &Document, id: RacerId, bar: &str, caption: &str) {
            let cfg = self.effective_matchup().config(id);
            let progress = self.progress(id);

            if let Some(el) = document.get_element_by_id(bar) {
                let _ = el.set_attribute(
                    "style",
                    &format!("width: {:.1}%", progress.eating * 100.0),
                );
            }

            let text = if progress.eating >= 1.0 {
                format!("DONE! \u{1f32d} ({}s)", cfg.eat_time)
            } else {
                format!(
                    "{:.0}% - {:.1}s / {}s",
                    progress.eating * 100.0,
                    self.state.elapsed.min(cfg.eat_time),
                    cfg.eat_time
                )
            };
            set_text(document, caption, &text);
        }

        fn update_winner(&self, document: &Document) {
            let Some(winner) = self.state.winner else {
                set_hidden(document, "winner-banner", true);
                set_hidden(document, "analysis", true);
                return;
            };

            let cfg = self.matchup.config(winner);
            set_text(
                document,
                "winner-text",
                &format!("\u{1f3c6} {} Wins!", winner.display_name()),
            );
            set_text(
                document,
                "winner-breakdown",
                &format!(
                    "Total time: {:.1}s ({}s eating + {}s running)",
                    cfg.total(),
                    cfg.eat_time,
                    cfg.run_time
                ),
            );
            set_hidden(document, "winner-banner", false);

            let joey = self.matchup.joey;
            let bobby = self.matchup.bobby;
            set_text(
                document,
                "joey-analysis",
                &format!(
                    "Joey dominates the hot dog phase ({}s) but struggles on the bases ({}s). \
                     Total time: {:.1}s",
                    joey.eat_time,
                    joey.run_time,
                    joey.total()
                ),
            );
            set_text(
                document,
                "bobby-analysis",
                &format!(
                    "Bobby takes his time with the hot dog ({}s) but flies around the bases \
                     ({}s - his fastest recorded time). Total time: {:.1}s",
                    bobby.eat_time,
                    bobby.run_time,
                    bobby.total()
                ),
            );
            let verdict = if joey.total() < bobby.total() {
                format!(
                    "The Real Battle: Joey wins by {:.1} seconds! His hot dog mastery creates \
                     an insurmountable lead despite Bobby's base running advantage.",
                    bobby.total() - joey.total()
                )
            } else {
                format!(
                    "The Real Battle: Bobby wins by {:.1} seconds! Even with Joey's hot dog \
                     dominance, Bobby's elite speed and more reasonable eating pace wins out.",
                    joey.total() - bobby.total()
                )
            };
            set_text(document, "verdict", &verdict);
            set_hidden(document, "analysis", false);
        }
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn set_hidden(document: &Document, id: &str, hidden: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            let _ = el.set_attribute("class", if hidden { "hidden" } else { "" });
        }
    }

    fn set_disabled(el: &Element, disabled: bool) {
        if disabled {
            let _ = el.set_attribute("disabled", "");
        } else {
            let _ = el.remove_attribute("disabled");
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Hot Dog Derby starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let app = Rc::new(RefCell::new(App::new()));

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height).await;
        app.borrow_mut().render_state = Some(render_state);

        setup_sliders(&document, app.clone());
        setup_buttons(&document, app.clone());

        request_animation_frame(app);

        log::info!("Hot Dog Derby running!");
    }

    /// Wire a slider: apply its range, show its value, track edits
    fn setup_slider(
        document: &Document,
        app: Rc<RefCell<App>>,
        id: &str,
        range: SliderRange,
        apply: fn(&mut Matchup, f64),
    ) {
        let Some(el) = document.get_element_by_id(id) else {
            log::warn!("Missing slider #{id}");
            return;
        };
        let Ok(slider) = el.dyn_into::<HtmlInputElement>() else {
            log::warn!("#{id} is not an input");
            return;
        };

        let _ = slider.set_attribute("min", &range.min.to_string());
        let _ = slider.set_attribute("max", &range.max.to_string());
        let _ = slider.set_attribute("step", &range.step.to_string());
        slider.set_value(&range.default.to_string());

        let label_id = format!("{id}-value");
        set_text(document, &label_id, &format!("{}s", range.default));

        let slider_clone = slider.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let value = range.clamp(slider_clone.value().parse().unwrap_or(range.default));
            apply(&mut app.borrow_mut().pending, value);

            let document = web_sys::window().unwrap().document().unwrap();
            set_text(&document, &label_id, &format!("{value}s"));
        });
        let _ = slider.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_sliders(document: &Document, app: Rc<RefCell<App>>) {
        setup_slider(document, app.clone(), "joey-eat", config::JOEY_EAT, |m, v| {
            m.joey.eat_time = v;
        });
        setup_slider(document, app.clone(), "joey-run", config::JOEY_RUN, |m, v| {
            m.joey.run_time = v;
        });
        setup_slider(document, app, "bobby-eat", config::BOBBY_EAT, |m, v| {
            m.bobby = RacerConfig::new(v, BOBBY_RUN_TIME);
        });
    }

    fn setup_buttons(document: &Document, app: Rc<RefCell<App>>) {
        if let Some(btn) = document.get_element_by_id("start-btn") {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                app.borrow_mut().input.toggle_run = true;
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = document.get_element_by_id("reset-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                app.borrow_mut().input.reset = true;
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            frame(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame(app: Rc<RefCell<App>>) {
        {
            let mut a = app.borrow_mut();

            // Elapsed time always derives from the wall clock captured at
            // start, never from accumulated frame deltas
            let now_ms = js_sys::Date::now();
            a.update(now_ms);
            a.render();

            let document = web_sys::window().unwrap().document().unwrap();
            a.update_hud(&document);
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_app::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Hot Dog Derby (native) starting...");
    log::info!("The page requires a browser - run with `trunk serve` for the web version");

    // Headless projection of the default matchup
    println!("\nProjecting default matchup...");
    project_default_matchup();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn project_default_matchup() {
    use hotdog_derby::config::default_matchup;
    use hotdog_derby::sim::{compute_progress, RacerId};

    let matchup = default_matchup();
    let decided_at = matchup.joey.total().max(matchup.bobby.total());

    let joey = compute_progress(decided_at, matchup.joey.eat_time, matchup.joey.run_time);
    let bobby = compute_progress(decided_at, matchup.bobby.eat_time, matchup.bobby.run_time);
    assert!(joey.is_finished() && bobby.is_finished());

    let winner = if matchup.joey.total() < matchup.bobby.total() {
        RacerId::Joey
    } else {
        RacerId::Bobby
    };
    println!(
        "Joey: {:.1}s total, Bobby: {:.1}s total -> {} wins",
        matchup.joey.total(),
        matchup.bobby.total(),
        winner.display_name()
    );
}
