use std::collections::HashSet;
use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::Context as _;
use catalogue_core::{Carousel, ContentFallback, Context, Effect, Msg, SessionRegistry};
use catalogue_engine::{CatalogueStore, CsvFileSource};
use catalogue_logging::{catalogue_debug, catalogue_info, catalogue_warn};

use super::config::{self, AppSettings};
use super::ui::commands::{parse_command, Command, HELP};
use super::ui::render::render;

const DEFAULT_VISITOR: &str = "web";

enum AppEvent {
    Line(String),
    InputClosed,
    CarouselTick,
}

pub fn run_app() -> anyhow::Result<()> {
    let settings = config::load_settings();
    catalogue_logging::initialize(
        &settings.log_destination(),
        catalogue_logging::parse_level(&settings.log_level),
    );

    let source = CsvFileSource::new(&settings.catalogue_source);
    let store = CatalogueStore::load(&source);
    let carousel = build_carousel(&settings)?;

    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();

    let input_tx = event_tx.clone();
    thread::Builder::new()
        .name("stdin".into())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                if input_tx.send(AppEvent::Line(line)).is_err() {
                    return;
                }
            }
            let _ = input_tx.send(AppEvent::InputClosed);
        })
        .context("spawning stdin reader")?;

    // Single autoplay clock; each tick is delivered to visitors whose timer runs.
    let interval = settings.carousel_interval();
    thread::Builder::new()
        .name("carousel-timer".into())
        .spawn(move || run_timer(interval, event_tx))
        .context("spawning carousel timer")?;

    let mut app = App {
        store,
        source,
        carousel,
        fallback: settings.fallback(),
        registry: SessionRegistry::new(),
        timers: HashSet::new(),
        active: DEFAULT_VISITOR.to_string(),
    };
    println!("{HELP}");
    app.dispatch(DEFAULT_VISITOR, Msg::Navigated("/".into()));
    app.render_active(true);

    while let Ok(event) = event_rx.recv() {
        match event {
            AppEvent::Line(line) => {
                if !app.handle_line(&line) {
                    break;
                }
            }
            AppEvent::CarouselTick => app.tick(),
            AppEvent::InputClosed => break,
        }
    }
    catalogue_info!("Catalogue front end shutting down");
    Ok(())
}

fn run_timer(interval: Duration, tx: mpsc::Sender<AppEvent>) {
    loop {
        thread::sleep(interval);
        if tx.send(AppEvent::CarouselTick).is_err() {
            break;
        }
    }
}

fn build_carousel(settings: &AppSettings) -> anyhow::Result<Carousel> {
    let images = if settings.carousel_images.is_empty() {
        catalogue_warn!("No carousel images configured; using the default images");
        AppSettings::default().carousel_images
    } else {
        settings.carousel_images.clone()
    };
    Carousel::new(images).context("building carousel")
}

struct App {
    store: CatalogueStore,
    source: CsvFileSource,
    carousel: Carousel,
    fallback: ContentFallback,
    registry: SessionRegistry,
    /// Visitors whose home-view autoplay timer is running.
    timers: HashSet<String>,
    active: String,
}

impl App {
    /// Returns `false` when the operator asked to quit.
    fn handle_line(&mut self, line: &str) -> bool {
        let command = match parse_command(line) {
            Ok(Some(command)) => command,
            Ok(None) => return true,
            Err(err) => {
                println!("{err}");
                return true;
            }
        };
        match command {
            Command::Dispatch(msg) => {
                let visitor = self.active.clone();
                self.dispatch(&visitor, msg);
                self.render_active(false);
            }
            Command::SwitchVisitor(visitor) => {
                let is_new = self.registry.session(&visitor).is_none();
                self.active = visitor.clone();
                if is_new {
                    self.dispatch(&visitor, Msg::Navigated("/".into()));
                }
                self.render_active(true);
            }
            Command::Reload => self.reload(),
            Command::Show => self.render_active(true),
            Command::Help => println!("{HELP}"),
            Command::Quit => return false,
        }
        true
    }

    fn dispatch(&mut self, visitor: &str, msg: Msg) {
        let catalogue = self.store.snapshot();
        let ctx = Context {
            catalogue: &catalogue,
            carousel: &self.carousel,
            fallback: &self.fallback,
        };
        let effects = self.registry.dispatch(visitor, &ctx, msg);
        self.apply_effects(visitor, &effects);
    }

    fn apply_effects(&mut self, visitor: &str, effects: &[Effect]) {
        for effect in effects {
            match effect {
                Effect::StartCarouselTimer => {
                    catalogue_debug!("Carousel timer started for {visitor}");
                    self.timers.insert(visitor.to_string());
                }
                Effect::StopCarouselTimer => {
                    catalogue_debug!("Carousel timer stopped for {visitor}");
                    self.timers.remove(visitor);
                }
            }
        }
    }

    fn tick(&mut self) {
        let mut visitors: Vec<String> = self.timers.iter().cloned().collect();
        visitors.sort();
        for visitor in visitors {
            self.dispatch(&visitor, Msg::CarouselTick);
        }
        self.render_active(false);
    }

    fn reload(&mut self) {
        let catalogue = match self.store.reload(&self.source) {
            Ok(catalogue) => catalogue,
            Err(err) => {
                println!("reload failed, keeping the current catalogue: {err}");
                return;
            }
        };
        let ctx = Context {
            catalogue: &catalogue,
            carousel: &self.carousel,
            fallback: &self.fallback,
        };
        let results = self.registry.broadcast(&ctx, Msg::CatalogueReloaded);
        for (visitor, effects) in results {
            self.apply_effects(&visitor, &effects);
        }
        println!(
            "reloaded {} records in {} categories",
            catalogue.records().len(),
            catalogue.entries().len()
        );
        self.render_active(false);
    }

    /// Prints the active visitor's page if it changed (or always, with `force`).
    fn render_active(&mut self, force: bool) {
        let Some(session) = self.registry.session_mut(&self.active) else {
            return;
        };
        let dirty = session.consume_dirty();
        if !(dirty || force) {
            return;
        }
        let catalogue = self.store.snapshot();
        let ctx = Context {
            catalogue: &catalogue,
            carousel: &self.carousel,
            fallback: &self.fallback,
        };
        let view = session.view(&ctx);
        for line in render(&self.active, &view) {
            println!("{line}");
        }
    }
}
