use std::collections::HashMap;

use catalogue_logging::{catalogue_debug, catalogue_error};

use crate::view_model::{nav_links, CategoryView, HomeView, PageBody, PageView};
use crate::{
    update, Carousel, CarouselInput, CarouselState, Catalogue, ContentFallback, Effect, Msg, Route,
    SelectorOutcome, SelectorState, YearToken,
};

/// Read-only, shared inputs to every session transition.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    pub catalogue: &'a Catalogue,
    pub carousel: &'a Carousel,
    pub fallback: &'a ContentFallback,
}

/// Everything one visitor has selected; never shared between visitors.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VisitorSession {
    pathname: String,
    /// `None` until the first navigation.
    route: Option<Route>,
    selector: SelectorState,
    carousel: CarouselState,
    dirty: bool,
}

impl VisitorSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pathname(&self) -> &str {
        &self.pathname
    }

    pub fn route(&self) -> Option<&Route> {
        self.route.as_ref()
    }

    pub fn selector(&self) -> &SelectorState {
        &self.selector
    }

    pub fn carousel(&self) -> CarouselState {
        self.carousel
    }

    /// Returns whether anything visible changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn view(&self, ctx: &Context<'_>) -> PageView {
        let nav = nav_links(ctx.catalogue, &self.pathname);
        let body = match &self.route {
            Some(Route::Category(slug)) => self.category_body(ctx, slug),
            Some(Route::Home) | None => PageBody::Home(HomeView::build(ctx, self.carousel)),
        };
        PageView { nav, body }
    }

    fn category_body(&self, ctx: &Context<'_>, slug: &str) -> PageBody {
        let consistent = ctx.catalogue.entry(slug).is_some()
            && self.selector.category_slug() == Some(slug);
        if consistent {
            PageBody::Category(CategoryView::build(ctx, &self.selector))
        } else {
            catalogue_error!(
                "Session routed to category {slug:?} that the catalogue or selector does not know; showing home"
            );
            PageBody::Home(HomeView::build(ctx, self.carousel))
        }
    }

    pub(crate) fn navigate(&mut self, ctx: &Context<'_>, pathname: &str) -> Vec<Effect> {
        let route = Route::from_pathname(pathname, ctx.catalogue);
        catalogue_debug!("Navigated to {pathname:?} -> {route:?}");
        self.pathname = pathname.to_string();
        self.show(ctx, route)
    }

    pub(crate) fn select_sector(&mut self, ctx: &Context<'_>, sector: Option<&str>) {
        let outcome = self.selector.set_sector(ctx.catalogue, sector);
        self.mark_if_applied(outcome);
    }

    pub(crate) fn select_year(&mut self, ctx: &Context<'_>, raw_year: Option<&str>) {
        let year = raw_year.map(YearToken::parse);
        let outcome = self.selector.set_year(ctx.catalogue, year.as_ref());
        self.mark_if_applied(outcome);
    }

    pub(crate) fn select_title(&mut self, title: Option<&str>) {
        let outcome = self.selector.set_title(title);
        self.mark_if_applied(outcome);
    }

    /// Ignored unless the home view is showing.
    pub(crate) fn carousel_input(&mut self, ctx: &Context<'_>, input: CarouselInput) {
        if !self.on_home() {
            catalogue_debug!("Ignoring carousel {input:?} outside the home view");
            return;
        }
        self.carousel = self.carousel.apply(input, ctx.carousel.len());
        self.dirty = true;
    }

    /// Re-checks the current page against a freshly swapped catalogue.
    pub(crate) fn revalidate(&mut self, ctx: &Context<'_>) -> Vec<Effect> {
        match self.route.clone() {
            None => Vec::new(),
            Some(Route::Home) => {
                self.dirty = true;
                Vec::new()
            }
            Some(Route::Category(slug)) => {
                if ctx.catalogue.entry(&slug).is_some() {
                    self.selector.enter_category(ctx.catalogue, &slug);
                    self.dirty = true;
                    Vec::new()
                } else {
                    catalogue_error!("Category {slug:?} vanished on reload; falling back to home");
                    self.show(ctx, Route::Home)
                }
            }
        }
    }

    fn show(&mut self, ctx: &Context<'_>, route: Route) -> Vec<Effect> {
        let was_home = self.on_home();
        let mut effects = Vec::new();
        match &route {
            // Re-navigating within home keeps the running carousel as it is.
            Route::Home if was_home => {}
            Route::Home => {
                self.selector = SelectorState::default();
                self.carousel = self
                    .carousel
                    .apply(CarouselInput::InitialRender, ctx.carousel.len());
                effects.push(Effect::StartCarouselTimer);
            }
            Route::Category(slug) => {
                if !self.selector.enter_category(ctx.catalogue, slug) {
                    catalogue_error!("Route names unknown category {slug:?}");
                }
                if was_home {
                    effects.push(Effect::StopCarouselTimer);
                }
            }
        }
        self.route = Some(route);
        self.dirty = true;
        effects
    }

    fn on_home(&self) -> bool {
        self.route.as_ref().is_some_and(Route::is_home)
    }

    fn mark_if_applied(&mut self, outcome: SelectorOutcome) {
        if outcome == SelectorOutcome::Applied {
            self.dirty = true;
        }
    }
}

/// Independent sessions keyed by visitor id.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: HashMap<String, VisitorSession>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `msg` through `visitor`'s session, creating the session on first use.
    pub fn dispatch(&mut self, visitor: &str, ctx: &Context<'_>, msg: Msg) -> Vec<Effect> {
        let session = self.sessions.entry(visitor.to_string()).or_default();
        let (next, effects) = update(std::mem::take(session), ctx, msg);
        *session = next;
        effects
    }

    /// Sends a copy of `msg` to every session, in visitor id order.
    pub fn broadcast(&mut self, ctx: &Context<'_>, msg: Msg) -> Vec<(String, Vec<Effect>)> {
        self.visitors()
            .into_iter()
            .map(|visitor| {
                let effects = self.dispatch(&visitor, ctx, msg.clone());
                (visitor, effects)
            })
            .collect()
    }

    pub fn session(&self, visitor: &str) -> Option<&VisitorSession> {
        self.sessions.get(visitor)
    }

    pub fn session_mut(&mut self, visitor: &str) -> Option<&mut VisitorSession> {
        self.sessions.get_mut(visitor)
    }

    /// Visitor ids, sorted.
    pub fn visitors(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.sessions.keys().cloned().collect();
        ids.sort();
        ids
    }
}
