//! Catalogue core: pure catalogue index, selector and carousel state machines.
mod carousel;
mod catalogue;
mod effect;
mod msg;
mod record;
mod resolve;
mod route;
mod selector;
mod state;
mod update;
mod view_model;

pub use carousel::{Carousel, CarouselError, CarouselFrame, CarouselInput, CarouselState, FadeClass};
pub use catalogue::{build_index, category_slug, display_title, CatalogEntry, Catalogue, UNKNOWN_CATEGORY};
pub use effect::Effect;
pub use msg::Msg;
pub use record::{ProductRecord, YearToken};
pub use resolve::{
    resolve, resolve_content, ContentFallback, ContentStatus, Resolution, ResolvedContent,
    SelectionTuple, NO_DESCRIPTION,
};
pub use route::{normalize_pathname, Route};
pub use selector::{SelectorOutcome, SelectorState};
pub use state::{Context, SessionRegistry, VisitorSession};
pub use update::update;
pub use view_model::{
    nav_links, CategoryTile, CategoryView, HomeView, LevelView, NavLinkView, PageBody, PageView,
};
