use crate::{CarouselInput, Context, Effect, Msg, VisitorSession};

/// Pure update function: applies a message to one visitor's session and
/// returns any effects.
pub fn update(mut state: VisitorSession, ctx: &Context<'_>, msg: Msg) -> (VisitorSession, Vec<Effect>) {
    let effects = match msg {
        Msg::Navigated(pathname) => state.navigate(ctx, &pathname),
        Msg::SectorSelected(sector) => {
            state.select_sector(ctx, sector.as_deref());
            Vec::new()
        }
        Msg::YearSelected(year) => {
            state.select_year(ctx, year.as_deref());
            Vec::new()
        }
        Msg::TitleSelected(title) => {
            state.select_title(title.as_deref());
            Vec::new()
        }
        Msg::CarouselTick => {
            state.carousel_input(ctx, CarouselInput::Tick);
            Vec::new()
        }
        Msg::CarouselNext => {
            state.carousel_input(ctx, CarouselInput::Next);
            Vec::new()
        }
        Msg::CarouselPrev => {
            state.carousel_input(ctx, CarouselInput::Prev);
            Vec::new()
        }
        Msg::CatalogueReloaded => state.revalidate(ctx),
    };

    (state, effects)
}
