#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Browser location changed (raw pathname).
    Navigated(String),
    /// Sector control changed; `None` when cleared.
    SectorSelected(Option<String>),
    /// Year control changed; raw value as shown in the control.
    YearSelected(Option<String>),
    /// Title control changed.
    TitleSelected(Option<String>),
    /// Autoplay timer fired.
    CarouselTick,
    CarouselNext,
    CarouselPrev,
    /// The shared catalogue was replaced; revalidate this session against it.
    CatalogueReloaded,
}
