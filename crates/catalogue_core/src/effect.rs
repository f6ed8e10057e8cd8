/// Side effects requested by a session transition; the front end executes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// The home view became visible: start the autoplay timer for this visitor.
    StartCarouselTimer,
    /// The home view was left: stop the autoplay timer.
    StopCarouselTimer,
}
