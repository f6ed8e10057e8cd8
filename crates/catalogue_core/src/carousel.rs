use catalogue_logging::catalogue_error;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CarouselError {
    #[error("carousel needs at least one image")]
    Empty,
}

/// The fixed, non-empty image set the home view rotates through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    images: Vec<String>,
}

impl Carousel {
    pub fn new(images: Vec<String>) -> Result<Self, CarouselError> {
        if images.is_empty() {
            return Err(CarouselError::Empty);
        }
        Ok(Self { images })
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// What the home view shows for `state`.
    pub fn frame(&self, state: CarouselState) -> CarouselFrame {
        let index = state.checked_index(self.len());
        CarouselFrame {
            image_url: self.images[index].clone(),
            fade_class: FadeClass::for_parity(state.fade_parity),
            index,
            fade_parity: state.fade_parity,
        }
    }
}

/// The two alternating transition classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeClass {
    Fade,
    FadeAlt,
}

impl FadeClass {
    fn for_parity(fade_parity: bool) -> Self {
        if fade_parity {
            FadeClass::Fade
        } else {
            FadeClass::FadeAlt
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FadeClass::Fade => "carousel-image fade",
            FadeClass::FadeAlt => "carousel-image fade-alt",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselInput {
    /// The home view was rendered without any trigger.
    InitialRender,
    /// Autoplay timer fired.
    Tick,
    Next,
    Prev,
}

/// Per-visitor carousel position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CarouselState {
    index: usize,
    fade_parity: bool,
}

impl CarouselState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn fade_parity(&self) -> bool {
        self.fade_parity
    }

    /// Applies one input for an image set of size `len` (at least 1).
    ///
    /// Every input flips the fade parity, including `InitialRender`, which
    /// keeps the index in place.
    pub fn apply(self, input: CarouselInput, len: usize) -> Self {
        let len = len.max(1);
        let index = self.checked_index(len);
        let index = match input {
            CarouselInput::InitialRender => index,
            CarouselInput::Tick | CarouselInput::Next => (index + 1) % len,
            CarouselInput::Prev => (index + len - 1) % len,
        };
        Self {
            index,
            fade_parity: !self.fade_parity,
        }
    }

    /// The stored index, or 0 after logging if it no longer fits the image set.
    fn checked_index(&self, len: usize) -> usize {
        if self.index < len {
            self.index
        } else {
            catalogue_error!(
                "Carousel index {} out of range for {} images; resetting to 0",
                self.index,
                len
            );
            0
        }
    }
}

/// Everything the home view needs after a carousel transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselFrame {
    pub image_url: String,
    pub fade_class: FadeClass,
    pub index: usize,
    pub fade_parity: bool,
}
