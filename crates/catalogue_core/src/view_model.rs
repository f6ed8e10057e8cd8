use crate::{
    normalize_pathname, resolve_content, CarouselFrame, CarouselState, Catalogue, Context,
    ResolvedContent, SelectorState,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub nav: Vec<NavLinkView>,
    pub body: PageBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageBody {
    Home(HomeView),
    Category(CategoryView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLinkView {
    pub title: String,
    pub link: String,
    pub active: bool,
}

/// Home link followed by one link per category, in index order.
pub fn nav_links(catalogue: &Catalogue, pathname: &str) -> Vec<NavLinkView> {
    let current = normalize_pathname(pathname);
    let mut links = Vec::with_capacity(catalogue.entries().len() + 1);
    links.push(NavLinkView {
        title: "Home".to_string(),
        link: "/".to_string(),
        active: current.is_empty(),
    });
    links.extend(catalogue.entries().iter().map(|entry| NavLinkView {
        title: entry.display_title.clone(),
        link: entry.link.clone(),
        active: current == entry.slug,
    }));
    links
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTile {
    pub title: String,
    pub image_url: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeView {
    pub tiles: Vec<CategoryTile>,
    pub carousel: CarouselFrame,
}

impl HomeView {
    pub(crate) fn build(ctx: &Context<'_>, carousel: CarouselState) -> Self {
        let tiles = ctx
            .catalogue
            .entries()
            .iter()
            .map(|entry| CategoryTile {
                title: entry.display_title.clone(),
                image_url: entry.representative_image.clone(),
                link: entry.link.clone(),
            })
            .collect();
        Self {
            tiles,
            carousel: ctx.carousel.frame(carousel),
        }
    }
}

/// One selector control as the page shows it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LevelView {
    pub options: Vec<String>,
    pub selected: Option<String>,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryView {
    pub heading: String,
    pub sector: LevelView,
    pub year: LevelView,
    pub title: LevelView,
    pub content: ResolvedContent,
}

impl CategoryView {
    pub(crate) fn build(ctx: &Context<'_>, selector: &SelectorState) -> Self {
        Self {
            heading: selector.category().unwrap_or_default().to_string(),
            sector: LevelView {
                options: selector.sector_options().to_vec(),
                selected: selector.sector().map(str::to_string),
                enabled: selector.sector_enabled(),
            },
            year: LevelView {
                options: selector
                    .year_options()
                    .iter()
                    .map(ToString::to_string)
                    .collect(),
                selected: selector.year().map(ToString::to_string),
                enabled: selector.year_enabled(),
            },
            title: LevelView {
                options: selector.title_options().to_vec(),
                selected: selector.title().map(str::to_string),
                enabled: selector.title_enabled(),
            },
            content: resolve_content(ctx.catalogue.records(), selector.selection(), ctx.fallback),
        }
    }
}
