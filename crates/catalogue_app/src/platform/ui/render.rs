use catalogue_core::{
    CategoryView, ContentStatus, HomeView, LevelView, NavLinkView, PageBody, PageView,
};

/// Turns a page view into printable lines.
pub fn render(visitor: &str, view: &PageView) -> Vec<String> {
    let mut lines = vec![format!("== Product Catalogue [{visitor}] ==")];
    lines.push(render_nav(&view.nav));
    match &view.body {
        PageBody::Home(home) => render_home(home, &mut lines),
        PageBody::Category(category) => render_category(category, &mut lines),
    }
    lines
}

fn render_nav(nav: &[NavLinkView]) -> String {
    nav.iter()
        .map(|link| {
            if link.active {
                format!("[*{}*]", link.title)
            } else {
                format!("[{}]", link.title)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_home(home: &HomeView, lines: &mut Vec<String>) {
    let frame = &home.carousel;
    lines.push(format!(
        "carousel {} ({}, image {})",
        frame.image_url,
        frame.fade_class.as_str(),
        frame.index + 1
    ));
    if home.tiles.is_empty() {
        lines.push("(no categories available)".into());
    }
    for tile in &home.tiles {
        lines.push(format!("  {} -> {} {}", tile.title, tile.link, tile.image_url));
    }
}

fn render_category(category: &CategoryView, lines: &mut Vec<String>) {
    lines.push(category.heading.clone());
    lines.push(render_level("Sector", &category.sector));
    lines.push(render_level("Year", &category.year));
    lines.push(render_level("Product Title", &category.title));
    let marker = match category.content.status {
        ContentStatus::Resolved => "content",
        ContentStatus::Incomplete => "placeholder",
    };
    lines.push(format!("{marker}: {}", category.content.url));
    lines.push(format!("about: {}", category.content.description));
}

fn render_level(label: &str, level: &LevelView) -> String {
    if !level.enabled {
        return format!("{label}: (disabled)");
    }
    let options = level
        .options
        .iter()
        .map(|option| {
            if level.selected.as_ref() == Some(option) {
                format!("<{option}>")
            } else {
                option.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" | ");
    format!("{label}: {options}")
}
