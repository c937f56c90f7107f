use crate::models::{
    BoardPage, BoardView, CategorySection, CategoryView, ColorTriple, Highlight, PersonSection,
    PersonView, SectionLayout, TaggedPicker, ViewMode,
};

/// Escapes text for HTML element content and attribute values
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render_page(page: &BoardPage) -> String {
    let mode = page.view.mode();
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>Favourites</title>\n<link rel=\"stylesheet\" href=\"style.css\">\n");
    html.push_str("</head>\n<body>\n");

    html.push_str(&render_highlights(&page.highlights));
    html.push_str(&render_toggle(mode));

    html.push_str("<div id=\"main-feed\">\n");
    match &page.view {
        BoardView::Person(view) => html.push_str(&render_person_view(view)),
        BoardView::Category(view) => html.push_str(&render_category_view(view)),
    }
    html.push_str("</div>\n</body>\n</html>\n");

    html
}

fn render_toggle(mode: ViewMode) -> String {
    let button = |target: ViewMode, label: &str| {
        let class = if target == mode { "toggle-btn active" } else { "toggle-btn" };
        format!(
            "<a id=\"btn-{}\" class=\"{}\" href=\"/?mode={}\">{}</a>",
            target, class, target, label
        )
    };

    format!(
        "<div class=\"view-toggle\">{}{}</div>\n",
        button(ViewMode::Person, "By Person"),
        button(ViewMode::Category, "By Category")
    )
}

fn render_highlights(highlights: &[Highlight]) -> String {
    let mut out = String::from("<div id=\"highlight-cards\">\n");

    for h in highlights {
        let image = match &h.image {
            Some(path) => format!(
                "<img src=\"{}\" class=\"card-image\" alt=\"{}\">",
                escape(path),
                escape(&h.title)
            ),
            None => "<div class=\"card-image placeholder\">No Image</div>".to_string(),
        };

        out.push_str(&format!(
            "<div class=\"highlight-card\"><div class=\"card-image-container\">{}</div>\
             <div class=\"card-content\"><span class=\"title\">{}</span>\
             <div><span class=\"pill\" style=\"background:{}; color:{};\">{}</span></div></div></div>\n",
            image,
            escape(&h.title),
            h.badge.background,
            h.badge.text,
            escape(&h.category)
        ));
    }

    out.push_str("</div>\n");
    out
}

fn render_person_view(view: &PersonView) -> String {
    view.sections.iter().map(render_person_section).collect()
}

fn render_person_section(section: &PersonSection) -> String {
    let mut body = String::new();

    if !section.pills.is_empty() {
        body.push_str("<div class=\"pill-cloud\">");
        for pill in &section.pills {
            body.push_str(&format!(
                "<span class=\"simple-pill\" title=\"{}\" style=\"{}\"><span class=\"pill-icon\">{}</span> {}</span>",
                escape(&pill.category),
                pill_style(&pill.colors),
                pill.icon,
                escape(&pill.title)
            ));
        }
        body.push_str("</div>");
    }

    if !section.detailed.is_empty() {
        let border = if section.pills.is_empty() { "" } else { " border-top" };
        body.push_str(&format!("<div class=\"detailed-list{}\">", border));
        for entry in &section.detailed {
            body.push_str(&format!(
                "<div class=\"item-row detailed\"><div class=\"row-icon\">{}</div>\
                 <div class=\"row-content\"><div class=\"title\">{}</div><div class=\"note\">\"{}\"</div></div></div>",
                entry.icon,
                escape(&entry.title),
                escape(&entry.note)
            ));
        }
        body.push_str("</div>");
    }

    if !section.photos.is_empty() {
        body.push_str("<div class=\"photo-section\"><div class=\"photo-grid\">");
        for photo in &section.photos {
            let caption = photo
                .note
                .as_deref()
                .map(|note| format!("<div class=\"photo-caption\">{}</div>", escape(note)))
                .unwrap_or_default();
            body.push_str(&format!(
                "<div class=\"photo-card\"><div class=\"photo-frame\">{}</div>{}</div>",
                photo_visual(photo.image.as_deref(), &photo.title),
                caption
            ));
        }
        body.push_str("</div></div>");
    }

    format!(
        "<div class=\"friend-section\"><div class=\"friend-header\" style=\"background-color: {};\">{}</div>\
         <div class=\"friend-body\">{}</div></div>\n",
        escape(&section.color),
        escape(&section.name),
        body
    )
}

fn render_category_view(view: &CategoryView) -> String {
    view.sections.iter().map(render_category_section).collect()
}

fn render_category_section(section: &CategorySection) -> String {
    let content = match section.layout {
        SectionLayout::PhotoGrid => {
            let cards: String = section
                .entries
                .iter()
                .map(|entry| {
                    let notes: String = entry
                        .notes
                        .iter()
                        .map(|n| format!("<div>\"{}\"</div>", escape(&n.text)))
                        .collect();
                    let title = if entry.image.is_some() {
                        String::new()
                    } else {
                        format!("<div>{}</div>", escape(&entry.title))
                    };
                    format!(
                        "<div class=\"photo-card\"><div class=\"photo-frame\">{}</div>\
                         <div class=\"photo-caption\"><div>{}</div>{}{}</div></div>",
                        photo_visual(entry.image.as_deref(), &entry.title),
                        picker_tags(&entry.pickers),
                        notes,
                        title
                    )
                })
                .collect();
            format!("<div class=\"photo-section\"><div class=\"photo-grid\">{}</div></div>", cards)
        }
        SectionLayout::DetailedList => {
            let rows: String = section
                .entries
                .iter()
                .map(|entry| {
                    let notes: String = entry
                        .notes
                        .iter()
                        .map(|n| {
                            format!(
                                "<div class=\"note\"><strong>{}:</strong> \"{}\"</div>",
                                escape(&n.person),
                                escape(&n.text)
                            )
                        })
                        .collect();
                    let class = if entry.notes.is_empty() { "item-row" } else { "item-row detailed" };
                    format!(
                        "<div class=\"{}\"><div class=\"row-content\"><div class=\"title\">{} {}</div>{}</div></div>",
                        class,
                        escape(&entry.title),
                        picker_tags(&entry.pickers),
                        notes
                    )
                })
                .collect();
            format!("<div class=\"detailed-list\">{}</div>", rows)
        }
    };

    format!(
        "<div class=\"friend-section\"><div class=\"friend-header\" style=\"background-color: {}; color: #000;\">{} &nbsp; {}</div>\
         <div class=\"friend-body\">{}</div></div>\n",
        section.colors.background,
        section.icon,
        escape(&section.label),
        content
    )
}

fn picker_tags(pickers: &[TaggedPicker]) -> String {
    pickers
        .iter()
        .map(|p| {
            format!(
                "<span class=\"picker-tag\" style=\"background:{};\">{}</span>",
                escape(&p.color),
                escape(&p.name)
            )
        })
        .collect()
}

fn photo_visual(image: Option<&str>, title: &str) -> String {
    match image {
        Some(path) => {
            let path = escape(path);
            format!(
                "<a href=\"{path}\" target=\"_blank\" class=\"photo-link\">\
                 <img src=\"{path}\" alt=\"Photo\" class=\"photo-img\"></a>"
            )
        }
        None => format!(
            "<div class=\"photo-placeholder\"><span>{}</span></div>",
            escape(title)
        ),
    }
}

fn pill_style(colors: &ColorTriple) -> String {
    format!(
        "background-color: {}; color: {}; border-color: {};",
        colors.background, colors.text, colors.border
    )
}
