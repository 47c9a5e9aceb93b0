use dioxus::prelude::*;
use crate::content::DecoratedPost;
use crate::routes::Route;

/// Card shapes used on the posts page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CardLayout {
    /// Tall card, image on top, spanning two rows.
    Featured,
    /// Image left, text right, half width.
    Side,
    /// Image left, text right, full width.
    Wide,
    /// Uniform card in the "All blog posts" grid.
    Grid,
}

impl CardLayout {
    pub fn for_recent_slot(slot: usize) -> Self {
        match slot {
            0 => Self::Featured,
            1 | 2 => Self::Side,
            _ => Self::Wide,
        }
    }

    /// Grid placement of a recent card on `md` screens and up.
    pub fn recent_placement(slot: usize) -> &'static str {
        match slot {
            0 => "md:col-span-2 md:row-span-2 md:col-start-1 md:row-start-1",
            1 => "md:col-span-2 md:row-span-1 md:col-start-3 md:row-start-1",
            2 => "md:col-span-2 md:row-span-1 md:col-start-3 md:row-start-2",
            3 => "md:col-span-4 md:row-span-1 md:col-start-1 md:row-start-3",
            _ => "md:col-span-4 md:row-span-1 md:col-start-1",
        }
    }

    pub fn teaser_chars(self) -> usize {
        match self {
            Self::Featured => 100,
            Self::Side | Self::Wide => 60,
            Self::Grid => 80,
        }
    }

    fn frame_class(self) -> &'static str {
        match self {
            Self::Featured => "bg-white dark:bg-gray-900 rounded-xl shadow hover:shadow-lg transition-shadow overflow-hidden flex flex-col h-full min-h-[280px] border border-gray-100 dark:border-gray-800",
            Self::Side | Self::Wide => "bg-white dark:bg-gray-900 rounded-xl shadow hover:shadow-lg transition-shadow overflow-hidden flex flex-col md:flex-row h-full min-h-[90px] border border-gray-100 dark:border-gray-800",
            Self::Grid => "bg-white dark:bg-gray-900 rounded-xl shadow hover:shadow-lg transition-shadow overflow-hidden flex flex-col h-full border border-gray-100 dark:border-gray-800",
        }
    }

    fn image_class(self) -> &'static str {
        match self {
            Self::Featured => "flex-1 min-h-[120px] bg-gray-200 dark:bg-gray-800 flex items-center justify-center",
            Self::Side => "w-full md:w-1/2 h-20 md:h-auto bg-gray-200 dark:bg-gray-800 flex items-center justify-center",
            Self::Wide => "w-full md:w-1/2 h-32 md:h-auto bg-gray-200 dark:bg-gray-800 flex items-center justify-center",
            Self::Grid => "h-40 w-full bg-gray-200 dark:bg-gray-800 flex items-center justify-center",
        }
    }

    fn body_class(self) -> &'static str {
        match self {
            Self::Featured => "flex-1 p-6 flex flex-col",
            Self::Side | Self::Wide => "p-4 flex flex-col flex-1 w-full md:w-1/2",
            Self::Grid => "p-5 flex flex-col flex-1",
        }
    }

    fn title_class(self) -> &'static str {
        match self {
            Self::Featured => "text-2xl font-bold mb-2 flex-1",
            Self::Side | Self::Wide => "text-base font-bold mb-1",
            Self::Grid => "text-lg font-bold mb-2 flex-1",
        }
    }

    fn teaser_class(self) -> &'static str {
        match self {
            Self::Featured => "text-gray-600 dark:text-gray-300 mb-3 text-base",
            Self::Side | Self::Wide => "text-gray-600 dark:text-gray-300 mb-2 text-xs",
            Self::Grid => "text-gray-600 dark:text-gray-300 mb-3 text-sm",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TagTone {
    Pink,
    Accent,
}

impl TagTone {
    /// Article pages highlight "Design" tags.
    pub fn for_article(tag: &str) -> Self {
        if tag == "Design" { Self::Accent } else { Self::Pink }
    }

    fn class(self) -> &'static str {
        match self {
            Self::Pink => "px-3 py-1 rounded-full text-xs font-medium bg-[#FDF2FA] text-[#C11574]",
            Self::Accent => "px-3 py-1 rounded-full text-xs font-medium bg-[#F9F5FF] text-[#6941C6]",
        }
    }
}

#[component]
pub fn TagPill(tag: &'static str, tone: TagTone) -> Element {
    rsx! {
        span { class: tone.class(), "{tag}" }
    }
}

#[component]
pub fn PostCard(
    entry: DecoratedPost,
    layout: CardLayout,
    #[props(default)] placement: &'static str
) -> Element {
    let post = &entry.post;
    let decoration = &entry.decoration;
    let teaser = post.teaser(layout.teaser_chars());

    rsx! {
        Link {
            class: "{placement}",
            to: Route::PostDetail { id: post.id.to_string() },
            div {
                class: layout.frame_class(),
                div {
                    class: layout.image_class(),
                    img { src: decoration.image, alt: "Post image", class: "object-cover w-full h-full" }
                }
                div {
                    class: layout.body_class(),
                    div { class: "text-xs text-purple-700 font-semibold mb-1", "{decoration.byline()}" }
                    h3 { class: layout.title_class(), "{post.title}" }
                    p { class: layout.teaser_class(), "{teaser}" }
                    div {
                        class: "flex flex-wrap gap-2 mt-auto",
                        for tag in decoration.tags.iter().copied() {
                            TagPill { key: "{tag}", tag: tag, tone: TagTone::Pink }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recent_slots_map_to_layouts() {
        let layouts: Vec<CardLayout> = (0..5).map(CardLayout::for_recent_slot).collect();
        assert_eq!(
            layouts,
            vec![CardLayout::Featured, CardLayout::Side, CardLayout::Side, CardLayout::Wide, CardLayout::Wide]
        );
    }

    #[test]
    fn teaser_lengths() {
        assert_eq!(CardLayout::Featured.teaser_chars(), 100);
        assert_eq!(CardLayout::Side.teaser_chars(), 60);
        assert_eq!(CardLayout::Grid.teaser_chars(), 80);
    }

    #[test]
    fn design_tags_are_accented_on_articles() {
        assert_eq!(TagTone::for_article("Design"), TagTone::Accent);
        assert_eq!(TagTone::for_article("Research"), TagTone::Pink);
    }
}
