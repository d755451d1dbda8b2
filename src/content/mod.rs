//! Site content data: author profiles, post cards and translated pages.

mod page;
mod person;
mod post_card;

pub use page::{page_locale, select_translated_page, TranslatedPage};
pub use person::{
    count_words, AuthorStats, PersonInfo, PersonKind, PersonSource, ProfileImgMeta,
    RawPersonInfo, Socials,
};
pub use post_card::{AuthorLink, PostCard, PostSummary};
