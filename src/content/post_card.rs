//! View model for a post card in a post list.
//!
//! Everything the list item needs is resolved here (links, byline, date,
//! excerpt) so the template only has to lay it out.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::content::PersonInfo;
use crate::error::{Error, Result};
use crate::i18n::{localize_path, Locale};

/// The front matter a post card is built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSummary {
    pub title: String,
    /// URL slug with a leading slash, e.g. "/my-post"
    pub slug: String,
    pub published: NaiveDate,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Excerpt generated from the post body
    pub excerpt: String,
    /// Hand-written description; preferred over the excerpt
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorLink {
    pub id: String,
    pub name: String,
    pub href: String,
    pub profile_img: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostCard {
    pub title: String,
    pub href: String,
    pub authors: Vec<AuthorLink>,
    pub published: NaiveDate,
    pub tags: Vec<String>,
    pub summary_html: String,
}

impl PostCard {
    /// Build the card for `post` as shown on a `locale` page.
    ///
    /// Fails when the post lists no authors, since the byline needs one.
    pub fn new(post: &PostSummary, authors: &[PersonInfo], locale: Locale) -> Result<Self> {
        if authors.is_empty() {
            return Err(Error::PostWithoutAuthors {
                slug: post.slug.clone(),
            });
        }

        let authors = authors
            .iter()
            .map(|author| AuthorLink {
                id: author.id.clone(),
                name: author.name.clone(),
                href: localize_path(&format!("/unicorns/{}", author.id), locale),
                profile_img: author.profile_img_meta.relative_server_path.clone(),
            })
            .collect();

        let summary_html = post
            .description
            .as_deref()
            .filter(|description| !description.is_empty())
            .unwrap_or(&post.excerpt)
            .to_string();

        Ok(Self {
            title: post.title.clone(),
            href: localize_path(&format!("/posts{}", post.slug), locale),
            authors,
            published: post.published,
            tags: post.tags.clone(),
            summary_html,
        })
    }

    /// Author names separated by commas: "Ada, Grace, Linus".
    pub fn byline(&self) -> String {
        self.authors
            .iter()
            .map(|author| author.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Publication date as shown on the card, e.g. "January 5, 2024".
    pub fn published_display(&self) -> String {
        self.published.format("%B %-d, %Y").to_string()
    }
}
