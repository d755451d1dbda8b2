//! Author profiles.
//!
//! `RawPersonInfo` is what an author writes in their content file.
//! `PersonInfo` is the complete record the site renders from: every
//! optional field filled in, plus locale information, post statistics and
//! profile image metadata gathered at build time.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::i18n::Locale;

/// Social profile handles or URLs. Every network is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Socials {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gitlab: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(rename = "linkedIn", skip_serializing_if = "Option::is_none")]
    pub linked_in: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dribbble: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mastodon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threads: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cohost: Option<String>,
}

/// Author profile as written in the content file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPersonInfo {
    pub name: String,
    pub first_name: String,
    pub last_name: String,
    pub description: String,
    #[serde(default)]
    pub socials: Socials,
    #[serde(default)]
    pub pronouns: Option<String>,
    /// Profile image path, relative to the author's content file
    pub profile_img: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub roles: Option<Vec<String>>,
    #[serde(default)]
    pub achievements: Option<Vec<String>>,
}

/// Where the profile image lives and how big it is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileImgMeta {
    /// Relative to `public/people`
    pub relative_path: String,
    /// Relative to the site root
    pub relative_server_path: String,
    /// Location on disk at build time; never serialized
    #[serde(skip)]
    pub absolute_fs_path: PathBuf,
    pub height: u32,
    pub width: u32,
}

impl ProfileImgMeta {
    /// Build the metadata for an image published under
    /// `<public_dir>/people/`. Dimensions come from whoever decoded the
    /// image.
    pub fn new(public_dir: &Path, profile_img: &str, (width, height): (u32, u32)) -> Self {
        let relative_path = profile_img
            .trim_start_matches("./")
            .trim_start_matches('/')
            .to_string();

        Self {
            relative_server_path: format!("/people/{}", relative_path),
            absolute_fs_path: public_dir.join("people").join(&relative_path),
            relative_path,
            height,
            width,
        }
    }
}

/// Post statistics for one author.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuthorStats {
    pub post_count: usize,
    pub word_count: usize,
}

impl AuthorStats {
    pub fn from_posts<'a, I>(bodies: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        bodies
            .into_iter()
            .fold(Self::default(), |stats, body| AuthorStats {
                post_count: stats.post_count + 1,
                word_count: stats.word_count + count_words(body),
            })
    }
}

/// Number of whitespace-separated words in `text`.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Identity of an author's content file.
#[derive(Debug, Clone)]
pub struct PersonSource {
    pub id: String,
    pub file: String,
    pub locale: Locale,
    pub locales: Vec<Locale>,
}

/// Complete author record, read-only once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonInfo {
    pub kind: PersonKind,
    pub id: String,
    pub file: String,
    pub locale: Locale,
    pub locales: Vec<Locale>,
    pub name: String,
    pub first_name: String,
    pub last_name: String,
    pub description: String,
    pub socials: Socials,
    pub pronouns: String,
    pub profile_img: String,
    pub color: String,
    pub roles: Vec<String>,
    pub achievements: Vec<String>,
    pub total_post_count: usize,
    pub total_word_count: usize,
    pub profile_img_meta: ProfileImgMeta,
}

/// Discriminator serialized as `"kind": "person"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonKind {
    #[default]
    Person,
}

impl PersonInfo {
    pub fn from_raw(
        raw: RawPersonInfo,
        source: PersonSource,
        profile_img_meta: ProfileImgMeta,
        stats: AuthorStats,
    ) -> Self {
        Self {
            kind: PersonKind::Person,
            id: source.id,
            file: source.file,
            locale: source.locale,
            locales: source.locales,
            name: raw.name,
            first_name: raw.first_name,
            last_name: raw.last_name,
            description: raw.description,
            socials: raw.socials,
            pronouns: raw.pronouns.unwrap_or_default(),
            profile_img: raw.profile_img,
            color: raw.color.unwrap_or_default(),
            roles: raw.roles.unwrap_or_default(),
            achievements: raw.achievements.unwrap_or_default(),
            total_post_count: stats.post_count,
            total_word_count: stats.word_count,
            profile_img_meta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RAW_JSON: &str = r#"{
        "name": "Corbin Crutchley",
        "firstName": "Corbin",
        "lastName": "Crutchley",
        "description": "Writes about web development",
        "socials": { "github": "crutchcorn", "linkedIn": "corbincrutchley" },
        "pronouns": "he/him",
        "profileImg": "./crutchcorn.jpg",
        "roles": ["author", "developer"]
    }"#;

    fn source() -> PersonSource {
        PersonSource {
            id: "crutchcorn".to_string(),
            file: "content/people/crutchcorn/index.md".to_string(),
            locale: Locale::En,
            locales: vec![Locale::En, Locale::Es],
        }
    }

    // ==================== RawPersonInfo Tests ====================

    #[test]
    fn test_raw_person_deserializes_camel_case() {
        let raw: RawPersonInfo = serde_json::from_str(RAW_JSON).unwrap();
        assert_eq!(raw.first_name, "Corbin");
        assert_eq!(raw.socials.github.as_deref(), Some("crutchcorn"));
        assert_eq!(raw.socials.linked_in.as_deref(), Some("corbincrutchley"));
        assert_eq!(raw.socials.twitter, None);
        assert_eq!(raw.color, None);
        assert_eq!(raw.achievements, None);
    }

    #[test]
    fn test_raw_person_socials_default_when_absent() {
        let raw: RawPersonInfo = serde_json::from_str(
            r#"{"name": "A", "firstName": "A", "lastName": "B", "description": "", "profileImg": "a.png"}"#,
        )
        .unwrap();
        assert_eq!(raw.socials, Socials::default());
    }

    // ==================== ProfileImgMeta Tests ====================

    #[test]
    fn test_profile_img_meta_paths() {
        let meta = ProfileImgMeta::new(Path::new("/site/public"), "./crutchcorn.jpg", (400, 300));
        assert_eq!(meta.relative_path, "crutchcorn.jpg");
        assert_eq!(meta.relative_server_path, "/people/crutchcorn.jpg");
        assert_eq!(meta.absolute_fs_path, PathBuf::from("/site/public/people/crutchcorn.jpg"));
        assert_eq!(meta.width, 400);
        assert_eq!(meta.height, 300);
    }

    #[test]
    fn test_profile_img_meta_skips_fs_path_when_serialized() {
        let meta = ProfileImgMeta::new(Path::new("public"), "a.png", (1, 2));
        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json["relativeServerPath"], "/people/a.png");
        assert!(json.get("absoluteFSPath").is_none());
        assert!(json.get("absoluteFsPath").is_none());
    }

    // ==================== Stats Tests ====================

    #[test]
    fn test_count_words() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("  one\ttwo\n\nthree  "), 3);
    }

    #[test]
    fn test_author_stats_from_posts() {
        let stats = AuthorStats::from_posts(["hello world", "one two three", ""]);
        assert_eq!(stats.post_count, 3);
        assert_eq!(stats.word_count, 5);
    }

    // ==================== PersonInfo Tests ====================

    #[test]
    fn test_from_raw_fills_optionals() {
        let raw: RawPersonInfo = serde_json::from_str(RAW_JSON).unwrap();
        let meta = ProfileImgMeta::new(Path::new("public"), &raw.profile_img, (64, 64));
        let person = PersonInfo::from_raw(raw, source(), meta, AuthorStats::from_posts(["a b"]));

        assert_eq!(person.kind, PersonKind::Person);
        assert_eq!(person.id, "crutchcorn");
        assert_eq!(person.pronouns, "he/him");
        assert_eq!(person.color, "");
        assert_eq!(person.roles, vec!["author", "developer"]);
        assert!(person.achievements.is_empty());
        assert_eq!(person.total_post_count, 1);
        assert_eq!(person.total_word_count, 2);
        assert_eq!(person.locales, vec![Locale::En, Locale::Es]);
    }

    #[test]
    fn test_person_info_serializes_kind_and_locale() {
        let raw: RawPersonInfo = serde_json::from_str(RAW_JSON).unwrap();
        let meta = ProfileImgMeta::new(Path::new("public"), &raw.profile_img, (64, 64));
        let person = PersonInfo::from_raw(raw, source(), meta, AuthorStats::default());

        let json = serde_json::to_value(&person).unwrap();
        assert_eq!(json["kind"], "person");
        assert_eq!(json["locale"], "en");
        assert_eq!(json["locales"][1], "es");
        assert_eq!(json["totalPostCount"], 0);
        assert_eq!(json["socials"]["linkedIn"], "corbincrutchley");
    }
}
