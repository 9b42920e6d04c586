//! Wholesome meme feed with a content filter and an offline fallback vault.

use platform_host::{HttpService, XorShift64};
use serde::Deserialize;

/// Base URL of the live meme source; the subreddit is appended as a path segment.
pub const MEME_API_BASE: &str = "https://meme-api.com/gimme";

/// Subreddits the live source is queried from.
pub const WHOLESOME_SUBS: [&str; 5] = [
    "wholesomememes",
    "CleanMemes",
    "AnimalsBeingDerps",
    "aww",
    "dogmemes",
];

/// Case-insensitive substrings that reject a live meme.
pub const BANNED_PATTERNS: [&str; 21] = [
    "nsfw", "politic", "trump", "biden", "election", "kill", "murder", "gun", "weapon", "drug",
    "sex", "porn", "nazi", "hitler", "damn", "hell", "shit", "fuck", "bitch", "bastard", "whore",
];

/// Notice shown while memes come from the fallback vault.
pub const FALLBACK_NOTICE: &str =
    "Using the wholesome backup feed while the live source recuperates.";

const FALLBACK_SOURCE: &str = "Offline Vault";

const FALLBACK_MEMES: [(&str, &str); 5] = [
    (
        "https://i.imgur.com/w1aN5dM.jpg",
        "Golden retriever demoing excellent pair-programming etiquette.",
    ),
    (
        "https://i.imgur.com/2l6ZJ1w.jpg",
        "Cat who just merged a pull request without conflicts.",
    ),
    (
        "https://i.imgur.com/vLw1JcZ.jpg",
        "Baby sloth reminding you to take breaks.",
    ),
    (
        "https://i.imgur.com/omw5Jwq.jpg",
        "Hedgehog hype team cheering for your sprint demo.",
    ),
    (
        "https://i.imgur.com/Vy3t7yR.jpg",
        "Dog with coffee ready for Monday stand-up.",
    ),
];

#[derive(Debug, Clone, PartialEq, Eq)]
/// Meme ready for display.
pub struct Meme {
    /// Image URL.
    pub image: String,
    /// Trimmed caption; may be empty.
    pub caption: String,
    /// Tags reported by the source.
    pub tags: Vec<String>,
    /// Attribution such as `r/aww`.
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Result of one fetch: always a meme, plus a notice when the fallback vault answered.
pub struct MemeLoad {
    /// Meme to display.
    pub meme: Meme,
    /// User-facing notice, set when the live source was unusable.
    pub notice: Option<&'static str>,
}

#[derive(Debug, Default, Deserialize)]
struct MemePayload {
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    subreddit: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
}

/// Returns whether `text` contains none of [`BANNED_PATTERNS`].
pub fn is_wholesome(text: &str) -> bool {
    let lowered = text.to_lowercase();
    !BANNED_PATTERNS
        .iter()
        .any(|pattern| lowered.contains(pattern))
}

/// Source of uniform indices for subreddit and fallback selection.
pub trait MemePicker {
    /// Returns an index in `0..len`; `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

#[derive(Debug, Clone)]
/// Xorshift picker; seeded from host randomness in the browser.
pub struct XorShiftPicker {
    rng: XorShift64,
}

impl XorShiftPicker {
    /// Creates a picker from `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: XorShift64::new(seed),
        }
    }

    /// Creates a picker seeded from host randomness.
    pub fn from_entropy() -> Self {
        Self {
            rng: XorShift64::from_entropy(),
        }
    }
}

impl MemePicker for XorShiftPicker {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.next_index(len)
    }
}

/// Picks one meme from the offline vault.
pub fn fallback_meme(picker: &mut dyn MemePicker) -> Meme {
    let (image, caption) = FALLBACK_MEMES[picker.pick(FALLBACK_MEMES.len())];
    Meme {
        image: image.to_string(),
        caption: caption.to_string(),
        tags: Vec::new(),
        source: FALLBACK_SOURCE.to_string(),
    }
}

async fn fetch_live(http: &dyn HttpService, subreddit: &str) -> Result<Meme, String> {
    let url = format!("{MEME_API_BASE}/{subreddit}");
    let raw = http.get_json(&url).await?;
    let payload: MemePayload =
        serde_json::from_value(raw).map_err(|err| format!("malformed meme payload: {err}"))?;

    let image = payload.url.unwrap_or_default();
    if image.is_empty() {
        return Err("response missing image".to_string());
    }
    let caption = payload.title.unwrap_or_default().trim().to_string();
    let content = format!("{caption} {}", payload.tags.join(" "));
    if !is_wholesome(&content) {
        return Err("filtered meme".to_string());
    }

    let source = payload
        .subreddit
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| subreddit.to_string());
    Ok(Meme {
        image,
        caption,
        tags: payload.tags,
        source: format!("r/{source}"),
    })
}

/// Fetches a meme from a random wholesome subreddit, falling back to the vault on any failure.
pub async fn fetch_meme(http: &dyn HttpService, picker: &mut dyn MemePicker) -> MemeLoad {
    let subreddit = WHOLESOME_SUBS[picker.pick(WHOLESOME_SUBS.len())];
    match fetch_live(http, subreddit).await {
        Ok(meme) => MemeLoad { meme, notice: None },
        Err(err) => {
            leptos::logging::warn!("meme feed fell back to the offline vault: {err}");
            MemeLoad {
                meme: fallback_meme(picker),
                notice: Some(FALLBACK_NOTICE),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::MemoryHttpService;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    struct Sequence(Vec<usize>);

    impl MemePicker for Sequence {
        fn pick(&mut self, len: usize) -> usize {
            self.0.remove(0) % len
        }
    }

    #[test]
    fn filter_matches_case_insensitive_substrings() {
        assert!(is_wholesome("A very good boy"));
        assert!(!is_wholesome("Election day puppy"));
        assert!(!is_wholesome("What the HELL is this"));
        assert!(!is_wholesome("shotgun"));
    }

    #[test]
    fn live_meme_uses_reported_subreddit() {
        let http = MemoryHttpService::default();
        http.respond_to_get(
            "https://meme-api.com/gimme/aww",
            Ok(json!({
                "url": "https://i.redd.it/cat.jpg",
                "title": "  Sleepy cat  ",
                "subreddit": "aww",
                "tags": ["cats"]
            })),
        );

        let load = block_on(fetch_meme(&http, &mut Sequence(vec![3])));

        assert_eq!(
            load,
            MemeLoad {
                meme: Meme {
                    image: "https://i.redd.it/cat.jpg".to_string(),
                    caption: "Sleepy cat".to_string(),
                    tags: vec!["cats".to_string()],
                    source: "r/aww".to_string(),
                },
                notice: None,
            }
        );
    }

    #[test]
    fn banned_tags_fall_back_to_vault() {
        let http = MemoryHttpService::default();
        http.respond_to_get(
            "https://meme-api.com/gimme/wholesomememes",
            Ok(json!({ "url": "https://i.redd.it/x.jpg", "title": "fine", "tags": ["politics"] })),
        );

        let load = block_on(fetch_meme(&http, &mut Sequence(vec![0, 2])));

        assert_eq!(load.notice, Some(FALLBACK_NOTICE));
        assert_eq!(load.meme.source, "Offline Vault");
        assert_eq!(load.meme.caption, "Baby sloth reminding you to take breaks.");
    }

    #[test]
    fn missing_image_or_transport_error_falls_back() {
        let http = MemoryHttpService::default();
        http.respond_to_get(
            "https://meme-api.com/gimme/CleanMemes",
            Ok(json!({ "title": "no picture" })),
        );

        let missing = block_on(fetch_meme(&http, &mut Sequence(vec![1, 0])));
        assert_eq!(missing.notice, Some(FALLBACK_NOTICE));

        let unreachable = block_on(fetch_meme(&http, &mut Sequence(vec![4, 4])));
        assert_eq!(unreachable.meme.image, "https://i.imgur.com/Vy3t7yR.jpg");
        assert_eq!(
            http.requested_urls(),
            vec![
                "https://meme-api.com/gimme/CleanMemes".to_string(),
                "https://meme-api.com/gimme/dogmemes".to_string()
            ]
        );
    }

    #[test]
    fn xorshift_stays_in_range() {
        let mut picker = XorShiftPicker::new(0);
        for _ in 0..100 {
            assert!(picker.pick(WHOLESOME_SUBS.len()) < WHOLESOME_SUBS.len());
        }
    }
}
