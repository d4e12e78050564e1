use std::sync::LazyLock;

use derive_more::{AsRef, Deref, Display};
use regex::Regex;
use url::Url;

static CANONICAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i-u)(?:youtube(?:-nocookie)?\.com/(?:watch\?v=|embed/|v/|shorts/)|youtu\.be/)([A-Za-z0-9_-]{6,})",
    )
    .unwrap()
});
static LOOSE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([A-Za-z0-9_-]{6,})").unwrap());
static PLAUSIBLE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{6,}$").unwrap());

const PATH_MARKERS: [&str; 3] = ["embed", "v", "shorts"];

/// Identifier of a video on the hosting platform.
#[derive(AsRef, Deref, Debug, Display, Clone, PartialEq, Eq, Hash)]
pub struct VideoId(String);

impl VideoId {
    fn new(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Result of a single extraction strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Found(VideoId),
    /// The URL was recognized, but it does not reference a video.
    Absent,
    Next,
}

pub trait Strategy {
    fn extract(&self, url: &str) -> Step;
}

/// Parses the URL and inspects host, query and path of known video hosts.
pub struct StructuredUrl;

/// Matches the canonical URL shapes anywhere in the input.
pub struct CanonicalPattern;

/// Accepts any run of identifier-safe characters. This may match unrelated text.
pub struct LoosePattern;

pub const STRATEGIES: [&(dyn Strategy + Sync); 3] =
    [&StructuredUrl, &CanonicalPattern, &LoosePattern];

impl Strategy for StructuredUrl {
    fn extract(&self, url: &str) -> Step {
        let Ok(url) = Url::parse(url) else {
            return Step::Next;
        };
        let host = url.host_str().unwrap_or_default();
        let host = host.strip_prefix("www.").unwrap_or(host);
        let segments = url
            .path_segments()
            .map(|segments| segments.filter(|s| !s.is_empty()).collect::<Vec<_>>())
            .unwrap_or_default();

        if host.contains("youtu.be") {
            return segments
                .first()
                .map_or(Step::Absent, |id| Step::Found(VideoId::new(id)));
        }

        if host.contains("youtube.com") || host.contains("youtube-nocookie.com") {
            if let Some(v) = url
                .query_pairs()
                .find_map(|(key, value)| (key == "v").then_some(value))
                .filter(|v| !v.is_empty())
            {
                return Step::Found(VideoId::new(&v));
            }

            if let Some(id) = segments
                .windows(2)
                .find(|pair| PATH_MARKERS.contains(&pair[0]))
                .map(|pair| pair[1])
            {
                return Step::Found(VideoId::new(id));
            }

            if let Some(last) = segments.last().filter(|last| PLAUSIBLE_ID.is_match(last)) {
                return Step::Found(VideoId::new(last));
            }
        }

        Step::Next
    }
}

impl Strategy for CanonicalPattern {
    fn extract(&self, url: &str) -> Step {
        capture(&CANONICAL, url)
    }
}

impl Strategy for LoosePattern {
    fn extract(&self, url: &str) -> Step {
        capture(&LOOSE, url)
    }
}

fn capture(regex: &Regex, url: &str) -> Step {
    regex
        .captures(url)
        .and_then(|captures| captures.get(1))
        .map_or(Step::Next, |id| Step::Found(VideoId::new(id.as_str())))
}

/// Best-effort extraction of a video identifier from a URL.
///
/// Never fails: malformed or unrelated input yields `None`. Strategies are evaluated in
/// [`STRATEGIES`] order until one of them reaches a verdict.
#[must_use]
pub fn video_id(url: Option<&str>) -> Option<VideoId> {
    let url = url.filter(|url| !url.trim().is_empty())?;
    for strategy in STRATEGIES {
        match strategy.extract(url) {
            Step::Found(id) => return Some(id),
            Step::Absent => return None,
            Step::Next => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("https://youtu.be/dQw4w9WgXcQ", Some("dQw4w9WgXcQ"))]
    #[case("https://youtu.be/dQw4w9WgXcQ?t=42", Some("dQw4w9WgXcQ"))]
    #[case("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=5s", Some("dQw4w9WgXcQ"))]
    #[case("https://m.youtube.com/watch?feature=share&v=dQw4w9WgXcQ", Some("dQw4w9WgXcQ"))]
    #[case("https://www.youtube.com/embed/dQw4w9WgXcQ", Some("dQw4w9WgXcQ"))]
    #[case("https://www.youtube-nocookie.com/embed/dQw4w9WgXcQ?rel=0", Some("dQw4w9WgXcQ"))]
    #[case("https://www.youtube.com/v/dQw4w9WgXcQ", Some("dQw4w9WgXcQ"))]
    #[case("https://youtube.com/shorts/abc123XYZ_-", Some("abc123XYZ_-"))]
    #[case("https://www.youtube.com/user/channel/dQw4w9WgXcQ", Some("dQw4w9WgXcQ"))]
    #[case("https://youtu.be/", None)]
    #[case("https://youtu.be/?v=dQw4w9WgXcQ", None)]
    fn test_video_id_structured(#[case] url: &str, #[case] expected: Option<&str>) {
        assert_eq!(video_id(Some(url)).as_deref().map(String::as_str), expected);
    }

    #[rstest]
    #[case("youtube.com/watch?v=dQw4w9WgXcQ", Some("dQw4w9WgXcQ"))]
    #[case("www.youtu.be/dQw4w9WgXcQ", Some("dQw4w9WgXcQ"))]
    #[case("see YOUTUBE.COM/embed/dQw4w9WgXcQ for details", Some("dQw4w9WgXcQ"))]
    #[case("https://www.youtube.com/watch?list=abc", Some("youtube"))]
    #[case("dQw4w9WgXcQ", Some("dQw4w9WgXcQ"))]
    #[case("https://vimeo.com/123456789", Some("123456789"))]
    #[case("not a url at all", None)]
    #[case("abc", None)]
    fn test_video_id_fallbacks(#[case] url: &str, #[case] expected: Option<&str>) {
        assert_eq!(video_id(Some(url)).as_deref().map(String::as_str), expected);
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("   "))]
    fn test_video_id_empty(#[case] url: Option<&str>) {
        assert_eq!(video_id(url), None);
    }

    #[test]
    fn test_structured_url_defers_on_unknown_host() {
        assert_eq!(StructuredUrl.extract("https://example.com/dQw4w9WgXcQ"), Step::Next);
        assert_eq!(StructuredUrl.extract("::not a url::"), Step::Next);
        assert_eq!(StructuredUrl.extract("https://youtu.be"), Step::Absent);
    }

    #[test]
    fn test_canonical_pattern_requires_known_shape() {
        assert_eq!(CanonicalPattern.extract("https://example.com/dQw4w9WgXcQ"), Step::Next);
        assert_eq!(
            CanonicalPattern.extract("youtu.be/dQw4w9WgXcQ"),
            Step::Found(VideoId::new("dQw4w9WgXcQ"))
        );
    }

    #[rstest]
    #[case("youtu.be/\u{212A}\u{212A}\u{212A}\u{212A}\u{212A}\u{212A}")]
    #[case("YOUTU.BE/\u{17F}\u{17F}\u{17F}\u{17F}\u{17F}\u{17F}")]
    fn test_canonical_pattern_ascii_only(#[case] url: &str) {
        assert_eq!(CanonicalPattern.extract(url), Step::Next);
        assert_eq!(video_id(Some(url)), None);
    }

    #[test]
    fn test_loose_pattern_takes_first_run() {
        assert_eq!(
            LoosePattern.extract("id: abc, then abcdef and ghijkl"),
            Step::Found(VideoId::new("abcdef"))
        );
    }

    #[test]
    fn test_video_id_is_idempotent() {
        let url = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";
        assert_eq!(video_id(Some(url)), video_id(Some(url)));
    }
}
