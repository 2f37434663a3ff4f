use once_cell::sync::Lazy;
use regex::Regex;

/// Length of every YouTube video id
pub const VIDEO_ID_LEN: usize = 11;

static VIDEO_URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^.*(youtu\.be/|v/|u/\w/|embed/|\?v=|&v=)([^#&?]*).*")
        .expect("valid youtube url regex")
});

/// Pull the video id out of a YouTube URL.
///
/// Handles `youtu.be/<id>`, `/v/<id>`, `/u/<x>/<id>`, `/embed/<id>`,
/// `?v=<id>` and `&v=<id>`. The token must be exactly 11 characters.
pub fn extract_video_id(url: &str) -> Option<String> {
    let captures = VIDEO_URL_RE.captures(url)?;
    let id = captures.get(2)?.as_str();
    (id.chars().count() == VIDEO_ID_LEN).then(|| id.to_string())
}

pub fn embed_url(video_id: &str) -> String {
    format!("https://www.youtube.com/embed/{video_id}")
}
