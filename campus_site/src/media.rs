//! Video and contact links for career pages.

use std::sync::LazyLock;

use regex::Regex;

static YOUTUBE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^.*(youtu\.be/|v/|u/\w/|embed/|watch\?v=)([^#&?]*).*").expect("static YouTube pattern is valid")
});

/// Extract the 11-character video id from the common YouTube URL shapes.
pub fn youtube_id(url: &str) -> Option<&str> {
    let id = YOUTUBE_URL.captures(url)?.get(2)?.as_str();
    (id.len() == 11).then_some(id)
}

/// Embed and thumbnail URLs for one video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoLinks {
    pub id: String,
    pub embed: String,
    pub thumbnail: String,
}

impl VideoLinks {
    pub fn from_url(url: &str) -> Option<Self> {
        let id = youtube_id(url)?;
        Some(Self {
            id: id.to_string(),
            embed: format!("https://www.youtube.com/embed/{id}?autoplay=1&enablejsapi=1"),
            thumbnail: format!("https://img.youtube.com/vi/{id}/hqdefault.jpg"),
        })
    }
}

/// WhatsApp link asking about `career` at `campus`; `None` without a contact number.
pub fn inquiry_link(number: &str, career: &str, campus: &str) -> Option<String> {
    let number: String = number.chars().filter(char::is_ascii_digit).collect();
    if number.is_empty() {
        return None;
    }
    let message = format!("Hola, deseo solicitar más información sobre la carrera {career} en la sede {campus}.");
    Some(format!("https://wa.me/{number}?text={}", urlencoding::encode(&message)))
}
