//! Story-name derivations and asset URL construction.
//!
//! Story identifiers look like `momotaro--oni_island`: `--` separates the
//! folktale from a chapter suffix and `_` stands in for spaces. Every asset
//! location is derived deterministically from that identifier.

/// Host serving the reader-facing folktale pages.
pub const TOP_URL: &str = "https://www.lingual-ninja.com";
/// Blob storage root holding folktale images and audio.
pub const BLOB_URL: &str = "https://lingualninja.blob.core.windows.net/lingual-storage";

/// First `--` segment of the story name; audio files live under it.
pub fn audio_folder(story_name: &str) -> &str {
    story_name.split("--").next().unwrap_or(story_name)
}

/// Human-readable title: `--` becomes ` - `, `_` becomes a space.
pub fn display_title(story_name: &str) -> String {
    story_name.replace("--", " - ").replace('_', " ")
}

/// Cover image for the folktale the story belongs to.
pub fn image_url(blob_base: &str, story_name: &str) -> String {
    format!("{blob_base}/folktalesImg/{}.png", audio_folder(story_name))
}

/// Narration audio for one line of the story.
pub fn audio_url(blob_base: &str, story_name: &str, line_number: u32) -> String {
    format!(
        "{blob_base}/folktalesAudio/{}/folktale-audio{line_number}.m4a",
        audio_folder(story_name)
    )
}

/// Anchor id of the rendered sentence widget.
pub fn widget_id(story_name: &str, line_number: u32) -> String {
    format!("{story_name}-{line_number}")
}

/// Reader-facing page for the whole folktale.
pub fn story_page_url(top_url: &str, story_name: &str) -> String {
    format!("{top_url}/folktales/{story_name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn audio_folder_takes_first_segment() {
        assert_eq!(audio_folder("momotaro--oni_island"), "momotaro");
        assert_eq!(audio_folder("urashima"), "urashima");
    }

    #[test]
    fn display_title_expands_separators() {
        assert_eq!(display_title("momotaro--oni_island"), "momotaro - oni island");
        assert_eq!(display_title("kintaro"), "kintaro");
    }

    #[test]
    fn asset_urls_derive_from_story_and_line() {
        assert_eq!(
            image_url(BLOB_URL, "momotaro--oni_island"),
            format!("{BLOB_URL}/folktalesImg/momotaro.png")
        );
        assert_eq!(
            audio_url(BLOB_URL, "momotaro--oni_island", 4),
            format!("{BLOB_URL}/folktalesAudio/momotaro/folktale-audio4.m4a")
        );
        assert_eq!(widget_id("momotaro--oni_island", 4), "momotaro--oni_island-4");
        assert_eq!(
            story_page_url(TOP_URL, "momotaro--oni_island"),
            format!("{TOP_URL}/folktales/momotaro--oni_island")
        );
    }
}
