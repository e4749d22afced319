//! Command line options and playlist loading for the terminal host

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;

use audioplayer::{Playlist, PlaylistEntry};

#[derive(Parser, Debug)]
#[command(name = "audioplayer", version, about = "Terminal host for the embeddable audio player")]
pub struct Args {
    /// JSON file with an array of `{src, artist, title, thumbnail}` entries
    #[arg(short, long)]
    pub playlist: Option<PathBuf>,

    /// Initial volume, 0-100
    #[arg(long, default_value_t = 25.0)]
    pub volume: f64,

    /// Playlist entry template (`%N` index, `%A` artist, `%T` title)
    #[arg(long, default_value = "%N. %A > %T")]
    pub item_template: String,

    /// Index of the song selected at startup
    #[arg(long)]
    pub start: Option<usize>,

    /// Length reported by the simulated playback for every track, in seconds
    #[arg(long, default_value_t = 180.0)]
    pub track_secs: f64,

    #[arg(long, default_value = ".logs")]
    pub log_dir: PathBuf,
}

pub fn load_playlist(path: &Path) -> anyhow::Result<Playlist> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading playlist {}", path.display()))?;
    let playlist: Playlist = serde_json::from_str(&raw)
        .with_context(|| format!("parsing playlist {}", path.display()))?;

    tracing::info!(path = %path.display(), tracks = playlist.len(), "Playlist loaded");
    Ok(playlist)
}

pub fn default_playlist() -> Playlist {
    vec![
        PlaylistEntry::new("assets/song61.mp3", "OpenBSD", "Winter of 95")
            .with_thumbnail("https://www.openbsd.org/images/61_right.jpg"),
        PlaylistEntry::new("assets/song62.mp3", "OpenBSD", "A 3 line diff")
            .with_thumbnail("https://www.openbsd.org/images/62_right.gif"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_demo_page() {
        let args = Args::parse_from(["audioplayer"]);
        assert_eq!(args.volume, 25.0);
        assert_eq!(args.item_template, "%N. %A > %T");
        assert_eq!(args.start, None);
        assert_eq!(args.log_dir, PathBuf::from(".logs"));
    }

    #[test]
    fn reads_playlist_file() {
        let dir = std::env::temp_dir().join(format!("audioplayer-cli-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("playlist.json");
        std::fs::write(
            &path,
            r#"[{"src":"a.mp3","artist":"OpenBSD","title":"Winter of 95","thumbnail":"a.jpg"},
                {"src":"b.ogg","artist":"OpenBSD","title":"A 3 line diff"}]"#,
        )
        .unwrap();

        let playlist = load_playlist(&path).unwrap();
        assert_eq!(playlist.len(), 2);
        assert_eq!(playlist[0].thumbnail.as_deref(), Some("a.jpg"));
        assert_eq!(playlist[1].src, "b.ogg");

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = load_playlist(Path::new("/nonexistent/playlist.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/playlist.json"));
    }
}
