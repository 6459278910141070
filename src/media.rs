//! Media list handling.
//!
//! Sources come from the command line, either directly or through JSON
//! manifests. Every entry is fetched eagerly once the list is mounted so
//! swiping to any slide never shows a blank frame; a failed fetch only marks
//! that one slide as unavailable.

use anyhow::{Context, Result, anyhow, bail};
use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

/// Where a single slide's bytes come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaSource {
    Remote(Url),
    Local(PathBuf),
}

impl MediaSource {
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            bail!("empty media entry");
        }
        if let Ok(url) = Url::parse(trimmed) {
            match url.scheme() {
                "http" | "https" => return Ok(MediaSource::Remote(url)),
                "file" => {
                    let path = url
                        .to_file_path()
                        .map_err(|_| anyhow!("file URL has no local path: {trimmed}"))?;
                    return Ok(MediaSource::Local(path));
                }
                // Windows drive letters parse as a one-letter scheme.
                scheme if scheme.len() > 1 => bail!("unsupported URL scheme `{scheme}`"),
                _ => {}
            }
        }
        Ok(MediaSource::Local(PathBuf::from(trimmed)))
    }
}

impl fmt::Display for MediaSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaSource::Remote(url) => write!(f, "{url}"),
            MediaSource::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Ordered media for one carousel mount. Replacing the list bumps the
/// generation so late preload results for the old list can be dropped.
#[derive(Debug, Clone, Default)]
pub struct MediaList {
    sources: Vec<MediaSource>,
    generation: u64,
}

impl MediaList {
    pub fn new(sources: Vec<MediaSource>) -> Self {
        Self {
            sources,
            generation: 0,
        }
    }

    pub fn replace(&mut self, sources: Vec<MediaSource>) {
        self.sources = sources;
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn sources(&self) -> &[MediaSource] {
        &self.sources
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Manifest {
    List(Vec<String>),
    Object { images: Vec<String> },
}

/// Expand command-line arguments into raw media entries.
///
/// Arguments ending in `.json` are manifests; everything else is an entry.
pub fn collect_entries<I, S>(args: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut entries = Vec::new();
    for arg in args {
        let arg = arg.as_ref();
        if arg.to_ascii_lowercase().ends_with(".json") {
            let listed = read_manifest(Path::new(arg))?;
            info!(path = arg, count = listed.len(), "Read media manifest");
            entries.extend(listed);
        } else {
            entries.push(arg.to_string());
        }
    }
    Ok(entries)
}

pub fn read_manifest(path: &Path) -> Result<Vec<String>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading manifest {}", path.display()))?;
    let manifest: Manifest = serde_json::from_str(&data)
        .with_context(|| format!("parsing manifest {}", path.display()))?;
    Ok(match manifest {
        Manifest::List(images) | Manifest::Object { images } => images,
    })
}

/// Parse raw entries, skipping the ones that cannot be used.
pub fn parse_entries(entries: &[String]) -> Vec<MediaSource> {
    entries
        .iter()
        .filter_map(|entry| match MediaSource::parse(entry) {
            Ok(source) => Some(source),
            Err(err) => {
                warn!(entry = %entry, "Skipping media entry: {err:#}");
                None
            }
        })
        .collect()
}

/// Decoded pixels ready to hand to the renderer.
#[derive(Clone)]
pub struct LoadedMedia {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl fmt::Debug for LoadedMedia {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadedMedia")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.rgba.len())
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub timeout: Duration,
    pub user_agent: String,
}

static HTTP_CLIENT: OnceCell<reqwest::Client> = OnceCell::new();

fn http_client(options: &FetchOptions) -> Result<&'static reqwest::Client> {
    HTTP_CLIENT.get_or_try_init(|| {
        reqwest::Client::builder()
            .timeout(options.timeout)
            .user_agent(options.user_agent.clone())
            .build()
            .context("building HTTP client")
    })
}

/// Fetch and decode one slide. File reads go through `tokio::fs` and decoding
/// runs on the blocking pool so large images never stall other preloads.
pub async fn fetch_media(source: MediaSource, options: FetchOptions) -> Result<LoadedMedia> {
    let bytes = match &source {
        MediaSource::Local(path) => tokio::fs::read(path)
            .await
            .with_context(|| format!("reading {}", path.display()))?,
        MediaSource::Remote(url) => {
            let response = http_client(&options)?
                .get(url.clone())
                .send()
                .await
                .with_context(|| format!("requesting {url}"))?
                .error_for_status()
                .with_context(|| format!("fetching {url}"))?;
            response
                .bytes()
                .await
                .with_context(|| format!("reading body of {url}"))?
                .to_vec()
        }
    };
    let media = tokio::task::spawn_blocking(move || decode_media(&bytes))
        .await
        .context("decode task did not finish")?
        .with_context(|| format!("decoding {source}"))?;
    debug!(
        source = %source,
        width = media.width,
        height = media.height,
        "Decoded media"
    );
    Ok(media)
}

pub fn decode_media(bytes: &[u8]) -> Result<LoadedMedia> {
    let decoded = image::load_from_memory(bytes).context("unrecognized image data")?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    if width == 0 || height == 0 {
        bail!("image has no pixels");
    }
    Ok(LoadedMedia {
        width,
        height,
        rgba: rgba.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("swipe-gallery-{}-{name}", std::process::id()))
    }

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba([200, 10, 10, 255]));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).expect("encode png");
        out.into_inner()
    }

    #[test]
    fn parses_remote_and_local_sources() {
        assert!(matches!(
            MediaSource::parse("https://cdn.example.com/a.jpg").expect("https"),
            MediaSource::Remote(_)
        ));
        assert_eq!(
            MediaSource::parse(" ./photos/b.png ").expect("path"),
            MediaSource::Local(PathBuf::from("./photos/b.png"))
        );
        assert!(MediaSource::parse("   ").is_err());
        assert!(MediaSource::parse("ftp://example.com/c.png").is_err());
    }

    #[test]
    fn file_urls_become_paths() {
        let source = MediaSource::parse("file:///tmp/slide.webp").expect("file url");
        assert_eq!(source, MediaSource::Local(PathBuf::from("/tmp/slide.webp")));
    }

    #[test]
    fn manifests_accept_array_and_object_forms() {
        let array = temp_path("array.json");
        fs::write(&array, r#"["a.png", "https://example.com/b.png"]"#).expect("write");
        let object = temp_path("object.json");
        fs::write(&object, r#"{ "images": ["c.png"] }"#).expect("write");

        let entries = collect_entries([
            array.to_string_lossy().to_string(),
            "d.png".to_string(),
            object.to_string_lossy().to_string(),
        ])
        .expect("collect entries");
        assert_eq!(
            entries,
            vec!["a.png", "https://example.com/b.png", "d.png", "c.png"]
        );

        let _ = fs::remove_file(array);
        let _ = fs::remove_file(object);
    }

    #[test]
    fn bad_manifest_is_an_error() {
        let path = temp_path("broken.json");
        fs::write(&path, "{ not json").expect("write");
        assert!(collect_entries([path.to_string_lossy()]).is_err());
        let _ = fs::remove_file(path);
    }

    #[test]
    fn unusable_entries_are_skipped() {
        let entries = vec![
            "one.png".to_string(),
            String::new(),
            "gopher://old.example/x".to_string(),
        ];
        let sources = parse_entries(&entries);
        assert_eq!(sources, vec![MediaSource::Local(PathBuf::from("one.png"))]);
    }

    #[test]
    fn replacing_the_list_bumps_generation() {
        let mut list = MediaList::new(vec![MediaSource::Local(PathBuf::from("a.png"))]);
        assert_eq!(list.generation(), 0);
        list.replace(Vec::new());
        assert_eq!(list.generation(), 1);
        assert!(list.is_empty());
    }

    #[test]
    fn decodes_png_into_rgba() {
        let media = decode_media(&png_bytes(3, 2)).expect("decode");
        assert_eq!((media.width, media.height), (3, 2));
        assert_eq!(media.rgba.len(), 3 * 2 * 4);
    }

    #[test]
    fn rejects_non_image_bytes() {
        assert!(decode_media(b"definitely not an image").is_err());
    }

    #[tokio::test]
    async fn fetches_local_files_off_the_async_path() {
        let path = temp_path("slide.png");
        fs::write(&path, png_bytes(4, 4)).expect("write");
        let options = FetchOptions {
            timeout: Duration::from_secs(1),
            user_agent: "test".to_string(),
        };
        let media = fetch_media(MediaSource::Local(path.clone()), options.clone())
            .await
            .expect("local fetch");
        assert_eq!(media.width, 4);
        let _ = fs::remove_file(&path);

        let missing = fetch_media(MediaSource::Local(path), options).await;
        assert!(missing.is_err());
    }

    #[tokio::test]
    async fn undecodable_local_file_is_an_error() {
        let path = temp_path("not-an-image.png");
        fs::write(&path, b"plain text").expect("write");
        let options = FetchOptions {
            timeout: Duration::from_secs(1),
            user_agent: "test".to_string(),
        };
        let err = fetch_media(MediaSource::Local(path.clone()), options)
            .await
            .expect_err("decode should fail");
        assert!(format!("{err:#}").contains("decoding"));
        let _ = fs::remove_file(path);
    }
}
