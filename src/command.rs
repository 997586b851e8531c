use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use std::path::{Path, PathBuf};
use url::Url;

use crate::types::DownloadJob;

pub const DOWNLOADER: &str = "wget";

const DEFAULT_IMAGE_EXTENSION: &str = "png";

// Unreserved and reserved URI characters pass through untouched.
const URL_SAFE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~')
    .remove(b':')
    .remove(b'/')
    .remove(b'?')
    .remove(b'#')
    .remove(b'[')
    .remove(b']')
    .remove(b'@')
    .remove(b'!')
    .remove(b'$')
    .remove(b'&')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'+')
    .remove(b',')
    .remove(b';')
    .remove(b'=');

/// Percent-encode a URL, keeping unreserved and reserved URI characters.
pub fn quote_url(url: &str) -> String {
    utf8_percent_encode(url, URL_SAFE).to_string()
}

/// Path component of a URL. Strings without a scheme are treated as a bare
/// path, minus any query or fragment.
fn url_path(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => parsed.path().to_string(),
        Err(_) => url.split(['?', '#']).next().unwrap_or_default().to_string(),
    }
}

/// Extension of the last path segment of `url`, without the dot.
pub fn url_extension(url: &str) -> Option<String> {
    let path = url_path(url);
    let segment = path.rsplit('/').next().unwrap_or(&path);
    let dot = segment.rfind('.')?;
    if dot == 0 || dot + 1 == segment.len() {
        return None;
    }
    Some(segment[dot + 1..].to_string())
}

/// Where the image for `rom` is saved: the ROM path with its extension
/// replaced by the image's.
pub fn destination_for(rom: &Path, url: &str) -> PathBuf {
    match url_extension(url) {
        Some(ext) => rom.with_extension(ext),
        None => rom.with_extension(DEFAULT_IMAGE_EXTENSION),
    }
}

/// Shell line downloading `job`.
pub fn render_command(job: &DownloadJob) -> String {
    format!(
        "{} \"{}\" -O \"{}\"",
        DOWNLOADER,
        quote_url(&job.url),
        job.destination.display()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_spaces_but_keeps_reserved_characters() {
        assert_eq!(
            quote_url("https://example.com/path with spaces/game image.png"),
            "https://example.com/path%20with%20spaces/game%20image.png"
        );
        assert_eq!(
            quote_url("https://example.com/a?b=c&d=(e)#f"),
            "https://example.com/a?b=c&d=(e)#f"
        );
        assert_eq!(quote_url("https://h/100%_ñ"), "https://h/100%25_%C3%B1");
        assert_eq!(
            quote_url("https://h/a~b-c_d.e/[x]@y!$*+,;='z'"),
            "https://h/a~b-c_d.e/[x]@y!$*+,;='z'"
        );
        assert_eq!(quote_url("https://h/a\"b<c>"), "https://h/a%22b%3Cc%3E");
    }

    #[test]
    fn extension_comes_from_url_path_only() {
        assert_eq!(url_extension("https://example.com/mario.jpg").as_deref(), Some("jpg"));
        assert_eq!(
            url_extension("https://example.com/mario.png?v=1.2").as_deref(),
            Some("png")
        );
        assert_eq!(
            url_extension("https://example.com/Named Boxarts/Game (USA).png#top").as_deref(),
            Some("png")
        );
        assert_eq!(url_extension("https://example.com/mario"), None);
        assert_eq!(url_extension("https://example.com/dir.v2/mario"), None);
        assert_eq!(url_extension("https://cdn.example.com"), None);
        assert_eq!(url_extension("https://example.com/.png"), None);
        assert_eq!(url_extension("https://example.com/file."), None);
    }

    #[test]
    fn schemeless_urls_fall_back_to_the_raw_path() {
        assert_eq!(url_extension("images/mario.gif?size=large").as_deref(), Some("gif"));
        assert_eq!(url_extension("/thumbs/mario#frag.png"), None);
        assert_eq!(
            destination_for(Path::new("/roms/nes/Mario.nes"), "thumbs/mario.jpg"),
            PathBuf::from("/roms/nes/Mario.jpg")
        );
    }

    #[test]
    fn destination_swaps_extension() {
        let rom = Path::new("/roms/nes/Mario Bros.nes");
        assert_eq!(
            destination_for(rom, "https://example.com/mario.jpg"),
            PathBuf::from("/roms/nes/Mario Bros.jpg")
        );
        assert_eq!(
            destination_for(rom, "https://example.com/mario"),
            PathBuf::from("/roms/nes/Mario Bros.png")
        );
        assert_eq!(
            destination_for(Path::new("/roms/genesis/Sonic (USA).bin"), "https://x/s.png"),
            PathBuf::from("/roms/genesis/Sonic (USA).png")
        );
    }

    #[test]
    fn renders_quoted_wget_line() {
        let job = DownloadJob {
            system: "Sega_-_Mega_Drive_-_Genesis".into(),
            key: "Sonic Adventure".into(),
            rom: PathBuf::from("/roms/genesis/Sonic Adventure (USA).bin"),
            url: "https://example.com/sonic.png".into(),
            destination: PathBuf::from("/roms/genesis/Sonic Adventure (USA).png"),
        };
        assert_eq!(
            render_command(&job),
            "wget \"https://example.com/sonic.png\" -O \"/roms/genesis/Sonic Adventure (USA).png\""
        );
    }
}
