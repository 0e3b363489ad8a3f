//! Public URLs for stored media references.

/// Turns stored media paths into public URLs.
///
/// Paths are stored relative to the media root (`clients/logos/acme.png`)
/// and published as `prefix + path`. Absolute `http(s)://` references pass
/// through untouched; unset or blank references become `None`.
#[derive(Debug, Clone)]
pub struct MediaUrls {
    prefix: String,
}

impl MediaUrls {
    pub fn new(prefix: impl Into<String>) -> Self {
        let mut prefix = prefix.into();
        if !prefix.ends_with('/') {
            prefix.push('/');
        }
        Self { prefix }
    }

    pub fn url(&self, path: Option<&str>) -> Option<String> {
        let path = path.map(str::trim).filter(|p| !p.is_empty())?;
        if path.starts_with("http://") || path.starts_with("https://") {
            return Some(path.to_string());
        }
        Some(format!("{}{}", self.prefix, path.trim_start_matches('/')))
    }
}

impl Default for MediaUrls {
    fn default() -> Self {
        Self::new("/media/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_relative_paths() {
        let media = MediaUrls::new("/media");
        assert_eq!(media.url(Some("clients/a.png")).as_deref(), Some("/media/clients/a.png"));
        assert_eq!(media.url(Some("/clients/a.png")).as_deref(), Some("/media/clients/a.png"));
    }

    #[test]
    fn absent_and_absolute() {
        let media = MediaUrls::new("https://cdn.example.com/m/");
        assert_eq!(media.url(None), None);
        assert_eq!(media.url(Some("  ")), None);
        assert_eq!(
            media.url(Some("https://img.example.org/x.jpg")).as_deref(),
            Some("https://img.example.org/x.jpg")
        );
        assert_eq!(media.url(Some("x.jpg")).as_deref(), Some("https://cdn.example.com/m/x.jpg"));
    }
}
