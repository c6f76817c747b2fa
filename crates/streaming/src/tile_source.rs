//! Map tile lookup for a single fixed zoom level.
//!
//! One blocking request per tile, no retry and no cache. Fetching never
//! touches scene state.

use std::fmt;

use foundation::math::{TileCoord, tile_index};
use image::DynamicImage;
use tracing::{debug, warn};

pub const OSM_TILE_URL_TEMPLATE: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const DEFAULT_TILE_ZOOM: u8 = 2;

// Public tile servers reject requests without an identifying agent.
const USER_AGENT: &str = concat!("globe-viewer/", env!("CARGO_PKG_VERSION"));

#[derive(Debug)]
pub enum TileFetchError {
    Http(reqwest::Error),
    Decode(image::ImageError),
}

impl fmt::Display for TileFetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TileFetchError::Http(err) => write!(f, "tile request failed: {err}"),
            TileFetchError::Decode(err) => write!(f, "tile image decode failed: {err}"),
        }
    }
}

impl std::error::Error for TileFetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TileFetchError::Http(err) => Some(err),
            TileFetchError::Decode(err) => Some(err),
        }
    }
}

/// Anything that can produce the image for a tile.
pub trait TileSource {
    /// `Ok(None)` means the source has no image for `tile`.
    fn fetch(&self, tile: TileCoord) -> Result<Option<DynamicImage>, TileFetchError>;

    fn fetch_at(
        &self,
        lat_deg: f64,
        lon_deg: f64,
        zoom: u8,
    ) -> Result<Option<DynamicImage>, TileFetchError> {
        self.fetch(tile_index(lat_deg, lon_deg, zoom))
    }
}

/// Fill `{z}`, `{x}` and `{y}` in a URL template.
pub fn tile_url(template: &str, tile: TileCoord) -> String {
    template
        .replace("{z}", &tile.z.to_string())
        .replace("{x}", &tile.x.to_string())
        .replace("{y}", &tile.y.to_string())
}

#[derive(Debug, Clone)]
pub struct HttpTileSource {
    client: reqwest::blocking::Client,
    url_template: String,
}

impl HttpTileSource {
    pub fn new(url_template: impl Into<String>) -> Result<Self, TileFetchError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(TileFetchError::Http)?;
        Ok(Self {
            client,
            url_template: url_template.into(),
        })
    }

    pub fn url_template(&self) -> &str {
        &self.url_template
    }
}

impl TileSource for HttpTileSource {
    fn fetch(&self, tile: TileCoord) -> Result<Option<DynamicImage>, TileFetchError> {
        let url = tile_url(&self.url_template, tile);
        let resp = self.client.get(&url).send().map_err(TileFetchError::Http)?;

        let status = resp.status();
        if status != reqwest::StatusCode::OK {
            warn!(%url, %status, "no tile image available");
            return Ok(None);
        }

        let bytes = resp.bytes().map_err(TileFetchError::Http)?;
        let img = image::load_from_memory(&bytes).map_err(TileFetchError::Decode)?;
        debug!(%url, width = img.width(), height = img.height(), "fetched tile");
        Ok(Some(img))
    }
}

#[cfg(test)]
mod tests {
    use super::{OSM_TILE_URL_TEMPLATE, TileFetchError, TileSource, tile_url};
    use foundation::math::TileCoord;
    use image::{DynamicImage, RgbImage};
    use std::cell::RefCell;

    #[test]
    fn fills_all_placeholders() {
        let url = tile_url(OSM_TILE_URL_TEMPLATE, TileCoord::new(2, 0, 1));
        assert_eq!(url, "https://tile.openstreetmap.org/2/0/1.png");

        let url = tile_url("http://localhost/{z}-{x}-{y}/{z}", TileCoord::new(10, 163, 395));
        assert_eq!(url, "http://localhost/10-163-395/10");
    }

    #[test]
    fn template_without_placeholders_is_unchanged() {
        assert_eq!(
            tile_url("http://example.invalid/tile.png", TileCoord::new(1, 1, 1)),
            "http://example.invalid/tile.png"
        );
    }

    struct RecordingSource {
        requested: RefCell<Vec<TileCoord>>,
    }

    impl TileSource for RecordingSource {
        fn fetch(&self, tile: TileCoord) -> Result<Option<DynamicImage>, TileFetchError> {
            self.requested.borrow_mut().push(tile);
            if tile.x == 0 {
                Ok(Some(DynamicImage::ImageRgb8(RgbImage::new(4, 4))))
            } else {
                Ok(None)
            }
        }
    }

    #[test]
    fn fetch_at_resolves_the_tile_index() {
        let source = RecordingSource {
            requested: RefCell::new(Vec::new()),
        };
        let img = source.fetch_at(37.7749, -122.4194, 2).expect("fetch");
        assert!(img.is_some());
        assert!(source.fetch_at(37.7749, 122.4194, 2).expect("fetch").is_none());
        assert_eq!(
            source.requested.borrow().as_slice(),
            &[TileCoord::new(2, 0, 1), TileCoord::new(2, 3, 1)]
        );
    }
}
