use geo::{Area, Geometry, MultiPolygon, Polygon};
use geojson::{feature::Id, GeoJson};

use crate::{Error, Result};

// Island speckle below this share of a country's largest polygon is dropped
// so the terminal canvas stays legible at low resolution.
const MIN_AREA_SHARE: f64 = 0.20;

/// One geometry feature: its numeric country identifier (if any) and its
/// outline. Features without an identifier can still be drawn, but never
/// correlate to a dataset record.
#[derive(Debug, Clone)]
pub struct WorldFeature {
    pub id: Option<u64>,
    pub polygons: MultiPolygon<f64>,
}

/// Parsed world-geometry document plus its coordinate bounds.
#[derive(Debug, Clone)]
pub struct WorldGeometry {
    pub features: Vec<WorldFeature>,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
}

/// Parse a GeoJSON FeatureCollection into drawable features.
pub fn parse_world_geometry(raw: &str) -> Result<WorldGeometry> {
    let geojson: GeoJson = raw
        .parse()
        .map_err(|e| Error::Geometry(format!("not a GeoJSON document: {}", e)))?;

    let GeoJson::FeatureCollection(collection) = geojson else {
        return Err(Error::Geometry(
            "expected a FeatureCollection at the document root".to_string(),
        ));
    };

    let mut features = Vec::new();
    for feature in collection.features {
        let id = numeric_id(&feature);

        let Some(geometry) = feature.geometry else {
            continue;
        };
        let geometry: Geometry<f64> = geometry
            .value
            .try_into()
            .map_err(|e| Error::Geometry(format!("unsupported feature geometry: {}", e)))?;

        let polygons = match geometry {
            Geometry::Polygon(polygon) => polygon.into(),
            Geometry::MultiPolygon(multi) => multi,
            _ => continue,
        };

        features.push(WorldFeature {
            id,
            polygons: drop_speckle(polygons),
        });
    }

    if features.is_empty() {
        return Err(Error::Geometry(
            "geometry document contains no polygon features".to_string(),
        ));
    }

    let (x_bounds, y_bounds) = bounds(&features);
    Ok(WorldGeometry {
        features,
        x_bounds,
        y_bounds,
    })
}

/// Fetch and parse the remote world-geometry document. Called at most once
/// per successful load; the cache below guards re-entry.
pub fn fetch_world_geometry(url: &str) -> Result<WorldGeometry> {
    let response = reqwest::blocking::get(url)?.error_for_status()?;
    let body = response.text()?;
    parse_world_geometry(&body)
}

/// Extract the numeric country identifier from a feature. The id member is
/// preferred; documents that key by properties (`iso_n3`, `id`) are accepted
/// as well, including numeric strings.
fn numeric_id(feature: &geojson::Feature) -> Option<u64> {
    match &feature.id {
        Some(Id::Number(n)) => return n.as_u64(),
        Some(Id::String(s)) => {
            if let Ok(n) = s.parse::<u64>() {
                return Some(n);
            }
        }
        None => {}
    }

    let properties = feature.properties.as_ref()?;
    for key in ["iso_n3", "ISO_N3", "id"] {
        if let Some(value) = properties.get(key) {
            if let Some(n) = value.as_u64() {
                return Some(n);
            }
            if let Some(n) = value.as_str().and_then(|s| s.parse::<u64>().ok()) {
                return Some(n);
            }
        }
    }
    None
}

fn drop_speckle(multi: MultiPolygon<f64>) -> MultiPolygon<f64> {
    if multi.0.len() <= 1 {
        return multi;
    }

    let areas: Vec<f64> = multi.0.iter().map(Polygon::unsigned_area).collect();
    let max_area = areas.iter().cloned().fold(0.0_f64, f64::max);
    let threshold = max_area * MIN_AREA_SHARE;

    let kept: Vec<Polygon<f64>> = multi
        .0
        .into_iter()
        .zip(areas)
        .filter(|(_, area)| *area >= threshold)
        .map(|(polygon, _)| polygon)
        .collect();

    MultiPolygon(kept)
}

fn bounds(features: &[WorldFeature]) -> ([f64; 2], [f64; 2]) {
    let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
    let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    for feature in features {
        for polygon in &feature.polygons.0 {
            for coord in polygon
                .exterior()
                .0
                .iter()
                .chain(polygon.interiors().iter().flat_map(|ring| ring.0.iter()))
            {
                min_x = min_x.min(coord.x);
                min_y = min_y.min(coord.y);
                max_x = max_x.max(coord.x);
                max_y = max_y.max(coord.y);
            }
        }
    }
    ([min_x, max_x], [min_y, max_y])
}

/// Load-once cache for the world geometry.
///
/// Transition rules:
/// - `Unloaded -> Loading` when the map view is activated.
/// - `Loading -> Loaded` on a successful fetch+parse.
/// - `Loading -> Failed` on any fetch or parse error.
/// - `Failed -> Loading` on the next map activation, which retries.
/// - `Loaded` is terminal; activations reuse the document and skip I/O.
#[derive(Debug, Default)]
pub enum GeometryCache {
    #[default]
    Unloaded,
    Loading,
    Loaded(WorldGeometry),
    Failed(String),
}

impl GeometryCache {
    /// Called on every map activation. Returns true when the caller should
    /// start a fetch; moves Unloaded/Failed into Loading.
    pub fn request_load(&mut self) -> bool {
        match self {
            Self::Unloaded | Self::Failed(_) => {
                *self = Self::Loading;
                true
            }
            Self::Loading | Self::Loaded(_) => false,
        }
    }

    /// Apply a finished fetch. A result arriving in any state other than
    /// Loading is ignored (the session may have been reset meanwhile).
    pub fn complete(&mut self, result: Result<WorldGeometry>) {
        if !matches!(self, Self::Loading) {
            return;
        }
        *self = match result {
            Ok(geometry) => Self::Loaded(geometry),
            Err(err) => Self::Failed(err.to_string()),
        };
    }

    pub fn geometry(&self) -> Option<&WorldGeometry> {
        match self {
            Self::Loaded(geometry) => Some(geometry),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}
