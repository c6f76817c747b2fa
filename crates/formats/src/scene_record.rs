use foundation::math::Coordinate;
use scene::{Building, DEFAULT_BUILDING_HEIGHT, Grass, Marker, Route, Scene, Tree};
use serde::{Deserialize, Serialize};

/// On-disk shape of a saved scene.
///
/// All five collections are always written; any of them may be absent on
/// read and then defaults to empty. Colors are not part of the format, so
/// markers and routes come back with their default colors.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SceneRecord {
    #[serde(default)]
    pub markers: Vec<PointRecord>,
    #[serde(default)]
    pub routes: Vec<Vec<PointRecord>>,
    #[serde(default)]
    pub trees: Vec<PointRecord>,
    #[serde(default)]
    pub grass: Vec<PointRecord>,
    #[serde(default)]
    pub buildings: Vec<BuildingRecord>,
}

#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq)]
pub struct PointRecord {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq)]
pub struct BuildingRecord {
    pub lat: f64,
    pub lon: f64,
    #[serde(default = "default_building_height")]
    pub height: f64,
}

fn default_building_height() -> f64 {
    DEFAULT_BUILDING_HEIGHT
}

impl PointRecord {
    fn from_coordinate(at: Coordinate) -> Self {
        Self {
            lat: at.lat_deg,
            lon: at.lon_deg,
        }
    }

    fn coordinate(self) -> Coordinate {
        Coordinate::new(self.lat, self.lon)
    }
}

impl SceneRecord {
    /// Snapshot the committed contents of `scene`. The current route is
    /// transient and not saved.
    pub fn from_scene(scene: &Scene) -> Self {
        let point = |m: &Marker| PointRecord::from_coordinate(m.at);
        Self {
            markers: scene.markers().iter().map(point).collect(),
            routes: scene
                .routes()
                .iter()
                .map(|r| r.markers.iter().map(point).collect())
                .collect(),
            trees: scene
                .trees()
                .iter()
                .map(|t| PointRecord::from_coordinate(t.at))
                .collect(),
            grass: scene
                .grass()
                .iter()
                .map(|g| PointRecord::from_coordinate(g.at))
                .collect(),
            buildings: scene
                .buildings()
                .iter()
                .map(|b| BuildingRecord {
                    lat: b.at.lat_deg,
                    lon: b.at.lon_deg,
                    height: b.height,
                })
                .collect(),
        }
    }

    pub fn into_scene(self) -> Scene {
        let mut scene = Scene::new();
        for p in self.markers {
            scene.push_marker(Marker::with_default_color(p.coordinate()));
        }
        for r in self.routes {
            let markers = r
                .into_iter()
                .map(|p| Marker::with_default_color(p.coordinate()))
                .collect();
            scene.push_route(Route::with_default_color(markers));
        }
        for p in self.trees {
            scene.push_tree(Tree::new(p.coordinate()));
        }
        for p in self.grass {
            scene.push_grass(Grass::new(p.coordinate()));
        }
        for b in self.buildings {
            scene.push_building(Building::new(Coordinate::new(b.lat, b.lon), b.height));
        }
        scene
    }

    pub fn entity_count(&self) -> usize {
        self.markers.len()
            + self.routes.len()
            + self.trees.len()
            + self.grass.len()
            + self.buildings.len()
    }
}
