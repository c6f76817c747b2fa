use crate::components::{Building, Color, DEFAULT_BUILDING_HEIGHT, Grass, Marker, Route, Tree};
use foundation::math::Coordinate;

/// Markers, routes and surface annotations placed on the globe.
///
/// The model is append-only: nothing is ever removed or looked up by
/// identity, entities are only iterated for drawing and persistence.
/// Annotation helpers are anchored at the last marker of the in-progress
/// route ("wherever the user just pointed").
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Scene {
    markers: Vec<Marker>,
    routes: Vec<Route>,
    trees: Vec<Tree>,
    grass: Vec<Grass>,
    buildings: Vec<Building>,
    current_route: Vec<Marker>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_marker(&mut self, at: Coordinate, color: Color) -> Marker {
        let marker = Marker::new(at, color);
        self.markers.push(marker);
        marker
    }

    pub fn append_to_current_route(&mut self, marker: Marker) {
        self.current_route.push(marker);
    }

    /// Moves the current route into the route collection.
    ///
    /// Returns `None` and leaves the current route untouched when it has
    /// fewer than two markers.
    pub fn commit_current_route(&mut self) -> Option<Route> {
        if self.current_route.len() < 2 {
            return None;
        }
        let route = Route::with_default_color(std::mem::take(&mut self.current_route));
        self.routes.push(route.clone());
        Some(route)
    }

    pub fn add_tree(&mut self) -> Option<Tree> {
        let tree = Tree::new(self.anchor()?);
        self.trees.push(tree);
        Some(tree)
    }

    pub fn add_grass(&mut self) -> Option<Grass> {
        let grass = Grass::new(self.anchor()?);
        self.grass.push(grass);
        Some(grass)
    }

    /// `None` height uses [`DEFAULT_BUILDING_HEIGHT`].
    pub fn add_building(&mut self, height: Option<f64>) -> Option<Building> {
        let building = Building::new(self.anchor()?, height.unwrap_or(DEFAULT_BUILDING_HEIGHT));
        self.buildings.push(building);
        Some(building)
    }

    pub fn push_marker(&mut self, marker: Marker) {
        self.markers.push(marker);
    }

    pub fn push_route(&mut self, route: Route) {
        self.routes.push(route);
    }

    pub fn push_tree(&mut self, tree: Tree) {
        self.trees.push(tree);
    }

    pub fn push_grass(&mut self, grass: Grass) {
        self.grass.push(grass);
    }

    pub fn push_building(&mut self, building: Building) {
        self.buildings.push(building);
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn trees(&self) -> &[Tree] {
        &self.trees
    }

    pub fn grass(&self) -> &[Grass] {
        &self.grass
    }

    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    pub fn current_route(&self) -> &[Marker] {
        &self.current_route
    }

    /// True when no committed entity exists. The current route is ignored.
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
            && self.routes.is_empty()
            && self.trees.is_empty()
            && self.grass.is_empty()
            && self.buildings.is_empty()
    }

    fn anchor(&self) -> Option<Coordinate> {
        self.current_route.last().map(|m| m.at)
    }
}
