//! Input state machine that edits the scene and steers the camera.
//!
//! Two modes:
//! - `Navigating`: drag rotates, scroll zooms, bound characters run commands.
//! - `TextEntry`: characters build a `"lat,lon"` buffer that becomes a marker
//!   on confirm.
//!
//! The controller performs no I/O. Saving and quitting are returned to the
//! caller as [`Action`]s.

use scene::{Camera, CameraLimits, DEFAULT_MARKER_COLOR, Scene};
use tracing::debug;

use crate::entry::parse_coordinate_pair;
use crate::event_bus::{EventBus, EventKind};
use crate::input::{Command, InputEvent, KeyBindings};

/// Zoom change per scroll step.
pub const DEFAULT_ZOOM_STEP: f64 = 0.3;

/// Camera degrees per dragged pixel.
pub const DEFAULT_DRAG_SENSITIVITY: f64 = 1.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ControllerConfig {
    pub zoom_step: f64,
    pub drag_sensitivity: f64,
    pub limits: CameraLimits,
    pub bindings: KeyBindings,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            zoom_step: DEFAULT_ZOOM_STEP,
            drag_sensitivity: DEFAULT_DRAG_SENSITIVITY,
            limits: CameraLimits::unbounded(),
            bindings: KeyBindings::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Navigating,
    TextEntry { buffer: String },
}

/// Side effects the driver loop must carry out.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Action {
    Save,
    Quit,
}

#[derive(Debug, Clone)]
pub struct InteractionController {
    config: ControllerConfig,
    mode: InputMode,
    pointer_down: bool,
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new(ControllerConfig::default())
    }
}

impl InteractionController {
    pub fn new(config: ControllerConfig) -> Self {
        Self {
            config,
            mode: InputMode::Navigating,
            pointer_down: false,
        }
    }

    pub fn mode(&self) -> &InputMode {
        &self.mode
    }

    pub fn is_entering_text(&self) -> bool {
        matches!(self.mode, InputMode::TextEntry { .. })
    }

    /// Text typed so far, while in text entry.
    pub fn entry_text(&self) -> Option<&str> {
        match &self.mode {
            InputMode::TextEntry { buffer } => Some(buffer.as_str()),
            InputMode::Navigating => None,
        }
    }

    pub fn handle(
        &mut self,
        event: InputEvent,
        scene: &mut Scene,
        camera: &mut Camera,
        events: &mut EventBus,
    ) -> Option<Action> {
        match event {
            InputEvent::Quit => {
                events.emit(EventKind::QuitRequested, "quit");
                return Some(Action::Quit);
            }
            // Camera input is honored in both modes.
            InputEvent::PointerDown => self.pointer_down = true,
            InputEvent::PointerUp => self.pointer_down = false,
            InputEvent::PointerDrag { dx, dy } => {
                if self.pointer_down {
                    let k = self.config.drag_sensitivity;
                    camera.rotate(dx * k, dy * k, &self.config.limits);
                }
            }
            InputEvent::ScrollUp => camera.zoom_by(self.config.zoom_step, &self.config.limits),
            InputEvent::ScrollDown => camera.zoom_by(-self.config.zoom_step, &self.config.limits),
            InputEvent::Char(c) => return self.on_char(c, scene, events),
            InputEvent::Backspace => {
                if let InputMode::TextEntry { buffer } = &mut self.mode {
                    buffer.pop();
                }
            }
            InputEvent::Confirm => self.on_confirm(scene, events),
        }
        None
    }

    fn on_char(&mut self, c: char, scene: &mut Scene, events: &mut EventBus) -> Option<Action> {
        if let InputMode::TextEntry { buffer } = &mut self.mode {
            if !c.is_control() {
                buffer.push(c);
            }
            return None;
        }

        let command = self.config.bindings.command_for(c)?;
        self.run_command(command, scene, events)
    }

    fn run_command(
        &mut self,
        command: Command,
        scene: &mut Scene,
        events: &mut EventBus,
    ) -> Option<Action> {
        match command {
            Command::EnterCoordinate => {
                self.mode = InputMode::TextEntry {
                    buffer: String::new(),
                };
                events.emit(EventKind::EntryStarted, "coordinate entry");
            }
            Command::Save => {
                events.emit(EventKind::SaveRequested, "save");
                return Some(Action::Save);
            }
            Command::CommitRoute => {
                if let Some(route) = scene.commit_current_route() {
                    events.emit(
                        EventKind::RouteCommitted,
                        format!("{} points", route.markers.len()),
                    );
                }
            }
            Command::MarkTree => {
                if let Some(tree) = scene.add_tree() {
                    events.emit(EventKind::AnnotationAdded, format!("tree at {:?}", tree.at));
                }
            }
            Command::MarkGrass => {
                if let Some(grass) = scene.add_grass() {
                    events.emit(EventKind::AnnotationAdded, format!("grass at {:?}", grass.at));
                }
            }
            Command::MarkBuilding => {
                if let Some(building) = scene.add_building(None) {
                    events.emit(
                        EventKind::AnnotationAdded,
                        format!("building at {:?}", building.at),
                    );
                }
            }
        }
        None
    }

    /// Leaves text entry whether or not the buffer parses.
    fn on_confirm(&mut self, scene: &mut Scene, events: &mut EventBus) {
        let InputMode::TextEntry { buffer } =
            std::mem::replace(&mut self.mode, InputMode::Navigating)
        else {
            return;
        };

        match parse_coordinate_pair(&buffer) {
            Ok(at) => {
                let marker = scene.add_marker(at, DEFAULT_MARKER_COLOR);
                scene.append_to_current_route(marker);
                events.emit(EventKind::MarkerAdded, format!("{at:?}"));
            }
            Err(err) => {
                debug!(input = %buffer, %err, "discarding coordinate entry");
                events.emit(EventKind::EntryDiscarded, format!("{buffer:?}: {err}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Action, ControllerConfig, InputMode, InteractionController};
    use crate::event_bus::{EventBus, EventKind};
    use crate::input::InputEvent;
    use foundation::math::Coordinate;
    use scene::{Camera, CameraLimits, DEFAULT_BUILDING_HEIGHT, Scene};

    struct Harness {
        controller: InteractionController,
        scene: Scene,
        camera: Camera,
        events: EventBus,
    }

    impl Harness {
        fn new() -> Self {
            Self::with_config(ControllerConfig::default())
        }

        fn with_config(config: ControllerConfig) -> Self {
            Self {
                controller: InteractionController::new(config),
                scene: Scene::new(),
                camera: Camera::default(),
                events: EventBus::new(),
            }
        }

        fn send(&mut self, event: InputEvent) -> Option<Action> {
            self.controller
                .handle(event, &mut self.scene, &mut self.camera, &mut self.events)
        }

        fn type_text(&mut self, text: &str) {
            for c in text.chars() {
                self.send(InputEvent::Char(c));
            }
        }

        fn enter_coordinate(&mut self, text: &str) {
            self.send(InputEvent::Char('f'));
            self.type_text(text);
            self.send(InputEvent::Confirm);
        }

        fn kinds(&self) -> Vec<EventKind> {
            self.events.events().iter().map(|e| e.kind).collect()
        }
    }

    #[test]
    fn starts_navigating() {
        let h = Harness::new();
        assert_eq!(h.controller.mode(), &InputMode::Navigating);
        assert_eq!(h.controller.entry_text(), None);
    }

    #[test]
    fn entry_key_switches_to_empty_text_entry() {
        let mut h = Harness::new();
        h.send(InputEvent::Char('f'));
        assert!(h.controller.is_entering_text());
        assert_eq!(h.controller.entry_text(), Some(""));
    }

    #[test]
    fn valid_entry_adds_marker_to_scene_and_route() {
        let mut h = Harness::new();
        h.enter_coordinate("37.7749,-122.4194");

        let at = Coordinate::new(37.7749, -122.4194);
        assert_eq!(h.scene.markers().len(), 1);
        assert_eq!(h.scene.markers()[0].at, at);
        assert_eq!(h.scene.current_route().len(), 1);
        assert_eq!(h.scene.current_route()[0].at, at);
        assert_eq!(h.controller.mode(), &InputMode::Navigating);
        assert_eq!(h.kinds(), [EventKind::EntryStarted, EventKind::MarkerAdded]);
    }

    #[test]
    fn malformed_entry_is_discarded() {
        let mut h = Harness::new();
        h.enter_coordinate("not,a,number");

        assert!(h.scene.markers().is_empty());
        assert!(h.scene.current_route().is_empty());
        assert_eq!(h.controller.mode(), &InputMode::Navigating);
        assert_eq!(
            h.kinds(),
            [EventKind::EntryStarted, EventKind::EntryDiscarded]
        );

        // The buffer is fresh on the next entry.
        h.send(InputEvent::Char('f'));
        assert_eq!(h.controller.entry_text(), Some(""));
    }

    #[test]
    fn non_finite_entry_is_discarded() {
        let mut h = Harness::new();
        h.enter_coordinate("1e400,0");
        h.enter_coordinate("nan,0");

        assert!(h.scene.markers().is_empty());
        assert!(h.scene.current_route().is_empty());
        assert_eq!(
            h.kinds(),
            [
                EventKind::EntryStarted,
                EventKind::EntryDiscarded,
                EventKind::EntryStarted,
                EventKind::EntryDiscarded,
            ]
        );
    }

    #[test]
    fn backspace_edits_the_buffer() {
        let mut h = Harness::new();
        h.send(InputEvent::Char('f'));
        h.type_text("10,200");
        h.send(InputEvent::Backspace);
        assert_eq!(h.controller.entry_text(), Some("10,20"));
        h.send(InputEvent::Confirm);
        assert_eq!(h.scene.markers()[0].at, Coordinate::new(10.0, 20.0));
    }

    #[test]
    fn backspace_on_empty_buffer_is_harmless() {
        let mut h = Harness::new();
        h.send(InputEvent::Char('f'));
        h.send(InputEvent::Backspace);
        assert_eq!(h.controller.entry_text(), Some(""));
    }

    #[test]
    fn command_keys_are_typed_during_entry() {
        let mut h = Harness::new();
        h.send(InputEvent::Char('f'));
        assert_eq!(h.send(InputEvent::Char('s')), None);
        h.type_text("rtgb");
        assert_eq!(h.controller.entry_text(), Some("srtgb"));
        assert!(h.scene.is_empty());
    }

    #[test]
    fn save_key_requests_save_only_when_navigating() {
        let mut h = Harness::new();
        assert_eq!(h.send(InputEvent::Char('s')), Some(Action::Save));
        assert_eq!(h.send(InputEvent::Char('x')), None);
    }

    #[test]
    fn quit_is_reported_in_any_mode() {
        let mut h = Harness::new();
        assert_eq!(h.send(InputEvent::Quit), Some(Action::Quit));
        h.send(InputEvent::Char('f'));
        assert_eq!(h.send(InputEvent::Quit), Some(Action::Quit));
    }

    #[test]
    fn commit_route_needs_two_points() {
        let mut h = Harness::new();
        h.enter_coordinate("1,1");
        h.send(InputEvent::Char('r'));
        assert!(h.scene.routes().is_empty());
        assert_eq!(h.scene.current_route().len(), 1);

        h.enter_coordinate("2,2");
        h.send(InputEvent::Char('r'));
        assert_eq!(h.scene.routes().len(), 1);
        assert_eq!(h.scene.routes()[0].markers.len(), 2);
        assert!(h.scene.current_route().is_empty());
        assert_eq!(h.scene.markers().len(), 2);
    }

    #[test]
    fn mark_tree_with_empty_route_is_ignored() {
        let mut h = Harness::new();
        h.send(InputEvent::Char('t'));
        h.send(InputEvent::Char('g'));
        h.send(InputEvent::Char('b'));
        assert!(h.scene.trees().is_empty());
        assert!(h.scene.grass().is_empty());
        assert!(h.scene.buildings().is_empty());
        assert!(h.events.events().is_empty());
    }

    #[test]
    fn annotations_land_on_last_entered_point() {
        let mut h = Harness::new();
        h.enter_coordinate("1,1");
        h.enter_coordinate("-12.5,130.8");
        h.send(InputEvent::Char('t'));
        h.send(InputEvent::Char('g'));
        h.send(InputEvent::Char('b'));

        let anchor = Coordinate::new(-12.5, 130.8);
        assert_eq!(h.scene.trees()[0].at, anchor);
        assert_eq!(h.scene.grass()[0].at, anchor);
        assert_eq!(h.scene.buildings()[0].at, anchor);
        assert_eq!(h.scene.buildings()[0].height, DEFAULT_BUILDING_HEIGHT);
    }

    #[test]
    fn drag_rotates_only_while_pointer_is_down() {
        let mut h = Harness::new();
        h.send(InputEvent::PointerDrag { dx: 5.0, dy: 5.0 });
        assert_eq!(h.camera, Camera::default());

        h.send(InputEvent::PointerDown);
        h.send(InputEvent::PointerDrag { dx: 30.0, dy: -12.0 });
        h.send(InputEvent::PointerDrag { dx: 400.0, dy: 200.0 });
        h.send(InputEvent::PointerUp);
        h.send(InputEvent::PointerDrag { dx: 1.0, dy: 1.0 });

        assert_eq!(h.camera.yaw_deg, 430.0);
        assert_eq!(h.camera.pitch_deg, 188.0);
    }

    #[test]
    fn scroll_steps_zoom_without_bounds() {
        let mut h = Harness::new();
        let start = h.camera.zoom;
        for _ in 0..50 {
            h.send(InputEvent::ScrollDown);
        }
        assert!((h.camera.zoom - (start - 15.0)).abs() < 1e-9);
        h.send(InputEvent::ScrollUp);
        assert!((h.camera.zoom - (start - 14.7)).abs() < 1e-9);
    }

    #[test]
    fn configured_limits_clamp_camera() {
        let mut h = Harness::with_config(ControllerConfig {
            limits: CameraLimits {
                pitch_deg: Some((-90.0, 90.0)),
                zoom: Some((-10.0, -3.0)),
            },
            ..ControllerConfig::default()
        });
        h.send(InputEvent::PointerDown);
        h.send(InputEvent::PointerDrag { dx: 0.0, dy: 500.0 });
        for _ in 0..100 {
            h.send(InputEvent::ScrollUp);
        }
        assert_eq!(h.camera.pitch_deg, 90.0);
        assert_eq!(h.camera.zoom, -3.0);
    }

    #[test]
    fn camera_moves_during_text_entry() {
        let mut h = Harness::new();
        h.send(InputEvent::Char('f'));
        h.send(InputEvent::ScrollUp);
        assert!(h.controller.is_entering_text());
        assert!(h.camera.zoom > Camera::default().zoom);
    }
}
