use formats::{SceneRecord, SceneStorage, SceneStoreError};
use scene::{Camera, Scene};
use tracing::{debug, error, info};

use crate::controller::{Action, ControllerConfig, InteractionController};
use crate::event_bus::{Event, EventBus};
use crate::frame::Frame;
use crate::input::InputEvent;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionConfig {
    pub controller: ControllerConfig,
    pub initial_camera: Camera,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    Running,
    Quit,
}

/// Read-only snapshot handed to the renderer once per frame.
#[derive(Debug, Copy, Clone)]
pub struct SceneView<'a> {
    pub scene: &'a Scene,
    pub camera: &'a Camera,
    /// Coordinate text being typed, when text entry is active.
    pub entry: Option<&'a str>,
}

/// Single-threaded interaction loop around one scene.
///
/// The scene is loaded when the session opens and saved on every save
/// command plus once more in [`Session::finish`], whether or not anything
/// changed.
#[derive(Debug)]
pub struct Session<S: SceneStorage> {
    storage: S,
    scene: Scene,
    camera: Camera,
    controller: InteractionController,
    frame: Frame,
    events: EventBus,
    recent: Vec<Event>,
    quit: bool,
}

impl<S: SceneStorage> Session<S> {
    /// Loads the stored scene. A malformed store is fatal.
    pub fn open(storage: S, config: SessionConfig) -> Result<Self, SceneStoreError> {
        let scene = storage.load()?.into_scene();
        info!(
            markers = scene.markers().len(),
            routes = scene.routes().len(),
            "session opened"
        );
        Ok(Self {
            storage,
            scene,
            camera: config.initial_camera,
            controller: InteractionController::new(config.controller),
            frame: Frame::default(),
            events: EventBus::new(),
            recent: Vec::new(),
            quit: false,
        })
    }

    /// Handles one frame's worth of input in order.
    ///
    /// Processing stops at the first quit; events after it are dropped.
    /// Once quit has been seen, further ticks do nothing.
    pub fn tick(&mut self, input: impl IntoIterator<Item = InputEvent>) -> SessionStatus {
        if self.quit {
            return SessionStatus::Quit;
        }

        self.events.begin_frame(self.frame);
        for event in input {
            match self
                .controller
                .handle(event, &mut self.scene, &mut self.camera, &mut self.events)
            {
                Some(Action::Save) => {
                    // Fire-and-forget: a failed save is reported, never retried.
                    if let Err(err) = self.save_now() {
                        error!(%err, "save failed");
                    }
                }
                Some(Action::Quit) => {
                    self.quit = true;
                    break;
                }
                None => {}
            }
        }

        self.recent = self.events.drain();
        for event in &self.recent {
            debug!(
                frame = event.frame_index,
                kind = event.kind.as_str(),
                message = %event.message,
                "scene event"
            );
        }
        self.frame = self.frame.next();

        if self.quit {
            SessionStatus::Quit
        } else {
            SessionStatus::Running
        }
    }

    pub fn save_now(&mut self) -> Result<(), SceneStoreError> {
        self.storage.save(&SceneRecord::from_scene(&self.scene))
    }

    /// Final unconditional save. Returns the storage for inspection.
    pub fn finish(mut self) -> Result<S, SceneStoreError> {
        self.save_now()?;
        info!(frames = self.frame.index, "session finished");
        Ok(self.storage)
    }

    pub fn view(&self) -> SceneView<'_> {
        SceneView {
            scene: &self.scene,
            camera: &self.camera,
            entry: self.controller.entry_text(),
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn frame(&self) -> Frame {
        self.frame
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Events recorded during the most recent tick.
    pub fn recent_events(&self) -> &[Event] {
        &self.recent
    }

    pub fn is_quit(&self) -> bool {
        self.quit
    }
}
