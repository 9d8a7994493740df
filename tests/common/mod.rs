#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use glam::{DVec2, Mat4};

use gradient_showcase::blobs::{BlobPose, BlobSurface};
use gradient_showcase::driver::{AnimationHandle, FrameScheduler};
use gradient_showcase::error::FrameError;
use gradient_showcase::input::{EventKind, EventSink, EventSource, InputEvent, Viewport};
use gradient_showcase::plane::ShaderBackend;
use gradient_showcase::resource::RenderBackend;
use gradient_showcase::uniforms::UniformSet;

#[derive(Default, Debug)]
pub struct FrameLog {
    pub next_id: i32,
    pub requested: Vec<i32>,
    pub cancelled: Vec<i32>,
    pub refuse: bool,
}

/// Scheduler whose frames only fire when the test calls `tick`.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    pub log: Rc<RefCell<FrameLog>>,
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> Result<AnimationHandle, FrameError> {
        let mut log = self.log.borrow_mut();
        if log.refuse {
            return Err(FrameError::Platform("scheduler refused".into()));
        }
        log.next_id += 1;
        let id = log.next_id;
        log.requested.push(id);
        Ok(AnimationHandle::from_raw(id))
    }

    fn cancel_frame(&mut self, handle: AnimationHandle) {
        self.log.borrow_mut().cancelled.push(handle.raw());
    }
}

#[derive(Default)]
pub struct ListenerLog {
    next_id: u32,
    pub live: Vec<(u32, EventKind, EventSink)>,
    pub added: u32,
    pub removed: u32,
    pub refuse: Option<EventKind>,
}

/// In-memory window: records listeners and dispatches synthetic events.
#[derive(Clone, Default)]
pub struct ManualEvents {
    pub log: Rc<RefCell<ListenerLog>>,
}

impl ManualEvents {
    pub fn dispatch(&self, event: InputEvent) {
        let sinks: Vec<EventSink> = self
            .log
            .borrow()
            .live
            .iter()
            .filter(|(_, kind, _)| *kind == event.kind())
            .map(|(_, _, sink)| sink.clone())
            .collect();
        for sink in sinks {
            (*sink)(&event);
        }
    }

    pub fn live_count(&self) -> usize {
        self.log.borrow().live.len()
    }
}

impl EventSource for ManualEvents {
    type Subscription = u32;

    fn subscribe(&mut self, kind: EventKind, sink: EventSink) -> Result<u32, FrameError> {
        let mut log = self.log.borrow_mut();
        if log.refuse == Some(kind) {
            return Err(FrameError::Platform(format!("{} refused", kind.dom_name())));
        }
        log.next_id += 1;
        let id = log.next_id;
        log.live.push((id, kind, sink));
        log.added += 1;
        Ok(id)
    }

    fn unsubscribe(&mut self, subscription: u32) {
        let mut log = self.log.borrow_mut();
        log.live.retain(|(id, _, _)| *id != subscription);
        log.removed += 1;
    }
}

#[derive(Default, Debug)]
pub struct BackendLog {
    pub geometries: u32,
    pub materials: u32,
    pub geometries_released: Vec<u32>,
    pub materials_released: Vec<u32>,
    pub contexts_released: u32,
    pub detached: u32,
    pub resizes: Vec<Viewport>,
    pub frames: u32,
    pub draws: u32,
    pub fail_material_at: Option<u32>,
}

/// Render backend that hands out numbered resources and counts releases.
#[derive(Clone, Default)]
pub struct CountingBackend {
    pub log: Rc<RefCell<BackendLog>>,
    size: Viewport,
}

impl RenderBackend for CountingBackend {
    type Geometry = u32;
    type Material = u32;

    fn create_geometry(&mut self, _radius: f32) -> Result<u32, FrameError> {
        let mut log = self.log.borrow_mut();
        log.geometries += 1;
        Ok(log.geometries)
    }

    fn create_material(&mut self, _color: [f32; 3]) -> Result<u32, FrameError> {
        let mut log = self.log.borrow_mut();
        if log.fail_material_at == Some(log.materials) {
            return Err(FrameError::Unavailable("material".into()));
        }
        log.materials += 1;
        Ok(log.materials)
    }

    fn resize(&mut self, viewport: Viewport) {
        self.size = viewport;
        self.log.borrow_mut().resizes.push(viewport);
    }

    fn output_size(&self) -> Viewport {
        self.size
    }

    fn begin_frame(&mut self) {
        self.log.borrow_mut().frames += 1;
    }

    fn draw(&mut self, _geometry: &u32, _material: &u32, _transform: &Mat4, _model: &Mat4) {
        self.log.borrow_mut().draws += 1;
    }

    fn release_geometry(&mut self, geometry: u32) {
        self.log.borrow_mut().geometries_released.push(geometry);
    }

    fn release_material(&mut self, material: u32) {
        self.log.borrow_mut().materials_released.push(material);
    }

    fn release_context(&mut self) {
        self.log.borrow_mut().contexts_released += 1;
    }

    fn detach_surface(&mut self) {
        self.log.borrow_mut().detached += 1;
    }
}

#[derive(Default, Debug)]
pub struct ShaderLog {
    pub resizes: Vec<Viewport>,
    /// `(time, resolution)` as uploaded on each draw.
    pub draws: Vec<(f32, [f32; 2])>,
    pub releases: u32,
}

#[derive(Clone, Default)]
pub struct RecordingShader {
    pub log: Rc<RefCell<ShaderLog>>,
}

impl ShaderBackend for RecordingShader {
    fn resize(&mut self, viewport: Viewport) {
        self.log.borrow_mut().resizes.push(viewport);
    }

    fn draw(&mut self, uniforms: &UniformSet) {
        self.log.borrow_mut().draws.push((uniforms.time, uniforms.resolution));
    }

    fn release(&mut self) {
        self.log.borrow_mut().releases += 1;
    }
}

#[derive(Default, Debug)]
pub struct BlobLog {
    pub placed: Vec<(usize, BlobPose)>,
    pub follower: Vec<DVec2>,
    pub releases: u32,
}

#[derive(Clone, Default)]
pub struct RecordingBlobs {
    pub log: Rc<RefCell<BlobLog>>,
}

impl BlobSurface for RecordingBlobs {
    fn place(&mut self, index: usize, pose: BlobPose) {
        self.log.borrow_mut().placed.push((index, pose));
    }

    fn follow(&mut self, position: DVec2) {
        self.log.borrow_mut().follower.push(position);
    }

    fn release(&mut self) {
        self.log.borrow_mut().releases += 1;
    }
}
