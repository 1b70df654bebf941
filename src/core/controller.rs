// Named event subscriptions over a `SceneState`.
//
// The browser wiring only translates DOM events into `SceneEvent`s and
// dispatches them here; tests drive the same path without a document.

use fnv::FnvHashMap;
use smallvec::SmallVec;

use super::camera::Viewport;
use super::scene::SceneState;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SceneEvent {
    Scroll { offset: f32 },
    Resize(Viewport),
    IntroComplete,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Scroll,
    Resize,
    IntroComplete,
}

impl SceneEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            SceneEvent::Scroll { .. } => EventKind::Scroll,
            SceneEvent::Resize(_) => EventKind::Resize,
            SceneEvent::IntroComplete => EventKind::IntroComplete,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

pub type SceneHandler = Box<dyn FnMut(&SceneEvent, &mut SceneState)>;

#[derive(Default)]
pub struct SceneController {
    handlers: FnvHashMap<EventKind, SmallVec<[(SubscriptionId, SceneHandler); 4]>>,
    next_id: u64,
}

impl SceneController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Controller with the animator's own scroll, resize and intro handlers.
    pub fn with_scene_handlers() -> Self {
        let mut controller = Self::new();
        controller.subscribe(EventKind::Scroll, |ev, state| {
            if let SceneEvent::Scroll { offset } = ev {
                state.on_scroll(*offset);
            }
        });
        controller.subscribe(EventKind::Resize, |ev, state| {
            if let SceneEvent::Resize(viewport) = ev {
                state.on_resize(*viewport);
            }
        });
        controller.subscribe(EventKind::IntroComplete, |_, state| {
            state.complete_intro();
        });
        controller
    }

    pub fn subscribe(
        &mut self,
        kind: EventKind,
        handler: impl FnMut(&SceneEvent, &mut SceneState) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.handlers
            .entry(kind)
            .or_default()
            .push((id, Box::new(handler)));
        id
    }

    /// Remove a subscription. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        for list in self.handlers.values_mut() {
            if let Some(pos) = list.iter().position(|(sid, _)| *sid == id) {
                list.remove(pos);
                return true;
            }
        }
        false
    }

    pub fn clear(&mut self) {
        self.handlers.clear();
    }

    pub fn subscriber_count(&self, kind: EventKind) -> usize {
        self.handlers.get(&kind).map_or(0, |l| l.len())
    }

    /// Run every handler for the event's kind in subscription order and
    /// return how many ran.
    pub fn dispatch(&mut self, event: &SceneEvent, state: &mut SceneState) -> usize {
        match self.handlers.get_mut(&event.kind()) {
            Some(list) => {
                for (_, handler) in list.iter_mut() {
                    handler(event, state);
                }
                list.len()
            }
            None => 0,
        }
    }
}
