//! The board - sole owner of the pill list and the pointer state.
//!
//! Pointer handlers live in [`crate::input`] as `impl Board` blocks; this file
//! holds the state itself and the read-only views handed to the renderer.

use crate::ids::{IdGenerator, UuidGenerator};
use crate::input::{GesturePhase, InputState};
use crate::profile_scope;
use crate::settings::Settings;
use crate::spatial_index::SpatialIndex;
use crate::types::{CanvasPoint, Pill, PillId, PreviewRect};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;
use tracing::debug;

pub struct Board {
    /// Pills in paint order (later pills draw on top)
    pub(crate) pills: Vec<Pill>,
    /// Last known pointer position
    pub(crate) cursor: CanvasPoint,
    /// Gesture in progress
    pub(crate) input_state: InputState,
    /// Hit-testing index over `pills`
    pub(crate) index: SpatialIndex,
    pub(crate) ids: Box<dyn IdGenerator>,
    pub(crate) rng: StdRng,
    pub(crate) settings: Settings,
}

impl Board {
    /// Empty board with random identifiers and colors.
    pub fn new(settings: Settings) -> Self {
        Self::with_generators(settings, Box::new(UuidGenerator), StdRng::from_entropy())
    }

    /// Empty board with caller-supplied identifier and color sources.
    pub fn with_generators(settings: Settings, ids: Box<dyn IdGenerator>, rng: StdRng) -> Self {
        Self {
            pills: Vec::new(),
            cursor: CanvasPoint::default(),
            input_state: InputState::default(),
            index: SpatialIndex::new(),
            ids,
            rng,
            settings,
        }
    }

    pub fn pills(&self) -> &[Pill] {
        &self.pills
    }

    pub fn get_pill(&self, id: PillId) -> Option<&Pill> {
        self.pills.iter().find(|p| p.id == id)
    }

    pub(crate) fn get_pill_mut(&mut self, id: PillId) -> Option<&mut Pill> {
        self.pills.iter_mut().find(|p| p.id == id)
    }

    /// Crosshair position.
    pub fn cursor(&self) -> CanvasPoint {
        self.cursor
    }

    pub fn input_state(&self) -> &InputState {
        &self.input_state
    }

    pub fn phase(&self) -> GesturePhase {
        self.input_state.phase(self.cursor, self.settings.click_threshold)
    }

    /// Rectangle the renderer should draw while a creation drag is active.
    pub fn preview(&self) -> Option<PreviewRect> {
        match self.input_state {
            InputState::CreatingPill { start, color } => Some(PreviewRect::spanning(
                start,
                self.cursor,
                color,
                self.settings.corner_radius,
            )),
            _ => None,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Swap thresholds. Takes effect at the next pointer event.
    pub fn set_settings(&mut self, settings: Settings) {
        debug!(?settings, "Board settings updated");
        self.settings = settings;
    }

    /// Topmost pill whose bounds (edges included) contain the point.
    pub fn hit_test(&self, x: f32, y: f32) -> Option<PillId> {
        profile_scope!("hit_test");

        let candidates: HashSet<PillId> = self.index.query_point(x, y).into_iter().collect();
        if candidates.is_empty() {
            return None;
        }

        self.pills
            .iter()
            .rev()
            .find(|pill| candidates.contains(&pill.id))
            .map(|pill| pill.id)
    }

    /// Install a new pill list wholesale and re-index it.
    pub(crate) fn replace_pills(&mut self, pills: Vec<Pill>) {
        self.index.rebuild(&pills);
        self.pills = pills;
    }

    pub(crate) fn push_pill(&mut self, pill: Pill) {
        self.index.insert(&pill);
        self.pills.push(pill);
    }

    /// Re-index a pill after its position changed.
    pub(crate) fn reindex_pill(&mut self, id: PillId) {
        if let Some(pill) = self.pills.iter().find(|p| p.id == id) {
            self.index.update(pill);
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
