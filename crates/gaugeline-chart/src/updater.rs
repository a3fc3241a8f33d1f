//! The seam between the pipeline and whatever animates or retains primitives.

use crate::layers::Layer;
use crate::layout::GaugeLayout;
use gaugeline_render::Primitive;

/// What one layer's updater receives on every chart run.
///
/// Primitive lists are regenerated from the gauge layouts on demand, so an
/// updater that only needs the start state never pays for the full list.
#[derive(Debug, Clone, Copy)]
pub struct LayerSource<'a> {
    layer: Layer,
    gauges: &'a [GaugeLayout],
}

impl<'a> LayerSource<'a> {
    pub fn new(layer: Layer, gauges: &'a [GaugeLayout]) -> Self {
        Self { layer, gauges }
    }

    pub fn layer(&self) -> Layer {
        self.layer
    }

    pub fn key(&self) -> &'static str {
        self.layer.key()
    }

    pub fn gauges(&self) -> &'a [GaugeLayout] {
        self.gauges
    }

    /// Primitives per gauge, in gauge order.
    pub fn graph_config_by_gauge(&self) -> Vec<Vec<Primitive>> {
        self.gauges
            .iter()
            .map(|gauge| self.layer.primitives(gauge))
            .collect()
    }

    /// Every gauge's primitives concatenated.
    pub fn graph_config(&self) -> Vec<Primitive> {
        self.gauges
            .iter()
            .flat_map(|gauge| self.layer.primitives(gauge))
            .collect()
    }

    /// Entrance-animation origin, for layers that have one.
    pub fn start_graph_config(&self) -> Option<Vec<Primitive>> {
        if !self.layer.has_start_state() {
            return None;
        }

        let mut primitives = Vec::new();
        for gauge in self.gauges {
            primitives.extend(self.layer.start_primitives(gauge)?);
        }
        Some(primitives)
    }
}

/// Receives a layer's data once per chart run.
///
/// Implementations own diffing, animation timing and any retained state.
pub trait Updater {
    fn update(&mut self, source: &LayerSource<'_>);
}

impl<U: Updater + ?Sized> Updater for Box<U> {
    fn update(&mut self, source: &LayerSource<'_>) {
        (**self).update(source)
    }
}

/// Keeps the latest primitives of one layer for immediate-mode drawing.
///
/// The start list is captured on the first update only, matching an
/// entrance animation that plays once.
#[derive(Debug, Clone, Default)]
pub struct RetainedUpdater {
    key: Option<&'static str>,
    current: Vec<Primitive>,
    start: Option<Vec<Primitive>>,
    updates: usize,
}

impl RetainedUpdater {
    pub fn new() -> Self {
        Self::default()
    }

    /// Layer key seen on the last update.
    pub fn key(&self) -> Option<&'static str> {
        self.key
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.current
    }

    pub fn start_primitives(&self) -> Option<&[Primitive]> {
        self.start.as_deref()
    }

    pub fn update_count(&self) -> usize {
        self.updates
    }
}

impl Updater for RetainedUpdater {
    fn update(&mut self, source: &LayerSource<'_>) {
        if self.updates == 0 {
            self.start = source.start_graph_config();
        }
        self.key = Some(source.key());
        self.current = source.graph_config();
        self.updates += 1;
    }
}
