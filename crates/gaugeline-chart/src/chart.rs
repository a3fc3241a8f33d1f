//! The gauge chart orchestrator.

use crate::error::ConfigResult;
use crate::layers::Layer;
use crate::layout::{GaugeLayout, layout_gauges};
use crate::options::GaugeOptions;
use crate::updater::{LayerSource, RetainedUpdater, Updater};
use gaugeline_core::Area;
use gaugeline_core::alloc::HashMap;
use gaugeline_core::profiling::profile_function;
use gaugeline_render::Primitive;

/// Builds one updater per layer the first time the layer is processed.
pub trait UpdaterFactory<U> {
    fn create(&mut self, layer: Layer) -> U;
}

impl<U, F: FnMut(Layer) -> U> UpdaterFactory<U> for F {
    fn create(&mut self, layer: Layer) -> U {
        self(layer)
    }
}

/// Runs the gauge pipeline and forwards each layer to its updater.
///
/// Updaters are created lazily and kept for the chart's lifetime, so later
/// runs reach the same updater per layer key.
///
/// # Example
///
/// ```
/// use gaugeline_chart::*;
/// use gaugeline_core::Area;
///
/// let mut chart = GaugeChart::new(Area::new(400.0, 300.0));
/// chart
///     .set_option(&GaugeOptions::new().with_series(
///         GaugeSeriesOptions::new().with_datum(DatumOptions::new("cpu", 40.0)),
///     ))
///     .unwrap();
///
/// let arcs = chart.updater(Layer::Arc).unwrap();
/// assert_eq!(arcs.primitives().len(), 1);
/// ```
pub struct GaugeChart<U = RetainedUpdater> {
    area: Area,
    factory: Box<dyn UpdaterFactory<U>>,
    updaters: HashMap<Layer, U>,
    layouts: Vec<GaugeLayout>,
}

impl GaugeChart<RetainedUpdater> {
    pub fn new(area: Area) -> Self {
        Self::with_factory(area, |_: Layer| RetainedUpdater::new())
    }
}

impl<U: Updater> GaugeChart<U> {
    pub fn with_factory(area: Area, factory: impl UpdaterFactory<U> + 'static) -> Self {
        Self {
            area,
            factory: Box::new(factory),
            updaters: HashMap::default(),
            layouts: Vec::new(),
        }
    }

    pub fn area(&self) -> Area {
        self.area
    }

    /// Takes effect on the next [`set_option`](Self::set_option).
    pub fn set_area(&mut self, area: Area) {
        self.area = area;
    }

    /// Resolve `options`, lay out every gauge, and update each layer once.
    ///
    /// On a configuration error nothing is forwarded and the previous
    /// layouts are kept.
    pub fn set_option(&mut self, options: &GaugeOptions) -> ConfigResult<&[GaugeLayout]> {
        profile_function!();

        let configs = options.resolve()?;
        self.layouts = layout_gauges(configs, self.area);

        for layer in Layer::ALL {
            let factory = &mut self.factory;
            let updater = self.updaters.entry(layer).or_insert_with(|| {
                tracing::trace!(key = layer.key(), "Creating layer updater");
                factory.create(layer)
            });
            updater.update(&LayerSource::new(layer, &self.layouts));
        }

        Ok(&self.layouts)
    }

    /// Layouts from the last successful run.
    pub fn layouts(&self) -> &[GaugeLayout] {
        &self.layouts
    }

    pub fn updater(&self, layer: Layer) -> Option<&U> {
        self.updaters.get(&layer)
    }

    pub fn updater_mut(&mut self, layer: Layer) -> Option<&mut U> {
        self.updaters.get_mut(&layer)
    }
}

impl GaugeChart<RetainedUpdater> {
    /// Latest primitives of every layer, in layer order.
    pub fn primitives(&self) -> Vec<&Primitive> {
        Layer::ALL
            .iter()
            .filter_map(|layer| self.updaters.get(layer))
            .flat_map(|updater| updater.primitives())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GaugeConfig;
    use crate::options::GaugeSeriesOptions;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_updaters_created_once_per_layer() {
        let created = Rc::new(RefCell::new(Vec::new()));
        let sink = created.clone();
        let mut chart = GaugeChart::with_factory(Area::new(100.0, 100.0), move |layer: Layer| {
            sink.borrow_mut().push(layer);
            RetainedUpdater::new()
        });

        let options = GaugeOptions::new().with_series(GaugeSeriesOptions::new());
        chart.set_option(&options).unwrap();
        chart.set_option(&options).unwrap();

        assert_eq!(*created.borrow(), Layer::ALL.to_vec());
        for layer in Layer::ALL {
            assert_eq!(chart.updater(layer).unwrap().update_count(), 2);
        }
    }

    #[test]
    fn test_config_error_keeps_previous_layouts() {
        let mut chart = GaugeChart::new(Area::new(100.0, 100.0));
        chart
            .set_option(&GaugeOptions::new().with_series(GaugeSeriesOptions::new()))
            .unwrap();

        let bad = GaugeOptions::new().with_series(GaugeSeriesOptions::new().with_split_num(0));
        assert!(chart.set_option(&bad).is_err());
        assert_eq!(chart.layouts().len(), 1);
        assert_eq!(chart.layouts()[0].config, GaugeConfig::default());
    }
}
