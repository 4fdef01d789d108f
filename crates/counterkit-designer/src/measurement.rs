//! On-canvas measuring tape.
//!
//! A measurement is drawn in screen space and converted to layout units on
//! completion by dividing by the zoom level in effect at that moment.

use serde::{Deserialize, Serialize};

use crate::model::Point;

/// A measurement being drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveMeasurement {
    pub start: Point,
    pub end: Point,
}

/// A finished measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub id: u64,
    pub start: Point,
    pub end: Point,
    /// Length in layout units.
    pub distance: f64,
}

#[derive(Debug, Clone, Default)]
pub struct MeasurementTool {
    measurements: Vec<Measurement>,
    active: Option<ActiveMeasurement>,
    next_id: u64,
}

impl MeasurementTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    pub fn active(&self) -> Option<&ActiveMeasurement> {
        self.active.as_ref()
    }

    /// Starts a new measurement at `point`, discarding any unfinished one.
    pub fn start(&mut self, point: Point) {
        self.active = Some(ActiveMeasurement {
            start: point,
            end: point,
        });
    }

    /// Moves the free end of the active measurement.
    pub fn update(&mut self, point: Point) {
        if let Some(active) = self.active.as_mut() {
            active.end = point;
        }
    }

    /// Finishes the active measurement and returns its id.
    pub fn complete(&mut self, zoom: f64) -> Option<u64> {
        let active = self.active.take()?;
        self.next_id += 1;
        let id = self.next_id;
        let distance = active.start.distance_to(&active.end) / zoom;
        self.measurements.push(Measurement {
            id,
            start: active.start,
            end: active.end,
            distance,
        });
        tracing::debug!("Measurement {} completed: {:.2}", id, distance);
        Some(id)
    }

    pub fn cancel(&mut self) {
        self.active = None;
    }

    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.measurements.len();
        self.measurements.retain(|m| m.id != id);
        self.measurements.len() != before
    }

    pub fn clear(&mut self) {
        self.measurements.clear();
        self.active = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_at_zoom() {
        let mut tool = MeasurementTool::new();
        tool.start(Point::new(0.0, 0.0));
        tool.update(Point::new(60.0, 80.0));
        let id = tool.complete(2.0).unwrap();
        let m = &tool.measurements()[0];
        assert_eq!(m.id, id);
        assert_eq!(m.distance, 50.0);
        assert!(tool.active().is_none());
    }

    #[test]
    fn test_complete_without_start() {
        let mut tool = MeasurementTool::new();
        tool.update(Point::new(3.0, 3.0));
        assert_eq!(tool.complete(1.0), None);
        assert!(tool.measurements().is_empty());
    }

    #[test]
    fn test_remove_and_ids() {
        let mut tool = MeasurementTool::new();
        for _ in 0..3 {
            tool.start(Point::new(0.0, 0.0));
            tool.update(Point::new(1.0, 0.0));
            tool.complete(1.0);
        }
        assert!(tool.remove(2));
        assert!(!tool.remove(2));
        let ids: Vec<u64> = tool.measurements().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_cancel() {
        let mut tool = MeasurementTool::new();
        tool.start(Point::new(0.0, 0.0));
        tool.cancel();
        assert!(tool.active().is_none());
        tool.clear();
        assert!(tool.measurements().is_empty());
    }
}
