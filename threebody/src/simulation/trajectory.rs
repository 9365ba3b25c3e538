//! Per-body position history
//!
//! `TrajectoryRecorder` keeps one trail per body, either bounded (oldest
//! points dropped first) or unbounded. It is fed from body snapshots after
//! each step and owned by whoever draws or exports the trails.

use std::collections::VecDeque;
use std::io::Write;

use crate::simulation::states::{Body, NVec2};

#[derive(Debug, Clone)]
pub struct TrajectoryRecorder {
    capacity: Option<usize>, // None = keep everything
    trails: Vec<VecDeque<NVec2>>,
}

impl TrajectoryRecorder {
    pub fn new(bodies: usize, capacity: Option<usize>) -> Self {
        Self {
            capacity,
            trails: vec![VecDeque::new(); bodies],
        }
    }

    pub fn unbounded(bodies: usize) -> Self {
        Self::new(bodies, None)
    }

    pub fn bounded(bodies: usize, capacity: usize) -> Self {
        Self::new(bodies, Some(capacity))
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.trails.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trails.iter().all(VecDeque::is_empty)
    }

    /// Append the current position of every body
    pub fn record(&mut self, bodies: &[Body]) {
        if self.trails.len() != bodies.len() {
            self.trails.resize(bodies.len(), VecDeque::new());
        }

        for (trail, b) in self.trails.iter_mut().zip(bodies) {
            trail.push_back(b.x);
            if let Some(cap) = self.capacity {
                while trail.len() > cap {
                    trail.pop_front();
                }
            }
        }
    }

    /// Drop every recorded point, keeping one (empty) trail per body
    pub fn clear(&mut self) {
        for trail in &mut self.trails {
            trail.clear();
        }
    }

    /// Points for body `i`, oldest first
    pub fn trail(&self, i: usize) -> Option<&VecDeque<NVec2>> {
        self.trails.get(i)
    }

    pub fn trails(&self) -> &[VecDeque<NVec2>] {
        &self.trails
    }

    /// Write the history as CSV, one row per recorded step:
    /// `step,x0,y0,x1,y1,...`
    pub fn write_csv<W: Write>(&self, writer: W) -> csv::Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);

        let mut header = vec!["step".to_string()];
        for i in 0..self.trails.len() {
            header.push(format!("x{}", i));
            header.push(format!("y{}", i));
        }
        wtr.write_record(&header)?;

        let rows = self.trails.iter().map(VecDeque::len).min().unwrap_or(0);
        for step in 0..rows {
            let mut record = vec![step.to_string()];
            for trail in &self.trails {
                let p = trail[step];
                record.push(p.x.to_string());
                record.push(p.y.to_string());
            }
            wtr.write_record(&record)?;
        }

        wtr.flush()?;
        Ok(())
    }
}
