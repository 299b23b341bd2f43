use std::time::Duration;

use mazerace_core::Point;

/// What a stats card shows for one algorithm at the current playback
/// position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProgressStats {
    /// Path cells the robot has covered, the current one included.
    pub steps: usize,
    /// Cells revealed by the scan so far.
    pub scanned: usize,
    /// Search time scaled by how far the playback has got.
    pub time: Duration,
}

impl ProgressStats {
    /// Interpolate the stats for a robot at path index `robot` and a scan
    /// that has revealed `scan` cells, given the search's total time.
    ///
    /// Progress is the larger of the robot's and the scan's completion
    /// ratio. Everything is zero when there is no path or nothing was
    /// explored.
    pub fn compute(
        path: &[Point],
        explored: &[Point],
        robot: usize,
        scan: usize,
        total: Duration,
    ) -> Self {
        if path.is_empty() || explored.is_empty() {
            return Self::default();
        }

        let steps = (robot + 1).min(path.len());
        let scanned = scan.min(explored.len());

        let move_progress = robot as f64 / (path.len() - 1).max(1) as f64;
        let scan_progress = scan as f64 / explored.len() as f64;
        let progress = move_progress.max(scan_progress).clamp(0.0, 1.0);

        Self {
            steps,
            scanned,
            time: total.mul_f64(progress),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(n: i32) -> Vec<Point> {
        (0..n).map(|c| Point::new(1, c)).collect()
    }

    #[test]
    fn empty_inputs_give_zero() {
        let total = Duration::from_millis(10);
        assert_eq!(ProgressStats::compute(&[], &line(3), 0, 3, total), ProgressStats::default());
        assert_eq!(ProgressStats::compute(&line(3), &[], 0, 0, total), ProgressStats::default());
    }

    #[test]
    fn scan_half_done() {
        let s = ProgressStats::compute(&line(5), &line(10), 0, 5, Duration::from_millis(100));
        assert_eq!(s.steps, 1);
        assert_eq!(s.scanned, 5);
        assert_eq!(s.time, Duration::from_millis(50));
    }

    #[test]
    fn robot_progress_dominates_after_scan() {
        let s = ProgressStats::compute(&line(5), &line(10), 4, 10, Duration::from_millis(100));
        assert_eq!(s.steps, 5);
        assert_eq!(s.scanned, 10);
        assert_eq!(s.time, Duration::from_millis(100));
    }

    #[test]
    fn indices_are_clamped() {
        let s = ProgressStats::compute(&line(3), &line(4), 9, 99, Duration::from_secs(1));
        assert_eq!(s.steps, 3);
        assert_eq!(s.scanned, 4);
        assert_eq!(s.time, Duration::from_secs(1));
    }

    #[test]
    fn single_cell_path() {
        let p = vec![Point::new(1, 1)];
        let s = ProgressStats::compute(&p, &p, 0, 1, Duration::from_millis(2));
        assert_eq!(s.steps, 1);
        assert_eq!(s.time, Duration::from_millis(2));
    }
}
